use chrono::NaiveTime;
use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::config::{SITE_NAME, SITE_URL};
use crate::data::posts::BlogPost;
use crate::data::profile::{CONTACT, NAME};

pub fn build_channel(posts: &[BlogPost]) -> Channel {
    let items = posts
        .iter()
        .map(|p| {
            let link = format!("{SITE_URL}/blog#{}", p.slug);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            let pub_date = p.date.and_time(NaiveTime::MIN).and_utc().to_rfc2822();
            ItemBuilder::default()
                .title(p.title.to_string())
                .description(p.excerpt.to_string())
                .author(format!("{} ({NAME})", CONTACT.email))
                .categories(
                    p.tags
                        .iter()
                        .map(|t| rss::CategoryBuilder::default().name(*t).build())
                        .collect::<Vec<_>>(),
                )
                .pub_date(pub_date)
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE_URL}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{SITE_NAME} blog"))
        .description("DevOps, cloud infrastructure and full-stack notes.")
        .link(format!("{SITE_URL}/blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::posts::POSTS;

    #[test]
    fn test_channel_has_every_post() {
        let channel = build_channel(POSTS);
        assert_eq!(channel.items().len(), POSTS.len());
        let first = &channel.items()[0];
        assert_eq!(first.title(), Some(POSTS[0].title));
        assert_eq!(first.pub_date(), Some("Wed, 15 Jan 2025 00:00:00 +0000"));
        assert_eq!(first.categories().len(), POSTS[0].tags.len());
    }
}
