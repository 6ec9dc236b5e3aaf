use std::fs::File;

use portfolio_site::data::posts::POSTS;
use portfolio_site::listing::{sort_records, SortKey};
use portfolio_site::rss::build_channel;

fn main() {
    let mut posts: Vec<_> = POSTS.iter().collect();
    sort_records(&mut posts, SortKey::Date);
    let posts: Vec<_> = posts.into_iter().cloned().collect();
    let channel = build_channel(&posts);

    let file = File::create("public/rss.xml").expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
    println!("wrote {} items to public/rss.xml", channel.items().len());
}
