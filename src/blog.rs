use std::collections::HashMap;
use std::sync::LazyLock;

use dashmap::DashMap;
use pulldown_cmark::{Options, Parser};
use rust_embed::Embed;
use thiserror::Error;

use crate::data::posts::BlogPost;
use crate::listing::{count_or_zero, format_count};

/// Rendered post bodies, keyed by post id.
pub static GLOBAL_POST_CACHE: LazyLock<DashMap<u32, String>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("no body for post `{0}`")]
    NotFound(String),
    #[error("post `{0}` is not valid utf-8")]
    Encoding(String),
}

/// Raw markdown of a post, looked up as `blog/<slug>.md`.
pub fn post_body(slug: &str) -> Result<String, BlogError> {
    let file = Assets::get(&format!("{slug}.md")).ok_or_else(|| BlogError::NotFound(slug.into()))?;
    String::from_utf8(file.data.into()).map_err(|_| BlogError::Encoding(slug.into()))
}

pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    html_output
}

/// HTML body of `post`, rendered once and then served from the cache.
pub fn render_post(post: &BlogPost) -> Result<String, BlogError> {
    if let Some(html) = GLOBAL_POST_CACHE.get(&post.id) {
        return Ok(html.clone());
    }
    let html = markdown_to_html(&post_body(post.slug)?);
    log::debug!("rendered post {} ({} bytes)", post.slug, html.len());
    GLOBAL_POST_CACHE.insert(post.id, html.clone());
    Ok(html)
}

/// Average of the `N min read` labels, rounded down.
pub fn average_read_minutes(posts: &[BlogPost]) -> u32 {
    let minutes: Vec<u32> = posts
        .iter()
        .filter_map(|p| p.read_time.split_whitespace().next()?.parse().ok())
        .collect();
    if minutes.is_empty() {
        return 0;
    }
    minutes.iter().sum::<u32>() / minutes.len() as u32
}

/// In-memory view counts. Each post starts from its display count and gains
/// one view per open; nothing survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCounter {
    counts: HashMap<u32, u64>,
}

impl ViewCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an open and returns the new count.
    pub fn open(&mut self, post: &BlogPost) -> u64 {
        let count = self
            .counts
            .entry(post.id)
            .or_insert_with(|| count_or_zero(post.views));
        *count = count.saturating_add(1);
        *count
    }

    pub fn views(&self, post: &BlogPost) -> u64 {
        self.counts
            .get(&post.id)
            .copied()
            .unwrap_or_else(|| count_or_zero(post.views))
    }

    pub fn display(&self, post: &BlogPost) -> String {
        format_count(self.views(post))
    }

    pub fn total(&self, posts: &[BlogPost]) -> u64 {
        posts.iter().map(|p| self.views(p)).sum()
    }
}
