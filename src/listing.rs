//! Category / search / sort pipeline shared by the list pages.

use std::cmp::Reverse;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("not a count: {0}")]
    InvalidCount(String),
}

/// A record that can be narrowed by category and free-text search.
pub trait Listing {
    type Category: PartialEq + Copy;

    fn category(&self) -> Self::Category;
    fn title(&self) -> &str;
    /// Excerpt or description.
    fn summary(&self) -> &str;
    /// Tags or technologies.
    fn tags(&self) -> &[&'static str];
}

/// A record that can be ordered by the blog sort keys.
pub trait Ranked {
    fn published(&self) -> NaiveDate;
    fn views(&self) -> u64;
    fn likes(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn admits(&self, category: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Views,
    Likes,
}

impl SortKey {
    pub fn all() -> [SortKey; 3] {
        [Self::Date, Self::Views, Self::Likes]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Views => "views",
            Self::Likes => "likes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Latest",
            Self::Views => "Most Viewed",
            Self::Likes => "Most Liked",
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "views" => Ok(Self::Views),
            "likes" => Ok(Self::Likes),
            _ => Err(ParseError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Active filter state of a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<C> {
    pub category: CategoryFilter<C>,
    pub search: String,
}

impl<C> Default for ListQuery<C> {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
        }
    }
}

impl<C: PartialEq + Copy> ListQuery<C> {
    pub fn new(category: CategoryFilter<C>, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    pub fn matches<T: Listing<Category = C>>(&self, record: &T) -> bool {
        self.category.admits(&record.category()) && matches_search(record, &self.search)
    }

    /// Category filter then text search. The source slice is never touched.
    pub fn apply<'a, T: Listing<Category = C>>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    /// The full pipeline: category, search, then a stable descending sort.
    pub fn apply_sorted<'a, T>(&self, records: &'a [T], key: SortKey) -> Vec<&'a T>
    where
        T: Listing<Category = C> + Ranked,
    {
        let mut out = self.apply(records);
        sort_records(&mut out, key);
        out
    }
}

fn matches_search<T: Listing>(record: &T, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.title().to_lowercase().contains(&needle)
        || record.summary().to_lowercase().contains(&needle)
        || record.tags().iter().any(|t| t.to_lowercase() == needle)
}

/// Stable sort, most recent / most viewed / most liked first.
pub fn sort_records<T: Ranked>(records: &mut [&T], key: SortKey) {
    match key {
        SortKey::Date => records.sort_by_key(|r| Reverse(r.published())),
        SortKey::Views => records.sort_by_key(|r| Reverse(r.views())),
        SortKey::Likes => records.sort_by_key(|r| Reverse(r.likes())),
    }
}

/// Parses display counts such as `"156"`, `"2.5k"` or `"3k"`.
pub fn parse_count(s: &str) -> Result<u64, ParseError> {
    let s = s.trim();
    let invalid = || ParseError::InvalidCount(s.to_string());
    match s.strip_suffix(['k', 'K']) {
        Some(thousands) => {
            let n: f64 = thousands.parse().map_err(|_| invalid())?;
            if !n.is_finite() || n < 0.0 {
                return Err(invalid());
            }
            Ok((n * 1000.0).round() as u64)
        }
        None => s.parse().map_err(|_| invalid()),
    }
}

/// Count for sorting; unreadable values rank last.
pub fn count_or_zero(s: &str) -> u64 {
    parse_count(s).unwrap_or_else(|e| {
        log::warn!("{e}");
        0
    })
}

/// Renders a count the way the cards show it: `2.5k` above 1000.
pub fn format_count(n: u64) -> String {
    if n > 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Ops,
        Web,
    }

    #[derive(Debug)]
    struct Item {
        title: &'static str,
        summary: &'static str,
        tags: &'static [&'static str],
        kind: Kind,
        date: NaiveDate,
        views: &'static str,
        likes: &'static str,
    }

    impl Listing for Item {
        type Category = Kind;
        fn category(&self) -> Kind {
            self.kind
        }
        fn title(&self) -> &str {
            self.title
        }
        fn summary(&self) -> &str {
            self.summary
        }
        fn tags(&self) -> &[&'static str] {
            self.tags
        }
    }

    impl Ranked for Item {
        fn published(&self) -> NaiveDate {
            self.date
        }
        fn views(&self) -> u64 {
            count_or_zero(self.views)
        }
        fn likes(&self) -> u64 {
            count_or_zero(self.likes)
        }
    }

    fn item(title: &'static str, kind: Kind, day: u32, views: &'static str, likes: &'static str) -> Item {
        Item {
            title,
            summary: "shipping containers to the cloud",
            tags: &["Docker", "AWS"],
            kind,
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            views,
            likes,
        }
    }

    fn items() -> Vec<Item> {
        vec![
            item("Terraform at scale", Kind::Ops, 10, "1.8k", "98"),
            item("EKS from zero", Kind::Ops, 15, "2.5k", "156"),
            item("DevOps trends", Kind::Web, 5, "3.2k", "234"),
        ]
    }

    fn titles(v: &[&Item]) -> Vec<&'static str> {
        v.iter().map(|i| i.title).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let items = items();
        let out = ListQuery::<Kind>::default().apply(&items);
        assert_eq!(titles(&out), vec!["Terraform at scale", "EKS from zero", "DevOps trends"]);
    }

    #[test]
    fn test_category_then_unmatched_search_is_empty() {
        let items = items();
        let all = ListQuery::<Kind>::default().apply(&items);
        let ops = ListQuery::new(CategoryFilter::Only(Kind::Ops), "").apply(&items);
        assert_eq!(ops.len(), 2);
        let none = ListQuery::new(CategoryFilter::Only(Kind::Ops), "kafka").apply(&items);
        assert!(none.is_empty());
        assert_ne!(none.len(), all.len());
    }

    #[test]
    fn test_search_hits_title_summary_and_whole_tags() {
        let items = items();
        assert_eq!(ListQuery::<Kind>::new(CategoryFilter::All, "EKS").apply(&items).len(), 1);
        assert_eq!(ListQuery::<Kind>::new(CategoryFilter::All, "CLOUD").apply(&items).len(), 3);
        assert_eq!(ListQuery::<Kind>::new(CategoryFilter::All, "docker").apply(&items).len(), 3);
        // tags must match whole, not by prefix
        assert!(ListQuery::<Kind>::new(CategoryFilter::All, "dock").apply(&items).is_empty());
    }

    #[test]
    fn test_sort_by_likes_descending() {
        let items = items();
        let out = ListQuery::<Kind>::default().apply_sorted(&items, SortKey::Likes);
        let likes: Vec<_> = out.iter().map(|i| i.likes).collect();
        assert_eq!(likes, vec!["234", "156", "98"]);
    }

    #[test]
    fn test_sort_by_views_reads_thousands_suffix() {
        let items = items();
        let out = ListQuery::<Kind>::default().apply_sorted(&items, SortKey::Views);
        assert_eq!(titles(&out), vec!["DevOps trends", "EKS from zero", "Terraform at scale"]);
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let items = items();
        let out = ListQuery::<Kind>::default().apply_sorted(&items, SortKey::default());
        assert_eq!(titles(&out), vec!["EKS from zero", "Terraform at scale", "DevOps trends"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let items = vec![
            item("first", Kind::Ops, 1, "10", "5"),
            item("second", Kind::Ops, 2, "10", "5"),
            item("third", Kind::Ops, 3, "10", "7"),
        ];
        let out = ListQuery::<Kind>::default().apply_sorted(&items, SortKey::Likes);
        assert_eq!(titles(&out), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("156"), Ok(156));
        assert_eq!(parse_count("2.5k"), Ok(2500));
        assert_eq!(parse_count("3k"), Ok(3000));
        assert!(parse_count("lots").is_err());
        assert!(parse_count("-1k").is_err());
        assert_eq!(count_or_zero("n/a"), 0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1000");
        assert_eq!(format_count(2501), "2.5k");
        assert_eq!(format_count(9501), "9.5k");
    }

    #[test]
    fn test_sort_key_round_trip_ids() {
        for key in SortKey::all() {
            assert_eq!(key.id().parse::<SortKey>(), Ok(key));
        }
        assert!("oldest".parse::<SortKey>().is_err());
    }
}
