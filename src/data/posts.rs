use chrono::NaiveDate;
use serde::Serialize;

use crate::listing::{count_or_zero, Listing, Ranked};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PostCategory {
    #[serde(rename = "DevOps")]
    DevOps,
    #[serde(rename = "Cloud Infrastructure")]
    CloudInfrastructure,
    #[serde(rename = "Full-Stack")]
    FullStack,
}

impl PostCategory {
    pub fn all() -> [PostCategory; 3] {
        [Self::DevOps, Self::CloudInfrastructure, Self::FullStack]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DevOps => "DevOps",
            Self::CloudInfrastructure => "Cloud Infrastructure",
            Self::FullStack => "Full-Stack",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::DevOps => "bg-green-500/20 text-green-400 border-green-500/30",
            Self::CloudInfrastructure => "bg-blue-500/20 text-blue-400 border-blue-500/30",
            Self::FullStack => "bg-purple-500/20 text-purple-400 border-purple-500/30",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Beginner => "bg-green-500/20 text-green-400",
            Self::Intermediate => "bg-yellow-500/20 text-yellow-400",
            Self::Advanced => "bg-red-500/20 text-red-400",
        }
    }
}

/// Blog post metadata. The markdown body lives in `blog/<slug>.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub category: PostCategory,
    pub difficulty: Difficulty,
    pub read_time: &'static str,
    pub date: NaiveDate,
    pub featured: bool,
    pub views: &'static str,
    pub likes: &'static str,
    pub comments: &'static str,
    pub excerpt: &'static str,
    pub tags: &'static [&'static str],
}

impl Listing for BlogPost {
    type Category = PostCategory;

    fn category(&self) -> PostCategory {
        self.category
    }

    fn title(&self) -> &str {
        self.title
    }

    fn summary(&self) -> &str {
        self.excerpt
    }

    fn tags(&self) -> &[&'static str] {
        self.tags
    }
}

impl Ranked for BlogPost {
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

const fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(d) => d,
        None => panic!("invalid publish date"),
    }
}

pub static POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        slug: "eks-gitops-from-zero",
        title: "From Zero to Hero: Building a Production-Grade EKS Cluster with GitOps",
        category: PostCategory::DevOps,
        difficulty: Difficulty::Intermediate,
        read_time: "8 min read",
        date: date(2025, 1, 15),
        featured: true,
        views: "2.5k",
        likes: "156",
        comments: "23",
        excerpt: "Learn how to set up a complete EKS cluster with ArgoCD for GitOps deployment, including best practices for production environments.",
        tags: &["AWS", "EKS", "GitOps", "ArgoCD", "Kubernetes"],
    },
    BlogPost {
        id: 2,
        slug: "terraform-aws-best-practices",
        title: "Infrastructure as Code: Terraform Best Practices for AWS",
        category: PostCategory::CloudInfrastructure,
        difficulty: Difficulty::Advanced,
        read_time: "12 min read",
        date: date(2025, 1, 10),
        featured: false,
        views: "1.8k",
        likes: "98",
        comments: "15",
        excerpt: "Master Terraform infrastructure management with proven patterns, state management, and security practices for AWS deployments.",
        tags: &["Terraform", "AWS", "IaC", "Security", "Best Practices"],
    },
    BlogPost {
        id: 3,
        slug: "devops-trends-2025",
        title: "DevOps Trends 2025: AI, GitOps, and Cloud Native Revolution",
        category: PostCategory::DevOps,
        difficulty: Difficulty::Beginner,
        read_time: "6 min read",
        date: date(2025, 1, 5),
        featured: false,
        views: "3.2k",
        likes: "234",
        comments: "41",
        excerpt: "Explore the latest DevOps trends shaping the industry in 2025, from AI-powered automation to enhanced GitOps workflows.",
        tags: &["Trends", "AI", "GitOps", "Cloud Native", "Automation"],
    },
    BlogPost {
        id: 4,
        slug: "websocket-architecture-nodejs",
        title: "Real-time Communication: WebSocket Architecture with Node.js",
        category: PostCategory::FullStack,
        difficulty: Difficulty::Intermediate,
        read_time: "10 min read",
        date: date(2024, 12, 28),
        featured: true,
        views: "1.9k",
        likes: "127",
        comments: "19",
        excerpt: "Build scalable real-time applications using WebSocket architecture with Node.js, Redis, and message queues.",
        tags: &["WebSocket", "Node.js", "Redis", "Real-time", "Architecture"],
    },
];

pub fn featured_posts() -> impl Iterator<Item = &'static BlogPost> {
    POSTS.iter().filter(|p| p.featured)
}

pub fn post_by_id(id: u32) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::listing::{CategoryFilter, ListQuery, SortKey};

    #[test]
    fn test_ids_and_slugs_are_unique() {
        let ids: HashSet<_> = POSTS.iter().map(|p| p.id).collect();
        let slugs: HashSet<_> = POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(ids.len(), POSTS.len());
        assert_eq!(slugs.len(), POSTS.len());
    }

    #[test]
    fn test_featured() {
        let ids: Vec<_> = featured_posts().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(post_by_id(3).map(|p| p.slug), Some("devops-trends-2025"));
        assert!(post_by_id(99).is_none());
    }

    #[test]
    fn test_blog_pipeline_over_static_posts() {
        let q = ListQuery::new(CategoryFilter::Only(PostCategory::DevOps), "gitops");
        let ids: Vec<_> = q.apply_sorted(POSTS, SortKey::Likes).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);

        let by_date: Vec<_> = ListQuery::<PostCategory>::default()
            .apply_sorted(POSTS, SortKey::Date)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(by_date, vec![1, 2, 3, 4]);

        let by_views: Vec<_> = ListQuery::<PostCategory>::default()
            .apply_sorted(POSTS, SortKey::Views)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(by_views, vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_tag_search_is_whole_word() {
        let q = ListQuery::<PostCategory>::new(CategoryFilter::All, "redis");
        let ids: Vec<_> = q.apply(POSTS).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4]);
    }
}
