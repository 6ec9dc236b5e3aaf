use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::listing::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Cloud,
    Containers,
    Infrastructure,
    Devops,
    Development,
    Database,
}

impl SkillCategory {
    pub fn all() -> [SkillCategory; 6] {
        [
            Self::Cloud,
            Self::Containers,
            Self::Infrastructure,
            Self::Devops,
            Self::Development,
            Self::Database,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Containers => "containers",
            Self::Infrastructure => "infrastructure",
            Self::Devops => "devops",
            Self::Development => "development",
            Self::Database => "database",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Cloud => "Cloud Platforms",
            Self::Containers => "Container & Orchestration",
            Self::Infrastructure => "Infrastructure as Code",
            Self::Devops => "DevOps & Automation",
            Self::Development => "Development Stack",
            Self::Database => "Databases",
        }
    }

    /// Tailwind text color for the category icon.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Cloud => "text-blue-500",
            Self::Containers => "text-blue-400",
            Self::Infrastructure => "text-purple-500",
            Self::Devops => "text-green-500",
            Self::Development => "text-orange-500",
            Self::Database => "text-red-500",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SkillCategory {
    type Err = ParseError;

    /// Matches the whole id, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub category: SkillCategory,
    pub level: u8,
}

impl Skill {
    pub const fn new(
        name: &'static str,
        icon: &'static str,
        category: SkillCategory,
        level: u8,
    ) -> Self {
        assert!(level <= 100, "proficiency must be within 0..=100");
        Self {
            name,
            icon,
            category,
            level,
        }
    }
}

macro_rules! skill {
    ($name:literal, $icon:literal, $cat:ident, $level:literal) => {
        Skill::new(
            $name,
            concat!(
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/",
                $icon,
                ".svg"
            ),
            SkillCategory::$cat,
            $level,
        )
    };
}

pub static SKILLS: &[Skill] = &[
    skill!("AWS", "amazonwebservices/amazonwebservices-original", Cloud, 85),
    skill!("OCI", "oracle/oracle-original", Cloud, 80),
    skill!("Docker", "docker/docker-plain", Containers, 90),
    skill!("Kubernetes", "kubernetes/kubernetes-plain", Containers, 85),
    skill!("Terraform", "terraform/terraform-plain", Infrastructure, 80),
    skill!("Linux", "linux/linux-plain", Devops, 90),
    skill!("Jenkins", "jenkins/jenkins-plain", Devops, 75),
    skill!("GitHub Actions", "github/github-original-wordmark", Devops, 85),
    skill!("GitLab CI", "gitlab/gitlab-plain", Devops, 80),
    skill!("Git", "git/git-plain", Devops, 95),
    skill!("Java", "java/java-plain", Development, 85),
    skill!("JavaScript", "javascript/javascript-plain", Development, 90),
    skill!("Node.js", "nodejs/nodejs-plain", Development, 88),
    skill!("React.js", "react/react-plain", Development, 90),
    skill!("MongoDB", "mongodb/mongodb-plain", Database, 80),
    skill!("MySQL", "mysql/mysql-plain", Database, 85),
    skill!("Oracle SQL", "oracle/oracle-plain", Database, 75),
    skill!("HTML", "html5/html5-plain", Development, 95),
    skill!("CSS", "css3/css3-plain", Development, 90),
];

/// A read-only view over a list of skills, grouped by category on demand.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new(SKILLS.to_vec())
    }
}

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn in_category(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }

    /// Every category in display order with its skills; empty categories
    /// are kept so the layout stays stable.
    pub fn grouped(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
        SkillCategory::all()
            .into_iter()
            .map(|c| (c, self.in_category(c).collect()))
            .collect()
    }

    /// Case-insensitive match on the whole skill name.
    pub fn find(&self, name: &str) -> Option<&Skill> {
        let name = name.to_lowercase();
        self.skills.iter().find(|s| s.name.to_lowercase() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_grouping_covers_every_skill_once() {
        let catalog = SkillCatalog::default();
        let grouped = catalog.grouped();
        assert_eq!(grouped.len(), 6);
        let total: usize = grouped.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, SKILLS.len());
        let cloud = &grouped[0];
        assert_eq!(cloud.0, SkillCategory::Cloud);
        assert_eq!(
            cloud.1.iter().map(|s| s.name).collect::<Vec<_>>(),
            vec!["AWS", "OCI"]
        );
    }

    #[test]
    fn test_find_is_case_insensitive_and_whole_name() {
        let catalog = SkillCatalog::default();
        assert_eq!(catalog.find("github actions").map(|s| s.name), Some("GitHub Actions"));
        assert_eq!(catalog.find("DOCKER").map(|s| s.level), Some(90));
        assert!(catalog.find("dock").is_none());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Cloud".parse::<SkillCategory>().unwrap(), SkillCategory::Cloud);
        assert!("clou".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn test_icon_urls_point_at_devicon() {
        assert!(SKILLS
            .iter()
            .all(|s| s.icon.starts_with("https://cdn.jsdelivr.net/gh/devicons/")));
        assert!(SKILLS.iter().all(|s| s.icon.ends_with(".svg")));
    }
}
