use serde::Serialize;

use super::posts::PostCategory;
use crate::listing::CategoryFilter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub start: &'static str,
    pub end: &'static str,
    pub duration: &'static str,
}

/// One entry of a case study's impact panel. Each variant carries exactly
/// the fields its metric is reported with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "metric", rename_all = "camelCase")]
pub enum ImpactMetric {
    DeploymentTime {
        before: &'static str,
        after: &'static str,
        improvement: &'static str,
    },
    Cost {
        before: &'static str,
        after: &'static str,
        reduction: &'static str,
    },
    Availability {
        uptime: &'static str,
        improvement: &'static str,
    },
    Scalability {
        capacity: &'static str,
        improvement: &'static str,
    },
    Performance {
        improvement: &'static str,
    },
}

impl ImpactMetric {
    pub fn key(&self) -> &'static str {
        match self {
            Self::DeploymentTime { .. } => "deploymentTime",
            Self::Cost { .. } => "cost",
            Self::Availability { .. } => "availability",
            Self::Scalability { .. } => "scalability",
            Self::Performance { .. } => "performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DeploymentTime { .. } => "Deployment Time",
            Self::Cost { .. } => "Cost",
            Self::Availability { .. } => "Availability",
            Self::Scalability { .. } => "Scalability",
            Self::Performance { .. } => "Performance",
        }
    }

    /// The headline delta shown in large type.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::DeploymentTime { improvement, .. }
            | Self::Availability { improvement, .. }
            | Self::Scalability { improvement, .. }
            | Self::Performance { improvement } => improvement,
            Self::Cost { reduction, .. } => reduction,
        }
    }

    /// Secondary `label: value` rows under the headline.
    pub fn details(&self) -> Vec<(&'static str, &'static str)> {
        match *self {
            Self::DeploymentTime { before, after, .. } | Self::Cost { before, after, .. } => {
                vec![("Before", before), ("After", after)]
            }
            Self::Availability { uptime, .. } => vec![("Uptime", uptime)],
            Self::Scalability { capacity, .. } => vec![("Capacity", capacity)],
            Self::Performance { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Architecture {
    pub components: &'static [&'static str],
    pub pattern: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub category: PostCategory,
    pub featured: bool,
    pub timeline: Timeline,
    pub challenge: &'static str,
    pub solution: &'static [&'static str],
    pub impact: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub metrics: &'static [ImpactMetric],
    pub architecture: Option<Architecture>,
}

impl CaseStudy {
    pub fn metric(&self, key: &str) -> Option<&ImpactMetric> {
        self.metrics.iter().find(|m| m.key() == key)
    }
}

/// Tabs of the case study detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyTab {
    #[default]
    Overview,
    Solution,
    Results,
}

impl StudyTab {
    pub fn all() -> [StudyTab; 3] {
        [Self::Overview, Self::Solution, Self::Results]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Solution => "Solution",
            Self::Results => "Results",
        }
    }
}

pub static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: 1,
        title: "Amazon Clone — EKS & ArgoCD Deployment",
        subtitle: "E-commerce Platform with GitOps",
        category: PostCategory::DevOps,
        featured: true,
        timeline: Timeline {
            start: "Sep 2024",
            end: "Nov 2024",
            duration: "2 months",
        },
        challenge: "Migrate a complex e-commerce platform to a scalable Kubernetes infrastructure while implementing GitOps practices for automated deployments and ensuring zero-downtime updates.",
        solution: &[
            "Designed and implemented production-grade EKS cluster with multi-AZ deployment",
            "Set up ArgoCD for GitOps-based continuous deployment with progressive delivery",
            "Implemented automated CI/CD pipelines with GitHub Actions and Docker",
            "Configured monitoring and alerting with Prometheus and Grafana",
            "Established security practices with RBAC, network policies, and image scanning",
        ],
        impact: &[
            "Reduced deployment time from 45 minutes to 5 minutes",
            "Achieved 99.9% uptime with automated failover",
            "Decreased infrastructure costs by 30% through autoscaling",
            "Improved developer productivity with self-service deployments",
            "Enhanced security posture with automated compliance checks",
        ],
        technologies: &["AWS EKS", "ArgoCD", "GitOps", "Kubernetes", "Docker", "Terraform", "GitHub Actions"],
        metrics: &[
            ImpactMetric::DeploymentTime {
                before: "45 min",
                after: "8 min",
                improvement: "82%",
            },
            ImpactMetric::Cost {
                before: "$2,400/mo",
                after: "$1,800/mo",
                reduction: "25%",
            },
            ImpactMetric::Availability {
                uptime: "99.5%",
                improvement: "1.5%",
            },
            ImpactMetric::Scalability {
                capacity: "5x",
                improvement: "500%",
            },
        ],
        architecture: Some(Architecture {
            components: &["EKS Cluster", "ArgoCD", "Application Pods", "Load Balancers", "Database", "Cache Layer"],
            pattern: "Microservices with GitOps",
        }),
    },
    CaseStudy {
        id: 2,
        title: "Realtime Chat Application",
        subtitle: "WebSocket Architecture with Scaling",
        category: PostCategory::FullStack,
        featured: false,
        timeline: Timeline {
            start: "Oct 2024",
            end: "Dec 2024",
            duration: "3 months",
        },
        challenge: "Build a real-time chat application capable of handling thousands of concurrent users with message persistence, typing indicators, and file sharing capabilities.",
        solution: &[
            "Implemented WebSocket-based real-time communication architecture",
            "Designed horizontal scaling strategy with Redis Pub/Sub for session sharing",
            "Created message queue system for handling high message volumes",
            "Built responsive React frontend with real-time UI updates",
            "Implemented end-to-end encryption for secure communications",
        ],
        impact: &[
            "Supports 10,000+ concurrent users seamlessly",
            "Achieved <100ms message delivery latency",
            "Reduced server costs by 40% through efficient resource usage",
            "Improved user engagement by 65% with instant messaging",
            "Maintained 99.8% uptime with automatic scaling",
        ],
        technologies: &["Node.js", "WebSocket", "Redis", "MongoDB", "React", "Socket.io", "AWS"],
        metrics: &[
            ImpactMetric::Performance { improvement: "80%" },
            ImpactMetric::Scalability {
                capacity: "500+ users",
                improvement: "300%",
            },
            ImpactMetric::Availability {
                uptime: "99.2%",
                improvement: "1.2%",
            },
        ],
        architecture: Some(Architecture {
            components: &["WebSocket Server", "Redis Cluster", "MongoDB", "React Client", "CDN", "Load Balancer"],
            pattern: "Real-time with Horizontal Scaling",
        }),
    },
    CaseStudy {
        id: 3,
        title: "Cloud Infrastructure Automation",
        subtitle: "Multi-Cloud DevOps Pipeline",
        category: PostCategory::CloudInfrastructure,
        featured: true,
        timeline: Timeline {
            start: "Aug 2024",
            end: "Oct 2024",
            duration: "3 months",
        },
        challenge: "Design and implement a comprehensive cloud infrastructure automation solution that supports multi-cloud deployments with consistent security, monitoring, and governance across AWS, Azure, and GCP.",
        solution: &[
            "Created unified Infrastructure as Code templates using Terraform",
            "Implemented automated security scanning and compliance checking",
            "Built centralized logging and monitoring with ELK stack",
            "Designed disaster recovery and backup automation",
            "Established governance frameworks with policy-as-code",
        ],
        impact: &[
            "Reduced infrastructure provisioning time by 75%",
            "Achieved consistent security posture across all cloud providers",
            "Decreased compliance violations by 90%",
            "Improved disaster recovery time from hours to minutes",
            "Enhanced resource utilization efficiency by 45%",
        ],
        technologies: &["Terraform", "AWS", "Azure", "GCP", "Ansible", "Jenkins", "ELK Stack"],
        metrics: &[
            ImpactMetric::DeploymentTime {
                before: "4 hours",
                after: "45 min",
                improvement: "81%",
            },
            ImpactMetric::Cost {
                before: "$3,200/mo",
                after: "$2,400/mo",
                reduction: "25%",
            },
            ImpactMetric::Performance { improvement: "120%" },
        ],
        architecture: Some(Architecture {
            components: &["Terraform Modules", "CI/CD Pipeline", "Security Scanning", "Monitoring", "Backup System"],
            pattern: "Multi-Cloud IaC",
        }),
    },
];

pub fn study_by_id(id: u32) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|s| s.id == id)
}

/// Studies admitted by `filter`, in catalog order.
pub fn studies_in(filter: CategoryFilter<PostCategory>) -> Vec<&'static CaseStudy> {
    CASE_STUDIES
        .iter()
        .filter(|s| filter.admits(&s.category))
        .collect()
}

/// The study shown before the user picks one.
pub fn default_study() -> Option<&'static CaseStudy> {
    CASE_STUDIES.first()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_category_filter() {
        let ids = |f| studies_in(f).iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids(CategoryFilter::All), vec![1, 2, 3]);
        assert_eq!(ids(CategoryFilter::Only(PostCategory::DevOps)), vec![1]);
        assert_eq!(ids(CategoryFilter::Only(PostCategory::FullStack)), vec![2]);
        assert_eq!(ids(CategoryFilter::Only(PostCategory::CloudInfrastructure)), vec![3]);
    }

    #[test]
    fn test_first_study_is_selected_by_default() {
        assert_eq!(default_study().map(|s| s.id), Some(1));
    }

    #[test]
    fn test_metric_keys_unique_per_study() {
        for study in CASE_STUDIES {
            let keys: HashSet<_> = study.metrics.iter().map(ImpactMetric::key).collect();
            assert_eq!(keys.len(), study.metrics.len(), "duplicate metric in {}", study.title);
        }
    }

    #[test]
    fn test_metric_lookup_by_key() {
        let study = study_by_id(2).unwrap();
        assert_eq!(
            study.metric("performance"),
            Some(&ImpactMetric::Performance { improvement: "80%" })
        );
        assert!(study.metric("cost").is_none());
        assert_eq!(study.metric("scalability").map(ImpactMetric::headline), Some("300%"));
    }

    #[test]
    fn test_metric_shapes_serialize_per_key() {
        let study = study_by_id(1).unwrap();
        let json = serde_json::to_value(study.metrics).unwrap();
        assert_eq!(
            json[0],
            serde_json::json!({
                "metric": "deploymentTime",
                "before": "45 min",
                "after": "8 min",
                "improvement": "82%"
            })
        );
        assert_eq!(
            json[2],
            serde_json::json!({ "metric": "availability", "uptime": "99.5%", "improvement": "1.5%" })
        );
    }

    #[test]
    fn test_details_rows() {
        let cost = study_by_id(3).unwrap().metric("cost").unwrap();
        assert_eq!(cost.headline(), "25%");
        assert_eq!(cost.details(), vec![("Before", "$3,200/mo"), ("After", "$2,400/mo")]);
        assert!(ImpactMetric::Performance { improvement: "1%" }.details().is_empty());
    }
}
