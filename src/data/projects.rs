use serde::Serialize;

use crate::listing::{CategoryFilter, Listing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    DevOps,
    FullStack,
}

impl ProjectCategory {
    pub fn id(&self) -> &'static str {
        match self {
            Self::DevOps => "devops",
            Self::FullStack => "fullstack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DevOps => "DevOps",
            Self::FullStack => "Full-Stack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub repository_url: &'static str,
    pub live_url: Option<&'static str>,
}

impl Listing for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }

    fn title(&self) -> &str {
        self.title
    }

    fn summary(&self) -> &str {
        self.description
    }

    fn tags(&self) -> &[&'static str] {
        self.technologies
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Amazon Clone — EKS & ArgoCD Deployment",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        description: "Deployed a production-grade Amazon Clone on AWS EKS with full GitOps automation via ArgoCD. Integrated CI/CD pipelines using GitHub Actions, containerized microservices with Docker, and managed configuration using Kustomize for seamless auto-sync deployments.",
        technologies: &["AWS EKS", "Kubernetes", "ArgoCD", "GitHub Actions", "Kustomize", "Docker", "Terraform"],
        category: ProjectCategory::DevOps,
        repository_url: "https://github.com/neerajnakka/amazon-clone-k8s-eks-argoCD",
        live_url: None,
    },
    Project {
        title: "Next.js CI/CD Pipeline with Docker & Kubernetes",
        image: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        description: "Developed and containerized a Next.js application, deploying it to Kubernetes clusters using GitHub Actions for automated CI/CD. Implemented multi-stage Docker builds, health probes, resource limits, and rolling updates for high availability.",
        technologies: &["Next.js", "Docker", "Kubernetes", "GitHub Actions", "GHCR"],
        category: ProjectCategory::DevOps,
        repository_url: "https://github.com/neerajnakka/nextjs-docker-kubernetes-app",
        live_url: None,
    },
    Project {
        title: "Realtime Chat App — MERN + Socket.IO",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        description: "Developed a real-time chat application using the MERN stack with Socket.IO for instant communication. Implemented custom hooks and Zustand for efficient state management. Dockerized for deployment.",
        technologies: &["React", "Node", "Express", "MongoDB", "Socket.IO", "Zustand", "Docker"],
        category: ProjectCategory::FullStack,
        repository_url: "https://github.com/neerajnakka/Mern_ChatApp",
        live_url: Some("https://mern-chatapp-rfj5.onrender.com/"),
    },
    Project {
        title: "Cloud Infrastructure Automation",
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        description: "Automated AWS infrastructure provisioning using Terraform with reusable modules for EC2, VPC, and S3. Integrated CI/CD with GitHub Actions for continuous deployment of cloud environments.",
        technologies: &["AWS", "Terraform", "GitHub Actions", "EC2", "S3"],
        category: ProjectCategory::DevOps,
        repository_url: "https://github.com/neerajnakka",
        live_url: None,
    },
    Project {
        title: "Netflix Clone using React",
        image: "https://images.unsplash.com/photo-1485846234645-a62644f84728?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        description: "Built a Netflix clone with React, Tailwind CSS, and Firebase. Integrated React Router for seamless navigation and Firebase for authentication.",
        technologies: &["React", "Tailwind CSS", "Firebase"],
        category: ProjectCategory::FullStack,
        repository_url: "https://github.com/neerajnakka/NetflixReact_Clone",
        live_url: Some("https://netflix-clone-wi5g.onrender.com/"),
    },
    Project {
        title: "Modern Portfolio with 3D Animations",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        description: "Designed and developed a modern portfolio website featuring smooth animations, 3D effects powered by Three.js, and a sleek user interface. Leveraged Tailwind CSS for responsive design, React for dynamic interactivity, and Zustand for state management. The site incorporates Framer Motion for fluid transitions.",
        technologies: &["React", "Three.js", "Tailwind CSS", "Framer Motion", "Zustand", "HTML", "CSS"],
        category: ProjectCategory::FullStack,
        repository_url: "https://github.com/neerajnakka/Neeraj_Portfolio",
        live_url: Some("https://neerajnakka.onrender.com/"),
    },
    Project {
        title: "Portfolio Website",
        image: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        description: "Dynamic React portfolio showcasing projects with Tailwind CSS design and Framer Motion animations.",
        technologies: &["Tailwind CSS", "React.js", "React Router Dom", "Framer Motion"],
        category: ProjectCategory::FullStack,
        repository_url: "https://github.com/neerajnakka/PortFolio_React/tree/master",
        live_url: Some("https://neerajchandra.onrender.com/"),
    },
];

/// Filter buttons shown above the project grid, with their counts.
pub fn project_filters() -> Vec<(CategoryFilter<ProjectCategory>, &'static str, usize)> {
    let count = |c| PROJECTS.iter().filter(|p| p.category == c).count();
    vec![
        (CategoryFilter::All, "All Projects", PROJECTS.len()),
        (
            CategoryFilter::Only(ProjectCategory::DevOps),
            ProjectCategory::DevOps.label(),
            count(ProjectCategory::DevOps),
        ),
        (
            CategoryFilter::Only(ProjectCategory::FullStack),
            ProjectCategory::FullStack.label(),
            count(ProjectCategory::FullStack),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_counts_add_up() {
        let filters = project_filters();
        assert_eq!(filters[0].2, 7);
        assert_eq!(filters[1].2 + filters[2].2, filters[0].2);
        assert_eq!(filters[1].2, 3);
    }
}
