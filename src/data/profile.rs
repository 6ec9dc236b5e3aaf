pub const NAME: &str = "Neeraj Nakka";

pub const HERO_CONTENT: &str = "Building scalable systems from code to cloud. DevOps & Cloud Engineer | Full-Stack Developer. Passionate about automating deployments, optimizing cloud infrastructure, and developing robust web applications with modern technologies.";

pub const ABOUT_TEXT: &str = "I design, automate, and deploy systems that turn code into production-grade reality. My journey began with full-stack development, building web apps with Java, React, and Node.js. Over time, that foundation evolved into a passion for DevOps and Cloud Engineering, where I now focus on crafting scalable infrastructure, clean CI/CD pipelines, and resilient deployments. I work across AWS and OCI, orchestrate containers with Docker and Kubernetes, and define infrastructure with Terraform and automation scripts. Behind the command line, I'm equally comfortable in version control and workflow automation, using Git, GitHub, and GitLab CI/CD to bridge collaboration and delivery. For me, DevOps isn't just about speed; it's about precision, repeatability, and creating systems that empower developers to ship confidently and innovate faster.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub social: Social,
}

pub const CONTACT: ContactDetails = ContactDetails {
    address: "Hyderabad, Telangana, India",
    phone: "+91 9000600559",
    email: "neerajnakka.n@gmail.com",
    social: Social {
        github: "https://github.com/neerajnakka",
        linkedin: "https://linkedin.com/in/neerajchandran",
        twitter: "https://twitter.com/neerajnakka",
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub years: &'static str,
    pub title: &'static str,
    pub place: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [Milestone; 2] = [
    Milestone {
        years: "2023 - Present",
        title: "Freelance DevOps & Cloud Engineer",
        place: "Self-Employed",
        description: "Working on freelance projects focusing on cloud automation, CI/CD, and container orchestration using AWS, Docker, and Kubernetes.",
    },
    Milestone {
        years: "2019 - 2023",
        title: "Computer Science Graduate",
        place: "CVR College Of Engineering",
        description: "Bachelor's degree with focus on software engineering and cloud computing.",
    },
];

/// `(title, description)`
pub const PHILOSOPHY: [(&str, &str); 3] = [
    (
        "Automation First",
        "Every manual process should be automated, every deployment should be reproducible.",
    ),
    (
        "Infrastructure as Code",
        "Treat infrastructure with the same discipline as application code.",
    ),
    (
        "Cloud Native",
        "Build for the cloud from day one, embrace containerization and orchestration.",
    ),
];

pub const QUICK_STATS: [(&str, &str); 4] = [
    ("Experience", "1+ years"),
    ("Cloud Platforms", "AWS, Azure"),
    ("Projects", "7+ deployed"),
    ("Technologies", "19+ mastered"),
];

/// `(path, label)` for the navbar.
pub const NAV_ITEMS: [(&str, &str); 7] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/skills", "Skills"),
    ("/projects", "Projects"),
    ("/blog", "Blog"),
    ("/case-studies", "Case Studies"),
    ("/contact", "Contact"),
];
