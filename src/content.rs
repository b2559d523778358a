//! Literal portfolio content

use crate::types::{BlogPost, ContactInfo, Highlight, Job, Project, Skill, SkillGroup};

pub const OWNER: &str = "AKASH PATIL";
pub const TAGLINE: &str = "Full Stack Developer & UI/UX Designer";
pub const INTRO: &str = "Crafting digital experiences at the intersection of design and technology. \
Specializing in modern web applications, interactive experiences, and cyberpunk aesthetics.";

pub const HOME_STACK: &[&str] = &["React", "TypeScript", "Node.js", "Next.js", "TailwindCSS", "Three.js"];

pub const ABOUT: &str = "I'm a passionate Full Stack Developer with a love for creating immersive digital \
experiences. My journey in tech has been driven by curiosity and a desire to push the boundaries of \
what's possible on the web.";

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        items: &["React", "TypeScript", "Next.js", "TailwindCSS", "Three.js"],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Express", "Python", "PostgreSQL", "MongoDB"],
    },
    SkillGroup {
        category: "Tools",
        items: &["Git", "Docker", "AWS", "Figma", "VS Code"],
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        year: "2023",
        title: "Senior Full Stack Developer",
        description: "Leading development of enterprise applications",
    },
    Highlight {
        year: "2021",
        title: "Full Stack Developer",
        description: "Building scalable web applications",
    },
    Highlight {
        year: "2019",
        title: "Frontend Developer",
        description: "Creating responsive user interfaces",
    },
];

pub const JOBS: &[Job] = &[
    Job {
        title: "Senior Software Engineer",
        company: "Tech Innovations Inc.",
        period: "2022 - Present",
        description: "Leading development of cutting-edge web applications using React and TypeScript.",
        achievements: &[
            "Implemented new frontend architecture",
            "Reduced load times by 40%",
            "Mentored junior developers",
        ],
    },
    Job {
        title: "Full Stack Developer",
        company: "Digital Solutions Ltd",
        period: "2020 - 2022",
        description: "Developed and maintained multiple web applications using modern technologies.",
        achievements: &[
            "Built scalable backend services",
            "Improved system performance",
            "Implemented CI/CD pipeline",
        ],
    },
    Job {
        title: "Web Developer",
        company: "Creative Agency",
        period: "2018 - 2020",
        description: "Created responsive websites and web applications for various clients.",
        achievements: &[
            "Delivered 20+ client projects",
            "Optimized website performance",
            "Implemented modern UI/UX designs",
        ],
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", level: 90, category: "Frontend" },
    Skill { name: "TypeScript", level: 85, category: "Frontend" },
    Skill { name: "HTML/CSS", level: 95, category: "Frontend" },
    Skill { name: "Vue.js", level: 80, category: "Frontend" },
    Skill { name: "Node.js", level: 85, category: "Backend" },
    Skill { name: "Python", level: 80, category: "Backend" },
    Skill { name: "Java", level: 75, category: "Backend" },
    Skill { name: "SQL", level: 85, category: "Backend" },
    Skill { name: "Docker", level: 80, category: "DevOps" },
    Skill { name: "AWS", level: 75, category: "DevOps" },
    Skill { name: "CI/CD", level: 85, category: "DevOps" },
    Skill { name: "Kubernetes", level: 70, category: "DevOps" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Cyberpunk Portfolio",
        description: "A cutting-edge personal portfolio website with cyberpunk aesthetics",
        tech: &["React", "TypeScript", "Framer Motion", "TailwindCSS"],
        link: "#",
    },
    Project {
        title: "AI Code Assistant",
        description: "Intelligent code completion and suggestion system",
        tech: &["Python", "TensorFlow", "FastAPI"],
        link: "#",
    },
    Project {
        title: "E-Commerce Platform",
        description: "Modern e-commerce solution with real-time inventory",
        tech: &["Next.js", "Node.js", "MongoDB"],
        link: "#",
    },
];

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Getting Started with React and TypeScript",
        date: "2024-01-15",
        excerpt: "A comprehensive guide to setting up and using React with TypeScript...",
    },
    BlogPost {
        title: "Building Modern Web Applications",
        date: "2024-01-10",
        excerpt: "Explore the latest techniques and best practices for web development...",
    },
    BlogPost {
        title: "Mastering CSS Grid and Flexbox",
        date: "2024-01-05",
        excerpt: "Deep dive into modern CSS layout techniques...",
    },
];

pub const CONTACTS: &[ContactInfo] = &[
    ContactInfo { kind: "Email", value: "your.email@example.com", icon: "✉" },
    ContactInfo { kind: "LinkedIn", value: "linkedin.com/in/yourusername", icon: "◆" },
    ContactInfo { kind: "GitHub", value: "github.com/yourusername", icon: "⌘" },
];

/// Skill categories in first-seen order
pub fn skill_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for skill in SKILLS {
        if !categories.contains(&skill.category) {
            categories.push(skill.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_categories_keep_order() {
        assert_eq!(skill_categories(), vec!["Frontend", "Backend", "DevOps"]);
    }

    #[test]
    fn test_blog_dates_parse() {
        assert!(POSTS.iter().all(|p| p.date().is_some()));
    }
}
