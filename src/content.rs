//! Static portfolio content.
//!
//! Everything the sections display lives here as plain data, separate
//! from layout and behavior. Values are referenced literally; there is
//! no fallback handling for unreachable thumbnail URLs.

pub struct Profile {
    pub greeting: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
}

pub const PROFILE: Profile = Profile {
    greeting: "Hello, I'm",
    first_name: "Sourav Kumar",
    last_name: "Biswas",
    initials: "SKB",
    tagline: "Software Designer & Full-Stack Developer",
    summary: "Crafting digital experiences through innovative design and code. \
              Specializing in React, Node.js, Python, and Chrome Extensions.",
};

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate software designer with a keen eye for creating intuitive \
     and visually appealing digital experiences. My journey in tech spans across \
     frontend development, backend architecture, and innovative Chrome extension \
     creation.",
    "With expertise in React, Node.js, and Python, I bridge the gap between \
     design and functionality, ensuring every project delivers both aesthetic \
     excellence and robust performance.",
];

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "⌨",
        title: "Full-Stack Development",
        desc: "React, Node.js, Python",
    },
    Highlight {
        icon: "◧",
        title: "UI/UX Design",
        desc: "Modern, user-centric interfaces",
    },
    Highlight {
        icon: "⚡",
        title: "Chrome Extensions",
        desc: "Innovative browser solutions",
    },
    Highlight {
        icon: "▣",
        title: "Mobile App Development",
        desc: "Cross-platform applications",
    },
];

pub struct SkillInfo {
    pub name: &'static str,
    /// Proficiency in percent; the count-up animation's target.
    pub level: u8,
    pub category: &'static str,
}

pub const SKILLS: [SkillInfo; 12] = [
    SkillInfo {
        name: "React",
        level: 95,
        category: "Frontend",
    },
    SkillInfo {
        name: "TypeScript",
        level: 90,
        category: "Frontend",
    },
    SkillInfo {
        name: "Node.js",
        level: 88,
        category: "Backend",
    },
    SkillInfo {
        name: "Python",
        level: 85,
        category: "Backend",
    },
    SkillInfo {
        name: "Chrome Extensions",
        level: 92,
        category: "Specialty",
    },
    SkillInfo {
        name: "UI/UX Design",
        level: 87,
        category: "Design",
    },
    SkillInfo {
        name: "MongoDB",
        level: 82,
        category: "Database",
    },
    SkillInfo {
        name: "Tailwind CSS",
        level: 93,
        category: "Frontend",
    },
    SkillInfo {
        name: "React Native",
        level: 80,
        category: "Mobile App",
    },
    SkillInfo {
        name: "GraphQL",
        level: 78,
        category: "API",
    },
    SkillInfo {
        name: "Docker",
        level: 75,
        category: "DevOps",
    },
    SkillInfo {
        name: "Figma",
        level: 89,
        category: "Design",
    },
];

pub const SKILLS_INTRO: &str = "A comprehensive overview of my technical skills \
     and proficiency levels across different technologies and domains.";

pub struct ProjectInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub category: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub image_url: &'static str,
}

pub const PROJECTS: [ProjectInfo; 6] = [
    ProjectInfo {
        title: "E-Commerce Dashboard",
        description: "A comprehensive admin dashboard built with React and Node.js \
                      for managing products, orders, and analytics with real-time \
                      data visualization and advanced filtering capabilities.",
        tech: &["React", "Node.js", "MongoDB", "Chart.js", "Express", "JWT"],
        category: "Full-Stack",
        icon: "🌐",
        features: &[
            "Real-time Analytics",
            "Order Management",
            "Product Catalog",
            "User Authentication",
        ],
        image_url: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg",
    },
    ProjectInfo {
        title: "Task Management Chrome Extension",
        description: "A productivity-focused Chrome extension that helps users \
                      organize tasks, set reminders, and track progress across \
                      different websites with seamless integration.",
        tech: &["JavaScript", "Chrome API", "LocalStorage", "CSS3", "Manifest V3"],
        category: "Extension",
        icon: "⚡",
        features: &[
            "Cross-site Integration",
            "Smart Reminders",
            "Progress Tracking",
            "Data Sync",
        ],
        image_url: "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg",
    },
    ProjectInfo {
        title: "Python Data Analytics Tool",
        description: "An automated data processing tool that extracts insights \
                      from large datasets using Python libraries and generates \
                      interactive reports with machine learning predictions.",
        tech: &["Python", "Pandas", "Matplotlib", "Flask", "Scikit-learn", "NumPy"],
        category: "Data Science",
        icon: "◫",
        features: &[
            "Data Visualization",
            "ML Predictions",
            "Automated Reports",
            "API Integration",
        ],
        image_url: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg",
    },
    ProjectInfo {
        title: "Real-time Chat Application",
        description: "A modern chat application with real-time messaging, file \
                      sharing, user authentication, and group chat functionality \
                      built with React and Socket.io.",
        tech: &["React", "Socket.io", "Express", "JWT", "MongoDB", "Cloudinary"],
        category: "Real-time",
        icon: "▤",
        features: &[
            "Real-time Messaging",
            "File Sharing",
            "Group Chats",
            "User Presence",
        ],
        image_url: "https://images.pexels.com/photos/267350/pexels-photo-267350.jpeg",
    },
    ProjectInfo {
        title: "Portfolio Website Builder",
        description: "A drag-and-drop website builder that allows users to create \
                      beautiful portfolio websites with customizable templates, \
                      components, and responsive design.",
        tech: &[
            "React",
            "TypeScript",
            "Tailwind",
            "DnD Kit",
            "Framer Motion",
            "Supabase",
        ],
        category: "SaaS",
        icon: "⌨",
        features: &[
            "Drag & Drop",
            "Custom Templates",
            "Responsive Design",
            "Export Code",
        ],
        image_url: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg",
    },
    ProjectInfo {
        title: "API Monitoring Dashboard",
        description: "A comprehensive monitoring solution for tracking API \
                      performance, uptime, response times with alert notifications \
                      and detailed analytics reports.",
        tech: &["React", "Node.js", "Redis", "WebSocket", "PostgreSQL", "Docker"],
        category: "DevOps",
        icon: "◨",
        features: &[
            "Real-time Monitoring",
            "Alert System",
            "Performance Analytics",
            "API Testing",
        ],
        image_url: "https://images.pexels.com/photos/577585/pexels-photo-577585.jpeg",
    },
];

pub const PROJECTS_INTRO: &str = "A selection of projects spanning full-stack \
     apps, browser extensions and data tooling.";

pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: "✉",
        label: "Email",
        value: "sourav@example.com",
    },
    ContactDetail {
        icon: "☎",
        label: "Phone",
        value: "+91 98765 43210",
    },
    ContactDetail {
        icon: "⌖",
        label: "Location",
        value: "Kolkata, India",
    },
];

pub const CONTACT_INTRO: &str = "Ready to start your next project? Let's \
     collaborate and create something amazing together.";

pub const CONTACT_PITCH: &str = "I'm always interested in new opportunities and \
     exciting projects. Feel free to reach out if you'd like to discuss potential \
     collaborations.";

pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "",
        label: "GitHub",
        href: "https://github.com/souravkb",
    },
    SocialLink {
        icon: "in",
        label: "LinkedIn",
        href: "https://linkedin.com/in/souravkb",
    },
    SocialLink {
        icon: "✉",
        label: "Email",
        href: "mailto:sourav@example.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for skill in &SKILLS {
            assert!(skill.level <= 100, "{} exceeds 100%", skill.name);
        }
    }

    #[test]
    fn every_project_is_fully_described() {
        for project in &PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.tech.is_empty());
            assert!(!project.features.is_empty());
            assert!(project.image_url.starts_with("https://"));
        }
    }
}
