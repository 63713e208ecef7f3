//! Static page content: the section registry plus the experience, project,
//! and skill data rendered by the section components.

/// The scroll-addressable regions of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section element. Stable - the scrollspy and the
    /// smooth-scroll action both address sections through these.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation menus.
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    role: "Full Stack Developer Intern",
    organization: "National Informatics Centre (NIC)",
    period: "August 2024 – Present",
    bullets: &[
        "Spearheading the development of a comprehensive website for a Self Help Group (SHG), covering both frontend and backend aspects.",
        "Architecting and managing the database using PostgreSQL, developing backend services with Express.js and Node.js, and creating the frontend interface with React.js.",
        "Designing and implementing scalable and maintainable system architectures to ensure the robustness and performance of the application.",
        "Collaborating closely with stakeholders to capture requirements, ensuring the delivery of a user-centric and efficient web application.",
    ],
}];

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub repository_url: &'static str,
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Code Nexus",
        description: "A dynamic code editor offering real-time syntax highlighting, collaborative editing, and secure user authentication, enabling seamless programming collaboration across various languages.",
        technologies: &[
            "React",
            "Redux",
            "Monaco Editor",
            "JWT",
            "bcrypt",
            "Socket.IO",
            "MongoDB",
            "Mongoose",
            "Axios",
            "JavaScript",
            "RESTful API",
            "Rate Limiting",
            "Postman",
        ],
        repository_url: "https://github.com/KumudBhatt/Code-Nexus",
    },
    ProjectEntry {
        title: "Alumni Connect",
        description: "A comprehensive alumni networking platform backend facilitating seamless connections among alumni.",
        technologies: &[
            "Node.js",
            "Express",
            "Prisma",
            "PostgreSQL",
            "Socket.IO",
            "JWT",
            "bcrypt",
            "Zod",
            "JavaScript",
            "RESTful API",
            "Prisma ORM",
            "Postman",
        ],
        repository_url: "https://github.com/KumudBhatt/Alumini-Connect",
    },
];

// Closed, hand-maintained mapping from project title to its card image
// under public/. Every entry in PROJECTS must appear here; a miss is a
// content defect, caught by the test below and an `expect` at render time.
const PROJECT_IMAGES: &[(&str, &str)] = &[
    ("Code Nexus", "/images/codenexus.svg"),
    ("Alumni Connect", "/images/alumniconnect.svg"),
];

pub fn project_image(title: &str) -> Option<&'static str> {
    PROJECT_IMAGES
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, path)| *path)
}

#[derive(Debug, Clone, Copy)]
pub struct SkillEntry {
    pub name: &'static str,
    /// Icon class rendered as `<i class=...>`. Devicon where available,
    /// `extra-*` classes (see input.css) for glyphs devicon lacks.
    pub icon: &'static str,
}

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry { name: "C++", icon: "devicon-cplusplus-plain" },
    SkillEntry { name: "Python", icon: "devicon-python-plain" },
    SkillEntry { name: "Java", icon: "devicon-java-plain" },
    SkillEntry { name: "JavaScript", icon: "devicon-javascript-plain" },
    SkillEntry { name: "React", icon: "devicon-react-original" },
    SkillEntry { name: "Redux", icon: "devicon-redux-original" },
    SkillEntry { name: "Node.js", icon: "devicon-nodejs-plain" },
    SkillEntry { name: "Express.js", icon: "devicon-express-original" },
    SkillEntry { name: "MongoDB", icon: "devicon-mongodb-plain" },
    SkillEntry { name: "PostgreSQL", icon: "devicon-postgresql-plain" },
    SkillEntry { name: "Socket.IO", icon: "devicon-socketio-original" },
    SkillEntry { name: "JWT", icon: "extra-jwt" },
    SkillEntry { name: "Prisma", icon: "devicon-prisma-original" },
    SkillEntry { name: "Zod", icon: "extra-zod" },
];

pub const AVATAR_IMAGE: &str = "/images/me.svg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique_and_in_display_order() {
        let ids = Section::ALL.map(Section::id);
        assert_eq!(ids, ["home", "experience", "projects", "skills", "contact"]);
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_project_has_a_registered_image() {
        for project in PROJECTS {
            assert!(
                project_image(project.title).is_some(),
                "no image registered for project '{}'",
                project.title
            );
        }
    }

    #[test]
    fn unknown_project_titles_do_not_resolve() {
        assert_eq!(project_image("Not A Project"), None);
    }

    #[test]
    fn skills_all_carry_an_icon_class() {
        for skill in SKILLS {
            assert!(
                skill.icon.starts_with("devicon-") || skill.icon.starts_with("extra-"),
                "unexpected icon class '{}' for skill '{}'",
                skill.icon,
                skill.name
            );
        }
    }
}
