//! Static page content: the owner's identity, the project gallery, skills,
//! experience, education, and achievements. All fixture data is authored
//! here and validated by the tests at the bottom, so a record with a missing
//! link or an empty tech list fails `cargo test` instead of rendering badly.

pub static OWNER_NAME: &str = "Manish Prajapati";
pub static OWNER_TAGLINE: &str = "MERN Stack Developer | Problem Solver | Tech Enthusiast";
pub static OWNER_INTRO: &str = "I build exceptional digital experiences using modern web \
    technologies. With expertise in the MERN stack and a passion for clean code, I transform \
    complex problems into elegant, user-centric solutions that drive business growth.";

pub static GITHUB_URL: &str = "https://github.com/codewithmanish102003";
pub static LINKEDIN_URL: &str = "https://linkedin.com/in/manish-prajapati-651a212aa";
pub static CONTACT_EMAIL: &str = "marveluniverse1942@gmail.com";

pub static PROFILE_IMAGE: &str = "/profile.jpg";
pub static RESUME_PATH: &str = "/resume.pdf";
pub static PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub image_path: &'static str,
    pub technologies: &'static [&'static str],
    pub repository_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    /// Tailwind gradient stops tinting the card's image overlay.
    pub accent_gradient: &'static str,
}

pub static WORK_PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Dosedefence - Pharmacy Centralized Management System",
        description: "A comprehensive platform for managing pharmacy operations, including \
            inventory, sales, and customer management.",
        image_path: "/dosedefence.png",
        technologies: &[
            "TypeScript",
            "React",
            "NodeJS",
            "ExpressJS",
            "MongoDB",
            "Tailwind",
            "Postman",
        ],
        repository_url: None,
        live_url: Some("https://dosedefence.com"),
        accent_gradient: "from-pink-500 to-red-500",
    },
    ProjectRecord {
        title: "Khushi Laptops - Refurbished Laptops Store",
        description: "A platform for showcasing and managing refurbished laptops.",
        image_path: "/khushilaptop.png",
        technologies: &["React", "NodeJS", "ExpressJS", "MongoDB", "Tailwind", "Cloudinary"],
        repository_url: None,
        live_url: Some("https://khushilaptop.com/"),
        accent_gradient: "from-blue-500 to-purple-500",
    },
];

pub static ACADEMIC_PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Starway Collections - E-commerce Website",
        description: "Full-featured e-commerce website with cart management and secure checkout",
        image_path: "/ecommerce2.png",
        technologies: &["React", "NodeJS", "ExpressJS", "MongoDB", "Tailwind", "Redux"],
        repository_url: None,
        live_url: Some("https://starwaycollections.netlify.app"),
        accent_gradient: "from-indigo-500 to-purple-500",
    },
    ProjectRecord {
        title: "GDrive - Storage Management System",
        description: "A cloud storage management system with file upload, download, and sharing \
            capabilities",
        image_path: "/gdrive.png",
        technologies: &["EJS", "NodeJS", "ExpressJS", "MongoDB", "Tailwind", "Cloudinary"],
        repository_url: Some("https://github.com/codewithmanish102003/Work/tree/main/GDrive"),
        live_url: Some("https://gdrive.netlify.app/"),
        accent_gradient: "from-green-500 to-blue-500",
    },
    ProjectRecord {
        title: "Employee Task Management",
        description: "Real-time task management system with advanced features and analytics",
        image_path: "/emts.png",
        technologies: &["React", "ExpressJS", "MongoDB", "Tailwind"],
        repository_url: Some(
            "https://github.com/codewithmanish102003/Work/tree/main/Employee_Management_System",
        ),
        live_url: Some("https://emts.netlify.app/"),
        accent_gradient: "from-orange-500 to-red-500",
    },
    ProjectRecord {
        title: "musicDev - Music Player",
        description: "Music player application with playlist management and audio controls",
        image_path: "/musicdev.png",
        technologies: &["HTML", "TailwindCSS", "JavaScript"],
        repository_url: Some("https://github.com/codewithmanish102003/musicDev"),
        live_url: Some("https://musicdevplay.netlify.app/"),
        accent_gradient: "from-pink-500 to-red-500",
    },
    ProjectRecord {
        title: "Calculator",
        description: "Functional Calculator with advanced operations and beautiful UI design",
        image_path: "/calculator.png",
        technologies: &["HTML", "CSS", "JavaScript"],
        repository_url: Some("https://github.com/codewithmanish102003/Calculator"),
        live_url: Some("https://basefuncalc.netlify.app/"),
        accent_gradient: "from-blue-500 to-cyan-500",
    },
    ProjectRecord {
        title: "Netflix UI Clone",
        description: "Netflix UI Clone using HTML and CSS with responsive design and modern \
            animations",
        image_path: "/netflix.png",
        technologies: &["HTML", "CSS", "JavaScript"],
        repository_url: Some("https://github.com/codewithmanish102003/Work/tree/main/Netflix"),
        live_url: None,
        accent_gradient: "from-red-500 to-pink-500",
    },
];

pub fn all_projects() -> impl Iterator<Item = &'static ProjectRecord> {
    WORK_PROJECTS.iter().chain(ACADEMIC_PROJECTS.iter())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static str,
    /// Icon font class, devicon-style.
    pub icon: &'static str,
    pub accent_gradient: &'static str,
}

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: "JavaScript, TypeScript, Python, C, C++, Core Java",
        icon: "devicon-javascript-plain",
        accent_gradient: "from-blue-500 to-cyan-500",
    },
    SkillGroup {
        title: "Frontend",
        skills: "HTML, CSS, JavaScript, Tailwind CSS, Bootstrap",
        icon: "devicon-html5-plain",
        accent_gradient: "from-green-500 to-emerald-500",
    },
    SkillGroup {
        title: "Backend",
        skills: "Node.js, Express.js, Django, GraphQL (basics), REST API",
        icon: "devicon-nodejs-plain",
        accent_gradient: "from-purple-500 to-pink-500",
    },
    SkillGroup {
        title: "Database",
        skills: "MongoDB, MySQL",
        icon: "devicon-mongodb-plain",
        accent_gradient: "from-orange-500 to-red-500",
    },
    SkillGroup {
        title: "Frameworks & Libraries",
        skills: "React.js, Next.js, Django, Bootstrap",
        icon: "devicon-react-original",
        accent_gradient: "from-blue-500 to-cyan-500",
    },
    SkillGroup {
        title: "Tools & Platforms",
        skills: "Git, GitHub, VS Code, Netlify, Render, Vercel, Cloudinary, Postman",
        icon: "devicon-git-plain",
        accent_gradient: "from-green-500 to-emerald-500",
    },
    SkillGroup {
        title: "Currently Learning",
        skills: "Advanced Django, Next.js, SEO Optimization, System Design",
        icon: "devicon-django-plain",
        accent_gradient: "from-yellow-500 to-orange-500",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "MERN Stack Developer Intern",
        organization: "8 Bit System Pvt. Ltd.",
        period: "June 2025 - Present",
        highlights: &[
            "Developed and maintained responsive web applications using React, Node.js, and \
             MongoDB",
            "Collaborated with cross-functional teams to design and implement new features",
            "Optimized application performance and improved load times by 40%",
        ],
        technologies: &["React", "Node.js", "MongoDB", "Express.js"],
    },
    ExperienceEntry {
        role: "Academic Projects",
        organization: "University coursework",
        period: "Jun 2024 - 2025",
        highlights: &[
            "Developed and maintained responsive web applications using React, Node.js, and \
             MongoDB",
            "Optimized application performance and improved load times by 40%",
        ],
        technologies: &["JavaScript", "React", "Tailwind CSS"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    /// Short badge text rendered in the leading circle.
    pub badge: &'static str,
    pub program: &'static str,
    pub institution: &'static str,
    pub detail: &'static str,
    pub accent: &'static str,
}

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        badge: "B",
        program: "Bachelor of Computer Application",
        institution: "University Of Rajasthan",
        detail: "CGPA 8.4, 2025",
        accent: "text-blue-400",
    },
    EducationEntry {
        badge: "12",
        program: "XII (RBSE)",
        institution: "Welfare Academy",
        detail: "89.20% (2022)",
        accent: "text-green-400",
    },
    EducationEntry {
        badge: "10",
        program: "X (RBSE)",
        institution: "Sharda Vidhya Bhawan Sr. Sec. School",
        detail: "89.67% (2020)",
        accent: "text-purple-400",
    },
];

pub static ACHIEVEMENTS: &[&str] = &[
    "Certified in SmartCom 2023 and Namaste Web3 from Jaipur",
    "Completed Upflairs Pvt Ltd Web Development and Designing program in 2024",
    "Achieved certification in Cloud Computing Basics from Scaler Academy",
    "Completed Web Development and Designing from Broadcast Engineering Consultants India \
     Limited in 2024",
    "Certified in All India National Creativity Aptitude Test conducted by Naukri in 2025",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_is_fully_authored() {
        for project in all_projects() {
            assert!(!project.title.trim().is_empty());
            assert!(!project.description.trim().is_empty(), "{}", project.title);
            assert!(!project.image_path.trim().is_empty(), "{}", project.title);
            assert!(
                project.image_path.starts_with('/'),
                "{} image should be site-relative",
                project.title
            );
            assert!(
                !project.technologies.is_empty(),
                "{} needs a tech list",
                project.title
            );
            assert!(
                project.technologies.iter().all(|t| !t.trim().is_empty()),
                "{} has a blank tech entry",
                project.title
            );
            assert!(!project.accent_gradient.trim().is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn every_project_links_somewhere() {
        for project in all_projects() {
            assert!(
                project.repository_url.is_some() || project.live_url.is_some(),
                "{} needs a repository or live link",
                project.title
            );
            for url in project.repository_url.iter().chain(project.live_url.iter()) {
                assert!(url.starts_with("https://"), "{}: bad link {url}", project.title);
            }
        }
    }

    #[test]
    fn project_titles_are_unique() {
        let mut titles: Vec<_> = all_projects().map(|p| p.title).collect();
        let total = titles.len();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), total, "duplicate project titles");
    }

    #[test]
    fn skill_groups_are_fully_authored() {
        assert!(!SKILL_GROUPS.is_empty());
        for group in SKILL_GROUPS {
            assert!(!group.title.trim().is_empty());
            assert!(!group.skills.trim().is_empty(), "{}", group.title);
            assert!(!group.icon.trim().is_empty(), "{}", group.title);
            assert!(!group.accent_gradient.trim().is_empty(), "{}", group.title);
        }
    }

    #[test]
    fn experience_education_and_achievements_are_nonempty() {
        assert!(!EXPERIENCE.is_empty());
        for entry in EXPERIENCE {
            assert!(!entry.highlights.is_empty(), "{}", entry.role);
            assert!(!entry.technologies.is_empty(), "{}", entry.role);
        }
        assert!(!EDUCATION.is_empty());
        for entry in EDUCATION {
            assert!(!entry.badge.trim().is_empty(), "{}", entry.program);
        }
        assert!(!ACHIEVEMENTS.is_empty());
        assert!(ACHIEVEMENTS.iter().all(|a| !a.trim().is_empty()));
    }
}
