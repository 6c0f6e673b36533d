use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static GLOBAL_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

/// Icons referenced by name from the content files and by the page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Code,
    Database,
    Layout,
    Server,
    Mail,
    Linkedin,
    Github,
    Menu,
    Close,
    Sun,
    Moon,
    ArrowDown,
    Calendar,
    Briefcase,
    Send,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub intro: Vec<String>,
    pub page_title: String,
    pub meta_description: String,
    pub primary_cta: NavLink,
    pub secondary_cta: NavLink,
    pub nav: Vec<NavLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: IconName,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
    pub image: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMethod {
    pub icon: IconName,
    pub name: String,
    pub value: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub heading: String,
    pub pitch: String,
    pub methods: Vec<ContactMethod>,
}

/// Everything the page renders, parsed once from the embedded `content/` folder.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub profile: Profile,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<ProjectItem>,
    pub contact: ContactContent,
}

impl SiteContent {
    fn load() -> Result<Self, ContentError> {
        Ok(Self {
            profile: load_file("profile.json")?,
            experience: load_file("experience.json")?,
            skills: load_file("skills.json")?,
            projects: load_file("projects.json")?,
            contact: load_file("contact.json")?,
        })
    }
}

fn load_file<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    GLOBAL_CONTENT.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_loads() {
        let content = site_content().expect("embedded content should parse");
        assert_eq!(content.profile.name, "Marcos Martilotta");
        assert_eq!(content.experience.len(), 2);
        assert_eq!(content.skills.len(), 4);
        assert!(!content.projects.is_empty());
        assert_eq!(content.contact.methods.len(), 3);
    }

    #[test]
    fn test_nav_anchors() {
        let content = site_content().unwrap();
        let hrefs: Vec<&str> = content
            .profile
            .nav
            .iter()
            .map(|l| l.href.as_str())
            .collect();
        assert_eq!(hrefs, ["#hero", "#experience", "#skills", "#contact"]);

        let labels: Vec<&str> = content
            .profile
            .nav
            .iter()
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(labels, ["Inicio", "Experiencia", "Habilidades", "Contacto"]);
    }

    #[test]
    fn test_records_are_populated() {
        let content = site_content().unwrap();
        for exp in &content.experience {
            assert!(!exp.description.is_empty(), "{} has no description", exp.title);
            assert!(!exp.technologies.is_empty(), "{} has no technologies", exp.title);
        }
        for category in &content.skills {
            assert!(!category.skills.is_empty(), "{} has no skills", category.name);
        }
        for project in &content.projects {
            assert!(project.href.starts_with("https://"));
            assert!(project.image.starts_with('/'));
        }
    }

    #[test]
    fn test_skill_icons() {
        let content = site_content().unwrap();
        let icons: Vec<IconName> = content.skills.iter().map(|c| c.icon).collect();
        assert_eq!(
            icons,
            [
                IconName::Code,
                IconName::Database,
                IconName::Layout,
                IconName::Server
            ]
        );
    }

    #[test]
    fn test_icon_names_parse() {
        let icon: IconName = serde_json::from_str("\"arrow-down\"").unwrap();
        assert_eq!(icon, IconName::ArrowDown);
        assert!(serde_json::from_str::<IconName>("\"rocket\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let res = load_file::<Profile>("nope.json");
        assert_eq!(res.unwrap_err(), ContentError::Missing("nope.json".to_string()));
    }
}
