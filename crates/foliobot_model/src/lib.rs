use serde::{Deserialize, Serialize};

pub mod example;
pub mod experience;
pub mod project;
pub mod skills;

pub use experience::{Experience, ExperienceKind};
pub use project::{Project, ProjectKind};
pub use skills::{SkillTier, Skills};

/// Static description of the portfolio subject. Loaded once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    pub personal: Personal,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub contact: Contact,
}

impl KnowledgeBase {
    pub fn experience_of(&self, kind: ExperienceKind) -> Option<&Experience> {
        self.experience.iter().find(|e| e.kind == kind)
    }

    /// First project whose name contains `fragment`.
    pub fn project_named(&self, fragment: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name.contains(fragment))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub profession: String,
    pub location: String,
    pub passion: String,
    pub goal: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub projects: u32,
    pub technologies: u32,
    pub problems_solved: u32,
    pub coding_hours_daily: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}
