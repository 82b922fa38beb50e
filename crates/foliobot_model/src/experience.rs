use serde::{Deserialize, Serialize};

/// A single internship / work entry. Achievements keep their stored order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub kind: ExperienceKind,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceKind {
    Ai,
    Ml,
    Web,
    Content,
}
