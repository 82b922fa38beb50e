use serde::{Deserialize, Serialize};

/// Skill taxonomy grouped by domain, each domain split into proficiency
/// tiers. Empty tiers are simply omitted from rendered answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[serde(default)]
    pub languages: SkillTier,
    #[serde(default)]
    pub ai_ml: SkillTier,
    #[serde(default)]
    pub tools_deployment: SkillTier,
    #[serde(default)]
    pub frontend_backend: SkillTier,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillTier {
    #[serde(default)]
    pub expert: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
    #[serde(default)]
    pub intermediate: Vec<String>,
}

impl SkillTier {
    /// Expert and advanced entries in tier order, the slice usually shown
    /// in summaries.
    pub fn top(&self) -> impl Iterator<Item = &String> {
        self.expert.iter().chain(self.advanced.iter())
    }

    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.expert
            .iter()
            .chain(self.advanced.iter())
            .chain(self.intermediate.iter())
    }
}
