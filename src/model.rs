use serde::{Deserialize, Serialize};

/// One quest from the guide table, with the skill levels it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestEntry {
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub reqs: Vec<Requirement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub skill: String,
    pub level: u32,
    pub boostable: bool,
}

/// A decoded `"<level> - <quest>[*<modifier>]"` list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRequirement {
    pub level: u32,
    pub quest: String,
    pub boostable: bool,
}

/// Every quest requirement listed under one skill's sub-section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirementBlock {
    pub skill: String,
    #[serde(default)]
    pub quests: Vec<QuestRequirement>,
}

impl QuestEntry {
    pub fn new(name: impl Into<String>, article_base: &str) -> Self {
        let name = name.into();
        let uri = format!("{}{}", article_base, name.replace(' ', "_"));
        QuestEntry {
            name,
            uri,
            reqs: Vec::new(),
        }
    }
}
