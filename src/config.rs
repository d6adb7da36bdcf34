use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

pub const API_BASE: &str = "https://oldschool.runescape.wiki/api.php";
pub const ARTICLE_BASE: &str = "https://oldschool.runescape.wiki/w/";

pub const GUIDE_PAGE: &str = "Optimal_quest_guide";
pub const GUIDE_SECTION: u32 = 2;

pub const SKILL_REQUIREMENTS_PAGE: &str = "Quests/Skill_requirements";
/// Agility through Woodcutting.
pub const SKILL_REQUIREMENT_SECTIONS: RangeInclusive<u32> = 1..=25;

pub const OUTPUT_FILE: &str = "quests.json";

/// Names kept even when they contain a denied substring.
pub const DEFAULT_ALLOW: &[&str] = &["The Grand Tree"];

/// Case-insensitive substrings of guide rows that are not quests.
pub const DEFAULT_DENY: &[&str] = &[
    "diary",
    "achievement",
    "unlock",
    "Stronghold of Security",
    "Natural history quiz",
    "Kudos",
    "Varrock Museum",
    "Balloon transport system",
    "Crafting Guild",
    "Varrock",
    "Museum Camp",
    "Castle Wars",
    "Grand Tree",
];

/// Everything a scrape run needs to know about where to look and what to keep.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeConfig {
    pub api_base: String,
    pub article_base: String,
    pub guide_page: String,
    pub guide_section: u32,
    pub requirements_page: String,
    pub requirement_sections: RangeInclusive<u32>,
    pub allow: Vec<String>,
    pub deny: Vec<String>,
    pub output_path: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            api_base: API_BASE.to_string(),
            article_base: ARTICLE_BASE.to_string(),
            guide_page: GUIDE_PAGE.to_string(),
            guide_section: GUIDE_SECTION,
            requirements_page: SKILL_REQUIREMENTS_PAGE.to_string(),
            requirement_sections: SKILL_REQUIREMENT_SECTIONS,
            allow: DEFAULT_ALLOW.iter().map(|s| s.to_string()).collect(),
            deny: DEFAULT_DENY.iter().map(|s| s.to_string()).collect(),
            output_path: PathBuf::from(OUTPUT_FILE),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_all_skill_sections() {
        let cfg = ScrapeConfig::default();
        assert_eq!(cfg.requirement_sections.clone().count(), 25);
        assert_eq!(*cfg.requirement_sections.start(), 1);
        assert_eq!(cfg.output_path, PathBuf::from("quests.json"));
        assert!(cfg.allow.iter().any(|a| a == "The Grand Tree"));
    }
}
