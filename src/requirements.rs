use crate::error::{Result, ScrapeError};
use crate::fetch::PageSource;
use crate::guide::selector;
use crate::model::{QuestRequirement, SkillRequirementBlock};
use scraper::Html;
use std::ops::RangeInclusive;
use tracing::info;

/// Decode a `"<level> - <quest>[*<modifier>]"` list item.
///
/// Only the text between the first and second dash is treated as the quest
/// name, so a name that itself contains `-` comes back truncated.
pub fn decode_requirement(raw: &str) -> Result<QuestRequirement> {
    let malformed = || ScrapeError::MalformedRequirement(raw.to_string());

    let mut dash = raw.split('-');
    let level_token = dash.next().ok_or_else(malformed)?;
    let remainder = dash.next().ok_or_else(malformed)?;

    let level = level_token
        .split_whitespace()
        .collect::<String>()
        .parse::<u32>()
        .map_err(|_| malformed())?;

    let mut star = remainder.trim().split('*');
    let quest = star.next().unwrap_or_default().to_string();
    let boostable = star.count() == 1;

    Ok(QuestRequirement {
        level,
        quest,
        boostable,
    })
}

/// Parse one skill sub-section: the skill name comes from the first child
/// block's anchor, the requirements from the second child block's list items.
pub fn extract_block(html: &str) -> Result<SkillRequirementBlock> {
    let div = selector("div")?;
    let first = selector("div:nth-child(1)")?;
    let second = selector("div:nth-child(2)")?;
    let anchor = selector("a")?;
    let item = selector("li")?;

    let fragment = Html::parse_fragment(html);
    let root = fragment
        .select(&div)
        .next()
        .ok_or_else(|| ScrapeError::MissingElement("div".into()))?;

    let skill = root
        .select(&first)
        .next()
        .and_then(|block| block.select(&anchor).next())
        .and_then(|a| a.value().attr("title"))
        .ok_or_else(|| ScrapeError::MissingElement("skill anchor title".into()))?
        .to_string();

    let quests = match root.select(&second).next() {
        Some(list) => list
            .select(&item)
            .map(|li| decode_requirement(&li.text().collect::<String>()))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(SkillRequirementBlock { skill, quests })
}

/// Fetch and parse each sub-section of `page` in ascending order. The first
/// failure aborts the whole pass.
pub fn extract_requirements<S: PageSource + ?Sized>(
    source: &S,
    page: &str,
    sections: RangeInclusive<u32>,
) -> Result<Vec<SkillRequirementBlock>> {
    let end = *sections.end();
    let mut blocks = Vec::new();
    for i in sections {
        info!("parsing quest requirement: {} of {}", i, end);
        let html = source.fetch_html(page, Some(i))?;
        blocks.push(extract_block(&html)?);
    }
    Ok(blocks)
}
