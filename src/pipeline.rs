use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::fetch::PageSource;
use crate::guide::{QuestFilter, extract_quests};
use crate::join::attach_requirements;
use crate::model::QuestEntry;
use crate::output::write_quests;
use crate::requirements::extract_requirements;
use tracing::{error, info};

/// Fetch the guide, then every requirement sub-section, and join them.
///
/// Nothing is fetched concurrently: the guide is fully parsed before the first
/// requirement request, and sub-sections are requested in ascending order.
pub fn scrape<S: PageSource + ?Sized>(
    source: &S,
    config: &ScrapeConfig,
) -> Result<Vec<QuestEntry>> {
    info!("parsing quests");
    let guide_html = source.fetch_html(&config.guide_page, Some(config.guide_section))?;
    let filter = QuestFilter::new(config.allow.iter().cloned(), config.deny.iter().cloned());
    let mut quests = extract_quests(&guide_html, &filter, &config.article_base)?;

    let blocks = extract_requirements(
        source,
        &config.requirements_page,
        config.requirement_sections.clone(),
    )?;

    attach_requirements(&mut quests, &blocks);
    Ok(quests)
}

/// Scrape and persist to `config.output_path`.
///
/// Scrape failures are returned and leave no file behind. A failed write is
/// logged and otherwise ignored; the joined quests are still returned.
pub fn run<S: PageSource + ?Sized>(
    source: &S,
    config: &ScrapeConfig,
) -> Result<Vec<QuestEntry>> {
    let quests = scrape(source, config)?;
    match write_quests(&config.output_path, &quests) {
        Ok(()) => info!(path = %config.output_path.display(), "quests.json written to disk"),
        Err(err) => error!(%err, "failed to write quests"),
    }
    Ok(quests)
}
