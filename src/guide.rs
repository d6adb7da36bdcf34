use crate::error::{Result, ScrapeError};
use crate::model::QuestEntry;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|err| ScrapeError::Selector(format!("{css}: {err:?}")))
}

/// Decides which guide rows are real quests.
///
/// A name passes if it is on the allow-list, or if its lowercase form contains
/// none of the (lowercased) deny-list substrings.
#[derive(Debug, Clone, Default)]
pub struct QuestFilter {
    allow: Vec<String>,
    deny: Vec<String>,
}

impl QuestFilter {
    pub fn new<A, D>(allow: A, deny: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        QuestFilter {
            allow: allow.into_iter().map(Into::into).collect(),
            deny: deny
                .into_iter()
                .map(|d| Into::<String>::into(d).to_lowercase())
                .collect(),
        }
    }

    pub fn keeps(&self, name: &str) -> bool {
        if self.allow.iter().any(|a| a == name) {
            return true;
        }
        let lower = name.to_lowercase();
        !self.deny.iter().any(|d| lower.contains(d.as_str()))
    }
}

/// Quest name of a row: the first-column anchor's `title`, else its text.
fn row_quest_name(row: ElementRef<'_>, anchor: &Selector) -> Option<String> {
    let a = row.select(anchor).next()?;
    let name = match a.value().attr("title") {
        Some(t) => t.to_string(),
        None => a.text().collect::<String>().trim().to_string(),
    };
    if name.is_empty() { None } else { Some(name) }
}

/// Parse the guide section's table rows into quest entries, in row order.
pub fn extract_quests(
    html: &str,
    filter: &QuestFilter,
    article_base: &str,
) -> Result<Vec<QuestEntry>> {
    let rows = selector("tbody tr[data-rowid]")?;
    let anchor = selector("td:nth-child(1) a")?;

    let fragment = Html::parse_fragment(html);
    let mut quests = Vec::new();
    for row in fragment.select(&rows) {
        let Some(name) = row_quest_name(row, &anchor) else {
            continue;
        };
        if !filter.keeps(&name) {
            debug!(%name, "skipping non-quest row");
            continue;
        }
        quests.push(QuestEntry::new(name, article_base));
    }

    info!(count = quests.len(), "parsed guide quests");
    Ok(quests)
}
