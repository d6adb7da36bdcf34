use crate::error::{Result, ScrapeError};
use crate::model::QuestEntry;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Render quests as a JSON array indented with four spaces.
pub fn to_pretty_json(quests: &[QuestEntry]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    quests.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|err| ScrapeError::Json(serde::ser::Error::custom(err)))
}

pub fn write_quests(path: &Path, quests: &[QuestEntry]) -> Result<()> {
    let doc = to_pretty_json(quests)?;
    fs::write(path, doc).map_err(|source| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    })
}
