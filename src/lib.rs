//! osrs_quest_reqs — quest skill requirements scraped from the OSRS wiki
//!
//! This crate reads the wiki's *Optimal quest guide* table and the per-skill
//! *Quests/Skill requirements* sub-sections through the MediaWiki parse API,
//! matches quest names between the two, and writes a `quests.json` listing
//! each quest's URL and skill/level/boostable requirements.
//!
//! Basic example (no-run):
//!
//! ```rust,no_run
//! use osrs_quest_reqs::{ScrapeConfig, WikiClient, pipeline};
//!
//! let config = ScrapeConfig::default();
//! let client = WikiClient::new(&config)?;
//! let quests = pipeline::run(&client, &config)?;
//! println!("{} quests", quests.len());
//! # Ok::<(), osrs_quest_reqs::ScrapeError>(())
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod guide;
pub mod join;
pub mod logging;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod requirements;

pub use crate::config::ScrapeConfig;
pub use crate::error::*;
pub use crate::fetch::{PageSource, WikiClient};
pub use crate::model::*;
