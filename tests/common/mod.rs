#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use osrs_quest_reqs::fetch::request_url;
use osrs_quest_reqs::{PageSource, Result, ScrapeConfig, ScrapeError};

pub const TEST_API: &str = "https://wiki.test/api.php";

type Key = (String, Option<u32>);

/// In-memory wiki: serves canned HTML per (page, section) and records every
/// request in order. Unknown pages answer 404.
#[derive(Default)]
pub struct FixturePages {
    pages: HashMap<Key, String>,
    failures: HashMap<Key, u16>,
    pub requests: RefCell<Vec<Key>>,
}

impl FixturePages {
    pub fn with_page(mut self, page: &str, section: Option<u32>, html: impl Into<String>) -> Self {
        self.pages.insert((page.to_string(), section), html.into());
        self
    }

    pub fn with_failure(mut self, page: &str, section: Option<u32>, status: u16) -> Self {
        self.failures.insert((page.to_string(), section), status);
        self
    }
}

impl PageSource for FixturePages {
    fn fetch_html(&self, page: &str, section: Option<u32>) -> Result<String> {
        let key = (page.to_string(), section);
        self.requests.borrow_mut().push(key.clone());

        let status = self.failures.get(&key).copied();
        match (status, self.pages.get(&key)) {
            (None, Some(html)) => Ok(html.clone()),
            (status, _) => Err(ScrapeError::Fetch {
                status: status.unwrap_or(404),
                url: request_url(TEST_API, page, section),
            }),
        }
    }
}

pub fn mk_tmp_dir(suffix: &str) -> PathBuf {
    let mut base = std::env::temp_dir();
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time");
    base.push(format!(
        "osrs_quest_reqs_test_{}_{}",
        suffix,
        now.as_nanos()
    ));
    fs::create_dir_all(&base).expect("create tmp dir");
    base
}

/// Default configuration pointed at the fixture wiki, writing into `out_dir`.
pub fn test_config(out_dir: &std::path::Path) -> ScrapeConfig {
    ScrapeConfig {
        api_base: TEST_API.to_string(),
        output_path: out_dir.join("quests.json"),
        ..ScrapeConfig::default()
    }
}

/// Guide plus every `tests/fixtures/requirements/section_*.html`, numbered
/// from 1 in file name order.
pub fn fixture_wiki(config: &mut ScrapeConfig) -> FixturePages {
    let guide = fs::read_to_string("tests/fixtures/guide.html").expect("read guide fixture");
    let mut pages = FixturePages::default().with_page(
        &config.guide_page,
        Some(config.guide_section),
        guide,
    );

    let mut count = 0;
    for entry in glob::glob("tests/fixtures/requirements/section_*.html").expect("glob pattern") {
        let path = entry.expect("fixture path");
        count += 1;
        let html = fs::read_to_string(&path).expect("read requirement fixture");
        pages = pages.with_page(&config.requirements_page, Some(count), html);
    }
    config.requirement_sections = 1..=count;
    pages
}
