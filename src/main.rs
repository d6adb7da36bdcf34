use osrs_quest_reqs::{ScrapeConfig, WikiClient, logging, pipeline};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    logging::init();

    let config = ScrapeConfig::default();
    let result = WikiClient::new(&config).and_then(|client| pipeline::run(&client, &config));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "scrape aborted");
            ExitCode::FAILURE
        }
    }
}
