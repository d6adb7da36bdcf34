use tracing_subscriber::EnvFilter;

/// Install a plain `fmt` subscriber on stdout. `RUST_LOG` overrides the
/// default `info` level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        eprintln!("logging already initialised: {err}");
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn second_init_is_harmless() {
        super::init();
        super::init();
        tracing::info!("still logging");
    }
}
