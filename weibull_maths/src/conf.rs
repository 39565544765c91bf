use log::LevelFilter;
use once_cell::sync::Lazy;
use std::str::FromStr;

pub(crate) static CONF: Lazy<ConfigVars> = Lazy::new(|| {
    let log_level = std::env::var("WEIBULL_LOG_LEVEL")
        .or_else::<std::env::VarError, _>(|_| Ok("info".to_owned()))
        .ok()
        .map(|l| LevelFilter::from_str(&l).unwrap_or_else(|_| LevelFilter::Debug))
        .unwrap_or_else(|| LevelFilter::Debug);

    let rng_seed = std::env::var("WEIBULL_SEED")
        .ok()
        .and_then(|s| parse_seed(&s));

    ConfigVars {
        log_level,
        rng_seed,
    }
});

pub(crate) struct ConfigVars {
    pub log_level: log::LevelFilter,
    /// Seed for the process-wide default random source, if fixed.
    pub rng_seed: Option<u64>,
}

fn parse_seed(raw: &str) -> Option<u64> {
    u64::from_str(raw.trim()).ok()
}

#[derive(Clone, Copy)]
struct Logger;

#[allow(unused_must_use)]
static LOGGER: Lazy<Logger> = Lazy::new(|| {
    env_logger::builder()
        .format_module_path(true)
        .format_timestamp_nanos()
        .target(env_logger::Target::Stderr)
        .filter(None, CONF.log_level)
        .try_init();

    Logger
});

/// Install the stderr logger, filtered by `WEIBULL_LOG_LEVEL`.
///
/// Calling it more than once is a no-op; if another logger was already
/// installed by the host application that one is kept.
pub fn setup_logger() {
    Lazy::force(&LOGGER);
}
