
use log::LevelFilter;

pub fn level_for(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/*
 * Stderr logger at the level picked by -v. RUST_LOG, when set,
 * takes precedence so single modules can be traced.
 */
pub fn init(verbosity: u64) {
    let level = level_for(verbosity);
    // A logger may already be installed (tests); keep it.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .try_init();
    log::debug!("log level {}", level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(1);
        init(3);
    }
}
