use log::LevelFilter;

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the stderr logger. The level comes from the command line only.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .init();
}
