//! Logging initialization shared by commands

/// Initialize the logger from the command's verbosity flags
pub fn init(verbose: u8, quiet: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level),
        )
        .try_init();
    }
}
