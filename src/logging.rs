use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "GRADE_CALC_LOG";

/// Pick the filter directive from CLI flags.
///
/// An explicit level wins over `--verbose`. A bare level such as `info` is
/// scoped to this crate; anything containing `=` is used as-is.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("grade_calc={}", level),
        (true, None) => "grade_calc=debug".to_string(),
        (false, None) => "grade_calc=warn".to_string(),
    }
}

/// Initialize logging to stderr based on CLI arguments.
/// `RUST_LOG` or `GRADE_CALC_LOG` take precedence when set.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
