use std::error::Error;

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::Config;

/// Sends `tracing` output to a daily rolling file under `config.log_dir`.
///
/// The terminal is busy with prompts and maze drawings, so nothing is logged there.
/// Keep the returned guard alive until exit, dropping it flushes pending lines.
pub fn init(config: &Config) -> Result<WorkerGuard, Box<dyn Error + Send + Sync>> {
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "mazeroute.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .try_init()?;

    tracing::info!(
        "Logging to {} at level {}",
        config.log_dir.display(),
        config.log_level
    );
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppError;

    #[test]
    fn test_second_init_keeps_error_source() {
        let config = Config {
            log_dir: std::env::temp_dir().join("mazeroute-logging-test"),
            ..Config::default()
        };
        let _first = init(&config);
        let err = AppError::Logging(init(&config).unwrap_err());
        assert!(err.to_string().starts_with("failed to set up logging: "));
        assert!(err.source().is_some());
    }
}
