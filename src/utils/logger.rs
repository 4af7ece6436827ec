use crate::utils::error::{Result, SolidError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    /// JSON 格式日誌，方便被其他工具收集
    Json,
}

/// Filter used when `RUST_LOG` is unset. `--verbose` only affects the
/// compact format; JSON logs always start at info.
pub fn default_directive(format: LogFormat, verbose: bool) -> &'static str {
    match (format, verbose) {
        (LogFormat::Compact, true) => "solid_kit=debug,info",
        (LogFormat::Compact, false) => "solid_kit=warn",
        (LogFormat::Json, _) => "solid_kit=info",
    }
}

/// Install the global subscriber. Logs go to stderr so report output on
/// stdout stays machine-readable.
pub fn init_logger(format: LogFormat, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(format, verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };

    installed.map_err(|e| SolidError::Config {
        message: format!("Logger already initialised: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(LogFormat::Compact, false), "solid_kit=warn");
        assert_eq!(
            default_directive(LogFormat::Compact, true),
            "solid_kit=debug,info"
        );
        assert_eq!(default_directive(LogFormat::Json, true), "solid_kit=info");
    }

    #[test]
    fn test_second_init_is_an_error() {
        // 第一次可能已被其他測試安裝，結果不重要；第二次一定失敗
        let _ = init_logger(LogFormat::Compact, false);
        assert!(matches!(
            init_logger(LogFormat::Json, false),
            Err(SolidError::Config { .. })
        ));
    }
}
