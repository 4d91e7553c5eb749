//! Configuration loading and logger setup for the API binary

use std::io::Write;

use env_logger::fmt::TimestampPrecision;
use hw_shared::config::{AppConfig, Environment, LogFormat, LoggingConfig};

/// Load `.env` files and read the application configuration.
///
/// The environment-specific file (e.g. `.env.production`) is read first so
/// its values win over the generic `.env`.
pub fn load() -> AppConfig {
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();
    AppConfig::from_env()
}

/// Initialize `env_logger` from the logging configuration.
///
/// `RUST_LOG` overrides the configured level. Calling this twice is harmless.
pub fn init_logging(logging: &LoggingConfig) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&logging.filter());

    match logging.format {
        LogFormat::Json => {
            let timestamp = logging.timestamp;
            builder.format(move |buf, record| {
                let mut line = serde_json::json!({
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                if timestamp {
                    line["timestamp"] = serde_json::Value::String(chrono::Utc::now().to_rfc3339());
                }
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Pretty | LogFormat::Compact => {
            builder
                .format_timestamp(logging.timestamp.then_some(TimestampPrecision::Millis))
                .format_module_path(logging.module_path)
                .format_target(logging.format == LogFormat::Pretty);
        }
    }

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        let logging = LoggingConfig::for_environment(Environment::Production);
        init_logging(&logging);
        init_logging(&LoggingConfig::default());
    }
}
