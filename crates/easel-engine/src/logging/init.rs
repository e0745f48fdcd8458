use std::sync::Once;

/// How `init_logging` builds the global logger.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`
/// with the wgpu stack held at `warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` syntax, e.g. `"easel_engine=debug,wgpu_core=warn"`.
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Noisy at `info`; only their warnings are interesting by default.
const QUIET_CRATES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

static INIT: Once = Once::new();

/// Installs the global logger. Later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&resolve_filter(&config, std::env::var("RUST_LOG").ok()));
        builder.write_style(config.write_style);

        if let Err(e) = builder.try_init() {
            // Another logger was installed by the host; keep it.
            eprintln!("easel: logger already set: {e}");
            return;
        }
        log::debug!("logging initialized");
    });
}

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> String {
    if let Some(filter) = config.env_filter.clone().or(rust_log) {
        return filter;
    }
    let mut filter = config.default_level.to_string().to_lowercase();
    for name in QUIET_CRATES {
        filter.push_str(&format!(",{name}=warn"));
    }
    filter
}
