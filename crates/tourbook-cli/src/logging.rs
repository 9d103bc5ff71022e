use anyhow::Result;
use twyg::{LogLevel, OptsBuilder};

use tourbook_fetch::Config;

/// Map a configured level name onto a twyg level. Unknown names fall back
/// to `info`.
fn level_from_name(name: &str) -> LogLevel {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

/// Install the twyg logger using the level and colour settings in `config`.
pub fn setup(config: &Config) -> Result<()> {
    let opts = OptsBuilder::new()
        .coloured(config.log_coloured)
        .level(level_from_name(&config.log_level))
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logger options: {e:?}"))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Could not set up logger: {e:?}"))?;
    Ok(())
}
