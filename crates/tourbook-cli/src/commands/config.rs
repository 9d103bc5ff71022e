use anyhow::{Context, Result};
use toml_edit::{value, DocumentMut, Item};
use tourbook_fetch::config::{self, KEYS};
use tourbook_fetch::Config;

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    for key in KEYS {
        println!("  {key}: {}", config.value_of(key)?);
    }

    println!("\nPriority: CLI args > ENV vars (TOUR_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value, or print the config file when no key is given.
pub fn get_config(config: &Config, key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        println!("{}", config.value_of(&key)?);
        return Ok(());
    }

    let config_path = config::config_file_path();
    if config_path.exists() {
        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        print!("{contents}");
    } else {
        println!("Config file does not exist: {}", config_path.display());
        println!("\nRun 'tourbook config init' to create it.");
    }

    Ok(())
}

/// Typed TOML item for `key`, parsed from the text given on the command line.
fn typed_item(key: &str, raw: &str) -> Result<Item> {
    let item = match key {
        "request_timeout_secs" => {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("{key} must be a whole number of seconds"))?;
            value(i64::try_from(secs).context("Timeout is too large")?)
        }
        "suggestion_limit" | "top_countries" | "history_size" => {
            let n: u32 = raw
                .parse()
                .with_context(|| format!("{key} must be a non-negative integer"))?;
            value(i64::from(n))
        }
        "log_coloured" => {
            let flag: bool = raw
                .parse()
                .with_context(|| format!("{key} must be true or false"))?;
            value(flag)
        }
        "api_base_url" | "data_dir" | "log_level" => value(raw),
        _ => anyhow::bail!(
            "Unknown config key: {}\n\nValid keys: {}",
            key,
            KEYS.join(", ")
        ),
    };
    Ok(item)
}

/// Set `key` to `raw` in the TOML text `contents`, keeping comments and
/// the layout of everything else.
fn update_document(contents: &str, key: &str, raw: &str) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("Config file is not valid TOML")?;
    doc[key] = typed_item(key, raw)?;
    Ok(doc.to_string())
}

/// Set a config value.
pub fn set_config(key: &str, raw: &str) -> Result<()> {
    let config_path = config::config_file_path();

    config::ensure_config_file()?;

    let contents = std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    let updated = update_document(&contents, key, raw)?;

    std::fs::write(&config_path, updated).context("Failed to write config file")?;

    println!("✓ Updated {key} = {raw}");
    println!("  in {}", config_path.display());

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure tourbook.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
