use anyhow::{Context, Result};
use tourbook_core::Dataset;
use tourbook_fetch::{load_dataset, source_from_config, Config};

pub mod artists;
pub mod concerts;
pub mod config;
pub mod locations;
pub mod recognize;
pub mod search;
pub mod stats;
pub mod tour;

/// Load the catalogue from the source selected by `config`.
pub async fn load(config: &Config) -> Result<Dataset> {
    let source = source_from_config(config).context("Failed to create catalogue source")?;
    let dataset = load_dataset(source.as_ref())
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;
    Ok(dataset)
}
