use crate::api::PricingClient;
use crate::config::SyncConfig;
use crate::error::Result;
use crate::extract::extract_pricing;
use crate::write::{write_pricing, WriteSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Written(WriteSummary),
    /// The listing had no pricing to write; the artifact was left untouched.
    Empty,
}

/// Fetch the model listing, extract pricing, and write the artifact.
pub async fn sync_pricing(config: &SyncConfig) -> Result<SyncOutcome> {
    let client = PricingClient::new(config)?;
    let response = client.fetch_models().await?;

    let list = extract_pricing(&response);
    if list.is_empty() {
        tracing::warn!(endpoint = client.endpoint(), "no pricing entries extracted");
        return Ok(SyncOutcome::Empty);
    }

    let summary = write_pricing(&list, &config.output_path)?;
    Ok(SyncOutcome::Written(summary))
}
