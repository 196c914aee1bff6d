use crate::error::{CliError, Result};
use tracing::{debug, info};

const ARCHIVE_BASE_URL: &str = "https://files.rcsb.org/download";

/// Builds the archive download URL for a PDB identifier.
pub fn archive_url(id: &str) -> String {
    format!("{}/{}.pdb", ARCHIVE_BASE_URL, id)
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::Argument(format!(
            "'{}' is not a valid PDB identifier (expected a short alphanumeric code, e.g. 1CRN)",
            id
        )));
    }
    Ok(())
}

/// Downloads the raw text of a PDB entry from the RCSB archive.
///
/// A single attempt with no retry or timeout policy. A non-success HTTP
/// status yields [`CliError::Fetch`] carrying the identifier and status;
/// transport failures surface as [`CliError::Network`].
pub async fn fetch_pdb(id: &str) -> Result<String> {
    validate_id(id)?;

    let url = archive_url(id);
    info!("Fetching structure '{}' from {}", id, url);

    let client = reqwest::Client::new();
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Fetch {
            id: id.to_string(),
            status,
        });
    }

    let text = response.text().await?;
    debug!("Received {} bytes for '{}'", text.len(), id);
    Ok(text)
}
