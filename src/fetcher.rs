use anyhow::{Context, Result, anyhow};
use reqwest::Client;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Downloads the page body. Certificate verification is disabled because
/// the target site serves a broken chain; anything other than a 200 is
/// treated as a fetch failure.
pub async fn fetch_page(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(true)
        .build()?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch URL: {}", url))?;

    let status = response.status();
    if status.as_u16() != 200 {
        return Err(anyhow!("Failed to fetch URL. Status code: {}", status.as_u16()));
    }

    response.text().await.context("Failed to read response body")
}
