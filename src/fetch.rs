use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::parser::{self, Contributions};

const CALENDAR_URL_BASE: &str = "https://github.com/users";

/// Transport knobs for the single calendar request.
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            timeout: Duration::from_secs(30),
            user_agent: format!("gh_contributions/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Fetch and parse one user's contribution calendar in a single call.
pub async fn contributions_for(username: &str, options: &FetchOptions) -> Result<Contributions> {
    let html = fetch_calendar(username, options).await?;
    Ok(parser::parse_calendar(&html))
}

/// Fetch the raw contribution calendar HTML for one user.
///
/// The username is trimmed and lowercased before it goes into the
/// request path; the parser never re-normalizes it. One attempt, no
/// retry; callers own any backoff policy.
pub async fn fetch_calendar(username: &str, options: &FetchOptions) -> Result<String> {
    let user = username.trim().to_ascii_lowercase();
    let url = format!("{}/{}/contributions", CALENDAR_URL_BASE, user);

    let client = reqwest::Client::builder()
        .timeout(options.timeout)
        .user_agent(&options.user_agent)
        .build()
        .context("Failed to build HTTP client")?;

    info!("Fetching contribution calendar: {}", url);
    let html = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("GitHub returned an error status for user '{}'", user))?
        .text()
        .await
        .context("Failed to read contribution calendar body")?;

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(options.user_agent.starts_with("gh_contributions/"));
    }
}
