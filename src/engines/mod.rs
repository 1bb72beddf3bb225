use serde::Serialize;
use tracing::debug;

use crate::config::ScholarConfig;

pub mod google_scholar;

/// One bibliographic entry, in the shape it's printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScholarResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    /// The byline exactly as the page renders it, usually authors, venue,
    /// year and publisher run together.
    pub authors: String,
    /// Empty when the byline has no year in it.
    pub year: String,
    pub source: String,
}

pub fn build_client(config: &ScholarConfig) -> eyre::Result<reqwest::Client> {
    let client = reqwest::ClientBuilder::new()
        // scholar serves a captcha or a stripped down page to anything that
        // doesn't look like a desktop browser
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .build()?;
    Ok(client)
}

/// Sends the request and returns the body as text. Non-2xx statuses are
/// errors, and bytes that aren't valid UTF-8 are replaced instead of failing
/// the whole response.
#[tracing::instrument(skip_all)]
pub async fn fetch_body(request: reqwest::RequestBuilder) -> eyre::Result<String> {
    let res = request.send().await?;
    debug!(status = %res.status(), url = %res.url(), "got response");
    let mut res = res.error_for_status()?;

    let mut body_bytes = Vec::new();
    while let Some(chunk) = res.chunk().await? {
        body_bytes.extend_from_slice(&chunk);
    }
    debug!(len = body_bytes.len(), "downloaded body");

    Ok(String::from_utf8_lossy(&body_bytes).into_owned())
}
