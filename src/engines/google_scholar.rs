use url::Url;
use tracing::debug;

use crate::{
    config::{Config, ScholarConfig},
    engines::{build_client, fetch_body, ScholarResult},
    normalize::extract_year,
    parse::{parse_html_response_with_opts, ParseOpts},
};

pub fn request_url(config: &ScholarConfig, query: &str) -> eyre::Result<Url> {
    let url = Url::parse_with_params(
        &config.endpoint,
        &[("q", query), ("hl", config.locale.as_str())],
    )?;
    Ok(url)
}

pub fn request(
    client: &reqwest::Client,
    config: &ScholarConfig,
    query: &str,
) -> eyre::Result<reqwest::RequestBuilder> {
    Ok(client.get(request_url(config, query)?))
}

pub fn parse_response(body: &str, config: &Config) -> eyre::Result<Vec<ScholarResult>> {
    let opts = ParseOpts::new(&config.selectors, config.scholar.max_results)?;
    Ok(parse_response_with_opts(body, &opts, &config.scholar))
}

fn parse_response_with_opts(
    body: &str,
    opts: &ParseOpts,
    config: &ScholarConfig,
) -> Vec<ScholarResult> {
    parse_html_response_with_opts(body, opts)
        .into_iter()
        .map(|item| ScholarResult {
            year: extract_year(&item.byline),
            title: item.title,
            url: item.url,
            snippet: item.description,
            authors: item.byline,
            source: config.source.clone(),
        })
        .collect()
}

/// Fetches the first page of results for `query` and extracts them.
#[tracing::instrument(skip(config))]
pub async fn search(query: &str, config: &Config) -> eyre::Result<Vec<ScholarResult>> {
    // selectors are compiled up front so a bad config doesn't cost a request
    let opts = ParseOpts::new(&config.selectors, config.scholar.max_results)?;

    let client = build_client(&config.scholar)?;
    let body = fetch_body(request(&client, &config.scholar, query)?).await?;
    let results = parse_response_with_opts(&body, &opts, &config.scholar);
    debug!(count = results.len(), "scholar search done");
    Ok(results)
}
