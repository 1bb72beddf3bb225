//! Helper functions for parsing search engine responses.

use eyre::eyre;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{config::SelectorsConfig, normalize::element_text};

/// Compiled selectors plus the cap on how many items to return.
#[derive(Debug)]
pub struct ParseOpts {
    pub result_item: Selector,
    pub title: Selector,
    /// Looked up inside the title element.
    pub href: Selector,
    pub description: Selector,
    pub byline: Selector,
    pub max_results: usize,
}

/// The raw fields of one result block. Missing parts are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    pub title: String,
    pub url: String,
    pub description: String,
    pub byline: String,
}

impl ParseOpts {
    pub fn new(selectors: &SelectorsConfig, max_results: usize) -> eyre::Result<Self> {
        Ok(Self {
            result_item: parse_selector(&selectors.result)?,
            title: parse_selector(&selectors.title)?,
            href: parse_selector(&selectors.href)?,
            description: parse_selector(&selectors.snippet)?,
            byline: parse_selector(&selectors.byline)?,
            max_results,
        })
    }
}

fn parse_selector(s: &str) -> eyre::Result<Selector> {
    Selector::parse(s).map_err(|e| eyre!("invalid selector {s:?}: {e}"))
}

fn first_text(el: &ElementRef, selector: &Selector) -> String {
    el.select(selector)
        .next()
        .map(|n| element_text(&n))
        .unwrap_or_default()
}

/// Walks the result blocks in document order. Blocks without a title are
/// skipped, and scanning stops as soon as `max_results` items have been
/// collected.
#[tracing::instrument(skip_all, fields(body_len = body.len()))]
pub fn parse_html_response_with_opts(body: &str, opts: &ParseOpts) -> Vec<ParsedItem> {
    let dom = Html::parse_document(body);

    let mut items = Vec::new();
    if opts.max_results == 0 {
        return items;
    }

    for (index, result_item) in dom.select(&opts.result_item).enumerate() {
        let Some(title_el) = result_item.select(&opts.title).next() else {
            debug!(index, "result block has no title, skipping");
            continue;
        };

        let title = element_text(&title_el);
        let url = title_el
            .select(&opts.href)
            .next()
            .and_then(|n| n.value().attr("href"))
            .unwrap_or_default()
            .to_string();
        let description = first_text(&result_item, &opts.description);
        let byline = first_text(&result_item, &opts.byline);

        items.push(ParsedItem {
            title,
            url,
            description,
            byline,
        });
        if items.len() >= opts.max_results {
            break;
        }
    }

    debug!(count = items.len(), "parsed result blocks");
    items
}
