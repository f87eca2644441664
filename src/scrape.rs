// src/scrape.rs
//! The fetch loop: configured collections → card pages → [`Card`]s.
//!
//! Pages are requested one at a time in configuration order. A page that
//! fails to download or has no usable number is logged and skipped; the run
//! itself only fails on errors that are not tied to one card.

use crate::{
    assemble::assemble_html,
    config::{AppSettings, ScrapeOptions},
    core::net,
    error::Result,
    model::Card,
    progress::Progress,
    specs::SiteStrategy,
};

/// What a run produced.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub cards: Vec<Card>,
    /// `(collection code, requested number)` of every skipped page.
    pub failed: Vec<(String, u32)>,
}

/// Assemble one already-downloaded page.
pub fn parse_card(html: &str, strategy: &SiteStrategy) -> Result<Card> {
    assemble_html(html, strategy)
}

/// Top-level: fetch over HTTP with a fresh client.
pub fn run(
    settings: &AppSettings,
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeReport> {
    let client = net::client()?;
    run_with(settings, opts, |url| net::http_get(&client, url), progress)
}

/// Same loop with the page source injected (tests, replays from disk).
pub fn run_with<F>(
    settings: &AppSettings,
    opts: &ScrapeOptions,
    mut fetch: F,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeReport>
where
    F: FnMut(&str) -> Result<String>,
{
    let strategy = opts.site.strategy();
    let total = settings.page_count(|code| opts.wants(code));

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total as usize);
        p.log(&s!("Fetching {} card pages from {}…", total, opts.site));
    }

    let mut report = ScrapeReport::default();

    for collection in settings.collections.iter().filter(|c| opts.wants(&c.code)) {
        logf!("Collection {} ({}): {} cards", collection.name, collection.code, collection.card_count);

        for i in 1..=collection.card_count {
            let url = (strategy.card_url)(&opts.base_url, &collection.code, i);
            logd!("GET {url}");

            let outcome = fetch(&url).and_then(|html| parse_card(&html, &strategy));
            match outcome {
                Ok(card) => {
                    if card.number != i {
                        logw!("Page {url} prints number {} (expected {i})", card.number);
                    }
                    logf!("Processed card #{i}: {}", card.name);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(i, &card.name);
                    }
                    report.cards.push(card);
                }
                Err(e) if e.is_per_card() => {
                    loge!("Error processing card #{i}: {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(i);
                    }
                    report.failed.push((collection.code.clone(), i));
                }
                Err(e) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.finish();
                    }
                    return Err(e);
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Scraped {} card(s), {} failed", report.cards.len(), report.failed.len());
    Ok(report)
}
