use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::store::{self, Store};

const BASE_URL: &str = "https://www.members.agta.org/assnfe/";
const FIRST_PAGE: &str = "CompanySearch.asp?COMPNAME=&CITYNAME=&STATENAME=&CTRYID=181\
    &LASTNAME=&GEMSTONEID=-1&PRODUCTSID=-1&FORM=Search&MODE=FINDRESULTS&TID=1";

const PROFILE_DELAY: Duration = Duration::from_secs(1);
const PAGE_DELAY: Duration = Duration::from_secs(10);
const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 2000;

pub struct CrawlStats {
    pub pages: usize,
    pub fetched: usize,
    pub skipped: usize,
}

struct Listing {
    /// (company name, profile href) pairs in page order.
    entries: Vec<(String, String)>,
    next_href: Option<String>,
}

/// Walk the paginated search results, fetching each profile page into the
/// store. A slug already in the store is never re-fetched, so interrupted
/// crawls resume cleanly.
pub async fn crawl(store: &Store, limit: Option<usize>) -> Result<CrawlStats> {
    let client = Client::new();
    let mut stats = CrawlStats {
        pages: 0,
        fetched: 0,
        skipped: 0,
    };

    // The site's "Next" link can point backward mid-alphabet, so treat it as
    // untrusted and stop on the first repeated page identifier.
    let mut visited: HashSet<String> = HashSet::new();
    let mut next = Some(FIRST_PAGE.to_string());

    'pages: while let Some(page_href) = next {
        if !visited.insert(page_href.clone()) {
            warn!("pagination cycle detected at {}, stopping crawl", page_href);
            break;
        }
        stats.pages += 1;
        info!("fetching listing page {}", stats.pages);
        let body = fetch_with_retry(&client, &page_href).await?;
        let listing = parse_listing(&body);

        for (name, href) in listing.entries {
            let slug = store::slugify(&name);
            if store.contains(&slug) {
                stats.skipped += 1;
                continue;
            }
            match fetch_with_retry(&client, &href).await {
                Ok(html) => {
                    store.save(&slug, &html)?;
                    stats.fetched += 1;
                    info!("saved {}", slug);
                }
                Err(e) => warn!("skipping {}: {}", slug, e),
            }
            if limit.is_some_and(|n| stats.fetched >= n) {
                break 'pages;
            }
            sleep(PROFILE_DELAY).await;
        }

        next = listing.next_href;
        if next.is_some() {
            sleep(PAGE_DELAY).await;
        }
    }

    Ok(stats)
}

/// Company links and the "Next" pagination href from one listing page.
fn parse_listing(body: &str) -> Listing {
    let dom = Html::parse_document(body);
    let company_link = Selector::parse("div.col-md-3 a").unwrap();
    let any_link = Selector::parse("a").unwrap();

    let entries = dom
        .select(&company_link)
        .filter_map(|a| {
            let name = a.text().collect::<String>().trim().to_string();
            let href = a.value().attr("href")?.to_string();
            if name.is_empty() {
                None
            } else {
                Some((name, href))
            }
        })
        .collect();

    let next_href = dom
        .select(&any_link)
        .find(|a| a.text().collect::<String>().trim() == "Next")
        .and_then(|a| a.value().attr("href"))
        .map(|h| h.to_string());

    Listing { entries, next_href }
}

async fn fetch_with_retry(client: &Client, href: &str) -> Result<String> {
    let url = format!("{}{}", BASE_URL, href);
    let mut attempt = 0;
    loop {
        match client.get(&url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    return resp
                        .text()
                        .await
                        .with_context(|| format!("reading body of {}", url));
                }
                let retryable = status.as_u16() == 429 || status.is_server_error();
                if !retryable || attempt == MAX_RETRIES {
                    anyhow::bail!("{} returned {}", url, status);
                }
            }
            Err(e) => {
                if attempt == MAX_RETRIES {
                    return Err(e).with_context(|| format!("fetching {}", url));
                }
            }
        }

        let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
        warn!(
            "retrying {} in {:.1}s (attempt {}/{})",
            url,
            backoff.as_secs_f64(),
            attempt + 1,
            MAX_RETRIES
        );
        sleep(backoff).await;
        attempt += 1;
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <div class="row">
          <div class="col-md-3"><a href="CompanyProfile.asp?ID=101">Mona Lisa Fine Jewels, Inc.</a></div>
          <div class="col-md-3"><a href="CompanyProfile.asp?ID=102">Robert Shapiro</a></div>
        </div>
        <a href="CompanySearch.asp?PAGENUM=2">Next</a>
    "#;

    #[test]
    fn listing_entries_and_next() {
        let listing = parse_listing(LISTING);
        assert_eq!(listing.entries.len(), 2);
        assert_eq!(listing.entries[0].0, "Mona Lisa Fine Jewels, Inc.");
        assert_eq!(listing.entries[0].1, "CompanyProfile.asp?ID=101");
        assert_eq!(
            listing.next_href.as_deref(),
            Some("CompanySearch.asp?PAGENUM=2")
        );
    }

    #[test]
    fn last_page_has_no_next() {
        let listing =
            parse_listing(r#"<div class="col-md-3"><a href="x.asp">Acme</a></div>"#);
        assert_eq!(listing.entries.len(), 1);
        assert!(listing.next_href.is_none());
    }
}
