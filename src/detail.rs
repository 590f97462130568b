// src/detail.rs
use chrono::{DateTime, NaiveDate};
use url::Url;

use crate::layout::ITEM_LABEL_MAX;
use crate::models::Article;

const ABSTRACT_SNIPPET_MAX: usize = 50;
const SEARCH_ENGINE: &str = "https://www.google.com/search";
const SEARCH_QUALIFIER: &str = "nytimes";

/// Payload for the detail overlay: what to show for the selected entity and
/// where its outbound link goes.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub stats: String,
    pub link: String,
    pub link_text: String,
}

/// Detail for an author or keyword: the value itself, its corpus-wide
/// occurrence count, and a web search for it.
pub fn facet_detail(value: &str, occurrences: u32) -> Detail {
    Detail {
        title: value.to_string(),
        subtitle: None,
        description: None,
        stats: count_noun(occurrences as usize, "article"),
        link: search_link(value),
        link_text: "Google Search".to_string(),
    }
}

/// Detail for an article: clipped title, long-form date, abstract snippet,
/// related-article count, and the article's own URL.
pub fn article_detail(article: &Article) -> Detail {
    let related = article.related.as_ref().map(Vec::len).unwrap_or(0);
    Detail {
        title: snippet(&article.title, ITEM_LABEL_MAX),
        subtitle: Some(long_date(&article.date)),
        description: Some(snippet(&article.abstract_text, ABSTRACT_SNIPPET_MAX)),
        stats: count_noun(related, "related article"),
        link: article.url.clone(),
        link_text: "Read Full Article at The New York Times".to_string(),
    }
}

fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

// The ellipsis is appended even when nothing was clipped.
fn snippet(text: &str, max: usize) -> String {
    let clipped: String = text.chars().take(max).collect();
    format!("{}...", clipped)
}

/// "Saturday, April 17, 2021" for a dataset date; the raw string is shown
/// when it does not parse.
fn long_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%A, %B %-d, %Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%A, %B %-d, %Y").to_string();
    }
    raw.to_string()
}

fn search_link(value: &str) -> String {
    let query = format!("{} {}", value, SEARCH_QUALIFIER);
    match Url::parse_with_params(SEARCH_ENGINE, &[("q", query.as_str())]) {
        Ok(url) => url.to_string(),
        Err(_) => SEARCH_ENGINE.to_string(),
    }
}
