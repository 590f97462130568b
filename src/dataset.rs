// src/dataset.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::models::{Article, AuthorRef, Corpus};

/// Raw article record as it appears in the dataset file, keyed by URL.
#[derive(Debug, Clone, Deserialize)]
pub struct RawArticle {
    pub article: String, // display title
    pub date: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub authors: Vec<RawAuthor>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(rename = "related-articles")]
    pub related_articles: Option<Vec<RawRelated>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAuthor {
    pub firstname: String,
    pub lastname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRelated {
    pub url: String,
}

/// Decode the URL -> record mapping into a `Corpus`, keeping dataset order.
/// This is the one-time load that gates all interaction; records are
/// read-only afterwards.
pub fn load_corpus(json: &str) -> Result<Corpus> {
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(json).context("decoding dataset JSON")?;

    let mut corpus = Corpus::default();
    for (url, value) in raw {
        let rec: RawArticle = serde_json::from_value(value)
            .with_context(|| format!("decoding record for {}", url))?;
        corpus.insert(Article {
            url: url.clone(),
            title: rec.article.trim().to_string(),
            date: rec.date,
            abstract_text: rec.abstract_text,
            authors: rec
                .authors
                .into_iter()
                .map(|a| AuthorRef {
                    firstname: a.firstname,
                    lastname: a.lastname,
                })
                .collect(),
            topics: rec.topics,
            related: rec
                .related_articles
                .map(|rs| rs.into_iter().map(|r| r.url).collect()),
        });
    }

    debug!("Corpus loaded - articles={}", corpus.len());
    Ok(corpus)
}
