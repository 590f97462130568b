use itertools::Itertools;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{format_author_name, Corpus};

/// Frequency tables and lookup maps derived from the corpus in a single
/// pass. Built once at load and read-only afterwards; components receive it
/// by reference per call.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    authors: BTreeMap<String, u32>,
    keywords: BTreeMap<String, u32>,
    titles: BTreeMap<String, String>, // title -> URL; titles are assumed unique
    authors_ranked: Vec<String>,
    keywords_ranked: Vec<String>,
    titles_ordered: Vec<String>, // dataset order
}

impl CorpusIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let mut authors: BTreeMap<String, u32> = BTreeMap::new();
        let mut keywords: BTreeMap<String, u32> = BTreeMap::new();
        let mut titles: BTreeMap<String, String> = BTreeMap::new();
        let mut titles_ordered = Vec::with_capacity(corpus.len());

        for article in corpus.iter() {
            // an author listed twice in one byline counts twice
            for author in &article.authors {
                *authors.entry(format_author_name(author)).or_insert(0) += 1;
            }
            for topic in &article.topics {
                *keywords.entry(topic.clone()).or_insert(0) += 1;
            }
            titles.insert(article.title.clone(), article.url.clone());
            titles_ordered.push(article.title.clone());
        }

        let authors_ranked = ranked_desc(&authors);
        let keywords_ranked = ranked_desc(&keywords);

        debug!(
            "Index built - authors={}, keywords={}, titles={}",
            authors.len(),
            keywords.len(),
            titles.len()
        );

        Self {
            authors,
            keywords,
            titles,
            authors_ranked,
            keywords_ranked,
            titles_ordered,
        }
    }

    pub fn author_count(&self, name: &str) -> u32 {
        self.authors.get(name).copied().unwrap_or(0)
    }

    pub fn keyword_count(&self, topic: &str) -> u32 {
        self.keywords.get(topic).copied().unwrap_or(0)
    }

    pub fn authors(&self) -> &BTreeMap<String, u32> {
        &self.authors
    }

    pub fn keywords(&self) -> &BTreeMap<String, u32> {
        &self.keywords
    }

    pub fn url_for_title(&self, title: &str) -> Option<&str> {
        self.titles.get(title).map(|s| s.as_str())
    }

    /// Author names, most frequent first.
    pub fn authors_ranked(&self) -> &[String] {
        &self.authors_ranked
    }

    /// Topics, most frequent first.
    pub fn keywords_ranked(&self) -> &[String] {
        &self.keywords_ranked
    }

    /// Article titles in dataset order.
    pub fn titles_ordered(&self) -> &[String] {
        &self.titles_ordered
    }
}

fn ranked_desc(table: &BTreeMap<String, u32>) -> Vec<String> {
    table
        .iter()
        .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
        .map(|(name, _)| name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, AuthorRef};

    fn article(url: &str, title: &str, authors: &[(&str, Option<&str>)], topics: &[&str]) -> Article {
        Article {
            url: url.to_string(),
            title: title.to_string(),
            date: "2021-01-01".to_string(),
            abstract_text: String::new(),
            authors: authors
                .iter()
                .map(|(f, l)| AuthorRef {
                    firstname: f.to_string(),
                    lastname: l.map(|s| s.to_string()),
                })
                .collect(),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            related: None,
        }
    }

    fn fixture() -> Corpus {
        let mut corpus = Corpus::default();
        corpus.insert(article(
            "u1",
            "One",
            &[("Jane", Some("SMITH")), ("Jane", Some("SMITH"))],
            &["Politics"],
        ));
        corpus.insert(article("u2", "Two", &[("Bob", Some("JONES"))], &["Politics", "Sports"]));
        corpus.insert(article("u3", "Three", &[("Jane", Some("SMITH"))], &["Sports"]));
        corpus
    }

    #[test]
    fn duplicate_byline_entries_count_twice() {
        let index = CorpusIndex::build(&fixture());
        assert_eq!(index.author_count("Jane Smith"), 3);
        assert_eq!(index.author_count("Bob Jones"), 1);
        assert_eq!(index.author_count("Nobody"), 0);
    }

    #[test]
    fn keyword_counts_accumulate_across_articles() {
        let index = CorpusIndex::build(&fixture());
        assert_eq!(index.keyword_count("Politics"), 2);
        assert_eq!(index.keyword_count("Sports"), 2);
    }

    #[test]
    fn titles_resolve_to_urls_in_dataset_order() {
        let index = CorpusIndex::build(&fixture());
        assert_eq!(index.url_for_title("Two"), Some("u2"));
        assert_eq!(index.titles_ordered(), &["One", "Two", "Three"]);
    }

    #[test]
    fn ranking_is_frequency_then_name() {
        let index = CorpusIndex::build(&fixture());
        assert_eq!(index.authors_ranked(), &["Jane Smith", "Bob Jones"]);
        // equal counts fall back to lexicographic order
        assert_eq!(index.keywords_ranked(), &["Politics", "Sports"]);
    }
}
