use tracing::debug;

use crate::index::CorpusIndex;
use crate::models::{format_author_name, Corpus};

/// The entity currently pivoted to. Exactly one anchor is active at a time;
/// articles are anchored by title, facets by their display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    Author(String),
    Keyword(String),
    Article(String),
}

impl Anchor {
    pub fn value(&self) -> &str {
        match self {
            Anchor::Author(v) | Anchor::Keyword(v) | Anchor::Article(v) => v,
        }
    }

    /// Caption shown above the anchor item.
    pub fn caption(&self) -> &'static str {
        match self {
            Anchor::Author(_) => "news stories by",
            Anchor::Keyword(_) => "news about",
            Anchor::Article(_) => "news related to",
        }
    }
}

/// Articles related to the anchor, as URLs. Author and keyword anchors keep
/// dataset order; an article anchor keeps its related-list order, with URLs
/// missing from the corpus silently dropped. An empty result is a valid,
/// displayable state.
pub fn filter_articles(corpus: &Corpus, index: &CorpusIndex, anchor: &Anchor) -> Vec<String> {
    let matched: Vec<String> = match anchor {
        Anchor::Author(name) => corpus
            .iter()
            .filter(|a| a.authors.iter().any(|r| format_author_name(r) == *name))
            .map(|a| a.url.clone())
            .collect(),
        Anchor::Keyword(topic) => corpus
            .iter()
            .filter(|a| a.topics.iter().any(|t| t == topic))
            .map(|a| a.url.clone())
            .collect(),
        Anchor::Article(title) => {
            let related = index
                .url_for_title(title)
                .and_then(|url| corpus.get(url))
                .and_then(|a| a.related.as_deref())
                .unwrap_or(&[]);
            related
                .iter()
                .filter(|url| corpus.contains(url.as_str()))
                .cloned()
                .collect()
        }
    };

    debug!("Filter - anchor={:?}, matches={}", anchor.value(), matched.len());
    matched
}
