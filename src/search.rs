use unicode_normalization::UnicodeNormalization;

use crate::filter::Anchor;
use crate::index::CorpusIndex;

/// At most this many hits are shown per category.
pub const RESULT_CAP: usize = 4;

const RESULT_TOP: f32 = 185.0;
const RESULT_STEP: f32 = 30.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub authors: Vec<String>,
    pub articles: Vec<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub anchor: Anchor,
    pub top: f32,
}

/// Case-insensitive substring match over the ranked author, title, and
/// keyword arrays. An empty query matches nothing.
pub fn search(index: &CorpusIndex, query: &str) -> SearchResults {
    if query.is_empty() {
        return SearchResults::default();
    }
    let needle = fold(query);

    SearchResults {
        authors: take_matches(index.authors_ranked(), &needle),
        articles: take_matches(index.titles_ordered(), &needle),
        keywords: take_matches(index.keywords_ranked(), &needle),
    }
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.articles.is_empty() && self.keywords.is_empty()
    }

    /// Vertical offsets for the stacked result list: authors, then articles,
    /// then keywords, one row step apart.
    pub fn stacked(&self) -> Vec<SearchHit> {
        let mut top = RESULT_TOP;
        let mut out = Vec::with_capacity(self.authors.len() + self.articles.len() + self.keywords.len());
        for value in &self.authors {
            top += RESULT_STEP;
            out.push(SearchHit {
                anchor: Anchor::Author(value.clone()),
                top,
            });
        }
        for value in &self.articles {
            top += RESULT_STEP;
            out.push(SearchHit {
                anchor: Anchor::Article(value.clone()),
                top,
            });
        }
        for value in &self.keywords {
            top += RESULT_STEP;
            out.push(SearchHit {
                anchor: Anchor::Keyword(value.clone()),
                top,
            });
        }
        out
    }
}

fn take_matches(ranked: &[String], needle: &str) -> Vec<String> {
    ranked
        .iter()
        .filter(|v| fold(v.as_str()).contains(needle))
        .take(RESULT_CAP)
        .cloned()
        .collect()
}

fn fold(s: &str) -> String {
    s.nfc().collect::<String>().to_lowercase()
}
