use std::collections::HashMap;

use crate::curves::PathId;

/// Many-to-many relation between visible facet values (or article titles)
/// and the connector paths drawn for them. Rebuilt on every layout pass and
/// cleared on reset, so connections from a previous anchor never leak into
/// the next. Answers "which connectors touch this item" without rescanning
/// every path.
#[derive(Debug, Clone, Default)]
pub struct CrossRefIndex {
    facet_paths: HashMap<String, Vec<PathId>>,
    article_paths: HashMap<String, Vec<PathId>>,
}

impl CrossRefIndex {
    pub fn record(&mut self, facet: &str, article: &str, path: PathId) {
        self.facet_paths
            .entry(facet.to_string())
            .or_default()
            .push(path);
        self.article_paths
            .entry(article.to_string())
            .or_default()
            .push(path);
    }

    pub fn facet_paths(&self, facet: &str) -> &[PathId] {
        self.facet_paths.get(facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn article_paths(&self, article: &str) -> &[PathId] {
        self.article_paths.get(article).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when a facet and an article share a drawn connector; drives
    /// hover highlighting.
    pub fn shares_path(&self, facet: &str, article: &str) -> bool {
        let article_paths = self.article_paths(article);
        self.facet_paths(facet)
            .iter()
            .any(|p| article_paths.contains(p))
    }

    pub fn clear(&mut self) {
        self.facet_paths.clear();
        self.article_paths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.facet_paths.is_empty() && self.article_paths.is_empty()
    }
}
