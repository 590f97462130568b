use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRef {
    pub firstname: String,
    pub lastname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub date: String, // as given in the dataset, parsed on demand
    pub abstract_text: String,
    pub authors: Vec<AuthorRef>,
    pub topics: Vec<String>,
    pub related: Option<Vec<String>>, // URLs, may reference articles outside the corpus
}

/// Display name for an author: firstname, plus the lastname with its first
/// character kept and the remainder lowercased. Authors with equal display
/// names are the same facet; homonyms merge.
pub fn format_author_name(author: &AuthorRef) -> String {
    let mut full = author.firstname.clone();
    if let Some(last) = &author.lastname {
        let mut chars = last.chars();
        if let Some(head) = chars.next() {
            full.push(' ');
            full.push(head);
            full.push_str(&chars.as_str().to_lowercase());
        }
    }
    full
}

/// The loaded dataset: URL -> Article, iteration in dataset order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    urls: Vec<String>,
    by_url: HashMap<String, Article>,
}

impl Corpus {
    pub fn insert(&mut self, article: Article) {
        if !self.by_url.contains_key(&article.url) {
            self.urls.push(article.url.clone());
        }
        self.by_url.insert(article.url.clone(), article);
    }

    pub fn get(&self, url: &str) -> Option<&Article> {
        self.by_url.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.by_url.contains_key(url)
    }

    /// Articles in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.urls.iter().filter_map(|u| self.by_url.get(u))
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(first: &str, last: Option<&str>) -> AuthorRef {
        AuthorRef {
            firstname: first.to_string(),
            lastname: last.map(|s| s.to_string()),
        }
    }

    #[test]
    fn author_name_lowercases_lastname_tail() {
        assert_eq!(format_author_name(&author("Jane", Some("SMITH"))), "Jane Smith");
        assert_eq!(format_author_name(&author("Luc", Some("de BRUIN"))), "Luc de bruin");
    }

    #[test]
    fn author_name_without_lastname_stands_alone() {
        assert_eq!(format_author_name(&author("Prince", None)), "Prince");
        assert_eq!(format_author_name(&author("Prince", Some(""))), "Prince");
    }

    #[test]
    fn corpus_iterates_in_insertion_order() {
        let mut corpus = Corpus::default();
        for url in ["u3", "u1", "u2"] {
            corpus.insert(Article {
                url: url.to_string(),
                title: format!("t-{url}"),
                date: "2021-01-01".to_string(),
                abstract_text: String::new(),
                authors: vec![],
                topics: vec![],
                related: None,
            });
        }
        let order: Vec<&str> = corpus.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(order, vec!["u3", "u1", "u2"]);
        assert!(corpus.contains("u1"));
        assert_eq!(corpus.len(), 3);
    }
}
