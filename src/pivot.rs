// src/pivot.rs
use std::collections::HashSet;
use tracing::{debug, info};

use crate::curves::{build_curves, Curve};
use crate::filter::{filter_articles, Anchor};
use crate::index::CorpusIndex;
use crate::layout::{
    clip_label, place_article_items, place_articles, place_facets, FacetConnections, FacetSide,
    Measure, PlacedArticle, PlacedFacet, Viewport, ANCHOR_FONT, ANCHOR_LABEL_MAX,
};
use crate::models::{format_author_name, Corpus};
use crate::search::{search, SearchResults};
use crate::sort::{reorder, SortMode};
use crate::xref::CrossRefIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotPhase {
    #[default]
    Search,
    AnchorSelected,
    LaidOut,
}

/// What the user currently looks at. All derived geometry lives in the
/// `ViewFrame` returned by `lay_out`; setting a new anchor invalidates it.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub anchor: Option<Anchor>,
    pub phase: PivotPhase,
    pub sort: SortMode,
}

/// One fully derived view: the anchor, the displayed article row, both facet
/// bands, and the connectors between them. The presentation layer renders
/// this snapshot as-is.
#[derive(Debug, Clone)]
pub struct ViewFrame {
    pub anchor: Anchor,
    pub anchor_label: String,
    pub caption: &'static str,
    pub articles: Vec<PlacedArticle>,
    pub shown: usize,
    pub total: usize,
    pub counter: String,
    pub counter_left: f32,
    pub authors: Vec<PlacedFacet>,
    pub keywords: Vec<PlacedFacet>,
    pub curves: Vec<Curve>,
}

/// Owns the view state and the cross-reference index; every other component
/// is a pure function the engine drives per transition.
#[derive(Debug, Default)]
pub struct PivotEngine {
    state: ViewState,
    xref: CrossRefIndex,
}

impl PivotEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn xref(&self) -> &CrossRefIndex {
        &self.xref
    }

    pub fn search(&self, index: &CorpusIndex, query: &str) -> SearchResults {
        search(index, query)
    }

    /// Promote a search result or a secondary item to the anchor. Any prior
    /// derived state is discarded; the sort widget returns to stable order.
    pub fn select(&mut self, anchor: Anchor) {
        debug!("Anchor selected - value={:?}", anchor.value());
        self.xref.clear();
        self.state.anchor = Some(anchor);
        self.state.sort = SortMode::Natural;
        self.state.phase = PivotPhase::AnchorSelected;
    }

    /// Change the display order without changing the anchor; the caller runs
    /// `lay_out` again to rebuild the view. Ignored while searching.
    pub fn set_sort(&mut self, mode: SortMode) {
        if self.state.anchor.is_some() {
            self.state.sort = mode;
            self.state.phase = PivotPhase::AnchorSelected;
        }
    }

    /// Full reset back to the search state; idempotent.
    pub fn reset(&mut self) {
        self.state = ViewState::default();
        self.xref.clear();
    }

    /// Run the whole pipeline for the current anchor: filter, sort, place
    /// the article row, derive and place both facet bands, and rebuild the
    /// connectors. Returns `None` while no anchor is selected.
    pub fn lay_out(
        &mut self,
        corpus: &Corpus,
        index: &CorpusIndex,
        measure: &impl Measure,
        viewport: Viewport,
    ) -> Option<ViewFrame> {
        let anchor = self.state.anchor.clone()?;

        // 1) filter, then apply the current sort mode
        let urls = filter_articles(corpus, index, &anchor);
        let titles: Vec<String> = urls
            .iter()
            .filter_map(|u| corpus.get(u))
            .map(|a| a.title.clone())
            .collect();
        let titles = reorder(&titles, self.state.sort);

        // 2) article row, truncated to what the viewport holds
        let anchor_label = clip_label(anchor.value(), ANCHOR_LABEL_MAX);
        let anchor_width = measure.extent(&anchor_label, ANCHOR_FONT).w;
        let row = place_articles(anchor_width, viewport, titles.len());
        let articles = place_article_items(&titles[..row.shown], &row, measure);

        // 3) secondary facets over the visible prefix, anchor excluded
        let (author_links, keyword_links) = visible_facets(corpus, &urls, &articles, &anchor);
        let authors = place_facets(
            FacetSide::Authors,
            &author_links,
            index.authors(),
            &articles,
            viewport,
            measure,
        );
        let keywords = place_facets(
            FacetSide::Keywords,
            &keyword_links,
            index.keywords(),
            &articles,
            viewport,
            measure,
        );

        // 4) connectors; the cross-reference index is rebuilt from scratch
        self.xref.clear();
        let mut curves = build_curves(
            FacetSide::Authors,
            &authors,
            &author_links,
            &articles,
            &mut self.xref,
        );
        curves.extend(build_curves(
            FacetSide::Keywords,
            &keywords,
            &keyword_links,
            &articles,
            &mut self.xref,
        ));

        self.state.phase = PivotPhase::LaidOut;
        info!(
            "Laid out - anchor={:?}, shown={}/{}, authors={}, keywords={}, curves={}",
            anchor.value(),
            row.shown,
            row.total,
            authors.len(),
            keywords.len(),
            curves.len()
        );

        Some(ViewFrame {
            caption: anchor.caption(),
            anchor,
            anchor_label,
            articles,
            shown: row.shown,
            total: row.total,
            counter: row.counter,
            counter_left: row.counter_left,
            authors,
            keywords,
            curves,
        })
    }
}

/// Author and keyword connections for the displayed articles, one entry per
/// appearance. The anchor value is excluded from its own side only.
fn visible_facets(
    corpus: &Corpus,
    urls: &[String],
    visible_articles: &[PlacedArticle],
    anchor: &Anchor,
) -> (FacetConnections, FacetConnections) {
    let visible: HashSet<&str> = visible_articles.iter().map(|a| a.title.as_str()).collect();
    let mut authors = FacetConnections::new();
    let mut keywords = FacetConnections::new();

    for url in urls {
        let Some(article) = corpus.get(url) else {
            continue;
        };
        if !visible.contains(article.title.as_str()) {
            continue;
        }
        for author in &article.authors {
            let name = format_author_name(author);
            if matches!(anchor, Anchor::Author(v) if *v == name) {
                continue;
            }
            authors.entry(name).or_default().push(article.title.clone());
        }
        for topic in &article.topics {
            if matches!(anchor, Anchor::Keyword(v) if v == topic) {
                continue;
            }
            keywords
                .entry(topic.clone())
                .or_default()
                .push(article.title.clone());
        }
    }

    (authors, keywords)
}
