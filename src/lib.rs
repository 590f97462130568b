//! Pivot/layout engine for an explorable news-article visualization.
//!
//! A fixed corpus of articles, their authors, and topic keywords is loaded
//! once; the user searches for an entity, pivots to it, and the engine
//! derives everything the rendering layer needs: the filtered article row,
//! the surrounding author/keyword bands, and the connector curves between
//! them. All computation is synchronous and in-memory; rendering, pointer
//! dispatch, and transitions stay in the presentation layer.

pub mod curves;
pub mod dataset;
pub mod detail;
pub mod filter;
pub mod hit;
pub mod index;
pub mod layout;
pub mod models;
pub mod pivot;
pub mod search;
pub mod sort;
pub mod xref;

pub use curves::{Curve, PathId};
pub use dataset::load_corpus;
pub use detail::{article_detail, facet_detail, Detail};
pub use filter::{filter_articles, Anchor};
pub use hit::{point_in_icon_zone, IconZone, ItemKind};
pub use index::CorpusIndex;
pub use layout::{FacetSide, Measure, PlacedArticle, PlacedFacet, Viewport};
pub use models::{format_author_name, Article, AuthorRef, Corpus};
pub use pivot::{PivotEngine, PivotPhase, ViewFrame, ViewState};
pub use search::{search, SearchHit, SearchResults};
pub use sort::{reorder, SortMode};
pub use xref::CrossRefIndex;
