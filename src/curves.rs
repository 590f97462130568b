// src/curves.rs
use std::f32::consts::SQRT_2;
use xxhash_rust::xxh3::xxh3_64;

use crate::layout::{FacetConnections, FacetSide, PlacedArticle, PlacedFacet, Rect};
use crate::xref::CrossRefIndex;

// Control points sit at 10/34 and 7/34 of the vertical span; these ratios
// set the connector curvature and must not drift.
const SPAN_DIV: f32 = 34.0;
const SOURCE_PULL: f32 = 10.0;
const TARGET_PULL: f32 = 7.0;

/// Stable identity of one drawn connector, derived from its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(pub u64);

#[derive(Debug, Clone)]
pub struct Curve {
    pub id: PathId,
    pub side: FacetSide,
    pub facet: String,
    pub article: String,
    /// Basis-spline control points, source first.
    pub points: [(f32, f32); 4],
}

/// Control points for one facet-to-article connector. Author connectors
/// leave the facet's bottom edge and land near the article's top-left;
/// keyword connectors leave the top edge and land at the far end of the
/// rotated label.
pub fn curve_between(
    side: FacetSide,
    facet_box: &Rect,
    article_box: &Rect,
    article_text_width: f32,
) -> [(f32, f32); 4] {
    let x1 = facet_box.x + facet_box.w / 2.0;
    let y1 = match side {
        FacetSide::Authors => facet_box.y + facet_box.h,
        FacetSide::Keywords => facet_box.y,
    };
    let (x2, y2) = match side {
        FacetSide::Authors => (article_box.x + 10.0, article_box.y + 5.0),
        FacetSide::Keywords => (
            article_box.x + 5.0 + article_text_width / SQRT_2,
            article_box.y + article_box.h - 5.0,
        ),
    };

    let step = (y2 - y1) / SPAN_DIV;
    [
        (x1, y1),
        (x1, y1 + step * SOURCE_PULL),
        (x2, y2 - step * TARGET_PULL),
        (x2, y2),
    ]
}

fn path_identity(points: &[(f32, f32); 4]) -> PathId {
    let mut repr = String::with_capacity(64);
    for (x, y) in points {
        repr.push_str(&format!("{:.3},{:.3};", x, y));
    }
    PathId(xxh3_64(repr.as_bytes()))
}

/// Draw one connector per on-screen facet and connected displayed article,
/// recording every path identity on both sides of the cross-reference
/// index.
pub fn build_curves(
    side: FacetSide,
    facets: &[PlacedFacet],
    connections: &FacetConnections,
    articles: &[PlacedArticle],
    xref: &mut CrossRefIndex,
) -> Vec<Curve> {
    let mut curves = Vec::new();

    for facet in facets {
        if facet.offscreen {
            continue;
        }
        let Some(linked) = connections.get(&facet.value) else {
            continue;
        };
        let facet_box = Rect {
            x: facet.left,
            y: facet.top,
            w: facet.width,
            h: facet.height,
        };

        for article in articles {
            if !linked.contains(&article.title) {
                continue;
            }
            let points = curve_between(side, &facet_box, &article.bbox, article.text_width);
            let id = path_identity(&points);
            xref.record(&facet.value, &article.title, id);
            curves.push(Curve {
                id,
                side,
                facet: facet.value.clone(),
                article: article.title.clone(),
                points,
            });
        }
    }

    curves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ROW_TOP;

    fn facet_box() -> Rect {
        Rect {
            x: 300.0,
            y: 40.0,
            w: 50.0,
            h: 16.0,
        }
    }

    fn article_box() -> Rect {
        Rect {
            x: 500.0,
            y: ROW_TOP,
            w: 60.0,
            h: 60.0,
        }
    }

    #[test]
    fn author_curves_leave_the_bottom_edge() {
        let points = curve_between(FacetSide::Authors, &facet_box(), &article_box(), 70.0);
        let (x1, y1) = points[0];
        let (x2, y2) = points[3];
        assert_eq!((x1, y1), (325.0, 56.0));
        assert_eq!((x2, y2), (510.0, 205.0));

        // control points at 10/34 and 7/34 of the vertical span
        let span = y2 - y1;
        assert_eq!(points[1], (x1, y1 + span / 34.0 * 10.0));
        assert_eq!(points[2], (x2, y2 - span / 34.0 * 7.0));
    }

    #[test]
    fn keyword_curves_leave_the_top_edge() {
        let facet = Rect {
            x: 300.0,
            y: 700.0,
            w: 50.0,
            h: 16.0,
        };
        let points = curve_between(FacetSide::Keywords, &facet, &article_box(), 70.0);
        let (x1, y1) = points[0];
        let (x2, y2) = points[3];
        assert_eq!((x1, y1), (325.0, 700.0));
        assert!((x2 - (505.0 + 70.0 / SQRT_2)).abs() < 1e-3);
        assert_eq!(y2, 255.0);
    }

    #[test]
    fn identities_are_stable_for_identical_geometry() {
        let a = curve_between(FacetSide::Authors, &facet_box(), &article_box(), 70.0);
        let b = curve_between(FacetSide::Authors, &facet_box(), &article_box(), 70.0);
        assert_eq!(path_identity(&a), path_identity(&b));

        let other = Rect {
            x: 501.0,
            ..article_box()
        };
        let c = curve_between(FacetSide::Authors, &facet_box(), &other, 70.0);
        assert_ne!(path_identity(&a), path_identity(&c));
    }

    #[test]
    fn offscreen_facets_draw_nothing() {
        let facets = vec![PlacedFacet {
            value: "Politics".to_string(),
            left: 300.0,
            top: -100.0,
            font_px: 9.0,
            width: 50.0,
            height: 11.0,
            connections: 1,
            offscreen: true,
        }];
        let mut connections = FacetConnections::new();
        connections.insert("Politics".to_string(), vec!["Budget Vote".to_string()]);
        let articles = vec![PlacedArticle {
            title: "Budget Vote".to_string(),
            label: "Budget Vote".to_string(),
            left: 500.0,
            top: ROW_TOP,
            text_width: 70.0,
            bbox: article_box(),
        }];

        let mut xref = CrossRefIndex::default();
        let curves = build_curves(FacetSide::Keywords, &facets, &connections, &articles, &mut xref);
        assert!(curves.is_empty());
        assert!(xref.is_empty());
    }
}
