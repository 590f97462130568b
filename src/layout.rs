// src/layout.rs
use itertools::Itertools;
use std::collections::BTreeMap;
use std::f32::consts::SQRT_2;
use tracing::debug;

/* -------------------------------------------------------------------------- */
/* Geometry and measurement                                                   */
/* -------------------------------------------------------------------------- */

/// Minimum horizontal space between two article items.
pub const SPACING_FLOOR: f32 = 60.0;
/// Spacing used when a single article is displayed.
pub const LONE_ITEM_SPACING: f32 = 80.0;
/// Horizontal viewport share reserved to the right of the article row.
pub const RIGHT_RESERVE: f32 = 200.0;
/// The article row starts this far left of the anchor's right edge.
pub const ANCHOR_OVERHANG: f32 = 10.0;
/// Vertical offset of the article row.
pub const ROW_TOP: f32 = 200.0;
/// Facet bands keep this margin from the viewport edges and the article row.
pub const BAND_PAD: f32 = 30.0;
/// Vertical start of the author band.
pub const AUTHOR_BAND_TOP: f32 = 5.0;
/// Items that exhaust their band are parked here, outside the viewport.
pub const OFFSCREEN_TOP: f32 = -100.0;

pub const FACET_FONT_MIN: f32 = 9.0;
pub const FACET_FONT_MAX: f32 = 14.0;
pub const ANCHOR_FONT: f32 = 14.0;
pub const ARTICLE_FONT: f32 = 12.0;

pub const ANCHOR_LABEL_MAX: usize = 25;
pub const ITEM_LABEL_MAX: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Text extents as the presentation surface would measure them. Tests use a
/// fixed-advance implementation; the real collaborator reports rendered
/// bounding boxes.
pub trait Measure {
    fn extent(&self, text: &str, font_px: f32) -> Extent;
}

/// Bounding box of an item rotated 45 degrees about its left edge.
pub fn rotated_box(left: f32, top: f32, extent: Extent) -> Rect {
    let side = (extent.w + extent.h) / SQRT_2;
    Rect {
        x: left,
        y: top,
        w: side,
        h: side,
    }
}

/// Clip a display string to `max` characters, with an ellipsis when clipped.
pub fn clip_label(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let clipped: String = text.chars().take(max).collect();
        format!("{}...", clipped)
    } else {
        text.to_string()
    }
}

/* -------------------------------------------------------------------------- */
/* Article row                                                                */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone)]
pub struct ArticleRow {
    /// Left offsets for the displayed prefix of the input.
    pub positions: Vec<f32>,
    pub shown: usize,
    pub total: usize,
    pub spacing: f32,
    pub counter_left: f32,
    pub counter: String,
    pub top: f32,
}

/// Spread `total` articles to the right of the anchor. When the ideal
/// spacing falls below the floor, the count that fits at floor spacing is
/// displayed and the tail is truncated in current sort order; the shown
/// count is never larger than the requested count.
pub fn place_articles(anchor_width: f32, viewport: Viewport, total: usize) -> ArticleRow {
    let mut left = anchor_width - ANCHOR_OVERHANG;
    let usable = viewport.width - RIGHT_RESERVE;
    let remaining = usable - (left + SPACING_FLOOR);

    let mut spacing = if total > 1 {
        remaining / (total as f32 - 1.0)
    } else {
        LONE_ITEM_SPACING
    };
    if spacing < SPACING_FLOOR {
        spacing = SPACING_FLOOR;
    }

    let mut shown = total;
    if spacing == SPACING_FLOOR {
        let fit = (remaining / SPACING_FLOOR).floor() as i64 + 1;
        shown = fit.clamp(0, total as i64) as usize;
    }
    if spacing > SPACING_FLOOR {
        left -= spacing - SPACING_FLOOR;
    }

    let counter_left = left + spacing + 5.0;
    let mut positions = Vec::with_capacity(shown);
    for _ in 0..shown {
        left += spacing;
        positions.push(left);
    }

    if shown < total {
        debug!("Article row truncated - shown={}, total={}, spacing={}", shown, total, spacing);
    }

    ArticleRow {
        positions,
        shown,
        total,
        spacing,
        counter_left,
        counter: counter_text(shown, total),
        top: ROW_TOP,
    }
}

fn counter_text(shown: usize, total: usize) -> String {
    if shown < total {
        format!("{} of {} articles", shown, total)
    } else if shown == 1 {
        "1 article".to_string()
    } else {
        format!("{} articles", shown)
    }
}

#[derive(Debug, Clone)]
pub struct PlacedArticle {
    pub title: String,
    /// Display string, clipped to `ITEM_LABEL_MAX`.
    pub label: String,
    pub left: f32,
    pub top: f32,
    /// Unrotated label width, used for connector endpoints.
    pub text_width: f32,
    /// Bounding box after the 45-degree rotation.
    pub bbox: Rect,
}

pub fn place_article_items(
    titles: &[String],
    row: &ArticleRow,
    measure: &impl Measure,
) -> Vec<PlacedArticle> {
    titles
        .iter()
        .zip(&row.positions)
        .map(|(title, &left)| {
            let label = clip_label(title, ITEM_LABEL_MAX);
            let extent = measure.extent(&label, ARTICLE_FONT);
            PlacedArticle {
                title: title.clone(),
                label,
                left,
                top: row.top,
                text_width: extent.w,
                bbox: rotated_box(left, row.top, extent),
            }
        })
        .collect()
}

/* -------------------------------------------------------------------------- */
/* Facet bands                                                                */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSide {
    Authors,
    Keywords,
}

/// Facet value -> connected visible article titles. One entry per
/// appearance, so a name listed twice in one byline connects twice.
pub type FacetConnections = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone)]
pub struct PlacedFacet {
    pub value: String,
    pub left: f32,
    pub top: f32,
    pub font_px: f32,
    pub width: f32,
    pub height: f32,
    pub connections: usize,
    pub offscreen: bool,
}

/// Strict total order for facet display: connection count descending, then
/// corpus-wide frequency descending, then value ascending.
pub fn facet_order(connections: &FacetConnections, frequency: &BTreeMap<String, u32>) -> Vec<String> {
    connections
        .keys()
        .sorted_by(|a, b| {
            let conn = connections[b.as_str()]
                .len()
                .cmp(&connections[a.as_str()].len());
            let freq = frequency
                .get(b.as_str())
                .copied()
                .unwrap_or(0)
                .cmp(&frequency.get(a.as_str()).copied().unwrap_or(0));
            conn.then(freq).then_with(|| a.cmp(b))
        })
        .cloned()
        .collect()
}

/// March facets through the band above (authors) or below (keywords) the
/// article row. A candidate whose box overlaps the previous item widens that
/// one gap to the previous item's height; items that exhaust the band are
/// parked off-screen rather than dropped.
pub fn place_facets(
    side: FacetSide,
    connections: &FacetConnections,
    frequency: &BTreeMap<String, u32>,
    articles: &[PlacedArticle],
    viewport: Viewport,
    measure: &impl Measure,
) -> Vec<PlacedFacet> {
    if connections.is_empty() || articles.is_empty() {
        return Vec::new();
    }

    let mut band_ref = articles[0].bbox;
    for a in &articles[1..] {
        if band_ref.w < a.bbox.w {
            band_ref = a.bbox;
        }
    }

    let mut top_margin = match side {
        FacetSide::Authors => AUTHOR_BAND_TOP,
        FacetSide::Keywords => viewport.height - BAND_PAD,
    };
    let remaining = match side {
        FacetSide::Authors => band_ref.y - BAND_PAD,
        FacetSide::Keywords => top_margin - BAND_PAD - (band_ref.y + band_ref.w),
    };
    let count = connections.len();
    let spacing = if count > 1 {
        remaining / (count as f32 - 1.0)
    } else {
        0.0
    };
    match side {
        FacetSide::Authors => top_margin -= spacing,
        FacetSide::Keywords => top_margin += spacing,
    }

    let (min_conn, max_conn) = connections
        .values()
        .map(|linked| linked.len())
        .minmax()
        .into_option()
        .unwrap_or((0, 0));

    let mut placed = Vec::with_capacity(count);
    let mut prev: Option<Rect> = None;
    for value in facet_order(connections, frequency) {
        let linked = &connections[value.as_str()];
        let font_px = facet_font(linked.len(), min_conn, max_conn);
        let extent = measure.extent(&value, font_px);

        // horizontal position: mean left offset of the connected articles
        let mut total_x = 0.0;
        for a in articles {
            if linked.contains(&a.title) {
                total_x += a.bbox.x;
            }
        }
        let left = total_x / linked.len() as f32;

        let mut step = spacing;
        if let Some(p) = prev {
            if left + extent.w >= p.x && spacing < p.h {
                step = p.h;
            }
        }
        match side {
            FacetSide::Authors => top_margin += step,
            FacetSide::Keywords => top_margin -= step,
        }
        let in_band = match side {
            FacetSide::Authors => top_margin <= remaining,
            FacetSide::Keywords => top_margin >= band_ref.y + band_ref.w,
        };
        let top = if in_band { top_margin } else { OFFSCREEN_TOP };

        prev = Some(Rect {
            x: left,
            y: top,
            w: extent.w,
            h: extent.h,
        });
        placed.push(PlacedFacet {
            value,
            left,
            top,
            font_px,
            width: extent.w,
            height: extent.h,
            connections: linked.len(),
            offscreen: !in_band,
        });
    }

    let parked = placed.iter().filter(|f| f.offscreen).count();
    if parked > 0 {
        debug!("Facet band full - side={:?}, placed={}, offscreen={}", side, placed.len(), parked);
    }
    placed
}

fn facet_font(conn: usize, min_conn: usize, max_conn: usize) -> f32 {
    if conn == min_conn {
        FACET_FONT_MIN
    } else if conn == max_conn {
        FACET_FONT_MAX
    } else {
        FACET_FONT_MIN
            + ((conn - min_conn) as f32 / (max_conn - min_conn) as f32)
                * (FACET_FONT_MAX - FACET_FONT_MIN)
    }
}
