use crate::layout::Rect;

/// Clickable sub-regions of an item, in the item's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconZone {
    Detail,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Facet,
    Article,
}

const ZONE_INSET: f32 = 2.0;
const ZONE_EXTENT: f32 = 15.0;
const ZONE_EXTENT_WIDE: f32 = 21.0;
const DELETE_REACH_FACET: f32 = 13.0;
const DELETE_REACH_ARTICLE: f32 = 19.0;

/// Pure hit test for the detail and delete icons, independent of any
/// rendering surface. Article detail zones grow once an anchor is set; the
/// delete cross hangs off the item's right edge.
pub fn point_in_icon_zone(
    x: f32,
    y: f32,
    zone: IconZone,
    kind: ItemKind,
    item_width: f32,
    anchor_set: bool,
) -> bool {
    let region = icon_zone_rect(zone, kind, item_width, anchor_set);
    x >= region.x && x <= region.x + region.w && y >= region.y && y <= region.y + region.h
}

fn icon_zone_rect(zone: IconZone, kind: ItemKind, item_width: f32, anchor_set: bool) -> Rect {
    match zone {
        IconZone::Detail => {
            let extent = match kind {
                ItemKind::Article if anchor_set => ZONE_EXTENT_WIDE,
                _ => ZONE_EXTENT,
            };
            Rect {
                x: ZONE_INSET,
                y: ZONE_INSET,
                w: extent - ZONE_INSET,
                h: extent - ZONE_INSET,
            }
        }
        IconZone::Delete => {
            let reach = match kind {
                ItemKind::Facet => DELETE_REACH_FACET,
                ItemKind::Article => DELETE_REACH_ARTICLE,
            };
            Rect {
                x: item_width - reach,
                y: ZONE_INSET,
                w: reach,
                h: ZONE_EXTENT - ZONE_INSET,
            }
        }
    }
}
