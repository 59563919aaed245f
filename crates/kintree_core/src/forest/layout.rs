//! Connector geometry for the rendered tree.
//!
//! # Responsibility
//! - Fix the card/gap pixel constants shared by every renderer.
//! - Derive couple widths, center lines, and child connector offsets
//!   from already-built unit shapes.
//!
//! # Invariants
//! - A couple block is exactly two cards plus one gap wide.
//! - A child's drop line lands under its own card, not under its couple
//!   block's midpoint.
//! - Sibling bridges span only adjacent drop points.

/// Rendered width of one person card, in pixels.
pub const CARD_WIDTH: f64 = 160.0;

/// Horizontal gap between the two cards of a couple, in pixels.
pub const SPOUSE_GAP: f64 = 48.0;

/// Horizontal extent of a unit's card block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupleGeometry {
    /// Full block width: one card, or two cards plus the spouse gap.
    pub width: f64,
    /// Distance from the block's left edge to its visual center line,
    /// where the connector to children drops from.
    pub center_offset: f64,
}

/// Computes the card-block geometry for a single person or a couple.
pub fn couple_geometry(has_spouse: bool) -> CoupleGeometry {
    if has_spouse {
        CoupleGeometry {
            width: CARD_WIDTH * 2.0 + SPOUSE_GAP,
            center_offset: CARD_WIDTH + SPOUSE_GAP / 2.0,
        }
    } else {
        CoupleGeometry {
            width: CARD_WIDTH,
            center_offset: CARD_WIDTH / 2.0,
        }
    }
}

/// Offset of a child's vertical drop line from its block center.
///
/// A married child renders as a couple block whose center sits in the
/// spouse gap; the line from the parents must land on the child's own
/// card, half a card-plus-gap to the left of that center.
pub fn child_drop_offset(child_has_spouse: bool) -> f64 {
    if child_has_spouse {
        -(CARD_WIDTH + SPOUSE_GAP) / 2.0
    } else {
        0.0
    }
}

/// Horizontal segment joining a displaced drop line back to the block
/// center, so the sibling rail stays connected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropBridge {
    /// Span of the bridge segment.
    pub width: f64,
    /// Bridge extends leftward from the block center when true.
    pub leftward: bool,
}

/// Connector geometry for one child position in a sibling row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildConnector {
    /// Half-width rail segment toward the previous sibling.
    pub joins_previous: bool,
    /// Half-width rail segment toward the next sibling.
    pub joins_next: bool,
    /// Drop line displacement from the block center.
    pub drop_offset: f64,
    /// Present when the drop line is displaced from the block center.
    pub bridge: Option<DropBridge>,
}

/// Computes connectors for the child at `index` among `sibling_count`.
pub fn child_connector(index: usize, sibling_count: usize, child_has_spouse: bool) -> ChildConnector {
    let drop_offset = child_drop_offset(child_has_spouse);
    let bridge = (drop_offset != 0.0).then(|| DropBridge {
        width: drop_offset.abs(),
        leftward: drop_offset < 0.0,
    });
    ChildConnector {
        joins_previous: index > 0,
        joins_next: index + 1 < sibling_count,
        drop_offset,
        bridge,
    }
}
