//! Panel placement and edge snapping.
//!
//! All math is in viewport coordinates; callers convert to document
//! coordinates (scroll offset) when writing styles. Placement is a one-shot
//! best-effort fit; it does not re-run on viewport resize.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::consts::{PLACEMENT_MARGIN_PX, SNAP_DISTANCE_PX};
use crate::geometry::{Point, Rect, Size};

/// Compute the initial origin for a panel of size `panel` anchored to
/// `anchor`.
///
/// The panel is centered horizontally over the anchor and placed above it
/// with a margin gap. The left edge is clamped into
/// `[margin, viewport.width - panel.width - margin]` (the lower bound wins on
/// viewports too narrow to honor both). If the top edge would land inside
/// the top margin band the panel flips below the anchor instead.
///
/// A degenerate anchor rectangle (detached or unrendered element) falls back
/// to the viewport center.
#[must_use]
pub fn place(anchor: Rect, panel: Size, viewport: Size) -> Point {
    if anchor.is_degenerate() {
        return center(panel, viewport);
    }

    let candidate = anchor.x - panel.width / 2.0 + anchor.width / 2.0;
    let max_left = viewport.width - panel.width - PLACEMENT_MARGIN_PX;
    let left = candidate.min(max_left).max(PLACEMENT_MARGIN_PX);

    let mut top = anchor.y - panel.height - PLACEMENT_MARGIN_PX;
    if top < PLACEMENT_MARGIN_PX {
        top = anchor.bottom() + PLACEMENT_MARGIN_PX;
    }

    Point::new(left, top)
}

/// Origin that centers a panel of size `panel` in the viewport.
#[must_use]
pub fn center(panel: Size, viewport: Size) -> Point {
    Point::new(
        (viewport.width - panel.width) / 2.0,
        (viewport.height - panel.height) / 2.0,
    )
}

/// Snap a released panel flush to any viewport edge it ended up within
/// [`SNAP_DISTANCE_PX`] of.
///
/// Each of the four edges is evaluated independently, so a panel can snap
/// into a corner. The comparisons are one-sided: a panel released past the
/// left/top edge re-enters flush, and the right/bottom checks win when both
/// sides of an axis qualify. Returns `None` when nothing moved.
#[must_use]
pub fn snap(rect: Rect, viewport: Size) -> Option<Point> {
    let mut origin = rect.origin();

    if rect.x <= SNAP_DISTANCE_PX {
        origin.x = 0.0;
    }
    if rect.y <= SNAP_DISTANCE_PX {
        origin.y = 0.0;
    }
    if viewport.width - rect.right() <= SNAP_DISTANCE_PX {
        origin.x = viewport.width - rect.width;
    }
    if viewport.height - rect.bottom() <= SNAP_DISTANCE_PX {
        origin.y = viewport.height - rect.height;
    }

    (origin != rect.origin()).then_some(origin)
}
