//! Shared numeric constants for the overlay crate.

// ── Placement ───────────────────────────────────────────────────

/// Gap in CSS pixels kept between the panel and its anchor, and the minimum
/// distance from the viewport's left/right edges after initial placement.
pub const PLACEMENT_MARGIN_PX: f64 = 10.0;

// ── Snapping ────────────────────────────────────────────────────

/// Maximum distance in CSS pixels at which a released panel edge snaps flush
/// to the matching viewport edge.
pub const SNAP_DISTANCE_PX: f64 = 20.0;

// ── Cosmetic ────────────────────────────────────────────────────

/// Lifetime of the click ripple element before it removes itself, in
/// milliseconds. Matches the ripple animation duration.
pub const RIPPLE_LIFETIME_MS: u32 = 600;
