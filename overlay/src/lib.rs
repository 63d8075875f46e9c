//! Core logic for the hovercard chat overlay.
//!
//! This crate holds everything that does not require a browser: resolving a
//! message's author from a read-only view of the host DOM, computing the
//! initial placement of a floating panel, and tracking the drag/snap gesture
//! for an open panel. The `hovercard` crate wraps these types with web-sys
//! adapters and is responsible only for wiring DOM events in and applying
//! returned positions back out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`author`] | Author resolution over the [`author::MessageView`] capability trait |
//! | [`geometry`] | Viewport-space points, sizes, and rectangles |
//! | [`placement`] | Initial panel placement, clamping, and edge snapping |
//! | [`panel`] | Per-panel drag state machine ([`panel::PanelCore`]) |
//! | [`consts`] | Shared numeric constants (snap distance, margins, etc.) |

pub mod author;
pub mod consts;
pub mod geometry;
pub mod panel;
pub mod placement;
