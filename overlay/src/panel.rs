//! Floating panel state machine.
//!
//! `PanelCore` tracks one open panel's rectangle and drag gesture, separated
//! from the DOM node so it can be tested without a browser. The host layer
//! feeds pointer positions in and applies returned [`PanelAction`]s back to
//! the node's style. Each open panel owns exactly one `PanelCore`; closing a
//! panel drops it, and reopening creates a fresh one.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use uuid::Uuid;

use crate::geometry::{Point, Rect, Size};
use crate::placement;

/// Unique identifier for an open panel instance.
pub type PanelId = Uuid;

/// Drag gesture state for one open panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No drag in progress; waiting for a pointer-down on the header.
    Idle,
    /// Pointer held on the header; the panel follows the pointer.
    Dragging {
        /// Pointer position minus panel origin, captured at drag start.
        grab_offset: Point,
    },
}

/// Position updates returned from pointer handlers for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    /// Nothing to apply.
    None,
    /// Write this origin to the panel node's style.
    Moved(Point),
}

/// Core state for one floating panel, in viewport coordinates.
#[derive(Debug, Clone)]
pub struct PanelCore {
    id: PanelId,
    rect: Rect,
    viewport: Size,
    drag: DragState,
}

impl PanelCore {
    /// Open a panel of size `panel` anchored to `anchor`, running the initial
    /// placement algorithm.
    #[must_use]
    pub fn open(anchor: Rect, panel: Size, viewport: Size) -> Self {
        let origin = placement::place(anchor, panel, viewport);
        Self {
            id: Uuid::new_v4(),
            rect: Rect::from_origin_size(origin, panel),
            viewport,
            drag: DragState::Idle,
        }
    }

    #[must_use]
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Current panel rectangle as last synced or computed.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Current panel origin.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.rect.origin()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Replace the tracked rectangle with a freshly measured one.
    ///
    /// The snap decision on pointer-up must be made against post-layout
    /// geometry; hosts call this with the measured bounding rect before
    /// [`Self::pointer_up`].
    pub fn sync_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Pointer-down on the header: enter the dragging state.
    pub fn pointer_down(&mut self, pointer: Point) -> PanelAction {
        self.drag = DragState::Dragging {
            grab_offset: Point::new(pointer.x - self.rect.x, pointer.y - self.rect.y),
        };
        PanelAction::None
    }

    /// Pointer movement: while dragging, the panel tracks the pointer with
    /// the captured offset. Positions are not clamped; dragging off-screen
    /// is permitted.
    pub fn pointer_move(&mut self, pointer: Point) -> PanelAction {
        match self.drag {
            DragState::Idle => PanelAction::None,
            DragState::Dragging { grab_offset } => {
                self.rect.x = pointer.x - grab_offset.x;
                self.rect.y = pointer.y - grab_offset.y;
                PanelAction::Moved(self.rect.origin())
            }
        }
    }

    /// Pointer release: leave the dragging state, then run the snap check
    /// exactly once against the current (freshly synced) rectangle.
    pub fn pointer_up(&mut self) -> PanelAction {
        if !self.is_dragging() {
            return PanelAction::None;
        }
        self.drag = DragState::Idle;

        match placement::snap(self.rect, self.viewport) {
            Some(origin) => {
                self.rect.x = origin.x;
                self.rect.y = origin.y;
                PanelAction::Moved(origin)
            }
            None => PanelAction::None,
        }
    }
}
