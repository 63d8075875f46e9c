#![allow(clippy::float_cmp)]

use super::*;

const VIEWPORT: Size = Size { width: 1280.0, height: 720.0 };
const PANEL: Size = Size { width: 400.0, height: 200.0 };

fn open_mid_screen() -> PanelCore {
    PanelCore::open(Rect::new(600.0, 400.0, 24.0, 24.0), PANEL, VIEWPORT)
}

// =============================================================
// open
// =============================================================

#[test]
fn open_runs_initial_placement() {
    let core = open_mid_screen();
    let expected = placement::place(Rect::new(600.0, 400.0, 24.0, 24.0), PANEL, VIEWPORT);
    assert_eq!(core.origin(), expected);
    assert_eq!(core.rect().size(), PANEL);
    assert!(!core.is_dragging());
}

#[test]
fn reopened_panels_get_fresh_identities() {
    let first = open_mid_screen();
    let second = open_mid_screen();
    assert_ne!(first.id(), second.id());
}

#[test]
fn degenerate_anchor_opens_at_the_viewport_center() {
    let core = PanelCore::open(Rect::new(0.0, 0.0, 0.0, 0.0), PANEL, VIEWPORT);
    assert_eq!(core.origin(), placement::center(PANEL, VIEWPORT));
}

// =============================================================
// drag gesture
// =============================================================

#[test]
fn pointer_down_enters_dragging() {
    let mut core = open_mid_screen();
    let action = core.pointer_down(Point::new(500.0, 300.0));
    assert_eq!(action, PanelAction::None);
    assert!(core.is_dragging());
}

#[test]
fn pointer_move_while_idle_is_ignored() {
    let mut core = open_mid_screen();
    assert_eq!(core.pointer_move(Point::new(900.0, 500.0)), PanelAction::None);
    assert_eq!(core.origin(), open_mid_screen().origin());
}

#[test]
fn pointer_move_tracks_with_the_grab_offset() {
    let mut core = open_mid_screen();
    let origin = core.origin();
    core.pointer_down(Point::new(origin.x + 30.0, origin.y + 5.0));

    let action = core.pointer_move(Point::new(origin.x + 130.0, origin.y + 65.0));
    assert_eq!(action, PanelAction::Moved(Point::new(origin.x + 100.0, origin.y + 60.0)));
}

#[test]
fn dragging_off_screen_is_not_clamped() {
    let mut core = open_mid_screen();
    let origin = core.origin();
    core.pointer_down(Point::new(origin.x, origin.y));

    let action = core.pointer_move(Point::new(-300.0, -150.0));
    assert_eq!(action, PanelAction::Moved(Point::new(-300.0, -150.0)));
}

#[test]
fn repeated_moves_keep_the_same_offset() {
    let mut core = open_mid_screen();
    let origin = core.origin();
    core.pointer_down(Point::new(origin.x + 10.0, origin.y + 10.0));

    core.pointer_move(Point::new(200.0, 200.0));
    let action = core.pointer_move(Point::new(250.0, 260.0));
    assert_eq!(action, PanelAction::Moved(Point::new(240.0, 250.0)));
}

// =============================================================
// pointer-up and snapping
// =============================================================

#[test]
fn pointer_up_while_idle_is_ignored() {
    let mut core = open_mid_screen();
    assert_eq!(core.pointer_up(), PanelAction::None);
}

#[test]
fn pointer_up_leaves_dragging() {
    let mut core = open_mid_screen();
    core.pointer_down(Point::new(600.0, 400.0));
    core.pointer_up();
    assert!(!core.is_dragging());
}

#[test]
fn release_near_an_edge_snaps_once() {
    let mut core = open_mid_screen();
    core.pointer_down(Point::new(600.0, 400.0));
    core.sync_rect(Rect::new(15.0, 300.0, PANEL.width, PANEL.height));

    let action = core.pointer_up();
    assert_eq!(action, PanelAction::Moved(Point::new(0.0, 300.0)));
    assert_eq!(core.origin(), Point::new(0.0, 300.0));
}

#[test]
fn release_away_from_edges_does_not_move() {
    let mut core = open_mid_screen();
    core.pointer_down(Point::new(600.0, 400.0));
    core.sync_rect(Rect::new(440.0, 260.0, PANEL.width, PANEL.height));

    assert_eq!(core.pointer_up(), PanelAction::None);
    assert!(!core.is_dragging());
}

#[test]
fn snap_decision_uses_the_synced_rect() {
    let mut core = open_mid_screen();
    core.pointer_down(Point::new(600.0, 400.0));
    // Pointer math says one thing; the measured rect afterwards is what
    // counts for snapping.
    core.pointer_move(Point::new(640.0, 420.0));
    core.sync_rect(Rect::new(1265.0, 300.0, PANEL.width, PANEL.height));

    let action = core.pointer_up();
    assert_eq!(action, PanelAction::Moved(Point::new(880.0, 300.0)));
}

#[test]
fn drag_cycles_are_repeatable() {
    let mut core = open_mid_screen();

    core.pointer_down(Point::new(600.0, 400.0));
    core.pointer_move(Point::new(620.0, 410.0));
    core.pointer_up();
    assert!(!core.is_dragging());

    core.pointer_down(Point::new(100.0, 100.0));
    assert!(core.is_dragging());
    core.pointer_up();
    assert!(!core.is_dragging());
}
