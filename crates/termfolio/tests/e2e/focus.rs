use crate::common::fixtures::long_document;
use crate::common::harness::AppTestHarness;
use termfolio::app::{App, Page};

fn first_pane_chars(app: &App) -> usize {
    match app.page() {
        Page::Home(home) => home.panes()[0].clock.char_index(),
        _ => panic!("home tab should be showing"),
    }
}

#[test]
fn test_focus_loss_freezes_background_reveal() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    harness.set_documents(vec![long_document(5_000)]);
    harness.advance(500).unwrap();
    let before = first_pane_chars(harness.app());
    assert!(before > 0);

    harness.focus_lost();
    assert!(!harness.app().is_focused());
    harness.advance(2_000).unwrap();
    assert_eq!(first_pane_chars(harness.app()), before);

    // The transcript keeps typing while unfocused
    harness.assert_screen_contains("Kevin Traver");
}

#[test]
fn test_focus_regain_does_not_catch_up() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    harness.set_documents(vec![long_document(5_000)]);
    harness.advance(500).unwrap();
    harness.focus_lost();
    harness.advance(10_000).unwrap();
    let frozen = first_pane_chars(harness.app());

    harness.focus_gained();
    // First frame back only re-anchors
    harness.advance(16).unwrap();
    assert_eq!(first_pane_chars(harness.app()), frozen);

    harness.advance(1_000).unwrap();
    let resumed = first_pane_chars(harness.app()) - frozen;
    assert!(resumed > 0);
    // About one second's worth, not ten
    assert!(resumed < 200, "caught up {resumed} chars");
}

#[test]
fn test_documents_arriving_unfocused_stay_paused() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    harness.focus_lost();
    harness.set_documents(vec![long_document(5_000)]);
    harness.advance(1_000).unwrap();

    let Page::Home(home) = harness.app().page() else {
        panic!("home tab should be showing");
    };
    assert_eq!(home.panes()[0].clock.char_index(), 0);
    assert!(!home.panes()[0].clock.is_frame_scheduled());
}
