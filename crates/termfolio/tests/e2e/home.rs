use crate::common::fixtures::sample_documents;
use crate::common::harness::AppTestHarness;
use termfolio::app::{App, Page};
use termfolio::view::HitTarget;

fn home_pane_chars(app: &App, index: usize) -> usize {
    match app.page() {
        Page::Home(home) => home.panes()[index].clock.char_index(),
        _ => panic!("home tab should be showing"),
    }
}

fn pane_complete(app: &App, index: usize) -> bool {
    match app.page() {
        Page::Home(home) => home.panes()[index].clock.is_complete(),
        _ => false,
    }
}

#[test]
fn test_transcript_types_command_by_command() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    harness.render().unwrap();
    harness.assert_screen_not_contains("Kevin Traver");

    harness.advance(1_000).unwrap();
    harness.assert_screen_contains("> whoami");
    harness.assert_screen_contains("Kevin Traver");
    harness.assert_screen_not_contains("Las Vegas, Nevada");

    harness.advance(9_000).unwrap();
    harness.assert_screen_contains("> defaults read locations");
    harness.assert_screen_contains("Drone Photographer");
    harness.assert_screen_contains("Las Vegas, Nevada");
}

#[test]
fn test_grid_empty_until_documents_arrive() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    harness.advance(500).unwrap();
    assert!(harness
        .app()
        .layout()
        .area_of(&HitTarget::DotfilePane(0))
        .is_none());

    harness.set_documents(sample_documents(6));
    harness.render().unwrap();
    for index in 0..3 {
        assert!(harness
            .app()
            .layout()
            .area_of(&HitTarget::DotfilePane(index))
            .is_some());
    }
    harness.assert_screen_contains("file0.zsh");
    harness.assert_screen_contains("file5.zsh");
}

#[test]
fn test_panes_type_their_files() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    harness.set_documents(sample_documents(6));
    harness.render().unwrap();
    harness.assert_screen_not_contains("alias g='git'");

    harness
        .advance_until(10_000, |app| pane_complete(app, 0))
        .unwrap();
    harness.assert_screen_contains("  1 # git helpers");
    harness.assert_screen_contains("  3 alias gs='git status'");
}

#[test]
fn test_staggered_start() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    harness.set_documents(sample_documents(6));
    harness.advance(400).unwrap();

    assert!(home_pane_chars(harness.app(), 0) > 0);
    assert_eq!(home_pane_chars(harness.app(), 1), 0);
    assert_eq!(home_pane_chars(harness.app(), 2), 0);
}

#[test]
fn test_pane_restarts_after_loop_delay() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    harness.set_documents(sample_documents(6));
    harness
        .advance_until(10_000, |app| pane_complete(app, 0))
        .unwrap();

    // Stays complete through most of the 3s delay
    harness.advance(2_500).unwrap();
    assert!(pane_complete(harness.app(), 0));

    harness
        .advance_until(1_000, |app| home_pane_chars(app, 0) == 0)
        .unwrap();
}

#[test]
fn test_hover_shows_label_and_click_opens_link() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    harness.set_documents(sample_documents(6));
    harness.render().unwrap();

    let pane = harness
        .app()
        .layout()
        .area_of(&HitTarget::DotfilePane(1))
        .unwrap();
    let (x, y) = (pane.x + pane.width / 2, pane.y + pane.height / 2);

    harness.assert_screen_not_contains("GitHub →");
    harness.mouse_move(x, y).unwrap();
    harness.assert_screen_contains("GitHub →");

    harness.click(x, y).unwrap();
    assert_eq!(
        harness.opened_links(),
        vec!["https://github.com/kevintraver".to_string()]
    );
}

#[test]
fn test_missing_files_leave_slots_out() {
    let mut harness = AppTestHarness::new(120, 40).unwrap();
    // Index 5 is configured for the bottom pane
    harness.set_documents(sample_documents(2));
    harness.render().unwrap();

    let Page::Home(home) = harness.app().page() else {
        panic!("home tab should be showing");
    };
    assert_eq!(home.panes().len(), 2);
    harness.assert_screen_not_contains("file5.zsh");
}
