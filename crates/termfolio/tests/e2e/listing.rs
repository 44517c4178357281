use crate::common::harness::AppTestHarness;
use crossterm::event::KeyCode;
use termfolio::app::{App, Page, TabId};

fn listing_complete(app: &App) -> bool {
    matches!(app.page(), Page::Listing(listing) if listing.is_complete())
}

fn finished_tab(key: char) -> AppTestHarness {
    let mut harness = AppTestHarness::new(160, 60).unwrap();
    harness.press(KeyCode::Char(key)).unwrap();
    harness.advance_until(15_000, listing_complete).unwrap();
    harness
}

#[test]
fn test_projects_panes_start_staggered() {
    let mut harness = AppTestHarness::new(160, 60).unwrap();
    harness.press(KeyCode::Char('2')).unwrap();
    harness.advance(200).unwrap();

    let Page::Listing(listing) = harness.app().page() else {
        panic!("projects tab should be showing");
    };
    let started: Vec<bool> = listing.typers().iter().map(|t| !t.typed().is_empty()).collect();
    assert_eq!(started, vec![true, false, false, false]);
    harness.assert_screen_not_contains("# startup I'm working on");
    harness.assert_screen_not_contains("Press [Enter]");
}

#[test]
fn test_projects_tab_prints_every_pane() {
    let harness = finished_tab('2');

    harness.assert_screen_contains("> curl https://hicira.com");
    harness.assert_screen_contains("# raycast extensions I've built");
    harness.assert_screen_contains("│ HiCira");
    harness.assert_screen_contains("│ StopTyping");
    harness.assert_screen_contains("→ View on Raycast Store");
    harness.assert_screen_contains("Press [Enter] to continue →");
}

#[test]
fn test_clicking_items_opens_their_url() {
    let mut harness = finished_tab('2');

    let (x, y) = harness.find_text("Flappy Hands").unwrap();
    harness.click(x, y).unwrap();
    let (x, y) = harness.find_text("View on Raycast Store").unwrap();
    harness.click(x, y).unwrap();

    assert_eq!(
        harness.opened_links(),
        vec![
            "https://flappyhands.fun".to_string(),
            "https://raycast.com/kevintraver".to_string(),
        ]
    );
}

#[test]
fn test_items_without_url_are_inert() {
    let mut harness = finished_tab('2');
    let (x, y) = harness.find_text("StopTyping").unwrap();
    harness.click(x, y).unwrap();

    assert!(harness.opened_links().is_empty());
    assert_eq!(harness.app().tab(), TabId::Projects);
}

#[test]
fn test_dev_tab() {
    let mut harness = finished_tab('3');

    harness.assert_screen_contains("> ls -la /Applications");
    harness.assert_screen_contains("> brew list | grep favorites");
    harness.assert_screen_contains("│ 1Password");
    harness.assert_screen_contains("│ lazygit");

    let (x, y) = harness.find_text("Neovim").unwrap();
    harness.click(x, y).unwrap();
    assert_eq!(harness.opened_links(), vec!["https://neovim.io".to_string()]);

    harness.press(KeyCode::Enter).unwrap();
    assert_eq!(harness.app().tab(), TabId::Social);
}

#[test]
fn test_revisiting_a_tab_retypes_it() {
    let mut harness = finished_tab('2');
    harness.press(KeyCode::Char('1')).unwrap();
    harness.press(KeyCode::Char('2')).unwrap();

    assert!(!listing_complete(harness.app()));
    harness.assert_screen_not_contains("│ HiCira");
}
