use crate::common::harness::AppTestHarness;
use crossterm::event::KeyCode;
use termfolio::app::{App, Page, TabId};

fn social_complete(app: &App) -> bool {
    matches!(app.page(), Page::Social(social) if social.is_complete())
}

#[test]
fn test_dig_answer_appears_after_command() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    harness.press(KeyCode::Char('4')).unwrap();
    harness.assert_screen_not_contains(";; ANSWER SECTION:");

    harness.advance_until(10_000, social_complete).unwrap();
    harness.assert_screen_contains("> dig @kevintraver");
    harness.assert_screen_contains(";; ANSWER SECTION:");
    harness.assert_screen_contains("github.com/kevintraver");
    harness.assert_screen_contains("instagram.com/kevintraver");
    harness.assert_screen_contains("Press [Enter] to go home");
}

#[test]
fn test_records_open_profiles() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    harness.press(KeyCode::Char('4')).unwrap();
    harness.advance_until(10_000, social_complete).unwrap();

    let (x, y) = harness.find_text("instagram.").unwrap();
    harness.click(x, y).unwrap();
    assert_eq!(
        harness.opened_links(),
        vec!["https://instagram.com/kevintraver".to_string()]
    );
}

#[test]
fn test_enter_goes_home() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    harness.press(KeyCode::Char('4')).unwrap();
    harness.press(KeyCode::Enter).unwrap();

    assert_eq!(harness.app().tab(), TabId::Home);
    harness.assert_screen_contains("● ~ home");
}
