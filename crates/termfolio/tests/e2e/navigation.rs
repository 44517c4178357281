use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use termfolio::app::{Page, TabId};
use termfolio::view::HitTarget;

#[test]
fn test_tab_bar_lists_every_tab() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    for label in ["~ home", "projects", "dev", "social"] {
        harness.assert_screen_contains(label);
    }
    harness.assert_screen_contains("● ~ home");
}

#[test]
fn test_dot_follows_active_tab() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    harness.press(KeyCode::Tab).unwrap();

    assert_eq!(harness.app().tab(), TabId::Projects);
    harness.assert_screen_contains("● projects");
    harness.assert_screen_not_contains("● ~ home");
}

#[test]
fn test_enter_loops_back_home() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    let mut visited = Vec::new();
    for _ in 0..4 {
        harness.press(KeyCode::Enter).unwrap();
        visited.push(harness.app().tab());
    }
    assert_eq!(
        visited,
        vec![TabId::Projects, TabId::Dev, TabId::Social, TabId::Home]
    );
    assert!(matches!(harness.app().page(), Page::Home(_)));
}

#[test]
fn test_number_and_vim_keys() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    harness.press(KeyCode::Char('3')).unwrap();
    assert_eq!(harness.app().tab(), TabId::Dev);
    harness.press(KeyCode::Char('l')).unwrap();
    assert_eq!(harness.app().tab(), TabId::Social);
    harness.press(KeyCode::Char('h')).unwrap();
    assert_eq!(harness.app().tab(), TabId::Dev);
    harness.press(KeyCode::Char('1')).unwrap();
    assert_eq!(harness.app().tab(), TabId::Home);
    harness.send_key(KeyCode::BackTab, KeyModifiers::SHIFT).unwrap();
    assert_eq!(harness.app().tab(), TabId::Social);
}

#[test]
fn test_clicking_a_tab_switches_to_it() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    let (x, y) = harness.find_text("social").unwrap();
    harness.click(x, y).unwrap();

    assert_eq!(harness.app().tab(), TabId::Social);
    harness.assert_screen_contains("● social");
}

#[test]
fn test_green_dot_toggles_maximize() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();
    // Inset window: rounded corner one row down, four columns in
    assert_eq!(harness.buffer()[(4, 1)].symbol(), "╭");

    let button = harness
        .app()
        .layout()
        .area_of(&HitTarget::MaximizeButton)
        .unwrap();
    harness.click(button.x, button.y).unwrap();

    assert!(harness.app().is_maximized());
    assert_eq!(harness.buffer()[(0, 0)].symbol(), "┌");

    harness.press(KeyCode::Char('m')).unwrap();
    assert!(!harness.app().is_maximized());
    assert_eq!(harness.buffer()[(4, 1)].symbol(), "╭");
}

#[test]
fn test_ctrl_c_quits() {
    let mut harness = AppTestHarness::new(100, 30).unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.should_quit());
}
