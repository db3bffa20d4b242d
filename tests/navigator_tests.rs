//! Navigator state machine tests
//!
//! Tests for cursor movement, confirmation, cancellation and multi-select
//! toggling, driven directly through key codes.

use crossterm::event::KeyCode;
use termenu::menu::{
    ItemFormat, Markers, MenuItem, MenuItems, MenuOutcome, Navigator, Step,
};

/// `[Coffee(1), Tea(2), Pork(3), Pasta(4), SEP, Exit(0)]`
fn lunch_menu() -> MenuItems {
    MenuItems::new(vec![
        MenuItem::selectable(1, "Coffee"),
        MenuItem::selectable(2, "Tea"),
        MenuItem::selectable(3, "Pork"),
        MenuItem::selectable(4, "Pasta"),
        MenuItem::separator(),
        MenuItem::exit(0, "Exit"),
    ])
    .unwrap()
}

/// Feed keys until the navigator finishes; `None` if it never does
fn press_all(nav: &mut Navigator, items: &mut MenuItems, keys: &[KeyCode]) -> Option<MenuOutcome> {
    for key in keys {
        if let Step::Finished(outcome) = nav.handle_key(items, *key) {
            return Some(outcome);
        }
    }
    None
}

/// Move the cursor onto `id` and toggle it with Space
fn toggle_id(nav: &mut Navigator, items: &mut MenuItems, id: u32) {
    let target = items.position_of(id).unwrap();
    nav.handle_key(items, KeyCode::Home);
    for _ in 0..target {
        nav.handle_key(items, KeyCode::Down);
    }
    assert_eq!(nav.handle_key(items, KeyCode::Char(' ')), Step::Continue);
}

fn finish_multi(nav: &mut Navigator, items: &mut MenuItems) -> Vec<u32> {
    match nav.handle_key(items, KeyCode::Esc) {
        Step::Finished(MenuOutcome::MultiSelected(ids)) => ids,
        other => panic!("expected a multi-select result, got {other:?}"),
    }
}

#[test]
fn test_up_and_down_wrap_for_all_sizes() {
    for count in 1..10u32 {
        let mut items =
            MenuItems::new((1..=count).map(|i| MenuItem::selectable(i, "x")).collect()).unwrap();
        let last = count as usize - 1;

        let mut nav = Navigator::single();
        nav.handle_key(&mut items, KeyCode::Up);
        assert_eq!(nav.index(), last, "up from 0 with {count} items");

        nav.handle_key(&mut items, KeyCode::Down);
        assert_eq!(nav.index(), 0, "down from last with {count} items");
    }
}

#[test]
fn test_enter_on_separator_never_finishes() {
    let mut items = MenuItems::new(vec![
        MenuItem::selectable(1, "A"),
        MenuItem::separator(),
        MenuItem::selectable(2, "B"),
    ])
    .unwrap();

    let mut nav = Navigator::single();
    nav.handle_key(&mut items, KeyCode::Down);
    assert_eq!(nav.index(), 1);
    for _ in 0..3 {
        assert_eq!(nav.handle_key(&mut items, KeyCode::Enter), Step::Continue);
    }
    assert_eq!(nav.index(), 1, "enter on a separator must not move the cursor");

    let mut nav = Navigator::multi(&mut items, Markers::default());
    nav.handle_key(&mut items, KeyCode::Down);
    assert_eq!(nav.handle_key(&mut items, KeyCode::Enter), Step::Continue);
    assert!(nav.selected().is_empty());
}

#[test]
fn test_separator_is_a_cursor_position() {
    let mut items = MenuItems::new(vec![
        MenuItem::selectable(1, "A"),
        MenuItem::separator(),
        MenuItem::selectable(2, "B"),
        MenuItem::exit(0, "Exit"),
    ])
    .unwrap();

    let mut nav = Navigator::single();
    let outcome = press_all(
        &mut nav,
        &mut items,
        &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter],
    );
    assert_eq!(outcome, Some(MenuOutcome::Selected(0)));
}

#[test]
fn test_enter_selects_highlighted_item() {
    let mut items = lunch_menu();
    let mut nav = Navigator::single();
    let outcome = press_all(&mut nav, &mut items, &[KeyCode::Down, KeyCode::Enter]);
    assert_eq!(outcome, Some(MenuOutcome::Selected(2)));
}

#[test]
fn test_escape_never_returns_an_id() {
    for moves in 0..8 {
        let mut items = lunch_menu();
        let mut nav = Navigator::single();
        let mut keys = vec![KeyCode::Down; moves];
        keys.push(KeyCode::Esc);

        assert_eq!(
            press_all(&mut nav, &mut items, &keys),
            Some(MenuOutcome::Cancelled)
        );
    }
}

#[test]
fn test_toggle_twice_deselects() {
    let mut items = lunch_menu();
    let mut nav = Navigator::multi(&mut items, Markers::default());

    toggle_id(&mut nav, &mut items, 2);
    toggle_id(&mut nav, &mut items, 2);

    assert_eq!(items.get(1).unwrap().alt(), "[ ]");
    assert!(finish_multi(&mut nav, &mut items).is_empty());
}

#[test]
fn test_toggle_order_sequence() {
    let mut items = lunch_menu();
    let mut nav = Navigator::multi(&mut items, Markers::default());

    for id in [3, 1, 3, 1, 2] {
        toggle_id(&mut nav, &mut items, id);
    }

    assert_eq!(finish_multi(&mut nav, &mut items), vec![2]);
}

#[test]
fn test_retoggled_id_moves_to_end() {
    let mut items = lunch_menu();
    let mut nav = Navigator::multi(&mut items, Markers::default());

    for id in [1, 2, 1, 4, 1] {
        toggle_id(&mut nav, &mut items, id);
    }

    assert_eq!(finish_multi(&mut nav, &mut items), vec![2, 4, 1]);
}

#[test]
fn test_lunch_scenario_confirm_via_exit() {
    let mut items = lunch_menu();
    let mut nav = Navigator::multi(&mut items, Markers::default());

    let outcome = press_all(
        &mut nav,
        &mut items,
        &[
            KeyCode::Enter, // Coffee
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Char(' '), // Pasta
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Enter, // Exit
        ],
    );

    assert_eq!(outcome, Some(MenuOutcome::MultiSelected(vec![1, 4])));
    assert_eq!(items.get(0).unwrap().alt(), "[x]");
    assert_eq!(items.get(1).unwrap().alt(), "[ ]");
    assert_eq!(items.get(3).unwrap().alt(), "[x]");
}

#[test]
fn test_custom_markers() {
    let mut items = lunch_menu();
    let markers = Markers {
        selected: "yes".to_string(),
        unselected: "no".to_string(),
    };
    let mut nav = Navigator::multi(&mut items, markers);
    assert_eq!(items.get(0).unwrap().alt(), "no");

    toggle_id(&mut nav, &mut items, 1);
    assert_eq!(items.get(0).unwrap().alt(), "yes");
}

#[test]
fn test_long_alt_is_cut_with_ellipsis() {
    let format = ItemFormat {
        width: 24,
        alt_max_width: 8,
    };
    let item = MenuItem::selectable(1, "Exchange rate").with_alt("1 USD = 0.9134 EUR");
    let line = item.format_line(&format);

    assert!(line.ends_with('…'));
    assert!(line.ends_with("1 USD =…"));
    assert_eq!(line.chars().count(), 24);

    let short = MenuItem::selectable(1, "Exchange rate").with_alt("0.91");
    assert!(!short.format_line(&format).contains('…'));
}
