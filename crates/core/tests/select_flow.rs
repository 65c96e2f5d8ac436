//! End-to-end keypress flows through a selection session.

use std::time::{Duration, Instant};

use term_pick_core::error::Error;
use term_pick_core::item::{Choice, Item};
use term_pick_core::key::KeyPress;
use term_pick_core::search::SEARCH_EXPIRY;
use term_pick_core::select::{Bounds, Outcome, Select, Status};

fn plain(values: &[&'static str]) -> Vec<Item<&'static str>> {
    values.iter().map(|value| Item::choice(*value)).collect()
}

#[test]
fn bounds_are_selectable_and_ordered() {
    let items = vec![
        Item::separator("── section ──"),
        Item::Choice(Choice::new("a").disabled()),
        Item::choice("b"),
        Item::separator("── section ──"),
        Item::choice("c"),
        Item::Choice(Choice::new("d").disabled_because("not yet")),
    ];
    let select = Select::new("pick one", items).unwrap();

    let Bounds { first, last } = select.bounds();
    assert!(first <= last);
    assert!(select.items()[first].is_selectable());
    assert!(select.items()[last].is_selectable());
    assert_eq!((first, last), (2, 4));
}

#[test]
fn zero_selectable_choices_fail_construction() {
    let items: Vec<Item<String>> = vec![
        Item::separator("only decoration"),
        Item::Choice(Choice::new("a".to_string()).disabled()),
    ];
    let result = Select::new("pick one", items);
    assert!(matches!(result, Err(Error::NoSelectableChoice)));
}

#[test]
fn down_skips_disabled_and_wraps() {
    let items = vec![
        Item::choice("a"),
        Item::Choice(Choice::new("b").disabled()),
        Item::choice("c"),
    ];
    let mut select = Select::new("pick one", items).unwrap();
    let now = Instant::now();

    assert_eq!(select.handle_key(KeyPress::Down, now), Outcome::Updated);
    assert_eq!(select.active_index(), 2); // skipped the disabled b

    assert_eq!(select.handle_key(KeyPress::Down, now), Outcome::Updated);
    assert_eq!(select.active_index(), 0); // wrapped back to a
}

#[test]
fn up_at_first_without_wrap_is_a_noop() {
    let mut select = Select::new("pick one", plain(&["a", "b", "c"]))
        .unwrap()
        .with_wrap(false);
    let now = Instant::now();

    assert_eq!(select.handle_key(KeyPress::Up, now), Outcome::Ignored);
    assert_eq!(select.active_index(), 0);
}

#[test]
fn down_at_last_without_wrap_is_a_noop() {
    let mut select = Select::new("pick one", plain(&["a", "b", "c"]))
        .unwrap()
        .with_wrap(false)
        .with_default(&"c");
    let now = Instant::now();

    assert_eq!(select.handle_key(KeyPress::Down, now), Outcome::Ignored);
    assert_eq!(select.active_index(), 2);
}

#[test]
fn typing_matches_by_prefix_and_expires() {
    let items = vec![
        Item::Choice(Choice::new(1).named("Alpha")),
        Item::Choice(Choice::new(2).named("Bravo")),
        Item::Choice(Choice::new(3).named("Charlie")),
    ];
    let mut select = Select::new("pick one", items).unwrap();
    let now = Instant::now();

    select.handle_key(KeyPress::Char('b'), now);
    assert_eq!(select.active_index(), 1);

    // Let the buffer expire, then type a prefix that would not match "b" + it
    let after_expiry = now + SEARCH_EXPIRY + Duration::from_millis(1);
    assert!(select.expire_search(after_expiry));
    select.handle_key(KeyPress::Char('c'), after_expiry);
    assert_eq!(select.active_index(), 2);
}

#[test]
fn stale_buffer_without_expiry_blocks_new_match() {
    let items = vec![
        Item::Choice(Choice::new(1).named("Alpha")),
        Item::Choice(Choice::new(2).named("Bravo")),
        Item::Choice(Choice::new(3).named("Charlie")),
    ];
    let mut select = Select::new("pick one", items).unwrap();
    let now = Instant::now();

    select.handle_key(KeyPress::Char('b'), now);
    // "bc" matches nothing, so the cursor stays on Bravo
    select.handle_key(KeyPress::Char('c'), now);
    assert_eq!(select.active_index(), 1);
}

#[test]
fn digit_jumps_to_selectable_target() {
    let mut select = Select::new("pick one", plain(&["a", "b", "c"])).unwrap();
    let now = Instant::now();

    assert_eq!(select.handle_key(KeyPress::Digit(2), now), Outcome::Updated);
    assert_eq!(select.active_index(), 1);
}

#[test]
fn digit_out_of_range_is_a_noop() {
    let mut select = Select::new("pick one", plain(&["a", "b", "c"])).unwrap();
    let now = Instant::now();

    assert_eq!(select.handle_key(KeyPress::Digit(9), now), Outcome::Ignored);
    assert_eq!(select.active_index(), 0);
}

#[test]
fn digit_on_unselectable_target_is_a_noop() {
    let items = vec![
        Item::choice("a"),
        Item::Choice(Choice::new("b").disabled()),
        Item::separator("─"),
        Item::choice("d"),
    ];
    let mut select = Select::new("pick one", items).unwrap();
    let now = Instant::now();

    assert_eq!(select.handle_key(KeyPress::Digit(2), now), Outcome::Ignored);
    assert_eq!(select.handle_key(KeyPress::Digit(3), now), Outcome::Ignored);
    assert_eq!(select.active_index(), 0);
}

#[test]
fn enter_submits_once_and_further_keys_are_ignored() {
    let mut select = Select::new("pick one", plain(&["a", "b", "c"])).unwrap();
    let now = Instant::now();

    select.handle_key(KeyPress::Down, now);
    assert_eq!(select.handle_key(KeyPress::Enter, now), Outcome::Submitted);
    assert_eq!(select.status(), Status::Done);
    assert!(select.search_deadline().is_none());

    // Done is terminal: nothing moves, nothing re-submits
    assert_eq!(select.handle_key(KeyPress::Down, now), Outcome::Ignored);
    assert_eq!(select.handle_key(KeyPress::Enter, now), Outcome::Ignored);
    assert_eq!(select.handle_key(KeyPress::Char('c'), now), Outcome::Ignored);
    assert_eq!(select.active_index(), 1);

    assert_eq!(select.into_value(), "b");
}

#[test]
fn default_value_sets_initial_active_index() {
    let select = Select::new("pick one", plain(&["a", "b", "c"]))
        .unwrap()
        .with_default(&"c");
    assert_eq!(select.active_index(), 2);
    assert_ne!(select.active_index(), select.bounds().first);
}
