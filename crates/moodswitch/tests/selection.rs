//! Integration tests for the theme registry and selection store.

use std::cell::RefCell;
use std::rc::Rc;

use moodswitch::{AnimationKind, Color, MoodChange, MoodId, SelectionStore, ThemeRegistry};
use proptest::prelude::*;

fn any_mood() -> impl Strategy<Value = MoodId> {
    prop::sample::select(MoodId::ALL.to_vec())
}

#[test]
fn test_every_mood_has_a_theme() {
    let registry = ThemeRegistry::standard();
    let moods: Vec<MoodId> = registry.all_moods().collect();
    assert_eq!(moods.len(), 4);
    for mood in moods {
        let theme = registry.lookup(mood);
        assert_eq!(theme.background.angle_deg, 135);
    }
}

#[test]
fn test_fresh_store_starts_calm() {
    let store = SelectionStore::new();
    let (mood, theme) = store.current();
    assert_eq!(mood, MoodId::Calm);
    assert_eq!(theme, ThemeRegistry::standard().lookup(MoodId::Calm));
}

#[test]
fn test_two_observers_see_happy_in_order() {
    let store = SelectionStore::new();
    let seen: Rc<RefCell<Vec<(usize, MoodId)>>> = Rc::new(RefCell::new(Vec::new()));

    for observer in 0..2 {
        let seen = Rc::clone(&seen);
        store.subscribe(move |store, _| {
            seen.borrow_mut().push((observer, store.current_mood()));
        });
    }

    store.select(MoodId::Happy);

    assert_eq!(
        *seen.borrow(),
        vec![(0, MoodId::Happy), (1, MoodId::Happy)]
    );
}

#[test]
fn test_energetic_scenario() {
    let store = SelectionStore::new();
    let changes: Rc<RefCell<Vec<MoodChange>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    store.subscribe(move |_, change| sink.borrow_mut().push(*change));

    store.select(MoodId::Energetic);
    let (mood, theme) = store.current();
    assert_eq!(mood, MoodId::Energetic);
    assert_eq!(theme.primary_color, Color::from_hex(0xFF6B6B));
    assert_eq!(theme.secondary_color, Color::from_hex(0x4ECDC4));
    assert_eq!(theme.text_color, Color::from_hex(0xFFFFFF));
    assert_eq!(
        theme.background.to_string(),
        "linear-gradient(135deg, #FF6B6B, #FFA500)"
    );
    assert_eq!(theme.animation_kind, AnimationKind::Pulse);

    store.select(MoodId::Energetic);
    assert_eq!(store.current(), (mood, theme));

    let changes = changes.borrow();
    assert_eq!(
        *changes,
        vec![
            MoodChange {
                previous: MoodId::Calm,
                current: MoodId::Energetic
            },
            MoodChange {
                previous: MoodId::Energetic,
                current: MoodId::Energetic
            },
        ]
    );
}

#[test]
fn test_invalid_key_is_rejected_without_side_effects() {
    let store = SelectionStore::builder()
        .initial_mood(MoodId::Melancholic)
        .build();
    let fired = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&fired);
    store.subscribe(move |_, _| *counter.borrow_mut() += 1);

    for bad in ["", "joyful", "happy!", "calm calm"] {
        let err = store.select_key(bad).unwrap_err();
        assert_eq!(err.key, bad);
    }

    assert_eq!(store.current_mood(), MoodId::Melancholic);
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn test_stores_are_independent() {
    let registry = ThemeRegistry::new();
    let left = SelectionStore::with_registry(&registry);
    let right = SelectionStore::with_registry(&registry);

    left.select(MoodId::Happy);

    assert_eq!(left.current_mood(), MoodId::Happy);
    assert_eq!(right.current_mood(), MoodId::Calm);
}

proptest! {
    #[test]
    fn prop_select_then_current(moods in prop::collection::vec(any_mood(), 1..16)) {
        let store = SelectionStore::new();
        for mood in &moods {
            store.select(*mood);
            let (current, theme) = store.current();
            prop_assert_eq!(current, *mood);
            prop_assert_eq!(theme, store.registry().lookup(*mood));
        }
    }

    #[test]
    fn prop_one_notification_per_select(moods in prop::collection::vec(any_mood(), 0..16)) {
        let store = SelectionStore::new();
        let count = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&count);
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        for mood in &moods {
            store.select(*mood);
        }
        prop_assert_eq!(*count.borrow(), moods.len());
    }

    #[test]
    fn prop_key_round_trips_through_select_key(mood in any_mood()) {
        let store = SelectionStore::new();
        prop_assert_eq!(store.select_key(&mood.key().to_uppercase()), Ok(mood));
        prop_assert_eq!(store.current_mood(), mood);
    }
}
