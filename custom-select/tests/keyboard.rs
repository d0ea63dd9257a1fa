use std::time::{Duration, Instant};

use custom_select::{CustomSelect, EventResult, SelectConfig};
use pagedom::native;
use pagedom::{Document, Element, Event, Key, Modifiers};

fn setup(options: &[(&str, &str)], selected: usize, config: SelectConfig) -> (Document, CustomSelect) {
    let options = options.iter().enumerate().map(|(i, (label, value))| {
        Element::option(*label, *value).selected(i == selected)
    });
    let mut doc = Document::new(
        Element::div()
            .id("root")
            .child(Element::select().id("native").children(options)),
    );
    let select = CustomSelect::new(&mut doc, "native", config).unwrap();
    doc.focus(select.container_id()).unwrap();
    (doc, select)
}

fn colors() -> (Document, CustomSelect) {
    setup(
        &[("Red", "r"), ("Green", "g"), ("Blue", "b")],
        1,
        SelectConfig::default(),
    )
}

fn fruits() -> (Document, CustomSelect) {
    setup(
        &[("Apple", "apple"), ("Banana", "banana"), ("Cherry", "cherry")],
        0,
        SelectConfig::default(),
    )
}

fn press(doc: &mut Document, select: &mut CustomSelect, key: Key, now: Instant) -> EventResult {
    let event = Event::key(select.container_id(), key);
    select.handle_event(doc, &event, now)
}

fn selected_label(select: &CustomSelect) -> &str {
    &select.selected_option().unwrap().label
}

// ============================================================================
// Arrow navigation
// ============================================================================

#[test]
fn test_arrow_down_moves_to_next() {
    let (mut doc, mut select) = colors();
    press(&mut doc, &mut select, Key::Down, Instant::now());

    assert_eq!(selected_label(&select), "Blue");
    assert_eq!(doc.text(select.value_id()), Some("Blue"));
    assert_eq!(native::select_value(&doc, "native").unwrap().as_deref(), Some("b"));
}

#[test]
fn test_arrow_up_moves_to_previous() {
    let (mut doc, mut select) = colors();
    press(&mut doc, &mut select, Key::Up, Instant::now());
    assert_eq!(selected_label(&select), "Red");
}

#[test]
fn test_arrows_do_not_wrap() {
    let (mut doc, mut select) = colors();
    let now = Instant::now();

    press(&mut doc, &mut select, Key::Up, now);
    assert!(press(&mut doc, &mut select, Key::Up, now).is_handled());
    assert_eq!(select.selected_option_index(), Some(0));

    press(&mut doc, &mut select, Key::Down, now);
    press(&mut doc, &mut select, Key::Down, now);
    assert!(press(&mut doc, &mut select, Key::Down, now).is_handled());
    assert_eq!(select.selected_option_index(), Some(2));
    assert_eq!(doc.text(select.value_id()), Some("Blue"));
}

#[test]
fn test_arrows_keep_list_state() {
    let (mut doc, mut select) = colors();
    let now = Instant::now();
    press(&mut doc, &mut select, Key::SPACE, now);
    press(&mut doc, &mut select, Key::Down, now);
    assert!(select.is_open());
}

// ============================================================================
// Open / close keys
// ============================================================================

#[test]
fn test_space_toggles_and_keeps_focus() {
    let (mut doc, mut select) = colors();
    let now = Instant::now();

    press(&mut doc, &mut select, Key::SPACE, now);
    assert!(select.is_open());
    assert!(doc.has_class(select.list_id(), "open"));
    assert_eq!(doc.focused(), Some(select.container_id()));

    press(&mut doc, &mut select, Key::SPACE, now);
    assert!(!select.is_open());
    // Space never feeds the search buffer
    assert_eq!(select.search_buffer(), "");
}

#[test]
fn test_space_blurs_variant() {
    let (mut doc, mut select) = setup(
        &[("Red", "r"), ("Green", "g")],
        0,
        SelectConfig::default().space_blurs(true),
    );
    press(&mut doc, &mut select, Key::SPACE, Instant::now());

    assert!(select.is_open());
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_enter_and_escape_close_and_blur() {
    for key in [Key::Enter, Key::Escape] {
        let (mut doc, mut select) = colors();
        let now = Instant::now();
        press(&mut doc, &mut select, Key::SPACE, now);

        assert!(press(&mut doc, &mut select, key, now).is_handled());
        assert!(!select.is_open(), "{key:?} closes");
        assert_eq!(doc.focused(), None, "{key:?} blurs");
        assert_eq!(selected_label(&select), "Green");
    }
}

#[test]
fn test_modified_and_unknown_keys_ignored() {
    let (mut doc, mut select) = colors();
    let now = Instant::now();

    let ctrl_a = Event::Key {
        target: Some(select.container_id().to_string()),
        key: Key::Char('a'),
        modifiers: Modifiers::ctrl(),
    };
    assert_eq!(select.handle_event(&mut doc, &ctrl_a, now), EventResult::Ignored);
    assert_eq!(press(&mut doc, &mut select, Key::Tab, now), EventResult::Ignored);
    assert_eq!(press(&mut doc, &mut select, Key::F(5), now), EventResult::Ignored);
    assert_eq!(select.search_buffer(), "");
    assert_eq!(selected_label(&select), "Green");
}

#[test]
fn test_keys_on_other_targets_ignored() {
    let (mut doc, mut select) = colors();
    let event = Event::key(select.value_id(), Key::Down);
    assert_eq!(
        select.handle_event(&mut doc, &event, Instant::now()),
        EventResult::Ignored
    );
    assert_eq!(selected_label(&select), "Green");
}

// ============================================================================
// Type-ahead
// ============================================================================

#[test]
fn test_type_ahead_prefix_and_reset() {
    let (mut doc, mut select) = fruits();
    let t0 = Instant::now();

    press(&mut doc, &mut select, Key::Char('c'), t0);
    assert_eq!(selected_label(&select), "Cherry");

    press(&mut doc, &mut select, Key::Char('h'), t0 + Duration::from_millis(200));
    assert_eq!(select.search_buffer(), "ch");
    assert_eq!(selected_label(&select), "Cherry");

    let later = t0 + Duration::from_millis(800);
    assert!(select.tick(&mut doc, later));
    assert_eq!(select.search_buffer(), "");

    press(&mut doc, &mut select, Key::Char('a'), later);
    assert_eq!(selected_label(&select), "Apple");
    assert_eq!(native::select_value(&doc, "native").unwrap().as_deref(), Some("apple"));
}

#[test]
fn test_type_ahead_reset_without_tick() {
    let (mut doc, mut select) = fruits();
    let t0 = Instant::now();

    press(&mut doc, &mut select, Key::Char('c'), t0);
    press(&mut doc, &mut select, Key::Char('a'), t0 + Duration::from_millis(600));

    assert_eq!(select.search_buffer(), "a");
    assert_eq!(selected_label(&select), "Apple");
}

#[test]
fn test_type_ahead_debounce_restarts_per_key() {
    let (mut doc, mut select) = fruits();
    let t0 = Instant::now();

    press(&mut doc, &mut select, Key::Char('b'), t0);
    press(&mut doc, &mut select, Key::Char('a'), t0 + Duration::from_millis(400));
    assert!(!select.tick(&mut doc, t0 + Duration::from_millis(700)));
    assert_eq!(select.search_buffer(), "ba");
    assert!(select.tick(&mut doc, t0 + Duration::from_millis(900)));
}

#[test]
fn test_type_ahead_no_match_keeps_state() {
    let (mut doc, mut select) = fruits();
    let t0 = Instant::now();

    press(&mut doc, &mut select, Key::Char('b'), t0);
    assert_eq!(selected_label(&select), "Banana");

    press(&mut doc, &mut select, Key::Char('x'), t0 + Duration::from_millis(100));
    assert_eq!(selected_label(&select), "Banana");
    assert_eq!(select.search_buffer(), "bx");

    // Buffer keeps growing until the pause
    press(&mut doc, &mut select, Key::Char('y'), t0 + Duration::from_millis(200));
    assert_eq!(select.search_buffer(), "bxy");
}

#[test]
fn test_type_ahead_ignores_case() {
    let (mut doc, mut select) = fruits();
    press(&mut doc, &mut select, Key::Char('C'), Instant::now());
    assert_eq!(select.search_buffer(), "c");
    assert_eq!(selected_label(&select), "Cherry");
}

#[test]
fn test_debounce_uses_config() {
    let config = SelectConfig::default().search_debounce(Duration::from_millis(100));
    let (mut doc, mut select) = setup(&[("Apple", "a"), ("Avocado", "v")], 0, config);
    let t0 = Instant::now();

    press(&mut doc, &mut select, Key::Char('a'), t0);
    assert!(select.tick(&mut doc, t0 + Duration::from_millis(100)));
}
