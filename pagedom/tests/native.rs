use pagedom::native::{
    is_option_selected, option_label, option_value, select_options, select_value,
    selected_index, set_option_selected,
};
use pagedom::{Document, DomError, Element};

fn colors(selected: Option<usize>) -> Document {
    let options = [("Red", "r"), ("Green", "g"), ("Blue", "b")]
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            Element::option(label, value)
                .id(format!("opt-{value}"))
                .selected(selected == Some(i))
        });
    Document::new(
        Element::new("form")
            .id("form")
            .child(Element::select().id("color").children(options)),
    )
}

// ============================================================================
// Option attributes
// ============================================================================

#[test]
fn test_label_and_value_fall_back_to_text() {
    let plain = Element::new("option").text("  Deep   Purple ");
    assert_eq!(option_label(&plain), "Deep Purple");
    assert_eq!(option_value(&plain), "Deep Purple");

    let labelled = Element::new("option")
        .text("ignored")
        .attr("label", "Shown")
        .attr("value", "");
    assert_eq!(option_label(&labelled), "Shown");
    assert_eq!(option_value(&labelled), "");
}

#[test]
fn test_options_include_optgroups() {
    let doc = Document::new(
        Element::div().id("root").child(
            Element::select()
                .id("s")
                .child(Element::option("A", "a").id("a"))
                .child(
                    Element::new("optgroup")
                        .child(Element::option("B", "b").id("b"))
                        .child(Element::option("C", "c").id("c")),
                ),
        ),
    );
    assert_eq!(select_options(&doc, "s").unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_select_options_requires_select() {
    let doc = colors(None);
    assert!(matches!(
        select_options(&doc, "form"),
        Err(DomError::WrongTag { .. })
    ));
}

// ============================================================================
// Selectedness
// ============================================================================

#[test]
fn test_first_option_selected_by_default() {
    let doc = colors(None);
    assert_eq!(selected_index(&doc, "color").unwrap(), Some(0));
    assert!(is_option_selected(&doc, "opt-r").unwrap());
    assert!(!is_option_selected(&doc, "opt-g").unwrap());
    assert_eq!(select_value(&doc, "color").unwrap().as_deref(), Some("r"));
}

#[test]
fn test_explicit_selection() {
    let doc = colors(Some(1));
    assert_eq!(selected_index(&doc, "color").unwrap(), Some(1));
    assert_eq!(select_value(&doc, "color").unwrap().as_deref(), Some("g"));
}

#[test]
fn test_last_selected_attribute_wins() {
    let mut doc = colors(Some(0));
    doc.require_mut("opt-b")
        .unwrap()
        .attributes
        .insert("selected".to_string(), String::new());
    assert_eq!(selected_index(&doc, "color").unwrap(), Some(2));
}

#[test]
fn test_set_selected_deselects_siblings() {
    let mut doc = colors(Some(1));
    set_option_selected(&mut doc, "opt-b", true).unwrap();

    assert!(is_option_selected(&doc, "opt-b").unwrap());
    assert!(!doc.get("opt-g").unwrap().has_attr("selected"));
    assert_eq!(select_value(&doc, "color").unwrap().as_deref(), Some("b"));
}

#[test]
fn test_deselect_falls_back_to_first() {
    let mut doc = colors(Some(2));
    set_option_selected(&mut doc, "opt-b", false).unwrap();
    assert_eq!(selected_index(&doc, "color").unwrap(), Some(0));
}

#[test]
fn test_empty_select() {
    let doc = Document::new(Element::div().id("root").child(Element::select().id("s")));
    assert!(select_options(&doc, "s").unwrap().is_empty());
    assert_eq!(selected_index(&doc, "s").unwrap(), None);
    assert_eq!(select_value(&doc, "s").unwrap(), None);
}
