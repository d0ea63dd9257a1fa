//! Native single-select semantics over `<select>` / `<option>` elements.
//!
//! Selectedness lives in the option's `selected` attribute. When no option of
//! a select carries it, the first option counts as selected; when several do,
//! the last one wins.

use crate::document::Document;
use crate::element::Element;
use crate::error::DomError;

/// Option element IDs of a select, in document order (optgroups included).
pub fn select_options(doc: &Document, select: &str) -> Result<Vec<String>, DomError> {
    let select_el = expect_tag(doc, select, "select")?;
    let mut ids = Vec::new();
    collect_options(select_el, &mut ids);
    Ok(ids)
}

fn collect_options(element: &Element, ids: &mut Vec<String>) {
    for child in element.child_elements() {
        if child.tag == "option" {
            ids.push(child.id.clone());
        } else {
            collect_options(child, ids);
        }
    }
}

fn expect_tag<'a>(
    doc: &'a Document,
    id: &str,
    expected: &'static str,
) -> Result<&'a Element, DomError> {
    let el = doc.require(id)?;
    if el.tag != expected {
        return Err(DomError::WrongTag {
            id: id.to_string(),
            tag: el.tag.clone(),
            expected,
        });
    }
    Ok(el)
}

/// The option's label: its `label` attribute, else its text.
pub fn option_label(option: &Element) -> String {
    match option.get_attr("label") {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => collapse_whitespace(option.text_content()),
    }
}

/// The option's value: its `value` attribute, else its text.
pub fn option_value(option: &Element) -> String {
    match option.get_attr("value") {
        Some(value) => value.to_string(),
        None => collapse_whitespace(option.text_content()),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The select that owns an option.
pub fn owning_select(doc: &Document, option: &str) -> Option<String> {
    doc.ancestors(option)
        .into_iter()
        .find(|a| doc.get(a).is_some_and(|el| el.tag == "select"))
}

/// Index of the selected option, `None` for an empty select.
pub fn selected_index(doc: &Document, select: &str) -> Result<Option<usize>, DomError> {
    let options = select_options(doc, select)?;
    if options.is_empty() {
        return Ok(None);
    }
    let explicit = options
        .iter()
        .rposition(|id| doc.get(id).is_some_and(|el| el.has_attr("selected")));
    Ok(Some(explicit.unwrap_or(0)))
}

/// Whether this option is the selected one of its select.
pub fn is_option_selected(doc: &Document, option: &str) -> Result<bool, DomError> {
    expect_tag(doc, option, "option")?;
    let Some(select) = owning_select(doc, option) else {
        return Ok(doc.require(option)?.has_attr("selected"));
    };
    let options = select_options(doc, &select)?;
    let index = selected_index(doc, &select)?;
    Ok(index.and_then(|i| options.get(i)).is_some_and(|id| id == option))
}

/// Write an option's selectedness. Selecting one option deselects its siblings.
pub fn set_option_selected(doc: &mut Document, option: &str, selected: bool) -> Result<(), DomError> {
    expect_tag(doc, option, "option")?;
    if selected {
        if let Some(select) = owning_select(doc, option) {
            for sibling in select_options(doc, &select)? {
                if sibling != option {
                    doc.require_mut(&sibling)?.attributes.remove("selected");
                }
            }
        }
        doc.require_mut(option)?
            .attributes
            .insert("selected".to_string(), String::new());
    } else {
        doc.require_mut(option)?.attributes.remove("selected");
    }
    Ok(())
}

/// The value a form submission would observe for this select.
pub fn select_value(doc: &Document, select: &str) -> Result<Option<String>, DomError> {
    let options = select_options(doc, select)?;
    let Some(index) = selected_index(doc, select)? else {
        return Ok(None);
    };
    Ok(options
        .get(index)
        .and_then(|id| doc.get(id))
        .map(option_value))
}
