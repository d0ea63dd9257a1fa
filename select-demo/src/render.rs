//! Lay the document out as terminal lines.
//!
//! Block elements stack one per line. A custom select draws its value box and,
//! while its list carries the open class, the visible window of items.

use custom_select::SelectConfig;
use pagedom::native;
use pagedom::{Document, Element};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    Heading,
    Focused,
    Selected,
    Muted,
}

/// One rendered row and the element a click on it targets.
#[derive(Debug, Clone)]
pub struct Line {
    pub text: String,
    pub target: Option<String>,
    pub highlight: Highlight,
}

impl Line {
    fn new(text: impl Into<String>, target: Option<&str>, highlight: Highlight) -> Self {
        Self {
            text: text.into(),
            target: target.map(str::to_string),
            highlight,
        }
    }
}

pub fn render(doc: &Document, config: &SelectConfig) -> Vec<Line> {
    let mut lines = Vec::new();
    render_element(doc, doc.root(), config, &mut lines);
    lines
}

fn render_element(doc: &Document, el: &Element, config: &SelectConfig, lines: &mut Vec<Line>) {
    if el.is_hidden() {
        return;
    }

    if el.has_class(&config.container_class) {
        render_custom(doc, el, config, lines);
        return;
    }

    match el.tag.as_str() {
        "select" => render_native(doc, el, lines),
        "h1" => lines.push(Line::new(el.text_content(), Some(el.id.as_str()), Highlight::Heading)),
        _ if !el.text_content().is_empty() => {
            lines.push(Line::new(el.text_content(), Some(el.id.as_str()), Highlight::Normal));
        }
        _ => {
            for child in el.child_elements() {
                render_element(doc, child, config, lines);
            }
        }
    }
}

fn render_custom(doc: &Document, container: &Element, config: &SelectConfig, lines: &mut Vec<Line>) {
    let children = container.child_elements();
    let value = children.iter().find(|c| c.has_class(&config.value_class));
    let list = children.iter().find(|c| c.has_class(&config.options_class));
    let (Some(value), Some(list)) = (value, list) else {
        return;
    };

    let width = list
        .child_elements()
        .iter()
        .map(|item| item.text_content().width())
        .max()
        .unwrap_or(0);

    let focused = doc.is_focused(&container.id);
    let arrow = if list.has_class(&config.open_class) { "▴" } else { "▾" };
    lines.push(Line::new(
        format!("[ {} {} ]", pad(value.text_content(), width), arrow),
        Some(value.id.as_str()),
        if focused { Highlight::Focused } else { Highlight::Normal },
    ));

    if !list.has_class(&config.open_class) {
        return;
    }

    let rows = list
        .viewport_height
        .map(usize::from)
        .unwrap_or(usize::MAX);
    for item in list
        .child_elements()
        .iter()
        .skip(usize::from(list.scroll_offset))
        .take(rows)
    {
        let highlight = if item.has_class(&config.selected_class) {
            Highlight::Selected
        } else {
            Highlight::Normal
        };
        lines.push(Line::new(
            format!("  {} ", pad(item.text_content(), width)),
            Some(item.id.as_str()),
            highlight,
        ));
    }
}

fn render_native(doc: &Document, select: &Element, lines: &mut Vec<Line>) {
    let label = native::selected_index(doc, &select.id)
        .ok()
        .flatten()
        .and_then(|i| select_option(select, i))
        .map(native::option_label)
        .unwrap_or_default();
    let highlight = if doc.is_focused(&select.id) {
        Highlight::Focused
    } else {
        Highlight::Normal
    };
    lines.push(Line::new(format!("< {label} >"), Some(select.id.as_str()), highlight));
}

fn select_option(select: &Element, index: usize) -> Option<&Element> {
    let mut options = Vec::new();
    collect_options(select, &mut options);
    options.get(index).copied()
}

fn collect_options<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
    for child in el.child_elements() {
        if child.tag == "option" {
            out.push(child);
        } else {
            collect_options(child, out);
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Form values as a submission would see them.
pub fn form_values(doc: &Document) -> Vec<Line> {
    doc.query_by_tag("select")
        .iter()
        .filter_map(|id| {
            let name = doc.get(id)?.get_attr("name").unwrap_or(id.as_str()).to_string();
            let value = native::select_value(doc, id).ok().flatten().unwrap_or_default();
            Some(Line::new(format!("{name} = {value}"), None, Highlight::Muted))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use custom_select::CustomSelect;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn closed_and_open_custom_select() {
        let mut doc = Document::new(
            Element::new("form").id("form").child(
                Element::select()
                    .id("s")
                    .child(Element::option("Red", "r"))
                    .child(Element::option("Green", "g").selected(true)),
            ),
        );
        let config = SelectConfig::default();
        let mut select = CustomSelect::new(&mut doc, "s", config.clone()).unwrap();

        assert_eq!(texts(&render(&doc, &config)), vec!["[ Green ▾ ]"]);

        select.open(&mut doc);
        let lines = render(&doc, &config);
        assert_eq!(texts(&lines), vec!["[ Green ▴ ]", "  Red   ", "  Green "]);
        assert_eq!(lines[2].highlight, Highlight::Selected);
        assert_eq!(lines[0].target.as_deref(), Some(select.value_id()));
    }

    #[test]
    fn native_select_and_form_values() {
        let doc = Document::new(
            Element::new("form").id("form").child(
                Element::select()
                    .id("s")
                    .attr("name", "size")
                    .child(Element::option("Small", "sm"))
                    .child(Element::option("Large", "lg")),
            ),
        );
        let config = SelectConfig::default();
        assert_eq!(texts(&render(&doc, &config)), vec!["< Small >"]);
        assert_eq!(texts(&form_values(&doc)), vec!["size = sm"]);
    }
}
