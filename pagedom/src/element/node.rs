use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Whether an element takes part in rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Default,
    None,
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Markup
    pub classes: Vec<String>,
    /// Plain attributes (`value`, `label`, `selected`, `name`, ...).
    pub attributes: BTreeMap<String, String>,
    /// `data-*` attributes, stored without the `data-` prefix.
    pub data: HashMap<String, String>,

    // Visual
    pub display: Display,
    /// Rows this element occupies when stacked inside a scroll container.
    pub height: u16,

    // Scrolling
    /// Visible rows when this element is a scroll container.
    pub viewport_height: Option<u16>,
    pub scroll_offset: u16,

    // Interaction
    pub focusable: bool,
    pub tab_index: Option<i32>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            data: HashMap::new(),
            display: Display::Default,
            height: 1,
            viewport_height: None,
            scroll_offset: 0,
            focusable: false,
            tab_index: None,
        }
    }
}

impl Element {
    /// Create an element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new("span").text(text)
    }

    /// A native `<select>` element.
    pub fn select() -> Self {
        Self::new("select")
    }

    /// A native `<option>` element with an explicit value.
    pub fn option(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new("option").text(label).attr("value", value)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a `data-*` attribute. The key is given without the prefix.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Mark an option as selected (boolean attribute).
    pub fn selected(self, selected: bool) -> Self {
        if selected {
            self.attr("selected", "")
        } else {
            self
        }
    }

    // Visual
    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn viewport_height(mut self, rows: u16) -> Self {
        self.viewport_height = Some(rows);
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Setting a tab index makes the element focusable, like `tabIndex = 0`.
    pub fn tab_index(mut self, index: i32) -> Self {
        self.tab_index = Some(index);
        self.focusable = index >= 0;
        self
    }

    // Queries

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class, or force it with `force`. Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or(!self.has_class(class));
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
        present
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Own text content, empty if the element has none.
    pub fn text_content(&self) -> &str {
        match &self.content {
            Content::Text(text) => text,
            _ => "",
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }
}
