//! The custom select control.

use pagedom::native;
use pagedom::{Display, Document, Element};

use crate::config::SelectConfig;
use crate::error::SelectError;
use crate::model::{build_options, OptionRecord};
use crate::state::{ListState, SearchBuffer, Transition};

/// A styled replacement bound to one native `<select>`.
///
/// The native element stays in the document, hidden, and remains the source of
/// truth for form submission. The option records are a cache of it, and the
/// display elements are a view of the records. All three are only changed
/// together, through [`CustomSelect::select_value`].
///
/// Rendered structure, inserted right after the native element:
///
/// ```text
/// div.custom-select-container (tabindex 0)
/// ├── span.custom-select-value        "Green"
/// └── ul.custom-select-options[.open]
///     ├── li.custom-select-option            data-value="r"
///     ├── li.custom-select-option.selected   data-value="g"
///     └── li.custom-select-option            data-value="b"
/// ```
#[derive(Debug)]
pub struct CustomSelect {
    /// ID of the native select
    native: String,
    /// Records in native document order
    options: Vec<OptionRecord>,
    /// Focusable outer element
    container: String,
    /// Element showing the selected label
    value: String,
    /// List holding one item per option
    list: String,
    state: ListState,
    pub(crate) search: SearchBuffer,
    config: SelectConfig,
}

impl CustomSelect {
    /// Bind a custom control to the native select `native_id`.
    ///
    /// Hides the native element and inserts the rendered control as its next
    /// sibling. An empty select yields a control with an empty value display;
    /// selection operations on it return [`SelectError::NoOptions`].
    pub fn new(
        doc: &mut Document,
        native_id: &str,
        config: SelectConfig,
    ) -> Result<Self, SelectError> {
        let native_el = doc.require(native_id)?;
        if native_el.tag != "select" {
            return Err(SelectError::NotASelect(native_id.to_string()));
        }

        let option_ids = native::select_options(doc, native_id)?;
        let options = build_options(doc, &option_ids)?;

        let value_label = options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.label.clone())
            .unwrap_or_default();
        let value_el = Element::new("span")
            .class(config.value_class.as_str())
            .text(value_label);

        let items = options.iter().map(|option| {
            let item = Element::new("li")
                .class(config.option_class.as_str())
                .text(option.label.as_str())
                .data("value", option.value.as_str());
            if option.selected {
                item.class(config.selected_class.as_str())
            } else {
                item
            }
        });
        let list_el = Element::new("ul")
            .class(config.options_class.as_str())
            .viewport_height(config.list_rows)
            .children(items);

        let container_el = Element::div()
            .class(config.container_class.as_str())
            .tab_index(0);

        let select = Self {
            native: native_id.to_string(),
            options,
            container: container_el.id.clone(),
            value: value_el.id.clone(),
            list: list_el.id.clone(),
            state: ListState::Closed,
            search: SearchBuffer::new(),
            config,
        };

        doc.set_display(native_id, Display::None)?;
        doc.insert_after(native_id, container_el.child(value_el).child(list_el))?;

        // Bring the initial selection into the list viewport.
        if let Some(selected) = select.selected_option() {
            if let Some(item) = select.item_for_value(doc, &selected.value) {
                doc.scroll_into_view(&item)?;
            }
        }

        log::debug!(
            "[select] bound {} to {} ({} options, selected {:?})",
            select.container,
            select.native,
            select.options.len(),
            select.selected_option().map(|o| o.value.as_str())
        );

        Ok(select)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The selected record, `None` only for an empty select.
    pub fn selected_option(&self) -> Option<&OptionRecord> {
        self.options.iter().find(|o| o.selected)
    }

    /// Index of the selected record, `None` only for an empty select.
    pub fn selected_option_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.selected)
    }

    pub fn options(&self) -> &[OptionRecord] {
        &self.options
    }

    pub fn list_state(&self) -> ListState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Current type-ahead buffer.
    pub fn search_buffer(&self) -> &str {
        self.search.as_str()
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn native_id(&self) -> &str {
        &self.native
    }

    pub fn container_id(&self) -> &str {
        &self.container
    }

    pub fn value_id(&self) -> &str {
        &self.value
    }

    pub fn list_id(&self) -> &str {
        &self.list
    }

    /// The list item rendered for `value`, located by its `data-value`.
    pub fn item_for_value(&self, doc: &Document, value: &str) -> Option<String> {
        doc.query_data(&self.list, "value", value)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select the option carrying `value`.
    ///
    /// Updates, in order: the model, the native options, the value display,
    /// the selected marker on the list items, and the list scroll position.
    /// Selecting the current value leaves visible state unchanged.
    ///
    /// An empty model or unknown value is rejected before anything is modified.
    pub fn select_value(&mut self, doc: &mut Document, value: &str) -> Result<(), SelectError> {
        if self.options.is_empty() {
            return Err(SelectError::NoOptions);
        }
        let next = self
            .options
            .iter()
            .position(|o| o.value == value)
            .ok_or_else(|| SelectError::UnknownValue(value.to_string()))?;
        let previous = self.selected_option_index();

        if let Some(prev) = previous {
            let record = &mut self.options[prev];
            record.selected = false;
            native::set_option_selected(doc, &record.native, false)?;
        }
        let record = &mut self.options[next];
        record.selected = true;
        native::set_option_selected(doc, &record.native, true)?;

        let label = record.label.clone();
        doc.set_text(&self.value, label)?;

        if let Some(prev) = previous {
            let prev_value = self.options[prev].value.clone();
            if let Some(item) = self.item_for_value(doc, &prev_value) {
                doc.remove_class(&item, &self.config.selected_class)?;
            }
        }
        if let Some(item) = self.item_for_value(doc, value) {
            doc.add_class(&item, &self.config.selected_class)?;
            doc.scroll_into_view(&item)?;
        }

        log::debug!(
            "[select] {} selection {:?} -> {} ({:?})",
            self.container,
            previous,
            next,
            value
        );
        Ok(())
    }

    /// Select the record at `index`. Out-of-range indices are ignored.
    pub(crate) fn select_index(&mut self, doc: &mut Document, index: usize) {
        let Some(value) = self.options.get(index).map(|o| o.value.clone()) else {
            return;
        };
        if let Err(e) = self.select_value(doc, &value) {
            log::warn!("[select] {} failed to select {:?}: {}", self.container, value, e);
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Run a list transition and mirror it into the `open` class.
    pub fn apply(&mut self, doc: &mut Document, transition: Transition) {
        let next = self.state.apply(transition);
        if next != self.state {
            log::debug!(
                "[select] {} list {:?} -> {:?}",
                self.container,
                self.state,
                next
            );
        }
        self.state = next;
        if let Err(e) = doc.toggle_class(&self.list, &self.config.open_class, Some(next.is_open())) {
            log::warn!("[select] {} list element missing: {}", self.container, e);
        }
    }

    pub fn open(&mut self, doc: &mut Document) {
        if !self.is_open() {
            self.apply(doc, Transition::Toggle);
        }
    }

    pub fn close(&mut self, doc: &mut Document) {
        self.apply(doc, Transition::Close);
    }

    pub fn toggle(&mut self, doc: &mut Document) {
        self.apply(doc, Transition::Toggle);
    }

    /// Release focus from the container, if it has it.
    pub fn release_focus(&self, doc: &mut Document) {
        if let Some(event) = doc.blur(&self.container) {
            log::trace!("[select] {:?}", event);
        }
    }
}
