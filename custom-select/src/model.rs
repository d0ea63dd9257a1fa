//! Option records read from a native select.

use pagedom::native;
use pagedom::Document;

use crate::error::SelectError;

/// One selectable choice, mirrored from a native `<option>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRecord {
    pub label: String,
    pub value: String,
    pub selected: bool,
    /// ID of the originating native option.
    pub native: String,
}

impl OptionRecord {
    /// Copy label, value and selectedness from a native option.
    pub fn from_native(doc: &Document, option: &str) -> Result<Self, SelectError> {
        let el = doc.require(option)?;
        Ok(Self {
            label: native::option_label(el),
            value: native::option_value(el),
            selected: native::is_option_selected(doc, option)?,
            native: option.to_string(),
        })
    }
}

/// Build records for native options, preserving their order.
///
/// An empty input yields an empty model.
pub fn build_options<I, S>(doc: &Document, options: I) -> Result<Vec<OptionRecord>, SelectError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    options
        .into_iter()
        .map(|id| OptionRecord::from_native(doc, id.as_ref()))
        .collect()
}
