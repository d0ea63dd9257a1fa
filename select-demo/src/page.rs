//! Page description loaded from JSON.

use std::fs;
use std::path::Path;

use custom_select::SelectConfig;
use pagedom::{Document, Element};
use serde::Deserialize;

use crate::error::DemoError;

const BUILTIN: &str = include_str!("../page.json");

#[derive(Debug, Deserialize)]
pub struct PageFile {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub config: SelectConfig,
    pub fields: Vec<FieldSpec>,
}

/// One labelled native select.
#[derive(Debug, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    /// Carry the marker attribute so the bootstrap enhances it.
    #[serde(default)]
    pub custom: bool,
    pub options: Vec<OptionSpec>,
}

#[derive(Debug, Deserialize)]
pub struct OptionSpec {
    pub label: String,
    /// Omitted values fall back to the label, as in HTML.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

impl PageFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn builtin() -> Result<Self, DemoError> {
        Ok(serde_json::from_str(BUILTIN)?)
    }

    /// Build the native markup: a form of labelled selects.
    pub fn to_document(&self) -> Document {
        let mut form = Element::new("form")
            .id("form")
            .child(Element::new("h1").text(self.title.as_str()));

        for field in &self.fields {
            let options = field.options.iter().map(|spec| {
                let option = Element::new("option")
                    .text(spec.label.as_str())
                    .selected(spec.selected);
                match &spec.value {
                    Some(value) => option.attr("value", value.as_str()),
                    None => option,
                }
            });
            let mut select = Element::select()
                .id(field.name.as_str())
                .attr("name", field.name.as_str())
                .focusable(true)
                .children(options);
            if field.custom {
                select = select.data(self.config.marker.as_str(), "");
            }

            form = form
                .child(Element::new("label").text(field.label.as_str()))
                .child(select);
        }

        Document::new(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_page_parses() {
        let page = PageFile::builtin().unwrap();
        assert_eq!(page.config.list_rows, 4);
        assert!(page.fields.iter().any(|f| f.custom));
        assert!(page.fields.iter().any(|f| !f.custom));
    }

    #[test]
    fn document_marks_custom_fields() {
        let page = PageFile::builtin().unwrap();
        let doc = page.to_document();
        let marked = doc.query_all(|el| el.data.contains_key("custom"));
        let custom: Vec<_> = page
            .fields
            .iter()
            .filter(|f| f.custom)
            .map(|f| f.name.clone())
            .collect();
        assert_eq!(marked, custom);
    }
}
