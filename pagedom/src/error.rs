use thiserror::Error;

/// Errors from document manipulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element `{0}` not found")]
    ElementNotFound(String),

    #[error("element `{0}` holds text and cannot take children")]
    NotAContainer(String),

    #[error("element `{0}` has no parent")]
    NoParent(String),

    #[error("element `{0}` is not focusable")]
    NotFocusable(String),

    #[error("element `{id}` is a <{tag}>, expected <{expected}>")]
    WrongTag {
        id: String,
        tag: String,
        expected: &'static str,
    },
}
