use pagedom::DomError;
use thiserror::Error;

/// Errors from building or driving a custom select.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The target element is not a `<select>`.
    #[error("element `{0}` is not a select")]
    NotASelect(String),

    /// No option carries the requested value.
    #[error("no option with value `{0}`")]
    UnknownValue(String),

    /// The select has no options to choose from.
    #[error("select has no options")]
    NoOptions,

    #[error(transparent)]
    Dom(#[from] DomError),
}
