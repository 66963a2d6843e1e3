//! Errors

/// An error that occurs when parsing modifier keywords.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseModifierError {
    /// The keyword does not name any flag in the catalog.
    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
}
