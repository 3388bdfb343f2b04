use thiserror::Error;

/// Errors raised by taxonomy normalization and table loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// Client text matched no slug, translation or alias.
    #[error("{kind} not recognized: {input}")]
    NotFound { kind: &'static str, input: String },

    /// Two values share the same case-folded lookup text.
    #[error("{kind} text '{text}' maps to both '{first}' and '{second}'")]
    Collision {
        kind: &'static str,
        text: String,
        first: &'static str,
        second: &'static str,
    },

    /// The static translation table failed validation.
    #[error("invalid {kind} table: {}", .errors.join("; "))]
    InvalidTable {
        kind: &'static str,
        errors: Vec<String>,
    },

    /// A required list of values was empty.
    #[error("at least one {kind} is required")]
    Empty { kind: &'static str },
}

impl TaxonomyError {
    /// Check if the error is an unrecognized client input.
    ///
    /// # Returns
    /// `true` for [`TaxonomyError::NotFound`], which callers map to a
    /// validation error rather than a server fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaxonomyError::NotFound { .. })
    }
}
