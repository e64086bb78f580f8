//! Error types for prosetree.

use thiserror::Error;

/// Result type alias for prosetree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing elements, references and documents.
///
/// Every variant is an authoring defect: construction aborts at the first
/// error and no partial element or document is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tag whose rule requires at least one child received none.
    #[error("<{tag}> cannot be empty")]
    EmptyContent {
        /// Name of the tag being constructed
        tag: String,
    },

    /// A child violates the tag's category or type nesting rule.
    #[error("<{tag}> can only contain {expected}, found <{child}>")]
    InvalidChildType {
        /// Name of the tag being constructed
        tag: String,
        /// Name of the offending child's tag
        child: String,
        /// Human-readable description of what is accepted
        expected: String,
    },

    /// A tag requiring an exact number of children received a different count.
    #[error("<{tag}> must have exactly {expected} child(ren), found {found}")]
    InvalidChildCount {
        /// Name of the tag being constructed
        tag: String,
        /// Required number of children
        expected: usize,
        /// Number of children actually supplied
        found: usize,
    },

    /// A required construction prop is absent.
    #[error("Missing \"{prop}\" prop in <{tag}>")]
    MissingProp {
        /// Name of the tag being constructed
        tag: String,
        /// Name of the missing prop
        prop: String,
    },

    /// A construction prop is present but malformed.
    #[error("<{tag}> \"{prop}\" prop {reason}")]
    InvalidProp {
        /// Name of the tag being constructed
        tag: String,
        /// Name of the malformed prop
        prop: String,
        /// What is wrong with it
        reason: String,
    },

    /// A reference cell received a second assignment.
    #[error("Reference{} for tag <{tag}> is already assigned and cannot be reassigned", fmt_label(.label))]
    ReferenceAlreadyAssigned {
        /// Name of the tag the reference is bound to
        tag: String,
        /// Debug label of the reference, if any
        label: Option<String>,
    },

    /// The assigned element does not match the reference's bound tag.
    #[error("Element <{found}> assigned to reference{} does not match expected tag <{expected}>", fmt_label(.label))]
    ReferenceTypeMismatch {
        /// Tag the reference is bound to
        expected: String,
        /// Tag of the element that was offered
        found: String,
        /// Debug label of the reference, if any
        label: Option<String>,
    },

    /// A reference was embedded in the tree before it was assigned.
    #[error("Unable to unwrap unassigned reference{}", fmt_label(.label))]
    UnresolvedReference {
        /// Debug label of the reference, if any
        label: Option<String>,
    },

    /// Document finalization found a declared reference that was never assigned.
    #[error("Document reference \"{name}\" was not assigned a value while building the content")]
    UnassignedReference {
        /// Declared name (or label) of the reference
        name: String,
    },

    /// Free-form failure raised by a custom tag rule.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Get the taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyContent { .. } => ErrorKind::EmptyContent,
            Error::InvalidChildType { .. } => ErrorKind::InvalidChildType,
            Error::InvalidChildCount { .. } => ErrorKind::InvalidChildCount,
            Error::MissingProp { .. } => ErrorKind::MissingProp,
            Error::InvalidProp { .. } => ErrorKind::InvalidProp,
            Error::ReferenceAlreadyAssigned { .. } => ErrorKind::ReferenceAlreadyAssigned,
            Error::ReferenceTypeMismatch { .. } => ErrorKind::ReferenceTypeMismatch,
            Error::UnresolvedReference { .. } => ErrorKind::UnresolvedReference,
            Error::UnassignedReference { .. } => ErrorKind::UnassignedReference,
            Error::Other(_) => ErrorKind::Other,
        }
    }
}

/// Fieldless mirror of [`Error`] variants, for matching on the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::EmptyContent`]
    EmptyContent,
    /// See [`Error::InvalidChildType`]
    InvalidChildType,
    /// See [`Error::InvalidChildCount`]
    InvalidChildCount,
    /// See [`Error::MissingProp`]
    MissingProp,
    /// See [`Error::InvalidProp`]
    InvalidProp,
    /// See [`Error::ReferenceAlreadyAssigned`]
    ReferenceAlreadyAssigned,
    /// See [`Error::ReferenceTypeMismatch`]
    ReferenceTypeMismatch,
    /// See [`Error::UnresolvedReference`]
    UnresolvedReference,
    /// See [`Error::UnassignedReference`]
    UnassignedReference,
    /// See [`Error::Other`]
    Other,
}

fn fmt_label(label: &Option<String>) -> String {
    match label {
        Some(label) => format!(" \"{}\"", label),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyContent {
            tag: "paragraph".to_string(),
        };
        assert_eq!(err.to_string(), "<paragraph> cannot be empty");

        let err = Error::UnassignedReference {
            name: "intro".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Document reference \"intro\" was not assigned a value while building the content"
        );
    }

    #[test]
    fn test_error_display_with_label() {
        let err = Error::UnresolvedReference {
            label: Some("greet".to_string()),
        };
        assert_eq!(err.to_string(), "Unable to unwrap unassigned reference \"greet\"");

        let err = Error::UnresolvedReference { label: None };
        assert_eq!(err.to_string(), "Unable to unwrap unassigned reference");

        let err = Error::ReferenceAlreadyAssigned {
            tag: "paragraph".to_string(),
            label: None,
        };
        assert_eq!(
            err.to_string(),
            "Reference for tag <paragraph> is already assigned and cannot be reassigned"
        );
    }

    #[test]
    fn test_error_kind() {
        let err = Error::InvalidChildCount {
            tag: "link".to_string(),
            expected: 1,
            found: 2,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidChildCount);
        assert_eq!(Error::Other("x".into()).kind(), ErrorKind::Other);
    }
}
