//! Error types for enumeration definitions.

use thiserror::Error;

/// Errors from building an enumeration definition.
///
/// These cover the definition invariants only. Coercion itself never fails:
/// unknown inputs map to the default (see [`crate::StrEnum::coerce`]).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DefinitionError {
    /// The definition contains no values.
    #[error("enumeration needs at least one value")]
    Empty,

    /// A value appears more than once in the definition.
    #[error("duplicate value in enumeration: {value:?}")]
    Duplicate {
        /// The repeated value.
        value: String,
    },

    /// The requested default is not a member of the enumeration.
    #[error("default {value:?} is not among the permitted values")]
    DefaultNotMember {
        /// The value requested as default.
        value: String,
    },
}
