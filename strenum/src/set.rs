//! The enumeration type itself: an ordered closed set of string values with
//! a designated default.

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// A closed, ordered set of permitted string values with one designated
/// default.
///
/// Construction enforces the definition invariants — at least one value, no
/// duplicates, default is a member. Once built, a definition is immutable;
/// it is `Send + Sync` and safe for unsynchronized concurrent reads, so a
/// process-wide `static` (e.g. behind `std::sync::LazyLock`) is the usual
/// home for one.
///
/// Lookups are strict byte equality: no trimming, no case folding. Inputs
/// outside the set are not errors — [`StrEnum::coerce`] maps them to the
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDefinition", into = "RawDefinition")]
pub struct StrEnum {
    /// Permitted values, in definition order.
    values: Vec<String>,
    /// Index of the designated default within `values`.
    default: usize,
}

impl StrEnum {
    /// Build an enumeration from `values`, with the first value as default.
    ///
    /// Order is preserved for iteration and export; it does not affect
    /// membership semantics.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Empty`] if `values` yields nothing, or
    /// [`DefinitionError::Duplicate`] if a value appears more than once.
    pub fn new<I, S>(values: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(DefinitionError::Empty);
        }
        // Quadratic scan; definitions are short literal lists.
        for (i, value) in values.iter().enumerate() {
            if values[..i].contains(value) {
                return Err(DefinitionError::Duplicate {
                    value: value.clone(),
                });
            }
        }
        Ok(Self { values, default: 0 })
    }

    /// Designate `value` as the default instead of the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::DefaultNotMember`] if `value` is not a
    /// member of the enumeration.
    pub fn with_default(mut self, value: &str) -> Result<Self, DefinitionError> {
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                self.default = index;
                Ok(self)
            }
            None => Err(DefinitionError::DefaultNotMember {
                value: value.to_owned(),
            }),
        }
    }

    /// Coerce `input` into the enumeration.
    ///
    /// Members are returned unchanged; anything else maps to the default.
    /// The fallback is fail-open policy, not a validation failure — no
    /// error is raised for unknown input.
    #[must_use]
    pub fn coerce<'a>(&'a self, input: &'a str) -> &'a str {
        if self.contains(input) {
            input
        } else {
            tracing::trace!(
                input,
                default = self.default_value(),
                "unknown value coerced to default"
            );
            self.default_value()
        }
    }

    /// The permitted values, in definition order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The designated default value.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.values[self.default]
    }

    /// Strict membership test (case-sensitive, no trimming).
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Iterate the permitted values in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Number of permitted values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the enumeration has no values. Always `false` for a built
    /// definition — emptiness is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Wire form of a definition: `{"values": [...], "default": "..."}`.
///
/// Decoding funnels through [`StrEnum::new`] and [`StrEnum::with_default`]
/// so the definition invariants also hold for deserialized values. The
/// `default` key may be omitted on input; the first value is used then.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDefinition {
    values: Vec<String>,
    #[serde(default)]
    default: Option<String>,
}

impl TryFrom<RawDefinition> for StrEnum {
    type Error = DefinitionError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        let set = Self::new(raw.values)?;
        match raw.default {
            Some(default) => set.with_default(&default),
            None => Ok(set),
        }
    }
}

impl From<StrEnum> for RawDefinition {
    fn from(set: StrEnum) -> Self {
        Self {
            default: Some(set.default_value().to_owned()),
            values: set.values,
        }
    }
}
