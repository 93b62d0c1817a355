//! JSON Schema export and coercion over JSON values.
//!
//! An enumeration maps onto the standard closed-enum schema fragment
//! (`{"type": "string", "enum": [...], "default": "..."}`), and the
//! fail-open coercion lifts naturally to `serde_json::Value` inputs.

use serde_json::{Value, json};

use crate::set::StrEnum;

impl StrEnum {
    /// Export the definition as a JSON Schema fragment.
    ///
    /// The fragment is self-contained and can be embedded anywhere a schema
    /// expects a string type.
    #[must_use]
    pub fn json_schema(&self) -> Value {
        json!({
            "type": "string",
            "enum": self.values(),
            "default": self.default_value(),
        })
    }

    /// Coerce a JSON value into the enumeration.
    ///
    /// Member strings pass through unchanged. Non-member strings and
    /// non-string values (numbers, null, arrays, objects, booleans) all map
    /// to the default, mirroring [`StrEnum::coerce`].
    #[must_use]
    pub fn coerce_json(&self, value: &Value) -> Value {
        match value.as_str() {
            Some(input) => Value::String(self.coerce(input).to_owned()),
            None => {
                tracing::trace!(
                    %value,
                    default = self.default_value(),
                    "non-string value coerced to default"
                );
                Value::String(self.default_value().to_owned())
            }
        }
    }
}
