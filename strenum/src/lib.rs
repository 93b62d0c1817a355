//! # strenum
//!
//! Closed string enumerations: an ordered set of permitted string values
//! with one designated default, plus **fail-open coercion** — any input
//! outside the set silently maps to the default instead of failing.
//!
//! A definition is immutable once built and safe for unsynchronized
//! concurrent reads, so it is typically constructed once at process start
//! (a `static` behind `LazyLock` works well) and shared from there.
//!
//! ## Quick Start
//!
//! ```rust
//! use strenum::StrEnum;
//!
//! let statuses = StrEnum::new(["draft", "published", "removed"]).unwrap();
//!
//! assert_eq!(statuses.coerce("draft"), "draft");
//! assert_eq!(statuses.coerce("other"), "draft");
//! assert_eq!(statuses.values(), ["draft", "published", "removed"]);
//! ```

mod error;
mod schema;
mod set;



// Re-export commonly used types
pub use error::DefinitionError;
pub use set::StrEnum;
