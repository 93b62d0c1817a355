//! The canonical demo: a post-status enumeration built once as process-wide
//! state, exercised with a member value, an unknown value, and an export of
//! the permitted set.
//!
//! Run with: `cargo run --example post_statuses`

// These Clippy lints are disabled because this is a runnable demo, not a library:
// - print_stdout: the whole point is printing to stdout.
// - expect_used: panicking on a malformed literal definition is acceptable here.
#![allow(clippy::print_stdout, clippy::expect_used)]

use std::sync::LazyLock;

use strenum::StrEnum;

static POST_STATUSES: LazyLock<StrEnum> = LazyLock::new(|| {
    StrEnum::new(["draft", "published", "removed"]).expect("post statuses definition is valid")
});

fn main() {
    println!("{}", POST_STATUSES.coerce("draft")); // draft
    println!("{}", POST_STATUSES.coerce("other")); // draft
    println!("{}", POST_STATUSES.values().join(", ")); // draft, published, removed
}
