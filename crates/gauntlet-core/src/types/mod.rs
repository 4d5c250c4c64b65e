//! Catalog record types.
//!
//! All definition records are plain data with serde derives; cross
//! references are integer record IDs resolved against an
//! [`crate::Inventory`] at display/run time, never enforced at write
//! time. The `describe` methods render a record and its resolved
//! references as the indented tree an operator sees in the CLI.

mod challenge;
mod recipient;
mod resources;
mod test_case;
mod test_definition;

pub use challenge::{ChallengeDefinition, ChallengeType};
pub use recipient::Recipient;
pub use resources::{CloudVirtualResource, PhysicalResource, VnfService};
pub use test_case::TestCase;
pub use test_definition::TestDefinition;

/// Spaces per indentation level in `describe` output.
pub(crate) const INDENT_WIDTH: usize = 4;

pub(crate) fn pad(indent: usize) -> String {
    " ".repeat(indent * INDENT_WIDTH)
}
