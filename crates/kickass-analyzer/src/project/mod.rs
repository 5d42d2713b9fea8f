//! Per-buffer project snapshots and the store that versions them.

mod snapshot;
mod store;

pub use snapshot::{ProjectId, ProjectSnapshot};
pub use store::ProjectStore;

#[cfg(test)]
#[path = "../../tests/src/project/project_tests.rs"]
mod tests;
