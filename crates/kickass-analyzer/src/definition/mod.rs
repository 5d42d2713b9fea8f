//! Go-to-definition for project symbols.

mod provider;

pub use provider::DefinitionProvider;
