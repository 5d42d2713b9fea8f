//! Symbol catalogue built from report syntax tokens and tracked source lines.

mod builder;
mod catalog;
mod docs;
mod numeric;
mod provider;
mod types;

pub use builder::CatalogBuilder;
pub use catalog::SymbolCatalog;
pub use numeric::{describe_number, to_decimal};
pub use provider::SymbolProvider;
pub use types::{Parameter, ParameterKind, Symbol, SymbolKind, SymbolType, SymbolValue};

#[cfg(test)]
#[path = "../../tests/src/symbols/symbols_tests.rs"]
mod tests;
