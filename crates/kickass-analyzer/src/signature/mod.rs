//! Parameter hints for macro, function and pseudocommand calls.

mod provider;

pub use provider::SignatureHelpProvider;

#[cfg(test)]
#[path = "../../tests/src/signature/signature_tests.rs"]
mod tests;
