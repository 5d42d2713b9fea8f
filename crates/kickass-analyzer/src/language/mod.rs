//! Static knowledge about the 6502 instruction set and the preprocessor.

mod instructions;
mod preprocessor;
mod types;

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub use types::{AddressingMode, InstructionEntry, PreprocessorEntry};

static INSTRUCTION_MAP: Lazy<HashMap<&'static str, &'static InstructionEntry>> = Lazy::new(|| {
    instructions::DOCUMENTED
        .iter()
        .chain(instructions::UNDOCUMENTED)
        .map(|entry| (entry.mnemonic, entry))
        .collect()
});

/// All known mnemonics, documented ones first.
pub fn instructions() -> impl Iterator<Item = &'static InstructionEntry> {
    instructions::DOCUMENTED.iter().chain(instructions::UNDOCUMENTED)
}

/// Look up a mnemonic case-insensitively. An addressing-mode suffix such as
/// `lda.z` or `jmp.abs` is ignored.
pub fn lookup_instruction(word: &str) -> Option<&'static InstructionEntry> {
    let mnemonic = word.split_once('.').map(|(head, _)| head).unwrap_or(word);
    INSTRUCTION_MAP.get(mnemonic.to_ascii_lowercase().as_str()).copied()
}

pub fn is_instruction(word: &str) -> bool {
    lookup_instruction(word).is_some()
}

pub fn preprocessor_directives() -> &'static [PreprocessorEntry] {
    preprocessor::PREPROCESSOR
}

pub fn lookup_preprocessor(name: &str) -> Option<&'static PreprocessorEntry> {
    preprocessor::PREPROCESSOR.iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Whether `name` is a preprocessor directive that is followed by arguments.
pub fn preprocessor_takes_parameters(name: &str) -> bool {
    lookup_preprocessor(name).is_some_and(|entry| entry.takes_parameters)
}

#[cfg(test)]
#[path = "../../tests/src/language/language_tests.rs"]
mod tests;
