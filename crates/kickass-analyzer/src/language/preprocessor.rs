use super::types::PreprocessorEntry;

pub(crate) static PREPROCESSOR: &[PreprocessorEntry] = &[
    PreprocessorEntry {
        name: "#define",
        example: "#define DEBUG",
        description: "Defines a preprocessor symbol.",
        takes_parameters: true,
    },
    PreprocessorEntry {
        name: "#undef",
        example: "#undef DEBUG",
        description: "Removes a preprocessor symbol.",
        takes_parameters: true,
    },
    PreprocessorEntry {
        name: "#if",
        example: "#if DEBUG",
        description: "Assembles the following block if the condition holds.",
        takes_parameters: true,
    },
    PreprocessorEntry {
        name: "#elif",
        example: "#elif RELEASE",
        description: "Alternative condition of an #if block.",
        takes_parameters: true,
    },
    PreprocessorEntry {
        name: "#else",
        example: "#else",
        description: "Fallback branch of an #if block.",
        takes_parameters: false,
    },
    PreprocessorEntry {
        name: "#endif",
        example: "#endif",
        description: "Ends an #if block.",
        takes_parameters: false,
    },
    PreprocessorEntry {
        name: "#import",
        example: "#import \"file.asm\"",
        description: "Imports a source file.",
        takes_parameters: false,
    },
    PreprocessorEntry {
        name: "#importif",
        example: "#importif DEBUG \"debug.asm\"",
        description: "Imports a source file if the condition holds.",
        takes_parameters: true,
    },
    PreprocessorEntry {
        name: "#importonce",
        example: "#importonce",
        description: "Makes the current file importable only once.",
        takes_parameters: false,
    },
];
