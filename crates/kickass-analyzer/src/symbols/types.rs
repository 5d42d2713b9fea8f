use crate::report::SourceRange;
use crate::scope::ScopeId;

/// Discriminant of [`SymbolKind`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolType {
    NamedLabel,
    Label,
    Constant,
    Function,
    Macro,
    PseudoCommand,
    Variable,
    Namespace,
    Parameter,
    Boolean,
}

impl SymbolType {
    pub fn describe(self) -> &'static str {
        match self {
            Self::NamedLabel => "label",
            Self::Label => "label",
            Self::Constant => "constant",
            Self::Function => "function",
            Self::Macro => "macro",
            Self::PseudoCommand => "pseudocommand",
            Self::Variable => "variable",
            Self::Namespace => "namespace",
            Self::Parameter => "parameter",
            Self::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterKind {
    #[default]
    Value,
    String,
    File,
    Enum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    pub description: Option<String>,
    pub optional: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Value,
            description: None,
            optional: false,
        }
    }
}

/// Right-hand side of a `name = value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolValue {
    pub text: String,
    pub number: Option<i64>,
}

/// Per-type payload of a symbol. Only callable kinds carry parameters and
/// only value-like kinds carry a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    NamedLabel,
    Label {
        value: Option<SymbolValue>,
    },
    Constant {
        value: Option<SymbolValue>,
    },
    Variable {
        value: Option<SymbolValue>,
    },
    Function {
        parameters: Vec<Parameter>,
    },
    Macro {
        parameters: Vec<Parameter>,
    },
    PseudoCommand {
        parameters: Vec<Parameter>,
    },
    Namespace,
    Parameter {
        parameter: Parameter,
    },
    Boolean,
}

impl SymbolKind {
    pub fn symbol_type(&self) -> SymbolType {
        match self {
            Self::NamedLabel => SymbolType::NamedLabel,
            Self::Label {
                ..
            } => SymbolType::Label,
            Self::Constant {
                ..
            } => SymbolType::Constant,
            Self::Variable {
                ..
            } => SymbolType::Variable,
            Self::Function {
                ..
            } => SymbolType::Function,
            Self::Macro {
                ..
            } => SymbolType::Macro,
            Self::PseudoCommand {
                ..
            } => SymbolType::PseudoCommand,
            Self::Namespace => SymbolType::Namespace,
            Self::Parameter {
                ..
            } => SymbolType::Parameter,
            Self::Boolean => SymbolType::Boolean,
        }
    }

    pub fn parameters(&self) -> Option<&[Parameter]> {
        match self {
            Self::Function {
                parameters,
            }
            | Self::Macro {
                parameters,
            }
            | Self::PseudoCommand {
                parameters,
            } => Some(parameters),
            _ => None,
        }
    }

    pub(crate) fn parameters_mut(&mut self) -> Option<&mut Vec<Parameter>> {
        match self {
            Self::Function {
                parameters,
            }
            | Self::Macro {
                parameters,
            }
            | Self::PseudoCommand {
                parameters,
            } => Some(parameters),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&SymbolValue> {
        match self {
            Self::Label {
                value,
            }
            | Self::Constant {
                value,
            }
            | Self::Variable {
                value,
            } => value.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Scope the symbol is visible from; `GLOBAL` for hoisted names.
    pub scope: ScopeId,
    /// Scope the declaration physically appears in.
    pub lexical_scope: ScopeId,
    pub file_index: u32,
    pub range: SourceRange,
    pub doc: Option<String>,
    pub is_global: bool,
    pub is_main: bool,
    pub is_builtin: bool,
}

impl Symbol {
    pub fn symbol_type(&self) -> SymbolType {
        self.kind.symbol_type()
    }

    /// One-line declaration rendering used by hover and completion detail.
    pub fn signature(&self) -> String {
        match &self.kind {
            SymbolKind::NamedLabel => format!("{}:", self.name),
            SymbolKind::Label {
                value,
            } => render_assignment(".label", &self.name, value.as_ref()),
            SymbolKind::Constant {
                value,
            } => render_assignment(".const", &self.name, value.as_ref()),
            SymbolKind::Variable {
                value,
            } => render_assignment(".var", &self.name, value.as_ref()),
            SymbolKind::Function {
                parameters,
            } => format!(".function {}({})", self.name, join_parameters(parameters, ", ")),
            SymbolKind::Macro {
                parameters,
            } => format!(".macro {}({})", self.name, join_parameters(parameters, ", ")),
            SymbolKind::PseudoCommand {
                parameters,
            } => format!(".pseudocommand {} {}", self.name, join_parameters(parameters, " : ")).trim_end().to_string(),
            SymbolKind::Namespace => format!(".namespace {}", self.name),
            SymbolKind::Parameter {
                ..
            } => format!("(parameter) {}", self.name),
            SymbolKind::Boolean => format!("#define {}", self.name),
        }
    }
}

fn render_assignment(
    directive: &str,
    name: &str,
    value: Option<&SymbolValue>,
) -> String {
    match value {
        Some(value) => format!("{directive} {name} = {}", value.text),
        None => format!("{directive} {name}"),
    }
}

fn join_parameters(
    parameters: &[Parameter],
    separator: &str,
) -> String {
    parameters.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(separator)
}
