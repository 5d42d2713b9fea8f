use super::token::TokenContext;
use crate::language;
use crate::report::Report;
use crate::symbols::{SymbolCatalog, SymbolType};

/// Where the cursor sits, as far as completion is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextKind {
    Bare,
    AfterInstruction,
    AfterSymbol,
    AfterPreprocessor {
        directive: String,
    },
    PreprocessorDirectiveStart,
    DirectiveStart,
}

/// One category of completion candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Instructions,
    NamedLabels,
    Labels,
    Constants,
    Variables,
    Functions,
    Macros,
    PseudoCommands,
    Namespaces,
    Booleans,
    PreprocessorDirectives,
    Directives,
}

impl Offer {
    /// Catalogue type backing this offer, if it is symbol-based.
    pub fn symbol_type(self) -> Option<SymbolType> {
        match self {
            Self::NamedLabels => Some(SymbolType::NamedLabel),
            Self::Labels => Some(SymbolType::Label),
            Self::Constants => Some(SymbolType::Constant),
            Self::Variables => Some(SymbolType::Variable),
            Self::Functions => Some(SymbolType::Function),
            Self::Macros => Some(SymbolType::Macro),
            Self::PseudoCommands => Some(SymbolType::PseudoCommand),
            Self::Namespaces => Some(SymbolType::Namespace),
            Self::Booleans => Some(SymbolType::Boolean),
            Self::Instructions | Self::PreprocessorDirectives | Self::Directives => None,
        }
    }
}

impl ContextKind {
    pub fn offered(&self) -> &'static [Offer] {
        match self {
            Self::Bare => &[Offer::Instructions, Offer::Macros, Offer::PseudoCommands, Offer::Namespaces],
            Self::AfterInstruction => &[
                Offer::NamedLabels,
                Offer::Functions,
                Offer::Variables,
                Offer::Labels,
                Offer::Constants,
                Offer::Macros,
                Offer::Namespaces,
            ],
            Self::AfterSymbol => {
                &[Offer::NamedLabels, Offer::Variables, Offer::Labels, Offer::Constants, Offer::Namespaces]
            },
            Self::AfterPreprocessor {
                directive,
            } if directive.eq_ignore_ascii_case("#define") => &[],
            Self::AfterPreprocessor {
                ..
            } => &[Offer::Booleans],
            Self::PreprocessorDirectiveStart => &[Offer::PreprocessorDirectives],
            Self::DirectiveStart => &[Offer::Directives],
        }
    }
}

/// Name sets the classifier tests tokens against.
#[derive(Debug, Clone, Copy)]
pub struct Lookups<'a> {
    pub catalog: &'a SymbolCatalog,
    pub report: &'a Report,
}

impl Lookups<'_> {
    fn is_symbol(
        &self,
        name: &str,
    ) -> bool {
        let bare = name.trim_start_matches(['@', ':', '#', '<', '>']);
        self.catalog.contains_name(bare) || bare.split_once('(').is_some_and(|(head, _)| self.catalog.contains_name(head))
    }

    fn is_directive(
        &self,
        name: &str,
    ) -> bool {
        self.report.directive_names().any(|d| d.eq_ignore_ascii_case(name))
    }
}

pub fn classify(
    context: &TokenContext,
    lookups: &Lookups<'_>,
) -> ContextKind {
    let Some(last) = context.last_preceding() else {
        if context.trigger == Some('#') || context.token.starts_with('#') {
            return ContextKind::PreprocessorDirectiveStart;
        }
        if context.trigger == Some('.') || context.token.starts_with('.') {
            return ContextKind::DirectiveStart;
        }
        return ContextKind::Bare;
    };

    let last = last.trim_end_matches([',', ':']);
    if language::is_instruction(last) {
        ContextKind::AfterInstruction
    } else if lookups.is_symbol(last) {
        ContextKind::AfterSymbol
    } else if language::preprocessor_takes_parameters(last) {
        ContextKind::AfterPreprocessor {
            directive: last.to_ascii_lowercase(),
        }
    } else if lookups.is_directive(last) {
        ContextKind::AfterSymbol
    } else {
        ContextKind::Bare
    }
}
