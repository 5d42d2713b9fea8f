/// Path fragment identifying Kick Assembler's implicit auto-include file.
pub const SYSTEM_INCLUDE_MARKER: &str = "autoinclude.asm";

/// File-name fragment of the ephemeral source the assembler collaborator
/// writes unsaved buffer content into.
pub const SYNTHESIZED_SOURCE_MARKER: &str = ".kickass-analyzer.source";

/// A 0-based, end-exclusive source range inside one reported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceRange {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    pub file_index: u32,
}

impl SourceRange {
    pub const fn new(
        start_line: u32,
        start_col: u32,
        end_line: u32,
        end_col: u32,
        file_index: u32,
    ) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
            file_index,
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }
}

/// Range field of a report record.
///
/// The wire format occasionally carries non-numeric positions; those are kept
/// as `Unresolvable` rather than being coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportRange {
    Resolved(SourceRange),
    Unresolvable,
}

impl ReportRange {
    pub fn resolved(&self) -> Option<&SourceRange> {
        match self {
            Self::Resolved(range) => Some(range),
            Self::Unresolvable => None,
        }
    }

    pub fn file_index(&self) -> Option<u32> {
        self.resolved().map(|range| range.file_index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub index: u32,
    pub path: String,
    pub is_system_include: bool,
    pub is_synthesized_main: bool,
}

impl FileRecord {
    pub fn new(
        index: u32,
        path: impl Into<String>,
        synthesized_marker: &str,
    ) -> Self {
        let path = path.into();
        let is_system_include = path.contains(SYSTEM_INCLUDE_MARKER);
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(&path);
        let is_synthesized_main = !synthesized_marker.is_empty() && file_name.contains(synthesized_marker);
        Self {
            index,
            path,
            is_system_include,
            is_synthesized_main,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Label,
    Directive,
    PpDirective,
    Comment,
    Other(String),
}

impl SyntaxKind {
    pub fn from_wire(value: &str) -> Self {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "label" => Self::Label,
            "directive" => Self::Directive,
            "ppdirective" => Self::PpDirective,
            "comment" => Self::Comment,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            Self::Label => "label",
            Self::Directive => "directive",
            Self::PpDirective => "ppDirective",
            Self::Comment => "comment",
            Self::Other(kind) => kind,
        }
    }

    /// Kinds that can introduce a symbol declaration.
    pub fn is_declaration(&self) -> bool {
        matches!(self, Self::Label | Self::Directive | Self::PpDirective)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    pub kind: SyntaxKind,
    pub range: ReportRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Warning,
    Other(String),
}

impl ErrorSeverity {
    pub fn from_wire(value: &str) -> Self {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub severity: ErrorSeverity,
    pub range: ReportRange,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryEntryKind {
    Constant,
    Function,
    Other,
}

impl LibraryEntryKind {
    fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "constant" => Self::Constant,
            "function" => Self::Function,
            _ => Self::Other,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Function => "function",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryRecord {
    pub library: String,
    pub kind: LibraryEntryKind,
    pub name: String,
    pub arity: Option<u32>,
}

impl LibraryRecord {
    pub(crate) fn from_fields(fields: &[&str]) -> Option<Self> {
        let name = fields.get(2).map(|f| f.trim()).unwrap_or_default();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            library: fields.first().map(|f| f.trim().to_string()).unwrap_or_default(),
            kind: LibraryEntryKind::from_wire(fields.get(1).copied().unwrap_or_default()),
            name: name.to_string(),
            arity: fields.get(3).and_then(|f| f.trim().parse().ok()),
        })
    }

    pub(crate) fn to_wire(&self) -> String {
        match self.arity {
            Some(arity) => format!("{};{};{};{arity}", self.library, self.kind.as_wire(), self.name),
            None => format!("{};{};{}", self.library, self.kind.as_wire(), self.name),
        }
    }
}

/// An assembler or preprocessor directive advertised by the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveRecord {
    pub name: String,
    pub example: String,
    pub description: String,
}

impl DirectiveRecord {
    pub(crate) fn from_fields(fields: &[&str]) -> Option<Self> {
        let name = fields.first().map(|f| f.trim()).unwrap_or_default();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            example: fields.get(1).map(|f| f.trim().to_string()).unwrap_or_default(),
            description: fields.get(2..).map(|rest| rest.join(";").trim().to_string()).unwrap_or_default(),
        })
    }

    pub(crate) fn to_wire(&self) -> String {
        format!("{};{};{}", self.name, self.example, self.description)
    }
}

/// Everything one assemble cycle reported, in emission order per section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub libraries: Vec<LibraryRecord>,
    pub directives: Vec<DirectiveRecord>,
    pub preprocessor_directives: Vec<DirectiveRecord>,
    pub files: Vec<FileRecord>,
    pub syntax: Vec<SyntaxToken>,
    pub errors: Vec<ErrorRecord>,
}

impl Report {
    pub fn file(
        &self,
        index: u32,
    ) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.index == index)
    }

    pub fn main_file(&self) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.is_synthesized_main)
    }

    pub fn is_system_include(
        &self,
        index: u32,
    ) -> bool {
        self.file(index).is_some_and(|f| f.is_system_include)
    }

    /// Resolved comment ranges reported for one file, in source order.
    pub fn comment_ranges(
        &self,
        file_index: u32,
    ) -> Vec<SourceRange> {
        self.syntax
            .iter()
            .filter(|token| token.kind == SyntaxKind::Comment)
            .filter_map(|token| token.range.resolved().copied())
            .filter(|range| range.file_index == file_index)
            .collect()
    }

    pub fn directive_names(&self) -> impl Iterator<Item = &str> {
        self.directives.iter().map(|d| d.name.as_str())
    }

    pub fn preprocessor_directive_names(&self) -> impl Iterator<Item = &str> {
        self.preprocessor_directives.iter().map(|d| d.name.as_str())
    }
}
