/// 6502 operand addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
}

impl AddressingMode {
    /// Operand shape as it is written in source.
    pub fn syntax(self) -> &'static str {
        match self {
            Self::Implied => "",
            Self::Accumulator => "a",
            Self::Immediate => "#value",
            Self::ZeroPage => "zp",
            Self::ZeroPageX => "zp,x",
            Self::ZeroPageY => "zp,y",
            Self::Absolute => "addr",
            Self::AbsoluteX => "addr,x",
            Self::AbsoluteY => "addr,y",
            Self::Indirect => "(addr)",
            Self::IndirectX => "(zp,x)",
            Self::IndirectY => "(zp),y",
            Self::Relative => "label",
        }
    }
}

/// A static database entry for one instruction mnemonic.
#[derive(Debug, Clone)]
pub struct InstructionEntry {
    pub mnemonic: &'static str,
    pub description: &'static str,
    /// Processor flags the instruction may change, in `NV-BDIZC` order.
    pub flags: &'static str,
    pub modes: &'static [AddressingMode],
    pub undocumented: bool,
}

impl InstructionEntry {
    pub(crate) const fn legal(
        mnemonic: &'static str,
        description: &'static str,
        flags: &'static str,
        modes: &'static [AddressingMode],
    ) -> Self {
        Self {
            mnemonic,
            description,
            flags,
            modes,
            undocumented: false,
        }
    }

    pub(crate) const fn illegal(
        mnemonic: &'static str,
        description: &'static str,
        flags: &'static str,
        modes: &'static [AddressingMode],
    ) -> Self {
        Self {
            mnemonic,
            description,
            flags,
            modes,
            undocumented: true,
        }
    }

    /// Markdown block used by hover and completion documentation.
    pub fn documentation(&self) -> String {
        let mut md = format!("**{}** - {}", self.mnemonic.to_uppercase(), self.description);
        if self.undocumented {
            md.push_str(" *(undocumented)*");
        }
        md.push_str("\n\n```kickass\n");
        for mode in self.modes {
            let operand = mode.syntax();
            if operand.is_empty() {
                md.push_str(&format!("{}\n", self.mnemonic));
            } else {
                md.push_str(&format!("{} {operand}\n", self.mnemonic));
            }
        }
        md.push_str("```");
        if !self.flags.is_empty() {
            md.push_str(&format!("\n\nFlags: `{}`", self.flags));
        }
        md
    }
}

/// A preprocessor directive known without consulting the report.
#[derive(Debug, Clone)]
pub struct PreprocessorEntry {
    pub name: &'static str,
    pub example: &'static str,
    pub description: &'static str,
    /// Whether the directive is followed by an argument expression.
    pub takes_parameters: bool,
}
