use super::types::AddressingMode::{self, *};
use super::types::InstructionEntry;

const IMPLIED: &[AddressingMode] = &[Implied];
const RELATIVE: &[AddressingMode] = &[Relative];
const ALU: &[AddressingMode] = &[Immediate, ZeroPage, ZeroPageX, Absolute, AbsoluteX, AbsoluteY, IndirectX, IndirectY];
const STORE_A: &[AddressingMode] = &[ZeroPage, ZeroPageX, Absolute, AbsoluteX, AbsoluteY, IndirectX, IndirectY];
const SHIFT: &[AddressingMode] = &[Accumulator, ZeroPage, ZeroPageX, Absolute, AbsoluteX];
const MEMORY: &[AddressingMode] = &[ZeroPage, ZeroPageX, Absolute, AbsoluteX];
const BIT: &[AddressingMode] = &[ZeroPage, Absolute];
const COMPARE_INDEX: &[AddressingMode] = &[Immediate, ZeroPage, Absolute];
const LOAD_X: &[AddressingMode] = &[Immediate, ZeroPage, ZeroPageY, Absolute, AbsoluteY];
const LOAD_Y: &[AddressingMode] = &[Immediate, ZeroPage, ZeroPageX, Absolute, AbsoluteX];
const STORE_X: &[AddressingMode] = &[ZeroPage, ZeroPageY, Absolute];
const STORE_Y: &[AddressingMode] = &[ZeroPage, ZeroPageX, Absolute];
const JMP: &[AddressingMode] = &[Absolute, Indirect];
const JSR: &[AddressingMode] = &[Absolute];
const IMMEDIATE: &[AddressingMode] = &[Immediate];
const READ_MODIFY_WRITE: &[AddressingMode] =
    &[ZeroPage, ZeroPageX, Absolute, AbsoluteX, AbsoluteY, IndirectX, IndirectY];
const SAX: &[AddressingMode] = &[ZeroPage, ZeroPageY, Absolute, IndirectX];
const LAX: &[AddressingMode] = &[Immediate, ZeroPage, ZeroPageY, Absolute, AbsoluteY, IndirectX, IndirectY];
const ABSOLUTE_Y: &[AddressingMode] = &[AbsoluteY];
const ABSOLUTE_X: &[AddressingMode] = &[AbsoluteX];
const AHX: &[AddressingMode] = &[AbsoluteY, IndirectY];

pub(crate) static DOCUMENTED: &[InstructionEntry] = &[
    InstructionEntry::legal("adc", "Add memory to accumulator with carry.", "NV----ZC", ALU),
    InstructionEntry::legal("and", "AND memory with accumulator.", "N-----Z-", ALU),
    InstructionEntry::legal("asl", "Shift one bit left.", "N-----ZC", SHIFT),
    InstructionEntry::legal("bcc", "Branch on carry clear.", "", RELATIVE),
    InstructionEntry::legal("bcs", "Branch on carry set.", "", RELATIVE),
    InstructionEntry::legal("beq", "Branch on result zero.", "", RELATIVE),
    InstructionEntry::legal("bit", "Test bits in memory with accumulator.", "NV----Z-", BIT),
    InstructionEntry::legal("bmi", "Branch on result minus.", "", RELATIVE),
    InstructionEntry::legal("bne", "Branch on result not zero.", "", RELATIVE),
    InstructionEntry::legal("bpl", "Branch on result plus.", "", RELATIVE),
    InstructionEntry::legal("brk", "Force break.", "---B-I--", IMPLIED),
    InstructionEntry::legal("bvc", "Branch on overflow clear.", "", RELATIVE),
    InstructionEntry::legal("bvs", "Branch on overflow set.", "", RELATIVE),
    InstructionEntry::legal("clc", "Clear carry flag.", "-------C", IMPLIED),
    InstructionEntry::legal("cld", "Clear decimal mode.", "----D---", IMPLIED),
    InstructionEntry::legal("cli", "Clear interrupt disable bit.", "-----I--", IMPLIED),
    InstructionEntry::legal("clv", "Clear overflow flag.", "-V------", IMPLIED),
    InstructionEntry::legal("cmp", "Compare memory with accumulator.", "N-----ZC", ALU),
    InstructionEntry::legal("cpx", "Compare memory and index X.", "N-----ZC", COMPARE_INDEX),
    InstructionEntry::legal("cpy", "Compare memory and index Y.", "N-----ZC", COMPARE_INDEX),
    InstructionEntry::legal("dec", "Decrement memory by one.", "N-----Z-", MEMORY),
    InstructionEntry::legal("dex", "Decrement index X by one.", "N-----Z-", IMPLIED),
    InstructionEntry::legal("dey", "Decrement index Y by one.", "N-----Z-", IMPLIED),
    InstructionEntry::legal("eor", "Exclusive-OR memory with accumulator.", "N-----Z-", ALU),
    InstructionEntry::legal("inc", "Increment memory by one.", "N-----Z-", MEMORY),
    InstructionEntry::legal("inx", "Increment index X by one.", "N-----Z-", IMPLIED),
    InstructionEntry::legal("iny", "Increment index Y by one.", "N-----Z-", IMPLIED),
    InstructionEntry::legal("jmp", "Jump to new location.", "", JMP),
    InstructionEntry::legal("jsr", "Jump to new location saving return address.", "", JSR),
    InstructionEntry::legal("lda", "Load accumulator with memory.", "N-----Z-", ALU),
    InstructionEntry::legal("ldx", "Load index X with memory.", "N-----Z-", LOAD_X),
    InstructionEntry::legal("ldy", "Load index Y with memory.", "N-----Z-", LOAD_Y),
    InstructionEntry::legal("lsr", "Shift one bit right.", "N-----ZC", SHIFT),
    InstructionEntry::legal("nop", "No operation.", "", IMPLIED),
    InstructionEntry::legal("ora", "OR memory with accumulator.", "N-----Z-", ALU),
    InstructionEntry::legal("pha", "Push accumulator on stack.", "", IMPLIED),
    InstructionEntry::legal("php", "Push processor status on stack.", "", IMPLIED),
    InstructionEntry::legal("pla", "Pull accumulator from stack.", "N-----Z-", IMPLIED),
    InstructionEntry::legal("plp", "Pull processor status from stack.", "NV-BDIZC", IMPLIED),
    InstructionEntry::legal("rol", "Rotate one bit left.", "N-----ZC", SHIFT),
    InstructionEntry::legal("ror", "Rotate one bit right.", "N-----ZC", SHIFT),
    InstructionEntry::legal("rti", "Return from interrupt.", "NV-BDIZC", IMPLIED),
    InstructionEntry::legal("rts", "Return from subroutine.", "", IMPLIED),
    InstructionEntry::legal("sbc", "Subtract memory from accumulator with borrow.", "NV----ZC", ALU),
    InstructionEntry::legal("sec", "Set carry flag.", "-------C", IMPLIED),
    InstructionEntry::legal("sed", "Set decimal flag.", "----D---", IMPLIED),
    InstructionEntry::legal("sei", "Set interrupt disable status.", "-----I--", IMPLIED),
    InstructionEntry::legal("sta", "Store accumulator in memory.", "", STORE_A),
    InstructionEntry::legal("stx", "Store index X in memory.", "", STORE_X),
    InstructionEntry::legal("sty", "Store index Y in memory.", "", STORE_Y),
    InstructionEntry::legal("tax", "Transfer accumulator to index X.", "N-----Z-", IMPLIED),
    InstructionEntry::legal("tay", "Transfer accumulator to index Y.", "N-----Z-", IMPLIED),
    InstructionEntry::legal("tsx", "Transfer stack pointer to index X.", "N-----Z-", IMPLIED),
    InstructionEntry::legal("txa", "Transfer index X to accumulator.", "N-----Z-", IMPLIED),
    InstructionEntry::legal("txs", "Transfer index X to stack pointer.", "", IMPLIED),
    InstructionEntry::legal("tya", "Transfer index Y to accumulator.", "N-----Z-", IMPLIED),
];

pub(crate) static UNDOCUMENTED: &[InstructionEntry] = &[
    InstructionEntry::illegal("slo", "ASL memory, then OR the result into the accumulator.", "N-----ZC", READ_MODIFY_WRITE),
    InstructionEntry::illegal("rla", "ROL memory, then AND the result into the accumulator.", "N-----ZC", READ_MODIFY_WRITE),
    InstructionEntry::illegal("sre", "LSR memory, then EOR the result into the accumulator.", "N-----ZC", READ_MODIFY_WRITE),
    InstructionEntry::illegal("rra", "ROR memory, then ADC the result to the accumulator.", "NV----ZC", READ_MODIFY_WRITE),
    InstructionEntry::illegal("dcp", "DEC memory, then CMP it with the accumulator.", "N-----ZC", READ_MODIFY_WRITE),
    InstructionEntry::illegal("isc", "INC memory, then SBC it from the accumulator.", "NV----ZC", READ_MODIFY_WRITE),
    InstructionEntry::illegal("sax", "Store accumulator AND index X.", "", SAX),
    InstructionEntry::illegal("lax", "Load accumulator and index X with memory.", "N-----Z-", LAX),
    InstructionEntry::illegal("anc", "AND immediate, copying bit 7 into carry.", "N-----ZC", IMMEDIATE),
    InstructionEntry::illegal("anc2", "Alternate opcode of ANC.", "N-----ZC", IMMEDIATE),
    InstructionEntry::illegal("alr", "AND immediate, then LSR the accumulator.", "N-----ZC", IMMEDIATE),
    InstructionEntry::illegal("arr", "AND immediate, then ROR the accumulator.", "NV----ZC", IMMEDIATE),
    InstructionEntry::illegal("axs", "X = (A AND X) - immediate, without borrow.", "N-----ZC", IMMEDIATE),
    InstructionEntry::illegal("sbc2", "Alternate opcode of SBC immediate.", "NV----ZC", IMMEDIATE),
    InstructionEntry::illegal("xaa", "Unstable: A = (A OR magic) AND X AND immediate.", "N-----Z-", IMMEDIATE),
    InstructionEntry::illegal("las", "Load A, X and SP with memory AND SP.", "N-----Z-", ABSOLUTE_Y),
    InstructionEntry::illegal("tas", "SP = A AND X, then store SP AND high byte + 1.", "", ABSOLUTE_Y),
    InstructionEntry::illegal("ahx", "Store A AND X AND high byte + 1.", "", AHX),
    InstructionEntry::illegal("shx", "Store X AND high byte + 1.", "", ABSOLUTE_Y),
    InstructionEntry::illegal("shy", "Store Y AND high byte + 1.", "", ABSOLUTE_X),
];
