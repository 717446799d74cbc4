//! Opcode tables: the byte-indexed data the CPU's tick loop uses to decode and
//! cost an instruction, and the symbolic `OpCode`/`Instruction` types the
//! assembler uses to go the other way (mnemonic + addressing mode -> byte).
//!
//! Illegal/undocumented opcode bytes are not given names here; they decode via
//! `ADDRESSING_MODE_TABLE`/`OPERATION_FN_TABLE` as a one-cycle implied-mode NOP,
//! per the failure semantics for unrecognized opcodes.

use crate::cpu::opcodes_jump::*;
use crate::cpu::opcodes_logical::*;
use crate::cpu::opcodes_move::*;
use crate::cpu::Cpu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    // Logical and arithmetic commands.
    ORA,
    AND,
    EOR,
    ADC,
    SBC,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    INC,
    INX,
    INY,
    ASL,
    ROL,
    LSR,
    ROR,
    // Move commands.
    LDA,
    STA,
    LDX,
    STX,
    LDY,
    STY,
    TAX,
    TXA,
    TAY,
    TYA,
    TSX,
    TXS,
    PLA,
    PHA,
    PLP,
    PHP,
    // Jump / flag commands.
    BPL,
    BMI,
    BVC,
    BVS,
    BCC,
    BCS,
    BNE,
    BEQ,
    BRK,
    RTI,
    JSR,
    RTS,
    JMP,
    BIT,
    CLC,
    SEC,
    CLD,
    SED,
    CLI,
    SEI,
    CLV,
    NOP,
}

/// Recognizes a case-insensitive mnemonic as written in source text. Used by
/// the assembler's lexer/parser; returns `None` for anything that isn't one of
/// the documented 56 mnemonics.
pub fn match_instruction(string: &str) -> Option<Instruction> {
    let instruction = match string.to_lowercase().as_ref() {
        "ora" => Instruction::ORA,
        "and" => Instruction::AND,
        "eor" => Instruction::EOR,
        "adc" => Instruction::ADC,
        "sbc" => Instruction::SBC,
        "cmp" => Instruction::CMP,
        "cpx" => Instruction::CPX,
        "cpy" => Instruction::CPY,
        "dec" => Instruction::DEC,
        "dex" => Instruction::DEX,
        "dey" => Instruction::DEY,
        "inc" => Instruction::INC,
        "inx" => Instruction::INX,
        "iny" => Instruction::INY,
        "asl" => Instruction::ASL,
        "rol" => Instruction::ROL,
        "lsr" => Instruction::LSR,
        "ror" => Instruction::ROR,
        "lda" => Instruction::LDA,
        "sta" => Instruction::STA,
        "ldx" => Instruction::LDX,
        "stx" => Instruction::STX,
        "ldy" => Instruction::LDY,
        "sty" => Instruction::STY,
        "tax" => Instruction::TAX,
        "txa" => Instruction::TXA,
        "tay" => Instruction::TAY,
        "tya" => Instruction::TYA,
        "tsx" => Instruction::TSX,
        "txs" => Instruction::TXS,
        "pla" => Instruction::PLA,
        "pha" => Instruction::PHA,
        "plp" => Instruction::PLP,
        "php" => Instruction::PHP,
        "bpl" => Instruction::BPL,
        "bmi" => Instruction::BMI,
        "bvc" => Instruction::BVC,
        "bvs" => Instruction::BVS,
        "bcc" => Instruction::BCC,
        "bcs" => Instruction::BCS,
        "bne" => Instruction::BNE,
        "beq" => Instruction::BEQ,
        "brk" => Instruction::BRK,
        "rti" => Instruction::RTI,
        "jsr" => Instruction::JSR,
        "rts" => Instruction::RTS,
        "jmp" => Instruction::JMP,
        "bit" => Instruction::BIT,
        "clc" => Instruction::CLC,
        "sec" => Instruction::SEC,
        "cld" => Instruction::CLD,
        "sed" => Instruction::SED,
        "cli" => Instruction::CLI,
        "sei" => Instruction::SEI,
        "clv" => Instruction::CLV,
        "nop" => Instruction::NOP,
        _ => return None,
    };
    Some(instruction)
}

/// The 151 documented (legal) opcode bytes, named `MNEMONIC_MODE`.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    BRK = 0x00,
    ORA_izx = 0x01,
    ORA_zp = 0x05,
    ASL_zp = 0x06,
    PHP = 0x08,
    ORA_imm = 0x09,
    ASL_a = 0x0a,
    ORA_abs = 0x0d,
    ASL_abs = 0x0e,
    BPL_rel = 0x10,
    ORA_izy = 0x11,
    ORA_zpx = 0x15,
    ASL_zpx = 0x16,
    CLC = 0x18,
    ORA_aby = 0x19,
    ORA_abx = 0x1d,
    ASL_abx = 0x1e,
    JSR_abs = 0x20,
    AND_izx = 0x21,
    BIT_zp = 0x24,
    AND_zp = 0x25,
    ROL_zp = 0x26,
    PLP = 0x28,
    AND_imm = 0x29,
    ROL_a = 0x2a,
    BIT_abs = 0x2c,
    AND_abs = 0x2d,
    ROL_abs = 0x2e,
    BMI_rel = 0x30,
    AND_izy = 0x31,
    AND_zpx = 0x35,
    ROL_zpx = 0x36,
    SEC = 0x38,
    AND_aby = 0x39,
    AND_abx = 0x3d,
    ROL_abx = 0x3e,
    RTI = 0x40,
    EOR_izx = 0x41,
    EOR_zp = 0x45,
    LSR_zp = 0x46,
    PHA = 0x48,
    EOR_imm = 0x49,
    LSR_a = 0x4a,
    JMP_abs = 0x4c,
    EOR_abs = 0x4d,
    LSR_abs = 0x4e,
    BVC_rel = 0x50,
    EOR_izy = 0x51,
    EOR_zpx = 0x55,
    LSR_zpx = 0x56,
    CLI = 0x58,
    EOR_aby = 0x59,
    EOR_abx = 0x5d,
    LSR_abx = 0x5e,
    RTS = 0x60,
    ADC_izx = 0x61,
    ADC_zp = 0x65,
    ROR_zp = 0x66,
    PLA = 0x68,
    ADC_imm = 0x69,
    ROR_a = 0x6a,
    JMP_ind = 0x6c,
    ADC_abs = 0x6d,
    ROR_abs = 0x6e,
    BVS_rel = 0x70,
    ADC_izy = 0x71,
    ADC_zpx = 0x75,
    ROR_zpx = 0x76,
    SEI = 0x78,
    ADC_aby = 0x79,
    ADC_abx = 0x7d,
    ROR_abx = 0x7e,
    STA_izx = 0x81,
    STY_zp = 0x84,
    STA_zp = 0x85,
    STX_zp = 0x86,
    DEY = 0x88,
    TXA = 0x8a,
    STY_abs = 0x8c,
    STA_abs = 0x8d,
    STX_abs = 0x8e,
    BCC_rel = 0x90,
    STA_izy = 0x91,
    STY_zpx = 0x94,
    STA_zpx = 0x95,
    STX_zpy = 0x96,
    TYA = 0x98,
    STA_aby = 0x99,
    TXS = 0x9a,
    STA_abx = 0x9d,
    LDY_imm = 0xa0,
    LDA_izx = 0xa1,
    LDX_imm = 0xa2,
    LDY_zp = 0xa4,
    LDA_zp = 0xa5,
    LDX_zp = 0xa6,
    TAY = 0xa8,
    LDA_imm = 0xa9,
    TAX = 0xaa,
    LDY_abs = 0xac,
    LDA_abs = 0xad,
    LDX_abs = 0xae,
    BCS_rel = 0xb0,
    LDA_izy = 0xb1,
    LDY_zpx = 0xb4,
    LDA_zpx = 0xb5,
    LDX_zpy = 0xb6,
    CLV = 0xb8,
    LDA_aby = 0xb9,
    TSX = 0xba,
    LDY_abx = 0xbc,
    LDA_abx = 0xbd,
    LDX_aby = 0xbe,
    CPY_imm = 0xc0,
    CMP_izx = 0xc1,
    CPY_zp = 0xc4,
    CMP_zp = 0xc5,
    DEC_zp = 0xc6,
    INY = 0xc8,
    CMP_imm = 0xc9,
    DEX = 0xca,
    CPY_abs = 0xcc,
    CMP_abs = 0xcd,
    DEC_abs = 0xce,
    BNE_rel = 0xd0,
    CMP_izy = 0xd1,
    CMP_zpx = 0xd5,
    DEC_zpx = 0xd6,
    CLD = 0xd8,
    CMP_aby = 0xd9,
    CMP_abx = 0xdd,
    DEC_abx = 0xde,
    CPX_imm = 0xe0,
    SBC_izx = 0xe1,
    CPX_zp = 0xe4,
    SBC_zp = 0xe5,
    INC_zp = 0xe6,
    INX = 0xe8,
    SBC_imm = 0xe9,
    NOP = 0xea,
    CPX_abs = 0xec,
    SBC_abs = 0xed,
    INC_abs = 0xee,
    BEQ_rel = 0xf0,
    SBC_izy = 0xf1,
    SBC_zpx = 0xf5,
    INC_zpx = 0xf6,
    SED = 0xf8,
    SBC_aby = 0xf9,
    SBC_abx = 0xfd,
    INC_abx = 0xfe,
}

/// Base cycle cost per opcode byte, indexed by raw opcode value. Illegal
/// opcode slots keep the canonical 6502 reference timing even though this
/// emulator treats them as a one-cycle NOP, so a disassembler stepping over
/// illegal bytes in a foreign program still advances a plausible cycle count.
#[rustfmt::skip]
pub const CYCLES_TABLE: [u8; 256] = [
    7, 6, 0, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6, 2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7,
    4, 4, 7, 7, 6, 6, 0, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6, 2, 5, 0, 8, 4, 4, 6, 6,
    2, 4, 2, 7, 4, 4, 7, 7, 6, 6, 0, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6, 2, 5, 0, 8,
    4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, 6, 6, 0, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6,
    2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, 2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2,
    4, 4, 4, 4, 2, 6, 0, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5, 2, 6, 2, 6, 3, 3, 3, 3,
    2, 2, 2, 2, 4, 4, 4, 4, 2, 5, 0, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4, 2, 6, 2, 8,
    3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, 2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, 2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7,
    4, 4, 7, 7,
];

/// Extra cycle charged when an indexed/indirect addressing mode's effective
/// address crosses a page boundary (AbsoluteX/Y, IndirectY), or when a branch
/// is taken (Relative). Branch instructions charge this unconditionally, at
/// decode time, rather than only when taken: see `Mode::Relative`'s handling
/// in the CPU's addressing decoder for the taken/not-taken split, which adds
/// a further cycle on top of this one. This is the whole-instruction-grained
/// approximation the bus timing model settles for.
#[rustfmt::skip]
const EXTRA_CYCLE_ROW: [u8; 32] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1,
];

pub const EXTRA_CYCLES_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = EXTRA_CYCLE_ROW[i % 32];
        i += 1;
    }
    table
};

#[rustfmt::skip]
pub const ADDRESSING_MODE_TABLE: [Mode; 256] = [
    Mode::Implied, Mode::IndirectX, Mode::Implied, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::AbsoluteY, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX,

    Mode::Absolute, Mode::IndirectX, Mode::Implied, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::AbsoluteY, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX,

    Mode::Implied, Mode::IndirectX, Mode::Implied, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::AbsoluteY, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX,

    Mode::Implied, Mode::IndirectX, Mode::Implied, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::Immediate, Mode::Indirect, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::AbsoluteY, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX,

    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::ZeroPageY,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::AbsoluteY, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteY, Mode::AbsoluteY,

    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::ZeroPageY,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::AbsoluteY, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteY, Mode::AbsoluteY,

    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::AbsoluteY, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX,

    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::AbsoluteY, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX,
];

/// Lowercase mnemonic per opcode byte, for disassembly. Illegal opcode bytes
/// are named `"nop"`, matching how they're actually dispatched.
#[rustfmt::skip]
pub const MNEMONIC_TABLE: [&str; 256] = [
    "brk", "ora", "nop", "nop", "nop", "ora", "asl", "nop", "php", "ora", "asl", "nop",
    "nop", "ora", "asl", "nop", "bpl", "ora", "nop", "nop", "nop", "ora", "asl", "nop",
    "clc", "ora", "nop", "nop", "nop", "ora", "asl", "nop", "jsr", "and", "nop", "nop",
    "bit", "and", "rol", "nop", "plp", "and", "rol", "nop", "bit", "and", "rol", "nop",
    "bmi", "and", "nop", "nop", "nop", "and", "rol", "nop", "sec", "and", "nop", "nop",
    "nop", "and", "rol", "nop", "rti", "eor", "nop", "nop", "nop", "eor", "lsr", "nop",
    "pha", "eor", "lsr", "nop", "jmp", "eor", "lsr", "nop", "bvc", "eor", "nop", "nop",
    "nop", "eor", "lsr", "nop", "cli", "eor", "nop", "nop", "nop", "eor", "lsr", "nop",
    "rts", "adc", "nop", "nop", "nop", "adc", "ror", "nop", "pla", "adc", "ror", "nop",
    "jmp", "adc", "ror", "nop", "bvs", "adc", "nop", "nop", "nop", "adc", "ror", "nop",
    "sei", "adc", "nop", "nop", "nop", "adc", "ror", "nop", "nop", "sta", "nop", "nop",
    "sty", "sta", "stx", "nop", "dey", "nop", "txa", "nop", "sty", "sta", "stx", "nop",
    "bcc", "sta", "nop", "nop", "sty", "sta", "stx", "nop", "tya", "sta", "txs", "nop",
    "nop", "sta", "nop", "nop", "ldy", "lda", "ldx", "nop", "ldy", "lda", "ldx", "nop",
    "tay", "lda", "tax", "nop", "ldy", "lda", "ldx", "nop", "bcs", "lda", "nop", "nop",
    "ldy", "lda", "ldx", "nop", "clv", "lda", "tsx", "nop", "ldy", "lda", "ldx", "nop",
    "cpy", "cmp", "nop", "nop", "cpy", "cmp", "dec", "nop", "iny", "cmp", "dex", "nop",
    "cpy", "cmp", "dec", "nop", "bne", "cmp", "nop", "nop", "nop", "cmp", "dec", "nop",
    "cld", "cmp", "nop", "nop", "nop", "cmp", "dec", "nop", "cpx", "sbc", "nop", "nop",
    "cpx", "sbc", "inc", "nop", "inx", "sbc", "nop", "nop", "cpx", "sbc", "inc", "nop",
    "beq", "sbc", "nop", "nop", "nop", "sbc", "inc", "nop", "sed", "sbc", "nop", "nop",
    "nop", "sbc", "inc", "nop",
];

/// Reverse lookup used by the assembler's emitter: given a mnemonic and the
/// addressing-mode variant its argument parsed to, find the opcode byte.
/// Scans `MNEMONIC_TABLE`/`ADDRESSING_MODE_TABLE` rather than maintaining a
/// second hand-written table, per 9. DESIGN NOTES' guidance that the
/// executor's and emitter's tables "must be generated from one source of
/// truth". `NOP` is special-cased because illegal opcode bytes are also
/// labeled `"nop"` in `MNEMONIC_TABLE` for disassembly purposes, which would
/// otherwise make the very first illegal slot win the reverse lookup instead
/// of the legal `0xEA`.
pub fn opcode_byte(instruction: Instruction, mode: Mode) -> Option<u8> {
    if instruction == Instruction::NOP && mode == Mode::Implied {
        return Some(OpCode::NOP as u8);
    }
    let mnemonic = format!("{:?}", instruction).to_lowercase();
    (0..256u16).map(|i| i as usize).find(|&i| {
        MNEMONIC_TABLE[i] == mnemonic && ADDRESSING_MODE_TABLE[i] == mode && i != OpCode::NOP as usize
    }).map(|i| i as u8)
}

type OperationFn = fn(&mut Cpu, Mode, u8);

/// Opcode byte -> implementation. Illegal opcode bytes dispatch to `nop`,
/// which is the documented failure behavior for an unrecognized opcode.
#[rustfmt::skip]
pub const OPERATION_FN_TABLE: [OperationFn; 256] = [
    brk, ora, nop, nop, nop, ora, asl, nop, php, ora, asl, nop, nop, ora, asl, nop,
    bpl, ora, nop, nop, nop, ora, asl, nop, clc, ora, nop, nop, nop, ora, asl, nop,
    jsr, and, nop, nop, bit, and, rol, nop, plp, and, rol, nop, bit, and, rol, nop,
    bmi, and, nop, nop, nop, and, rol, nop, sec, and, nop, nop, nop, and, rol, nop,
    rti, eor, nop, nop, nop, eor, lsr, nop, pha, eor, lsr, nop, jmp, eor, lsr, nop,
    bvc, eor, nop, nop, nop, eor, lsr, nop, cli, eor, nop, nop, nop, eor, lsr, nop,
    rts, adc, nop, nop, nop, adc, ror, nop, pla, adc, ror, nop, jmp, adc, ror, nop,
    bvs, adc, nop, nop, nop, adc, ror, nop, sei, adc, nop, nop, nop, adc, ror, nop,
    nop, sta, nop, nop, sty, sta, stx, nop, dey, nop, txa, nop, sty, sta, stx, nop,
    bcc, sta, nop, nop, sty, sta, stx, nop, tya, sta, txs, nop, nop, sta, nop, nop,
    ldy, lda, ldx, nop, ldy, lda, ldx, nop, tay, lda, tax, nop, ldy, lda, ldx, nop,
    bcs, lda, nop, nop, ldy, lda, ldx, nop, clv, lda, tsx, nop, ldy, lda, ldx, nop,
    cpy, cmp, nop, nop, cpy, cmp, dec, nop, iny, cmp, dex, nop, cpy, cmp, dec, nop,
    bne, cmp, nop, nop, nop, cmp, dec, nop, cld, cmp, nop, nop, nop, cmp, dec, nop,
    cpx, sbc, nop, nop, cpx, sbc, inc, nop, inx, sbc, nop, nop, cpx, sbc, inc, nop,
    beq, sbc, nop, nop, nop, sbc, inc, nop, sed, sbc, nop, nop, nop, sbc, inc, nop,
];
