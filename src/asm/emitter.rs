//! Node list + label table + total byte length -> a byte buffer of exactly
//! `total_length`. Grounded on the teacher's `AsmLexer::to_bytes`/
//! `to_bytes_before_labels` two-pass shape (write placeholder bytes, patch
//! labels after) and `opcodes.rs`'s `instruction_mode_to_op_code` lookup,
//! here reimplemented as `opcodes::opcode_byte`.
//!
//! Absolute (JMP/JSR) label targets are patched as
//! `memory_range::PROGRAM_ORIGIN + labels[name]`, since `Cpu::load` places
//! the assembled bytes at that bus address. Relative (branch) targets stay
//! origin-independent: they're already a byte offset minus the PC of the
//! instruction after the branch, which cancels the origin out.

use std::fmt;

use super::ast::{Ast, IndexRegister, InstructionArgument, LabelKind, Node, PragmaKind};
use crate::constants::memory_range;
use crate::opcodes::{self, Instruction, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    InvalidInstruction { mnemonic: Instruction },
    UnexpectedArgument { mnemonic: Instruction, argument: &'static str },
    MissingArgument { mnemonic: Instruction },
    LabelNotFound { name: String },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EmitError::InvalidInstruction { mnemonic } => {
                write!(f, "{:?} is not a valid instruction mnemonic", mnemonic)
            }
            EmitError::UnexpectedArgument { mnemonic, argument } => {
                write!(f, "{:?} does not accept a {} argument", mnemonic, argument)
            }
            EmitError::MissingArgument { mnemonic } => {
                write!(f, "{:?} requires an argument", mnemonic)
            }
            EmitError::LabelNotFound { name } => write!(f, "label {:?} was never defined", name),
        }
    }
}

impl std::error::Error for EmitError {}

/// Plain mnemonics with no operand: a fixed opcode byte, no argument bytes.
fn plain_opcode(mnemonic: Instruction) -> Option<u8> {
    opcodes::opcode_byte(mnemonic, Mode::Implied)
}

fn argument_mode(argument: &InstructionArgument) -> (Mode, &'static str) {
    match argument {
        InstructionArgument::Immediate(_) => (Mode::Immediate, "immediate"),
        InstructionArgument::ZeroPage(_) => (Mode::ZeroPage, "zero-page"),
        InstructionArgument::ZeroPageIndexed(_, IndexRegister::X) => (Mode::ZeroPageX, "zero-page,X"),
        InstructionArgument::ZeroPageIndexed(_, IndexRegister::Y) => (Mode::ZeroPageY, "zero-page,Y"),
        InstructionArgument::Absolute(_) => (Mode::Absolute, "absolute"),
        InstructionArgument::AbsoluteIndexed(_, IndexRegister::X) => (Mode::AbsoluteX, "absolute,X"),
        InstructionArgument::AbsoluteIndexed(_, IndexRegister::Y) => (Mode::AbsoluteY, "absolute,Y"),
        InstructionArgument::Indirect(_) => (Mode::Indirect, "indirect"),
        InstructionArgument::IndirectIndexed(_, IndexRegister::X) => (Mode::IndirectX, "(indirect,X)"),
        InstructionArgument::IndirectIndexed(_, IndexRegister::Y) => (Mode::IndirectY, "(indirect),Y"),
        InstructionArgument::Relative(_) => (Mode::Relative, "relative"),
        InstructionArgument::Accumulator => (Mode::Accumulator, "accumulator"),
        InstructionArgument::Label(_, LabelKind::Absolute) => (Mode::Absolute, "label"),
        InstructionArgument::Label(_, LabelKind::Relative) => (Mode::Relative, "label"),
    }
}

pub fn emit(ast: &Ast) -> Result<Vec<u8>, EmitError> {
    let mut bytes = vec![0u8; ast.byte_length];
    let mut branch_label_fixups: Vec<(usize, String)> = Vec::new();
    let mut absolute_label_fixups: Vec<(usize, String)> = Vec::new();

    for node in &ast.nodes {
        let instruction = match node {
            Node::Label { .. } => continue,
            Node::Pragma(pragma) => {
                let mut cursor = pragma.offset;
                for value in &pragma.values {
                    match pragma.kind {
                        PragmaKind::Byte => {
                            bytes[cursor] = *value as u8;
                            cursor += 1;
                        }
                        PragmaKind::Word => {
                            let [low, high] = (*value as u16).to_le_bytes();
                            bytes[cursor] = low;
                            bytes[cursor + 1] = high;
                            cursor += 2;
                        }
                    }
                }
                continue;
            }
            Node::Instruction(instruction) => instruction,
        };
        let cursor = instruction.offset;

        let opcode = match &instruction.argument {
            None => plain_opcode(instruction.mnemonic)
                .ok_or(EmitError::InvalidInstruction { mnemonic: instruction.mnemonic })?,
            Some(argument) => {
                let (mode, description) = argument_mode(argument);
                opcodes::opcode_byte(instruction.mnemonic, mode).ok_or(EmitError::UnexpectedArgument {
                    mnemonic: instruction.mnemonic,
                    argument: description,
                })?
            }
        };
        bytes[cursor] = opcode;

        match &instruction.argument {
            None | Some(InstructionArgument::Accumulator) => {}
            Some(InstructionArgument::Immediate(value))
            | Some(InstructionArgument::ZeroPage(value))
            | Some(InstructionArgument::ZeroPageIndexed(value, _))
            | Some(InstructionArgument::Relative(value)) => {
                bytes[cursor + 1] = *value as u8;
            }
            Some(InstructionArgument::Absolute(value))
            | Some(InstructionArgument::AbsoluteIndexed(value, _))
            | Some(InstructionArgument::Indirect(value))
            | Some(InstructionArgument::IndirectIndexed(value, _)) => {
                let [low, high] = (*value as u16).to_le_bytes();
                bytes[cursor + 1] = low;
                bytes[cursor + 2] = high;
            }
            Some(InstructionArgument::Label(name, LabelKind::Absolute)) => {
                absolute_label_fixups.push((cursor + 1, name.clone()));
            }
            Some(InstructionArgument::Label(name, LabelKind::Relative)) => {
                branch_label_fixups.push((cursor, name.clone()));
            }
        }
    }

    for (byte_offset, name) in absolute_label_fixups {
        let target = *ast.labels.get(&name).ok_or_else(|| EmitError::LabelNotFound { name: name.clone() })?;
        let address = memory_range::PROGRAM_ORIGIN.wrapping_add(target as u16);
        let [low, high] = address.to_le_bytes();
        bytes[byte_offset] = low;
        bytes[byte_offset + 1] = high;
    }

    for (instruction_offset, name) in branch_label_fixups {
        let target = *ast.labels.get(&name).ok_or_else(|| EmitError::LabelNotFound { name: name.clone() })?;
        // The offset is relative to the PC immediately after the operand
        // byte, i.e. two bytes past the branch opcode's own offset.
        let pc_after_branch = instruction_offset + 2;
        let relative = target as i64 - pc_after_branch as i64;
        bytes[instruction_offset + 1] = relative as i8 as u8;
    }

    Ok(bytes)
}
