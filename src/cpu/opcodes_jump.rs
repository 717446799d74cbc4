//! Branches, jumps, subroutine/stack-frame instructions, BIT, flag
//! instructions, and NOP. The donor codebase's equivalent module was a stack
//! of placeholders; every instruction body here is written against the
//! documented 6502 contract rather than ported from anything.

use super::{Cpu, StatusFlag};
use crate::constants::InterruptVectors;
use crate::opcodes::Mode;

fn branch_if(cpu: &mut Cpu, condition: bool, extra_cycle: u8) {
    if condition {
        let address = cpu.get_operand_address(Mode::Relative, extra_cycle);
        cpu.pc = address;
    } else {
        // The offset byte is still consumed even when the branch isn't taken.
        cpu.next_u8();
    }
}

/// Function: branch on N=0
pub fn bpl(cpu: &mut Cpu, _mode: Mode, extra_cycle: u8) {
    branch_if(cpu, !cpu.is_status_flag_set(StatusFlag::Negative), extra_cycle);
}

/// Function: branch on N=1
pub fn bmi(cpu: &mut Cpu, _mode: Mode, extra_cycle: u8) {
    branch_if(cpu, cpu.is_status_flag_set(StatusFlag::Negative), extra_cycle);
}

/// Function: branch on V=0
pub fn bvc(cpu: &mut Cpu, _mode: Mode, extra_cycle: u8) {
    branch_if(cpu, !cpu.is_status_flag_set(StatusFlag::Overflow), extra_cycle);
}

/// Function: branch on V=1
pub fn bvs(cpu: &mut Cpu, _mode: Mode, extra_cycle: u8) {
    branch_if(cpu, cpu.is_status_flag_set(StatusFlag::Overflow), extra_cycle);
}

/// Function: branch on C=0
pub fn bcc(cpu: &mut Cpu, _mode: Mode, extra_cycle: u8) {
    branch_if(cpu, !cpu.is_status_flag_set(StatusFlag::Carry), extra_cycle);
}

/// Function: branch on C=1
pub fn bcs(cpu: &mut Cpu, _mode: Mode, extra_cycle: u8) {
    branch_if(cpu, cpu.is_status_flag_set(StatusFlag::Carry), extra_cycle);
}

/// Function: branch on Z=0
pub fn bne(cpu: &mut Cpu, _mode: Mode, extra_cycle: u8) {
    branch_if(cpu, !cpu.is_status_flag_set(StatusFlag::Zero), extra_cycle);
}

/// Function: branch on Z=1
pub fn beq(cpu: &mut Cpu, _mode: Mode, extra_cycle: u8) {
    branch_if(cpu, cpu.is_status_flag_set(StatusFlag::Zero), extra_cycle);
}

/// Function: software interrupt. Pushes the address of the instruction two
/// bytes past the opcode (BRK carries a padding byte that real hardware and
/// this core both skip over), then P with Break set, then jumps through the
/// IRQ/BRK vector. The caller (`Cpu::tick`) reports this as
/// `Status::Interrupted(Interrupt::Irq)` regardless of what PC ends up
/// pointing at.
/// Flags: sets Interrupt-disable
pub fn brk(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_stack_u16(cpu.pc);
    let status = cpu.p | (StatusFlag::Break as u8) | (StatusFlag::Push as u8);
    cpu.push_stack_u8(status);
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
    cpu.pc = cpu.bus.borrow().read_u16(InterruptVectors::IrqBrkVector as u16);
}

/// Function: `P = pop(); PC = pop()`, returning from an interrupt handler.
/// Flags: all, from the popped byte (Break forced clear, Push forced set, as
/// with PLP).
pub fn rti(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    let status = cpu.pull_stack_u8();
    cpu.p = status;
    cpu.set_status_flag(StatusFlag::Break, false);
    cpu.set_status_flag(StatusFlag::Push, true);
    cpu.pc = cpu.pull_stack_u16();
}

/// Function: `push(PC - 1); PC = address`
/// Flags: none
pub fn jsr(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.push_stack_u16(cpu.pc.wrapping_sub(1));
    cpu.pc = address;
}

/// Function: `PC = pop() + 1`
/// Flags: none
pub fn rts(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    let return_address = cpu.pull_stack_u16();
    cpu.pc = return_address.wrapping_add(1);
}

/// Function: `PC = address`
/// Flags: none
pub fn jmp(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.pc = address;
}

/// Function: `Z = (A & value) == 0`, N and V copied straight from the
/// operand's bits 7 and 6 rather than from the AND result.
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.set_status_flag(StatusFlag::Zero, cpu.a & value == 0);
    cpu.set_status_flag(StatusFlag::Negative, value & 0b1000_0000 != 0);
    cpu.set_status_flag(StatusFlag::Overflow, value & 0b0100_0000 != 0);
}

/// Function: `C = 0`
pub fn clc(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Carry, false);
}

/// Function: `C = 1`
pub fn sec(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Carry, true);
}

/// Function: `D = 0`. Decimal mode is otherwise unimplemented: ADC/SBC never
/// consult this flag.
pub fn cld(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Decimal, false);
}

/// Function: `D = 1`. See `cld`.
pub fn sed(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Decimal, true);
}

/// Function: `I = 0`
pub fn cli(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, false);
}

/// Function: `I = 1`
pub fn sei(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
}

/// Function: `V = 0`
pub fn clv(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Overflow, false);
}

/// Function: no operation.
pub fn nop(_cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {}
