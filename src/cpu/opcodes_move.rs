//! Load, store, transfer, and stack instructions.

use super::{Cpu, StatusFlag};
use crate::opcodes::Mode;

/// Function: `A = value`
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.a = value;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: `memory[address] = A`
/// Flags: none
pub fn sta(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, 0);
    cpu.bus.borrow_mut().set_u8(address, cpu.a);
}

/// Function: `X = value`
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.x = value;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Function: `memory[address] = X`
/// Flags: none
pub fn stx(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, 0);
    cpu.bus.borrow_mut().set_u8(address, cpu.x);
}

/// Function: `Y = value`
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.y = value;
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Function: `memory[address] = Y`
/// Flags: none
pub fn sty(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, 0);
    cpu.bus.borrow_mut().set_u8(address, cpu.y);
}

/// Function: `X = A`
/// Flags: N Z
pub fn tax(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Function: `A = X`
/// Flags: N Z
pub fn txa(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: `Y = A`
/// Flags: N Z
pub fn tay(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Function: `A = Y`
/// Flags: N Z
pub fn tya(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: `X = S`
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.s;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Function: `S = X`
/// Flags: none
pub fn txs(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.s = cpu.x;
}

/// Function: `A = pop()`
/// Flags: N Z
pub fn pla(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.pull_stack_u8();
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: `push(A)`
/// Flags: none
pub fn pha(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.push_stack_u8(cpu.a);
}

/// Function: `P = pop()`
/// Flags: all, from the popped byte. Bits 4 and 5 (Break/Push) are forced to
/// their conventional values: Break clear, Push set, matching the fact that
/// those two bits don't correspond to real flip-flops in the hardware.
pub fn plp(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    let value = cpu.pull_stack_u8();
    cpu.p = value;
    cpu.set_status_flag(StatusFlag::Break, false);
    cpu.set_status_flag(StatusFlag::Push, true);
}

/// Function: `push(P)`
/// Flags: none. The pushed byte has Break and Push both set, per the
/// convention that PHP always pushes the flags as if from an interrupt
/// requested by software.
pub fn php(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    let value = cpu.p | (StatusFlag::Break as u8) | (StatusFlag::Push as u8);
    cpu.push_stack_u8(value);
}
