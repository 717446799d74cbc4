//! Arithmetic, logical, compare, increment/decrement, and shift/rotate
//! instructions.

use super::{Cpu, StatusFlag};
use crate::opcodes::Mode;

/// Function: `A = A | value`
/// Flags: N Z
pub fn ora(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.a |= value;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: `A = A & value`
/// Flags: N Z
pub fn and(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.a &= value;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: `A = A ^ value`
/// Flags: N Z
pub fn eor(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.a ^= value;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: `A = A + value + carry`
/// Flags: N Z C V
pub fn adc(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    let result = cpu.a as u16 + value as u16 + cpu.get_carry() as u16;
    cpu.update_carry_and_overflow_flag(value, result);
    cpu.a = result as u8;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: `A = A - value - (1 - carry)`
/// Flags: N Z C V
///
/// Implemented as `ADC(A, !value)`, the standard trick that lets subtraction
/// reuse the adder's carry/overflow logic: `!value` is `-value - 1` in two's
/// complement, so `A + !value + C == A - value - (1 - C)`.
pub fn sbc(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    let inverted_value = !value;
    let result = cpu.a as u16 + inverted_value as u16 + cpu.get_carry() as u16;
    cpu.update_carry_and_overflow_flag(inverted_value, result);
    cpu.a = result as u8;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: `A - value`, discarded
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.set_status_flag(StatusFlag::Carry, cpu.a >= value);
    cpu.update_zero_and_negative_flag(cpu.a.wrapping_sub(value));
}

/// Function: `X - value`, discarded
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.set_status_flag(StatusFlag::Carry, cpu.x >= value);
    cpu.update_zero_and_negative_flag(cpu.x.wrapping_sub(value));
}

/// Function: `Y - value`, discarded
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra_cycle);
    cpu.set_status_flag(StatusFlag::Carry, cpu.y >= value);
    cpu.update_zero_and_negative_flag(cpu.y.wrapping_sub(value));
}

/// Function: `memory[address] -= 1`
/// Flags: N Z
pub fn dec(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, value) = cpu.get_address_and_operand(mode, extra_cycle);
    let result = value.wrapping_sub(1);
    cpu.bus.borrow_mut().set_u8(address, result);
    cpu.update_zero_and_negative_flag(result);
}

/// Function: `X -= 1`
/// Flags: N Z
pub fn dex(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Function: `Y -= 1`
/// Flags: N Z
pub fn dey(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Function: `memory[address] += 1`
/// Flags: N Z
pub fn inc(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, value) = cpu.get_address_and_operand(mode, extra_cycle);
    let result = value.wrapping_add(1);
    cpu.bus.borrow_mut().set_u8(address, result);
    cpu.update_zero_and_negative_flag(result);
}

/// Function: `X += 1`
/// Flags: N Z
pub fn inx(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Function: `Y += 1`
/// Flags: N Z
pub fn iny(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Function: `value <<= 1`, operating on A when `mode` is `Accumulator` and on
/// `memory[address]` otherwise.
/// Flags: N Z C (carry receives the bit shifted out)
pub fn asl(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, value) = cpu.get_rmw_operand(mode, extra_cycle);
    cpu.set_status_flag(StatusFlag::Carry, value & 0b1000_0000 != 0);
    let result = value << 1;
    cpu.write_rmw_result(address, result);
    cpu.update_zero_and_negative_flag(result);
}

/// Function: `value = (value << 1) | carry`
/// Flags: N Z C (carry receives the bit shifted out)
pub fn rol(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, value) = cpu.get_rmw_operand(mode, extra_cycle);
    let old_carry = cpu.get_carry();
    cpu.set_status_flag(StatusFlag::Carry, value & 0b1000_0000 != 0);
    let result = (value << 1) | old_carry;
    cpu.write_rmw_result(address, result);
    cpu.update_zero_and_negative_flag(result);
}

/// Function: `value >>= 1`, operating on A when `mode` is `Accumulator` and on
/// `memory[address]` otherwise.
/// Flags: N (always cleared) Z C (carry receives the bit shifted out)
pub fn lsr(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, value) = cpu.get_rmw_operand(mode, extra_cycle);
    cpu.set_status_flag(StatusFlag::Carry, value & 0b0000_0001 != 0);
    let result = value >> 1;
    cpu.write_rmw_result(address, result);
    cpu.update_zero_and_negative_flag(result);
}

/// Function: `value = (value >> 1) | (carry << 7)`
/// Flags: N Z C (carry receives the bit shifted out)
pub fn ror(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, value) = cpu.get_rmw_operand(mode, extra_cycle);
    let old_carry = cpu.get_carry();
    cpu.set_status_flag(StatusFlag::Carry, value & 0b0000_0001 != 0);
    let result = (value >> 1) | (old_carry << 7);
    cpu.write_rmw_result(address, result);
    cpu.update_zero_and_negative_flag(result);
}
