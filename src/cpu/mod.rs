//! The MOS 6502 register file, status flags, addressing-mode decoder, and
//! tick/run loop. Instruction bodies live in the sibling `opcodes_*` modules;
//! this module owns everything they're dispatched through.

use std::time::Duration;

use crate::bus::{Bus, SharedBus};
use crate::constants::{memory_range, InterruptVectors};
use crate::mappers::SimpleProgram;
use crate::opcodes::{self, Mode, OpCode};

pub mod opcodes_jump;
pub mod opcodes_logical;
pub mod opcodes_move;

#[cfg(test)]
#[macro_use]
mod test_helpers;

#[cfg(test)]
mod test;

pub const RESET_STATUS_FLAG: u8 = 0b0010_0100;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Carry            = 0b0000_0001,
    Zero             = 0b0000_0010,
    InterruptDisable = 0b0000_0100,
    Decimal          = 0b0000_1000,
    Break            = 0b0001_0000,
    Push             = 0b0010_0000,
    Overflow         = 0b0100_0000,
    Negative         = 0b1000_0000,
}

/// Which register a host is reading or writing through [`Cpu::register`]/
/// [`Cpu::set_register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    X,
    Y,
    S,
    P,
    Pc,
}

/// The 6502's three hardware interrupts, each with its own vector at the top
/// of the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Nmi,
    Irq,
    Reset,
}

impl Interrupt {
    fn vector(self) -> u16 {
        match self {
            Interrupt::Nmi => InterruptVectors::NonMaskableInterrupt as u16,
            Interrupt::Irq => InterruptVectors::IrqBrkVector as u16,
            Interrupt::Reset => InterruptVectors::ResetVector as u16,
        }
    }
}

/// What happened during the last `tick`/`run`. BRK decodes as an IRQ-style
/// interrupt, since that's what it is on real hardware (a software-triggered
/// entry into the IRQ/BRK vector with the break flag set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Interrupted(Interrupt),
}

/// Host-facing clock rate. The core never sleeps on its own; this is metadata
/// a driving loop can use to convert `cycles`/`total_cycles` into wall-clock
/// timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSpeed {
    Ntsc,
    Pal,
}

impl ClockSpeed {
    pub fn hz(self) -> f64 {
        match self {
            ClockSpeed::Ntsc => 1_789_773.0,
            ClockSpeed::Pal => 1_662_607.0,
        }
    }

    pub fn cycle_duration(self) -> Duration {
        Duration::from_secs_f64(1.0 / self.hz())
    }
}

/// This struct implements the MOS Technology 6502 central processing unit.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6502
/// http://wiki.nesdev.com/w/index.php/CPU
pub struct Cpu {
    pub bus: SharedBus,
    /// "A" register - the accumulator.
    pub a: u8,
    /// "X" register.
    pub x: u8,
    /// "Y" register.
    pub y: u8,
    /// "PC" - the program counter.
    pub pc: u16,
    /// "S" - the stack pointer. Hardcoded at page 0x01 (0x0100-0x01FF); the
    /// 6502 uses a descending stack, so it grows downwards.
    /// https://wiki.nesdev.com/w/index.php/Stack
    pub s: u8,
    /// "P" - the status register.
    ///
    ///   7  bit  0
    /// ---- ----
    /// NVss DIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// ||++------ No CPU effect, see: the B flag
    /// |+-------- Overflow
    /// +--------- Negative
    pub p: u8,
    /// Cycles spent on the instruction executed by the most recent `tick`.
    pub cycles: u8,
    /// Running total of cycles spent since this CPU was created.
    pub total_cycles: u64,
    pub tick_count: u64,
    /// Stop `run` after this many ticks. Useful for testing and for hosts
    /// that want a hard upper bound on a program that might never halt.
    pub max_ticks: Option<u64>,
    pub clock_speed: ClockSpeed,
}

impl Cpu {
    pub fn new(bus: SharedBus) -> Cpu {
        let pc = bus.borrow().read_u16(InterruptVectors::ResetVector as u16);
        Cpu {
            bus,
            a: 0,
            x: 0,
            y: 0,
            pc,
            s: 0xfd,
            p: RESET_STATUS_FLAG,
            cycles: 0,
            total_cycles: 0,
            tick_count: 0,
            max_ticks: None,
            clock_speed: ClockSpeed::Ntsc,
        }
    }

    /// Assembles nothing; just loads raw bytes at the standalone program
    /// origin (bus address 0x0600) and points the reset vector there.
    pub fn load(program: &[u8]) -> Cpu {
        let bus = Bus::new_shared_bus(Box::new(SimpleProgram::new()));
        bus.borrow_mut().load(program, memory_range::PROGRAM_ORIGIN);
        Cpu::new(bus)
    }

    /// Like `load`, but also runs the program to completion (until BRK or
    /// `max_ticks`).
    pub fn load_and_run(program: &[u8]) -> Cpu {
        let mut cpu = Cpu::load(program);
        cpu.run();
        cpu
    }

    /// Reinitializes registers to their post-reset state and reloads PC from
    /// the reset vector, without touching bus contents.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.s = 0xfd;
        self.p = RESET_STATUS_FLAG;
        self.pc = self.bus.borrow().read_u16(InterruptVectors::ResetVector as u16);
        self.cycles = 0;
    }

    pub fn register(&self, register: Register) -> u16 {
        match register {
            Register::A => self.a as u16,
            Register::X => self.x as u16,
            Register::Y => self.y as u16,
            Register::S => self.s as u16,
            Register::P => self.p as u16,
            Register::Pc => self.pc,
        }
    }

    pub fn set_register(&mut self, register: Register, value: u16) {
        match register {
            Register::A => self.a = value as u8,
            Register::X => self.x = value as u8,
            Register::Y => self.y = value as u8,
            Register::S => self.s = value as u8,
            Register::P => self.p = value as u8,
            Register::Pc => self.pc = value,
        }
    }

    pub fn read_u8(&self, address: u16) -> u8 {
        self.bus.borrow().read_u8(address)
    }

    pub fn write_u8(&mut self, address: u16, value: u8) {
        self.bus.borrow_mut().set_u8(address, value);
    }

    /// Read the byte at PC without incrementing.
    fn peek_u8(&mut self) -> u8 {
        self.bus.borrow().read_u8(self.pc)
    }

    /// Read the byte at PC and increment PC.
    fn next_u8(&mut self) -> u8 {
        let value = self.bus.borrow().read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Read the word at PC and advance PC by two.
    fn next_u16(&mut self) -> u16 {
        let value = self.bus.borrow().read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Runs one instruction and reports whether it was an ordinary
    /// instruction or an interrupt entry (BRK).
    pub fn tick(&mut self) -> Status {
        self.tick_count += 1;
        self.cycles = 0;
        let opcode = self.next_u8();
        let opcode_index = opcode as usize;

        self.cycles += opcodes::CYCLES_TABLE[opcode_index];
        let mode = opcodes::ADDRESSING_MODE_TABLE[opcode_index];
        let extra_cycle = opcodes::EXTRA_CYCLES_TABLE[opcode_index];
        let operation_fn = opcodes::OPERATION_FN_TABLE[opcode_index];

        operation_fn(self, mode, extra_cycle);
        self.total_cycles += self.cycles as u64;

        if opcode == OpCode::BRK as u8 {
            Status::Interrupted(Interrupt::Irq)
        } else {
            Status::Ok
        }
    }

    /// Runs until `predicate` returns true. Useful for tests that want to
    /// stop at a specific machine state rather than waiting for BRK.
    pub fn run_until<F>(&mut self, predicate: F)
    where
        F: Fn(&Cpu) -> bool,
    {
        while !predicate(self) {
            self.tick();
        }
    }

    /// Resets, then runs until BRK, an externally-triggered interrupt, or
    /// `max_ticks`.
    pub fn run(&mut self) -> Status {
        self.reset();
        loop {
            let status = self.tick();
            if let Status::Interrupted(_) = status {
                return status;
            }
            if let Some(max_ticks) = self.max_ticks {
                if self.tick_count >= max_ticks {
                    return Status::Ok;
                }
            }
        }
    }

    /// Signals a non-maskable interrupt: pushes PC and P (Break clear) and
    /// jumps through 0xFFFA. Always taken, regardless of the
    /// interrupt-disable flag.
    pub fn nmi(&mut self) -> Status {
        self.enter_interrupt(Interrupt::Nmi);
        Status::Interrupted(Interrupt::Nmi)
    }

    /// Signals a maskable interrupt request: pushes PC and P (Break clear)
    /// and jumps through 0xFFFE, unless the interrupt-disable flag is set, in
    /// which case the request is silently ignored, matching hardware.
    pub fn irq(&mut self) -> Status {
        if self.is_status_flag_set(StatusFlag::InterruptDisable) {
            return Status::Ok;
        }
        self.enter_interrupt(Interrupt::Irq);
        Status::Interrupted(Interrupt::Irq)
    }

    /// Enters the given interrupt: pushes PC and P, sets the interrupt
    /// disable flag, and jumps PC to the interrupt's vector. IRQ is ignored
    /// while the interrupt disable flag is already set; NMI and Reset are
    /// not maskable.
    fn enter_interrupt(&mut self, interrupt: Interrupt) {
        if interrupt == Interrupt::Irq && self.is_status_flag_set(StatusFlag::InterruptDisable) {
            return;
        }
        if interrupt != Interrupt::Reset {
            self.push_stack_u16(self.pc);
            self.push_stack_u8(self.p);
        }
        self.set_status_flag(StatusFlag::InterruptDisable, true);
        self.pc = self.bus.borrow().read_u16(interrupt.vector());
        self.cycles += 7;
        self.total_cycles += 7;
    }

    /// The source for the comments on the modes is:
    /// http://www.emulator101.com/6502-addressing-modes.html
    fn get_operand_address(&mut self, mode: Mode, page_boundary_cycle: u8) -> u16 {
        match mode {
            Mode::Absolute => self.next_u16(),
            Mode::AbsoluteX => {
                let base_address = self.next_u16();
                let offset_address = base_address.wrapping_add(self.x as u16);
                self.incur_extra_cycle_on_page_boundary(base_address, offset_address, page_boundary_cycle);
                offset_address
            }
            Mode::AbsoluteY => {
                let base_address = self.next_u16();
                let offset_address = base_address.wrapping_add(self.y as u16);
                self.incur_extra_cycle_on_page_boundary(base_address, offset_address, page_boundary_cycle);
                offset_address
            }
            // The byte after the opcode is the data itself.
            Mode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                address
            }
            Mode::Implied => panic!("Attempting to get the operand address for an implied mode."),
            Mode::Accumulator => panic!("The accumulator has no address."),
            Mode::Indirect => {
                let address = self.next_u16();
                self.bus.borrow().read_u16(address)
            }
            Mode::IndirectX => {
                let zero_page_address = self.next_u8().wrapping_add(self.x) as u16;
                self.bus.borrow().read_u16(zero_page_address)
            }
            Mode::IndirectY => {
                let zero_page_address = self.next_u8() as u16;
                let base_address = self.bus.borrow().read_u16(zero_page_address);
                let offset_address = base_address.wrapping_add(self.y as u16);
                self.incur_extra_cycle_on_page_boundary(base_address, offset_address, page_boundary_cycle);
                offset_address
            }
            // Relative addressing is only used for branches. The operand is a
            // signed offset applied to PC as it stands right after that
            // operand byte has been consumed.
            Mode::Relative => {
                let relative_offset = self.next_u8() as i8;
                let base_address = self.pc;
                let offset_address = base_address.wrapping_add(relative_offset as u16);
                self.incur_extra_cycle_on_page_boundary(base_address, offset_address, page_boundary_cycle);
                offset_address
            }
            Mode::ZeroPage => self.next_u8() as u16,
            // 6502 bug, preserved: zero-page-indexed addressing wraps within
            // the zero page instead of carrying into page 1.
            Mode::ZeroPageX => self.next_u8().wrapping_add(self.x) as u16,
            Mode::ZeroPageY => self.next_u8().wrapping_add(self.y) as u16,
        }
    }

    fn get_address_and_operand(&mut self, mode: Mode, extra_cycle: u8) -> (u16, u8) {
        let address = self.get_operand_address(mode, extra_cycle);
        let value = self.bus.borrow().read_u8(address);
        (address, value)
    }

    /// For the read-modify-write shift/rotate instructions, which can target
    /// either a memory address or the accumulator directly.
    fn get_rmw_operand(&mut self, mode: Mode, extra_cycle: u8) -> (Option<u16>, u8) {
        if mode == Mode::Accumulator {
            return (None, self.a);
        }
        let (address, value) = self.get_address_and_operand(mode, extra_cycle);
        (Some(address), value)
    }

    fn write_rmw_result(&mut self, address: Option<u16>, value: u8) {
        match address {
            Some(address) => self.bus.borrow_mut().set_u8(address, value),
            None => self.a = value,
        }
    }

    fn incur_extra_cycle_on_page_boundary(&mut self, base_address: u16, offset_address: u16, extra_cycles: u8) {
        let [_, base_page] = base_address.to_le_bytes();
        let [_, offset_page] = offset_address.to_le_bytes();
        if base_page != offset_page {
            self.cycles += extra_cycles;
        }
    }

    /// These flags are commonly set together.
    fn update_zero_and_negative_flag(&mut self, value: u8) {
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, value & 0b1000_0000 != 0);
    }

    /// ADC and SBC operate on 9 bits: 8 in the register, the 9th is carry.
    fn update_carry_and_overflow_flag(&mut self, operand: u8, result: u16) {
        self.set_status_flag(StatusFlag::Carry, result & 0b1_0000_0000 != 0);
        let result_byte = result as u8;
        let bit_7 = 0b1000_0000;
        let does_overflow = (bit_7 & !(self.a ^ operand) & (self.a ^ result_byte)) == bit_7;
        self.set_status_flag(StatusFlag::Overflow, does_overflow);
    }

    fn set_status_flag(&mut self, status_flag: StatusFlag, value: bool) {
        if value {
            self.p |= status_flag as u8;
        } else {
            self.p &= !(status_flag as u8);
        }
    }

    fn get_carry(&self) -> u8 {
        self.p & (StatusFlag::Carry as u8)
    }

    fn is_status_flag_set(&self, status_flag: StatusFlag) -> bool {
        let flag = status_flag as u8;
        self.p & flag == flag
    }

    /// Writes the byte at `0x0100 + S`, then decrements S. Hardware wraps S
    /// silently rather than faulting; `try_push_stack_u8` is the
    /// strict-mode counterpart a host can use instead.
    fn push_stack_u8(&mut self, value: u8) {
        let address = u16::from_le_bytes([self.s, memory_range::STACK_PAGE]);
        self.bus.borrow_mut().set_u8(address, value);
        self.s = self.s.wrapping_sub(1);
    }

    /// Increments S, then reads the byte at `0x0100 + S`.
    fn pull_stack_u8(&mut self) -> u8 {
        self.s = self.s.wrapping_add(1);
        let address = u16::from_le_bytes([self.s, memory_range::STACK_PAGE]);
        self.bus.borrow().read_u8(address)
    }

    /// Pushes the high byte first, so a matching `pull_stack_u16` (low then
    /// high) reconstructs the original value.
    fn push_stack_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_stack_u8(high);
        self.push_stack_u8(low);
    }

    fn pull_stack_u16(&mut self) -> u16 {
        let low = self.pull_stack_u8();
        let high = self.pull_stack_u8();
        u16::from_le_bytes([low, high])
    }

    /// Strict byte push: faults instead of wrapping when S is already at the
    /// logical bottom of the stack page (`0x00`), per spec.md's failure
    /// semantics for stack overflow. Opcode bodies never call this; it's
    /// offered to hosts that want `run`-style termination on stack abuse
    /// instead of hardware's silent wraparound (see `StackError`'s doc
    /// comment and DESIGN.md's Open Question resolutions).
    pub fn try_push_stack_u8(&mut self, value: u8) -> Result<(), StackError> {
        if self.s == 0x00 {
            return Err(StackError::Overflow);
        }
        self.push_stack_u8(value);
        Ok(())
    }

    /// Strict byte pull: faults instead of wrapping when S is already at the
    /// logical top of the stack page (`0xFF`), i.e. nothing has been pushed.
    pub fn try_pull_stack_u8(&mut self) -> Result<u8, StackError> {
        if self.s == 0xff {
            return Err(StackError::Underflow);
        }
        Ok(self.pull_stack_u8())
    }
}

/// Errors a host can observe via `Cpu::try_push_stack_u8`/`try_pull_stack_u8`
/// instead of the default lenient push/pull the tick loop uses internally.
/// Hardware itself never faults here: S is just an 8-bit register and
/// wrapping past 0x00/0xFF is well-defined (spec.md section 3's Stack
/// invariant). spec.md section 7 nonetheless names `StackError` as a
/// required error kind with underflow/overflow variants, and section 4.C
/// asks for `run` to terminate on one; this mirrors `BusError`'s
/// lenient-by-default / strict-by-request split in `bus.rs` so both
/// documents are satisfied without opcode bodies paying for a check they
/// don't need. See DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    Underflow,
    Overflow,
}

impl std::fmt::Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StackError::Underflow => write!(f, "stack underflow: pull with no matching push"),
            StackError::Overflow => write!(f, "stack overflow: push beyond the bottom of the stack page"),
        }
    }
}

impl std::error::Error for StackError {}

#[cfg(test)]
mod core_test {
    use super::*;
    use crate::bus::Bus;
    use crate::mappers::SimpleProgram;

    #[test]
    fn reset_clears_registers_and_loads_pc_from_vector() {
        let cpu = Cpu::load(&[0xa9, 0x05, 0x00]);
        assert_eq!(cpu.a, 0);
        assert_eq!(cpu.x, 0);
        assert_eq!(cpu.y, 0);
        assert_eq!(cpu.s, 0xfd);
        assert_eq!(cpu.p, 0b0010_0100);
        assert_eq!(cpu.pc, 0x0600);
    }

    #[test]
    fn reset_method_reloads_from_the_vector_without_touching_bus_contents() {
        let mut cpu = Cpu::load(&[0xa9, 0x05, 0x00]);
        cpu.a = 0x42;
        cpu.reset();
        assert_eq!(cpu.a, 0);
        assert_eq!(cpu.pc, 0x0600);
    }

    // spec.md section 8, scenario 1: LDA #$05; BRK.
    #[test]
    fn scenario_lda_immediate() {
        let cpu = Cpu::load_and_run(&[0xa9, 0x05, 0x00]);
        assert_eq!(cpu.a, 0x05);
        assert!(!cpu.is_status_flag_set(StatusFlag::Zero));
        assert!(!cpu.is_status_flag_set(StatusFlag::Negative));
    }

    // spec.md section 8, scenario 2: LDA #$00; BRK.
    #[test]
    fn scenario_lda_immediate_zero() {
        let cpu = Cpu::load_and_run(&[0xa9, 0x00, 0x00]);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.is_status_flag_set(StatusFlag::Zero));
    }

    // spec.md section 8, scenario 3: LDA $10; BRK, with bus[0x10] pre-seeded.
    #[test]
    fn scenario_lda_zero_page() {
        let bus = Bus::new_shared_bus(Box::new(SimpleProgram::new()));
        bus.borrow_mut().set_u8(0x10, 0x55);
        bus.borrow_mut().load(&[0xa5, 0x10, 0x00], 0x0600);
        let mut cpu = Cpu::new(bus);
        cpu.run();
        assert_eq!(cpu.a, 0x55);
    }

    // spec.md section 8, scenario 4: LDA #$05; TAX; BRK.
    #[test]
    fn scenario_lda_tax() {
        let cpu = Cpu::load_and_run(&[0xa9, 0x05, 0xaa, 0x00]);
        assert_eq!(cpu.a, 0x05);
        assert_eq!(cpu.x, 0x05);
    }

    // spec.md section 8, scenario 5: LDA #$FF; TAX; INX; BRK.
    #[test]
    fn scenario_inx_wraps_to_zero() {
        let cpu = Cpu::load_and_run(&[0xa9, 0xff, 0xaa, 0xe8, 0x00]);
        assert_eq!(cpu.x, 0x00);
        assert!(cpu.is_status_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn brk_reports_interrupted() {
        let bus = Bus::new_shared_bus(Box::new(SimpleProgram::new()));
        bus.borrow_mut().load(&[0x00], 0x0600);
        let mut cpu = Cpu::new(bus);
        assert_eq!(cpu.run(), Status::Interrupted(Interrupt::Irq));
    }

    #[test]
    fn word_push_pull_round_trips() {
        let mut cpu = Cpu::load(&[]);
        let s_before = cpu.s;
        cpu.push_stack_u16(0xbeef);
        assert_eq!(cpu.s, s_before.wrapping_sub(2));
        assert_eq!(cpu.pull_stack_u16(), 0xbeef);
        assert_eq!(cpu.s, s_before);
    }

    #[test]
    fn jsr_pushes_high_byte_first() {
        let mut cpu = Cpu::load(&[]);
        cpu.pc = 0x0603;
        cpu.push_stack_u16(cpu.pc.wrapping_sub(1));
        let address = u16::from_le_bytes([0xfc, memory_range::STACK_PAGE]);
        assert_eq!(cpu.read_u8(address.wrapping_add(1)), 0x06);
        assert_eq!(cpu.read_u8(address), 0x02);
    }

    #[test]
    fn try_pull_stack_underflows_when_nothing_was_pushed() {
        let mut cpu = Cpu::load(&[]);
        assert_eq!(cpu.try_pull_stack_u8(), Err(StackError::Underflow));
    }

    #[test]
    fn try_push_stack_overflows_at_the_bottom_of_the_page() {
        let mut cpu = Cpu::load(&[]);
        cpu.s = 0x00;
        assert_eq!(cpu.try_push_stack_u8(0x42), Err(StackError::Overflow));
    }

    #[test]
    fn nmi_pushes_pc_and_p_and_jumps_through_its_vector() {
        let bus = Bus::new_shared_bus(Box::new(SimpleProgram::new()));
        bus.borrow_mut().load(&[0xea], 0x0600);
        bus.borrow_mut().set_u16(InterruptVectors::NonMaskableInterrupt as u16, 0x9000);
        let mut cpu = Cpu::new(bus);
        cpu.tick(); // NOP, so pc = 0x0601 when the NMI lands.
        let status = cpu.nmi();
        assert_eq!(status, Status::Interrupted(Interrupt::Nmi));
        assert_eq!(cpu.pc, 0x9000);
        assert!(cpu.is_status_flag_set(StatusFlag::InterruptDisable));
        assert_eq!(cpu.pull_stack_u16(), 0x0601);
    }

    #[test]
    fn irq_is_ignored_while_interrupt_disable_is_set() {
        let mut cpu = Cpu::load(&[]);
        cpu.set_status_flag(StatusFlag::InterruptDisable, true);
        let pc_before = cpu.pc;
        assert_eq!(cpu.irq(), Status::Ok);
        assert_eq!(cpu.pc, pc_before);
    }
}
