use crate::cpu::test_helpers::*;

/// These tests assert the various operations the CPU can do. They use a
/// high-level API based on macros to tersely assert the behavior, e.g.:
///
///      TestName Register Status  Program
///             |     |     |      |
///             v     v     v      v
/// register_a!(adc1, 0x33, P, "LDA #0x22 \n ADC #0x11");

/// Test all of the immediate mode instructions.
#[rustfmt::skip]
mod immediate_mode {
  use super::*;

  mod adc_basics {
    use super::*;
    // This first test shows: 0x22 + 0x11 == 0x33.
    // P is the default "P" or status register values.
    register_a!(adc1, 0x33, P, "
      LDA #0x22
      ADC #0x11
    ");
    // This add doesn't do anything, but the N, or negative flag is set since
    // the most significant bit is 1.
    register_a!(adc2, 0xff, P | N, "
      LDA #0xFF
      ADC #0x00
    ");
    // Here we overflow the u8.
    register_a!(
      adc3,
      0x00,
      P
      | C // For unsigned numbers, the carry bit is flipped, since the result carries over.
      | Z, // The result is 0x00 (with the carry only in the status register)
      "
        LDA #0xFF  // 255 signed, or -1 unsigned
        ADC #0x01  //   1 signed, or 1 unsigned
      "
    );
    // This is a similar result as above, but the final result is not 0.
    register_a!(adc4, 0x01, P | C, "LDA #0xFF \n ADC #0x02");
    // Check that this uses the carry flag.
    register_a!(adc_carry, 0x34, P, "
      SEC      // Set the carry flag
      LDA #0x11 // Load A with a value
      ADC #0x22 // This should add all three values
               // = 0x01 + 0x11 + 0x22
    ");
  }

  mod adc_overflow_carry {
    // This section tests the adc cases from:
    // http://www.6502.org/tutorials/vflag.html
    use super::*;
    register_a!(test_1_1, 0x02, P, "
      CLC      // 1 + 1 = 2, returns C = 0
      LDA #0x01 //            returns V = 0
      ADC #0x01
    ");
    register_a!(test_1_neg1, 0x00, P | C | Z, "
      CLC      // 1 + -1 = 0, returns C = 1
      LDA #0x01 //                     V = 0
      ADC #0xFF
    ");
    register_a!(test_127_1, 0b1000_0000, P | V | N, "
      CLC      // 127 + 1 = 128, returns C = 0
      LDA #0x7F //                        V = 1
      ADC #0x01
    ");
    register_a!(neg128_negative_1, 0b0111_1111, P | C | V, "
      CLC      // -128 + -1 = -129, returns C = 1
      LDA #0x80 //                           V = 1
      ADC #0xFF
    ");
    register_a!(carry, 0b1000_0000, P | V | N, "
      SEC      // Note: SEC, not CLC
      LDA #0x3F // 63 + 64 + 1 = 128, returns V = 1
      ADC #0x40
    ");
  }

  mod sbc_overflow_carry {
    // This section tests the sbc cases from:
    // http://www.6502.org/tutorials/vflag.html
    use super::*;
    register_a!(test_0_minus_1, negative(1), P | N, "
      SEC      // 0 - 1 = -1, returns V = 0
      LDA #0x00
      SBC #0x01
    ");
    register_a!(neg128_minus_1, negative(129), P | C | V, "
      SEC      // -128 - 1 = -129, returns V = 1
      LDA #0x80
      SBC #0x01
    ");
    register_a!(test_127_minus_neg1, 128, P | V | N, "
      SEC      // 127 - -1 = 128, returns V = 1
      LDA #0x7F
      SBC #0xFF
    ");
    register_a!(clc, negative(129), P | C | V, "
      CLC      // Note: CLC, not SEC
      LDA #0xC0 // -64 - 64 - 1 = -129, returns V = 1
      SBC #0x40
    ");
  }

  mod compare {
    use super::*;
    // http://6502.org/tutorials/compare_instructions.html
    status!(cmp_lt, P | N,     "LDA #0x11 \n CMP #0x22");
    status!(cmp_gt, P | C,     "LDA #0x22 \n CMP #0x11");
    status!(cmp_eq, P | C | Z, "LDA #0x11 \n CMP #0x11");
    status!(cpx_lt, P | N,     "LDX #0x11 \n CPX #0x22");
    status!(cpx_gt, P | C,     "LDX #0x22 \n CPX #0x11");
    status!(cpx_eq, P | C | Z, "LDX #0x11 \n CPX #0x11");
    status!(cpy_lt, P | N,     "LDY #0x11 \n CPY #0x22");
    status!(cpy_gt, P | C,     "LDY #0x22 \n CPY #0x11");
    status!(cpy_eq, P | C | Z, "LDY #0x11 \n CPY #0x11");
  }

  register_a!(and, 0b1010_0000, P | N, "
    LDA #0b11110000
    AND #0b10101010
  ");
  register_a!(eor, 0b0101_1010, P, "
    LDA #0b11110000
    EOR #0b10101010
  ");
  register_a!(ora, 0b1111_1010, P | N, "
    LDA #0b11110000
    ORA #0b10101010
  ");

  register_a!(lda, 0x22, P, "LDA #0x22");
  register_x!(ldx, 0x22, P, "LDX #0x22");
  register_y!(ldy, 0x22, P, "LDY #0x22");

  register_a!(sbc1, 0x22,        P | C, "
    SEC       // Always set the carry flag first.
    LDA #0x33
    SBC #0x11
  ");
  register_a!(sbc2, 0x00,        P | Z | C, "
    SEC       // Always set the carry flag first.
    LDA #0x33
    SBC #0x33
  ");
  register_a!(sbc3, negative(1), P | N, "
    SEC       // Always set the carry flag first.
    LDA #0x33
    SBC #0x34
  ");
}

#[rustfmt::skip]
mod zero_page {
  use super::*;
  register_a!(adc_zp, 0x33, P, "
    LDA #0x22
    STA #(0x10)
    LDA #0x11
    CLC
    ADC #(0x10)
  ");
  register_a!(adc_zpx, 0x33, P, "
    // Load up the zero page.
    LDA #0x22
    STA #(0x12)   // 0x10 + 0x02
    // Load up the registers
    LDA #0x11
    LDX #0x02
    // Do the math
    CLC
    ADC #(0x10, X)
  ");
  register_a!(and_zp, 0b1010_0000, P | N, "
    LDA #0b10101010
    STA #(0x10)
    LDA #0b11110000
    CLC
    AND #(0x10)
  ");
  register_a!(and_zpx, 0b1010_0000, P | N, "
    // Load up the zero page.
    LDA #0b10101010
    STA #(0x12)   // 0x10 + 0x02
    // Load up the registers
    LDA #0b11110000
    LDX #0x02
    // Do the math
    CLC
    AND #(0x10, X)
  ");
  register_a!(asl_zp, 0b0101_0100, P | C, "
    LDA #0b10101010
    STA #(0x03)
    ASL #(0x03)
    LDA #(0x03)
  ");
  register_a!(asl_zp_no_carry, 0b0101_0100, P, "
    LDA #0b00101010
    STA #(0x03)
    ASL #(0x03)
    LDA #(0x03)
  ");
  register_a!(asl_zpx, 0b0101_0100, P | C, "
    LDA #0b10101010
    STA #(0x03)
    LDX #0x01
    ASL #(0x02, X)
    LDA #(0x03)
  ");
  status!(bit_zp_n, P | N, "
    LDA #0b10000000
    STA #(0x03)
    BIT #(0x03)
  ");
  status!(bit_zp_v, P | V, "
    LDA #0b01000000
    STA #(0x03)
    BIT #(0x03)
  ");
  status!(bit_zp_no_zero_flag, P | V | N, "
    LDA #0xff
    STA #(0x03)
    LDA #0xff
    BIT #(0x03) // The zero flag is set if accumulator and the value are 0
  ");
  status!(bit_zp_zero, P | Z, "
    LDA #0x00
    STA #(0x03)
    LDA #0xff
    BIT #(0x03) // The zero flag is set if accumulator and the value are 0
  ");
  status!(cmp_zp_lt, P | N, "
    LDA #0x22
    STA #(0x03)
    LDA #0x11
    CMP #(0x03)
  ");
  status!(cmp_zp_gt, P | C, "
    LDA #0x11
    STA #(0x03)
    LDA #0x22
    CMP #(0x03)
  ");
  status!(cmp_zp_eq, P | C | Z, "
    LDA #0x11
    STA #(0x03)
    LDA #0x11
    CMP #(0x03)
  ");
  status!(cpx_zp_lt, P | N, "
    LDA #0x22
    STA #(0x03)
    LDX #0x11
    CPX #(0x03)
  ");
  status!(cpx_zp_gt, P | C, "
    LDA #0x11
    STA #(0x03)
    LDX #0x22
    CPX #(0x03)
  ");
  status!(cpx_zp_eq, P | C | Z, "
    LDA #0x11
    STA #(0x03)
    LDX #0x11
    CPX #(0x03)
  ");
  zero_page!(sta_zp_writes_through_to_the_bus, [0x03, 0x42], "
    LDA #0x42
    STA #(0x03)
  ");
}

/// Branches, jumps, subroutine call/return, and the flag-set/clear mnemonics
/// `opcodes_jump.rs` implements. Not present in the teacher's original test
/// suite, since that module was rewritten from scratch for this dialect.
#[rustfmt::skip]
mod jumps {
  use super::*;

  register_a!(beq_taken, 0x02, P, "
    LDA #0x00
    BEQ skip
    LDA #0x01
    skip:
    LDA #0x02
  ");
  register_a!(beq_not_taken, 0x01, P, "
    LDA #0x01
    BEQ skip
    LDA #0x01
    ADC #0x00
    skip:
  ");
  register_a!(bne_taken, 0x02, P, "
    LDA #0x01
    BNE skip
    LDA #0x01
    skip:
    LDA #0x02
  ");
  register_a!(bcc_taken, 0x02, P, "
    CLC
    BCC skip
    LDA #0x01
    skip:
    LDA #0x02
  ");
  register_a!(bcs_taken, 0x02, P | C, "
    SEC
    BCS skip
    LDA #0x01
    skip:
    LDA #0x02
  ");
  register_a!(bpl_taken, 0x02, P, "
    LDA #0x01
    BPL skip
    LDA #0x01
    skip:
    LDA #0x02
  ");
  register_a!(bmi_taken, 0x02, P, "
    LDA #0x80
    BMI skip
    LDA #0x01
    skip:
    LDA #0x02
  ");

  register_a!(jmp_absolute, 0x02, P, "
    JMP over
    LDA #0x01
    over:
    LDA #0x02
  ");

  register_a!(jsr_rts_returns_after_the_call, 0x02, P, "
    JSR routine
    LDA #0x02
    BRK
    routine:
    RTS
  ");

  status!(clc_clears_carry, P, "SEC \n CLC");
  status!(sec_sets_carry, P | C, "SEC");
  status!(cld_clears_decimal, P, "SED \n CLD");
  status!(sed_sets_decimal, P | D, "SED");
  status!(cli_clears_interrupt_disable, P & !I, "CLI");
  status!(sei_sets_interrupt_disable, P, "CLI \n SEI");
  status!(clv_clears_overflow, P | N, "
    LDA #0x7F
    ADC #0x01 // sets V
    CLV
  ");
}

/// Stack push/pull: PHA/PLA and PHP/PLP.
#[rustfmt::skip]
mod stack {
  use super::*;

  register_a!(pha_pla_round_trips_a, 0x42, P, "
    LDA #0x42
    PHA
    LDA #0x00
    PLA
  ");

  #[test]
  fn php_pushes_the_current_status_then_plp_restores_it() {
    let cpu = run_program("
      SEC
      PHP
      CLC
      PLP
    ");
    assert_status(&cpu, P | C);
  }
}

/// Register transfer instructions (TAX/TXA/TAY/TYA/TSX/TXS).
#[rustfmt::skip]
mod transfers {
  use super::*;

  register_x!(tax, 0x42, P, "LDA #0x42 \n TAX");
  register_a!(txa, 0x42, P, "LDX #0x42 \n TXA");
  register_y!(tay, 0x42, P, "LDA #0x42 \n TAY");
  register_a!(tya, 0x42, P, "LDY #0x42 \n TYA");
}

/// Increment/decrement instructions.
#[rustfmt::skip]
mod inc_dec {
  use super::*;

  register_x!(inx, 0x01, P, "INX");
  register_x!(dex_wraps, 0xff, P | N, "DEX");
  register_y!(iny, 0x01, P, "INY");
  register_y!(dey_wraps, 0xff, P | N, "DEY");
}
