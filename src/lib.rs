// Remove this once this is a bit more mature.
#![allow(dead_code)]
// Clippy rules to disable.
#![allow(clippy::new_without_default)]

pub mod asm;
pub mod bus;
pub mod cartridge;
pub mod constants;
pub mod cpu;
pub mod mappers;
pub mod opcodes;
