use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::constants::{memory_range, InterruptVectors};
use crate::mappers::Mapper;

/// The bus is shared between the CPU and (eventually) other bus masters, so it's
/// wrapped in `Rc<RefCell<_>>` rather than owned outright.
pub type SharedBus = Rc<RefCell<Bus>>;

const RAM_SIZE: usize = 0x0800;

/// Errors a host can observe by going through the `try_*` accessors instead of
/// the default lenient `read_u8`/`set_u8`/`read_u16`/`set_u16`. The CPU core
/// itself always uses the lenient accessors: unmapped accesses are logged and
/// do not raise.
#[derive(Debug, PartialEq, Eq)]
pub enum BusError {
    CartridgeNotLoaded,
    ReadOnlyRomWrite(u16),
    UnsupportedRegion(u16),
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BusError::CartridgeNotLoaded => write!(f, "no cartridge is loaded on the bus"),
            BusError::ReadOnlyRomWrite(addr) => {
                write!(f, "attempted write to read-only PRG ROM at {:#06x}", addr)
            }
            BusError::UnsupportedRegion(addr) => {
                write!(f, "access to unsupported bus region at {:#06x}", addr)
            }
        }
    }
}

impl std::error::Error for BusError {}

pub struct Bus {
    ram: [u8; RAM_SIZE],
    cartridge: Box<dyn Mapper>,
    // Set by `load()` for the standalone assembler path (origin 0x0600); overrides
    // whatever the cartridge would otherwise answer for the reset vector.
    reset_vector_override: Option<u16>,
}

impl Bus {
    pub fn new(cartridge: Box<dyn Mapper>) -> Bus {
        Bus {
            ram: [0; RAM_SIZE],
            cartridge,
            reset_vector_override: None,
        }
    }

    pub fn new_shared_bus(cartridge: Box<dyn Mapper>) -> SharedBus {
        Rc::new(RefCell::new(Bus::new(cartridge)))
    }

    /// Lenient byte read: unmapped regions log and return 0, matching hardware's
    /// "open bus" behavior closely enough for this emulator's purposes.
    pub fn read_u8(&self, address: u16) -> u8 {
        if let Some(origin) = self.reset_vector_override {
            let [low, high] = origin.to_le_bytes();
            if address == InterruptVectors::ResetVector as u16 {
                return low;
            }
            if address == InterruptVectors::ResetVector as u16 + 1 {
                return high;
            }
        }

        if memory_range::RAM.min <= address && address <= memory_range::RAM.max {
            return self.ram[(address & 0x07ff) as usize];
        }
        if memory_range::PPU.min <= address && address <= memory_range::PPU.max {
            eprintln!("bus: unhandled PPU register read at {:#06x}", address);
            return 0;
        }
        if address >= memory_range::PRG_ROM.min {
            return self.cartridge.read_cpu(address).unwrap_or_else(|| {
                eprintln!("bus: cartridge did not answer read at {:#06x}", address);
                0
            });
        }
        eprintln!("bus: unmapped read at {:#06x}", address);
        0
    }

    /// Lenient byte write: unmapped regions and read-only ROM log and no-op.
    pub fn set_u8(&mut self, address: u16, value: u8) {
        if memory_range::RAM.min <= address && address <= memory_range::RAM.max {
            self.ram[(address & 0x07ff) as usize] = value;
            return;
        }
        if memory_range::PPU.min <= address && address <= memory_range::PPU.max {
            eprintln!("bus: unhandled PPU register write at {:#06x}", address);
            return;
        }
        if address >= memory_range::PRG_ROM.min {
            if !self.cartridge.write_cpu(address, value) {
                eprintln!("bus: write to read-only PRG ROM at {:#06x} ignored", address);
            }
            return;
        }
        eprintln!("bus: unmapped write at {:#06x} ignored", address);
    }

    pub fn read_u16(&self, address: u16) -> u16 {
        let low = self.read_u8(address);
        let high = self.read_u8(address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    pub fn set_u16(&mut self, address: u16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.set_u8(address, low);
        self.set_u8(address.wrapping_add(1), high);
    }

    /// Strict byte read, for hosts that want to fault instead of log.
    pub fn try_read_u8(&self, address: u16) -> Result<u8, BusError> {
        if memory_range::PPU.min <= address && address <= memory_range::PPU.max {
            return Err(BusError::UnsupportedRegion(address));
        }
        if memory_range::RAM.min <= address && address <= memory_range::RAM.max {
            return Ok(self.ram[(address & 0x07ff) as usize]);
        }
        if address >= memory_range::PRG_ROM.min {
            return self
                .cartridge
                .read_cpu(address)
                .ok_or(BusError::CartridgeNotLoaded);
        }
        Err(BusError::UnsupportedRegion(address))
    }

    /// Strict byte write, for hosts that want to fault instead of log.
    pub fn try_write_u8(&mut self, address: u16, value: u8) -> Result<(), BusError> {
        if memory_range::RAM.min <= address && address <= memory_range::RAM.max {
            self.ram[(address & 0x07ff) as usize] = value;
            return Ok(());
        }
        if address >= memory_range::PRG_ROM.min {
            return if self.cartridge.write_cpu(address, value) {
                Ok(())
            } else {
                Err(BusError::ReadOnlyRomWrite(address))
            };
        }
        Err(BusError::UnsupportedRegion(address))
    }

    /// Copies `program` into RAM starting at `origin` and points the reset vector
    /// at it. This is the standalone-assembler loading path (origin 0x0600); it
    /// writes straight into RAM rather than going through `set_u8`'s region
    /// dispatch, since this is host-side initialization rather than a CPU-driven
    /// write and must succeed even though the reset vector itself lives in the
    /// otherwise-read-only PRG ROM range.
    pub fn load(&mut self, program: &[u8], origin: u16) {
        for (offset, byte) in program.iter().enumerate() {
            let address = origin.wrapping_add(offset as u16);
            if memory_range::RAM.min <= address && address <= memory_range::RAM.max {
                self.ram[(address & 0x07ff) as usize] = *byte;
            } else {
                self.set_u8(address, *byte);
            }
        }
        self.reset_vector_override = Some(origin);
    }
}
