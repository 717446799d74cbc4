use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
}

#[derive(Debug, PartialEq, Eq)]
pub enum TvSystem {
    NTSC,
    PAL,
    DualCompatible,
}

#[derive(Debug)]
pub struct INesHeader {
    pub prg_rom_bytes: u32,
    pub prg_rom_banks: u8,
    pub character_rom_bytes: u32,
    pub character_rom_banks: u8,
    pub mirroring: Mirroring,
    pub persistent_memory: bool,
    pub has_trainer: bool,
    pub four_screen_vram: bool,
    pub mapper_number: u8,
    pub vs_unisystem: bool,
    pub playchoice_10: bool,
    pub prg_ram_bytes: u32,
    pub tv_system: TvSystem,
}

#[derive(Debug)]
pub enum CartridgeError {
    Io(io::Error),
    InvalidHeader(&'static str),
}

impl From<io::Error> for CartridgeError {
    fn from(error: io::Error) -> Self {
        CartridgeError::Io(error)
    }
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CartridgeError::Io(err) => write!(f, "failed to read ROM file: {}", err),
            CartridgeError::InvalidHeader(message) => write!(f, "invalid iNES header: {}", message),
        }
    }
}

impl std::error::Error for CartridgeError {}

struct Byte {
    value: u8,
}

impl Byte {
    /// Gets the bit where 0 is the least significant bit and 7 is the most.
    fn bit(&self, n: u8) -> bool {
        (0b0000_0001 << n) & self.value != 0
    }
}

/// A parsed iNES ROM image. Only mapper 0 is supported by the bundled mapper
/// (`mappers::SimpleProgram::from_prg_rom`); other mapper numbers still parse
/// successfully here, since header parsing and cartridge execution are
/// separate concerns, but have no mapper implementation to execute against.
pub struct Cartridge {
    pub header: INesHeader,
    pub program_rom: Vec<u8>,
    pub character_rom: Vec<u8>,
    // NES trainers are 512 bytes loaded at $7000 before the game starts, used
    // by old Famicom copiers to redirect mapper writes. Modern ROM dumps don't
    // need them; kept only as metadata, never wired into execution.
    // http://forums.nesdev.com/viewtopic.php?t=3657
    pub trainer: Option<Vec<u8>>,
    pub title: Option<String>,
}

impl Cartridge {
    /// https://wiki.nesdev.com/w/index.php/INES
    pub fn load_ines_file(path: &Path) -> Result<Cartridge, CartridgeError> {
        let mut file = File::open(path)?;
        let header_bytes = read_bytes(&mut file, 16)?;
        let header = process_header(&header_bytes[..])?;

        let trainer = if header.has_trainer {
            eprintln!("cartridge: a trainer was found when loading the ROM; it will be ignored");
            Some(read_bytes(&mut file, 512)?)
        } else {
            None
        };

        let program_rom = read_bytes(&mut file, header.prg_rom_bytes as usize)?;
        let character_rom = read_bytes(&mut file, header.character_rom_bytes as usize)?;

        if header.playchoice_10 {
            eprintln!("cartridge: PlayChoice-10 data found in the ROM; it is not supported and will be skipped");
            let _inst_rom = read_bytes(&mut file, 8192)?;
            // (16 bytes Data, 16 bytes CounterOut)
            let _prom = read_bytes(&mut file, 32)?;
        }

        // Some ROM images additionally contain a 128-byte (sometimes 127-byte)
        // title at the end of the file.
        let mut title_bytes = Vec::new();
        file.read_to_end(&mut title_bytes)?;
        let title = if title_bytes.is_empty() {
            None
        } else {
            let mut title = String::new();
            for ch in &title_bytes {
                if *ch == 0 {
                    break;
                }
                title.push(*ch as char);
            }
            Some(String::from(title.trim()))
        };

        Ok(Cartridge {
            program_rom,
            character_rom,
            header,
            trainer,
            title,
        })
    }
}

fn process_header(header: &[u8]) -> Result<INesHeader, CartridgeError> {
    // 0-3: Constant $4E $45 $53 $1A ("NES" followed by MS-DOS end-of-file).
    if header[0..4] != [0x4E, 0x45, 0x53, 0x1A] {
        return Err(CartridgeError::InvalidHeader(
            "missing \"NES\\x1A\" magic bytes",
        ));
    }

    // 4: Size of PRG ROM in 16 KiB units.
    let prg_rom_banks = header[4];
    let prg_rom_bytes: u32 = prg_rom_banks as u32 * 16 * 1024;

    // 5: Size of CHR ROM in 8 KiB units (0 means the board uses CHR RAM).
    let character_rom_banks: u8 = header[5];
    let character_rom_bytes: u32 = character_rom_banks as u32 * 8 * 1024;

    let flag6 = Byte { value: header[6] };
    let flag7 = Byte { value: header[7] };
    let flag8 = Byte { value: header[8] };
    let flag9 = Byte { value: header[9] };
    let flag10 = Byte { value: header[10] };

    // 6: Flags 6 - Mapper, mirroring, battery, trainer.
    //
    // 76543210
    // ||||||||
    // |||||||+- Mirroring: 0: horizontal (vertical arrangement) (CIRAM A10 = PPU A11)
    // |||||||              1: vertical (horizontal arrangement) (CIRAM A10 = PPU A10)
    // ||||||+-- 1: cartridge contains battery-backed PRG RAM ($6000-7FFF) or other persistent memory
    // |||||+--- 1: 512-byte trainer at $7000-$71FF (stored before PRG data)
    // ||||+---- 1: ignore mirroring control above; instead provide four-screen VRAM
    // ++++----- lower nibble of mapper number
    let mirroring = if flag6.bit(0) {
        Mirroring::Vertical
    } else {
        Mirroring::Horizontal
    };
    let persistent_memory = flag6.bit(1);
    let has_trainer = flag6.bit(2);
    let four_screen_vram = flag6.bit(3);
    let mapper_number_lower = flag6.value >> 4;

    // 7: Flags 7 - Mapper, VS/Playchoice, NES 2.0.
    // 76543210
    // ||||||||
    // |||||||+- VS Unisystem
    // ||||||+-- PlayChoice-10 (8KB of Hint Screen data stored after CHR data)
    // ||||++--- if equal to 2, flags 8-15 are in NES 2.0 format
    // ++++----- upper nibble of mapper number
    let vs_unisystem = flag7.bit(0);
    let playchoice_10 = flag7.bit(1);
    let mapper_number_upper = flag7.value & 0b1111_0000;
    let mapper_number = mapper_number_upper | mapper_number_lower;

    if flag7.value & 0b0000_1100 != 0 {
        return Err(CartridgeError::InvalidHeader(
            "byte 7 bits 2-3 must be zero (NES 2.0 and other extended header formats are not supported)",
        ));
    }

    // 8: Flags 8 - PRG-RAM size (rarely used extension).
    let prg_ram_bytes = flag8.value.max(1) as u32 * 8 * 1024;

    // 9: Flags 9 - TV system (rarely used extension), bit 0 only; spec says the
    // rest is reserved, byte 10 below is the more commonly honored TV flag.
    let _tv_system_bit9 = flag9.bit(0);

    // 10: Flags 10 - TV system, PRG-RAM presence (unofficial, rarely used).
    // 76543210
    // ||  ||
    // ||  ++- TV system (0: NTSC; 2: PAL; 1/3: dual compatible)
    // |+----- PRG RAM ($6000-$7FFF) (0: present; 1: not present)
    // +------ 0: no bus conflicts; 1: bus conflicts
    let tv_system = match (flag10.value & 0b0000_1100) >> 2 {
        0 => TvSystem::NTSC,
        2 => TvSystem::PAL,
        _ => TvSystem::DualCompatible,
    };

    // 11-15: unused padding.

    Ok(INesHeader {
        prg_rom_banks,
        prg_rom_bytes,
        character_rom_banks,
        character_rom_bytes,
        mirroring,
        persistent_memory,
        has_trainer,
        four_screen_vram,
        mapper_number,
        vs_unisystem,
        playchoice_10,
        prg_ram_bytes,
        tv_system,
    })
}

fn read_bytes(file: &mut File, size: usize) -> Result<Vec<u8>, io::Error> {
    let mut vec = Vec::new();
    let read = file.take(size as u64).read_to_end(&mut vec)?;
    if read != size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected {} bytes, got {}", size, read),
        ));
    }
    Ok(vec)
}
