//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the memory
//! that backs it, and `FlatMemory`, the flat 64KB store the core is specified against.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - 16-bit address arithmetic wraps at 0xFFFF instead of failing
//! - Words are little-endian: low byte at `addr`, high byte at `addr + 1`

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations only provide `read` and `write`. Word access and bulk loading are
/// derived from them.
///
/// # Examples
///
/// ```
/// use mos6502_core::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write_word(0x1234, 0xBEEF);
/// assert_eq!(mem.read(0x1234), 0xEF);
/// assert_eq!(mem.read(0x1235), 0xBE);
/// assert_eq!(mem.read_word(0x1234), 0xBEEF);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word. The high byte address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word, the inverse of [`MemoryBus::read_word`].
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Images that run past 0xFFFF continue at 0x0000.
    fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to one contiguous array
/// initialized to 0x00. Because the address type is exactly as wide as the store,
/// no access can fall outside it.
///
/// # Examples
///
/// ```
/// use mos6502_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000); // Reset vector
/// memory.write(0x8000, 0xEA); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Returns the 256 bytes of the given page.
    pub fn page(&self, page: u8) -> &[u8] {
        let start = (page as usize) << 8;
        &self.data[start..start + 0x100]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("zero_page", &self.page(0x00))
            .finish_non_exhaustive()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        // Initially all zeros
        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours untouched
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_word_is_little_endian() {
        let mut mem = FlatMemory::new();
        mem.write(0x0200, 0x34);
        mem.write(0x0201, 0x12);

        assert_eq!(mem.read_word(0x0200), 0x1234);
    }

    #[test]
    fn test_word_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write_word(0xFFFF, 0xABCD);

        assert_eq!(mem.read(0xFFFF), 0xCD);
        assert_eq!(mem.read(0x0000), 0xAB);
        assert_eq!(mem.read_word(0xFFFF), 0xABCD);
    }

    #[test]
    fn test_load_copies_bytes_and_wraps() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[0x01, 0x02, 0x03]);

        assert_eq!(mem.read(0xFFFE), 0x01);
        assert_eq!(mem.read(0xFFFF), 0x02);
        assert_eq!(mem.read(0x0000), 0x03);
    }

    #[test]
    fn test_page_slice() {
        let mut mem = FlatMemory::new();
        mem.write(0x01FF, 0x99);

        let page = mem.page(0x01);
        assert_eq!(page.len(), 256);
        assert_eq!(page[0xFF], 0x99);
    }
}
