//! # Hardware Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.
//!
//! Over- and underflow wrap SP silently; the hardware has no flag for either.

use crate::{MemoryBus, CPU};

/// First address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// SP after reset: the stack is empty.
pub const STACK_RESET: u8 = 0xFF;

impl<M: MemoryBus> CPU<M> {
    /// Writes `value` at 0x0100 | SP, then decrements SP.
    pub fn stack_push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.regs.sp as u16, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads the byte at 0x0100 | SP.
    pub fn stack_pop(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.regs.sp as u16)
    }

    /// Pushes a word high byte first, so it sits little-endian in memory.
    pub(crate) fn stack_push_word(&mut self, value: u16) {
        self.stack_push((value >> 8) as u8);
        self.stack_push((value & 0xFF) as u8);
    }

    /// Pops a word pushed by [`CPU::stack_push_word`].
    pub(crate) fn stack_pop_word(&mut self) -> u16 {
        let lo = self.stack_pop() as u16;
        let hi = self.stack_pop() as u16;
        (hi << 8) | lo
    }
}

#[cfg(test)]
mod tests {
    use crate::{FlatMemory, MemoryBus, CPU};

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write_word(0xFFFC, 0x8000);
        CPU::new(mem)
    }

    #[test]
    fn test_push_writes_then_decrements() {
        let mut cpu = setup_cpu();

        cpu.stack_push(0x42);

        assert_eq!(cpu.memory().read(0x01FF), 0x42);
        assert_eq!(cpu.sp(), 0xFE);
    }

    #[test]
    fn test_pop_increments_then_reads() {
        let mut cpu = setup_cpu();
        cpu.stack_push(0x01);
        cpu.stack_push(0x02);

        assert_eq!(cpu.stack_pop(), 0x02);
        assert_eq!(cpu.stack_pop(), 0x01);
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    fn test_sp_wraps_both_ways() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);

        cpu.stack_push(0xAB);
        assert_eq!(cpu.memory().read(0x0100), 0xAB);
        assert_eq!(cpu.sp(), 0xFF);

        // Popping from an empty stack wraps to 0x00
        assert_eq!(cpu.stack_pop(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_word_round_trip_layout() {
        let mut cpu = setup_cpu();

        cpu.stack_push_word(0x1234);
        assert_eq!(cpu.memory().read(0x01FF), 0x12);
        assert_eq!(cpu.memory().read(0x01FE), 0x34);

        assert_eq!(cpu.stack_pop_word(), 0x1234);
        assert_eq!(cpu.sp(), 0xFF);
    }
}
