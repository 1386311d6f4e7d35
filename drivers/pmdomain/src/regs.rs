// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Register access.
//!
//! The controller talks to two kinds of register space: its own control
//! block, accessed directly, and the shared infracfg/smi_common blocks,
//! which other drivers also touch and which are therefore reached through
//! a [`Regmap`] that serializes transactions.

use core::ptr::NonNull;

use spin::Mutex;

use crate::error::RegmapError;

/// The local power controller register block.
pub trait RegisterBlock: Send + Sync {
    /// Reads the 32-bit register at `offset`.
    fn read(&self, offset: usize) -> u32;
    /// Writes the 32-bit register at `offset`.
    fn write(&self, offset: usize, val: u32);
}

/// A shared register space.
pub trait Regmap: Send + Sync {
    fn read(&self, offset: u32) -> Result<u32, RegmapError>;
    fn write(&self, offset: u32, val: u32) -> Result<(), RegmapError>;

    /// Replaces the bits selected by `mask` with those of `val`.
    fn update_bits(&self, offset: u32, mask: u32, val: u32) -> Result<(), RegmapError> {
        let old = self.read(offset)?;
        let new = (old & !mask) | (val & mask);
        if new != old {
            self.write(offset, new)?;
        }
        Ok(())
    }
}

/// Memory-mapped 32-bit registers.
pub struct MmioRegs {
    base: NonNull<u32>,
}

// SAFETY: the register block is device memory; volatile accesses from any
// CPU are valid and callers serialize read-modify-write sequences.
unsafe impl Send for MmioRegs {}
unsafe impl Sync for MmioRegs {}

impl MmioRegs {
    /// Creates a register block at the given virtual base address.
    ///
    /// # Safety
    ///
    /// `base` must be a valid, 4-byte aligned mapping of the register block
    /// covering every offset that will be accessed.
    pub const unsafe fn new(base: NonNull<u32>) -> Self {
        Self { base }
    }

    #[inline]
    fn reg(&self, offset: usize) -> *mut u32 {
        // Offsets are byte offsets.
        unsafe { self.base.as_ptr().byte_add(offset) }
    }
}

impl RegisterBlock for MmioRegs {
    fn read(&self, offset: usize) -> u32 {
        unsafe { self.reg(offset).read_volatile() }
    }

    fn write(&self, offset: usize, val: u32) {
        unsafe { self.reg(offset).write_volatile(val) }
    }
}

/// A syscon-style [`Regmap`] over memory-mapped registers.
///
/// Every transaction, including the read-modify-write of
/// [`Regmap::update_bits`], holds the lock for its whole duration.
pub struct SysconRegmap {
    regs: Mutex<MmioRegs>,
    size: u32,
}

impl SysconRegmap {
    /// Creates a regmap over `size` bytes of registers at `base`.
    ///
    /// # Safety
    ///
    /// Same requirements as [`MmioRegs::new`] for the whole `size` range.
    pub const unsafe fn new(base: NonNull<u32>, size: u32) -> Self {
        Self {
            regs: Mutex::new(unsafe { MmioRegs::new(base) }),
            size,
        }
    }

    fn check(&self, offset: u32) -> Result<usize, RegmapError> {
        if offset % 4 != 0 || offset >= self.size {
            return Err(RegmapError::InvalidOffset);
        }
        Ok(offset as usize)
    }
}

impl Regmap for SysconRegmap {
    fn read(&self, offset: u32) -> Result<u32, RegmapError> {
        let offset = self.check(offset)?;
        Ok(self.regs.lock().read(offset))
    }

    fn write(&self, offset: u32, val: u32) -> Result<(), RegmapError> {
        let offset = self.check(offset)?;
        self.regs.lock().write(offset, val);
        Ok(())
    }

    fn update_bits(&self, offset: u32, mask: u32, val: u32) -> Result<(), RegmapError> {
        let offset = self.check(offset)?;
        let regs = self.regs.lock();
        let old = regs.read(offset);
        let new = (old & !mask) | (val & mask);
        if new != old {
            regs.write(offset, new);
        }
        Ok(())
    }
}
