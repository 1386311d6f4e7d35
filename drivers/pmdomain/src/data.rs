// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Immutable platform descriptors.
//!
//! A [`SocData`] describes one chip: where its status registers live, the
//! power domains it has and how they nest. Descriptors are `'static` tables
//! assembled with the `const fn` builders below, so the limits on clocks and
//! bus-protection steps are checked when the table is compiled.

use bitflags::bitflags;
use strum::Display;

/// Maximum number of basic clocks per domain.
pub const MAX_CLKS: usize = 3;
/// Maximum number of bus-protection steps per domain.
pub const MAX_STEPS: usize = 4;

/// Reset release (active low reset de-asserted when set).
pub const PWR_RST_B_BIT: u32 = 1 << 0;
/// Isolation enable.
pub const PWR_ISO_BIT: u32 = 1 << 1;
/// Primary power request.
pub const PWR_ON_BIT: u32 = 1 << 2;
/// Secondary power request.
pub const PWR_ON_2ND_BIT: u32 = 1 << 3;
/// Clock gate.
pub const PWR_CLK_DIS_BIT: u32 = 1 << 4;

/// Builds a contiguous bit mask from bit `l` up to bit `h`, both inclusive.
pub const fn genmask(h: u32, l: u32) -> u32 {
    (u32::MAX >> (31 - h)) & (u32::MAX << l)
}

bitflags! {
    /// Per-domain capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScpdCaps: u8 {
        /// Keep the domain on while a device in it is a wakeup source.
        const ACTIVE_WAKEUP = 1 << 0;
        /// SRAM ack bits are unreliable; wait a fixed time instead.
        const FWAIT_SRAM = 1 << 1;
    }
}

/// Register space a bus-protection step is issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RegSpace {
    /// Infrastructure configuration block, always present.
    #[strum(serialize = "infracfg")]
    Infracfg,
    /// Shared SMI interconnect block, optional on some chips.
    #[strum(serialize = "smi_common")]
    SmiCommon,
}

/// One bus-protection step.
///
/// When `set_ofs`/`clr_ofs` are given the hardware offers dedicated
/// write-one-to-set/clear registers; otherwise `en_ofs` is updated with a
/// read-modify-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusProt {
    pub space: RegSpace,
    pub set_ofs: Option<u32>,
    pub clr_ofs: Option<u32>,
    pub en_ofs: u32,
    pub sta_ofs: u32,
    pub mask: u32,
    pub ignore_clr_ack: bool,
}

impl BusProt {
    pub const fn new(space: RegSpace, en_ofs: u32, sta_ofs: u32, mask: u32) -> Self {
        Self {
            space,
            set_ofs: None,
            clr_ofs: None,
            en_ofs,
            sta_ofs,
            mask,
            ignore_clr_ack: false,
        }
    }

    /// Uses dedicated set and clear registers instead of `en_ofs`.
    pub const fn set_clr(self, set_ofs: u32, clr_ofs: u32) -> Self {
        Self {
            set_ofs: Some(set_ofs),
            clr_ofs: Some(clr_ofs),
            ..self
        }
    }

    /// Skips waiting for the status bits to drop on release.
    pub const fn ignore_clr_ack(self) -> Self {
        Self {
            ignore_clr_ack: true,
            ..self
        }
    }
}

/// Static description of a power domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainData {
    pub name: &'static str,
    /// Bit of this domain in both status registers.
    pub sta_mask: u32,
    /// Offset of the power control register in the local block.
    pub ctl_offs: usize,
    pub sram_pdn_bits: u32,
    pub sram_pdn_ack_bits: u32,
    /// Clocks enabled in this order on power-on, disabled in reverse.
    pub basic_clk_name: &'static [&'static str],
    pub caps: ScpdCaps,
    /// Bus-protection steps; the first `None` ends the table.
    pub bp_table: [Option<BusProt>; MAX_STEPS],
}

impl DomainData {
    pub const fn new(name: &'static str, sta_mask: u32, ctl_offs: usize) -> Self {
        Self {
            name,
            sta_mask,
            ctl_offs,
            sram_pdn_bits: 0,
            sram_pdn_ack_bits: 0,
            basic_clk_name: &[],
            caps: ScpdCaps::empty(),
            bp_table: [None; MAX_STEPS],
        }
    }

    pub const fn sram(self, pdn_bits: u32, pdn_ack_bits: u32) -> Self {
        Self {
            sram_pdn_bits: pdn_bits,
            sram_pdn_ack_bits: pdn_ack_bits,
            ..self
        }
    }

    pub const fn clocks(self, names: &'static [&'static str]) -> Self {
        assert!(names.len() <= MAX_CLKS, "too many basic clocks");
        Self {
            basic_clk_name: names,
            ..self
        }
    }

    pub const fn caps(self, caps: ScpdCaps) -> Self {
        Self { caps, ..self }
    }

    pub const fn bus_prot<const N: usize>(mut self, steps: [BusProt; N]) -> Self {
        assert!(N <= MAX_STEPS, "too many bus protection steps");
        let mut i = 0;
        while i < N {
            self.bp_table[i] = Some(steps[i]);
            i += 1;
        }
        self
    }

    /// Returns the configured bus-protection steps in declaration order.
    pub fn bus_prot_steps(&self) -> impl DoubleEndedIterator<Item = &BusProt> + Clone {
        let len = self
            .bp_table
            .iter()
            .position(Option::is_none)
            .unwrap_or(MAX_STEPS);
        self.bp_table[..len].iter().flatten()
    }

    #[inline]
    pub fn has_cap(&self, caps: ScpdCaps) -> bool {
        self.caps.contains(caps)
    }
}

/// Offsets of the two power status registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScpCtrlReg {
    pub pwr_sta_offs: usize,
    pub pwr_sta2nd_offs: usize,
}

/// A parent-child edge in the domain hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdomain {
    pub origin: usize,
    pub subdomain: usize,
}

impl Subdomain {
    pub const fn new(origin: usize, subdomain: usize) -> Self {
        Self { origin, subdomain }
    }
}

/// Everything needed to drive the power domains of one chip.
#[derive(Debug)]
pub struct SocData {
    /// Device-tree compatible string of the controller.
    pub compatible: &'static str,
    /// Domains, indexed by their device-tree binding number.
    pub domains: &'static [DomainData],
    pub subdomains: &'static [Subdomain],
    pub regs: ScpCtrlReg,
}
