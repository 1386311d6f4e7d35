// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Power domain controller for SoC power islands.
//!
//! A power domain is switched through a fixed protocol: regulator and
//! clocks come up first, the power request bits are raised and acknowledged
//! in two status registers, the domain is taken out of isolation and reset,
//! its SRAM leaves retention and finally bus protection is released.
//! Powering off walks the same path backwards.
//!
//! The crate is split along the hardware protocol:
//!
//! - [`poll`]: bounded register polling, the only way anything here waits.
//! - [`bus_prot`]: ordered bus-protection (isolation) steps over the
//!   infracfg and smi_common register spaces.
//! - [`sram`]: SRAM power-down/ack sequencing.
//! - [`domain`]: the per-domain power-on/power-off state machine.
//! - [`registry`]: controller construction from a [`SocData`] descriptor
//!   and hand-over to the hierarchical power-domain framework.
//! - [`soc`]: the descriptors of the supported chips.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;
extern crate alloc;

pub mod bus_prot;
pub mod data;
pub mod domain;
pub mod error;
pub mod poll;
pub mod registry;
pub mod regs;
pub mod resource;
pub mod soc;
pub mod sram;
pub mod time;


pub use crate::{
    data::{
        BusProt, DomainData, MAX_CLKS, MAX_STEPS, RegSpace, ScpCtrlReg, ScpdCaps, SocData,
        Subdomain,
    },
    domain::{DomainStatus, PowerDomainOps},
    error::{PmError, PmResult, RegmapError, Resource, ResourceError, Stage},
    poll::PollConfig,
    registry::{GenpdFlags, GenpdFramework, Scpsys},
    regs::{MmioRegs, RegisterBlock, Regmap, SysconRegmap},
    resource::{Clk, PmResources, Regulator},
    time::PmTimeIf,
};
