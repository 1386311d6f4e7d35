// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! SRAM retention sequencing.

use core::time::Duration;

use crate::{
    data::{DomainData, ScpdCaps},
    error::{PmError, PmResult, Stage},
    poll::{PollConfig, poll},
    regs::RegisterBlock,
    time,
};

/// Fixed wait used instead of the SRAM ack on domains flagged
/// [`ScpdCaps::FWAIT_SRAM`].
pub const FWAIT_SRAM_DELAY: Duration = Duration::from_micros(12_000);

/// Drives the SRAM power-down bits in a domain's control register.
pub struct SramRetention<'a, B: RegisterBlock + ?Sized> {
    regs: &'a B,
    cfg: PollConfig,
}

impl<'a, B: RegisterBlock + ?Sized> SramRetention<'a, B> {
    pub fn new(regs: &'a B, cfg: PollConfig) -> Self {
        Self { regs, cfg }
    }

    /// Powers the SRAM up and waits until every ack bit reads zero.
    pub fn exit_retention(&self, domain: &DomainData) -> PmResult {
        let ctl = domain.ctl_offs;
        let val = self.regs.read(ctl) & !domain.sram_pdn_bits;
        self.regs.write(ctl, val);

        if domain.has_cap(ScpdCaps::FWAIT_SRAM) {
            // The ack bits of this domain never settle.
            time::busy_wait(FWAIT_SRAM_DELAY);
            return Ok(());
        }

        let ack = domain.sram_pdn_ack_bits;
        self.wait(domain, |val| val & ack == 0)
    }

    /// Puts the SRAM into retention and waits until every ack bit reads one.
    pub fn enter_retention(&self, domain: &DomainData) -> PmResult {
        let ctl = domain.ctl_offs;
        let val = self.regs.read(ctl) | domain.sram_pdn_bits;
        self.regs.write(ctl, val);

        let ack = domain.sram_pdn_ack_bits;
        self.wait(domain, |val| val & ack == ack)
    }

    fn wait(&self, domain: &DomainData, cond: impl Fn(u32) -> bool) -> PmResult {
        poll(|| self.regs.read(domain.ctl_offs), |val| cond(*val), self.cfg)
            .map(|_| ())
            .map_err(|_| PmError::TimedOut {
                domain: domain.name,
                stage: Stage::SramAck,
            })
    }
}
