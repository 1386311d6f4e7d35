// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Power domain state machine.
//!
//! A domain is either on or off as reported by the two power status
//! registers; there is no software copy of that state. `power_on` and
//! `power_off` move a domain between the two:
//!
//! ```text
//! power_on:  regulator -> clocks -> PWR_ON, PWR_ON_2ND -> wait ack
//!            -> clear CLK_DIS -> clear ISO -> set RST_B
//!            -> SRAM out of retention -> release bus protection
//! power_off: apply bus protection -> SRAM into retention
//!            -> set ISO -> clear RST_B -> set CLK_DIS -> clear PWR_ON*
//!            -> wait ack -> clocks -> regulator
//! ```
//!
//! Failures before the power request is written on the way up undo the
//! clock and regulator enables. Anything later is reported as is: the
//! hardware has already been touched and no rollback is attempted beyond
//! releasing clocks and regulator on the way up.

use alloc::{sync::Arc, vec::Vec};

use crate::{
    bus_prot::BusProtection,
    data::{
        DomainData, PWR_CLK_DIS_BIT, PWR_ISO_BIT, PWR_ON_2ND_BIT, PWR_ON_BIT, PWR_RST_B_BIT,
    },
    error::{PmError, PmResult, Resource, ResourceError, Stage},
    poll::poll,
    registry::Scpsys,
    regs::RegisterBlock,
    resource::{Clk, Regulator},
    sram::SramRetention,
};

/// Hardware power state of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainStatus {
    /// Both status bits set.
    On,
    /// Both status bits clear.
    Off,
    /// Only one status bit set. Seen while the domain is switching.
    Inconsistent,
}

impl DomainStatus {
    pub(crate) fn from_bits(status: u32, status2: u32) -> Self {
        match (status != 0, status2 != 0) {
            (true, true) => DomainStatus::On,
            (false, false) => DomainStatus::Off,
            _ => DomainStatus::Inconsistent,
        }
    }
}

/// The operations the hierarchical power-domain framework calls.
pub trait PowerDomainOps {
    fn power_on(&self, id: usize) -> PmResult;
    fn power_off(&self, id: usize) -> PmResult;
    /// Returns whether the domain is powered, or
    /// [`PmError::InconsistentStatus`] when the status registers disagree.
    fn is_on(&self, id: usize) -> PmResult<bool>;
}

/// A power domain together with the resources acquired for it.
pub struct ScpDomain {
    pub(crate) data: &'static DomainData,
    pub(crate) clks: Vec<Arc<dyn Clk>>,
    pub(crate) supply: Option<Arc<dyn Regulator>>,
}

impl ScpDomain {
    pub fn data(&self) -> &'static DomainData {
        self.data
    }

    pub fn has_supply(&self) -> bool {
        self.supply.is_some()
    }

    fn regulator_enable(&self) -> PmResult {
        match &self.supply {
            Some(supply) => supply.enable().map_err(|source| self.regulator_error(source)),
            None => Ok(()),
        }
    }

    fn regulator_disable(&self) -> PmResult {
        match &self.supply {
            Some(supply) => supply.disable().map_err(|source| self.regulator_error(source)),
            None => Ok(()),
        }
    }

    fn regulator_error(&self, source: ResourceError) -> PmError {
        PmError::ResourceUnavailable {
            domain: self.data.name,
            resource: Resource::Regulator,
            source,
        }
    }

    /// Enables the clocks in order, disabling the ones already enabled if
    /// one of them fails.
    fn clk_enable(&self) -> PmResult {
        for (i, clk) in self.clks.iter().enumerate() {
            if let Err(source) = clk.prepare_enable() {
                clk_disable(&self.clks[..i]);
                return Err(PmError::ResourceUnavailable {
                    domain: self.data.name,
                    resource: Resource::Clock(self.data.basic_clk_name[i]),
                    source,
                });
            }
        }
        Ok(())
    }

    /// Undoes a successful [`Self::clk_enable`] and the regulator enable.
    fn release_resources(&self) {
        clk_disable(&self.clks);
        if let Err(e) = self.regulator_disable() {
            warn!("{}: {e}", self.data.name);
        }
    }
}

fn clk_disable(clks: &[Arc<dyn Clk>]) {
    for clk in clks.iter().rev() {
        clk.disable_unprepare();
    }
}

impl<B: RegisterBlock> Scpsys<B> {
    fn domain(&self, id: usize) -> PmResult<&ScpDomain> {
        self.domains.get(id).ok_or(PmError::NoSuchDomain(id))
    }

    fn bus_prot(&self) -> BusProtection<'_> {
        BusProtection::new(&*self.infracfg, self.smi_common.as_deref(), self.poll_cfg)
    }

    fn sram(&self) -> SramRetention<'_, B> {
        SramRetention::new(&self.regs, self.poll_cfg)
    }

    fn read_status(&self, data: &DomainData) -> DomainStatus {
        let status = self.regs.read(self.ctrl_reg.pwr_sta_offs) & data.sta_mask;
        let status2 = self.regs.read(self.ctrl_reg.pwr_sta2nd_offs) & data.sta_mask;
        DomainStatus::from_bits(status, status2)
    }

    /// Reads the hardware state of a domain.
    pub fn status(&self, id: usize) -> PmResult<DomainStatus> {
        Ok(self.read_status(self.domain(id)?.data))
    }

    fn wait_status(&self, data: &DomainData, target: DomainStatus, stage: Stage) -> PmResult {
        poll(|| self.read_status(data), |s| *s == target, self.poll_cfg)
            .map(|_| ())
            .map_err(|_| PmError::TimedOut {
                domain: data.name,
                stage,
            })
    }

    fn do_power_on(&self, scpd: &ScpDomain) -> PmResult {
        let data = scpd.data;

        scpd.regulator_enable()?;
        if let Err(e) = scpd.clk_enable() {
            if let Err(e) = scpd.regulator_disable() {
                warn!("{}: {e}", data.name);
            }
            return Err(e);
        }

        self.power_on_sequence(data).inspect_err(|_| scpd.release_resources())
    }

    fn power_on_sequence(&self, data: &DomainData) -> PmResult {
        let ctl = data.ctl_offs;

        let mut val = self.regs.read(ctl);
        val |= PWR_ON_BIT;
        self.regs.write(ctl, val);
        val |= PWR_ON_2ND_BIT;
        self.regs.write(ctl, val);

        self.wait_status(data, DomainStatus::On, Stage::PowerAck)?;

        val &= !PWR_CLK_DIS_BIT;
        self.regs.write(ctl, val);
        val &= !PWR_ISO_BIT;
        self.regs.write(ctl, val);
        val |= PWR_RST_B_BIT;
        self.regs.write(ctl, val);

        self.sram().exit_retention(data)?;
        self.bus_prot().release(data)
    }

    fn do_power_off(&self, scpd: &ScpDomain) -> PmResult {
        let data = scpd.data;
        let ctl = data.ctl_offs;

        self.bus_prot().apply(data)?;
        self.sram().enter_retention(data)?;

        let mut val = self.regs.read(ctl);
        val |= PWR_ISO_BIT;
        self.regs.write(ctl, val);
        val &= !PWR_RST_B_BIT;
        self.regs.write(ctl, val);
        val |= PWR_CLK_DIS_BIT;
        self.regs.write(ctl, val);
        val &= !(PWR_ON_BIT | PWR_ON_2ND_BIT);
        self.regs.write(ctl, val);

        // Isolation, reset and clock gate are already applied; a timeout
        // here leaves the domain in an unknown state.
        self.wait_status(data, DomainStatus::Off, Stage::PowerOffAck)?;

        clk_disable(&scpd.clks);
        scpd.regulator_disable()
    }
}

impl<B: RegisterBlock> PowerDomainOps for Scpsys<B> {
    fn power_on(&self, id: usize) -> PmResult {
        let scpd = self.domain(id)?;
        debug!("power on domain {}", scpd.data.name);
        self.do_power_on(scpd).inspect_err(|e| {
            error!("Failed to power on domain {}: {e}", scpd.data.name);
        })
    }

    fn power_off(&self, id: usize) -> PmResult {
        let scpd = self.domain(id)?;
        debug!("power off domain {}", scpd.data.name);
        self.do_power_off(scpd).inspect_err(|e| {
            error!("Failed to power off domain {}: {e}", scpd.data.name);
        })
    }

    fn is_on(&self, id: usize) -> PmResult<bool> {
        let data = self.domain(id)?.data;
        match self.read_status(data) {
            DomainStatus::On => Ok(true),
            DomainStatus::Off => Ok(false),
            DomainStatus::Inconsistent => Err(PmError::InconsistentStatus { domain: data.name }),
        }
    }
}
