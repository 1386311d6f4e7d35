// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Bus protection sequencing.
//!
//! Before a domain loses power every bus path into and out of it is closed
//! so that no transaction is left hanging. The paths depend on each other,
//! so the steps of a domain are raised in declaration order and dropped in
//! exactly the reverse order.

use crate::{
    data::{BusProt, DomainData, RegSpace},
    error::{PmError, PmResult, RegmapError, Stage},
    poll::{PollConfig, PollError, poll_timeout},
    regs::Regmap,
};

/// Applies and releases the bus-protection steps of a domain.
pub struct BusProtection<'a> {
    infracfg: &'a dyn Regmap,
    smi_common: Option<&'a dyn Regmap>,
    cfg: PollConfig,
}

impl<'a> BusProtection<'a> {
    pub fn new(
        infracfg: &'a dyn Regmap,
        smi_common: Option<&'a dyn Regmap>,
        cfg: PollConfig,
    ) -> Self {
        Self {
            infracfg,
            smi_common,
            cfg,
        }
    }

    fn map(&self, domain: &DomainData, space: RegSpace) -> PmResult<&'a dyn Regmap> {
        match space {
            RegSpace::Infracfg => Ok(self.infracfg),
            RegSpace::SmiCommon => self.smi_common.ok_or(PmError::MissingRegSpace {
                domain: domain.name,
                space,
            }),
        }
    }

    /// Raises every step in declaration order.
    ///
    /// Stops at the first step whose status bits do not all come up; later
    /// steps are left untouched.
    pub fn apply(&self, domain: &DomainData) -> PmResult {
        for (step, bp) in domain.bus_prot_steps().enumerate() {
            let map = self.map(domain, bp.space)?;
            trace!("{}: bus protection set step {step} mask {:#x}", domain.name, bp.mask);

            let res = match bp.set_ofs {
                Some(set_ofs) => map
                    .write(set_ofs, bp.mask)
                    .map_err(|e| access_error(domain, bp, set_ofs, e)),
                None => map
                    .update_bits(bp.en_ofs, bp.mask, bp.mask)
                    .map_err(|e| access_error(domain, bp, bp.en_ofs, e)),
            };
            res?;

            self.wait(domain, map, bp, Stage::BusProtSet { step }, |val| {
                val & bp.mask == bp.mask
            })?;
        }
        Ok(())
    }

    /// Drops every step in reverse declaration order.
    ///
    /// Steps flagged `ignore_clr_ack` are written but not waited on.
    pub fn release(&self, domain: &DomainData) -> PmResult {
        let count = domain.bus_prot_steps().count();
        for (i, bp) in domain.bus_prot_steps().rev().enumerate() {
            let step = count - 1 - i;
            let map = self.map(domain, bp.space)?;
            trace!("{}: bus protection clear step {step} mask {:#x}", domain.name, bp.mask);

            let res = match bp.clr_ofs {
                Some(clr_ofs) => map
                    .write(clr_ofs, bp.mask)
                    .map_err(|e| access_error(domain, bp, clr_ofs, e)),
                None => map
                    .update_bits(bp.en_ofs, bp.mask, 0)
                    .map_err(|e| access_error(domain, bp, bp.en_ofs, e)),
            };
            res?;

            if bp.ignore_clr_ack {
                continue;
            }
            self.wait(domain, map, bp, Stage::BusProtClear { step }, |val| {
                val & bp.mask == 0
            })?;
        }
        Ok(())
    }

    fn wait(
        &self,
        domain: &DomainData,
        map: &dyn Regmap,
        bp: &BusProt,
        stage: Stage,
        cond: impl Fn(u32) -> bool,
    ) -> PmResult {
        poll_timeout(|| map.read(bp.sta_ofs), |val| cond(*val), self.cfg)
            .map(|_| ())
            .map_err(|e| match e {
                PollError::TimedOut => PmError::TimedOut {
                    domain: domain.name,
                    stage,
                },
                PollError::Read(e) => access_error(domain, bp, bp.sta_ofs, e),
            })
    }
}

fn access_error(domain: &DomainData, bp: &BusProt, offset: u32, source: RegmapError) -> PmError {
    PmError::RegisterAccess {
        domain: domain.name,
        space: bp.space,
        offset,
        source,
    }
}
