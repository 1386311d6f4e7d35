// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Controller construction and registration with the power-domain framework.

use alloc::{sync::Arc, vec::Vec};
use core::fmt::Debug;

use bitflags::bitflags;

use crate::{
    data::{DomainData, MAX_CLKS, RegSpace, ScpCtrlReg, ScpdCaps, SocData, Subdomain},
    domain::{DomainStatus, PowerDomainOps, ScpDomain},
    error::{PmError, PmResult, Resource},
    poll::PollConfig,
    regs::{RegisterBlock, Regmap},
    resource::PmResources,
    soc,
};

bitflags! {
    /// Flags passed to the framework when a domain is registered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GenpdFlags: u32 {
        /// Keep the domain powered while one of its devices may wake the system.
        const ACTIVE_WAKEUP = 1 << 0;
    }
}

/// The hierarchical power-domain framework.
///
/// It decides when domains are switched, counts users and walks the
/// parent/child edges; the controller only registers with it.
pub trait GenpdFramework {
    type Error: Debug;

    /// Registers one domain. `is_off` is the hardware state at that point.
    fn genpd_init(
        &mut self,
        id: usize,
        name: &'static str,
        flags: GenpdFlags,
        is_off: bool,
    ) -> Result<(), Self::Error>;

    /// Publishes the registered domains to their consumers.
    fn add_provider(&mut self, num_domains: usize) -> Result<(), Self::Error>;

    /// Nests `child` under `parent`.
    fn add_subdomain(&mut self, parent: usize, child: usize) -> Result<(), Self::Error>;
}

/// Power domain controller of one chip.
pub struct Scpsys<B: RegisterBlock> {
    pub(crate) regs: B,
    pub(crate) infracfg: Arc<dyn Regmap>,
    pub(crate) smi_common: Option<Arc<dyn Regmap>>,
    pub(crate) ctrl_reg: ScpCtrlReg,
    pub(crate) domains: Vec<ScpDomain>,
    pub(crate) poll_cfg: PollConfig,
    soc: &'static SocData,
}

impl<B: RegisterBlock> Scpsys<B> {
    /// Creates the controller for `soc` and acquires every domain's supply
    /// and clocks.
    ///
    /// `smi_common` may be absent on chips whose domains never protect that
    /// bus; a descriptor that needs it anyway is rejected.
    pub fn new(
        soc: &'static SocData,
        regs: B,
        infracfg: Arc<dyn Regmap>,
        smi_common: Option<Arc<dyn Regmap>>,
        res: &dyn PmResources,
    ) -> PmResult<Self> {
        validate(soc, smi_common.is_some())?;

        let supplies = soc
            .domains
            .iter()
            .map(|data| {
                res.regulator_get_optional(data.name)
                    .map_err(|source| PmError::ResourceUnavailable {
                        domain: data.name,
                        resource: Resource::Regulator,
                        source,
                    })
            })
            .collect::<PmResult<Vec<_>>>()?;

        let mut domains = Vec::with_capacity(soc.domains.len());
        for (data, supply) in soc.domains.iter().zip(supplies) {
            let clks = data
                .basic_clk_name
                .iter()
                .map(|&name| {
                    res.clk_get(name)
                        .map_err(|source| PmError::ResourceUnavailable {
                            domain: data.name,
                            resource: Resource::Clock(name),
                            source,
                        })
                })
                .collect::<PmResult<Vec<_>>>()?;
            domains.push(ScpDomain { data, clks, supply });
        }

        info!(
            "{}: {} power domains, {} subdomain edges",
            soc.compatible,
            domains.len(),
            soc.subdomains.len()
        );

        Ok(Self {
            regs,
            infracfg,
            smi_common,
            ctrl_reg: soc.regs,
            domains,
            poll_cfg: PollConfig::default(),
            soc,
        })
    }

    /// Looks up the descriptor for a device-tree compatible string and
    /// creates the controller for it.
    pub fn probe(
        compatible: &str,
        regs: B,
        infracfg: Arc<dyn Regmap>,
        smi_common: Option<Arc<dyn Regmap>>,
        res: &dyn PmResources,
    ) -> PmResult<Self> {
        let soc = soc::of_match(compatible).ok_or(PmError::InvalidConfig("unknown compatible"))?;
        Self::new(soc, regs, infracfg, smi_common, res)
    }

    /// Overrides the delay and deadline of every hardware wait.
    pub fn with_poll_config(mut self, cfg: PollConfig) -> Self {
        self.poll_cfg = cfg;
        self
    }

    /// Powers every domain on and hands them to the framework.
    ///
    /// Domains are turned on first so that hardware and framework start
    /// from the same state; the framework switches unused ones off later.
    /// Nothing here fails: a domain cannot be unregistered once handed
    /// over, so individual errors are logged and registration continues.
    pub fn register<F: GenpdFramework>(&self, fw: &mut F) {
        for (id, scpd) in self.domains.iter().enumerate() {
            let data = scpd.data;
            // A failed power_on is already logged; the domain is handed
            // over as off and the framework retries on first use.
            let powered = self.power_on(id).is_ok();
            let is_off = !powered || self.status(id) != Ok(DomainStatus::On);
            let flags = if data.has_cap(ScpdCaps::ACTIVE_WAKEUP) {
                GenpdFlags::ACTIVE_WAKEUP
            } else {
                GenpdFlags::empty()
            };
            if let Err(e) = fw.genpd_init(id, data.name, flags, is_off) {
                error!("Failed to register domain {}: {e:?}", data.name);
            }
        }

        if let Err(e) = fw.add_provider(self.domains.len()) {
            error!("Failed to add OF provider: {e:?}");
        }

        for sd in self.soc.subdomains {
            if let Err(e) = fw.add_subdomain(sd.origin, sd.subdomain) {
                error!("Failed to add subdomain {} -> {}: {e:?}", sd.origin, sd.subdomain);
            }
        }
    }

    pub fn soc(&self) -> &'static SocData {
        self.soc
    }

    pub fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub fn domain_data(&self, id: usize) -> Option<&'static DomainData> {
        self.domains.get(id).map(|d| d.data)
    }

    /// Returns the index of the domain called `name`.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.domains.iter().position(|d| d.data.name == name)
    }

    pub fn subdomains(&self) -> &'static [Subdomain] {
        self.soc.subdomains
    }

    pub fn poll_config(&self) -> PollConfig {
        self.poll_cfg
    }
}

fn validate(soc: &SocData, has_smi_common: bool) -> PmResult {
    let num = soc.domains.len();
    for data in soc.domains {
        if data.basic_clk_name.len() > MAX_CLKS {
            return Err(PmError::InvalidConfig("too many basic clocks"));
        }
        if !has_smi_common
            && data
                .bus_prot_steps()
                .any(|bp| bp.space == RegSpace::SmiCommon)
        {
            return Err(PmError::MissingRegSpace {
                domain: data.name,
                space: RegSpace::SmiCommon,
            });
        }
    }
    if soc
        .subdomains
        .iter()
        .any(|sd| sd.origin >= num || sd.subdomain >= num || sd.origin == sd.subdomain)
    {
        return Err(PmError::InvalidConfig("invalid subdomain edge"));
    }
    Ok(())
}
