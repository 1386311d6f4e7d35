// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! MT6797 power domains.
//!
//! This chip keeps its status registers at a different place and none of
//! its domains carry capability flags.

use super::*;
use crate::data::{DomainData, ScpCtrlReg, SocData, Subdomain, genmask};

pub const MT6797_POWER_DOMAIN_VDEC: usize = 0;
pub const MT6797_POWER_DOMAIN_VENC: usize = 1;
pub const MT6797_POWER_DOMAIN_ISP: usize = 2;
pub const MT6797_POWER_DOMAIN_MM: usize = 3;
pub const MT6797_POWER_DOMAIN_AUDIO: usize = 4;
pub const MT6797_POWER_DOMAIN_MFG_ASYNC: usize = 5;
pub const MT6797_POWER_DOMAIN_MJC: usize = 6;

const SPM_PWR_STATUS_MT6797: usize = 0x0180;
const SPM_PWR_STATUS_2ND_MT6797: usize = 0x0184;

static DOMAINS: [DomainData; 7] = [
    DomainData::new("vdec", 1 << 7, 0x300)
        .sram(genmask(8, 8), genmask(12, 12))
        .clocks(&["vdec"]),
    DomainData::new("venc", 1 << 21, 0x304).sram(genmask(11, 8), genmask(15, 12)),
    DomainData::new("isp", 1 << 5, 0x308).sram(genmask(9, 8), genmask(13, 12)),
    DomainData::new("mm", 1 << 3, 0x30c)
        .sram(genmask(8, 8), genmask(12, 12))
        .clocks(&["mm"])
        .bus_prot([infra_axi_prot((1 << 1) | (1 << 2))]),
    DomainData::new("audio", 1 << 24, 0x314).sram(genmask(11, 8), genmask(15, 12)),
    DomainData::new("mfg_async", 1 << 13, 0x334).clocks(&["mfg"]),
    DomainData::new("mjc", 1 << 20, 0x310).sram(genmask(8, 8), genmask(12, 12)),
];

static SUBDOMAINS: [Subdomain; 4] = [
    Subdomain::new(MT6797_POWER_DOMAIN_MM, MT6797_POWER_DOMAIN_VDEC),
    Subdomain::new(MT6797_POWER_DOMAIN_MM, MT6797_POWER_DOMAIN_ISP),
    Subdomain::new(MT6797_POWER_DOMAIN_MM, MT6797_POWER_DOMAIN_VENC),
    Subdomain::new(MT6797_POWER_DOMAIN_MM, MT6797_POWER_DOMAIN_MJC),
];

pub static MT6797_DATA: SocData = SocData {
    compatible: "mediatek,mt6797-scpsys",
    domains: &DOMAINS,
    subdomains: &SUBDOMAINS,
    regs: ScpCtrlReg {
        pwr_sta_offs: SPM_PWR_STATUS_MT6797,
        pwr_sta2nd_offs: SPM_PWR_STATUS_2ND_MT6797,
    },
};
