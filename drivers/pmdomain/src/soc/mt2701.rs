// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! MT2701 power domains.

use super::*;
use crate::data::{DomainData, ScpdCaps, SocData, genmask};

pub const MT2701_POWER_DOMAIN_CONN: usize = 0;
pub const MT2701_POWER_DOMAIN_DISP: usize = 1;
pub const MT2701_POWER_DOMAIN_MFG: usize = 2;
pub const MT2701_POWER_DOMAIN_VDEC: usize = 3;
pub const MT2701_POWER_DOMAIN_ISP: usize = 4;
pub const MT2701_POWER_DOMAIN_BDP: usize = 5;
pub const MT2701_POWER_DOMAIN_ETH: usize = 6;
pub const MT2701_POWER_DOMAIN_HIF: usize = 7;
pub const MT2701_POWER_DOMAIN_IFR_MSC: usize = 8;

pub(crate) const MT2701_TOP_AXI_PROT_EN_MM_M0: u32 = 1 << 1;
pub(crate) const MT2701_TOP_AXI_PROT_EN_CONN_M: u32 = 1 << 2;
pub(crate) const MT2701_TOP_AXI_PROT_EN_CONN_S: u32 = 1 << 8;

static DOMAINS: [DomainData; 9] = [
    DomainData::new("conn", PWR_STATUS_CONN, SPM_CONN_PWR_CON)
        .bus_prot([infra_axi_prot(
            MT2701_TOP_AXI_PROT_EN_CONN_M | MT2701_TOP_AXI_PROT_EN_CONN_S,
        )])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("disp", PWR_STATUS_DISP, SPM_DIS_PWR_CON)
        .sram(genmask(11, 8), 0)
        .clocks(&["mm"])
        .bus_prot([infra_axi_prot(MT2701_TOP_AXI_PROT_EN_MM_M0)])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("mfg", PWR_STATUS_MFG, SPM_MFG_PWR_CON)
        .sram(genmask(11, 8), genmask(12, 12))
        .clocks(&["mfg"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("vdec", PWR_STATUS_VDEC, SPM_VDE_PWR_CON)
        .sram(genmask(11, 8), genmask(12, 12))
        .clocks(&["mm"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("isp", PWR_STATUS_ISP, SPM_ISP_PWR_CON)
        .sram(genmask(11, 8), genmask(13, 12))
        .clocks(&["mm"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("bdp", PWR_STATUS_BDP, SPM_BDP_PWR_CON)
        .sram(genmask(11, 8), 0)
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("eth", PWR_STATUS_ETH, SPM_ETH_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .clocks(&["ethif"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("hif", PWR_STATUS_HIF, SPM_HIF_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .clocks(&["ethif"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("ifr_msc", PWR_STATUS_IFR_MSC, SPM_IFR_MSC_PWR_CON)
        .caps(ScpdCaps::ACTIVE_WAKEUP),
];

pub static MT2701_DATA: SocData = SocData {
    compatible: "mediatek,mt2701-scpsys",
    domains: &DOMAINS,
    subdomains: &[],
    regs: SPM_PWR_STATUS_REGS,
};
