// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! MT7622 power domains.

use super::*;
use crate::data::{DomainData, ScpdCaps, SocData, genmask};

pub const MT7622_POWER_DOMAIN_ETHSYS: usize = 0;
pub const MT7622_POWER_DOMAIN_HIF0: usize = 1;
pub const MT7622_POWER_DOMAIN_HIF1: usize = 2;
pub const MT7622_POWER_DOMAIN_WB: usize = 3;

const MT7622_TOP_AXI_PROT_EN_ETHSYS: u32 = (1 << 3) | (1 << 17);
const MT7622_TOP_AXI_PROT_EN_HIF0: u32 = (1 << 24) | (1 << 25);
const MT7622_TOP_AXI_PROT_EN_HIF1: u32 = (1 << 26) | (1 << 27) | (1 << 28);
const MT7622_TOP_AXI_PROT_EN_WB: u32 = (1 << 2) | (1 << 6) | (1 << 7) | (1 << 8);

static DOMAINS: [DomainData; 4] = [
    DomainData::new("ethsys", PWR_STATUS_ETHSYS, SPM_ETHSYS_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .bus_prot([infra_axi_prot(MT7622_TOP_AXI_PROT_EN_ETHSYS)])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("hif0", PWR_STATUS_HIF0, SPM_HIF0_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .clocks(&["hif_sel"])
        .bus_prot([infra_axi_prot(MT7622_TOP_AXI_PROT_EN_HIF0)])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("hif1", PWR_STATUS_HIF1, SPM_HIF1_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .clocks(&["hif_sel"])
        .bus_prot([infra_axi_prot(MT7622_TOP_AXI_PROT_EN_HIF1)])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    // The WB SRAM ack never asserts; it gets a fixed wait instead.
    DomainData::new("wb", PWR_STATUS_WB, SPM_WB_PWR_CON)
        .bus_prot([infra_axi_prot(MT7622_TOP_AXI_PROT_EN_WB)])
        .caps(ScpdCaps::ACTIVE_WAKEUP.union(ScpdCaps::FWAIT_SRAM)),
];

pub static MT7622_DATA: SocData = SocData {
    compatible: "mediatek,mt7622-scpsys",
    domains: &DOMAINS,
    subdomains: &[],
    regs: SPM_PWR_STATUS_REGS,
};
