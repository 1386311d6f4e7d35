// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! MT7623A power domains, a subset of MT2701.

use super::{
    mt2701::{MT2701_TOP_AXI_PROT_EN_CONN_M, MT2701_TOP_AXI_PROT_EN_CONN_S},
    *,
};
use crate::data::{DomainData, ScpdCaps, SocData, genmask};

pub const MT7623A_POWER_DOMAIN_CONN: usize = 0;
pub const MT7623A_POWER_DOMAIN_ETH: usize = 1;
pub const MT7623A_POWER_DOMAIN_HIF: usize = 2;
pub const MT7623A_POWER_DOMAIN_IFR_MSC: usize = 3;

static DOMAINS: [DomainData; 4] = [
    DomainData::new("conn", PWR_STATUS_CONN, SPM_CONN_PWR_CON)
        .bus_prot([infra_axi_prot(
            MT2701_TOP_AXI_PROT_EN_CONN_M | MT2701_TOP_AXI_PROT_EN_CONN_S,
        )])
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

pub static MT7623A_DATA: SocData = SocData {
    compatible: "mediatek,mt7623a-scpsys",
    domains: &DOMAINS,
    subdomains: &[],
    regs: SPM_PWR_STATUS_REGS,
};
