// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! MT8173 power domains.

use super::*;
use crate::data::{DomainData, ScpdCaps, SocData, Subdomain, genmask};

pub const MT8173_POWER_DOMAIN_VDEC: usize = 0;
pub const MT8173_POWER_DOMAIN_VENC: usize = 1;
pub const MT8173_POWER_DOMAIN_ISP: usize = 2;
pub const MT8173_POWER_DOMAIN_MM: usize = 3;
pub const MT8173_POWER_DOMAIN_VENC_LT: usize = 4;
pub const MT8173_POWER_DOMAIN_AUDIO: usize = 5;
pub const MT8173_POWER_DOMAIN_USB: usize = 6;
pub const MT8173_POWER_DOMAIN_MFG_ASYNC: usize = 7;
pub const MT8173_POWER_DOMAIN_MFG_2D: usize = 8;
pub const MT8173_POWER_DOMAIN_MFG: usize = 9;

const MT8173_TOP_AXI_PROT_EN_MM_M0: u32 = 1 << 1;
const MT8173_TOP_AXI_PROT_EN_MM_M1: u32 = 1 << 2;
const MT8173_TOP_AXI_PROT_EN_MFG_S: u32 = 1 << 14;
const MT8173_TOP_AXI_PROT_EN_MFG_M0: u32 = 1 << 21;
const MT8173_TOP_AXI_PROT_EN_MFG_M1: u32 = 1 << 22;
const MT8173_TOP_AXI_PROT_EN_MFG_SNOOP_OUT: u32 = 1 << 23;

static DOMAINS: [DomainData; 10] = [
    DomainData::new("vdec", PWR_STATUS_VDEC, SPM_VDE_PWR_CON)
        .sram(genmask(11, 8), genmask(12, 12))
        .clocks(&["mm"]),
    DomainData::new("venc", PWR_STATUS_VENC, SPM_VEN_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .clocks(&["mm", "venc"]),
    DomainData::new("isp", PWR_STATUS_ISP, SPM_ISP_PWR_CON)
        .sram(genmask(11, 8), genmask(13, 12))
        .clocks(&["mm"]),
    DomainData::new("mm", PWR_STATUS_DISP, SPM_DIS_PWR_CON)
        .sram(genmask(11, 8), genmask(12, 12))
        .clocks(&["mm"])
        .bus_prot([infra_axi_prot(
            MT8173_TOP_AXI_PROT_EN_MM_M0 | MT8173_TOP_AXI_PROT_EN_MM_M1,
        )]),
    DomainData::new("venc_lt", PWR_STATUS_VENC_LT, SPM_VEN2_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .clocks(&["mm", "venc_lt"]),
    DomainData::new("audio", PWR_STATUS_AUDIO, SPM_AUDIO_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12)),
    DomainData::new("usb", PWR_STATUS_USB, SPM_USB_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("mfg_async", PWR_STATUS_MFG_ASYNC, SPM_MFG_ASYNC_PWR_CON)
        .sram(genmask(11, 8), 0)
        .clocks(&["mfg"]),
    DomainData::new("mfg_2d", PWR_STATUS_MFG_2D, SPM_MFG_2D_PWR_CON)
        .sram(genmask(11, 8), genmask(13, 12)),
    DomainData::new("mfg", PWR_STATUS_MFG, SPM_MFG_PWR_CON)
        .sram(genmask(13, 8), genmask(21, 16))
        .bus_prot([infra_axi_prot(
            MT8173_TOP_AXI_PROT_EN_MFG_S
                | MT8173_TOP_AXI_PROT_EN_MFG_M0
                | MT8173_TOP_AXI_PROT_EN_MFG_M1
                | MT8173_TOP_AXI_PROT_EN_MFG_SNOOP_OUT,
        )]),
];

static SUBDOMAINS: [Subdomain; 2] = [
    Subdomain::new(MT8173_POWER_DOMAIN_MFG_ASYNC, MT8173_POWER_DOMAIN_MFG_2D),
    Subdomain::new(MT8173_POWER_DOMAIN_MFG_2D, MT8173_POWER_DOMAIN_MFG),
];

pub static MT8173_DATA: SocData = SocData {
    compatible: "mediatek,mt8173-scpsys",
    domains: &DOMAINS,
    subdomains: &SUBDOMAINS,
    regs: SPM_PWR_STATUS_REGS,
};
