// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! MT2712 power domains.

use super::*;
use crate::data::{DomainData, ScpdCaps, SocData, Subdomain, genmask};

pub const MT2712_POWER_DOMAIN_MM: usize = 0;
pub const MT2712_POWER_DOMAIN_VDEC: usize = 1;
pub const MT2712_POWER_DOMAIN_VENC: usize = 2;
pub const MT2712_POWER_DOMAIN_ISP: usize = 3;
pub const MT2712_POWER_DOMAIN_AUDIO: usize = 4;
pub const MT2712_POWER_DOMAIN_USB: usize = 5;
pub const MT2712_POWER_DOMAIN_USB2: usize = 6;
pub const MT2712_POWER_DOMAIN_MFG: usize = 7;
pub const MT2712_POWER_DOMAIN_MFG_SC1: usize = 8;
pub const MT2712_POWER_DOMAIN_MFG_SC2: usize = 9;
pub const MT2712_POWER_DOMAIN_MFG_SC3: usize = 10;

static DOMAINS: [DomainData; 11] = [
    DomainData::new("mm", PWR_STATUS_DISP, SPM_DIS_PWR_CON)
        .sram(genmask(8, 8), genmask(12, 12))
        .clocks(&["mm"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("vdec", PWR_STATUS_VDEC, SPM_VDE_PWR_CON)
        .sram(genmask(8, 8), genmask(12, 12))
        .clocks(&["mm", "vdec"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("venc", PWR_STATUS_VENC, SPM_VEN_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .clocks(&["mm", "venc", "jpgdec"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("isp", PWR_STATUS_ISP, SPM_ISP_PWR_CON)
        .sram(genmask(11, 8), genmask(13, 12))
        .clocks(&["mm"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("audio", PWR_STATUS_AUDIO, SPM_AUDIO_PWR_CON)
        .sram(genmask(11, 8), genmask(15, 12))
        .clocks(&["audio"])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("usb", PWR_STATUS_USB, SPM_USB_PWR_CON)
        .sram(genmask(10, 8), genmask(14, 12))
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("usb2", PWR_STATUS_USB2, SPM_USB2_PWR_CON)
        .sram(genmask(10, 8), genmask(14, 12))
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("mfg", PWR_STATUS_MFG, SPM_MFG_PWR_CON)
        .sram(genmask(8, 8), genmask(16, 16))
        .clocks(&["mfg"])
        .bus_prot([infra_axi_prot((1 << 14) | (1 << 21) | (1 << 23)).set_clr(0x260, 0x264)])
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("mfg_sc1", 1 << 22, 0x02c0)
        .sram(genmask(8, 8), genmask(16, 16))
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("mfg_sc2", 1 << 23, 0x02c4)
        .sram(genmask(8, 8), genmask(16, 16))
        .caps(ScpdCaps::ACTIVE_WAKEUP),
    DomainData::new("mfg_sc3", 1 << 30, 0x01f8)
        .sram(genmask(8, 8), genmask(16, 16))
        .caps(ScpdCaps::ACTIVE_WAKEUP),
];

static SUBDOMAINS: [Subdomain; 6] = [
    Subdomain::new(MT2712_POWER_DOMAIN_MM, MT2712_POWER_DOMAIN_VDEC),
    Subdomain::new(MT2712_POWER_DOMAIN_MM, MT2712_POWER_DOMAIN_VENC),
    Subdomain::new(MT2712_POWER_DOMAIN_MM, MT2712_POWER_DOMAIN_ISP),
    Subdomain::new(MT2712_POWER_DOMAIN_MFG, MT2712_POWER_DOMAIN_MFG_SC1),
    Subdomain::new(MT2712_POWER_DOMAIN_MFG_SC1, MT2712_POWER_DOMAIN_MFG_SC2),
    Subdomain::new(MT2712_POWER_DOMAIN_MFG_SC2, MT2712_POWER_DOMAIN_MFG_SC3),
];

pub static MT2712_DATA: SocData = SocData {
    compatible: "mediatek,mt2712-scpsys",
    domains: &DOMAINS,
    subdomains: &SUBDOMAINS,
    regs: SPM_PWR_STATUS_REGS,
};
