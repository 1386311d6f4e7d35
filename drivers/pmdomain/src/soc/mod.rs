// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Descriptors of the supported chips.

pub mod mt2701;
pub mod mt2712;
pub mod mt6797;
pub mod mt7622;
pub mod mt7623a;
pub mod mt8173;

use crate::data::{BusProt, RegSpace, ScpCtrlReg, SocData};

pub(crate) const SPM_VDE_PWR_CON: usize = 0x0210;
pub(crate) const SPM_MFG_PWR_CON: usize = 0x0214;
pub(crate) const SPM_VEN_PWR_CON: usize = 0x0230;
pub(crate) const SPM_ISP_PWR_CON: usize = 0x0238;
pub(crate) const SPM_DIS_PWR_CON: usize = 0x023c;
pub(crate) const SPM_CONN_PWR_CON: usize = 0x0280;
pub(crate) const SPM_VEN2_PWR_CON: usize = 0x0298;
pub(crate) const SPM_AUDIO_PWR_CON: usize = 0x029c; // MT8173, MT2712
pub(crate) const SPM_BDP_PWR_CON: usize = 0x029c; // MT2701
pub(crate) const SPM_ETH_PWR_CON: usize = 0x02a0;
pub(crate) const SPM_HIF_PWR_CON: usize = 0x02a4;
pub(crate) const SPM_IFR_MSC_PWR_CON: usize = 0x02a8;
pub(crate) const SPM_MFG_2D_PWR_CON: usize = 0x02c0;
pub(crate) const SPM_MFG_ASYNC_PWR_CON: usize = 0x02c4;
pub(crate) const SPM_USB_PWR_CON: usize = 0x02cc;
pub(crate) const SPM_USB2_PWR_CON: usize = 0x02d4; // MT2712
pub(crate) const SPM_ETHSYS_PWR_CON: usize = 0x02e0; // MT7622
pub(crate) const SPM_HIF0_PWR_CON: usize = 0x02e4; // MT7622
pub(crate) const SPM_HIF1_PWR_CON: usize = 0x02e8; // MT7622
pub(crate) const SPM_WB_PWR_CON: usize = 0x02ec; // MT7622

pub(crate) const PWR_STATUS_CONN: u32 = 1 << 1;
pub(crate) const PWR_STATUS_DISP: u32 = 1 << 3;
pub(crate) const PWR_STATUS_MFG: u32 = 1 << 4;
pub(crate) const PWR_STATUS_ISP: u32 = 1 << 5;
pub(crate) const PWR_STATUS_VDEC: u32 = 1 << 7;
pub(crate) const PWR_STATUS_BDP: u32 = 1 << 14;
pub(crate) const PWR_STATUS_ETH: u32 = 1 << 15;
pub(crate) const PWR_STATUS_HIF: u32 = 1 << 16;
pub(crate) const PWR_STATUS_IFR_MSC: u32 = 1 << 17;
pub(crate) const PWR_STATUS_USB2: u32 = 1 << 19; // MT2712
pub(crate) const PWR_STATUS_VENC_LT: u32 = 1 << 20;
pub(crate) const PWR_STATUS_VENC: u32 = 1 << 21;
pub(crate) const PWR_STATUS_MFG_2D: u32 = 1 << 22; // MT8173
pub(crate) const PWR_STATUS_MFG_ASYNC: u32 = 1 << 23; // MT8173
pub(crate) const PWR_STATUS_AUDIO: u32 = 1 << 24; // MT8173, MT2712
pub(crate) const PWR_STATUS_USB: u32 = 1 << 25; // MT8173, MT2712
pub(crate) const PWR_STATUS_ETHSYS: u32 = 1 << 24; // MT7622
pub(crate) const PWR_STATUS_HIF0: u32 = 1 << 25; // MT7622
pub(crate) const PWR_STATUS_HIF1: u32 = 1 << 26; // MT7622
pub(crate) const PWR_STATUS_WB: u32 = 1 << 27; // MT7622

/// Status registers shared by most chips.
pub(crate) const SPM_PWR_STATUS_REGS: ScpCtrlReg = ScpCtrlReg {
    pwr_sta_offs: 0x060c,
    pwr_sta2nd_offs: 0x0610,
};

/// Infracfg AXI protection enable and status registers.
const INFRA_TOPAXI_PROTECTEN: u32 = 0x0220;
const INFRA_TOPAXI_PROTECTSTA1: u32 = 0x0228;

/// A single infracfg AXI protection step using read-modify-write.
pub(crate) const fn infra_axi_prot(mask: u32) -> BusProt {
    BusProt::new(
        RegSpace::Infracfg,
        INFRA_TOPAXI_PROTECTEN,
        INFRA_TOPAXI_PROTECTSTA1,
        mask,
    )
}

/// Every supported chip.
pub static SOCS: &[&SocData] = &[
    &mt2701::MT2701_DATA,
    &mt2712::MT2712_DATA,
    &mt6797::MT6797_DATA,
    &mt7622::MT7622_DATA,
    &mt7623a::MT7623A_DATA,
    &mt8173::MT8173_DATA,
];

/// Returns the descriptor matching a device-tree compatible string.
pub fn of_match(compatible: &str) -> Option<&'static SocData> {
    SOCS.iter().copied().find(|soc| soc.compatible == compatible)
}
