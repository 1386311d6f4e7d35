// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Controller construction, probing and framework registration.


use pmdomain::{
    BusProt, DomainData, DomainStatus, GenpdFlags, PmError, PowerDomainOps, RegSpace, Resource,
    ResourceError, ScpCtrlReg, Scpsys, SocData, Subdomain,
    soc::{self, mt2712, mt8173},
};
use test_helpers::*;

const STATUS_REGS: ScpCtrlReg = ScpCtrlReg {
    pwr_sta_offs: 0x060c,
    pwr_sta2nd_offs: 0x0610,
};

static SMI_DOMAINS: [DomainData; 1] = [DomainData::new("disp", 1 << 3, 0x023c).bus_prot([
    BusProt::new(RegSpace::SmiCommon, 0x03c0, 0x03c8, 1 << 0),
])];

static SMI_SOC: SocData = SocData {
    compatible: "test,smi",
    domains: &SMI_DOMAINS,
    subdomains: &[],
    regs: STATUS_REGS,
};

static EDGE_DOMAINS: [DomainData; 2] = [
    DomainData::new("a", 1 << 3, 0x023c),
    DomainData::new("b", 1 << 4, 0x0214),
];

static BAD_EDGE_SOC: SocData = SocData {
    compatible: "test,edges",
    domains: &EDGE_DOMAINS,
    subdomains: &[Subdomain::new(0, 2)],
    regs: STATUS_REGS,
};

static SELF_EDGE_SOC: SocData = SocData {
    compatible: "test,edges",
    domains: &EDGE_DOMAINS,
    subdomains: &[Subdomain::new(1, 1)],
    regs: STATUS_REGS,
};

#[test]
fn test_register_powers_on_every_domain() {
    let bench = Bench::new(&mt8173::MT8173_DATA);
    let scp = bench.build().unwrap();
    let mut fw = MockGenpd::default();

    scp.register(&mut fw);

    assert_eq!(fw.domains.len(), 10);
    for (id, reg) in fw.domains.iter().enumerate() {
        assert_eq!(reg.id, id);
        assert_eq!(reg.name, mt8173::MT8173_DATA.domains[id].name);
        assert!(!reg.is_off, "{} left off", reg.name);
        assert_eq!(scp.status(id), Ok(DomainStatus::On));
    }
    assert_eq!(fw.provider, Some(10));
    assert_eq!(
        fw.edges,
        [
            (
                mt8173::MT8173_POWER_DOMAIN_MFG_ASYNC,
                mt8173::MT8173_POWER_DOMAIN_MFG_2D
            ),
            (
                mt8173::MT8173_POWER_DOMAIN_MFG_2D,
                mt8173::MT8173_POWER_DOMAIN_MFG
            ),
        ]
    );
}

#[test]
fn test_register_passes_wakeup_flag() {
    let bench = Bench::new(&mt8173::MT8173_DATA);
    let scp = bench.build().unwrap();
    let mut fw = MockGenpd::default();
    scp.register(&mut fw);

    let wakeup: Vec<_> = fw
        .domains
        .iter()
        .filter(|r| r.flags.contains(GenpdFlags::ACTIVE_WAKEUP))
        .map(|r| r.name)
        .collect();
    assert_eq!(wakeup, ["usb"]);
}

#[test]
fn test_register_continues_past_failed_domain() {
    let bench = Bench::new(&mt8173::MT8173_DATA);
    let mfg = mt8173::MT8173_POWER_DOMAIN_MFG;
    let scp = bench.build().unwrap().with_poll_config(FAST_POLL);
    let ctl = scp.domain_data(mfg).unwrap().ctl_offs;
    bench.spm.inject(ctl, Fault::PowerStuck);
    let mut fw = MockGenpd::default();

    scp.register(&mut fw);

    assert_eq!(fw.domains.len(), 10);
    assert!(fw.domains[mfg].is_off);
    assert_eq!(fw.domains.iter().filter(|r| r.is_off).count(), 1);
    assert_eq!(fw.provider, Some(10));
    assert_eq!(fw.edges.len(), 2);
}

#[test]
fn test_register_reports_failed_power_on_as_off() {
    let bench = Bench::new(&mt8173::MT8173_DATA);
    let vdec = mt8173::MT8173_POWER_DOMAIN_VDEC;
    let scp = bench.build().unwrap().with_poll_config(FAST_POLL);
    let ctl = scp.domain_data(vdec).unwrap().ctl_offs;
    // Power comes up but the SRAM never acknowledges.
    bench.spm.inject(ctl, Fault::SramAckStuck);
    let mut fw = MockGenpd::default();

    scp.register(&mut fw);

    assert_eq!(scp.status(vdec), Ok(DomainStatus::On));
    assert!(fw.domains[vdec].is_off);
    // venc, isp, mm and venc_lt hold it; vdec gave it back.
    assert_eq!(bench.res.clk("mm").enable_count(), 4);
}

#[test]
fn test_register_tolerates_framework_errors() {
    let bench = Bench::new(&mt2712::MT2712_DATA);
    let scp = bench.build().unwrap();
    let mut fw = MockGenpd {
        reject_init: Some(mt2712::MT2712_POWER_DOMAIN_USB),
        reject_provider: true,
        ..Default::default()
    };

    scp.register(&mut fw);

    assert_eq!(fw.domains.len(), 10);
    assert!(fw.domains.iter().all(|r| r.name != "usb"));
    assert_eq!(fw.provider, None);
    assert_eq!(fw.edges.len(), 6);
}

#[test]
fn test_every_chip_registers_and_powers_off() {
    for &soc in soc::SOCS {
        let bench = Bench::new(soc);
        let scp = bench.build().unwrap();
        let mut fw = MockGenpd::default();
        scp.register(&mut fw);

        assert_eq!(fw.domains.len(), soc.domains.len(), "{}", soc.compatible);
        assert!(fw.domains.iter().all(|r| !r.is_off), "{}", soc.compatible);
        assert_eq!(fw.edges.len(), soc.subdomains.len());

        for id in (0..scp.num_domains()).rev() {
            scp.power_off(id).unwrap();
            assert_eq!(scp.is_on(id), Ok(false));
        }
        for id in 0..scp.num_domains() {
            let clks = soc.domains[id].basic_clk_name;
            assert!(
                clks.iter().all(|c| bench.res.clk(c).enable_count() == 0),
                "{}: clocks of {} still on",
                soc.compatible,
                soc.domains[id].name
            );
        }
    }
}

#[test]
fn test_probe_by_compatible() {
    let bench = Bench::new(&mt2712::MT2712_DATA);
    let scp = Scpsys::probe(
        "mediatek,mt2712-scpsys",
        bench.spm.clone(),
        bench.infracfg.clone(),
        None,
        &bench.res,
    )
    .unwrap();

    assert_eq!(scp.num_domains(), 11);
    assert_eq!(scp.find("mfg_sc3"), Some(mt2712::MT2712_POWER_DOMAIN_MFG_SC3));
    assert_eq!(scp.find("gpu"), None);
    assert_eq!(scp.subdomains().len(), 6);
    assert_eq!(scp.soc().compatible, "mediatek,mt2712-scpsys");
    assert_eq!(
        scp.domain_data(mt2712::MT2712_POWER_DOMAIN_VENC)
            .map(|d| d.basic_clk_name),
        Some(&["mm", "venc", "jpgdec"][..])
    );
    assert!(scp.domain_data(11).is_none());
}

#[test]
fn test_probe_unknown_compatible() {
    let bench = Bench::new(&mt8173::MT8173_DATA);
    let res = Scpsys::probe(
        "mediatek,mt8183-scpsys",
        bench.spm.clone(),
        bench.infracfg.clone(),
        None,
        &bench.res,
    );
    assert_eq!(res.err(), Some(PmError::InvalidConfig("unknown compatible")));
}

#[test]
fn test_missing_shared_space_is_rejected() {
    let bench = Bench::new(&SMI_SOC);
    assert_eq!(
        bench.build_without_smi_common().err(),
        Some(PmError::MissingRegSpace {
            domain: "disp",
            space: RegSpace::SmiCommon,
        })
    );
    assert!(bench.build().is_ok());
}

#[test]
fn test_bad_subdomain_edges_are_rejected() {
    for soc in [&BAD_EDGE_SOC, &SELF_EDGE_SOC] {
        let bench = Bench::new(soc);
        assert_eq!(
            bench.build().err(),
            Some(PmError::InvalidConfig("invalid subdomain edge"))
        );
    }
}

#[test]
fn test_missing_clock_fails_construction() {
    let bench = Bench::new(&mt8173::MT8173_DATA);
    bench.res.remove_clk("venc_lt");
    assert_eq!(
        bench.build().err(),
        Some(PmError::ResourceUnavailable {
            domain: "venc_lt",
            resource: Resource::Clock("venc_lt"),
            source: ResourceError::NotFound,
        })
    );
}

#[test]
fn test_deferred_supply_fails_construction() {
    let bench = Bench::new(&mt8173::MT8173_DATA);
    bench.res.defer_supplies();
    assert_eq!(
        bench.build().err(),
        Some(PmError::ResourceUnavailable {
            domain: "vdec",
            resource: Resource::Regulator,
            source: ResourceError::ProbeDefer,
        })
    );
}

#[test]
fn test_supply_is_optional() {
    let bench = Bench::new(&mt8173::MT8173_DATA);
    bench.res.add_supply("mfg");
    let scp = bench.build().unwrap();
    let mut fw = MockGenpd::default();
    scp.register(&mut fw);

    assert_eq!(
        bench.log.count(|ev| matches!(ev, Event::SupplyOn(_))),
        1
    );
    assert!(fw.domains.iter().all(|r| !r.is_off));
}
