// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Power-on/power-off sequencing of single domains.


use pmdomain::{
    BusProt, DomainData, DomainStatus, PmError, PollConfig, PowerDomainOps, RegSpace, Resource,
    ResourceError, ScpCtrlReg, SocData, Stage,
    data::genmask,
    sram::FWAIT_SRAM_DELAY,
    soc::{mt7622, mt8173},
};
use test_helpers::*;

const PLAIN: usize = 0;
const CLOCKED: usize = 1;
const GUARDED: usize = 2;

const PLAIN_CTL: usize = 0x023c;
const CLOCKED_CTL: usize = 0x0214;
const GUARDED_CTL: usize = 0x0238;

const SMI_EN: u32 = 0x03c0;
const SMI_STA: u32 = 0x03c8;

static DOMAINS: [DomainData; 3] = [
    DomainData::new("plain", 0x8, PLAIN_CTL),
    DomainData::new("clocked", 1 << 4, CLOCKED_CTL).clocks(&["c0", "c1", "c2"]),
    DomainData::new("guarded", 1 << 5, GUARDED_CTL)
        .sram(genmask(11, 8), genmask(13, 12))
        .clocks(&["mm"])
        .bus_prot([
            BusProt::new(
                RegSpace::Infracfg,
                INFRA_TOPAXI_PROTECTEN,
                INFRA_TOPAXI_PROTECTSTA1,
                1 << 1,
            ),
            BusProt::new(RegSpace::SmiCommon, SMI_EN, SMI_STA, 1 << 0),
        ]),
];

static SOC: SocData = SocData {
    compatible: "test,scpsys",
    domains: &DOMAINS,
    subdomains: &[],
    regs: ScpCtrlReg {
        pwr_sta_offs: 0x060c,
        pwr_sta2nd_offs: 0x0610,
    },
};

fn bench() -> Bench {
    let bench = Bench::new(&SOC);
    bench.smi_common.link(SMI_EN, SMI_STA);
    bench
}

#[test]
fn test_power_on_write_sequence() {
    let bench = bench();
    let scp = bench.build().unwrap();

    scp.power_on(PLAIN).unwrap();
    // Starts isolated (bit 1) and clock gated (bit 4).
    assert_eq!(
        bench.log.ctl_writes(PLAIN_CTL),
        [
            0x16, // PWR_ON
            0x1e, // PWR_ON_2ND
            0x0e, // clear CLK_DIS
            0x0c, // clear ISO
            0x0d, // set RST_B
            0x0d, // SRAM out of retention, no bits to clear
        ]
    );
    assert_eq!(bench.spm.status_bits(0x8), (true, true));
    assert_eq!(scp.is_on(PLAIN), Ok(true));
}

#[test]
fn test_power_off_write_sequence() {
    let bench = bench();
    let scp = bench.build().unwrap();
    scp.power_on(GUARDED).unwrap();
    bench.log.clear();

    scp.power_off(GUARDED).unwrap();
    assert_eq!(
        bench.log.bus_writes(),
        [
            ("infracfg", INFRA_TOPAXI_PROTECTEN, 1 << 1),
            ("smi_common", SMI_EN, 1 << 0),
        ]
    );
    assert_eq!(
        bench.log.ctl_writes(GUARDED_CTL),
        [
            0x0f0d, // SRAM power-down
            0x3f0f, // set ISO
            0x3f0e, // clear RST_B
            0x3f1e, // set CLK_DIS
            0x3f12, // clear PWR_ON and PWR_ON_2ND together
        ]
    );
    assert_eq!(bench.log.events().last(), Some(&Event::ClkOff("mm".into())));
    assert_eq!(scp.is_on(GUARDED), Ok(false));
    assert_eq!(bench.res.clk("mm").enable_count(), 0);
}

#[test]
fn test_full_cycle_event_order() {
    let bench = bench();
    let supply = bench.res.add_supply("guarded");
    let scp = bench.build().unwrap();

    scp.power_on(GUARDED).unwrap();
    scp.power_off(GUARDED).unwrap();
    bench.log.clear();
    scp.power_on(GUARDED).unwrap();

    let events = bench.log.events();
    assert_eq!(events[0], Event::SupplyOn("guarded".into()));
    assert_eq!(events[1], Event::ClkOn("mm".into()));
    assert!(matches!(events[2], Event::Ctl { offset: GUARDED_CTL, .. }));
    // Bus protection is released last, in reverse order.
    assert_eq!(
        bench.log.bus_writes(),
        [
            ("smi_common", SMI_EN, 0),
            ("infracfg", INFRA_TOPAXI_PROTECTEN, 0),
        ]
    );
    assert!(matches!(events.last(), Some(Event::Bus { space: "infracfg", .. })));
    assert_eq!(supply.enable_count(), 1);

    bench.log.clear();
    scp.power_off(GUARDED).unwrap();
    let events = bench.log.events();
    assert!(matches!(events[0], Event::Bus { space: "infracfg", .. }));
    assert_eq!(
        events[events.len() - 2..],
        [
            Event::ClkOff("mm".into()),
            Event::SupplyOff("guarded".into())
        ]
    );
    assert_eq!(supply.enable_count(), 0);
}

#[test]
fn test_power_off_timeout_leaves_resources_enabled() {
    let bench = bench();
    let supply = bench.res.add_supply("guarded");
    let scp = bench.build().unwrap().with_poll_config(FAST_POLL);
    scp.power_on(GUARDED).unwrap();
    bench.spm.inject(GUARDED_CTL, Fault::PowerStuck);
    bench.log.clear();

    assert_eq!(
        scp.power_off(GUARDED),
        Err(PmError::TimedOut {
            domain: "guarded",
            stage: Stage::PowerOffAck,
        })
    );
    assert!(matches!(
        bench.log.events().last(),
        Some(Event::Ctl { offset: GUARDED_CTL, val: 0x3f12 })
    ));
    assert_eq!(bench.res.clk("mm").enable_count(), 1);
    assert_eq!(supply.enable_count(), 1);
    assert_eq!(
        bench.log.count(|ev| matches!(ev, Event::ClkOff(_) | Event::SupplyOff(_))),
        0
    );
    assert_eq!(scp.status(GUARDED), Ok(DomainStatus::On));
}

#[test]
fn test_clock_failure_rolls_back() {
    let bench = bench();
    let supply = bench.res.add_supply("clocked");
    bench.res.clk("c1").fail_enable();
    let scp = bench.build().unwrap();

    assert_eq!(
        scp.power_on(CLOCKED),
        Err(PmError::ResourceUnavailable {
            domain: "clocked",
            resource: Resource::Clock("c1"),
            source: ResourceError::Io,
        })
    );
    assert_eq!(
        bench.log.events(),
        [
            Event::SupplyOn("clocked".into()),
            Event::ClkOn("c0".into()),
            Event::ClkOff("c0".into()),
            Event::SupplyOff("clocked".into()),
        ]
    );
    assert_eq!(bench.res.clk("c0").enable_count(), 0);
    assert_eq!(bench.res.clk("c2").enable_count(), 0);
    assert_eq!(supply.enable_count(), 0);
}

#[test]
fn test_clocks_enable_in_order_and_disable_in_reverse() {
    let bench = bench();
    let scp = bench.build().unwrap();

    scp.power_on(CLOCKED).unwrap();
    scp.power_off(CLOCKED).unwrap();
    let clk_events: Vec<_> = bench
        .log
        .events()
        .into_iter()
        .filter(|ev| matches!(ev, Event::ClkOn(_) | Event::ClkOff(_)))
        .collect();
    assert_eq!(
        clk_events,
        [
            Event::ClkOn("c0".into()),
            Event::ClkOn("c1".into()),
            Event::ClkOn("c2".into()),
            Event::ClkOff("c2".into()),
            Event::ClkOff("c1".into()),
            Event::ClkOff("c0".into()),
        ]
    );
}

#[test]
fn test_regulator_failure_touches_nothing_else() {
    let bench = bench();
    bench.res.add_supply("guarded").fail_enable();
    let scp = bench.build().unwrap();

    assert_eq!(
        scp.power_on(GUARDED),
        Err(PmError::ResourceUnavailable {
            domain: "guarded",
            resource: Resource::Regulator,
            source: ResourceError::Io,
        })
    );
    assert!(bench.log.events().is_empty());
}

#[test]
fn test_power_on_timeout_releases_resources() {
    let bench = bench();
    bench.spm.inject(GUARDED_CTL, Fault::PowerStuck);
    let scp = bench.build().unwrap().with_poll_config(FAST_POLL);

    assert_eq!(
        scp.power_on(GUARDED),
        Err(PmError::TimedOut {
            domain: "guarded",
            stage: Stage::PowerAck,
        })
    );
    // Only the two power requests were written.
    assert_eq!(bench.log.ctl_writes(GUARDED_CTL).len(), 2);
    assert_eq!(bench.res.clk("mm").enable_count(), 0);
    assert_eq!(scp.is_on(GUARDED), Ok(false));
}

#[test]
fn test_sram_timeout_on_power_on() {
    let bench = bench();
    bench.spm.inject(GUARDED_CTL, Fault::SramAckStuck);
    let scp = bench.build().unwrap().with_poll_config(FAST_POLL);

    assert_eq!(
        scp.power_on(GUARDED),
        Err(PmError::TimedOut {
            domain: "guarded",
            stage: Stage::SramAck,
        })
    );
    assert_eq!(bench.res.clk("mm").enable_count(), 0);
    // Bus protection is never released.
    assert!(bench.log.bus_writes().is_empty());
}

#[test]
fn test_inconsistent_status() {
    let bench = bench();
    bench.spm.inject(PLAIN_CTL, Fault::SecondaryStuck);
    let scp = bench.build().unwrap().with_poll_config(FAST_POLL);

    assert_eq!(
        scp.power_on(PLAIN),
        Err(PmError::TimedOut {
            domain: "plain",
            stage: Stage::PowerAck,
        })
    );
    assert_eq!(scp.status(PLAIN), Ok(DomainStatus::Inconsistent));
    assert_eq!(
        scp.is_on(PLAIN),
        Err(PmError::InconsistentStatus { domain: "plain" })
    );
}

#[test]
fn test_status_reports_on_and_off() {
    let bench = bench();
    let scp = bench.build().unwrap().with_poll_config(FAST_POLL);
    scp.power_on(PLAIN).unwrap();
    assert_eq!(scp.status(PLAIN), Ok(DomainStatus::On));
    assert_eq!(scp.status(CLOCKED), Ok(DomainStatus::Off));
}

#[test]
fn test_unknown_domain() {
    let bench = bench();
    let scp = bench.build().unwrap();

    assert_eq!(scp.power_on(3), Err(PmError::NoSuchDomain(3)));
    assert_eq!(scp.power_off(3), Err(PmError::NoSuchDomain(3)));
    assert_eq!(scp.is_on(3), Err(PmError::NoSuchDomain(3)));
    assert!(bench.log.events().is_empty());
}

#[test]
fn test_forced_sram_wait_on_mt7622_wb() {
    let bench = Bench::new(&mt7622::MT7622_DATA);
    let scp = bench.build().unwrap();

    scp.power_on(mt7622::MT7622_POWER_DOMAIN_WB).unwrap();
    assert_eq!(clock_now(), FWAIT_SRAM_DELAY);
    assert_eq!(scp.is_on(mt7622::MT7622_POWER_DOMAIN_WB), Ok(true));

    // Other domains poll their ack and finish without waiting.
    clock_reset();
    scp.power_on(mt7622::MT7622_POWER_DOMAIN_HIF0).unwrap();
    assert_eq!(clock_now(), std::time::Duration::ZERO);
}

#[test]
fn test_unbounded_timeout_after_forced_wait() {
    let bench = Bench::new(&mt7622::MT7622_DATA);
    let scp = bench
        .build()
        .unwrap()
        .with_poll_config(PollConfig::new(
            std::time::Duration::from_micros(10),
            std::time::Duration::MAX,
        ));
    let wb = mt7622::MT7622_POWER_DOMAIN_WB;

    scp.power_on(wb).unwrap();
    assert_eq!(clock_now(), FWAIT_SRAM_DELAY);
    scp.power_off(wb).unwrap();
    assert_eq!(scp.is_on(wb), Ok(false));
}

#[test]
fn test_zero_timeout_still_gives_up() {
    let bench = bench();
    bench.spm.inject(PLAIN_CTL, Fault::PowerStuck);
    let scp = bench.build().unwrap().with_poll_config(PollConfig::new(
        std::time::Duration::from_micros(10),
        std::time::Duration::ZERO,
    ));

    assert_eq!(
        scp.power_on(PLAIN),
        Err(PmError::TimedOut {
            domain: "plain",
            stage: Stage::PowerAck,
        })
    );
    assert_eq!(clock_now(), std::time::Duration::ZERO);
}

#[test]
fn test_mt8173_mfg_cycle() {
    let bench = Bench::new(&mt8173::MT8173_DATA);
    let scp = bench.build().unwrap();
    let mfg = mt8173::MT8173_POWER_DOMAIN_MFG;

    scp.power_on(mfg).unwrap();
    scp.power_off(mfg).unwrap();
    assert_eq!(
        bench.infracfg.value(INFRA_TOPAXI_PROTECTEN),
        (1 << 14) | (1 << 21) | (1 << 22) | (1 << 23)
    );
    assert_eq!(scp.is_on(mfg), Ok(false));

    scp.power_on(mfg).unwrap();
    assert_eq!(bench.infracfg.value(INFRA_TOPAXI_PROTECTEN), 0);
    assert_eq!(scp.is_on(mfg), Ok(true));
}
