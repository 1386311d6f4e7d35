// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Error types for power domain transitions.
//!
//! Every error raised while sequencing a domain carries the domain name and
//! the step that failed, so a single log line is enough to locate the
//! register or resource involved.

use core::fmt;

use crate::data::RegSpace;

/// The wait that did not complete within its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Both status registers reporting the domain on.
    PowerAck,
    /// Both status registers reporting the domain off.
    PowerOffAck,
    /// SRAM power-down acknowledge bits.
    SramAck,
    /// Bus protection being raised at the given step index.
    BusProtSet { step: usize },
    /// Bus protection being released at the given step index.
    BusProtClear { step: usize },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::PowerAck => write!(f, "power-on ack"),
            Stage::PowerOffAck => write!(f, "power-off ack"),
            Stage::SramAck => write!(f, "SRAM ack"),
            Stage::BusProtSet { step } => write!(f, "bus protection set (step {step})"),
            Stage::BusProtClear { step } => write!(f, "bus protection clear (step {step})"),
        }
    }
}

/// A clock or regulator used by a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Regulator,
    Clock(&'static str),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Regulator => write!(f, "regulator"),
            Resource::Clock(name) => write!(f, "clock \"{name}\""),
        }
    }
}

/// Failure reported by a shared register space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegmapError {
    /// The bus transaction failed.
    Io,
    /// The offset lies outside the register space.
    InvalidOffset,
}

impl fmt::Display for RegmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegmapError::Io => write!(f, "register transaction failed"),
            RegmapError::InvalidOffset => write!(f, "offset out of range"),
        }
    }
}

/// Failure reported by the clock or regulator provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    /// No such resource is known to the provider.
    NotFound,
    /// The resource exists but could not be enabled or disabled.
    Io,
    /// The provider is not ready yet.
    ProbeDefer,
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::NotFound => write!(f, "not found"),
            ResourceError::Io => write!(f, "I/O error"),
            ResourceError::ProbeDefer => write!(f, "provider not ready"),
        }
    }
}

/// Errors raised by the power domain controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmError {
    /// A bounded poll exceeded its deadline.
    TimedOut { domain: &'static str, stage: Stage },
    /// An indirect register-space transaction failed.
    RegisterAccess {
        domain: &'static str,
        space: RegSpace,
        offset: u32,
        source: RegmapError,
    },
    /// A clock or regulator could not be acquired, enabled or disabled.
    ResourceUnavailable {
        domain: &'static str,
        resource: Resource,
        source: ResourceError,
    },
    /// The primary and secondary status registers disagree.
    InconsistentStatus { domain: &'static str },
    /// A bus-protection step targets a register space the platform lacks.
    MissingRegSpace { domain: &'static str, space: RegSpace },
    /// The platform descriptor is malformed.
    InvalidConfig(&'static str),
    /// No domain with this index exists.
    NoSuchDomain(usize),
}

impl fmt::Display for PmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PmError::TimedOut { domain, stage } => {
                write!(f, "domain {domain}: timed out waiting for {stage}")
            }
            PmError::RegisterAccess {
                domain,
                space,
                offset,
                source,
            } => write!(f, "domain {domain}: {space} @ {offset:#x}: {source}"),
            PmError::ResourceUnavailable {
                domain,
                resource,
                source,
            } => write!(f, "domain {domain}: {resource} unavailable: {source}"),
            PmError::InconsistentStatus { domain } => {
                write!(f, "domain {domain}: primary and secondary status disagree")
            }
            PmError::MissingRegSpace { domain, space } => {
                write!(f, "domain {domain}: register space {space} not present")
            }
            PmError::InvalidConfig(reason) => write!(f, "invalid platform descriptor: {reason}"),
            PmError::NoSuchDomain(id) => write!(f, "no power domain with index {id}"),
        }
    }
}

impl core::error::Error for PmError {}

/// Convenience type alias for Result with PmError
pub type PmResult<T = ()> = Result<T, PmError>;
