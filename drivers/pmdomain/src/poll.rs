// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Bounded register polling.

use core::{convert::Infallible, time::Duration};

use crate::time;

/// Default delay between two reads.
pub const POLL_DELAY: Duration = Duration::from_micros(10);
/// Default time allowed for a condition to become true.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(1);

/// Delay and deadline applied to every hardware wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub delay: Duration,
    pub timeout: Duration,
}

impl PollConfig {
    pub const fn new(delay: Duration, timeout: Duration) -> Self {
        Self { delay, timeout }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(POLL_DELAY, POLL_TIMEOUT)
    }
}

/// Why a poll gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollError<E> {
    /// The condition never held before the deadline.
    TimedOut,
    /// The read itself failed.
    Read(E),
}

/// Repeatedly reads a value until `cond` holds or `cfg.timeout` elapses.
///
/// Returns the value that satisfied the condition. After the deadline one
/// last read is taken, so a condition that became true while the caller was
/// delayed is still reported as success. A zero delay spins without
/// sleeping. A zero timeout gives the condition exactly two reads. A
/// deadline past the end of the clock saturates.
pub fn poll_timeout<T, E, R, C>(
    mut read: R,
    mut cond: C,
    cfg: PollConfig,
) -> Result<T, PollError<E>>
where
    R: FnMut() -> Result<T, E>,
    C: FnMut(&T) -> bool,
{
    let deadline = time::now().saturating_add(cfg.timeout);
    loop {
        let val = read().map_err(PollError::Read)?;
        if cond(&val) {
            return Ok(val);
        }
        if cfg.timeout.is_zero() || time::now() > deadline {
            let val = read().map_err(PollError::Read)?;
            return if cond(&val) {
                Ok(val)
            } else {
                Err(PollError::TimedOut)
            };
        }
        if !cfg.delay.is_zero() {
            time::busy_wait(cfg.delay);
        }
    }
}

/// [`poll_timeout`] for reads that cannot fail, such as local MMIO.
pub fn poll<T, R, C>(mut read: R, cond: C, cfg: PollConfig) -> Result<T, PollError<Infallible>>
where
    R: FnMut() -> T,
    C: FnMut(&T) -> bool,
{
    poll_timeout(|| Ok(read()), cond, cfg)
}
