// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Time source supplied by the platform.

use core::time::Duration;

use crate_interface::call_interface;

/// Monotonic clock and delay primitives provided by the embedding platform.
#[crate_interface::def_interface]
pub trait PmTimeIf {
    /// Returns the current monotonic time.
    fn now() -> core::time::Duration;
    /// Busy-waits for the given duration.
    fn busy_wait(dur: core::time::Duration);
}

#[inline]
pub(crate) fn now() -> Duration {
    call_interface!(PmTimeIf::now)
}

#[inline]
pub(crate) fn busy_wait(dur: Duration) {
    call_interface!(PmTimeIf::busy_wait, dur)
}
