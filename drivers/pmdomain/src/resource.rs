// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Clocks and regulators feeding a power domain.

use alloc::sync::Arc;

use crate::error::ResourceError;

/// A gateable clock.
pub trait Clk: Send + Sync {
    fn prepare_enable(&self) -> Result<(), ResourceError>;
    fn disable_unprepare(&self);
}

/// A voltage regulator supplying a domain.
pub trait Regulator: Send + Sync {
    fn enable(&self) -> Result<(), ResourceError>;
    fn disable(&self) -> Result<(), ResourceError>;
}

/// Looks up the clocks and regulators of the controller device.
pub trait PmResources {
    /// Returns the clock with the given consumer name.
    fn clk_get(&self, name: &str) -> Result<Arc<dyn Clk>, ResourceError>;

    /// Returns the supply named after a domain, or `None` when the board
    /// does not wire one.
    fn regulator_get_optional(&self, name: &str)
    -> Result<Option<Arc<dyn Regulator>>, ResourceError>;
}
