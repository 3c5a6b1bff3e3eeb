// Copyright 2026 the Pagefoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for strip computation.

use core::fmt;

/// Why a strip could not be computed.
///
/// The [`Display`](fmt::Display) form of each variant is a stable sentinel
/// string: [`render_footer`](crate::render_footer) returns it verbatim so the
/// formatter stays total in a rendering path. The texts below are a
/// compatibility contract from `0.1.0` on; new variants may be added, but
/// existing renderings will not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationError {
    /// Some input lies outside the exactly-representable range
    /// (|v| > [`MAX_SAFE_PAGE`](crate::MAX_SAFE_PAGE)).
    ///
    /// Renders as `error: input exceeds the safe integer range (2^53 - 1)`.
    UnsafeMagnitude,
    /// `total_pages` was less than 1.
    ///
    /// Renders as `error: total pages must be at least 1`.
    TotalTooSmall,
    /// `boundaries` was negative.
    ///
    /// Renders as `error: boundaries must be non-negative`.
    NegativeBoundaries,
    /// `around` was negative.
    ///
    /// Renders as `error: around must be non-negative`.
    NegativeAround,
    /// `current_page` was below 1 or above `total_pages`.
    ///
    /// Renders as `error: current page is out of bounds`.
    CurrentOutOfBounds,
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::UnsafeMagnitude => "error: input exceeds the safe integer range (2^53 - 1)",
            Self::TotalTooSmall => "error: total pages must be at least 1",
            Self::NegativeBoundaries => "error: boundaries must be non-negative",
            Self::NegativeAround => "error: around must be non-negative",
            Self::CurrentOutOfBounds => "error: current page is out of bounds",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for PaginationError {}
