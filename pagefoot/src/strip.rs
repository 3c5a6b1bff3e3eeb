// Copyright 2026 the Pagefoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-set selection: which pages of a strip are visible.

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::PaginationError;

/// Ceiling applied to `boundaries` and `around` before any page is selected.
///
/// Clamping both reaches bounds the visible set at
/// `2 * (MAX_REACH + 1) + 2 * (MAX_REACH + 1) + 1` pages no matter how large
/// `total_pages` is, which keeps computation and output size constant.
pub const MAX_REACH: i64 = 20;

/// Largest magnitude accepted for any input: `2^53 - 1`.
///
/// Page counts beyond this are unsupported; see
/// [`PaginationError::UnsafeMagnitude`].
pub const MAX_SAFE_PAGE: i64 = (1 << 53) - 1;

/// Inputs for one strip computation.
///
/// All four values describe a single render of a footer; nothing persists
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripParams {
    /// The page currently being viewed (1-based).
    pub current_page: i64,
    /// Total number of pages in the sequence.
    pub total_pages: i64,
    /// How many pages to pin at each extreme of the sequence.
    pub boundaries: i64,
    /// How many pages to pin on each side of the current page.
    pub around: i64,
}

impl StripParams {
    /// Creates params from the four raw inputs.
    #[must_use]
    pub const fn new(current_page: i64, total_pages: i64, boundaries: i64, around: i64) -> Self {
        Self {
            current_page,
            total_pages,
            boundaries,
            around,
        }
    }

    fn validate(&self) -> Result<(), PaginationError> {
        let safe = -MAX_SAFE_PAGE..=MAX_SAFE_PAGE;
        for v in [
            self.current_page,
            self.total_pages,
            self.boundaries,
            self.around,
        ] {
            if !safe.contains(&v) {
                return Err(PaginationError::UnsafeMagnitude);
            }
        }
        if self.total_pages < 1 {
            return Err(PaginationError::TotalTooSmall);
        }
        if self.boundaries < 0 {
            return Err(PaginationError::NegativeBoundaries);
        }
        if self.around < 0 {
            return Err(PaginationError::NegativeAround);
        }
        if self.current_page < 1 || self.current_page > self.total_pages {
            return Err(PaginationError::CurrentOutOfBounds);
        }
        Ok(())
    }
}

/// Result of a page-set selection: the ascending, deduplicated pages to
/// render, plus enough context to place gap markers.
///
/// Produced by [`compute_visible_pages`]; render with
/// [`tokens`](Self::tokens) or the [`Display`](core::fmt::Display) impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisiblePages {
    pub(crate) pages: SmallVec<[i64; 16]>,
    pub(crate) current: i64,
    pub(crate) total: i64,
}

impl VisiblePages {
    /// The visible pages in ascending order. Always contains
    /// [`current_page`](Self::current_page) exactly once.
    #[must_use]
    pub fn pages(&self) -> &[i64] {
        &self.pages
    }

    /// The page the strip was computed around.
    #[must_use]
    pub const fn current_page(&self) -> i64 {
        self.current
    }

    /// Total pages of the underlying sequence.
    #[must_use]
    pub const fn total_pages(&self) -> i64 {
        self.total
    }

    /// Number of visible pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if no pages are visible. Never true for a strip
    /// returned by [`compute_visible_pages`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Computes the visible page set for `params`.
///
/// The set is the union of the current page, up to `boundaries` pages pinned
/// at each extreme, and up to `around` pages pinned on each side of the
/// current page. Reaches are clamped to [`MAX_REACH`] first, and every
/// candidate interval is clamped into `[1, total_pages]`, so the cost is
/// independent of `total_pages`; no range near `total_pages` is ever
/// enumerated.
///
/// Validation happens up front, first failure wins: unsafe magnitudes, then
/// `total_pages < 1`, negative `boundaries`, negative `around`, and finally a
/// current page outside `[1, total_pages]`.
pub fn compute_visible_pages(params: StripParams) -> Result<VisiblePages, PaginationError> {
    params.validate()?;
    let current = params.current_page;
    let total = params.total_pages;
    let boundaries = params.boundaries.min(MAX_REACH);
    let around = params.around.min(MAX_REACH);

    // Closed-form candidate windows, 1-based and inclusive. Empty or
    // out-of-range windows die in the clamp below; overlap between windows is
    // absorbed by the seen-set.
    let windows = [
        (1, boundaries),
        (total - boundaries + 1, total),
        (current - around, current),
        (current, current + around),
    ];

    let mut seen: HashSet<i64> = HashSet::new();
    let mut pages: SmallVec<[i64; 16]> = SmallVec::new();
    seen.insert(current);
    pages.push(current);
    for (start, end) in windows {
        let start = start.max(1);
        let end = end.min(total);
        for page in start..=end {
            if seen.insert(page) {
                pages.push(page);
            }
        }
    }
    pages.sort_unstable();

    Ok(VisiblePages {
        pages,
        current,
        total,
    })
}
