// Copyright 2026 the Pagefoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pagefoot: compact footer pagination strips.
//!
//! Given a current page, a total page count, and two reaches (`boundaries`
//! pages pinned at each extreme, `around` pages pinned on each side of the
//! current page), this crate computes which page numbers a footer should
//! render, with `...` markers standing in for the elided ranges and the
//! current page bracketed.
//!
//! The core pieces are:
//!
//! - [`StripParams`]: the four inputs of one computation.
//! - [`compute_visible_pages`]: validates and selects the visible page set.
//! - [`VisiblePages`]: the ascending selection; iterate it as [`PageToken`]s
//!   via [`VisiblePages::tokens`], or format it with `Display`.
//! - [`render_footer`]: the all-in-one total entry point. It never panics;
//!   invalid inputs come back as the stable sentinel strings documented on
//!   [`PaginationError`], so it can sit directly in a rendering path.
//!
//! Selection is closed-form over at most four small windows. `total_pages`
//! may be as large as [`MAX_SAFE_PAGE`] (2^53 - 1) without affecting cost:
//! both reaches are clamped to [`MAX_REACH`], so the visible set never
//! exceeds a few dozen pages and the full `1..total_pages` range is never
//! enumerated.
//!
//! ## Minimal example
//!
//! ```rust
//! use pagefoot::render_footer;
//!
//! assert_eq!(render_footer(4, 10, 2, 2), "1 2 3 [4] 5 6 ... 9 10");
//! assert_eq!(render_footer(4, 5, 1, 0), "1 ... [4] 5");
//! assert_eq!(render_footer(1, 1, 1, 1), "[1]");
//!
//! // Invalid inputs render as sentinel strings instead of panicking.
//! assert_eq!(render_footer(11, 10, 2, 2), "error: current page is out of bounds");
//! ```
//!
//! ## Structured consumption
//!
//! Hosts that make page numbers clickable should consume tokens rather than
//! the opaque string; this crate does not know how links are rendered:
//!
//! ```rust
//! use pagefoot::{PageToken, StripParams, compute_visible_pages};
//!
//! let strip = compute_visible_pages(StripParams::new(4, 10, 1, 1))?;
//! let mut html = String::new();
//! for token in strip.tokens() {
//!     match token {
//!         PageToken::Page(n) => html.push_str(&format!("<a href=\"?page={n}\">{n}</a> ")),
//!         PageToken::Current(n) => html.push_str(&format!("<b>{n}</b> ")),
//!         PageToken::Gap => html.push_str("… "),
//!     }
//! }
//! assert_eq!(strip.to_string(), "1 ... 3 [4] 5 ... 10");
//! # Ok::<(), pagefoot::PaginationError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod render;
mod strip;

use alloc::string::{String, ToString};

pub use error::PaginationError;
pub use render::{PageToken, Tokens};
pub use strip::{MAX_REACH, MAX_SAFE_PAGE, StripParams, VisiblePages, compute_visible_pages};

/// Formats a footer pagination strip as a single display string.
///
/// This is the total convenience form of [`compute_visible_pages`]: invalid
/// inputs return the matching [`PaginationError`] sentinel string instead of
/// an `Err`, so the result can be rendered unconditionally.
///
/// ```rust
/// assert_eq!(pagefoot::render_footer(4, 10, 0, 2), "... 2 3 [4] 5 6 ...");
/// ```
#[must_use]
pub fn render_footer(current_page: i64, total_pages: i64, boundaries: i64, around: i64) -> String {
    match compute_visible_pages(StripParams::new(current_page, total_pages, boundaries, around)) {
        Ok(strip) => strip.to_string(),
        Err(err) => err.to_string(),
    }
}
