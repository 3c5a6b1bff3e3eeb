// Copyright 2026 the Pagefoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Footer navigation strips for a handful of representative inputs.
//!
//! This example shows:
//! - the all-in-one [`render_footer`] string form,
//! - token-level consumption via [`compute_visible_pages`], which is what a
//!   host would use to make the page numbers clickable.
//!
//! Run:
//! - `cargo run -p pagefoot_demos --example footer_nav`

use pagefoot::{MAX_SAFE_PAGE, PageToken, StripParams, compute_visible_pages, render_footer};

fn main() {
    // A short sequence with pinned extremes and no around-window.
    println!("{}", render_footer(4, 5, 1, 0));

    // The classic footer: two pages at each extreme, two around the current.
    println!("{}", render_footer(4, 10, 2, 2));

    // No boundaries at all: gaps open up at both edges.
    println!("{}", render_footer(4, 10, 0, 2));

    // Deep inside a long sequence.
    println!("{}", render_footer(500, 1000, 5, 5));

    // total_pages at the representable ceiling; cost is unchanged.
    println!("{}", render_footer(MAX_SAFE_PAGE / 2, MAX_SAFE_PAGE, 2, 2));

    // Invalid inputs come back as sentinel strings, not panics.
    println!("{}", render_footer(11, 10, 2, 2));

    // Token-level consumption, the way a UI host would wire up links.
    let strip = compute_visible_pages(StripParams::new(7, 30, 1, 2))
        .expect("inputs are valid");
    for token in strip.tokens() {
        match token {
            PageToken::Page(n) => print!("<a href=\"?page={n}\">{n}</a> "),
            PageToken::Current(n) => print!("<b>{n}</b> "),
            PageToken::Gap => print!("… "),
        }
    }
    println!();
}
