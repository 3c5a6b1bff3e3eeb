// Copyright 2026 the Pagefoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Token stream and string form of a computed strip.
//!
//! Gap placement is derived purely from adjacency in the sorted page set:
//! exactly one [`PageToken::Gap`] per discontinuity, one before the first
//! page if it is not page 1, and one after the last page if it is not the
//! final page. Two gap tokens can therefore never be adjacent.

use core::fmt;
use core::iter::FusedIterator;

use crate::VisiblePages;

/// One renderable element of a footer strip.
///
/// Hosts that make pages clickable consume these instead of the formatted
/// string; which token carries a link (and how) is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A plain page number.
    Page(i64),
    /// The current page; rendered bracketed, e.g. `[4]`.
    Current(i64),
    /// An elided range of pages; rendered as `...`.
    Gap,
}

/// Iterator over the tokens of a [`VisiblePages`].
///
/// Returned by [`VisiblePages::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    pages: &'a [i64],
    current: i64,
    total: i64,
    idx: usize,
    gap_checked: bool,
    finished: bool,
}

impl Iterator for Tokens<'_> {
    type Item = PageToken;

    fn next(&mut self) -> Option<PageToken> {
        if self.idx < self.pages.len() {
            let page = self.pages[self.idx];
            if !self.gap_checked {
                self.gap_checked = true;
                let discontinuity = match self.idx.checked_sub(1) {
                    Some(prev) => page - self.pages[prev] > 1,
                    None => page != 1,
                };
                if discontinuity {
                    return Some(PageToken::Gap);
                }
            }
            self.idx += 1;
            self.gap_checked = false;
            return Some(if page == self.current {
                PageToken::Current(page)
            } else {
                PageToken::Page(page)
            });
        }
        if !self.finished {
            self.finished = true;
            if self.pages.last().is_some_and(|&last| last != self.total) {
                return Some(PageToken::Gap);
            }
        }
        None
    }
}

impl FusedIterator for Tokens<'_> {}

impl VisiblePages {
    /// Iterates the strip as renderable tokens, gaps included.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            pages: &self.pages,
            current: self.current,
            total: self.total,
            idx: 0,
            gap_checked: false,
            finished: false,
        }
    }
}

impl fmt::Display for VisiblePages {
    /// Space-joined token form, e.g. `1 2 3 [4] 5 6 ... 9 10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in self.tokens() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match token {
                PageToken::Page(n) => write!(f, "{n}")?,
                PageToken::Current(n) => write!(f, "[{n}]")?,
                PageToken::Gap => f.write_str("...")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::PageToken;
    use crate::{StripParams, compute_visible_pages};

    fn render(current: i64, total: i64, boundaries: i64, around: i64) -> String {
        compute_visible_pages(StripParams::new(current, total, boundaries, around))
            .unwrap()
            .to_string()
    }

    #[test]
    fn single_page_sequence() {
        assert_eq!(render(1, 1, 1, 1), "[1]");
    }

    #[test]
    fn lone_current_with_boundaries() {
        assert_eq!(render(4, 5, 1, 0), "1 ... [4] 5");
    }

    #[test]
    fn boundaries_and_around_with_one_gap() {
        assert_eq!(render(4, 10, 2, 2), "1 2 3 [4] 5 6 ... 9 10");
    }

    #[test]
    fn no_boundaries_yields_gaps_at_both_edges() {
        assert_eq!(render(4, 10, 0, 2), "... 2 3 [4] 5 6 ...");
    }

    #[test]
    fn lone_current_without_any_reach() {
        // around = 0 still renders the current page, gapped on both sides.
        assert_eq!(render(5, 9, 0, 0), "... [5] ...");
        assert_eq!(render(1, 9, 0, 0), "[1] ...");
        assert_eq!(render(9, 9, 0, 0), "... [9]");
    }

    #[test]
    fn long_strip_around_the_middle() {
        assert_eq!(
            render(500, 1000, 5, 5),
            "1 2 3 4 5 ... 495 496 497 498 499 [500] 501 502 503 504 505 \
             ... 996 997 998 999 1000"
        );
    }

    #[test]
    fn full_coverage_has_no_gap_markers() {
        assert_eq!(render(4, 9, 9, 9), "1 2 3 [4] 5 6 7 8 9");
    }

    #[test]
    fn one_gap_per_discontinuity_however_wide() {
        // A billion-page hole still collapses to a single marker.
        assert_eq!(
            render(1_000_000_000, 2_000_000_000, 1, 0),
            "1 ... [1000000000] ... 2000000000"
        );
    }

    #[test]
    fn current_token_appears_exactly_once() {
        let strip = compute_visible_pages(StripParams::new(7, 30, 2, 2)).unwrap();
        let currents = strip
            .tokens()
            .filter(|t| matches!(t, PageToken::Current(_)))
            .count();
        assert_eq!(currents, 1);
        assert!(strip.tokens().any(|t| t == PageToken::Current(7)));
    }

    #[test]
    fn gap_tokens_are_never_adjacent() {
        for current in 1..=25 {
            for boundaries in 0..=3 {
                for around in 0..=3 {
                    let strip =
                        compute_visible_pages(StripParams::new(current, 25, boundaries, around))
                            .unwrap();
                    let tokens: Vec<_> = strip.tokens().collect();
                    for pair in tokens.windows(2) {
                        assert!(
                            !(pair[0] == PageToken::Gap && pair[1] == PageToken::Gap),
                            "adjacent gaps at current={current} b={boundaries} a={around}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn bare_numbers_are_strictly_increasing() {
        let strip = compute_visible_pages(StripParams::new(13, 40, 3, 2)).unwrap();
        let numbers: Vec<i64> = strip
            .tokens()
            .filter_map(|t| match t {
                PageToken::Page(n) | PageToken::Current(n) => Some(n),
                PageToken::Gap => None,
            })
            .collect();
        for pair in numbers.windows(2) {
            assert!(pair[0] < pair[1], "numbers must be strictly increasing");
        }
    }
}
