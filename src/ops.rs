// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Free-function form of the [`Pair`] operations.
//!
//! Each function takes the pair by value and forwards to the method of the
//! same meaning, so either style can be used interchangeably:
//!
//! ```
//! use tempair::{clamp_max, extent, Pair};
//!
//! let pair = Pair::new(0.0, 10.0);
//! assert_eq!(clamp_max(pair, 5.0), pair.clamp_max(5.0));
//! assert_eq!(extent(pair), 10.0);
//! ```

use super::{Endpoint, Pair};

pub use super::pair::{overlap, typed_pair};

/// Signed length `end - start`.
#[inline]
pub fn extent<T: Endpoint>(pair: Pair<T>) -> f64 {
    pair.extent()
}

/// `start + proportion * extent`.
#[inline]
pub fn interpolate<T: Endpoint>(pair: Pair<T>, proportion: f64) -> f64 {
    pair.interpolate(proportion)
}

/// Arithmetic midpoint.
#[inline]
pub fn mid<T: Endpoint>(pair: Pair<T>) -> f64 {
    pair.mid()
}

/// Half-open containment, with a zero-extent pair containing its start.
#[inline]
pub fn contains<T: Endpoint>(pair: Pair<T>, value: T) -> bool {
    pair.contains(value)
}

/// Overlap test between two pairs.
#[inline]
pub fn pair_overlap<T: Endpoint>(a: Pair<T>, b: Pair<T>) -> bool {
    a.overlaps(&b)
}

/// Overlap test between a pair and raw bounds.
#[inline]
pub fn pair_overlap_bounds<T: Endpoint>(pair: Pair<T>, start: T, end: T) -> bool {
    pair.overlaps_bounds(start, end)
}

/// Scale the extent by `factor` around the midpoint.
#[inline]
pub fn expand<T: Endpoint>(pair: Pair<T>, factor: f64) -> Pair<T> {
    pair.expand(factor)
}

/// Limit the extent to `max_extent`.
#[inline]
pub fn clamp_max<T: Endpoint>(pair: Pair<T>, max_extent: f64) -> Pair<T> {
    pair.clamp_max(max_extent)
}

/// Raise the extent to at least `min_extent`.
#[inline]
pub fn clamp_min<T: Endpoint>(pair: Pair<T>, min_extent: f64) -> Pair<T> {
    pair.clamp_min(min_extent)
}

/// Same extent, centred on `point`.
#[inline]
pub fn centred_on<T: Endpoint>(pair: Pair<T>, point: T) -> Pair<T> {
    pair.centred_on(point)
}

/// `[max(start, 0), end]`.
#[inline]
pub fn positive_only<T: Endpoint>(pair: Pair<T>) -> Pair<T> {
    pair.positive_only()
}
