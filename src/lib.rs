// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Range arithmetic over numeric and time-instant pairs.
//!
//! A [`Pair<T>`] is an ordered `[start, end]` whose endpoints are numbers or
//! instants.  All operations are pure and return new pairs; operations that
//! compute new bounds rebuild them in the input's endpoint type, so a pair of
//! instants stays a pair of instants.
//!
//! # Core types
//!
//! - [`Pair<T>`]: the range value, with every operation as a method.
//! - [`Endpoint`]: scalar conversion both ways; implemented for `f64`,
//!   `f32`, [`Time<S>`] and `chrono::DateTime<Utc>`.
//! - [`TimeInstant`]: instants with a native duration and UTC conversion.
//! - [`Time<S>`]: instant on a [`TimeScale`] ([`JD`], [`MJD`], [`UnixTime`]).
//! - [`PairError`]: returned by [`Pair::try_new`].
//!
//! # Operations
//!
//! | Function | Result |
//! |----------|--------|
//! | [`extent`] | `end - start` |
//! | [`interpolate`] | `start + p * extent` |
//! | [`mid`] | `extent / 2 + start` |
//! | [`contains`] | `start <= v < end`, or `v == start` |
//! | [`overlap`], [`pair_overlap`], [`pair_overlap_bounds`] | half-open overlap |
//! | [`expand`] | extent × factor around the midpoint |
//! | [`clamp_max`], [`clamp_min`] | extent limited around the midpoint |
//! | [`centred_on`] | same extent around a new midpoint |
//! | [`positive_only`] | `[max(start, 0), end]` |
//! | [`typed_pair`] | pair rebuilt from scalars in a sample's type |
//!
//! # Scalars
//!
//! Extents and bounds passed to [`clamp_max`] / [`clamp_min`] are in the
//! endpoint's scalar unit: the number itself, days for [`Time<S>`], and
//! milliseconds for `DateTime<Utc>`.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempair::Pair;
//!
//! let pair = Pair::new(
//!     Utc.with_ymd_and_hms(2015, 4, 22, 10, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2015, 4, 22, 12, 0, 0).unwrap(),
//! );
//! let twenty_minutes = 20.0 * 60.0 * 1_000.0;
//! let clamped = pair.clamp_max(twenty_minutes);
//! assert_eq!(clamped.start, Utc.with_ymd_and_hms(2015, 4, 22, 10, 50, 0).unwrap());
//! assert_eq!(clamped.end, Utc.with_ymd_and_hms(2015, 4, 22, 11, 10, 0).unwrap());
//! ```
//!
//! # Validation
//!
//! Operations never check `start <= end`; an inverted pair yields a negative
//! extent and the arithmetic carries on.  [`Pair::try_new`] is available when
//! the ordering should be enforced.

mod endpoint;
mod error;
pub(crate) mod instant;
mod ops;
mod pair;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use endpoint::{Endpoint, TimeInstant};
pub use error::PairError;
pub use instant::{Time, TimeScale};
pub use ops::{
    centred_on, clamp_max, clamp_min, contains, expand, extent, interpolate, mid, overlap,
    pair_overlap, pair_overlap_bounds, positive_only, typed_pair,
};
pub use pair::Pair;
pub use scales::{UnixTime, JD, MJD};

/// Latest representable UTC instant, usable as an open-ended pair end.
pub const FAR_FUTURE: chrono::DateTime<chrono::Utc> = chrono::DateTime::<chrono::Utc>::MAX_UTC;

/// Modified Julian Date instant.
pub type ModifiedJulianDate = Time<MJD>;

/// Julian Date instant.
pub type JulianDate = Time<JD>;
