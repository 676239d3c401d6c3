// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pair value type and range arithmetic.
//!
//! This module provides:
//! - [`Pair<T>`]: an ordered `[start, end]` over any [`Endpoint`]
//! - [`typed_pair`]: rebuild a pair of a given endpoint type from two scalars
//!
//! No operation validates `start <= end`.  An inverted pair has a negative
//! extent and every operation simply carries that sign through.  Use
//! [`Pair::try_new`] when the caller wants the ordering checked.

use super::{Endpoint, PairError, Time, TimeInstant, TimeScale};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// An ordered pair of endpoints denoting the range `[start, end)`.
///
/// Endpoints are reduced to `f64` scalars for arithmetic (see
/// [`Endpoint`]); operations that produce a new pair rebuild it in the
/// endpoint type `T`, so instants stay instants.
///
/// # Examples
///
/// ```
/// use tempair::Pair;
///
/// let pair = Pair::new(0.0, 100.0);
/// assert_eq!(pair.extent(), 100.0);
/// assert_eq!(pair.expand(0.5), Pair::new(25.0, 75.0));
/// assert!(pair.contains(0.0));
/// assert!(!pair.contains(100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair<T: Endpoint> {
    pub start: T,
    pub end: T,
}

impl<T: Endpoint> Pair<T> {
    /// Creates a pair without checking the endpoint order.
    pub fn new(start: T, end: T) -> Self {
        Pair { start, end }
    }

    /// Creates a pair, rejecting `start > end` and incomparable endpoints.
    ///
    /// ```
    /// use tempair::{Pair, PairError};
    ///
    /// assert!(Pair::try_new(1.0, 2.0).is_ok());
    /// assert_eq!(
    ///     Pair::try_new(2.0, 1.0),
    ///     Err(PairError::Inverted { start: 2.0, end: 1.0 })
    /// );
    /// ```
    pub fn try_new(start: T, end: T) -> Result<Self, PairError> {
        match start.partial_cmp(&end) {
            Some(Ordering::Greater) => {
                debug!(?start, ?end, "rejecting inverted pair");
                Err(PairError::Inverted {
                    start: start.to_scalar(),
                    end: end.to_scalar(),
                })
            }
            Some(_) => Ok(Self::new(start, end)),
            None => {
                debug!(?start, ?end, "rejecting pair with incomparable endpoints");
                Err(PairError::Unordered)
            }
        }
    }

    /// Builds a pair of `T` from two raw scalars.
    ///
    /// # Panics
    ///
    /// Panics if `T` cannot represent either scalar (see [`Endpoint::from_scalar`]).
    pub fn from_scalars(start: f64, end: f64) -> Self {
        trace!(start, end, "rebuilding pair from scalars");
        Self::new(T::from_scalar(start), T::from_scalar(end))
    }

    /// `true` when `start <= end`.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Signed length `end - start`, as a scalar.
    pub fn extent(&self) -> f64 {
        self.end.scalar_since(&self.start)
    }

    /// `start + proportion * extent`, as a scalar.
    ///
    /// `proportion` is not bounded: values outside `[0, 1]` extrapolate.
    pub fn interpolate(&self, proportion: f64) -> f64 {
        self.start.to_scalar() + proportion * self.extent()
    }

    /// Same as [`Pair::interpolate`], rebuilt as an endpoint.
    pub fn point_at(&self, proportion: f64) -> T {
        self.start.offset(proportion * self.extent())
    }

    /// Arithmetic midpoint, as a scalar.
    pub fn mid(&self) -> f64 {
        // (start + end) / 2 overflows near f64::MAX
        self.extent() / 2.0 + self.start.to_scalar()
    }

    /// Midpoint rebuilt as an endpoint.
    pub fn midpoint(&self) -> T {
        self.start.offset(self.extent() / 2.0)
    }

    /// Half-open containment `start <= value < end`.
    ///
    /// A value equal to `start` is always contained, so a zero-extent pair
    /// contains its single point.
    pub fn contains(&self, value: T) -> bool {
        (value >= self.start && value < self.end) || value == self.start
    }

    /// Whether the two pairs overlap as half-open ranges.
    ///
    /// Pairs that merely touch do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        overlap(self.start, self.end, other.start, other.end)
    }

    /// Whether this pair overlaps the range `[start, end)`.
    pub fn overlaps_bounds(&self, start: T, end: T) -> bool {
        overlap(self.start, self.end, start, end)
    }

    /// Returns a pair whose extent is `factor` times this one, around the
    /// same midpoint.
    ///
    /// `factor < 1` shrinks, `factor > 1` grows, `factor == 1` is the identity.
    pub fn expand(&self, factor: f64) -> Self {
        let extent = self.extent();
        let new_extent = extent * factor;
        let delta = (new_extent - extent) / 2.0;

        self.shifted(-delta, delta)
    }

    /// Shrinks the pair around its midpoint so its extent is at most
    /// `max_extent`.
    ///
    /// A pair whose extent is already `<= max_extent` is returned unchanged.
    pub fn clamp_max(&self, max_extent: f64) -> Self {
        let extent = self.extent();
        if extent > max_extent {
            trace!(extent, max_extent, "clamping pair to maximum extent");
            self.resized(max_extent)
        } else {
            *self
        }
    }

    /// Grows the pair around its midpoint so its extent is at least
    /// `min_extent`.
    ///
    /// A pair whose extent is already `>= min_extent` is returned unchanged.
    pub fn clamp_min(&self, min_extent: f64) -> Self {
        let extent = self.extent();
        if extent < min_extent {
            trace!(extent, min_extent, "clamping pair to minimum extent");
            self.resized(min_extent)
        } else {
            *self
        }
    }

    /// Same extent, moved so its midpoint is `point`.
    pub fn centred_on(&self, point: T) -> Self {
        let shift = point.scalar_since(&self.start) - self.extent() / 2.0;

        self.shifted(shift, shift)
    }

    /// Raises a negative `start` to zero.
    ///
    /// Only the start moves.  If `end` is itself negative the result is
    /// inverted.  For time endpoints zero is the epoch of the scalar
    /// (1970-01-01 for `DateTime<Utc>`).
    pub fn positive_only(&self) -> Self {
        if self.start.to_scalar() < 0.0 {
            Self::new(T::from_scalar(0.0), self.end)
        } else {
            *self
        }
    }

    fn resized(&self, extent: f64) -> Self {
        let half = self.extent() / 2.0;
        let r = extent / 2.0;

        self.shifted(half - r, r - half)
    }

    /// Moves each endpoint by its own scalar delta, keeping the endpoint type.
    ///
    /// Every operation that derives new bounds from an existing pair goes
    /// through here.
    fn shifted(&self, start_delta: f64, end_delta: f64) -> Self {
        trace!(start_delta, end_delta, "shifting pair endpoints");
        Self::new(self.start.offset(start_delta), self.end.offset(end_delta))
    }
}

impl<T: TimeInstant> Pair<T> {
    /// Duration of the pair in the instant's native duration type.
    ///
    /// ```
    /// use tempair::{Pair, Time, MJD};
    /// use qtty::Days;
    ///
    /// let pair = Pair::new(Time::<MJD>::new(59_000.0), Time::<MJD>::new(59_001.5));
    /// assert_eq!(pair.duration(), Days::new(1.5));
    /// ```
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Converts both endpoints to another instant type through UTC.
    ///
    /// Returns `None` if either endpoint has no UTC representation.
    pub fn convert<U: TimeInstant>(&self) -> Option<Pair<U>> {
        let start = TimeInstant::to_utc(&self.start)?;
        let end = TimeInstant::to_utc(&self.end)?;
        Some(Pair::new(U::from_utc(start), U::from_utc(end)))
    }
}

impl<S: TimeScale> Pair<Time<S>> {
    /// Converts this pair to another time scale.
    #[inline]
    pub fn to<U: TimeScale>(&self) -> Pair<Time<U>> {
        Pair::new(self.start.to::<U>(), self.end.to::<U>())
    }
}

impl<T: Endpoint> From<[T; 2]> for Pair<T> {
    fn from([start, end]: [T; 2]) -> Self {
        Pair::new(start, end)
    }
}

impl<T: Endpoint> From<(T, T)> for Pair<T> {
    fn from((start, end): (T, T)) -> Self {
        Pair::new(start, end)
    }
}

impl<T: Endpoint> From<Pair<T>> for [T; 2] {
    fn from(pair: Pair<T>) -> Self {
        [pair.start, pair.end]
    }
}

impl<T: Endpoint> From<Pair<T>> for (T, T) {
    fn from(pair: Pair<T>) -> Self {
        (pair.start, pair.end)
    }
}

/// Builds a pair from two raw scalars, in the endpoint type of `sample`.
///
/// `sample` only fixes the target type; its value is not used.
#[inline]
pub fn typed_pair<T: Endpoint>(start: f64, end: f64, _sample: &T) -> Pair<T> {
    Pair::from_scalars(start, end)
}

/// Half-open overlap test for `[r1start, r1end)` and `[r2start, r2end)`.
#[inline]
pub fn overlap<T: PartialOrd>(r1start: T, r1end: T, r2start: T, r2end: T) -> bool {
    r2start < r1end && r2end > r1start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FAR_FUTURE, JD, MJD};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use qtty::Days;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn millis(duration: Duration) -> f64 {
        duration.num_milliseconds() as f64
    }

    // ── extent / interpolation ────────────────────────────────────────

    #[test]
    fn test_extent_numbers() {
        assert_eq!(Pair::new(5.0, 10.0).extent(), 5.0);
        assert_eq!(Pair::new(-20.0, 20.0).extent(), 40.0);
        assert_eq!(Pair::new(10.0, 5.0).extent(), -5.0);
    }

    #[test]
    fn test_extent_dates() {
        let pair = Pair::new(
            DateTime::from_timestamp_millis(1_000).unwrap(),
            DateTime::from_timestamp_millis(5_000).unwrap(),
        );
        assert_eq!(pair.extent(), 4_000.0);
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(Pair::new(100.0, 150.0).interpolate(0.5), 125.0);
        assert_eq!(Pair::new(100.0, 200.0).interpolate(0.75), 175.0);
        assert_eq!(Pair::new(100.0, 200.0).interpolate(1.5), 250.0);
        assert_eq!(Pair::new(100.0, 200.0).interpolate(-1.0), 0.0);
    }

    #[test]
    fn test_point_at_dates() {
        let pair = Pair::new(utc(2015, 4, 22, 10, 0), utc(2015, 4, 22, 12, 0));
        assert_eq!(pair.point_at(0.25), utc(2015, 4, 22, 10, 30));
    }

    #[test]
    fn test_mid() {
        assert_eq!(Pair::new(2.0, 4.0).mid(), 3.0);
        assert_eq!(Pair::new(-10.0, 30.0).mid(), 10.0);
        let big = Pair::new(f64::MAX / 2.0, f64::MAX);
        assert!(big.mid().is_finite());
        let pair = Pair::new(Time::<MJD>::new(10.0), Time::<MJD>::new(14.0));
        assert_eq!(pair.midpoint(), Time::<MJD>::new(12.0));
    }

    // ── containment ───────────────────────────────────────────────────

    #[test]
    fn test_contains_numbers() {
        let pair = Pair::new(10.0, 20.0);
        assert!(pair.contains(15.0));
        assert!(pair.contains(10.0));
        assert!(!pair.contains(20.0));
        assert!(!pair.contains(9.0));
        assert!(!pair.contains(21.0));
    }

    #[test]
    fn test_contains_zero_extent() {
        assert!(Pair::new(10.0, 10.0).contains(10.0));
        assert!(!Pair::new(10.0, 10.0).contains(10.5));
        let day = utc(2015, 1, 10, 0, 0);
        assert!(Pair::new(day, day).contains(day));
    }

    #[test]
    fn test_contains_dates() {
        let pair = Pair::new(utc(2015, 1, 10, 0, 0), utc(2015, 1, 20, 0, 0));
        assert!(pair.contains(utc(2015, 1, 15, 0, 0)));
        assert!(pair.contains(utc(2015, 1, 10, 0, 0)));
        assert!(!pair.contains(utc(2015, 1, 20, 0, 0)));
        assert!(!pair.contains(utc(2015, 1, 9, 0, 0)));
        assert!(!pair.contains(utc(2015, 1, 21, 0, 0)));
    }

    // ── overlap ───────────────────────────────────────────────────────

    #[test]
    fn test_overlap_truth_table() {
        let base = Pair::new(2.0, 10.0);
        let cases = [
            ((6.0, 7.0), true),
            ((0.0, 3.0), true),
            ((9.0, 11.0), true),
            ((0.0, 11.0), true),
            ((0.0, 2.0), false),
            ((10.0, 11.0), false),
            ((0.0, 1.0), false),
            ((11.0, 12.0), false),
        ];
        for (other, expected) in cases {
            assert_eq!(
                base.overlaps(&Pair::from(other)),
                expected,
                "[2, 10] vs {:?}",
                other
            );
            assert_eq!(base.overlaps_bounds(other.0, other.1), expected);
        }
    }

    #[test]
    fn test_overlap_dates() {
        let base = Pair::new(utc(2015, 1, 2, 0, 0), utc(2015, 1, 10, 0, 0));
        assert!(base.overlaps(&Pair::new(utc(2015, 1, 6, 0, 0), utc(2015, 1, 7, 0, 0))));
        assert!(base.overlaps(&Pair::new(utc(2015, 1, 1, 0, 0), utc(2015, 1, 3, 0, 0))));
        assert!(!base.overlaps(&Pair::new(utc(2015, 1, 1, 0, 0), utc(2015, 1, 2, 0, 0))));
        assert!(!base.overlaps(&Pair::new(utc(2015, 1, 10, 0, 0), utc(2015, 1, 11, 0, 0))));
    }

    #[test]
    fn test_overlap_far_future() {
        let base = Pair::new(utc(2015, 1, 2, 0, 0), utc(2015, 1, 10, 0, 0));
        assert!(base.overlaps(&Pair::new(utc(2015, 1, 8, 0, 0), FAR_FUTURE)));

        let open = Pair::new(utc(2015, 1, 2, 0, 0), FAR_FUTURE);
        assert!(open.overlaps(&Pair::new(utc(2015, 1, 8, 0, 0), utc(2015, 1, 10, 0, 0))));

        let numeric = Pair::new(0.0, f64::INFINITY);
        assert!(numeric.overlaps_bounds(1e300, 1e301));
    }

    #[test]
    fn test_far_future_pair_survives_reshaping() {
        let open = Pair::new(utc(2015, 1, 2, 0, 0), FAR_FUTURE);
        assert_eq!(open.expand(1.0), open);
        assert_eq!(open.clamp_min(millis(Duration::hours(4))), open);

        let capped = open.clamp_max(millis(Duration::minutes(20)));
        assert!((capped.extent() - millis(Duration::minutes(20))).abs() < 1_000.0);
        assert!(capped.end < FAR_FUTURE);
    }

    // ── expansion ─────────────────────────────────────────────────────

    #[test]
    fn test_expand_numbers() {
        let grown = Pair::<f64>::new(0.0, 100.0).expand(1.1);
        assert!((grown.start - -5.0).abs() < 1e-9, "start was {}", grown.start);
        assert!((grown.end - 105.0).abs() < 1e-9, "end was {}", grown.end);
        assert_eq!(Pair::new(0.0, 100.0).expand(0.5), Pair::new(25.0, 75.0));
        assert_eq!(Pair::new(3.0, 7.0).expand(1.0), Pair::new(3.0, 7.0));
    }

    #[test]
    fn test_expand_dates() {
        let five_hours = Pair::new(utc(2015, 4, 22, 10, 0), utc(2015, 4, 22, 15, 0));
        assert_eq!(
            five_hours.expand(2.0),
            Pair::new(utc(2015, 4, 22, 7, 30), utc(2015, 4, 22, 17, 30))
        );

        let two_hours = Pair::new(utc(2015, 4, 22, 10, 0), utc(2015, 4, 22, 12, 0));
        assert_eq!(
            two_hours.expand(0.25),
            Pair::new(utc(2015, 4, 22, 10, 45), utc(2015, 4, 22, 11, 15))
        );
    }

    #[test]
    fn test_reshaping_keeps_sub_millisecond_instants() {
        let pair = Pair::new(
            DateTime::from_timestamp(1_429_696_800, 123_456_789).unwrap(),
            DateTime::from_timestamp(1_429_704_000, 987_654_321).unwrap(),
        );
        assert_eq!(pair.expand(1.0), pair);
        assert_eq!(pair.centred_on(pair.midpoint()), pair);
        assert_eq!(
            pair.midpoint(),
            DateTime::from_timestamp(1_429_700_400, 555_555_555).unwrap()
        );
        assert_eq!(pair.point_at(0.0), pair.start);
    }

    #[test]
    fn test_expand_time_scale() {
        let pair = Pair::new(Time::<MJD>::new(57_134.0), Time::<MJD>::new(57_134.5));
        let expanded = pair.expand(2.0);
        assert_eq!(expanded.start, Time::<MJD>::new(57_133.75));
        assert_eq!(expanded.end, Time::<MJD>::new(57_134.75));
        assert_eq!(expanded.duration(), Days::new(1.0));
    }

    // ── clamping ──────────────────────────────────────────────────────

    #[test]
    fn test_clamp_max_numbers() {
        assert_eq!(Pair::new(0.0, 10.0).clamp_max(5.0), Pair::new(2.5, 7.5));
        assert_eq!(Pair::new(5.0, 10.0).clamp_max(50.0), Pair::new(5.0, 10.0));
        assert_eq!(Pair::new(5.0, 10.0).clamp_max(5.0), Pair::new(5.0, 10.0));
    }

    #[test]
    fn test_clamp_min_numbers() {
        assert_eq!(Pair::new(0.0, 10.0).clamp_min(12.0), Pair::new(-1.0, 11.0));
        assert_eq!(Pair::new(5.0, 10.0).clamp_min(2.0), Pair::new(5.0, 10.0));
        assert_eq!(Pair::new(5.0, 10.0).clamp_min(5.0), Pair::new(5.0, 10.0));
    }

    #[test]
    fn test_clamp_max_dates() {
        let pair = Pair::new(utc(2015, 4, 22, 10, 0), utc(2015, 4, 22, 12, 0));
        assert_eq!(
            pair.clamp_max(millis(Duration::minutes(20))),
            Pair::new(utc(2015, 4, 22, 10, 50), utc(2015, 4, 22, 11, 10))
        );
        assert_eq!(pair.clamp_max(millis(Duration::days(365 * 20))), pair);
        assert_eq!(pair.clamp_max(millis(Duration::hours(2))), pair);
    }

    #[test]
    fn test_clamp_min_dates() {
        let pair = Pair::new(utc(2015, 4, 22, 10, 0), utc(2015, 4, 22, 12, 0));
        assert_eq!(
            pair.clamp_min(millis(Duration::hours(4))),
            Pair::new(utc(2015, 4, 22, 9, 0), utc(2015, 4, 22, 13, 0))
        );
        assert_eq!(pair.clamp_min(millis(Duration::minutes(20))), pair);
        assert_eq!(pair.clamp_min(millis(Duration::hours(2))), pair);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let pair = Pair::new(-3.0, 17.0);
        let once = pair.clamp_max(4.0);
        assert_eq!(once.clamp_max(4.0), once);
        let once = pair.clamp_min(40.0);
        assert_eq!(once.clamp_min(40.0), once);
    }

    // ── recentering / positivity ──────────────────────────────────────

    #[test]
    fn test_centred_on_numbers() {
        assert_eq!(Pair::new(2.0, 4.0).centred_on(6.0), Pair::new(5.0, 7.0));
        assert_eq!(Pair::new(2.0, 4.0).centred_on(3.0), Pair::new(2.0, 4.0));
    }

    #[test]
    fn test_centred_on_dates() {
        let pair = Pair::new(utc(2015, 1, 1, 0, 0), utc(2015, 1, 3, 0, 0));
        assert_eq!(
            pair.centred_on(utc(2015, 1, 5, 0, 0)),
            Pair::new(utc(2015, 1, 4, 0, 0), utc(2015, 1, 6, 0, 0))
        );
        assert_eq!(pair.centred_on(utc(2015, 1, 2, 0, 0)), pair);
    }

    #[test]
    fn test_positive_only() {
        assert_eq!(Pair::new(-50.0, 100.0).positive_only(), Pair::new(0.0, 100.0));
        assert_eq!(Pair::new(5.0, 100.0).positive_only(), Pair::new(5.0, 100.0));
        // only the start is clamped
        let inverted = Pair::new(-50.0, -10.0).positive_only();
        assert_eq!(inverted, Pair::new(0.0, -10.0));
        assert!(!inverted.is_ordered());
    }

    // ── construction / conversion ─────────────────────────────────────

    #[test]
    fn test_try_new() {
        assert_eq!(Pair::try_new(1.0, 1.0), Ok(Pair::new(1.0, 1.0)));
        assert_eq!(
            Pair::try_new(3.0, 1.0),
            Err(PairError::Inverted {
                start: 3.0,
                end: 1.0
            })
        );
        assert_eq!(Pair::try_new(f64::NAN, 1.0), Err(PairError::Unordered));
    }

    #[test]
    fn test_array_and_tuple_conversions() {
        let pair: Pair<f64> = [1.0, 2.0].into();
        assert_eq!(pair, Pair::new(1.0, 2.0));
        let arr: [f64; 2] = pair.into();
        assert_eq!(arr, [1.0, 2.0]);
        let tuple: (f64, f64) = Pair::from((3.0, 4.0)).into();
        assert_eq!(tuple, (3.0, 4.0));
    }

    #[test]
    fn test_typed_pair_follows_sample_type() {
        let sample = utc(2015, 1, 1, 0, 0);
        let pair = typed_pair(0.0, 86_400_000.0, &sample);
        assert_eq!(pair.start, utc(1970, 1, 1, 0, 0));
        assert_eq!(pair.end, utc(1970, 1, 2, 0, 0));

        let pair = typed_pair(1.0, 2.0, &0.0f32);
        assert_eq!(pair, Pair::new(1.0f32, 2.0f32));
    }

    #[test]
    fn test_scale_and_utc_conversion() {
        let jd = Pair::new(Time::<JD>::new(2_451_545.0), Time::<JD>::new(2_451_546.0));
        let mjd = jd.to::<MJD>();
        assert!((mjd.start.value() - 51_544.5).abs() < 1e-9);
        assert!((mjd.end.value() - 51_545.5).abs() < 1e-9);

        let dates = Pair::new(utc(2015, 4, 22, 0, 0), utc(2015, 4, 23, 0, 0));
        let as_mjd = dates.convert::<Time<MJD>>().expect("representable");
        assert!((as_mjd.duration() - Days::new(1.0)).abs() < Days::new(1e-9));
        let back = as_mjd.convert::<DateTime<Utc>>().expect("representable");
        assert!((back.start - dates.start).num_milliseconds().abs() <= 1);
        assert!((back.end - dates.end).num_milliseconds().abs() <= 1);
    }
}
