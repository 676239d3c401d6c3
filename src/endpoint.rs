// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Endpoint capability shared by numeric and time-instant pairs.
//!
//! Pair arithmetic happens on `f64` scalars.  An [`Endpoint`] knows how to
//! reduce itself to such a scalar and how to rebuild a value of its own type
//! from one, which is what lets [`Pair`](crate::Pair) operations return
//! instants when they were given instants.
//!
//! | Endpoint | Scalar |
//! |----------|--------|
//! | `f64` | the value itself |
//! | `f32` | the value widened to `f64` |
//! | [`Time<S>`] | days since the epoch of `S` |
//! | `DateTime<Utc>` | milliseconds since the Unix epoch |
//!
//! Operations that move an existing endpoint go through [`Endpoint::offset`]
//! rather than a scalar round trip.  For `DateTime<Utc>` the offset is added
//! as a whole number of nanoseconds, so a zero offset is exact and instants
//! keep their sub-millisecond part.

use super::{Time, TimeScale};
use chrono::{DateTime, Utc};
use qtty::Days;

/// A value usable as a pair bound.
pub trait Endpoint: Copy + PartialOrd + std::fmt::Debug {
    /// Reduce this endpoint to its scalar.
    fn to_scalar(&self) -> f64;

    /// Rebuild an endpoint from a scalar.
    ///
    /// # Panics
    ///
    /// Implementations with a bounded range (`DateTime<Utc>`) panic when the
    /// scalar cannot be represented. Use [`Endpoint::try_from_scalar`] to
    /// check first.
    fn from_scalar(value: f64) -> Self;

    /// Rebuild an endpoint from a scalar, or `None` if it is not representable.
    #[inline]
    fn try_from_scalar(value: f64) -> Option<Self> {
        Some(Self::from_scalar(value))
    }

    /// Scalar distance `self - origin`.
    #[inline]
    fn scalar_since(&self, origin: &Self) -> f64 {
        self.to_scalar() - origin.to_scalar()
    }

    /// This endpoint moved by `delta` scalar units.
    ///
    /// A zero `delta` returns the endpoint unchanged.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Endpoint::from_scalar`].
    #[inline]
    fn offset(&self, delta: f64) -> Self {
        Self::from_scalar(self.to_scalar() + delta)
    }
}

impl Endpoint for f64 {
    #[inline]
    fn to_scalar(&self) -> f64 {
        *self
    }

    #[inline]
    fn from_scalar(value: f64) -> Self {
        value
    }
}

impl Endpoint for f32 {
    #[inline]
    fn to_scalar(&self) -> f64 {
        f64::from(*self)
    }

    #[inline]
    fn from_scalar(value: f64) -> Self {
        value as f32
    }
}

impl<S: TimeScale> Endpoint for Time<S> {
    #[inline]
    fn to_scalar(&self) -> f64 {
        self.value()
    }

    #[inline]
    fn from_scalar(value: f64) -> Self {
        Time::new(value)
    }
}

const MILLIS_PER_SECOND: f64 = 1_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Millisecond scalar of a chrono duration, sub-millisecond part as fraction.
fn duration_millis(duration: chrono::Duration) -> f64 {
    let sub_milli = duration.subsec_nanos() % 1_000_000;
    duration.num_milliseconds() as f64 + sub_milli as f64 / NANOS_PER_MILLI
}

/// `datetime + millis`, applied as a whole number of nanoseconds.
fn shift_millis(datetime: &DateTime<Utc>, millis: f64) -> Option<DateTime<Utc>> {
    if millis == 0.0 {
        return Some(*datetime);
    }
    let nanos = (millis * NANOS_PER_MILLI).round();
    let step = if nanos.is_finite() && nanos.abs() < i64::MAX as f64 {
        chrono::Duration::nanoseconds(nanos as i64)
    } else {
        let whole = millis.round();
        if !whole.is_finite() || whole.abs() >= i64::MAX as f64 {
            return None;
        }
        chrono::Duration::try_milliseconds(whole as i64)?
    };
    datetime.checked_add_signed(step)
}

impl Endpoint for DateTime<Utc> {
    fn to_scalar(&self) -> f64 {
        let sub_milli = self.timestamp_subsec_nanos() % 1_000_000;
        self.timestamp_millis() as f64 + sub_milli as f64 / NANOS_PER_MILLI
    }

    fn from_scalar(value: f64) -> Self {
        Self::try_from_scalar(value)
            .expect("scalar out of chrono::DateTime<Utc> representable range")
    }

    fn try_from_scalar(millis: f64) -> Option<Self> {
        if !millis.is_finite() {
            return None;
        }
        let mut secs = (millis / MILLIS_PER_SECOND).floor();
        let mut nanos = ((millis - secs * MILLIS_PER_SECOND) * NANOS_PER_MILLI).round();
        if nanos >= 1e9 {
            secs += 1.0;
            nanos -= 1e9;
        }
        DateTime::<Utc>::from_timestamp(secs as i64, nanos as u32).or_else(|| {
            // the bounds' scalars round past the bounds themselves
            if millis == DateTime::<Utc>::MAX_UTC.to_scalar() {
                Some(DateTime::<Utc>::MAX_UTC)
            } else if millis == DateTime::<Utc>::MIN_UTC.to_scalar() {
                Some(DateTime::<Utc>::MIN_UTC)
            } else {
                None
            }
        })
    }

    fn scalar_since(&self, origin: &Self) -> f64 {
        duration_millis(*self - *origin)
    }

    fn offset(&self, delta: f64) -> Self {
        shift_millis(self, delta).expect("offset out of chrono::DateTime<Utc> representable range")
    }
}

/// Time instants that also expose a native duration and UTC conversion.
pub trait TimeInstant: Endpoint {
    /// The duration type returned by [`TimeInstant::difference`].
    type Duration;

    /// Convert this instant to UTC.
    fn to_utc(&self) -> Option<DateTime<Utc>>;

    /// Create an instant from UTC.
    fn from_utc(datetime: DateTime<Utc>) -> Self;

    /// `self - other` in the native duration type.
    fn difference(&self, other: &Self) -> Self::Duration;
}

impl<S: TimeScale> TimeInstant for Time<S> {
    type Duration = Days;

    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Time::to_utc(self)
    }

    #[inline]
    fn from_utc(datetime: DateTime<Utc>) -> Self {
        Time::from_utc(datetime)
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }
}

impl TimeInstant for DateTime<Utc> {
    type Duration = chrono::Duration;

    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }

    fn from_utc(datetime: DateTime<Utc>) -> Self {
        datetime
    }

    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }
}
