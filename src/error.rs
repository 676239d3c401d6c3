// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

/// Reasons [`Pair::try_new`](crate::Pair::try_new) rejects its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PairError {
    /// The start comes after the end.
    #[error("inverted pair: start {start} is after end {end}")]
    Inverted { start: f64, end: f64 },

    /// The endpoints cannot be ordered (a NaN scalar).
    #[error("pair endpoints are not comparable")]
    Unordered,
}
