// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The dateline module splits a sequence of positions into runs wherever
//! consecutive positions cross the antimeridian (±180° longitude).
//!
//! The crossing test is adapted from the dateline handling in GDAL's
//! `OGRGeometryFactory`: a pair of consecutive longitudes is a crossing if
//! they are at least `360 - offset` degrees apart and one of them lies
//! within `offset` degrees east of -180° while the other lies within
//! `offset` degrees west of +180°.
//!
//! The test is strictly pairwise, so sparse sampling near the antimeridian
//! may miss a crossing that denser sampling would detect.

use alloc::vec::Vec;
use unit_sphere::LatLong;

/// The default dateline offset in degrees.
pub const DEFAULT_OFFSET: f64 = 10.0;

/// The tolerance for interpolated longitudes at the `diff_space` boundary, in degrees.
const LONGITUDE_TOLERANCE: f64 = 1e-9;

/// The longitude thresholds derived from a dateline offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatelineThreshold {
    /// The longitude east of which a position is near +180°.
    left_border: f64,
    /// The longitude west of which a position is near -180°.
    right_border: f64,
    /// The longitude difference at or above which a pair may be a crossing.
    diff_space: f64,
}

impl Default for DatelineThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET)
    }
}

impl DatelineThreshold {
    /// Construct a `DatelineThreshold`.
    /// * `offset` - the dateline offset in degrees, larger values detect
    ///   crossings between more widely spaced positions.
    #[must_use]
    pub fn new(offset: f64) -> Self {
        Self {
            left_border: 180.0 - offset,
            right_border: offset - 180.0,
            diff_space: 360.0 - offset,
        }
    }

    /// The longitude difference at or above which a pair may be a crossing.
    #[must_use]
    pub const fn diff_space(&self) -> f64 {
        self.diff_space
    }

    /// Test whether a pair of consecutive longitudes crosses the antimeridian.
    /// * `prev`, `next` - the longitudes in degrees.
    ///
    /// # Examples
    /// ```
    /// use great_circle_arc::dateline::DatelineThreshold;
    ///
    /// let threshold = DatelineThreshold::default();
    /// assert!(threshold.is_crossing(179.0, -179.0));
    /// assert!(!threshold.is_crossing(10.0, 20.0));
    /// ```
    #[must_use]
    pub fn is_crossing(&self, prev: f64, next: f64) -> bool {
        libm::fabs(next - prev) + LONGITUDE_TOLERANCE >= self.diff_space
            && ((next > self.left_border && prev < self.right_border)
                || (prev > self.left_border && next < self.right_border))
    }
}

/// Split a sequence of positions into runs at antimeridian crossings.
/// * `positions` - the positions, in order.
/// * `threshold` - the `DatelineThreshold` to detect crossings with.
///
/// returns the runs of positions. If no crossing is detected there is a
/// single run equal to `positions`, otherwise a new run starts at the
/// second position of each crossing pair. No position is added or removed.
#[must_use]
pub fn split_at_antimeridian(
    positions: &[LatLong],
    threshold: &DatelineThreshold,
) -> Vec<Vec<LatLong>> {
    let mut runs: Vec<Vec<LatLong>> = Vec::new();
    let mut run: Vec<LatLong> = Vec::with_capacity(positions.len());
    for position in positions {
        if let Some(prev) = run.last() {
            if threshold.is_crossing(prev.lon().0, position.lon().0) {
                log::trace!(
                    "antimeridian crossing between longitudes {} and {}",
                    prev.lon().0,
                    position.lon().0
                );
                runs.push(core::mem::take(&mut run));
            }
        }
        run.push(*position);
    }

    if !run.is_empty() {
        runs.push(run);
    }
    runs
}
