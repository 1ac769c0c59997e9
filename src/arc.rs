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

//! The arc module contains the `GreatCircleArc` type, which interpolates
//! positions along the minor great circle arc between two positions.
//!
//! Positions are converted to points on the unit sphere and interpolated
//! with the spherical linear interpolation weights:
//!
//! A = sin((1 - f) * d) / sin(d), B = sin(f * d) / sin(d)
//!
//! where `d` is the great circle distance between the points and `f` is the
//! interpolation fraction.

use crate::sphere;
use crate::Metres;
use alloc::vec::Vec;
use angle_sc::{Angle, Degrees, Radians, Validate};
use unit_sphere::{great_circle, vector, LatLong, Vector3d};

/// Convert a position to a point on the unit sphere.
#[must_use]
fn to_point(a: &LatLong) -> Vector3d {
    vector::to_point(Angle::from(a.lat()), Angle::from(a.lon()))
}

/// Convert a point on the unit sphere to a position.
#[must_use]
fn to_lat_long(point: &Vector3d) -> LatLong {
    LatLong::new(
        Degrees::from(vector::latitude(point)),
        Degrees::from(vector::longitude(point)),
    )
}

/// The minor arc of a great circle between two positions.
#[derive(Clone, Debug, PartialEq)]
pub struct GreatCircleArc {
    /// The start point on the unit sphere.
    a: Vector3d,
    /// The end point on the unit sphere.
    b: Vector3d,
    /// The great circle distance between the points in radians.
    arc_length: Radians,
    /// The sine of `arc_length`.
    sin_length: f64,
}

impl Validate for GreatCircleArc {
    /// Test whether a `GreatCircleArc` is valid.
    /// Whether 0 < `arc_length` < π, i.e. the interpolation weights are defined.
    fn is_valid(&self) -> bool {
        great_circle::MIN_VALUE <= self.arc_length.0
            && great_circle::MIN_VALUE <= self.sin_length
    }
}

impl GreatCircleArc {
    /// Construct a `GreatCircleArc` between a pair of positions.
    /// Note: if the positions are the same or antipodal the arc is invalid
    /// and every interpolated position is the start position.
    /// * `a`, `b` - the start and end positions.
    #[must_use]
    pub fn between_positions(a: &LatLong, b: &LatLong) -> Self {
        let a = to_point(a);
        let b = to_point(b);
        let arc_length = great_circle::e2gc_distance(vector::distance(&a, &b));
        Self {
            a,
            b,
            arc_length,
            sin_length: libm::sin(arc_length.0),
        }
    }

    /// Accessor for the start point on the unit sphere.
    #[must_use]
    pub const fn a(&self) -> Vector3d {
        self.a
    }

    /// Accessor for the end point on the unit sphere.
    #[must_use]
    pub const fn b(&self) -> Vector3d {
        self.b
    }

    /// Accessor for the great circle distance on the unit sphere in radians.
    #[must_use]
    pub const fn arc_length(&self) -> Radians {
        self.arc_length
    }

    /// The length of the arc in metres on a sphere of the Earth's mean radius.
    #[must_use]
    pub fn length(&self) -> Metres {
        sphere::radians_to_metres(self.arc_length)
    }

    /// Calculate the point on the unit sphere at an interpolation fraction.
    /// * `fraction` - the fraction along the arc, 0.0 at the start and 1.0
    ///   at the end.
    ///
    /// returns the point on the unit sphere at `fraction` along the arc.
    #[must_use]
    pub fn arc_point(&self, fraction: f64) -> Vector3d {
        if self.is_valid() {
            let weight_a = libm::sin((1.0 - fraction) * self.arc_length.0) / self.sin_length;
            let weight_b = libm::sin(fraction * self.arc_length.0) / self.sin_length;
            self.a * weight_a + self.b * weight_b
        } else {
            self.a
        }
    }

    /// Calculate the position at an interpolation fraction.
    /// * `fraction` - the fraction along the arc, 0.0 at the start and 1.0
    ///   at the end.
    ///
    /// returns the `LatLong` at `fraction` along the arc, longitude in (-180, 180].
    #[must_use]
    pub fn lat_long(&self, fraction: f64) -> LatLong {
        to_lat_long(&self.arc_point(fraction))
    }

    /// Interpolate positions at evenly spaced fractions along the arc.
    /// * `npoints` - the number of positions, including the start and end.
    ///
    /// returns `npoints` positions: the first at the start and, if
    /// `npoints` > 1, the last at the end.
    ///
    /// # Examples
    /// ```
    /// use great_circle_arc::{Degrees, GreatCircleArc, LatLong};
    /// use angle_sc::is_within_tolerance;
    ///
    /// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
    /// let b = LatLong::new(Degrees(0.0), Degrees(90.0));
    /// let arc = GreatCircleArc::between_positions(&a, &b);
    ///
    /// let positions = arc.interpolate(4);
    /// assert_eq!(4, positions.len());
    /// assert!(is_within_tolerance(30.0, positions[1].lon().0, 1e-12));
    /// assert!(is_within_tolerance(60.0, positions[2].lon().0, 1e-12));
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn interpolate(&self, npoints: usize) -> Vec<LatLong> {
        let delta = if npoints > 1 {
            1.0 / (npoints - 1) as f64
        } else {
            0.0
        };
        (0..npoints)
            .map(|i| self.lat_long(delta * i as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_great_circle_arc_along_equator() {
        let a = LatLong::new(Degrees(0.0), Degrees(-40.0));
        let b = LatLong::new(Degrees(0.0), Degrees(50.0));
        let arc = GreatCircleArc::between_positions(&a, &b);
        assert!(arc.is_valid());
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            arc.arc_length().0,
            1e-12
        ));

        let positions = arc.interpolate(10);
        assert_eq!(10, positions.len());
        for (i, position) in positions.iter().enumerate() {
            assert!(is_within_tolerance(0.0, position.lat().0, 1e-12));
            assert!(is_within_tolerance(
                -40.0 + 10.0 * i as f64,
                position.lon().0,
                1e-10
            ));
        }
    }

    #[test]
    fn test_great_circle_arc_along_meridian() {
        let a = LatLong::new(Degrees(-70.0), Degrees(40.0));
        let b = LatLong::new(Degrees(80.0), Degrees(40.0));
        let arc = GreatCircleArc::between_positions(&a, &b);

        let positions = arc.interpolate(16);
        for (i, position) in positions.iter().enumerate() {
            assert!(is_within_tolerance(
                -70.0 + 10.0 * i as f64,
                position.lat().0,
                1e-10
            ));
            assert!(is_within_tolerance(40.0, position.lon().0, 1e-10));
        }
    }

    #[test]
    fn test_great_circle_arc_endpoints() {
        let a = LatLong::new(Degrees(48.0), Degrees(-122.0));
        let b = LatLong::new(Degrees(39.0), Degrees(-77.0));
        let arc = GreatCircleArc::between_positions(&a, &b);

        let positions = arc.interpolate(100);
        assert_eq!(100, positions.len());
        assert!(is_within_tolerance(48.0, positions[0].lat().0, 1e-12));
        assert!(is_within_tolerance(-122.0, positions[0].lon().0, 1e-12));
        assert!(is_within_tolerance(39.0, positions[99].lat().0, 1e-12));
        assert!(is_within_tolerance(-77.0, positions[99].lon().0, 1e-12));

        // The great circle bows north of the straight line between the positions
        assert!(is_within_tolerance(45.705_569_86, positions[50].lat().0, 1e-6));
        assert!(is_within_tolerance(-97.496_886_12, positions[50].lon().0, 1e-6));
    }

    #[test]
    fn test_great_circle_arc_two_points() {
        let a = LatLong::new(Degrees(10.0), Degrees(20.0));
        let b = LatLong::new(Degrees(-30.0), Degrees(60.0));
        let arc = GreatCircleArc::between_positions(&a, &b);

        let positions = arc.interpolate(2);
        assert_eq!(2, positions.len());
        assert!(is_within_tolerance(10.0, positions[0].lat().0, 1e-12));
        assert!(is_within_tolerance(60.0, positions[1].lon().0, 1e-12));
    }

    #[test]
    fn test_great_circle_arc_resampling() {
        let a = LatLong::new(Degrees(51.5), Degrees(-0.1));
        let b = LatLong::new(Degrees(35.7), Degrees(139.7));
        let arc = GreatCircleArc::between_positions(&a, &b);

        // Every 2nd position of 21 samples is a position of 11 samples
        let coarse = arc.interpolate(11);
        let fine = arc.interpolate(21);
        for (i, position) in coarse.iter().enumerate() {
            assert!(is_within_tolerance(
                position.lat().0,
                fine[2 * i].lat().0,
                1e-10
            ));
            assert!(is_within_tolerance(
                position.lon().0,
                fine[2 * i].lon().0,
                1e-10
            ));
        }
    }

    #[test]
    fn test_great_circle_arc_mid_point() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));
        let b = LatLong::new(Degrees(90.0), Degrees(0.0));
        let arc = GreatCircleArc::between_positions(&a, &b);

        let mid = arc.lat_long(0.5);
        assert!(is_within_tolerance(45.0, mid.lat().0, 1e-12));
        assert!(is_within_tolerance(0.0, mid.lon().0, 1e-12));

        let length = arc.length();
        assert!(is_within_tolerance(10_007_557.221, length.0, 1e-3));
    }

    #[test]
    fn test_great_circle_arc_across_antimeridian() {
        let a = LatLong::new(Degrees(0.0), Degrees(170.0));
        let b = LatLong::new(Degrees(0.0), Degrees(-170.0));
        let arc = GreatCircleArc::between_positions(&a, &b);

        let positions = arc.interpolate(5);
        assert!(is_within_tolerance(175.0, positions[1].lon().0, 1e-10));
        assert!(is_within_tolerance(180.0, positions[2].lon().0.abs(), 1e-10));
        assert!(is_within_tolerance(-175.0, positions[3].lon().0, 1e-10));
    }

    #[test]
    fn test_great_circle_arc_invalid() {
        let a = LatLong::new(Degrees(12.0), Degrees(34.0));
        let arc = GreatCircleArc::between_positions(&a, &a);
        assert!(!arc.is_valid());
        assert_eq!(0.0, arc.arc_length().0);

        let position = arc.lat_long(0.5);
        assert!(is_within_tolerance(12.0, position.lat().0, 1e-12));
        assert!(is_within_tolerance(34.0, position.lon().0, 1e-12));

        let arc_clone = arc.clone();
        assert!(arc_clone == arc);
        println!("GreatCircleArc: {:?}", arc);
    }
}
