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

//! The sphere module contains functions for projecting positions and
//! converting distances on a spherical model of the Earth.

pub mod earth;

use crate::Metres;
use angle_sc::trig::{cosine_from_sine, UnitNegRange};
use angle_sc::{Angle, Degrees, Radians};
use unit_sphere::LatLong;

/// Convert a distance in metres on the Earth's surface to an arc length
/// on the unit sphere.
/// * `distance` - the distance in metres.
/// # Examples
/// ```
/// use great_circle_arc::Metres;
/// use great_circle_arc::sphere::{earth, metres_to_radians};
///
/// assert_eq!(1.0, metres_to_radians(earth::MEAN_RADIUS).0);
/// ```
#[must_use]
pub fn metres_to_radians(distance: Metres) -> Radians {
    Radians(distance.0 / earth::MEAN_RADIUS.0)
}

/// Convert an arc length on the unit sphere to a distance in metres on the
/// Earth's surface.
/// * `arc_length` - the great circle arc length in radians.
#[must_use]
pub fn radians_to_metres(arc_length: Radians) -> Metres {
    Metres(arc_length.0 * earth::MEAN_RADIUS.0)
}

/// Calculate the position reached by travelling along a great circle.
/// * `a` - the start position.
/// * `distance` - the great circle distance to travel as an `Angle`.
/// * `bearing` - the initial bearing (azimuth) at the start position.
///
/// returns the destination position, longitude in (-180, 180].
#[must_use]
pub fn destination(a: &LatLong, distance: Angle, bearing: Angle) -> LatLong {
    let lat1 = Angle::from(a.lat());
    let lon1 = Angle::from(a.lon());

    let sin_lat2 = UnitNegRange::clamp(
        lat1.sin().0 * distance.cos().0 + lat1.cos().0 * distance.sin().0 * bearing.cos().0,
    );
    let lat2 = Angle::new(sin_lat2, cosine_from_sine(sin_lat2, 1.0));

    let delta_lon = Angle::from_y_x(
        bearing.sin().0 * distance.sin().0 * lat1.cos().0,
        distance.cos().0 - lat1.sin().0 * sin_lat2.0,
    );

    LatLong::new(Degrees::from(lat2), Degrees::from(lon1 + delta_lon))
}

/// Calculate the position reached by travelling a distance in metres
/// along a great circle.
/// * `a` - the start position.
/// * `distance` - the distance to travel in metres.
/// * `bearing` - the initial bearing (azimuth) at the start position.
#[must_use]
pub fn destination_metres(a: &LatLong, distance: Metres, bearing: Angle) -> LatLong {
    destination(a, Angle::from(metres_to_radians(distance)), bearing)
}
