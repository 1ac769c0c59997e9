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

//! great-circle-arc
//!
//! A library for generating the [great circle](https://en.wikipedia.org/wiki/Great_circle)
//! path between two positions on a spherical Earth as a
//! [GeoJSON](https://datatracker.ietf.org/doc/html/rfc7946) line.
//!
//! ## Great circle arcs
//!
//! The shortest path between two points on the surface of a sphere is the
//! minor arc of the great circle through them. This library converts the
//! positions to points on a unit sphere and interpolates `npoints` positions
//! at evenly spaced fractions along the arc, see `GreatCircleArc`.
//!
//! ## The antimeridian
//!
//! A line whose longitude jumps from +180° to -180° (or vice versa) is drawn
//! the "wrong way" around the world by most GIS software. So the interpolated
//! positions are split into separate runs wherever a pair of consecutive
//! positions crosses the antimeridian, see the `dateline` module.
//!
//! The result is a GeoJSON `Feature` containing a `LineString` if the path
//! does not cross the antimeridian, or a `MultiLineString` if it does.
//!
//! ## Design
//!
//! `great_circle` resolves its inputs before any calculation:
//!
//! - positions may be raw coordinates, `Point` geometries or `Point` features,
//!   see `PointInput`;
//! - if no end position is given, the end is the position 179.999° along the
//!   great circle from the start at `Options::bearing`. The end is kept just
//!   short of the antipode, where the great circle is undefined;
//! - if the start and end positions are the same, the line is the start
//!   position repeated `npoints` times.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`
//!   and perform great-circle and vector calculations;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [serde_json](https://crates.io/crates/serde_json) - to read and write
//!   GeoJSON and `Options`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod arc;
pub mod dateline;
pub mod error;
pub mod geojson;
pub mod sphere;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use arc::GreatCircleArc;
pub use error::Error;
pub use geojson::{Feature, Geometry, PointInput, Position, Properties};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use alloc::vec;
use dateline::DatelineThreshold;
use serde_json::Value;

/// The default number of positions along a great circle line.
pub const DEFAULT_NPOINTS: usize = 100;

/// The distance from the start position to the end position when only a
/// bearing is given.
pub const BEARING_DISTANCE: Degrees = Degrees(179.999);

/// The options for generating a great circle line.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// The properties of the output `Feature`, copied verbatim.
    pub properties: Properties,
    /// The number of positions along the line, at least 2.
    pub npoints: usize,
    /// The dateline offset in degrees, larger values split the line more readily.
    pub offset: f64,
    /// The initial bearing, only used when no end position is given.
    pub bearing: Option<Degrees>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            properties: Properties::new(),
            npoints: DEFAULT_NPOINTS,
            offset: dateline::DEFAULT_OFFSET,
            bearing: None,
        }
    }
}

impl Options {
    /// Set the `properties` of the output `Feature`.
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Set the number of positions along the line.
    #[must_use]
    pub fn with_npoints(mut self, npoints: usize) -> Self {
        self.npoints = npoints;
        self
    }

    /// Set the dateline offset in degrees.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the initial bearing.
    #[must_use]
    pub fn with_bearing(mut self, bearing: Degrees) -> Self {
        self.bearing = Some(bearing);
        self
    }

    /// Check the options.
    ///
    /// # Errors
    ///
    /// `Error::InvalidOptions` if `npoints` is less than 2, `offset` is not
    /// a positive number or `bearing` is not a finite number.
    pub fn validate(&self) -> Result<(), Error> {
        if self.npoints < 2 {
            Err(Error::InvalidOptions("npoints must be at least 2"))
        } else if !(self.offset.is_finite() && 0.0 < self.offset) {
            Err(Error::InvalidOptions("offset must be a positive number"))
        } else if self.bearing.is_some_and(|bearing| !bearing.0.is_finite()) {
            Err(Error::InvalidOptions("bearing must be a finite number"))
        } else {
            Ok(())
        }
    }
}

impl TryFrom<&Value> for Options {
    type Error = Error;

    /// Read `Options` from a JSON object.
    /// Missing and `null` fields take their default values.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value
            .as_object()
            .ok_or(Error::InvalidOptions("not a configuration object"))?;
        let field = |key: &str| object.get(key).filter(|value| !value.is_null());

        let mut options = Self::default();
        if let Some(properties) = field("properties") {
            options.properties = properties
                .as_object()
                .cloned()
                .ok_or(Error::InvalidOptions("properties must be an object"))?;
        }
        if let Some(npoints) = field("npoints") {
            options.npoints = npoints
                .as_u64()
                .and_then(|npoints| usize::try_from(npoints).ok())
                .ok_or(Error::InvalidOptions("npoints must be an integer"))?;
        }
        if let Some(offset) = field("offset") {
            options.offset = offset
                .as_f64()
                .ok_or(Error::InvalidOptions("offset must be a number"))?;
        }
        if let Some(bearing) = field("bearing") {
            options.bearing = Some(Degrees(
                bearing
                    .as_f64()
                    .ok_or(Error::InvalidOptions("bearing must be a number"))?,
            ));
        }

        options.validate()?;
        Ok(options)
    }
}

/// Resolve the end position of a great circle line.
/// * `a` - the start position.
/// * `end` - the end position, if any.
/// * `bearing` - the initial bearing, used if there is no end position.
///
/// returns the end position, or the position `BEARING_DISTANCE` from `a`
/// along `bearing` if `end` is None.
///
/// # Errors
///
/// `Error::MissingEndpoint` if neither `end` nor `bearing` is given, or the
/// `Error::InvalidPointInput` from resolving `end`.
pub fn resolve_end(
    a: &LatLong,
    end: Option<&PointInput>,
    bearing: Option<Degrees>,
) -> Result<LatLong, Error> {
    match (end, bearing) {
        (Some(end), _) => geojson::get_coord(end),
        (None, Some(bearing)) => Ok(sphere::destination(
            a,
            Angle::from(BEARING_DISTANCE),
            Angle::from(bearing),
        )),
        (None, None) => Err(Error::MissingEndpoint),
    }
}

/// Generate the great circle line between two positions.
/// * `start` - the start position.
/// * `end` - the end position, if None `options.bearing` is required.
/// * `options` - the `Options`.
///
/// returns a `Feature` containing a `LineString`, or a `MultiLineString` if
/// the line crosses the antimeridian, with `options.properties`.
///
/// Note: exactly antipodal `start` and `end` positions do not define a
/// unique great circle, so every position of the line is the `start`
/// position. Use a bearing instead, which ends the line 179.999° from `start`.
///
/// # Errors
///
/// `Error::InvalidOptions` if the options are invalid,
/// `Error::InvalidPointInput` if `start` or `end` is not a valid position,
/// `Error::MissingEndpoint` if neither `end` nor a bearing is given.
///
/// # Examples
/// ```
/// use great_circle_arc::*;
/// use angle_sc::is_within_tolerance;
///
/// let seattle = PointInput::from([-122.0, 48.0]);
/// let washington = PointInput::from([-77.0, 39.0]);
///
/// let feature = great_circle(&seattle, Some(&washington), &Options::default()).unwrap();
/// let Geometry::LineString(positions) = feature.geometry else {
///     panic!("expected a LineString");
/// };
/// assert_eq!(100, positions.len());
/// assert!(is_within_tolerance(-122.0, positions[0][0], 1e-12));
/// assert!(is_within_tolerance(39.0, positions[99][1], 1e-12));
///
/// // Due West from Seattle crosses the antimeridian
/// let options = Options::default().with_bearing(Degrees(270.0));
/// let feature = great_circle(&seattle, None, &options).unwrap();
/// assert!(feature.geometry.is_multi());
/// ```
#[allow(clippy::float_cmp)]
pub fn great_circle(
    start: &PointInput,
    end: Option<&PointInput>,
    options: &Options,
) -> Result<Feature, Error> {
    options.validate()?;
    let a = geojson::get_coord(start)?;
    let b = resolve_end(&a, end, options.bearing)?;

    if a.lat().0 == b.lat().0 && a.lon().0 == b.lon().0 {
        log::trace!("start and end positions are the same: {:?}", a);
        return Ok(Feature::line_string(
            &vec![a; options.npoints],
            options.properties.clone(),
        ));
    }

    let arc = GreatCircleArc::between_positions(&a, &b);
    let positions = arc.interpolate(options.npoints);
    let runs =
        dateline::split_at_antimeridian(&positions, &DatelineThreshold::new(options.offset));
    log::debug!(
        "great circle {:?} to {:?}: {} positions, {} runs",
        a,
        b,
        positions.len(),
        runs.len()
    );

    if runs.len() > 1 {
        Ok(Feature::multi_line_string(&runs, options.properties.clone()))
    } else {
        Ok(Feature::line_string(&positions, options.properties.clone()))
    }
}
