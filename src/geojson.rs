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

//! The geojson module contains the [GeoJSON](https://datatracker.ietf.org/doc/html/rfc7946)
//! types used to input positions to, and output lines from, `great_circle`.
//!
//! A position may be given as a raw coordinate `[longitude, latitude]`,
//! a `Point` geometry or a `Feature` with a `Point` geometry, see `PointInput`.
//! `get_coord` resolves all of them to a `LatLong`.

use crate::Error;
use alloc::string::String;
use alloc::vec::Vec;
use angle_sc::Degrees;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use unit_sphere::LatLong;

/// A GeoJSON position: `[longitude, latitude]` in degrees.
pub type Position = [f64; 2];

/// The properties of a GeoJSON `Feature`.
pub type Properties = Map<String, Value>;

/// The GeoJSON geometries used by this library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Position),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
}

impl Geometry {
    /// Whether the geometry is a `MultiLineString`.
    #[must_use]
    pub const fn is_multi(&self) -> bool {
        matches!(self, Self::MultiLineString(_))
    }

    /// The runs of positions in the geometry.
    ///
    /// returns one run for a `Point` or a `LineString` and one run per line
    /// for a `MultiLineString`.
    #[must_use]
    pub fn runs(&self) -> Vec<&[Position]> {
        match self {
            Self::Point(position) => alloc::vec![core::slice::from_ref(position)],
            Self::LineString(positions) => alloc::vec![positions.as_slice()],
            Self::MultiLineString(lines) => lines.iter().map(Vec::as_slice).collect(),
        }
    }
}

/// A GeoJSON `Feature`: a geometry with properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Properties,
}

impl Feature {
    /// Construct a `LineString` `Feature`.
    /// * `positions` - the positions of the line.
    /// * `properties` - the properties of the `Feature`.
    #[must_use]
    pub fn line_string(positions: &[LatLong], properties: Properties) -> Self {
        Self {
            geometry: Geometry::LineString(positions.iter().map(to_position).collect()),
            properties,
        }
    }

    /// Construct a `MultiLineString` `Feature`.
    /// * `lines` - the positions of each line.
    /// * `properties` - the properties of the `Feature`.
    #[must_use]
    pub fn multi_line_string(lines: &[Vec<LatLong>], properties: Properties) -> Self {
        Self {
            geometry: Geometry::MultiLineString(
                lines
                    .iter()
                    .map(|line| line.iter().map(to_position).collect())
                    .collect(),
            ),
            properties,
        }
    }
}

/// A value that may be resolved to a position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointInput {
    Coordinate(Position),
    Feature(Feature),
    Geometry(Geometry),
}

impl From<Position> for PointInput {
    fn from(position: Position) -> Self {
        Self::Coordinate(position)
    }
}

impl From<&LatLong> for PointInput {
    fn from(a: &LatLong) -> Self {
        Self::Coordinate(to_position(a))
    }
}

impl From<Geometry> for PointInput {
    fn from(geometry: Geometry) -> Self {
        Self::Geometry(geometry)
    }
}

impl From<Feature> for PointInput {
    fn from(feature: Feature) -> Self {
        Self::Feature(feature)
    }
}

impl TryFrom<&Value> for PointInput {
    type Error = Error;

    /// Parse a `PointInput` from a JSON value.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::deserialize(value)
            .map_err(|_| Error::InvalidPointInput("not a coordinate, geometry or feature"))
    }
}

/// Convert a `LatLong` to a GeoJSON `Position`.
#[must_use]
pub fn to_position(a: &LatLong) -> Position {
    [a.lon().0, a.lat().0]
}

/// Convert a GeoJSON `Position` to a `LatLong`.
/// * `position` - the `[longitude, latitude]` in degrees.
///
/// # Errors
///
/// `Error::InvalidPointInput` if the latitude is not within [-90, 90] or
/// the longitude is not within [-180, 180].
pub fn to_lat_long(position: &Position) -> Result<LatLong, Error> {
    let [lon, lat] = *position;
    if !(-90.0..=90.0).contains(&lat) {
        Err(Error::InvalidPointInput("latitude out of range"))
    } else if !(-180.0..=180.0).contains(&lon) {
        Err(Error::InvalidPointInput("longitude out of range"))
    } else {
        Ok(LatLong::new(Degrees(lat), Degrees(lon)))
    }
}

/// Resolve a `PointInput` to a `LatLong`.
/// * `input` - a coordinate, a `Point` geometry or a `Point` `Feature`.
///
/// # Errors
///
/// `Error::InvalidPointInput` if the input is not a `Point` or its
/// coordinates are out of range.
pub fn get_coord(input: &PointInput) -> Result<LatLong, Error> {
    match input {
        PointInput::Coordinate(position)
        | PointInput::Geometry(Geometry::Point(position))
        | PointInput::Feature(Feature {
            geometry: Geometry::Point(position),
            ..
        }) => to_lat_long(position),
        _ => Err(Error::InvalidPointInput("geometry is not a Point")),
    }
}
