use std::{error, fmt};

use crate::{Point, TabulatedFunction};

/// Error
///
/// Enum used to represent the ways constructing an `ArrayTabulatedFunction` can fail.
#[derive(Debug, PartialEq)]
pub enum Error {
    TooFewPoints(usize),
    EmptyInterval { left_x: f64, right_x: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::TooFewPoints(n) => write!(f, "Need at least two points, got {}", n),
            Error::EmptyInterval { left_x, right_x } => {
                write!(f, "Interval [{}, {}] is empty or decreasing", left_x, right_x)
            }
        }
    }
}

impl error::Error for Error {}

/// ArrayTabulatedFunction
///
/// `TabulatedFunction` backed by a contiguous array of points. The points are kept in the order
/// they were given; nothing is sorted or deduplicated.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct ArrayTabulatedFunction {
    points: Vec<Point>,
}

impl ArrayTabulatedFunction {
    /// from_points creates a table holding exactly `points`.
    pub fn from_points(points: Vec<Point>) -> Result<Self, Error> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints(points.len()));
        }

        Ok(ArrayTabulatedFunction { points })
    }

    /// from_values creates a table over a uniform grid from `left_x` to `right_x`, the value at
    /// the i-th grid node being `values[i]`.
    ///
    /// Grid nodes are computed as `left_x + i * step` rather than by repeated addition, and the
    /// last node is exactly `right_x`.
    pub fn from_values(left_x: f64, right_x: f64, values: Vec<f64>) -> Result<Self, Error> {
        if values.len() < 2 {
            return Err(Error::TooFewPoints(values.len()));
        }
        if !(right_x > left_x) {
            return Err(Error::EmptyInterval { left_x, right_x });
        }

        let xs = grid(left_x, right_x, values.len());
        let points = xs
            .into_iter()
            .zip(values)
            .map(|(x, y)| Point::new(x, y))
            .collect();

        Ok(ArrayTabulatedFunction { points })
    }

    /// from_counted wraps points whose count was already checked against the two point minimum,
    /// as the decoders do with the declared count before reading any point.
    pub(crate) fn from_counted(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 2);
        ArrayTabulatedFunction { points }
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl TryFrom<Vec<Point>> for ArrayTabulatedFunction {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self, Error> {
        ArrayTabulatedFunction::from_points(points)
    }
}

impl From<ArrayTabulatedFunction> for Vec<Point> {
    fn from(f: ArrayTabulatedFunction) -> Vec<Point> {
        f.points
    }
}

/// grid returns `count` evenly spaced abscissas from `left_x` to `right_x`, both included.
/// `count` must be at least 2.
pub(crate) fn grid(left_x: f64, right_x: f64, count: usize) -> Vec<f64> {
    let last = count - 1;
    let step = (right_x - left_x) / last as f64;

    (0..count)
        .map(|i| if i == last { right_x } else { left_x + i as f64 * step })
        .collect()
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn get_point_x(&self, index: usize) -> f64 {
        self.points[index].get_x()
    }

    fn get_point_y(&self, index: usize) -> f64 {
        self.points[index].get_y()
    }

    fn get_point(&self, index: usize) -> Point {
        self.points[index]
    }
}
