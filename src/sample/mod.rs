use std::{error, fmt};

use tracing::debug;

use crate::tabulated::{self, grid};
use crate::{ArrayTabulatedFunction, Function, Point};

/// Error
///
/// Enum used to represent invalid arguments passed to `tabulate`. All of them are detected before
/// the function is evaluated even once.
#[derive(Debug, PartialEq)]
pub enum Error {
    TooFewPoints(usize),
    EmptyInterval {
        left_x: f64,
        right_x: f64,
    },
    OutsideDomain {
        left_x: f64,
        right_x: f64,
        left_border: f64,
        right_border: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::TooFewPoints(n) => write!(f, "Need at least two points, got {}", n),
            Error::EmptyInterval { left_x, right_x } => {
                write!(f, "Interval [{}, {}] is empty or decreasing", left_x, right_x)
            }
            Error::OutsideDomain {
                left_x,
                right_x,
                left_border,
                right_border,
            } => write!(
                f,
                "Interval [{}, {}] is outside the function domain [{}, {}]",
                left_x, right_x, left_border, right_border
            ),
        }
    }
}

impl error::Error for Error {}

impl From<tabulated::Error> for Error {
    fn from(err: tabulated::Error) -> Error {
        match err {
            tabulated::Error::TooFewPoints(n) => Error::TooFewPoints(n),
            tabulated::Error::EmptyInterval { left_x, right_x } => {
                Error::EmptyInterval { left_x, right_x }
            }
        }
    }
}

/// tabulate samples `f` at `points_count` evenly spaced abscissas from `left_x` to `right_x`.
///
/// The first point is at `left_x` and the last one at `right_x` exactly. The interval may stick
/// out of the domain of `f` by at most `f64::EPSILON` on either side, which absorbs rounding in
/// bounds computed from the domain borders themselves.
pub fn tabulate<F>(
    f: &F,
    left_x: f64,
    right_x: f64,
    points_count: usize,
) -> Result<ArrayTabulatedFunction, Error>
where
    F: Function + ?Sized,
{
    if points_count < 2 {
        return Err(Error::TooFewPoints(points_count));
    }
    if !(right_x > left_x) {
        return Err(Error::EmptyInterval { left_x, right_x });
    }

    let left_border = f.left_domain_border();
    let right_border = f.right_domain_border();
    let eps = f64::EPSILON;
    if left_x + eps < left_border || right_x - eps > right_border {
        return Err(Error::OutsideDomain {
            left_x,
            right_x,
            left_border,
            right_border,
        });
    }

    debug!(left_x, right_x, points_count, "tabulating function");

    let points = grid(left_x, right_x, points_count)
        .into_iter()
        .map(|x| Point::new(x, f.value(x)))
        .collect();

    Ok(ArrayTabulatedFunction::from_points(points)?)
}

/// Closure
///
/// Adapter exposing a plain `Fn(f64) -> f64` together with its domain as a `Function`.
pub struct Closure<F> {
    left: f64,
    right: f64,
    f: F,
}

impl<F> Closure<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(left: f64, right: f64, f: F) -> Self {
        Closure { left, right, f }
    }
}

impl<F> fmt::Debug for Closure<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Closure")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

impl<F> Function for Closure<F>
where
    F: Fn(f64) -> f64,
{
    fn left_domain_border(&self) -> f64 {
        self.left
    }

    fn right_domain_border(&self) -> f64 {
        self.right
    }

    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}
