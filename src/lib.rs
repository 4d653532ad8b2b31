// MIT License

// Copyright (c) 2016 Jerome Froelich

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! A crate for turning a function into a finite table of `(x, y)` points and for storing such
//! tables. `tabfn` samples a `Function` uniformly over an interval of its domain, and writes and
//! reads the resulting `TabulatedFunction` in two formats: a whitespace separated text format and
//! a fixed layout big-endian binary format.
//!
//! ## Example
//!
//! Below is a simple example of how to sample a function and send it through both formats.
//!
//! ```rust
//! use tabfn::{read_binary, read_text, tabulate, write_binary, write_text};
//! use tabfn::{Closure, TabulatedFunction};
//!
//! fn main() {
//!     // f(x) = x * x, defined on [0, 2]
//!     let f = Closure::new(0.0, 2.0, |x| x * x);
//!
//!     let tabulated = tabulate(&f, 0.0, 1.0, 3).unwrap();
//!     assert_eq!(tabulated.points_count(), 3);
//!
//!     let mut bytes = Vec::new();
//!     write_binary(&tabulated, &mut bytes).unwrap();
//!     assert_eq!(bytes.len(), 4 + 16 * 3);
//!     let decoded = read_binary(&bytes[..]).unwrap();
//!
//!     let mut text = Vec::new();
//!     write_text(&decoded, &mut text).unwrap();
//!     println!("{}", String::from_utf8(text.clone()).unwrap());
//!
//!     let parsed = read_text(&text[..]).unwrap();
//!     assert_eq!(parsed, tabulated);
//! }
//! ```

/// Point
///
/// Struct used to represent a single sampled point. Consists of an abscissa `x` and the value `y`
/// the function takes there.
#[derive(Debug, Copy, Clone, serde::Deserialize, serde::Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    // Create a new Point from an abscissa and a value.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    // Get the abscissa of this Point.
    pub fn get_x(&self) -> f64 {
        self.x
    }

    // Get the value of this Point.
    pub fn get_y(&self) -> f64 {
        self.y
    }
}

#[inline]
fn same_f64(a: f64, b: f64) -> bool {
    if a.is_nan() {
        return b.is_nan();
    }
    a == b
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Point) -> bool {
        same_f64(self.x, other.x) && same_f64(self.y, other.y)
    }
}

/// Function
///
/// A real function of one real variable, defined on the closed interval between its two domain
/// borders.
pub trait Function {
    /// Inclusive lower bound of the domain.
    fn left_domain_border(&self) -> f64;

    /// Inclusive upper bound of the domain.
    fn right_domain_border(&self) -> f64;

    /// Evaluate the function at `x`.
    fn value(&self, x: f64) -> f64;
}

/// TabulatedFunction
///
/// A function known only through a finite, ordered list of points. Indices run from `0` to
/// `points_count() - 1`; accessing an index outside that range panics, like slice indexing.
pub trait TabulatedFunction {
    /// Number of points in the table.
    fn points_count(&self) -> usize;

    /// Abscissa of the point at `index`.
    fn get_point_x(&self, index: usize) -> f64;

    /// Value of the point at `index`.
    fn get_point_y(&self, index: usize) -> f64;

    fn get_point(&self, index: usize) -> Point {
        Point::new(self.get_point_x(index), self.get_point_y(index))
    }

    /// Iterate over the points in table order.
    fn points(&self) -> Points<'_, Self>
    where
        Self: Sized,
    {
        Points {
            f: self,
            index: 0,
        }
    }

    fn left_domain_border(&self) -> f64 {
        self.get_point_x(0)
    }

    fn right_domain_border(&self) -> f64 {
        self.get_point_x(self.points_count() - 1)
    }
}

/// Points
///
/// Iterator over the points of a `TabulatedFunction`, see `TabulatedFunction::points`.
#[derive(Debug)]
pub struct Points<'a, F: ?Sized> {
    f: &'a F,
    index: usize,
}

impl<'a, F> Iterator for Points<'a, F>
where
    F: TabulatedFunction + ?Sized,
{
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.f.points_count() {
            return None;
        }

        let p = self.f.get_point(self.index);
        self.index += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.f.points_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, F> ExactSizeIterator for Points<'a, F> where F: TabulatedFunction + ?Sized {}

pub mod tabulated;
pub use self::tabulated::ArrayTabulatedFunction;

pub mod stream;

pub mod sample;
pub use self::sample::{tabulate, Closure};

pub mod encode;
pub use self::encode::binary_encoder::BinaryEncoder;
pub use self::encode::text_encoder::TextEncoder;
pub use self::encode::{write_binary, write_text, Encode};

pub mod decode;
pub use self::decode::binary_decoder::BinaryDecoder;
pub use self::decode::text_decoder::TextDecoder;
pub use self::decode::{read_binary, read_text, Decode, Limits};
