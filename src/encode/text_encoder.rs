use std::io::Write;

use tracing::debug;

use crate::encode::{Encode, Error};
use crate::TabulatedFunction;

/// TextEncoder
///
/// TextEncoder writes the point count on the first line, then one `<x> <y>` line per point.
/// Reals are written with `Display`, which yields the shortest decimal that parses back to the
/// same `f64` and never uses exponent notation.
#[derive(Debug)]
pub struct TextEncoder<W: Write> {
    w: W,
}

impl<W> TextEncoder<W>
where
    W: Write,
{
    pub fn new(w: W) -> Self {
        TextEncoder { w }
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W> Encode for TextEncoder<W>
where
    W: Write,
{
    fn encode<F>(&mut self, f: &F) -> Result<(), Error>
    where
        F: TabulatedFunction + ?Sized,
    {
        let n = f.points_count();
        debug!(points = n, "writing text");

        writeln!(self.w, "{}", n)?;
        for i in 0..n {
            writeln!(self.w, "{} {}", f.get_point_x(i), f.get_point_y(i))?;
        }

        self.w.flush()?;
        Ok(())
    }
}
