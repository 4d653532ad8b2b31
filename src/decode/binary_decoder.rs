use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use tracing::{debug, warn};

use crate::decode::{Decode, Error, Limits, PREALLOC_POINTS};
use crate::{ArrayTabulatedFunction, Point};

/// BinaryDecoder
///
/// BinaryDecoder is used to decode the binary format written by `BinaryEncoder`. Values come
/// back bit for bit, NaN payloads included.
#[derive(Debug)]
pub struct BinaryDecoder<R: Read> {
    r: R,
    limits: Limits,
}

impl<R> BinaryDecoder<R>
where
    R: Read,
{
    /// new creates a new BinaryDecoder which will read bytes from r
    pub fn new(r: R) -> Self {
        BinaryDecoder::with_limits(r, Limits::default())
    }

    pub fn with_limits(r: R, limits: Limits) -> Self {
        BinaryDecoder { r, limits }
    }

    pub fn into_inner(self) -> R {
        self.r
    }

    fn read_point_count(&mut self) -> Result<usize, Error> {
        let declared = self.r.read_i32::<BigEndian>()?;
        self.limits.check(i64::from(declared)).map_err(|err| {
            warn!(declared, "rejecting binary header");
            err
        })
    }

    fn read_point(&mut self) -> Result<Point, Error> {
        let x = self.r.read_f64::<BigEndian>()?;
        let y = self.r.read_f64::<BigEndian>()?;
        Ok(Point::new(x, y))
    }
}

impl<R> Decode for BinaryDecoder<R>
where
    R: Read,
{
    fn decode(&mut self) -> Result<ArrayTabulatedFunction, Error> {
        let n = self.read_point_count()?;
        debug!(points = n, "reading binary");

        let mut points = Vec::with_capacity(n.min(PREALLOC_POINTS));
        for _ in 0..n {
            points.push(self.read_point()?);
        }

        Ok(ArrayTabulatedFunction::from_counted(points))
    }
}
