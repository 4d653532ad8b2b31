use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use tracing::debug;

use crate::encode::{Encode, Error};
use crate::TabulatedFunction;

/// Size in bytes of the point count header.
pub const HEADER_LEN: usize = 4;

/// Size in bytes of a single `(x, y)` record.
pub const RECORD_LEN: usize = 16;

/// BinaryEncoder
///
/// BinaryEncoder writes a big-endian `i32` point count followed by one record of two big-endian
/// `f64`s, `x` then `y`, per point. There is no padding, so `n` points take
/// `HEADER_LEN + RECORD_LEN * n` bytes.
#[derive(Debug)]
pub struct BinaryEncoder<W: Write> {
    w: W,
}

impl<W> BinaryEncoder<W>
where
    W: Write,
{
    pub fn new(w: W) -> Self {
        BinaryEncoder { w }
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W> Encode for BinaryEncoder<W>
where
    W: Write,
{
    fn encode<F>(&mut self, f: &F) -> Result<(), Error>
    where
        F: TabulatedFunction + ?Sized,
    {
        let n = f.points_count();
        let header = i32::try_from(n).map_err(|_| Error::TooManyPoints(n))?;
        debug!(points = n, "writing binary");

        self.w.write_i32::<BigEndian>(header)?;
        for i in 0..n {
            self.w.write_f64::<BigEndian>(f.get_point_x(i))?;
            self.w.write_f64::<BigEndian>(f.get_point_y(i))?;
        }

        self.w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::{BinaryEncoder, HEADER_LEN, RECORD_LEN};
    use crate::encode::{write_binary, Encode, Error};
    use crate::{ArrayTabulatedFunction, Point, TabulatedFunction};

    #[test]
    fn encode_points() {
        let f = ArrayTabulatedFunction::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.25),
            Point::new(1.0, 1.0),
        ])
        .unwrap();

        let mut e = BinaryEncoder::new(Vec::new());
        e.encode(&f).unwrap();
        let bytes = e.into_inner();

        // 3    = 00 00 00 03
        // 0.0  = 00 00 00 00 00 00 00 00
        // 0.5  = 3f e0 00 00 00 00 00 00
        // 0.25 = 3f d0 00 00 00 00 00 00
        // 1.0  = 3f f0 00 00 00 00 00 00
        #[rustfmt::skip]
        let expected_bytes: [u8; 52] = [
            0, 0, 0, 3,
            0, 0, 0, 0, 0, 0, 0, 0,     0, 0, 0, 0, 0, 0, 0, 0,
            0x3f, 0xe0, 0, 0, 0, 0, 0, 0, 0x3f, 0xd0, 0, 0, 0, 0, 0, 0,
            0x3f, 0xf0, 0, 0, 0, 0, 0, 0, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0,
        ];

        assert_eq!(bytes.len(), HEADER_LEN + RECORD_LEN * 3);
        assert_eq!(bytes[..], expected_bytes[..]);
    }

    #[test]
    fn encode_negative_and_non_finite() {
        let f = ArrayTabulatedFunction::from_points(vec![
            Point::new(-2.0, f64::NAN),
            Point::new(f64::NEG_INFINITY, -0.0),
        ])
        .unwrap();

        let mut bytes = Vec::new();
        write_binary(&f, &mut bytes).unwrap();

        let mut expected_bytes = vec![0, 0, 0, 2];
        for v in [-2.0, f64::NAN, f64::NEG_INFINITY, -0.0] {
            expected_bytes.extend_from_slice(&f64::to_be_bytes(v));
        }

        assert_eq!(bytes, expected_bytes);
        assert_eq!(bytes[4..12], [0xc0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn encode_is_deterministic() {
        let f = ArrayTabulatedFunction::from_values(-3.0, 8.0, vec![0.1, 0.2, 0.3, 0.4]).unwrap();

        let mut first = Vec::new();
        let mut second = Vec::new();
        write_binary(&f, &mut first).unwrap();
        write_binary(&f, &mut second).unwrap();

        assert_eq!(first, second);
    }

    // Claims more points than the header can hold. Never asked for a point since the header is
    // checked first.
    struct Huge;

    impl TabulatedFunction for Huge {
        fn points_count(&self) -> usize {
            i32::MAX as usize + 1
        }

        fn get_point_x(&self, _: usize) -> f64 {
            unreachable!()
        }

        fn get_point_y(&self, _: usize) -> f64 {
            unreachable!()
        }
    }

    #[test]
    fn encode_too_many_points() {
        let mut bytes = Vec::new();
        let err = write_binary(&Huge, &mut bytes).err().unwrap();

        assert_eq!(err, Error::TooManyPoints(i32::MAX as usize + 1));
        assert!(bytes.is_empty());
    }

    // Sink accepting a fixed number of bytes and counting flushes.
    struct Sink {
        buf: Vec<u8>,
        capacity: usize,
        flushes: usize,
    }

    impl Sink {
        fn new(capacity: usize) -> Self {
            Sink {
                buf: Vec::new(),
                capacity,
                flushes: 0,
            }
        }
    }

    impl Write for Sink {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            let room = self.capacity - self.buf.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink is full"));
            }
            let n = room.min(data.len());
            self.buf.extend_from_slice(&data[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn two_points() -> ArrayTabulatedFunction {
        ArrayTabulatedFunction::from_points(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)])
            .unwrap()
    }

    #[test]
    fn encode_flushes() {
        let mut sink = Sink::new(1024);

        write_binary(&two_points(), &mut sink).unwrap();

        assert_eq!(sink.flushes, 1);
        assert_eq!(sink.buf.len(), HEADER_LEN + RECORD_LEN * 2);
        assert_eq!(sink.buf[..4], [0, 0, 0, 2]);
    }

    #[test]
    fn encode_io_error_keeps_partial_output() {
        let mut sink = Sink::new(10);

        let err = write_binary(&two_points(), &mut sink).err().unwrap();

        // header and the first six bytes of x = 1.0 made it through
        assert_eq!(err, Error::Io(io::ErrorKind::WriteZero));
        assert_eq!(sink.buf, vec![0, 0, 0, 2, 0x3f, 0xf0, 0, 0, 0, 0]);
        assert_eq!(sink.flushes, 0);
    }
}
