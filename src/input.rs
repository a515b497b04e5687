//! Point sets as plain text.
//!
//! The format is one point per line, as two whitespace-separated numbers, with no header:
//!
//! ```text
//! 4127 9012
//! 33 7605
//! ```

use crate::distance::Value;
use crate::error::ParseError;
use crate::point::Point;

use rand::Rng;

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Read a point set.  Blank lines are skipped.
pub fn read_points<T, R>(reader: R) -> Result<Vec<Point<T>>, ParseError>
where
    T: Value + FromStr,
    R: BufRead,
{
    let mut points = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let number = i + 1;

        let fields: Vec<_> = line.split_whitespace().collect();
        match fields[..] {
            [] => continue,
            [x, y] => points.push(Point::new(parse(x, number)?, parse(y, number)?)),
            _ => {
                return Err(ParseError::Fields {
                    line: number,
                    found: fields.len(),
                });
            }
        }
    }

    Ok(points)
}

fn parse<T: FromStr>(text: &str, line: usize) -> Result<T, ParseError> {
    text.parse().map_err(|_| ParseError::Number {
        line,
        text: text.to_owned(),
    })
}

/// Write a point set.
pub fn write_points<T, W>(mut writer: W, points: &[Point<T>]) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    for point in points {
        writeln!(writer, "{} {}", point.x, point.y)?;
    }
    writer.flush()
}

/// Generate `n` points with integer coordinates drawn uniformly from `0..=max_coord`.
pub fn random_points<R: Rng>(rng: &mut R, n: usize, max_coord: i64) -> Vec<Point<i64>> {
    (0..n)
        .map(|_| Point::new(rng.random_range(0..=max_coord), rng.random_range(0..=max_coord)))
        .collect()
}
