//! Plain-text city coordinate loader.
//!
//! Format: the first line holds the canvas width and height as two integers;
//! every following line holds one city's `x y` as two reals. Tokens are
//! whitespace-separated, blank lines are skipped, and tokens past the second
//! on a line are ignored.
//!
//! ```text
//! 100 100
//! 12.5 40
//! 80 15.25
//! 55 90
//! ```

use std::path::Path;
use std::str::FromStr;

use crate::error::{InputFormatError, Result};
use crate::geometry::City;

/// Cities plus the canvas they were plotted on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityMap {
    pub cities: Vec<City>,
    pub width: u32,
    pub height: u32,
}

/// Parses coordinate text.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_cities;
///
/// let map = parse_cities("10 20\n1 2\n3.5 4\n").unwrap();
/// assert_eq!((map.width, map.height), (10, 20));
/// assert_eq!(map.cities.len(), 2);
/// ```
pub fn parse_cities(text: &str) -> std::result::Result<CityMap, InputFormatError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (line_no, header) = lines.next().ok_or(InputFormatError::MissingHeader)?;
    let mut fields = header.split_whitespace();
    let width = parse_field(fields.next(), line_no, "width")?;
    let height = parse_field(fields.next(), line_no, "height")?;

    let cities = lines
        .map(|(line_no, line)| -> std::result::Result<City, InputFormatError> {
            let mut fields = line.split_whitespace();
            let x = parse_field(fields.next(), line_no, "x")?;
            let y = parse_field(fields.next(), line_no, "y")?;
            Ok(City::new(x, y))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(CityMap {
        cities,
        width,
        height,
    })
}

/// Reads and parses a coordinate file.
pub fn read_cities(path: impl AsRef<Path>) -> Result<CityMap> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_cities(&text)?)
}

fn parse_field<T: FromStr>(
    token: Option<&str>,
    line: usize,
    field: &'static str,
) -> std::result::Result<T, InputFormatError> {
    let token = token.ok_or(InputFormatError::MissingField { line, field })?;
    token.parse().map_err(|_| InputFormatError::InvalidNumber {
        line,
        value: token.to_string(),
    })
}
