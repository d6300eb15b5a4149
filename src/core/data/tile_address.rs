use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileAddressError {
    #[error("failed to convert {name}={value} to int")]
    MalformedSegment { name: &'static str, value: String },
}

/// Slippy-map tile coordinate: zoom `z`, column `x`, row `y`.
///
/// Well-formed addresses satisfy `0 <= x, y < 2^z`, but every integer triple
/// is accepted and maps to a finite viewport.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileAddress {
    pub z: i32,
    pub x: i64,
    pub y: i64,
}

impl TileAddress {
    #[must_use]
    pub const fn new(z: i32, x: i64, y: i64) -> Self {
        Self { z, x, y }
    }

    /// Parses raw path segments. `y` may carry a trailing `.png` extension.
    pub fn from_segments(z: &str, x: &str, y: &str) -> Result<Self, TileAddressError> {
        let y = y.strip_suffix(".png").unwrap_or(y);

        Ok(Self {
            z: parse_segment("z", z)?,
            x: parse_segment("x", x)?,
            y: parse_segment("y", y)?,
        })
    }

    #[must_use]
    pub fn is_in_range(&self) -> bool {
        if self.z < 0 {
            return self.x == 0 && self.y == 0;
        }

        let tiles_per_axis = 1_i128 << self.z.min(126);
        (0..tiles_per_axis).contains(&(self.x as i128)) && (0..tiles_per_axis).contains(&(self.y as i128))
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

fn parse_segment<T: FromStr>(name: &'static str, value: &str) -> Result<T, TileAddressError> {
    value.parse().map_err(|_| TileAddressError::MalformedSegment {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segments_parses_integers() {
        let tile = TileAddress::from_segments("3", "5", "2").unwrap();

        assert_eq!(tile, TileAddress::new(3, 5, 2));
    }

    #[test]
    fn test_from_segments_strips_png_extension() {
        let tile = TileAddress::from_segments("1", "1", "0.png").unwrap();

        assert_eq!(tile, TileAddress::new(1, 1, 0));
    }

    #[test]
    fn test_from_segments_accepts_negative_values() {
        let tile = TileAddress::from_segments("-1", "-4", "7").unwrap();

        assert_eq!(tile, TileAddress::new(-1, -4, 7));
    }

    #[test]
    fn test_malformed_segment_names_the_offender() {
        let err = TileAddress::from_segments("2", "abc", "1").unwrap_err();

        assert_eq!(
            err,
            TileAddressError::MalformedSegment {
                name: "x",
                value: "abc".to_string()
            }
        );
        assert_eq!(err.to_string(), "failed to convert x=abc to int");
    }

    #[test]
    fn test_is_in_range() {
        assert!(TileAddress::new(0, 0, 0).is_in_range());
        assert!(TileAddress::new(2, 3, 3).is_in_range());
        assert!(!TileAddress::new(2, 4, 0).is_in_range());
        assert!(!TileAddress::new(2, 0, -1).is_in_range());
        assert!(TileAddress::new(200, i64::MAX, 0).is_in_range());
    }

    #[test]
    fn test_display() {
        assert_eq!(TileAddress::new(4, 10, 11).to_string(), "4/10/11");
    }
}
