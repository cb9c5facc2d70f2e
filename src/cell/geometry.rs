use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Diameter of the selection circle, in points, when the horizontal size
/// class is regular
const REGULAR_DIAMETER: f64 = 45.0;

/// Upper bound on the selection circle's diameter under a compact size class
const MAX_COMPACT_DIAMETER: f64 = 60.0;

/// Points of breathing room between the selection circle and the shorter side
/// of the cell under a compact size class
const COMPACT_INSET: f64 = 10.0;

/// A screen at most this many points wide is always treated as narrow
const NARROW_SCREEN_WIDTH: f64 = 350.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Size {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Size {
    pub(crate) const fn new(width: f64, height: f64) -> Size {
        Size { width, height }
    }

    pub(crate) fn center(self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum SizeClass {
    Compact,
    #[default]
    Regular,
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeClass::Compact => write!(f, "compact"),
            SizeClass::Regular => write!(f, "regular"),
        }
    }
}

impl FromStr for SizeClass {
    type Err = ParseSizeClassError;

    fn from_str(s: &str) -> Result<SizeClass, ParseSizeClassError> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(SizeClass::Compact),
            "regular" => Ok(SizeClass::Regular),
            _ => Err(ParseSizeClassError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid size class {0:?}; expected \"compact\" or \"regular\"")]
pub(crate) struct ParseSizeClassError(String);

/// The ambient parameters, outside of the cell itself, that affect how a cell
/// is laid out and styled
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct DisplayContext {
    pub(crate) size_class: SizeClass,
    /// Dimensions of the whole screen, in points
    pub(crate) screen: Size,
}

impl DisplayContext {
    pub(crate) fn new(size_class: SizeClass, screen: Size) -> DisplayContext {
        DisplayContext { size_class, screen }
    }

    /// True when there is not enough horizontal room to draw a filled
    /// selection circle without it colliding with its neighbors: compact
    /// width, on either a narrow screen or one in landscape.
    pub(crate) fn is_small_layout(&self) -> bool {
        self.size_class == SizeClass::Compact
            && (self.screen.width <= NARROW_SCREEN_WIDTH || self.screen.width > self.screen.height)
    }
}

/// Placement of the circular selection background within a cell
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Circle {
    pub(crate) center: Point,
    pub(crate) diameter: f64,
    pub(crate) corner_radius: f64,
}

impl Circle {
    /// Lays out the selection circle for a cell of the given size.  The circle
    /// is centered on the label, which is itself centered in the cell.
    pub(crate) fn for_cell(bounds: Size, size_class: SizeClass) -> Circle {
        let diameter = match size_class {
            SizeClass::Compact => (bounds.width.min(bounds.height) - COMPACT_INSET)
                .min(MAX_COMPACT_DIAMETER)
                .max(0.0),
            SizeClass::Regular => REGULAR_DIAMETER,
        };
        Circle {
            center: bounds.center(),
            diameter,
            corner_radius: diameter / 2.0,
        }
    }

    pub(crate) fn contains(&self, p: Point) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx.mul_add(dx, dy * dy) <= self.corner_radius * self.corner_radius
    }
}

/// Asserts that two lengths agree to well within a point
#[cfg(test)]
#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{actual} is not close to {expected}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(SizeClass::Compact, 320.0, 568.0, true; "narrow portrait phone")]
    #[test_case(SizeClass::Compact, 350.0, 700.0, true; "exactly 350 wide")]
    #[test_case(SizeClass::Compact, 390.0, 844.0, false; "wide portrait phone")]
    #[test_case(SizeClass::Compact, 844.0, 390.0, true; "landscape phone")]
    #[test_case(SizeClass::Compact, 400.0, 400.0, false; "square compact")]
    #[test_case(SizeClass::Regular, 320.0, 568.0, false; "regular never small")]
    #[test_case(SizeClass::Regular, 1024.0, 768.0, false; "regular landscape")]
    fn test_is_small_layout(size_class: SizeClass, width: f64, height: f64, small: bool) {
        let ctx = DisplayContext::new(size_class, Size::new(width, height));
        assert_eq!(ctx.is_small_layout(), small);
    }

    #[test]
    fn test_regular_diameter_is_fixed() {
        for bounds in [Size::new(20.0, 20.0), Size::new(88.0, 48.0), Size::new(300.0, 300.0)] {
            let circle = Circle::for_cell(bounds, SizeClass::Regular);
            assert_close(circle.diameter, 45.0);
            assert_close(circle.corner_radius, 22.5);
        }
    }

    #[test]
    fn test_compact_diameter_uses_shorter_side() {
        let circle = Circle::for_cell(Size::new(88.0, 48.0), SizeClass::Compact);
        assert_close(circle.diameter, 38.0);
        assert_close(circle.corner_radius, 19.0);
        assert_close(circle.center.x, 44.0);
        assert_close(circle.center.y, 24.0);
    }

    #[test]
    fn test_compact_diameter_is_capped() {
        let circle = Circle::for_cell(Size::new(120.0, 100.0), SizeClass::Compact);
        assert_close(circle.diameter, 60.0);
    }

    #[test]
    fn test_compact_diameter_never_negative() {
        let circle = Circle::for_cell(Size::new(6.0, 40.0), SizeClass::Compact);
        assert_close(circle.diameter, 0.0);
    }

    #[test]
    fn test_contains() {
        let circle = Circle::for_cell(Size::new(88.0, 48.0), SizeClass::Regular);
        assert!(circle.contains(Point { x: 44.0, y: 24.0 }));
        assert!(circle.contains(Point { x: 60.0, y: 24.0 }));
        assert!(circle.contains(Point { x: 52.0, y: 40.0 }));
        assert!(!circle.contains(Point { x: 68.0, y: 24.0 }));
        assert!(!circle.contains(Point { x: 60.0, y: 40.0 }));
    }

    #[test]
    fn test_parse_size_class() {
        assert_eq!("compact".parse::<SizeClass>(), Ok(SizeClass::Compact));
        assert_eq!("Regular".parse::<SizeClass>(), Ok(SizeClass::Regular));
        assert!("tiny".parse::<SizeClass>().is_err());
    }
}
