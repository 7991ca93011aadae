//! Screen cell coordinates.
//!
//! `Point` is an integer cell on a screen raster: `x` is the column, `y` the
//! row.  The environment expects screen targets as `[x, y]`.

/// One cell of a screen raster.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in cells.
    pub fn distance(self, other: Point) -> f32 {
        (self.distance_sq(other) as f32).sqrt()
    }

    /// Squared Euclidean distance: exact, and enough for comparisons.
    #[inline]
    pub fn distance_sq(self, other: Point) -> i64 {
        let dx = other.x as i64 - self.x as i64;
        let dy = other.y as i64 - self.y as i64;
        dx * dx + dy * dy
    }

    /// The `[x, y]` argument list the environment expects for screen targets.
    #[inline]
    pub fn to_arg(self) -> Vec<i32> {
        vec![self.x, self.y]
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
