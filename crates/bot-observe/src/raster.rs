//! Row-major 2-D code grids.

use std::fmt;

use bot_core::Point;

use crate::{ObserveError, ObserveResult};

/// Names of the screen planes an observation may carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// Owner code per cell: see [`bot_core::Faction`].
    PlayerRelative,
    /// Unit type id per cell, 0 where empty.
    UnitType,
    /// 1 where a currently selected unit stands.
    Selected,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Layer::PlayerRelative => "player_relative",
            Layer::UnitType       => "unit_type",
            Layer::Selected       => "selected",
        };
        f.write_str(s)
    }
}

/// A `width × height` grid of per-cell codes stored row-major.
///
/// Row `y` occupies `cells[y * width .. (y + 1) * width]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raster {
    width:  usize,
    height: usize,
    cells:  Vec<u32>,
}

impl Raster {
    /// A grid filled with zeros.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![0; width * height] }
    }

    pub fn new(width: usize, height: usize, cells: Vec<u32>) -> ObserveResult<Self> {
        if width * height != cells.len() {
            return Err(ObserveError::Shape { width, height, cells: cells.len() });
        }
        Ok(Self { width, height, cells })
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> ObserveResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(ObserveError::RaggedRow { row, got: r.len(), expected: width });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Code at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[p.y as usize * self.width + p.x as usize])
    }

    /// Overwrite the code at `p`.  Out-of-grid writes are ignored.
    pub fn set(&mut self, p: Point, code: u32) {
        if self.contains(p) {
            self.cells[p.y as usize * self.width + p.x as usize] = code;
        }
    }

    /// Iterate `(cell, code)` in row-major scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().map(move |(i, &code)| {
            (Point::new((i % width) as i32, (i / width) as i32), code)
        })
    }
}
