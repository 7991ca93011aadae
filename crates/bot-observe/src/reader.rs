//! Unit-mask extraction.
//!
//! Every function here scans a plane in row-major order and collects the
//! matching cells into a [`CellSet`].  The scan order matters: the selectors
//! in [`crate::select`] break ties by first-encountered cell.

use bot_core::{Faction, Point, UnitTypeId};

use crate::{Layer, Observation, Raster};

/// The cells of one plane that matched a code, in scan order.
///
/// An empty set is a real answer ("looked, found nothing"), and callers branch
/// on it to decide whether to issue a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: Vec<Point>,
}

impl CellSet {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.cells.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    /// Keep only cells also present in `other`.
    pub fn intersect(&self, other: &CellSet) -> CellSet {
        self.cells.iter().copied().filter(|p| other.contains(*p)).collect()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.cells
    }
}

impl FromIterator<Point> for CellSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Every cell of `raster` whose code equals `code`.
pub fn cells_matching(raster: &Raster, code: u32) -> CellSet {
    raster.iter().filter(|&(_, c)| c == code).map(|(p, _)| p).collect()
}

/// Cells owned by `faction` on the player-relative plane.
///
/// An observation without that plane yields an empty set.
pub fn faction_cells(obs: &Observation, faction: Faction) -> CellSet {
    match obs.layer(Layer::PlayerRelative) {
        Some(raster) => cells_matching(raster, faction.code() as u32),
        None => CellSet::empty(),
    }
}

/// Cells occupied by `unit_type` regardless of owner.
pub fn unit_cells(obs: &Observation, unit_type: UnitTypeId) -> CellSet {
    match obs.layer(Layer::UnitType) {
        Some(raster) => cells_matching(raster, unit_type.0),
        None => CellSet::empty(),
    }
}

/// Cells occupied by the agent's own units of `unit_type`.
///
/// Falls back to every own cell when the unit-type plane is missing, so
/// minigames that only expose ownership still find "a unit of ours".
pub fn own_units_of_type(obs: &Observation, unit_type: UnitTypeId) -> CellSet {
    let own = faction_cells(obs, Faction::Own);
    if obs.layer(Layer::UnitType).is_none() {
        return own;
    }
    unit_cells(obs, unit_type).intersect(&own)
}
