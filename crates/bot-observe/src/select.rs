//! Target selection over a [`CellSet`].
//!
//! All selectors return `None` for an empty candidate set.  Callers are
//! expected to have checked emptiness already and substituted a no-op, so the
//! `None` arm is a backstop rather than a branch the agents rely on.

use bot_core::Point;

use crate::CellSet;

/// Coordinate axis for [`extreme`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Column.
    X,
    /// Row.
    Y,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

/// Arithmetic mean of all cells, rounded to the nearest grid cell.
pub fn centroid(cells: &CellSet) -> Option<Point> {
    if cells.is_empty() {
        return None;
    }
    let n = cells.len() as f64;
    let (sx, sy) = cells
        .iter()
        .fold((0i64, 0i64), |(sx, sy), p| (sx + p.x as i64, sy + p.y as i64));
    Some(Point::new(
        (sx as f64 / n).round() as i32,
        (sy as f64 / n).round() as i32,
    ))
}

/// The candidate closest to `reference` by Euclidean distance.
///
/// Ties go to the first candidate in scan order.
pub fn nearest(reference: Point, candidates: &CellSet) -> Option<Point> {
    let mut best: Option<(Point, i64)> = None;
    for &p in candidates {
        let d = reference.distance_sq(p);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((p, d)),
        }
    }
    best.map(|(p, _)| p)
}

/// Like [`nearest`], but ignores candidates closer than `min_distance`.
///
/// Used to pick a free build site that leaves room around the reference unit.
pub fn nearest_outside(reference: Point, candidates: &CellSet, min_distance: f32) -> Option<Point> {
    let min_sq = (min_distance * min_distance).ceil() as i64;
    let far_enough: CellSet = candidates
        .iter()
        .copied()
        .filter(|p| reference.distance_sq(*p) >= min_sq)
        .collect();
    nearest(reference, &far_enough)
}

/// The candidate with the greatest (or smallest) coordinate along `axis`.
///
/// Ties go to the first candidate in scan order.
pub fn extreme(candidates: &CellSet, axis: Axis, which: Extremum) -> Option<Point> {
    let key = |p: Point| match axis {
        Axis::X => p.x,
        Axis::Y => p.y,
    };
    let mut best: Option<Point> = None;
    for &p in candidates {
        let better = match best {
            None => true,
            Some(b) => match which {
                Extremum::Max => key(p) > key(b),
                Extremum::Min => key(p) < key(b),
            },
        };
        if better {
            best = Some(p);
        }
    }
    best
}
