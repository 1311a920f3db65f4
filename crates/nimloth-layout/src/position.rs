//! Row layout: one row per generation, evenly spaced and centred on `x = 0`.
//!
//! Ancestors sit above the focal row (negative `y`), descendants below. Within a row persons
//! keep family order, so the same input order always yields the same coordinates.

use indexmap::IndexMap;
use nimloth_core::{Person, PersonId};
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::generation::GenerationMap;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PositionMap {
    positions: IndexMap<PersonId, Point>,
}

impl PositionMap {
    pub fn get(&self, id: PersonId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PersonId, Point)> + '_ {
        self.positions.iter().map(|(&id, &p)| (id, p))
    }
}

impl FromIterator<(PersonId, Point)> for PositionMap {
    fn from_iter<T: IntoIterator<Item = (PersonId, Point)>>(iter: T) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

pub fn calculate_positions(
    family: &[Person],
    generations: &GenerationMap,
    config: &LayoutConfig,
) -> PositionMap {
    let mut rows: IndexMap<i32, Vec<PersonId>> = IndexMap::new();
    for id in family.iter().filter_map(|p| p.id) {
        let row = rows.entry(generations.generation_of(id)).or_default();
        // Duplicate ids keep their first slot.
        if !row.contains(&id) {
            row.push(id);
        }
    }

    let mut positions = PositionMap::default();
    for (&generation, members) in &rows {
        let total_width = (members.len() as f64 - 1.0) * config.horizontal_spacing;
        let start_x = -total_width / 2.0;
        // `-generation` first so row 0 lands on +0.0 rather than -0.0.
        let y = f64::from(-generation) * config.vertical_spacing;

        for (ix, &id) in members.iter().enumerate() {
            let x = start_x + ix as f64 * config.horizontal_spacing;
            positions.positions.entry(id).or_insert(Point { x, y });
        }
    }
    positions
}
