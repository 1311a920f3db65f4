//! Generation numbering relative to the focal person.
//!
//! `0` is the focal person, parents are `+1`, children `-1`. Assignment is breadth-first and the
//! first discovery of a person fixes their generation: on pedigrees with several paths of
//! different length between two people (cousin marriages, malformed cycles) the shortest path
//! in BFS order decides, later paths are ignored.

use indexmap::IndexMap;
use nimloth_core::{Person, PersonId};
use serde::Serialize;
use std::collections::VecDeque;

use crate::family::Kinship;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GenerationMap {
    generations: IndexMap<PersonId, i32>,
}

impl GenerationMap {
    pub fn get(&self, id: PersonId) -> Option<i32> {
        self.generations.get(&id).copied()
    }

    /// Generation of `id`, `0` for persons the map does not cover.
    pub fn generation_of(&self, id: PersonId) -> i32 {
        self.get(id).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Entries in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, i32)> + '_ {
        self.generations.iter().map(|(&id, &g)| (id, g))
    }

    fn assign(&mut self, id: PersonId, generation: i32) -> bool {
        if self.generations.contains_key(&id) {
            return false;
        }
        self.generations.insert(id, generation);
        true
    }
}

impl FromIterator<(PersonId, i32)> for GenerationMap {
    fn from_iter<T: IntoIterator<Item = (PersonId, i32)>>(iter: T) -> Self {
        Self {
            generations: iter.into_iter().collect(),
        }
    }
}

/// Assigns a generation to every member of `family`.
///
/// Without a focal person everybody is generation `0`. Members the traversal cannot reach from
/// the focal person (only possible when `family` is not the focal person's connected subset)
/// are also put at `0`.
pub fn assign_generations(family: &[Person], focal: Option<&Person>) -> GenerationMap {
    let mut generations = GenerationMap::default();

    let Some(focal_id) = focal.and_then(|p| p.id) else {
        for id in family.iter().filter_map(|p| p.id) {
            generations.assign(id, 0);
        }
        return generations;
    };

    let kin = Kinship::new(family);
    let mut queue: VecDeque<(PersonId, i32)> = VecDeque::new();
    if kin.contains(focal_id) {
        generations.assign(focal_id, 0);
        queue.push_back((focal_id, 0));
    }

    while let Some((id, generation)) = queue.pop_front() {
        let Some(person) = kin.person(id) else {
            continue;
        };

        for parent in person.parents() {
            if kin.contains(parent) && generations.assign(parent, generation + 1) {
                queue.push_back((parent, generation + 1));
            }
        }
        for &child in kin.children(id) {
            if generations.assign(child, generation - 1) {
                queue.push_back((child, generation - 1));
            }
        }
    }

    for id in family.iter().filter_map(|p| p.id) {
        if generations.assign(id, 0) {
            tracing::trace!(%id, "person unreachable from the focal person; generation 0");
        }
    }

    tracing::debug!(
        focal = %focal_id,
        assigned = generations.len(),
        "assigned generations"
    );
    generations
}
