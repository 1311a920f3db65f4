use nimloth_core::Person;

use crate::config::LayoutConfig;
use crate::family::select_family;
use crate::generation::{GenerationMap, assign_generations};
use crate::graph::{FamilyGraph, build_graph};
use crate::position::{PositionMap, calculate_positions};

/// Output of every pipeline stage for one (roster, focal person) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyLayout {
    pub family: Vec<Person>,
    pub generations: GenerationMap,
    pub positions: PositionMap,
    pub graph: FamilyGraph,
}

/// Runs selection, generation assignment, row layout and graph building from scratch.
///
/// `focal` centres the family and the generation numbering; `current_user` only decides which
/// node carries the `current-user` class. The application passes the same person for both.
pub fn layout_family(
    persons: &[Person],
    focal: Option<&Person>,
    current_user: Option<&Person>,
    config: &LayoutConfig,
) -> FamilyLayout {
    if focal.is_none_or(|p| p.id.is_none()) {
        tracing::warn!("no focal person; laying out the whole roster in a single row");
    }

    let family = select_family(persons, focal);
    let generations = assign_generations(&family, focal);
    let positions = calculate_positions(&family, &generations, config);
    let graph = build_graph(&family, &generations, &positions, current_user);

    FamilyLayout {
        family,
        generations,
        positions,
        graph,
    }
}
