//! Node/edge set handed to the graph renderer.
//!
//! Children with both parents recorded hang off a synthetic marriage node shared by all
//! siblings of that (mother, father) pair; a child with a single known parent gets a direct
//! edge instead. Node and edge ids are derived from person ids only, so rebuilding from the
//! same input reproduces the same ids.

use nimloth_core::{ParentSlot, Person, PersonId};
use rustc_hash::FxHashSet as HashSet;

use crate::generation::GenerationMap;
use crate::position::{Point, PositionMap};

pub const CURRENT_USER_CLASS: &str = "current-user";
pub const MARRIAGE_NODE_CLASS: &str = "marriage-node";

pub fn person_node_id(id: PersonId) -> String {
    format!("person-{id}")
}

pub fn marriage_node_id(mother: PersonId, father: PersonId) -> String {
    format!("marriage-{mother}-{father}")
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Person {
        person: Person,
        generation: i32,
    },
    Marriage {
        mother: PersonId,
        father: PersonId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    /// Empty for marriage nodes.
    pub label: String,
    pub kind: NodeKind,
    /// `None` lets the renderer place the node.
    pub position: Option<Point>,
    pub classes: Vec<&'static str>,
}

impl GraphNode {
    pub fn person(&self) -> Option<&Person> {
        match &self.kind {
            NodeKind::Person { person, .. } => Some(person),
            NodeKind::Marriage { .. } => None,
        }
    }

    pub fn is_marriage(&self) -> bool {
        matches!(self.kind, NodeKind::Marriage { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeShape {
    /// Parent into the shared marriage node.
    ParentToMarriage,
    /// Marriage node into one child.
    MarriageToChild,
    /// Single recorded parent straight into the child.
    ParentToChild,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Marriage-to-child edges are tagged `mother`.
    pub role: ParentSlot,
    pub shape: EdgeShape,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl FamilyGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Person payload behind a node id; marriage nodes and unknown ids yield `None`.
    pub fn person_for_node(&self, id: &str) -> Option<&Person> {
        self.node(id).and_then(GraphNode::person)
    }

    pub fn person_nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.nodes.iter().filter(|n| !n.is_marriage())
    }

    pub fn marriage_nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.nodes.iter().filter(|n| n.is_marriage())
    }

    pub fn edges_into<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.target == target)
    }

    pub fn edges_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.source == source)
    }
}

/// Builds the render graph for an already selected and laid out family.
///
/// Person nodes come first in family order, marriage nodes follow in the order their first
/// child appears. Parent ids that do not resolve to a family member produce no edge: with both
/// parents recorded but only one present, that one gets a direct edge.
pub fn build_graph(
    family: &[Person],
    generations: &GenerationMap,
    positions: &PositionMap,
    current_user: Option<&Person>,
) -> FamilyGraph {
    let current_user_id = current_user.and_then(|p| p.id);
    let mut graph = FamilyGraph::default();

    let mut members: HashSet<PersonId> = HashSet::default();
    for person in family {
        let Some(id) = person.id else { continue };
        if !members.insert(id) {
            tracing::trace!(%id, "duplicate family member; keeping the first node");
            continue;
        }

        let mut classes = Vec::new();
        if current_user_id == Some(id) {
            classes.push(CURRENT_USER_CLASS);
        }
        graph.nodes.push(GraphNode {
            id: person_node_id(id),
            label: person.graph_label(),
            kind: NodeKind::Person {
                person: person.clone(),
                generation: generations.generation_of(id),
            },
            position: positions.get(id),
            classes,
        });
    }

    let known = |parent: Option<PersonId>| parent.filter(|p| members.contains(p));
    let mut marriages: HashSet<(PersonId, PersonId)> = HashSet::default();
    let mut linked: HashSet<PersonId> = HashSet::default();

    for person in family {
        let Some(child) = person.id else { continue };
        if !linked.insert(child) {
            continue;
        }
        let child_node = person_node_id(child);

        if person.parents().any(|p| !members.contains(&p)) {
            tracing::trace!(%child, "parent reference outside the family; edge omitted");
        }

        match (known(person.mother), known(person.father)) {
            (Some(mother), Some(father)) => {
                let marriage = marriage_node_id(mother, father);
                if marriages.insert((mother, father)) {
                    let position = positions
                        .get(mother)
                        .zip(positions.get(father))
                        .map(|(m, f)| m.midpoint(f));
                    graph.nodes.push(GraphNode {
                        id: marriage.clone(),
                        label: String::new(),
                        kind: NodeKind::Marriage { mother, father },
                        position,
                        classes: vec![MARRIAGE_NODE_CLASS],
                    });
                    for (slot, parent) in [
                        (ParentSlot::Mother, mother),
                        (ParentSlot::Father, father),
                    ] {
                        graph.edges.push(GraphEdge {
                            id: format!("edge-{slot}-{parent}-to-marriage-{marriage}"),
                            source: person_node_id(parent),
                            target: marriage.clone(),
                            role: slot,
                            shape: EdgeShape::ParentToMarriage,
                        });
                    }
                }
                graph.edges.push(GraphEdge {
                    id: format!("edge-marriage-{marriage}-to-child-{child}"),
                    source: marriage,
                    target: child_node,
                    role: ParentSlot::Mother,
                    shape: EdgeShape::MarriageToChild,
                });
            }
            (mother, father) => {
                for (slot, parent) in [(ParentSlot::Mother, mother), (ParentSlot::Father, father)]
                {
                    let Some(parent) = parent else { continue };
                    graph.edges.push(GraphEdge {
                        id: format!("edge-{child}-{slot}-{parent}"),
                        source: person_node_id(parent),
                        target: child_node.clone(),
                        role: slot,
                        shape: EdgeShape::ParentToChild,
                    });
                }
            }
        }
    }

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        marriages = marriages.len(),
        "built family graph"
    );
    graph
}
