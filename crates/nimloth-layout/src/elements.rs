//! Cytoscape-style `elements` export of a [`FamilyGraph`].
//!
//! ```json
//! { "nodes": [ { "data": { "id": "person-1", "label": "...", "person": {...}, "generation": 0 },
//!                "position": { "x": 0.0, "y": 0.0 }, "classes": "current-user" } ],
//!   "edges": [ { "data": { "id": "...", "source": "...", "target": "...", "type": "mother" } } ] }
//! ```

use nimloth_core::{ParentSlot, Person};
use serde::Serialize;

use crate::error::Result;
use crate::graph::{FamilyGraph, GraphEdge, GraphNode, NodeKind};
use crate::position::Point;

#[derive(Debug, Clone, Serialize)]
pub struct Elements<'a> {
    pub nodes: Vec<NodeElement<'a>>,
    pub edges: Vec<EdgeElement<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeElement<'a> {
    pub data: NodeData<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    pub classes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeData<'a> {
    pub id: &'a str,
    pub label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<&'a Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeElement<'a> {
    pub data: EdgeData<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeData<'a> {
    pub id: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    #[serde(rename = "type")]
    pub kind: ParentSlot,
}

impl<'a> From<&'a GraphNode> for NodeElement<'a> {
    fn from(node: &'a GraphNode) -> Self {
        let (person, generation) = match &node.kind {
            NodeKind::Person { person, generation } => (Some(person), Some(*generation)),
            NodeKind::Marriage { .. } => (None, None),
        };
        Self {
            data: NodeData {
                id: &node.id,
                label: &node.label,
                person,
                generation,
            },
            position: node.position,
            classes: node.classes.join(" "),
        }
    }
}

impl<'a> From<&'a GraphEdge> for EdgeElement<'a> {
    fn from(edge: &'a GraphEdge) -> Self {
        Self {
            data: EdgeData {
                id: &edge.id,
                source: &edge.source,
                target: &edge.target,
                kind: edge.role,
            },
        }
    }
}

impl FamilyGraph {
    pub fn to_elements(&self) -> Elements<'_> {
        Elements {
            nodes: self.nodes.iter().map(NodeElement::from).collect(),
            edges: self.edges.iter().map(EdgeElement::from).collect(),
        }
    }

    pub fn to_elements_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.to_elements())?)
    }
}
