#![forbid(unsafe_code)]

//! Family-tree graph construction and layout.
//!
//! Four pure stages, each consuming the previous one's output:
//!
//! 1. [`select_family`]: connected family around a focal person,
//! 2. [`assign_generations`]: signed generation per person (BFS, first discovery wins),
//! 3. [`calculate_positions`]: one row per generation, evenly spaced and centred on `x = 0`,
//! 4. [`build_graph`]: person nodes, deduplicated marriage junctions and parent edges.
//!
//! [`layout_family`] runs all four. Nothing here performs I/O or keeps state between calls.

pub mod config;
pub mod elements;
pub mod error;
pub mod family;
pub mod generation;
pub mod graph;
pub mod pipeline;
pub mod position;

pub use config::LayoutConfig;
pub use elements::Elements;
pub use error::{Error, Result};
pub use family::{Kinship, select_family};
pub use generation::{GenerationMap, assign_generations};
pub use graph::{EdgeShape, FamilyGraph, GraphEdge, GraphNode, NodeKind, build_graph};
pub use pipeline::{FamilyLayout, layout_family};
pub use position::{Point, PositionMap, calculate_positions};
