//! Fact graph for Cyclesense.
//!
//! A fixed directed multigraph linking cycle phases, symptoms, flow levels,
//! hygiene products, medications, and lifestyle actions. The graph is built
//! once with [`FactGraph::build`] and only read afterwards, so it can be
//! shared across request handlers behind an `Arc` without locking.
//!
//! ```rust
//! use cyclesense_graph::{FactGraph, Relationship};
//!
//! let graph = FactGraph::build();
//! let meds: Vec<&str> = graph
//!     .edges_from("cramps", Some(&[Relationship::IndicatedFor]))
//!     .map(|(node, _)| node.id.as_str())
//!     .collect();
//! assert_eq!(meds, ["ibuprofen", "naproxen"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod facts;
pub mod graph;
pub mod types;

pub use graph::{FactGraph, GraphStats};
pub use types::{Edge, Node, NodeCategory, Relationship};
