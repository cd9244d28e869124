//! # tempograph
//!
//! Time-respecting path discovery over time-evolving networks.
//!
//! A time-evolving network is a graph whose edges exist only at discrete
//! snapshots. This crate reads such a network through the [`TemporalNetwork`]
//! trait and answers path questions that respect chronological order:
//!
//! - **Window resolution**: clip a requested `[start, end]` range to the
//!   snapshots the network actually has
//! - **Temporal DAG**: expand a source node forward through time into an
//!   acyclic graph of timestamped node copies
//! - **Path enumeration**: list every simple time-respecting path between two nodes
//! - **All pairs**: run the enumeration for every ordered node pair, optionally
//!   across worker threads
//! - **Classification**: pick the shortest, fastest, foremost and compound
//!   optimal paths out of a path set
//!
//! ## Quick Start
//!
//! ```rust
//! use tempograph::{TemporalNetwork, annotate_paths, time_respecting_paths};
//! use std::collections::BTreeMap;
//!
//! // A directed network stored as snapshot -> source -> targets.
//! struct Contacts(BTreeMap<u32, Vec<(char, char)>>);
//!
//! impl TemporalNetwork for Contacts {
//!     type Node = char;
//!     type Time = u32;
//!
//!     fn timestamps(&self) -> Vec<u32> {
//!         self.0.keys().copied().collect()
//!     }
//!
//!     fn neighbors(&self, node: &char, time: u32) -> Vec<char> {
//!         self.0
//!             .get(&time)
//!             .map(|edges| edges.iter().filter(|(u, _)| u == node).map(|(_, v)| *v).collect())
//!             .unwrap_or_default()
//!     }
//!
//!     fn nodes(&self) -> Vec<char> {
//!         vec!['A', 'B', 'C']
//!     }
//! }
//!
//! # fn main() -> Result<(), tempograph::PathError> {
//! let network = Contacts(BTreeMap::from([
//!     (1, vec![('A', 'B')]),
//!     (2, vec![('B', 'C')]),
//!     (3, vec![('A', 'C')]),
//! ]));
//!
//! let paths = time_respecting_paths(&network, &'A', &'C', None, None)?;
//! assert_eq!(paths.len(), 2);
//!
//! let annotation = annotate_paths(&paths)?;
//! assert_eq!(annotation.foremost[0].arrival(), 2);
//! assert_eq!(annotation.shortest[0].len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! This crate does **not** store or mutate networks. Storage lives behind the
//! [`TemporalNetwork`] trait; the `tempograph-network` crate provides an
//! in-memory implementation. Every query builds and discards its own DAG, so
//! queries share no state and the all-pairs driver can fan out across threads.
//!
//! Enumeration is exact and exhaustive. The number of paths can grow
//! exponentially with the window length on dense networks; bound the work
//! through the window.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod all_pairs;
pub mod annotate;
pub mod dag;
pub mod enumerate;
pub mod error;
pub mod integration;
pub mod path;
pub mod search;
pub mod types;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use all_pairs::{PathMap, all_time_respecting_paths};
pub use annotate::{PathAnnotation, PathKind, annotate_paths};
pub use dag::{TemporalDag, Vertex};
pub use enumerate::time_respecting_paths;
pub use error::PathError;
pub use integration::TemporalNetwork;
pub use path::{Path, path_arrival, path_duration, path_length};
pub use search::PathSearch;
pub use types::{Interaction, NodeId, Timestamp};
pub use window::resolve_window;
