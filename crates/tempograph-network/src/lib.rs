//! # tempograph-network
//!
//! In-memory time-evolving network store for tempograph.
//!
//! A [`DynamicNetwork`] holds interactions `(u, v, t)`: node `u` meets node `v`
//! during snapshot `t`. Every snapshot keeps a forward and a reverse adjacency
//! index, updated together, so both out- and in-neighbor queries are direct
//! lookups.
//!
//! ## Features
//!
//! - **Directed or undirected**: chosen once per network with [`Directedness`]
//! - **Snapshot index**: timestamps are kept sorted and deduplicated
//! - **Bidirectional adjacency**: out- and in-neighbors per snapshot
//! - **Path engine integration**: implements [`tempograph::TemporalNetwork`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tempograph::{PathSearch, annotate_paths};
//! use tempograph_network::DynamicNetwork;
//!
//! let mut network = DynamicNetwork::directed();
//! network.add_interaction("alice", "bob", 1);
//! network.add_interaction("bob", "carol", 2);
//! network.add_interaction("alice", "carol", 3);
//!
//! let paths = PathSearch::new()
//!     .window(1, 3)
//!     .paths(&network, &"alice", &"carol")
//!     .unwrap();
//! assert_eq!(paths.len(), 2);
//!
//! let annotation = annotate_paths(&paths).unwrap();
//! assert_eq!(annotation.foremost[0].len(), 2);
//! ```
//!
//! ## Architecture
//!
//! This crate does **not** implement path algorithms. It stores snapshots and
//! answers neighbor queries; `tempograph` consumes them through the
//! `TemporalNetwork` trait.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod integration;
pub mod network;

pub use network::{Directedness, DynamicNetwork};
