// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! wdigraph library - directed weighted graphs
//!
//! This crate provides a directed graph with strictly positive edge weights,
//! JSON persistence, Dijkstra shortest paths and strongly connected
//! component decomposition.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod persist;

/// Core value types shared by the graph, algorithms and persistence layer
pub mod types {
    use std::fmt;
    use std::str::FromStr;
    use thiserror::Error;

    /// Unique integer identity of a node
    pub type NodeId = i64;

    // =========================================================================
    // Position
    // =========================================================================

    /// Spatial position of a node, used only for rendering and persistence
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct Position {
        /// X coordinate
        pub x: f64,
        /// Y coordinate
        pub y: f64,
        /// Z coordinate (0 for planar layouts)
        pub z: f64,
    }

    impl Position {
        /// Create a planar position with z = 0
        #[must_use]
        pub const fn new(x: f64, y: f64) -> Self {
            Self { x, y, z: 0.0 }
        }

        /// Create a position with all three coordinates
        #[must_use]
        pub const fn with_z(x: f64, y: f64, z: f64) -> Self {
            Self { x, y, z }
        }
    }

    /// Failure to parse a `"x,y"` or `"x,y,z"` position string
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum PositionParseError {
        /// Wrong number of comma separated parts
        #[error("expected 2 or 3 comma separated coordinates, got {0}")]
        Arity(usize),
        /// A part was not a finite number
        #[error("invalid coordinate {0:?}")]
        Coordinate(String),
    }

    impl FromStr for Position {
        type Err = PositionParseError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let coords = s
                .split(',')
                .map(|part| {
                    let part = part.trim();
                    part.parse::<f64>()
                        .ok()
                        .filter(|c| c.is_finite())
                        .ok_or_else(|| PositionParseError::Coordinate(part.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            match coords.as_slice() {
                [x, y] => Ok(Self::new(*x, *y)),
                [x, y, z] => Ok(Self::with_z(*x, *y, *z)),
                other => Err(PositionParseError::Arity(other.len())),
            }
        }
    }

    /// Formats as `"x,y,z"`; every coordinate round-trips through [`FromStr`].
    impl fmt::Display for Position {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?},{:?},{:?}", self.x, self.y, self.z)
        }
    }

}

pub use algorithms::{GraphAlgo, WeightedPath};
pub use error::{GraphError, GraphResult};
pub use graph::{DiGraph, Node};
pub use types::{NodeId, Position};

/// Prelude for common imports
pub mod prelude {
    pub use crate::algorithms::{GraphAlgo, WeightedPath};
    pub use crate::error::{GraphError, GraphResult};
    pub use crate::graph::{DiGraph, Node};
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
