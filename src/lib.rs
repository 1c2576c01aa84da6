//! Shortest paths on grids of open and walled cells where every move costs
//! one step.
//!
//! A map is anything implementing [`PathMap`]. [`DijkstraPathFinder`] searches
//! it from the first origin cell to the first destination cell and reports
//! how many coordinates it had to open along the way.
//!
//! ```
//! use gridpath::{Board, DijkstraPathFinder, PathFinder};
//!
//! let board: Board = "
//!     S.#
//!     .##
//!     .#D
//! "
//! .parse()
//! .unwrap();
//! let mut finder = DijkstraPathFinder::new(&board).unwrap();
//! assert!(finder.find_path().is_empty());
//! ```

mod modules;

pub use modules::board::Board;
pub use modules::error::{Error, Result};
pub use modules::node::{Coordinate, NodeId, SearchNode};
pub use modules::path_finder::{DijkstraPathFinder, PathFinder};
pub use modules::path_map::PathMap;
pub use modules::position::Position;
