#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell address on the grid. Signed so neighbors of edge cells can be
/// expressed and then rejected by the map.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    row: i32,
    column: i32,
}

impl Coordinate {
    pub fn new(row: i32, column: i32) -> Coordinate {
        Coordinate { row, column }
    }

    pub fn get_row(&self) -> i32 {
        self.row
    }

    pub fn get_column(&self) -> i32 {
        self.column
    }

    /// The coordinate `delta` away, or `None` past the edge of `i32`.
    pub fn offset(&self, (d_row, d_column): (i32, i32)) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.row.checked_add(d_row)?,
            self.column.checked_add(d_column)?,
        ))
    }

    pub fn manhattan(&self, other: Coordinate) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.column.abs_diff(other.column))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, column): (i32, i32)) -> Coordinate {
        Coordinate::new(row, column)
    }
}

/// Index of a [`SearchNode`] in the arena of the search that created it.
pub type NodeId = usize;

/// A coordinate reached by the search, with the cost of the best route
/// found so far and the node that route came from.
///
/// Deliberately not `PartialEq`: two nodes for the same cell may carry
/// different costs and origins. Use [`SearchNode::same_coordinate`].
#[derive(Debug, Clone)]
pub struct SearchNode {
    position: Coordinate,
    running_cost: u32,
    origin: Option<NodeId>,
}

impl SearchNode {
    pub fn new(position: Coordinate, running_cost: u32, origin: Option<NodeId>) -> SearchNode {
        SearchNode {
            position,
            running_cost,
            origin,
        }
    }

    pub fn get_position(&self) -> Coordinate {
        self.position
    }

    pub fn get_cost(&self) -> u32 {
        self.running_cost
    }

    pub fn get_origin(&self) -> Option<NodeId> {
        self.origin
    }

    pub fn same_coordinate(&self, other: &SearchNode) -> bool {
        self.position == other.position
    }

    /// Record a cheaper route to this node.
    pub fn reroute(&mut self, running_cost: u32, origin: NodeId) {
        self.running_cost = running_cost;
        self.origin = Some(origin);
    }
}
