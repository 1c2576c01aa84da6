use super::node::Coordinate;

/// Read-only view of a grid map as seen by a path finder.
pub trait PathMap {
    /// True iff `(row, column)` is inside the map and not blocked.
    fn is_passable(&self, row: i32, column: i32) -> bool;

    /// Cells a search may start from. Only the first is used.
    fn origin_cells(&self) -> &[Coordinate];

    /// Cells a search may end at. Only the first is used.
    fn dest_cells(&self) -> &[Coordinate];
}
