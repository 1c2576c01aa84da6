use super::error::{Error, Result};
use super::node::Coordinate;
use super::path_map::PathMap;
use super::position::Position;
use std::ops::Index;
use std::str::FromStr;

type Plane = Vec<Position>;

/// Rectangular grid of open and walled cells with origin and destination
/// lists.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    columns: usize,
    plane: Box<Plane>,
    origin_cells: Vec<Coordinate>,
    dest_cells: Vec<Coordinate>,
}

impl Index<Coordinate> for Board {
    type Output = Position;

    // Panics on coordinates outside the board, like slice indexing.
    fn index(&self, coordinate: Coordinate) -> &Self::Output {
        match self.offset_of(coordinate) {
            Some(offset) => &self.plane[offset],
            None => panic!("coordinate {:?} is outside the board", coordinate),
        }
    }
}

impl Board {
    pub fn new(
        rows: usize,
        columns: usize,
        plane: Plane,
        origin_cells: Vec<Coordinate>,
        dest_cells: Vec<Coordinate>,
    ) -> Result<Board> {
        if plane.len() != cell_count(rows, columns)? {
            return Err(Error::InvalidBoard(format!(
                "{} cells given for a {}x{} board",
                plane.len(),
                rows,
                columns
            )));
        }

        Ok(Board {
            rows,
            columns,
            plane: Box::new(plane),
            origin_cells,
            dest_cells,
        })
    }

    /// A board with every cell open and no endpoints.
    pub fn open(rows: usize, columns: usize) -> Result<Board> {
        Ok(Board {
            rows,
            columns,
            plane: Box::new(vec![Position::Open; cell_count(rows, columns)?]),
            origin_cells: Vec::new(),
            dest_cells: Vec::new(),
        })
    }

    pub fn with_origin(mut self, origin: Coordinate) -> Board {
        self.origin_cells.push(origin);
        self
    }

    pub fn with_destination(mut self, destination: Coordinate) -> Board {
        self.dest_cells.push(destination);
        self
    }

    /// Block a cell. Coordinates outside the board are ignored.
    pub fn wall(mut self, coordinate: Coordinate) -> Board {
        if let Some(offset) = self.offset_of(coordinate) {
            self.plane[offset] = Position::Walled;
        }
        self
    }

    pub fn get_plane(&self) -> &Plane {
        &self.plane
    }

    pub fn get_dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.offset_of(coordinate).is_some()
    }

    fn offset_of(&self, coordinate: Coordinate) -> Option<usize> {
        let row = usize::try_from(coordinate.get_row()).ok()?;
        let column = usize::try_from(coordinate.get_column()).ok()?;

        if row < self.rows && column < self.columns {
            Some(self.columns * row + column)
        } else {
            None
        }
    }
}

/// Cells in a `rows` x `columns` board. Every cell must be addressable by an
/// `i32` coordinate.
fn cell_count(rows: usize, columns: usize) -> Result<usize> {
    if i32::try_from(rows).is_err() || i32::try_from(columns).is_err() {
        return Err(Error::InvalidBoard(format!(
            "{}x{} board exceeds coordinate range",
            rows, columns
        )));
    }

    rows.checked_mul(columns).ok_or_else(|| {
        Error::InvalidBoard(format!("{}x{} board is too large", rows, columns))
    })
}

impl PathMap for Board {
    fn is_passable(&self, row: i32, column: i32) -> bool {
        self.offset_of(Coordinate::new(row, column))
            .is_some_and(|offset| self.plane[offset].is_open())
    }

    fn origin_cells(&self) -> &[Coordinate] {
        &self.origin_cells
    }

    fn dest_cells(&self) -> &[Coordinate] {
        &self.dest_cells
    }
}

/// Parses one text line per row:
///
/// - `.` open
/// - `#` wall
/// - `S` origin
/// - `D` destination
/// - `X` destination sitting on a wall
impl FromStr for Board {
    type Err = Error;

    fn from_str(text: &str) -> Result<Board> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let columns = lines.first().map_or(0, |line| line.chars().count());
        let mut plane = Vec::with_capacity(rows * columns);
        let mut origin_cells = Vec::new();
        let mut dest_cells = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != columns {
                return Err(Error::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    columns
                )));
            }

            let row_index = i32::try_from(row)
                .map_err(|_| Error::InvalidBoard(format!("row {} exceeds coordinate range", row)))?;

            for (column, glyph) in line.chars().enumerate() {
                let column_index = i32::try_from(column).map_err(|_| {
                    Error::InvalidBoard(format!("column {} exceeds coordinate range", column))
                })?;
                let here = Coordinate::new(row_index, column_index);
                let position = match glyph {
                    '.' => Position::Open,
                    '#' => Position::Walled,
                    'S' => {
                        origin_cells.push(here);
                        Position::Open
                    }
                    'D' => {
                        dest_cells.push(here);
                        Position::Open
                    }
                    'X' => {
                        dest_cells.push(here);
                        Position::Walled
                    }
                    other => {
                        return Err(Error::InvalidBoard(format!(
                            "unknown cell {:?} at row {}, column {}",
                            other, row, column
                        )))
                    }
                };
                plane.push(position);
            }
        }

        Board::new(rows, columns, plane, origin_cells, dest_cells)
    }
}
