/// What occupies a single grid cell.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Position {
    Open,
    Walled,
}

impl Position {
    pub fn is_open(&self) -> bool {
        matches!(self, Position::Open)
    }
}
