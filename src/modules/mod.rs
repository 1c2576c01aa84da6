pub mod board;
pub mod error;
pub mod node;
pub mod path_builder;
pub mod path_finder;
pub mod path_map;
pub mod position;
