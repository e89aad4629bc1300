pub mod boundary;
pub mod convert;
pub mod heuristic;
pub mod tokenize;
