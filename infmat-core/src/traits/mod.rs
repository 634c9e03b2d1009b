//! Abstract interfaces over sparse matrix storage
//!
//! Consumers such as renderers are written against these traits rather
//! than against the concrete [`Matrix`](crate::Matrix).

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
