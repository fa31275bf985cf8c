pub mod utils;
pub mod vector;
pub mod vector_like;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Two operands of a binary operation differ in dimension.
    #[error("Vectors must be of the same dimension")]
    DimensionMismatch { expected: usize, got: usize },
    /// An element of an n-ary operation differs in dimension from the first one.
    #[error("All vectors must be of the same dimension")]
    MixedDimensions {
        index: usize,
        expected: usize,
        got: usize,
    },
    #[error("At least one vector is required to compute the average")]
    EmptyInput,
    #[error("The number of vectors must match the number of weights")]
    CountMismatch { vectors: usize, weights: usize },
}

impl VectorError {
    /// True for both the binary and the n-ary flavour of a dimension mismatch.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            VectorError::DimensionMismatch { .. } | VectorError::MixedDimensions { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use utils::{euclidean_distance, generate_random_vectors};
pub use vector::Vector;
pub use vector_like::VectorLike;
