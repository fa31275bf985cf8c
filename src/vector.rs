use crate::utils;
use crate::vector_like::{common_dimension, ensure_same_dimension, VectorLike};
use crate::{Result, VectorError};
use ndarray::Array1;
use std::fmt;
use std::ops::Index;
use tracing::{debug, trace};

/// A fixed-dimension point in n-dimensional space.
///
/// The component buffer is never handed out mutably: every operation returns
/// a fresh `Vector` and leaves its operands untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    pub fn new(data: impl Into<Vec<f64>>) -> Self {
        Self {
            data: Array1::from_vec(data.into()),
        }
    }

    /// Promote any vector-like value into an owned `Vector`.
    pub fn from_vector_like<V: VectorLike + ?Sized>(values: &V) -> Self {
        Self {
            data: Array1::from_shape_fn(values.dimension(), |i| values.component(i)),
        }
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter()
    }

    pub fn data(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.data
    }

    pub fn magnitude(&self) -> f64 {
        self.data.dot(&self.data).sqrt()
    }

    /// Component-wise sum of `self` and `other`.
    pub fn add<V: VectorLike + ?Sized>(&self, other: &V) -> Result<Vector> {
        ensure_same_dimension(self.dimension(), other.dimension())?;

        Ok(Self {
            data: Array1::from_shape_fn(self.dimension(), |i| self.data[i] + other.component(i)),
        })
    }

    /// Component-wise arithmetic mean of `vectors`.
    ///
    /// Fails with [`VectorError::EmptyInput`] for an empty slice and with
    /// [`VectorError::MixedDimensions`] if any element disagrees with the
    /// first one. Every element is checked before anything is summed.
    pub fn average<V: VectorLike>(vectors: &[V]) -> Result<Vector> {
        let dimension = common_dimension(vectors)?;

        let mut sum = Array1::<f64>::zeros(dimension);
        for vector in vectors {
            for (i, acc) in sum.iter_mut().enumerate() {
                *acc += vector.component(i);
            }
        }

        Ok(Self {
            data: sum / vectors.len() as f64,
        })
    }

    /// Component-wise weighted mean of `vectors`, `weights[i]` applying to
    /// `vectors[i]`.
    ///
    /// Returns `Ok(None)` when the weights sum to zero: the mean is undefined
    /// there, which is not the same thing as invalid input.
    pub fn weighted_average<V: VectorLike>(
        vectors: &[V],
        weights: &[f64],
    ) -> Result<Option<Vector>> {
        if vectors.is_empty() {
            debug!("no vectors supplied");
            return Err(VectorError::EmptyInput);
        }
        if vectors.len() != weights.len() {
            debug!(
                vectors = vectors.len(),
                weights = weights.len(),
                "vector and weight counts differ"
            );
            return Err(VectorError::CountMismatch {
                vectors: vectors.len(),
                weights: weights.len(),
            });
        }
        let dimension = common_dimension(vectors)?;

        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            trace!(count = vectors.len(), "weights sum to zero, no weighted average");
            return Ok(None);
        }

        let mut sum = Array1::<f64>::zeros(dimension);
        for (vector, &weight) in vectors.iter().zip(weights) {
            for (i, acc) in sum.iter_mut().enumerate() {
                *acc += vector.component(i) * weight;
            }
        }

        Ok(Some(Self { data: sum / total }))
    }

    /// L2 distance to `other`. See [`utils::euclidean_distance`] for the
    /// receiver-free form.
    pub fn euclidean_distance<V: VectorLike + ?Sized>(&self, other: &V) -> Result<f64> {
        utils::euclidean_distance(self, other)
    }
}

impl VectorLike for Vector {
    fn dimension(&self) -> usize {
        self.data.len()
    }

    fn component(&self, index: usize) -> f64 {
        self.data[index]
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl From<&[f64]> for Vector {
    fn from(data: &[f64]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(data: [f64; N]) -> Self {
        Self::new(data)
    }
}

impl From<Array1<f64>> for Vector {
    fn from(data: Array1<f64>) -> Self {
        Self { data }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
