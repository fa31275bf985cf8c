use ndarray::Array1;

/// Anything with a length and indexed numeric read access.
///
/// Operations on [`Vector`](crate::Vector) accept any `VectorLike` operand, so
/// a plain `Vec<f64>`, slice or array can stand in for a `Vector` wherever one
/// is expected. Mixed inputs to the n-ary operations go through
/// `&dyn VectorLike`.
pub trait VectorLike {
    fn dimension(&self) -> usize;

    /// Component at `index`. Panics when `index >= self.dimension()`.
    fn component(&self, index: usize) -> f64;
}

impl VectorLike for [f64] {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl VectorLike for Vec<f64> {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl<const N: usize> VectorLike for [f64; N] {
    fn dimension(&self) -> usize {
        N
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl VectorLike for Array1<f64> {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl<T: VectorLike + ?Sized> VectorLike for &T {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn component(&self, index: usize) -> f64 {
        (**self).component(index)
    }
}

pub(crate) fn ensure_same_dimension(expected: usize, got: usize) -> crate::Result<()> {
    if expected != got {
        tracing::debug!(expected, got, "operands differ in dimension");
        return Err(crate::VectorError::DimensionMismatch { expected, got });
    }
    Ok(())
}

/// Dimension shared by every element of `vectors`, checked up front so no
/// summation starts on a malformed batch.
pub(crate) fn common_dimension<V: VectorLike>(vectors: &[V]) -> crate::Result<usize> {
    let first = vectors.first().ok_or_else(|| {
        tracing::debug!("no vectors supplied");
        crate::VectorError::EmptyInput
    })?;
    let expected = first.dimension();

    if let Some((index, got)) = vectors
        .iter()
        .map(|vector| vector.dimension())
        .enumerate()
        .find(|&(_, dim)| dim != expected)
    {
        tracing::debug!(index, expected, got, "batch has mixed dimensions");
        return Err(crate::VectorError::MixedDimensions {
            index,
            expected,
            got,
        });
    }

    Ok(expected)
}
