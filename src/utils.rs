use crate::vector_like::{ensure_same_dimension, VectorLike};
use crate::{Result, Vector};
use rand::Rng;

/// L2 norm of `a - b`. Symmetric in its operands and zero only when they are
/// component-wise equal.
pub fn euclidean_distance<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: VectorLike + ?Sized,
    B: VectorLike + ?Sized,
{
    ensure_same_dimension(a.dimension(), b.dimension())?;

    let sum_of_squares: f64 = (0..a.dimension())
        .map(|i| {
            let diff = a.component(i) - b.component(i);
            diff * diff
        })
        .sum();

    Ok(sum_of_squares.sqrt())
}

pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}
