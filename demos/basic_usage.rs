use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vector_mean::{euclidean_distance, generate_random_vectors, Vector, VectorLike};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vector_mean=debug,basic_usage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Vector Demo");
    println!("===========\n");

    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::new(vec![4.0, 5.0, 6.0]);
    let c: Vec<f64> = vec![7.0, 8.0, 9.0];

    println!("a = {}", a);
    println!("b = {}", b);
    println!("a + b = {}", a.add(&b)?);

    let mixed: [&dyn VectorLike; 3] = [&a, &b, &c];
    println!("average(a, b, c) = {}", Vector::average(&mixed)?);

    match Vector::weighted_average(&mixed, &[1.0, 2.0, 3.0])? {
        Some(mean) => println!("weighted average (1, 2, 3) = {}", mean),
        None => println!("weighted average (1, 2, 3) is undefined"),
    }
    if Vector::weighted_average(&mixed, &[0.0, 0.0, 0.0])?.is_none() {
        println!("weighted average (0, 0, 0) is undefined");
    }

    println!("distance(a, b) = {:.4}", a.euclidean_distance(&b)?);

    // Errors surface with their message contract
    if let Err(err) = a.add(&[1.0f64, 2.0]) {
        println!("a + [1, 2] failed: {}", err);
    }

    let cloud = generate_random_vectors(64, 1000);
    let centroid = Vector::average(&cloud)?;
    let spread = cloud
        .iter()
        .map(|v| euclidean_distance(v, &centroid))
        .collect::<vector_mean::Result<Vec<f64>>>()?;
    let mean_spread = spread.iter().sum::<f64>() / spread.len() as f64;
    info!(
        vectors = cloud.len(),
        dimension = centroid.dimension(),
        mean_spread,
        "computed centroid of random cloud"
    );

    Ok(())
}
