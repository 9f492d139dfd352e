// demos/basic_usage.rs
//! Basic matrix usage. Run with `RUST_LOG=dense_matrix=trace` to see the
//! operation log.

use dense_matrix::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut a = Matrix::from_grid(&[[1.0, 2.0], [3.0, 4.0]])?;
    let b = Matrix::from_grid(&[[5.0, 6.0], [7.0, 8.0]])?;

    let product = a.multiply(&b)?;
    println!("A * B =\n{}", product);

    a.add(&b)?;
    println!("A + B =\n{}", a);

    a.subtract(&b)?;
    println!("A + B - B =\n{:.2}", a);

    // Incompatible shapes are reported, not panicked on.
    let wide = Matrix::new(2, 3)?;
    match wide.multiply(&wide) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {}", e),
    }

    let config = ComparisonConfig::from_parameters("abs=1e-12")?;
    let id = Matrix::identity(2)?;
    println!("I * A == A: {}", id.multiply(&a)?.approx_eq(&a, &config));

    Ok(())
}
