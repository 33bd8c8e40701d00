//! Factor a composite built from three colors, each a triple of encoded values.
//!
//! `result = ORANGE - PURPLE + BLUE` in every coordinate, computed purely with
//! bind and unbind, then recovered by the resonator network.
//!
//! Run with: `RUST_LOG=phasor_vsa=debug cargo run --example color_factorization`

use phasor_vsa::{vsa, Codebook, CodebookConfig, PhasorHv, ResonatorNetwork};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Bind one encoded value per factor.
fn color(codebook: &Codebook, values: [f64; 3]) -> phasor_vsa::Result<PhasorHv> {
    let encoded = values
        .iter()
        .enumerate()
        .map(|(factor, &value)| codebook.encode(factor, value))
        .collect::<phasor_vsa::Result<Vec<_>>>()?;
    let refs: Vec<&PhasorHv> = encoded.iter().collect();
    vsa::bind_many(&refs)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    println!("=== phasor-vsa Color Factorization ===\n");

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let config = CodebookConfig::default();
    println!(
        "1. Building codebook: {} factors, dim={}, range=±{}, resolution={}",
        config.num_factors, config.dimension, config.max_range, config.resolution
    );
    let codebook = Codebook::build(&config, &mut rng)?;
    println!("   {} levels per factor", codebook.len());

    let purple_values = [6.2, -6.2, 5.3];
    let blue_values = [0.0, -10.0, 5.0];
    let orange_values = [6.7, 5.7, 10.0];

    println!("\n2. Encoding colors");
    println!("   PURPLE = {purple_values:?}");
    println!("   BLUE   = {blue_values:?}");
    println!("   ORANGE = {orange_values:?}");
    let purple = color(&codebook, purple_values)?;
    let blue = color(&codebook, blue_values)?;
    let orange = color(&codebook, orange_values)?;

    println!("\n3. Composite = bind(unbind(ORANGE, PURPLE), BLUE)");
    let composite = vsa::bind(&vsa::unbind(&orange, &purple)?, &blue)?;
    let expected: Vec<f64> = (0..3)
        .map(|i| orange_values[i] - purple_values[i] + blue_values[i])
        .collect();
    println!("   expected per-factor values ≈ {expected:.2?}");

    println!("\n4. Resonator search");
    let network = ResonatorNetwork::new(&codebook, composite, 0.5)?;
    let result = network.find_factors(&mut rng)?;
    println!("   state:       {:?}", result.state);
    println!("   iterations:  {}", result.iterations);
    println!("   indices:     {:?}", result.indices);
    println!("   confidences: {:.3?}", result.confidences);
    println!("   decoded:     {:?}", codebook.decode(&result.indices)?);

    let nearest: Vec<f64> = expected
        .iter()
        .map(|&v| codebook.level(codebook.nearest_level(v)?))
        .collect::<phasor_vsa::Result<_>>()?;
    println!("   nearest grid levels to expected: {nearest:?}");

    println!("\n=== Done ===");
    Ok(())
}
