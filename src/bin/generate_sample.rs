/// Writes `sample_data.csv` with mixed numeric and text columns for trying
/// out the viewer. Deterministic, so the same file every run.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let groups = [
        ("setosa", 50.0, 3.0, 250.0),
        ("versicolor", 59.0, 4.0, 300.0),
        ("virginica", 66.0, 5.0, 340.0),
    ];

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(["id", "group", "height_cm", "weight_g", "count"])?;

    let mut id = 0i64;
    for &(group, height_mu, height_sigma, weight_mu) in &groups {
        for _ in 0..40 {
            let height = rng.gauss(height_mu, height_sigma);
            let weight = rng.gauss(weight_mu, weight_mu * 0.08);
            let count = (rng.next_f64() * 12.0) as i64 + 1;

            writer.write_record([
                id.to_string(),
                group.to_string(),
                format!("{height:.2}"),
                format!("{weight:.1}"),
                count.to_string(),
            ])?;
            id += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {id} rows to {output_path}");
    Ok(())
}
