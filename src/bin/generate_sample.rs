use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic multi-section DAT file for trying out the viewer.
#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// Output path.
    #[arg(short, long, default_value = "sample_data.dat")]
    output: PathBuf,

    /// Points per section.
    #[arg(short, long, default_value_t = 500)]
    points: usize,

    /// PRNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

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

/// One section: a few metadata lines, then `x y` rows. A stray
/// non-numeric pair is mixed in so the metadata fallback is visible.
fn write_section(
    out: &mut String,
    label: &str,
    peaks: &[(f64, f64, f64)],
    n: usize,
    rng: &mut SimpleRng,
) {
    let _ = writeln!(out, "sample: {label}");
    let _ = writeln!(out, "points: {n}");
    let _ = writeln!(out, "units cm-1 absorbance");

    for i in 0..n {
        let x = 4000.0 - i as f64 * (2000.0 / n.max(1) as f64);
        let signal: f64 = peaks
            .iter()
            .map(|&(mu, sigma, amp)| gaussian(x, mu, sigma, amp))
            .sum();
        let y = signal + rng.gauss(0.0, 0.005);
        let _ = writeln!(out, "{x:.2} {y:.6}");
        if i == n / 2 {
            let _ = writeln!(out, "midpoint reached");
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let samples: [(&str, Vec<(f64, f64, f64)>); 3] = [
        ("Sample_A", vec![(3400.0, 80.0, 0.8), (2900.0, 40.0, 0.5), (2350.0, 30.0, 0.3)]),
        ("Sample_B", vec![(3200.0, 60.0, 0.6), (2800.0, 50.0, 0.7), (2500.0, 35.0, 0.4)]),
        ("Sample_C", vec![(3600.0, 70.0, 0.9), (3000.0, 45.0, 0.4), (2200.0, 25.0, 0.5)]),
    ];

    let mut out = String::new();
    for (i, (label, peaks)) in samples.iter().enumerate() {
        if i > 0 {
            out.push('&');
            out.push('\n');
        }
        write_section(&mut out, label, peaks, args.points, &mut rng);
    }

    std::fs::write(&args.output, out)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!(
        "Generated {} sections with seed {} into {}",
        samples.len(),
        args.seed,
        args.output.display()
    );

    println!(
        "Wrote {} sections ({} points each) to {}",
        samples.len(),
        args.points,
        args.output.display()
    );
    Ok(())
}
