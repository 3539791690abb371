//! Tabulates the density of the normal distribution on `[-1, 1]` for several
//! standard deviations, using pixel-wise arithmetic on 1-dimensional images.

use std::f64::consts::{PI};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use imgview::{Img, View};

#[derive(Parser, Debug)]
#[command(about = "Print the normal density on [-1, 1] for several sigmas")]
struct Args {
    /// Number of samples. At least 1.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    samples: u64,

    /// Mean of the distribution.
    #[arg(long, default_value_t = 0.3)]
    center: f64,

    /// Standard deviations to tabulate.
    #[arg(long, num_args = 1.., default_values_t = [0.1, 0.3, 0.9, 1.5])]
    sigmas: Vec<f64>,

    /// Number of rows to print.
    #[arg(long, default_value_t = 11)]
    rows: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let n = args.samples as f64;
    let x = Img::from_fn(&[args.samples], |pos| pos[0] as f64) / n * 2.0 - 1.0;
    let diff = args.center - &x;
    let densities: Vec<Img<f64>> = args.sigmas.iter().map(|&sigma| {
        let sigma_sq = sigma * sigma;
        let norm = 1.0 / (2.0 * PI * sigma_sq).sqrt();
        let y = norm * (-&diff * &diff / (2.0 * sigma_sq)).exp();
        tracing::debug!(sigma, peak = y.iter().fold(0.0, f64::max), "density");
        y
    }).collect();

    print!("{:>8}", "x");
    for sigma in &args.sigmas { print!("{:>12}", format!("sigma={}", sigma)); }
    println!();
    let rows = args.rows.clamp(2, args.samples.max(2));
    for r in 0..rows {
        let i = (r * (args.samples - 1) / (rows - 1)) as i64;
        print!("{:>8.3}", x[[i]]);
        for y in &densities { print!("{:>12.5}", y[[i]]); }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_must_be_positive() {
        assert!(Args::try_parse_from(["gaussian", "--samples", "0"]).is_err());
        let args = Args::try_parse_from(["gaussian", "--samples", "1"]).unwrap();
        assert_eq!(args.samples, 1);
        assert_eq!(Args::try_parse_from(["gaussian"]).unwrap().samples, 1000);
    }
}
