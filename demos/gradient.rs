//! Computes the gradient magnitude of a synthetic image by central
//! differences between shifted crops of its border extension.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use imgview::{Img, View, RandomAccessible, Strided, SL};

#[derive(Parser, Debug)]
#[command(about = "Print the gradient magnitude of a synthetic blob")]
struct Args {
    /// Width and height of the image.
    #[arg(long, default_value_t = 16)]
    size: u64,

    /// Subsampling factor applied before differentiating.
    #[arg(long, default_value_t = 1)]
    factor: i64,
}

fn main() -> imgview::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let c = (args.size as f64 - 1.0) / 2.0;
    let full = Img::<i32>::from_fn(&[args.size, args.size], |pos| {
        let (dx, dy) = (pos[0] as f64 - c, pos[1] as f64 - c);
        if dx * dx + dy * dy <= c * c / 2.0 { 200 } else { 20 }
    });
    let image = full.slice((SL.step(args.factor), SL.step(args.factor)))?;
    let interval = image.interval().clone();
    let extended = image.extend_border();

    let mut magnitude_sq = Img::<i32>::zeros(&interval.dimensions()).translate(&interval.min_as_longs())?;
    for axis in 0..2 {
        let mut shift = vec![0; 2];
        shift[axis] = 1;
        let ahead = (&extended).view_interval(interval.translate(&shift)?)?;
        shift[axis] = -1;
        let behind = (&extended).view_interval(interval.translate(&shift)?)?;
        let diff = ahead - behind;
        magnitude_sq += &diff * &diff;
    }
    let magnitude: Img<u8> = magnitude_sq.apply_as(|x| x.sqrt().clamp(0.0, 255.0));
    tracing::info!(max = magnitude.iter().max(), "gradient magnitude");

    for y in interval.min(1) ..= interval.max(1) {
        let row: String = (interval.min(0) ..= interval.max(0)).map(|x| {
            match magnitude[[x, y]] {
                0 => '.',
                1..=127 => '+',
                _ => '#',
            }
        }).collect();
        println!("{}", row);
    }
    Ok(())
}
