//! Rotates a synthetic image and prints both versions.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use imgview::{Img, View, Extension, NearestNeighbor};

#[derive(Parser, Debug)]
#[command(about = "Rotate a synthetic image about its center")]
struct Args {
    /// Rotation angle in degrees.
    #[arg(long, default_value_t = 30.0)]
    angle: f64,

    /// Width of the image.
    #[arg(long, default_value_t = 24)]
    width: u64,

    /// Height of the image.
    #[arg(long, default_value_t = 12)]
    height: u64,

    /// Use nearest-neighbor sampling instead of n-linear.
    #[arg(long)]
    nearest: bool,
}

fn print(img: &impl View<T=u8>) {
    let iv = img.interval();
    for y in iv.min(1) ..= iv.max(1) {
        let row: String = (iv.min(0) ..= iv.max(0)).map(|x| {
            match img.at(&[x, y]) {
                0 => ' ',
                1..=99 => '.',
                100..=199 => '+',
                _ => '#',
            }
        }).collect();
        println!("|{}|", row);
    }
}

fn main() -> imgview::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let img = Img::<u8>::from_fn(&[args.width, args.height], |pos| {
        if pos[1] < args.height as i64 / 3 { 255 } else { 120 }
    });
    print(&img);
    println!();
    let rotated = if args.nearest {
        (&img).rotate_with(args.angle, 2, Extension::Zero, NearestNeighbor)?.copy()
    } else {
        (&img).rotate(args.angle, 2)?.copy()
    };
    tracing::info!(interval = %rotated.interval(), "rotated");
    print(&rotated);
    Ok(())
}
