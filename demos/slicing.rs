//! Walks through NumPy-like slicing, checking it against the hyperslice
//! primitive and printing the selections of a 1-dimensional image.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use imgview::{Img, View, Mask, Strided, Slice, ALL, SL};

#[derive(Parser, Debug)]
#[command(about = "Compare slicing with hyperslices and print 1-D selections")]
struct Args {
    /// Size of each axis of the 3-dimensional image.
    #[arg(long, num_args = 3, default_values_t = [3, 4, 5])]
    dims: Vec<u64>,

    /// Length of the 1-dimensional image.
    #[arg(long, default_value_t = 5)]
    len: u64,

    /// Step used for the stepped selections.
    #[arg(long, default_value_t = 2)]
    step: i64,
}

fn show(label: &str, v: &impl View<T=i32>) {
    let items: Vec<String> = v.iter().map(|x| x.to_string()).collect();
    println!("{:<14} [{}]  {}", label, items.join(", "), v.interval());
}

fn main() -> imgview::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let a = Img::from_fn(&args.dims, |pos| {
        (pos[0] + args.dims[0] as i64 * (pos[1] + args.dims[1] as i64 * pos[2])) as i32
    });
    for axis in 0..3 {
        let mut agree = true;
        for i in 0..args.dims[axis] as i64 {
            let expected = a.view().hyper_slice(axis, i)?;
            let got = match axis {
                0 => a.slice((i, ALL))?,
                1 => a.slice((SL, i))?,
                _ => a.slice((ALL, i))?,
            };
            agree &= got.elements_equal_to(&expected)?.all_set();
        }
        tracing::info!(axis, agree, "slicing agrees with hyperslices");
        println!("axis {}: {}", axis, agree);
    }

    let b = Img::from_fn(&[args.len], |pos| pos[0] as i32);
    let n = args.len as i64;
    let s = args.step;
    show("SL", &b.slice((SL,))?);
    show("-SL", &b.slice((-SL,))?);
    show("IN(1,3)", &b.slice((1..=3,))?);
    show("IN(1,3)[-SL]", &b.slice((1..=3,))?.slice((-SL,))?);
    show("IN(1,3,-1)", &b.slice((Slice::inclusive(1, 3).step(-1),))?);
    show("IN(0,n-1,s)", &b.slice((Slice::inclusive(0, n - 1).step(s),))?);
    show("EX(0,n,s)", &b.slice((Slice::exclusive(0, n).step(s),))?);
    show("-SL[0,n-1,s]", &b.slice((-Slice::inclusive(0, n - 1).step(s),))?);
    show("IN(step=-s)", &b.slice((SL.step(-s),))?);
    show("IN(1,n-1,s)", &b.slice((Slice::inclusive(1, n - 1).step(s),))?);
    show("1..n", &b.slice((1..n,))?);
    show("..=1", &b.slice((..=1,))?);
    Ok(())
}
