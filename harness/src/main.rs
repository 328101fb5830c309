//! Harness for `wide-mul`.
//!
//! Multiplies `3` by `5` through a [`WideMultiplier`] and checks every word of
//! the 512-bit product. Prints `SUCCESS` and exits with `0` when the product
//! is exact and the status is [`Status::Ok`]; prints `ERROR` and exits with a
//! failure code otherwise.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use wide_mul::{
    U256, U512,
    multiplier::{Backend, Lanes, Software, Status, WideMultiplier},
};

/// Expected product of the scenario, least significant word first.
const EXPECTED: [u32; 16] = [15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Delay applied before the multiplication, in platform cycles
    #[arg(long, default_value_t = 50)]
    delay: u32,

    /// Run on a cluster of compute lanes instead of the calling core
    #[arg(long, value_enum)]
    lanes: Option<LaneCount>,
}

/// Lane counts the harness can run on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LaneCount {
    #[value(name = "0")]
    Zero,
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    #[value(name = "4")]
    Four,
    #[value(name = "8")]
    Eight,
}

fn run<B: Backend>(backend: B, delay: u32) -> (U512, Status) {
    let mut multiplier = WideMultiplier::with_backend(backend);
    multiplier.set_delay(delay);

    let a = U256::from_u32(3);
    let b = U256::from_u32(5);
    debug!(%a, %b, delay, "requesting multiplication");

    multiplier.multiply(&a, &b)
}

/// Does the result match the expected product on every word?
fn verdict(product: &U512, status: Status) -> bool {
    status.is_ok() && product.to_words() == EXPECTED
}

/// Process exit code for a result: `0` on success, the low byte of
/// [`Status::code`] when the multiplier failed, `1` for a wrong product.
fn exit_code(passed: bool, status: Status) -> u8 {
    if passed {
        0
    } else if status.is_ok() {
        1
    } else {
        status.code() as u8
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (product, status) = match args.lanes {
        None => run(Software, args.delay),
        Some(LaneCount::Zero) => run(Lanes::<0>::new(), args.delay),
        Some(LaneCount::One) => run(Lanes::<1>::new(), args.delay),
        Some(LaneCount::Two) => run(Lanes::<2>::new(), args.delay),
        Some(LaneCount::Four) => run(Lanes::<4>::new(), args.delay),
        Some(LaneCount::Eight) => run(Lanes::<8>::new(), args.delay),
    };

    let passed = verdict(&product, status);
    if passed {
        info!(%product, "product verified");
        println!("SUCCESS");
    } else {
        error!(?status, code = status.code(), %product, "unexpected result");
        println!("ERROR");
    }

    ExitCode::from(exit_code(passed, status))
}
