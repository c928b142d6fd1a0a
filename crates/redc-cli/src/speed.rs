//! Throughput benchmark for the REDC kernels.

use crate::parse_classes;
use redc_harness::{Native, Operands, RedcBackend};
use redc_types::SizeClass;
use std::time::{Duration, Instant};

pub fn run(words: &str, seconds: u64) -> Result<(), Box<dyn std::error::Error>> {
    if seconds == 0 {
        return Err("seconds must be at least 1".into());
    }
    let duration = Duration::from_secs(seconds);
    for class in parse_classes(words)? {
        bench_class(class, duration)?;
    }
    Ok(())
}

fn bench_class(class: SizeClass, duration: Duration) -> Result<(), Box<dyn std::error::Error>> {
    let ops = Operands::random(class)?;
    let mut r = vec![0; class.words()];
    let mut ws = vec![0; class.workspace_words()];

    let specialized = time_kernel(duration, || {
        Native.specialized(class, &mut r, ops.z(), ops.p(), ops.p_dash(), &mut ws)
    })?;
    print_rate(&format!("redc {class} specialized"), specialized);

    let generic = time_kernel(duration, || {
        Native.generic(&mut r, ops.z(), ops.p(), ops.p_dash(), &mut ws)
    })?;
    print_rate(&format!("redc {class} generic"), generic);

    Ok(())
}

/// Run `kernel` until `duration` elapses; returns (ops, elapsed seconds).
fn time_kernel<F>(
    duration: Duration,
    mut kernel: F,
) -> Result<(u64, f64), Box<dyn std::error::Error>>
where
    F: FnMut() -> Result<(), redc_types::RedcError>,
{
    let start = Instant::now();
    let mut ops: u64 = 0;

    while start.elapsed() < duration {
        kernel()?;
        ops += 1;
    }

    Ok((ops, start.elapsed().as_secs_f64()))
}

fn print_rate(name: &str, (ops, elapsed): (u64, f64)) {
    let per_sec = ops as f64 / elapsed;
    let ns_per_op = elapsed * 1e9 / ops.max(1) as f64;
    println!("{name:28} {per_sec:14.0} ops/s {ns_per_op:10.1} ns/op  ({ops} ops in {elapsed:.2}s)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_speed_single_class() {
        run("4", 1).unwrap();
    }

    #[test]
    fn test_cli_speed_invalid_args() {
        assert!(run("5", 1).is_err());
        assert!(run("4", 0).is_err());
    }
}
