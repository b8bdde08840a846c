//! Step throughput: serial vs parallel compute phase

use std::time::Instant;
use life_board::{Grid, StepStrategy, domain::engine};

fn benchmark(rows: usize, cols: usize, strategy: StepStrategy, iterations: u32) -> Option<f64> {
    let mut grid = Grid::new(rows, cols).ok()?;
    grid.randomize(0.3);
    grid.take_changes();

    let start = Instant::now();
    for _ in 0..iterations {
        engine::step(&mut grid, strategy);
        grid.take_changes();
    }
    Some(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [(90, 160), (250, 250), (500, 500), (720, 1280), (1000, 1000)];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for (rows, cols) in sizes {
        let (Some(serial_ms), Some(parallel_ms)) = (
            benchmark(rows, cols, StepStrategy::Serial, iterations),
            benchmark(rows, cols, StepStrategy::Parallel, iterations),
        ) else {
            println!("{:>12} {:>12}", format!("{}x{}", cols, rows), "rejected");
            continue;
        };

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", cols, rows),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 1000x1000 ===\n");
    let cells = 1_000_000.0;
    for strategy in StepStrategy::all() {
        if let Some(ms) = benchmark(1000, 1000, strategy, iterations) {
            println!(
                "{:<10} {:.2} ms/gen, {:.1}M cells/sec",
                strategy.name(),
                ms,
                cells / (ms / 1000.0) / 1_000_000.0
            );
        }
    }
}
