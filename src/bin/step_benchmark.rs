//! Timing comparison of serial and rayon-parallel generation stepping

use std::time::Instant;

use life_canvas::domain::{ConwayRule, Grid};
use rand::{SeedableRng, rngs::StdRng};

fn seeded_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::bounded(size, size, size, size);
    grid.randomize(&mut rng, 0.3);
    grid
}

/// Average milliseconds per generation
fn time_steps(size: usize, iterations: u32, step: impl Fn(&Grid) -> Grid) -> f64 {
    let mut grid = seeded_grid(size);
    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Generation step benchmark ===\n");
    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    let iterations = 50;
    for size in [25, 50, 100, 250, 500, 1000] {
        let serial_ms = time_steps(size, iterations, |g| g.step(&ConwayRule));
        let parallel_ms = time_steps(size, iterations, |g| g.step_parallel(&ConwayRule));

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
