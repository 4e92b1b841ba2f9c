//! Benchmark runner for the naive multiply.

use densemat::{Element, Matrix, MatrixError, matrix, multiply};
use log::info;
use std::time::Instant;

const SIZES: [usize; 3] = [64, 128, 256];
const ITERATIONS: usize = 3;

fn main() -> Result<(), MatrixError> {
    env_logger::init();

    println!("=== Naive Matrix Multiplication ===\n");

    let a = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]?;
    let b = matrix![[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]?;
    let c = multiply(&a, &b)?;
    println!("[[1,2,3],[4,5,6]] × [[7,8],[9,10],[11,12]] =");
    print_matrix(&c);
    println!();

    let mut all_results = Vec::new();
    for &size in &SIZES {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let results = vec![
            ("f64", bench_size::<f64>(size, ITERATIONS)?),
            ("f32", bench_size::<f32>(size, ITERATIONS)?),
            ("i32", bench_size::<i32>(size, ITERATIONS)?),
        ];

        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            println!("{}. {:6} {:8.2} ms  {:6.2} GFLOPS", i + 1, name, time_ms, gflops);
        }
        println!();

        all_results.push((size, results));
    }

    print_summary_table(&all_results);
    Ok(())
}

fn filled<T: Element>(size: usize, modulus: usize) -> Result<Matrix<T>, MatrixError> {
    let data = (0..size * size)
        .map(|i| T::from_f64((i % modulus) as f64))
        .collect();
    Matrix::from_vec(size, size, data)
}

/// Times `ITERATIONS` multiplies of two `size`×`size` matrices after one warmup.
fn bench_size<T: Element>(size: usize, iterations: usize) -> Result<(f64, f64), MatrixError> {
    let a = filled::<T>(size, 100)?;
    let b = filled::<T>(size, 100)?;

    // Warmup
    multiply(&a, &b)?;

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        let c = multiply(&a, &b)?;
        total += start.elapsed().as_secs_f64();
        std::hint::black_box(c);
    }

    let avg = total / iterations as f64;
    let gflops = 2.0 * (size * size * size) as f64 / avg / 1e9;
    info!("{}x{} {}: {:.3} ms", size, size, std::any::type_name::<T>(), avg * 1000.0);
    Ok((avg * 1000.0, gflops))
}

fn print_matrix<T: Element>(m: &Matrix<T>) {
    for r in 0..m.rows() {
        let row: Vec<String> = (0..m.cols()).map(|c| format!("{:?}", m.get(r, c))).collect();
        println!("  [{}]", row.join(", "));
    }
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[(usize, Vec<(&str, (f64, f64))>)]) {
    println!("\n{}", "=".repeat(60));
    println!("SUMMARY");
    println!("{}", "=".repeat(60));

    print!("\n{:<8}", "Type");
    for (size, _) in all_results {
        print!(" {:>14}", format!("{}×{}", size, size));
    }
    println!();
    println!("{}", "-".repeat(60));

    let num_types = all_results.first().map_or(0, |(_, results)| results.len());
    for type_idx in 0..num_types {
        print!("{:<8}", all_results[0].1[type_idx].0);
        for (_, results) in all_results {
            print!(" {:>11.2} GF", results[type_idx].1.1);
        }
        println!();
    }

    println!("{}", "=".repeat(60));
    println!("\nGF = GFLOPS (billion floating point operations per second)\n");
}
