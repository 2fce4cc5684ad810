//! Generate A (M×K) and B (K×N), multiply, print previews and timing.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, debug, info};
use thiserror::Error;

use dense_matmul::config::{Cli, RunConfig};
use dense_matmul::printer::write_preview;
use dense_matmul::{Matrix, MatmulError, MatrixFactory, multiply};

/// Exit status for a failed write to stdout (other than a closed pipe).
const IO_EXIT_STATUS: u8 = 8;

#[derive(Error, Debug)]
enum RunError {
    #[error(transparent)]
    Matmul(#[from] MatmulError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MATMUL_LOG", "warn"))
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (`| head`); nothing left to report to.
        Err(RunError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early: {e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                RunError::Matmul(e) => e.exit_code(),
                RunError::Io(_) => ExitCode::from(IO_EXIT_STATUS),
            }
        }
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), RunError> {
    let config = RunConfig::from_cli(cli)?;
    let (m, k, n) = (config.dims.m, config.dims.k, config.dims.n);
    let (max_rows, max_cols) = (config.preview.max_rows, config.preview.max_cols);

    let mut factory = match config.seed {
        Some(seed) => {
            info!("using fixed seed {seed}");
            MatrixFactory::with_seed(seed)
        }
        None => MatrixFactory::from_entropy(),
    };

    writeln!(out, "Generating matrices [{},{}] and [{},{}]...", m, k, k, n)?;
    let a = factory.generate(m, k)?;
    let b = factory.generate(k, n)?;

    writeln!(out, "Matrix A:")?;
    write_preview(out, &a, max_rows, max_cols)?;
    writeln!(out, "Matrix B:")?;
    write_preview(out, &b, max_rows, max_cols)?;

    let start = Instant::now();
    let c = multiply(&a, &b)?;
    let elapsed = start.elapsed().as_secs_f64();

    writeln!(out, "Result matrix C (A * B):")?;
    write_preview(out, &c, max_rows, max_cols)?;

    writeln!(out, "Multiplication took {} seconds.", elapsed)?;
    if elapsed > 0.0 {
        let gflops = Matrix::flop_count(m, k, n) / elapsed / 1e9;
        writeln!(out, "Throughput: {:.3} GFLOPS", gflops)?;
    }
    writeln!(
        out,
        "Arithmetic intensity: {:.3} FLOP/byte",
        Matrix::arithmetic_intensity(m, k, n)
    )?;
    out.flush()?;
    info!("[{m}x{k}] * [{k}x{n}] in {elapsed:.6}s");

    Ok(())
}
