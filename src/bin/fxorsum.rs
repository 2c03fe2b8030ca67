// fxorsum — generate or verify XOR-fold checking data for a file

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use xorsum_rs::common::{io_error_msg, reset_sigpipe};
use xorsum_rs::xorsum::{
    BLOCK_SIZE, ChecksumEngine, DEFAULT_BUFFER_CAPACITY, HEX_DIGEST_LEN, MAX_BUFFER_CAPACITY,
    Verification,
};

const TOOL_NAME: &str = "fxorsum";

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_PARAM: i32 = 1;
const EXIT_FILE_PROC_ERROR: i32 = 2;
const EXIT_INCORRECT_FILE: i32 = 3;

#[derive(Parser)]
#[command(
    name = "fxorsum",
    version,
    about = "Generate XOR-fold checking data for FILE, or verify FILE against CHECK_DATA"
)]
struct Cli {
    /// Report the file being processed and the processing time on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Read buffer size in bytes, 64 to 67108864 (does not affect the result)
    #[arg(
        long = "buffer-size",
        value_name = "BYTES",
        default_value_t = DEFAULT_BUFFER_CAPACITY as u64,
        value_parser = clap::value_parser!(u64).range(BLOCK_SIZE as u64..=MAX_BUFFER_CAPACITY as u64)
    )]
    buffer_size: u64,

    /// File to process
    file: PathBuf,

    /// Checking data to verify FILE against (128 hex characters)
    check_data: Option<String>,
}

/// Print an error message with the usage line and return invalid-parameter.
fn usage_error(message: &str) -> i32 {
    eprintln!("{}: {}", TOOL_NAME, message);
    eprintln!("Usage: {} [OPTIONS] FILE [CHECK_DATA]", TOOL_NAME);
    eprintln!("Try '{} --help' for more information.", TOOL_NAME);
    EXIT_INVALID_PARAM
}

fn write_line(line: &str) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", line)
        .and_then(|_| out.flush())
        .context("write error")
}

/// Map an output failure to an exit code. A closed pipe is not an error.
fn report_write(result: anyhow::Result<()>, code: i32) -> i32 {
    match result {
        Ok(()) => code,
        Err(e) => match e.downcast_ref::<io::Error>() {
            Some(io_err) if io_err.kind() == io::ErrorKind::BrokenPipe => code,
            Some(io_err) => {
                eprintln!("{}: write error: {}", TOOL_NAME, io_error_msg(io_err));
                EXIT_FILE_PROC_ERROR
            }
            None => {
                eprintln!("{}: {:#}", TOOL_NAME, e);
                EXIT_FILE_PROC_ERROR
            }
        },
    }
}

fn run_generate(engine: &ChecksumEngine, path: &Path) -> i32 {
    match engine.generate(path) {
        Ok(checking_data) => report_write(write_line(&checking_data), EXIT_SUCCESS),
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, e);
            EXIT_FILE_PROC_ERROR
        }
    }
}

fn run_verify(engine: &ChecksumEngine, path: &Path, check_data: &str) -> i32 {
    match engine.verify(path, check_data) {
        Ok(Verification::Match) => {
            report_write(write_line(&format!("{}: OK", path.display())), EXIT_SUCCESS)
        }
        Ok(Verification::Mismatch {
            first_difference, ..
        }) => {
            eprintln!(
                "{}: {}: data differs from checking data at digest byte {}",
                TOOL_NAME,
                path.display(),
                first_difference
            );
            report_write(
                write_line(&format!("{}: FAILED", path.display())),
                EXIT_INCORRECT_FILE,
            )
        }
        Ok(Verification::MalformedInput(e)) => usage_error(&e.to_string()),
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, e);
            EXIT_FILE_PROC_ERROR
        }
    }
}

fn run(cli: &Cli) -> i32 {
    if cli.file.as_os_str().is_empty() {
        return usage_error("invalid file name");
    }

    // Length is checked before the engine is involved at all
    if let Some(check_data) = &cli.check_data {
        let len = check_data.chars().count();
        if len != HEX_DIGEST_LEN {
            return usage_error(&format!(
                "invalid checking data size {}, it must be {} characters",
                len, HEX_DIGEST_LEN
            ));
        }
    }

    let engine = ChecksumEngine::new().with_buffer_capacity(cli.buffer_size as usize);
    if cli.verbose {
        eprintln!("{}: processing {}", TOOL_NAME, cli.file.display());
    }

    let start = Instant::now();
    let code = match &cli.check_data {
        Some(check_data) => run_verify(&engine, &cli.file, check_data),
        None => run_generate(&engine, &cli.file),
    };

    if cli.verbose {
        eprintln!(
            "{}: processing completed in {:.3}s",
            TOOL_NAME,
            start.elapsed().as_secs_f64()
        );
    }
    code
}

fn main() {
    reset_sigpipe();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help/--version print to stdout and succeed; everything else
            // is a parameter error
            let code = if e.use_stderr() {
                EXIT_INVALID_PARAM
            } else {
                EXIT_SUCCESS
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    process::exit(run(&cli));
}

// ── Tests ───────────────────────────────────────────────────────────
