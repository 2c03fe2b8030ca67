// fhmacmd5 — keyed HMAC-MD5 fingerprint of a file

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use xorsum_rs::common::{io_error_msg, reset_sigpipe};
use xorsum_rs::hmac;
use xorsum_rs::xorsum::hex;

const TOOL_NAME: &str = "fhmacmd5";

/// Key used when `--key` is not given.
const DEFAULT_KEY: &str = "ActivCash_6.0.x";

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_PARAM: i32 = 1;
const EXIT_FILE_PROC_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "fhmacmd5", version, about = "Compute the HMAC-MD5 of FILE")]
struct Cli {
    /// Secret key
    #[arg(short = 'k', long = "key", default_value = DEFAULT_KEY)]
    key: String,

    /// Report the file being processed and the processing time on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// File to fingerprint
    file: PathBuf,
}

fn run(cli: &Cli) -> i32 {
    if cli.verbose {
        eprintln!("{}: processing {}", TOOL_NAME, cli.file.display());
    }
    let start = Instant::now();

    let code = match hmac::hmac_md5_file(cli.key.as_bytes(), &cli.file) {
        Ok(file_mac) if file_mac.bytes == 0 => {
            eprintln!(
                "{}: {}: file has no content to hash",
                TOOL_NAME,
                cli.file.display()
            );
            EXIT_FILE_PROC_ERROR
        }
        Ok(file_mac) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            match writeln!(out, "{}", hex::encode_lower(&file_mac.mac)) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("{}: write error: {}", TOOL_NAME, io_error_msg(&e));
                    EXIT_FILE_PROC_ERROR
                }
            }
        }
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, e);
            EXIT_FILE_PROC_ERROR
        }
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

#[cfg(test)]
mod tests {
    use std::process::Command;

    use xorsum_rs::hmac;
    use xorsum_rs::xorsum::hex;

    fn cmd() -> Command {
        let mut path = std::env::current_exe().unwrap();
        path.pop();
        path.pop();
        path.push("fhmacmd5");
        Command::new(path)
    }

    #[test]
    fn test_known_vector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msg.txt");
        std::fs::write(&path, b"what do ya want for nothing?").unwrap();

        let output = cmd().args(["--key", "Jefe"]).arg(&path).output().unwrap();
        assert_eq!(output.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.trim(), "750c783e6ab0b503eaa86e310a5db738");
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, b"").unwrap();

        let output = cmd().args(["-k", "key"]).arg(&path).output().unwrap();
        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("no content"));
    }

    #[test]
    fn test_default_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msg.txt");
        std::fs::write(&path, b"what do ya want for nothing?").unwrap();

        let output = cmd().arg(&path).output().unwrap();
        assert_eq!(output.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&output.stdout);
        let expected = hex::encode_lower(&hmac::hmac_md5(
            b"ActivCash_6.0.x",
            b"what do ya want for nothing?",
        ));
        assert_eq!(stdout.trim(), expected);
    }

    #[test]
    fn test_missing_file_argument() {
        let output = cmd().args(["-k", "key"]).output().unwrap();
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_nonexistent_file() {
        let output = cmd()
            .args(["-k", "key", "/nonexistent/file.txt"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("fhmacmd5:"));
    }
}
