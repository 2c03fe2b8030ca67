pub mod io;

/// Reset SIGPIPE to default behavior (SIG_DFL) so a closed stdout pipe
/// terminates the tool the way GNU tools are terminated (exit code 141).
/// Rust sets SIGPIPE to SIG_IGN by default. Call at the start of main().
#[inline]
pub fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Format an IO error message without the "(os error N)" suffix.
/// Rust's Display impl adds " (os error 2)" after the OS text; the tools
/// print only "No such file or directory".
pub fn io_error_msg(e: &std::io::Error) -> String {
    if let Some(raw) = e.raw_os_error() {
        let os_err = std::io::Error::from_raw_os_error(raw);
        let msg = format!("{}", os_err);
        msg.replace(&format!(" (os error {})", raw), "")
    } else {
        format!("{}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_msg_strips_os_suffix() {
        let e = std::io::Error::from_raw_os_error(libc::ENOENT);
        let msg = io_error_msg(&e);
        assert!(!msg.contains("os error"));
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_io_error_msg_custom_error() {
        let e = std::io::Error::other("boom");
        assert_eq!(io_error_msg(&e), "boom");
    }
}
