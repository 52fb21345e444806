//! Standard input that turns Ctrl+C into an [`Interrupted`] error instead of
//! letting the signal kill the process.
//!
//! On Unix a `SIGINT` handler is installed without `SA_RESTART`, so a blocking
//! `read(2)` returns `EINTR` and the reader can report the interruption. The
//! error travels up as an ordinary `io::Error` wrapping [`Interrupted`].

use std::io::{self, BufRead};

use derive_more::Display;

/// The user asked to stop (Ctrl+C) while the program was waiting for input.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("interrupted by user")]
pub struct Interrupted;

impl std::error::Error for Interrupted {}

/// Returns true if `err` carries an [`Interrupted`] payload.
#[must_use]
pub fn is_interrupt(err: &io::Error) -> bool {
    err.get_ref().is_some_and(|inner| inner.is::<Interrupted>())
}

/// Opens standard input for line reading with interruption support.
///
/// Parameters: None
///
/// Returns: a buffered line source over stdin
#[cfg(unix)]
pub fn interruptible_stdin() -> io::Result<impl BufRead> {
    unix::install_handler()?;
    Ok(io::BufReader::new(unix::RawStdin))
}

/// Opens standard input for line reading. Ctrl+C keeps the platform default.
#[cfg(not(unix))]
pub fn interruptible_stdin() -> io::Result<impl BufRead> {
    Ok(io::stdin().lock())
}

#[cfg(unix)]
mod unix {
    use std::{
        io::{self, Read},
        sync::atomic::{AtomicBool, Ordering},
    };

    use log::debug;

    use super::Interrupted;

    static INTERRUPTED: AtomicBool = AtomicBool::new(false);

    extern "C" fn on_sigint(_signum: libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    pub(super) fn install_handler() -> io::Result<()> {
        // SAFETY: an all-zero sigaction is valid; the handler only stores to an atomic,
        // which is async-signal-safe.
        let ret = unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = on_sigint as extern "C" fn(libc::c_int) as libc::sighandler_t;
            action.sa_flags = 0;
            libc::sigemptyset(&raw mut action.sa_mask);
            libc::sigaction(libc::SIGINT, &raw const action, std::ptr::null_mut())
        };

        if ret != 0 {
            return Err(io::Error::last_os_error());
        }

        debug!("SIGINT handler installed");
        Ok(())
    }

    /// Unbuffered stdin. `std::io::Stdin` retries on `EINTR`, which would hide
    /// the interruption, so this reads the descriptor directly.
    pub(super) struct RawStdin;

    impl Read for RawStdin {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            loop {
                if INTERRUPTED.load(Ordering::SeqCst) {
                    return Err(io::Error::other(Interrupted));
                }

                // SAFETY: `buf` is valid for writes of `buf.len()` bytes.
                let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
                if let Ok(read) = usize::try_from(n) {
                    return Ok(read);
                }

                let err = io::Error::last_os_error();
                if err.kind() != io::ErrorKind::Interrupted {
                    return Err(err);
                }
            }
        }
    }
}
