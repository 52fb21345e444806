use std::{
    io::{BufRead, Write},
    process::ExitCode,
};

use anyhow::Result;
use log::{error, info, warn};
use rand::Rng;

use crate::{
    Catalog, Console,
    menu::{GENERAL_ERROR_MESSAGE, run_menu},
    pool::pick,
    signal::Interrupted,
};

/// How a run ended. Only [`App::run`] produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user picked "Exit" from the menu.
    Completed,
    /// The user pressed Ctrl+C. A normal exit, not an error.
    Interrupted,
    /// Anything else went wrong.
    Failed,
}

impl Exit {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Completed | Self::Interrupted => 0,
            Self::Failed => 1,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// The whole application: terminal streams, fixed pools and random source.
pub struct App<I, O, R> {
    console: Console<I, O>,
    catalog: Catalog,
    rng: R,
}

impl<I, O, R> App<I, O, R>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    #[must_use]
    pub fn new(console: Console<I, O>, catalog: Catalog, rng: R) -> Self {
        Self {
            console,
            catalog,
            rng,
        }
    }

    /// Runs the menu loop under the single top-level guard that decides how
    /// the program ends.
    ///
    /// Returns: `Completed` on menu exit, `Interrupted` on Ctrl+C (after a
    /// farewell), `Failed` on any other error (after the generic message)
    pub fn run(&mut self) -> Exit {
        match run_menu(&mut self.console, &self.catalog, &mut self.rng) {
            Ok(()) => Exit::Completed,
            Err(e) if e.is::<Interrupted>() => {
                info!("{e}");
                if let Err(e) = self.say_interrupt_farewell() {
                    warn!("unable to say goodbye: {e:#}");
                }
                Exit::Interrupted
            }
            Err(e) => {
                error!("{e:#}");
                if let Err(e) = self.console.say(GENERAL_ERROR_MESSAGE) {
                    warn!("unable to report failure: {e:#}");
                }
                Exit::Failed
            }
        }
    }

    /// Gives back the console, e.g. to inspect what a test run printed.
    pub fn into_console(self) -> Console<I, O> {
        self.console
    }

    fn say_interrupt_farewell(&mut self) -> Result<()> {
        let message = pick(self.catalog.interrupt_messages, "interrupt message", &mut self.rng)?;
        self.console.say(message)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::catalog::INTERRUPT_MESSAGES;

    type TestApp<I> = App<I, Vec<u8>, StdRng>;

    fn app(input: &str) -> TestApp<Cursor<Vec<u8>>> {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        App::new(console, Catalog::default(), StdRng::seed_from_u64(9))
    }

    fn output<I: BufRead>(app: TestApp<I>) -> String {
        String::from_utf8(app.into_console().into_output()).unwrap()
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Exit::Completed.code(), 0);
        assert_eq!(Exit::Interrupted.code(), 0);
        assert_eq!(Exit::Failed.code(), 1);
    }

    #[test]
    fn test_run_completes_on_exit_choice() {
        let mut app = app("3\n");
        assert_eq!(app.run(), Exit::Completed);
        assert!(!output(app).contains("Oops!"));
    }

    #[test]
    fn test_run_fails_on_end_of_input() {
        let mut app = app("2\n1\n");
        assert_eq!(app.run(), Exit::Failed);
        assert!(output(app).ends_with(&format!("{GENERAL_ERROR_MESSAGE}\n")));
    }

    #[test]
    fn test_run_fails_on_empty_quote_pool() {
        let console = Console::new(Cursor::new(b"1\n3\n".to_vec()), Vec::new());
        let catalog = Catalog::builder().quotes(&[]).build();
        let mut app = App::new(console, catalog, StdRng::seed_from_u64(9));
        assert_eq!(app.run(), Exit::Failed);
    }

    /// Serves the scripted bytes, then reports Ctrl+C.
    struct CtrlCAfter(Cursor<Vec<u8>>);

    impl Read for CtrlCAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.read(buf)? {
                0 => Err(io::Error::other(Interrupted)),
                n => Ok(n),
            }
        }
    }

    fn interrupted_app(input: &str) -> TestApp<io::BufReader<CtrlCAfter>> {
        let reader = io::BufReader::new(CtrlCAfter(Cursor::new(input.as_bytes().to_vec())));
        App::new(Console::new(reader, Vec::new()), Catalog::default(), StdRng::seed_from_u64(9))
    }

    #[test]
    fn test_run_interrupted_at_menu_is_graceful() {
        let mut app = interrupted_app("");
        assert_eq!(app.run(), Exit::Interrupted);

        let out = output(app);
        assert!(INTERRUPT_MESSAGES.iter().any(|m| out.ends_with(&format!("{m}\n"))));
        assert!(!out.contains("Oops!"));
    }

    #[test]
    fn test_run_interrupted_inside_math_is_graceful() {
        let mut app = interrupted_app("2\n4\n");
        assert_eq!(app.run(), Exit::Interrupted);

        let out = output(app);
        assert!(out.contains("Second number: "));
        assert!(INTERRUPT_MESSAGES.iter().any(|m| out.contains(m)));
    }
}
