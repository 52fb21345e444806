use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;
use rand::Rng;

use crate::{catalog::Catalog, console::Console, pool::pick};

/// Parses user text as a finite floating-point number.
///
/// Surrounding whitespace is ignored. `inf`, `nan` and values that overflow
/// to infinity are rejected.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Prompts until the user enters a number.
///
/// Every malformed entry prints a random message from the number error pool
/// and repeats the same prompt. Interruption and end of input are returned
/// to the caller untouched.
///
/// Parameters:
///   - `console`: terminal streams
///   - `catalog`: supplies the number error pool
///   - `rng`: random source for the error message
///   - `prompt`: text shown before each attempt
///
/// Returns: the first valid number entered
pub fn read_number<I, O, R>(
    console: &mut Console<I, O>,
    catalog: &Catalog,
    rng: &mut R,
    prompt: &str,
) -> Result<f64>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    loop {
        let line = console.prompt(prompt)?;
        if let Some(number) = parse_number(&line) {
            return Ok(number);
        }

        debug!("rejected numeric input: {line}");
        console.say(pick(catalog.number_errors, "number error", rng)?)?;
    }
}
