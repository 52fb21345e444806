//! Ralph's math homework helper: add two numbers, then either show off the
//! answer or give up, depending on how big the sum is.

mod input;
mod problem;

pub use input::{parse_number, read_number};
pub use problem::{ANSWER_SLOT, DIFFICULTY_THRESHOLD, Difficulty, MathProblem, Response, fill_template};

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;
use rand::Rng;

use crate::{catalog::Catalog, common::separator, console::Console};

/// Runs one homework session: both operands, the sum, and Ralph's answer.
///
/// Parameters:
///   - `console`: terminal streams
///   - `catalog`: response and error pools
///   - `rng`: random source for the flavor text
///
/// Returns: the response that was shown
pub fn help_with_math<I, O, R>(
    console: &mut Console<I, O>,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<Response>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    console.blank()?;
    console.say("Ralph needs help with his math homework!")?;
    console.say("Give Ralph two numbers to add together.")?;

    debug!("math: awaiting first number");
    let first = read_number(console, catalog, rng, "First number: ")?;
    debug!("math: awaiting second number");
    let second = read_number(console, catalog, rng, "Second number: ")?;

    let problem = MathProblem::new(first, second);
    debug!("math: computed {problem} = {}", problem.sum());

    console.blank()?;
    console.say(format!("Ralph is trying to solve: {problem}"))?;
    console.say("Ralph is thinking really hard...\n")?;

    let response = problem.respond(catalog, rng)?;
    debug!("math: responded ({})", response.difficulty);

    console.say(separator())?;
    console.say(&response.text)?;
    console.say(separator())?;
    console.blank()?;

    Ok(response)
}
