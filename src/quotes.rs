use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use log::debug;
use rand::Rng;

use crate::{catalog::Catalog, common::separator, console::Console, pool::pick};

/// Chooses one quote uniformly at random.
///
/// Returns: the quote, or `EmptyCollection` if the catalog has no quotes
pub fn random_quote<R>(catalog: &Catalog, rng: &mut R) -> Result<&'static str>
where
    R: Rng + ?Sized,
{
    let quote = *pick(catalog.quotes, "quote", rng)?;
    debug!("selected quote: {quote}");
    Ok(quote)
}

/// Renders `quote` verbatim, in double quotes, between separator lines.
pub fn display_quote<I, O>(console: &mut Console<I, O>, quote: &str) -> Result<()>
where
    I: BufRead,
    O: Write,
{
    console.blank()?;
    console.say(separator())?;
    console.say("Ralph Wiggum says:".yellow().bold())?;
    console.say(format!("\"{quote}\""))?;
    console.say(separator())?;
    console.blank()
}
