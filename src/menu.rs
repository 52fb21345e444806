//! Banner, menu rendering, choice validation and dispatch.

use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
};

use anyhow::Result;
use colored::Colorize;
use log::debug;
use rand::Rng;

use crate::{
    APP_NAME, Catalog, Console, MenuChoice, MenuOption, get_menu_options, math::help_with_math,
    parse_choice, pool::pick,
    quotes::{display_quote, random_quote},
};

pub const CHOICE_PROMPT: &str = "Choose an option (1-3): ";
pub const GENERAL_ERROR_MESSAGE: &str = "\nOops! Something went wrong! Ralph's brain hurts!";

const BANNER_WIDTH: usize = 33;

fn banner_rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

pub fn display_welcome_banner<I: BufRead, O: Write>(console: &mut Console<I, O>) -> Result<()> {
    console.blank()?;
    console.say(banner_rule())?;
    let title = format!("  {APP_NAME}!");
    console.say(title.as_str().cyan().bold())?;
    console.say(banner_rule())?;
    console.blank()
}

pub fn display_menu<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    options: &[MenuOption],
) -> Result<()> {
    console.blank()?;
    console.say("What would you like to do?")?;
    console.blank()?;
    for option in options {
        console.say(format!("{}. {}", option.key, option.label))?;
    }
    console.blank()
}

pub fn display_goodbye<I: BufRead, O: Write>(console: &mut Console<I, O>) -> Result<()> {
    console.blank()?;
    console.say(banner_rule())?;
    console.say("Bye! I'm going to play now!".green().bold())?;
    console.say("- Ralph")?;
    console.say(banner_rule())?;
    console.blank()
}

/// Prompts until the user types one of the menu keys.
///
/// Invalid entries print a random menu error and repeat the prompt; the menu
/// block itself is not redrawn.
pub fn read_choice<I, O, R>(
    console: &mut Console<I, O>,
    catalog: &Catalog,
    rng: &mut R,
    options: &[MenuOption],
) -> Result<MenuChoice>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    loop {
        let line = console.prompt(CHOICE_PROMPT)?;
        if let Some(choice) = parse_choice(options, &line) {
            return Ok(choice);
        }

        debug!("rejected menu input: {line}");
        let message = pick(catalog.menu_errors, "menu error", rng)?;
        console.blank()?;
        console.say(message)?;
        console.blank()?;
    }
}

/// Runs the feature behind `choice`.
///
/// Returns: `Break` once the user chose to exit, `Continue` otherwise
pub fn handle_choice<I, O, R>(
    choice: MenuChoice,
    console: &mut Console<I, O>,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ControlFlow<()>>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    debug!("menu choice: {choice}");
    match choice {
        MenuChoice::ShowQuote => {
            let quote = random_quote(catalog, rng)?;
            display_quote(console, quote)?;
            Ok(ControlFlow::Continue(()))
        }
        MenuChoice::DoMath => {
            help_with_math(console, catalog, rng)?;
            Ok(ControlFlow::Continue(()))
        }
        MenuChoice::Exit => {
            display_goodbye(console)?;
            Ok(ControlFlow::Break(()))
        }
    }
}

/// Shows the banner once, then loops over menu, choice and feature until the
/// user exits. Errors, including interruption, are returned unhandled.
pub fn run_menu<I, O, R>(console: &mut Console<I, O>, catalog: &Catalog, rng: &mut R) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let options = get_menu_options();
    display_welcome_banner(console)?;

    loop {
        display_menu(console, &options)?;
        let choice = read_choice(console, catalog, rng, &options)?;
        if handle_choice(choice, console, catalog, rng)?.is_break() {
            return Ok(());
        }
    }
}
