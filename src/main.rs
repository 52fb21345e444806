use std::{io, process::ExitCode};

use clap::Parser;

use ralph::{
    APP_NAME, App, Catalog, Console, Logging, PROJECT_NAME, PROJECT_VERSION,
    menu::GENERAL_ERROR_MESSAGE, signal::interruptible_stdin,
};

#[derive(Parser)]
#[command(name = PROJECT_NAME, version = PROJECT_VERSION, about = APP_NAME, long_about = None)]
pub struct UserArgs {
    /// Verbose
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = UserArgs::parse();

    if let Err(e) = Logging::new().with_verbose(args.verbose).start() {
        eprintln!("{e:#}");
    }

    let input = match interruptible_stdin() {
        Ok(input) => input,
        Err(e) => {
            log::error!("unable to set up standard input: {e}");
            println!("{GENERAL_ERROR_MESSAGE}");
            return ExitCode::FAILURE;
        }
    };

    let console = Console::new(input, io::stdout());
    let mut app = App::new(console, Catalog::default(), rand::rng());
    app.run().into()
}
