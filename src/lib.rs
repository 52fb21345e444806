mod app;
pub mod catalog;
mod common;
pub mod console;
mod logging;
pub mod math;
pub mod menu;
pub mod pool;
pub mod quotes;
pub mod signal;

pub use app::{App, Exit};
pub use catalog::Catalog;
pub use common::{APP_NAME, PROJECT_NAME, PROJECT_VERSION};
pub use console::Console;
pub use logging::Logging;

use derive_more::Display;

/// Menu option for the main menu
pub struct MenuOption {
    pub key: &'static str,
    pub label: &'static str,
    pub choice: MenuChoice,
}

/// Actions the user can pick from the main menu
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    #[display("show quote")]
    ShowQuote,
    #[display("do math")]
    DoMath,
    #[display("exit")]
    Exit,
}

/// Returns all menu options in display order
#[must_use]
pub fn get_menu_options() -> Vec<MenuOption> {
    vec![
        MenuOption {
            key: "1",
            label: "Show me a Ralph quote",
            choice: MenuChoice::ShowQuote,
        },
        MenuOption {
            key: "2",
            label: "Help Ralph with math homework",
            choice: MenuChoice::DoMath,
        },
        MenuOption {
            key: "3",
            label: "Exit",
            choice: MenuChoice::Exit,
        },
    ]
}

/// Looks up the choice for a key typed by the user. Surrounding whitespace is
/// ignored; anything else must match exactly.
#[must_use]
pub fn parse_choice(options: &[MenuOption], input: &str) -> Option<MenuChoice> {
    let key = input.trim();
    options.iter().find(|o| o.key == key).map(|o| o.choice)
}
