//! Full sessions driven through the library with scripted input.

use std::io::Cursor;

use rand::{SeedableRng, rngs::StdRng};
use ralph::{
    App, Catalog, Console, Exit,
    catalog::{HARD_RESPONSES, MENU_ERROR_MESSAGES, QUOTES},
};

fn session(input: &str, seed: u64) -> (Exit, String) {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut app = App::new(console, Catalog::default(), StdRng::seed_from_u64(seed));
    let exit = app.run();
    let out = String::from_utf8(app.into_console().into_output()).unwrap();
    (exit, out)
}

#[test]
fn test_quote_then_exit() {
    let (exit, out) = session("1\n3\n", 1);
    assert_eq!(exit, Exit::Completed);
    assert!(out.contains("Ralph Wiggum Fun App!"));
    assert!(out.contains("What would you like to do?"));
    assert!(out.contains("Ralph Wiggum says:"));
    assert!(QUOTES.iter().any(|q| out.contains(&format!("\"{q}\""))));
    assert!(out.contains("Bye! I'm going to play now!"));
}

#[test]
fn test_easy_math_then_exit() {
    let (exit, out) = session("2\n3\n4\n3\n", 2);
    assert_eq!(exit, Exit::Completed);
    assert!(out.contains("Ralph needs help with his math homework!"));
    assert!(out.contains("3 + 4"));
    assert!(out.contains('7'));
}

#[test]
fn test_hard_math_then_exit() {
    let (exit, out) = session("2\n8\n9\n3\n", 3);
    assert_eq!(exit, Exit::Completed);
    assert!(HARD_RESPONSES.iter().any(|r| out.contains(r)));
    assert!(!out.contains("17"));
}

#[test]
fn test_invalid_choice_before_quote() {
    let (exit, out) = session("5\n1\n3\n", 4);
    assert_eq!(exit, Exit::Completed);

    let quote_at = out.find("Ralph Wiggum says:").unwrap();
    let error_at = MENU_ERROR_MESSAGES
        .iter()
        .filter_map(|m| out.find(m))
        .min()
        .unwrap();
    assert!(error_at < quote_at);
}

#[test]
fn test_malformed_numbers_keep_session_alive() {
    let (exit, out) = session("2\nabc\n\n6\nx\n4\n3\n", 5);
    assert_eq!(exit, Exit::Completed);
    assert!(out.contains("6 + 4"));
    assert!(out.contains("10"));
    assert!(out.contains("Bye! I'm going to play now!"));
}

#[test]
fn test_several_features_in_one_session() {
    let (exit, out) = session("1\n2\n1\n1\n9\n1\n3\n", 6);
    assert_eq!(exit, Exit::Completed);
    assert_eq!(out.matches("Ralph Wiggum says:").count(), 2);
    assert_eq!(out.matches("Ralph is trying to solve:").count(), 1);
    assert!(out.contains("1 + 1"));
    assert_eq!(out.matches("What would you like to do?").count(), 4);
}

#[test]
fn test_same_seed_same_session() {
    let input = "1\n2\n2\n2\n7\n1\n1\n3\n";
    assert_eq!(session(input, 77), session(input, 77));
}

#[test]
fn test_input_ending_early_fails() {
    let (exit, out) = session("1\n", 7);
    assert_eq!(exit, Exit::Failed);
    assert!(out.contains("Oops! Something went wrong! Ralph's brain hurts!"));
    assert!(!out.contains("Bye! I'm going to play now!"));
}
