//! Tests for the interactive session line parser.

use crate::cli::repl::{parse_line, SessionCommand};

#[test]
fn parse_blank_line_is_nothing() {
    assert_eq!(parse_line(""), Ok(None));
    assert_eq!(parse_line("   \t  "), Ok(None));
}

#[test]
fn parse_register_and_login() {
    assert_eq!(
        parse_line("register a@x.com hunter2"),
        Ok(Some(SessionCommand::Register {
            email: "a@x.com".to_string(),
            password: "hunter2".to_string(),
        }))
    );
    assert_eq!(
        parse_line("login a@x.com hunter2"),
        Ok(Some(SessionCommand::Login {
            email: "a@x.com".to_string(),
            password: "hunter2".to_string(),
        }))
    );
}

#[test]
fn parse_bare_commands() {
    assert_eq!(parse_line("logout"), Ok(Some(SessionCommand::Logout)));
    assert_eq!(parse_line("whoami"), Ok(Some(SessionCommand::Whoami)));
    assert_eq!(parse_line("list"), Ok(Some(SessionCommand::List)));
    assert_eq!(parse_line("help"), Ok(Some(SessionCommand::Help)));
    assert_eq!(parse_line("quit"), Ok(Some(SessionCommand::Quit)));
    assert_eq!(parse_line("exit"), Ok(Some(SessionCommand::Quit)));
}

#[test]
fn parse_link_commands() {
    assert_eq!(
        parse_line("shorten http://example.com"),
        Ok(Some(SessionCommand::Shorten {
            long_url: "http://example.com".to_string(),
        }))
    );
    assert_eq!(
        parse_line("show b2xVn2"),
        Ok(Some(SessionCommand::Show {
            code: "b2xVn2".to_string(),
        }))
    );
    assert_eq!(
        parse_line("update b2xVn2 http://new.com"),
        Ok(Some(SessionCommand::Update {
            code: "b2xVn2".to_string(),
            long_url: "http://new.com".to_string(),
        }))
    );
    assert_eq!(
        parse_line("delete b2xVn2"),
        Ok(Some(SessionCommand::Delete {
            code: "b2xVn2".to_string(),
        }))
    );
}

#[test]
fn parse_wrong_arity_reports_usage() {
    assert!(parse_line("register a@x.com").unwrap_err().contains("usage"));
    assert!(parse_line("shorten").unwrap_err().contains("usage"));
    assert!(parse_line("update b2xVn2").unwrap_err().contains("usage"));
    assert!(parse_line("logout now").unwrap_err().contains("logout"));
}

#[test]
fn parse_unknown_command_is_an_error() {
    let message = parse_line("frobnicate").unwrap_err();
    assert!(message.contains("frobnicate"));
}

#[test]
fn parse_extra_whitespace_is_tolerated() {
    assert_eq!(
        parse_line("  shorten   http://example.com  "),
        Ok(Some(SessionCommand::Shorten {
            long_url: "http://example.com".to_string(),
        }))
    );
}
