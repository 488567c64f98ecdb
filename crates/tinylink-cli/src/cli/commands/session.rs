//! `tinylink run` – interactive session against an in-memory store.
//!
//! The session loop owns what the core never touches: the current identity.
//! Every store call receives that identity (or the empty string when logged
//! out) as the requester, and every typed outcome is rendered as a message.

use std::io::{self, Write};

use anyhow::Result;
use tinylink_core::auth;
use tinylink_core::codegen::CodeGenerator;
use tinylink_core::store::{SharedStore, Store};

use crate::cli::repl::{parse_line, SessionCommand};

pub fn run_session(gen: &CodeGenerator, examples: bool) -> Result<()> {
    let store = if examples {
        Store::with_example_data()
    } else {
        Store::new()
    };
    let store = SharedStore::new(store);
    let stdin = io::stdin();
    // Identity of the logged-in account; None between logout and login.
    let mut session: Option<String> = None;

    println!("tinylink interactive session; type `help` for commands.");
    loop {
        print!("tinylink> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                if !dispatch(command, &store, gen, &mut session) {
                    break;
                }
            }
            Err(message) => println!("{message}"),
        }
    }
    println!("bye");
    Ok(())
}

/// Handle one command. Returns false when the session should end.
fn dispatch(
    command: SessionCommand,
    store: &SharedStore,
    gen: &CodeGenerator,
    session: &mut Option<String>,
) -> bool {
    match command {
        SessionCommand::Register { email, password } => {
            match auth::register(&mut store.lock(), gen, &email, &password) {
                Ok(account) => {
                    println!("registered {} as {}", account.email, account.user_id);
                    *session = Some(account.user_id);
                }
                Err(err) => println!("register failed: {err}"),
            }
        }
        SessionCommand::Login { email, password } => {
            match auth::authenticate(&store.lock(), &email, &password) {
                Ok(account) => {
                    println!("logged in as {}", account.user_id);
                    *session = Some(account.user_id);
                }
                Err(err) => println!("login failed: {err}"),
            }
        }
        SessionCommand::Logout => {
            *session = None;
            println!("logged out");
        }
        SessionCommand::Whoami => match session.as_deref() {
            Some(user_id) => {
                let guard = store.lock();
                match guard.get_account(user_id) {
                    Some(account) => println!("{} ({})", account.user_id, account.email),
                    None => println!("{user_id}"),
                }
            }
            None => println!("not logged in"),
        },
        SessionCommand::Shorten { long_url } => match session.as_deref() {
            Some(owner) => match store.lock().create_link(&long_url, owner, gen) {
                Ok(record) => println!("{} -> {}", record.short_code, record.long_url),
                Err(err) => println!("shorten failed: {err}"),
            },
            None => println!("log in or register to shorten URLs"),
        },
        SessionCommand::List => match session.as_deref() {
            Some(owner) => {
                let guard = store.lock();
                let mut records = guard.list_owned(owner);
                if records.is_empty() {
                    println!("no links yet; use `shorten URL`");
                } else {
                    records.sort_by(|a, b| a.short_code.cmp(&b.short_code));
                    println!("{:<10} URL", "CODE");
                    for record in records {
                        println!("{:<10} {}", record.short_code, record.long_url);
                    }
                }
            }
            None => println!("log in to list your links"),
        },
        SessionCommand::Show { code } => match store.lock().get_link(&code) {
            Some(record) => println!(
                "{} -> {} (owner {})",
                record.short_code, record.long_url, record.owner_user_id
            ),
            None => println!("no link under {code}"),
        },
        SessionCommand::Update { code, long_url } => {
            let requester = session.as_deref().unwrap_or("");
            match store.lock().update_link(&code, &long_url, requester) {
                Ok(()) => println!("updated {code}"),
                Err(err) => println!("update {code} failed: {err}"),
            }
        }
        SessionCommand::Delete { code } => {
            let requester = session.as_deref().unwrap_or("");
            match store.lock().delete_link(&code, requester) {
                Ok(()) => println!("deleted {code}"),
                Err(err) => println!("delete {code} failed: {err}"),
            }
        }
        SessionCommand::Help => print_help(),
        SessionCommand::Quit => return false,
    }
    true
}

fn print_help() {
    println!("commands:");
    println!("  register EMAIL PASSWORD   create an account and log in");
    println!("  login EMAIL PASSWORD      log in to an existing account");
    println!("  logout                    end the current login");
    println!("  whoami                    show the logged-in account");
    println!("  shorten URL               mint a short code for URL");
    println!("  list                      list your links");
    println!("  show CODE                 resolve a short code");
    println!("  update CODE URL           point your code at a new URL");
    println!("  delete CODE               remove your link");
    println!("  quit                      end the session");
}
