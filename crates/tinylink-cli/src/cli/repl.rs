//! Line parser for the interactive session.

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Register { email: String, password: String },
    Login { email: String, password: String },
    Logout,
    Whoami,
    Shorten { long_url: String },
    List,
    Show { code: String },
    Update { code: String, long_url: String },
    Delete { code: String },
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` for blank lines; `Err` carries the
/// message to print back to the user.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match keyword {
        "register" => {
            let (email, password) = two(&args, "register EMAIL PASSWORD")?;
            SessionCommand::Register {
                email: email.to_string(),
                password: password.to_string(),
            }
        }
        "login" => {
            let (email, password) = two(&args, "login EMAIL PASSWORD")?;
            SessionCommand::Login {
                email: email.to_string(),
                password: password.to_string(),
            }
        }
        "logout" => {
            none(&args, "logout")?;
            SessionCommand::Logout
        }
        "whoami" => {
            none(&args, "whoami")?;
            SessionCommand::Whoami
        }
        "shorten" => {
            let long_url = one(&args, "shorten URL")?;
            SessionCommand::Shorten {
                long_url: long_url.to_string(),
            }
        }
        "list" => {
            none(&args, "list")?;
            SessionCommand::List
        }
        "show" => {
            let code = one(&args, "show CODE")?;
            SessionCommand::Show {
                code: code.to_string(),
            }
        }
        "update" => {
            let (code, long_url) = two(&args, "update CODE URL")?;
            SessionCommand::Update {
                code: code.to_string(),
                long_url: long_url.to_string(),
            }
        }
        "delete" => {
            let code = one(&args, "delete CODE")?;
            SessionCommand::Delete {
                code: code.to_string(),
            }
        }
        "help" => {
            none(&args, "help")?;
            SessionCommand::Help
        }
        "quit" | "exit" => {
            none(&args, keyword)?;
            SessionCommand::Quit
        }
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };

    Ok(Some(command))
}

fn none(args: &[&str], keyword: &str) -> Result<(), String> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(format!("`{keyword}` takes no arguments"))
    }
}

fn one<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, String> {
    match args {
        &[only] => Ok(only),
        _ => Err(format!("usage: {usage}")),
    }
}

fn two<'a>(args: &[&'a str], usage: &str) -> Result<(&'a str, &'a str), String> {
    match args {
        &[first, second] => Ok((first, second)),
        _ => Err(format!("usage: {usage}")),
    }
}
