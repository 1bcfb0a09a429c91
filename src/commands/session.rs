use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::cli::SessionCommand;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::session::{SessionStore, User, UserSession};

#[derive(Debug, Serialize)]
struct SessionStatus {
    account: String,
    signed_in: bool,
    user: Option<User>,
    note: String,
}

pub fn run(ctx: &AppContext, command: SessionCommand) -> AppResult<()> {
    match command {
        SessionCommand::Show => {
            let session = ctx.session_store.load(&ctx.account)?;
            let status = SessionStatus {
                account: ctx.account.clone(),
                signed_in: session.is_some(),
                note: if session.is_some() {
                    "session loaded from local store".to_string()
                } else {
                    "no session found".to_string()
                },
                user: session.map(|session| session.user),
            };

            let text = match status.user.as_ref() {
                Some(user) => format!(
                    "{}: signed in as {} <{}>",
                    status.account, user.name, user.email
                ),
                None => format!("{}: signed out", status.account),
            };
            ctx.output.emit(&text, &status)
        }
        SessionCommand::Import(args) => {
            let session = read_session_file(&args.file)?;
            ctx.session_store.save(&ctx.account, &session)?;

            let status = SessionStatus {
                account: ctx.account.clone(),
                signed_in: true,
                user: Some(session.user),
                note: format!("session imported from {}", args.file.display()),
            };
            let text = format!("{}: {}", status.account, status.note);
            ctx.output.emit(&text, &status)
        }
        SessionCommand::Clear => {
            ctx.session_store.clear(&ctx.account)?;
            let status = SessionStatus {
                account: ctx.account.clone(),
                signed_in: false,
                user: None,
                note: "local session removed".to_string(),
            };
            let text = format!("{}: signed out", status.account);
            ctx.output.emit(&text, &status)
        }
    }
}

fn read_session_file(path: &Path) -> AppResult<UserSession> {
    let raw = fs::read_to_string(path)?;
    let session: UserSession = serde_json::from_str(&raw)?;

    if session.token.trim().is_empty() {
        return Err(AppError::InvalidInput(format!(
            "session file {} has an empty token",
            path.display()
        )));
    }

    Ok(session)
}
