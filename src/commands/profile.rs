use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use serde::Serialize;

use crate::cli::{ProfileCommand, UpdateArgs};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::{OutputMode, text};
use crate::profile::{
    ProfileFormData, ProfileSubmitter, Session, SubmitOutcome, ValidationErrors,
};
use crate::session::User;

pub async fn run(ctx: &AppContext, command: ProfileCommand) -> AppResult<()> {
    match command {
        ProfileCommand::Show => show(ctx),
        ProfileCommand::Update(args) => update(ctx, args).await,
        ProfileCommand::Avatar => Err(AppError::NotImplemented("avatar selection")),
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum UpdateReport<'a> {
    Updated { user: &'a User },
    Rejected { errors: &'a ValidationErrors },
    Failed,
}

fn show(ctx: &AppContext) -> AppResult<()> {
    let user = ctx.session().current_user()?.ok_or_else(|| {
        AppError::Session("not signed in. run `profilectl session import <file>`".to_string())
    })?;

    let text = format!("{} <{}> (id {})", user.name, user.email, user.id);
    ctx.output.emit(&text, &user)
}

async fn update(ctx: &AppContext, args: UpdateArgs) -> AppResult<()> {
    let client = ctx.profile_client()?;
    let access_token = ctx.access_token()?;
    let submitter = ProfileSubmitter::new(
        client.authorized(access_token),
        ctx.session(),
        ctx.output,
        ctx.output,
        ctx.settings.locale(),
    );

    let mut form = submitter.prefilled_form()?;
    if let Some(path) = args.form_file.as_deref() {
        overlay(&mut form, read_form_file(path)?);
    }
    apply_flags(&mut form, &args);
    if args.change_password {
        prompt_passwords(&mut form)?;
    }

    match submitter.submit(&form).await? {
        SubmitOutcome::Updated(user) => {
            let text = format!("saved {} <{}>", user.name, user.email);
            ctx.output.emit(&text, &UpdateReport::Updated { user: &user })
        }
        SubmitOutcome::Rejected(errors) => {
            if ctx.output.mode() == OutputMode::Text {
                text::print_line("profile not saved:")?;
                text::print_field_errors(&errors)?;
            } else {
                ctx.output
                    .emit("", &UpdateReport::Rejected { errors: &errors })?;
            }

            Err(AppError::InvalidInput(format!(
                "{} profile field(s) failed validation",
                errors.len()
            )))
        }
        SubmitOutcome::Failed => {
            if ctx.output.mode() == OutputMode::Json {
                ctx.output.emit("", &UpdateReport::Failed)?;
            }
            Err(AppError::Api("profile update was not applied".to_string()))
        }
        SubmitOutcome::Busy => Err(AppError::InvalidInput(
            "a profile update is already in progress".to_string(),
        )),
    }
}

fn read_form_file(path: &Path) -> AppResult<ProfileFormData> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Copies the non-empty fields of `incoming` over `form`.
fn overlay(form: &mut ProfileFormData, incoming: ProfileFormData) {
    let ProfileFormData {
        name,
        email,
        old_password,
        password,
        password_confirmation,
    } = incoming;

    for (slot, value) in [
        (&mut form.name, name),
        (&mut form.email, email),
        (&mut form.old_password, old_password),
        (&mut form.password, password),
        (&mut form.password_confirmation, password_confirmation),
    ] {
        if !value.is_empty() {
            *slot = value;
        }
    }
}

fn apply_flags(form: &mut ProfileFormData, args: &UpdateArgs) {
    for (slot, value) in [
        (&mut form.name, &args.name),
        (&mut form.email, &args.email),
        (&mut form.old_password, &args.old_password),
        (&mut form.password, &args.password),
        (&mut form.password_confirmation, &args.password_confirmation),
    ] {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
}

fn prompt_passwords(form: &mut ProfileFormData) -> AppResult<()> {
    if !io::stdin().is_terminal() {
        return Err(AppError::InvalidInput(
            "--change-password needs an interactive terminal; pass --old-password, --password and --password-confirmation instead".to_string(),
        ));
    }

    form.old_password = prompt_line("Current password: ")?;
    form.password = prompt_line("New password: ")?;
    form.password_confirmation = prompt_line("Confirm new password: ")?;
    Ok(())
}

fn prompt_line(prompt: &str) -> AppResult<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim_end_matches(['\r', '\n']).to_string())
}
