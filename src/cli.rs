use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::profile::Locale;

#[derive(Debug, Parser)]
#[command(name = "profilectl", version, about = "Edit your account profile")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Account name to use"
    )]
    pub account: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Override the api base url for this run")]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Profile(ProfileArgs),
    Session(SessionArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Show,
    Update(UpdateArgs),
    Avatar,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(long, help = "New display name (defaults to the current one)")]
    pub name: Option<String>,
    #[arg(long, help = "New email (defaults to the current one)")]
    pub email: Option<String>,
    #[arg(long, help = "Current password, required to change it")]
    pub old_password: Option<String>,
    #[arg(long, help = "New password")]
    pub password: Option<String>,
    #[arg(long, help = "New password again")]
    pub password_confirmation: Option<String>,
    #[arg(long, help = "Read form fields from a json file")]
    pub form_file: Option<PathBuf>,
    #[arg(
        long,
        conflicts_with_all = ["old_password", "password", "password_confirmation"],
        help = "Prompt for the password fields"
    )]
    pub change_password: bool,
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    Show,
    Import(SessionImportArgs),
    Clear,
}

#[derive(Debug, Args)]
pub struct SessionImportArgs {
    #[arg(help = "Json file holding `token` and `user`")]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    #[arg(long, help = "Base url of the profile api")]
    pub api_base_url: Option<String>,
    #[arg(long, value_parser = parse_locale, help = "Message language: pt-br or en")]
    pub locale: Option<Locale>,
}

fn parse_locale(raw: &str) -> Result<Locale, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pt-br" | "pt" => Ok(Locale::PtBr),
        "en" => Ok(Locale::En),
        other => Err(format!("unsupported locale `{other}`; use pt-br or en")),
    }
}
