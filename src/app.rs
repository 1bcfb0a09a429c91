use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        account,
        json,
        verbose: _,
        api_url,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(account, json, api_url)?;

    match command {
        Command::Profile(args) => commands::profile::run(&ctx, args.command).await,
        Command::Session(args) => commands::session::run(&ctx, args.command),
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}
