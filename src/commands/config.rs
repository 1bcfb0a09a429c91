use crate::cli::{ConfigCommand, ConfigSetArgs};
use crate::config;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::Locale;

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => {
            let api_base_url = ctx
                .settings
                .api_base_url()
                .unwrap_or_else(|err| format!("(invalid) {err}"));
            let text = format!(
                "api_base_url: {}\nlocale: {}",
                api_base_url,
                locale_label(ctx.settings.locale())
            );
            ctx.output.emit(&text, &ctx.settings)
        }
        ConfigCommand::Set(args) => set(ctx, args),
    }
}

fn set(ctx: &AppContext, args: ConfigSetArgs) -> AppResult<()> {
    // --api-url overrides are never persisted.
    let mut settings = config::load_settings(&ctx.paths, &ctx.account)?;

    if let Some(api_base_url) = args.api_base_url {
        settings.api_base_url = Some(api_base_url);
    }
    if let Some(locale) = args.locale {
        settings.locale = Some(locale);
    }

    settings.api_base_url()?;
    config::save_settings(&ctx.paths, &ctx.account, &settings)?;

    let path = ctx.paths.settings_file(&ctx.account);
    let text = format!("saved account settings to {}", path.display());
    ctx.output.emit(&text, &settings)
}

fn locale_label(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "pt-br",
        Locale::En => "en",
    }
}
