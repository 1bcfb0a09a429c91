use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = profilectl::cli::Cli::parse();
    profilectl::logging::init(cli.verbose);

    if let Err(err) = profilectl::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
