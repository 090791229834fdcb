use clap::Parser;

mod cli;
mod commands;
mod config;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Cli::parse();
    let cfg = match config::Config::try_load_from_file_or_default(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::error!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    // Nothing past this point is fatal: operations degrade to a no-op
    // plus a diagnostic instead of terminating the session.
    if let Err(err) = commands::run(&cfg, args.command) {
        log::error!("{err}");
    }
}
