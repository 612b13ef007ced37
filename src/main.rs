use anyhow::Result;
use clap::Parser;

use deepl_glossary::cli::commands::{export, menu, terms, test};
use deepl_glossary::cli::{Args, Command};
use deepl_glossary::config::{
    ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config, resolve_terms,
};
use deepl_glossary::deepl::print_languages;
use deepl_glossary::output::{self, OutputConfig};
use deepl_glossary::{logging, ui};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });
    logging::init(args.verbose);

    let code = match run(args).await {
        Ok(()) => exitcode::OK,
        Err(Failure::Config(e)) => {
            ui::print_error(&format!("{e:#}"));
            exitcode::CONFIG
        }
        Err(Failure::Runtime(e)) => {
            ui::print_error(&format!("{e:#}"));
            exitcode::SOFTWARE
        }
    };
    std::process::exit(code);
}

/// Top-level failure, split by the exit code it maps to.
enum Failure {
    Config(anyhow::Error),
    Runtime(anyhow::Error),
}

impl From<anyhow::Error> for Failure {
    fn from(e: anyhow::Error) -> Self {
        Self::Runtime(e)
    }
}

fn load_config_file() -> Result<ConfigFile, Failure> {
    ConfigManager::new()
        .and_then(|manager| manager.load_or_default())
        .map_err(Failure::Config)
}

fn resolve(args: &Args, config_file: &ConfigFile) -> Result<ResolvedConfig, Failure> {
    let options = ResolveOptions {
        endpoint: args.endpoint.clone(),
        name: args.name.clone(),
        from: args.from.clone(),
        to: args.to.clone(),
        glossary_id: args.glossary_id.clone(),
    };
    resolve_config(&options, config_file).map_err(Failure::Config)
}

async fn run(args: Args) -> Result<(), Failure> {
    match &args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Terms) => {
            let config_file = load_config_file()?;
            let terms = resolve_terms(&config_file).map_err(Failure::Config)?;
            terms::print_terms(&terms);
        }
        Some(Command::Export { format, output }) => {
            let config_file = load_config_file()?;
            let terms = resolve_terms(&config_file).map_err(Failure::Config)?;
            export::run_export(&terms, *format, output)?;
        }
        Some(Command::Test { interactive }) => {
            let config = resolve(&args, &load_config_file()?)?;
            test::run_test(&config, *interactive).await?;
        }
        Some(Command::Menu) | None => {
            let config = resolve(&args, &load_config_file()?)?;
            menu::run_menu(&config).await?;
        }
    }

    Ok(())
}
