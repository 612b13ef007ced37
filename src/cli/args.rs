use clap::{Parser, Subcommand};

use crate::terms::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "deepl-glossary")]
#[command(about = "Manage and test a DeepL glossary of academic AI terms")]
#[command(version)]
pub struct Args {
    /// Suppress status messages and spinners
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log HTTP requests and diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// DeepL API base URL (derived from the key if omitted)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Name for newly created glossaries
    #[arg(short = 'n', long, global = true)]
    pub name: Option<String>,

    /// Source language code (e.g., en)
    #[arg(short = 'f', long = "from", global = true)]
    pub from: Option<String>,

    /// Target language code (e.g., zh)
    #[arg(short = 't', long = "to", global = true)]
    pub to: Option<String>,

    /// Glossary to test against (defaults to the first one listed)
    #[arg(short = 'g', long, global = true)]
    pub glossary_id: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive glossary management menu (default)
    Menu,
    /// Compare translations with and without the glossary
    Test {
        /// Enter texts by hand instead of running the preset cases
        #[arg(short, long)]
        interactive: bool,
    },
    /// Export the term set to a file
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output path; the format's extension is appended if missing
        #[arg(short, long, default_value = "terms_export")]
        output: String,
    },
    /// List language codes that support glossaries
    Languages,
    /// Show the term set that would be uploaded
    Terms,
}
