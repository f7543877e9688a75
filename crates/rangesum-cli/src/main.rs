mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use rangesum_core::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "rangesum",
    version,
    about = "Collapse comma-separated integer lists into ranges"
)]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a list and print it in range notation, e.g. "1-3, 5"
    Summarize {
        /// Comma-separated integers; read from stdin when omitted
        #[arg(allow_hyphen_values = true)]
        input: Option<String>,
    },
    /// Parse a list and print its distinct numbers
    Collect {
        /// Comma-separated integers; read from stdin when omitted
        #[arg(allow_hyphen_values = true)]
        input: Option<String>,
        /// Sort the numbers ascending
        #[arg(long)]
        sort: bool,
    },
    /// Expand range notation back into every number it covers
    Expand {
        /// Range notation such as "-3--2, 5-6, 9"
        #[arg(allow_hyphen_values = true)]
        summary: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::Settings::load(cli.format.map(OutputFormat::from)).and_then(
        |settings| match cli.command {
            None => commands::cmd_demo(&settings),
            Some(Command::Summarize { input }) => commands::cmd_summarize(&settings, input),
            Some(Command::Collect { input, sort }) => {
                commands::cmd_collect(&settings, input, sort)
            }
            Some(Command::Expand { summary }) => commands::cmd_expand(&settings, &summary),
            Some(Command::Config) => commands::cmd_config(&settings),
        },
    );

    if let Err(e) = result {
        eprintln!("rangesum: {e:#}");
        std::process::exit(1);
    }
}
