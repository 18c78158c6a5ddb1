use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw(RawOutputMode),
}

#[derive(Debug, Clone, Copy)]
enum RawOutputMode {
    InteractivePassthrough,
    Markdown,
}

mod commands;
mod docs;
mod output;
mod tty;

use commands::config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "aliasgen")]
#[command(version = VERSION)]
#[command(about = "Create command aliases as shim scripts on the search path")]
#[command(override_usage = "aliasgen [--yes] <yourAliasName> <yourCommand>\n       aliasgen [--yes] <COMMAND>")]
#[command(disable_help_subcommand = true, arg_required_else_help = true)]
struct Cli {
    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every alias with its command
    List,
    /// Show one alias
    Show {
        /// Alias name
        name: String,
    },
    /// Delete an alias (lists aliases when no name is given)
    Delete {
        /// Alias name
        name: Option<String>,
    },
    /// Create a multi-command alias interactively
    Special,
    /// Create the alias folder and report search-path status
    Setup,
    /// Manage aliasgen configuration
    Config(config::ConfigArgs),
    /// Display usage documentation
    Help,
    /// Create or replace an alias: <name> <command...>
    #[command(external_subcommand)]
    Add(Vec<String>),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Special => ResponseMode::Raw(RawOutputMode::InteractivePassthrough),
        Commands::Help => ResponseMode::Raw(RawOutputMode::Markdown),
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs { yes: cli.yes };
    let mode = response_mode(&cli.command);

    match mode {
        ResponseMode::Json => {}
        ResponseMode::Raw(RawOutputMode::InteractivePassthrough) => {
            if !tty::require_tty_for_interactive() {
                let err = aliasgen::Error::validation_invalid_argument(
                    "tty",
                    "This command requires an interactive TTY",
                    None,
                    None,
                );
                return print_and_exit(Err(err), 2);
            }
        }
        ResponseMode::Raw(RawOutputMode::Markdown) => {
            return match commands::run_markdown(cli.command) {
                Ok((content, exit_code)) => {
                    print!("{}", content);
                    std::process::ExitCode::from(exit_code_to_u8(exit_code))
                }
                Err(err) => print_and_exit(Err(err), 1),
            };
        }
    }

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    print_and_exit(json_result, exit_code)
}

fn print_and_exit(
    result: aliasgen::Result<serde_json::Value>,
    exit_code: i32,
) -> std::process::ExitCode {
    if let Err(err) = output::print_json_result(result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }
    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
