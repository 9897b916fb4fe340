//! termfolio CLI
//!
//! Interactive portfolio TUI by default; `exec` runs a single portfolio
//! command non-interactively (handy for scripting and for smoke tests).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use termfolio::command::{self, Command, OutputKind, Reply};
use termfolio::profile::load_profile;
use termfolio::store::Mode;
use termfolio::tui;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "Terminal-style developer portfolio")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive TUI (the default)
    Tui {
        /// Starting mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Profile JSON to render instead of the default
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Run one portfolio command and print its output
    Exec {
        /// The command, e.g. `whoami` or `cat pygit`
        command: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: FormatArg,

        /// Profile JSON to render instead of the default
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    Terminal,
    Scene,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Terminal => Mode::Terminal,
            ModeArg::Scene => Mode::Scene,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Human,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(None, None),
        Some(Commands::Tui { mode, profile }) => cmd_tui(mode, profile),
        Some(Commands::Exec { command, format, profile }) => cmd_exec(command, format, profile),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_tui(mode: Option<ModeArg>, profile_path: Option<PathBuf>) -> io::Result<ExitCode> {
    let profile = load_profile(profile_path.as_deref())?;
    tui::run::run(profile, mode.map(Mode::from))?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_exec(
    words: Vec<String>,
    format: FormatArg,
    profile_path: Option<PathBuf>,
) -> io::Result<ExitCode> {
    if words.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "No command given. Try `termfolio exec help`.",
        ));
    }

    let profile = load_profile(profile_path.as_deref())?;
    let parsed = Command::parse(&words.join(" "));

    match command::execute(&parsed, &profile) {
        // `clear` only means something inside the TUI.
        Reply::Clear => Ok(ExitCode::SUCCESS),
        Reply::Output(output) => {
            match format {
                FormatArg::Human => print!("{}", output.content),
                FormatArg::Json => {
                    let json = serde_json::to_string_pretty(&output).map_err(|e| {
                        io::Error::new(io::ErrorKind::InvalidData, e.to_string())
                    })?;
                    println!("{}", json);
                }
            }
            if output.kind == OutputKind::Error {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
