//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::config::StoreOptions;

#[derive(Debug, Parser)]
#[command(name = "quizpilot")]
#[command(about = "Interactive quiz trainer: list, add, edit, test and play quizzes")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    store: StoreArgs,
}

#[derive(Debug, Args)]
struct StoreArgs {
    /// SQLite database file (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Keep quizzes in memory only; nothing is persisted
    #[arg(long, global = true, conflicts_with = "db")]
    memory: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the quiz REPL to TCP clients
    Serve {
        /// Listen address, host:port (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Show effective merged config and the resolved quiz store
    Config,
}

pub enum CliAction {
    Interactive(StoreOptions),
    Serve {
        store: StoreOptions,
        bind: Option<String>,
    },
    InspectConfig(StoreOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        let store = StoreOptions {
            db_path: self.store.db,
            in_memory: self.store.memory,
        };

        match self.command {
            None => Ok(CliAction::Interactive(store)),
            Some(Commands::Config) => Ok(CliAction::InspectConfig(store)),
            Some(Commands::Serve { bind }) => {
                if let Some(addr) = &bind
                    && addr.rsplit_once(':').is_none_or(|(_, port)| port.parse::<u16>().is_err())
                {
                    return Err(format!("invalid --bind `{addr}`: expected host:port"));
                }
                Ok(CliAction::Serve { store, bind })
            }
        }
    }
}
