use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_ENV_FILE;

pub mod commands;
pub mod prompt;

#[derive(Parser)]
#[command(name = "workflow-diagram")]
#[command(about = "Render a Frappe workflow as an actdiag diagram link")]
#[command(long_about = "Fetches a workflow definition from a Frappe site, groups its states and \
                       transitions into one lane per role, and prints a Kroki URL that renders \
                       the result as an actdiag SVG. Run without a subcommand to pick a workflow \
                       interactively.")]
pub struct Cli {
    /// Env file holding FRAPPE_BASE_URL, FRAPPE_API_KEY and FRAPPE_API_SECRET
    #[arg(long, global = true, default_value = DEFAULT_ENV_FILE, help = "Path to the env file with Frappe credentials")]
    pub env_file: PathBuf,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info", help = "Log level: error, warn, info, debug, trace")]
    pub log_level: String,

    /// Emit JSON structured logs on stderr
    #[arg(long, global = true, help = "Write logs as JSON lines instead of plain text")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build the diagram URL for one workflow (default command)
    Generate {
        /// Workflow to render; prompts with a numbered menu when omitted
        #[arg(long, short = 'w', help = "Workflow name, skips the interactive menu")]
        workflow: Option<String>,
        /// Also print the actdiag source
        #[arg(long, help = "Print the rendered actdiag text before the URL")]
        print_source: bool,
        /// Escape quotes inside names
        #[arg(long, help = "Backslash-escape double quotes in state and action names")]
        escape_quotes: bool,
    },
    /// List the workflows available on the Frappe site
    List,
    /// Print the actdiag text carried by a diagram token
    Decode {
        /// Token taken from the last path segment of a diagram URL
        token: String,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate {
            workflow: None,
            print_source: false,
            escape_quotes: false,
        }
    }
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Generate { .. } => "generate",
            Commands::List => "list",
            Commands::Decode { .. } => "decode",
        }
    }

    /// Whether the command talks to Frappe and therefore needs credentials
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Decode { .. })
    }
}
