//! # Eventline
//!
//! A terminal event-planning assistant. Eventline derives a full planning
//! checklist and budget breakdown from a handful of inputs, then lets you
//! track it from the command line or an interactive TUI.
//!
//! ## Features
//!
//! *   **Rule-driven timelines**: deadlines are counted back from the
//!     event date with calendar-aware durations; large events get longer
//!     lead times.
//! *   **Event families**: weddings, corporate events, birthdays, and
//!     religious celebrations each contribute specialized tasks, driven
//!     by your answers to a short questionnaire.
//! *   **Budget breakdown**: percentage allocations per category, scaled
//!     by guest count, always summing to exactly 100%.
//! *   **Dual interface**: scriptable CLI plus a ratatui checklist.
//! *   **Data persistence**: the plan is stored in the standard XDG data
//!     directory (JSON format).
//!
//! ## Usage
//!
//! ```bash
//! # What types does the catalog know?
//! eventline types
//!
//! # Which questions apply to my event?
//! eventline questions "Lebanese Wedding"
//!
//! # Generate (and save) a plan
//! eventline generate "Lebanese Wedding" --date 2025-12-20 \
//!     --guests 200 --budget 30000 \
//!     --answer "Traditional Zaffe Procession" \
//!     --answer "Live Arabic Music Band"
//!
//! # Track it
//! eventline show
//! eventline complete 3
//! eventline budget
//!
//! # Or interactively
//! eventline
//! ```
//!
//! ## Data storage
//!
//! The plan is saved as `plan.json` under your local data directory
//! (Linux: `~/.local/share/eventline/`). Override the file location with
//! the `EVENTLINE_DB` environment variable.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

use eventline::commands::*;
use eventline::tui::run_tui;

#[derive(Parser)]
#[command(name = "eventline")]
#[command(about = "Event timeline & budget planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an event plan and save it
    Generate {
        /// Event type, e.g. "Lebanese Wedding" (quoted if it has spaces)
        event_type: String,
        /// Event date in YYYY-MM-DD
        #[arg(short, long)]
        date: String,
        /// Number of invited guests
        #[arg(short, long)]
        guests: u32,
        /// Total budget in your currency
        #[arg(short, long)]
        budget: f64,
        /// Questionnaire answer: an option label, or key=value for text
        /// answers. Repeatable.
        #[arg(short, long)]
        answer: Vec<String>,
    },
    /// Show the saved plan's tasks
    Show {
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
    },
    /// Show the saved plan's budget breakdown
    Budget,
    /// List the questions asked for an event type
    Questions {
        /// Event type to look up
        event_type: String,
    },
    /// List recognized event types
    Types,
    /// Mark a task as complete
    Complete {
        /// Task id or its position in `show --all`
        task: String,
    },
    /// Mark a task as pending again
    Uncomplete {
        /// Task id or its position in `show --all`
        task: String,
    },
    /// Delete the saved plan
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Open interactive TUI
    Ui,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Generate {
            event_type,
            date,
            guests,
            budget,
            answer,
        }) => cmd_generate(event_type, date, guests, budget, answer, false),
        Some(Commands::Show { all }) => cmd_show(all),
        Some(Commands::Budget) => cmd_budget(),
        Some(Commands::Questions { event_type }) => cmd_questions(event_type),
        Some(Commands::Types) => cmd_types(),
        Some(Commands::Complete { task }) => cmd_set_completed(task, true, false),
        Some(Commands::Uncomplete { task }) => cmd_set_completed(task, false, false),
        Some(Commands::Reset { force }) => cmd_reset(force),
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return;
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "eventline", &mut io::stdout());
        }
        Some(Commands::Ui) | None => {
            if let Err(e) = run_tui() {
                eprintln!("Error running TUI: {}", e);
            }
        }
    }
}
