use anyhow::Result;
use canvas_client::assignments::DEFAULT_DUE_WINDOW_DAYS;
use canvas_client::{Client, Config};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

/// Read-only Canvas lookups, printed as JSON for assistant tooling.
///
/// Expects CANVAS_BASE and CANVAS_TOKEN in the environment.
#[derive(Debug, Parser)]
#[command(name = "campus", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the courses you're actively enrolled in
    Courses,

    /// List a course's assignments due soon, soonest first
    Assignments {
        course_id: u64,

        /// How many days ahead still counts as "due soon"
        #[arg(long, default_value_t = DEFAULT_DUE_WINDOW_DAYS)]
        due_within_days: i64,
    },

    /// List your own submissions for one assignment
    Submissions {
        course_id: u64,
        assignment_id: u64,
    },

    /// List assignment calendar events
    Events {
        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// Latest date to include (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("command: {:?}", cli.command);

    let client = Client::new(Config::from_env()?)?;

    match cli.command {
        Command::Courses => print_json(&client.list_courses()?),
        Command::Assignments {
            course_id,
            due_within_days,
        } => print_json(&client.list_assignments(course_id, due_within_days)?),
        Command::Submissions {
            course_id,
            assignment_id,
        } => print_json(&client.submissions_raw(course_id, assignment_id)?),
        Command::Events {
            start_date,
            end_date,
        } => print_json(&client.calendar_events_raw(start_date.as_deref(), end_date.as_deref())?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
