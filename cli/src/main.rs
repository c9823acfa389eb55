//! `insper-admin`: the Blockchain Insper back office from a terminal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs the same `portal` auth context and typed endpoints as the web admin,
//! over `reqwest`, with the session kept in a JSON file between runs.
//! Results are printed as pretty JSON on stdout; logs go to stderr.

mod commands;
mod input;
mod session_file;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use portal::config::DEFAULT_API_URL;
use portal::forms::ValidationError;
use portal::types::Role;
use portal::{AuthError, RequestError};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `insper-admin login` first")]
    NotLoggedIn,
    #[error("only a super_admin can manage administrators")]
    NotSuperAdmin,
    #[error("{0}")]
    Request(#[from] RequestError),
    #[error("{}", .0.message())]
    Auth(#[from] AuthError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Input(String),
    #[error("no {kind} with id `{id}`")]
    NotFound { kind: &'static str, id: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Parser, Debug)]
#[command(name = "insper-admin", about = "Blockchain Insper back-office CLI")]
struct Cli {
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Where the login session is kept between runs.
    #[arg(long, env = session_file::SESSION_FILE_ENV)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and keep the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "INSPER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the logged-in administrator.
    Whoami,
    ChangePassword {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        /// Defaults to `--new`.
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Counters plus the most recent events and news.
    Dashboard,
    Events(EventsCommand),
    News(NewsCommand),
    Contacts(ContactsCommand),
    Messages(MessagesCommand),
    Admins(AdminsCommand),
    Upload(UploadCommand),
    Backups(BackupsCommand),
}

#[derive(Args, Debug)]
struct EventsCommand {
    #[command(subcommand)]
    command: EventsSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventsSubcommand {
    List {
        /// Include inactive events (admin listing).
        #[arg(long)]
        all: bool,
    },
    Show {
        id: String,
    },
    Create {
        /// JSON object, or `@file.json`.
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        /// JSON object with the fields to change, or `@file.json`.
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct NewsCommand {
    #[command(subcommand)]
    command: NewsSubcommand,
}

#[derive(Subcommand, Debug)]
enum NewsSubcommand {
    List {
        /// Include inactive news (admin listing).
        #[arg(long)]
        all: bool,
    },
    Featured,
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct ContactsCommand {
    #[command(subcommand)]
    command: ContactsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ContactsSubcommand {
    Show,
    Update {
        #[arg(long)]
        data: String,
    },
}

#[derive(Args, Debug)]
struct MessagesCommand {
    #[command(subcommand)]
    command: MessagesSubcommand,
}

#[derive(Subcommand, Debug)]
enum MessagesSubcommand {
    List {
        #[arg(long)]
        unread: bool,
    },
    /// Set the read and/or answered flags.
    Mark {
        id: String,
        #[arg(long)]
        read: Option<bool>,
        #[arg(long)]
        answered: Option<bool>,
    },
    Delete {
        id: String,
    },
    /// Send a message through the public contact form.
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoleArg {
    Admin,
    #[value(name = "super_admin")]
    SuperAdmin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::SuperAdmin => Role::SuperAdmin,
        }
    }
}

#[derive(Args, Debug)]
struct AdminsCommand {
    #[command(subcommand)]
    command: AdminsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AdminsSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum, default_value = "admin")]
        role: RoleArg,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: String,
    },
    SetPassword {
        id: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Args, Debug)]
struct UploadCommand {
    #[command(subcommand)]
    command: UploadSubcommand,
}

#[derive(Subcommand, Debug)]
enum UploadSubcommand {
    /// Upload an image and print its URL.
    Put { path: PathBuf },
    Delete { filename: String },
}

#[derive(Args, Debug)]
struct BackupsCommand {
    #[command(subcommand)]
    command: BackupsSubcommand,
}

#[derive(Subcommand, Debug)]
enum BackupsSubcommand {
    Create,
    List,
    Restore { filename: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session_path = cli.session_file.clone().unwrap_or_else(session_file::default_session_path);
    let mut admin = commands::connect(&cli.api_url, session_path)?;
    commands::run(&mut admin, cli.command).await
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
