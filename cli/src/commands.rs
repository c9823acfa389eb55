//! Subcommand handlers.
//!
//! Each handler validates its input with the shared `portal::forms` rules,
//! makes sure a session exists when the route needs one, calls the typed
//! endpoint and prints the result. Public routes (listings, detail pages,
//! the contact form) work without logging in.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::path::PathBuf;

use portal::endpoints::{admins, backups, contacts, dashboard, events, media, messages, news};
use portal::forms::{
    validate_admin_update, validate_contact_info, validate_contact_message, validate_event, validate_login,
    validate_new_admin, validate_new_password, validate_news,
};
use portal::format::sort_by_date_desc;
use portal::guard::can_manage_admins;
use portal::storage::Storage;
use portal::transport::Transport;
use portal::types::{AdminUpdate, EventDraft, MessageFlags, NewAdmin, NewContactMessage, NewsDraft, UserProfile};
use portal::{ApiClient, ApiConfig, AuthContext, RequestError};
use serde::Serialize;
use serde_json::{Value, json};

use crate::input::{merge, read_image, read_object};
use crate::session_file::FileStorage;
use crate::transport::ReqwestTransport;
use crate::{
    AdminsSubcommand, BackupsSubcommand, CliError, Command, ContactsSubcommand, EventsSubcommand,
    MessagesSubcommand, NewsSubcommand, UploadSubcommand, print_json,
};

/// The auth context every command runs against.
pub(crate) type AdminSession = AuthContext<ReqwestTransport, FileStorage>;

/// Build the session-aware backend for `api_url`, loading any stored login.
///
/// # Errors
///
/// Returns [`CliError`] when the HTTP client cannot be built or the session
/// file cannot be read.
pub(crate) fn connect(api_url: &str, session_path: PathBuf) -> Result<AdminSession, CliError> {
    let http = reqwest::Client::builder()
        .user_agent(concat!("insper-admin/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let client = ApiClient::new(ApiConfig::new(api_url), ReqwestTransport::new(http));
    let storage = FileStorage::open(session_path)?;
    tracing::debug!(api_url = %client.config().base_url(), session_file = %storage.path().display(), "backend configured");
    Ok(AuthContext::new(client, storage))
}

/// Resolve the stored session and return the logged-in profile.
async fn require_login<T: Transport, S: Storage>(session: &mut AuthContext<T, S>) -> Result<UserProfile, CliError> {
    session.current_user().await?.ok_or(CliError::NotLoggedIn)
}

async fn require_super_admin<T: Transport, S: Storage>(session: &mut AuthContext<T, S>) -> Result<(), CliError> {
    let user = require_login(session).await?;
    if can_manage_admins(&user) { Ok(()) } else { Err(CliError::NotSuperAdmin) }
}

/// A dashboard panel: its value, or `{"error": message}` when it failed.
fn panel<T: Serialize>(result: &Result<T, RequestError>) -> Result<Value, CliError> {
    match result {
        Ok(value) => Ok(serde_json::to_value(value)?),
        Err(err) => Ok(json!({ "error": err.message() })),
    }
}

fn message_flags(read: Option<bool>, answered: Option<bool>) -> Result<MessageFlags, CliError> {
    if read.is_none() && answered.is_none() {
        return Err(CliError::Input("pass --read and/or --answered".to_owned()));
    }
    Ok(MessageFlags { lida: read, respondida: answered })
}

pub(crate) async fn run<T: Transport, S: Storage>(session: &mut AuthContext<T, S>, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            validate_login(&email, &password)?;
            let user = session.login(&email, &password).await?;
            print_json(&user)
        }
        Command::Logout => {
            session.logout()?;
            print_json(&json!({ "success": true }))
        }
        Command::Whoami => print_json(&require_login(session).await?),
        Command::ChangePassword { current, new, confirm } => {
            let confirm = confirm.unwrap_or_else(|| new.clone());
            validate_new_password(Some(&current), &new, &confirm)?;
            require_login(session).await?;
            print_json(&session.change_password(&current, &new).await?)
        }
        Command::Dashboard => {
            require_login(session).await?;
            let overview = dashboard::overview(session).await;
            print_json(&json!({
                "stats": panel(&overview.stats)?,
                "recentEvents": panel(&overview.recent_events)?,
                "recentNews": panel(&overview.recent_news)?,
            }))
        }
        Command::Events(cmd) => run_events(session, cmd.command).await,
        Command::News(cmd) => run_news(session, cmd.command).await,
        Command::Contacts(cmd) => run_contacts(session, cmd.command).await,
        Command::Messages(cmd) => run_messages(session, cmd.command).await,
        Command::Admins(cmd) => run_admins(session, cmd.command).await,
        Command::Upload(cmd) => run_upload(session, cmd.command).await,
        Command::Backups(cmd) => run_backups(session, cmd.command).await,
    }
}

async fn run_events<T: Transport, S: Storage>(
    session: &mut AuthContext<T, S>,
    command: EventsSubcommand,
) -> Result<(), CliError> {
    match command {
        EventsSubcommand::List { all } => {
            let mut items = if all {
                require_login(session).await?;
                events::list_all(session).await?
            } else {
                events::list(session).await?
            };
            sort_by_date_desc(&mut items, |e| &e.data);
            print_json(&items)
        }
        EventsSubcommand::Show { id } => print_json(&events::get(session, &id).await?),
        EventsSubcommand::Create { data } => {
            let draft = merge(&EventDraft::default(), read_object(&data)?)?;
            validate_event(&draft)?;
            require_login(session).await?;
            print_json(&events::create(session, &draft).await?)
        }
        EventsSubcommand::Update { id, data } => {
            let patch = read_object(&data)?;
            require_login(session).await?;
            let current = events::get(session, &id).await?;
            let draft = merge(&EventDraft::from(&current), patch)?;
            validate_event(&draft)?;
            print_json(&events::update(session, &id, &draft).await?)
        }
        EventsSubcommand::Delete { id } => {
            require_login(session).await?;
            print_json(&events::delete(session, &id).await?)
        }
    }
}

async fn run_news<T: Transport, S: Storage>(session: &mut AuthContext<T, S>, command: NewsSubcommand) -> Result<(), CliError> {
    match command {
        NewsSubcommand::List { all } => {
            let mut items = if all {
                require_login(session).await?;
                news::list_all(session).await?
            } else {
                news::list(session).await?
            };
            sort_by_date_desc(&mut items, |n| &n.data);
            print_json(&items)
        }
        NewsSubcommand::Featured => print_json(&news::featured(session).await?),
        NewsSubcommand::Show { id } => print_json(&news::get(session, &id).await?),
        NewsSubcommand::Create { data } => {
            let draft = merge(&NewsDraft::default(), read_object(&data)?)?;
            validate_news(&draft)?;
            require_login(session).await?;
            print_json(&news::create(session, &draft).await?)
        }
        NewsSubcommand::Update { id, data } => {
            let patch = read_object(&data)?;
            require_login(session).await?;
            let current = news::get(session, &id).await?;
            let draft = merge(&NewsDraft::from(&current), patch)?;
            validate_news(&draft)?;
            print_json(&news::update(session, &id, &draft).await?)
        }
        NewsSubcommand::Delete { id } => {
            require_login(session).await?;
            print_json(&news::delete(session, &id).await?)
        }
    }
}

async fn run_contacts<T: Transport, S: Storage>(
    session: &mut AuthContext<T, S>,
    command: ContactsSubcommand,
) -> Result<(), CliError> {
    match command {
        ContactsSubcommand::Show => print_json(&contacts::info(session).await?),
        ContactsSubcommand::Update { data } => {
            let patch = read_object(&data)?;
            require_login(session).await?;
            let current = contacts::info(session).await?;
            let info = merge(&current, patch)?;
            validate_contact_info(&info)?;
            print_json(&contacts::update_info(session, &info).await?)
        }
    }
}

async fn run_messages<T: Transport, S: Storage>(
    session: &mut AuthContext<T, S>,
    command: MessagesSubcommand,
) -> Result<(), CliError> {
    match command {
        MessagesSubcommand::List { unread } => {
            require_login(session).await?;
            let mut items = messages::list(session).await?;
            if unread {
                items.retain(|m| !m.lida);
            }
            print_json(&items)
        }
        MessagesSubcommand::Mark { id, read, answered } => {
            let flags = message_flags(read, answered)?;
            require_login(session).await?;
            print_json(&messages::set_flags(session, &id, flags).await?)
        }
        MessagesSubcommand::Delete { id } => {
            require_login(session).await?;
            print_json(&messages::delete(session, &id).await?)
        }
        MessagesSubcommand::Send { name, email, subject, message } => {
            let message = NewContactMessage { nome: name, email, assunto: subject, mensagem: message };
            validate_contact_message(&message)?;
            print_json(&contacts::send_message(session, &message).await?)
        }
    }
}

async fn run_admins<T: Transport, S: Storage>(session: &mut AuthContext<T, S>, command: AdminsSubcommand) -> Result<(), CliError> {
    require_super_admin(session).await?;
    match command {
        AdminsSubcommand::List => print_json(&admins::list(session).await?),
        AdminsSubcommand::Create { name, email, password, role } => {
            let admin = NewAdmin { nome: name, email, senha: password, role: role.into(), ativo: true };
            validate_new_admin(&admin)?;
            print_json(&admins::create(session, &admin).await?)
        }
        AdminsSubcommand::Update { id, name, email, role, active } => {
            let current = admins::list(session)
                .await?
                .into_iter()
                .find(|admin| admin.id == id)
                .ok_or_else(|| CliError::NotFound { kind: "administrator", id: id.clone() })?;
            let update = AdminUpdate {
                nome: name.unwrap_or(current.nome),
                email: email.unwrap_or(current.email),
                role: role.map_or(current.role, Into::into),
                ativo: active.unwrap_or(current.ativo),
            };
            validate_admin_update(&update)?;
            print_json(&admins::update(session, &id, &update).await?)
        }
        AdminsSubcommand::Delete { id } => print_json(&admins::delete(session, &id).await?),
        AdminsSubcommand::SetPassword { id, password } => {
            validate_new_password(None, &password, &password)?;
            print_json(&admins::set_password(session, &id, &password).await?)
        }
    }
}

async fn run_upload<T: Transport, S: Storage>(session: &mut AuthContext<T, S>, command: UploadSubcommand) -> Result<(), CliError> {
    match command {
        UploadSubcommand::Put { path } => {
            let part = read_image(&path)?;
            require_login(session).await?;
            let uploaded = media::upload_image(session, part).await?;
            tracing::info!(filename = uploaded.name(), "image uploaded");
            print_json(&uploaded)
        }
        UploadSubcommand::Delete { filename } => {
            require_login(session).await?;
            print_json(&media::delete_image(session, &filename).await?)
        }
    }
}

async fn run_backups<T: Transport, S: Storage>(
    session: &mut AuthContext<T, S>,
    command: BackupsSubcommand,
) -> Result<(), CliError> {
    require_login(session).await?;
    match command {
        BackupsSubcommand::Create => {
            let filename = backups::create(session).await?;
            print_json(&json!({ "success": true, "filename": filename }))
        }
        BackupsSubcommand::List => print_json(&backups::list(session).await?),
        BackupsSubcommand::Restore { filename } => print_json(&backups::restore(session, &filename).await?),
    }
}
