use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use portal::MemoryStorage;
use portal::storage::{TOKEN_KEY, USER_KEY};
use portal::transport::{HttpBody, HttpRequest, HttpResponse, Method, TransportError};

use super::*;
use crate::{AdminsCommand, EventsCommand, MessagesCommand};

#[derive(Clone, Default)]
struct FakeBackend {
    replies: Rc<RefCell<VecDeque<HttpResponse>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeBackend {
    fn reply(&self, status: u16, body: Value) -> &Self {
        self.replies.borrow_mut().push_back(HttpResponse { status, body: body.to_string() });
        self
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| TransportError("no scripted reply".to_owned()))
    }
}

fn anonymous(backend: &FakeBackend) -> AuthContext<FakeBackend, MemoryStorage> {
    AuthContext::new(ApiClient::new(ApiConfig::new("http://api.test/api"), backend.clone()), MemoryStorage::new())
}

fn logged_in(backend: &FakeBackend, role: &str) -> AuthContext<FakeBackend, MemoryStorage> {
    let user = json!({ "id": "1", "name": "Ana", "email": "ana@example.com", "role": role }).to_string();
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "abc"), (USER_KEY, user.as_str())]);
    // Answer the `/auth/me` check the first authenticated command makes.
    backend.reply(200, json!({ "success": true, "user": { "id": "1", "name": "Ana", "role": role } }));
    AuthContext::new(ApiClient::new(ApiConfig::new("http://api.test/api"), backend.clone()), storage)
}

fn json_body(request: &HttpRequest) -> Value {
    match &request.body {
        HttpBody::Json(text) => serde_json::from_str(text).expect("json body"),
        other => panic!("expected JSON body, got {other:?}"),
    }
}

// =============================================================
// Public routes
// =============================================================

#[tokio::test]
async fn public_listing_needs_no_session() {
    let backend = FakeBackend::default();
    backend.reply(200, json!({ "success": true, "data": [{ "id": "1", "titulo": "Meetup", "data": "2024-05-01" }] }));
    let mut session = anonymous(&backend);

    run(&mut session, Command::Events(EventsCommand { command: EventsSubcommand::List { all: false } }))
        .await
        .expect("list");

    let sent = backend.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "http://api.test/api/eventos");
    assert_eq!(sent[0].header("Authorization"), None);
}

#[tokio::test]
async fn contact_form_is_validated_before_sending() {
    let backend = FakeBackend::default();
    let mut session = anonymous(&backend);

    let err = run(
        &mut session,
        Command::Messages(MessagesCommand {
            command: MessagesSubcommand::Send {
                name: "Rui".to_owned(),
                email: "not-an-email".to_owned(),
                subject: String::new(),
                message: "Olá".to_owned(),
            },
        }),
    )
    .await
    .expect_err("invalid email");

    assert!(matches!(err, CliError::Validation(_)));
    assert!(backend.sent().is_empty());
}

// =============================================================
// Session checks
// =============================================================

#[tokio::test]
async fn protected_command_without_session_sends_nothing() {
    let backend = FakeBackend::default();
    let mut session = anonymous(&backend);

    let err = run(&mut session, Command::Events(EventsCommand { command: EventsSubcommand::Delete { id: "7".to_owned() } }))
        .await
        .expect_err("not logged in");

    assert!(matches!(err, CliError::NotLoggedIn));
    assert!(backend.sent().is_empty());
}

#[tokio::test]
async fn admins_require_super_admin() {
    let backend = FakeBackend::default();
    let mut session = logged_in(&backend, "admin");

    let err = run(&mut session, Command::Admins(AdminsCommand { command: AdminsSubcommand::List }))
        .await
        .expect_err("forbidden");

    assert!(matches!(err, CliError::NotSuperAdmin));
    // Only the session check went out.
    assert_eq!(backend.sent().len(), 1);
}

#[tokio::test]
async fn login_persists_session() {
    let backend = FakeBackend::default();
    backend.reply(
        200,
        json!({ "success": true, "token": "abc", "user": { "id": 1, "name": "A", "role": "admin" } }),
    );
    let mut session = anonymous(&backend);

    run(&mut session, Command::Login { email: "admin@example.com".to_owned(), password: "correct".to_owned() })
        .await
        .expect("login");

    assert_eq!(session.store().storage().get(TOKEN_KEY).as_deref(), Some("abc"));
    assert!(session.store().storage().get(USER_KEY).is_some());
}

// =============================================================
// Updates
// =============================================================

#[tokio::test]
async fn event_update_merges_over_current_record() {
    let backend = FakeBackend::default();
    let mut session = logged_in(&backend, "admin");
    backend
        .reply(
            200,
            json!({ "success": true, "data": {
                "id": "7", "titulo": "Hackathon", "descricao": "48h", "data": "2024-10-10",
                "local": "Insper", "categoria": "Workshop"
            } }),
        )
        .reply(200, json!({ "success": true, "message": "ok" }));

    run(
        &mut session,
        Command::Events(EventsCommand {
            command: EventsSubcommand::Update { id: "7".to_owned(), data: r#"{"local":"Online"}"#.to_owned() },
        }),
    )
    .await
    .expect("update");

    let put = backend.sent().pop().expect("put");
    assert_eq!(put.method, Method::Put);
    assert_eq!(put.url, "http://api.test/api/eventos/7");
    assert_eq!(put.header("Authorization"), Some("Bearer abc"));
    let body = json_body(&put);
    assert_eq!(body["titulo"], "Hackathon");
    assert_eq!(body["local"], "Online");
}

#[tokio::test]
async fn mark_requires_a_flag() {
    let backend = FakeBackend::default();
    let mut session = anonymous(&backend);

    let err = run(
        &mut session,
        Command::Messages(MessagesCommand {
            command: MessagesSubcommand::Mark { id: "m1".to_owned(), read: None, answered: None },
        }),
    )
    .await
    .expect_err("no flags");

    assert!(matches!(err, CliError::Input(_)));
}

#[test]
fn message_flags_only_carry_given_values() {
    let flags = message_flags(Some(true), None).expect("flags");
    assert_eq!(flags, MessageFlags { lida: Some(true), respondida: None });
}

#[test]
fn failed_panel_renders_error_message() {
    let failed: Result<Vec<u8>, RequestError> = Err(RequestError::transport("offline"));
    assert_eq!(panel(&failed).expect("panel"), json!({ "error": "offline" }));
}
