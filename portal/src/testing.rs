//! Scripted transport and shared storage for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::auth::Backend;
use crate::client::{ApiClient, ApiRequest};
use crate::config::ApiConfig;
use crate::envelope::ApiResponse;
use crate::error::{RequestError, StorageError};
use crate::storage::{MemoryStorage, Storage};
use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<HttpResponse, TransportError>>,
    sent: Vec<HttpRequest>,
}

/// Replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON `body`.
    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.reply_raw(status, &body.to_string())
    }

    pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.script
            .borrow_mut()
            .replies
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.script.borrow_mut().replies.push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.script.borrow().sent.clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.script.borrow().sent.last().cloned().expect("no request was sent")
    }

    pub fn pending(&self) -> usize {
        self.script.borrow().replies.len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut script = self.script.borrow_mut();
        script.sent.push(request);
        script
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())))
    }
}

pub fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new(ApiConfig::new("http://api.test/api"), transport.clone())
}

pub const TEST_TOKEN: &str = "test-token";

/// Backend that sends every authenticated request with [`TEST_TOKEN`].
pub struct TokenBackend {
    client: ApiClient<ScriptedTransport>,
}

impl Backend for TokenBackend {
    async fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let bearer = request.auth.then_some(TEST_TOKEN);
        self.client.execute(request, bearer).await
    }
}

pub fn backend(transport: &ScriptedTransport) -> TokenBackend {
    TokenBackend { client: client(transport) }
}

/// One storage seen by several `AuthContext` clones, like browser tabs over
/// the same `localStorage`.
#[derive(Clone, Default)]
pub struct SharedStorage {
    inner: Rc<RefCell<MemoryStorage>>,
}

impl SharedStorage {
    pub fn new(storage: MemoryStorage) -> Self {
        Self { inner: Rc::new(RefCell::new(storage)) }
    }
}

impl Storage for SharedStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().remove(key)
    }
}
