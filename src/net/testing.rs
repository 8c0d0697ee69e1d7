//! Scripted transport and recording side-effect sinks for pipeline tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::notify::{Navigator, Notifier};
use super::pipeline::RequestPipeline;
use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

/// Replays queued results in order and records every request it receives.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    pub sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: serde_json::Value) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn reply_raw(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub fn fail(&self, err: TransportError) {
        self.replies.borrow_mut().push_back(Err(err));
    }

    pub fn last_request(&self) -> HttpRequest {
        self.sent.borrow().last().cloned().expect("no request sent")
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: RefCell<Vec<String>>,
    pub confirms: Cell<usize>,
    pub accept: Cell<bool>,
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }

    fn confirm(&self, _message: &str) -> bool {
        self.confirms.set(self.confirms.get() + 1);
        self.accept.get()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_owned());
    }
}

/// A pipeline over fresh in-memory collaborators.
pub struct Harness {
    pub storage: MemoryStorage,
    pub session: SessionStore,
    pub transport: ScriptedTransport,
    pub notifier: Rc<RecordingNotifier>,
    pub navigator: Rc<RecordingNavigator>,
    pub pipeline: RequestPipeline,
}

impl Harness {
    pub fn new() -> Self {
        let storage = MemoryStorage::new();
        let session = SessionStore::load(Rc::new(storage.clone()));
        let transport = ScriptedTransport::default();
        let notifier = Rc::new(RecordingNotifier::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let pipeline = RequestPipeline::new(
            ClientConfig::default(),
            session.clone(),
            Rc::new(transport.clone()),
            notifier.clone(),
            navigator.clone(),
        );
        Self { storage, session, transport, notifier, navigator, pipeline }
    }

    pub fn errors(&self) -> Vec<String> {
        self.notifier.errors.borrow().clone()
    }
}

/// `{code: 200, msg: "ok", data}` body.
pub fn ok_body(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "code": 200, "msg": "ok", "data": data })
}
