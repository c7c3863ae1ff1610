//! Fakes shared by unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use serde_json::Value;

use crate::config::ClientConfig;
use crate::net::http::{ApiRequest, HttpClient, RawResponse, Transport, TransportFailure};
use crate::net::policy::{Navigator, Notifier};

/// Yields once to the executor, waking itself so `block_on` keeps polling.
#[derive(Default)]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

#[derive(Default)]
struct FakeState {
    responses: VecDeque<Result<RawResponse, TransportFailure>>,
    requests: Vec<ApiRequest>,
}

/// Transport returning canned responses in order.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, failure: TransportFailure) -> Self {
        self.state.lock().unwrap().responses.push_back(Err(failure));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: &ApiRequest, _config: &ClientConfig) -> Result<RawResponse, TransportFailure> {
        self.state.lock().unwrap().requests.push(request.clone());
        YieldNow::default().await;
        self.state
            .lock()
            .unwrap()
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportFailure::Network("no canned response".to_owned())))
    }
}

/// Notifier that records every message.
#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<String>>,
    pub successes: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_owned());
    }

    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_owned());
    }
}

/// Navigator with a settable current path that records pushes.
pub struct RecordingNavigator {
    pub current: Mutex<String>,
    pub pushes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { current: Mutex::new(path.to_owned()), pushes: Mutex::new(Vec::new()) }
    }

    pub fn pushes(&self) -> Vec<String> {
        self.pushes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn push(&self, path: &str) {
        self.pushes.lock().unwrap().push(path.to_owned());
        *self.current.lock().unwrap() = path.to_owned();
    }
}

/// A client wired to fakes, plus handles to inspect them.
pub struct Harness {
    pub client: HttpClient<FakeTransport>,
    pub transport: FakeTransport,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new(transport: FakeTransport, current_path: &str) -> Self {
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::at(current_path));
        let client = HttpClient::new(ClientConfig::default(), transport.clone(), notifier.clone(), navigator.clone());
        Self { client, transport, notifier, navigator }
    }
}
