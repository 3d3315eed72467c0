#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use customer_records::api;
use customer_records::frontend::{CustomerApi, HttpCustomerApi, Prompt, TransportError};
use customer_records::lifecycle::CustomerSystem;
use customer_records::model::{Customer, CustomerId, CustomerPayload};
use tokio::net::TcpListener;

/// Starts a fresh store and API on an ephemeral port and returns its base URL.
pub async fn spawn_server() -> String {
    let system = CustomerSystem::new();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(api::serve(
        listener,
        system.customer_client.clone(),
        std::future::pending(),
    ));

    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Records every request before passing it on.
pub struct CountingApi {
    inner: HttpCustomerApi,
    calls: Mutex<Vec<String>>,
}

impl CountingApi {
    pub fn new(base_url: &str) -> Arc<Self> {
        Arc::new(Self {
            inner: HttpCustomerApi::new(base_url),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CustomerApi for CountingApi {
    async fn list(&self) -> Result<Vec<Customer>, TransportError> {
        self.record("GET /customer".into());
        self.inner.list().await
    }

    async fn get(&self, id: CustomerId) -> Result<Customer, TransportError> {
        self.record(format!("GET /customer/{id}"));
        self.inner.get(id).await
    }

    async fn create(&self, payload: &CustomerPayload) -> Result<Customer, TransportError> {
        self.record("POST /customer".into());
        self.inner.create(payload).await
    }

    async fn update(&self, payload: &CustomerPayload) -> Result<Customer, TransportError> {
        self.record("PUT /customer".into());
        self.inner.update(payload).await
    }

    async fn delete(&self, id: CustomerId) -> Result<(), TransportError> {
        self.record(format!("DELETE /customer/{id}"));
        self.inner.delete(id).await
    }
}

/// Answers confirmations from a script and remembers every message shown.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    alerts: Mutex<Vec<String>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            ..Default::default()
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.questions.lock().unwrap().push(message.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}
