//! In-memory `Transport` for tests. Replies are scripted per full url.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::transport::{Transport, TransportError, TransportResponse};

#[derive(Debug, Clone)]
pub enum MockReply {
    Respond { status: u16, body: String },
    Fail(String),
    Delayed(Duration, Box<MockReply>),
}

impl MockReply {
    pub fn json(value: Value) -> Self {
        Self::Respond {
            status: 200,
            body: value.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::Respond {
            status,
            body: body.to_string(),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self::Fail(message.to_string())
    }

    pub fn delayed(self, delay: Duration) -> Self {
        Self::Delayed(delay, Box::new(self))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    pub url: String,
    pub body: Value,
}

/// Unknown urls fail like a refused connection. With several replies queued
/// for a url they are used in order, and the last one repeats.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, VecDeque<MockReply>>>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, url: &str, reply: MockReply) -> Self {
        self.set(url, reply);
        self
    }

    pub fn on_sequence(self, url: &str, replies: Vec<MockReply>) -> Self {
        self.lock_replies().insert(url.to_string(), replies.into());
        self
    }

    pub fn set(&self, url: &str, reply: MockReply) {
        self.lock_replies()
            .insert(url.to_string(), VecDeque::from([reply]));
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.lock_calls().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.lock_calls().iter().map(|c| c.url.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    pub fn clear_calls(&self) {
        self.lock_calls().clear();
    }

    fn next_reply(&self, url: &str) -> Option<MockReply> {
        let mut replies = self.lock_replies();
        let queue = replies.get_mut(url)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, HashMap<String, VecDeque<MockReply>>> {
        self.replies.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<MockCall>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
        self.lock_calls().push(MockCall {
            url: url.to_string(),
            body: body.clone(),
        });

        let mut reply = self
            .next_reply(url)
            .unwrap_or_else(|| MockReply::fail("connection refused"));

        loop {
            match reply {
                MockReply::Respond { status, body } => {
                    return Ok(TransportResponse { status, body });
                }
                MockReply::Fail(message) => return Err(TransportError::Other(message)),
                MockReply::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    reply = *inner;
                }
            }
        }
    }
}
