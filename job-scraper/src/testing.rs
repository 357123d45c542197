use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{PageRequest, Transport};
use crate::{Error, Result};

/// Replays canned responses in order and records every request it was given
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<VecDeque<Result<serde_json::Value>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl FakeTransport {
    pub(crate) fn new<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        Self {
            responses: Mutex::new(pages.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn push_error(&self, error: Error) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get_json(&self, request: &PageRequest) -> Result<serde_json::Value> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no response scripted for {}", request.url))
    }
}
