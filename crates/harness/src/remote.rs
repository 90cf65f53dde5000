use std::sync::Mutex;

use async_trait::async_trait;

use roster_core::RemotePage;
use roster_engine::{FetchError, RemoteSource};

/// Remote source that serves a canned page on every fetch.
pub struct ScriptedRemote {
    page: RemotePage,
}

impl ScriptedRemote {
    pub fn new(page: RemotePage) -> Self {
        Self { page }
    }
}

#[async_trait]
impl RemoteSource for ScriptedRemote {
    async fn fetch(&self) -> Result<RemotePage, FetchError> {
        Ok(self.page.clone())
    }
}

/// Remote source that always fails with a server error.
pub struct FailingRemote;

#[async_trait]
impl RemoteSource for FailingRemote {
    async fn fetch(&self) -> Result<RemotePage, FetchError> {
        Err(FetchError::Status {
            status: 503,
            body: "catalog unavailable".to_string(),
        })
    }
}

/// Remote source that succeeds on the first fetch and fails afterwards.
/// Exercises the stale-cache-retention path.
pub struct FlakyRemote {
    page: RemotePage,
    calls: Mutex<u32>,
}

impl FlakyRemote {
    pub fn new(page: RemotePage) -> Self {
        Self {
            page,
            calls: Mutex::new(0),
        }
    }
}

#[async_trait]
impl RemoteSource for FlakyRemote {
    async fn fetch(&self) -> Result<RemotePage, FetchError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls == 1 {
            Ok(self.page.clone())
        } else {
            Err(FetchError::Status {
                status: 500,
                body: "catalog crashed".to_string(),
            })
        }
    }
}
