//! In-memory transport recording every request, for tests.

use crate::{Transport, read, write};

use aws_sdk_dynamodb::operation;
use std::sync;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("mock failure: {0}")]
pub(crate) struct MockError(pub(crate) String);

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Request {
    Get(read::get_item::GetItemRequest),
    Put(write::put_item::PutItemRequest),
    Update(write::update_item::UpdateItemRequest),
    Delete(write::delete_item::DeleteItemRequest),
    Scan(read::scan::ScanRequest),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    requests: sync::Mutex<Vec<Request>>,
    get_output: Option<operation::get_item::GetItemOutput>,
    scan_output: Option<operation::scan::ScanOutput>,
    failure: Option<MockError>,
}

impl RecordingTransport {
    pub(crate) fn with_get_output(output: operation::get_item::GetItemOutput) -> Self {
        Self {
            get_output: Some(output),
            ..Default::default()
        }
    }

    pub(crate) fn with_scan_output(output: operation::scan::ScanOutput) -> Self {
        Self {
            scan_output: Some(output),
            ..Default::default()
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            failure: Some(MockError(message.to_string())),
            ..Default::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: Request) -> Result<(), MockError> {
        self.requests.lock().unwrap().push(request);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Formatted log output of the current thread while installed.
#[cfg(feature = "tracing")]
#[derive(Clone, Debug, Default)]
pub(crate) struct CapturedLogs(sync::Arc<sync::Mutex<Vec<u8>>>);

#[cfg(feature = "tracing")]
impl CapturedLogs {
    pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || logs.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn lines_containing(&self, patterns: &[&str]) -> usize {
        let output = self.0.lock().unwrap();
        String::from_utf8_lossy(&output)
            .lines()
            .filter(|line| patterns.iter().all(|pattern| line.contains(pattern)))
            .count()
    }
}

#[cfg(feature = "tracing")]
impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    type Error = MockError;

    async fn get(
        &self,
        request: read::get_item::GetItemRequest,
    ) -> Result<operation::get_item::GetItemOutput, Self::Error> {
        self.record(Request::Get(request))?;
        let output = self
            .get_output
            .clone()
            .unwrap_or_else(|| operation::get_item::GetItemOutput::builder().build());
        Ok(output)
    }

    async fn put(
        &self,
        request: write::put_item::PutItemRequest,
    ) -> Result<operation::put_item::PutItemOutput, Self::Error> {
        self.record(Request::Put(request))?;
        Ok(operation::put_item::PutItemOutput::builder().build())
    }

    async fn update(
        &self,
        request: write::update_item::UpdateItemRequest,
    ) -> Result<operation::update_item::UpdateItemOutput, Self::Error> {
        self.record(Request::Update(request))?;
        Ok(operation::update_item::UpdateItemOutput::builder().build())
    }

    async fn delete(
        &self,
        request: write::delete_item::DeleteItemRequest,
    ) -> Result<operation::delete_item::DeleteItemOutput, Self::Error> {
        self.record(Request::Delete(request))?;
        Ok(operation::delete_item::DeleteItemOutput::builder().build())
    }

    async fn scan(
        &self,
        request: read::scan::ScanRequest,
    ) -> Result<operation::scan::ScanOutput, Self::Error> {
        self.record(Request::Scan(request))?;
        let output = self
            .scan_output
            .clone()
            .unwrap_or_else(|| operation::scan::ScanOutput::builder().build());
        Ok(output)
    }
}
