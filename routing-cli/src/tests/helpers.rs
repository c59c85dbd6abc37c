//! Temporary workspaces and stub transports for CLI tests.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use routing_core::test_support::CANNED_ROUTE_RESPONSE;
use routing_http::HttpTransport;
use routing_http::test_support::StubTransport;
use tempfile::TempDir;

use crate::CliError;
use crate::route::{RouteConfig, RouteTransportBuilder};

/// A temporary directory addressed through UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Hands out clones of one shared stub so tests can inspect its requests.
#[derive(Debug)]
pub(super) struct StubTransportBuilder {
    pub(super) transport: Arc<StubTransport>,
}

impl StubTransportBuilder {
    pub(super) fn canned() -> Self {
        Self::answering(200, Some(CANNED_ROUTE_RESPONSE))
    }

    pub(super) fn answering(status: u16, body: Option<&str>) -> Self {
        Self {
            transport: Arc::new(StubTransport::with_response(status, body)),
        }
    }
}

impl RouteTransportBuilder for StubTransportBuilder {
    fn build(&self, _config: &RouteConfig) -> Result<Box<dyn HttpTransport>, CliError> {
        Ok(Box::new(Arc::clone(&self.transport)))
    }
}
