//! Shared helpers for unit tests: proptest strategies and log capture.

use std::io;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use crate::config::{VALID_TOKEN, WORK_ROUTE};

/// Any token string except the valid marker.
pub fn arb_invalid_token() -> impl Strategy<Value = String> {
    ".{0,40}".prop_filter("must differ from the valid token", |t| t != VALID_TOKEN)
}

/// Any path except the work route.
pub fn arb_other_path() -> impl Strategy<Value = String> {
    "/?[a-z0-9/_.-]{0,30}".prop_filter("must differ from the work route", |p| p != WORK_ROUTE)
}

/// Arbitrary prompt text, including quotes and non-ASCII.
pub fn arb_prompt() -> impl Strategy<Value = String> {
    ".{0,80}"
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a debug-level fmt subscriber and returns what it printed.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buf.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
