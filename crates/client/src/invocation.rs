// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot validator process execution.
//!
//! Spawns the validator with the single-record invocation, drains its
//! stdout and stderr into one buffer while waiting for exit, and bounds the
//! whole exchange by a single deadline. On timeout the child is killed and
//! reaped before returning.

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

use crate::error::ClientError;

/// Flag selecting the validator's processing mode
pub const MODE_FLAG: &str = "-mode";
/// Mode value for validating one record passed on the command line
pub const SINGLE_MODE: &str = "single";
/// Flag carrying the JSON payload
pub const INPUT_FLAG: &str = "-input";

/// Arguments passed to the validator for one payload.
pub fn invocation_args(payload: &str) -> [&str; 4] {
    [MODE_FLAG, SINGLE_MODE, INPUT_FLAG, payload]
}

/// A validator run that terminated on its own.
#[derive(Debug)]
pub struct Execution {
    pub status: ExitStatus,
    /// Merged stdout/stderr, one entry per line, in arrival order
    pub output: String,
}

/// Merged output sink shared by the stdout and stderr readers.
#[derive(Clone, Debug, Default)]
struct MergedOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MergedOutput {
    fn push(&self, raw: &[u8]) {
        let line = raw
            .strip_suffix(b"\n")
            .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
            .unwrap_or(raw);
        self.lines
            .lock()
            .push(String::from_utf8_lossy(line).into_owned());
    }

    fn text(&self) -> String {
        self.lines.lock().join("\n")
    }
}

/// Background task draining both output streams; aborted when dropped.
struct Drain(JoinHandle<std::io::Result<()>>);

impl Drain {
    /// Wait for both streams to close, giving up at `deadline`.
    ///
    /// Returns `Ok(false)` if the deadline passed with a stream still open.
    async fn finish_by(&mut self, deadline: Instant) -> Result<bool, ClientError> {
        match timeout_at(deadline, &mut self.0).await {
            Ok(Ok(result)) => result.map(|()| true).map_err(ClientError::Io),
            Ok(Err(join)) => Err(ClientError::Io(std::io::Error::other(join))),
            Err(_) => Ok(false),
        }
    }
}

impl Drop for Drain {
    fn drop(&mut self) {
        self.0.abort();
    }
}

async fn pump<R: AsyncRead + Unpin>(reader: R, sink: MergedOutput) -> std::io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            return Ok(());
        }
        sink.push(&line);
    }
}

/// Run the validator once against `payload`.
///
/// Returns [`ClientError::Timeout`] if the process is still running when
/// `timeout` elapses; the process has been killed by then. If the process
/// exits but its streams stay open (e.g. held by a background grandchild),
/// output is collected until the same deadline and returned as-is.
pub async fn execute(
    executable: &Path,
    payload: &str,
    timeout: Duration,
) -> Result<Execution, ClientError> {
    let deadline = Instant::now() + timeout;

    let mut child = Command::new(executable)
        .args(invocation_args(payload))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ClientError::Spawn {
            path: executable.to_path_buf(),
            source,
        })?;
    debug!(executable = %executable.display(), pid = ?child.id(), "spawned validator");

    let stdout = child
        .stdout
        .take()
        .ok_or(ClientError::StreamUnavailable("stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or(ClientError::StreamUnavailable("stderr"))?;

    let output = MergedOutput::default();
    let mut drain = {
        let (out, err) = (output.clone(), output.clone());
        Drain(tokio::spawn(async move {
            let (a, b) = tokio::join!(pump(stdout, out), pump(stderr, err));
            a.and(b)
        }))
    };

    let status = match timeout_at(deadline, child.wait()).await {
        Ok(status) => status?,
        Err(_) => {
            drop(drain);
            terminate(&mut child).await;
            return Err(ClientError::Timeout {
                timeout_ms: timeout.as_millis().try_into().unwrap_or(u64::MAX),
            });
        }
    };
    debug!(%status, "validator exited");

    if !drain.finish_by(deadline).await? {
        warn!("validator exited with its output stream still open; using output captured so far");
    }

    Ok(Execution {
        status,
        output: output.text(),
    })
}

/// Kill the child and reap it so no process outlives the call.
async fn terminate(child: &mut Child) {
    warn!(pid = ?child.id(), "validator timed out, killing");
    if let Err(e) = child.start_kill() {
        debug!("kill failed: {e}");
    }
    if let Err(e) = child.wait().await {
        warn!("failed to reap validator: {e}");
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
