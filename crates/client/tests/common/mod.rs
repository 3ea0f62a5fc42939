// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers: throwaway validator scripts.

use std::fs;
use std::path::{Path, PathBuf};

use validation_client::{ClientConfig, ValidationClient};

/// Validator that approves adults and rejects anyone under 18.
///
/// Refuses to run unless invoked as `-mode single -input <json>`.
pub const AGE_VALIDATOR: &str = r##"
if [ "$1" != "-mode" ] || [ "$2" != "single" ] || [ "$3" != "-input" ]; then
    echo "unexpected invocation: $*" >&2
    exit 1
fi
re='"idade":([0-9]+)'
if [[ $4 =~ $re ]]; then age=${BASH_REMATCH[1]}; else age=0; fi
if (( age >= 18 )); then
    echo '{"valid":true,"message":"user is valid"}'
else
    echo '{"valid":false,"errors":["age must be at least 18"]}'
fi
"##;

/// Write an executable bash script into `dir`.
pub fn write_validator(dir: &Path, name: &str, body: &str) -> PathBuf {
    let script = dir.join(name);
    fs::write(&script, format!("#!/bin/bash\n{body}\n")).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    }
    script
}

/// Client running `body` as its validator with the given time budget.
pub fn client_for(dir: &Path, body: &str, timeout_ms: u64) -> ValidationClient {
    let script = write_validator(dir, "validator", body);
    ValidationClient::new(ClientConfig::new(script, timeout_ms))
}

/// Whether a process with this pid still exists.
pub fn process_alive(pid: &str) -> bool {
    std::process::Command::new("kill")
        .args(["-0", pid])
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
