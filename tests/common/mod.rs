use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Stand-in for the real `aws` binary. It records every invocation to
// calls.log and answers `ec2` operations from canned JSON files placed
// next to it. The profile name "missing" is rigged to fail the
// `configure list` check.
const STUB_SCRIPT: &str = r#"#!/bin/sh
here="$(cd "$(dirname "$0")" && pwd)"
printf '%s\n' "$*" >> "$here/calls.log"

case "$1" in
--version)
    echo "aws-cli/2.15.30 Python/3.11.8 Linux/6.1.0 exe/x86_64"
    exit 0
    ;;
configure)
    # aws configure list --profile <name>
    if [ "$4" = "missing" ]; then
        echo "The config profile (missing) could not be found" >&2
        exit 255
    fi
    exit 0
    ;;
ec2)
    case "$2" in
    describe-instances) cat "$here/describe.json" ;;
    run-instances) cat "$here/run.json" ;;
    terminate-instances) echo '{"TerminatingInstances": []}' ;;
    create-key-pair) cat "$here/create_key.json" ;;
    *) echo "Unknown ec2 operation: $2" >&2; exit 252 ;;
    esac
    exit 0
    ;;
*)
    echo "Unknown command: $1" >&2
    exit 252
    ;;
esac
"#;

/// A fake `aws` CLI installed into a temporary directory. Prepend
/// [`StubCloud::path_prefix`] to PATH so command lookups find it first.
pub struct StubCloud {
    dir: TempDir,
}

impl StubCloud {
    pub fn install() -> Self {
        let dir = TempDir::new().expect("Failed to create stub dir");
        let script = dir.path().join("aws");
        fs::write(&script, STUB_SCRIPT).expect("Failed to write stub script");
        make_executable(&script);
        Self { dir }
    }

    /// PATH value that resolves `aws` to the stub.
    pub fn path_prefix(&self) -> String {
        let current = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.dir.path().display(), current)
    }

    pub fn set_describe_response(&self, json: &str) {
        fs::write(self.dir.path().join("describe.json"), json)
            .expect("Failed to write describe response");
    }

    pub fn set_run_response(&self, json: &str) {
        fs::write(self.dir.path().join("run.json"), json).expect("Failed to write run response");
    }

    pub fn set_create_key_response(&self, json: &str) {
        fs::write(self.dir.path().join("create_key.json"), json)
            .expect("Failed to write create-key response");
    }

    /// Every argv line the stub has recorded so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn clear_calls(&self) {
        let _ = fs::remove_file(self.dir.path().join("calls.log"));
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)
        .expect("Failed to stat stub script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod stub script");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
