use std::env;
use std::process::Command;

fn main() {
    // Git lookups only happen for release builds; debug builds get a plain
    // dev marker so incremental compiles stay fast.
    let profile = env::var("PROFILE").unwrap_or_default();
    let mut version = env::var("CARGO_PKG_VERSION").unwrap_or_default();

    if profile == "release" {
        let git_output = Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output();

        match git_output {
            Ok(output) if output.status.success() => {
                let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !hash.is_empty() {
                    version = format!("{} ({})", version, hash);
                }
            }
            _ => {
                // Not a git checkout, or git missing. The bare version is fine.
                eprintln!("cargo:warning=Could not determine git hash for the version string");
            }
        }
    } else {
        version = format!("{} (dev)", version);
    }

    println!("cargo:rustc-env=AMICTL_BUILD_VERSION={}", version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=Cargo.toml");
}
