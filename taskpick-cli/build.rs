use std::path::Path;
use std::process::Command;

fn git_short_sha(repo_root: &Path) -> Result<String, String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .map_err(|e| format!("git not runnable: {e}"))?;

    if !out.status.success() {
        return Err(String::from_utf8_lossy(&out.stderr).trim().to_string());
    }

    let sha = String::from_utf8_lossy(&out.stdout).trim().to_string();
    if sha.is_empty() {
        return Err("empty rev-parse output".to_string());
    }
    Ok(sha)
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let repo_root = Path::new(&manifest_dir).join("..");

    // Rebuild when HEAD moves, not on every source change.
    let head = repo_root.join(".git").join("HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed={}", head.display());
    }
    println!("cargo:rerun-if-changed=build.rs");

    let sha = match git_short_sha(&repo_root) {
        Ok(sha) => sha,
        Err(reason) => {
            println!("cargo:warning=taskpick: no git revision for --version ({reason})");
            "unknown".to_string()
        }
    };

    println!("cargo:rustc-env=TASKPICK_BUILD_SHA={sha}");
}
