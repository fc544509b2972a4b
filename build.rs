use std::process::Command;

/// Run `git` with the given args, returning trimmed stdout or "unknown".
fn git_output(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // Capture the git commit hash at build time for --version output
    println!(
        "cargo:rustc-env=GIT_HASH={}",
        git_output(&["rev-parse", "--short", "HEAD"])
    );

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
