use std::process::Command;

/// Run `git rev-parse` with the given args, falling back to "unknown"
/// outside a git checkout.
fn git_hash(args: &[&str]) -> String {
    match Command::new("git").args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .unwrap_or_else(|_| "unknown".to_string())
            .trim()
            .to_string(),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // Capture the git commit at build time for version diagnostics
    let short = git_hash(&["rev-parse", "--short", "HEAD"]);
    let full = git_hash(&["rev-parse", "HEAD"]);

    println!("cargo:rustc-env=GIT_HASH={short}");
    println!("cargo:rustc-env=GIT_HASH_FULL={full}");

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
