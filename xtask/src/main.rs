//! Workspace maintenance commands (`cargo xtask`).
//!
//! Wraps the verification and browser build steps so the repository exposes stable entrypoints
//! through a Cargo alias.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Stdio};

const SITE_CARGO_FEATURE: &str = "csr";
const WASM_TARGET: &str = "wasm32-unknown-unknown";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Task {
    SetupWeb,
    CheckWeb,
    BuildWeb(Vec<String>),
    Verify(VerifyMode),
    Help,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum VerifyMode {
    /// Formatting and tests.
    Fast,
    /// Formatting, clippy with warnings denied, tests, and the web checks.
    Full,
}

fn parse_task(args: &[String]) -> Result<Task, String> {
    let Some((cmd, rest)) = args.split_first() else {
        return Err("missing command".to_string());
    };
    match cmd.as_str() {
        "setup-web" => Ok(Task::SetupWeb),
        "check-web" => Ok(Task::CheckWeb),
        "build-web" => Ok(Task::BuildWeb(rest.to_vec())),
        "verify" => match rest.first().map(String::as_str).unwrap_or("full") {
            "fast" => Ok(Task::Verify(VerifyMode::Fast)),
            "full" => Ok(Task::Verify(VerifyMode::Full)),
            mode => Err(format!(
                "invalid verify mode `{mode}` (expected `fast` or `full`)"
            )),
        },
        "help" | "--help" | "-h" => Ok(Task::Help),
        other => Err(format!("unknown xtask command: {other}")),
    }
}

fn main() -> ExitCode {
    let root = workspace_root();
    let args: Vec<String> = env::args().skip(1).collect();

    let task = match parse_task(&args) {
        Ok(task) => task,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    let result = match task {
        Task::SetupWeb => setup_web(&root),
        Task::CheckWeb => check_web(&root),
        Task::BuildWeb(args) => build_web(&root, args),
        Task::Verify(mode) => verify(&root, mode),
        Task::Help => {
            print_usage();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir).to_path_buf()
}

fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           setup-web           Install wasm target and trunk (if missing)\n\
           check-web           Run site compile checks (CSR native + wasm)\n\
           build-web [args]    Build the static showcase bundle with trunk\n\
           verify [fast|full]  Format check, lints, and tests (default: full)\n"
    );
}

fn setup_web(root: &Path) -> Result<(), String> {
    run(root, "rustup", vec!["target", "add", WASM_TARGET])?;

    if command_available("trunk") {
        println!("trunk already installed");
        return Ok(());
    }

    run(root, "cargo", vec!["install", "trunk"])
}

fn check_web(root: &Path) -> Result<(), String> {
    run(
        root,
        "cargo",
        vec!["check", "-p", "site", "--features", SITE_CARGO_FEATURE],
    )?;

    if wasm_target_installed() {
        run(
            root,
            "cargo",
            vec![
                "check",
                "-p",
                "site",
                "--target",
                WASM_TARGET,
                "--features",
                SITE_CARGO_FEATURE,
            ],
        )?;
    } else {
        eprintln!(
            "warn: {WASM_TARGET} target not installed; skipping wasm check (run `cargo xtask setup-web`)"
        );
    }

    Ok(())
}

fn build_web(root: &Path, args: Vec<String>) -> Result<(), String> {
    if !command_available("trunk") {
        return Err(
            "`trunk` is not installed. Install it with `cargo xtask setup-web` (or `cargo install trunk`)"
                .to_string(),
        );
    }

    let mut trunk_args = vec![
        "build".to_string(),
        "index.html".to_string(),
        "--release".to_string(),
    ];
    if !args_specify_dist(&args) {
        trunk_args.push("--dist".to_string());
        trunk_args.push("../../target/trunk-dist".to_string());
    }
    trunk_args.extend(args);

    run_owned(&root.join("crates").join("site"), "trunk", trunk_args)
}

fn verify(root: &Path, mode: VerifyMode) -> Result<(), String> {
    run(root, "cargo", vec!["fmt", "--all", "--", "--check"])?;
    if mode == VerifyMode::Full {
        run(
            root,
            "cargo",
            vec![
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
        )?;
    }
    run(root, "cargo", vec!["test", "--workspace"])?;
    if mode == VerifyMode::Full {
        check_web(root)?;
    }
    Ok(())
}

fn args_specify_dist(args: &[String]) -> bool {
    args.iter()
        .any(|arg| arg == "--dist" || arg.starts_with("--dist="))
}

fn wasm_target_installed() -> bool {
    Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .map(|output| {
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .any(|line| line.trim() == WASM_TARGET)
        })
        .unwrap_or(false)
}

fn command_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn run(root: &Path, program: &str, args: Vec<&str>) -> Result<(), String> {
    let owned = args.into_iter().map(ToString::to_string).collect();
    run_owned(root, program, owned)
}

fn run_owned(cwd: &Path, program: &str, args: Vec<String>) -> Result<(), String> {
    println!("+ {program} {}", args.join(" "));
    let mut cmd = Command::new(program);
    cmd.current_dir(cwd).args(&args);

    // Some environments export NO_COLOR=1, but trunk expects "true"/"false".
    if program == "trunk" && env::var("NO_COLOR").as_deref() == Ok("1") {
        cmd.env("NO_COLOR", "true");
    }

    let status = cmd
        .status()
        .map_err(|err| format!("failed to start `{program}`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`{program}` exited with status {status}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn verify_defaults_to_full() {
        assert_eq!(
            parse_task(&args(&["verify"])),
            Ok(Task::Verify(VerifyMode::Full))
        );
        assert_eq!(
            parse_task(&args(&["verify", "fast"])),
            Ok(Task::Verify(VerifyMode::Fast))
        );
        assert!(parse_task(&args(&["verify", "slow"])).is_err());
    }

    #[test]
    fn build_web_forwards_trunk_arguments() {
        assert_eq!(
            parse_task(&args(&["build-web", "--dist", "out"])),
            Ok(Task::BuildWeb(args(&["--dist", "out"])))
        );
        assert!(args_specify_dist(&args(&["--dist=out"])));
        assert!(!args_specify_dist(&args(&["--public-url", "/ui/"])));
    }

    #[test]
    fn unknown_or_missing_commands_are_rejected() {
        assert!(parse_task(&[]).is_err());
        assert_eq!(
            parse_task(&args(&["deploy"])),
            Err("unknown xtask command: deploy".to_string())
        );
        assert_eq!(parse_task(&args(&["-h"])), Ok(Task::Help));
    }
}
