use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Render a command line the way `--debug` echoes it.
pub(crate) fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        format!("$ {}", program)
    } else {
        format!("$ {} {}", program, args.join(" "))
    }
}

/// Spawn `program` in `cwd` and wait for it, echoing the command line first when asked.
///
/// Both output streams are captured; callers decide what a nonzero status means.
pub(crate) fn spawn(
    program: &str,
    args: &[&str],
    cwd: &Path,
    echo: bool,
) -> std::io::Result<Output> {
    command(program, args, cwd, echo).output()
}

/// Like [`spawn`], but the tool's stderr goes straight to the terminal.
///
/// Progress and remote messages stay visible on success. The returned
/// output carries an empty stderr.
pub(crate) fn spawn_reporting(
    program: &str,
    args: &[&str],
    cwd: &Path,
    echo: bool,
) -> std::io::Result<Output> {
    command(program, args, cwd, echo).stderr(Stdio::inherit()).output()
}

fn command(program: &str, args: &[&str], cwd: &Path, echo: bool) -> Command {
    if echo {
        println!("{}", command_line(program, args));
    }

    let mut command = Command::new(program);
    command.args(args).current_dir(cwd);
    command
}

/// Trimmed stderr, or a placeholder when the tool wrote nothing.
pub(crate) fn stderr_details(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        match output.status.code() {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    } else {
        stderr
    }
}
