//! System clipboard access via platform commands: pbcopy on macOS, wl-copy
//! or xclip on Linux, clip.exe on Windows.

use anyhow::{bail, Context, Result};

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write to {program}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {program}"))?;
    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}

#[cfg(target_os = "macos")]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    pipe_to("pbcopy", &[], text)
}

#[cfg(target_os = "linux")]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    // Wayland first, then X11.
    if pipe_to("wl-copy", &[], text).is_ok() {
        return Ok(());
    }
    pipe_to("xclip", &["-selection", "clipboard"], text)
        .context("no clipboard tool found; install wl-clipboard or xclip")
}

#[cfg(target_os = "windows")]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    pipe_to("clip", &[], text)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
pub fn copy_to_clipboard(_text: &str) -> Result<()> {
    bail!("clipboard is not supported on this platform")
}
