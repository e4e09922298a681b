use crate::error::{CardzError, Result};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(std::process::Command::new("pbcopy"), text)
    }

    #[cfg(target_os = "linux")]
    {
        copy_linux(text)
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(std::process::Command::new("clip"), text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(CardzError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn copy_linux(text: &str) -> Result<()> {
    use std::process::Command;

    // Try xclip first, then xsel
    let mut xclip = Command::new("xclip");
    xclip.args(["-selection", "clipboard"]);
    if pipe_to(xclip, text).is_ok() {
        return Ok(());
    }

    let mut xsel = Command::new("xsel");
    xsel.args(["--clipboard", "--input"]);
    pipe_to(xsel, text).map_err(|_| {
        CardzError::Api("Failed to spawn xclip or xsel. Install xclip or xsel.".to_string())
    })
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(mut command: std::process::Command, text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CardzError::Api(format!("Failed to spawn clipboard command: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CardzError::Api(format!("Failed to write to clipboard: {}", e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| CardzError::Api(format!("Failed to wait for clipboard command: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(CardzError::Api(
            "Clipboard command exited with error".to_string(),
        ))
    }
}
