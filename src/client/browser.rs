use std::process::{Command, Stdio};

use super::ClientError;

/// Opens `url` in the default browser in an OS-specific way.
/// - macOS: uses open
/// - Linux: uses xdg-open
/// - Windows: uses `cmd /C start`
pub fn open_in_browser(url: &str) -> Result<(), ClientError> {
    let mut command = opener(url).ok_or_else(|| ClientError::Launch(url.to_string()))?;

    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| {
            tracing::debug!(error = %e, "failed to spawn browser opener");
            ClientError::Launch(url.to_string())
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ClientError::Launch(url.to_string()))
    }
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Option<Command> {
    let mut command = Command::new("open");
    command.arg(url);
    Some(command)
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Option<Command> {
    let mut command = Command::new("cmd");
    // Empty title argument so `start` does not treat a quoted URL as the window title
    command.args(["/C", "start", ""]).arg(url);
    Some(command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener(url: &str) -> Option<Command> {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    Some(command)
}

#[cfg(not(any(unix, target_os = "windows")))]
fn opener(_url: &str) -> Option<Command> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_opener_passes_url_as_last_argument() {
        let command = opener("https://example.com/a?b=c").unwrap();
        let last = command.get_args().last().unwrap();
        assert_eq!(last, "https://example.com/a?b=c");
    }
}
