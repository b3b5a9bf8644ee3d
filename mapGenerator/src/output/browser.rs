use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, instrument, warn};

use crate::utils::logging::{self, OperationCategory};
use super::writer::{absolute_path, OutputError};

#[derive(Debug)]
pub enum BrowserError {
    InvalidPath(OutputError),
    EmptyLauncher,
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for BrowserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserError::InvalidPath(e) => write!(f, "Cannot resolve map path: {}", e),
            BrowserError::EmptyLauncher => write!(f, "Browser launcher command is empty"),
            BrowserError::SpawnFailed { program, source } => {
                write!(f, "Failed to start '{}': {}", program, source)
            }
        }
    }
}

impl std::error::Error for BrowserError {}

impl From<OutputError> for BrowserError {
    fn from(err: OutputError) -> Self {
        BrowserError::InvalidPath(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub program: String,
    pub args: Vec<String>,
}

pub fn file_url(path: &Path) -> Result<String, OutputError> {
    let absolute = absolute_path(path)?;
    Ok(format!("file://{}", absolute.display()))
}

/// Launcher for `url`, honoring a `BROWSER` value when one is given.
pub fn launcher_for(url: &str, browser_env: Option<&str>, os: &str) -> Result<Launcher, BrowserError> {
    if let Some(browser) = browser_env.and_then(|value| first_browser_entry(value, os)) {
        return browser_launcher(url, browser);
    }

    let launcher = match os {
        "macos" => Launcher {
            program: "open".to_string(),
            args: vec![url.to_string()],
        },
        // The empty string is the window title `start` expects first
        "windows" => Launcher {
            program: "cmd".to_string(),
            args: vec!["/C".to_string(), "start".to_string(), String::new(), url.to_string()],
        },
        _ => Launcher {
            program: "xdg-open".to_string(),
            args: vec![url.to_string()],
        },
    };
    Ok(launcher)
}

// Entries are separated like PATH entries on the target platform
fn first_browser_entry<'a>(value: &'a str, os: &str) -> Option<&'a str> {
    let separator = if os == "windows" { ';' } else { ':' };
    value.split(separator).map(str::trim).find(|entry| !entry.is_empty())
}

fn browser_launcher(url: &str, command: &str) -> Result<Launcher, BrowserError> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or(BrowserError::EmptyLauncher)?.to_string();
    let mut args: Vec<String> = parts.map(str::to_string).collect();

    if args.iter().any(|arg| arg.contains("%s")) {
        args = args.into_iter().map(|arg| arg.replace("%s", url)).collect();
    } else {
        args.push(url.to_string());
    }

    Ok(Launcher { program, args })
}

/// Asks the host to open `path` in a browser. Does not wait for the browser.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn open_in_browser<P: AsRef<Path>>(path: P) -> Result<(), BrowserError> {
    let _timing = logging::start_timing("open_in_browser", OperationCategory::BrowserLaunch);

    let url = file_url(path.as_ref())?;
    let browser_env = std::env::var("BROWSER").ok();
    let launcher = launcher_for(&url, browser_env.as_deref(), std::env::consts::OS)?;

    debug!(program = %launcher.program, args = ?launcher.args, "Launching browser");
    Command::new(&launcher.program)
        .args(&launcher.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| {
            warn!(program = %launcher.program, error = %source, "Browser launch failed");
            BrowserError::SpawnFailed { program: launcher.program.clone(), source }
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "file:///tmp/davao_taxi_map.html";

    #[test]
    fn test_platform_launchers() {
        assert_eq!(
            launcher_for(URL, None, "linux").unwrap(),
            Launcher { program: "xdg-open".to_string(), args: vec![URL.to_string()] }
        );
        assert_eq!(launcher_for(URL, None, "macos").unwrap().program, "open");

        let windows = launcher_for(URL, None, "windows").unwrap();
        assert_eq!(windows.program, "cmd");
        assert_eq!(windows.args, vec!["/C", "start", "", URL]);
    }

    #[test]
    fn test_browser_env_appends_url() {
        let launcher = launcher_for(URL, Some("firefox --new-tab"), "linux").unwrap();
        assert_eq!(launcher.program, "firefox");
        assert_eq!(launcher.args, vec!["--new-tab", URL]);
    }

    #[test]
    fn test_browser_env_substitutes_placeholder() {
        let launcher = launcher_for(URL, Some(":chromium --app=%s:firefox"), "linux").unwrap();
        assert_eq!(launcher.program, "chromium");
        assert_eq!(launcher.args, vec![format!("--app={}", URL)]);
    }

    #[test]
    fn test_windows_browser_env_keeps_drive_letter() {
        let launcher = launcher_for(URL, Some(r"C:\Tools\firefox.exe;D:\edge.exe"), "windows").unwrap();
        assert_eq!(launcher.program, r"C:\Tools\firefox.exe");
        assert_eq!(launcher.args, vec![URL]);
    }

    #[test]
    fn test_blank_browser_env_falls_back_to_platform() {
        assert_eq!(launcher_for(URL, Some("  "), "linux").unwrap().program, "xdg-open");
    }

    #[test]
    fn test_file_url_is_absolute() {
        let url = file_url(Path::new("davao_taxi_map.html")).unwrap();
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("davao_taxi_map.html"));
    }
}
