//! Host-side collaborators: the system clipboard and the default browser.
//!
//! This is the only module that talks to anything outside the terminal.
//! Failures here are reported upward as strings on `…DidError` actions;
//! there is no retry.

use std::io;

use tracing::debug;

/// Write text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    debug!(bytes = text.len(), "clipboard write");
    arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_owned()))
}

/// Open a URL in the user's default browser. The spawned process is not
/// waited on.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    debug!(url, "opening browser");

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = std::process::Command::new("open");
        c.arg(url);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", url]);
        c
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = std::process::Command::new("xdg-open");
        c.arg(url);
        c
    };

    command.spawn().map(|_| ())
}
