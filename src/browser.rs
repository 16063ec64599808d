//! Opening the generated site in the platform's default browser.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Platform command that opens `target` with its default handler
pub fn open_command(target: &Path) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg("start").arg("").arg(target);
        cmd
    }

    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(target);
        cmd
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(target);
        cmd
    }
}

/// Open `page` in the default browser without waiting for it to exit
pub fn open_in_browser(page: &Path) -> io::Result<()> {
    let page = page.canonicalize()?;
    log::debug!("Opening {} in the default browser", page.display());
    open_command(&page)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
