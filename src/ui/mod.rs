//! Terminal UI: a full-screen game view driven by the arrow keys or column
//! letters.

mod app;
mod game_view;

pub use app::App;

use std::io;

use crate::config::AppConfig;

/// Runs a restore function when dropped, so early returns still put the
/// terminal back.
struct RestoreGuard {
    restore: fn(),
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Run the full-screen game. Raw mode and the alternate screen are undone on
/// every exit path; `ratatui::try_init` also installs a panic hook that does
/// the same.
pub fn run(config: &AppConfig) -> io::Result<()> {
    let _guard = RestoreGuard {
        restore: ratatui::restore,
    };
    let mut terminal = ratatui::try_init()?;
    App::new(config).run(&mut terminal)
}
