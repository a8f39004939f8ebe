//! Line-oriented front end: ASCII board, column-letter prompts, rematch loop.

mod render;
mod session;

pub use render::render_board;
pub use session::{write_abrupt_farewell, Session, ABRUPT_FAREWELL};

use std::io;

use crate::config::AppConfig;

/// Run a console session on the process's stdin and stdout.
///
/// Ctrl-C at any point prints the farewell and exits with status 0. Stdout is
/// not held locked across prompts so the interrupt handler can write to it.
pub fn run_stdio(config: &AppConfig) -> io::Result<()> {
    ctrlc::set_handler(|| {
        log::debug!("interrupted, ending session");
        let _ = write_abrupt_farewell(&mut io::stdout());
        std::process::exit(0);
    })
    .map_err(io::Error::other)?;

    let stdin = io::stdin();
    Session::new(stdin.lock(), io::stdout(), config).run()
}
