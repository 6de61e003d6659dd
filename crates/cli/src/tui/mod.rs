//! Interactive template editor.

mod app;
mod event;
mod ui;

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{poll, read, Event};
use ratatui::DefaultTerminal;
use tracing::info;

use spingen_core::config::types::ResolvedConfig;

use app::App;
use event::map_key_event;

const TICK: Duration = Duration::from_millis(100);

/// Take over the terminal until the user quits.
///
/// `ratatui::init` installs a panic hook that restores the terminal, so the
/// screen is left usable on both the error and the panic path.
pub fn run(config: ResolvedConfig) -> Result<()> {
    info!(profile = %config.active_profile, "starting interactive editor");
    let app = App::new(config);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if !poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = read()? {
            if let Some(msg) = map_key_event(&app, key) {
                app.update(msg);
            }
        }
    }
    info!("interactive editor closed");
    Ok(())
}
