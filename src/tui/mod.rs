//! Interactive FAQ browser.
//!
//! The event loop polls at a short interval so the query debouncer can
//! commit between keystrokes; typing stays responsive while the result
//! list only recomputes after a pause.

mod app;
mod ui;

use crate::faq::FaqSearchIndex;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub fn run(index: FaqSearchIndex) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let mut app = App::new(index);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        // Commit a debounced query if its quiet period has elapsed
        app.tick();

        terminal.draw(|f| ui::draw(f, app))?;

        // Short poll timeout keeps debounce commits prompt
        if event::poll(Duration::from_millis(50))? {
            // Only handle key press events, not release or repeat
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global keybindings
                match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                    (KeyModifiers::CONTROL, KeyCode::Char('q')) => return Ok(()),
                    _ => {}
                }

                match app.mode {
                    app::Mode::Help => {
                        // Any key closes help
                        app.hide_help();
                    }
                    app::Mode::Search => match (key.modifiers, key.code) {
                        (KeyModifiers::CONTROL, KeyCode::Char('j'))
                        | (KeyModifiers::CONTROL, KeyCode::Char('n')) => app.select_next(),
                        (KeyModifiers::CONTROL, KeyCode::Char('k'))
                        | (KeyModifiers::CONTROL, KeyCode::Char('p')) => app.select_prev(),
                        (KeyModifiers::CONTROL, KeyCode::Char('h')) => app.pop_char(),
                        (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                            KeyCode::Esc => {
                                if app.query_draft().is_empty() {
                                    return Ok(());
                                }
                                app.clear_query();
                            }
                            KeyCode::Enter => app.commit_now(),
                            KeyCode::Tab => app.cycle_category(),
                            KeyCode::Down => app.select_next(),
                            KeyCode::Up => app.select_prev(),
                            KeyCode::Home => app.select_first(),
                            KeyCode::End => app.select_last(),
                            KeyCode::F(1) => app.show_help(),
                            KeyCode::Char(c) => app.push_char(c),
                            KeyCode::Backspace => app.pop_char(),
                            _ => {}
                        },
                        _ => {}
                    },
                }
            }
        }
    }
}
