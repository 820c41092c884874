use crate::{
    config::Settings,
    key_handler::{self, Action},
    overwrite_line,
    player::{AudioEngine, PlaybackController},
    tui,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
    },
};
use std::io::stdout;

pub struct Serenata<E: AudioEngine> {
    pub(crate) ui: UiState,
    pub(crate) player: PlaybackController<E>,
}

impl<E: AudioEngine> Serenata<E> {
    pub fn new(player: PlaybackController<E>, settings: &Settings) -> Self {
        Serenata {
            ui: UiState::new(settings),
            player,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;
        execute!(stdout(), EnableMouseCapture)?;

        let result = self.main_loop(&mut terminal);

        self.player.shutdown();
        if let Err(e) = execute!(stdout(), DisableMouseCapture) {
            tracing::warn!(error = %e, "Could not release mouse capture");
        }
        ratatui::restore();

        if result.is_ok() {
            overwrite_line("Thank you for using serenata!\n\n")?;
        }

        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let input_rx = key_handler::spawn_input_reader()?;

        // MAIN ROUTINE
        loop {
            terminal.draw(|f| tui::render(f, &mut self.ui, &self.player))?;

            self.select_shortcut(&input_rx);

            if self.ui.get_mode() == Mode::QUIT {
                tracing::info!("Shutting down");
                break;
            }
        }

        Ok(())
    }

    pub(crate) fn handle_input(&mut self, event: Event) {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                key_handler::handle_key_event(key, &self.ui)
            }
            Event::Mouse(mouse) => {
                key_handler::handle_mouse_event(mouse, &self.ui, self.player.catalog().len())
            }
            _ => None,
        };

        if let Some(action) = action {
            self.handle_action(action);
        }
    }

    pub fn player(&self) -> &PlaybackController<E> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlaybackController<E> {
        &mut self.player
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Feed an action as if the user had triggered it.
    pub fn dispatch(&mut self, action: Action) {
        self.handle_action(action);
    }
}
