use crossbeam_channel::{Receiver, select};
use ratatui::crossterm::event::Event;

use crate::{REFRESH_RATE, app_core::Serenata, player::AudioEngine, ui_state::Mode};

impl<E: AudioEngine> Serenata<E> {
    #[inline]
    pub fn select_shortcut(&mut self, input_rx: &Receiver<Event>) {
        let events = self.player.events();
        let ticks = self.player.progress_ticks();
        let transport = self.player.transport_commands();

        select! {
            recv(events) -> event => {
                if let Ok(event) = event {
                    self.player.handle_engine_event(event);
                }
            }

            recv(ticks) -> _ => self.player.poll_progress(),

            recv(transport) -> command => {
                if let Ok(command) = command {
                    self.player.handle_transport(command);
                }
            }

            recv(input_rx) -> input => match input {
                Ok(input) => self.handle_input(input),
                Err(_) => {
                    tracing::error!("Input reader hung up");
                    self.ui.set_mode(Mode::QUIT);
                }
            },

            default(REFRESH_RATE) => {}
        }
    }
}
