use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{AssistantCommand, AssistantEvent};
use crate::config::AppConfig;

use super::components::{bottom_nav, help_widget};
use super::screens::{chat, home, login, market, not_found, profile};
use super::state::{AppState, Screen};

pub struct KriSahaayApp {
    state: AppState,
    command_sender: mpsc::Sender<AssistantCommand>,
    event_receiver: mpsc::Receiver<AssistantEvent>,
}

impl KriSahaayApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        command_sender: mpsc::Sender<AssistantCommand>,
        event_receiver: mpsc::Receiver<AssistantEvent>,
    ) -> Self {
        Self {
            state: AppState::new(config.min_phone_digits),
            command_sender,
            event_receiver,
        }
    }

    fn handle_assistant_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn send_command(&mut self, command: AssistantCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to assistant: {err}");
        }
    }

    fn render_chat(&mut self, ui: &mut egui::Ui) {
        let Some(session) = self.state.chat.as_mut() else {
            return;
        };
        let session_id = session.id;
        let actions = chat::render(ui, session);

        if let Some(text) = actions.ask {
            self.send_command(AssistantCommand::Ask { session_id, text });
        }
        if let Some(path) = actions.image {
            self.send_command(AssistantCommand::AnalyzeImage { session_id, path });
        }
        if actions.start_voice {
            self.send_command(AssistantCommand::StartVoiceCapture { session_id });
        }
        if actions.back {
            self.state.navigate(Screen::Home);
        }
    }
}

impl eframe::App for KriSahaayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_assistant_events();

        if self.state.screen.shows_bottom_nav() {
            egui::TopBottomPanel::bottom("bottom_nav").show(ctx, |ui| {
                if let Some(route) = bottom_nav::render(ui, self.state.screen) {
                    self.state.navigate_route(route);
                }
            });
        }

        let screen = self.state.screen;
        egui::CentralPanel::default().show(ctx, |ui| match screen {
            Screen::Login => {
                if login::render(ui, &mut self.state.login) {
                    self.state.try_login();
                }
            }
            Screen::Home => {
                if let Some(route) = home::render(ui) {
                    self.state.navigate_route(route);
                }
            }
            Screen::Chat => self.render_chat(ui),
            Screen::Market => {
                if market::render(ui, &mut self.state.market_search) {
                    self.state.navigate(Screen::Home);
                }
            }
            Screen::Profile => match profile::render(ui) {
                Some(profile::ProfileAction::Navigate(route)) => self.state.navigate_route(route),
                Some(profile::ProfileAction::Logout) => self.state.logout(),
                None => {}
            },
            Screen::NotFound(route) => {
                if not_found::render(ui, route) {
                    self.state.navigate(Screen::Home);
                }
            }
        });

        help_widget::render(ctx, &mut self.state.help_open);

        ctx.request_repaint();
    }
}
