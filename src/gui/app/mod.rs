use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use super::{
    error_modal::ErrorModal,
    joke_table::joke_table,
    message_overlay::MessageOverlay,
    settings::{
        SettingsData,
        SettingsModal,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        board::JokeBoard,
        source::DadJokeClient,
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";
const API_RECHECK_SECS: u64 = 30;

pub struct JokeboxApp {
    // Joke state
    pub board: JokeBoard,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    pub error_modal: ErrorModal,
    pub settings_modal: SettingsModal,

    // External Services
    pub api_online: bool,
    last_api_check: Option<Instant>,
    client: Option<DadJokeClient>,
    task_manager: TaskManager,
}

impl JokeboxApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let task_manager = TaskManager::new();
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let client = match DadJokeClient::new() {
            Ok(client) => Some(client),
            Err(e) => {
                eprintln!("Failed to build the HTTP client: {}", e);
                None
            }
        };

        let mut app = Self {
            board: JokeBoard::new(),
            settings_data,
            theme: Theme::dracula(),
            message_overlay: MessageOverlay::new(),
            error_modal: ErrorModal::new(),
            settings_modal: SettingsModal::new(),
            api_online: false,
            last_api_check: None,
            client,
            task_manager,
        };

        app.setup_theme(cc);

        // The board starts in Loading; launch the batch it is waiting for.
        app.spawn_fetch();
        app.check_api_status();

        app
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        set_theme(&cc.egui_ctx, self.theme.clone());

        cc.egui_ctx.set_theme(if self.settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
    }

    /// User-facing refresh entry point. While a fetch is in flight the
    /// request is dropped, so a second batch can never race the first.
    pub fn refresh_jokes(&mut self) {
        if !self.board.request_refresh() {
            return;
        }

        self.spawn_fetch();
    }

    fn spawn_fetch(&mut self) {
        match &self.client {
            Some(client) => {
                self.message_overlay.set_message("Fetching jokes...".to_string());
                self.task_manager.fetch_jokes(client.clone(), self.settings_data.jokes_per_batch);
            }
            None => {
                self.board.fail_fetch();
                self.message_overlay.clear_message();
                self.error_modal.show_error(
                    "Fetch Error",
                    "No HTTP client available to fetch jokes",
                    None::<String>,
                );
            }
        }
    }

    fn check_api_status(&mut self) {
        if let Some(client) = &self.client {
            self.task_manager.check_api_connection(client.clone());
        }
        self.last_api_check = Some(Instant::now());
    }

    fn update_api_status(&mut self) {
        let due = self.last_api_check.map_or(true, |t| t.elapsed().as_secs() >= API_RECHECK_SECS);

        if due {
            self.check_api_status();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::JokesFetched(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(jokes) => {
                        println!("Fetched {} jokes", jokes.len());
                        self.board.finish_fetch(jokes);
                    }
                    Err(error_msg) => {
                        self.board.fail_fetch();
                        self.error_modal.show_error(
                            "Fetch Error",
                            "Couldn't get new jokes from icanhazdadjoke.com",
                            Some(&error_msg),
                        );
                    }
                }
            }

            TaskResult::ApiConnection(online) => {
                self.api_online = online;
            }

            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }
        }
    }
}

impl eframe::App for JokeboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_api_status();

        // Keep the persisted preference in step with the theme switch in the
        // top bar.
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }

        TopBar::show(ctx, &mut self.settings_modal, &self.settings_data, self.api_online);

        joke_table(ctx, self);
        self.message_overlay.show(ctx, &self.theme);
        self.error_modal.show(ctx);

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.settings_data = settings;
            self.save_settings();
        }

        if self.board.is_loading() {
            // Task results only surface on a repaint; don't wait for input.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
