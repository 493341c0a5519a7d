use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::gui::app::JokeboxApp;

/// Central panel: the refresh trigger plus the vote-sorted joke table. The
/// sorted view is recomputed every frame from the store.
pub fn joke_table(ctx: &egui::Context, app: &mut JokeboxApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(app.theme.heading(ctx, "Dad Jokes"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let refresh =
                    ui.add_enabled(!app.board.is_loading(), egui::Button::new("Get New Jokes"));
                if refresh.clicked() {
                    app.refresh_jokes();
                }
            });
        });

        ui.add_space(6.0);

        if !app.board.has_jokes() {
            if !app.board.is_loading() {
                ui.label("No jokes yet. Hit \"Get New Jokes\" to fetch a batch.");
            }
            return;
        }

        let jokes = app.board.sorted_jokes();
        let mut pending_vote: Option<(String, i32)> = None;

        let text_height =
            egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

        egui::ScrollArea::vertical().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(48.0))
                .column(Column::auto().at_least(56.0))
                .column(Column::remainder())
                .header(25.0, |mut header| {
                    header.col(|ui| {
                        ui.label(app.theme.heading(ctx, "Votes"));
                    });
                    header.col(|_ui| {});
                    header.col(|ui| {
                        ui.label(app.theme.heading(ctx, "Joke"));
                    });
                })
                .body(|body| {
                    body.rows(text_height + 8.0, jokes.len(), |mut row| {
                        let joke = &jokes[row.index()];

                        row.col(|ui| {
                            let color = match joke.votes {
                                v if v > 0 => app.theme.green(ctx),
                                v if v < 0 => app.theme.red(ctx),
                                _ => ui.visuals().text_color(),
                            };
                            ui.label(
                                egui::RichText::new(joke.votes.to_string()).color(color).strong(),
                            );
                        });

                        row.col(|ui| {
                            if ui.small_button("👍").clicked() {
                                pending_vote = Some((joke.id.clone(), 1));
                            }
                            if ui.small_button("👎").clicked() {
                                pending_vote = Some((joke.id.clone(), -1));
                            }
                        });

                        row.col(|ui| {
                            ui.label(&joke.text);
                        });
                    });
                });
        });

        if let Some((id, delta)) = pending_vote {
            app.board.vote(&id, delta);
        }
    });
}
