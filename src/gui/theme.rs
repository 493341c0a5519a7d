use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: Palette::dracula(), light: Palette::dracula_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).purple)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).purple
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    red: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl Palette {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            red: Color32::from_rgb(200, 80, 80),
            green: Color32::from_rgb(80, 200, 120),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: palette.background,
                    weak_bg_fill: palette.background_lighter,
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: palette.background_light,
                    weak_bg_fill: palette.background_lighter,
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: palette.selection,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke { color: palette.cyan, ..default.widgets.hovered.bg_stroke },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: palette.selection,
                    weak_bg_fill: palette.background_light,
                    bg_stroke: Stroke { color: palette.cyan, ..default.widgets.active.bg_stroke },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: palette.background_dark,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke { color: palette.purple, ..default.widgets.open.bg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.cyan,
            faint_bg_color: match is_dark {
                true => palette.background_darker,
                false => palette.background_light,
            },
            extreme_bg_color: palette.background_darker,
            error_fg_color: palette.red,
            window_shadow: Shadow { color: palette.background_darker, ..default.window_shadow },
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.background_light, ..default.window_stroke },
            panel_fill: palette.background_dark,
            ..default
        },
    );
}
