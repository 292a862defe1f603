use anyhow::{anyhow, Result};
use eframe::egui::{
    self, pos2, vec2, Align2, Color32, ColorImage, FontId, Key, Rect, RichText, TextureHandle,
    TextureOptions, ViewportCommand,
};
use image::RgbaImage;

use super::{
    refresh::Refresher,
    state::{starts_window_drag, Tone, WidgetState},
};

pub const WINDOW_SIZE: [f32; 2] = [400.0, 200.0];

const BACKGROUND: Color32 = Color32::from_rgb(0x31, 0x2f, 0x2f);
const MUTED: Color32 = Color32::from_rgb(0xc7, 0xc5, 0xc5);
const BUTTON: Color32 = Color32::from_rgb(0x49, 0xcc, 0x90);
const BUTTON_ACTIVE: Color32 = Color32::from_rgb(0x25, 0x83, 0x58);

const IMAGE_RECT: Rect = Rect::from_min_max(pos2(280.0, 55.0), pos2(380.0, 155.0));
const BUTTON_RECT: Rect = Rect::from_min_max(pos2(290.0, 160.0), pos2(385.0, 190.0));
const FULL_UV: Rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));

pub struct WidgetApp {
    state: WidgetState,
    refresher: Refresher,
    image: Option<TextureHandle>,
}

impl WidgetApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        refresher: Refresher,
        date: String,
        image: Option<RgbaImage>,
    ) -> WidgetApp {
        let image = image.map(|image| {
            let size = [image.width() as usize, image.height() as usize];
            let pixels = ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            cc.egui_ctx
                .load_texture("dolarbcv-image", pixels, TextureOptions::LINEAR)
        });
        let mut app = WidgetApp {
            state: WidgetState::new(date),
            refresher,
            image,
        };
        app.refresh(&cc.egui_ctx);
        app
    }

    fn refresh(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.refresher
            .start(&mut self.state, move || ctx.request_repaint());
    }

    fn paint(&self, ui: &egui::Ui) {
        let painter = ui.painter();
        for label in self.state.labels() {
            let color = match label.tone {
                Tone::Primary => Color32::WHITE,
                Tone::Muted => MUTED,
            };
            painter.text(
                pos2(label.pos.x, label.pos.y),
                Align2::LEFT_TOP,
                &label.text,
                FontId::proportional(label.size),
                color,
            );
        }
        if let Some(texture) = &self.image {
            painter.image(texture.id(), IMAGE_RECT, FULL_UV, Color32::WHITE);
        }
    }

    /// The window manager does the move, so it works where absolute window
    /// positions are unavailable (Wayland).
    fn handle_drag(&self, ctx: &egui::Context, over_button: bool) {
        let pressed = ctx.input(|i| i.pointer.primary_pressed());
        if starts_window_drag(pressed, over_button) {
            ctx.send_viewport_cmd(ViewportCommand::StartDrag);
        }
    }
}

/// Button fill at rest and on hover; the darker shade only while held down.
fn style_button(visuals: &mut egui::Visuals) {
    visuals.widgets.inactive.weak_bg_fill = BUTTON;
    visuals.widgets.hovered.weak_bg_fill = BUTTON;
    visuals.widgets.active.weak_bg_fill = BUTTON_ACTIVE;
}

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresher.poll(&mut self.state);

        let mut clicked = false;
        let mut over_button = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                self.paint(ui);
                style_button(ui.visuals_mut());
                let button = egui::Button::new(
                    RichText::new("Actualizar")
                        .size(12.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                let response = ui
                    .put(BUTTON_RECT, button)
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                over_button = response.hovered();
                clicked = response.clicked();
            });

        if clicked {
            self.refresh(ctx);
        }
        self.handle_drag(ctx, over_button);
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

pub fn run(refresher: Refresher, date: String, image: Option<RgbaImage>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("DolarBCV")
            .with_inner_size(vec2(WINDOW_SIZE[0], WINDOW_SIZE[1]))
            .with_resizable(false)
            .with_decorations(false)
            .with_always_on_top(),
        ..Default::default()
    };
    eframe::run_native(
        "DolarBCV",
        options,
        Box::new(move |cc| Ok(Box::new(WidgetApp::new(cc, refresher, date, image)))),
    )
    .map_err(|e| anyhow!("Failed to open window: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darker_fill_only_while_pressed() {
        let mut visuals = egui::Visuals::dark();
        style_button(&mut visuals);
        assert_eq!(visuals.widgets.inactive.weak_bg_fill, BUTTON);
        assert_eq!(visuals.widgets.hovered.weak_bg_fill, BUTTON);
        assert_eq!(visuals.widgets.active.weak_bg_fill, BUTTON_ACTIVE);
    }
}
