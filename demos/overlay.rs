//! Overlay host using eframe.
//!
//! Opens a transparent, borderless, always-on-top, click-through window and
//! paints the last-used reticle at its center. Settings come from the
//! preferences file; edit a preset and restart to see changes.
//!
//! Run with: cargo run --example overlay

use crossgen::app::OverlayController;
use crossgen::events::{AppEvent, EventBus, Level};
use crossgen::placement::ScreenRect;
use crossgen::render::EguiCanvas;
use eframe::egui;

const WINDOW_SIZE: f32 = 400.0;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("crossgen")
            .with_inner_size([WINDOW_SIZE, WINDOW_SIZE])
            .with_transparent(true)
            .with_decorations(false)
            .with_always_on_top()
            .with_mouse_passthrough(true),
        ..Default::default()
    };

    eframe::run_native(
        "crossgen overlay",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals {
                window_fill: egui::Color32::TRANSPARENT,
                panel_fill: egui::Color32::TRANSPARENT,
                ..egui::Visuals::dark()
            });
            Ok(Box::new(OverlayApp::new()))
        }),
    )
}

struct OverlayApp {
    bus: EventBus,
    controller: OverlayController,
}

impl OverlayApp {
    fn new() -> Self {
        let bus = EventBus::new();
        let mut controller = OverlayController::with_default_locations(bus.publisher());
        // The window itself is the "monitor": center inside it.
        let screen = ScreenRect::new(0, 0, WINDOW_SIZE as u32, WINDOW_SIZE as u32);
        let mut settings = controller.settings().clone();
        settings.monitor_index = 0;
        settings.position = None;
        let _ = controller.apply(settings, &[screen]);
        Self { bus, controller }
    }
}

impl eframe::App for OverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.bus.drain() {
            if let AppEvent::Notify(n) = &event {
                match n.level {
                    Level::Info => tracing::info!("{}: {}", n.title, n.message),
                    Level::Warning => tracing::warn!("{}: {}", n.title, n.message),
                    Level::Error => tracing::error!("{}: {}", n.title, n.message),
                }
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if let Some(frame) = self.controller.frame() {
                    let origin = egui::pos2(frame.origin.0 as f32, frame.origin.1 as f32);
                    let mut canvas = EguiCanvas::new(ui.painter().clone(), origin);
                    frame.draw.replay(&mut canvas);
                }
            });
    }
}

impl Drop for OverlayApp {
    fn drop(&mut self) {
        let _ = self.controller.shutdown();
    }
}
