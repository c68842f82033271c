//! Main application

use swipe_core::{PanelSwiper, SwiperConfig, SwiperError};

use crate::theme::{
    PANEL_MARGIN, PANEL_ROUNDING, PANEL_TITLE_COLOR, PANEL_TITLE_SIZE, panel_color,
};

/// Pointer positions of the drag in progress
#[derive(Debug, Clone, Copy)]
struct DragState {
    press_x: f32,
    last_x: f32,
}

/// Panel swiper demo application
pub struct PanelSwiperApp {
    swiper: PanelSwiper,
    drag: Option<DragState>,
}

impl PanelSwiperApp {
    /// Create the app with the container centered on the initial panel
    pub fn new(config: SwiperConfig) -> Result<Self, SwiperError> {
        let swiper = PanelSwiper::at_initial_panel(config)?;
        Ok(Self {
            swiper,
            drag: None,
        })
    }

    /// Forward egui drag events on the panel area to the swiper
    fn handle_drag(&mut self, ui: &egui::Ui, response: &egui::Response, viewport_width: f32) {
        let pointer_x = response.interact_pointer_pos().map(|p| p.x);

        if response.drag_started() {
            let press_x = ui
                .input(|i| i.pointer.press_origin())
                .map(|p| p.x)
                .or(pointer_x);
            self.drag = press_x.map(|press_x| DragState {
                press_x,
                last_x: press_x,
            });
            self.swiper.on_drag_start();
        }

        if response.dragged() {
            if let (Some(drag), Some(x)) = (self.drag.as_mut(), pointer_x) {
                drag.last_x = x;
                self.swiper.on_drag_move(drag.press_x, x);
            }
        }

        if response.drag_stopped() {
            if let Some(mut drag) = self.drag.take() {
                if let Some(x) = pointer_x {
                    drag.last_x = x;
                }
                let outcome = self
                    .swiper
                    .on_drag_end(drag.press_x, drag.last_x, viewport_width);
                tracing::debug!("Swipe finished: {:?}", outcome);
                ui.ctx().request_repaint();
            }
        }
    }

    /// Draw the panels offset by the container position
    fn render_panels(&self, ui: &egui::Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let offset = self.swiper.position();
        let size = egui::vec2(
            (rect.width() - 2.0 * PANEL_MARGIN).max(0.0),
            (rect.height() - 2.0 * PANEL_MARGIN).max(0.0),
        );

        for (i, anchor) in self.swiper.anchors().iter().enumerate() {
            // Screen Y grows downward
            let panel_center = egui::pos2(
                center.x + anchor.x + offset.x,
                center.y - (anchor.y + offset.y),
            );
            let panel_rect = egui::Rect::from_center_size(panel_center, size);
            if !panel_rect.intersects(rect) {
                continue;
            }

            painter.rect_filled(panel_rect, PANEL_ROUNDING, panel_color(i));
            painter.text(
                panel_center,
                egui::Align2::CENTER_CENTER,
                format!("Panel {}", i + 1),
                egui::FontId::proportional(PANEL_TITLE_SIZE),
                PANEL_TITLE_COLOR,
            );
        }
    }

    /// Panel buttons, drag toggle and status line
    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for index in 1..=self.swiper.number_of_panels() {
                let selected = index == self.swiper.current_index();
                if ui
                    .selectable_label(selected, format!("Panel {}", index))
                    .clicked()
                {
                    match self.swiper.select_panel(index) {
                        Ok(_) => ui.ctx().request_repaint(),
                        Err(e) => tracing::error!("Failed to select panel: {}", e),
                    }
                }
            }

            ui.separator();

            let mut drag_enabled = self.swiper.drag_enabled();
            if ui.checkbox(&mut drag_enabled, "Drag enabled").changed() {
                self.swiper.set_drag_enabled(drag_enabled);
            }

            ui.separator();

            let rest = self.swiper.rest_position();
            ui.label(format!(
                "Panel {}/{}   rest x: {:.0}",
                self.swiper.current_index(),
                self.swiper.number_of_panels(),
                rest.x
            ));
            if let Some(target) = self.swiper.transition_target() {
                ui.label(format!("-> x: {:.0}", target.x));
            }
        });
    }
}

impl eframe::App for PanelSwiperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        if self.swiper.tick(dt) {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::bottom("panel_controls").show(ctx, |ui| {
            self.render_controls(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let response = ui.interact(rect, ui.id().with("swipe_area"), egui::Sense::drag());
                self.handle_drag(ui, &response, rect.width());
                self.render_panels(ui, rect);
            });
    }
}
