use domline::style::Cursor;
use domline::{Point, PointerEvent, Rect};
use eframe::egui;

use super::LineApp;
use super::render::{draw_background, draw_surface};

fn to_point(p: egui::Pos2) -> Point {
    Point::new(f64::from(p.x), f64::from(p.y))
}

impl LineApp {
    fn forward_pointer_events(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            let pointer = match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let client = to_point(pos);
                    let target = self.manager.surface().hit_test(client);
                    if pressed {
                        PointerEvent::down(target, client)
                    } else {
                        PointerEvent::up(target, client)
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    let client = to_point(pos);
                    PointerEvent::moved(self.manager.surface().hit_test(client), client)
                }
                _ => continue,
            };
            self.manager.dispatch(&pointer);
        }
    }

    fn update_cursor(&self, ctx: &egui::Context) {
        if self.manager.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            return;
        }
        let Some(hover) = ctx.input(|i| i.pointer.hover_pos()) else {
            return;
        };
        let surface = self.manager.surface();
        if let Some(id) = surface.hit_test(to_point(hover)) {
            if surface.computed(id).cursor == Cursor::Pointer {
                ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        }
    }
}

impl eframe::App for LineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("left_panel")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Lines");
                ui.separator();
                ui.checkbox(
                    &mut self.manager.line_container_div,
                    "Wrap each new line in its own element",
                );
                ui.separator();

                ui.label("New line");
                let form = &mut self.form;
                ui.horizontal(|ui| {
                    ui.label("From");
                    ui.add(egui::DragValue::new(&mut form.x1).speed(1.0));
                    ui.add(egui::DragValue::new(&mut form.y1).speed(1.0));
                });
                ui.horizontal(|ui| {
                    ui.label("To");
                    ui.add(egui::DragValue::new(&mut form.x2).speed(1.0));
                    ui.add(egui::DragValue::new(&mut form.y2).speed(1.0));
                });
                ui.horizontal(|ui| {
                    ui.label("Color");
                    ui.text_edit_singleline(&mut form.color);
                });
                ui.checkbox(&mut form.movable, "Movable");
                ui.add_enabled(
                    !form.movable,
                    egui::Checkbox::new(&mut form.show_vertices, "Show vertices"),
                );
                if ui.button("Add line").clicked() {
                    self.add_line_from_form();
                }

                ui.separator();
                if ui.button("Export HTML…").clicked() {
                    self.export_html_dialog();
                }
                if ui.button("Save settings…").clicked() {
                    self.save_settings_dialog();
                }

                ui.separator();
                ui.label(format!("{} lines", self.manager.lines().len()));
                if let Some(status) = &self.status {
                    ui.label(status.as_str());
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let size = egui::vec2(
                self.settings.container_width as f32,
                self.settings.container_height as f32,
            );
            let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
            self.manager.surface_mut().set_root_rect(Rect::new(
                f64::from(rect.min.x),
                f64::from(rect.min.y),
                f64::from(rect.width()),
                f64::from(rect.height()),
            ));

            self.forward_pointer_events(ctx);
            self.update_cursor(ctx);

            let painter = ui.painter_at(rect);
            draw_background(&painter, rect);
            draw_surface(&painter, self.manager.surface());
        });
    }
}
