use domline::geometry::{self, LineGeometry};
use domline::model::Rgba;
use domline::style::ComputedStyle;
use domline::{ElementId, Point, RetainedSurface, Surface};
use eframe::egui;

fn to_color32(css: &str) -> egui::Color32 {
    let c = Rgba::parse_css(css).unwrap_or(Rgba::BLACK);
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn to_pos2(p: Point) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

pub(super) fn draw_background(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(180)),
        egui::StrokeKind::Inside,
    );
}

pub(super) fn draw_surface(painter: &egui::Painter, surface: &RetainedSurface) {
    for id in surface.paint_order() {
        draw_element(painter, surface, id);
    }
}

fn draw_element(painter: &egui::Painter, surface: &RetainedSurface, id: ElementId) {
    let style = surface.computed(id);
    let client = surface.bounding_rect(id);
    // Offset of the containing block; styles are relative to it.
    let offset = Point::new(client.left - style.left, client.top - style.top);

    if let Some((width, color)) = &style.border_top {
        draw_border_line(painter, &style, offset, *width, color);
    }

    let Some(background) = &style.background else {
        return;
    };
    if client.width <= 0.0 || client.height <= 0.0 {
        return;
    }
    let fill = to_color32(background);
    let rect = egui::Rect::from_min_size(
        to_pos2(Point::new(client.left, client.top)),
        egui::vec2(client.width as f32, client.height as f32),
    );
    if style.border_radius >= 50.0 {
        painter.circle_filled(rect.center(), rect.width().min(rect.height()) * 0.5, fill);
    } else {
        painter.rect_filled(rect, 0.0, fill);
    }
}

/// A zero-height box with a top border is a rotated segment.
fn draw_border_line(
    painter: &egui::Painter,
    style: &ComputedStyle,
    offset: Point,
    width: f64,
    color: &str,
) {
    let body = LineGeometry {
        length: style.width,
        x: style.left,
        y: style.top,
        angle: style.rotation,
    };
    let (a, b) = geometry::endpoints_from_body(&body);
    let a = Point::new(a.x + offset.x, a.y + offset.y);
    let b = Point::new(b.x + offset.x, b.y + offset.y);
    painter.line_segment(
        [to_pos2(a), to_pos2(b)],
        egui::Stroke::new(width as f32, to_color32(color)),
    );
}
