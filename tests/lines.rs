use approx::{assert_abs_diff_eq, assert_relative_eq};
use domline::geometry::endpoints_from_body;
use domline::style::{Declaration, Position};
use domline::{
    Arg, Error, LineArgs, LineManager, LineSettings, Point, PointerEvent, Rect, RetainedSurface,
    Surface, Vertex,
};

fn manager() -> LineManager<RetainedSurface> {
    LineManager::new(RetainedSurface::new(Rect::new(0.0, 0.0, 800.0, 600.0)))
}

fn handle_center(m: &LineManager<RetainedSurface>, id: domline::LineId, vertex: Vertex) -> Point {
    let el = m.line(id).unwrap().elements().unwrap().vertices.unwrap()[vertex.index()];
    let r = m.surface().bounding_rect(el);
    Point::new(r.left + r.width * 0.5, r.top + r.height * 0.5)
}

#[test]
fn record_form_horizontal_line() {
    let mut m = manager();
    let id = m.add_line(LineSettings::new(0.0, 0.0, 100.0, 0.0));
    let line = m.line(id).unwrap();
    let g = line.geometry();
    assert_relative_eq!(g.length, 100.0);
    assert_abs_diff_eq!(g.angle.cos(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(g.angle.sin(), 0.0, epsilon = 1e-12);

    let body = m.surface().computed(line.elements().unwrap().body);
    assert_eq!((body.left, body.top, body.width), (0.0, 0.0, 100.0));

    assert_eq!(handle_center(&m, id, Vertex::Start), Point::new(0.0, 0.0));
    assert_eq!(handle_center(&m, id, Vertex::End), Point::new(100.0, 0.0));
}

#[test]
fn coincident_points() {
    let mut m = manager();
    let id = m.add_line((0.0, 0.0, 0.0, 0.0));
    let line = m.line(id).unwrap();
    assert_eq!(line.geometry().length, 0.0);
    assert_eq!(handle_center(&m, id, Vertex::Start), Point::new(0.0, 0.0));
    assert_eq!(handle_center(&m, id, Vertex::End), Point::new(0.0, 0.0));
}

#[test]
fn four_positional_arguments_use_defaults() {
    let mut m = manager();
    let id = m
        .add_line_args(vec![
            Arg::Number(1.0),
            Arg::Number(2.0),
            Arg::Number(3.0),
            Arg::Number(4.0),
        ])
        .unwrap();
    let line = m.line(id).unwrap();
    assert_eq!(line.color(), "#000");
    assert!(line.is_movable());
    assert!(line.shows_vertices());
}

#[test]
fn seven_positional_arguments() {
    let mut m = manager();
    let id = m
        .add_line_args(vec![
            Arg::Number(1.0),
            Arg::Number(2.0),
            Arg::Number(3.0),
            Arg::Number(4.0),
            Arg::Color("blue".into()),
            Arg::Flag(false),
            Arg::Flag(false),
        ])
        .unwrap();
    let line = m.line(id).unwrap();
    assert_eq!(line.color(), "blue");
    assert!(!line.is_movable());
    assert!(!line.shows_vertices());
    assert!(line.elements().unwrap().vertices.is_none());
}

#[test]
fn unsupported_arities_fail_loudly() {
    let mut m = manager();
    for n in [0usize, 2, 3, 8] {
        let args = vec![Arg::Number(0.0); n];
        assert_eq!(m.add_line_args(args), Err(Error::InvalidArity(n)));
    }
    assert!(m.lines().is_empty());
    assert!(m.surface().is_empty());
}

#[test]
fn movable_with_hidden_vertices_still_gets_handles() {
    let mut m = manager();
    let id = m.add_line(
        LineArgs::position(10.0, 10.0, 50.0, 50.0)
            .with_movable(true)
            .with_show_vertices(false),
    );
    assert!(m.line(id).unwrap().elements().unwrap().vertices.is_some());
}

#[test]
fn rendered_body_always_spans_the_endpoints() {
    let mut m = manager();
    let id = m.add_line((120.0, 40.0, 300.0, 260.0));
    let start = m.line(id).unwrap().elements().unwrap().vertices.unwrap()[0];

    let targets = [
        Point::new(10.0, 500.0),
        Point::new(700.0, 20.0),
        Point::new(300.0, 260.0),
        Point::new(-50.0, 9999.0),
    ];
    m.dispatch(&PointerEvent::down(Some(start), Point::new(120.0, 40.0)));
    for client in targets {
        m.dispatch(&PointerEvent::moved(None, client));
        let line = m.line(id).unwrap();
        let body = m.surface().computed(line.elements().unwrap().body);
        let g = domline::geometry::LineGeometry {
            length: body.width,
            x: body.left,
            y: body.top,
            angle: body.rotation,
        };
        let (a, b) = endpoints_from_body(&g);
        assert_abs_diff_eq!(a.x, line.start().x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, line.start().y, epsilon = 1e-9);
        assert_abs_diff_eq!(b.x, line.end().x, epsilon = 1e-9);
        assert_abs_diff_eq!(b.y, line.end().y, epsilon = 1e-9);
        assert_eq!(handle_center(&m, id, Vertex::Start), line.start());
        assert_eq!(handle_center(&m, id, Vertex::End), line.end());
    }
    // Last target was outside the container.
    assert_eq!(m.line(id).unwrap().start(), Point::new(0.0, 600.0));
}

#[test]
fn hit_tested_drag_through_the_surface() {
    let mut m = LineManager::new(RetainedSurface::new(Rect::new(100.0, 50.0, 400.0, 400.0)));
    let id = m.add_line((20.0, 20.0, 200.0, 20.0));

    let press = Point::new(300.0, 70.0);
    let target = m.surface().hit_test(press);
    assert!(m.dispatch(&PointerEvent::down(target, press)));
    m.dispatch(&PointerEvent::moved(None, Point::new(250.0, 250.0)));
    m.dispatch(&PointerEvent::up(None, Point::new(250.0, 250.0)));
    m.dispatch(&PointerEvent::moved(None, Point::new(0.0, 0.0)));

    let line = m.line(id).unwrap();
    assert_eq!(line.start(), Point::new(20.0, 20.0));
    assert_eq!(line.end(), Point::new(150.0, 200.0));
}

#[test]
fn pointer_down_off_handles_starts_nothing() {
    let mut m = manager();
    m.add_line((20.0, 20.0, 200.0, 20.0));
    let press = Point::new(100.0, 20.0);
    assert_eq!(m.surface().hit_test(press), None);
    assert!(!m.dispatch(&PointerEvent::down(None, press)));
    assert!(!m.is_dragging());
}

#[test]
fn explicit_container_offsets_and_clamps() {
    let mut surface = RetainedSurface::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let root = surface.root();
    let container = surface.create_element();
    surface.set_style(container, Declaration::Position(Position::Absolute));
    surface.set_style(container, Declaration::Left(100.0));
    surface.set_style(container, Declaration::Top(50.0));
    surface.set_style(container, Declaration::Width(200.0));
    surface.set_style(container, Declaration::Height(100.0));
    surface.append_child(root, container);

    let mut m = LineManager::with_container(surface, container);
    let id = m.add_line((10.0, 10.0, 50.0, 50.0));
    let start = m.line(id).unwrap().elements().unwrap().vertices.unwrap()[0];
    assert_eq!(m.surface().parent(start), Some(container));

    let r = m.surface().bounding_rect(start);
    assert_eq!((r.left, r.top), (105.0, 55.0));
    assert_eq!(handle_center(&m, id, Vertex::Start), Point::new(110.0, 60.0));

    assert!(m.dispatch(&PointerEvent::down(Some(start), Point::new(110.0, 60.0))));
    m.dispatch(&PointerEvent::moved(None, Point::new(1000.0, 1000.0)));
    assert_eq!(m.line(id).unwrap().start(), Point::new(200.0, 100.0));
    assert_eq!(handle_center(&m, id, Vertex::Start), Point::new(300.0, 150.0));

    m.dispatch(&PointerEvent::moved(None, Point::new(0.0, 0.0)));
    assert_eq!(m.line(id).unwrap().start(), Point::new(0.0, 0.0));
}
