use crate::geometry::{self, LineGeometry, VERTEX_SIZE};
use crate::model::{DEFAULT_COLOR, LineArgs, Point};
use crate::style::{Cursor, Declaration, Position};
use crate::surface::{ElementId, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vertex {
    Start,
    End,
}

impl Vertex {
    pub const BOTH: [Vertex; 2] = [Vertex::Start, Vertex::End];

    pub fn index(self) -> usize {
        match self {
            Vertex::Start => 0,
            Vertex::End => 1,
        }
    }
}

/// Elements a rendered line owns. They are created once and only restyled
/// afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineElements {
    pub wrapper: Option<ElementId>,
    pub body: ElementId,
    pub vertices: Option<[ElementId; 2]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    color: String,
    movable: bool,
    show_vertices: bool,
    geometry: LineGeometry,
    elements: Option<LineElements>,
}

impl Line {
    pub fn from_args(args: LineArgs) -> Self {
        let (start, end, color, movable, show_vertices) = match args {
            LineArgs::ByRecord(s) => (
                Point::new(s.x1, s.y1),
                Point::new(s.x2, s.y2),
                s.color,
                s.movable,
                s.show_vertices,
            ),
            LineArgs::ByPosition {
                x1,
                y1,
                x2,
                y2,
                color,
                movable,
                show_vertices,
            } => (
                Point::new(x1, y1),
                Point::new(x2, y2),
                color,
                movable,
                show_vertices,
            ),
        };
        let movable = movable.unwrap_or(true);
        // A movable line needs visible handles to be grabbed at all.
        let show_vertices = movable || show_vertices.unwrap_or(true);
        Self {
            start,
            end,
            color: color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            movable,
            show_vertices,
            geometry: geometry::compute(start, end),
            elements: None,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn endpoint(&self, vertex: Vertex) -> Point {
        match vertex {
            Vertex::Start => self.start,
            Vertex::End => self.end,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_movable(&self) -> bool {
        self.movable
    }

    pub fn shows_vertices(&self) -> bool {
        self.show_vertices
    }

    pub fn geometry(&self) -> LineGeometry {
        self.geometry
    }

    pub fn elements(&self) -> Option<LineElements> {
        self.elements
    }

    /// Creates the body and handle elements under `container`, optionally
    /// inside a fresh wrapper element. Rendering twice is a no-op.
    pub fn render<S: Surface>(
        &mut self,
        surface: &mut S,
        container: ElementId,
        wrap: bool,
    ) -> LineElements {
        if let Some(elements) = self.elements {
            return elements;
        }
        self.geometry = geometry::compute(self.start, self.end);

        let wrapper = wrap.then(|| surface.create_element());
        let parent = wrapper.unwrap_or(container);

        let body = surface.create_element();
        surface.set_style(body, Declaration::Position(Position::Absolute));
        surface.set_style(
            body,
            Declaration::BorderTop {
                width: 1.0,
                color: self.color.clone(),
            },
        );
        surface.set_style(body, Declaration::Width(self.geometry.length));
        surface.set_style(body, Declaration::Height(0.0));
        surface.set_style(body, Declaration::Rotate(self.geometry.angle));
        surface.set_style(body, Declaration::Left(self.geometry.x));
        surface.set_style(body, Declaration::Top(self.geometry.y));
        surface.set_style(body, Declaration::BackfaceHidden);
        surface.append_child(parent, body);

        let vertices = self.show_vertices.then(|| {
            Vertex::BOTH.map(|vertex| {
                let el = surface.create_element();
                surface.set_style(el, Declaration::Position(Position::Absolute));
                surface.set_style(el, Declaration::Width(VERTEX_SIZE));
                surface.set_style(el, Declaration::Height(VERTEX_SIZE));
                surface.set_style(el, Declaration::ZIndex(1));
                surface.set_style(el, Declaration::Background(self.color.clone()));
                surface.set_style(el, Declaration::BorderRadius(50.0));
                if self.movable {
                    surface.set_style(el, Declaration::Cursor(Cursor::Pointer));
                }
                let origin = geometry::handle_origin(self.endpoint(vertex));
                surface.set_style(el, Declaration::Left(origin.x));
                surface.set_style(el, Declaration::Top(origin.y));
                surface.append_child(parent, el);
                el
            })
        });

        if let Some(wrapper) = wrapper {
            surface.append_child(container, wrapper);
        }

        let elements = LineElements {
            wrapper,
            body,
            vertices,
        };
        self.elements = Some(elements);
        elements
    }

    pub fn move_vertex<S: Surface>(&mut self, surface: &mut S, vertex: Vertex, to: Point) {
        match vertex {
            Vertex::Start => self.start = to,
            Vertex::End => self.end = to,
        }
        self.geometry = geometry::compute(self.start, self.end);
        self.sync_elements(surface);
    }

    fn sync_elements<S: Surface>(&self, surface: &mut S) {
        let Some(elements) = self.elements else {
            return;
        };
        if let Some(vertices) = elements.vertices {
            for vertex in Vertex::BOTH {
                let origin = geometry::handle_origin(self.endpoint(vertex));
                let el = vertices[vertex.index()];
                surface.set_style(el, Declaration::Left(origin.x));
                surface.set_style(el, Declaration::Top(origin.y));
            }
        }
        let g = self.geometry;
        surface.set_style(elements.body, Declaration::Left(g.x));
        surface.set_style(elements.body, Declaration::Top(g.y));
        surface.set_style(elements.body, Declaration::Width(g.length));
        surface.set_style(elements.body, Declaration::Rotate(g.angle));
    }
}
