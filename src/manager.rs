use crate::error::Result;
use crate::events::{Handler, ListenerId, ListenerTarget, Listeners, PointerEvent, PointerKind};
use crate::geometry;
use crate::line::{Line, LineId, Vertex};
use crate::model::{Arg, LineArgs};
use crate::surface::{ElementId, Surface};

pub struct LineManager<S: Surface> {
    surface: S,
    container: ElementId,
    lines: Vec<Line>,
    listeners: Listeners,
    /// Give each line its own wrapper element. Only affects lines added
    /// after it is changed.
    pub line_container_div: bool,
}

impl<S: Surface> LineManager<S> {
    pub fn new(surface: S) -> Self {
        let container = surface.root();
        Self::with_container(surface, container)
    }

    pub fn with_container(surface: S, container: ElementId) -> Self {
        Self {
            surface,
            container,
            lines: Vec::new(),
            listeners: Listeners::default(),
            line_container_div: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_dragging(&self) -> bool {
        self.listeners
            .handlers()
            .any(|h| matches!(h, Handler::DragMove { .. }))
    }

    pub fn add_line(&mut self, args: impl Into<LineArgs>) -> LineId {
        let id = LineId(self.lines.len());
        let mut line = Line::from_args(args.into());
        let elements = line.render(&mut self.surface, self.container, self.line_container_div);
        if let (true, Some(vertices)) = (line.is_movable(), elements.vertices) {
            for vertex in Vertex::BOTH {
                self.listeners.add(
                    ListenerTarget::Element(vertices[vertex.index()]),
                    PointerKind::Down,
                    Handler::BeginDrag { line: id, vertex },
                );
            }
        }
        log::debug!(
            "added line {} from ({}, {}) to ({}, {}), movable={}",
            id.0,
            line.start().x,
            line.start().y,
            line.end().x,
            line.end().y,
            line.is_movable()
        );
        self.lines.push(line);
        id
    }

    /// Adds a line from a loosely typed argument list: one record, or four
    /// coordinates followed by up to color, movable and show-vertices.
    pub fn add_line_args(&mut self, args: Vec<Arg>) -> Result<LineId> {
        let args = LineArgs::try_from(args)?;
        Ok(self.add_line(args))
    }

    /// Routes one host pointer event through the registered listeners.
    /// Returns whether any listener ran.
    pub fn dispatch(&mut self, event: &PointerEvent) -> bool {
        let matching = self.listeners.matching(event);
        let mut handled = false;
        for (id, handler) in matching {
            // A listener removed earlier in this dispatch must not run.
            if !self.listeners.contains(id) {
                continue;
            }
            handled = true;
            match handler {
                Handler::BeginDrag { line, vertex } => self.begin_drag(line, vertex),
                Handler::DragMove { line, vertex } => self.drag_to(line, vertex, event),
                Handler::EndDrag { move_listener } => self.end_drag(id, move_listener),
            }
        }
        handled
    }

    fn begin_drag(&mut self, line: LineId, vertex: Vertex) {
        let move_listener = self.listeners.add(
            ListenerTarget::Global,
            PointerKind::Move,
            Handler::DragMove { line, vertex },
        );
        self.listeners.add(
            ListenerTarget::Global,
            PointerKind::Up,
            Handler::EndDrag { move_listener },
        );
        log::debug!("drag start: line {} {:?}", line.0, vertex);
    }

    fn drag_to(&mut self, line: LineId, vertex: Vertex, event: &PointerEvent) {
        let rect = self.surface.bounding_rect(self.container);
        let p = geometry::clamp_to_container(event.client, rect);
        let Some(l) = self.lines.get_mut(line.0) else {
            return;
        };
        l.move_vertex(&mut self.surface, vertex, p);
        log::trace!("drag move: line {} {:?} -> ({}, {})", line.0, vertex, p.x, p.y);
    }

    fn end_drag(&mut self, up_listener: ListenerId, move_listener: ListenerId) {
        self.listeners.remove(move_listener);
        self.listeners.remove(up_listener);
        log::debug!("drag end");
    }
}

impl<S: Surface + Default> Default for LineManager<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
