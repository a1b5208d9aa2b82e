use crate::line::{LineId, Vertex};
use crate::model::Point;
use crate::surface::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// A pointer event as delivered by the host. `target` is the element the
/// host hit-tested under the pointer, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: Option<ElementId>,
    pub client: Point,
}

impl PointerEvent {
    pub fn down(target: Option<ElementId>, client: Point) -> Self {
        Self {
            kind: PointerKind::Down,
            target,
            client,
        }
    }

    pub fn moved(target: Option<ElementId>, client: Point) -> Self {
        Self {
            kind: PointerKind::Move,
            target,
            client,
        }
    }

    pub fn up(target: Option<ElementId>, client: Point) -> Self {
        Self {
            kind: PointerKind::Up,
            target,
            client,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerTarget {
    Element(ElementId),
    Global,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Handler {
    BeginDrag { line: LineId, vertex: Vertex },
    DragMove { line: LineId, vertex: Vertex },
    /// Ends one gesture: removes its move listener and then itself.
    EndDrag { move_listener: ListenerId },
}

#[derive(Clone, Copy, Debug)]
struct Listener {
    id: ListenerId,
    target: ListenerTarget,
    kind: PointerKind,
    handler: Handler,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

impl Listeners {
    pub(crate) fn add(
        &mut self,
        target: ListenerTarget,
        kind: PointerKind,
        handler: Handler,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener {
            id,
            target,
            kind,
            handler,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        self.entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|l| l.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn handlers(&self) -> impl Iterator<Item = &Handler> {
        self.entries.iter().map(|l| &l.handler)
    }

    /// Listeners an event reaches: the target's own listeners first, then
    /// global ones, each in registration order.
    pub(crate) fn matching(&self, event: &PointerEvent) -> Vec<(ListenerId, Handler)> {
        let on_target = self.entries.iter().filter(|l| {
            l.kind == event.kind
                && matches!(l.target, ListenerTarget::Element(el) if Some(el) == event.target)
        });
        let global = self
            .entries
            .iter()
            .filter(|l| l.kind == event.kind && l.target == ListenerTarget::Global);
        on_target.chain(global).map(|l| (l.id, l.handler)).collect()
    }
}
