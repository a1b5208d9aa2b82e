use crate::model::{Point, Rect};
use crate::style::{ComputedStyle, Declaration, InlineStyle, Position};

use super::{ElementId, Surface};

#[derive(Clone, Debug, Default)]
struct Node {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    style: InlineStyle,
}

/// In-memory element tree. Element 0 is the root; its client box is set by
/// the host with [`RetainedSurface::set_root_rect`].
#[derive(Clone, Debug)]
pub struct RetainedSurface {
    nodes: Vec<Node>,
    root_rect: Rect,
}

impl Default for RetainedSurface {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

impl RetainedSurface {
    pub fn new(root_rect: Rect) -> Self {
        Self {
            nodes: vec![Node::default()],
            root_rect,
        }
    }

    pub fn set_root_rect(&mut self, rect: Rect) {
        self.root_rect = rect;
    }

    pub fn root_rect(&self) -> Rect {
        self.root_rect
    }

    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn style(&self, id: ElementId) -> Option<&InlineStyle> {
        self.nodes.get(id.0).map(|n| &n.style)
    }

    pub fn computed(&self, id: ElementId) -> ComputedStyle {
        self.style(id).map(InlineStyle::computed).unwrap_or_default()
    }

    pub fn style_text(&self, id: ElementId) -> String {
        self.style(id).map(InlineStyle::css_text).unwrap_or_default()
    }

    pub fn document_order(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(self.root()).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Document order, stably sorted by `z-index`: the order to paint in.
    pub fn paint_order(&self) -> Vec<ElementId> {
        let mut order = self.document_order();
        order.sort_by_key(|id| self.computed(*id).z_index);
        order
    }

    fn layout_rect(&self, id: ElementId) -> Rect {
        if id == self.root() {
            return self.root_rect;
        }
        let containing = self.containing_block(id);
        let style = self.computed(id);
        match style.position {
            Position::Absolute => Rect::new(
                containing.left + style.left,
                containing.top + style.top,
                style.width,
                style.height,
            ),
            Position::Static => Rect::new(containing.left, containing.top, containing.width, 0.0),
        }
    }

    fn containing_block(&self, id: ElementId) -> Rect {
        let mut cursor = self.parent(id);
        while let Some(p) = cursor {
            if p == self.root() || self.computed(p).position == Position::Absolute {
                return self.layout_rect(p);
            }
            cursor = self.parent(p);
        }
        self.root_rect
    }

    /// Topmost element under `client`, by `z-index` and then document order.
    /// Rounded elements are hit as ellipses.
    pub fn hit_test(&self, client: Point) -> Option<ElementId> {
        self.paint_order().into_iter().rev().find(|id| {
            let style = self.computed(*id);
            let rect = self.layout_rect(*id);
            if rect.width <= 0.0 || rect.height <= 0.0 || !rect.contains(client) {
                return false;
            }
            if style.border_radius >= 50.0 {
                let rx = rect.width * 0.5;
                let ry = rect.height * 0.5;
                let nx = (client.x - rect.left - rx) / rx;
                let ny = (client.y - rect.top - ry) / ry;
                nx * nx + ny * ny <= 1.0
            } else {
                true
            }
        })
    }
}

impl Surface for RetainedSurface {
    fn root(&self) -> ElementId {
        ElementId(0)
    }

    fn create_element(&mut self) -> ElementId {
        self.nodes.push(Node::default());
        ElementId(self.nodes.len() - 1)
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            log::warn!("ignoring append of {child:?} to {parent:?}");
            return;
        }
        // Appending an element under itself or one of its descendants would
        // make the tree cyclic.
        let mut cursor = Some(parent);
        while let Some(p) = cursor {
            if p == child {
                log::warn!("ignoring append of {child:?} to its descendant {parent:?}");
                return;
            }
            cursor = self.nodes[p.0].parent;
        }
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn set_style(&mut self, element: ElementId, declaration: Declaration) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.style.set(declaration);
        }
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        self.layout_rect(element)
    }
}
