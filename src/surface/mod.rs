//! The element tree lines render into. The manager is handed one; lines
//! never reach for a global document.

mod retained;

pub use retained::RetainedSurface;

use crate::model::Rect;
use crate::style::Declaration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

pub trait Surface {
    /// Element used as the container when the caller does not pick one.
    fn root(&self) -> ElementId;

    fn create_element(&mut self) -> ElementId;

    fn append_child(&mut self, parent: ElementId, child: ElementId);

    fn set_style(&mut self, element: ElementId, declaration: Declaration);

    fn bounding_rect(&self, element: ElementId) -> Rect;
}
