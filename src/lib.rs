//! Line segments drawn with nothing but plain box elements.

pub mod error;
pub mod events;
pub mod geometry;
pub mod html;
pub mod line;
pub mod manager;
pub mod model;
pub mod settings;
pub mod style;
pub mod surface;

pub use error::{Error, Result};
pub use events::{PointerEvent, PointerKind};
pub use line::{Line, LineId, Vertex};
pub use manager::LineManager;
pub use model::{Arg, LineArgs, LineSettings, Point, Rect};
pub use surface::{ElementId, RetainedSurface, Surface};
