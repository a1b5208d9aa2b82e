use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Static,
    Absolute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Position(Position),
    BorderTop { width: f64, color: String },
    Width(f64),
    /// Written as a unitless `0` when zero.
    Height(f64),
    Rotate(f64),
    Left(f64),
    Top(f64),
    BackfaceHidden,
    ZIndex(i32),
    Background(String),
    BorderRadius(f64),
    Cursor(Cursor),
}

impl Declaration {
    pub fn property(&self) -> &'static str {
        match self {
            Self::Position(_) => "position",
            Self::BorderTop { .. } => "border-top",
            Self::Width(_) => "width",
            Self::Height(_) => "height",
            Self::Rotate(_) => "transform",
            Self::Left(_) => "left",
            Self::Top(_) => "top",
            Self::BackfaceHidden => "backface-visibility",
            Self::ZIndex(_) => "z-index",
            Self::Background(_) => "background",
            Self::BorderRadius(_) => "border-radius",
            Self::Cursor(_) => "cursor",
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Position(Position::Static) => "static".to_string(),
            Self::Position(Position::Absolute) => "absolute".to_string(),
            Self::BorderTop { width, color } => format!("{width}px solid {color}"),
            Self::Height(v) if *v == 0.0 => "0".to_string(),
            Self::Width(v) | Self::Height(v) | Self::Left(v) | Self::Top(v) => format!("{v}px"),
            Self::Rotate(rad) => format!("rotate({rad}rad)"),
            Self::BackfaceHidden => "hidden".to_string(),
            Self::ZIndex(z) => z.to_string(),
            Self::Background(c) => c.clone(),
            Self::BorderRadius(pct) => format!("{pct}%"),
            Self::Cursor(Cursor::Default) => "default".to_string(),
            Self::Cursor(Cursor::Pointer) => "pointer".to_string(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{};", self.property(), self.value())
    }
}

/// Ordered inline style of one element. Setting a property that is already
/// present overwrites it in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn set(&mut self, declaration: Declaration) {
        let property = declaration.property();
        match self
            .declarations
            .iter_mut()
            .find(|d| d.property() == property)
        {
            Some(existing) => *existing = declaration,
            None => self.declarations.push(declaration),
        }
    }

    pub fn css_text(&self) -> String {
        self.declarations.iter().map(ToString::to_string).collect()
    }

    pub fn computed(&self) -> ComputedStyle {
        let mut c = ComputedStyle::default();
        for d in &self.declarations {
            match d {
                Declaration::Position(p) => c.position = *p,
                Declaration::BorderTop { width, color } => {
                    c.border_top = Some((*width, color.clone()));
                }
                Declaration::Width(v) => c.width = *v,
                Declaration::Height(v) => c.height = *v,
                Declaration::Rotate(v) => c.rotation = *v,
                Declaration::Left(v) => c.left = *v,
                Declaration::Top(v) => c.top = *v,
                Declaration::BackfaceHidden => {}
                Declaration::ZIndex(z) => c.z_index = *z,
                Declaration::Background(bg) => c.background = Some(bg.clone()),
                Declaration::BorderRadius(r) => c.border_radius = *r,
                Declaration::Cursor(cur) => c.cursor = *cur,
            }
        }
        c
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    pub position: Position,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub z_index: i32,
    pub border_top: Option<(f64, String)>,
    pub background: Option<String>,
    pub border_radius: f64,
    pub cursor: Cursor,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            position: Position::Static,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            z_index: 0,
            border_top: None,
            background: None,
            border_radius: 0.0,
            cursor: Cursor::Default,
        }
    }
}
