use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_COLOR: &str = "#000";

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses the CSS color forms lines are usually given in: hex
    /// (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()` and a
    /// handful of named colors.
    pub fn parse_css(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            if parts.len() != 3 && parts.len() != 4 {
                return None;
            }
            let channel = |p: &str| p.parse::<f64>().ok().map(|v| v.clamp(0.0, 255.0) as u8);
            let a = match parts.get(3) {
                Some(p) => (p.parse::<f64>().ok()?.clamp(0.0, 1.0) * 255.0).round() as u8,
                None => 255,
            };
            return Some(Self {
                r: channel(parts[0])?,
                g: channel(parts[1])?,
                b: channel(parts[2])?,
                a,
            });
        }
        let named = match lower.as_str() {
            "black" => Self::opaque(0, 0, 0),
            "white" => Self::opaque(255, 255, 255),
            "red" => Self::opaque(255, 0, 0),
            "green" => Self::opaque(0, 128, 0),
            "lime" => Self::opaque(0, 255, 0),
            "blue" => Self::opaque(0, 0, 255),
            "yellow" => Self::opaque(255, 255, 0),
            "orange" => Self::opaque(255, 165, 0),
            "purple" => Self::opaque(128, 0, 128),
            "gray" | "grey" => Self::opaque(128, 128, 128),
            "transparent" => Self { r: 0, g: 0, b: 0, a: 0 },
            _ => return None,
        };
        Some(named)
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Rgba::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Rgba {
            r: nibble(0)?,
            g: nibble(1)?,
            b: nibble(2)?,
            a: nibble(3)?,
        }),
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: byte(6)?,
        }),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LineSettings {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movable: Option<bool>,
    #[serde(default, alias = "showVertices", skip_serializing_if = "Option::is_none")]
    pub show_vertices: Option<bool>,
}

impl LineSettings {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LineArgs {
    ByRecord(LineSettings),
    ByPosition {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Option<String>,
        movable: Option<bool>,
        show_vertices: Option<bool>,
    },
}

impl LineArgs {
    pub fn position(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::ByPosition {
            x1,
            y1,
            x2,
            y2,
            color: None,
            movable: None,
            show_vertices: None,
        }
    }

    pub fn with_color(self, value: impl Into<String>) -> Self {
        self.map_options(|color, _, _| *color = Some(value.into()))
    }

    pub fn with_movable(self, value: bool) -> Self {
        self.map_options(|_, movable, _| *movable = Some(value))
    }

    pub fn with_show_vertices(self, value: bool) -> Self {
        self.map_options(|_, _, show| *show = Some(value))
    }

    fn map_options(
        mut self,
        f: impl FnOnce(&mut Option<String>, &mut Option<bool>, &mut Option<bool>),
    ) -> Self {
        match &mut self {
            Self::ByRecord(s) => f(&mut s.color, &mut s.movable, &mut s.show_vertices),
            Self::ByPosition {
                color,
                movable,
                show_vertices,
                ..
            } => f(color, movable, show_vertices),
        }
        self
    }
}

impl From<LineSettings> for LineArgs {
    fn from(settings: LineSettings) -> Self {
        Self::ByRecord(settings)
    }
}

impl From<(f64, f64, f64, f64)> for LineArgs {
    fn from((x1, y1, x2, y2): (f64, f64, f64, f64)) -> Self {
        Self::position(x1, y1, x2, y2)
    }
}

/// One loosely typed argument, for hosts that forward a variable-length
/// argument list instead of building a [`LineArgs`] directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Record(LineSettings),
    Number(f64),
    Color(String),
    Flag(bool),
}

impl TryFrom<Vec<Arg>> for LineArgs {
    type Error = Error;

    fn try_from(args: Vec<Arg>) -> Result<Self> {
        let arity = args.len();
        if arity == 1 {
            return match args.into_iter().next() {
                Some(Arg::Record(settings)) => Ok(Self::ByRecord(settings)),
                _ => Err(Error::InvalidArgument {
                    index: 0,
                    expected: "a line record",
                }),
            };
        }
        if !(4..=7).contains(&arity) {
            return Err(Error::InvalidArity(arity));
        }

        let mut coords = [0.0; 4];
        let mut color = None;
        let mut movable = None;
        let mut show_vertices = None;
        for (index, arg) in args.into_iter().enumerate() {
            match (index, arg) {
                (0..=3, Arg::Number(v)) => coords[index] = v,
                (0..=3, _) => {
                    return Err(Error::InvalidArgument {
                        index,
                        expected: "a number",
                    });
                }
                (4, Arg::Color(c)) => color = Some(c),
                (4, _) => {
                    return Err(Error::InvalidArgument {
                        index,
                        expected: "a color",
                    });
                }
                (5, Arg::Flag(b)) => movable = Some(b),
                (6, Arg::Flag(b)) => show_vertices = Some(b),
                _ => {
                    return Err(Error::InvalidArgument {
                        index,
                        expected: "a boolean",
                    });
                }
            }
        }
        let [x1, y1, x2, y2] = coords;
        Ok(Self::ByPosition {
            x1,
            y1,
            x2,
            y2,
            color,
            movable,
            show_vertices,
        })
    }
}
