use domline::settings::Settings;
use domline::{LineArgs, LineManager, Rect, RetainedSurface};

mod actions;
mod render;
mod update;

#[derive(Clone, Debug)]
struct NewLineForm {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: String,
    movable: bool,
    show_vertices: bool,
}

impl Default for NewLineForm {
    fn default() -> Self {
        Self {
            x1: 80.0,
            y1: 400.0,
            x2: 260.0,
            y2: 440.0,
            color: "#000".to_string(),
            movable: true,
            show_vertices: true,
        }
    }
}

impl NewLineForm {
    fn to_args(&self) -> LineArgs {
        LineArgs::position(self.x1, self.y1, self.x2, self.y2)
            .with_color(self.color.clone())
            .with_movable(self.movable)
            .with_show_vertices(self.show_vertices)
    }
}

pub struct LineApp {
    manager: LineManager<RetainedSurface>,
    settings: Settings,
    form: NewLineForm,
    status: Option<String>,
}

impl LineApp {
    pub fn new(settings: Settings) -> Self {
        let surface = RetainedSurface::new(Rect::new(
            0.0,
            0.0,
            settings.container_width,
            settings.container_height,
        ));
        let mut manager = LineManager::new(surface);
        manager.line_container_div = settings.line_container_div;
        for line in &settings.lines {
            manager.add_line(line.clone());
        }
        log::info!("{} lines loaded", manager.lines().len());
        Self {
            manager,
            settings,
            form: NewLineForm::default(),
            status: None,
        }
    }
}
