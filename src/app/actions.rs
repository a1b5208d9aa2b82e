use domline::{LineSettings, html, settings};

use super::LineApp;

impl LineApp {
    pub(super) fn add_line_from_form(&mut self) {
        let id = self.manager.add_line(self.form.to_args());
        self.status = Some(format!("Added line {}", id.0 + 1));
    }

    pub(super) fn export_html_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(&self.settings.html_path)
            .add_filter("HTML", &["html", "htm"])
            .save_file()
        {
            let page = html::to_html_document(self.manager.surface());
            match std::fs::write(&path, page) {
                Ok(()) => {
                    self.settings.html_path = path.display().to_string();
                    self.status = Some(format!("Exported {}", path.display()));
                }
                Err(e) => self.status = Some(format!("Export failed: {e}")),
            }
        }
    }

    pub(super) fn save_settings_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("domline.toml")
            .add_filter("TOML", &["toml"])
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };
        let mut snapshot = self.settings.clone();
        snapshot.line_container_div = self.manager.line_container_div;
        snapshot.lines = self
            .manager
            .lines()
            .iter()
            .map(|line| LineSettings {
                color: Some(line.color().to_string()),
                movable: Some(line.is_movable()),
                show_vertices: Some(line.shows_vertices()),
                ..LineSettings::new(line.start().x, line.start().y, line.end().x, line.end().y)
            })
            .collect();
        match settings::save_settings(&path, &snapshot) {
            Ok(()) => {
                self.settings = snapshot;
                self.status = Some(format!("Saved {}", path.display()));
            }
            Err(e) => self.status = Some(format!("Save failed: {e}")),
        }
    }
}
