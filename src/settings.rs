use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::LineSettings;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub container_width: f64,
    pub container_height: f64,
    pub line_container_div: bool,
    pub html_path: String,
    pub lines: Vec<LineSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut fixed = LineSettings::new(60.0, 320.0, 420.0, 320.0);
        fixed.color = Some("#c03030".to_string());
        fixed.movable = Some(false);
        fixed.show_vertices = Some(true);
        let mut hidden = LineSettings::new(60.0, 360.0, 420.0, 360.0);
        hidden.color = Some("gray".to_string());
        hidden.movable = Some(false);
        hidden.show_vertices = Some(false);
        Self {
            container_width: 640.0,
            container_height: 480.0,
            line_container_div: false,
            html_path: "lines.html".to_string(),
            lines: vec![
                LineSettings::new(40.0, 40.0, 240.0, 160.0),
                LineSettings {
                    color: Some("#2860c8".to_string()),
                    ..LineSettings::new(300.0, 60.0, 300.0, 260.0)
                },
                fixed,
                hidden,
            ],
        }
    }
}

/// `$HOME/.config/domline.toml`, then `./domline.toml`, if either exists.
pub fn config_path() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config").join("domline.toml");
        if path.exists() {
            return Some(path);
        }
    }
    let local = PathBuf::from("domline.toml");
    local.exists().then_some(local)
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}

/// Parses settings text, trying the format the extension suggests first and
/// the other one as a fallback.
pub fn parse_settings(text: &str, toml_first: bool) -> Result<Settings> {
    let from_toml = || toml::from_str::<Settings>(text).map_err(|e| e.to_string());
    let from_json = || serde_json::from_str::<Settings>(text).map_err(|e| e.to_string());
    let parsed = if toml_first {
        from_toml().or_else(|_| from_json())
    } else {
        from_json().or_else(|_| from_toml())
    };
    parsed.map_err(Error::Settings)
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Settings(format!("{}: {e}", path.display())))?;
    parse_settings(&text, is_toml(path))
}

pub fn load_or_default() -> Settings {
    let Some(path) = config_path() else {
        log::info!("no settings file found, using defaults");
        return Settings::default();
    };
    match load_settings(&path) {
        Ok(settings) => {
            log::info!("settings loaded from {}", path.display());
            settings
        }
        Err(e) => {
            log::warn!("{e}; using defaults");
            Settings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let text = if is_toml(path) {
        toml::to_string_pretty(settings).map_err(|e| Error::Settings(e.to_string()))?
    } else {
        serde_json::to_string_pretty(settings).map_err(|e| Error::Settings(e.to_string()))?
    };
    std::fs::write(path, text).map_err(|e| Error::Settings(format!("{}: {e}", path.display())))?;
    log::info!("settings saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_with_partial_fields() {
        let text = r##"
container_width = 300.0
line_container_div = true

[[lines]]
x1 = 0.0
y1 = 0.0
x2 = 10.0
y2 = 10.0
color = "#f00"
showVertices = false
"##;
        let s = parse_settings(text, true).unwrap();
        assert_eq!(s.container_width, 300.0);
        assert_eq!(s.container_height, 480.0);
        assert!(s.line_container_div);
        assert_eq!(s.lines.len(), 1);
        assert_eq!(s.lines[0].color.as_deref(), Some("#f00"));
        assert_eq!(s.lines[0].show_vertices, Some(false));
        assert_eq!(s.lines[0].movable, None);
    }

    #[test]
    fn json_is_accepted_as_fallback() {
        let text = r#"{"container_height": 100.0, "lines": []}"#;
        let s = parse_settings(text, true).unwrap();
        assert_eq!(s.container_height, 100.0);
        assert!(s.lines.is_empty());
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(matches!(
            parse_settings("lines = [[[", false),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let defaults = Settings::default();
        let text = toml::to_string_pretty(&defaults).unwrap();
        assert_eq!(parse_settings(&text, true).unwrap(), defaults);
    }

    #[test]
    fn files_round_trip_by_extension() {
        let mut settings = Settings::default();
        settings.container_width = 512.0;
        settings.line_container_div = true;
        settings.lines.truncate(1);

        let dir = std::env::temp_dir();
        let pid = std::process::id();
        for ext in ["toml", "json"] {
            let path = dir.join(format!("domline-settings-{pid}.{ext}"));
            save_settings(&path, &settings).unwrap();
            let text = std::fs::read_to_string(&path).unwrap();
            assert_eq!(text.trim_start().starts_with('{'), ext == "json");
            let loaded = load_settings(&path);
            std::fs::remove_file(&path).unwrap();
            assert_eq!(loaded.unwrap(), settings);
        }
    }

    #[test]
    fn missing_file_is_a_settings_error() {
        let path = std::env::temp_dir().join(format!("domline-missing-{}.toml", std::process::id()));
        assert!(matches!(load_settings(&path), Err(Error::Settings(_))));
    }
}
