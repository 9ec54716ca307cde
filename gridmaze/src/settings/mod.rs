use crossterm::style::Color;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

pub const DEFAULT_WIDTH: usize = 25;
pub const DEFAULT_HEIGHT: usize = 21;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub wall: Color,
    /// Entrance and exit.
    pub ends: Color,
    pub path: Color,
}

impl ColorScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wall(mut self, value: Color) -> Self {
        self.wall = value;
        self
    }

    pub fn ends(mut self, value: Color) -> Self {
        self.ends = value;
        self
    }

    pub fn path(mut self, value: Color) -> Self {
        self.path = value;
        self
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: Color::White,
            ends: Color::Green,
            path: Color::Red,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub plain: Option<bool>,
    #[serde(default)]
    pub show_all_paths: Option<bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_width(mut self, value: usize) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> usize {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    pub fn set_height(mut self, value: usize) -> Self {
        self.height = Some(value);
        self
    }

    pub fn get_height(&self) -> usize {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.clone().unwrap_or_default()
    }

    pub fn set_plain(mut self, value: bool) -> Self {
        self.plain = Some(value);
        self
    }

    pub fn get_plain(&self) -> bool {
        self.plain.unwrap_or_default()
    }

    pub fn set_show_all_paths(mut self, value: bool) -> Self {
        self.show_all_paths = Some(value);
        self
    }

    pub fn get_show_all_paths(&self) -> bool {
        self.show_all_paths.unwrap_or_default()
    }

    pub fn default_path() -> Result<PathBuf, Error> {
        dirs::preference_dir()
            .map(|dir| dir.join("gridmaze").join("settings.ron"))
            .ok_or(Error::NoConfigDir)
    }

    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(source)
    }

    /// Reads settings from `path`, writing the defaults there first if there's no file yet.
    pub fn load(path: &Path) -> Result<Self, Error> {
        match fs::read_to_string(path) {
            Ok(source) => Ok(Self::from_ron(&source)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {:?}, creating default ones", path);
                Self::reset_config(path)?;
                Ok(Self::from_ron(DEFAULT_SETTINGS)?)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_matches_defaults() {
        let settings = Settings::from_ron(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.get_width(), DEFAULT_WIDTH);
        assert_eq!(settings.get_height(), DEFAULT_HEIGHT);
        assert_eq!(settings.get_color_scheme(), ColorScheme::default());
        assert!(!settings.get_plain());
        assert!(!settings.get_show_all_paths());
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::from_ron("(height: 31)").unwrap();
        assert_eq!(settings.get_height(), 31);
        assert_eq!(settings.get_width(), DEFAULT_WIDTH);
        assert_eq!(settings.color_scheme, None);

        assert_eq!(Settings::from_ron("()").unwrap(), Settings::new());
    }

    #[test]
    fn custom_colors() {
        let settings = Settings::from_ron(
            r#"(color_scheme: (wall: "dark_grey", ends: "rgb_(0,255,0)", path: "blue"))"#,
        )
        .unwrap();
        assert_eq!(
            settings.get_color_scheme(),
            ColorScheme::new()
                .wall(Color::DarkGrey)
                .ends(Color::Rgb { r: 0, g: 255, b: 0 })
                .path(Color::Blue)
        );
    }

    #[test]
    fn broken_file_is_an_error() {
        assert!(Settings::from_ron("(width: \"wide\")").is_err());
    }

    #[test]
    fn builder() {
        let settings = Settings::new()
            .set_width(11)
            .set_plain(true)
            .set_show_all_paths(true);
        assert_eq!(settings.get_width(), 11);
        assert!(settings.get_plain());
        assert!(settings.get_show_all_paths());
        assert_eq!(settings.get_height(), DEFAULT_HEIGHT);
    }
}
