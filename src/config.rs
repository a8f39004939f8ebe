use std::path::Path;

use unicode_width::UnicodeWidthChar;

use crate::error::ConfigError;
use crate::game::{Cell, Player};

/// Which front end the binary starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    Console,
    Tui,
}

/// Glyphs drawn for each kind of cell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player_one: char,
    pub player_two: char,
    pub empty: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            player_one: 'X',
            player_two: 'O',
            empty: ' ',
        }
    }
}

impl DisplayConfig {
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::PlayerOne => self.player_one,
            Cell::PlayerTwo => self.player_two,
        }
    }

    pub fn player_glyph(&self, player: Player) -> char {
        self.glyph(player.to_cell())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: Player::One,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub frontend: Frontend,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            frontend: Frontend::Console,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values. Glyphs must be exactly one terminal
    /// column wide; board cells are drawn at a fixed width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        for (name, glyph) in [
            ("player_one", d.player_one),
            ("player_two", d.player_two),
            ("empty", d.empty),
        ] {
            if glyph.is_control() {
                return Err(ConfigError::Validation(format!(
                    "display.{name} must be a printable character"
                )));
            }
            if glyph.width() != Some(1) {
                return Err(ConfigError::Validation(format!(
                    "display.{name} must be a single-width character"
                )));
            }
        }
        if d.player_one == d.player_two || d.player_one == d.empty || d.player_two == d.empty {
            return Err(ConfigError::Validation(
                "display glyphs must be distinct".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.display.glyph(Cell::PlayerOne), 'X');
        assert_eq!(config.display.player_glyph(Player::Two), 'O');
        assert_eq!(config.display.glyph(Cell::Empty), ' ');
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[display]
player_one = "R"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.player_one, 'R');
        assert_eq!(config.display.player_two, 'O');
        assert_eq!(config.game.first_player, Player::One);
        assert_eq!(config.ui.frontend, Frontend::Console);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_enum_values_parse() {
        let toml_str = r#"
[game]
first_player = "two"

[ui]
frontend = "tui"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.first_player, Player::Two);
        assert_eq!(config.ui.frontend, Frontend::Tui);
    }

    #[test]
    fn test_unknown_player_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\nfirst_player = \"three\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_glyphs() {
        let mut config = AppConfig::default();
        config.display.player_two = 'X';
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.display.empty = 'O';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_control_glyph() {
        let mut config = AppConfig::default();
        config.display.empty = '\t';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_wide_glyphs() {
        for glyph in ['🔴', '王', '\u{301}'] {
            let mut config = AppConfig::default();
            config.display.player_one = glyph;
            let err = config.validate().unwrap_err();
            assert_eq!(
                err.to_string(),
                "config validation error: display.player_one must be a single-width character"
            );
        }

        let mut config = AppConfig::default();
        config.display.player_two = '●';
        config.display.empty = '·';
        config.validate().expect("narrow symbols are accepted");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
empty = "."
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.display.empty, '.');
        // Others are defaults
        assert_eq!(config.display.player_one, 'X');
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display]\nplayer_one = \"O\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[display\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
