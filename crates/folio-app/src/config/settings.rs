//! Settings parser for .folio/config.toml

use std::path::{Path, PathBuf};

use folio_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const FOLIO_DIR: &str = ".folio";

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

# Device illustration the prototype is overlaid on.
# Omit this table to use the built-in iPhone frame.
# [frame]
# width = 433.0
# height = 882.0
# x = 21.25
# y = 19.25
# screen_width = 389.5
# screen_height = 843.5
# radius = { rx = 55.75, ry = 55.75 }

[transition]
# "wait" fades the old screen out before the new one enters, "sync" overlaps them
mode = "wait"
duration_ms = 200

[registry]
# "fail_fast" or "placeholder"; leave unset to fail fast in debug builds only
# missing_screen = "placeholder"
"#;

/// Path of the config file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(FOLIO_DIR).join(CONFIG_FILENAME)
}

/// Read and parse `.folio/config.toml`
///
/// Unlike [`load_settings`] this fails when the file is missing or malformed.
/// A `[frame]` override is returned as written; callers validate it when they
/// lay out the overlay.
pub fn read_settings(project_path: &Path) -> Result<Settings> {
    let path = config_path(project_path);
    if !path.exists() {
        return Err(Error::ConfigNotFound { path });
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let settings = parse_settings(&content)?;

    if let Some(frame) = settings.frame {
        if let Err(e) = frame.validate() {
            warn!("[frame] in {:?} is invalid: {}", path, e);
        }
    }

    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Parse the contents of a config file
pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str::<Settings>(content)?)
}

/// Load settings from `.folio/config.toml`, falling back to defaults
///
/// A missing or unparsable file yields [`Settings::default`].
pub fn load_settings(project_path: &Path) -> Settings {
    match read_settings(project_path) {
        Ok(settings) => settings,
        Err(Error::ConfigNotFound { path }) => {
            debug!("No config file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            warn!("Using default settings: {}", e);
            Settings::default()
        }
    }
}

/// Write settings to `.folio/config.toml`, creating the directory if needed
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<()> {
    let path = config_path(project_path);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {e}")))?;
    std::fs::write(&path, content)?;

    debug!("Saved settings to {:?}", path);
    Ok(())
}

/// Create `.folio/config.toml` with commented defaults.
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let dir = project_path.join(FOLIO_DIR);
    std::fs::create_dir_all(&dir)
        .map_err(|e| Error::config(format!("Failed to create .folio dir: {e}")))?;

    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        std::fs::write(&path, DEFAULT_CONFIG).context("Failed to write default config")?;
        info!("Created default config at {:?}", path);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TransitionMode;
    use crate::registry::MissingScreenPolicy;
    use folio_core::IPHONE_FRAME;
    use tempfile::tempdir;

    fn write_config(root: &Path, content: &str) {
        let dir = root.join(".folio");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), content).unwrap();
    }

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.frame(), IPHONE_FRAME);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        write_config(
            temp.path(),
            r#"
[frame]
width = 400.0
height = 800.0
x = 20.0
y = 20.0
screen_width = 360.0
screen_height = 760.0
radius = { rx = 40.0, ry = 40.0 }

[transition]
mode = "sync"
duration_ms = 120

[registry]
missing_screen = "placeholder"
"#,
        );

        let settings = load_settings(temp.path());

        assert_eq!(settings.frame().width, 400.0);
        assert_eq!(settings.transition.mode, TransitionMode::Sync);
        assert_eq!(settings.transition.duration_ms, 120);
        assert_eq!(
            settings.missing_screen_policy(),
            MissingScreenPolicy::Placeholder
        );
    }

    #[test]
    fn test_load_settings_partial_transition_keeps_defaults() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "[transition]\nmode = \"sync\"\n");

        let settings = load_settings(temp.path());

        assert_eq!(settings.transition.mode, TransitionMode::Sync);
        assert_eq!(settings.transition.duration_ms, 200);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "this is not [valid toml");

        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_keeps_invalid_frame_for_validation() {
        let temp = tempdir().unwrap();
        write_config(
            temp.path(),
            r#"
[frame]
width = 100.0
height = 100.0
x = 10.0
y = 10.0
screen_width = 200.0
screen_height = 50.0
radius = { rx = 5.0, ry = 5.0 }

[transition]
duration_ms = 90
"#,
        );

        let settings = load_settings(temp.path());

        assert_eq!(settings.frame().width, 100.0);
        let err = settings.frame().validate().unwrap_err();
        assert!(matches!(err, Error::InvalidFrameGeometry { .. }));
        assert_eq!(settings.transition.duration_ms, 90);
    }

    #[test]
    fn test_read_settings_missing_file() {
        let temp = tempdir().unwrap();

        let err = read_settings(temp.path()).unwrap_err();

        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_read_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "[transition\nmode = 1");

        let err = read_settings(temp.path()).unwrap_err();

        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn test_parse_settings_rejects_unknown_mode() {
        let err = parse_settings("[transition]\nmode = \"slow\"\n").unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn test_init_config_dir_writes_loadable_defaults() {
        let temp = tempdir().unwrap();

        let path = init_config_dir(temp.path()).unwrap();

        assert!(path.exists());
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "[transition]\nduration_ms = 999\n");

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).transition.duration_ms, 999);
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.transition.mode = TransitionMode::Sync;
        settings.frame = Some(IPHONE_FRAME);

        save_settings(temp.path(), &settings).unwrap();

        assert_eq!(load_settings(temp.path()), settings);
    }
}
