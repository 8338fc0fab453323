//! Settings loading: file layer plus environment overrides.

use std::path::Path;

use crate::errors::SettingsError;
use crate::types::Settings;

/// File consulted when no explicit path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "hark.json";

/// Load settings.
///
/// With an explicit `path`, the file must exist and parse. Without one,
/// `hark.json` in the working directory is used if present, otherwise
/// compiled defaults. Environment overrides are applied last and the
/// result is validated.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let mut settings = match path {
        Some(p) => read_settings_file(p)?,
        None => {
            let default = Path::new(DEFAULT_SETTINGS_FILE);
            if default.exists() {
                read_settings_file(default)?
            } else {
                Settings::default()
            }
        }
    };

    apply_overrides(&mut settings, |name| std::env::var(name).ok());
    settings.validate();
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "settings file loaded");
    Ok(settings)
}

/// Apply environment overrides from `get`.
///
/// `PORT` is the historical public knob; the rest follow the `HARK_*`
/// convention. Unparseable values are ignored with a warning rather than
/// failing startup.
pub(crate) fn apply_overrides<F>(settings: &mut Settings, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = get("PORT") {
        match port.parse::<u16>() {
            Ok(p) => settings.server.port = p,
            Err(_) => tracing::warn!(value = %port, "ignoring unparseable PORT"),
        }
    }
    if let Some(bind) = get("HARK_BIND") {
        settings.server.bind = bind;
    }
    if let Some(dir) = get("HARK_MODEL_DIR") {
        settings.model.dir = dir.into();
    }
    if let Some(path) = get("HARK_FFMPEG_PATH") {
        settings.transcode.ffmpeg_path = path;
    }
    if let Some(dir) = get("HARK_UPLOADS_DIR") {
        settings.transcode.uploads_dir = dir.into();
    }
    if let Some(directive) = get("HARK_LOG") {
        settings.logging.directive = directive;
    }
}
