//! User configuration read from `~/.config/jucegen/config.toml`.
//!
//! The file is optional. Loading never aborts the run: a missing file, an
//! unreadable file, or a TOML syntax error all fall back to built-in defaults
//! with a warning. Path-valued fields are the exception — an invalid path in
//! the config is fatal, because it would end up inside generated build files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::codes;
use crate::error::Result;
use crate::paths;

pub const DEFAULT_MANUFACTURER_NAME: &str = "My Company";
pub const DEFAULT_MANUFACTURER_CODE: &str = "Myco";
pub const DEFAULT_PLUGIN_CODE: &str = "Mypl";
pub const DEFAULT_VST3_FOLDER: &str = "C:/Users/YourName/VST3";

/// Platform the generator is running on. Decides which JUCE directory field
/// applies and which CMake preset the generated project defaults to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Linux,
        }
    }

    /// Build directory and CMake preset name for generated editor settings.
    pub fn build_config(self) -> (&'static str, &'static str) {
        match self {
            Platform::MacOs => ("build-macos", "default-macos"),
            Platform::Windows => ("build-windows", "default-windows"),
            Platform::Linux => ("build", "default"),
        }
    }
}

/// Raw contents of the config file. Every field is optional; missing fields
/// take defaults, which is expected rather than an error.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub juce_dir_macos: Option<String>,
    pub juce_dir_windows: Option<String>,
    pub juce_dir_linux: Option<String>,
    pub default_manufacturer_name: Option<String>,
    pub default_manufacturer_code: Option<String>,
    pub default_plugin_code: Option<String>,
    pub default_project_destination: Option<String>,
    pub custom_vst3_folder_windows: Option<String>,
}

/// Validated configuration. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// JUCE checkout for the current platform, forward-slash form. `None`
    /// means the generated project relies on the JUCE_DIR environment variable
    /// at configure time.
    pub juce_dir: Option<String>,
    /// Non-privileged VST3 copy destination for Windows development builds.
    pub custom_vst3_folder: String,
    pub default_destination: String,
    pub default_manufacturer_name: String,
    pub default_manufacturer_code: String,
    pub default_plugin_code: String,
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .expect("Could not determine config directory")
        .join("jucegen")
        .join("config.toml")
}

/// Read and parse the config file. Any failure warns and returns defaults.
pub fn load_file(path: &Path) -> ConfigFile {
    if !path.exists() {
        return ConfigFile::default();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Warning: could not read {}: {}", path.display(), e);
            eprintln!("Warning: using default values.");
            return ConfigFile::default();
        }
    };
    match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not parse {}: {}", path.display(), e);
            eprintln!("Warning: using default values.");
            ConfigFile::default()
        }
    }
}

impl Config {
    /// Load the config from `path_override` or the default location, applying
    /// the current platform and the JUCE_DIR environment variable.
    pub fn load(path_override: Option<&Path>) -> Result<Self> {
        let path = path_override.map(Path::to_path_buf).unwrap_or_else(config_path);
        let file = load_file(&path);
        let juce_dir_env = std::env::var("JUCE_DIR").ok();
        Self::from_file(&file, Platform::current(), juce_dir_env.as_deref())
    }

    /// Validate raw file contents into a usable config.
    ///
    /// Field validation is independent: a bad manufacturer code does not
    /// affect the path fields. Bad identifier codes warn and fall back to
    /// defaults; bad paths abort.
    pub fn from_file(
        file: &ConfigFile,
        platform: Platform,
        juce_dir_env: Option<&str>,
    ) -> Result<Self> {
        let default_destination = match &file.default_project_destination {
            Some(dest) if !dest.is_empty() && !dest.eq_ignore_ascii_case("default") => {
                paths::validate(dest, "default_project_destination")?;
                dest.clone()
            }
            // "default" (or unset) means the user's Desktop.
            _ => desktop_destination(),
        };

        let custom_vst3_folder = match &file.custom_vst3_folder_windows {
            Some(folder) if !folder.is_empty() => {
                paths::validate(folder, "custom_vst3_folder_windows")?;
                paths::to_posix(folder)
            }
            _ => DEFAULT_VST3_FOLDER.to_string(),
        };

        let juce_dir = Self::resolve_juce_dir(file, platform, juce_dir_env)?;

        let default_manufacturer_name = match &file.default_manufacturer_name {
            Some(name) if !name.is_empty() => {
                if codes::is_safe_display_text(name) {
                    name.clone()
                } else {
                    eprintln!(
                        "Warning: default_manufacturer_name may not contain '\"' or '\\'. \
                         Using '{}'.",
                        DEFAULT_MANUFACTURER_NAME
                    );
                    DEFAULT_MANUFACTURER_NAME.to_string()
                }
            }
            _ => DEFAULT_MANUFACTURER_NAME.to_string(),
        };

        let default_manufacturer_code = match &file.default_manufacturer_code {
            Some(code) if !code.is_empty() => {
                if codes::is_valid_manufacturer_code(code) {
                    code.clone()
                } else {
                    eprintln!(
                        "Warning: default_manufacturer_code must be exactly 4 alphabetic \
                         characters. Using '{}'.",
                        DEFAULT_MANUFACTURER_CODE
                    );
                    DEFAULT_MANUFACTURER_CODE.to_string()
                }
            }
            _ => DEFAULT_MANUFACTURER_CODE.to_string(),
        };

        let default_plugin_code = match &file.default_plugin_code {
            Some(code) if !code.is_empty() => {
                if codes::is_valid_plugin_code(code) {
                    code.clone()
                } else {
                    eprintln!(
                        "Warning: default_plugin_code must be exactly 4 alphanumeric \
                         characters. Using '{}'.",
                        DEFAULT_PLUGIN_CODE
                    );
                    DEFAULT_PLUGIN_CODE.to_string()
                }
            }
            _ => DEFAULT_PLUGIN_CODE.to_string(),
        };

        Ok(Config {
            juce_dir,
            custom_vst3_folder,
            default_destination,
            default_manufacturer_name,
            default_manufacturer_code,
            default_plugin_code,
        })
    }

    /// JUCE directory precedence: JUCE_DIR environment variable, then the
    /// per-platform config field, then none.
    fn resolve_juce_dir(
        file: &ConfigFile,
        platform: Platform,
        juce_dir_env: Option<&str>,
    ) -> Result<Option<String>> {
        let configured = match platform {
            Platform::MacOs => &file.juce_dir_macos,
            Platform::Windows => &file.juce_dir_windows,
            Platform::Linux => &file.juce_dir_linux,
        };

        let chosen = match juce_dir_env.filter(|v| !v.is_empty()) {
            Some(env) => Some(env.to_string()),
            None => configured.clone().filter(|v| !v.is_empty()),
        };

        let Some(dir) = chosen else {
            return Ok(None);
        };

        paths::validate(&dir, "juce_dir")?;
        let dir = paths::to_posix(&dir);
        if !Path::new(&dir).exists() {
            eprintln!(
                "Warning: JUCE directory '{}' does not exist. Generation will continue, \
                 but the CMake configure step may fail.",
                dir
            );
        }
        Ok(Some(dir))
    }
}

fn desktop_destination() -> String {
    let desktop = dirs::home_dir()
        .map(|home| home.join("Desktop"))
        .unwrap_or_else(|| PathBuf::from("."));
    paths::to_posix(&desktop.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_config_path_ends_correctly() {
        let path = config_path();
        assert!(path.ends_with("jucegen/config.toml"));
    }

    #[test]
    fn test_load_file_missing_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = load_file(&dir.path().join("nope.toml"));
        assert!(file.default_manufacturer_code.is_none());
        assert!(file.juce_dir_macos.is_none());
    }

    #[test]
    fn test_load_file_syntax_error_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_manufacturer_code = [not toml").unwrap();

        let file = load_file(&path);
        assert!(file.default_manufacturer_code.is_none());
    }

    #[test]
    fn test_parse_partial_file() {
        let file: ConfigFile = toml::from_str(r#"default_plugin_code = "Fx01""#).unwrap();
        assert_eq!(file.default_plugin_code.as_deref(), Some("Fx01"));
        assert!(file.default_manufacturer_code.is_none());
    }

    #[test]
    fn test_from_file_all_defaults() {
        let config = Config::from_file(&ConfigFile::default(), Platform::Linux, None).unwrap();
        assert_eq!(config.default_manufacturer_name, DEFAULT_MANUFACTURER_NAME);
        assert_eq!(config.default_manufacturer_code, DEFAULT_MANUFACTURER_CODE);
        assert_eq!(config.default_plugin_code, DEFAULT_PLUGIN_CODE);
        assert_eq!(config.custom_vst3_folder, DEFAULT_VST3_FOLDER);
        assert!(config.juce_dir.is_none());
    }

    #[test]
    fn test_invalid_manufacturer_code_falls_back() {
        let file = ConfigFile {
            default_manufacturer_code: Some("toolong".to_string()),
            ..Default::default()
        };
        let config = Config::from_file(&file, Platform::Linux, None).unwrap();
        assert_eq!(config.default_manufacturer_code, DEFAULT_MANUFACTURER_CODE);
    }

    #[test]
    fn test_invalid_plugin_code_falls_back() {
        let file = ConfigFile {
            default_plugin_code: Some("no".to_string()),
            ..Default::default()
        };
        let config = Config::from_file(&file, Platform::Linux, None).unwrap();
        assert_eq!(config.default_plugin_code, DEFAULT_PLUGIN_CODE);
    }

    #[test]
    fn test_quoted_manufacturer_name_falls_back() {
        let file = ConfigFile {
            default_manufacturer_name: Some("Acme \"Audio\"".to_string()),
            ..Default::default()
        };
        let config = Config::from_file(&file, Platform::Linux, None).unwrap();
        assert_eq!(config.default_manufacturer_name, DEFAULT_MANUFACTURER_NAME);
    }

    #[test]
    fn test_bad_code_does_not_affect_paths() {
        let file = ConfigFile {
            default_manufacturer_code: Some("bad!".to_string()),
            custom_vst3_folder_windows: Some("D:\\Plugins\\VST3".to_string()),
            ..Default::default()
        };
        let config = Config::from_file(&file, Platform::Windows, None).unwrap();
        assert_eq!(config.default_manufacturer_code, DEFAULT_MANUFACTURER_CODE);
        assert_eq!(config.custom_vst3_folder, "D:/Plugins/VST3");
    }

    #[test]
    fn test_accented_destination_is_fatal() {
        let file = ConfigFile {
            default_project_destination: Some("C:/Users/John/Téléchargements".to_string()),
            ..Default::default()
        };
        let err = Config::from_file(&file, Platform::Windows, None).unwrap_err();
        assert!(err.to_string().contains("default_project_destination"));
    }

    #[test]
    fn test_destination_keyword_default_uses_desktop() {
        let file = ConfigFile {
            default_project_destination: Some("Default".to_string()),
            ..Default::default()
        };
        let config = Config::from_file(&file, Platform::Linux, None).unwrap();
        assert!(config.default_destination.ends_with("Desktop"));
    }

    #[test]
    fn test_juce_dir_per_platform_selection() {
        let file = ConfigFile {
            juce_dir_macos: Some("/Applications/JUCE".to_string()),
            juce_dir_windows: Some("C:\\JUCE".to_string()),
            ..Default::default()
        };

        let mac = Config::from_file(&file, Platform::MacOs, None).unwrap();
        assert_eq!(mac.juce_dir.as_deref(), Some("/Applications/JUCE"));

        let win = Config::from_file(&file, Platform::Windows, None).unwrap();
        assert_eq!(win.juce_dir.as_deref(), Some("C:/JUCE"));

        let linux = Config::from_file(&file, Platform::Linux, None).unwrap();
        assert!(linux.juce_dir.is_none());
    }

    #[test]
    fn test_juce_dir_env_overrides_config() {
        let file = ConfigFile {
            juce_dir_linux: Some("/opt/JUCE".to_string()),
            ..Default::default()
        };
        let config = Config::from_file(&file, Platform::Linux, Some("/usr/local/JUCE")).unwrap();
        assert_eq!(config.juce_dir.as_deref(), Some("/usr/local/JUCE"));
    }

    #[test]
    fn test_juce_dir_empty_env_ignored() {
        let file = ConfigFile {
            juce_dir_linux: Some("/opt/JUCE".to_string()),
            ..Default::default()
        };
        let config = Config::from_file(&file, Platform::Linux, Some("")).unwrap();
        assert_eq!(config.juce_dir.as_deref(), Some("/opt/JUCE"));
    }

    #[test]
    fn test_accented_juce_dir_is_fatal_even_from_env() {
        let err =
            Config::from_file(&ConfigFile::default(), Platform::Linux, Some("/opt/JÜCE"))
                .unwrap_err();
        assert!(err.to_string().contains("juce_dir"));
    }
}
