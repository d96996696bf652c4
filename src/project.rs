//! The answers record built up during the interactive session, plus the
//! plugin-format and MIDI settings that feed the generated CMake file.

use std::path::{Path, PathBuf};

pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_PROJECT_NAME: &str = "NewPlugin";

/// Plugin packaging formats the generated project can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginFormat {
    Au,
    Vst3,
    Standalone,
}

impl PluginFormat {
    pub const ALL: [PluginFormat; 3] =
        [PluginFormat::Au, PluginFormat::Vst3, PluginFormat::Standalone];

    /// Name as it appears in the CMake FORMATS list.
    pub fn as_str(self) -> &'static str {
        match self {
            PluginFormat::Au => "AU",
            PluginFormat::Vst3 => "VST3",
            PluginFormat::Standalone => "Standalone",
        }
    }

    /// Whether the format is pre-selected in the prompt.
    pub fn selected_by_default(self) -> bool {
        self == PluginFormat::Standalone
    }
}

/// Synth/MIDI flags. These determine the AU main type and VST3 categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginSettings {
    pub is_synth: bool,
    pub needs_midi_input: bool,
    pub needs_midi_output: bool,
    pub is_midi_effect: bool,
}

impl PluginSettings {
    pub fn au_main_type(self) -> &'static str {
        if self.is_synth {
            "kAudioUnitType_MusicDevice"
        } else if self.is_midi_effect {
            "kAudioUnitType_MIDIProcessor"
        } else {
            "kAudioUnitType_Effect"
        }
    }

    pub fn vst3_categories(self) -> &'static str {
        if self.is_synth {
            "Instrument|Synth"
        } else if self.is_midi_effect {
            "Fx|MIDI"
        } else {
            "Fx"
        }
    }
}

/// Everything needed to render the template set.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    /// Technical name: CMake target, class prefix, directory name.
    pub name: String,
    /// Human-facing name, may contain spaces.
    pub display_name: String,
    pub version: String,
    pub manufacturer_name: String,
    pub manufacturer_code: String,
    pub plugin_code: String,
    pub settings: PluginSettings,
    pub formats: Vec<PluginFormat>,
    /// Validated destination directory the project folder goes under.
    pub destination: String,
    pub bundle_id: String,
}

impl ProjectInfo {
    pub fn project_dir(&self) -> PathBuf {
        Path::new(&self.destination).join(&self.name)
    }

    /// Space-separated format list for the CMake FORMATS argument.
    pub fn formats_string(&self) -> String {
        self.formats
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// CMake boolean spelling.
pub fn cmake_bool(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(is_synth: bool, is_midi_effect: bool) -> PluginSettings {
        PluginSettings {
            is_synth,
            is_midi_effect,
            ..Default::default()
        }
    }

    #[test]
    fn test_synth_category_mapping() {
        let s = settings(true, false);
        assert_eq!(s.au_main_type(), "kAudioUnitType_MusicDevice");
        assert_eq!(s.vst3_categories(), "Instrument|Synth");
    }

    #[test]
    fn test_midi_effect_category_mapping() {
        let s = settings(false, true);
        assert_eq!(s.au_main_type(), "kAudioUnitType_MIDIProcessor");
        assert_eq!(s.vst3_categories(), "Fx|MIDI");
    }

    #[test]
    fn test_plain_effect_category_mapping() {
        let s = settings(false, false);
        assert_eq!(s.au_main_type(), "kAudioUnitType_Effect");
        assert_eq!(s.vst3_categories(), "Fx");
    }

    #[test]
    fn test_synth_wins_over_midi_effect() {
        let s = settings(true, true);
        assert_eq!(s.au_main_type(), "kAudioUnitType_MusicDevice");
    }

    #[test]
    fn test_formats_string() {
        let info = ProjectInfo {
            name: "Test".to_string(),
            display_name: "Test".to_string(),
            version: DEFAULT_VERSION.to_string(),
            manufacturer_name: "My Company".to_string(),
            manufacturer_code: "Myco".to_string(),
            plugin_code: "Mypl".to_string(),
            settings: PluginSettings::default(),
            formats: vec![PluginFormat::Au, PluginFormat::Vst3, PluginFormat::Standalone],
            destination: "/tmp".to_string(),
            bundle_id: "com.MyCompany.Test".to_string(),
        };
        assert_eq!(info.formats_string(), "AU VST3 Standalone");
        assert_eq!(info.project_dir(), PathBuf::from("/tmp/Test"));
    }
}
