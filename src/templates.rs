//! Embedded template set and placeholder substitution.
//!
//! Templates live under `templates/` and are compiled into the binary, so the
//! generator is a single self-contained executable. Placeholders are
//! `{snake_case}` tokens replaced by plain string substitution; literal braces
//! in CMake, JSON, and C++ content need no escaping because they never form a
//! known token.

use crate::config::{Config, Platform};
use crate::paths;
use crate::project::{cmake_bool, ProjectInfo};

pub struct TemplateFile {
    /// Path of the rendered file inside the generated project.
    pub path: &'static str,
    pub content: &'static str,
}

pub const TEMPLATES: &[TemplateFile] = &[
    TemplateFile {
        path: "CMakeLists.txt",
        content: include_str!("../templates/CMakeLists.txt"),
    },
    TemplateFile {
        path: "CMakeUserPresets.json",
        content: include_str!("../templates/CMakeUserPresets.json"),
    },
    TemplateFile {
        path: "Source/PluginProcessor.h",
        content: include_str!("../templates/Source/PluginProcessor.h"),
    },
    TemplateFile {
        path: "Source/PluginProcessor.cpp",
        content: include_str!("../templates/Source/PluginProcessor.cpp"),
    },
    TemplateFile {
        path: "Source/PluginEditor.h",
        content: include_str!("../templates/Source/PluginEditor.h"),
    },
    TemplateFile {
        path: "Source/PluginEditor.cpp",
        content: include_str!("../templates/Source/PluginEditor.cpp"),
    },
    TemplateFile {
        path: ".vscode/settings.json",
        content: include_str!("../templates/vscode/settings.json"),
    },
    TemplateFile {
        path: ".vscode/tasks.json",
        content: include_str!("../templates/vscode/tasks.json"),
    },
    TemplateFile {
        path: ".vscode/launch.json",
        content: include_str!("../templates/vscode/launch.json"),
    },
    TemplateFile {
        path: ".gitignore",
        content: include_str!("../templates/gitignore"),
    },
    TemplateFile {
        path: "README.md",
        content: include_str!("../templates/README.md"),
    },
];

/// Placeholder values for one generation run. Path values are normalized to
/// forward slashes before they land here; build files get POSIX separators on
/// every platform.
pub struct RenderContext {
    pairs: Vec<(&'static str, String)>,
}

impl RenderContext {
    pub fn new(info: &ProjectInfo, config: &Config, platform: Platform) -> Self {
        let (build_directory, cmake_preset) = platform.build_config();
        let juce_dir = config.juce_dir.clone().unwrap_or_default();

        let pairs = vec![
            ("project_name", info.name.clone()),
            ("project_display_name", info.display_name.clone()),
            ("project_version", info.version.clone()),
            ("manufacturer_name", info.manufacturer_name.clone()),
            ("manufacturer_code", info.manufacturer_code.clone()),
            ("plugin_code", info.plugin_code.clone()),
            ("plugin_formats", info.formats_string()),
            ("is_synth", cmake_bool(info.settings.is_synth).to_string()),
            (
                "needs_midi_input",
                cmake_bool(info.settings.needs_midi_input).to_string(),
            ),
            (
                "needs_midi_output",
                cmake_bool(info.settings.needs_midi_output).to_string(),
            ),
            (
                "is_midi_effect",
                cmake_bool(info.settings.is_midi_effect).to_string(),
            ),
            ("au_main_type", info.settings.au_main_type().to_string()),
            ("vst3_categories", info.settings.vst3_categories().to_string()),
            ("bundle_id", info.bundle_id.clone()),
            ("custom_vst3_folder", paths::to_posix(&config.custom_vst3_folder)),
            ("juce_dir", paths::to_posix(&juce_dir)),
            ("build_directory", build_directory.to_string()),
            ("cmake_preset", cmake_preset.to_string()),
        ];

        RenderContext { pairs }
    }

    pub fn render(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (key, value) in &self.pairs {
            out = out.replace(&format!("{{{}}}", key), value);
        }
        out
    }
}
