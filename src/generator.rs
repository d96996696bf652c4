//! The interactive session: collect answers, show a summary, and write the
//! project tree once everything is validated and confirmed.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::codes;
use crate::config::{Config, Platform};
use crate::error::Result;
use crate::paths;
use crate::project::{
    cmake_bool, PluginFormat, PluginSettings, ProjectInfo, DEFAULT_PROJECT_NAME, DEFAULT_VERSION,
};
use crate::prompt::Prompter;
use crate::templates::{RenderContext, TEMPLATES};

#[derive(Debug)]
pub enum Outcome {
    Created(PathBuf),
    Cancelled,
}

pub struct Generator<'a, R, W> {
    prompt: Prompter<R, W>,
    config: &'a Config,
    platform: Platform,
}

impl<'a, R: BufRead, W: Write> Generator<'a, R, W> {
    pub fn new(prompt: Prompter<R, W>, config: &'a Config, platform: Platform) -> Self {
        Generator {
            prompt,
            config,
            platform,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        self.print_header()?;
        let info = self.collect()?;
        if !self.show_summary(&info)? {
            return Ok(Outcome::Cancelled);
        }

        self.prompt.say("\nCreating project structure...")?;
        let project_dir = write_project(&info, self.config, self.platform)?;
        self.show_success(&project_dir)?;
        Ok(Outcome::Created(project_dir))
    }

    fn print_header(&mut self) -> Result<()> {
        self.prompt.say(&"=".repeat(60))?;
        self.prompt.say("  JUCE Project Generator - CMake + VS Code")?;
        self.prompt.say(&"=".repeat(60))?;
        Ok(())
    }

    fn collect(&mut self) -> Result<ProjectInfo> {
        self.prompt.say("\nProject Information:")?;
        let (name, display_name) = self.input_project_name()?;
        let version = self.prompt.ask_with_default("Project version", DEFAULT_VERSION)?;
        let manufacturer_name = loop {
            let name = self
                .prompt
                .ask_with_default("Manufacturer name", &self.config.default_manufacturer_name)?;
            if codes::is_safe_display_text(&name) {
                break name;
            }
            self.prompt
                .say("Manufacturer name may not contain '\"' or '\\'")?;
        };
        let manufacturer_code = self.input_manufacturer_code()?;
        let plugin_code = self.input_plugin_code()?;
        let settings = self.input_plugin_settings()?;
        let formats = self.select_formats()?;
        let destination = self.input_destination()?;
        let bundle_id = codes::bundle_id(&manufacturer_name, &name);

        Ok(ProjectInfo {
            name,
            display_name,
            version,
            manufacturer_name,
            manufacturer_code,
            plugin_code,
            settings,
            formats,
            destination,
            bundle_id,
        })
    }

    fn input_project_name(&mut self) -> Result<(String, String)> {
        loop {
            let name = self
                .prompt
                .ask_with_default("Technical project name", DEFAULT_PROJECT_NAME)?;
            if !codes::is_valid_project_name(&name) {
                self.prompt.say(
                    "Technical name must start with a letter and contain only letters, \
                     numbers, '_' and '-'",
                )?;
                continue;
            }

            let candidate = Path::new(&self.config.default_destination).join(&name);
            if candidate.exists() {
                self.prompt.say(&format!(
                    "\nWarning: a folder named '{}' already exists at {}",
                    name, self.config.default_destination
                ))?;
                if !self.prompt.confirm("Overwrite existing folder?", false)? {
                    self.prompt.say("Please choose a different technical name.\n")?;
                    continue;
                }
                self.prompt.say("Existing folder will be overwritten.\n")?;
            }

            let display_name = loop {
                let display = self
                    .prompt
                    .ask_with_default("Display name (may contain spaces)", &name)?;
                if codes::is_safe_display_text(&display) {
                    break display;
                }
                self.prompt
                    .say("Display name may not contain '\"' or '\\'")?;
            };
            return Ok((name, display_name));
        }
    }

    fn input_manufacturer_code(&mut self) -> Result<String> {
        loop {
            let code = self.prompt.ask_with_default(
                "Manufacturer code (4 chars)",
                &self.config.default_manufacturer_code,
            )?;
            if codes::is_valid_manufacturer_code(&code) {
                return Ok(code);
            }
            self.prompt.say("Must be exactly 4 alphabetic characters")?;
        }
    }

    fn input_plugin_code(&mut self) -> Result<String> {
        loop {
            let code = self
                .prompt
                .ask_with_default("Plugin code (4 chars)", &self.config.default_plugin_code)?;
            if codes::is_valid_plugin_code(&code) {
                return Ok(code);
            }
            self.prompt.say("Must be exactly 4 alphanumeric characters")?;
        }
    }

    fn input_plugin_settings(&mut self) -> Result<PluginSettings> {
        self.prompt.say("\nPlugin Configuration:")?;
        Ok(PluginSettings {
            is_synth: self.prompt.confirm("  Is this a synthesizer?", false)?,
            needs_midi_input: self.prompt.confirm("  Requires MIDI input?", false)?,
            needs_midi_output: self.prompt.confirm("  Produces MIDI output?", false)?,
            is_midi_effect: self.prompt.confirm("  Is this a MIDI effect?", false)?,
        })
    }

    fn select_formats(&mut self) -> Result<Vec<PluginFormat>> {
        loop {
            self.prompt.say("\nSelect plugin formats:")?;
            let mut selected = Vec::new();
            for format in PluginFormat::ALL {
                let label = format!("  Include {}?", format.as_str());
                if self.prompt.confirm(&label, format.selected_by_default())? {
                    selected.push(format);
                }
            }
            if selected.is_empty() {
                self.prompt.say("At least one format must be selected")?;
                continue;
            }
            return Ok(selected);
        }
    }

    /// Destination entry. Invalid characters here are fatal for the whole run:
    /// the alternative is a generated project in a location the build tooling
    /// cannot handle.
    fn input_destination(&mut self) -> Result<String> {
        self.prompt.say("\nFinalization:")?;
        let destination = self
            .prompt
            .ask_with_default("Destination folder", &self.config.default_destination)?;
        paths::validate(&destination, "destination folder")?;
        Ok(destination)
    }

    fn show_summary(&mut self, info: &ProjectInfo) -> Result<bool> {
        let line = "=".repeat(60);
        self.prompt.say(&format!("\n{}", line))?;
        self.prompt.say("Summary")?;
        self.prompt.say(&line)?;
        self.prompt
            .say(&format!("  Technical Name    : {}", info.name))?;
        self.prompt
            .say(&format!("  Display Name      : {}", info.display_name))?;
        self.prompt
            .say(&format!("  Version           : {}", info.version))?;
        self.prompt
            .say(&format!("  Manufacturer      : {}", info.manufacturer_name))?;
        self.prompt
            .say(&format!("  Manufacturer Code : {}", info.manufacturer_code))?;
        self.prompt
            .say(&format!("  Plugin Code       : {}", info.plugin_code))?;
        self.prompt
            .say(&format!("  Bundle ID         : {}", info.bundle_id))?;
        self.prompt.say(&format!(
            "  Is Synth          : {}",
            cmake_bool(info.settings.is_synth)
        ))?;
        self.prompt.say(&format!(
            "  MIDI Input        : {}",
            cmake_bool(info.settings.needs_midi_input)
        ))?;
        self.prompt.say(&format!(
            "  MIDI Output       : {}",
            cmake_bool(info.settings.needs_midi_output)
        ))?;
        self.prompt.say(&format!(
            "  MIDI Effect       : {}",
            cmake_bool(info.settings.is_midi_effect)
        ))?;
        self.prompt
            .say(&format!("  Formats           : {}", info.formats_string()))?;
        self.prompt.say(&format!(
            "  Destination       : {}",
            info.project_dir().display()
        ))?;
        self.prompt.say(&format!("{}\n", line))?;
        self.prompt.confirm("Create project?", true)
    }

    fn show_success(&mut self, project_dir: &Path) -> Result<()> {
        let (build_dir, preset) = self.platform.build_config();
        let line = "=".repeat(60);
        self.prompt.say(&format!("\n{}", line))?;
        self.prompt.say("Project created successfully!")?;
        self.prompt.say(&line)?;
        self.prompt
            .say(&format!("\nLocation: {}\n", project_dir.display()))?;
        self.prompt.say("Next steps:")?;
        self.prompt.say(&format!(
            "  1. Open the project folder in your editor: {}",
            project_dir.display()
        ))?;
        self.prompt.say(&format!(
            "  2. Configure and build: cmake --preset {} && cmake --build --preset {}",
            preset, preset
        ))?;
        self.prompt
            .say(&format!("     Build directory: {}", build_dir))?;
        self.prompt
            .say("  3. Press F5 to debug the Standalone build")?;
        Ok(())
    }
}

/// Write the full project tree. Runs only after validation and confirmation;
/// an existing project directory is replaced wholesale.
pub fn write_project(
    info: &ProjectInfo,
    config: &Config,
    platform: Platform,
) -> anyhow::Result<PathBuf> {
    let project_dir = info.project_dir();
    if project_dir.exists() {
        fs::remove_dir_all(&project_dir).with_context(|| {
            format!("Failed to remove existing {}", project_dir.display())
        })?;
    }
    fs::create_dir_all(project_dir.join("Source"))
        .with_context(|| format!("Failed to create {}", project_dir.display()))?;
    fs::create_dir_all(project_dir.join(".vscode"))?;

    let ctx = RenderContext::new(info, config, platform);
    for template in TEMPLATES {
        let rendered = ctx.render(template.content);
        let dest = project_dir.join(template.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, rendered)
            .with_context(|| format!("Failed to write {}", template.path))?;
    }

    Ok(project_dir)
}
