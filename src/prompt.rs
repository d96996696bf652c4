//! Console prompting, generic over reader and writer so tests can drive the
//! whole interactive flow with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{GeneratorError, Result};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one trimmed response line.
    /// End of input is an error so piped sessions cannot loop forever.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GeneratorError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Free-text prompt where an empty response takes the default.
    pub fn ask_with_default(&mut self, label: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("  {} [{}]: ", label, default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// The writer, so tests elsewhere in the crate can inspect transcripts.
    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Yes/no prompt. Requires an explicit y/yes or n/no; anything else,
    /// including an empty line, re-prompts. `default` only affects the hint.
    pub fn confirm(&mut self, label: &str, default: bool) -> Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            let answer = self.ask(&format!("{} [{}]: ", label, hint))?;
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Invalid response. Please enter 'y' or 'n'")?,
            }
        }
    }
}
