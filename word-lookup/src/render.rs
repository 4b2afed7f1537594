use std::io::{self, Write};

use colored::{Color, Colorize};
use dictionary::{Directive, MeaningSection};

use crate::config::Theme;

/// Terminal render surface for lookup directives.
pub struct Renderer<W: Write> {
    out: W,
    theme: Theme,
    expand: bool,
    expand_hint: &'static str,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, theme: Theme, expand: bool) -> Self {
        Self {
            out,
            theme,
            expand,
            expand_hint: ":more",
        }
    }

    /// How the user opens a collapsed expander on this surface.
    pub fn with_expand_hint(mut self, hint: &'static str) -> Self {
        self.expand_hint = hint;
        self
    }

    pub fn render_title(&mut self) -> io::Result<()> {
        let title = self.paint(&self.theme.title, self.theme.accent, true);
        let tagline = self.paint(&self.theme.tagline, self.theme.text, false);
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{tagline}")?;
        writeln!(self.out)
    }

    pub fn render(&mut self, directives: &[Directive]) -> io::Result<()> {
        for directive in directives {
            self.render_directive(directive)?;
        }
        self.out.flush()
    }

    fn render_directive(&mut self, directive: &Directive) -> io::Result<()> {
        let theme = &self.theme;
        let line = match directive {
            Directive::Heading(text) => {
                format!("\n{}", self.paint(&format!("📌 {text}"), theme.accent, true))
            }
            Directive::Pronunciation(text) => {
                let pronunciation = format!("🔊 Pronunciation: `{text}`");
                format!("  {}", self.paint(&pronunciation, theme.info, false))
            }
            Directive::Info(text) => format!("  {}", self.paint(text, theme.info, false)),
            Directive::Success(text) => {
                format!("  {}", self.paint(&format!("💡 {text}"), theme.success, false))
            }
            Directive::Error(text) => self.paint(&format!("❌ {text}"), theme.error, true),
            Directive::Audio { url, format } => {
                let audio = format!("▶ Audio ({format}): {url}");
                format!("  {}", self.paint(&audio, theme.muted, false))
            }
            Directive::Example(text) => format!(
                "  {} {}",
                self.paint("✏️ Example:", theme.text, true),
                self.paint(text, theme.text, false)
            ),
            Directive::Expander { label, sections } => {
                if self.expand {
                    return self.render_sections(label, sections);
                }
                let collapsed = format!("📚 {label} ({})", self.expand_hint);
                format!("\n{}", self.paint(&collapsed, theme.muted, false))
            }
        };
        writeln!(self.out, "{line}")
    }

    /// Opens an expandable region regardless of the `expand` setting.
    pub fn render_sections(&mut self, label: &str, sections: &[MeaningSection]) -> io::Result<()> {
        let header = self.paint(&format!("📚 {label}"), self.theme.accent, true);
        writeln!(self.out, "\n{header}")?;
        for section in sections {
            let part_of_speech =
                self.paint(&format!("➡️ {}", section.part_of_speech), self.theme.accent, true);
            writeln!(self.out, "  {part_of_speech}")?;
            for item in &section.items {
                writeln!(self.out, "    {}. {}", item.index, item.definition)?;
                if let Some(example) = &item.example {
                    let example = self.paint(&format!("✏️ {example}"), self.theme.muted, false);
                    writeln!(self.out, "       {example}")?;
                }
            }
        }
        self.out.flush()
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.theme.color {
            return text.to_owned();
        }
        let styled = text.color(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
