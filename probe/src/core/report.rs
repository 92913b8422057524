//! Console report produced by a probe run

use std::fmt;

/// Status glyph prefixed to a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Success,
    Failure,
    Credential,
}

impl Glyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Success => "✅",
            Glyph::Failure => "❌",
            Glyph::Credential => "🔑",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub glyph: Option<Glyph>,
    pub text: String,
}

/// Ordered human-readable output plus the overall outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
    succeeded: bool,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            succeeded: true,
        }
    }

    /// Plain line without a glyph
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(None, text)
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(None, "")
    }

    pub fn success(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Some(Glyph::Success), text)
    }

    pub fn credential(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Some(Glyph::Credential), text)
    }

    /// Failure line; marks the whole report as failed
    pub fn failure(&mut self, text: impl Into<String>) -> &mut Self {
        self.succeeded = false;
        self.push(Some(Glyph::Failure), text)
    }

    fn push(&mut self, glyph: Option<Glyph>, text: impl Into<String>) -> &mut Self {
        self.lines.push(ReportLine {
            glyph,
            text: text.into(),
        });
        self
    }

    pub fn is_success(&self) -> bool {
        self.succeeded
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Render as the text printed to the console
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.glyph {
            Some(glyph) => write!(f, "{} {}", glyph.as_str(), self.text),
            None => f.write_str(&self.text),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
