use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // no-color.org
        if env::var_os("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|val| val == "1") {
            config.color = ColorMode::Always;
        }

        config
    }

    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Styling hooks for the parts of a check report.
pub trait OutputFormatter {
    /// `==> ...` section titles
    fn section(&self, text: &str) -> String;
    fn function_name(&self, text: &str) -> String;
    /// The header side of a mismatch
    fn expected(&self, text: &str) -> String;
    /// The binding side of a mismatch
    fn found(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
    fn failure(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn section(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn function_name(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn expected(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn found(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green().bold())
    }

    fn failure(&self, text: &str) -> String {
        self.paint(text, |t| t.red().bold())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn section(&self, text: &str) -> String {
        text.to_string()
    }

    fn function_name(&self, text: &str) -> String {
        text.to_string()
    }

    fn expected(&self, text: &str) -> String {
        text.to_string()
    }

    fn found(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn failure(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick the formatter for `config`; a disabled color mode gets the plain one.
pub fn create_formatter(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color == ColorMode::Never {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(config))
    }
}

fn detect_color_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter_leaves_text_untouched() {
        let formatter = PlainFormatter;
        assert_eq!(formatter.section("==> Not bound functions:"), "==> Not bound functions:");
        assert_eq!(formatter.found("*mut c_char"), "*mut c_char");
    }

    #[test]
    fn test_colored_formatter_without_color_is_plain() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(formatter.failure("FAILED"), "FAILED");
    }

    #[test]
    fn test_never_mode_disables_color() {
        assert!(!ColorMode::Never.should_use_color());
        assert!(ColorMode::Always.should_use_color());
    }
}
