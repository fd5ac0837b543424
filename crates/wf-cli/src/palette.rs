//! ANSI colors for console output

// =============================================================================
// Escape sequences
// =============================================================================

pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_PURPLE: &str = "\x1b[35m";
pub const FG_GRAY: &str = "\x1b[90m";
/// Reset all attributes
pub const CLEAR: &str = "\x1b[0m";

/// Applies colors when enabled and passes text through otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Palette that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, color: &str, text: impl std::fmt::Display) -> String {
        if self.enabled {
            format!("{color}{text}{CLEAR}")
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        assert_eq!(Palette::default().paint(FG_RED, "x"), "\x1b[31mx\x1b[0m");
        assert_eq!(Palette::plain().paint(FG_RED, "x"), "x");
    }
}
