use anstyle::{AnsiColor, Color, Style};
use std::fmt;

const GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const BOLD_GREEN: Style = GREEN.bold();
const YELLOW: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const BOLD_RED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold();

#[must_use]
pub(crate) fn app_name(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: BOLD_GREEN, content }
}
#[must_use]
pub(crate) fn as_item(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: GREEN, content }
}
#[must_use]
pub(crate) fn as_title(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: YELLOW, content }
}
#[must_use]
pub(crate) fn as_error(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: BOLD_RED, content }
}

/// Text that prints with an ANSI style around it. `anstream` strips the
/// escapes again when the terminal can't show them.
pub(crate) struct StyledStr<'a> {
    prefix: Style,
    content: &'a str,
}
impl StyledStr<'_> {
    /// Width on screen, which ignores the escapes
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }
    /// Number of leading blanks
    #[must_use]
    pub fn indented_by(&self) -> usize {
        use bstr::ByteSlice;
        self.content.as_bytes().find_not_byteset(b" ").unwrap_or(self.len())
    }
}
impl fmt::Display for StyledStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix.render(), self.content, self.prefix.render_reset())
    }
}
