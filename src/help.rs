use crate::styles::{app_name, as_error, as_item, as_title, StyledStr};
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use std::io::{self, Write};
use terminal_size::{terminal_size, Height, Width};
use textwrap::wrap;

enum HelpItem<'a> {
    Usage(&'a str),
    Paragraph(&'a str),
    Section(Section<'a>),
}
struct Section<'a> {
    title: &'a str,
    entries: Vec<Entry<'a>>,
}
struct Entry<'a> {
    item: StyledStr<'a>,
    caption: &'a str,
}

const HELP_TEXT: &str = include_str!("help.txt");
const EXAMPLE_TITLE: &str = "Example:";

fn name() -> StyledStr<'static> {
    app_name("conferir")
}

pub(crate) fn version() -> String {
    let version = std::env!("CARGO_PKG_VERSION");
    let name = name();
    format!("{name} {version}")
}

/// Print the full help page to stdout
pub(crate) fn print() -> Result<()> {
    let mut stdout = anstream::AutoStream::new(io::stdout().lock(), anstream::ColorChoice::Auto);
    let help = parse(HELP_TEXT);
    let printed = writeln!(stdout, "{}", version()).and_then(|()| fallible_print(&mut stdout, &help));
    match printed {
        Err(e) => bail!("failed printing to stdout: {e}"),
        Ok(()) => Ok(()),
    }
}

/// Print `complaint` to stderr, followed by the usage line and the example
/// invocation
pub(crate) fn print_usage_error(complaint: &str) -> Result<()> {
    let mut stderr = anstream::AutoStream::new(io::stderr().lock(), anstream::ColorChoice::Auto);
    let brief: Vec<HelpItem> = parse(HELP_TEXT)
        .into_iter()
        .filter(|item| match item {
            HelpItem::Usage(_) => true,
            HelpItem::Section(s) => s.title == EXAMPLE_TITLE,
            HelpItem::Paragraph(_) => false,
        })
        .collect();
    let printed = writeln!(stderr, "{} {complaint}\n", as_error("error:"))
        .and_then(|()| fallible_print(&mut stderr, &brief));
    match printed {
        Err(e) => bail!("failed printing to stderr: {e}"),
        Ok(()) => Ok(()),
    }
}

fn fallible_print(out: &mut dyn Write, help: &[HelpItem]) -> io::Result<()> {
    for help_item in help {
        match help_item {
            HelpItem::Paragraph(text) => {
                for line in wrap(text, *LINE_WIDTH) {
                    writeln!(out, "{line}")?;
                }
            }
            HelpItem::Usage(args) => writeln!(out, "{}{}{}", as_title("Usage: "), name(), args)?,
            HelpItem::Section(s) => {
                writeln!(out, "{}", as_title(s.title))?;
                s.print_entries(out)?;
            }
        };
    }
    Ok(())
}

fn parse(text: &str) -> Vec<HelpItem> {
    const USAGE: &str = "Usage: ";
    let mut help = Vec::new();
    let mut lines = text.lines().fuse();
    while let Some(line) = lines.next() {
        if let Some(rest) = line.strip_prefix(USAGE) {
            let (_, args) = rest.split_at(rest.find(' ').unwrap_or(rest.len()));
            help.push(HelpItem::Usage(args));
        } else if line.ends_with(':') {
            let title = line;
            let mut entries = Vec::new();
            let result = loop {
                let Some(entry) = lines.next() else { break None };
                let entry = entry.trim_end();
                if entry.is_empty() {
                    break Some(HelpItem::Paragraph(""));
                }
                // help.txt is ours, so a malformed entry is a bug
                let Some(sp_sp) = entry.rfind("  ") else { panic!("No double space in {entry}") };
                let (item, caption) = entry.split_at(sp_sp + 2);
                entries.push(Entry { item: as_item(item), caption });
            };
            help.push(HelpItem::Section(Section { title, entries }));
            if let Some(part) = result {
                help.push(part);
            }
        } else {
            help.push(HelpItem::Paragraph(line));
        }
    }
    help
}

impl Section<'_> {
    fn print_entries(&self, out: &mut dyn Write) -> io::Result<()> {
        for entry in &self.entries {
            if entry.fits_in_line() {
                writeln!(out, "{}{}", entry.item, entry.caption)?;
            } else {
                writeln!(out, "{}", entry.item)?;
                for line in entry.next_line_caption() {
                    writeln!(out, "{line}")?;
                }
            }
        }
        Ok(())
    }
}

const BLANKS: &str = "                                                        ";
impl Entry<'_> {
    fn fits_in_line(&self) -> bool {
        self.item.len() + self.caption.len() <= *LINE_WIDTH
    }
    fn next_line_caption(&self) -> Vec<std::borrow::Cow<'_, str>> {
        let indent = &BLANKS[..(self.item.indented_by() + 4).min(BLANKS.len())];
        let options = textwrap::Options::new(*LINE_WIDTH).initial_indent(indent).subsequent_indent(indent);
        wrap(self.caption, options)
    }
}

static LINE_WIDTH: Lazy<usize> = Lazy::new(|| {
    fn from_env() -> Option<usize> {
        std::env::var_os("COLUMNS")?.to_str()?.parse::<usize>().ok()
    }
    if let Some((Width(width), Height(_))) = terminal_size() {
        width as usize
    } else {
        from_env().unwrap_or(100)
    }
});

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn help_text_parses_into_usage_paragraphs_and_sections() {
        let help = parse(HELP_TEXT);
        assert!(matches!(help[0], HelpItem::Usage(" --apostas <FILE> --resultado <FILE>")));
        let titles: Vec<&str> = help
            .iter()
            .filter_map(|item| match item {
                HelpItem::Section(s) => Some(s.title),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["Options:", EXAMPLE_TITLE]);
    }

    #[test]
    fn entries_split_at_the_last_double_space() {
        let help = parse("Options:\n  --apostas <FILE>    The bets\n");
        let HelpItem::Section(section) = &help[0] else { panic!("expected a section") };
        let entry = &section.entries[0];
        assert!(entry.item.to_string().contains("  --apostas <FILE>    "));
        assert_eq!(entry.item.len(), "  --apostas <FILE>    ".len());
        assert_eq!(entry.item.indented_by(), 2);
        assert_eq!(entry.caption, "The bets");
    }

    #[test]
    fn printing_mentions_both_flags() {
        let mut out = Vec::new();
        fallible_print(&mut out, &parse(HELP_TEXT)).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("--apostas"));
        assert!(out.contains("--resultado"));
        assert!(out.contains("conferir --apostas=apostas.txt --resultado=resultado.txt"));
    }
}
