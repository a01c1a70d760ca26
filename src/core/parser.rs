//! Heading-delimited section parsing.
//!
//! Splits raw note text into an ordered sequence of sections. The
//! parser is total: any input, including empty or heading-free
//! text, yields a (possibly empty) sequence rather than an error.
//! It is also pure — a function of the input text with no I/O.
//!
//! A line is a heading iff it starts with a run of `#` followed by
//! at least one space or tab and non-empty text; the run length is
//! the nesting level. Everything else is body text and is carried
//! verbatim, so embedded code fragments stay opaque.

use crate::core::types::Section;

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A heading marker run plus its text
    Heading { level: usize, text: &'a str },
    /// Anything that is not a heading
    Body(&'a str),
}

/// Classify one line as heading or body.
pub fn classify(line: &str) -> Line<'_> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 {
        return Line::Body(line);
    }

    let rest = &line[level..];
    if !rest.starts_with([' ', '\t']) {
        return Line::Body(line);
    }

    let text = rest.trim();
    if text.is_empty() {
        return Line::Body(line);
    }

    Line::Heading { level, text }
}

/// Lazy iterator over the sections of a text.
///
/// Borrows the input, so a fresh iterator can be constructed from
/// the same text to restart the sequence. Lines before the first
/// heading belong to no section and are skipped.
pub struct Sections<'a> {
    lines: std::iter::Peekable<std::str::Lines<'a>>,
}

impl<'a> Sections<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().peekable(),
        }
    }
}

impl Iterator for Sections<'_> {
    type Item = Section;

    fn next(&mut self) -> Option<Section> {
        // Skip to the next heading line (preamble or exhausted input)
        let (level, heading) = loop {
            let line = self.lines.next()?;
            if let Line::Heading { level, text } = classify(line) {
                break (level, text.to_string());
            }
        };

        // Everything up to the next heading is this section's body
        let mut body = String::new();
        while let Some(line) = self.lines.peek() {
            if matches!(classify(line), Line::Heading { .. }) {
                break;
            }
            if !body.is_empty() {
                body.push('\n');
            }
            body.push_str(line);
            self.lines.next();
        }

        Some(Section {
            heading,
            level,
            body,
        })
    }
}

/// Create a lazy, restartable section sequence over `text`.
pub fn sections(text: &str) -> Sections<'_> {
    Sections::new(text)
}

/// Parse `text` into a vector of sections.
pub fn parse(text: &str) -> Vec<Section> {
    sections(text).collect()
}
