//! Provides the functions related to logging/printing messages to the console.

use std::fmt::{Display, Write};

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::{Location, Span};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the particular span of the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<T: Display> SourceCodeDisplay<'_, T> {
    fn write_pipe(f: &mut std::fmt::Formatter<'_>, width: usize) -> std::fmt::Result {
        for _ in 0..=width {
            f.write_char(' ')?;
        }
        write!(f, "{}", Style::Bold.with(Color::Cyan.with("┃")))
    }

    /// Prints the given line with its line number. Bytes for which `highlight` returns true are
    /// underlined.
    fn write_line(
        f: &mut std::fmt::Formatter<'_>,
        width: usize,
        line_number: usize,
        line: &[u8],
        highlight: impl Fn(usize) -> bool,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}{}{} ",
            Style::Bold.with(Color::Cyan.with(line_number)),
            format_args!("{:width$}", "", width = width - get_digit(line_number) + 1),
            Style::Bold.with(Color::Cyan.with("┃")),
        )?;

        for (index, byte) in line.iter().copied().enumerate() {
            match byte {
                // if the byte is tab, print 4 spaces
                b'\t' => f.write_str("    ")?,
                b'\n' | b'\r' => {}
                byte if highlight(index + 1) => write!(
                    f,
                    "{}",
                    Style::Underline.with(Style::Bold.with(Color::Red.with(char::from(byte))))
                )?,
                byte => f.write_char(char::from(byte))?,
            }
        }

        writeln!(f)
    }
}

impl<T: Display> Display for SourceCodeDisplay<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();

        // a span starting at the end of the file points just past the last line
        let start_location = self.span.start_location().unwrap_or_else(|| {
            let line = source_file.line_number();
            Location {
                line,
                column: source_file.get_line(line).map_or(0, <[u8]>::len) + 1,
            }
        });
        let end_location = self.span.end_location();

        let start_line = start_location.line;
        let end_line = end_location.map_or_else(
            || source_file.line_number(),
            |end_location| end_location.line,
        );
        let is_multiline = start_line != end_line;

        // when printing the source code, show the line before the span and the line after the span
        let width = get_digit(end_line + 1);

        // prints the source location
        for _ in 0..width {
            f.write_char(' ')?;
        }

        writeln!(
            f,
            "{} {}:{start_location}",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.full_path().display(),
        )?;

        Self::write_pipe(f, width)?;
        writeln!(f)?;

        // prints previous line
        if let Some(line) = source_file.get_line(start_line.saturating_sub(1)) {
            Self::write_line(f, width, start_line - 1, line, |_| false)?;
        }

        let end_column = end_location.map_or(usize::MAX, |end_location| end_location.column);

        for line_number in start_line..=end_line {
            let Some(line) = source_file.get_line(line_number) else {
                break;
            };

            Self::write_line(f, width, line_number, line, |column| {
                if is_multiline {
                    (line_number == start_line && column >= start_location.column)
                        || (line_number == end_line && column < end_column)
                        || (line_number > start_line && line_number < end_line)
                } else {
                    column >= start_location.column && column < end_column
                }
            })?;
        }

        if let (Some(message), false) = (&self.help_display, is_multiline) {
            Self::write_pipe(f, width)?;
            f.write_char(' ')?;

            // prints the whitespace until the start's column
            if let Some(line) = source_file.get_line(start_line) {
                for byte in line.iter().take(start_location.column.saturating_sub(1)) {
                    f.write_str(if *byte == b'\t' { "    " } else { " " })?;
                }
            }

            writeln!(f, "{}: {message}", Style::Bold.with("help"))?;
        }

        // prints the post line
        if let Some(line) = source_file.get_line(end_line.saturating_add(1)) {
            Self::write_line(f, width, end_line + 1, line, |_| false)?;
        }

        Self::write_pipe(f, width)?;
        writeln!(f)?;

        if let (Some(help_display), true) = (&self.help_display, is_multiline) {
            for _ in 0..=width {
                f.write_char(' ')?;
            }
            writeln!(
                f,
                "{} {}: {help_display}",
                Style::Bold.with(Color::Cyan.with("=")),
                Style::Bold.with("help")
            )?;
        }

        Ok(())
    }
}
