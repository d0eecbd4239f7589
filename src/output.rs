//! Terminal output formatting for FAQ and testimonial results.

use crate::faq::{highlight, parse_answer_markup, AnswerSegment, FaqRecord};
use crate::testimonials::Testimonial;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print search results with the query emphasized in question and answer.
pub fn print_faq_matches(matches: &[&FaqRecord], query: &str, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    for (i, record) in matches.iter().enumerate() {
        if i > 0 {
            writeln!(stdout)?;
        }

        // Category tag
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "[{}] ", record.category)?;
        stdout.reset()?;

        // Question with highlighted match
        write_highlighted(
            &mut stdout,
            &record.question,
            query,
            ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true),
        )?;
        writeln!(stdout)?;

        write_answer(&mut stdout, &record.answer, query)?;
    }

    Ok(())
}

/// Print a numbered question list (popular / related views).
pub fn print_question_list(records: &[&FaqRecord], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    for (i, record) in records.iter().enumerate() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:2}. ", i + 1)?;
        stdout.reset()?;
        write!(stdout, "{}", record.question)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "  ({})", record.category)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print testimonials with attribution.
pub fn print_testimonials(testimonials: &[Testimonial], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    for (i, t) in testimonials.iter().enumerate() {
        if i > 0 {
            writeln!(stdout)?;
        }

        writeln!(stdout, "\"{}\"", t.text)?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(stdout, "  - {}", t.name)?;
        stdout.reset()?;

        let origin = t.company.as_deref().or(t.location.as_deref());
        if let Some(origin) = origin {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(stdout, ", {}", origin)?;
            stdout.reset()?;
        }
        writeln!(stdout)?;
    }

    Ok(())
}

/// Write an answer line: link markup rendered as "label (url)", query
/// matches emphasized in the literal text.
fn write_answer(stdout: &mut StandardStream, answer: &str, query: &str) -> io::Result<()> {
    write!(stdout, "    ")?;
    for segment in parse_answer_markup(answer) {
        match segment {
            AnswerSegment::Text(text) => {
                write_highlighted(stdout, &text, query, &ColorSpec::new())?;
            }
            AnswerSegment::Link { label, url } => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_underline(true))?;
                write!(stdout, "{}", label)?;
                stdout.reset()?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
                write!(stdout, " ({})", url)?;
                stdout.reset()?;
            }
        }
    }
    writeln!(stdout)?;
    Ok(())
}

/// Write text with query matches in red bold; non-matching segments use
/// `base` styling.
fn write_highlighted(
    stdout: &mut StandardStream,
    text: &str,
    query: &str,
    base: &ColorSpec,
) -> io::Result<()> {
    for span in highlight(text, query) {
        if span.highlighted {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        } else {
            stdout.set_color(base)?;
        }
        write!(stdout, "{}", span.text)?;
        stdout.reset()?;
    }
    Ok(())
}
