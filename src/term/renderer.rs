/*
renderer.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordgrid.

Wordgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Draw frames on the terminal.
//!
//! A [`Frame`] is a list of lines made of styled [`Span`] objects. The view functions in
//! [`super::view`] build frames; [`TerminalRenderer`] writes them to the terminal. Lines are
//! overwritten in place instead of clearing the screen, which avoids flickering while the player
//! drags the pointer.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand, cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

/// Text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    Title,
    /// Cells of the selection in progress.
    Selected,
    /// Cells of found words, and found words in the word list.
    Found,
    /// Cells of found hidden words.
    FoundHidden,
    Faint,
    Alert,
    Error,
}

/// Styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::Normal)
    }
}

/// Content of the screen.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    lines: Vec<Vec<Span>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line made of several spans.
    pub fn push_line(&mut self, spans: Vec<Span>) {
        self.lines.push(spans);
    }

    /// Add a line with a single span.
    pub fn push_text(&mut self, text: impl Into<String>, style: Style) {
        self.lines.push(vec![Span::new(text, style)]);
    }

    /// Add an empty line.
    pub fn push_blank(&mut self) {
        self.lines.push(Vec::new());
    }

    pub fn lines(&self) -> &[Vec<Span>] {
        &self.lines
    }

    /// Return the text of the given line, without styles.
    pub fn line_text(&self, row: usize) -> Option<String> {
        self.lines
            .get(row)
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect())
    }

    /// Return the text of the whole frame, without styles. Lines are separated by `\n`.
    pub fn text(&self) -> String {
        (0..self.lines.len())
            .filter_map(|row| self.line_text(row))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Terminal output.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    /// Whether the next draw must clear the screen first.
    dirty: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            dirty: true,
        }
    }

    /// Switch the terminal to raw mode, on the alternate screen, with mouse events enabled.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> io::Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()
    }

    /// Force the next draw to clear the screen. Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Draw the frame.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.buf.clear();
        if self.dirty {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            self.dirty = false;
        }
        encode_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

/// Encode the frame as a sequence of terminal commands into `out`.
pub fn encode_into(frame: &Frame, out: &mut Vec<u8>) -> io::Result<()> {
    for (y, spans) in frame.lines().iter().enumerate() {
        let y: u16 = u16::try_from(y).unwrap_or(u16::MAX);
        out.queue(cursor::MoveTo(0, y))?;
        for span in spans {
            apply_style_into(out, span.style)?;
            out.queue(Print(&span.text))?;
        }
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    }
    let below: u16 = u16::try_from(frame.lines().len()).unwrap_or(u16::MAX);
    out.queue(cursor::MoveTo(0, below))?;
    out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> io::Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    match style {
        Style::Normal => {}
        Style::Title => {
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(SetForegroundColor(Color::Cyan))?;
        }
        Style::Selected => {
            out.queue(SetBackgroundColor(Color::Yellow))?;
            out.queue(SetForegroundColor(Color::Black))?;
        }
        Style::Found => {
            out.queue(SetBackgroundColor(Color::DarkGreen))?;
            out.queue(SetForegroundColor(Color::White))?;
        }
        Style::FoundHidden => {
            out.queue(SetBackgroundColor(Color::Magenta))?;
            out.queue(SetForegroundColor(Color::White))?;
        }
        Style::Faint => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Style::Alert => {
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(SetForegroundColor(Color::Green))?;
        }
        Style::Error => {
            out.queue(SetForegroundColor(Color::Red))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_text() {
        let mut frame: Frame = Frame::new();
        frame.push_text("WORDGRID", Style::Title);
        frame.push_blank();
        frame.push_line(vec![Span::plain(" A "), Span::new(" B ", Style::Selected)]);

        assert_eq!(frame.text(), "WORDGRID\n\n A  B ");
        assert_eq!(frame.line_text(2).as_deref(), Some(" A  B "));
        assert_eq!(frame.line_text(3), None);
    }

    #[test]
    fn encoding_contains_the_text() {
        let mut frame: Frame = Frame::new();
        frame.push_text("Score: 600", Style::Normal);
        let mut out: Vec<u8> = Vec::new();
        encode_into(&frame, &mut out).unwrap();

        let encoded: String = String::from_utf8_lossy(&out).into_owned();
        assert!(encoded.contains("Score: 600"));
    }
}
