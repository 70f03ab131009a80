//! Text measurement and word wrapping
//!
//! Widths come from the Adobe font metrics of the two standard PDF fonts the
//! catalog uses, in thousandths of an em. Characters outside printable ASCII
//! are measured with the width of a lowercase `o`.

use crate::constants::LINE_HEIGHT_FACTOR;

/// The standard fonts text is measured and rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    pub fn for_weight(bold: bool) -> Self {
        if bold {
            Font::HelveticaBold
        } else {
            Font::Helvetica
        }
    }

    /// Advance width of `ch` in thousandths of an em
    pub fn char_width(self, ch: char) -> u16 {
        let table = match self {
            Font::Helvetica => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        match ch as u32 {
            code @ 32..=126 => table[(code - 32) as usize],
            // Tabs and other whitespace advance like a space
            _ if ch.is_whitespace() => table[0],
            _ => table[('o' as u32 - 32) as usize],
        }
    }

    /// Rendered width of `text` at `size` points
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        units as f32 / 1000.0 * size
    }
}

/// Baseline-to-baseline distance for wrapped text at `size` points
pub fn line_height(size: f32) -> f32 {
    size * LINE_HEIGHT_FACTOR
}

/// Greedily wrap `text` into lines no wider than `max_width` points.
///
/// Words are packed onto a line until the next one would overflow. A word
/// that is wider than `max_width` on its own is broken between characters.
/// Runs of spaces collapse to one; explicit newlines always break, and a
/// blank source line comes back as an empty string. A single glyph wider
/// than `max_width` still gets a line to itself.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if font.text_width(word, size) > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut pieces = break_word(word, font, size, max_width);
                // The tail may still share its line with following words
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{} {}", current, word);
            if font.text_width(&candidate, size) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }

        lines.push(current);
    }

    // Drop trailing blank lines left by trailing newlines
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

/// Split an overlong word into pieces that each fit `max_width`
fn break_word(word: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut units: u32 = 0;

    for ch in word.chars() {
        let advance = font.char_width(ch) as u32;
        // Same arithmetic as `text_width`, so pieces measure identically later
        if !piece.is_empty() && (units + advance) as f32 / 1000.0 * size > max_width {
            pieces.push(std::mem::take(&mut piece));
            units = 0;
        }
        piece.push(ch);
        units += advance;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

// Widths for U+0020..=U+007E

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //  !"#$%&'()*+,-./
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // 0-9
    278, 278, 584, 584, 584, 556, 1015,                                             // :;<=>?@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // N-Z
    278, 278, 278, 469, 556, 333,                                                   // [\]^_`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // n-z
    334, 260, 334, 584,                                                             // {|}~
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];
