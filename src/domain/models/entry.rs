#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::sanitize;
use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Normal,
    Error,
    Pending,
}

/// A bubble in the chat history. Entries are display-only: app notices live
/// here but never reach the conversation sent to the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub author: Author,
    pub text: String,
    kind: EntryKind,
}

impl Entry {
    pub fn new(author: Author, text: &str) -> Entry {
        return Entry {
            author,
            text: sanitize(text),
            kind: EntryKind::Normal,
        };
    }

    pub fn new_with_kind(author: Author, kind: EntryKind, text: &str) -> Entry {
        return Entry {
            author,
            text: sanitize(text),
            kind,
        };
    }

    pub fn kind(&self) -> EntryKind {
        return self.kind;
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let line_max_width = line_max_width.max(1);
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut current_line = String::new();
            let mut current_width = 0;

            for word in full_line.split(' ') {
                for chunk in split_to_width(word, line_max_width) {
                    let chunk_width = display_width(&chunk);
                    if current_width > 0 && current_width + 1 + chunk_width > line_max_width {
                        lines.push(current_line.trim_end().to_string());
                        current_line = String::new();
                        current_width = 0;
                    } else if !current_line.is_empty() {
                        current_line.push(' ');
                        current_width += 1;
                    }

                    current_line.push_str(&chunk);
                    current_width += chunk_width;
                }
            }

            lines.push(current_line.trim_end().to_string());
        }

        return lines;
    }
}

/// Number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    return UnicodeWidthStr::width(text);
}

fn split_to_width(word: &str, max_width: usize) -> Vec<String> {
    if display_width(word) <= max_width {
        return vec![word.to_string()];
    }

    let mut chunks = vec![];
    let mut chunk = String::new();
    let mut chunk_width = 0;
    for c in word.chars() {
        let width = UnicodeWidthChar::width(c).unwrap_or(0);
        if chunk_width + width > max_width && !chunk.is_empty() {
            chunks.push(chunk);
            chunk = String::new();
            chunk_width = 0;
        }
        chunk.push(c);
        chunk_width += width;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    return chunks;
}
