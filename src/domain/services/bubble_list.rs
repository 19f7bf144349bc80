#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use std::collections::HashMap;

use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;

use crate::domain::models::Author;
use crate::domain::models::Bubble;
use crate::domain::models::BubbleAlignment;
use crate::domain::models::Entry;

struct BubbleCacheEntry {
    entry: Entry,
    lines: Vec<Line<'static>>,
}

#[derive(Default)]
pub struct BubbleList {
    cache: HashMap<usize, BubbleCacheEntry>,
    line_width: u16,
    lines_len: usize,
}

impl BubbleList {
    pub fn set_entries(&mut self, entries: &[Entry], line_width: u16) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        // Entries only disappear on reset.
        self.cache.retain(|idx, _| return *idx < entries.len());

        self.lines_len = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                if let Some(cache_entry) = self.cache.get(&idx) {
                    if cache_entry.entry == *entry {
                        return cache_entry.lines.len();
                    }
                }

                let mut align = BubbleAlignment::Left;
                if entry.author == Author::User {
                    align = BubbleAlignment::Right;
                }

                let lines = Bubble::new(entry, align, line_width).as_lines();
                let lines_len = lines.len();
                self.cache.insert(
                    idx,
                    BubbleCacheEntry {
                        entry: entry.clone(),
                        lines,
                    },
                );

                return lines_len;
            })
            .sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn is_empty(&self) -> bool {
        return self.lines_len == 0;
    }

    pub fn widget(&self, scroll: u16) -> Paragraph<'static> {
        let mut indexes: Vec<usize> = self.cache.keys().cloned().collect();
        indexes.sort();
        let lines: Vec<Line<'static>> = indexes
            .iter()
            .filter_map(|idx| return self.cache.get(idx))
            .flat_map(|cache_entry| return cache_entry.lines.to_owned())
            .collect();

        return Paragraph::new(lines)
            .block(Block::default())
            .scroll((scroll, 0));
    }
}
