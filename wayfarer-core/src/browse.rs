//! Presentation state for the destination list and its inline detail panel.

use crate::destination::{Destination, ImageAsset};
use crate::error::CoreError;
use crate::map::MapView;

/// Lines of description shown per list row.
pub const DESCRIPTION_LINES: usize = 2;
/// Characters per description line in a list row.
pub const ROW_LINE_WIDTH: usize = 40;

const ELLIPSIS: char = '\u{2026}';

/// One row of the destination list.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationRow {
    pub index: usize,
    pub name: String,
    /// Description wrapped and cut to [`DESCRIPTION_LINES`].
    pub summary: String,
    pub image: ImageAsset,
}

impl DestinationRow {
    /// Row models for `destinations`, in order.
    pub fn rows(destinations: &[Destination], line_width: usize) -> Vec<DestinationRow> {
        destinations
            .iter()
            .enumerate()
            .map(|(index, d)| DestinationRow {
                index,
                name: d.name().to_string(),
                summary: preview_text(d.description(), DESCRIPTION_LINES, line_width),
                image: d.image(),
            })
            .collect()
    }
}

/// Everything the detail panel draws for one destination. The map is
/// owned so the panel can pan and zoom it between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationDetail {
    pub name: String,
    pub description: String,
    pub map: MapView,
}

impl DestinationDetail {
    pub fn new(destination: &Destination, zoom: f32) -> Self {
        Self {
            name: destination.name().to_string(),
            description: destination.description().to_string(),
            map: MapView::pinned(destination.position(), destination.name(), zoom),
        }
    }
}

/// Which row, if any, is expanded into the detail panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseState {
    selected: Option<usize>,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: usize, len: usize) -> crate::Result<()> {
        if index >= len {
            return Err(CoreError::IndexOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Detail for the selected row, if it still exists in `destinations`.
    pub fn detail(&self, destinations: &[Destination], zoom: f32) -> Option<DestinationDetail> {
        self.selected
            .and_then(|i| destinations.get(i))
            .map(|d| DestinationDetail::new(d, zoom))
    }
}

/// Word-wrap `text` to `width` characters and keep at most `max_lines`
/// lines, ending with an ellipsis when anything was cut.
pub fn preview_text(text: &str, max_lines: usize, width: usize) -> String {
    let width = width.max(1);
    let max_lines = max_lines.max(1);
    let mut lines = wrap(text, width);
    if lines.len() <= max_lines {
        return lines.join("\n");
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let kept: String = last.chars().take(width - 1).collect();
        *last = format!("{}{ELLIPSIS}", kept.trim_end());
    }
    lines.join("\n")
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            // Words longer than a line are hard-split.
            for chunk in chars.chunks(width) {
                let len = chunk.len();
                if current_len == 0 {
                    current.extend(chunk);
                    current_len = len;
                } else if current_len + 1 + len <= width {
                    current.push(' ');
                    current.extend(chunk);
                    current_len += 1 + len;
                } else {
                    out.push(std::mem::take(&mut current));
                    current.extend(chunk);
                    current_len = len;
                }
            }
        }
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_destinations;

    #[test]
    fn seed_rows_keep_order_and_text() {
        let seed = seed_destinations();
        let rows = DestinationRow::rows(&seed, ROW_LINE_WIDTH);
        assert_eq!(rows.len(), 5);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.index, i);
            assert_eq!(row.name, format!("Destination {}", i + 1));
            assert_eq!(row.summary, format!("Description of destination {}", i + 1));
        }
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(preview_text("Hello world", 2, 20), "Hello world");
    }

    #[test]
    fn long_text_is_cut_to_two_lines() {
        let text = "one two three four five six seven eight nine ten";
        let preview = preview_text(text, 2, 10);
        let lines: Vec<_> = preview.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "one two");
        assert!(lines[1].ends_with(ELLIPSIS), "{preview}");
        assert!(lines[1].chars().count() <= 10);
    }

    #[test]
    fn overlong_word_is_split() {
        let preview = preview_text("abcdefghijklmnop", 1, 6);
        assert_eq!(preview, format!("abcde{ELLIPSIS}"));
    }

    #[test]
    fn explicit_newlines_count_as_lines() {
        let preview = preview_text("a\nb\nc", 2, 10);
        assert_eq!(preview, format!("a\nb{ELLIPSIS}"));
    }

    #[test]
    fn selection_drives_detail_map() {
        let seed = seed_destinations();
        let mut state = BrowseState::new();
        assert!(state.detail(&seed, 10.0).is_none());

        for (i, d) in seed.iter().enumerate() {
            state.select(i, seed.len()).unwrap();
            let detail = state.detail(&seed, 10.0).unwrap();
            assert_eq!(detail.name, d.name());
            assert_eq!(detail.description, d.description());
            assert_eq!(detail.map.center, d.position());
            assert_eq!(detail.map.markers.len(), 1);
            assert_eq!(detail.map.markers[0].title, d.name());
        }
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut state = BrowseState::new();
        assert_eq!(
            state.select(5, 5),
            Err(CoreError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn clear_hides_detail() {
        let seed = seed_destinations();
        let mut state = BrowseState::new();
        state.select(2, seed.len()).unwrap();
        state.clear();
        assert!(state.detail(&seed, 10.0).is_none());
    }
}
