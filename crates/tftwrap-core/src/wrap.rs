//! Greedy word wrap over a flat byte message.
//!
//! Lines break at the last space that still fits; the space itself is not
//! drawn. A run with no space inside the column budget is hard-broken at the
//! column limit. Whatever does not fit in the line budget is dropped.

use core::ops::Range;

use crate::grid::Capacity;

const SPACE: u8 = b' ';

/// One wrapped line: a byte range of the message and its screen row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Line {
    pub start: usize,
    pub end: usize,
    pub row: u16,
}

impl Line {
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The line's bytes within the message it was cut from.
    pub fn bytes<'a>(&self, message: &'a [u8]) -> &'a [u8] {
        &message[self.range()]
    }
}

/// Lazy line iterator returned by [`wrap`].
#[derive(Clone, Debug)]
pub struct WrapLines<'a> {
    message: &'a [u8],
    columns: usize,
    lines: u16,
    line_start: usize,
    emitted: u16,
}

/// Wraps `message` to at most `capacity.columns` bytes per line and
/// `capacity.lines` lines.
pub fn wrap(message: &[u8], capacity: Capacity) -> WrapLines<'_> {
    WrapLines {
        message,
        columns: capacity.columns as usize,
        lines: capacity.lines,
        line_start: 0,
        emitted: 0,
    }
}

impl WrapLines<'_> {
    /// Bytes not yet placed on any line.
    ///
    /// Once the iterator is exhausted this is the count silently dropped
    /// because the line budget ran out.
    pub fn dropped(&self) -> usize {
        self.message.len().saturating_sub(self.line_start)
    }

    /// Nearest space in `(line_start, limit]`, scanning backward.
    fn break_point(&self, limit: usize) -> Option<usize> {
        (self.line_start + 1..=limit)
            .rev()
            .find(|&k| self.message[k] == SPACE)
    }
}

impl Iterator for WrapLines<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.lines || self.columns == 0 {
            return None;
        }

        let remaining = self.message.len().saturating_sub(self.line_start);
        if remaining == 0 {
            return None;
        }

        let start = self.line_start;
        let end = if remaining <= self.columns {
            self.line_start = self.message.len();
            self.message.len()
        } else {
            // First byte that does not fit on this line.
            let overflow = start + self.columns;
            match self.break_point(overflow) {
                Some(space) => {
                    self.line_start = space + 1;
                    space
                }
                None => {
                    self.line_start = overflow;
                    overflow
                }
            }
        };

        let row = self.emitted;
        self.emitted += 1;

        Some(Line { start, end, row })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity(columns: u16, lines: u16) -> Capacity {
        Capacity { columns, lines }
    }

    fn wrapped<'a>(message: &'a str, columns: u16, lines: u16) -> Vec<&'a str> {
        wrap(message.as_bytes(), capacity(columns, lines))
            .map(|line| &message[line.range()])
            .collect()
    }

    #[test]
    fn breaks_at_last_fitting_space() {
        assert_eq!(
            wrapped("The quick brown fox jumps", 10, 3),
            ["The quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn short_message_is_one_line() {
        assert_eq!(wrapped("hello", 10, 3), ["hello"]);
        assert_eq!(wrapped("exactly 10", 10, 3), ["exactly 10"]);
    }

    #[test]
    fn long_word_is_hard_broken_at_column_limit() {
        assert_eq!(
            wrapped("Supercalifragilistic", 10, 3),
            ["Supercalif", "ragilistic"]
        );
    }

    #[test]
    fn hard_break_keeps_every_byte() {
        assert_eq!(
            wrapped("abcdefghijklmnopqrstuvwxy z", 10, 4),
            ["abcdefghij", "klmnopqrst", "uvwxy z"]
        );
    }

    #[test]
    fn space_exactly_at_the_limit_gives_a_full_line() {
        assert_eq!(wrapped("abcdefghij klm", 10, 3), ["abcdefghij", "klm"]);
    }

    #[test]
    fn empty_message_has_no_lines() {
        let mut lines = wrap(b"", capacity(10, 3));
        assert_eq!(lines.next(), None);
        assert_eq!(lines.dropped(), 0);
    }

    #[test]
    fn trailing_break_space_does_not_add_an_empty_line() {
        assert_eq!(wrapped("abcdefghij ", 10, 3), ["abcdefghij"]);
    }

    #[test]
    fn overflow_past_line_budget_is_dropped_and_counted() {
        let message = b"The quick brown fox jumps";
        let mut lines = wrap(message, capacity(10, 1));

        let first = lines.next().unwrap();
        assert_eq!(first.bytes(message), b"The quick");
        assert_eq!(lines.next(), None);
        assert_eq!(lines.dropped(), "brown fox jumps".len());
    }

    #[test]
    fn rows_follow_emission_order() {
        let rows: Vec<u16> = wrap(b"aa bb cc dd", capacity(2, 4))
            .map(|line| line.row)
            .collect();
        assert_eq!(rows, [0, 1, 2, 3]);
    }

    #[test]
    fn consecutive_spaces_are_not_collapsed() {
        assert_eq!(wrapped("ab  cd", 3, 3), ["ab ", "cd"]);
    }

    #[test]
    fn no_line_exceeds_budget_for_mixed_input() {
        let message = "a bb ccc dddd eeeee ffffff ggggggg hhhhhhhh iiiiiiiii jjjjjjjjjj kkkkkkkkkkk";
        for columns in 1..12u16 {
            for lines in 1..8u16 {
                let out: Vec<Line> = wrap(message.as_bytes(), capacity(columns, lines)).collect();
                assert!(out.len() <= lines as usize);
                assert!(out.iter().all(|line| line.len() <= columns as usize));
            }
        }
    }

    #[test]
    fn lines_plus_separators_plus_dropped_cover_the_message() {
        let message = b"one two three four five six seven";
        let mut lines = wrap(message, capacity(7, 3));
        let collected: Vec<Line> = lines.by_ref().collect();

        let last_end = collected.last().map_or(0, |line| line.end);
        assert_eq!(collected.len(), 3);
        assert!(lines.dropped() <= message.len() - last_end);
        assert_eq!(&message[message.len() - lines.dropped()..], b"five six seven");
    }
}
