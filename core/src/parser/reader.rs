//! Lazy block-boundary scanner over the raw log text.
//!
//! Decodes the whole file up front (UTF-8 fast path, WINDOWS_1252
//! fallback for legacy logs), then walks it line by line, deciding where
//! one block ends and the next begins. Blank lines separate blocks, but a
//! 3-line lookahead bridges spurious blanks inside a combat, and noise
//! lines (blank, corrupted-overlength, blacklisted UI chatter) are skipped
//! between blocks.

use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use memchr::memchr_iter;
use memmap2::Mmap;

use crate::error::ParseError;
use crate::game_data::{FAMILIAR_POUND_MARKER, FIGHT_CONTINUE_URL, LINE_BLACKLIST, MAX_LINE_LEN};

use super::block::BlockKind;

/// Maximum lines the cursor may advance past a mark before `reset`
/// refuses to rewind. Keeps lookahead bounded.
pub const MAX_MARK_DISTANCE: usize = 8;

/// A run of consecutive lines recognized as one semantic unit.
#[derive(Debug, Clone)]
pub struct RawBlock {
    pub kind: BlockKind,
    pub lines: Vec<String>,
}

pub struct LogReader {
    lines: Vec<String>,
    pos: usize,
    mark: Option<usize>,
}

impl LogReader {
    /// Map and decode a log file. The mapping lives only for the duration
    /// of this call; the reader owns its own line storage.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        // SAFETY: the mapping is read-only and dropped before return
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self::from_bytes(&mmap))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text: Cow<'_, str> = match std::str::from_utf8(bytes) {
            Ok(s) => Cow::Borrowed(s),
            Err(_) => WINDOWS_1252.decode(bytes).0,
        };

        let mut lines = Vec::new();
        let mut start = 0;
        for end in memchr_iter(b'\n', text.as_bytes()) {
            lines.push(text[start..end].trim_end_matches('\r').to_string());
            start = end + 1;
        }
        if start < text.len() {
            lines.push(text[start..].trim_end_matches('\r').to_string());
        }

        let mut reader = Self {
            lines,
            pos: 0,
            mark: None,
        };
        reader.skip_noise();
        reader
    }

    /// True while a further non-skippable line exists.
    pub fn has_next(&self) -> bool {
        self.pos < self.lines.len()
    }

    pub fn next_line(&mut self) -> Option<&str> {
        let line = self.lines.get(self.pos)?;
        self.pos += 1;
        Some(line)
    }

    pub fn peek(&self, ahead: usize) -> Option<&str> {
        self.lines.get(self.pos + ahead).map(String::as_str)
    }

    pub fn mark(&mut self) {
        self.mark = Some(self.pos);
    }

    /// Return to the marked position. Refused (cursor left alone) when no
    /// mark is set or the cursor moved past the mark budget; the caller
    /// then treats the lines in between as unparseable rather than
    /// corrupting its position.
    pub fn reset(&mut self) -> bool {
        match self.mark.take() {
            Some(mark) if self.pos - mark <= MAX_MARK_DISTANCE => {
                self.pos = mark;
                true
            }
            Some(mark) => {
                tracing::debug!(mark, pos = self.pos, "mark budget exceeded, reset refused");
                false
            }
            None => false,
        }
    }

    /// Yield the next classified block, advancing past any trailing noise.
    pub fn next_block(&mut self) -> Option<RawBlock> {
        while self.has_next() {
            let lines = self.collect_block();
            self.skip_noise();
            if lines.is_empty() {
                continue;
            }
            let kind = BlockKind::classify(&lines[0], lines.get(1).map(String::as_str));
            return Some(RawBlock { kind, lines });
        }
        None
    }

    fn collect_block(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];
            if line.is_empty() {
                // Blank usually ends the block, unless lookahead shows the
                // combat continues
                match self.find_continuation() {
                    Some(next) => {
                        self.pos = next;
                        continue;
                    }
                    None => break,
                }
            }
            if line.len() >= MAX_LINE_LEN {
                // Corrupted line in the middle of a block
                self.pos += 1;
                continue;
            }
            if line.contains(FAMILIAR_POUND_MARKER) {
                // Multi-line pound-gain notation is skipped transparently
                self.pos += 1;
                if line.ends_with(':') && self.peek(0).is_some_and(|l| !l.is_empty()) {
                    self.pos += 1;
                }
                continue;
            }
            lines.push(line.clone());
            self.pos += 1;
        }
        lines
    }

    /// 3-line lookahead past a blank: a "Round N:" marker or a bossfight
    /// URL means the blank was spurious and the block continues there.
    fn find_continuation(&self) -> Option<usize> {
        for ahead in 1..=3 {
            let line = self.lines.get(self.pos + ahead)?;
            if line.starts_with("Round ") || line.starts_with(FIGHT_CONTINUE_URL) {
                return Some(self.pos + ahead);
            }
        }
        None
    }

    fn skip_noise(&mut self) {
        while let Some(line) = self.lines.get(self.pos) {
            if is_noise(line) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }
}

fn is_noise(line: &str) -> bool {
    line.trim().is_empty()
        || line.len() >= MAX_LINE_LEN
        || LINE_BLACKLIST.iter().any(|pat| line.contains(pat))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> LogReader {
        LogReader::from_bytes(text.as_bytes())
    }

    #[test]
    fn test_blank_lines_separate_blocks() {
        let mut r = reader("[1] The Spooky Forest\nEncounter: spooky vampire\n\n[2] The Haunted Pantry\nEncounter: possessed can of tomatoes\n");
        let first = r.next_block().unwrap();
        assert_eq!(first.lines.len(), 2);
        let second = r.next_block().unwrap();
        assert_eq!(second.lines[0], "[2] The Haunted Pantry");
        assert!(r.next_block().is_none());
        assert!(!r.has_next());
    }

    #[test]
    fn test_spurious_blank_bridged_by_round_marker() {
        let mut r = reader(
            "[1] The Spooky Forest\nEncounter: spooky vampire\nRound 1: you lose 5 hit points\n\nRound 2: spooky vampire takes 10 damage.\n\n[2] The Haunted Pantry\n",
        );
        let block = r.next_block().unwrap();
        assert_eq!(block.lines.len(), 4);
        assert!(block.lines[3].starts_with("Round 2"));
        let next = r.next_block().unwrap();
        assert_eq!(next.lines[0], "[2] The Haunted Pantry");
    }

    #[test]
    fn test_familiar_pound_notation_skipped() {
        let mut r = reader(
            "[1] The Spooky Forest\nEncounter: spooky vampire\nGrarggh gains a pound!\nYou gain 5 Strongness\n",
        );
        let block = r.next_block().unwrap();
        assert_eq!(block.lines.len(), 3);
        assert!(!block.lines.iter().any(|l| l.contains("gains a pound")));
    }

    #[test]
    fn test_blacklisted_and_overlength_lines_skipped() {
        let long_line = "x".repeat(600);
        let text = format!("familiar lock\n{}\n[1] The Spooky Forest\n", long_line);
        let mut r = reader(&text);
        let block = r.next_block().unwrap();
        assert_eq!(block.lines[0], "[1] The Spooky Forest");
        assert!(r.next_block().is_none());
    }

    #[test]
    fn test_mark_reset_bounded() {
        let text = (0..20).map(|i| format!("line {}\n", i)).collect::<String>();
        let mut r = reader(&text);
        r.mark();
        for _ in 0..3 {
            r.next_line();
        }
        assert!(r.reset());
        assert_eq!(r.peek(0), Some("line 0"));

        r.mark();
        for _ in 0..(MAX_MARK_DISTANCE + 1) {
            r.next_line();
        }
        assert!(!r.reset());
        assert_eq!(r.peek(0), Some(&*format!("line {}", MAX_MARK_DISTANCE + 1)));
    }

    #[test]
    fn test_windows_1252_fallback() {
        // 0xE9 is 'e' acute in WINDOWS_1252 but invalid UTF-8
        let mut bytes = b"[1] Caf".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b" des Artistes\n");
        let mut r = LogReader::from_bytes(&bytes);
        let block = r.next_block().unwrap();
        assert_eq!(block.lines[0], "[1] Caf\u{e9} des Artistes");
    }

    #[test]
    fn test_exhaustion_with_trailing_noise() {
        let mut r = reader("[1] The Spooky Forest\n\n\nfamiliar lock\n\n");
        assert!(r.next_block().is_some());
        assert!(!r.has_next());
        assert!(r.next_block().is_none());
    }
}
