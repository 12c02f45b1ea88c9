// src/sequence/morph.rs

//! Hacker-style text morph used when the scroll indicator changes label.
//!
//! Both strings are padded with blanks to the same length. Every position
//! gets a reveal tick, assigned left to right across the morph. Until its
//! tick a position shows a random glyph, re-rolled on every tick; from its
//! tick on it shows the target character and never changes again.

use rand::Rng;

/// Glyphs shown in positions that are still morphing.
pub const GLITCH_CHARS: &str = "!@#$%^&*()_+-={}[]|;:,.<>?/\\`~ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone)]
pub struct TextMorph {
    shown: Vec<char>,
    target: Vec<char>,
    reveal_at: Vec<u32>,
    tick: u32,
    ticks: u32,
}

impl TextMorph {
    pub fn new(current: &str, target: &str, ticks: u32) -> Self {
        let ticks = ticks.max(1);
        let mut shown: Vec<char> = current.chars().collect();
        let mut target_chars: Vec<char> = target.chars().collect();
        let len = shown.len().max(target_chars.len());
        shown.resize(len, ' ');
        target_chars.resize(len, ' ');

        let reveal_at = (0..len)
            .map(|i| 1 + (i as u64 * ticks as u64 / len as u64) as u32)
            .collect();

        TextMorph {
            shown,
            target: target_chars,
            reveal_at,
            tick: 0,
            ticks,
        }
    }

    /// Advances one tick. Returns true once every position is revealed.
    pub fn step(&mut self, rng: &mut impl Rng) -> bool {
        if self.is_done() {
            return true;
        }
        self.tick += 1;
        let glitch: Vec<char> = GLITCH_CHARS.chars().collect();
        for (i, slot) in self.shown.iter_mut().enumerate() {
            if self.tick >= self.reveal_at[i] {
                *slot = self.target[i];
            } else {
                *slot = glitch[rng.gen_range(0..glitch.len())];
            }
        }
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.tick >= self.ticks
    }

    /// Whether position `index` has been frozen to its target character.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveal_at.get(index).is_some_and(|&at| self.tick >= at)
    }

    pub fn text(&self) -> String {
        self.shown.iter().collect()
    }

    /// The final text, trailing padding removed.
    pub fn target(&self) -> String {
        let s: String = self.target.iter().collect();
        s.trim_end().to_string()
    }
}
