use std::{rc::Rc, time::Duration};

use thiserror::Error;

/// Delay before the first keystroke after the animator starts.
pub const START_DELAY: Duration = Duration::from_millis(1_000);
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
/// Hold with the full phrase on screen.
pub const HOLD_FULL: Duration = Duration::from_millis(2_000);
/// Hold with an empty slot before the next phrase starts.
pub const HOLD_EMPTY: Duration = Duration::from_millis(500);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypingError {
    #[error("typing animation needs at least one non-blank phrase")]
    NoPhrases,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Cycles through a fixed list of phrases one character at a time.
///
/// `tick` performs one step and returns how long the driver should wait
/// before calling it again, so the same state machine runs under browser
/// timers and under a virtual clock in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: Rc<[String]>,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
    next_delay: Duration,
    ticks: u64,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Rc<[String]> = phrases
            .into_iter()
            .map(Into::into)
            .filter(|phrase| !phrase.trim().is_empty())
            .collect();

        if phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }

        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            next_delay: START_DELAY,
            ticks: 0,
        })
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How long to wait before the next `tick`.
    pub fn next_delay(&self) -> Duration {
        self.next_delay
    }

    /// Number of ticks performed so far. Changes on every tick.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The prefix of the current phrase that is on screen.
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn tick(&mut self) -> Duration {
        self.ticks = self.ticks.wrapping_add(1);
        self.next_delay = self.step();
        self.next_delay
    }

    fn step(&mut self) -> Duration {
        let len = self.current_phrase().chars().count();

        match self.phase {
            Phase::Typing => {
                self.char_index = (self.char_index + 1).min(len);
                if self.char_index == len {
                    self.phase = Phase::Deleting;
                    HOLD_FULL
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::Typing;
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    HOLD_EMPTY
                } else {
                    DELETE_DELAY
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn empty_phrase_list_is_rejected() {
        let result = Typewriter::new(Vec::<String>::new());
        assert_eq!(result, Err(TypingError::NoPhrases));
    }

    #[test]
    fn blank_phrases_are_dropped() {
        let result = Typewriter::new(["", "   "]);
        assert_eq!(result, Err(TypingError::NoPhrases));

        let writer = Typewriter::new(["", "Rust"]).expect("one usable phrase");
        assert_eq!(writer.current_phrase(), "Rust");
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut writer = Typewriter::new(["ab", "c"]).expect("valid phrases");
        let mut trace = Vec::new();

        for _ in 0..7 {
            let delay = writer.tick();
            trace.push((writer.text().to_string(), delay));
        }
        assert_eq!(writer.phase(), Phase::Typing);

        assert_eq!(
            trace,
            vec![
                ("a".to_string(), TYPE_DELAY),
                ("ab".to_string(), HOLD_FULL),
                ("a".to_string(), DELETE_DELAY),
                (String::new(), HOLD_EMPTY),
                ("c".to_string(), HOLD_FULL),
                (String::new(), HOLD_EMPTY),
                ("a".to_string(), TYPE_DELAY),
            ]
        );
    }

    #[test]
    fn first_tick_waits_for_the_start_delay() {
        let mut writer = Typewriter::new(["go"]).expect("valid phrase");
        assert_eq!(writer.next_delay(), START_DELAY);
        assert_eq!(writer.text(), "");

        writer.tick();
        assert_eq!(writer.next_delay(), TYPE_DELAY);
        assert_eq!(writer.ticks(), 1);
    }

    #[test]
    fn multibyte_phrases_advance_by_character() {
        let mut writer = Typewriter::new(["héllo"]).expect("valid phrase");
        writer.tick();
        writer.tick();
        assert_eq!(writer.text(), "hé");
    }

    fn phrase_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z é]{0,12}", 1..5)
            .prop_filter("needs a non-blank phrase", |phrases| {
                phrases.iter().any(|phrase| !phrase.trim().is_empty())
            })
    }

    proptest! {
        #[test]
        fn displayed_text_is_always_a_prefix(phrases in phrase_list(), steps in 0usize..400) {
            let mut writer = Typewriter::new(phrases).expect("filtered to be valid");
            for _ in 0..steps {
                writer.tick();
                prop_assert!(writer.current_phrase().starts_with(writer.text()));
            }
        }

        #[test]
        fn every_phrase_is_visited_in_order(phrases in phrase_list()) {
            let usable: Vec<String> = phrases
                .iter()
                .filter(|phrase| !phrase.trim().is_empty())
                .cloned()
                .collect();
            let mut writer = Typewriter::new(phrases).expect("filtered to be valid");
            let mut visited = vec![writer.current_phrase().to_string()];

            while visited.len() <= usable.len() {
                if writer.tick() == HOLD_EMPTY {
                    visited.push(writer.current_phrase().to_string());
                }
            }

            let mut expected = usable.clone();
            expected.push(usable[0].clone());
            prop_assert_eq!(visited, expected);
        }
    }
}
