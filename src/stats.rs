use std::time::Duration;

use thiserror::Error;

/// Total running time of one counter animation.
pub const COUNT_DURATION: Duration = Duration::from_millis(2_000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatParseError {
    #[error("stat text {0:?} does not start with a number")]
    NotNumeric(String),
    #[error("stat text {0:?} has a zero target")]
    Zero(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSuffix {
    None,
    Plus,
    Percent,
}

impl StatSuffix {
    fn detect(text: &str) -> Self {
        if text.contains('+') {
            Self::Plus
        } else if text.contains('%') {
            Self::Percent
        } else {
            Self::None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Plus => "+",
            Self::Percent => "%",
        }
    }

    /// Increment per tick. Percentages count by five; the value has no
    /// meaning beyond keeping short percentage runs from crawling.
    pub fn step(self) -> u32 {
        match self {
            Self::Percent => 5,
            Self::None | Self::Plus => 1,
        }
    }
}

/// A badge's final value as written in the page, e.g. `50+` or `99%`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTarget {
    text: String,
    value: u32,
    suffix: StatSuffix,
}

impl StatTarget {
    /// Reads the leading integer the way `parseInt` does and keeps the
    /// original text so the final frame matches it exactly.
    pub fn parse(text: &str) -> Result<Self, StatParseError> {
        let trimmed = text.trim();
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        let value: u32 = trimmed[..digits_end]
            .parse()
            .map_err(|_| StatParseError::NotNumeric(text.to_string()))?;

        if value == 0 {
            return Err(StatParseError::Zero(text.to_string()));
        }

        Ok(Self {
            text: text.to_string(),
            value,
            suffix: StatSuffix::detect(text),
        })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn suffix(&self) -> StatSuffix {
        self.suffix
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterTick {
    Running(String),
    Finished(String),
}

impl CounterTick {
    pub fn text(&self) -> &str {
        match self {
            Self::Running(text) | Self::Finished(text) => text,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// One counting run from zero up to a [`StatTarget`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterRun {
    target: StatTarget,
    current: u32,
    finished: bool,
}

impl CounterRun {
    pub fn new(target: StatTarget) -> Self {
        Self {
            target,
            current: 0,
            finished: false,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn target(&self) -> &StatTarget {
        &self.target
    }

    /// Time between ticks: the whole run spans [`COUNT_DURATION`].
    pub fn interval(&self) -> Duration {
        let step = f64::from(self.target.suffix.step());
        let ticks = f64::from(self.target.value) / step;
        let millis = COUNT_DURATION.as_secs_f64() * 1_000.0 / ticks;
        Duration::from_millis(millis.round().max(1.0) as u64)
    }

    pub fn text(&self) -> String {
        if self.finished {
            return self.target.text.clone();
        }

        format!("{}{}", self.current, self.target.suffix.as_str())
    }

    pub fn tick(&mut self) -> CounterTick {
        if self.finished {
            return CounterTick::Finished(self.target.text.clone());
        }

        let next = self.current.saturating_add(self.target.suffix.step());
        if next >= self.target.value {
            self.current = self.target.value;
            self.finished = true;
            return CounterTick::Finished(self.target.text.clone());
        }

        self.current = next;
        CounterTick::Running(self.text())
    }
}
