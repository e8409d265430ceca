use std::time::Duration;

/// Animation applied to a card once its staggered slot comes up.
pub const STAGGER_ANIMATION: &str = "fadeInUp 0.6s ease-out forwards";

/// Hero text children fade in one after another once the page has loaded.
pub const HERO_STAGGER: Stagger = Stagger {
    step: Duration::from_millis(200),
    base: Duration::from_millis(500),
};

/// Intersection settings handed to the browser observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    /// Sections reveal when 10% is visible, about 50px before they fully enter.
    pub const SECTION: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };

    pub const STAT: Self = Self {
        threshold: 0.5,
        root_margin: "0px",
    };
}

/// Role of an observed container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealGroup {
    Plain,
    Skills,
    Projects,
}

impl RevealGroup {
    pub fn stagger(self) -> Option<Stagger> {
        let step = match self {
            Self::Plain => return None,
            Self::Skills => Duration::from_millis(50),
            Self::Projects => Duration::from_millis(150),
        };

        Some(Stagger {
            step,
            base: Duration::ZERO,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub step: Duration,
    pub base: Duration,
}

impl Stagger {
    pub fn delay(self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base.saturating_add(self.step.saturating_mul(index))
    }

    pub fn schedule(self, count: usize) -> Vec<Duration> {
        (0..count).map(|index| self.delay(index)).collect()
    }
}

/// One-way visibility flag: once revealed, leaving the viewport changes nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feeds one intersection report. Returns `true` only on the first reveal.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }

        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_groups_do_not_stagger() {
        assert_eq!(RevealGroup::Plain.stagger(), None);
    }

    #[test]
    fn skill_and_project_groups_stagger_by_index() {
        let skills = RevealGroup::Skills.stagger().expect("skills stagger");
        let projects = RevealGroup::Projects.stagger().expect("projects stagger");

        assert_eq!(
            skills.schedule(4),
            vec![
                Duration::ZERO,
                Duration::from_millis(50),
                Duration::from_millis(100),
                Duration::from_millis(150),
            ]
        );
        assert_eq!(projects.delay(3), Duration::from_millis(450));
    }

    #[test]
    fn hero_stagger_starts_after_base_delay() {
        assert_eq!(
            HERO_STAGGER.schedule(3),
            vec![
                Duration::from_millis(500),
                Duration::from_millis(700),
                Duration::from_millis(900),
            ]
        );
    }

    #[test]
    fn reveal_is_one_way() {
        let mut state = RevealState::default();

        assert!(!state.observe(false));
        assert!(!state.is_revealed());
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert!(state.is_revealed());
    }
}
