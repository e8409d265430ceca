use std::time::Duration;

/// Delay between insertion and the slide-in.
pub const ENTER_DELAY: Duration = Duration::from_millis(100);
/// Slide-out starts this long after insertion.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3_000);
/// Length of the slide-out before the node is removed.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    /// Unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStage {
    /// In the document, still off-screen.
    Entering,
    Shown,
    Leaving,
}

impl ToastStage {
    /// How long this stage lasts before the next one.
    pub fn duration(self) -> Duration {
        match self {
            Self::Entering => ENTER_DELAY,
            Self::Shown => DISMISS_AFTER.saturating_sub(ENTER_DELAY),
            Self::Leaving => EXIT_DURATION,
        }
    }

    pub fn on_screen(self) -> bool {
        matches!(self, Self::Shown)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub stage: ToastStage,
}

/// Holds at most one toast. Showing a new one evicts the old one outright,
/// there is no queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Toast>,
    issued: u64,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.issued += 1;
        let id = ToastId(self.issued);
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind,
            stage: ToastStage::Entering,
        });
        id
    }

    /// Moves the toast `id` to its next stage, removing it after `Leaving`.
    /// Returns `false` when `id` is no longer the toast in the slot.
    pub fn advance(&mut self, id: ToastId) -> bool {
        let Some(toast) = self.current.as_mut().filter(|toast| toast.id == id) else {
            return false;
        };

        let next = match toast.stage {
            ToastStage::Entering => Some(ToastStage::Shown),
            ToastStage::Shown => Some(ToastStage::Leaving),
            ToastStage::Leaving => None,
        };

        match next {
            Some(stage) => toast.stage = stage,
            None => self.current = None,
        }

        true
    }

    /// The timer the driver should arm next, if any.
    pub fn pending(&self) -> Option<(ToastId, Duration)> {
        self.current
            .as_ref()
            .map(|toast| (toast.id, toast.stage.duration()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kinds_map_to_colors_with_info_default() {
        assert_eq!(ToastKind::from_name("success").color(), "#10b981");
        assert_eq!(ToastKind::from_name("error").color(), "#ef4444");
        assert_eq!(ToastKind::from_name("warning"), ToastKind::Info);
        assert_eq!(ToastKind::default().color(), "#3b82f6");
    }

    #[test]
    fn second_show_replaces_the_first() {
        let mut slot = ToastSlot::default();
        let first = slot.show("first", ToastKind::Info);
        let second = slot.show("second", ToastKind::Error);

        let toast = slot.current().expect("one toast");
        assert_eq!(toast.id, second);
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);

        assert!(!slot.advance(first));
        assert_eq!(slot.current().map(|toast| toast.stage), Some(ToastStage::Entering));
    }

    #[test]
    fn lifecycle_follows_enter_hold_exit_timing() {
        let mut slot = ToastSlot::default();
        let id = slot.show("saved", ToastKind::Success);
        let mut elapsed = Duration::ZERO;
        let mut timeline = Vec::new();

        while let Some((pending, delay)) = slot.pending() {
            assert_eq!(pending, id);
            elapsed += delay;
            assert!(slot.advance(pending));
            timeline.push((elapsed, slot.current().map(|toast| toast.stage)));
        }

        assert_eq!(
            timeline,
            vec![
                (Duration::from_millis(100), Some(ToastStage::Shown)),
                (Duration::from_millis(3_000), Some(ToastStage::Leaving)),
                (Duration::from_millis(3_300), None),
            ]
        );
    }

    #[test]
    fn replacing_mid_exit_keeps_the_new_toast() {
        let mut slot = ToastSlot::default();
        let old = slot.show("old", ToastKind::Info);
        slot.advance(old);
        slot.advance(old);

        slot.show("new", ToastKind::Success);
        assert!(!slot.advance(old));
        assert_eq!(slot.current().map(|toast| toast.message.as_str()), Some("new"));
    }
}
