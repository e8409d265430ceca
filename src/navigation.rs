/// Height of the fixed header; scroll targets land this far below the top.
pub const HEADER_OFFSET: f64 = 70.0;
/// Viewport line a section must straddle to count as the current one.
pub const ACTIVE_LINE: f64 = 100.0;
/// Widths above this are desktop layouts with no mobile menu.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const SCROLLED_AFTER: f64 = 50.0;
pub const PARALLAX_RATE: f64 = -0.5;

/// Position of one page section relative to the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn straddles_active_line(&self) -> bool {
        self.top <= ACTIVE_LINE && self.top + self.height > ACTIVE_LINE
    }
}

/// Id of the last section, in document order, that straddles the active line.
pub fn active_section<'a, I>(sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a SectionBounds>,
{
    sections
        .into_iter()
        .filter(|section| section.straddles_active_line() && !section.id.is_empty())
        .last()
        .map(|section| section.id.as_str())
}

/// Absolute scroll position that puts an element just below the header.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

/// Section id for an in-page anchor such as `#projects`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Absolute web links open in a new tab; `tel:`, `mailto:` and in-page
/// anchors keep their default behavior.
pub fn opens_new_tab(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn after_resize(self, viewport_width: f64) -> Self {
        if viewport_width > MOBILE_BREAKPOINT {
            self.closed()
        } else {
            self
        }
    }

    pub fn after_key(self, key: &str) -> Self {
        if key == "Escape" {
            self.closed()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn picks_the_section_straddling_the_active_line() {
        let sections = vec![
            SectionBounds::new("home", -900.0, 800.0),
            SectionBounds::new("about", -100.0, 600.0),
            SectionBounds::new("skills", 500.0, 600.0),
        ];

        assert_eq!(active_section(&sections), Some("about"));
    }

    #[test]
    fn later_sections_win_when_several_straddle() {
        let sections = vec![
            SectionBounds::new("outer", 0.0, 2_000.0),
            SectionBounds::new("inner", 50.0, 100.0),
        ];

        assert_eq!(active_section(&sections), Some("inner"));
    }

    #[test]
    fn boundaries_are_inclusive_at_top_exclusive_at_bottom() {
        let at_line = vec![SectionBounds::new("a", 100.0, 10.0)];
        assert_eq!(active_section(&at_line), Some("a"));

        let ends_at_line = vec![SectionBounds::new("a", 0.0, 100.0)];
        assert_eq!(active_section(&ends_at_line), None);
    }

    #[test]
    fn scroll_target_accounts_for_the_header() {
        assert_eq!(scroll_target(400.0, 1_000.0), 1_330.0);
    }

    #[test]
    fn anchors_need_a_hash_and_an_id() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn only_web_links_open_a_new_tab() {
        assert!(opens_new_tab("https://github.com/"));
        assert!(opens_new_tab("http://example.com"));
        assert!(!opens_new_tab("mailto:hello@example.com"));
        assert!(!opens_new_tab("tel:+917020685839"));
        assert!(!opens_new_tab("#contact"));
    }

    #[test]
    fn menu_closes_on_escape_and_wide_viewports() {
        let open = MenuState::default().toggled();
        assert!(open.is_open());
        assert!(open.after_key("Enter").is_open());
        assert!(!open.after_key("Escape").is_open());
        assert!(open.after_resize(768.0).is_open());
        assert!(!open.after_resize(769.0).is_open());
        assert!(!open.toggled().is_open());
    }

    #[test]
    fn navbar_and_parallax_follow_scroll() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert_eq!(parallax_offset(200.0), -100.0);
    }

    proptest! {
        #[test]
        fn active_section_satisfies_the_rule(
            spans in prop::collection::vec((-2_000.0f64..2_000.0, 1.0f64..1_500.0), 0..8)
        ) {
            let sections: Vec<SectionBounds> = spans
                .iter()
                .enumerate()
                .map(|(index, (top, height))| SectionBounds::new(format!("s{index}"), *top, *height))
                .collect();

            let expected = sections
                .iter()
                .rposition(|s| s.top <= ACTIVE_LINE && s.top + s.height > ACTIVE_LINE)
                .map(|index| format!("s{index}"));

            prop_assert_eq!(active_section(&sections).map(str::to_string), expected);
        }
    }
}
