//! Scroll-driven rules. Kept free of DOM access so they can be checked in
//! isolation; the components feed them measurements.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Solid,
    Frosted,
}

impl HeaderStyle {
    pub fn background(self) -> &'static str {
        match self {
            HeaderStyle::Solid => "#ffffff",
            HeaderStyle::Frosted => "rgba(255, 255, 255, 0.95)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        match self {
            HeaderStyle::Solid => "none",
            HeaderStyle::Frosted => "blur(10px)",
        }
    }

    pub fn css(self) -> String {
        format!(
            "background-color: {}; backdrop-filter: {};",
            self.background(),
            self.backdrop_filter()
        )
    }
}

pub fn header_style(scroll_y: f64) -> HeaderStyle {
    if scroll_y > config::HEADER_SCROLL_THRESHOLD_PX {
        HeaderStyle::Frosted
    } else {
        HeaderStyle::Solid
    }
}

/// Vertical span of a page section with an `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section containing a point just below the top of the viewport.
pub fn current_section(sections: &[SectionSpan], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + config::ACTIVE_SECTION_OFFSET_PX;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

pub fn nav_href_matches(href: &str, section: Option<&str>) -> bool {
    match section {
        Some(id) => href.strip_prefix('#') == Some(id),
        None => false,
    }
}

/// Reveal delay of the `ordinal`-th fade-in element within its section.
pub fn stagger_delay(ordinal: usize) -> u32 {
    ordinal as u32 * config::FADE_STAGGER_MS
}

/// Scroll offset that lands an anchor target just under the fixed header.
pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height - config::ANCHOR_EXTRA_OFFSET_PX
}

pub fn is_desktop_width(inner_width: f64) -> bool {
    inner_width > config::MOBILE_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionSpan> {
        [("home", 0.0, 600.0), ("services", 600.0, 800.0), ("contact", 1400.0, 500.0)]
            .into_iter()
            .map(|(id, top, height)| SectionSpan {
                id: id.into(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn header_switches_past_threshold() {
        assert_eq!(header_style(0.0), HeaderStyle::Solid);
        assert_eq!(header_style(100.0), HeaderStyle::Solid);
        assert_eq!(header_style(100.5), HeaderStyle::Frosted);
        assert_eq!(
            HeaderStyle::Frosted.css(),
            "background-color: rgba(255, 255, 255, 0.95); backdrop-filter: blur(10px);"
        );
    }

    #[test]
    fn active_section_uses_offset_probe() {
        let sections = sections();
        assert_eq!(current_section(&sections, 0.0), Some("home"));
        assert_eq!(current_section(&sections, 499.0), Some("home"));
        assert_eq!(current_section(&sections, 500.0), Some("services"));
        assert_eq!(current_section(&sections, 1299.0), Some("services"));
        assert_eq!(current_section(&sections, 1300.0), Some("contact"));
        assert_eq!(current_section(&sections, 1800.0), None);
    }

    #[test]
    fn nav_links_match_only_their_section() {
        assert!(nav_href_matches("#services", Some("services")));
        assert!(!nav_href_matches("#services", Some("contact")));
        assert!(!nav_href_matches("services", Some("services")));
        assert!(!nav_href_matches("#services", None));
    }

    #[test]
    fn stagger_and_anchor_offsets() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 300);
        assert_eq!(anchor_scroll_top(1000.0, 80.0), 900.0);
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(!is_desktop_width(768.0));
        assert!(is_desktop_width(769.0));
    }
}
