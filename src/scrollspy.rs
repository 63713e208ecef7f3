//! Scroll-position bookkeeping behind the navigation highlight.

use crate::content::Section;

/// Height of the fixed header. Each section's top edge is pulled up by this
/// much before being compared against the scroll position, so a section
/// counts as "reached" slightly before its content passes under the header.
pub const HEADER_CLEARANCE: f64 = 100.0;

/// Picks the active section for a given scroll position.
///
/// `offsets` holds `(section, offset_top)` pairs in display order for every
/// section element currently in the document. The result is the *last*
/// section whose adjusted top edge has been scrolled past - the highlight
/// tracks the section at or above the viewport top, not the most visible
/// one. Returns `None` when no section qualifies; the caller keeps its
/// previous selection in that case.
pub fn active_section_at(scroll_y: f64, offsets: &[(Section, f64)]) -> Option<Section> {
    let mut active = None;
    for (section, offset_top) in offsets {
        if scroll_y >= offset_top - HEADER_CLEARANCE {
            active = Some(*section);
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets() -> Vec<(Section, f64)> {
        vec![
            (Section::Home, 0.0),
            (Section::Experience, 800.0),
            (Section::Projects, 1600.0),
            (Section::Skills, 2400.0),
            (Section::Contact, 3200.0),
        ]
    }

    #[test]
    fn last_section_scrolled_past_wins() {
        assert_eq!(active_section_at(0.0, &offsets()), Some(Section::Home));
        assert_eq!(
            active_section_at(1700.0, &offsets()),
            Some(Section::Projects)
        );
        assert_eq!(active_section_at(9999.0, &offsets()), Some(Section::Contact));
    }

    #[test]
    fn header_clearance_counts_a_section_as_entered_early() {
        // 50 units above the experience section's top edge is inside the
        // 100 unit clearance, so experience is already active
        assert_eq!(
            active_section_at(750.0, &offsets()),
            Some(Section::Experience)
        );
        // the boundary itself qualifies
        assert_eq!(
            active_section_at(700.0, &offsets()),
            Some(Section::Experience)
        );
        // one unit above it does not
        assert_eq!(active_section_at(699.0, &offsets()), Some(Section::Home));
    }

    #[test]
    fn no_qualifying_section_returns_none() {
        // without a section at the top of the page, a low scroll position
        // matches nothing and the previous selection must be kept
        let offsets = vec![(Section::Experience, 800.0), (Section::Projects, 1600.0)];
        assert_eq!(active_section_at(10.0, &offsets), None);
    }

    #[test]
    fn missing_sections_are_skipped() {
        // only sections with a resolvable element take part
        let offsets = vec![(Section::Home, 0.0), (Section::Skills, 2400.0)];
        assert_eq!(active_section_at(2000.0, &offsets), Some(Section::Home));
        assert_eq!(active_section_at(2350.0, &offsets), Some(Section::Skills));
    }
}
