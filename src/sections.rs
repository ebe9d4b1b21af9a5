use std::fmt;

/// Vertical viewport offset a section must straddle to count as active.
/// Sits just below the fixed navigation bar.
pub const PROBE_LINE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Resume,
    Contact,
}

impl SectionId {
    /// Every section, in page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Resume,
        SectionId::Contact,
    ];

    /// Sections linked from the footer.
    pub const QUICK_LINKS: [SectionId; 4] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Element id of the section's anchor.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Resume => "resume",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Resume => "Resume",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Viewport-relative bounding box of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Full-width box spanning `top..bottom`.
    pub fn vertical(top: f64, bottom: f64) -> Self {
        Self {
            top,
            bottom,
            height: bottom - top,
            ..Default::default()
        }
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Looks up where a section's anchor currently sits in the viewport.
pub trait AnchorLookup {
    /// `None` when the anchor is not in the document.
    fn bounding_rect(&self, id: SectionId) -> Option<Rect>;
}

impl<F> AnchorLookup for F
where
    F: Fn(SectionId) -> Option<Rect>,
{
    fn bounding_rect(&self, id: SectionId) -> Option<Rect> {
        self(id)
    }
}

/// First section, in the given order, whose anchor straddles `probe`.
/// Sections without an anchor are skipped.
pub fn find_active(
    sections: &[SectionId],
    probe: f64,
    lookup: &impl AnchorLookup,
) -> Option<SectionId> {
    sections.iter().copied().find(|&id| {
        lookup
            .bounding_rect(id)
            .is_some_and(|rect| rect.straddles(probe))
    })
}

/// Tracks the active section across scroll events.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    sections: Vec<SectionId>,
    probe: f64,
    active: SectionId,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(SectionId::ALL.to_vec(), PROBE_LINE)
    }
}

impl SectionTracker {
    pub fn new(sections: Vec<SectionId>, probe: f64) -> Self {
        let active = sections.first().copied().unwrap_or_default();
        Self {
            sections,
            probe,
            active,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Rescans the sections, keeping the previous value when nothing matches.
    /// Returns the new section only when it changed.
    pub fn update(&mut self, lookup: &impl AnchorLookup) -> Option<SectionId> {
        let found = find_active(&self.sections, self.probe, lookup)?;
        if found == self.active {
            return None;
        }
        self.active = found;
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout(id: SectionId) -> Option<Rect> {
        match id {
            SectionId::Home => Some(Rect::vertical(200.0, 900.0)),
            SectionId::About => Some(Rect::vertical(50.0, 150.0)),
            SectionId::Skills => Some(Rect::vertical(-50.0, 90.0)),
            _ => None,
        }
    }

    #[test]
    fn test_first_match_wins() {
        let sections = [SectionId::Home, SectionId::About, SectionId::Skills];
        let found = find_active(&sections, PROBE_LINE, &sample_layout);
        assert_eq!(found, Some(SectionId::About));
    }

    #[test]
    fn test_overlap_resolves_to_page_order() {
        let lookup = |id: SectionId| match id {
            SectionId::Skills => Some(Rect::vertical(0.0, 200.0)),
            SectionId::Projects => Some(Rect::vertical(90.0, 400.0)),
            _ => None,
        };
        let found = find_active(&SectionId::ALL, PROBE_LINE, &lookup);
        assert_eq!(found, Some(SectionId::Skills));
    }

    #[test]
    fn test_probe_edges_inclusive() {
        let lookup = |id: SectionId| match id {
            SectionId::Resume => Some(Rect::vertical(100.0, 500.0)),
            _ => None,
        };
        assert_eq!(
            find_active(&SectionId::ALL, PROBE_LINE, &lookup),
            Some(SectionId::Resume)
        );
        let lookup = |id: SectionId| match id {
            SectionId::Resume => Some(Rect::vertical(-300.0, 100.0)),
            _ => None,
        };
        assert_eq!(
            find_active(&SectionId::ALL, PROBE_LINE, &lookup),
            Some(SectionId::Resume)
        );
    }

    #[test]
    fn test_missing_anchors_skipped() {
        let lookup = |id: SectionId| match id {
            SectionId::Contact => Some(Rect::vertical(20.0, 800.0)),
            _ => None,
        };
        assert_eq!(
            find_active(&SectionId::ALL, PROBE_LINE, &lookup),
            Some(SectionId::Contact)
        );
        let nothing = |_: SectionId| -> Option<Rect> { None };
        assert_eq!(find_active(&SectionId::ALL, PROBE_LINE, &nothing), None);
    }

    #[test]
    fn test_tracker_retains_on_no_match() {
        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.active(), SectionId::Home);

        assert_eq!(tracker.update(&sample_layout), Some(SectionId::About));
        assert_eq!(tracker.active(), SectionId::About);

        // scrolled into a gap between sections
        let gap = |_: SectionId| Some(Rect::vertical(400.0, 600.0));
        assert_eq!(tracker.update(&gap), None);
        assert_eq!(tracker.active(), SectionId::About);
        assert_eq!(tracker.update(&gap), None);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_tracker_reports_only_changes() {
        let mut tracker = SectionTracker::default();
        let home = |id: SectionId| match id {
            SectionId::Home => Some(Rect::vertical(0.0, 800.0)),
            _ => None,
        };
        assert_eq!(tracker.update(&home), None);
        assert_eq!(tracker.update(&sample_layout), Some(SectionId::About));
        assert_eq!(tracker.update(&sample_layout), None);
    }

    #[test]
    fn test_section_names() {
        for id in SectionId::ALL {
            assert_eq!(id.label().to_lowercase(), id.anchor());
            assert_eq!(id.to_string(), id.anchor());
        }
    }
}
