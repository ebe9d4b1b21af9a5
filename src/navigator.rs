use crate::sections::SectionId;

/// Something that can bring a section's anchor into view.
pub trait ScrollTarget {
    /// Smoothly scrolls the section's anchor into view.
    /// Returns `false`, without scrolling, when the anchor does not exist.
    fn scroll_into_view(&self, id: SectionId) -> bool;
}

/// Scrolls to `id` and then runs `close_menu`.
///
/// Nothing happens when the section has no anchor: no scroll and `close_menu`
/// is never called.
pub fn navigate<F>(target: &impl ScrollTarget, id: SectionId, close_menu: F) -> bool
where
    F: FnOnce(),
{
    if !target.scroll_into_view(id) {
        return false;
    }
    close_menu();
    true
}
