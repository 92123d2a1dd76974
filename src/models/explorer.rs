//! Explorer-related data types for the file index UI.

use panview_core::Listing;

use super::AppRoute;

/// Loading status of the current drive's manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Manifest loaded into the listing
    Ready,
    /// Fetch or parse failed; message is shown to the user
    Failed(String),
}

/// Listing of one drive together with its display title.
#[derive(Clone, Debug, Default)]
pub struct DriveView {
    /// Drive this listing was loaded for
    pub drive: usize,
    /// Title from the manifest, or the configured drive name
    pub title: String,
    pub listing: Listing,
}

/// Numbering of manifest loads.
///
/// Loads can finish out of order. Only the most recently started load may
/// publish its result, and only while the route still shows its drive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    /// Start a load and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether the load holding `ticket` for `drive` may publish under `route`.
    pub fn accepts(&self, ticket: u64, drive: usize, route: &AppRoute) -> bool {
        ticket == self.latest && route.drive == drive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_load_for_previous_drive_is_dropped() {
        let mut loads = LoadSequence::default();

        // Switch to uncached drive 1, then straight back to cached drive 0.
        let slow = loads.begin();
        let fast = loads.begin();
        let route = AppRoute::browse(0, "/");

        assert!(loads.accepts(fast, 0, &route));
        assert!(!loads.accepts(slow, 1, &route));
    }

    #[test]
    fn test_load_for_other_drive_is_dropped() {
        let mut loads = LoadSequence::default();
        let ticket = loads.begin();

        assert!(loads.accepts(ticket, 2, &AppRoute::browse(2, "/music")));
        assert!(!loads.accepts(ticket, 2, &AppRoute::browse(0, "/")));
    }

    #[test]
    fn test_refresh_supersedes_earlier_load() {
        let mut loads = LoadSequence::default();
        let first = loads.begin();
        let refresh = loads.begin();
        let route = AppRoute::browse(0, "/");

        assert!(!loads.accepts(first, 0, &route));
        assert!(loads.accepts(refresh, 0, &route));
    }
}
