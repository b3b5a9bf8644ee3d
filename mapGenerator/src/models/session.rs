//! In-process model of the click handler embedded in the generated page.
//!
//! The browser owns the real marker state. This type follows the same
//! transitions so the behavior of the emitted script can be reasoned about and
//! tested without a JavaScript runtime.

use super::coordinate::Coordinate;
use super::marker::MarkerRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMode {
    Pickup,
    Destination,
}

impl ClickMode {
    /// String value the script stores in `currentMode`.
    pub fn as_js(&self) -> &'static str {
        match self {
            ClickMode::Pickup => "pickup",
            ClickMode::Destination => "destination",
        }
    }

    pub fn role(&self) -> MarkerRole {
        match self {
            ClickMode::Pickup => MarkerRole::Pickup,
            ClickMode::Destination => MarkerRole::Destination,
        }
    }

    // Destination is terminal
    pub fn next(&self) -> ClickMode {
        ClickMode::Destination
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub role: MarkerRole,
    pub position: Coordinate,
    pub popup: &'static str,
}

#[derive(Debug, Clone)]
pub struct ClickSession {
    mode: ClickMode,
    pickup: Option<PlacedMarker>,
    destination: Option<PlacedMarker>,
}

impl Default for ClickSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickSession {
    pub fn new() -> Self {
        Self {
            mode: ClickMode::Pickup,
            pickup: None,
            destination: None,
        }
    }

    /// Applies one map click and returns the role of the marker it placed.
    pub fn click(&mut self, at: Coordinate) -> MarkerRole {
        let role = self.mode.role();
        let marker = PlacedMarker {
            role,
            position: at,
            popup: role.popup_label(),
        };

        // Assigning the slot drops the previous marker of the same role
        match role {
            MarkerRole::Pickup => self.pickup = Some(marker),
            MarkerRole::Destination => self.destination = Some(marker),
        }
        self.mode = self.mode.next();

        role
    }

    pub fn mode(&self) -> ClickMode {
        self.mode
    }

    pub fn pickup(&self) -> Option<&PlacedMarker> {
        self.pickup.as_ref()
    }

    pub fn destination(&self) -> Option<&PlacedMarker> {
        self.destination.as_ref()
    }

    pub fn markers(&self) -> Vec<&PlacedMarker> {
        self.pickup.iter().chain(self.destination.iter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_pickup_mode_without_markers() {
        let session = ClickSession::new();
        assert_eq!(session.mode(), ClickMode::Pickup);
        assert!(session.markers().is_empty());
    }

    #[test]
    fn test_first_click_places_pickup_and_advances() {
        let mut session = ClickSession::new();
        let c1 = Coordinate::new(7.07, 125.61);

        assert_eq!(session.click(c1), MarkerRole::Pickup);
        assert_eq!(session.mode(), ClickMode::Destination);
        assert_eq!(session.markers().len(), 1);
        assert_eq!(session.pickup().unwrap().position, c1);
        assert!(session.destination().is_none());
    }

    #[test]
    fn test_second_click_places_destination_keeps_pickup() {
        let mut session = ClickSession::new();
        let c1 = Coordinate::new(7.07, 125.61);
        let c2 = Coordinate::new(7.09, 125.63);

        session.click(c1);
        assert_eq!(session.click(c2), MarkerRole::Destination);

        assert_eq!(session.pickup().unwrap().position, c1);
        assert_eq!(session.destination().unwrap().position, c2);
        assert_eq!(session.destination().unwrap().popup, "<b>🎯 Destination</b>");
        assert_eq!(session.mode(), ClickMode::Destination);
    }

    #[test]
    fn test_further_clicks_replace_destination_only() {
        let mut session = ClickSession::new();
        let c1 = Coordinate::new(7.07, 125.61);
        let c2 = Coordinate::new(7.09, 125.63);
        let c3 = Coordinate::new(7.11, 125.58);

        session.click(c1);
        session.click(c2);
        assert_eq!(session.click(c3), MarkerRole::Destination);

        assert_eq!(session.markers().len(), 2);
        assert_eq!(session.pickup().unwrap().position, c1);
        assert_eq!(session.destination().unwrap().position, c3);
        assert_eq!(session.mode(), ClickMode::Destination);
    }

    #[test]
    fn test_mode_strings_match_script() {
        assert_eq!(ClickMode::Pickup.as_js(), "pickup");
        assert_eq!(ClickMode::Destination.as_js(), "destination");
    }
}
