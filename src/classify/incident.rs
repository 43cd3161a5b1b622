//! Room lookup and incident keyword detection.
//!
//! Unlike [`super::table::ResponseTable`], everything here matches substrings
//! of the normalized query, so `firefighter` counts as an incident.

use crate::base::responses::{INCIDENT_KEYWORDS, ROOM_LOCATIONS};

/// Detects room questions and reportable incidents in normalized queries.
#[derive(Debug, Clone)]
pub struct IncidentDetector {
    rooms: &'static [(&'static str, &'static str)],
    keywords: &'static [&'static str],
}

impl Default for IncidentDetector {
    fn default() -> Self {
        Self {
            rooms: ROOM_LOCATIONS,
            keywords: INCIDENT_KEYWORDS,
        }
    }
}

impl IncidentDetector {
    /// Describe where the first mentioned room is.
    pub fn locate_room(&self, normalized: &str) -> Option<String> {
        self.rooms
            .iter()
            .find(|(room, _)| normalized.contains(room))
            .map(|(room, location)| format!("The {} is located at {}.", title_case(room), location))
    }

    /// Whether any incident keyword appears anywhere in the query.
    pub fn is_incident(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_room() {
        let detector = IncidentDetector::default();

        assert_eq!(
            detector.locate_room("where is the bella ciao room?").as_deref(),
            Some("The Bella Ciao Room is located at B3 2nd Floor.")
        );
        assert_eq!(
            detector.locate_room("how do i get to the conference hall").as_deref(),
            Some("The Conference Hall is located at Building A, Ground Floor.")
        );
        assert_eq!(detector.locate_room("where is the cafeteria"), None);
    }

    #[test]
    fn test_room_table_order_decides() {
        let detector = IncidentDetector::default();

        assert_eq!(
            detector.locate_room("security office or bella ciao room").as_deref(),
            Some("The Bella Ciao Room is located at B3 2nd Floor.")
        );
    }

    #[test]
    fn test_is_incident_substring() {
        let detector = IncidentDetector::default();

        assert!(detector.is_incident("there is a fire"));
        assert!(detector.is_incident("the firefighter arrived"));
        assert!(detector.is_incident("i want to report something"));
        assert!(detector.is_incident("possible security breach in lab 4"));
        assert!(!detector.is_incident("what time is lunch"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bella ciao room"), "Bella Ciao Room");
    }
}
