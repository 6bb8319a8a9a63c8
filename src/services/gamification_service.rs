use serde::Serialize;

use crate::data::catalog::ECO_WARRIOR_BADGE;
use crate::models::tourist::{Badge, Tourist};

const HOMESTAY_POINTS: u32 = 25;
const HANDICRAFT_POINTS: u32 = 20;
const GUIDE_POINTS: u32 = 15;
const TRANSPORT_POINTS: u32 = 30;

/// Points needed before the Eco Warrior badge unlocks.
pub const ECO_WARRIOR_THRESHOLD: u32 = 1000;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EcoActionOutcome {
    pub tourist: Tourist,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awarded_badge: Option<Badge>,
}

pub struct GamificationService;

impl GamificationService {
    /// Points earned for an eco-friendly action. Unknown kinds earn nothing.
    pub fn points_for_action(action: &str) -> Option<u32> {
        match action {
            "homestay" => Some(HOMESTAY_POINTS),
            "handicraft" => Some(HANDICRAFT_POINTS),
            "guide" => Some(GUIDE_POINTS),
            "transport" => Some(TRANSPORT_POINTS),
            _ => None,
        }
    }

    /// Apply an eco action to a tourist, returning the updated state and
    /// any badge that unlocked. Unrecognized actions leave the state
    /// untouched rather than failing.
    ///
    /// The Eco Warrior award fires only on the crossing from below the
    /// threshold to at-or-above it, and the badge-held check (by badge id)
    /// keeps a crossing from ever appending a duplicate.
    pub fn apply_eco_action(
        tourist: &Tourist,
        action: &str,
        badge_catalog: &[Badge],
    ) -> EcoActionOutcome {
        let points = match Self::points_for_action(action) {
            Some(points) => points,
            None => {
                return EcoActionOutcome {
                    tourist: tourist.clone(),
                    awarded_badge: None,
                }
            }
        };

        let previous_total = tourist.total_points;
        let mut updated = tourist.clone();
        updated.total_points += points;

        let mut awarded_badge = None;
        if previous_total < ECO_WARRIOR_THRESHOLD && updated.total_points >= ECO_WARRIOR_THRESHOLD {
            if let Some(badge) = badge_catalog.iter().find(|b| b.name == ECO_WARRIOR_BADGE) {
                if !updated.has_badge(&badge.id) {
                    updated.badges.push(badge.clone());
                    awarded_badge = Some(badge.clone());
                }
            }
        }

        EcoActionOutcome {
            tourist: updated,
            awarded_badge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn eco_warrior_badge() -> Badge {
        Badge {
            id: "1".to_string(),
            name: ECO_WARRIOR_BADGE.to_string(),
            icon: "\u{1F331}".to_string(),
            description: "Earned 1000+ eco points".to_string(),
            date_earned: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    fn tourist(total_points: u32, badges: Vec<Badge>) -> Tourist {
        Tourist {
            id: "1".to_string(),
            name: "Test Tourist".to_string(),
            eco_score: 0,
            badges,
            total_points,
        }
    }

    #[test]
    fn test_action_point_values() {
        assert_eq!(GamificationService::points_for_action("homestay"), Some(25));
        assert_eq!(GamificationService::points_for_action("handicraft"), Some(20));
        assert_eq!(GamificationService::points_for_action("guide"), Some(15));
        assert_eq!(GamificationService::points_for_action("transport"), Some(30));
        assert_eq!(GamificationService::points_for_action("teleport"), None);
    }

    #[test]
    fn test_unknown_action_is_a_noop() {
        let state = tourist(500, vec![]);

        let outcome = GamificationService::apply_eco_action(&state, "teleport", &[eco_warrior_badge()]);

        assert_eq!(outcome.tourist, state);
        assert!(outcome.awarded_badge.is_none());
    }

    #[test]
    fn test_points_accumulate_below_threshold() {
        let state = tourist(100, vec![]);

        let outcome = GamificationService::apply_eco_action(&state, "guide", &[eco_warrior_badge()]);

        assert_eq!(outcome.tourist.total_points, 115);
        assert!(outcome.tourist.badges.is_empty());
        assert!(outcome.awarded_badge.is_none());
    }

    #[test]
    fn test_badge_awarded_on_threshold_crossing() {
        // 980 + 25 crosses 1000 and unlocks Eco Warrior.
        let state = tourist(980, vec![]);

        let outcome = GamificationService::apply_eco_action(&state, "homestay", &[eco_warrior_badge()]);

        assert_eq!(outcome.tourist.total_points, 1005);
        assert_eq!(outcome.tourist.badges.len(), 1);
        assert_eq!(outcome.tourist.badges[0].name, ECO_WARRIOR_BADGE);
        assert_eq!(outcome.awarded_badge.as_ref().unwrap().name, ECO_WARRIOR_BADGE);
    }

    #[test]
    fn test_badge_never_duplicated_after_award() {
        let first = GamificationService::apply_eco_action(
            &tourist(980, vec![]),
            "homestay",
            &[eco_warrior_badge()],
        );
        assert_eq!(first.tourist.total_points, 1005);

        let second = GamificationService::apply_eco_action(
            &first.tourist,
            "homestay",
            &[eco_warrior_badge()],
        );

        assert_eq!(second.tourist.total_points, 1030);
        assert_eq!(second.tourist.badges.len(), 1);
        assert!(second.awarded_badge.is_none());
    }

    #[test]
    fn test_no_reaward_once_above_threshold() {
        // Already over the threshold and already holding the badge: more
        // actions keep earning points but never re-award.
        let state = tourist(2000, vec![eco_warrior_badge()]);

        let outcome = GamificationService::apply_eco_action(&state, "transport", &[eco_warrior_badge()]);

        assert_eq!(outcome.tourist.total_points, 2030);
        assert_eq!(outcome.tourist.badges.len(), 1);
        assert!(outcome.awarded_badge.is_none());
    }

    #[test]
    fn test_no_award_without_threshold_crossing() {
        // Already above 1000 before the action, badge not held: the award
        // only fires on the crossing itself, so nothing unlocks.
        let state = tourist(1500, vec![]);

        let outcome = GamificationService::apply_eco_action(&state, "homestay", &[eco_warrior_badge()]);

        assert_eq!(outcome.tourist.total_points, 1525);
        assert!(outcome.tourist.badges.is_empty());
        assert!(outcome.awarded_badge.is_none());
    }

    #[test]
    fn test_missing_catalog_badge_awards_nothing() {
        let state = tourist(980, vec![]);

        let outcome = GamificationService::apply_eco_action(&state, "homestay", &[]);

        assert_eq!(outcome.tourist.total_points, 1005);
        assert!(outcome.tourist.badges.is_empty());
        assert!(outcome.awarded_badge.is_none());
    }
}
