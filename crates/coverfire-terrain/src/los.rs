//! Line-of-sight between a shooter's muzzle and the player.

use coverfire_core::types::Position;

use crate::obstacles::ObstacleField;

/// Contact tolerance at the target end of the segment.
const LOS_END_EPSILON: f64 = 1e-9;

/// Check line-of-sight from `from` to `to` against every obstacle.
///
/// Returns true if no obstacle is entered before the segment reaches `to`.
/// An obstacle that only touches the target point does not block.
pub fn has_line_of_sight(field: &ObstacleField, from: &Position, to: &Position) -> bool {
    if field.is_empty() || from.distance_squared(*to) < LOS_END_EPSILON {
        return true; // Nothing to hit, or too close for anything to sit in between
    }

    match field.first_hit(*from, *to) {
        Some(t) => t >= 1.0 - LOS_END_EPSILON,
        None => true,
    }
}
