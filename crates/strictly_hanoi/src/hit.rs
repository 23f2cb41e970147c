//! Pointer-to-peg hit testing.

use crate::{PegId, Point, Rect};
use tracing::instrument;

/// Finds the peg whose area contains `point`.
///
/// Areas are given in X, Y, Z order. If areas overlap the leftmost peg wins.
#[instrument]
pub fn hit_test(point: Point, areas: &[Rect; 3]) -> Option<PegId> {
    PegId::ALL
        .into_iter()
        .find(|peg| areas[peg.index()].contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas() -> [Rect; 3] {
        [
            Rect::new(58, 140, 80, 100),
            Rect::new(258, 140, 80, 100),
            Rect::new(458, 140, 80, 100),
        ]
    }

    #[test]
    fn test_hits_each_peg() {
        let areas = areas();
        assert_eq!(hit_test(Point::new(98, 200), &areas), Some(PegId::X));
        assert_eq!(hit_test(Point::new(298, 200), &areas), Some(PegId::Y));
        assert_eq!(hit_test(Point::new(498, 200), &areas), Some(PegId::Z));
    }

    #[test]
    fn test_miss_between_pegs() {
        let areas = areas();
        assert_eq!(hit_test(Point::new(200, 200), &areas), None);
        assert_eq!(hit_test(Point::new(98, 20), &areas), None);
        assert_eq!(hit_test(Point::new(98, 240), &areas), None);
    }

    #[test]
    fn test_overlap_prefers_leftmost() {
        let areas = [
            Rect::new(0, 0, 100, 100),
            Rect::new(50, 0, 100, 100),
            Rect::new(50, 0, 100, 100),
        ];
        assert_eq!(hit_test(Point::new(75, 50), &areas), Some(PegId::X));
        assert_eq!(hit_test(Point::new(120, 50), &areas), Some(PegId::Y));
    }
}
