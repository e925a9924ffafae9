//! Nearest-point lookup for the hover highlight.

use crate::points::Point;

/// Index of the point nearest to `cursor_world` by Euclidean distance.
///
/// Linear scan over squared distances; ties keep the earliest index, so the
/// result is deterministic for a fixed point set and query. O(N) per call,
/// which holds up at the point counts this viewer is configured for.
pub(crate) fn find_hover_point(points: &[Point], cursor_world: Point) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, point) in points.iter().enumerate() {
        let dx = point.x - cursor_world.x;
        let dy = point.y - cursor_world.y;
        let dist_sq = dx * dx + dy * dy;
        match best {
            Some((_, best_sq)) if dist_sq >= best_sq => {}
            _ => best = Some((index, dist_sq)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_nearest_point() {
        assert_eq!(find_hover_point(&[], Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn picks_the_closest_of_three() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        assert_eq!(find_hover_point(&points, Point::new(1.0, 1.0)), Some(0));
    }

    #[test]
    fn repeated_queries_agree() {
        let points = [
            Point::new(3.0, 4.0),
            Point::new(-2.0, 1.0),
            Point::new(0.5, 0.5),
        ];
        let query = Point::new(0.4, 0.6);
        let first = find_hover_point(&points, query);
        assert_eq!(find_hover_point(&points, query), first);
    }

    #[test]
    fn ties_keep_the_earliest_index() {
        let points = [
            Point::new(-1.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(-1.0, 0.0),
        ];
        assert_eq!(find_hover_point(&points, Point::new(0.0, 0.0)), Some(0));
    }

    #[test]
    fn single_point_wins_from_anywhere() {
        let points = [Point::new(100.0, 100.0)];
        assert_eq!(find_hover_point(&points, Point::new(100.0, 100.0)), Some(0));
        assert_eq!(find_hover_point(&points, Point::new(500.0, 500.0)), Some(0));
    }
}
