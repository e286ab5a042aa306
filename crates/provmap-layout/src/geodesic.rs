//! Geodesic interpolation adapters

use geo::{Geodesic, InterpolatePoint, Point};
use provmap_domain::traits::GeodesicInterpolator;
use provmap_domain::Coordinate;

/// Interpolates along the WGS84 geodesic using the `geo` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoInterpolator;

impl GeodesicInterpolator for GeoInterpolator {
    fn interpolate(&self, from: Coordinate, to: Coordinate, count: usize) -> Vec<Coordinate> {
        let start = Point::new(from.longitude, from.latitude);
        let end = Point::new(to.longitude, to.latitude);

        fractions(count)
            .map(|ratio| {
                let p = Geodesic.point_at_ratio_between(start, end, ratio);
                Coordinate::new(p.y(), p.x())
            })
            .collect()
    }
}

/// Straight-line interpolation in degree space
///
/// Not a geodesic; used where exact, easily predicted vertices matter more
/// than the curve (tests, tiny hops).
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator;

impl GeodesicInterpolator for LinearInterpolator {
    fn interpolate(&self, from: Coordinate, to: Coordinate, count: usize) -> Vec<Coordinate> {
        fractions(count)
            .map(|ratio| {
                Coordinate::new(
                    from.latitude + (to.latitude - from.latitude) * ratio,
                    from.longitude + (to.longitude - from.longitude) * ratio,
                )
            })
            .collect()
    }
}

/// `k / (count + 1)` for `k` in `1..=count`; endpoints excluded
fn fractions(count: usize) -> impl Iterator<Item = f64> {
    let denominator = (count + 1) as f64;
    (1..=count).map(move |k| k as f64 / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Distance;

    #[test]
    fn test_fractions_exclude_endpoints() {
        let values: Vec<f64> = fractions(3).collect();
        assert_eq!(values, vec![0.25, 0.5, 0.75]);
        assert_eq!(fractions(0).count(), 0);
    }

    #[test]
    fn test_linear_interpolation() {
        let points = LinearInterpolator.interpolate(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(4.0, 8.0),
            3,
        );
        assert_eq!(
            points,
            vec![
                Coordinate::new(1.0, 2.0),
                Coordinate::new(2.0, 4.0),
                Coordinate::new(3.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_geodesic_count_and_spacing() {
        let london = Coordinate::new(51.5074, -0.1278);
        let new_york = Coordinate::new(40.7128, -74.0060);
        let points = GeoInterpolator.interpolate(london, new_york, 50);

        assert_eq!(points.len(), 50);

        let as_point = |c: Coordinate| Point::new(c.longitude, c.latitude);
        let total = Geodesic.distance(as_point(london), as_point(new_york));
        let first_leg = Geodesic.distance(as_point(london), as_point(points[0]));
        assert!((first_leg - total / 51.0).abs() < 1.0, "uneven spacing: {first_leg}");
    }

    #[test]
    fn test_geodesic_bends_north_on_transatlantic_route() {
        let london = Coordinate::new(51.5074, -0.1278);
        let new_york = Coordinate::new(40.7128, -74.0060);
        let points = GeoInterpolator.interpolate(london, new_york, 1);

        // A great circle between these cities peaks well north of both
        assert!(points[0].latitude > 51.5074);
    }

    #[test]
    fn test_geodesic_same_point() {
        let rome = Coordinate::new(41.9, 12.5);
        let points = GeoInterpolator.interpolate(rome, rome, 4);

        assert_eq!(points.len(), 4);
        for p in points {
            assert!((p.latitude - rome.latitude).abs() < 1e-9);
            assert!((p.longitude - rome.longitude).abs() < 1e-9);
        }
    }
}
