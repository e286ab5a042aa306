//! Connecting paths between consecutive points

use crate::LayoutOptions;
use provmap_domain::traits::GeodesicInterpolator;
use provmap_domain::{PathInstruction, ResolvedPoint};

/// One path per consecutive pair, in chronological order
///
/// Each path starts and ends exactly on its two points. A path is dashed
/// iff its origin point has `next_location_unknown` set; the destination's
/// flag plays no part.
pub fn build_paths<I>(
    points: &[ResolvedPoint],
    interpolator: &I,
    options: &LayoutOptions,
) -> Vec<PathInstruction>
where
    I: GeodesicInterpolator + ?Sized,
{
    points
        .windows(2)
        .enumerate()
        .map(|(from_index, pair)| {
            let (from, to) = (&pair[0], &pair[1]);

            let mut vertices = Vec::with_capacity(options.interpolation_points + 2);
            vertices.push(from.coordinate);
            vertices.extend(interpolator.interpolate(
                from.coordinate,
                to.coordinate,
                options.interpolation_points,
            ));
            vertices.push(to.coordinate);

            PathInstruction {
                from_index,
                to_index: from_index + 1,
                vertices,
                color: options.path_color.clone(),
                weight: options.path_weight,
                opacity: options.path_opacity,
                dash_array: from
                    .next_location_unknown
                    .then(|| options.unknown_dash_array.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearInterpolator;
    use provmap_domain::{Coordinate, ProvenanceEntry};

    fn point(lat: f64, lon: f64, unknown: bool) -> ResolvedPoint {
        ProvenanceEntry::at("x")
            .with_next_location_unknown(unknown)
            .resolve(Coordinate::new(lat, lon))
            .unwrap()
    }

    #[test]
    fn test_paths_touch_both_markers() {
        let points = vec![point(0.0, 0.0, false), point(10.0, 20.0, false)];
        let paths = build_paths(&points, &LinearInterpolator, &LayoutOptions::default());

        assert_eq!(paths.len(), 1);
        let vertices = &paths[0].vertices;
        assert_eq!(vertices.len(), 52);
        assert_eq!(vertices[0], Coordinate::new(0.0, 0.0));
        assert_eq!(vertices[51], Coordinate::new(10.0, 20.0));
        assert_eq!(paths[0].color, "crimson");
        assert_eq!(paths[0].weight, 4);
    }

    #[test]
    fn test_dash_follows_origin_flag() {
        let points = vec![
            point(0.0, 0.0, true),
            point(1.0, 1.0, false),
            point(2.0, 2.0, true),
            point(3.0, 3.0, true),
        ];
        let paths = build_paths(&points, &LinearInterpolator, &LayoutOptions::default());

        let dashed: Vec<_> = paths.iter().map(PathInstruction::is_dashed).collect();
        assert_eq!(dashed, vec![true, false, true]);
        assert_eq!(paths[0].dash_array.as_deref(), Some("5,10"));
    }

    #[test]
    fn test_no_paths_for_fewer_than_two_points() {
        let options = LayoutOptions::default();
        assert!(build_paths(&[], &LinearInterpolator, &options).is_empty());
        assert!(build_paths(&[point(0.0, 0.0, true)], &LinearInterpolator, &options).is_empty());
    }

    #[test]
    fn test_zero_interpolation_points() {
        let options = LayoutOptions {
            interpolation_points: 0,
            ..LayoutOptions::default()
        };
        let points = vec![point(0.0, 0.0, false), point(1.0, 1.0, false)];
        let paths = build_paths(&points, &LinearInterpolator, &options);

        assert_eq!(paths[0].vertices, vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]);
    }
}
