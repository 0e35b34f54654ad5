//! Reine Geometrie-Funktionen: regelmäßige Polygone und Treffertests.

use glam::DVec2;
use std::f64::consts::TAU;

/// Berechnet die Eckpunkte eines regelmäßigen Polygons aus einem Zieh-Vektor.
///
/// Der Mittelpunkt liegt auf der Mitte von `start`–`end`, der erste Eckpunkt
/// in Richtung `end`. Im symmetrischen Modus sind beide Achsradien gleich
/// dem halben Abstand, sonst folgen sie den Achsdifferenzen des Vektors.
///
/// Rückgabe: flacher Vertex-Buffer `[x0, y0, x1, y1, ...]` mit `sides` Paaren.
/// `sides` wird nicht geprüft; Formen begrenzen es auf `MAX_SIDES`.
pub fn compute_regular_polygon(
    start: DVec2,
    end: DVec2,
    sides: usize,
    symmetrical: bool,
) -> Vec<f64> {
    let delta = end - start;
    let angle = delta.y.atan2(delta.x);
    let radii = if symmetrical {
        DVec2::splat(delta.length())
    } else {
        delta
    };
    let center = (start + end) * 0.5;

    let mut buffer = Vec::with_capacity(sides * 2);
    for side in 0..sides {
        let theta = angle + side as f64 * TAU / sides as f64;
        buffer.push(center.x + radii.x / 2.0 * theta.cos());
        buffer.push(center.y + radii.y / 2.0 * theta.sin());
    }
    buffer
}

/// Wandelt einen flachen Vertex-Buffer in Punkte um. Ein ungerades Restelement wird ignoriert.
pub fn buffer_to_points(buffer: &[f64]) -> Vec<DVec2> {
    buffer
        .chunks_exact(2)
        .map(|pair| DVec2::new(pair[0], pair[1]))
        .collect()
}

/// Achsparallele Bounding-Box `(min, max)` einer Punktmenge.
pub fn bounds_of(points: &[DVec2]) -> Option<(DVec2, DVec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}

/// Abstand eines Punkts zur Strecke `a`–`b`.
pub fn distance_to_segment(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Even-Odd-Test, ob ein Punkt im Inneren eines geschlossenen Polygons liegt.
pub fn point_in_polygon(point: DVec2, vertices: &[DVec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y > point.y) != (vj.y > point.y)
            && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_from_horizontal_drag() {
        let buffer = compute_regular_polygon(DVec2::ZERO, DVec2::new(10.0, 0.0), 4, true);
        let points = buffer_to_points(&buffer);

        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[0].x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(points[0].y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(points[1].x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(points[1].y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(points[2].x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(points[3].y, -5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_all_vertices_on_circle() {
        let start = DVec2::new(-3.0, 7.5);
        let end = DVec2::new(12.0, -4.0);
        let center = (start + end) * 0.5;
        let radius = start.distance(end) / 2.0;

        for sides in 2..=9 {
            let points = buffer_to_points(&compute_regular_polygon(start, end, sides, true));
            assert_eq!(points.len(), sides);
            for p in points {
                assert_relative_eq!(p.distance(center), radius, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_two_sides_spans_drag_vector() {
        let start = DVec2::new(1.0, 1.0);
        let end = DVec2::new(4.0, 5.0);
        let points = buffer_to_points(&compute_regular_polygon(start, end, 2, true));

        assert_relative_eq!(points[0].x, end.x, epsilon = 1e-9);
        assert_relative_eq!(points[0].y, end.y, epsilon = 1e-9);
        assert_relative_eq!(points[1].x, start.x, epsilon = 1e-9);
        assert_relative_eq!(points[1].y, start.y, epsilon = 1e-9);
    }

    #[test]
    fn test_non_symmetrical_uses_axis_radii() {
        let points = buffer_to_points(&compute_regular_polygon(
            DVec2::ZERO,
            DVec2::new(10.0, 4.0),
            4,
            false,
        ));
        let center = DVec2::new(5.0, 2.0);
        let angle = 4.0_f64.atan2(10.0);

        assert_relative_eq!(points[0].x, center.x + 5.0 * angle.cos(), epsilon = 1e-9);
        assert_relative_eq!(points[0].y, center.y + 2.0 * angle.sin(), epsilon = 1e-9);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let a = compute_regular_polygon(DVec2::new(2.0, 3.0), DVec2::new(9.0, 1.0), 6, true);
        let b = compute_regular_polygon(DVec2::new(2.0, 3.0), DVec2::new(9.0, 1.0), 6, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_point_in_polygon_and_segment_distance() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(4.0, 4.0),
            DVec2::new(0.0, 4.0),
        ];
        assert!(point_in_polygon(DVec2::new(2.0, 2.0), &square));
        assert!(!point_in_polygon(DVec2::new(5.0, 2.0), &square));
        assert!(!point_in_polygon(DVec2::new(1.0, 1.0), &square[..2]));

        let d = distance_to_segment(DVec2::new(2.0, 3.0), DVec2::ZERO, DVec2::new(4.0, 0.0));
        assert_relative_eq!(d, 3.0);
        let d = distance_to_segment(DVec2::new(-3.0, 4.0), DVec2::ZERO, DVec2::new(4.0, 0.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_bounds_of() {
        assert!(bounds_of(&[]).is_none());
        let (min, max) = bounds_of(&[DVec2::new(1.0, -2.0), DVec2::new(-3.0, 5.0)])
            .expect("Bounds sollten vorhanden sein");
        assert_eq!(min, DVec2::new(-3.0, -2.0));
        assert_eq!(max, DVec2::new(1.0, 5.0));
    }
}
