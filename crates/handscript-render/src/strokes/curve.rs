//! Curve utilities that work on any stroke.

use handscript_core::Stroke;
use handscript_core::geom::Point;

/// Target distance between samples when smoothing, in pixels.
const SMOOTH_SAMPLE_SPACING: f64 = 5.0;

pub fn arc_length(stroke: &Stroke) -> f64 {
    stroke.arc_length()
}

/// Catmull-Rom smoothing through every input point.
///
/// `tension` scales the tangents (0.5 is the classic Catmull-Rom curve). Each segment is sampled
/// in proportion to its length, at least twice. Strokes with fewer than three points are returned
/// unchanged; the first and last points are always kept exactly.
pub fn smooth(stroke: &Stroke, tension: f64) -> Stroke {
    let pts = &stroke.points;
    let n = pts.len();
    if n < 3 {
        return stroke.clone();
    }

    let mut out = Vec::with_capacity(n * 2);
    out.push(pts[0]);
    for i in 0..n - 1 {
        let p0 = pts[i.saturating_sub(1)];
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let p3 = pts[(i + 2).min(n - 1)];

        let steps = ((p1.distance_to(p2) / SMOOTH_SAMPLE_SPACING).floor() as usize).max(2);
        for s in 1..steps {
            let t = s as f64 / steps as f64;
            out.push(hermite(p0, p1, p2, p3, t, tension));
        }
        out.push(p2);
    }

    stroke.with_points(out)
}

fn hermite(p0: Point, p1: Point, p2: Point, p3: Point, t: f64, tension: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let m1 = (p2 - p0) * tension;
    let m2 = (p3 - p1) * tension;

    let axis = |a: f64, b: f64, ma: f64, mb: f64| {
        (2.0 * a - 2.0 * b + ma + mb) * t3 + (-3.0 * a + 3.0 * b - 2.0 * ma - mb) * t2 + ma * t + a
    };
    Point::new(
        axis(p1.x, p2.x, m1.x, m2.x),
        axis(p1.y, p2.y, m1.y, m2.y),
    )
}

/// Re-samples a stroke so consecutive points are `spacing` apart along the path.
///
/// The first and last input points are kept exactly. A non-positive spacing or a stroke with
/// fewer than two points returns the input unchanged.
pub fn resample(stroke: &Stroke, spacing: f64) -> Stroke {
    let pts = &stroke.points;
    if pts.len() < 2 || !(spacing.is_finite() && spacing > 0.0) {
        return stroke.clone();
    }

    let mut out = vec![pts[0]];
    // Path distance walked since the last emitted sample.
    let mut carried = 0.0;
    for w in pts.windows(2) {
        let (a, b) = (w[0], w[1]);
        let seg = a.distance_to(b);
        if seg == 0.0 {
            continue;
        }
        let mut along = spacing - carried;
        while along <= seg {
            out.push(a.lerp(b, along / seg));
            along += spacing;
        }
        carried = seg - (along - spacing);
    }

    let last = pts[pts.len() - 1];
    let landed_on_last = out
        .last()
        .is_some_and(|p| p.distance_to(last) < spacing * 1e-6);
    if landed_on_last && out.len() > 1 {
        out.pop();
    }
    out.push(last);

    stroke.with_points(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use handscript_core::geom::point;

    fn zigzag() -> Stroke {
        Stroke::new(vec![
            point(0.0, 0.0),
            point(20.0, 30.0),
            point(40.0, 0.0),
            point(60.0, 30.0),
            point(63.0, 31.0),
        ])
    }

    #[test]
    fn arc_length_sums_segments() {
        let s = Stroke::new(vec![point(0.0, 0.0), point(3.0, 4.0), point(3.0, 10.0)]);
        assert_eq!(arc_length(&s), 11.0);
        assert_eq!(arc_length(&Stroke::default()), 0.0);
    }

    #[test]
    fn smooth_leaves_short_strokes_alone() {
        let s = Stroke::new(vec![point(0.0, 0.0), point(10.0, 0.0)]).with_delay(5.0);
        assert_eq!(smooth(&s, 0.5), s);
    }

    #[test]
    fn smooth_passes_through_control_points() {
        let s = zigzag().starting_glyph(true);
        let out = smooth(&s, 0.5);
        assert!(out.len() > s.len());
        assert!(out.starts_glyph);
        for p in &s.points {
            assert!(out.points.contains(p), "control point {p:?} missing");
        }
        assert_eq!(out.first(), s.first());
        assert_eq!(out.last(), s.last());
    }

    #[test]
    fn resample_spaces_points_evenly() {
        let s = Stroke::new(vec![point(0.0, 0.0), point(10.0, 0.0)]);
        let out = resample(&s, 2.0);
        let xs: Vec<f64> = out.points.iter().map(|p| p.x).collect();
        assert_eq!(xs.len(), 6);
        for (x, expected) in xs.iter().zip([0.0, 2.0, 4.0, 6.0, 8.0, 10.0]) {
            assert!((x - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn resample_keeps_the_exact_end_point() {
        let s = Stroke::new(vec![point(0.0, 0.0), point(7.0, 0.0)]);
        let out = resample(&s, 2.0);
        assert_eq!(out.len(), 5);
        assert_eq!(out.last(), Some(point(7.0, 0.0)));
    }

    #[test]
    fn resample_of_degenerate_stroke_keeps_both_points() {
        let s = Stroke::new(vec![point(1.0, 1.0), point(1.0, 1.0)]);
        assert_eq!(resample(&s, 2.0).points, s.points);
        assert_eq!(resample(&s, 0.0), s);
    }

    #[test]
    fn resample_after_smooth_preserves_endpoints() {
        let s = zigzag();
        let out = resample(&smooth(&s, 0.5), 5.0);
        let (first, last) = (out.first().unwrap(), out.last().unwrap());
        assert!(first.distance_to(point(0.0, 0.0)) < 1e-9);
        assert!(last.distance_to(point(63.0, 31.0)) < 1e-9);
    }

    #[test]
    fn fine_resampling_preserves_arc_length() {
        let s = Stroke::new(vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]);
        let out = resample(&s, 0.1);
        let ratio = arc_length(&out) / arc_length(&s);
        assert!((ratio - 1.0).abs() < 0.01, "ratio {ratio}");
    }
}
