use polystroke::core::math::Vector2;
use polystroke::project::{BoundingBox, OutlineElement, ProjectedOutline};

/// Densely sample an outline into plain points (arcs sampled along their sweep).
///
/// Used to validate exact bounding boxes against a brute force approximation.
pub fn sample_outline(outline: &ProjectedOutline<f64>, arc_samples: usize) -> Vec<Vector2<f64>> {
    let mut points = Vec::new();
    for element in outline {
        match element {
            OutlineElement::Point(p) => points.push(*p),
            OutlineElement::Arc(arc) => {
                for i in 0..=arc_samples {
                    let theta =
                        arc.start_angle + arc.sweep * (i as f64) / (arc_samples as f64);
                    points.push(arc.point_at(theta));
                }
            }
        }
    }
    points
}

/// Min/max extents of a point set as `(min_x, min_y, max_x, max_y)`.
pub fn extents_of_points(points: &[Vector2<f64>]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (min_x, min_y, max_x, max_y)
}

/// Assert `bb` contains every sampled point and that every side of the box is touched
/// by some sample (containment plus tightness within `tol`).
pub fn assert_bb_tight(bb: &BoundingBox<f64>, outline: &ProjectedOutline<f64>, tol: f64) {
    let samples = sample_outline(outline, 1000);
    assert!(!samples.is_empty());
    for p in &samples {
        assert!(
            bb.contains_point_eps(p.x, p.y, tol),
            "sample {:?} outside bounding box {:?}",
            p,
            bb
        );
    }
    let (min_x, min_y, max_x, max_y) = extents_of_points(&samples);
    assert!((bb.left - min_x).abs() < tol, "left side not tight: {:?}", bb);
    assert!((bb.top - min_y).abs() < tol, "top side not tight: {:?}", bb);
    assert!(
        (bb.left + bb.width - max_x).abs() < tol,
        "right side not tight: {:?}",
        bb
    );
    assert!(
        (bb.top + bb.height - max_y).abs() < tol,
        "bottom side not tight: {:?}",
        bb
    );
}
