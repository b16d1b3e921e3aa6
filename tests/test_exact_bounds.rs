mod test_utils;

use polystroke::{
    core::math::Transform2,
    poly::{LineCap, LineJoin, PolyPath, StrokeStyle},
    poly_closed, poly_open,
    project::{compute_exact_bounding_box, compute_projected_outline},
};
use std::f64::consts::FRAC_PI_4;
use test_utils::assert_bb_tight;

fn style(line_join: LineJoin, line_cap: LineCap, width: f64) -> StrokeStyle<f64> {
    StrokeStyle {
        width,
        line_join,
        line_cap,
        ..StrokeStyle::default()
    }
}

/// Right angle path going up the screen then right (y-down coordinates).
fn right_angle() -> PolyPath<f64> {
    poly_open![(0.0, 0.0), (0.0, -30.0), (30.0, -30.0)]
}

fn star() -> PolyPath<f64> {
    poly_closed![
        (30.0, 0.0),
        (40.0, 20.0),
        (60.0, 25.0),
        (45.0, 40.0),
        (50.0, 60.0),
        (30.0, 50.0),
        (10.0, 60.0),
        (15.0, 40.0),
        (0.0, 25.0),
        (20.0, 20.0),
    ]
}

fn plus() -> PolyPath<f64> {
    poly_closed![
        (10.0, 0.0),
        (20.0, 0.0),
        (20.0, 10.0),
        (30.0, 10.0),
        (30.0, 20.0),
        (20.0, 20.0),
        (20.0, 30.0),
        (10.0, 30.0),
        (10.0, 20.0),
        (0.0, 20.0),
        (0.0, 10.0),
        (10.0, 10.0),
    ]
}

#[test]
fn right_angle_miter_apex_extends_the_box() {
    let bb = compute_exact_bounding_box(
        &right_angle(),
        &style(LineJoin::Miter, LineCap::Butt, 10.0),
        &Transform2::identity(),
    )
    .unwrap()
    .unwrap();
    // the apex at the joint reaches (-5, -35), the butt capped ends stop at the vertexes
    assert_eq!((bb.left, bb.top), (-5.0, -35.0));
    assert_eq!((bb.width, bb.height), (35.0, 35.0));
}

#[test]
fn axis_aligned_square_inflates_by_half_width_for_every_join() {
    let path = poly_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    let t = Transform2::identity();
    for join in [LineJoin::Miter, LineJoin::Round, LineJoin::Bevel] {
        let bb = compute_exact_bounding_box(&path, &style(join, LineCap::Butt, 4.0), &t)
            .unwrap()
            .unwrap();
        // corner geometry differs but the extents agree on an axis aligned square
        assert_eq!((bb.left, bb.top), (-2.0, -2.0), "join {:?}", join);
        assert_eq!((bb.width, bb.height), (14.0, 14.0), "join {:?}", join);
    }
}

#[test]
fn bounding_box_contains_and_touches_the_outline() {
    let transforms = [
        Transform2::identity(),
        Transform2::from_rotation(FRAC_PI_4),
        Transform2::from_scale(2.0, 0.5),
        Transform2::from_scale(1.5, 3.0)
            * Transform2::from_rotation(0.7)
            * Transform2::from_skew(0.3, 0.0),
    ];
    let paths = [right_angle(), star(), plus()];
    let joins = [LineJoin::Miter, LineJoin::Round, LineJoin::Bevel];
    let caps = [LineCap::Butt, LineCap::Square, LineCap::Round];

    for path in &paths {
        for t in &transforms {
            for (join, cap) in joins.iter().zip(caps.iter()) {
                let s = style(*join, *cap, 7.0);
                let outline = compute_projected_outline(path, &s, t).unwrap();
                let bb = compute_exact_bounding_box(path, &s, t).unwrap().unwrap();
                assert_bb_tight(&bb, &outline, 1e-3);
            }
        }
    }
}

#[test]
fn projection_is_idempotent() {
    let path = star();
    let s = style(LineJoin::Round, LineCap::Round, 6.0);
    let t = Transform2::from_rotation(0.4) * Transform2::from_scale(2.0, 3.0);

    let first = compute_projected_outline(&path, &s, &t).unwrap();
    let second = compute_projected_outline(&path, &s, &t).unwrap();
    assert_eq!(first, second);

    let bb1 = compute_exact_bounding_box(&path, &s, &t).unwrap();
    let bb2 = compute_exact_bounding_box(&path, &s, &t).unwrap();
    assert_eq!(bb1, bb2);
}

#[test]
fn coincident_vertexes_produce_finite_output() {
    // consecutive duplicates and near duplicates sprinkled through the path
    let path = poly_open![
        (0.0, 0.0),
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 0.0 + 1e-12),
        (10.0, 10.0),
        (10.0, 10.0),
    ];
    let t = Transform2::identity();
    for join in [LineJoin::Miter, LineJoin::Round, LineJoin::Bevel] {
        let s = style(join, LineCap::Round, 4.0);
        let outline = compute_projected_outline(&path, &s, &t).unwrap();
        assert!(outline.is_finite(), "join {:?}", join);
        let bb = compute_exact_bounding_box(&path, &s, &t).unwrap().unwrap();
        assert!(bb.left.is_finite() && bb.top.is_finite());
        assert!(bb.width.is_finite() && bb.height.is_finite());
    }

    // a path collapsed entirely onto one position
    let path = poly_closed![(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)];
    let outline =
        compute_projected_outline(&path, &style(LineJoin::Miter, LineCap::Butt, 4.0), &t).unwrap();
    assert!(outline.is_finite());
}

#[test]
fn reversal_spike_produces_finite_output() {
    // path doubling back on itself, the worst case for miter intersection
    let path = poly_open![(0.0, 0.0), (20.0, 0.0), (0.0, 0.0)];
    let s = style(LineJoin::Miter, LineCap::Butt, 4.0);
    let outline = compute_projected_outline(&path, &s, &Transform2::identity()).unwrap();
    assert!(outline.is_finite());
    let bb = compute_exact_bounding_box(&path, &s, &Transform2::identity())
        .unwrap()
        .unwrap();
    // the spike joint degrades to bevel, extents stay at half width
    assert_eq!((bb.left, bb.top), (0.0, -2.0));
    assert_eq!((bb.width, bb.height), (20.0, 4.0));
}
