//! Integration tests for composed shape trees

// Tests are allowed to use expect/unwrap for cleaner error messages
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use sdforge_core::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

// ============================================================================
// Helpers
// ============================================================================

/// Points on a regular lattice over `bb`, `n` per axis
fn lattice2(bb: Box2, n: u32) -> impl Iterator<Item = DVec2> {
    let step = bb.size() / f64::from(n - 1);
    (0..n).flat_map(move |j| (0..n).map(move |i| bb.min + UVec2::new(i, j).as_dvec2() * step))
}

fn lattice3(bb: Box3, n: u32) -> impl Iterator<Item = DVec3> {
    let step = bb.size() / f64::from(n - 1);
    (0..n).flat_map(move |k| {
        (0..n).flat_map(move |j| {
            (0..n).map(move |i| bb.min + UVec3::new(i, j, k).as_dvec3() * step)
        })
    })
}

fn assert_box_sound2(name: &str, shape: &dyn Sdf2) {
    let bb = shape.bounding_box();
    let tolerance = bb.enlarge(1e-9);
    let mut inside = 0;
    for p in lattice2(bb.enlarge(1.0), 61) {
        if shape.evaluate(p) <= 0.0 {
            inside += 1;
            assert!(tolerance.contains(p), "{name}: {p} is inside but outside {bb:?}");
        }
    }
    assert!(inside > 0, "{name}: lattice never hit the interior");
}

fn assert_box_sound3(name: &str, shape: &dyn Sdf3) {
    let bb = shape.bounding_box();
    let tolerance = bb.enlarge(1e-9);
    let mut inside = 0;
    for p in lattice3(bb.enlarge(1.0), 25) {
        if shape.evaluate(p) <= 0.0 {
            inside += 1;
            assert!(tolerance.contains(p), "{name}: {p} is inside but outside {bb:?}");
        }
    }
    assert!(inside > 0, "{name}: lattice never hit the interior");
}

fn l_shape() -> Polygon {
    polygon2d(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(3.0, 0.0),
        DVec2::new(3.0, 1.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 2.0),
        DVec2::new(0.0, 2.0),
    ])
    .unwrap()
}

// ============================================================================
// Bounding box soundness
// ============================================================================

#[test]
fn bounding_boxes_are_sound_2d() {
    let shapes: Vec<(&str, Sdf2Node)> = vec![
        ("circle", circle2d(1.5).into_node()),
        ("rounded box", box2d(DVec2::new(3.0, 1.0), 0.3).into_node()),
        ("line", line2d(4.0, 0.25).into_node()),
        ("polygon", l_shape().into_node()),
        (
            "multi circle",
            multi_circle2d(0.5, vec![DVec2::new(-2.0, 1.0), DVec2::new(3.0, -1.0)])
                .unwrap()
                .into_node(),
        ),
        (
            "cut",
            circle2d(2.0)
                .cut(DVec2::new(0.5, 0.0), DVec2::new(1.0, 1.0))
                .unwrap(),
        ),
        (
            "rotate copy",
            box2d(DVec2::new(1.0, 0.5), 0.0)
                .translate(DVec2::new(2.0, 0.3))
                .rotate_copy(5)
                .unwrap(),
        ),
        (
            "affine",
            l_shape()
                .transform(rotate2d(0.7) * scale2d(DVec2::new(2.0, 0.5)))
                .unwrap(),
        ),
        (
            "array",
            circle2d(0.4)
                .array(UVec2::new(3, 2), DVec2::new(1.0, -1.5))
                .unwrap(),
        ),
        (
            "rotate",
            line2d(2.0, 0.2)
                .translate(DVec2::new(1.5, 0.0))
                .rotate_copies(3, rotate2d(0.9))
                .unwrap(),
        ),
        (
            "difference",
            box2d(DVec2::splat(3.0), 0.0).difference(circle2d(1.0)),
        ),
        (
            "union",
            circle2d(1.0).union(box2d(DVec2::new(4.0, 0.5), 0.0).translate(DVec2::X)),
        ),
        ("offset", l_shape().offset(0.25)),
        (
            "slice",
            box3d(DVec3::new(2.0, 3.0, 4.0), 0.2)
                .slice(DVec3::new(0.1, 0.2, 0.3), DVec3::new(1.0, 2.0, 3.0))
                .unwrap(),
        ),
    ];

    for (name, shape) in &shapes {
        assert_box_sound2(name, shape);
    }
}

#[test]
fn bounding_boxes_are_sound_3d() {
    let ring = box2d(DVec2::new(1.0, 2.0), 0.1).translate(DVec2::new(2.0, 0.5));
    let shapes: Vec<(&str, Sdf3Node)> = vec![
        ("sphere", sphere3d(1.2).into_node()),
        ("rounded box", box3d(DVec3::new(2.0, 1.0, 3.0), 0.2).into_node()),
        ("cylinder", cylinder3d(3.0, 0.8, 0.1).into_node()),
        ("capsule", capsule3d(0.5, 3.0).into_node()),
        (
            "multi cylinder",
            multi_cylinder3d(1.0, 0.3, vec![DVec2::ZERO, DVec2::new(2.0, 1.0)])
                .unwrap()
                .into_node(),
        ),
        ("extrusion", l_shape().extrude(1.5).unwrap()),
        ("revolution", ring.clone().revolve()),
        ("quarter revolution", ring.clone().revolve_theta(FRAC_PI_2).unwrap()),
        ("wide revolution", ring.revolve_theta(1.3 * PI).unwrap()),
        (
            "affine",
            box3d(DVec3::new(2.0, 1.0, 0.5), 0.0)
                .transform(rotate3d(DVec3::new(1.0, 1.0, 0.0), 0.6).unwrap())
                .unwrap(),
        ),
        (
            "array",
            sphere3d(0.4)
                .array(UVec3::new(2, 2, 3), DVec3::new(1.0, 1.5, -1.0))
                .unwrap(),
        ),
        (
            "rotate",
            cube3d(0.5)
                .translate(DVec3::new(1.5, 0.0, 0.0))
                .rotate_copies(4, rotate_z(FRAC_PI_2) * translate3d(DVec3::Z * 0.5))
                .unwrap(),
        ),
        (
            "intersection",
            sphere3d(1.0).intersection(cube3d(1.2).translate(DVec3::new(0.5, 0.0, 0.0))),
        ),
    ];

    for (name, shape) in &shapes {
        assert_box_sound3(name, shape);
    }
}

// ============================================================================
// Boolean semantics
// ============================================================================

#[test]
fn union_is_commutative_min() {
    let a = circle2d(1.0).into_node();
    let b = box2d(DVec2::new(2.0, 0.5), 0.0).translate(DVec2::new(1.0, 0.5));
    let ab = a.clone().union(b.clone());
    let ba = b.clone().union(a.clone());

    for p in lattice2(Box2::square(3.0), 21) {
        let expected = a.evaluate(p).min(b.evaluate(p));
        assert_eq!(ab.evaluate(p), expected);
        assert_eq!(ba.evaluate(p), expected);
    }
}

#[test]
fn difference_is_not_commutative() {
    let a = sphere3d(1.0).into_node();
    let b = sphere3d(0.5).translate(DVec3::X);
    let ab = a.clone().difference(b.clone());
    let ba = b.clone().difference(a.clone());

    for p in lattice3(Box3::cube(2.0), 9) {
        assert_eq!(ab.evaluate(p), a.evaluate(p).max(-b.evaluate(p)));
    }
    let p = DVec3::new(1.2, 0.0, 0.0);
    assert!(ab.evaluate(p) > 0.0);
    assert!(ba.evaluate(p) < 0.0);
}

#[test]
fn smooth_blends_keep_the_far_field() {
    let a = sphere3d(1.0).into_node();
    let b = sphere3d(1.0).translate(DVec3::new(1.8, 0.0, 0.0));
    let sharp = a.clone().union(b.clone());
    for blend in [MinBlend::round(0.3), MinBlend::chamfer(0.3), MinBlend::poly(0.3)] {
        let smooth = a.clone().smooth_union(b.clone(), blend.unwrap());
        // far from the seam the blend is inactive
        let far = DVec3::new(-3.0, 0.0, 0.0);
        assert_relative_eq!(smooth.evaluate(far), sharp.evaluate(far), epsilon = 1e-9);
        // the seam fills in
        let seam = DVec3::new(0.9, 0.5, 0.0);
        assert!(smooth.evaluate(seam) < sharp.evaluate(seam));
    }
}

// ============================================================================
// Transforms and instancing
// ============================================================================

#[test]
fn transform_round_trip() {
    let shape = l_shape();
    let m = translate2d(DVec2::new(2.0, -1.0)) * rotate2d(1.1) * scale2d(DVec2::new(1.5, 0.5));
    let moved = l_shape().transform(m).unwrap();

    for p in lattice2(Box2::new(DVec2::splat(-1.0), DVec2::splat(4.0)), 15) {
        assert_relative_eq!(
            moved.evaluate(m.transform_point2(p)),
            shape.evaluate(p),
            epsilon = 1e-9
        );
    }

    let solid = cylinder3d(2.0, 0.5, 0.1);
    let m = translate3d(DVec3::new(1.0, 2.0, 3.0)) * rotate3d(DVec3::ONE, 0.8).unwrap();
    let moved = solid.transform(m).unwrap();
    for p in lattice3(Box3::cube(1.5), 7) {
        assert_relative_eq!(
            moved.evaluate(m.transform_point3(p)),
            solid.evaluate(p),
            epsilon = 1e-9
        );
    }
}

#[test]
fn single_cell_arrays_are_identity() {
    let base = l_shape().into_node();
    let arr = base.clone().array(UVec2::ONE, DVec2::new(7.0, 3.0)).unwrap();
    for p in lattice2(Box2::square(4.0), 17) {
        assert_eq!(arr.evaluate(p), base.evaluate(p));
    }
    assert_eq!(arr.bounding_box(), base.bounding_box());

    let base = capsule3d(0.5, 2.0).into_node();
    let arr = base.clone().array(UVec3::ONE, DVec3::ONE).unwrap();
    for p in lattice3(Box3::cube(2.0), 7) {
        assert_eq!(arr.evaluate(p), base.evaluate(p));
    }
}

#[test]
fn rotate_copy_is_invariant_under_its_angle() {
    let n = 7;
    let tooth = box2d(DVec2::new(0.6, 0.3), 0.05).translate(DVec2::new(2.0, 0.0));
    let gear = tooth.rotate_copy(n).unwrap();
    let step = TAU / f64::from(n);

    for p in lattice2(Box2::square(3.0), 13) {
        let d = gear.evaluate(p);
        for k in 1..n {
            let q = rotate2d(step * f64::from(k)).transform_point2(p);
            assert_relative_eq!(gear.evaluate(q), d, epsilon = 1e-9);
        }
    }
}

// ============================================================================
// Primitives and bridges
// ============================================================================

#[test]
fn primitive_surfaces_are_zero() {
    assert_relative_eq!(sphere3d(2.0).evaluate(DVec3::new(2.0, 0.0, 0.0)), 0.0);
    assert_relative_eq!(circle2d(1.0).evaluate(DVec2::new(0.0, -1.0)), 0.0);
    assert_relative_eq!(box2d(DVec2::new(2.0, 4.0), 0.0).evaluate(DVec2::new(1.0, 0.5)), 0.0);
    assert_relative_eq!(line2d(2.0, 0.5).evaluate(DVec2::new(1.5, 0.0)), 0.0);
    assert_relative_eq!(cube3d(2.0).evaluate(DVec3::new(0.3, 1.0, -0.2)), 0.0);
    assert_relative_eq!(cylinder3d(2.0, 1.0, 0.0).evaluate(DVec3::new(0.0, 1.0, 0.5)), 0.0);
}

#[test]
fn polygon_winding_and_distance() {
    let square = polygon2d(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ])
    .unwrap();
    assert_relative_eq!(square.evaluate(DVec2::splat(0.5)), -0.5);
    assert_relative_eq!(square.evaluate(DVec2::splat(2.0)), 2.0_f64.sqrt());

    // inside the notch of the L is outside the shape
    let l = l_shape();
    assert!(l.evaluate(DVec2::new(2.0, 1.5)) > 0.0);
    assert!(l.evaluate(DVec2::new(0.5, 1.5)) < 0.0);
    assert!(l.evaluate(DVec2::new(2.5, 0.5)) < 0.0);
}

#[test]
fn extruded_circle() {
    let rod = circle2d(1.0).extrude(2.0).unwrap();
    assert_relative_eq!(rod.evaluate(DVec3::new(0.0, 0.0, 1.0)), -1.0);
    assert!(rod.evaluate(DVec3::new(0.0, 0.0, 3.0)) > 0.0);
}

#[test]
fn half_revolution_is_mirror_symmetric() {
    let profile = box2d(DVec2::ONE, 0.0).translate(DVec2::new(2.0, 0.0));
    let half = profile.revolve_theta(PI).unwrap();

    for p in lattice3(Box3::cube(3.0), 9) {
        let mirrored = DVec3::new(-p.x, p.y, p.z);
        assert_relative_eq!(half.evaluate(p), half.evaluate(mirrored), epsilon = 1e-12);
    }

    // not invariant under a quarter turn
    let p = DVec3::new(2.0, 0.3, 0.0);
    let q = rotate_z(-FRAC_PI_2).transform_point3(p);
    assert!(half.evaluate(p) < 0.0);
    assert!(half.evaluate(q) > 0.0);
}

#[test]
fn shared_profile_feeds_two_solids() {
    let profile = circle2d(0.5).translate(DVec2::new(2.0, 0.0));
    let rod = profile.clone().extrude(1.0).unwrap();
    let ring = profile.revolve();

    assert!(rod.evaluate(DVec3::new(2.0, 0.0, 0.5)) < 0.0);
    assert!(ring.evaluate(DVec3::new(0.0, 2.0, 0.0)) < 0.0);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn one_tree_evaluated_from_many_threads() {
    let tree = sphere3d(1.0)
        .smooth_union(cube3d(1.0).translate(DVec3::X), MinBlend::poly(0.2).unwrap())
        .array(UVec3::new(3, 1, 1), DVec3::new(4.0, 0.0, 0.0))
        .unwrap();

    let points: Vec<DVec3> = lattice3(tree.bounding_box(), 9).collect();
    let expected: Vec<f64> = points.iter().map(|&p| tree.evaluate(p)).collect();

    std::thread::scope(|s| {
        for chunk in points.chunks(points.len() / 4 + 1) {
            let tree = tree.clone();
            let expected = &expected;
            let points = &points;
            s.spawn(move || {
                for p in chunk {
                    let idx = points.iter().position(|q| q == p).unwrap();
                    assert_eq!(tree.evaluate(*p), expected[idx]);
                }
            });
        }
    });

    let grid = sample_grid3(&tree, SampleConfig::default().with_resolution(8)).unwrap();
    for (idx, value) in grid.values.iter().enumerate() {
        let idx = idx as u32;
        let p = grid.point(idx % 9, (idx / 9) % 9, idx / 81);
        assert_eq!(*value, tree.evaluate(p));
    }
}
