//! Property tests for socket placement and panel outlines

use boxjoint_camtools::finger_box::{
    socket_positions, BoxDimensions, BoxJointMaker, EdgeRole, PanelShape, ProcessParameters,
};
use boxjoint_core::{Path, Point};
use proptest::prelude::*;

const SHAPES: [PanelShape; 3] = [PanelShape::FrontBack, PanelShape::Side, PanelShape::Bottom];

fn is_axis_aligned(a: Point, b: Point) -> bool {
    (a.x == b.x) != (a.y == b.y)
}

fn segments_touch(a: (Point, Point), b: (Point, Point)) -> bool {
    let (a_min_x, a_max_x) = (a.0.x.min(a.1.x), a.0.x.max(a.1.x));
    let (a_min_y, a_max_y) = (a.0.y.min(a.1.y), a.0.y.max(a.1.y));
    let (b_min_x, b_max_x) = (b.0.x.min(b.1.x), b.0.x.max(b.1.x));
    let (b_min_y, b_max_y) = (b.0.y.min(b.1.y), b.0.y.max(b.1.y));
    a_min_x <= b_max_x && b_min_x <= a_max_x && a_min_y <= b_max_y && b_min_y <= a_max_y
}

/// Index of the first pair of non-adjacent segments that touch.
fn self_intersection(path: &Path) -> Option<(usize, usize)> {
    let segments: Vec<_> = path.segments().collect();
    let n = segments.len();
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_touch(segments[i], segments[j]) {
                return Some((i, j));
            }
        }
    }
    None
}

fn box_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (3.0..20.0f64, 3.0..20.0f64, 3.0..12.0f64, 0.05..0.3f64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn outlines_are_closed_rectilinear_and_simple(
        (length, width, height, thickness) in box_strategy(),
        use_offsets in any::<bool>(),
    ) {
        let params = ProcessParameters { thickness, ..ProcessParameters::default() };
        let maker = BoxJointMaker::new(BoxDimensions::new(length, width, height), params).unwrap();

        let mut winding = Vec::new();
        for shape in SHAPES {
            let path = maker.panel_outline(shape, use_offsets);
            prop_assert!(path.len() >= 4);
            for (a, b) in path.segments() {
                prop_assert!(is_axis_aligned(a, b), "{} segment {:?} -> {:?}", shape, a, b);
            }
            prop_assert_eq!(self_intersection(&path), None, "{} self-intersects", shape);
            winding.push(path.signed_area().signum());
        }
        prop_assert!(winding.iter().all(|s| *s == winding[0]));
    }

    #[test]
    fn socket_runs_are_even_increasing_and_interior(
        dimension in 0.0..40.0f64,
        thickness in 0.05..0.5f64,
    ) {
        for role in EdgeRole::ALL {
            let run = socket_positions(role, dimension, thickness);
            let p = run.positions();
            prop_assert_eq!(p.len() % 2, 0);
            prop_assert!(p.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(p.iter().all(|&x| x > 0.0 && x < dimension));
        }
    }

    #[test]
    fn bottom_edge_runs_are_mirror_symmetric(
        dimension in 0.5..40.0f64,
        thickness in 0.05..0.5f64,
    ) {
        for role in [EdgeRole::Length, EdgeRole::Width] {
            let run = socket_positions(role, dimension, thickness);
            let p = run.positions();
            for i in 0..p.len() {
                let mirrored = dimension - p[p.len() - 1 - i];
                prop_assert!((p[i] - mirrored).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn nominal_front_notches_match_raw_sockets(
        (length, width, height, thickness) in box_strategy(),
    ) {
        let params = ProcessParameters { thickness, ..ProcessParameters::default() };
        let maker = BoxJointMaker::new(BoxDimensions::new(length, width, height), params).unwrap();
        let front = maker.panel_outline(PanelShape::FrontBack, false);
        let run = maker.socket_run(EdgeRole::Height);

        // Left side: four points per notch after the starting corner
        let points = &front.points()[1..];
        for (i, (start, end)) in run.pairs().enumerate() {
            let notch = &points[4 * i..4 * i + 4];
            prop_assert_eq!(notch[0], Point::new(0.0, start));
            prop_assert_eq!(notch[1], Point::new(thickness, start));
            prop_assert_eq!(notch[2], Point::new(thickness, end));
            prop_assert_eq!(notch[3], Point::new(0.0, end));
        }
    }

    #[test]
    fn generation_is_deterministic(
        (length, width, height, thickness) in box_strategy(),
    ) {
        let params = ProcessParameters { thickness, ..ProcessParameters::default() };
        let maker = BoxJointMaker::new(BoxDimensions::new(length, width, height), params).unwrap();
        prop_assert_eq!(maker.generate(true).unwrap(), maker.generate(true).unwrap());
    }
}
