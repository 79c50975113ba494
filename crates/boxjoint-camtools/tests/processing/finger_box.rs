//! Scenario tests for the finger-joint box maker

use boxjoint_camtools::finger_box::{
    socket_positions, BoxDimensions, BoxJointMaker, EdgeRole, Panel, PanelShape,
    ProcessParameters, SocketRun,
};
use boxjoint_camtools::CamToolError;

const EPS: f64 = 1e-9;

fn assert_symmetric(run: &SocketRun, dimension: f64) {
    let p = run.positions();
    for i in 0..p.len() {
        let mirrored = dimension - p[p.len() - 1 - i];
        assert!(
            (p[i] - mirrored).abs() < EPS,
            "position {} = {} does not mirror {}",
            i,
            p[i],
            mirrored
        );
    }
}

#[test]
fn test_socket_runs_for_12x24x8() {
    let t = 0.106;

    let length = socket_positions(EdgeRole::Length, 12.0, t);
    assert!(!length.is_empty());
    assert_eq!(length.positions().len() % 2, 0);
    assert!(length.positions().iter().all(|&p| p > 0.0 && p < 12.0));
    assert_symmetric(&length, 12.0);

    let width = socket_positions(EdgeRole::Width, 24.0, t);
    assert!(!width.is_empty());
    assert_symmetric(&width, 24.0);

    let height = socket_positions(EdgeRole::Height, 8.0, t);
    assert!(!height.is_empty());
    assert_eq!(height.positions().len() % 2, 0);
    assert!(height.positions().iter().all(|&p| p > 0.0 && p < 8.0));
}

#[test]
fn test_height_of_twice_thickness_has_no_notches() {
    let t = 0.106;
    let run = socket_positions(EdgeRole::Height, 2.0 * t, t);
    assert!(run.is_empty());
    assert_eq!(run.notch_count(), 0);
}

#[test]
fn test_bottom_panel_sits_below_four_panels_and_four_gaps() {
    let params = ProcessParameters::default();
    let spacing = params.spacing;
    let maker = BoxJointMaker::new(BoxDimensions::new(12.0, 24.0, 8.0), params)
        .expect("Failed to create BoxJointMaker");
    let plan = maker.generate(true).expect("Failed to generate plan");

    let height_of = |panel: Panel| {
        plan.panel(panel)
            .unwrap()
            .path
            .bounding_box()
            .unwrap()
            .height()
    };
    let stacked: f64 = [Panel::Front, Panel::Back, Panel::Left, Panel::Right]
        .into_iter()
        .map(height_of)
        .sum::<f64>()
        + 4.0 * spacing;

    let front_top = plan.panel(Panel::Front).unwrap().path.min_y().unwrap();
    let bottom_top = plan.panel(Panel::Bottom).unwrap().path.min_y().unwrap();
    assert!(
        (bottom_top - front_top - stacked).abs() < EPS,
        "bottom starts {} below front, expected {}",
        bottom_top - front_top,
        stacked
    );

    // The reference square sits above everything
    let reference_bottom = plan.reference.max_y().unwrap();
    assert!((front_top - reference_bottom - spacing).abs() < EPS);
}

#[test]
fn test_outlines_do_not_overlap_vertically() {
    let maker = BoxJointMaker::new(
        BoxDimensions::new(6.0, 4.0, 3.0),
        ProcessParameters::default(),
    )
    .unwrap();
    let plan = maker.generate(true).unwrap();

    let mut previous_bottom = plan.reference.max_y().unwrap();
    for outline in &plan.panels {
        let bounds = outline.path.bounding_box().unwrap();
        assert!(bounds.min_y > previous_bottom, "{} overlaps", outline.panel);
        previous_bottom = bounds.max_y;
    }
}

#[test]
fn test_back_and_right_match_front_and_left() {
    let maker = BoxJointMaker::new(
        BoxDimensions::new(6.0, 4.0, 3.0),
        ProcessParameters::default(),
    )
    .unwrap();
    let plan = maker.generate(true).unwrap();

    for (a, b) in [(Panel::Front, Panel::Back), (Panel::Left, Panel::Right)] {
        let first = &plan.panel(a).unwrap().path;
        let second = &plan.panel(b).unwrap().path;
        let dy = second.min_y().unwrap() - first.min_y().unwrap();
        assert_eq!(first.len(), second.len());
        for (p, q) in first.points().iter().zip(second.points()) {
            assert_eq!(p.x, q.x);
            assert!((p.y + dy - q.y).abs() < EPS);
        }
    }
}

#[test]
fn test_all_outlines_share_winding() {
    let maker = BoxJointMaker::new(
        BoxDimensions::new(12.0, 24.0, 8.0),
        ProcessParameters::default(),
    )
    .unwrap();
    let areas: Vec<f64> = [PanelShape::FrontBack, PanelShape::Side, PanelShape::Bottom]
        .into_iter()
        .map(|shape| maker.panel_outline(shape, true).signed_area())
        .collect();
    assert!(areas.iter().all(|a| *a < 0.0), "areas: {:?}", areas);
}

#[test]
fn test_bottom_fits_between_walls() {
    let params = ProcessParameters::default();
    let maker = BoxJointMaker::new(BoxDimensions::new(6.0, 4.0, 3.0), params.clone()).unwrap();
    let bottom = maker.panel_outline(PanelShape::Bottom, true);
    let bounds = bottom.bounding_box().unwrap();
    assert_eq!(bounds.min_x, 0.0);
    assert_eq!(bounds.min_y, 0.0);
    assert_eq!(bounds.max_x, 6.0);
    assert_eq!(bounds.max_y, 4.0);

    let d = params.thickness - params.depth_offset;
    let start = bottom.first().unwrap();
    assert_eq!((start.x, start.y), (d, d));
}

#[test]
fn test_unknown_shape_name_is_rejected() {
    let err = "lid".parse::<PanelShape>().unwrap_err();
    assert!(matches!(err, CamToolError::InvalidPanelKind(_)));
    assert_eq!("side".parse::<PanelShape>().unwrap(), PanelShape::Side);
}

#[test]
fn test_odd_socket_run_is_rejected() {
    let err = SocketRun::from_positions(EdgeRole::Width, vec![0.5]).unwrap_err();
    assert!(matches!(err, CamToolError::MalformedSocketRun { len: 1, .. }));
    assert!(SocketRun::from_positions(EdgeRole::Width, vec![]).is_ok());
}

#[test]
fn test_negative_dimension_is_rejected_before_generation() {
    let result = BoxJointMaker::new(
        BoxDimensions::new(-6.0, 4.0, 3.0),
        ProcessParameters::default(),
    );
    assert!(matches!(
        result,
        Err(CamToolError::InvalidDimension { ref name, .. }) if name == "length"
    ));
}

#[test]
fn test_zero_thickness_is_rejected() {
    let params = ProcessParameters {
        thickness: 0.0,
        ..ProcessParameters::default()
    };
    let result = BoxJointMaker::new(BoxDimensions::new(6.0, 4.0, 3.0), params);
    assert!(matches!(result, Err(CamToolError::InvalidParameters(_))));
}
