//! Tests for rendering box plans to SVG

use boxjoint_camtools::finger_box::{BoxDimensions, BoxJointMaker, ProcessParameters};
use boxjoint_core::LinearUnit;

fn plan_svg(params: ProcessParameters) -> String {
    let maker = BoxJointMaker::new(BoxDimensions::new(6.0, 4.0, 3.0), params.clone())
        .expect("Failed to create BoxJointMaker");
    let plan = maker.generate(true).expect("Failed to generate plan");
    plan.to_svg(&params).expect("Failed to render SVG").render()
}

fn path_data(svg: &str) -> Vec<&str> {
    svg.lines()
        .filter_map(|line| line.strip_prefix("<path d=\""))
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[test]
fn test_plan_has_reference_square_and_five_panels() {
    let svg = plan_svg(ProcessParameters::default());
    let paths = path_data(&svg);
    assert_eq!(paths.len(), 6);
    assert_eq!(paths[0], "M7.2,7.2 L79.2,7.2 79.2,79.2 7.2,79.2 Z");
    assert!(paths.iter().all(|d| d.starts_with('M') && d.ends_with(" Z")));
    assert_eq!(svg.matches("fill=\"none\" stroke=\"black\"").count(), 6);
}

#[test]
fn test_reference_label_names_its_size() {
    let svg = plan_svg(ProcessParameters::default());
    assert!(svg.contains(">1\" x 1\"</text>"));
    assert!(svg.contains("fill=\"red\""));

    let svg = plan_svg(ProcessParameters {
        unit: LinearUnit::Millimeter,
        ..ProcessParameters::default()
    });
    assert!(svg.contains(">1 mm x 1 mm</text>"));
}

#[test]
fn test_canvas_is_widest_panel_plus_one_unit() {
    let svg = plan_svg(ProcessParameters::default());
    // Side and bottom panels are 6 wide
    assert!(svg.contains(" width=\"504\""));
}

#[test]
fn test_coordinates_are_cleaned_up() {
    let svg = plan_svg(ProcessParameters::default());
    for d in path_data(&svg) {
        for token in d.split(|c| c == ' ' || c == ',') {
            let number = token.trim_start_matches(['M', 'L', 'Z']);
            if let Some((_, decimals)) = number.split_once('.') {
                assert!(decimals.len() <= 12, "unclean coordinate {}", number);
            }
        }
    }
}

#[test]
fn test_save_writes_svg_file() {
    let params = ProcessParameters::default();
    let maker = BoxJointMaker::new(BoxDimensions::new(6.0, 4.0, 3.0), params.clone()).unwrap();
    let doc = maker.generate(true).unwrap().to_svg(&params).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("box-6x4x3.svg");
    doc.save(&file).unwrap();

    let written = std::fs::read_to_string(&file).unwrap();
    assert_eq!(written, doc.render());
}
