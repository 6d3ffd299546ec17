use pcp_chart::view_controller::ViewController;

#[test]
fn test_clamp_drag_x() {
    assert_eq!(ViewController::clamp_drag_x(-5.0, 100.0), 0.0);
    assert_eq!(ViewController::clamp_drag_x(150.0, 100.0), 100.0);
    assert_eq!(ViewController::clamp_drag_x(42.5, 100.0), 42.5);
    assert_eq!(ViewController::clamp_drag_x(f32::NAN, 100.0), 0.0);
    // Degenerate width collapses everything onto 0.
    assert_eq!(ViewController::clamp_drag_x(10.0, -20.0), 0.0);
}

#[test]
fn test_clamp_density() {
    assert_eq!(ViewController::clamp_density(0), 1);
    assert_eq!(ViewController::clamp_density(-3), 1);
    assert_eq!(ViewController::clamp_density(57), 57);
    assert_eq!(ViewController::clamp_density(250), 100);
}

#[test]
fn test_sample_size_rounds_half_up() {
    assert_eq!(ViewController::sample_size(40, 5), 2);
    assert_eq!(ViewController::sample_size(60, 5), 3);
    // 1.5 rows
    assert_eq!(ViewController::sample_size(50, 3), 2);
    // 0.1 rows
    assert_eq!(ViewController::sample_size(1, 10), 0);
    assert_eq!(ViewController::sample_size(100, 7), 7);
    assert_eq!(ViewController::sample_size(100, 0), 0);
}

#[test]
fn test_initial_axis_positions() {
    assert_eq!(
        ViewController::initial_axis_positions(3, 1000.0),
        vec![0.0, 500.0, 1000.0]
    );
    assert_eq!(ViewController::initial_axis_positions(1, 1000.0), vec![0.0]);
    assert!(ViewController::initial_axis_positions(0, 1000.0).is_empty());
}

#[test]
fn test_map_pixels_to_density() {
    assert_eq!(ViewController::map_pixels_to_density(0.0, 300.0), 1);
    assert_eq!(ViewController::map_pixels_to_density(300.0, 300.0), 100);
    assert_eq!(ViewController::map_pixels_to_density(-10.0, 300.0), 1);
    assert_eq!(ViewController::map_pixels_to_density(400.0, 300.0), 100);
    assert_eq!(ViewController::map_pixels_to_density(150.0, 300.0), 51);
    assert_eq!(ViewController::map_pixels_to_density(10.0, 0.0), 1);
}
