use glam::Vec3;
use learngl::{Camera, InputState, Movement};
use winit::keyboard::KeyCode;

#[test]
fn walking_follows_the_view_direction() {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));

    // turn 90 degrees right (900 px at 0.1 deg/px), now facing +X
    camera.process_mouse_movement(900.0, 0.0, true);
    assert!((camera.front() - Vec3::X).length() < 1e-5);

    camera.process_keyboard(Movement::Forward, 1.0);
    assert!((camera.position() - Vec3::new(2.5, 0.0, 3.0)).length() < 1e-4);
}

#[test]
fn looking_straight_up_is_stopped_short() {
    let mut camera = Camera::default();
    camera.process_mouse_movement(0.0, 5000.0, true);
    assert!(camera.front().y < 1.0);
    assert!(camera.up().is_finite());
    assert!((camera.up().length() - 1.0).abs() < 1e-5);
}

#[test]
fn a_frame_of_input_drives_the_camera() {
    let mut input = InputState::new(800, 600);
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));

    input.key(KeyCode::KeyA, true);
    input.cursor_moved(400.0, 300.0);
    input.scrolled(-3.0);
    input.apply_to(&mut camera, 0.2);
    input.end_frame();

    assert!((camera.position() - Vec3::new(-0.5, 0.0, 3.0)).length() < 1e-5);
    assert_eq!(camera.zoom(), 45.0);

    // held key keeps moving on the next frame, offsets do not repeat
    input.apply_to(&mut camera, 0.2);
    assert!((camera.position() - Vec3::new(-1.0, 0.0, 3.0)).length() < 1e-5);
    assert_eq!(camera.yaw(), -90.0);
}

#[test]
fn projection_narrows_with_zoom() {
    let mut camera = Camera::default();
    let wide = camera.projection_matrix(4.0 / 3.0);
    camera.process_mouse_scroll(20.0);
    let narrow = camera.projection_matrix(4.0 / 3.0);
    assert!(narrow.y_axis.y > wide.y_axis.y);
}
