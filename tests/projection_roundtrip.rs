//! Full-pipeline checks: object space through modelview, projection and the
//! viewport mapping, and back again.

use glmath::{
    DMat4, DVec3, ProjectionError, Vec3, look_at_v, ortho, perspective, project, unproject,
};

use std::f64::consts::FRAC_PI_3;

const VIEWPORT: (i32, i32, i32, i32) = (0, 0, 1280, 720);

fn camera() -> (DMat4, DMat4) {
    let modelview = look_at_v(
        DVec3::new(3.0, 4.0, 10.0),
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    );
    let projection = perspective(FRAC_PI_3, 1280.0 / 720.0, 0.5, 100.0);
    (modelview, projection)
}

#[test]
fn perspective_project_unproject_round_trip() {
    let (modelview, projection) = camera();
    let (x0, y0, w, h) = VIEWPORT;

    let points = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 2.0, 3.0),
        DVec3::new(-2.5, 0.75, -1.0),
        DVec3::new(0.0, -3.0, 4.5),
    ];
    for obj in points {
        let win = project(obj, &modelview, &projection, x0, y0, w, h);
        let back = unproject(win, &modelview, &projection, x0, y0, w, h).unwrap();
        assert!(back.approx_eq_threshold(&obj, 1e-5), "{obj} came back as {back}");
    }
}

#[test]
fn ortho_project_unproject_round_trip() {
    let modelview = DMat4::identity();
    let projection = ortho(-10.0, 10.0, -10.0, 10.0, -10.0, 10.0);
    let (x0, y0, w, h) = VIEWPORT;

    let obj = DVec3::new(4.0, -7.5, 2.0);
    let win = project(obj, &modelview, &projection, x0, y0, w, h);
    let back = unproject(win, &modelview, &projection, x0, y0, w, h).unwrap();
    assert!(back.approx_eq_threshold(&obj, 1e-5));
}

#[test]
fn projected_depth_orders_points_front_to_back() {
    let (modelview, projection) = camera();
    let (x0, y0, w, h) = VIEWPORT;

    // closer to the camera at (3, 4, 10) than the origin is
    let near = project(DVec3::new(1.5, 2.0, 5.0), &modelview, &projection, x0, y0, w, h);
    let far = project(DVec3::new(-1.5, -2.0, -5.0), &modelview, &projection, x0, y0, w, h);
    assert!(near.z() < far.z());
    assert!(near.z() > 0.0 && far.z() < 1.0);
}

#[test]
fn view_center_projects_to_viewport_center() {
    let (modelview, projection) = camera();
    let (x0, y0, w, h) = VIEWPORT;

    let win = project(DVec3::zero(), &modelview, &projection, x0, y0, w, h);
    assert!((win.x() - 640.0).abs() < 1e-6);
    assert!((win.y() - 360.0).abs() < 1e-6);
}

#[test]
fn offset_viewport_shifts_window_coordinates() {
    let (modelview, projection) = camera();

    let at_origin = project(DVec3::zero(), &modelview, &projection, 0, 0, 1280, 720);
    let shifted = project(DVec3::zero(), &modelview, &projection, 100, 50, 1280, 720);
    assert!((shifted.x() - at_origin.x() - 100.0).abs() < 1e-6);
    assert!((shifted.y() - at_origin.y() - 50.0).abs() < 1e-6);
    assert_eq!(shifted.z(), at_origin.z());
}

#[test]
fn unproject_rejects_singular_modelview_projection() {
    let collapsed = DMat4::from_diagonal(glmath::DVec4::new(1.0, 1.0, 0.0, 1.0));
    let result = unproject(
        DVec3::new(640.0, 360.0, 0.5),
        &collapsed,
        &DMat4::identity(),
        0,
        0,
        1280,
        720,
    );
    assert_eq!(result, Err(ProjectionError::NotInvertible));
}

#[test]
fn single_precision_round_trip() {
    let modelview = look_at_v(
        Vec3::new(0.0, 0.0, 8.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let projection = perspective(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.5f32, 100.0);
    let (x0, y0, w, h) = VIEWPORT;

    let obj = Vec3::new(1.0, -0.5, 2.0);
    let win = project(obj, &modelview, &projection, x0, y0, w, h);
    let back = unproject(win, &modelview, &projection, x0, y0, w, h).unwrap();
    assert!(back.approx_eq_threshold(&obj, 1e-2));
}
