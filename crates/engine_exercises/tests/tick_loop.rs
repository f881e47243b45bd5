//! End-to-end runs of the exercise driver.

use approx::assert_abs_diff_eq;
use engine_exercises::exercise::INITIAL_VECTORS;
use engine_exercises::{Exercise, ExerciseConfig, Orientation, TickLoop};
use engine_math::{Matrix4x4, Quat, Vec3};

fn run(config: ExerciseConfig) -> engine_exercises::RunSummary {
    TickLoop::new(config.with_tick_rate(0.0)).run()
}

#[test]
fn single_exercise_half_turn_from_json() {
    let config = ExerciseConfig::from_json(r#"{ "exercise": 1, "angle": 2.0, "ticks": 90 }"#)
        .unwrap();
    let summary = run(config);

    assert_eq!(summary.ticks, 90);
    assert!(
        summary.vectors[0].approximately_equal(Vec3::new(-10.0, 0.0, 0.0), 1e-3),
        "{:?}",
        summary.vectors[0]
    );
    assert_eq!(&summary.vectors[1..], &INITIAL_VECTORS[1..]);
}

#[test]
fn chain_exercise_matches_single_matrix() {
    let angle = 3.0;
    let ticks = 25;
    let summary = run(
        ExerciseConfig::default()
            .with_exercise(Exercise::Chain)
            .with_angle(angle)
            .with_ticks(ticks),
    );

    // 25 small steps about Y equal one rotation by the total angle.
    let total = Matrix4x4::rotate(Quat::euler(0.0, angle * ticks as f32, 0.0));
    for (actual, start) in summary.vectors.iter().zip(&INITIAL_VECTORS).take(3) {
        assert!(actual.approximately_equal(total.transform_point(*start), 1e-3));
    }
}

#[test]
fn mirror_exercise_preserves_lengths() {
    let summary = run(
        ExerciseConfig::default()
            .with_exercise(Exercise::Mirror)
            .with_angle(7.0)
            .with_ticks(50),
    );
    for (actual, start) in summary.vectors.iter().zip(&INITIAL_VECTORS) {
        assert_abs_diff_eq!(actual.magnitude(), start.magnitude(), epsilon = 1e-3);
    }
}

#[test]
fn planar_point_circles_back() {
    let mut config = ExerciseConfig::default().with_ticks(360);
    config.planar.angle = 1.0;
    config.planar.orientation = Orientation::Clockwise;
    config.planar_start = Vec3::new(0.0, 5.0, 0.0);

    let summary = run(config);
    assert!(summary.planar_point.approximately_equal(Vec3::new(0.0, 5.0, 0.0), 1e-3));
}

#[test]
fn orientation_reported_in_summary() {
    let angles = Vec3::new(10.0, 20.0, 30.0);
    let summary = run(ExerciseConfig::default().with_ticks(1).with_axis_angles(angles));
    let expected = Quat::from_axis_angle(Vec3::RIGHT, 10.0)
        * Quat::from_axis_angle(Vec3::UP, 20.0)
        * Quat::from_axis_angle(Vec3::FORWARD, 30.0);
    assert!(summary.orientation.approx_eq(expected));
}
