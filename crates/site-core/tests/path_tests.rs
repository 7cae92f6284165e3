// Host-side tests for the keyframed camera path.

use glam::Vec3;
use site_core::{scene, Easing, Keyframe, PathAnimator, PathMode, Pose, SiteError};

fn pose(x: f32) -> Pose {
    Pose::new(Vec3::new(x, x * 0.5, -x), Vec3::new(0.0, x, 0.0))
}

fn two_point() -> PathAnimator {
    PathAnimator::clamped(vec![
        Keyframe::new(0.0, pose(0.0)),
        Keyframe::new(1.0, pose(10.0)),
    ])
    .unwrap()
}

#[test]
fn empty_table_fails_at_construction() {
    assert_eq!(
        PathAnimator::clamped(Vec::new()).unwrap_err(),
        SiteError::EmptyKeyframes
    );
}

#[test]
fn malformed_tables_are_rejected() {
    let err = PathAnimator::clamped(vec![
        Keyframe::new(0.0, pose(0.0)),
        Keyframe::new(0.5, pose(1.0)),
        Keyframe::new(0.5, pose(2.0)),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        SiteError::NonIncreasingThreshold { index: 2, .. }
    ));

    let err = PathAnimator::clamped(vec![Keyframe::new(f32::NAN, pose(0.0))]).unwrap_err();
    assert_eq!(err, SiteError::NonFiniteKeyframe { index: 0 });

    let bad_pose = Pose::new(Vec3::new(f32::INFINITY, 0.0, 0.0), Vec3::ZERO);
    let err = PathAnimator::clamped(vec![
        Keyframe::new(0.0, pose(0.0)),
        Keyframe::new(1.0, bad_pose),
    ])
    .unwrap_err();
    assert_eq!(err, SiteError::NonFiniteKeyframe { index: 1 });
}

#[test]
fn out_of_domain_progress_clamps_to_endpoints() {
    let path = two_point();
    assert_eq!(path.pose_at(-5.0), pose(0.0));
    assert_eq!(path.pose_at(5.0), pose(10.0));
    assert_eq!(path.pose_at(f32::NEG_INFINITY), pose(0.0));
    assert_eq!(path.pose_at(f32::NAN), pose(0.0));
}

#[test]
fn exact_keyframe_progress_returns_authored_pose() {
    let path = PathAnimator::clamped(scene::camera_keyframes()).unwrap();
    for kf in path.keyframes() {
        assert_eq!(path.pose_at(kf.threshold), kf.pose);
    }
}

#[test]
fn single_keyframe_is_constant() {
    let path = PathAnimator::clamped(vec![Keyframe::new(0.3, pose(4.0))]).unwrap();
    assert_eq!(path.domain(), (0.3, 0.3));
    for p in [-1.0, 0.0, 0.3, 0.9] {
        assert_eq!(path.pose_at(p), pose(4.0));
    }
}

#[test]
fn pose_is_continuous_inside_the_domain() {
    let path = PathAnimator::clamped(scene::camera_keyframes()).unwrap();
    let eps = 1e-4;
    let mut p = 0.001;
    while p < 0.999 {
        let jump = path.pose_at(p + eps).distance(&path.pose_at(p));
        // the longest leg is a few hundred units; a 1e-4 step must stay tiny
        assert!(jump < 1.0, "jump {jump} at progress {p}");
        p += 0.0037;
    }
}

#[test]
fn smoothstep_segments_rest_at_keyframes() {
    let path = two_point();
    let h = 1e-3;
    let near_start = path.pose_at(h).distance(&pose(0.0));
    let mid = path.pose_at(0.5 + h).distance(&path.pose_at(0.5));
    assert!(near_start < mid * 0.05, "start={near_start} mid={mid}");
}

#[test]
fn linear_segment_interpolates_componentwise() {
    let path = PathAnimator::clamped(vec![
        Keyframe::new(0.0, pose(0.0)).with_easing(Easing::Linear),
        Keyframe::new(2.0, pose(10.0)),
    ])
    .unwrap();
    let mid = path.pose_at(1.0);
    assert!(mid.distance(&pose(5.0)) < 1e-4);
}

#[test]
fn hard_cut_holds_until_next_keyframe() {
    let path = PathAnimator::clamped(vec![
        Keyframe::new(0.0, pose(0.0)).cut(),
        Keyframe::new(1.0, pose(10.0)),
    ])
    .unwrap();
    assert_eq!(path.pose_at(0.999), pose(0.0));
    assert_eq!(path.pose_at(1.0), pose(10.0));
}

#[test]
fn looping_path_wraps_without_a_seam() {
    let path = PathAnimator::new(
        vec![
            Keyframe::new(0.0, pose(0.0)),
            Keyframe::new(0.5, pose(8.0)),
            Keyframe::new(1.0, pose(0.0)),
        ],
        PathMode::Loop,
    )
    .unwrap();
    assert!(path.pose_at(1.25).distance(&path.pose_at(0.25)) < 1e-4);
    assert!(path.pose_at(-0.75).distance(&path.pose_at(0.25)) < 1e-4);
    let before = path.pose_at(0.9999);
    let after = path.pose_at(1.0001);
    assert!(before.distance(&after) < 1e-2);
}

#[test]
fn looping_path_must_be_closed() {
    let err = PathAnimator::new(
        vec![Keyframe::new(0.0, pose(0.0)), Keyframe::new(1.0, pose(1.0))],
        PathMode::Loop,
    )
    .unwrap_err();
    assert_eq!(err, SiteError::OpenLoop);
}
