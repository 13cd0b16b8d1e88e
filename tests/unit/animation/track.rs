use super::*;
use crate::{
    effects::{EmissionEnvelope, emission_window},
    foundation::core::Aabb,
    shape::Category,
};

fn entry(start: u64, end: u64) -> ScheduleEntry {
    ScheduleEntry {
        shape_id: "wing".to_string(),
        start: FrameIndex(start),
        end: FrameIndex(end),
    }
}

fn wing() -> Shape {
    Shape {
        id: "wing".to_string(),
        bounds: Aabb::from_center_size(Vec3::new(-3.0, 0.0, 1.0), Vec3::new(0.5, 0.1, 0.5)),
        category: Category::LeftAccessory,
        arrival: Vec3::new(-15.0, 15.0, 5.0),
    }
}

#[test]
fn sample_holds_outside_and_interpolates_inside() {
    let t = Track::new(vec![
        Key::new(10, 0.0, Ease::Linear),
        Key::new(20, 10.0, Ease::Linear),
    ])
    .unwrap();
    assert_eq!(t.sample(FrameIndex(0)).unwrap(), 0.0);
    assert_eq!(t.sample(FrameIndex(15)).unwrap(), 5.0);
    assert_eq!(t.sample(FrameIndex(20)).unwrap(), 10.0);
    assert_eq!(t.sample(FrameIndex(99)).unwrap(), 10.0);
}

#[test]
fn constant_segment_steps_at_next_key() {
    let t = Track::new(vec![
        Key::new(0, 1.0, Ease::Constant),
        Key::new(10, 2.0, Ease::Linear),
    ])
    .unwrap();
    assert_eq!(t.sample(FrameIndex(9)).unwrap(), 1.0);
    assert_eq!(t.sample(FrameIndex(10)).unwrap(), 2.0);
}

#[test]
fn new_rejects_empty_and_unsorted() {
    assert!(Track::<f64>::new(vec![]).is_err());
    assert!(
        Track::new(vec![
            Key::new(5, 0.0, Ease::Linear),
            Key::new(1, 1.0, Ease::Linear),
        ])
        .is_err()
    );
}

#[test]
fn empty_track_sample_is_an_error() {
    let t: Track<f64> = Track { keys: vec![] };
    assert!(t.sample(FrameIndex(0)).is_err());
}

#[test]
fn motion_track_starts_offset_and_lands_on_center() {
    let shape = wing();
    let t = motion_track(&shape, &entry(40, 70));
    t.validate().unwrap();

    assert_eq!(t.first_frame(), Some(FrameIndex(40)));
    assert_eq!(t.last_frame(), Some(FrameIndex(70)));
    assert_eq!(t.sample(FrameIndex(0)).unwrap(), Vec3::new(-18.0, 15.0, 6.0));
    assert_eq!(t.sample(FrameIndex(70)).unwrap(), shape.center());
    assert_eq!(t.sample(FrameIndex(500)).unwrap(), shape.center());

    let mid = t.sample(FrameIndex(55)).unwrap();
    assert!((mid.y - 7.5).abs() < 1e-9);
}

#[test]
fn density_follows_emission_window() {
    let w = emission_window(&entry(40, 70), EmissionEnvelope::default());
    let t = density_track(&w);
    t.validate().unwrap();

    assert_eq!(t.sample(FrameIndex(0)).unwrap(), 0.0);
    assert_eq!(t.sample(FrameIndex(34)).unwrap(), 0.0);
    assert_eq!(t.sample(FrameIndex(35)).unwrap(), 1.0);
    assert_eq!(t.sample(FrameIndex(70)).unwrap(), 1.0);
    assert_eq!(t.sample(FrameIndex(75)).unwrap(), 0.5);
    assert_eq!(t.sample(FrameIndex(80)).unwrap(), 0.0);
}

#[test]
fn density_starting_at_zero_has_no_leading_off_key() {
    let w = emission_window(&entry(0, 30), EmissionEnvelope::default());
    let t = density_track(&w);
    assert_eq!(t.keys.len(), 3);
    assert_eq!(t.sample(FrameIndex(0)).unwrap(), 1.0);
}

#[test]
fn fadeout_drops_particle_count_to_zero() {
    let profile = EffectProfile::default();
    let t = fadeout_track(&profile, FadeoutConfig::default());
    assert_eq!(t.sample(FrameIndex(100)).unwrap(), 5000.0);
    assert_eq!(t.sample(FrameIndex(280)).unwrap(), 2500.0);
    assert_eq!(t.sample(FrameIndex(300)).unwrap(), 0.0);
}

#[test]
fn fadeout_rejects_inverted_range() {
    let bad = FadeoutConfig {
        start: 300,
        end: 260,
    };
    assert!(bad.validate().unwrap_err().is_configuration());
}
