use super::*;

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("shape_{i:02}")).collect()
}

fn cfg(c: u64, d: u64) -> ScheduleConfig {
    ScheduleConfig {
        convergence_frame: c,
        travel_duration: d,
    }
}

fn frames(s: &Schedule) -> Vec<(u64, u64)> {
    s.entries.iter().map(|e| (e.start.0, e.end.0)).collect()
}

#[test]
fn twelve_shapes_spread_over_the_window() {
    let s = schedule(&ids(12), cfg(200, 30)).unwrap();
    assert!((s.gap - 170.0 / 11.0).abs() < 1e-9);
    assert_eq!(s.entries.len(), 12);
    assert_eq!(frames(&s)[0], (0, 30));
    assert_eq!(frames(&s)[11], (170, 200));
    assert_eq!(frames(&s)[1], (15, 45));
    assert_eq!(frames(&s)[5], (77, 107));
}

#[test]
fn single_shape_starts_at_zero() {
    let s = schedule(&ids(1), cfg(200, 30)).unwrap();
    assert_eq!(frames(&s), vec![(0, 30)]);
}

#[test]
fn empty_input_yields_empty_schedule() {
    let s = schedule(&ids(0), cfg(200, 30)).unwrap();
    assert!(s.entries.is_empty());
}

#[test]
fn duration_longer_than_window_is_rejected() {
    let err = schedule(&ids(3), cfg(200, 250)).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn duration_equal_to_window_stacks_everything_at_zero() {
    let s = schedule(&ids(4), cfg(60, 60)).unwrap();
    assert!(frames(&s).iter().all(|&f| f == (0, 60)));
}

#[test]
fn dense_schedules_share_start_frames() {
    let s = schedule(&ids(50), cfg(40, 30)).unwrap();
    let starts: Vec<u64> = s.entries.iter().map(|e| e.start.0).collect();
    assert!(starts.windows(2).any(|w| w[0] == w[1]));
    assert_eq!(*starts.last().unwrap(), 10);
}

#[test]
fn windows_respect_bounds_and_ordering() {
    for n in [1usize, 2, 3, 7, 12, 33, 200] {
        for (c, d) in [(200u64, 30u64), (240, 1), (31, 30), (10, 0), (1, 1)] {
            let s = schedule(&ids(n), cfg(c, d)).unwrap();
            assert_eq!(s.entries.len(), n);
            assert_eq!(s.entries[0].start.0, 0);
            for e in &s.entries {
                assert!(e.end.0 <= c, "n={n} c={c} d={d}: {e:?}");
                assert_eq!(e.end.0 - e.start.0, d);
            }
            assert!(s.entries.windows(2).all(|w| w[0].start <= w[1].start));
        }
    }
}

#[test]
fn entries_keep_caller_order() {
    let order = ["key", "wing_l", "wing_r"];
    let s = schedule(&order, cfg(100, 20)).unwrap();
    let got: Vec<&str> = s.entries.iter().map(|e| e.shape_id.as_str()).collect();
    assert_eq!(got, order);
    assert_eq!(s.entry("wing_r").unwrap().end, FrameIndex(100));
    assert!(s.entry("missing").is_none());
}
