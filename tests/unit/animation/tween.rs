use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn tween_emits_started_updates_then_finished_once() {
    let mut t = Tween::linear(0.0, 10.0, ms(100));
    let mut ev = Vec::new();

    assert_eq!(t.advance(ms(50), &mut ev), Duration::ZERO);
    assert_eq!(ev, vec![TweenEvent::Started, TweenEvent::Updated(5.0)]);

    ev.clear();
    assert_eq!(t.advance(ms(80), &mut ev), ms(30));
    assert_eq!(ev, vec![TweenEvent::Updated(10.0), TweenEvent::Finished]);

    ev.clear();
    assert_eq!(t.advance(ms(10), &mut ev), ms(10));
    assert!(ev.is_empty());
    assert!(t.is_finished());
    assert_eq!(t.value(), 10.0);
}

#[test]
fn tween_values_are_monotonic_for_increasing_and_decreasing_ranges() {
    for (from, to) in [(0.0, 1.0), (170.0, -190.0)] {
        let mut t = Tween::linear(from, to, ms(1000));
        let mut ev = Vec::new();
        for _ in 0..40 {
            t.advance(ms(33), &mut ev);
        }
        let values: Vec<f64> = ev
            .iter()
            .filter_map(|e| match e {
                TweenEvent::Updated(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(*values.last().unwrap(), to);
        for w in values.windows(2) {
            if to > from {
                assert!(w[0] <= w[1]);
            } else {
                assert!(w[0] >= w[1]);
            }
        }
    }
}

#[test]
fn zero_duration_tween_finishes_on_first_advance() {
    let mut t = Tween::linear(3.0, 4.0, Duration::ZERO);
    assert_eq!(t.fraction(), 0.0);
    let mut ev = Vec::new();
    assert_eq!(t.advance(ms(5), &mut ev), ms(5));
    assert_eq!(
        ev,
        vec![
            TweenEvent::Started,
            TweenEvent::Updated(4.0),
            TweenEvent::Finished
        ]
    );
}

#[test]
fn eased_tween_uses_curve_but_ends_exactly() {
    let mut t = Tween::new(0.0, 100.0, ms(100), Ease::InQuad);
    let mut ev = Vec::new();
    t.advance(ms(50), &mut ev);
    assert!((t.value() - 25.0).abs() < 1e-9);
    t.advance(ms(50), &mut ev);
    assert_eq!(t.value(), 100.0);
}

#[test]
fn sequence_runs_tweens_strictly_in_order() {
    let mut seq = TweenSequence::new(vec![
        Tween::linear(0.0, 1.0, ms(100)),
        Tween::linear(0.0, 1.0, ms(200)),
    ]);
    assert_eq!(seq.total_duration(), ms(300));

    let mut all = Vec::new();
    while !seq.is_finished() {
        all.extend(seq.advance(ms(16)));
    }

    let first_finish = all
        .iter()
        .position(|e| e.index == 0 && e.event == TweenEvent::Finished)
        .unwrap();
    let second_start = all
        .iter()
        .position(|e| e.index == 1 && e.event == TweenEvent::Started)
        .unwrap();
    assert!(first_finish < second_start);
    assert!(all[..first_finish].iter().all(|e| e.index == 0));

    let finishes = all
        .iter()
        .filter(|e| e.event == TweenEvent::Finished)
        .count();
    assert_eq!(finishes, 2);
}

#[test]
fn sequence_carries_leftover_time_into_next_tween() {
    let mut seq = TweenSequence::new(vec![
        Tween::linear(0.0, 1.0, ms(100)),
        Tween::linear(0.0, 10.0, ms(100)),
    ]);
    let ev = seq.advance(ms(150));
    assert_eq!(
        ev.last(),
        Some(&SequenceEvent {
            index: 1,
            event: TweenEvent::Updated(5.0)
        })
    );
    assert_eq!(seq.current_index(), Some(1));
}

#[test]
fn sequence_waits_for_next_advance_on_exact_boundary() {
    let mut seq = TweenSequence::new(vec![
        Tween::linear(0.0, 1.0, ms(100)),
        Tween::linear(0.0, 1.0, ms(100)),
    ]);
    let ev = seq.advance(ms(100));
    assert!(ev.iter().all(|e| e.index == 0));
    assert_eq!(seq.current_index(), Some(1));

    let ev = seq.advance(Duration::ZERO);
    assert_eq!(
        ev,
        vec![
            SequenceEvent {
                index: 1,
                event: TweenEvent::Started
            },
            SequenceEvent {
                index: 1,
                event: TweenEvent::Updated(0.0)
            },
        ]
    );
}
