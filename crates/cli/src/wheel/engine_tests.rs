// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::wheel::layout::MonospaceMeasure;
use crate::wheel::scheduler::slice_mid_angle;
use crate::wheel::share::decode_share_token;
use proptest::prelude::*;
use std::f64::consts::TAU;

const FOODS: &str = "Pizza\nSushi\nBurgers\nTacos";

fn wheel(text: &str) -> Wheel {
    let mut wheel = Wheel::default().with_seed(1234);
    wheel.set_text(text);
    wheel
}

fn run_to_completion(wheel: &mut Wheel, start: u64) -> SpinOutcome {
    let mut now = start;
    loop {
        now += 16;
        if let Tick::Settled(outcome) = wheel.tick(now) {
            return outcome;
        }
        assert!(now < start + 60_000, "spin never settled");
    }
}

fn assert_under_pointer(wheel: &Wheel, index: usize) {
    let pointer = wheel.spin_config().pointer_angle;
    let mid = slice_mid_angle(index, wheel.len().max(1));
    let diff = (normalize_angle(mid + wheel.rotation()) - pointer).abs();
    assert!(diff < 1e-6 || (TAU - diff) < 1e-6, "off by {}", diff);
}

#[test]
fn burgers_scenario() {
    let mut wheel = wheel(FOODS);
    let plan = SpinPlan {
        winner: 2,
        turns: 4,
        duration_ms: 3500,
    };

    let request = wheel.request_spin_with(plan, 0);
    assert!(request.is_started());
    let outcome = run_to_completion(&mut wheel, 0);

    assert_eq!(outcome.index, 2);
    assert_eq!(outcome.label, "Burgers");
    assert!(!outcome.pruned);
    assert_eq!(outcome.persist_text, None);
    assert_eq!(wheel.last_winner(), Some("Burgers"));
    assert!((slice_mid_angle(2, 4) - 225f64.to_radians()).abs() < 1e-9);
    assert_under_pointer(&wheel, 2);
    assert_eq!(wheel.candidate_at_pointer().unwrap().label(), "Burgers");
}

#[test]
fn settled_rotation_is_normalized() {
    let mut wheel = wheel(FOODS);
    wheel.request_spin(0);
    let outcome = run_to_completion(&mut wheel, 0);
    assert!((0.0..TAU).contains(&wheel.rotation()));
    assert_eq!(outcome.rotation, wheel.rotation());
}

#[test]
fn random_spin_lands_on_reported_winner() {
    let mut wheel = wheel(FOODS);
    for round in 0..10 {
        let start = round * 10_000;
        assert!(wheel.request_spin(start).is_started());
        let outcome = run_to_completion(&mut wheel, start);
        assert_under_pointer(&wheel, outcome.index);
        assert_eq!(wheel.candidate_at_pointer().unwrap().label(), outcome.label);
    }
}

#[test]
fn rotation_carries_across_spins() {
    let mut wheel = wheel(FOODS);
    wheel.request_spin_with(
        SpinPlan {
            winner: 1,
            turns: 4,
            duration_ms: 100,
        },
        0,
    );
    run_to_completion(&mut wheel, 0);
    let before = wheel.rotation();

    match wheel.request_spin_with(
        SpinPlan {
            winner: 3,
            turns: 4,
            duration_ms: 100,
        },
        1_000,
    ) {
        SpinRequest::Started { target_angle, .. } => assert!(target_angle > before),
        other => panic!("expected start, got {:?}", other),
    }
    match wheel.tick(1_010) {
        Tick::Spinning { angle, .. } => assert!(angle >= before),
        other => panic!("expected spinning, got {:?}", other),
    }
}

#[test]
fn no_repeats_prunes_winner() {
    let mut wheel = wheel(FOODS);
    wheel.set_no_repeats(true);
    wheel.request_spin_with(
        SpinPlan {
            winner: 2,
            turns: 4,
            duration_ms: 500,
        },
        0,
    );
    let outcome = run_to_completion(&mut wheel, 0);

    assert!(outcome.pruned);
    assert_eq!(outcome.label, "Burgers");
    assert_eq!(outcome.candidate_count, 4);
    assert_eq!(wheel.labels(), vec!["Pizza", "Sushi", "Tacos"]);
    assert_eq!(outcome.persist_text.as_deref(), Some("Pizza\nSushi\nTacos"));
}

#[test]
fn no_repeats_skips_prune_when_list_changed_mid_spin() {
    let mut wheel = wheel(FOODS);
    wheel.set_no_repeats(true);
    wheel.request_spin_with(
        SpinPlan {
            winner: 0,
            turns: 4,
            duration_ms: 500,
        },
        0,
    );
    wheel.set_text("Apples\nPears");
    let outcome = run_to_completion(&mut wheel, 0);

    assert_eq!(outcome.label, "Pizza");
    assert!(!outcome.pruned);
    assert_eq!(wheel.labels(), vec!["Apples", "Pears"]);
}

#[test]
fn request_during_spin_is_a_no_op() {
    let mut wheel = wheel(FOODS);
    wheel.request_spin_with(
        SpinPlan {
            winner: 1,
            turns: 5,
            duration_ms: 4000,
        },
        0,
    );
    let before = wheel.session().cloned().unwrap();

    assert_eq!(wheel.request_spin(100), SpinRequest::AlreadySpinning);
    assert_eq!(
        wheel.request_spin_with(
            SpinPlan {
                winner: 3,
                turns: 4,
                duration_ms: 3300,
            },
            200,
        ),
        SpinRequest::AlreadySpinning
    );
    assert_eq!(wheel.session(), Some(&before));
}

#[test]
fn too_few_candidates_rejected() {
    for text in ["", "Only one"] {
        let mut wheel = wheel(text);
        let labels: Vec<String> = wheel.labels().iter().map(|s| s.to_string()).collect();
        assert_eq!(wheel.request_spin(0), SpinRequest::TooFewCandidates);
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.rotation(), 0.0);
        assert_eq!(wheel.labels(), labels);
        assert_eq!(wheel.tick(100), Tick::Idle);
    }
}

#[test]
fn out_of_range_plan_rejected() {
    let mut wheel = wheel("a\nb");
    let request = wheel.request_spin_with(
        SpinPlan {
            winner: 5,
            turns: 4,
            duration_ms: 100,
        },
        0,
    );
    assert_eq!(request, SpinRequest::InvalidPlan);
    assert!(!wheel.is_spinning());
}

#[test]
fn replace_all_keeps_rotation() {
    let mut wheel = wheel(FOODS);
    wheel.request_spin(0);
    run_to_completion(&mut wheel, 0);
    let rotation = wheel.rotation();

    wheel.set_text("x\ny\nz");
    assert_eq!(wheel.rotation(), rotation);
    assert_eq!(wheel.len(), 3);
}

#[test]
fn remove_at_shifts_positions() {
    let mut wheel = wheel(FOODS);
    let removed = wheel.remove_at(1).unwrap();
    assert_eq!(removed.label(), "Sushi");
    assert_eq!(wheel.labels(), vec!["Pizza", "Burgers", "Tacos"]);
    assert!(wheel.remove_at(3).is_none());
}

#[test]
fn push_ignores_blank() {
    let mut wheel = wheel("");
    assert!(wheel.push("  Ramen "));
    assert!(!wheel.push("   "));
    assert_eq!(wheel.labels(), vec!["Ramen"]);
}

#[test]
fn clear_empties() {
    let mut wheel = wheel(FOODS);
    wheel.clear();
    assert!(wheel.is_empty());
    assert_eq!(wheel.text(), "");
}

#[test]
fn shuffle_is_a_permutation() {
    let mut wheel = wheel("a\nb\nc\nd\ne\nf\ng\nh");
    let mut original: Vec<String> = wheel.labels().iter().map(|s| s.to_string()).collect();
    wheel.shuffle();
    let mut shuffled: Vec<String> = wheel.labels().iter().map(|s| s.to_string()).collect();
    assert_eq!(shuffled.len(), 8);
    original.sort();
    shuffled.sort();
    assert_eq!(original, shuffled);
}

#[test]
fn shuffle_eventually_reorders() {
    let mut wheel = wheel("a\nb\nc\nd\ne");
    let original = wheel.text();
    let changed = (0..20).any(|_| {
        wheel.shuffle();
        wheel.text() != original
    });
    assert!(changed);
}

#[test]
fn seeded_wheels_agree() {
    let mut a = wheel(FOODS);
    let mut b = wheel(FOODS);
    assert_eq!(a.request_spin(0), b.request_spin(0));
}

#[test]
fn layout_honours_equalize_setting() {
    let mut wheel = wheel("a\nb\nc");
    let measure = MonospaceMeasure::new(8.0);
    let hue = wheel.layout(&measure).slices[1].fill.hue;
    assert!((hue - 137.508).abs() < 1e-9);

    wheel.set_equalize_colors(true);
    let hue = wheel.layout(&measure).slices[1].fill.hue;
    assert!((hue - 120.0).abs() < 1e-9);
}

#[test]
fn share_token_round_trips_text() {
    let wheel = wheel(FOODS);
    assert_eq!(decode_share_token(&wheel.share_token()), FOODS);
}

#[test]
fn pointer_lookup_on_empty_wheel() {
    let wheel = wheel("");
    assert_eq!(wheel.index_at_pointer(), None);
}

proptest! {
    #[test]
    fn no_repeats_shrinks_by_one(count in 2usize..20, seed in any::<u64>()) {
        let text = (0..count).map(|i| format!("c{}", i)).collect::<Vec<_>>().join("\n");
        let mut wheel = Wheel::default().with_seed(seed);
        wheel.set_text(&text);
        wheel.set_no_repeats(true);
        prop_assert!(wheel.request_spin(0).is_started());
        let outcome = run_to_completion(&mut wheel, 0);
        prop_assert_eq!(wheel.len(), count - 1);
        prop_assert!(!wheel.labels().contains(&outcome.label.as_str()));
        prop_assert_eq!(outcome.label, format!("c{}", outcome.index));
    }
}
