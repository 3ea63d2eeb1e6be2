use arrow_core::gameplay::gesture::LimbDirections;
use arrow_core::gameplay::resolver::{MissReason, ScoreOutcome, ScoreResolver};
use arrow_core::gameplay::scheduler::{Prompt, PromptId};
use arrow_core::gameplay::zones::{ScoreZone, ZoneTable};
use arrow_core::ResolvePolicy;
use assert_matches::assert_matches;
use pose_schema::Direction;

fn zones() -> ZoneTable {
    ZoneTable::new(vec![
        ScoreZone::new("tight", 15.0, 100),
        ScoreZone::new("medium", 30.0, 70),
        ScoreZone::new("good", 50.0, 40),
    ])
    .unwrap()
}

fn resolver(policy: ResolvePolicy) -> ScoreResolver {
    ScoreResolver::new(zones(), 100.0, policy)
}

/// Prompt of width 50 whose center sits at `center`.
fn prompt_centered_at(direction: Direction, center: f64) -> Prompt {
    Prompt {
        id: PromptId(7),
        direction,
        position: center - 25.0,
        width: 50.0,
        outcome: None,
    }
}

fn raised(direction: Direction) -> LimbDirections {
    LimbDirections {
        left: None,
        right: Some(direction),
    }
}

#[test]
fn test_matched_prompt_near_center_scores_tight_zone() {
    let resolver = resolver(ResolvePolicy::OnEntry);
    let mut prompt = prompt_centered_at(Direction::E, 112.0);

    let outcome = resolver.resolve(&mut prompt, &raised(Direction::E)).expect("prompt is in the span");
    assert_eq!(
        outcome,
        ScoreOutcome::Hit {
            zone: "tight".to_string(),
            points: 100,
            offset: 12.0
        }
    );
    assert!(prompt.is_resolved());
}

#[test]
fn test_boundary_offset_goes_to_the_narrower_zone() {
    let resolver = resolver(ResolvePolicy::OnEntry);
    let limbs = raised(Direction::S);

    assert_matches!(
        resolver.evaluate(Direction::S, 15.0, &limbs),
        ScoreOutcome::Hit { points: 100, .. }
    );
    assert_matches!(
        resolver.evaluate(Direction::S, 30.0, &limbs),
        ScoreOutcome::Hit { points: 70, .. }
    );
    assert_matches!(
        resolver.evaluate(Direction::S, 50.0, &limbs),
        ScoreOutcome::Hit { points: 40, .. }
    );
}

#[test]
fn test_either_limb_can_match() {
    let resolver = resolver(ResolvePolicy::OnEntry);
    let left_only = LimbDirections {
        left: Some(Direction::NW),
        right: Some(Direction::E),
    };

    assert!(resolver.evaluate(Direction::NW, 0.0, &left_only).is_hit());
    assert!(resolver.evaluate(Direction::E, 0.0, &left_only).is_hit());
    assert!(!resolver.evaluate(Direction::N, 0.0, &left_only).is_hit());
}

#[test]
fn test_wrong_gesture_is_a_miss_but_prompt_stays() {
    let resolver = resolver(ResolvePolicy::OnEntry);
    let mut prompt = prompt_centered_at(Direction::N, 100.0);

    let outcome = resolver.resolve(&mut prompt, &raised(Direction::S)).unwrap();
    assert_matches!(outcome, ScoreOutcome::Miss { reason: MissReason::NoGesture, .. });
    assert_eq!(outcome.points(), 0);
    assert!(prompt.is_resolved());
}

#[test]
fn test_unknown_gesture_is_a_miss() {
    let resolver = resolver(ResolvePolicy::OnEntry);
    let mut prompt = prompt_centered_at(Direction::N, 100.0);

    let outcome = resolver.resolve(&mut prompt, &LimbDirections::default()).unwrap();
    assert_matches!(outcome, ScoreOutcome::Miss { reason: MissReason::NoGesture, .. });
}

#[test]
fn test_matched_outside_every_zone_is_a_miss() {
    let resolver = resolver(ResolvePolicy::OnEntry);
    // Leading edge exactly on the span's far end: the footprint overlaps, the center
    // is 75 away.
    let mut prompt = prompt_centered_at(Direction::W, 175.0);
    assert!(resolver.overlaps(&prompt));

    let outcome = resolver.resolve(&mut prompt, &raised(Direction::W)).unwrap();
    assert_eq!(
        outcome,
        ScoreOutcome::Miss {
            reason: MissReason::OutsideZones,
            offset: 75.0
        }
    );
}

#[test]
fn test_resolve_is_at_most_once() {
    let resolver = resolver(ResolvePolicy::OnEntry);
    let mut prompt = prompt_centered_at(Direction::E, 100.0);

    let first = resolver.resolve(&mut prompt, &LimbDirections::default());
    assert!(first.is_some());

    // A later, perfectly matched check must not re-score.
    assert_eq!(resolver.resolve(&mut prompt, &raised(Direction::E)), None);
    assert!(!resolver.is_due(&prompt));
    assert_matches!(prompt.outcome, Some(ScoreOutcome::Miss { .. }));
}

#[test]
fn test_prompt_before_the_span_is_not_due() {
    let resolver = resolver(ResolvePolicy::OnEntry);
    assert_eq!(resolver.span(), (50.0, 150.0));

    let mut prompt = prompt_centered_at(Direction::E, 176.0);
    assert!(!resolver.overlaps(&prompt));
    assert!(!resolver.is_due(&prompt));
    assert_eq!(resolver.resolve(&mut prompt, &raised(Direction::E)), None);
    assert!(!prompt.is_resolved());
}

#[test]
fn test_prompt_that_skipped_the_span_is_missed() {
    let resolver = resolver(ResolvePolicy::OnEntry);
    let mut prompt = prompt_centered_at(Direction::E, 10.0);
    assert!(resolver.has_passed(&prompt));

    let outcome = resolver.resolve(&mut prompt, &raised(Direction::E)).unwrap();
    assert_matches!(outcome, ScoreOutcome::Miss { reason: MissReason::LeftWindow, .. });
}

#[test]
fn test_within_window_waits_for_a_scoring_match() {
    let resolver = resolver(ResolvePolicy::WithinWindow);
    let mut prompt = prompt_centered_at(Direction::NE, 160.0);

    // In the span, but no gesture yet.
    assert_eq!(resolver.resolve(&mut prompt, &LimbDirections::default()), None);
    // Gesture matches, center still outside every zone.
    assert_eq!(resolver.resolve(&mut prompt, &raised(Direction::NE)), None);
    assert!(!prompt.is_resolved());

    prompt.position = 105.0 - 25.0;
    let outcome = resolver.resolve(&mut prompt, &raised(Direction::NE)).unwrap();
    assert_matches!(outcome, ScoreOutcome::Hit { points: 100, .. });
}

#[test]
fn test_within_window_misses_once_passed() {
    let resolver = resolver(ResolvePolicy::WithinWindow);
    let mut prompt = prompt_centered_at(Direction::NE, 100.0);
    assert_eq!(resolver.resolve(&mut prompt, &LimbDirections::default()), None);

    prompt.position = 49.0 - 50.0;
    let outcome = resolver.resolve(&mut prompt, &LimbDirections::default()).unwrap();
    assert_matches!(outcome, ScoreOutcome::Miss { reason: MissReason::LeftWindow, .. });
    assert_eq!(resolver.resolve(&mut prompt, &raised(Direction::NE)), None);
}
