use arrow_core::gameplay::scheduler::{PromptId, PromptScheduler};
use arrow_core::GameConfig;

fn config() -> GameConfig {
    GameConfig {
        prompt_width: 50.0,
        seed: Some(42),
        ..GameConfig::default()
    }
}

#[test]
fn test_first_spawn_is_immediate_at_entry_edge() {
    let mut scheduler = PromptScheduler::new(&config());

    let id = scheduler.spawn(0.0).expect("first spawn should not wait");
    assert_eq!(id, PromptId(0));

    let prompt = &scheduler.prompts()[0];
    assert_eq!(prompt.position, 640.0 - 50.0);
    assert_eq!(prompt.width, 50.0);
    assert!(!prompt.is_resolved());
}

#[test]
fn test_spawn_respects_interval() {
    let mut scheduler = PromptScheduler::new(&config());

    assert!(scheduler.spawn(10.0).is_some());
    assert!(scheduler.spawn(11.0).is_none());
    assert!(scheduler.spawn(11.999).is_none());
    assert_eq!(scheduler.spawn(12.0), Some(PromptId(1)));
    assert_eq!(scheduler.last_spawn(), Some(12.0));
}

#[test]
fn test_spawn_is_noop_at_capacity() {
    let mut scheduler = PromptScheduler::new(&GameConfig {
        spawn_interval_secs: 0.0,
        ..config()
    });

    for _ in 0..3 {
        assert!(scheduler.spawn(0.0).is_some());
    }
    assert!(!scheduler.can_spawn(100.0));
    assert!(scheduler.spawn(100.0).is_none());
    assert_eq!(scheduler.prompts().len(), 3);

    // Free a slot by running every prompt off the track.
    scheduler.advance(10.0);
    assert_eq!(scheduler.purge_exited().len(), 3);
    assert_eq!(scheduler.spawn(100.0), Some(PromptId(3)));
}

#[test]
fn test_advance_scales_with_elapsed_time() {
    let mut a = PromptScheduler::new(&config());
    let mut b = PromptScheduler::new(&config());
    a.spawn(0.0);
    b.spawn(0.0);

    // 60 small steps and 1 large step cover the same distance.
    for _ in 0..60 {
        a.advance(1.0 / 60.0);
    }
    b.advance(1.0);

    let pa = a.prompts()[0].position;
    let pb = b.prompts()[0].position;
    assert!((pa - pb).abs() < 1e-9);
    assert!((pb - (590.0 - 300.0)).abs() < 1e-9);
}

#[test]
fn test_purge_keeps_order_of_survivors() {
    let mut scheduler = PromptScheduler::new(&GameConfig {
        spawn_interval_secs: 0.5,
        ..config()
    });

    scheduler.spawn(0.0);
    scheduler.advance(1.0);
    scheduler.spawn(1.0);
    scheduler.advance(1.0);
    scheduler.spawn(2.0);

    // Oldest prompt: 590 - 600 = -10, trailing edge 40 -> still on track.
    assert!(scheduler.purge_exited().is_empty());

    // Oldest: -10 - 60 = -70 (gone); middle: 290 - 60 = 230; newest 530.
    scheduler.advance(0.2);
    let exited = scheduler.purge_exited();
    assert_eq!(exited.len(), 1);
    assert_eq!(exited[0].id, PromptId(0));

    let ids: Vec<PromptId> = scheduler.prompts().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![PromptId(1), PromptId(2)]);
}

#[test]
fn test_exit_is_based_on_trailing_edge() {
    let mut scheduler = PromptScheduler::new(&config());
    scheduler.spawn(0.0);

    // Leading edge at -50, trailing edge exactly 0: still visible.
    scheduler.advance(640.0 / 300.0);
    let prompt = &scheduler.prompts()[0];
    assert!((prompt.trailing_edge()).abs() < 1e-9);

    scheduler.advance(0.01);
    assert!(scheduler.prompts()[0].has_exited());
    assert_eq!(scheduler.purge_exited().len(), 1);
    assert!(scheduler.prompts().is_empty());
}

#[test]
fn test_reset_clears_prompts_and_timer() {
    let mut scheduler = PromptScheduler::new(&config());
    scheduler.spawn(5.0);
    scheduler.reset();

    assert!(scheduler.prompts().is_empty());
    assert_eq!(scheduler.last_spawn(), None);
    assert_eq!(scheduler.spawn(5.1), Some(PromptId(1)));
}

#[test]
fn test_same_seed_same_directions() {
    let mut a = PromptScheduler::new(&GameConfig {
        spawn_interval_secs: 0.0,
        max_active: 8,
        ..config()
    });
    let mut b = PromptScheduler::new(&GameConfig {
        spawn_interval_secs: 0.0,
        max_active: 8,
        ..config()
    });
    for _ in 0..8 {
        a.spawn(0.0);
        b.spawn(0.0);
    }

    let da: Vec<_> = a.prompts().iter().map(|p| p.direction).collect();
    let db: Vec<_> = b.prompts().iter().map(|p| p.direction).collect();
    assert_eq!(da, db);
}
