use anyhow::{bail, Context};
use arrow_core::gameplay::resolver::ScoreOutcome;
use arrow_core::input::replay::ReplaySource;
use arrow_core::input::KeypointSource;
use arrow_core::{GameConfig, GameSession, TickReport};
use pose_schema::{Direction, PoseScript};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    Spawn { time_ms: u64, prompt: u64, direction: Direction },
    Resolve { time_ms: u64, prompt: u64, outcome: ScoreOutcome },
    Exit { time_ms: u64, prompt: u64 },
}

#[derive(Debug, Serialize)]
pub struct SimulationSummary {
    pub title: String,
    pub ticks: u64,
    pub score: u64,
    pub hits: u32,
    pub misses: u32,
    pub events: Vec<SimEvent>,
}

/// Plays `script` through a fresh session at `tick_hz` ticks per second of script time.
pub fn run_simulation(
    script: &PoseScript,
    config: GameConfig,
    tick_hz: u32,
) -> anyhow::Result<SimulationSummary> {
    if tick_hz == 0 {
        bail!("tick rate must be at least 1 Hz");
    }

    let mut session = GameSession::new(config)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .context("invalid game config")?;
    let mut source = ReplaySource::new(script);

    let Some(scaled) = script.meta.duration_ms.checked_mul(u64::from(tick_hz)) else {
        bail!(
            "script duration {}ms at {} Hz is too long to simulate",
            script.meta.duration_ms,
            tick_hz
        );
    };
    let ticks = scaled / 1000 + 1;
    let mut summary = SimulationSummary {
        title: script.meta.title.clone(),
        ticks,
        score: 0,
        hits: 0,
        misses: 0,
        events: Vec::new(),
    };

    info!(title = %script.meta.title, ticks, tick_hz, "simulation start");
    session.start();
    for k in 0..ticks {
        let now = k as f64 / f64::from(tick_hz);
        let frame = source.sample(now);
        let report = session.tick(now, &frame);
        record(&mut summary, (now * 1000.0).round() as u64, report);
    }
    summary.score = session.score();
    session.stop();

    Ok(summary)
}

fn record(summary: &mut SimulationSummary, time_ms: u64, report: TickReport) {
    if let Some(spawned) = report.spawned {
        summary.events.push(SimEvent::Spawn {
            time_ms,
            prompt: spawned.id.0,
            direction: spawned.direction,
        });
    }
    for r in report.resolved {
        if r.outcome.is_hit() {
            summary.hits += 1;
        } else {
            summary.misses += 1;
        }
        summary.events.push(SimEvent::Resolve {
            time_ms,
            prompt: r.id.0,
            outcome: r.outcome,
        });
    }
    for id in report.exited {
        summary.events.push(SimEvent::Exit { time_ms, prompt: id.0 });
    }
}

pub fn print_table(summary: &SimulationSummary) {
    println!("Simulation: {} ({} ticks)", summary.title, summary.ticks);
    println!("Time(ms) | Prompt | Event");
    println!("---------|--------|------------------");
    for event in &summary.events {
        let (time_ms, prompt, text) = match event {
            SimEvent::Spawn {
                time_ms,
                prompt,
                direction,
            } => (*time_ms, *prompt, format!("spawn {} {:?}", direction.glyph(), direction)),
            SimEvent::Resolve {
                time_ms,
                prompt,
                outcome,
            } => (*time_ms, *prompt, describe(outcome)),
            SimEvent::Exit { time_ms, prompt } => (*time_ms, *prompt, "exit".to_string()),
        };
        println!("{:8} | {:6} | {}", time_ms, prompt, text);
    }
    println!(
        "score={} hits={} misses={}",
        summary.score, summary.hits, summary.misses
    );
}

fn describe(outcome: &ScoreOutcome) -> String {
    match outcome {
        ScoreOutcome::Hit {
            zone,
            points,
            offset,
        } => format!("hit {zone} +{points} (offset {offset:.1})"),
        ScoreOutcome::Miss { reason, offset } => {
            format!("miss {reason:?} (offset {offset:.1})")
        }
    }
}
