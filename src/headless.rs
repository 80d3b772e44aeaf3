use crate::config::GameConfig;
use crate::game::arena::{Arena, TickOutcome};
use crate::game::scene::HandleLedger;
use crate::game::types::ArenaSnapshot;
use serde::Serialize;
use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArrivalRecord<'a> {
    tick: u64,
    outcome: TickOutcome,
    snapshot: &'a ArenaSnapshot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub arrivals: u64,
    pub deaths: u64,
    pub best_score: u32,
    pub final_score: u32,
    pub final_length: usize,
}

/// Drives the game on a fixed step with no steering and writes one JSON line
/// per arrival.
pub fn run_headless(
    config: &GameConfig,
    ticks: u64,
    out: &mut impl Write,
) -> anyhow::Result<HeadlessSummary> {
    let mut arena = Arena::new(config, HandleLedger::new())?;
    let best = Rc::new(Cell::new(0u32));
    let best_seen = Rc::clone(&best);
    arena.set_score_observer(move |score| {
        if score > best_seen.get() {
            best_seen.set(score);
        }
    });

    let elapsed = config.frame_seconds();
    let mut summary = HeadlessSummary::default();
    for tick in 0..ticks {
        let outcome = arena.tick(elapsed)?;
        if !outcome.is_arrival() {
            continue;
        }
        summary.arrivals += 1;
        if outcome == TickOutcome::Died {
            summary.deaths += 1;
        }
        let snapshot = arena.snapshot();
        let record = ArrivalRecord {
            tick,
            outcome,
            snapshot: &snapshot,
        };
        serde_json::to_writer(&mut *out, &record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    summary.best_score = best.get();
    summary.final_score = arena.score();
    summary.final_length = arena.chain().len();
    tracing::info!(
        ticks,
        arrivals = summary.arrivals,
        deaths = summary.deaths,
        best_score = summary.best_score,
        final_score = summary.final_score,
        final_length = summary.final_length,
        live_segments = arena.scene().live_count(),
        "headless run finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn make_config() -> GameConfig {
        GameConfig {
            seed: Some(17),
            ..GameConfig::default()
        }
    }

    #[test]
    fn straight_run_hits_the_wall_and_respawns() {
        let mut out = Vec::new();

        let summary = run_headless(&make_config(), 1_000, &mut out).expect("run");

        let lines: Vec<Value> = String::from_utf8(out)
            .expect("utf8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len() as u64, summary.arrivals);
        assert!(summary.deaths >= 1);
        assert!(lines.iter().any(|line| line["outcome"] == "died"));
        assert!(summary.final_score <= summary.best_score);
        assert_eq!(summary.final_length, 5 + summary.final_score as usize);
        for line in &lines {
            assert!(line["snapshot"]["segments"].is_array());
            assert!(line["tick"].is_u64());
        }
    }

    #[test]
    fn zero_ticks_writes_nothing() {
        let mut out = Vec::new();
        let summary = run_headless(&make_config(), 0, &mut out).expect("run");
        assert_eq!(
            summary,
            HeadlessSummary {
                final_length: 5,
                ..HeadlessSummary::default()
            }
        );
        assert!(out.is_empty());
    }
}
