mod input;
mod render;

use crate::config::GameConfig;
use crate::game::arena::Arena;
use crate::game::math::clamp;
use crate::game::scene::HandleLedger;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use input::{command_for, Command};
use std::io::{stdout, Write};
use tokio::time::{Instant, MissedTickBehavior};

/// Longest frame fed to the game; a stalled terminal should not teleport the snake.
const MAX_FRAME_SECONDS: f64 = 0.25;

pub async fn run_terminal(config: &GameConfig) -> anyhow::Result<()> {
    let (columns, rows) = terminal::size()?;
    render::ensure_fits(columns, rows)?;

    let mut arena = Arena::new(config, HandleLedger::new())?;
    // Raw mode owns the screen; run with stderr redirected to see this.
    arena.set_score_observer(|score| tracing::debug!(score, "score changed"));

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

    let result = drive(&mut arena, config, &mut out).await;

    let restored = restore(&mut out);
    let best = result?;
    restored?;
    tracing::info!(best, "left the game");
    Ok(())
}

fn restore(out: &mut impl Write) -> anyhow::Result<()> {
    execute!(out, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(())
}

async fn drive(
    arena: &mut Arena<HandleLedger>,
    config: &GameConfig,
    out: &mut impl Write,
) -> anyhow::Result<u32> {
    let mut events = EventStream::new();
    let mut interval = tokio::time::interval(config.frame_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_frame = Instant::now();
    let mut best = arena.score();

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = Instant::now();
                let elapsed = clamp(
                    now.duration_since(last_frame).as_secs_f64(),
                    0.0,
                    MAX_FRAME_SECONDS,
                );
                last_frame = now;
                arena.tick(elapsed)?;
                best = best.max(arena.score());
                render::draw(out, &arena.snapshot(), best)?;
            }
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => match command_for(key) {
                        Some(Command::Steer(direction)) => arena.steer(direction),
                        Some(Command::Leave) => return Ok(best),
                        None => {}
                    },
                    Some(Ok(Event::Resize(columns, rows))) => {
                        render::ensure_fits(columns, rows)?;
                        execute!(out, Clear(ClearType::All))?;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(error)) => return Err(error.into()),
                    None => return Ok(best),
                }
            }
        }
    }
}
