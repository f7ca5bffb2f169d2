// src/generator/drunk_agent.rs

//! # Drunk Agent Pass
//!
//! A single agent performs `J` walks of `I` steps each, marking every cell it
//! stands on and, at the end of each walk, possibly stamping a rectangular
//! room around itself.
//!
//! Both random events use an escalating probability: every time the event
//! does not happen its chance grows by a fixed increment, and when it fires
//! the chance drops back to its base value. Long straight runs therefore
//! become increasingly likely to turn, and long stretches without a room
//! become increasingly likely to end in one.
//!
//! The pass only ever adds occupied cells.

use crate::generator::config::AgentParams;
use crate::map::{AgentState, Cell, Grid, Heading};
use log::{debug, trace};
use rand::Rng;

/// Counters collected during one walk call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Steps on which the agent's cell was marked.
    pub steps_marked: usize,
    /// Steps that hit the grid edge and re-rolled the heading instead of moving.
    pub wall_bounces: usize,
    /// Probabilistic heading changes after a successful move.
    pub turns: usize,
    pub rooms: usize,
}

/// Result of one walk call: the new grid plus the agent's final position.
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    pub grid: Grid,
    pub agent: AgentState,
    pub stats: WalkStats,
}

/// An escalating-chance event.
struct AdaptiveChance {
    base: f64,
    increment: f64,
    current: f64,
}

impl AdaptiveChance {
    fn new(base: f64, increment: f64) -> Self {
        Self {
            base,
            increment,
            current: base,
        }
    }

    /// Rolls the event. Resets on success, escalates on failure.
    fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if rng.random::<f64>() < self.current {
            self.current = self.base;
            true
        } else {
            self.current += self.increment;
            false
        }
    }
}

/// Runs one drunk agent pass over a copy of `grid`.
///
/// Heading and both adaptive chances start fresh on every call; only the
/// agent position carries over, through the returned [`WalkOutcome`].
pub fn drunk_agent_walk<R: Rng + ?Sized>(
    grid: &Grid,
    params: &AgentParams,
    agent: AgentState,
    rng: &mut R,
) -> WalkOutcome {
    let mut out = grid.clone();
    let mut agent = agent;
    let mut heading = Heading::default();
    let mut turn = AdaptiveChance::new(params.turn_probability, params.turn_probability_increment);
    let mut room = AdaptiveChance::new(params.room_probability, params.room_probability_increment);
    let mut stats = WalkStats::default();

    for _ in 0..params.walks {
        for _ in 0..params.steps_per_walk {
            if out.set(agent.x, agent.y, Cell::Occupied) {
                stats.steps_marked += 1;
            }

            let candidate = agent.advanced(heading);
            if !out.contains(candidate.x, candidate.y) {
                // Bounce: new heading, no move, turn chance left alone.
                heading = Heading::random(rng);
                stats.wall_bounces += 1;
                continue;
            }
            agent = candidate;

            if turn.roll(rng) {
                heading = Heading::random(rng);
                stats.turns += 1;
            }
        }

        if room.roll(rng) {
            stamp_room(&mut out, agent, params.room_size_x, params.room_size_y);
            stats.rooms += 1;
        }
    }

    debug!(
        "drunk agent pass: {} -> {} occupied, agent at ({}, {}), {:?}",
        grid.occupied_count(),
        out.occupied_count(),
        agent.x,
        agent.y,
        stats
    );

    WalkOutcome {
        grid: out,
        agent,
        stats,
    }
}

/// Occupies a `size_x` by `size_y` rectangle centred on `center`. Odd sizes
/// are exactly centred; even sizes extend one extra cell toward the origin.
/// Off-grid cells are skipped.
fn stamp_room(grid: &mut Grid, center: AgentState, size_x: usize, size_y: usize) {
    let (x_lo, x_hi) = centered_span(center.x, size_x);
    let (y_lo, y_hi) = centered_span(center.y, size_y);
    let mut written = 0;
    for x in x_lo..x_hi {
        for y in y_lo..y_hi {
            if grid.set(x, y, Cell::Occupied) {
                written += 1;
            }
        }
    }
    trace!(
        "room {}x{} at ({}, {}): {} cells in grid",
        size_x,
        size_y,
        center.x,
        center.y,
        written
    );
}

/// Half-open range of `size` coordinates centred on `center`.
fn centered_span(center: i32, size: usize) -> (i32, i32) {
    let size = size as i32;
    let lo = center - size / 2;
    (lo, lo + size)
}
