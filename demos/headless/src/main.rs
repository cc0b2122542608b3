//! headless — drive the rust_dla engine without a renderer.
//!
//! Grows an aggregate on a 2 × 0.5 × 2 slab.  The "pointer" circles the slab
//! centre and the active pattern cycles every few hundred ticks, the way a
//! user would click through patterns in an interactive host.
//!
//! ```text
//! headless [TICKS] [PARAMS.json] [OUT.json]
//! ```
//!
//! `PARAMS.json` may hold any subset of `SimParams` fields; missing fields use
//! the defaults.  `OUT.json`, when given, receives the final aggregate.
//! Set `RUST_LOG=debug` to see every spawn batch.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::time::Instant;

use anyhow::{Context, Result};
use glam::Vec3;

use dla_contact::ProximityOracle;
use dla_core::{MeshGeometry, SimParams, SpawnPattern, Tick, WalkerId};
use dla_sim::{Command, SimBuilder, SimObserver, TickStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_TICKS:      u64 = 3_000;
const PATTERN_HOLD_TICKS: u64 = 400;
const REPORT_EVERY:       u64 = 250;
/// Radius of the pointer's path over the slab.
const ORBIT_RADIUS:       f32 = 0.4;
const ORBIT_TICKS:        f32 = 900.0;

// ── Progress observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct Progress {
    spawned:    usize,
    culled:     usize,
    aggregated: usize,
    highest:    f32,
}

impl SimObserver for Progress {
    fn on_aggregated(&mut self, _tick: Tick, _walker: WalkerId, position: Vec3) {
        self.highest = self.highest.max(position.y);
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        self.spawned += stats.spawned;
        self.culled += stats.culled;
        self.aggregated += stats.aggregated;
        if stats.tick.0.is_multiple_of(REPORT_EVERY) {
            log::info!(
                "{}: {} active, {} frozen, {} culled, peak {:.3}",
                stats.tick,
                stats.active,
                self.aggregated,
                self.culled,
                self.highest,
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_params(path: Option<&String>) -> Result<SimParams> {
    let Some(path) = path else {
        return Ok(SimParams::default());
    };
    let file = File::open(path).with_context(|| format!("opening params file {path}"))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing params file {path}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let ticks = match args.first() {
        Some(t) => t.parse::<u64>().with_context(|| format!("bad tick count {t:?}"))?,
        None => DEFAULT_TICKS,
    };
    let params = load_params(args.get(1))?;
    let out_path = args.get(2);

    // 1. Surface: top face at y = 0.
    let surface = MeshGeometry::new(Vec3::new(0.0, -0.25, 0.0), Vec3::new(2.0, 0.5, 2.0));

    // 2. Pointer orbiting the slab centre.
    let mut frame = 0u64;
    let pointer = move || {
        let angle = std::f32::consts::TAU * (frame as f32 / ORBIT_TICKS);
        frame += 1;
        Some(Vec3::new(ORBIT_RADIUS * angle.cos(), 0.0, ORBIT_RADIUS * angle.sin()))
    };

    // 3. Build.
    let oracle = ProximityOracle::new(surface, params.walker_size);
    let mut sim = SimBuilder::new(params, oracle, pointer)
        .geometry(&surface)
        .build()?;

    println!("=== headless — rust_dla ===");
    println!(
        "Ticks: {ticks}  |  Seed: {}  |  Walker size: {}",
        sim.params.seed, sim.params.walker_size
    );

    // 4. Run, cycling patterns.
    let mut progress = Progress::default();
    let started = Instant::now();
    for t in 0..ticks {
        if t > 0 && t.is_multiple_of(PATTERN_HOLD_TICKS) {
            let next = (t / PATTERN_HOLD_TICKS) as usize % SpawnPattern::ALL.len();
            sim.apply_command(Command::SelectPattern(SpawnPattern::ALL[next]));
        }
        sim.tick_with(&mut progress);
    }
    let elapsed = started.elapsed();

    // 5. Summary.
    println!();
    println!("Spawned:     {}", progress.spawned);
    println!("Aggregated:  {}", sim.walkers.aggregated_count());
    println!("Culled:      {}", progress.culled);
    println!("Still alive: {}", sim.walkers.active_len());
    println!("Peak height: {:.4}", progress.highest);
    println!(
        "Wall time:   {:.2?} ({:.1} µs/tick)",
        elapsed,
        elapsed.as_secs_f64() * 1e6 / ticks.max(1) as f64
    );

    if let Some(path) = out_path {
        let aggregate: Vec<_> = sim
            .walkers
            .aggregated()
            .map(|w| serde_json::json!({ "id": w.id(), "position": w.position(), "born": w.born() }))
            .collect();
        let doc = serde_json::json!({
            "params":     sim.params,
            "surface":    sim.geometry,
            "final_tick": sim.clock.current_tick,
            "aggregate":  aggregate,
        });
        let file = File::create(path).with_context(|| format!("creating {path}"))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &doc)
            .with_context(|| format!("writing {path}"))?;
        println!("Aggregate written to {path}");
    }

    Ok(())
}
