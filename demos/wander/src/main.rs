//! wander — runs the bump-and-spin behavior against a scripted hazard feed.
//!
//! Usage: `wander [HAZARDS_CSV] [CONFIG_JSON]`, e.g.
//! `cargo run -p wander -- demos/wander/data/hazards.csv`.
//!
//! With no arguments the embedded script below is used with the deployed
//! tuning.  Set `RUST_LOG=wd_behavior=debug` to watch the state transitions,
//! or `=trace` for every published twist.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use wd_behavior::{BehaviorController, WanderConfig};
use wd_core::{BehaviorRng, HazardBatch, RunConfig, Tick};
use wd_output::{CsvCommandSink, CsvEventLog};
use wd_runtime::{HazardScript, RuntimeBuilder, RuntimeObserver, load_hazard_script_csv, load_hazard_script_reader};
use wd_timer::TimerId;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                u64 = 42;
const TICK_DURATION_MS:    u32 = 10;
const RUN_SECS:            u64 = 40;
const HAZARD_HEARTBEAT_MS: u64 = 100; // the hazard topic publishes continuously
const OUTPUT_DIR:          &str = "output/wander";

// Three bumps spread over the run; the middle one lands during recovery.
const HAZARDS_CSV: &str = "\
time_ms,kind,frame_id\n\
2000,bump,bump_front_center\n\
4500,cliff,cliff_front_left\n\
6000,bump,bump_front_left\n\
18000,object_proximity,ir_intensity_side_left\n\
24000,bump,bump_front_right\n\
24000,wheel_drop,wheel_drop_left\n\
";

// ── Observer wrapper to count fires per timer ────────────────────────────────

struct CountingObserver {
    inner:   CsvEventLog,
    fires:   [u64; TimerId::COUNT],
    hazards: u64,
}

impl CountingObserver {
    fn new(inner: CsvEventLog) -> Self {
        Self { inner, fires: [0; TimerId::COUNT], hazards: 0 }
    }
}

impl RuntimeObserver for CountingObserver {
    fn on_timer(&mut self, tick: Tick, timer: TimerId) {
        self.fires[timer.index()] += 1;
        self.inner.on_timer(tick, timer);
    }

    fn on_hazard(&mut self, tick: Tick, batch: &HazardBatch) {
        if !batch.is_empty() {
            self.hazards += 1;
        }
        self.inner.on_hazard(tick, batch);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // 1. Hazard script.
    let script: HazardScript = match args.get(1) {
        Some(path) => {
            info!("loading hazard script from {path}");
            load_hazard_script_csv(Path::new(path))?
        }
        None => load_hazard_script_reader(Cursor::new(HAZARDS_CSV))?,
    };

    // 2. Behavior tuning.
    let wander: WanderConfig = match args.get(2) {
        Some(path) => {
            info!("loading behavior config from {path}");
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?
        }
        None => WanderConfig::default(),
    };

    // 3. Run config.
    let config = RunConfig {
        tick_duration_ms:    TICK_DURATION_MS,
        total_ticks:         0,
        seed:                SEED,
        hazard_heartbeat_ms: Some(HAZARD_HEARTBEAT_MS),
    }
    .with_duration_ms(RUN_SECS * 1_000);

    println!("=== wander — bump-and-spin ===");
    println!(
        "Run: {} ticks × {} ms  |  Seed: {}  |  Scripted batches: {}",
        config.total_ticks,
        config.tick_duration_ms,
        config.seed,
        script.len()
    );
    println!(
        "Forward {} m/s  |  Reverse {} m/s  |  Spin {} rad/s for ({}, {}] s",
        wander.forward_speed,
        wander.reverse_speed,
        wander.spin_rate,
        wander.spin_min_secs,
        wander.spin_max_secs
    );
    println!();

    // 4. Output.
    let dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(dir)?;
    let sink = CsvCommandSink::new(&dir.join("commands.csv"), config.tick_duration_ms)?;
    let mut obs = CountingObserver::new(CsvEventLog::new(&dir.join("events.csv"), config.tick_duration_ms)?);

    // 5. Build and run.
    let controller = BehaviorController::new(wander, BehaviorRng::new(config.seed))?;
    let mut rt = RuntimeBuilder::new(config, controller, sink).script(script).build()?;

    let t0 = Instant::now();
    rt.run(&mut obs)?;
    let elapsed = t0.elapsed();

    rt.sink.finish()?;
    if let Some(e) = obs.inner.take_error() {
        eprintln!("event log error: {e}");
    }

    // 6. Summary.
    let stats = rt.stats();
    println!("Run complete in {:.3} ms ({})", elapsed.as_secs_f64() * 1e3, rt.clock);
    println!("  commands.csv : {} rows", rt.sink.rows());
    println!("  events.csv   : {} rows", obs.inner.rows());
    println!(
        "  timer fires {}  |  hazard batches {} ({} non-empty)",
        stats.timer_fires, stats.hazard_batches, obs.hazards
    );
    println!();

    println!("{:<14} {:>6}", "Timer", "Fires");
    println!("{}", "-".repeat(21));
    for timer in TimerId::ALL {
        println!("{:<14} {:>6}", timer.as_str(), obs.fires[timer.index()]);
    }
    println!();

    println!("Spin cycles: {}", rt.behavior.spin_cycles());
    if let Some(d) = rt.behavior.last_spin_duration() {
        println!("Last spin:   {d}");
    }
    println!("Final state: {}", rt.behavior.state());

    Ok(())
}
