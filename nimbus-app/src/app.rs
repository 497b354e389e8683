//! The dual-loop run harness.
//!
//! A detection thread pulls the scripted landmark stream at its own rate,
//! derives the control signal, and publishes it into the shared slot. The
//! main thread runs the render-rate loop: snapshot the slot, tick the
//! particle system, hand the instances to whatever consumes them (here,
//! periodic tracing reports).

use crate::preset;
use nimbus_gesture::{
    ControlSignal, LandmarkStream, ScriptedGestures, SignalSlot, derive_control_signal,
};
use nimbus_shapes::ShapeKind;
use nimbus_sim::ParticleSystem;
use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Seconds between shape changes when cycling.
const CYCLE_PERIOD: f32 = 3.0;

/// Seconds between progress reports.
const REPORT_PERIOD: f32 = 1.0;

pub fn run(args: crate::Args) -> Result<(), Box<dyn Error>> {
    // Preset file wins over the individual CLI flags.
    let (shape, color, count) = match &args.scene {
        Some(path) => {
            let scene = preset::load_preset(path)?;
            (scene.shape, preset::parse_color(&scene.color)?, scene.count)
        }
        None => (
            args.shape.parse::<ShapeKind>()?,
            preset::parse_color(&args.color)?,
            args.count,
        ),
    };

    info!(
        "Starting nimbus: {} particles, shape {}, {:.0} Hz render / {:.0} Hz detection",
        count, shape, args.fps, args.detection_fps
    );

    let slot = Arc::new(SignalSlot::new());
    let running = Arc::new(AtomicBool::new(true));

    let detection = spawn_detection_loop(
        ScriptedGestures::new(args.detection_fps),
        Arc::clone(&slot),
        Arc::clone(&running),
    );

    let mut system = ParticleSystem::with_shape(shape, count);
    system.set_color(color);

    render_loop(&mut system, &slot, &args);

    running.store(false, Ordering::Relaxed);
    detection
        .join()
        .map_err(|_| "detection thread panicked")?;

    info!("Run complete after {:.1}s", args.duration);
    Ok(())
}

/// Spawn the detection loop on its own thread.
///
/// Each cycle derives a fresh signal from the hands seen and overwrites the
/// slot; a failed cycle is logged and treated as "no hands", never fatal.
fn spawn_detection_loop(
    mut source: impl LandmarkStream + Send + 'static,
    slot: Arc<SignalSlot>,
    running: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let interval = Duration::from_secs_f32(1.0 / source.frame_rate().unwrap_or(30.0));
        let mut signal = ControlSignal::IDLE;
        while running.load(Ordering::Relaxed) {
            match source.next_frame() {
                Ok(Some(hands)) => {
                    signal = derive_control_signal(&hands, signal);
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Detection cycle failed: {}", e);
                    signal = derive_control_signal(&[], signal);
                }
            }
            slot.publish(signal);
            thread::sleep(interval);
        }
        source.stop();
    })
}

/// The render-rate loop on the calling thread.
fn render_loop(system: &mut ParticleSystem, slot: &SignalSlot, args: &crate::Args) {
    let frame_interval = Duration::from_secs_f32(1.0 / args.fps);
    let started = Instant::now();
    let mut last_tick = started;
    let mut next_report = REPORT_PERIOD;
    let mut next_cycle = CYCLE_PERIOD;
    let mut cycle_index = 0usize;

    while started.elapsed().as_secs_f32() < args.duration {
        let now = Instant::now();
        let dt = (now - last_tick).as_secs_f32();
        last_tick = now;

        let signal = slot.snapshot();
        let instances = system.tick(dt, signal);

        let elapsed = started.elapsed().as_secs_f32();
        if elapsed >= next_report {
            next_report += REPORT_PERIOD;
            let mean_radius: f32 = instances
                .iter()
                .map(|i| i.position().length())
                .sum::<f32>()
                / instances.len().max(1) as f32;
            let gesture = if signal.active {
                format!("spread {:.0}%", signal.distance * 100.0)
            } else {
                "idle".to_string()
            };
            info!(
                "t={:.1}s shape={} gesture={} convergence={:.3} mean_radius={:.2}",
                elapsed,
                system.shape(),
                gesture,
                system.convergence(),
                mean_radius
            );
        }

        if args.cycle && elapsed >= next_cycle {
            next_cycle += CYCLE_PERIOD;
            cycle_index = (cycle_index + 1) % ShapeKind::ALL.len();
            system.set_shape(ShapeKind::ALL[cycle_index]);
            info!("Morphing into {}", system.shape());
        }

        if let Some(remaining) = frame_interval.checked_sub(now.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
