//! Simulation loop - a dedicated frame-cycle worker driving a [`Scene`]
//!
//! Lifecycle: `Stopped --start()--> Running --stop()--> Stopped`.
//!
//! Each cycle, in order:
//! 1. measure delta time and emit the periodic debug summary
//! 2. sort the scene by render layer if entities were added
//! 3. move every entity (border bounce included)
//! 4. run the collision sweep
//! 5. rasterize and present the frame
//! 6. sleep toward the target frame interval
//!
//! Steps 2-5's reads of the entity collection all happen under one lock, the
//! same lock [`Simulation::add_entity`] takes, so appends and iteration never
//! interleave. Presenting and sleeping happen outside the lock.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::collision::CollisionResolver;
use crate::entity::Entity;
use crate::raster::PixelBuffer;
use crate::scene::Scene;
use crate::surface::DisplaySurface;
use crate::timing::{FrameStats, FrameTiming};
use crate::types::{Color, ConfigError, SimConfig, SimError, DEBUG_SUMMARY_EVERY};

type Worker = JoinHandle<Result<Box<dyn DisplaySurface>, SimError>>;

struct Shared {
    scene: Mutex<Scene>,
    running: AtomicBool,
    target_fps: AtomicU32,
    debug_summary: AtomicBool,
    stats: Mutex<FrameStats>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Simulation {
    config: SimConfig,
    shared: Arc<Shared>,
    worker: Option<Worker>,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let shared = Arc::new(Shared {
            scene: Mutex::new(Scene::new(config.width, config.height, config.background)),
            running: AtomicBool::new(false),
            target_fps: AtomicU32::new(config.target_fps),
            debug_summary: AtomicBool::new(config.debug_summary),
            stats: Mutex::new(FrameStats::default()),
        });
        Ok(Self {
            config,
            shared,
            worker: None,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn window_width(&self) -> u32 {
        self.config.width
    }

    pub fn window_height(&self) -> u32 {
        self.config.height
    }

    /// Register an entity. Safe to call from any thread while running.
    pub fn add_entity(&self, entity: Entity) {
        lock(&self.shared.scene).add_entity(entity);
    }

    pub fn entity_count(&self) -> usize {
        lock(&self.shared.scene).len()
    }

    pub fn set_resolver(&self, resolver: Box<dyn CollisionResolver>) {
        lock(&self.shared.scene).set_resolver(resolver);
    }

    /// Exclusive access to the scene; the frame worker blocks until it is dropped.
    pub fn scene(&self) -> MutexGuard<'_, Scene> {
        lock(&self.shared.scene)
    }

    pub fn set_target_fps(&self, fps: u32) -> Result<(), ConfigError> {
        if fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        self.shared.target_fps.store(fps, Ordering::Relaxed);
        Ok(())
    }

    pub fn target_fps(&self) -> u32 {
        self.shared.target_fps.load(Ordering::Relaxed)
    }

    pub fn set_background(&self, color: Color) {
        lock(&self.shared.scene).set_background(color);
    }

    pub fn background(&self) -> Color {
        lock(&self.shared.scene).background()
    }

    pub fn set_debug_summary(&self, enabled: bool) {
        self.shared.debug_summary.store(enabled, Ordering::Relaxed);
    }

    pub fn stats(&self) -> FrameStats {
        *lock(&self.shared.stats)
    }

    /// True while the frame worker is cycling. Turns false on `stop()` or when
    /// a frame fails.
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Start the frame-cycle worker, moving `surface` into it.
    pub fn start<S>(&mut self, mut surface: S) -> Result<(), SimError>
    where
        S: DisplaySurface + 'static,
    {
        if self.worker.is_some() {
            return Err(SimError::AlreadyRunning);
        }

        let actual = (surface.window_width(), surface.window_height());
        let expected = (self.config.width, self.config.height);
        if actual != expected {
            return Err(ConfigError::SurfaceSizeMismatch { expected, actual }.into());
        }
        surface
            .set_title(&self.config.title)
            .map_err(SimError::Title)?;

        self.shared.running.store(true, Ordering::Release);
        let shared = Arc::clone(&self.shared);
        let handle = thread::Builder::new()
            .name("frame-cycle".to_string())
            .spawn(move || run_frames(shared, Box::new(surface)));

        match handle {
            Ok(handle) => {
                info!(
                    width = expected.0,
                    height = expected.1,
                    target_fps = self.target_fps(),
                    "simulation started"
                );
                self.worker = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.shared.running.store(false, Ordering::Release);
                Err(SimError::Spawn(e))
            }
        }
    }

    /// Ask the worker to finish its current frame, wait for it, and hand the
    /// surface back. A frame failure that ended the loop early is returned here.
    pub fn stop(&mut self) -> Result<Box<dyn DisplaySurface>, SimError> {
        let worker = self.worker.take().ok_or(SimError::NotRunning)?;
        self.shared.running.store(false, Ordering::Release);
        let result = worker.join().map_err(|_| SimError::WorkerPanicked)?;
        info!(frames = self.stats().frames, "simulation stopped");
        result
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        if self.worker.is_some() {
            let _ = self.stop();
        }
    }
}

fn run_frames(
    shared: Arc<Shared>,
    mut surface: Box<dyn DisplaySurface>,
) -> Result<Box<dyn DisplaySurface>, SimError> {
    let mut timing = FrameTiming::start(Instant::now());
    let mut buffer = {
        let scene = lock(&shared.scene);
        PixelBuffer::new(scene.width(), scene.height(), scene.background())
    };

    while shared.running.load(Ordering::Acquire) {
        if let Err(e) = run_frame(&shared, surface.as_mut(), &mut buffer, &mut timing) {
            error!(error = %e, frame = timing.frame_count(), "frame failed, stopping");
            shared.running.store(false, Ordering::Release);
            return Err(e);
        }
    }

    Ok(surface)
}

fn run_frame(
    shared: &Shared,
    surface: &mut dyn DisplaySurface,
    buffer: &mut PixelBuffer,
    timing: &mut FrameTiming,
) -> Result<(), SimError> {
    let frame_started = Instant::now();
    let delta_ms = timing.begin_frame(frame_started);
    report_summary(shared, timing, frame_started);

    let render_started = {
        let mut scene = lock(&shared.scene);
        scene.update(delta_ms);
        timing.record_update(frame_started.elapsed());

        let render_started = Instant::now();
        scene.render(buffer);
        render_started
    };

    surface.present(buffer).map_err(SimError::Present)?;
    timing.record_render(render_started.elapsed());
    *lock(&shared.stats) = timing.stats(Instant::now());

    let delay = timing.frame_delay(shared.target_fps.load(Ordering::Relaxed));
    if delay > Duration::ZERO {
        thread::sleep(delay);
    }
    Ok(())
}

/// True on every `DEBUG_SUMMARY_EVERY`-th frame while the summary is enabled.
fn summary_due(enabled: bool, frame: u64) -> bool {
    enabled && frame > 0 && frame % DEBUG_SUMMARY_EVERY == 0
}

fn report_summary(shared: &Shared, timing: &FrameTiming, now: Instant) {
    if !summary_due(
        shared.debug_summary.load(Ordering::Relaxed),
        timing.frame_count(),
    ) {
        return;
    }
    let stats = timing.stats(now);
    info!(
        fps = %format!("{:.0}", stats.fps),
        average_fps = %format!("{:.1}", stats.average_fps),
        avg_update_ms = %format!("{:.2}", stats.avg_update_ms),
        avg_render_ms = %format!("{:.2}", stats.avg_render_ms),
        "frame summary"
    );
}
