// run_loop.rs - Timer-driven stepping while the run flag is set
//
// The loop is a tokio task that sleeps for the step interval and then
// re-reads the shared flag. Nothing cancels a pending sleep: stopping is
// seen on the next tick, which returns without scheduling another.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::{debug, info};

use crate::sim::Simulation;

pub type SharedSimulation = Arc<Mutex<Simulation>>;

/// Redraw hook invoked after every step.
pub type OnStep = Arc<dyn Fn() + Send + Sync>;

/// Shared run flag, read at tick time rather than captured by value.
#[derive(Debug, Clone, Default)]
pub struct RunFlag(Arc<AtomicBool>);

impl RunFlag {
    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, running: bool) {
        self.0.store(running, Ordering::Release);
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::AcqRel)
    }

    /// Sets the flag if it was clear. Returns false when already running.
    pub fn try_start(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// Locks the simulation, recovering the guard if a previous holder panicked.
pub fn lock(sim: &SharedSimulation) -> MutexGuard<'_, Simulation> {
    sim.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the shared simulation and the flag that keeps its loop alive.
pub struct Runner {
    sim: SharedSimulation,
    flag: RunFlag,
    epoch: Arc<AtomicU64>,
}

impl Runner {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim: Arc::new(Mutex::new(sim)),
            flag: RunFlag::default(),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn simulation(&self) -> &SharedSimulation {
        &self.sim
    }

    pub fn flag(&self) -> &RunFlag {
        &self.flag
    }

    pub fn is_running(&self) -> bool {
        self.flag.is_running()
    }

    /// Runs `f` with the simulation locked.
    pub fn with_simulation<T>(&self, f: impl FnOnce(&mut Simulation) -> T) -> T {
        f(&mut lock(&self.sim))
    }

    /// Start/Stop: flips the run flag and, when it turns on, steps at once
    /// and spawns the loop on `handle`. Returns the new flag value.
    pub fn toggle(&self, handle: &Handle, on_step: OnStep) -> bool {
        let running = self.flag.toggle();
        if running {
            self.launch(handle, on_step);
        } else {
            info!("simulation stopped");
        }
        running
    }

    /// Sets the flag and launches the loop unless it is already running.
    pub fn start(&self, handle: &Handle, on_step: OnStep) {
        if self.flag.try_start() {
            self.launch(handle, on_step);
        }
    }

    /// Clears the flag. The pending tick observes it and stops.
    pub fn stop(&self) {
        if self.flag.is_running() {
            self.flag.set(false);
            info!("simulation stopped");
        }
    }

    fn launch(&self, handle: &Handle, on_step: OnStep) {
        // A loop left over from a quick stop/start sees a newer epoch and exits
        let epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        let interval = lock(&self.sim).config().step_interval;
        info!(epoch, interval_ms = interval.as_millis() as u64, "simulation started");

        lock(&self.sim).step();
        on_step();

        handle.spawn(run_loop(
            Arc::clone(&self.sim),
            self.flag.clone(),
            Arc::clone(&self.epoch),
            epoch,
            interval,
            on_step,
        ));
    }
}

async fn run_loop(
    sim: SharedSimulation,
    flag: RunFlag,
    current_epoch: Arc<AtomicU64>,
    epoch: u64,
    interval: Duration,
    on_step: OnStep,
) {
    loop {
        tokio::time::sleep(interval).await;

        if !flag.is_running() || current_epoch.load(Ordering::Acquire) != epoch {
            debug!(epoch, "run loop exiting");
            return;
        }

        lock(&sim).step();
        on_step();
    }
}
