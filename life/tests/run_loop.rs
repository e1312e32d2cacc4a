// run_loop.rs - Start/stop behaviour of the timer-driven loop, on paused tokio time

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use life::{Grid, LifeConfig, OnStep, Runner, Simulation, step};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::runtime::Handle;

const TICK: Duration = Duration::from_millis(100);

fn blinker_runner() -> Runner {
    let grid = Grid::parse(
        "
        .....
        .....
        .###.
        .....
        .....
        ",
    )
    .unwrap();
    Runner::new(Simulation::with_grid(LifeConfig::default(), grid).unwrap())
}

fn counter() -> (Arc<AtomicUsize>, OnStep) {
    let count = Arc::new(AtomicUsize::new(0));
    let hook = Arc::clone(&count);
    let on_step: OnStep = Arc::new(move || {
        hook.fetch_add(1, Ordering::SeqCst);
    });
    (count, on_step)
}

fn noop() -> OnStep {
    Arc::new(|| {})
}

fn generation(runner: &Runner) -> u64 {
    runner.with_simulation(|sim| sim.generation())
}

#[tokio::test(start_paused = true)]
async fn start_steps_immediately() {
    let runner = blinker_runner();
    let (redraws, on_step) = counter();

    assert!(runner.toggle(&Handle::current(), on_step));
    assert_eq!(generation(&runner), 1);
    assert_eq!(redraws.load(Ordering::SeqCst), 1);
    runner.with_simulation(|sim| {
        assert_eq!(sim.grid().live_coords().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
    });
}

#[tokio::test(start_paused = true)]
async fn steps_once_per_interval_while_running() {
    let runner = blinker_runner();
    let (redraws, on_step) = counter();

    runner.toggle(&Handle::current(), on_step);
    // Ticks at 100, 200 and 300ms after the immediate first step
    tokio::time::sleep(TICK * 3 + TICK / 2).await;

    assert_eq!(generation(&runner), 4);
    assert_eq!(redraws.load(Ordering::SeqCst), 4);
}

#[tokio::test(start_paused = true)]
async fn stop_before_next_tick_freezes_grid() {
    let runner = blinker_runner();
    runner.toggle(&Handle::current(), noop());
    let after_start = runner.with_simulation(|sim| sim.grid().clone());

    assert!(!runner.toggle(&Handle::current(), noop()));
    tokio::time::sleep(TICK * 10).await;

    assert!(!runner.is_running());
    assert_eq!(generation(&runner), 1);
    runner.with_simulation(|sim| assert_eq!(sim.grid(), &after_start));
}

#[tokio::test(start_paused = true)]
async fn stop_after_some_ticks() {
    let runner = blinker_runner();
    runner.start(&Handle::current(), noop());
    tokio::time::sleep(TICK * 2 + TICK / 2).await;
    assert_eq!(generation(&runner), 3);

    runner.stop();
    tokio::time::sleep(TICK * 10).await;
    assert_eq!(generation(&runner), 3);
}

#[tokio::test(start_paused = true)]
async fn quick_restart_keeps_a_single_cadence() {
    let runner = blinker_runner();
    runner.toggle(&Handle::current(), noop());
    runner.toggle(&Handle::current(), noop());
    runner.toggle(&Handle::current(), noop());
    assert_eq!(generation(&runner), 2);

    tokio::time::sleep(TICK * 3 + TICK / 2).await;
    assert_eq!(generation(&runner), 5);
}

#[tokio::test(start_paused = true)]
async fn start_while_running_is_a_no_op() {
    let runner = blinker_runner();
    runner.start(&Handle::current(), noop());
    runner.start(&Handle::current(), noop());
    assert_eq!(generation(&runner), 1);

    tokio::time::sleep(TICK + TICK / 2).await;
    assert_eq!(generation(&runner), 2);
}

#[tokio::test(start_paused = true)]
async fn clear_does_not_stop_the_loop() {
    let runner = blinker_runner();
    runner.toggle(&Handle::current(), noop());

    runner.with_simulation(Simulation::clear);
    assert!(runner.is_running());

    tokio::time::sleep(TICK + TICK / 2).await;
    runner.with_simulation(|sim| {
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid(), &Grid::empty(5, 5));
    });
}

#[tokio::test(start_paused = true)]
async fn seed_does_not_stop_the_loop() {
    let runner = Runner::new(Simulation::default());
    runner.toggle(&Handle::current(), noop());

    let seeded = runner.with_simulation(|sim| {
        sim.randomize_with(&mut StdRng::seed_from_u64(11));
        sim.grid().clone()
    });
    assert!(runner.is_running());
    assert_eq!(generation(&runner), 0);

    tokio::time::sleep(TICK + TICK / 2).await;
    runner.with_simulation(|sim| {
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid(), &step(&seeded));
    });
}

#[tokio::test(start_paused = true)]
async fn toggle_while_running_is_picked_up_by_next_step() {
    let config = LifeConfig::default().with_size(5, 5).with_step_interval(TICK);
    let runner = Runner::new(Simulation::new(config).unwrap());
    runner.start(&Handle::current(), noop());

    // An L-tromino becomes a block on the next tick
    runner.with_simulation(|sim| {
        sim.toggle(1, 1).unwrap();
        sim.toggle(1, 2).unwrap();
        sim.toggle(2, 1).unwrap();
    });
    tokio::time::sleep(TICK + TICK / 2).await;

    runner.with_simulation(|sim| {
        assert_eq!(
            sim.grid().live_coords().collect::<Vec<_>>(),
            vec![(1, 1), (1, 2), (2, 1), (2, 2)]
        );
    });
}
