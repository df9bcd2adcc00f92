//! End-to-end wheel behavior: spin lifecycle, winner resolution, and
//! winner removal, driven through the public facade.

use std::time::Duration;
use wheelkit_core::{WheelConfiguration, WheelEvent};
use wheelkit_wheel::{Actuator, AudioSink, HingeActuator, SpinMode, WheelOfFortune};

/// Actuator whose telemetry the test scripts directly.
struct ScriptedActuator {
    angle: f64,
    velocity: f64,
    engaged: bool,
}

impl ScriptedActuator {
    fn new() -> Self {
        Self {
            angle: 0.0,
            velocity: 0.0,
            engaged: false,
        }
    }
}

impl Actuator for ScriptedActuator {
    fn engage(&mut self, _target_velocity: f64, _force: f64) {
        self.engaged = true;
    }
    fn disengage(&mut self) {
        self.engaged = false;
    }
    fn angle(&self) -> f64 {
        self.angle
    }
    fn velocity(&self) -> f64 {
        self.velocity
    }
}

/// Audio sink that counts triggers.
#[derive(Default)]
struct CountingAudio {
    steps: std::rc::Rc<std::cell::Cell<usize>>,
    wins: std::rc::Rc<std::cell::Cell<usize>>,
}

impl AudioSink for CountingAudio {
    fn wheel_step(&mut self, _volume: f32) {
        self.steps.set(self.steps.get() + 1);
    }
    fn win(&mut self, _volume: f32) {
        self.wins.set(self.wins.get() + 1);
    }
}

fn drain_stops(rx: &mut tokio::sync::broadcast::Receiver<WheelEvent>) -> Vec<(u64, String)> {
    use tokio::sync::broadcast::error::TryRecvError;
    let mut stops = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(WheelEvent::Stopped { segment_id, label }) => stops.push((segment_id, label)),
            Ok(_) => {}
            Err(TryRecvError::Lagged(_)) => {}
            Err(_) => break,
        }
    }
    stops
}

#[test]
fn test_scripted_spin_lands_on_b_and_removes_winner() {
    let config = WheelConfiguration {
        remove_winners: true,
        ..WheelConfiguration::default()
    };
    let steps = std::rc::Rc::new(std::cell::Cell::new(0));
    let wins = std::rc::Rc::new(std::cell::Cell::new(0));
    let audio = CountingAudio {
        steps: steps.clone(),
        wins: wins.clone(),
    };

    let mut wheel = WheelOfFortune::new(config)
        .unwrap()
        .with_audio(Box::new(audio));
    for label in ["A", "B", "C", "D"] {
        wheel.add_segment(Some(label)).unwrap();
    }
    let mut rx = wheel.events().subscribe();

    let mut actuator = ScriptedActuator::new();
    wheel.start_spin(&mut actuator).unwrap();
    assert!(actuator.engaged);
    assert_eq!(wheel.mode(), SpinMode::Running);

    // Fast phase: two seconds at full speed.
    let dt = 0.02;
    actuator.velocity = -150.0;
    for _ in 0..100 {
        actuator.angle += actuator.velocity * dt;
        wheel.tick(dt, &mut actuator).unwrap();
    }
    assert!(steps.get() > 10, "expected step cues during the fast phase");

    // Settle with segment B (offset 90, sweep 90) under the pointer at 0.
    actuator.angle = -60.0;
    actuator.velocity = -0.5;
    let rebuilds_before = wheel.rebuild_generation();
    for _ in 0..75 {
        wheel.tick(dt, &mut actuator).unwrap();
    }

    assert_eq!(wheel.mode(), SpinMode::Stopped);
    let stops = drain_stops(&mut rx);
    assert_eq!(stops.len(), 1, "exactly one stop event per spin");
    assert_eq!(stops[0].1, "B");
    assert_eq!(wins.get(), 1);

    // Winner removed, wheel rebuilt to three equally spaced segments.
    let labels: Vec<&str> = wheel.segments().iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "C", "D"]);
    assert_eq!(wheel.rebuild_generation(), rebuilds_before + 1);
    let offsets: Vec<f64> = wheel
        .layout()
        .slots()
        .iter()
        .map(|s| s.divider_angle_deg)
        .collect();
    assert_eq!(offsets, vec![0.0, 120.0, 240.0]);

    // Further ticks raise no second stop.
    for _ in 0..100 {
        wheel.tick(dt, &mut actuator).unwrap();
    }
    assert!(drain_stops(&mut rx).is_empty());
}

#[test]
fn test_physical_spin_stops_exactly_once() {
    let mut wheel = WheelOfFortune::new(WheelConfiguration::default()).unwrap();
    for i in 0..8 {
        wheel.add_segment(Some(&format!("P{i}"))).unwrap();
    }
    let mut rx = wheel.events().subscribe();

    let mut actuator = HingeActuator::new();
    wheel.start_spin(&mut actuator).unwrap();

    let dt = 0.02;
    // Motor runs for two seconds, then the host cuts it and the wheel
    // coasts down under friction.
    for _ in 0..100 {
        actuator.step(dt);
        wheel.tick(dt, &mut actuator).unwrap();
    }
    actuator.disengage();
    for _ in 0..40_000 {
        actuator.step(dt);
        wheel.tick(dt, &mut actuator).unwrap();
    }

    assert_eq!(wheel.mode(), SpinMode::Stopped);
    let stops = drain_stops(&mut rx);
    assert_eq!(stops.len(), 1);
    assert!(wheel.last_winner().is_some());
    // An 8-segment wheel tiles the full circle, so the winner is always
    // one of the live segments.
    let winner = wheel.last_winner().unwrap();
    assert!(wheel.segments().iter().any(|s| s.id == winner.id));
}

#[test]
fn test_auto_stop_forces_winner() {
    let config = WheelConfiguration {
        auto_stop: Some(Duration::from_secs(1)),
        ..WheelConfiguration::default()
    };
    let mut wheel = WheelOfFortune::new(config).unwrap();
    for i in 0..8 {
        wheel.add_segment(Some(&format!("P{i}"))).unwrap();
    }
    let mut rx = wheel.events().subscribe();

    let mut actuator = HingeActuator::new();
    wheel.start_spin(&mut actuator).unwrap();

    let dt = 0.02;
    for _ in 0..75 {
        actuator.step(dt);
        wheel.tick(dt, &mut actuator).unwrap();
    }

    // The wheel was still at full speed when the timer fired.
    assert_eq!(wheel.mode(), SpinMode::Stopped);
    assert!(!actuator.is_engaged());
    assert_eq!(drain_stops(&mut rx).len(), 1);
}

#[test]
fn test_abort_yields_no_winner() {
    let mut wheel = WheelOfFortune::new(WheelConfiguration::default()).unwrap();
    wheel.add_segment(Some("only")).unwrap();
    let mut rx = wheel.events().subscribe();

    let mut actuator = HingeActuator::new();
    wheel.start_spin(&mut actuator).unwrap();
    for _ in 0..10 {
        actuator.step(0.02);
        wheel.tick(0.02, &mut actuator).unwrap();
    }
    wheel.stop_spin(&mut actuator);

    assert_eq!(wheel.mode(), SpinMode::Stopped);
    assert!(!actuator.is_engaged());
    assert!(wheel.last_winner().is_none());
    assert!(drain_stops(&mut rx).is_empty());
}

#[test]
fn test_two_spins_two_stop_events() {
    let mut wheel = WheelOfFortune::new(WheelConfiguration::default()).unwrap();
    for i in 0..8 {
        wheel.add_segment(Some(&format!("P{i}"))).unwrap();
    }
    let mut rx = wheel.events().subscribe();
    let mut actuator = ScriptedActuator::new();

    for _ in 0..2 {
        wheel.start_spin(&mut actuator).unwrap();
        actuator.velocity = -150.0;
        for _ in 0..10 {
            actuator.angle += actuator.velocity * 0.02;
            wheel.tick(0.02, &mut actuator).unwrap();
        }
        actuator.velocity = -0.2;
        for _ in 0..75 {
            wheel.tick(0.02, &mut actuator).unwrap();
        }
        assert_eq!(wheel.mode(), SpinMode::Stopped);
    }

    assert_eq!(drain_stops(&mut rx).len(), 2);
}
