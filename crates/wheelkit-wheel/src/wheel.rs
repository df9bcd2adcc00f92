//! Wheel facade
//!
//! `WheelOfFortune` wires the segment registry, layout builder, pointer
//! resolver, and spin state machine together, with the actuator and
//! audio collaborators injected rather than looked up. The host drives
//! it with a fixed-rate `tick`; all state mutation happens inside that
//! tick or inside an explicit registry/configuration call.

use tracing::{info, warn};
use wheelkit_core::{EventDispatcher, Result, WheelConfiguration, WheelError, WheelEvent};

use crate::actuator::{verify_actuator, Actuator};
use crate::audio::{AudioSink, NullAudio, DIVIDER_HIT_VOLUME, WHEEL_STEP_VOLUME, WIN_VOLUME};
use crate::layout::WheelLayout;
use crate::pointer::PointerResolver;
use crate::segments::{SegmentRegistry, User, WheelSegment};
use crate::spin::{SpinMachine, SpinMode};

/// Default motor target velocity, in degrees per second
pub const DEFAULT_TARGET_VELOCITY: f64 = -150.0;
/// Default motor force limit
pub const DEFAULT_MOTOR_FORCE: f64 = 10.0;

/// The interactive spinning wheel
pub struct WheelOfFortune {
    config: WheelConfiguration,
    registry: SegmentRegistry,
    layout: WheelLayout,
    pointer: PointerResolver,
    spin: SpinMachine,
    audio: Box<dyn AudioSink>,
    events: EventDispatcher,
    last_winner: Option<WheelSegment>,
    rebuild_generation: u64,
}

impl WheelOfFortune {
    /// Create a wheel with the given configuration and no segments
    pub fn new(config: WheelConfiguration) -> Result<Self> {
        config.validate()?;
        let layout = WheelLayout::build(&[], &config)?;
        let pointer = PointerResolver::new(0.0, config.wheel_radius * 0.75);
        Ok(Self {
            config,
            registry: SegmentRegistry::new(),
            layout,
            pointer,
            spin: SpinMachine::new(),
            audio: Box::new(NullAudio),
            // Long spins emit a step event per divider crossing; size the
            // buffer so slow subscribers do not lag during one spin.
            events: EventDispatcher::new(1024),
            last_winner: None,
            rebuild_generation: 0,
        })
    }

    /// Replace the audio sink
    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    /// Event dispatcher; subscribe before spinning to observe stops
    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// Current configuration
    pub fn config(&self) -> &WheelConfiguration {
        &self.config
    }

    /// Current layout (regenerated on every rebuild)
    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    /// Current spin mode
    pub fn mode(&self) -> SpinMode {
        self.spin.mode()
    }

    /// Number of segments on the wheel
    pub fn count(&self) -> usize {
        self.registry.count()
    }

    /// Segments in wheel order
    pub fn segments(&self) -> &[WheelSegment] {
        self.registry.segments()
    }

    /// User views over the segments
    pub fn users(&self) -> Vec<User> {
        self.registry.users()
    }

    /// The winner of the most recent completed spin
    pub fn last_winner(&self) -> Option<&WheelSegment> {
        self.last_winner.as_ref()
    }

    /// Monotonic counter of completed layout rebuilds
    pub fn rebuild_generation(&self) -> u64 {
        self.rebuild_generation
    }

    /// Move the fixed pointer
    pub fn place_pointer(&mut self, angle_deg: f64, radial_distance: f64) {
        self.pointer.place(angle_deg, radial_distance);
    }

    /// Install a new configuration and rebuild the layout
    ///
    /// Rejected configurations leave the previous configuration and
    /// layout untouched.
    pub fn update_config(&mut self, config: WheelConfiguration) -> Result<()> {
        config.validate()?;
        if self.registry.count() > config.max_parts() as usize {
            return Err(WheelError::invalid_configuration(format!(
                "configuration holds at most {} parts but the wheel has {} segments",
                config.max_parts(),
                self.registry.count()
            )));
        }
        self.config = config;
        self.rebuild()
    }

    /// Append a segment and rebuild
    ///
    /// A blank or absent label falls back to the segment's position.
    /// The angular resolution follows the segment count, so the sectors
    /// always tile the full circle.
    pub fn add_segment(&mut self, label: Option<&str>) -> Result<u64> {
        let id = self.registry.add(label);
        self.sync_resolution_to_count();
        self.rebuild()?;
        self.events.publish(WheelEvent::SegmentsChanged {
            count: self.registry.count(),
        });
        Ok(id)
    }

    /// Remove a segment by id and rebuild
    pub fn remove_segment(&mut self, id: u64) -> Result<WheelSegment> {
        let removed = self.registry.remove(id)?;
        self.sync_resolution_to_count();
        self.rebuild()?;
        self.events.publish(WheelEvent::SegmentsChanged {
            count: self.registry.count(),
        });
        Ok(removed)
    }

    /// Rename a segment in place
    ///
    /// Labels do not affect geometry, so no rebuild happens.
    pub fn rename_segment(&mut self, id: u64, new_label: &str) -> Result<()> {
        self.registry.rename(id, new_label)?;
        self.events.publish(WheelEvent::SegmentsChanged {
            count: self.registry.count(),
        });
        Ok(())
    }

    /// Rename via the user view; writes through to the segment
    pub fn rename_user(&mut self, user_id: u64, display_name: &str) -> Result<()> {
        self.rename_segment(user_id, display_name)
    }

    /// Remove all segments and rebuild to an empty wheel
    pub fn clear_all(&mut self) -> Result<()> {
        self.registry.clear();
        self.sync_resolution_to_count();
        self.rebuild()?;
        self.events.publish(WheelEvent::SegmentsChanged { count: 0 });
        Ok(())
    }

    /// Replace all segments with one per roster name, in order
    pub fn load_roster(&mut self, names: &[String]) -> Result<()> {
        self.registry.clear();
        for name in names {
            self.registry.add(Some(name));
        }
        self.sync_resolution_to_count();
        self.rebuild()?;
        self.events.publish(WheelEvent::SegmentsChanged {
            count: self.registry.count(),
        });
        info!(count = names.len(), "roster loaded");
        Ok(())
    }

    /// Current labels in wheel order, for saving
    pub fn roster(&self) -> Vec<String> {
        self.registry.iter().map(|s| s.label.clone()).collect()
    }

    /// Start a spin with the default motor parameters
    pub fn start_spin(&mut self, actuator: &mut dyn Actuator) -> Result<()> {
        self.start_spin_with(actuator, DEFAULT_TARGET_VELOCITY, DEFAULT_MOTOR_FORCE)
    }

    /// Start a spin with explicit motor parameters
    ///
    /// Rejected with `EmptyWheel` when there are no segments.
    pub fn start_spin_with(
        &mut self,
        actuator: &mut dyn Actuator,
        target_velocity: f64,
        force: f64,
    ) -> Result<()> {
        if self.registry.is_empty() {
            return Err(WheelError::EmptyWheel);
        }
        verify_actuator(actuator)?;
        self.last_winner = None;
        self.spin.start(actuator, target_velocity, force, &self.config);
        self.events.publish(WheelEvent::SpinStarted);
        Ok(())
    }

    /// Abort the current spin without declaring a winner
    pub fn stop_spin(&mut self, actuator: &mut dyn Actuator) {
        self.spin.stop(actuator);
    }

    /// Advance the wheel by one simulation tick
    ///
    /// The host steps the actuator first, then calls this. The pointer
    /// resolver samples the layout before the state machine runs so a
    /// stop always sees the freshest selection.
    pub fn tick(&mut self, dt: f64, actuator: &mut dyn Actuator) -> Result<()> {
        let under_pointer = self.pointer.current();
        self.pointer
            .observe(&self.layout, actuator.angle(), self.spin.mode());
        if self.pointer.current() != under_pointer {
            // A divider just passed under the pointer.
            self.audio.divider_hit(DIVIDER_HIT_VOLUME);
        }

        let report = self.spin.tick(dt, actuator, &self.config);

        if report.divider_step {
            self.audio.wheel_step(WHEEL_STEP_VOLUME);
            self.events.publish(WheelEvent::DividerStep {
                angle_deg: actuator.angle(),
            });
        }

        if report.stopped {
            self.declare_winner()?;
        }
        Ok(())
    }

    fn declare_winner(&mut self) -> Result<()> {
        let Some(id) = self.pointer.current() else {
            warn!("wheel stopped before the pointer ever overlapped a segment");
            return Ok(());
        };
        let Some(segment) = self.registry.get(id).cloned() else {
            warn!(id, "pointer selection no longer exists in the registry");
            return Ok(());
        };

        info!(id = segment.id, label = %segment.label, "wheel stopped");
        self.audio.win(WIN_VOLUME);
        self.events.publish(WheelEvent::Stopped {
            segment_id: segment.id,
            label: segment.label.clone(),
        });
        self.last_winner = Some(segment.clone());

        if self.config.remove_winners {
            self.registry.remove(segment.id)?;
            self.sync_resolution_to_count();
            self.rebuild()?;
            self.events.publish(WheelEvent::SegmentsChanged {
                count: self.registry.count(),
            });
        }
        Ok(())
    }

    /// Retune the angular resolution so the sectors tile the full circle
    ///
    /// One segment spans `vertex_density` subdivisions, so a circle of
    /// `count * vertex_density` subdivisions gives each segment a sweep
    /// of `360 / count` degrees with no gaps. An empty wheel keeps one
    /// segment's worth of resolution so the configuration stays valid.
    fn sync_resolution_to_count(&mut self) {
        let parts = self.registry.count().max(1) as u32;
        self.config.segment_resolution = parts * self.config.vertex_density;
    }

    /// Wholesale layout rebuild from the current registry and config
    fn rebuild(&mut self) -> Result<()> {
        let layout = WheelLayout::build(self.registry.segments(), &self.config)?;
        self.layout = layout;
        self.rebuild_generation += 1;
        self.events.publish(WheelEvent::Rebuilt {
            parts: self.layout.len(),
        });
        Ok(())
    }
}
