//! Drone flight paths and the scheduler that blends between them.
//!
//! Six closed-form trajectories, each a pure map from normalized progress to a
//! camera pose scaled by the model extent. The scheduler advances progress
//! along the active path, and near the end of a cycle captures the actual
//! camera pose and eases it into the next path's start pose, so any drift
//! accumulated by the lerp-based tracking is absorbed by the hand-off.

use glam::Vec3;
use std::f32::consts::PI;
use thiserror::Error;

use crate::constants::{
    BASE_LERP, LERP_DISTANCE_GAIN, MAX_LERP, PATH_RATE, TRANSITION_RATE, TRANSITION_TRIGGER,
};
use crate::state::{CameraRig, ModelBounds};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlightError {
    #[error("model bounds are degenerate (zero extent), refusing to start flight")]
    DegenerateBounds,
}

/// A camera position plus the point it looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// The six fly-through shapes, addressed by index and cycled circularly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightPath {
    HighOrbit,
    FigureEight,
    SpiralClimb,
    LowSweep,
    WaveOrbit,
    DiagonalPass,
}

impl FlightPath {
    pub const ALL: [FlightPath; 6] = [
        FlightPath::HighOrbit,
        FlightPath::FigureEight,
        FlightPath::SpiralClimb,
        FlightPath::LowSweep,
        FlightPath::WaveOrbit,
        FlightPath::DiagonalPass,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> FlightPath {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Evaluate the trajectory at progress `t` in [0, 1] for a model of the
    /// given extent. Pure and deterministic.
    pub fn pose(self, t: f32, size: Vec3) -> PathPose {
        let footprint = size.x.max(size.z);
        match self {
            FlightPath::HighOrbit => {
                let radius = footprint * 0.6;
                let height = size.y * 0.7;
                let angle = t * PI * 2.0;
                PathPose {
                    position: Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
                    look_at: Vec3::new(0.0, size.y * 0.2, 0.0),
                }
            }
            FlightPath::FigureEight => {
                let radius = footprint * 0.4;
                let height = size.y * 0.3 + (t * PI * 4.0).sin() * size.y * 0.2;
                let angle = t * PI * 4.0;
                PathPose {
                    position: Vec3::new(
                        angle.sin() * radius,
                        height,
                        (angle * 2.0).sin() * radius * 0.5,
                    ),
                    look_at: Vec3::new(0.0, size.y * 0.1, 0.0),
                }
            }
            FlightPath::SpiralClimb => {
                let radius = footprint * 0.5;
                let height = size.y * 0.1 + t * size.y * 0.6;
                let angle = t * PI * 6.0;
                let taper = 1.0 - t * 0.5;
                PathPose {
                    position: Vec3::new(
                        angle.cos() * radius * taper,
                        height,
                        angle.sin() * radius * taper,
                    ),
                    look_at: Vec3::new(0.0, height * 0.5, 0.0),
                }
            }
            FlightPath::LowSweep => {
                let radius = footprint * 0.5;
                let height = size.y * 0.4 + (t * PI).sin() * size.y * 0.3;
                let angle = t * PI * 2.0;
                let ahead = angle + PI * 0.1;
                PathPose {
                    position: Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
                    look_at: Vec3::new(
                        ahead.cos() * radius * 0.3,
                        size.y * 0.1,
                        ahead.sin() * radius * 0.3,
                    ),
                }
            }
            FlightPath::WaveOrbit => {
                let radius = footprint * 0.4;
                let height = size.y * 0.3 + (t * PI * 8.0).sin() * size.y * 0.15;
                let angle = t * PI * 2.0;
                let wave = (t * PI * 4.0).sin();
                let ahead = angle + PI * 0.2;
                PathPose {
                    position: Vec3::new(
                        angle.cos() * radius + wave * radius * 0.2,
                        height,
                        angle.sin() * radius,
                    ),
                    look_at: Vec3::new(
                        ahead.cos() * radius * 0.5,
                        size.y * 0.15,
                        ahead.sin() * radius * 0.5,
                    ),
                }
            }
            FlightPath::DiagonalPass => {
                let height = size.y * 0.2 + (t * PI * 2.0).sin() * size.y * 0.2;
                let along = t - 0.5;
                PathPose {
                    position: Vec3::new(along * footprint * 0.8, height, along * footprint * 0.8),
                    look_at: Vec3::new(
                        along * footprint * 0.4,
                        size.y * 0.1,
                        along * footprint * 0.4,
                    ),
                }
            }
        }
    }
}

/// Hermite ease used for path hand-offs.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Scheduler tuning. Defaults preserve the hand-tuned values of the original
/// viewer; they are parameters here rather than hard-coded law.
#[derive(Clone, Copy, Debug)]
pub struct FlightConfig {
    pub path_rate: f32,
    pub transition_rate: f32,
    pub transition_trigger: f32,
    pub base_lerp: f32,
    pub max_lerp: f32,
    pub lerp_distance_gain: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            path_rate: PATH_RATE,
            transition_rate: TRANSITION_RATE,
            transition_trigger: TRANSITION_TRIGGER,
            base_lerp: BASE_LERP,
            max_lerp: MAX_LERP,
            lerp_distance_gain: LERP_DISTANCE_GAIN,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Mode {
    Steady,
    Transition {
        progress: f32,
        from: PathPose,
        to: PathPose,
        to_path: FlightPath,
    },
}

/// Two-mode state machine: steady flight tracks the active path; a transition
/// blends from the captured camera pose to the next path's start pose.
pub struct FlightScheduler {
    size: Vec3,
    path: FlightPath,
    path_progress: f32,
    mode: Mode,
    config: FlightConfig,
}

impl FlightScheduler {
    pub fn new(bounds: &ModelBounds) -> Result<Self, FlightError> {
        Self::with_config(bounds, FlightConfig::default())
    }

    pub fn with_config(bounds: &ModelBounds, config: FlightConfig) -> Result<Self, FlightError> {
        if bounds.is_degenerate() {
            return Err(FlightError::DegenerateBounds);
        }
        Ok(Self {
            size: bounds.size,
            path: FlightPath::ALL[0],
            path_progress: 0.0,
            mode: Mode::Steady,
            config,
        })
    }

    /// Pose the flight begins at: the first path at t = 0.
    pub fn start_pose(&self) -> PathPose {
        self.path.pose(0.0, self.size)
    }

    pub fn path(&self) -> FlightPath {
        self.path
    }

    pub fn path_progress(&self) -> f32 {
        self.path_progress
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.mode, Mode::Transition { .. })
    }

    /// Target pose of the active transition, if one is in flight.
    pub fn transition_target(&self) -> Option<PathPose> {
        match self.mode {
            Mode::Transition { to, .. } => Some(to),
            Mode::Steady => None,
        }
    }

    /// Seek along the current path. Clamped to [0, 1).
    pub fn set_progress(&mut self, t: f32) {
        self.path_progress = t.clamp(0.0, 1.0 - f32::EPSILON);
    }

    /// Advance one display tick, mutating the camera rig in place.
    pub fn tick(&mut self, rig: &mut CameraRig) {
        let cfg = self.config;

        // Near the end of a cycle, capture the actual rig pose (not the
        // idealized path pose) and aim at the next path's start.
        if matches!(self.mode, Mode::Steady) && self.path_progress >= cfg.transition_trigger {
            let to_path = self.path.next();
            self.mode = Mode::Transition {
                progress: 0.0,
                from: PathPose {
                    position: rig.position,
                    look_at: rig.look_at,
                },
                to: to_path.pose(0.0, self.size),
                to_path,
            };
        }

        match self.mode {
            Mode::Transition {
                progress,
                from,
                to,
                to_path,
            } => {
                let ease = smoothstep(progress.min(1.0));
                rig.position = from.position.lerp(to.position, ease);
                rig.look_at = from.look_at.lerp(to.look_at, ease);

                let advanced = progress + cfg.transition_rate;
                if advanced >= 1.0 {
                    // Commit: land exactly on the target and resume steady
                    // flight on the new path.
                    rig.position = to.position;
                    rig.look_at = to.look_at;
                    self.path = to_path;
                    self.path_progress = 0.0;
                    self.mode = Mode::Steady;
                    log::debug!("flight path hand-off complete, now on {:?}", to_path);
                } else {
                    self.mode = Mode::Transition {
                        progress: advanced,
                        from,
                        to,
                        to_path,
                    };
                }
            }
            Mode::Steady => {
                let ideal = self.path.pose(self.path_progress, self.size);
                // The pull coefficient grows mildly with remaining distance:
                // floored to avoid jitter near the target, capped to avoid
                // overshoot when far from it.
                let pos_k = (cfg.base_lerp
                    + rig.position.distance(ideal.position) * cfg.lerp_distance_gain)
                    .min(cfg.max_lerp);
                let look_k = (cfg.base_lerp
                    + rig.look_at.distance(ideal.look_at) * cfg.lerp_distance_gain)
                    .min(cfg.max_lerp);
                rig.position = rig.position.lerp(ideal.position, pos_k);
                rig.look_at = rig.look_at.lerp(ideal.look_at, look_k);
            }
        }

        self.path_progress += cfg.path_rate;
        if self.path_progress >= 1.0 {
            self.path_progress = 0.0;
        }
    }
}
