//! Rotating vector chains.
//!
//! An [`ExerciseScene`] holds four points joined into a chain of segments
//! `origin → v1 → v2 → v3 → v4`. Each tick the selected [`Exercise`] rotates
//! some of the points by a fixed Euler step and decides which segments are
//! visible.

use std::fmt;

use engine_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ExerciseError;

/// Starting points of the chain.
pub const INITIAL_VECTORS: [Vec3; 4] = [
    Vec3::new(10.0, 0.0, 0.0),
    Vec3::new(10.0, 10.0, 0.0),
    Vec3::new(20.0, 10.0, 0.0),
    Vec3::new(20.0, 20.0, 0.0),
];

const SEGMENT_NAMES: [&str; 4] = ["V1", "V2", "V3", "V4"];

/// Which exercise the scene runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Exercise {
    /// `v1` spins about Y. Shows `V1`.
    Single,
    /// `v1`, `v2` and `v3` spin about Y together. Shows `V1..V3`.
    Chain,
    /// `v1` and `v3` spin about X and Y in opposite directions. Shows `V1..V4`.
    Mirror,
}

impl Exercise {
    /// Number of leading segments this exercise shows.
    #[must_use]
    pub fn visible_segments(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Chain => 3,
            Self::Mirror => 4,
        }
    }
}

impl TryFrom<u8> for Exercise {
    type Error = ExerciseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Chain),
            3 => Ok(Self::Mirror),
            other => Err(ExerciseError::UnknownExercise(other)),
        }
    }
}

impl From<Exercise> for u8 {
    fn from(exercise: Exercise) -> Self {
        match exercise {
            Exercise::Single => 1,
            Exercise::Chain => 2,
            Exercise::Mirror => 3,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "single",
            Self::Chain => "chain",
            Self::Mirror => "mirror",
        };
        write!(f, "{name} ({})", u8::from(*self))
    }
}

/// A named line segment a renderer would draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub name: &'static str,
    pub from: Vec3,
    pub to: Vec3,
    pub visible: bool,
}

/// The four chain points and their segments.
#[derive(Debug, Clone)]
pub struct ExerciseScene {
    vectors: [Vec3; 4],
    segments: [Segment; 4],
    last_exercise: Option<Exercise>,
}

impl ExerciseScene {
    /// Create a scene at the initial vectors with every segment hidden.
    #[must_use]
    pub fn new() -> Self {
        let mut scene = Self {
            vectors: INITIAL_VECTORS,
            segments: SEGMENT_NAMES.map(|name| Segment {
                name,
                from: Vec3::ZERO,
                to: Vec3::ZERO,
                visible: false,
            }),
            last_exercise: None,
        };
        scene.sync_segments();
        scene
    }

    /// Current chain points `v1..v4`.
    #[must_use]
    pub fn vectors(&self) -> &[Vec3; 4] {
        &self.vectors
    }

    /// All four segments, visible or not.
    #[must_use]
    pub fn segments(&self) -> &[Segment; 4] {
        &self.segments
    }

    /// Segments shown by the last step.
    pub fn visible_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.visible)
    }

    /// The exercise run by the last step, if any.
    #[must_use]
    pub fn last_exercise(&self) -> Option<Exercise> {
        self.last_exercise
    }

    /// Put every point back at its starting position.
    pub fn reset(&mut self) {
        self.vectors = INITIAL_VECTORS;
        self.sync_segments();
    }

    /// Advance one tick of `exercise`, rotating by `angle` degrees.
    ///
    /// Switching to a different exercise than the previous step resets the
    /// points first.
    pub fn step(&mut self, exercise: Exercise, angle: f32) {
        if self.last_exercise.is_some_and(|last| last != exercise) {
            self.reset();
        }
        self.last_exercise = Some(exercise);

        let [v1, v2, v3, _] = &mut self.vectors;
        match exercise {
            Exercise::Single => {
                let spin = Quat::euler(0.0, angle, 0.0);
                *v1 = spin * *v1;
            }
            Exercise::Chain => {
                let spin = Quat::euler(0.0, angle, 0.0);
                for v in [v1, v2, v3] {
                    *v = spin * *v;
                }
            }
            Exercise::Mirror => {
                *v1 = Quat::euler(angle, angle, 0.0) * *v1;
                *v3 = Quat::euler(-angle, -angle, 0.0) * *v3;
            }
        }

        let shown = exercise.visible_segments();
        for (i, segment) in self.segments.iter_mut().enumerate() {
            segment.visible = i < shown;
        }
        self.sync_segments();
    }

    fn sync_segments(&mut self) {
        let mut from = Vec3::ZERO;
        for (segment, &to) in self.segments.iter_mut().zip(&self.vectors) {
            segment.from = from;
            segment.to = to;
            from = to;
        }
    }
}

impl Default for ExerciseScene {
    fn default() -> Self {
        Self::new()
    }
}
