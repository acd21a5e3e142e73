use std::ops::Add;

/// Translation axes of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Rotation axes of a scene object, named the way a viewer turns its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    /// Around X (look up and down)
    Pitch,
    /// Around Y (look left and right)
    Yaw,
    /// Around Z (tilt)
    Roll,
}

impl RotationAxis {
    pub const ALL: [RotationAxis; 3] = [RotationAxis::Pitch, RotationAxis::Yaw, RotationAxis::Roll];

    pub fn label(self) -> &'static str {
        match self {
            RotationAxis::Pitch => "Pitch",
            RotationAxis::Yaw => "Yaw",
            RotationAxis::Roll => "Roll",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            RotationAxis::Pitch => 0,
            RotationAxis::Yaw => 1,
            RotationAxis::Roll => 2,
        }
    }
}

/// Euler rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotation {
    pub const ZERO: Rotation = Rotation {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn get(&self, axis: RotationAxis) -> f32 {
        match axis {
            RotationAxis::Pitch => self.pitch,
            RotationAxis::Yaw => self.yaw,
            RotationAxis::Roll => self.roll,
        }
    }

    pub fn set(&mut self, axis: RotationAxis, degrees: f32) {
        match axis {
            RotationAxis::Pitch => self.pitch = degrees,
            RotationAxis::Yaw => self.yaw = degrees,
            RotationAxis::Roll => self.roll = degrees,
        }
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Rotation {
        Rotation::new(self.pitch + rhs.pitch, self.yaw + rhs.yaw, self.roll + rhs.roll)
    }
}
