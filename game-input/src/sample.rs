/// One frame of normalized directional input.
///
/// Axes are in `[-1, 1]` with `+y` pointing up; `confirm` and `cancel` are
/// edge triggers that are true only on the frame the button went down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    pub x: f32,
    pub y: f32,
    pub confirm: bool,
    pub cancel: bool,
}

impl InputSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
            confirm: false,
            cancel: false,
        }
    }

    pub fn centered() -> Self {
        Self::default()
    }

    pub fn confirmed() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    pub fn canceled() -> Self {
        Self {
            cancel: true,
            ..Self::default()
        }
    }
}
