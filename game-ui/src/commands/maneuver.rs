use crate::command::{Capabilities, Command, CommandKind, ExecuteOutcome, FrameClaim};
use crate::context::CommandContext;
use crate::presentation::{Display, MusicTrack};
use game_input::InputSample;
use game_types::{Location, ManeuverSettings};
use glam::{Mat3, Quat, Vec3};

const MOVING_EPSILON: f32 = 0.001;

/// Flies the ship with the stick. Holds the frame until confirm is pressed.
pub struct Maneuver {
    settings: ManeuverSettings,
    inertia: Vec3,
}

impl Maneuver {
    pub fn new(settings: ManeuverSettings) -> Self {
        Self {
            settings,
            inertia: Vec3::ZERO,
        }
    }

    pub fn inertia(&self) -> Vec3 {
        self.inertia
    }

    fn steer(&mut self, input: &InputSample, dt: f32) {
        let s = &self.settings;
        let stick = Vec3::new(input.x, 0.0, input.y);

        self.inertia = if stick.length() > s.move_threshold {
            let heading = stick.normalize();
            let alignment = self.inertia.normalize_or_zero().dot(heading);
            let acceleration = (alignment * s.acceleration_cap).clamp(s.acceleration_floor, s.acceleration_cap);
            slerp_vec(self.inertia, heading * acceleration, dt * s.steer_rate)
        } else {
            slerp_vec(self.inertia, Vec3::ZERO, dt * s.brake_rate)
        };
    }
}

impl Command for Maneuver {
    fn label(&self) -> &str {
        "Maneuver"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Maneuver
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            frame_update: true,
            cancel: false,
        }
    }

    fn execute(&mut self, cx: &mut CommandContext<'_>) -> ExecuteOutcome {
        if !cx.admit(self.kind()) {
            return ExecuteOutcome::Rejected;
        }
        if cx.session.just_launched() {
            cx.session.set_location(Location::StarSystem);
        }

        self.inertia = Vec3::ZERO;
        cx.presentation.set_skybox_rotation(cx.session.skybox_rotation());
        cx.presentation.change_display(Display::System);
        cx.presentation.change_music(if cx.session.in_hyperspace() {
            MusicTrack::Hyperspace
        } else {
            MusicTrack::StarSystem
        });
        ExecuteOutcome::ClaimedExclusive
    }

    fn update(&mut self, cx: &mut CommandContext<'_>, input: &InputSample) -> FrameClaim {
        if input.confirm {
            return FrameClaim::Relinquish;
        }

        let dt = cx.delta().as_secs_f32();
        self.steer(input, dt);

        let position = cx.session.ship_position() + self.inertia;
        cx.session.set_ship_position(position.with_y(0.0));

        let speed = self.inertia.length();
        if speed > MOVING_EPSILON {
            let heading = look_rotation(self.inertia);
            cx.session.set_ship_heading(heading);

            let right = heading * Vec3::X;
            let roll = Quat::from_axis_angle(right, (speed * dt).to_radians());
            let skybox = (roll * cx.session.skybox_rotation()).normalize();
            cx.session.set_skybox_rotation(skybox);
            cx.presentation.set_skybox_rotation(skybox);
        }
        FrameClaim::Consumed
    }
}

/// Spherical on direction, linear on length. Falls back to a plain lerp when
/// either end has no direction.
pub fn slerp_vec(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let (from_len, to_len) = (from.length(), to.length());
    if from_len < f32::EPSILON || to_len < f32::EPSILON {
        return from.lerp(to, t);
    }

    let (from_dir, to_dir) = (from / from_len, to / to_len);
    let turn = Quat::IDENTITY.slerp(Quat::from_rotation_arc(from_dir, to_dir), t);
    turn * from_dir * (from_len + (to_len - from_len) * t)
}

/// Rotation taking +Z to `forward` with +Y kept up. `forward` lies in the
/// y = 0 plane.
fn look_rotation(forward: Vec3) -> Quat {
    let forward = forward.normalize();
    let right = Vec3::Y.cross(forward).normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}
