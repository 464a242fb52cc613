//! Camera rig state: view mode, vanity and preview cameras, zoom and angles.
//!
//! The rig is plain state. Systems in [`super::systems`] read it every frame
//! and write the camera transform; nothing here touches the ECS world
//! beyond holding entity ids.

use crate::settings::CameraSettings;
use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const PITCH_EPSILON: f32 = 0.000_001;
const VANITY_PITCH_DEGREES: f32 = -30.0;
/// Floor for temporary distance changes (camera pushed in by obstacles).
const MIN_ADJUSTED_DISTANCE: f32 = 10.0;
const SNEAK_FIRST_PERSON_DROP: f32 = 9.8;

/// Yaw, pitch and distance of one of the two rig cameras.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CamState {
    pub yaw: f32,
    pub pitch: f32,
    pub offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VanityState {
    pub enabled: bool,
    pub allowed: bool,
}

/// Where the camera hangs in the character's hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAttachment {
    /// On the head bone of the bound animation.
    HeadBone,
    /// On the pivot above the tracked character.
    Pivot,
}

#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    first_person: bool,
    preview_mode: bool,
    vanity: VanityState,
    free_look: bool,
    height: f32,
    camera_distance: f32,
    distance_adjusted: bool,
    nearest: f32,
    furthest: f32,
    is_nearest: bool,
    is_furthest: bool,
    main_cam: CamState,
    preview_cam: CamState,
    /// Camera distance behind the pivot along the rig's local back axis.
    offset: f32,
    first_person_offset: Vec3,
    vanity_rotation_speed: f32,
    tracking: Option<Entity>,
    animation: Option<Entity>,
    view_changed: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(&CameraSettings::default())
    }
}

impl CameraRig {
    pub fn new(settings: &CameraSettings) -> Self {
        let cam = CamState {
            yaw: 0.0,
            pitch: 0.0,
            offset: settings.preview_offset,
        };
        Self {
            first_person: true,
            preview_mode: false,
            vanity: VanityState {
                enabled: false,
                allowed: true,
            },
            free_look: true,
            height: settings.height,
            camera_distance: settings.default_distance,
            distance_adjusted: false,
            nearest: settings.nearest,
            furthest: settings.furthest,
            is_nearest: false,
            is_furthest: false,
            main_cam: cam,
            preview_cam: cam,
            offset: 0.0,
            first_person_offset: Vec3::ZERO,
            vanity_rotation_speed: settings.vanity_rotation_deg_per_sec.to_radians(),
            tracking: None,
            animation: None,
            view_changed: false,
        }
    }

    /// Back to plain first person: no preview, no vanity.
    pub fn reset(&mut self) {
        self.toggle_preview_mode(false);
        self.toggle_vanity_mode(false);
        if !self.first_person {
            self.toggle_view_mode();
        }
    }

    /// Sets pitch and yaw, or adds to them when `adjust` is true.
    pub fn rotate(&mut self, pitch: f32, yaw: f32, adjust: bool) {
        if adjust {
            self.set_yaw(self.yaw() + yaw);
            self.set_pitch(self.pitch() + pitch);
        } else {
            self.set_yaw(yaw);
            self.set_pitch(pitch);
        }
    }

    /// Rotation of the camera relative to the tracked character.
    ///
    /// Outside vanity and preview the character's own facing carries the
    /// yaw, so only pitch is applied here.
    pub fn orientation(&self) -> Quat {
        let pitch = Quat::from_rotation_x(self.pitch());
        if self.is_vanity_or_preview_mode_enabled() {
            Quat::from_rotation_y(-self.yaw()) * pitch
        } else {
            pitch
        }
    }

    pub fn tracking(&self) -> Option<Entity> {
        self.tracking
    }

    pub fn attach_to(&mut self, entity: Entity) {
        self.tracking = Some(entity);
    }

    pub fn toggle_view_mode(&mut self) {
        self.first_person = !self.first_person;
        self.process_view_change();

        self.offset = if self.first_person {
            0.0
        } else {
            self.camera_distance
        };
    }

    pub fn allow_vanity_mode(&mut self, allow: bool) {
        if !allow && self.vanity.enabled {
            self.toggle_vanity_mode(false);
        }
        self.vanity.allowed = allow;
    }

    /// Returns false only when enabling is not allowed.
    pub fn toggle_vanity_mode(&mut self, enable: bool) -> bool {
        if !self.vanity.allowed && enable {
            return false;
        }
        if self.vanity.enabled == enable {
            return true;
        }
        self.vanity.enabled = enable;
        self.process_view_change();

        let (pitch, offset) = if enable {
            self.main_cam.offset = self.offset;
            (VANITY_PITCH_DEGREES.to_radians(), self.preview_cam.offset)
        } else {
            (self.pitch(), self.main_cam.offset)
        };
        let yaw = self.yaw();

        self.offset = offset;
        self.rotate(pitch, yaw, false);
        true
    }

    pub fn toggle_preview_mode(&mut self, enable: bool) {
        if self.preview_mode == enable {
            return;
        }
        self.preview_mode = enable;
        self.process_view_change();

        let current = self.offset;
        self.offset = if enable {
            self.main_cam.offset = current;
            self.preview_cam.offset
        } else {
            self.preview_cam.offset = current;
            self.main_cam.offset
        };

        // Re-apply so the pitch is clamped against the new limit.
        self.rotate(self.pitch(), self.yaw(), false);
    }

    /// Lowers the first person eye point while sneaking.
    pub fn set_sneak_offset(&mut self, sneaking: bool) {
        if self.animation.is_none() {
            return;
        }
        self.first_person_offset = if sneaking {
            Vec3::new(0.0, -SNEAK_FIRST_PERSON_DROP, 0.0)
        } else {
            Vec3::ZERO
        };
    }

    pub fn first_person_offset(&self) -> Vec3 {
        self.first_person_offset
    }

    /// Per-frame advance: the vanity camera slowly circles the character.
    pub fn update(&mut self, duration: f32, paused: bool) {
        if paused {
            return;
        }
        if self.vanity.enabled {
            self.rotate(0.0, self.vanity_rotation_speed * duration, true);
        }
    }

    /// The crosshair shows only in game mode and plain first person.
    pub fn crosshair_visible(&self, gui_mode: bool) -> bool {
        !gui_mode && self.is_first_person()
    }

    pub fn yaw(&self) -> f32 {
        if self.is_vanity_or_preview_mode_enabled() {
            self.preview_cam.yaw
        } else {
            self.main_cam.yaw
        }
    }

    pub fn set_yaw(&mut self, angle: f32) {
        let angle = if angle > PI {
            angle - TAU
        } else if angle < -PI {
            angle + TAU
        } else {
            angle
        };

        if self.is_vanity_or_preview_mode_enabled() {
            self.preview_cam.yaw = angle;
        } else {
            self.main_cam.yaw = angle;
        }
    }

    pub fn pitch(&self) -> f32 {
        if self.is_vanity_or_preview_mode_enabled() {
            self.preview_cam.pitch
        } else {
            self.main_cam.pitch
        }
    }

    pub fn set_pitch(&mut self, angle: f32) {
        let mut limit = FRAC_PI_2 - PITCH_EPSILON;
        if self.preview_mode {
            limit /= 2.0;
        }
        let angle = angle.clamp(-limit, limit);

        if self.is_vanity_or_preview_mode_enabled() {
            self.preview_cam.pitch = angle;
        } else {
            self.main_cam.pitch = angle;
        }
    }

    /// Moves the camera along its back axis.
    ///
    /// `persist` marks a player zoom that is remembered; otherwise the
    /// change is temporary (the camera pushed in front of an obstacle) and
    /// is undone by [`Self::restore_camera_distance`].
    pub fn set_camera_distance(&mut self, distance: f32, adjust: bool, persist: bool) {
        if self.first_person && !self.preview_mode && !self.vanity.enabled {
            return;
        }

        self.is_furthest = false;
        self.is_nearest = false;

        let mut target = distance;
        if adjust {
            target += self.offset;
        }
        if target >= self.furthest {
            target = self.furthest;
            self.is_furthest = true;
        } else if !persist && target < MIN_ADJUSTED_DISTANCE {
            target = MIN_ADJUSTED_DISTANCE;
        } else if persist && target <= self.nearest {
            target = self.nearest;
            self.is_nearest = true;
        }
        self.offset = target;

        if persist {
            if self.is_vanity_or_preview_mode_enabled() {
                self.preview_cam.offset = target;
            } else if !self.first_person {
                self.camera_distance = target;
            }
        } else {
            self.distance_adjusted = true;
        }
    }

    /// Undoes a temporary distance change.
    pub fn restore_camera_distance(&mut self) {
        if self.distance_adjusted {
            if self.is_vanity_or_preview_mode_enabled() {
                self.offset = self.preview_cam.offset;
            } else if !self.first_person {
                self.offset = self.camera_distance;
            }
        }
        self.distance_adjusted = false;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    /// Binds the animated character whose head carries the first person
    /// camera. Returns the previously bound animation when it differs, so
    /// the caller can put it back into its normal view mode.
    pub fn set_animation(&mut self, animation: Entity) -> Option<Entity> {
        let previous = self.animation.filter(|previous| *previous != animation);
        self.animation = Some(animation);
        self.process_view_change();
        previous
    }

    pub fn animation(&self) -> Option<Entity> {
        self.animation
    }

    fn process_view_change(&mut self) {
        self.view_changed = true;
    }

    /// Consumes the pending view change flag.
    pub fn take_view_change(&mut self) -> bool {
        std::mem::take(&mut self.view_changed)
    }

    pub fn attachment(&self) -> CameraAttachment {
        if self.is_first_person() {
            CameraAttachment::HeadBone
        } else {
            CameraAttachment::Pivot
        }
    }

    pub fn is_first_person(&self) -> bool {
        self.first_person && !self.vanity.enabled && !self.preview_mode
    }

    pub fn toggle_player_looking(&mut self, enable: bool) {
        self.free_look = enable;
    }

    pub fn free_look(&self) -> bool {
        self.free_look
    }

    pub fn is_vanity_or_preview_mode_enabled(&self) -> bool {
        self.preview_mode || self.vanity.enabled
    }

    pub fn is_vanity_enabled(&self) -> bool {
        self.vanity.enabled
    }

    pub fn is_preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn is_nearest(&self) -> bool {
        self.is_nearest
    }

    pub fn is_furthest(&self) -> bool {
        self.is_furthest
    }

    /// World transform of the camera given the pivot and the tracked
    /// character's rotation.
    pub fn camera_transform(&self, pivot: Vec3, body_rotation: Quat) -> Transform {
        let rotation = body_rotation * self.orientation();
        Transform {
            translation: pivot + rotation * Vec3::new(0.0, 0.0, self.offset),
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Focal point (the pivot) and camera position.
    pub fn focal_and_camera(&self, pivot: Vec3, body_rotation: Quat) -> (Vec3, Vec3) {
        (pivot, self.camera_transform(pivot, body_rotation).translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn third_person_rig() -> CameraRig {
        let mut rig = CameraRig::default();
        rig.toggle_view_mode();
        rig
    }

    #[test]
    fn starts_in_first_person_with_settings_values() {
        let rig = CameraRig::default();
        assert!(rig.is_first_person());
        assert!(!rig.is_vanity_or_preview_mode_enabled());
        assert_eq!(rig.offset(), 0.0);
        assert_eq!(rig.height(), 128.0);
        assert_eq!(rig.attachment(), CameraAttachment::HeadBone);
        assert!(rig.free_look());
    }

    #[test]
    fn toggle_view_mode_moves_camera_to_configured_distance() {
        let mut rig = CameraRig::default();
        rig.toggle_view_mode();
        assert!(!rig.is_first_person());
        assert_eq!(rig.offset(), 300.0);
        assert_eq!(rig.attachment(), CameraAttachment::Pivot);
        assert!(rig.take_view_change());
        assert!(!rig.take_view_change());

        rig.toggle_view_mode();
        assert_eq!(rig.offset(), 0.0);
    }

    #[test]
    fn yaw_wraps_once_into_half_turn_range() {
        let mut rig = CameraRig::default();
        rig.set_yaw(PI + 0.5);
        assert!((rig.yaw() - (0.5 - PI)).abs() < EPS);
        rig.set_yaw(-PI - 0.25);
        assert!((rig.yaw() - (PI - 0.25)).abs() < EPS);
        rig.set_yaw(PI);
        assert_eq!(rig.yaw(), PI);
    }

    #[test]
    fn pitch_is_clamped_and_halved_in_preview() {
        let mut rig = CameraRig::default();
        rig.set_pitch(10.0);
        assert!((rig.pitch() - (FRAC_PI_2 - PITCH_EPSILON)).abs() < EPS);

        rig.toggle_preview_mode(true);
        rig.set_pitch(-10.0);
        assert!((rig.pitch() + (FRAC_PI_2 - PITCH_EPSILON) / 2.0).abs() < EPS);
    }

    #[test]
    fn relative_rotation_adds_to_current_angles() {
        let mut rig = CameraRig::default();
        rig.rotate(0.2, 0.3, false);
        rig.rotate(0.1, -0.1, true);
        assert!((rig.pitch() - 0.3).abs() < EPS);
        assert!((rig.yaw() - 0.2).abs() < EPS);
    }

    #[test]
    fn vanity_swaps_offsets_and_tilts_down() {
        let mut rig = third_person_rig();
        rig.rotate(0.2, 0.0, false);

        assert!(rig.toggle_vanity_mode(true));
        assert!(rig.is_vanity_enabled());
        assert!(!rig.is_first_person());
        assert_eq!(rig.offset(), 400.0);
        assert!((rig.pitch() - (-30.0_f32).to_radians()).abs() < EPS);

        assert!(rig.toggle_vanity_mode(true));

        assert!(rig.toggle_vanity_mode(false));
        assert_eq!(rig.offset(), 300.0);
        assert!((rig.pitch() - 0.2).abs() < EPS);
    }

    #[test]
    fn vanity_refused_when_disallowed_and_left_when_disallowed() {
        let mut rig = CameraRig::default();
        assert!(rig.toggle_vanity_mode(true));
        rig.allow_vanity_mode(false);
        assert!(!rig.is_vanity_enabled());
        assert!(!rig.toggle_vanity_mode(true));
        assert!(rig.toggle_vanity_mode(false));
    }

    #[test]
    fn vanity_update_rotates_three_degrees_per_second() {
        let mut rig = CameraRig::default();
        rig.toggle_vanity_mode(true);
        let start = rig.yaw();

        rig.update(2.0, true);
        assert_eq!(rig.yaw(), start);

        rig.update(2.0, false);
        assert!((rig.yaw() - start - 6.0_f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn preview_keeps_separate_offsets() {
        let mut rig = third_person_rig();
        rig.toggle_preview_mode(true);
        assert_eq!(rig.offset(), 400.0);

        rig.set_camera_distance(-50.0, true, true);
        assert_eq!(rig.offset(), 350.0);

        rig.toggle_preview_mode(false);
        assert_eq!(rig.offset(), 300.0);

        rig.toggle_preview_mode(true);
        assert_eq!(rig.offset(), 350.0);
    }

    #[test]
    fn distance_ignored_in_plain_first_person() {
        let mut rig = CameraRig::default();
        rig.set_camera_distance(500.0, false, true);
        assert_eq!(rig.offset(), 0.0);
        assert_eq!(rig.camera_distance(), 300.0);
    }

    #[test]
    fn persistent_zoom_clamps_and_flags_limits() {
        let mut rig = third_person_rig();

        rig.set_camera_distance(5_000.0, false, true);
        assert_eq!(rig.offset(), 800.0);
        assert!(rig.is_furthest());
        assert!(!rig.is_nearest());
        assert_eq!(rig.camera_distance(), 800.0);

        rig.set_camera_distance(-900.0, true, true);
        assert_eq!(rig.offset(), 30.0);
        assert!(rig.is_nearest());
        assert!(!rig.is_furthest());
        assert_eq!(rig.camera_distance(), 30.0);
    }

    #[test]
    fn temporary_distance_is_floored_and_restored() {
        let mut rig = third_person_rig();

        rig.set_camera_distance(4.0, false, false);
        assert_eq!(rig.offset(), 10.0);
        assert!(!rig.is_nearest());
        assert_eq!(rig.camera_distance(), 300.0);

        rig.restore_camera_distance();
        assert_eq!(rig.offset(), 300.0);

        rig.set_camera_distance(20.0, false, false);
        rig.restore_camera_distance();
        rig.set_camera_distance(20.0, false, true);
        rig.restore_camera_distance();
        assert_eq!(rig.offset(), 30.0);
    }

    #[test]
    fn reset_returns_to_first_person() {
        let mut rig = third_person_rig();
        rig.toggle_preview_mode(true);
        rig.toggle_vanity_mode(true);

        rig.reset();

        assert!(rig.is_first_person());
        assert!(!rig.is_preview_mode());
        assert!(!rig.is_vanity_enabled());
        assert_eq!(rig.offset(), 0.0);
    }

    #[test]
    fn set_animation_reports_replaced_animation() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();
        let mut rig = CameraRig::default();

        assert_eq!(rig.set_animation(first), None);
        assert_eq!(rig.set_animation(first), None);
        assert_eq!(rig.set_animation(second), Some(first));
        assert_eq!(rig.animation(), Some(second));
    }

    #[test]
    fn sneak_offset_requires_animation() {
        let mut rig = CameraRig::default();
        rig.set_sneak_offset(true);
        assert_eq!(rig.first_person_offset(), Vec3::ZERO);

        let mut world = World::new();
        rig.set_animation(world.spawn_empty().id());
        rig.set_sneak_offset(true);
        assert_eq!(rig.first_person_offset(), Vec3::new(0.0, -9.8, 0.0));
        rig.set_sneak_offset(false);
        assert_eq!(rig.first_person_offset(), Vec3::ZERO);
    }

    #[test]
    fn crosshair_only_in_game_mode_first_person() {
        let mut rig = CameraRig::default();
        assert!(rig.crosshair_visible(false));
        assert!(!rig.crosshair_visible(true));
        rig.toggle_preview_mode(true);
        assert!(!rig.crosshair_visible(false));
    }

    #[test]
    fn camera_sits_behind_pivot_and_looks_at_it() {
        let rig = third_person_rig();
        let pivot = Vec3::new(100.0, 128.0, -40.0);

        let transform = rig.camera_transform(pivot, Quat::IDENTITY);
        assert!((transform.translation - Vec3::new(100.0, 128.0, 260.0)).length() < 1e-3);
        assert!((*transform.forward() - Vec3::NEG_Z).length() < 1e-5);

        let (focal, camera) = rig.focal_and_camera(pivot, Quat::IDENTITY);
        assert_eq!(focal, pivot);
        assert_eq!(camera, transform.translation);
    }

    #[test]
    fn looking_up_lowers_the_orbiting_camera() {
        let mut rig = third_person_rig();
        rig.set_pitch(0.5);
        let transform = rig.camera_transform(Vec3::ZERO, Quat::IDENTITY);
        assert!(transform.translation.y < 0.0);
        assert!(transform.forward().y > 0.0);
    }
}
