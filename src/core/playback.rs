use super::constants::*;
use super::scene::Scene;
use super::tween::{Ease, Tween};
use smallvec::SmallVec;

/// Where the pointer gesture is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Pressing,
    Releasing,
}

/// Whether the flythrough is (heading toward) stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Active,
    Paused,
}

impl Playback {
    fn toggled(self) -> Self {
        match self {
            Playback::Active => Playback::Paused,
            Playback::Paused => Playback::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    PressStarted,
    PressCompleted { playback: Playback },
    ReleaseStarted { duration_ms: f64, ease: Ease },
    ReleaseCompleted,
    SpeedDownStarted,
    SpeedUpStarted,
}

pub type PlaybackEvents = SmallVec<[PlaybackEvent; 4]>;

/// Pointer-driven field-of-view punch and pause/resume of playback speed.
///
/// Owns the four interaction tweens. Every transition happens in
/// `pointer_down`, `pointer_up` or `update`; times are milliseconds.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    gesture: Gesture,
    playback: Playback,
    fov: f32,
    speed: f32,
    press: Tween,
    release: Tween,
    speed_down: Tween,
    speed_up: Tween,
}

impl PlaybackController {
    pub fn new(fov: f32, speed: f32) -> Self {
        Self {
            gesture: Gesture::Idle,
            playback: Playback::Active,
            fov,
            speed,
            press: Tween::new(FOV_REST, FOV_PUNCH, PRESS_MS, Ease::OutCubic),
            release: Tween::new(FOV_PUNCH, FOV_REST, RELEASE_PAUSED_MS, Ease::OutElastic),
            speed_down: Tween::new(1.0, 0.0, SPEED_DOWN_MS, Ease::InCubic),
            speed_up: Tween::new(0.0, 1.0, SPEED_UP_MS, Ease::InCubic),
        }
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Direct override from the camera slider; a running tween wins on its next update.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_paused(&self) -> bool {
        self.playback == Playback::Paused
    }

    pub fn release_tween(&self) -> &Tween {
        &self.release
    }

    pub fn speed_down_playing(&self) -> bool {
        self.speed_down.is_playing()
    }

    pub fn speed_up_playing(&self) -> bool {
        self.speed_up.is_playing()
    }

    pub fn pointer_down(&mut self, now_ms: f64) -> PlaybackEvents {
        let mut events = PlaybackEvents::new();
        if self.release.is_playing() {
            self.release.pause(now_ms);
        }
        self.press.start(now_ms);
        self.gesture = Gesture::Pressing;
        events.push(PlaybackEvent::PressStarted);
        events
    }

    pub fn pointer_up(&mut self, now_ms: f64) -> PlaybackEvents {
        let mut events = PlaybackEvents::new();
        if self.press.is_playing() {
            self.press.pause(now_ms);
            self.fov = self.press.complete();
            self.on_press_complete(now_ms, &mut events);
        }
        // Paused state is read here, after any forced completion above.
        let (duration_ms, ease) = if self.is_paused() {
            (RELEASE_PAUSED_MS, Ease::OutElastic)
        } else {
            (RELEASE_ACTIVE_MS, Ease::InCubic)
        };
        self.release.set_duration(duration_ms);
        self.release.set_ease(ease);
        self.release.start(now_ms);
        self.gesture = Gesture::Releasing;
        events.push(PlaybackEvent::ReleaseStarted { duration_ms, ease });
        if !self.is_paused() {
            self.start_speed_up(now_ms, &mut events);
        }
        events
    }

    /// Advance all running tweens to `now_ms`.
    pub fn update(&mut self, now_ms: f64) -> PlaybackEvents {
        let mut events = PlaybackEvents::new();
        if let Some(step) = self.press.update(now_ms) {
            self.fov = step.value;
            if step.finished {
                self.on_press_complete(now_ms, &mut events);
            }
        }
        if let Some(step) = self.release.update(now_ms) {
            self.fov = step.value;
            if step.finished {
                self.gesture = Gesture::Idle;
                events.push(PlaybackEvent::ReleaseCompleted);
            }
        }
        if let Some(step) = self.speed_down.update(now_ms) {
            self.speed = step.value.clamp(0.0, 1.0);
        }
        if let Some(step) = self.speed_up.update(now_ms) {
            self.speed = step.value.clamp(0.0, 1.0);
        }
        events
    }

    fn on_press_complete(&mut self, now_ms: f64, events: &mut PlaybackEvents) {
        self.playback = self.playback.toggled();
        events.push(PlaybackEvent::PressCompleted {
            playback: self.playback,
        });
        if self.is_paused() {
            self.start_speed_down(now_ms, events);
        }
    }

    fn start_speed_down(&mut self, now_ms: f64, events: &mut PlaybackEvents) {
        self.speed_up.stop();
        self.speed_down.set_from(self.speed);
        self.speed_down.start(now_ms);
        events.push(PlaybackEvent::SpeedDownStarted);
    }

    fn start_speed_up(&mut self, now_ms: f64, events: &mut PlaybackEvents) {
        self.speed_down.stop();
        self.speed_up.set_from(self.speed);
        self.speed_up.start(now_ms);
        events.push(PlaybackEvent::SpeedUpStarted);
    }
}

/// Sample the tweens at `now_ms`, then move every top-level object at the
/// speed just sampled.
pub fn advance_frame(
    scene: &mut Scene,
    controller: &mut PlaybackController,
    now_ms: f64,
) -> PlaybackEvents {
    let events = controller.update(now_ms);
    scene.advance_depths(controller.speed());
    events
}
