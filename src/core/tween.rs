/// Easing curves used by the interaction tweens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ease {
    Linear,
    InCubic,
    OutCubic,
    OutElastic,
}

impl Ease {
    /// Map normalized progress to eased progress. Input is clamped to [0, 1].
    #[inline]
    pub fn sample(self, x: f32) -> f32 {
        let t = x.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::InCubic => t * t * t,
            Ease::OutCubic => 1.0 - (1.0 - t).powi(3),
            Ease::OutElastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                2f32.powf(-10.0 * t) * ((t - 0.1) * 5.0 * std::f32::consts::PI).sin() + 1.0
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum TweenState {
    Idle,
    Playing { started_ms: f64 },
    Paused { elapsed_ms: f64 },
    Complete,
}

/// Output of a single `Tween::update`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TweenStep {
    pub value: f32,
    /// True only on the update that reached the end.
    pub finished: bool,
}

/// Time-driven interpolation of one scalar between `from` and `to`.
///
/// Times are milliseconds on whatever clock the caller uses; the tween only
/// looks at differences between them.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f64,
    ease: Ease,
    state: TweenState,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            ease,
            state: TweenState::Idle,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn set_from(&mut self, from: f32) {
        self.from = from;
    }

    pub fn set_duration(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms.max(0.0);
    }

    pub fn set_ease(&mut self, ease: Ease) {
        self.ease = ease;
    }

    /// (Re)start from the beginning regardless of the current state.
    pub fn start(&mut self, now_ms: f64) {
        self.state = TweenState::Playing { started_ms: now_ms };
    }

    /// Freeze a playing tween. No-op in any other state.
    pub fn pause(&mut self, now_ms: f64) {
        if let TweenState::Playing { started_ms } = self.state {
            self.state = TweenState::Paused {
                elapsed_ms: (now_ms - started_ms).max(0.0),
            };
        }
    }

    /// Jump to the end value. Returns that value.
    pub fn complete(&mut self) -> f32 {
        self.state = TweenState::Complete;
        self.to
    }

    /// Stop without completing; the tween becomes idle.
    pub fn stop(&mut self) {
        self.state = TweenState::Idle;
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, TweenState::Playing { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, TweenState::Paused { .. })
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, TweenState::Complete)
    }

    #[inline]
    pub fn value_at(&self, progress: f32) -> f32 {
        self.from + (self.to - self.from) * self.ease.sample(progress)
    }

    /// Current value without advancing; `None` when idle.
    pub fn current(&self, now_ms: f64) -> Option<f32> {
        match self.state {
            TweenState::Idle => None,
            TweenState::Playing { started_ms } => Some(self.value_at(self.progress(now_ms - started_ms))),
            TweenState::Paused { elapsed_ms } => Some(self.value_at(self.progress(elapsed_ms))),
            TweenState::Complete => Some(self.to),
        }
    }

    /// Advance a playing tween. Returns `None` unless playing.
    pub fn update(&mut self, now_ms: f64) -> Option<TweenStep> {
        let TweenState::Playing { started_ms } = self.state else {
            return None;
        };
        let p = self.progress(now_ms - started_ms);
        if p >= 1.0 {
            self.state = TweenState::Complete;
            return Some(TweenStep {
                value: self.to,
                finished: true,
            });
        }
        Some(TweenStep {
            value: self.value_at(p),
            finished: false,
        })
    }

    #[inline]
    fn progress(&self, elapsed_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms.max(0.0) / self.duration_ms).min(1.0) as f32
    }
}
