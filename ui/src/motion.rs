//! Entrance and hover animation configuration.
//!
//! Everything here is plain data: the browser wiring lives in
//! [`crate::hooks::use_motion`]. A motion moves through
//! `Idle -> Observing -> Triggered` for viewport triggers and toggles between
//! `Idle` and `Triggered` for hover triggers.

use thiserror::Error;

/// Delay added per column when cascading viewport animations.
pub const STAGGER_STEP_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionTrigger {
    /// Fires once the element scrolls into view.
    Viewport,
    /// Fires while the pointer is over the element.
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotionConfig {
    pub trigger: MotionTrigger,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl MotionConfig {
    pub const fn viewport(duration_ms: u32) -> Self {
        Self {
            trigger: MotionTrigger::Viewport,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn hover(duration_ms: u32) -> Self {
        Self {
            trigger: MotionTrigger::Hover,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Viewport config for the `index`th item of a cascade.
    pub fn staggered(duration_ms: u32, index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self::viewport(duration_ms)
            .with_delay(index.saturating_mul(STAGGER_STEP_MS))
    }

    fn transition(&self) -> String {
        format!(
            "transition-property: opacity, transform; \
             transition-duration: {}ms; \
             transition-delay: {}ms; \
             transition-timing-function: ease-out;",
            self.duration_ms, self.delay_ms
        )
    }

    /// Inline style for an element in `phase`.
    ///
    /// With `animate` off the element is rendered in its final state with no
    /// transition at all.
    pub fn style(&self, phase: MotionPhase, animate: bool) -> String {
        if !animate {
            return String::new();
        }
        let visual = match (self.trigger, phase) {
            (MotionTrigger::Viewport, MotionPhase::Triggered) => {
                "opacity: 1; transform: none;"
            }
            (MotionTrigger::Viewport, _) => {
                "opacity: 0; transform: translateY(1.25rem);"
            }
            (MotionTrigger::Hover, MotionPhase::Triggered) => {
                "transform: scale(1.1);"
            }
            (MotionTrigger::Hover, _) => "transform: scale(1);",
        };
        format!("{} {}", self.transition(), visual)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    Idle,
    /// Waiting for the element to enter the viewport.
    Observing,
    Triggered,
}

impl MotionPhase {
    /// Starting phase. With animation off the element starts out shown.
    pub fn initial(animate: bool) -> Self {
        if animate {
            MotionPhase::Idle
        } else {
            MotionPhase::Triggered
        }
    }

    /// The phase to render, given whether animation is currently on.
    pub fn resolve(self, animate: bool) -> Self {
        if animate { self } else { MotionPhase::Triggered }
    }

    /// Whether a viewport trigger still has to watch for intersection.
    pub fn is_waiting(self) -> bool {
        matches!(self, MotionPhase::Idle | MotionPhase::Observing)
    }

    /// Outcome of trying to attach a viewport watcher. Without one the
    /// element would never be revealed, so it is shown right away.
    pub fn attached(self, watching: bool) -> Self {
        if watching {
            self.observe()
        } else {
            MotionPhase::Triggered
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MotionPhase::Idle => "idle",
            MotionPhase::Observing => "observing",
            MotionPhase::Triggered => "triggered",
        }
    }

    pub fn observe(self) -> Self {
        match self {
            MotionPhase::Idle => MotionPhase::Observing,
            other => other,
        }
    }

    /// Viewport animations fire once and never re-arm.
    pub fn intersect(self, visible: bool) -> Self {
        match self {
            MotionPhase::Observing if visible => MotionPhase::Triggered,
            other => other,
        }
    }

    pub fn pointer_enter(self) -> Self {
        MotionPhase::Triggered
    }

    pub fn pointer_leave(self) -> Self {
        match self {
            MotionPhase::Triggered => MotionPhase::Idle,
            other => other,
        }
    }
}

/// Global switch for animations, provided through a `ContextProvider`.
///
/// Static prerendering turns animation off so that nothing depends on
/// scripts to become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionSettings {
    pub animate: bool,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self { animate: true }
    }
}

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("element is not mounted")]
    Unmounted,
    #[error("intersection observer unavailable: {0}")]
    Observer(String),
}
