//! Lifecycle plans.
//!
//! A [`LifecyclePlan`] is the terminal configuration a [`Mode`] selects
//! before any side effect happens. The driver walks the same timeline for
//! every plan and only consults these fields at its branch points.

use super::mode::Mode;
use crate::library::ExitHook;

/// Point of the timeline where the unload callback is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPoint {
    /// Before library-wide initialization.
    BeforeInit,
    /// After initialization, before the provider is loaded.
    AfterInit,
}

/// Exit-hook registration: which mechanism and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookRegistration {
    pub hook: ExitHook,
    pub point: HookPoint,
}

/// What a run does with the provider it loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePlan {
    /// Unload callback registration, if any.
    pub registration: Option<HookRegistration>,
    /// Unload immediately after loading.
    pub inline_unload: bool,
    /// Call process-wide cleanup at the end of the run.
    pub cleanup: bool,
}

impl LifecyclePlan {
    const LEAK: Self = Self {
        registration: None,
        inline_unload: false,
        cleanup: false,
    };

    /// Plan selected by `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        let hooked = |hook: ExitHook, point: HookPoint| Self {
            registration: Some(HookRegistration { hook, point }),
            ..Self::LEAK
        };

        match mode {
            Mode::NoUnload => Self::LEAK,
            Mode::UnloadInline => Self {
                inline_unload: true,
                ..Self::LEAK
            },
            Mode::ProcessHookBeforeInit => hooked(ExitHook::Process, HookPoint::BeforeInit),
            Mode::ProcessHookAfterInit => hooked(ExitHook::Process, HookPoint::AfterInit),
            Mode::LibraryHook => hooked(ExitHook::Library, HookPoint::AfterInit),
            Mode::Cleanup => Self {
                cleanup: true,
                ..Self::LEAK
            },
        }
    }

    /// Hook to register at `point`, if this plan registers one there.
    pub fn hook_at(&self, point: HookPoint) -> Option<ExitHook> {
        self.registration
            .filter(|r| r.point == point)
            .map(|r| r.hook)
    }

    /// Whether the loaded provider outlives the run.
    pub fn parks_provider(&self) -> bool {
        !self.inline_unload
    }
}

impl From<Mode> for LifecyclePlan {
    fn from(mode: Mode) -> Self {
        Self::for_mode(mode)
    }
}
