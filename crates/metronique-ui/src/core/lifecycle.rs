//! Timer-driven state machines shared by notifications and tooltips.
//!
//! Both machines are generic over the timer handle type `H`. Handles are expected to cancel on
//! drop (as `gloo_timers::callback::Timeout` does), so replacing or clearing a handle is the
//! cancellation.

/// Phase of a two-phase dismissal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissalPhase {
    /// Not yet armed.
    Idle,
    /// Shown, with an auto-dismiss timer pending.
    Visible,
    /// Exit animation running.
    Closing,
    /// Removal already requested.
    Removed,
}

/// `Visible → Closing → Removed` state machine owning the pending timer for the current phase.
#[derive(Debug)]
pub enum DismissalState<H> {
    /// Not yet armed.
    Idle,
    /// Auto-dismiss pending.
    Visible {
        /// Auto-dismiss timer.
        auto: H,
    },
    /// Exit timer pending.
    Closing {
        /// Exit grace timer.
        exit: H,
    },
    /// Terminal state.
    Removed,
}

impl<H> Default for DismissalState<H> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<H> DismissalState<H> {
    /// Current phase without the handle.
    #[must_use]
    pub const fn phase(&self) -> DismissalPhase {
        match self {
            Self::Idle => DismissalPhase::Idle,
            Self::Visible { .. } => DismissalPhase::Visible,
            Self::Closing { .. } => DismissalPhase::Closing,
            Self::Removed => DismissalPhase::Removed,
        }
    }

    /// Start the visible phase with its auto-dismiss handle. Ignored unless idle.
    pub fn arm(&mut self, auto: H) -> bool {
        if matches!(self, Self::Idle) {
            *self = Self::Visible { auto };
            true
        } else {
            false
        }
    }

    /// Enter the closing phase, dropping any pending auto-dismiss timer.
    ///
    /// Returns `false` (and never calls `arm_exit`) once closing has already started, so a
    /// manual close racing the auto timer runs the exit sequence exactly once.
    pub fn begin_closing(&mut self, arm_exit: impl FnOnce() -> H) -> bool {
        match self {
            Self::Idle | Self::Visible { .. } => {
                *self = Self::Closing { exit: arm_exit() };
                true
            }
            Self::Closing { .. } | Self::Removed => false,
        }
    }

    /// Complete the exit phase. Returns `true` only for the first call after closing.
    pub fn finish(&mut self) -> bool {
        if matches!(self, Self::Closing { .. }) {
            *self = Self::Removed;
            true
        } else {
            false
        }
    }

    /// Drop any pending timer and settle as removed (component teardown).
    pub fn cancel(&mut self) {
        *self = Self::Removed;
    }
}

/// Delayed-show intent holding at most one pending timer.
#[derive(Debug)]
pub struct HoverIntent<H> {
    pending: Option<H>,
}

impl<H> Default for HoverIntent<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> HoverIntent<H> {
    /// Replace any pending timer with `handle`.
    pub fn arm(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    /// Drop the pending timer, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consume the pending timer when it fires.
    pub fn take(&mut self) -> Option<H> {
        self.pending.take()
    }

    /// Whether a timer is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
