//! Overlay lifecycle state machine.
//!
//! Models the open/animating/closed lifecycle of the single detail
//! overlay. The machine itself is the only source of truth for which of
//! the two racing close signals — the exit transition finishing, or the
//! fallback timer elapsing — gets to finish the close; whichever arrives
//! second finds the state already advanced and does nothing.
//!
//! The web layer owns the actual timer and DOM listeners; this module only
//! decides transitions, so every property can be tested natively.

/// Visual lifecycle phase of the overlay.
///
/// `Rendering` exists so the view can mount before the enter transition is
/// armed; callers move to `Visible` one tick after mounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Rendering,
    Visible,
    Closing,
}

/// Identity of one scheduled fallback timer.
///
/// A fire with a token that is no longer current is stale and must be
/// ignored; tokens are never reused within a machine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackToken(u64);

/// What [`OverlayState::request_close`] decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseRequest {
    /// Already closing or closed; notify nobody, schedule nothing.
    Ignored,
    /// Close begun: notify `on_close` once and schedule the fallback timer
    /// under this token.
    Begun { fallback: FallbackToken },
}

/// The overlay lifecycle machine, carrying the subject being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState<S> {
    phase: OverlayPhase,
    subject: Option<S>,
    pending: Option<FallbackToken>,
    next_token: u64,
}

impl<S> Default for OverlayState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> OverlayState<S> {
    pub fn new() -> Self {
        Self {
            phase: OverlayPhase::Closed,
            subject: None,
            pending: None,
            next_token: 0,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn subject(&self) -> Option<&S> {
        self.subject.as_ref()
    }

    /// Whether the overlay markup should be in the tree at all.
    pub fn should_render(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    pub fn is_closing(&self) -> bool {
        self.phase == OverlayPhase::Closing
    }

    /// Open the overlay on `subject`.
    ///
    /// Interrupts a pending close: the outstanding fallback token is
    /// forgotten, so a timer that still fires is stale and ignored.
    pub fn open(&mut self, subject: S) {
        self.pending = None;
        self.subject = Some(subject);
        self.phase = OverlayPhase::Rendering;
    }

    /// Complete the mount tick. Returns `false` (and does nothing) unless
    /// the overlay was in `Rendering` — a late tick after a close or
    /// reopen is harmless.
    pub fn mark_visible(&mut self) -> bool {
        if self.phase != OverlayPhase::Rendering {
            return false;
        }
        self.phase = OverlayPhase::Visible;
        true
    }

    /// Ask the overlay to close.
    ///
    /// Idempotent: repeated calls while `Closing` (or while already
    /// `Closed`) return [`CloseRequest::Ignored`], so `on_close` fires and
    /// the fallback timer is scheduled at most once per close.
    pub fn request_close(&mut self) -> CloseRequest {
        match self.phase {
            OverlayPhase::Closing | OverlayPhase::Closed => CloseRequest::Ignored,
            OverlayPhase::Rendering | OverlayPhase::Visible => {
                let token = FallbackToken(self.next_token);
                self.next_token += 1;
                self.pending = Some(token);
                self.phase = OverlayPhase::Closing;
                CloseRequest::Begun { fallback: token }
            }
        }
    }

    /// The exit transition finished. Wins the race if the overlay is still
    /// `Closing`; returns whether the close completed (in which case the
    /// caller should cancel its timer handle).
    pub fn transition_ended(&mut self) -> bool {
        if self.phase != OverlayPhase::Closing {
            return false;
        }
        self.finish_close();
        true
    }

    /// The fallback timer fired. Only acts when the overlay is still
    /// `Closing` *and* the token is the one scheduled for this close;
    /// anything else is a stale delivery and a no-op.
    pub fn fallback_elapsed(&mut self, token: FallbackToken) -> bool {
        if self.phase != OverlayPhase::Closing || self.pending != Some(token) {
            return false;
        }
        self.finish_close();
        true
    }

    fn finish_close(&mut self) {
        self.phase = OverlayPhase::Closed;
        self.subject = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn begun(request: CloseRequest) -> FallbackToken {
        match request {
            CloseRequest::Begun { fallback } => fallback,
            CloseRequest::Ignored => panic!("expected close to begin"),
        }
    }

    #[test]
    fn open_then_tick_reaches_visible() {
        let mut overlay = OverlayState::new();
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert!(!overlay.should_render());

        overlay.open("login-lounge");
        assert_eq!(overlay.phase(), OverlayPhase::Rendering);
        assert_eq!(overlay.subject(), Some(&"login-lounge"));
        assert!(overlay.should_render());

        assert!(overlay.mark_visible());
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
    }

    #[test]
    fn mark_visible_outside_rendering_is_ignored() {
        let mut overlay: OverlayState<&str> = OverlayState::new();
        assert!(!overlay.mark_visible());
        overlay.open("mullans");
        overlay.mark_visible();
        assert!(!overlay.mark_visible());
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
    }

    #[test]
    fn transition_end_completes_the_close_and_clears_the_subject() {
        let mut overlay = OverlayState::new();
        overlay.open("mullans");
        overlay.mark_visible();

        begun(overlay.request_close());
        assert_eq!(overlay.phase(), OverlayPhase::Closing);
        // The subject stays visible while the exit animation plays.
        assert_eq!(overlay.subject(), Some(&"mullans"));

        assert!(overlay.transition_ended());
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert_eq!(overlay.subject(), None);
    }

    #[test]
    fn double_close_schedules_exactly_one_fallback() {
        let mut overlay = OverlayState::new();
        overlay.open("the-bear");
        overlay.mark_visible();

        let first = overlay.request_close();
        assert!(matches!(first, CloseRequest::Begun { .. }));
        // Reentrant close: no second notification, no second timer.
        assert_eq!(overlay.request_close(), CloseRequest::Ignored);
        assert_eq!(overlay.request_close(), CloseRequest::Ignored);
    }

    #[test]
    fn close_while_closed_is_ignored() {
        let mut overlay: OverlayState<&str> = OverlayState::new();
        assert_eq!(overlay.request_close(), CloseRequest::Ignored);
    }

    #[test]
    fn fallback_timer_completes_the_close() {
        let mut overlay = OverlayState::new();
        overlay.open("mullans");
        overlay.mark_visible();
        let token = begun(overlay.request_close());

        assert!(overlay.fallback_elapsed(token));
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert_eq!(overlay.subject(), None);
    }

    #[test]
    fn whichever_close_signal_arrives_second_is_a_no_op() {
        // Transition end first, then the timer.
        let mut overlay = OverlayState::new();
        overlay.open("mullans");
        overlay.mark_visible();
        let token = begun(overlay.request_close());
        assert!(overlay.transition_ended());
        assert!(!overlay.fallback_elapsed(token));

        // Timer first, then the transition end.
        overlay.open("mullans");
        overlay.mark_visible();
        let token = begun(overlay.request_close());
        assert!(overlay.fallback_elapsed(token));
        assert!(!overlay.transition_ended());
    }

    #[test]
    fn reopening_interrupts_a_pending_close() {
        let mut overlay = OverlayState::new();
        overlay.open("login-lounge");
        overlay.mark_visible();
        let stale = begun(overlay.request_close());

        // Reopen with a different subject before the fallback fires.
        overlay.open("the-bear");
        assert!(overlay.mark_visible());
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
        assert_eq!(overlay.subject(), Some(&"the-bear"));

        // The old close's timer fires late: it must not touch the new
        // subject.
        assert!(!overlay.fallback_elapsed(stale));
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
        assert_eq!(overlay.subject(), Some(&"the-bear"));
    }

    #[test]
    fn stale_transition_end_after_reopen_is_ignored() {
        let mut overlay = OverlayState::new();
        overlay.open("login-lounge");
        overlay.mark_visible();
        begun(overlay.request_close());
        overlay.open("mullans");

        // A transition-end from the interrupted exit animation arrives
        // while the overlay is re-rendering.
        assert!(!overlay.transition_ended());
        assert_eq!(overlay.phase(), OverlayPhase::Rendering);
        assert_eq!(overlay.subject(), Some(&"mullans"));
    }

    #[test]
    fn tokens_are_unique_per_close() {
        let mut overlay = OverlayState::new();
        overlay.open("mullans");
        let first = begun(overlay.request_close());
        overlay.open("mullans");
        let second = begun(overlay.request_close());
        assert_ne!(first, second);
        // Only the current token may finish the close.
        assert!(!overlay.fallback_elapsed(first));
        assert!(overlay.fallback_elapsed(second));
    }

    #[test]
    fn close_from_rendering_is_allowed() {
        // Escape can arrive during the mount tick, before the overlay is
        // marked visible.
        let mut overlay = OverlayState::new();
        overlay.open("mullans");
        let token = begun(overlay.request_close());
        assert_eq!(overlay.phase(), OverlayPhase::Closing);
        assert!(overlay.fallback_elapsed(token));
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
    }
}
