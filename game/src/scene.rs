//! Scene state machine: pure transitions over an explicit app context.
//!
//! The two pieces of cross-cutting state (current scene mode, current
//! handedness) live in one context value. Transitions are pure functions of
//! `(context, action)`; side effects (body registration and teardown) are
//! applied by the app when the resulting mode differs from the current one.

use crate::input::Handedness;

/// Exactly one mode is active at a time. The machine runs for the life of
/// the session: no pause, no game-over, no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneMode {
    Intro,
    Game,
}

/// Cross-cutting UI state threaded through every transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppContext {
    pub mode: SceneMode,
    pub handedness: Handedness,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            mode: SceneMode::Intro,
            handedness: Handedness::Right,
        }
    }
}

/// Application-level actions produced by the event router and the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneAction {
    /// Enter game mode (the intro scene's Start button).
    Start,
    /// Return to the intro menu (squeeze in game mode).
    ToMenu,
    /// Select which controller drives the hand. Persists across mode switches.
    SetHandedness(Handedness),
}

/// Pure transition function. Actions that do not change anything (squeeze
/// while already in the menu) return the context unchanged.
pub fn transition(ctx: AppContext, action: SceneAction) -> AppContext {
    match action {
        SceneAction::Start => AppContext {
            mode: SceneMode::Game,
            ..ctx
        },
        SceneAction::ToMenu => AppContext {
            mode: SceneMode::Intro,
            ..ctx
        },
        SceneAction::SetHandedness(handedness) => AppContext { handedness, ..ctx },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_enters_game_and_keeps_handedness() {
        let ctx = AppContext {
            mode: SceneMode::Intro,
            handedness: Handedness::Left,
        };
        let next = transition(ctx, SceneAction::Start);
        assert_eq!(next.mode, SceneMode::Game);
        assert_eq!(next.handedness, Handedness::Left);
    }

    #[test]
    fn to_menu_while_already_in_intro_is_a_no_op() {
        let ctx = AppContext::default();
        assert_eq!(transition(ctx, SceneAction::ToMenu), ctx);
    }

    #[test]
    fn handedness_changes_without_leaving_the_mode() {
        let ctx = AppContext::default();
        let next = transition(ctx, SceneAction::SetHandedness(Handedness::Left));
        assert_eq!(next.mode, SceneMode::Intro);
        assert_eq!(next.handedness, Handedness::Left);
    }
}
