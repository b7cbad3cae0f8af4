//! Top-level frame-loop glue.
//!
//! The host runtime drives an [`App`] once per presentation tick:
//!
//! 1. `push_event` as de-bounced select/squeeze events arrive.
//! 2. `set_menu_hover` as its pointer ray enters/leaves intro buttons.
//! 3. `frame(dt, input)` once per tick: drain and dispatch queued events,
//!    run registered frame ticks (hand pose copy), advance menu cosmetics,
//!    then step the physics world.
//!
//! Event routing follows the scene mode. Game mode: select rebuilds the
//! tower under a fresh key, squeeze returns to the menu. Intro mode: select
//! activates the hovered menu button only; everything else is silently
//! ignored, which is the normal steady state rather than an error.

use rand::SeedableRng;
use rand::rngs::StdRng;

use physics::{PhysicsSettings, PhysicsWorld};

use crate::error::GameError;
use crate::frame::FrameScheduler;
use crate::hand::HandAsset;
use crate::input::{ControllerEvent, ControllerInput, EventQueue};
use crate::menu::{ButtonId, IntroMenu};
use crate::scene::{self, AppContext, SceneAction, SceneMode};
use crate::session::GameSession;

pub struct App {
    world: PhysicsWorld,
    scheduler: FrameScheduler,
    queue: EventQueue,
    ctx: AppContext,
    menu: IntroMenu,
    session: Option<GameSession>,
    hand_mesh: Option<HandAsset>,
    rng: StdRng,
}

impl App {
    /// Starts in intro mode with the right hand selected.
    pub fn new(settings: PhysicsSettings, hand_mesh: Option<HandAsset>) -> Self {
        Self::with_rng(settings, hand_mesh, StdRng::from_entropy())
    }

    /// Like [`App::new`] with a caller-supplied color RNG, for reproducible
    /// runs.
    pub fn with_rng(
        settings: PhysicsSettings,
        hand_mesh: Option<HandAsset>,
        rng: StdRng,
    ) -> Self {
        let ctx = AppContext::default();
        Self {
            world: PhysicsWorld::new(settings),
            scheduler: FrameScheduler::new(),
            queue: EventQueue::new(),
            menu: IntroMenu::new(ctx.handedness),
            ctx,
            session: None,
            hand_mesh,
            rng,
        }
    }

    #[inline]
    pub fn context(&self) -> AppContext {
        self.ctx
    }

    #[inline]
    pub fn mode(&self) -> SceneMode {
        self.ctx.mode
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn menu(&self) -> &IntroMenu {
        &self.menu
    }

    /// Queue a discrete controller event for the next frame's dispatch.
    pub fn push_event(&mut self, event: ControllerEvent) {
        self.queue.push(event);
    }

    /// Hover targeting from the host's pointer ray (intro mode only).
    pub fn set_menu_hover(&mut self, id: ButtonId, hovered: bool) {
        self.menu.set_hovered(id, hovered);
    }

    /// One frame tick. Pose updates run before the physics step so collision
    /// sees at most one frame of staleness.
    pub fn frame(&mut self, dt: f32, input: &dyn ControllerInput) -> Result<(), GameError> {
        for event in self.queue.drain() {
            self.dispatch(event)?;
        }

        self.scheduler.run(&mut self.world, input);
        if self.ctx.mode == SceneMode::Intro {
            self.menu.tick(dt);
        }
        self.world.step(dt);
        Ok(())
    }

    /// Route one event to the active mode's handler, exactly once.
    fn dispatch(&mut self, event: ControllerEvent) -> Result<(), GameError> {
        match (self.ctx.mode, event) {
            (SceneMode::Game, ControllerEvent::Select) => {
                if let Some(session) = self.session.as_mut() {
                    let key = session.reset_tower(&mut self.world, &mut self.rng)?;
                    log::info!("tower reset -> {key:?}");
                }
            }
            (SceneMode::Game, ControllerEvent::Squeeze) => {
                self.apply(SceneAction::ToMenu)?;
            }
            (SceneMode::Intro, ControllerEvent::Select) => {
                match self.menu.activate_hovered() {
                    Some(action) => self.apply(action)?,
                    None => log::debug!("select ignored: no hovered menu button"),
                }
            }
            (SceneMode::Intro, ControllerEvent::Squeeze) => {
                log::debug!("squeeze ignored in intro mode");
            }
        }
        Ok(())
    }

    /// Apply a scene action: pure context transition first, then the body
    /// registration/teardown side effects tied to the mode change.
    fn apply(&mut self, action: SceneAction) -> Result<(), GameError> {
        let next = scene::transition(self.ctx, action);

        if next.handedness != self.ctx.handedness {
            self.menu.set_handedness(next.handedness);
        }

        match (self.ctx.mode, next.mode) {
            (SceneMode::Intro, SceneMode::Game) => {
                self.session = Some(GameSession::begin(
                    &mut self.world,
                    &mut self.scheduler,
                    next.handedness,
                    self.hand_mesh.clone(),
                    &mut self.rng,
                )?);
            }
            (SceneMode::Game, SceneMode::Intro) => {
                if let Some(session) = self.session.take() {
                    session.end(&mut self.world, &mut self.scheduler);
                }
            }
            _ => {}
        }

        self.ctx = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Handedness;
    use crate::settings;
    use crate::tower::TowerLayout;
    use physics::{BodyPose, Vec3, settings::DEFAULT_FRAME_DT};

    struct FakeController {
        left: Option<BodyPose>,
        right: Option<BodyPose>,
    }

    impl FakeController {
        fn idle() -> Self {
            Self {
                left: None,
                right: None,
            }
        }

        fn right_at(translation: Vec3) -> Self {
            Self {
                left: None,
                right: Some(BodyPose::from_translation(translation)),
            }
        }
    }

    impl ControllerInput for FakeController {
        fn pose(&self, hand: Handedness) -> Option<BodyPose> {
            match hand {
                Handedness::Left => self.left,
                Handedness::Right => self.right,
            }
        }
    }

    fn app() -> App {
        use rand::SeedableRng;
        App::with_rng(
            PhysicsSettings::default(),
            None,
            rand::rngs::StdRng::seed_from_u64(3),
        )
    }

    fn start_game(app: &mut App, input: &FakeController) {
        app.set_menu_hover(ButtonId::Start, true);
        app.push_event(ControllerEvent::Select);
        app.frame(DEFAULT_FRAME_DT, input).unwrap();
    }

    #[test]
    fn scenario_start_builds_game_world_and_tracks_right_hand() {
        let mut app = app();
        let hand_pose = Vec3::new(0.1, 1.1, -0.4);
        let input = FakeController::right_at(hand_pose);

        assert_eq!(app.mode(), SceneMode::Intro);
        assert_eq!(app.context().handedness, Handedness::Right);

        start_game(&mut app, &input);

        assert_eq!(app.mode(), SceneMode::Game);
        let session = app.session().unwrap();
        assert_eq!(session.tower().len(), 30);
        assert_eq!(app.world().body_count(), 32);

        // The hand tracker ran before the step, so the kinematic body already
        // sits at the controller pose.
        let pose = app.world().body_pose(session.hand_body()).unwrap();
        assert!((pose.translation - hand_pose).norm() < 1.0e-3);
    }

    #[test]
    fn scenario_select_rebuilds_the_tower_under_a_new_key() {
        let mut app = app();
        let input = FakeController::idle();
        start_game(&mut app, &input);

        let old_key = app.session().unwrap().tower().key();
        let old_colors: Vec<&str> = app
            .session()
            .unwrap()
            .tower()
            .sticks()
            .iter()
            .map(|s| s.color)
            .collect();

        app.push_event(ControllerEvent::Select);
        app.frame(DEFAULT_FRAME_DT, &input).unwrap();

        let session = app.session().unwrap();
        assert_ne!(session.tower().key(), old_key);
        assert_eq!(session.tower().len(), 30);
        assert_eq!(app.world().body_count(), 32);

        // Fresh bodies land on the canonical layout (one step of drift only)
        // with no velocity carried over from the previous generation.
        let layout = TowerLayout::default();
        for (index, stick) in session.tower().sticks().iter().enumerate() {
            let row = index / settings::STICKS_PER_ROW;
            let lateral = index as i32 % settings::STICKS_PER_ROW as i32 - 1;
            let expected = layout.stick_pose(row, lateral).translation;
            let actual = app.world().body_pose(stick.body).unwrap().translation;
            assert!((actual - expected).norm() < 0.05);
        }

        // Colors are re-sampled per generation. 30 independent draws from a
        // 5-entry palette collide as a whole sequence with negligible odds.
        let new_colors: Vec<&str> = session.tower().sticks().iter().map(|s| s.color).collect();
        assert_ne!(new_colors, old_colors);
    }

    #[test]
    fn scenario_squeeze_returns_to_intro_and_releases_bodies() {
        let mut app = app();
        let input = FakeController::idle();
        start_game(&mut app, &input);
        assert_eq!(app.world().body_count(), 32);

        app.push_event(ControllerEvent::Squeeze);
        app.frame(DEFAULT_FRAME_DT, &input).unwrap();

        assert_eq!(app.mode(), SceneMode::Intro);
        assert!(app.session().is_none());
        assert_eq!(app.world().body_count(), 0);
    }

    #[test]
    fn squeeze_in_intro_is_silently_ignored() {
        let mut app = app();
        let input = FakeController::idle();

        app.push_event(ControllerEvent::Squeeze);
        app.frame(DEFAULT_FRAME_DT, &input).unwrap();
        assert_eq!(app.mode(), SceneMode::Intro);
        assert_eq!(app.world().body_count(), 0);
    }

    #[test]
    fn select_in_intro_without_hover_does_nothing() {
        let mut app = app();
        let input = FakeController::idle();

        app.push_event(ControllerEvent::Select);
        app.frame(DEFAULT_FRAME_DT, &input).unwrap();
        assert_eq!(app.mode(), SceneMode::Intro);
        assert!(app.session().is_none());
    }

    #[test]
    fn handedness_chosen_in_intro_binds_the_hand_tracker() {
        let mut app = app();
        let left_pose = Vec3::new(-0.2, 1.0, -0.5);
        let input = FakeController {
            left: Some(BodyPose::from_translation(left_pose)),
            right: None,
        };

        app.set_menu_hover(ButtonId::HandLeft, true);
        app.push_event(ControllerEvent::Select);
        app.frame(DEFAULT_FRAME_DT, &input).unwrap();
        assert_eq!(app.context().handedness, Handedness::Left);
        assert_eq!(app.mode(), SceneMode::Intro);

        start_game(&mut app, &input);
        let session = app.session().unwrap();
        let pose = app.world().body_pose(session.hand_body()).unwrap();
        assert!((pose.translation - left_pose).norm() < 1.0e-3);
    }

    #[test]
    fn handedness_persists_across_a_round_trip_to_the_menu() {
        let mut app = app();
        let input = FakeController::idle();

        app.set_menu_hover(ButtonId::HandLeft, true);
        app.push_event(ControllerEvent::Select);
        app.frame(DEFAULT_FRAME_DT, &input).unwrap();

        start_game(&mut app, &input);
        app.push_event(ControllerEvent::Squeeze);
        app.frame(DEFAULT_FRAME_DT, &input).unwrap();

        assert_eq!(app.mode(), SceneMode::Intro);
        assert_eq!(app.context().handedness, Handedness::Left);
    }

    #[test]
    fn queued_events_dispatch_in_order_within_one_frame() {
        let mut app = app();
        let input = FakeController::idle();
        start_game(&mut app, &input);

        // Select then squeeze in the same frame: the reset happens, then the
        // mode switch tears the new generation down again.
        app.push_event(ControllerEvent::Select);
        app.push_event(ControllerEvent::Squeeze);
        app.frame(DEFAULT_FRAME_DT, &input).unwrap();

        assert_eq!(app.mode(), SceneMode::Intro);
        assert!(app.session().is_none());
        assert_eq!(app.world().body_count(), 0);
    }
}
