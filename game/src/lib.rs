/*!
YUBI game core: the interactive logic of a VR stick-tower game.

The host runtime (rendering, XR session, asset loading) drives this crate
through [`App`]: it pushes de-bounced controller events, reports menu hover
from its pointer ray, and calls [`App::frame`] once per presentation tick
with the live controller snapshot. The crate owns everything with state:

- tower:   procedural stick-tower layout and arena-style build/teardown
- hand:    kinematic hand body synced to the tracked controller pose
- scene:   the Intro/Game state machine over an explicit app context
- menu:    hover/select button widgets used by the intro scene
- frame:   explicit per-tick callback scheduling ahead of the physics step
- session: ownership of the game-mode bodies (ground, tower, hand)

Rendering pulls body poses and cosmetic attributes back out through the
`physics` crate and the accessors here; no data flows the other way.
*/

pub mod app;
pub mod error;
pub mod frame;
pub mod hand;
pub mod input;
pub mod menu;
pub mod scene;
pub mod session;
pub mod settings;
pub mod tower;

pub use app::App;
pub use error::GameError;
pub use frame::{FrameScheduler, FrameTick, TickId};
pub use input::{ControllerEvent, ControllerInput, Handedness};
pub use scene::{AppContext, SceneAction, SceneMode};
pub use tower::{Tower, TowerKey, TowerLayout};
