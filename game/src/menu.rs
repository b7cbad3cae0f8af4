//! Intro-menu widgets: hover/select buttons and the handedness marker.
//!
//! A button tracks a hover boolean fed by the host's pointer-ray targeting
//! and exposes a smoothly interpolated hover tween for rendering. Activation
//! is pulled by the event dispatcher, once per discrete select, and never
//! fires while the button is not hovered. The tween is cosmetic; only the
//! hover boolean and the single-fire activation are load-bearing.

use crate::input::Handedness;
use crate::scene::SceneAction;
use crate::settings::{
    self, BUTTON_HOVER_COLOR, BUTTON_HOVER_SCALE, BUTTON_REST_COLOR, BUTTON_REST_SCALE, TWEEN_RATE,
};

/// Scalar exponential approach toward a target value.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    current: f32,
    target: f32,
}

impl Tween {
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn tick(&mut self, dt: f32) {
        let blend = 1.0 - (-TWEEN_RATE * dt).exp();
        self.current += (self.target - self.current) * blend;
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }
}

/// A static text item drawn by the rendering collaborator in the intro
/// scene. Pure render data; nothing in the core reads it back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextEntry {
    pub text: &'static str,
    pub position: [f32; 3],
    pub font_size: f32,
    pub color: &'static str,
}

/// Which intro-menu button a hover/activation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonId {
    HandRight,
    HandLeft,
    Start,
}

pub struct Button {
    id: ButtonId,
    label: &'static str,
    position: [f32; 3],
    size: [f32; 3],
    action: SceneAction,
    hovered: bool,
    scale: Tween,
}

impl Button {
    fn new(
        id: ButtonId,
        label: &'static str,
        position: [f32; 3],
        size: [f32; 3],
        action: SceneAction,
    ) -> Self {
        Self {
            id,
            label,
            position,
            size,
            action,
            hovered: false,
            scale: Tween::new(BUTTON_REST_SCALE),
        }
    }

    /// Hover state from the host's pointer ray. Retargets the cosmetic tween
    /// on change.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.scale.set_target(if hovered {
            BUTTON_HOVER_SCALE
        } else {
            BUTTON_REST_SCALE
        });
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// The button's action if it is currently hovered, `None` otherwise.
    /// Called at most once per discrete select by the dispatcher.
    pub fn activate(&self) -> Option<SceneAction> {
        self.hovered.then_some(self.action)
    }

    #[inline]
    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    pub fn size(&self) -> [f32; 3] {
        self.size
    }

    /// Current tweened scale for rendering.
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Face color for rendering.
    pub fn color(&self) -> &'static str {
        if self.hovered {
            BUTTON_HOVER_COLOR
        } else {
            BUTTON_REST_COLOR
        }
    }

    fn tick(&mut self, dt: f32) {
        self.scale.tick(dt);
    }
}

/// The intro scene's menu: hand selection, start, and the marker sphere that
/// highlights the persisted handedness.
pub struct IntroMenu {
    buttons: [Button; 3],
    marker_y: Tween,
}

impl IntroMenu {
    pub fn new(handedness: Handedness) -> Self {
        Self {
            buttons: [
                Button::new(
                    ButtonId::HandRight,
                    "Right",
                    settings::BUTTON_HAND_RIGHT_POS,
                    settings::BUTTON_HAND_SIZE,
                    SceneAction::SetHandedness(Handedness::Right),
                ),
                Button::new(
                    ButtonId::HandLeft,
                    "Left",
                    settings::BUTTON_HAND_LEFT_POS,
                    settings::BUTTON_HAND_SIZE,
                    SceneAction::SetHandedness(Handedness::Left),
                ),
                Button::new(
                    ButtonId::Start,
                    "Start",
                    settings::BUTTON_START_POS,
                    settings::BUTTON_START_SIZE,
                    SceneAction::Start,
                ),
            ],
            marker_y: Tween::new(marker_target(handedness)),
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Hover targeting from the host ray caster. The ray points at one
    /// region at a time, so hovering a button unhovers the others.
    pub fn set_hovered(&mut self, id: ButtonId, hovered: bool) {
        for button in &mut self.buttons {
            if hovered {
                button.set_hovered(button.id == id);
            } else if button.id == id {
                button.set_hovered(false);
            }
        }
    }

    /// Route a discrete select to the hovered button, if any.
    pub fn activate_hovered(&self) -> Option<SceneAction> {
        self.buttons
            .iter()
            .find(|b| b.hovered())
            .and_then(Button::activate)
    }

    /// Re-target the handedness marker next to the matching hand button.
    pub fn set_handedness(&mut self, handedness: Handedness) {
        self.marker_y.set_target(marker_target(handedness));
    }

    /// Current marker sphere position for rendering.
    pub fn marker_position(&self) -> [f32; 3] {
        let [x, _, z] = settings::MARKER_RIGHT_POS;
        [x, self.marker_y.value(), z]
    }

    /// The intro scene's text entries: title, help line, and the label next
    /// to the hand-selection buttons.
    pub fn texts(&self) -> [TextEntry; 3] {
        [
            TextEntry {
                text: settings::TITLE_TEXT,
                position: settings::TITLE_POS,
                font_size: settings::TITLE_FONT_SIZE,
                color: settings::TEXT_COLOR,
            },
            TextEntry {
                text: settings::HELP_TEXT,
                position: settings::HELP_POS,
                font_size: settings::HELP_FONT_SIZE,
                color: settings::TEXT_COLOR,
            },
            TextEntry {
                text: settings::HAND_LABEL_TEXT,
                position: settings::HAND_LABEL_POS,
                font_size: settings::HAND_LABEL_FONT_SIZE,
                color: settings::TEXT_COLOR,
            },
        ]
    }

    /// Advance the cosmetic tweens. Called once per frame while in intro.
    pub fn tick(&mut self, dt: f32) {
        for button in &mut self.buttons {
            button.tick(dt);
        }
        self.marker_y.tick(dt);
    }
}

fn marker_target(handedness: Handedness) -> f32 {
    match handedness {
        Handedness::Right => settings::MARKER_RIGHT_POS[1],
        Handedness::Left => settings::MARKER_LEFT_POS[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_requires_hover() {
        let mut menu = IntroMenu::new(Handedness::Right);
        assert_eq!(menu.activate_hovered(), None);

        menu.set_hovered(ButtonId::Start, true);
        assert_eq!(menu.activate_hovered(), Some(SceneAction::Start));

        menu.set_hovered(ButtonId::Start, false);
        assert_eq!(menu.activate_hovered(), None);
    }

    #[test]
    fn hovering_one_button_unhovers_the_rest() {
        let mut menu = IntroMenu::new(Handedness::Right);
        menu.set_hovered(ButtonId::HandLeft, true);
        menu.set_hovered(ButtonId::Start, true);

        let hovered: Vec<ButtonId> = menu
            .buttons()
            .iter()
            .filter(|b| b.hovered())
            .map(Button::id)
            .collect();
        assert_eq!(hovered, vec![ButtonId::Start]);
    }

    #[test]
    fn hand_buttons_map_to_their_handedness() {
        let mut menu = IntroMenu::new(Handedness::Right);
        menu.set_hovered(ButtonId::HandLeft, true);
        assert_eq!(
            menu.activate_hovered(),
            Some(SceneAction::SetHandedness(Handedness::Left))
        );
    }

    #[test]
    fn hover_tween_approaches_the_hover_scale() {
        let mut menu = IntroMenu::new(Handedness::Right);
        menu.set_hovered(ButtonId::Start, true);
        for _ in 0..120 {
            menu.tick(1.0 / 60.0);
        }
        let start = &menu.buttons()[2];
        assert!((start.scale() - BUTTON_HOVER_SCALE).abs() < 1.0e-3);
        assert_eq!(start.color(), BUTTON_HOVER_COLOR);
    }

    #[test]
    fn intro_texts_expose_title_help_and_hand_label() {
        let menu = IntroMenu::new(Handedness::Right);
        let texts = menu.texts();

        assert_eq!(texts[0].text, "YUBI");
        assert_eq!(texts[0].font_size, settings::TITLE_FONT_SIZE);
        assert_eq!(texts[1].text, "Trigger - restart, Squeeze - menu");
        assert_eq!(texts[2].text, "Hand");
        for entry in texts {
            assert_eq!(entry.color, settings::TEXT_COLOR);
            // Everything sits on the menu plane in front of the player.
            assert_eq!(entry.position[2], -1.0);
        }
    }

    #[test]
    fn marker_follows_the_selected_handedness() {
        let mut menu = IntroMenu::new(Handedness::Right);
        assert_eq!(menu.marker_position()[1], settings::MARKER_RIGHT_POS[1]);

        menu.set_handedness(Handedness::Left);
        for _ in 0..240 {
            menu.tick(1.0 / 60.0);
        }
        assert!((menu.marker_position()[1] - settings::MARKER_LEFT_POS[1]).abs() < 1.0e-3);
    }
}
