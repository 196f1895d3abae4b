mod controller;
pub mod layout;
mod mode;
pub mod primitives;
pub mod spiral;
mod surface;

pub use controller::OverlayController;
pub use mode::CompositionMode;
pub use primitives::SurfaceSize;
pub use spiral::{SpiralFit, SpiralPolicy};
pub use surface::{DrawSurface, EguiSurface};

use bevy::prelude::*;
use bevy::window::RequestRedraw;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::config::{AppConfig, ConfigLoaded};
use crate::theme;
use crate::ui::{no_dialog_open, PanelsDrawn};

/// Message to switch the active composition guide
#[derive(Message, Debug, Clone, Copy)]
pub struct SetGuideModeRequest {
    pub mode: CompositionMode,
}

/// Mode whose shortcut key was pressed this frame, if any.
pub fn shortcut_mode(keyboard: &ButtonInput<KeyCode>) -> Option<CompositionMode> {
    CompositionMode::all()
        .iter()
        .copied()
        .find(|mode| keyboard.just_pressed(mode.shortcut()))
}

fn handle_mode_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut requests: MessageWriter<SetGuideModeRequest>,
) {
    // Don't switch guides while typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if let Some(mode) = shortcut_mode(&keyboard) {
        requests.write(SetGuideModeRequest { mode });
    }
}

fn apply_mode_requests(
    mut requests: MessageReader<SetGuideModeRequest>,
    controller: Res<OverlayController>,
    mut redraw: MessageWriter<RequestRedraw>,
) {
    for request in requests.read() {
        controller.set_mode(request.mode, &mut redraw);
        info!("Composition guide set to {}", request.mode.display_name());
    }
}

/// Keeps the controller's spiral policy in step with the saved config
fn sync_spiral_policy(
    config: Res<AppConfig>,
    mut controller: ResMut<OverlayController>,
    mut redraw: MessageWriter<RequestRedraw>,
) {
    controller.set_spiral_policy(config.data.spiral, &mut redraw);
}

/// Renders the active guide over the area left free by the UI panels
fn draw_guides(mut contexts: EguiContexts, controller: Res<OverlayController>) -> Result {
    let ctx = contexts.ctx_mut()?;
    let area = ctx.available_rect();
    let size = SurfaceSize::new(area.width(), area.height());

    let painter = ctx
        .layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("composition_guides"),
        ))
        .with_clip_rect(area);

    EguiSurface::new(painter, area.min).submit(&controller.render(size));
    Ok(())
}

fn spawn_preview_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub struct GuidePlugin;

impl Plugin for GuidePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverlayController>()
            .insert_resource(ClearColor(theme::PREVIEW_BACKGROUND))
            .add_message::<SetGuideModeRequest>()
            .add_systems(Startup, spawn_preview_camera)
            .add_systems(Startup, sync_spiral_policy.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    handle_mode_shortcuts.run_if(no_dialog_open),
                    apply_mode_requests.run_if(on_message::<SetGuideModeRequest>),
                    sync_spiral_policy.run_if(resource_changed::<AppConfig>),
                )
                    .chain(),
            )
            .add_systems(EguiPrimaryContextPass, draw_guides.after(PanelsDrawn));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_mode_none_pressed() {
        let keyboard = ButtonInput::<KeyCode>::default();
        assert_eq!(shortcut_mode(&keyboard), None);
    }

    #[test]
    fn test_shortcut_mode_each_digit() {
        for mode in CompositionMode::all() {
            let mut keyboard = ButtonInput::<KeyCode>::default();
            keyboard.press(mode.shortcut());
            assert_eq!(shortcut_mode(&keyboard), Some(*mode));
        }
    }

    #[test]
    fn test_shortcut_mode_ignores_held_keys() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::Digit4);
        keyboard.clear();
        assert!(keyboard.pressed(KeyCode::Digit4));
        assert_eq!(shortcut_mode(&keyboard), None);
    }

    #[test]
    fn test_shortcut_mode_ignores_other_keys() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::Digit5);
        assert_eq!(shortcut_mode(&keyboard), None);
    }
}
