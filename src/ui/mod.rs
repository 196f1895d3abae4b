mod dialogs;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigResetNotification;

/// System set for the panels that shrink the preview area.
/// The guide overlay is drawn after it so it covers only the remaining space.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanelsDrawn;

/// Resource that tracks whether any modal dialog is currently open.
/// Keyboard shortcuts check this to avoid switching guides behind a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block shortcuts
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = config_reset.show;
}

/// Run condition: returns true when no modal dialog is open.
///
/// Usage: `.run_if(no_dialog_open)`
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .add_systems(
                EguiPrimaryContextPass,
                (toolbar::toolbar_ui, toolbar::spiral_settings_ui)
                    .chain()
                    .in_set(PanelsDrawn),
            )
            .add_systems(
                EguiPrimaryContextPass,
                dialogs::config_reset_notification_ui.after(PanelsDrawn),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
