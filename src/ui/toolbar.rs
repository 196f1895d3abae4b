use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::UpdateSpiralPolicyRequest;
use crate::guide::{CompositionMode, OverlayController, SetGuideModeRequest, SpiralFit};
use crate::theme;

/// Main toolbar with one button per composition guide
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    controller: Res<OverlayController>,
    mut requests: MessageWriter<SetGuideModeRequest>,
) -> Result {
    let active = controller.mode();

    egui::TopBottomPanel::top("guide_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                for mode in CompositionMode::all() {
                    let button = egui::Button::new(
                        egui::RichText::new(mode.display_name()).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(active == *mode);

                    let response = ui.add(button);
                    if response.clicked() {
                        requests.write(SetGuideModeRequest { mode: *mode });
                    }
                    response.on_hover_text(format!(
                        "{} ({})",
                        mode.display_name(),
                        mode.shortcut_label()
                    ));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("1-4: switch guide")
                            .color(theme::ui::HINT_TEXT)
                            .size(11.0),
                    );
                });
            });
        });
    Ok(())
}

/// Secondary bar with golden spiral settings, shown only for that guide
pub fn spiral_settings_ui(
    mut contexts: EguiContexts,
    controller: Res<OverlayController>,
    mut updates: MessageWriter<UpdateSpiralPolicyRequest>,
) -> Result {
    if controller.mode() != CompositionMode::GoldenRatio {
        return Ok(());
    }

    let current = *controller.spiral_policy();
    let mut policy = current;

    egui::TopBottomPanel::top("spiral_settings")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 6))
                .fill(theme::ui::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                ui.label(egui::RichText::new("Spiral:").color(theme::ui::LABEL_TEXT));

                egui::ComboBox::from_id_salt("spiral_fit_select")
                    .selected_text(policy.fit.display_name())
                    .width(160.0)
                    .show_ui(ui, |ui| {
                        for fit in SpiralFit::all() {
                            ui.selectable_value(&mut policy.fit, *fit, fit.display_name());
                        }
                    });

                ui.add_space(12.0);
                ui.checkbox(&mut policy.show_squares, "Squares");
                ui.checkbox(&mut policy.show_labels, "Numbers");
            });
        });

    if policy != current {
        updates.write(UpdateSpiralPolicyRequest { policy });
    }
    Ok(())
}
