//! Control Panel Widget
//! Sidebar with the year, region and metric pickers.

use crate::analysis::{Selection, SelectionOptions};
use egui::{ComboBox, RichText};

const LABEL_WIDTH: f32 = 130.0;
const COMBO_WIDTH: f32 = 170.0;

/// Sidebar holding the selectable domains and the current Selection.
pub struct ControlPanel {
    pub options: SelectionOptions,
    pub selection: Selection,
}

impl ControlPanel {
    pub fn new(options: SelectionOptions) -> Self {
        let selection = options.default_selection();
        Self { options, selection }
    }

    /// Draw the pickers. A changed pick replaces the Selection with a new value.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut next: Option<Selection> = None;

        ui.add_space(5.0);
        ui.label(RichText::new("Filtros de Análise").size(18.0).strong());
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Selecione o Ano:"));
            ComboBox::from_id_salt("year")
                .width(COMBO_WIDTH)
                .selected_text(self.selection.year_label())
                .show_ui(ui, |ui| {
                    for &year in &self.options.years {
                        if ui
                            .selectable_label(self.selection.year() == Some(year), year.to_string())
                            .clicked()
                        {
                            next = Some(self.selection.clone().with_year(Some(year)));
                        }
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Selecione a Região:"));
            ComboBox::from_id_salt("region")
                .width(COMBO_WIDTH)
                .selected_text(self.selection.region_label())
                .show_ui(ui, |ui| {
                    for region in &self.options.regions {
                        if ui
                            .selectable_label(self.selection.region() == Some(region.as_str()), region)
                            .clicked()
                        {
                            next = Some(self.selection.clone().with_region(Some(region.clone())));
                        }
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Selecione a Métrica:"));
            ComboBox::from_id_salt("description")
                .width(COMBO_WIDTH)
                .selected_text(self.selection.description_label())
                .show_ui(ui, |ui| {
                    for description in &self.options.descriptions {
                        if ui
                            .selectable_label(
                                self.selection.description() == Some(description.as_str()),
                                description,
                            )
                            .clicked()
                        {
                            next = Some(
                                self.selection
                                    .clone()
                                    .with_description(Some(description.clone())),
                            );
                        }
                    }
                });
        });

        match next {
            Some(selection) if selection != self.selection => {
                self.selection = selection.clone();
                ControlPanelAction::SelectionChanged(selection)
            }
            _ => ControlPanelAction::None,
        }
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged(Selection),
}
