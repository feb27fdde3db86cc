//! Dashboard Main Application
//! Sidebar with the pickers, central panel with the page.

use crate::analysis::SelectionOptions;
use crate::charts::DashboardView;
use crate::data::Dataset;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use tracing::{debug, error, warn};

/// Main application window.
pub struct DashboardApp {
    dataset: Dataset,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dataset: Dataset) -> Self {
        if dataset.is_empty() {
            warn!("dataset has no records; every view will be empty");
        }
        let options = match SelectionOptions::from_frame(dataset.frame()) {
            Ok(options) => options,
            Err(e) => {
                error!(error = %e, "could not derive selection options");
                SelectionOptions::default()
            }
        };

        let mut app = Self {
            dataset,
            control_panel: ControlPanel::new(options),
            chart_viewer: ChartViewer::new(),
        };
        app.refresh_view();
        app
    }

    /// Recompute the view for the current selection.
    fn refresh_view(&mut self) {
        let selection = &self.control_panel.selection;
        match DashboardView::build(&self.dataset, selection) {
            Ok(view) => self.chart_viewer.set_view(view),
            Err(e) => {
                error!(error = %e, ?selection, "failed to build view");
                self.chart_viewer.set_error(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - filters
        SidePanel::left("control_panel")
            .min_width(320.0)
            .max_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let ControlPanelAction::SelectionChanged(selection) =
                        self.control_panel.show(ui)
                    {
                        debug!(?selection, "selection changed");
                        self.refresh_view();
                    }
                });
            });

        // Central panel - page
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
