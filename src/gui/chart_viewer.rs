//! Chart Viewer Widget
//! Central scrollable page: header, table, charts and footer.

use crate::analysis::{LocationShare, LocationTotal, YearPoint};
use crate::charts::{render_dashboard, ChartPlotter, DashboardView, Presenter};
use crate::data::Observation;
use egui::{Color32, RichText, ScrollArea};

pub const PAGE_TITLE: &str = "📊 Dashboard Financeiro";
pub const PAGE_INTRO: &str = "Bem-vindo ao Dashboard Financeiro! 📈\n\
Este painel interativo permite visualizar os dados econômicos e financeiros ao longo dos anos, \
filtrando por região e métricas de interesse. Use os filtros na barra lateral para explorar os dados.";
pub const PAGE_FOOTER: &str =
    "📌 Dados extraídos de Economic Data Bureau (EDB) | Desenvolvido por Lucas Alencar Miranda";

const SECTION_SPACING: f32 = 15.0;

/// [`Presenter`] that paints straight into an egui `Ui`.
pub struct EguiPresenter<'a> {
    ui: &'a mut egui::Ui,
}

impl<'a> EguiPresenter<'a> {
    pub fn new(ui: &'a mut egui::Ui) -> Self {
        Self { ui }
    }
}

impl Presenter for EguiPresenter<'_> {
    fn render_section(&mut self, heading: &str) {
        self.ui.add_space(SECTION_SPACING);
        self.ui.heading(heading);
        self.ui.add_space(5.0);
    }

    fn render_table(&mut self, title: &str, rows: &[Observation]) {
        ChartPlotter::draw_table(self.ui, title, rows);
    }

    fn render_bar_chart(&mut self, title: &str, totals: &[LocationTotal]) {
        ChartPlotter::draw_bar_chart(self.ui, title, totals);
    }

    fn render_pie_chart(&mut self, title: &str, shares: &[LocationShare]) {
        ChartPlotter::draw_pie_chart(self.ui, title, shares);
    }

    fn render_line_chart(&mut self, title: &str, points: &[YearPoint]) {
        ChartPlotter::draw_line_chart(self.ui, title, points);
    }

    fn render_notice(&mut self, text: &str) {
        self.ui.label(RichText::new(text).size(13.0));
    }
}

/// Holds the current view and any error from building it.
#[derive(Default)]
pub struct ChartViewer {
    view: Option<DashboardView>,
    status: Option<String>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view(&mut self, view: DashboardView) {
        self.view = Some(view);
        self.status = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.view = None;
        self.status = Some(message);
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(RichText::new(PAGE_TITLE).size(28.0).strong());
                ui.add_space(5.0);
                ui.label(PAGE_INTRO);
                ui.add_space(SECTION_SPACING);

                if let Some(status) = &self.status {
                    ui.label(
                        RichText::new(status)
                            .size(13.0)
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                }

                if let Some(view) = &self.view {
                    render_dashboard(view, &mut EguiPresenter::new(ui));
                }

                ui.add_space(SECTION_SPACING);
                ui.separator();
                ui.label(RichText::new(PAGE_FOOTER).size(11.0).color(Color32::GRAY));
            });
    }
}
