//! Rendering capability and the page script that drives it.
//!
//! The transformation core only talks to [`Presenter`], so it can be exercised without a UI.

use super::view::DashboardView;
use crate::analysis::{Distribution, LocationShare, LocationTotal, YearPoint};
use crate::data::Observation;

pub const SECTION_CHARTS: &str = "📈 Análise Gráfica";
pub const SECTION_DISTRIBUTION: &str = "📊 Distribuição Percentual";
pub const SECTION_EVOLUTION: &str = "📈 Evolução ao Longo dos Anos";
pub const INSUFFICIENT_DATA: &str = "Não há dados suficientes para gerar o gráfico de pizza.";

/// Sink for the four views plus headings and plain notices.
pub trait Presenter {
    fn render_section(&mut self, heading: &str);
    fn render_table(&mut self, title: &str, rows: &[Observation]);
    fn render_bar_chart(&mut self, title: &str, totals: &[LocationTotal]);
    fn render_pie_chart(&mut self, title: &str, shares: &[LocationShare]);
    fn render_line_chart(&mut self, title: &str, points: &[YearPoint]);
    fn render_notice(&mut self, text: &str);
}

/// Emit the dashboard body for `view`: table, bar, pie (or notice), line.
pub fn render_dashboard<P: Presenter + ?Sized>(view: &DashboardView, presenter: &mut P) {
    let selection = &view.selection;
    let year = selection.year_label();
    let region = selection.region_label();
    let description = selection.description_label();

    presenter.render_table(
        &format!("Dados Filtrados - Ano: {year}, Região: {region}"),
        &view.rows,
    );

    presenter.render_section(SECTION_CHARTS);
    presenter.render_bar_chart(
        &format!("{description} por Localidade ({year})"),
        &view.location_totals,
    );

    presenter.render_section(SECTION_DISTRIBUTION);
    match &view.distribution {
        Distribution::Shares(shares) => presenter.render_pie_chart(
            &format!("Distribuição de {description} por Localidade ({year})"),
            shares,
        ),
        Distribution::InsufficientData => presenter.render_notice(INSUFFICIENT_DATA),
    }

    presenter.render_section(SECTION_EVOLUTION);
    presenter.render_line_chart(
        &format!("Evolução de {description} ({region})"),
        &view.evolution,
    );
}
