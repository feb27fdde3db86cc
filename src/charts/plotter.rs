//! Chart Plotter Module
//! Draws the table, bar, pie and line views with egui and egui_plot.

use crate::analysis::{LocationShare, LocationTotal, YearPoint};
use crate::data::Observation;
use egui::{Color32, RichText, ScrollArea};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use std::f64::consts::TAU;

/// Color for bars and the evolution line
pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

const CHART_HEIGHT: f32 = 320.0;
const PIE_HEIGHT: f32 = 380.0;
const TABLE_HEIGHT: f32 = 260.0;
/// Segments per full turn when approximating pie arcs.
const ARC_RESOLUTION: f64 = 180.0;

pub struct ChartPlotter;

impl ChartPlotter {
    pub fn slice_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Outline of a pie slice from `start` to `end` (radians), centred on the origin.
    pub fn slice_outline(start: f64, end: f64, radius: f64) -> Vec<[f64; 2]> {
        let steps = (((end - start) / TAU) * ARC_RESOLUTION).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push([0.0, 0.0]);
        for step in 0..=steps {
            let angle = start + (end - start) * step as f64 / steps as f64;
            points.push([radius * angle.cos(), radius * angle.sin()]);
        }
        points
    }

    /// Filtered rows as a striped grid.
    pub fn draw_table(ui: &mut egui::Ui, title: &str, rows: &[Observation]) {
        ui.label(RichText::new(title).size(16.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::both()
                    .id_salt("filtered_table")
                    .max_height(TABLE_HEIGHT)
                    .show(ui, |ui| {
                        egui::Grid::new("filtered_table_grid")
                            .striped(true)
                            .min_col_width(70.0)
                            .spacing([12.0, 4.0])
                            .show(ui, |ui| {
                                for header in [
                                    "Código Local",
                                    "Localidade",
                                    "Região",
                                    "Descrição",
                                    "Ano",
                                    "Valor",
                                ] {
                                    ui.label(RichText::new(header).strong().size(12.0));
                                }
                                ui.end_row();

                                for row in rows {
                                    ui.label(RichText::new(&row.location_code).size(12.0));
                                    ui.label(RichText::new(&row.location_name).size(12.0));
                                    ui.label(RichText::new(&row.region).size(12.0));
                                    ui.label(RichText::new(&row.description).size(12.0));
                                    ui.label(RichText::new(row.year.to_string()).size(12.0));
                                    ui.label(RichText::new(format!("{:.2}", row.value)).size(12.0));
                                    ui.end_row();
                                }
                            });
                    });
            });
    }

    /// One bar per location, names on the x axis.
    pub fn draw_bar_chart(ui: &mut egui::Ui, title: &str, totals: &[LocationTotal]) {
        ui.label(RichText::new(title).size(14.0).strong());

        let x_labels: Vec<String> = totals.iter().map(|t| t.location.clone()).collect();
        let bars: Vec<Bar> = totals
            .iter()
            .enumerate()
            .map(|(i, t)| {
                Bar::new(i as f64, t.total)
                    .width(0.6)
                    .name(&t.location)
                    .fill(PRIMARY_COLOR.gamma_multiply(0.8))
            })
            .collect();

        Plot::new("location_bars")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Localidade")
            .y_axis_label("Valor")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx - mark.value).abs() < 1e-6 {
                    x_labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(PRIMARY_COLOR));
            });
    }

    /// Pie drawn as filled polygons, each slice labelled with its share.
    pub fn draw_pie_chart(ui: &mut egui::Ui, title: &str, shares: &[LocationShare]) {
        ui.label(RichText::new(title).size(14.0).strong());

        Plot::new("location_pie")
            .height(PIE_HEIGHT)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                let mut start = 0.0;
                for (i, share) in shares.iter().enumerate() {
                    let end = start + share.percent / 100.0 * TAU;
                    let color = Self::slice_color(i);

                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(Self::slice_outline(start, end, 1.0)))
                            .fill_color(color.gamma_multiply(0.85))
                            .stroke(egui::Stroke::new(1.0, Color32::WHITE))
                            .name(&share.location),
                    );

                    let mid = (start + end) / 2.0;
                    plot_ui.text(Text::new(
                        PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                        RichText::new(format!("{:.1}%", share.percent))
                            .color(Color32::BLACK)
                            .size(12.0),
                    ));

                    start = end;
                }
            });
    }

    /// Summed value per year with point markers.
    pub fn draw_line_chart(ui: &mut egui::Ui, title: &str, points: &[YearPoint]) {
        ui.label(RichText::new(title).size(14.0).strong());

        let series: Vec<[f64; 2]> = points
            .iter()
            .map(|p| [f64::from(p.year), p.total])
            .collect();

        Plot::new("year_evolution")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Ano")
            .y_axis_label("Valor")
            .x_axis_formatter(|mark, _range| {
                if mark.value.fract() == 0.0 {
                    format!("{:.0}", mark.value)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(series.iter().copied()))
                        .color(PRIMARY_COLOR)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(series.iter().copied()))
                        .radius(4.0)
                        .color(PRIMARY_COLOR),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_outline_starts_at_centre_and_spans_the_arc() {
        let outline = ChartPlotter::slice_outline(0.0, TAU / 4.0, 1.0);
        assert_eq!(outline[0], [0.0, 0.0]);

        let first = outline[1];
        let last = outline[outline.len() - 1];
        assert!((first[0] - 1.0).abs() < 1e-9 && first[1].abs() < 1e-9);
        assert!(last[0].abs() < 1e-9 && (last[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_slices_still_have_an_edge() {
        let outline = ChartPlotter::slice_outline(0.0, 1e-6, 1.0);
        assert_eq!(outline.len(), 3);
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(ChartPlotter::slice_color(0), ChartPlotter::slice_color(PALETTE.len()));
    }
}
