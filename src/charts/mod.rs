//! Charts module - derived views, the presenter seam and egui plotting

mod plotter;
mod presenter;
mod view;

pub use plotter::ChartPlotter;
pub use presenter::{render_dashboard, Presenter};
pub use view::DashboardView;
