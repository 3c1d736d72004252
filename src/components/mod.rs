//! UI Components
//!
//! Reusable Leptos components for the dashboard. No transformation logic
//! lives here; every component renders a view model produced in `model`.

pub mod events_table;
pub mod line_chart;
pub mod loading;
pub mod nav;
pub mod pie_chart;
pub mod summary_card;
pub mod toast;

pub use events_table::EventsTable;
pub use line_chart::LineChart;
pub use loading::Loading;
pub use nav::Nav;
pub use pie_chart::PieChart;
pub use summary_card::SummaryCard;
pub use toast::Toast;
