pub mod layout;
pub mod panel;

pub use panel::DashboardPage;
