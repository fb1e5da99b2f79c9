//! UI Components
//!
//! Leptos components for the auth page and the two dashboards.

mod admin_dashboard;
mod auth_page;
mod delete_confirm_button;
mod edit_task_modal;
mod new_task_form;
mod status_banners;
mod user_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use auth_page::AuthPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_task_modal::EditTaskModal;
pub use new_task_form::NewTaskForm;
pub use status_banners::StatusBanners;
pub use user_dashboard::UserDashboard;
