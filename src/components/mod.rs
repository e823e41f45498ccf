//! UI Components
//!
//! Leptos components for the console screens.

mod activity_log;
mod creation_form;
mod delete_confirm_button;
mod entity_panel;
mod entity_row;
mod scope_selector;
mod section_tab_bar;
mod toast_host;

pub use activity_log::ActivityLog;
pub use creation_form::CreationForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use entity_panel::EntityPanel;
pub use entity_row::EntityRow;
pub use scope_selector::ScopeSelector;
pub use section_tab_bar::SectionTabBar;
pub use toast_host::ToastHost;
