//! Firewall Console Core
//!
//! Everything the console needs that does not touch the DOM:
//! - model: entity kinds, scopes and endpoint tables
//! - wire: request bodies and response interpretation
//! - client: REST client over reqwest
//! - list / editor / fetch / form: the pieces of one editable list
//! - panel: the reducer that ties them together for a screen

mod client;
mod config;
mod editor;
mod error;
mod fetch;
mod form;
mod list;
mod model;
mod notice;
mod panel;
pub mod wire;

pub use client::ApiClient;
pub use config::ConsoleConfig;
pub use editor::RowEditor;
pub use error::{ApiError, ApiResult, ValidationError};
pub use fetch::{FetchGuard, RequestToken};
pub use form::validate_name;
pub use list::EntityList;
pub use model::{Endpoints, EntityKind, NamedEntity, Scope};
pub use notice::{Notice, NoticeLevel};
pub use panel::{
    ChildLoad, CreateRequest, DeleteRequest, FetchOutcome, FetchRequest, PanelState, RenameRequest,
    RowMode, RowView, ScopeLoad,
};
