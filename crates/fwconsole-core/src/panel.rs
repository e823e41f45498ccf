//! Entity Panel State
//!
//! Reducer behind one editable-list screen: the scope selector, the child
//! list, the row editor and the creation form. Every user action either
//! changes state locally or returns a request for the caller to send; every
//! response comes back through a `*_resolved` method carrying the request it
//! answers.
//!
//! A single `busy` flag covers create, rename and delete, so a list never has
//! two mutations in flight.

use log::{debug, info, warn};

use crate::editor::RowEditor;
use crate::error::{ApiError, ApiResult, ValidationError};
use crate::fetch::{FetchGuard, RequestToken};
use crate::form::validate_name;
use crate::list::EntityList;
use crate::model::{EntityKind, NamedEntity, Scope};
use crate::notice::Notice;
use crate::wire::Ack;

/// Parent scopes for the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeLoad {
    Loading,
    Ready(Vec<NamedEntity>),
    /// Page-level failure; nothing else is rendered
    Failed(String),
}

/// State of the child list for the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildLoad {
    /// No scope selected
    Unselected,
    Loading,
    Loaded,
    Failed(String),
}

// ========================
// Requests
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: EntityKind,
    pub scope: Scope,
    pub token: RequestToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub kind: EntityKind,
    pub scope: Scope,
    pub name: String,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    pub kind: EntityKind,
    pub scope: Scope,
    pub index: usize,
    pub old_name: String,
    pub new_name: String,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub kind: EntityKind,
    pub scope: Scope,
    pub index: usize,
    pub name: String,
    generation: u64,
}

/// What happened to a list response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// Answer to a superseded selection; dropped
    Stale,
}

// ========================
// Row Views
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowMode {
    Display,
    Editing,
    Saving,
}

/// One row as the view renders it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowView {
    pub index: usize,
    pub name: String,
    pub mode: RowMode,
}

// ========================
// Panel
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    kind: EntityKind,
    scopes: ScopeLoad,
    selected: Option<Scope>,
    guard: FetchGuard,
    children: ChildLoad,
    list: EntityList,
    editor: RowEditor,
    busy: bool,
    draft: String,
}

impl PanelState {
    pub fn new(kind: EntityKind) -> Self {
        let scopes = if kind.is_scoped() {
            ScopeLoad::Loading
        } else {
            ScopeLoad::Ready(Vec::new())
        };
        Self {
            kind,
            scopes,
            selected: None,
            guard: FetchGuard::new(),
            children: ChildLoad::Unselected,
            list: EntityList::new(),
            editor: RowEditor::Idle,
            busy: false,
            draft: String::new(),
        }
    }

    /// First request of an unscoped panel; scoped panels wait for a selection
    pub fn mount(&mut self) -> Option<FetchRequest> {
        if self.kind.is_scoped() {
            None
        } else {
            self.select(Some(Scope::Global))
        }
    }

    pub fn scopes_loaded(&mut self, result: ApiResult<Vec<NamedEntity>>) {
        self.scopes = match result {
            Ok(scopes) => {
                info!("loaded {} localities", scopes.len());
                ScopeLoad::Ready(scopes)
            }
            Err(e) => {
                warn!("could not load localities: {}", e);
                ScopeLoad::Failed(format!("could not load localities: {}", e))
            }
        };
    }

    /// Bind the panel to a scope (or to none) and clear the old list
    pub fn select(&mut self, scope: Option<Scope>) -> Option<FetchRequest> {
        self.list.clear();
        self.editor = RowEditor::Idle;
        self.selected = scope.clone();

        match scope {
            None => {
                self.guard.invalidate();
                self.children = ChildLoad::Unselected;
                None
            }
            Some(scope) => {
                self.children = ChildLoad::Loading;
                Some(FetchRequest {
                    kind: self.kind,
                    scope,
                    token: self.guard.issue(),
                })
            }
        }
    }

    /// Selector value; the empty string clears the selection
    pub fn select_locality(&mut self, name: &str) -> Option<FetchRequest> {
        if name.is_empty() {
            self.select(None)
        } else {
            self.select(Some(Scope::Locality(name.to_string())))
        }
    }

    /// Fetch the current selection again
    pub fn reload(&mut self) -> Option<FetchRequest> {
        let scope = self.selected.clone()?;
        self.select(Some(scope))
    }

    pub fn fetch_resolved(&mut self, request: &FetchRequest, result: ApiResult<Vec<NamedEntity>>) -> FetchOutcome {
        if !self.guard.is_current(request.token) {
            debug!("dropping stale {} list #{} for {:?}", self.kind.noun(), request.token.seq(), request.scope);
            return FetchOutcome::Stale;
        }
        match result {
            Ok(entries) => {
                debug!("loaded {} {} entries for {:?}", entries.len(), self.kind.noun(), request.scope);
                self.list.replace(entries);
                self.children = ChildLoad::Loaded;
                FetchOutcome::Applied
            }
            Err(e) => {
                warn!("could not load {} list for {:?}: {}", self.kind.noun(), request.scope, e);
                self.list.clear();
                self.children = ChildLoad::Failed(format!("could not load {}: {}", self.kind.title().to_lowercase(), e));
                FetchOutcome::Failed
            }
        }
    }

    // ========================
    // Creation Form
    // ========================

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    pub fn submit_create(&mut self) -> Result<CreateRequest, Notice> {
        let name = validate_name(&self.draft, self.selected.as_ref()).map_err(|e| Notice::error(e.to_string()))?;
        self.ensure_mutable()?;
        let scope = self.selected.clone().ok_or_else(|| Notice::error(ValidationError::NoScope.to_string()))?;

        self.busy = true;
        Ok(CreateRequest {
            kind: self.kind,
            scope,
            name,
            generation: self.guard.generation(),
        })
    }

    pub fn create_resolved(&mut self, request: &CreateRequest, result: ApiResult<Ack>) -> Notice {
        self.busy = false;
        match result {
            Ok(ack) => {
                if self.is_current(request.generation) {
                    self.list.append(NamedEntity::new(request.name.clone()));
                    self.draft.clear();
                }
                info!("created {} {}", self.kind.noun(), request.name);
                Notice::success(ack.message.unwrap_or_else(|| format!("Added {} {}", self.kind.noun(), request.name)))
            }
            Err(e) => self.failure("add", &request.name, e),
        }
    }

    // ========================
    // Row Editor
    // ========================

    /// Open a row for renaming; closes whichever row was open
    pub fn begin_edit(&mut self, index: usize) -> bool {
        if !self.can_mutate() {
            return false;
        }
        match self.list.get(index) {
            Some(entry) => {
                let name = entry.name.clone();
                self.editor.begin(index, &name)
            }
            None => false,
        }
    }

    pub fn edit_draft(&mut self, text: &str) -> bool {
        self.editor.set_draft(text)
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.editor.cancel()
    }

    /// Save the open row; `Ok(None)` when the name did not change
    pub fn submit_rename(&mut self) -> Result<Option<RenameRequest>, Notice> {
        self.ensure_mutable()?;
        let Some(draft) = self.editor.draft() else {
            return Ok(None);
        };
        let new_name = validate_name(draft, self.selected.as_ref()).map_err(|e| Notice::error(e.to_string()))?;
        let scope = self.selected.clone().ok_or_else(|| Notice::error(ValidationError::NoScope.to_string()))?;

        let Some((index, old_name, _)) = self.editor.start_save() else {
            return Ok(None);
        };
        if old_name == new_name {
            self.editor.finish_saved();
            return Ok(None);
        }

        self.busy = true;
        Ok(Some(RenameRequest {
            kind: self.kind,
            scope,
            index,
            old_name,
            new_name,
            generation: self.guard.generation(),
        }))
    }

    pub fn rename_resolved(&mut self, request: &RenameRequest, result: ApiResult<Ack>) -> Notice {
        self.busy = false;
        let current = self.is_current(request.generation);
        match result {
            Ok(ack) => {
                if current {
                    self.list.rename(request.index, &request.old_name, &request.new_name);
                    self.editor.finish_saved();
                }
                info!("renamed {} {} to {}", self.kind.noun(), request.old_name, request.new_name);
                Notice::success(ack.message.unwrap_or_else(|| format!("Saved {} {}", self.kind.noun(), request.new_name)))
            }
            Err(ApiError::Conflict(message)) => {
                if current {
                    self.editor.finish_conflict();
                }
                Notice::error(message)
            }
            Err(e) => {
                if current {
                    self.editor.finish_failed();
                }
                self.failure("save", &request.new_name, e)
            }
        }
    }

    // ========================
    // Delete
    // ========================

    /// Delete the row at `index`; call only after the user confirmed
    pub fn request_delete(&mut self, index: usize) -> Result<DeleteRequest, Notice> {
        self.ensure_mutable()?;
        let scope = self.selected.clone().ok_or_else(|| Notice::error(ValidationError::NoScope.to_string()))?;
        let name = self
            .list
            .get(index)
            .map(|entry| entry.name.clone())
            .ok_or_else(|| Notice::error(format!("no {} at row {}", self.kind.noun(), index + 1)))?;

        self.busy = true;
        Ok(DeleteRequest {
            kind: self.kind,
            scope,
            index,
            name,
            generation: self.guard.generation(),
        })
    }

    pub fn delete_resolved(&mut self, request: &DeleteRequest, result: ApiResult<Ack>) -> Notice {
        self.busy = false;
        match result {
            Ok(ack) => {
                if self.is_current(request.generation) {
                    if let Some(removed) = self.list.remove(request.index, &request.name) {
                        self.editor.row_removed(removed);
                    }
                }
                info!("deleted {} {}", self.kind.noun(), request.name);
                Notice::success(ack.message.unwrap_or_else(|| format!("Deleted {} {}", self.kind.noun(), request.name)))
            }
            Err(e) => self.failure("delete", &request.name, e),
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn scopes(&self) -> &ScopeLoad {
        &self.scopes
    }

    pub fn selected(&self) -> Option<&Scope> {
        self.selected.as_ref()
    }

    /// Selector value; empty when nothing (or the global scope) is selected
    pub fn selected_locality(&self) -> &str {
        self.selected.as_ref().and_then(Scope::locality).unwrap_or_default()
    }

    pub fn children(&self) -> &ChildLoad {
        &self.children
    }

    pub fn list(&self) -> &EntityList {
        &self.list
    }

    pub fn editor(&self) -> &RowEditor {
        &self.editor
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The creation input accepts text only after a successful fetch
    pub fn form_enabled(&self) -> bool {
        self.children == ChildLoad::Loaded
    }

    /// Mutating buttons are live
    pub fn can_mutate(&self) -> bool {
        self.form_enabled() && !self.busy
    }

    /// Draft of the open row, if any
    pub fn edit_value(&self) -> Option<&str> {
        self.editor.draft()
    }

    /// Current position and mode of the row named `name`
    pub fn row_of(&self, name: &str) -> Option<RowView> {
        let index = self.list.position(name)?;
        Some(RowView {
            index,
            name: name.to_string(),
            mode: self.mode_at(index),
        })
    }

    fn mode_at(&self, index: usize) -> RowMode {
        match self.editor.row() {
            Some(open) if open == index && self.editor.is_saving() => RowMode::Saving,
            Some(open) if open == index => RowMode::Editing,
            _ => RowMode::Display,
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.guard.generation()
    }

    fn ensure_mutable(&self) -> Result<(), Notice> {
        if self.busy {
            return Err(Notice::error("please wait for the current change to finish"));
        }
        if !self.form_enabled() {
            return Err(Notice::error(format!("the {} list is not loaded", self.kind.noun())));
        }
        Ok(())
    }

    fn failure(&self, action: &str, name: &str, error: ApiError) -> Notice {
        warn!("could not {} {} {}: {}", action, self.kind.noun(), name, error);
        Notice::error(format!("could not {} {} {}: {}", action, self.kind.noun(), name, error))
    }
}
