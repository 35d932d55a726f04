use crate::api::LeaveRequestRecord;
use leptos::*;
use std::collections::HashMap;

/// Rows shown per window.
pub const PAGE_SIZE: usize = 10;

pub fn matches_search(record: &LeaveRequestRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.employee_name.to_lowercase().contains(&needle)
        || record.employee_email.to_lowercase().contains(&needle)
}

/// Source order is the caller's order; filtering never re-sorts.
pub fn filter_requests(records: &[LeaveRequestRecord], search: &str) -> Vec<LeaveRequestRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, search))
        .cloned()
        .collect()
}

pub fn visible_window(filtered: &[LeaveRequestRecord], scroll_idx: usize) -> Vec<LeaveRequestRecord> {
    filtered
        .iter()
        .skip(scroll_idx)
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}

pub fn has_prev(scroll_idx: usize) -> bool {
    scroll_idx > 0
}

pub fn has_next(scroll_idx: usize, filtered_len: usize) -> bool {
    scroll_idx + PAGE_SIZE < filtered_len
}

pub fn page_number(scroll_idx: usize) -> usize {
    scroll_idx / PAGE_SIZE + 1
}

/// Search text plus window offset. Editing the search always snaps the
/// window back to the start so a narrower filter can never leave the view
/// on an out-of-range page.
#[derive(Clone, Copy)]
pub struct ManageFilterState {
    search: RwSignal<String>,
    scroll_idx: RwSignal<usize>,
}

impl Default for ManageFilterState {
    fn default() -> Self {
        Self {
            search: create_rw_signal(String::new()),
            scroll_idx: create_rw_signal(0),
        }
    }
}

impl ManageFilterState {
    pub fn search(&self) -> String {
        self.search.get()
    }

    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.scroll_idx.set(0);
    }

    pub fn clear_search(&self) {
        self.set_search(String::new());
    }

    pub fn scroll_idx(&self) -> usize {
        self.scroll_idx.get()
    }

    pub fn prev_page(&self) {
        if has_prev(self.scroll_idx.get_untracked()) {
            self.scroll_idx.update(|idx| *idx -= PAGE_SIZE);
        }
    }

    pub fn next_page(&self, filtered_len: usize) {
        if has_next(self.scroll_idx.get_untracked(), filtered_len) {
            self.scroll_idx.update(|idx| *idx += PAGE_SIZE);
        }
    }
}

/// Uncommitted remark text per request id, separate from the records
/// themselves. Keyed by id so an active filter can never desynchronize an
/// edit from its row.
#[derive(Clone, Copy)]
pub struct RemarksDrafts(RwSignal<HashMap<String, String>>);

impl Default for RemarksDrafts {
    fn default() -> Self {
        Self(create_rw_signal(HashMap::new()))
    }
}

impl RemarksDrafts {
    pub fn draft(&self, id: &str) -> String {
        self.0
            .with(|drafts| drafts.get(id).cloned().unwrap_or_default())
    }

    pub fn set(&self, id: &str, value: String) {
        self.0.update(|drafts| {
            drafts.insert(id.to_string(), value);
        });
    }

    pub fn clear(&self, id: &str) {
        self.0.update(|drafts| {
            drafts.remove(id);
        });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionPhase {
    Idle,
    Submitting,
    Done,
    Failed,
}

/// Per-row mutation lifecycle. Controls stay disabled while a row is
/// `Submitting`, which is what prevents a double-click from dispatching the
/// same action twice.
#[derive(Clone, Copy)]
pub struct RowActionStates(RwSignal<HashMap<String, ActionPhase>>);

impl Default for RowActionStates {
    fn default() -> Self {
        Self(create_rw_signal(HashMap::new()))
    }
}

impl RowActionStates {
    pub fn phase(&self, id: &str) -> ActionPhase {
        self.0
            .with(|states| states.get(id).copied().unwrap_or(ActionPhase::Idle))
    }

    pub fn set_phase(&self, id: &str, phase: ActionPhase) {
        self.0.update(|states| {
            states.insert(id.to_string(), phase);
        });
    }

    pub fn is_submitting(&self, id: &str) -> bool {
        self.phase(id) == ActionPhase::Submitting
    }
}
