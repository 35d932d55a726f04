use leptos::*;
use std::collections::HashMap;

pub const ROLE_OPTIONS: [&str; 4] = ["employee", "manager", "chairman", "admin"];

/// Selected-but-unsaved role per user id. Merged with the server state at
/// render time, same shape as the remark drafts on the approvals screen.
#[derive(Clone, Copy)]
pub struct RoleDrafts(RwSignal<HashMap<String, String>>);

impl Default for RoleDrafts {
    fn default() -> Self {
        Self(create_rw_signal(HashMap::new()))
    }
}

impl RoleDrafts {
    /// Draft for the user, falling back to the committed role.
    pub fn selected(&self, id: &str, current_role: &str) -> String {
        self.0.with(|drafts| {
            drafts
                .get(id)
                .cloned()
                .unwrap_or_else(|| current_role.to_string())
        })
    }

    pub fn select(&self, id: &str, role: String) {
        self.0.update(|drafts| {
            drafts.insert(id.to_string(), role);
        });
    }

    pub fn clear(&self, id: &str) {
        self.0.update(|drafts| {
            drafts.remove(id);
        });
    }
}

/// Save is only meaningful when the draft names a known role that differs
/// from what the server already has.
pub fn can_save(draft: &str, current_role: &str) -> bool {
    !draft.is_empty()
        && draft != current_role
        && ROLE_OPTIONS.contains(&draft)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn save_requires_a_changed_known_role() {
        assert!(!can_save("", "employee"));
        assert!(!can_save("employee", "employee"));
        assert!(!can_save("director", "employee"));
        assert!(can_save("manager", "employee"));
        assert!(can_save("admin", "chairman"));
    }

    #[test]
    fn drafts_fall_back_to_committed_role() {
        with_runtime(|| {
            let drafts = RoleDrafts::default();
            assert_eq!(drafts.selected("u1", "employee"), "employee");

            drafts.select("u1", "manager".into());
            assert_eq!(drafts.selected("u1", "employee"), "manager");
            assert_eq!(drafts.selected("u2", "chairman"), "chairman");

            drafts.clear("u1");
            assert_eq!(drafts.selected("u1", "employee"), "employee");
        });
    }
}
