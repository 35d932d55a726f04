use leptos::*;

/// Status comparisons are case-insensitive at the boundary; rendering keeps
/// the casing the backend sent.
pub fn is_pending(status: &str) -> bool {
    status.eq_ignore_ascii_case("pending")
}

pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "pending" => "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-yellow-100 text-yellow-800",
        "approved" => "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800",
        "rejected" => "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-red-100 text-red-800",
        _ => "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-800",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = status_badge_class(&status);
    view! { <span class=class>{status}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_check_ignores_case() {
        assert!(is_pending("pending"));
        assert!(is_pending("Pending"));
        assert!(is_pending("PENDING"));
        assert!(!is_pending("approved"));
    }

    #[test]
    fn badge_class_maps_statuses_case_insensitively() {
        assert!(status_badge_class("Pending").contains("yellow"));
        assert!(status_badge_class("approved").contains("green"));
        assert!(status_badge_class("REJECTED").contains("red"));
        assert!(status_badge_class("cancelled").contains("gray"));
    }
}
