use crate::api::{ApiError, LeaveRequestRecord};
use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner},
    status_badge::StatusBadge,
};
use leptos::*;

#[component]
pub fn MyRequestsList(
    requests: Signal<Vec<LeaveRequestRecord>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg">
            <div class="px-6 py-4 border-b border-gray-200">
                <h3 class="text-lg font-medium text-gray-900">{"My Leave Requests"}</h3>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="px-6 py-4">
                    <ErrorMessage message={error.get().map(|err| err.error).unwrap_or_default()} />
                </div>
            </Show>
            <Show when=move || loading.get()>
                <div class="px-6 py-4 flex items-center gap-2 text-sm text-gray-600">
                    <LoadingSpinner />
                    <span>{"Loading your requests..."}</span>
                </div>
            </Show>
            <Show when=move || !loading.get() && requests.get().is_empty() && error.get().is_none()>
                <div class="px-6 py-4">
                    <EmptyState
                        title="No leave requests yet"
                        description="Submit a request with the form above."
                    />
                </div>
            </Show>
            <Show when=move || !requests.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Type"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Dates"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Reason"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Remarks"}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            <For
                                each=move || requests.get()
                                key=|record| record.id.clone()
                                children=move |record: LeaveRequestRecord| {
                                    let dates = format!("{} - {}", record.start_date, record.end_date);
                                    let reason = record.reason.clone().unwrap_or_else(|| "-".into());
                                    let remarks = record
                                        .chairman_remarks
                                        .clone()
                                        .filter(|remarks| !remarks.is_empty())
                                        .unwrap_or_else(|| "-".into());
                                    let actioned_by = record.actioned_by_name.clone().map(|name| {
                                        match record.actioned_by_role.clone() {
                                            Some(role) => format!("by {} ({})", name, role),
                                            None => format!("by {}", name),
                                        }
                                    });
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{record.leave_type.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{dates}</td>
                                            <td class="px-6 py-4 text-sm text-gray-900 max-w-xs truncate">{reason}</td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <StatusBadge status={record.status.clone()} />
                                            </td>
                                            <td class="px-6 py-4 text-sm text-gray-900">
                                                <p>{remarks}</p>
                                                {actioned_by.map(|line| view! {
                                                    <p class="text-xs text-gray-500 mt-1">{line}</p>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::leave_request;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn list_renders_status_and_decision_remarks() {
        let html = render_to_string(move || {
            let mut approved = leave_request("lr-1", "Approved");
            approved.chairman_remarks = Some("enjoy".into());
            approved.actioned_by_name = Some("Carol Chair".into());
            approved.actioned_by_role = Some("chairman".into());
            let records = vec![approved, leave_request("lr-2", "Pending")];
            view! {
                <MyRequestsList
                    requests=Signal::derive(move || records.clone())
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                />
            }
        });
        assert!(html.contains("enjoy"));
        assert!(html.contains("by Carol Chair (chairman)"));
        assert!(html.contains("Pending"));
    }

    #[test]
    fn empty_list_renders_empty_state() {
        let html = render_to_string(move || {
            view! {
                <MyRequestsList
                    requests=Signal::derive(Vec::new)
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                />
            }
        });
        assert!(html.contains("No leave requests yet"));
    }
}
