use crate::api::{ApiError, LeaveAction, LeaveRequestRecord};
use crate::components::{
    layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
    status_badge::{is_pending, StatusBadge},
};
use crate::pages::manage::utils::{RemarksDrafts, RowActionStates};
use leptos::*;

fn attribution_label(status: &str) -> &'static str {
    if status.eq_ignore_ascii_case("approved") {
        "Approved By:"
    } else {
        "Rejected By:"
    }
}

#[component]
pub fn ManageList(
    visible: Signal<Vec<LeaveRequestRecord>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    message: RwSignal<Option<String>>,
    action_error: RwSignal<Option<ApiError>>,
    drafts: RemarksDrafts,
    row_states: RowActionStates,
    on_action: Callback<(String, LeaveAction)>,
    on_delete: Callback<LeaveRequestRecord>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg">
            <div class="px-6 py-4 border-b border-gray-200">
                <h3 class="text-lg font-medium text-gray-900">{"Leave Requests"}</h3>
                <Show when=move || message.get().is_some()>
                    <div class="mt-2">
                        <SuccessMessage message={message.get().unwrap_or_default()} />
                    </div>
                </Show>
                <Show when=move || action_error.get().is_some()>
                    <div class="mt-2">
                        <ErrorMessage message={action_error.get().map(|err| err.error).unwrap_or_default()} />
                    </div>
                </Show>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="px-6 py-4">
                    <ErrorMessage message={error.get().map(|err| err.error).unwrap_or_default()} />
                </div>
            </Show>
            <Show when=move || loading.get()>
                <div class="px-6 py-4 flex items-center gap-2 text-sm text-gray-600">
                    <LoadingSpinner />
                    <span>{"Loading leave requests..."}</span>
                </div>
            </Show>
            <Show when=move || !loading.get() && visible.get().is_empty() && error.get().is_none()>
                <div class="px-6 py-4 text-sm text-gray-600">
                    {"No leave requests match the current view."}
                </div>
            </Show>
            <Show when=move || !visible.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Employee"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Type"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Dates"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Reason"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Remarks"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            <For
                                each=move || visible.get()
                                key=|record| record.id.clone()
                                children=move |record: LeaveRequestRecord| {
                                    let record = store_value(record);
                                    let record_value = record.get_value();
                                    let id = record_value.id.clone();
                                    let status = record_value.status.clone();
                                    let pending = is_pending(&status);
                                    let dates = format!("{} - {}", record_value.start_date, record_value.end_date);
                                    let reason = record_value.reason.clone().unwrap_or_else(|| "-".into());
                                    let stored_remarks = record_value
                                        .chairman_remarks
                                        .clone()
                                        .filter(|remarks| !remarks.is_empty())
                                        .unwrap_or_else(|| "-".into());
                                    let attribution = record_value.actioned_by_name.clone().map(|name| {
                                        let role = record_value
                                            .actioned_by_role
                                            .clone()
                                            .unwrap_or_else(|| "unknown".into());
                                        format!("{} {} ({})", attribution_label(&status), name, role)
                                    });
                                    let draft_value = {
                                        let id = id.clone();
                                        move || drafts.draft(&id)
                                    };
                                    let draft_for_attr = draft_value.clone();
                                    let on_remarks_input = {
                                        let id = id.clone();
                                        move |ev: web_sys::Event| drafts.set(&id, event_target_value(&ev))
                                    };
                                    let submitting = {
                                        let id = id.clone();
                                        move || row_states.is_submitting(&id)
                                    };
                                    let submitting_for_approve = submitting.clone();
                                    let submitting_for_reject = submitting.clone();
                                    let submitting_for_delete = submitting.clone();
                                    let on_approve = {
                                        let id = id.clone();
                                        move |_| on_action.call((id.clone(), LeaveAction::Approve))
                                    };
                                    let on_reject = {
                                        let id = id.clone();
                                        move |_| on_action.call((id.clone(), LeaveAction::Reject))
                                    };
                                    let remarks_cell = if pending {
                                        view! {
                                            <input
                                                type="text"
                                                placeholder="Remarks"
                                                class="w-40 border border-gray-300 rounded px-2 py-1 text-sm"
                                                prop:value=draft_value
                                                value=draft_for_attr
                                                on:input=on_remarks_input
                                            />
                                        }.into_view()
                                    } else {
                                        view! {
                                            <div>
                                                <p>{stored_remarks}</p>
                                                {attribution.map(|line| view! {
                                                    <p class="text-xs text-gray-500 mt-1">{line}</p>
                                                })}
                                            </div>
                                        }.into_view()
                                    };
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <p class="text-gray-900 font-medium">{record_value.employee_name.clone()}</p>
                                                <p class="text-gray-500">{record_value.employee_email.clone()}</p>
                                                <p class="text-xs text-gray-400">{record_value.employee_id.clone()}</p>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{record_value.leave_type.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{dates}</td>
                                            <td class="px-6 py-4 text-sm text-gray-900 max-w-xs truncate">{reason}</td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <StatusBadge status={status.clone()} />
                                            </td>
                                            <td class="px-6 py-4 text-sm text-gray-900">
                                                {remarks_cell}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <div class="flex gap-2">
                                                    <Show when=move || pending>
                                                        <button
                                                            class="px-2 py-1 rounded bg-green-600 text-white text-xs hover:bg-green-700 disabled:opacity-50"
                                                            disabled=submitting_for_approve.clone()
                                                            on:click=on_approve.clone()
                                                        >
                                                            {"Approve"}
                                                        </button>
                                                        <button
                                                            class="px-2 py-1 rounded bg-red-600 text-white text-xs hover:bg-red-700 disabled:opacity-50"
                                                            disabled=submitting_for_reject.clone()
                                                            on:click=on_reject.clone()
                                                        >
                                                            {"Reject"}
                                                        </button>
                                                    </Show>
                                                    <button
                                                        class="px-2 py-1 rounded border border-red-300 text-red-600 text-xs hover:bg-red-50 disabled:opacity-50"
                                                        disabled=submitting_for_delete
                                                        on:click=move |_| on_delete.call(record.get_value())
                                                    >
                                                        {"Delete"}
                                                    </button>
                                                </div>
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
