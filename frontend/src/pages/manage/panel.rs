use crate::api::{LeaveAction, LeaveRequestRecord};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::pages::manage::{
    components::{filter::ManageSearch, list::ManageList, pagination::ManagePagination},
    layout::ManageLayout,
    view_model::use_manage_view_model,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn ManagePage() -> impl IntoView {
    let vm = use_manage_view_model();
    let visible = vm.visible();
    let filtered = vm.filtered();
    let filtered_len = Signal::derive(move || filtered.get().len());
    let loading = vm.requests_resource.loading();
    let load_error = vm.load_error();

    let on_action = Callback::new(move |(id, action): (String, LeaveAction)| {
        vm.dispatch_action(&id, action);
    });
    let on_delete = Callback::new(move |record: LeaveRequestRecord| {
        vm.request_delete(record);
    });

    let confirm_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let confirm_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|record| {
                format!(
                    "Delete the leave request from {}? This cannot be undone.",
                    record.employee_name
                )
            })
            .unwrap_or_default()
    });

    view! {
        <ManageLayout>
            <Title text="Leave Approvals | Leavedesk"/>
            <div class="bg-white shadow rounded-lg">
                <ManageSearch filter=vm.filter />
                <ManageList
                    visible=visible
                    loading=Signal::derive(move || loading.get())
                    error=load_error
                    message=vm.action_message
                    action_error=vm.action_error
                    drafts=vm.drafts
                    row_states=vm.row_states
                    on_action=on_action
                    on_delete=on_delete
                />
                <ManagePagination filter=vm.filter filtered_len=filtered_len />
            </div>
            <ConfirmDialog
                is_open=confirm_open
                title="Delete leave request"
                message=confirm_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Delete"
                destructive=true
            />
        </ManageLayout>
    }
}
