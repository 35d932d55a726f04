use crate::api::{ApiClient, LeaveRequestRecord};
use crate::components::status_badge::is_pending;
use crate::pages::dashboard::layout::DashboardFrame;
use crate::state::auth::{is_admin_user, use_auth};
use leptos::*;
use leptos_meta::Title;

pub fn pending_count(records: &[LeaveRequestRecord]) -> usize {
    records
        .iter()
        .filter(|record| is_pending(&record.status))
        .count()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let full_name = create_memo(move |_| {
        auth.get()
            .user
            .map(|user| user.full_name)
            .unwrap_or_default()
    });
    let admin_allowed = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));

    let api = store_value(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let pending_resource = create_resource(
        move || admin_allowed.get(),
        move |allowed| {
            let api = api.get_value();
            async move {
                if !allowed {
                    return 0;
                }
                match api.list_leave_requests().await {
                    Ok(records) => pending_count(&records),
                    Err(_) => 0,
                }
            }
        },
    );

    view! {
        <DashboardFrame>
            <Title text="Dashboard | Leavedesk"/>
            <div class="px-4 sm:px-0 mb-6">
                <h2 class="text-2xl font-bold text-gray-900">
                    {move || format!("Welcome, {}", full_name.get())}
                </h2>
                <p class="text-sm text-gray-500 mt-1">
                    "Everything leave-related, in one place."
                </p>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <a href="/leave" class="bg-white shadow rounded-lg p-6 hover:shadow-md transition-shadow">
                    <h3 class="text-lg font-medium text-gray-900">"My Leave"</h3>
                    <p class="text-sm text-gray-500 mt-1">"Apply for leave and track your requests."</p>
                </a>
                <Show when=move || admin_allowed.get()>
                    <a href="/admin/leave" class="bg-white shadow rounded-lg p-6 hover:shadow-md transition-shadow">
                        <h3 class="text-lg font-medium text-gray-900">"Leave Approvals"</h3>
                        <p class="text-sm text-gray-500 mt-1">
                            {move || match pending_resource.get() {
                                Some(count) => format!("{} pending request(s) to review.", count),
                                None => "Loading pending requests...".to_string(),
                            }}
                        </p>
                    </a>
                    <a href="/admin/roles" class="bg-white shadow rounded-lg p-6 hover:shadow-md transition-shadow">
                        <h3 class="text-lg font-medium text-gray-900">"Role Assignment"</h3>
                        <p class="text-sm text-gray-500 mt-1">"Manage who can approve and administer."</p>
                    </a>
                </Show>
            </div>
        </DashboardFrame>
    }
}
