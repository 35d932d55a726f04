use crate::components::layout::Layout;
use crate::pages::roles::{components::list::UsersRoleList, view_model::use_roles_view_model};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn RolesPage() -> impl IntoView {
    let vm = use_roles_view_model();
    let loading = vm.users_resource.loading();
    let on_assign = Callback::new(move |(user_id, role): (String, String)| {
        vm.dispatch_assign(&user_id, role);
    });

    view! {
        <Layout>
            <Title text="Roles | Leavedesk"/>
            <div class="px-4 sm:px-0 mb-6">
                <h2 class="text-2xl font-bold text-gray-900">"Role Assignment"</h2>
                <p class="text-sm text-gray-500 mt-1">
                    "Give employees the role that matches their responsibilities."
                </p>
            </div>
            <UsersRoleList
                users=vm.users()
                loading=Signal::derive(move || loading.get())
                error=vm.load_error()
                message=vm.action_message
                action_error=vm.action_error
                drafts=vm.drafts
                saving_user=vm.saving_user
                on_assign=on_assign
            />
        </Layout>
    }
}
