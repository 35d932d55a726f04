use crate::api::{ApiError, UserResponse};
use crate::components::layout::{ErrorMessage, LoadingSpinner, SuccessMessage};
use crate::pages::roles::utils::{can_save, RoleDrafts, ROLE_OPTIONS};
use leptos::*;

#[component]
pub fn UsersRoleList(
    users: Signal<Vec<UserResponse>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    message: RwSignal<Option<String>>,
    action_error: RwSignal<Option<ApiError>>,
    drafts: RoleDrafts,
    saving_user: RwSignal<Option<String>>,
    on_assign: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg">
            <div class="px-6 py-4 border-b border-gray-200">
                <h3 class="text-lg font-medium text-gray-900">{"Users"}</h3>
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
                    <span>{"Loading users..."}</span>
                </div>
            </Show>
            <Show when=move || !users.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Employee"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Current role"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Assign role"}</th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            <For
                                each=move || users.get()
                                key=|user| user.id.clone()
                                children=move |user: UserResponse| {
                                    let id = user.id.clone();
                                    let current_role = user.role.clone();
                                    let on_select = {
                                        let id = id.clone();
                                        move |ev: web_sys::Event| drafts.select(&id, event_target_value(&ev))
                                    };
                                    let save_disabled = {
                                        let id = id.clone();
                                        let current = current_role.clone();
                                        move || {
                                            saving_user.get().as_deref() == Some(id.as_str())
                                                || !can_save(&drafts.selected(&id, &current), &current)
                                        }
                                    };
                                    let on_save = {
                                        let id = id.clone();
                                        let current = current_role.clone();
                                        move |_| {
                                            let draft = drafts.selected(&id, &current);
                                            on_assign.call((id.clone(), draft));
                                        }
                                    };
                                    let options = ROLE_OPTIONS
                                        .iter()
                                        .map(|role| {
                                            let value = *role;
                                            let id = id.clone();
                                            let current = current_role.clone();
                                            view! {
                                                <option
                                                    value=value
                                                    selected=move || drafts.selected(&id, &current) == value
                                                >
                                                    {value}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>();
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <p class="text-gray-900 font-medium">{user.full_name.clone()}</p>
                                                <p class="text-gray-500">{user.email.clone()}</p>
                                                <p class="text-xs text-gray-400">{user.employee_id.clone()}</p>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 capitalize">{current_role.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <select
                                                    class="border border-gray-300 rounded-md px-2 py-1 text-sm"
                                                    on:change=on_select
                                                >
                                                    {options}
                                                </select>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                                                <button
                                                    class="px-3 py-1 rounded bg-blue-600 text-white text-xs hover:bg-blue-700 disabled:opacity-50"
                                                    disabled=save_disabled
                                                    on:click=on_save
                                                >
                                                    {"Save"}
                                                </button>
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
