use crate::api::{ApiError, CreateLeaveRequest};
use crate::components::layout::{ErrorMessage, SuccessMessage};
use crate::pages::leave::utils::{LeaveFormState, MessageState, LEAVE_TYPES};
use leptos::*;

#[component]
pub fn LeaveRequestForm(
    state: LeaveFormState,
    message: RwSignal<MessageState>,
    action: Action<CreateLeaveRequest, Result<(), ApiError>>,
) -> impl IntoView {
    let pending = action.pending();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match state.to_payload() {
            Ok(payload) => {
                message.update(|msg| msg.clear());
                action.dispatch(payload);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-gray-900 mb-4">{"Apply for Leave"}</h3>
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message={message.get().success.clone().unwrap_or_default()} />
            </Show>
            <Show when=move || message.get().error.is_some()>
                <ErrorMessage message={message.get().error.clone().map(|err| err.error).unwrap_or_default()} />
            </Show>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Leave type"}</label>
                    <select
                        class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                        on:change=move |ev| state.leave_type_signal().set(event_target_value(&ev))
                    >
                        {LEAVE_TYPES
                            .iter()
                            .map(|leave_type| {
                                let value = *leave_type;
                                view! {
                                    <option
                                        value=value
                                        selected=move || state.leave_type_signal().get() == value
                                    >
                                        {value}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Start date"}</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                            prop:value=move || state.start_signal().get()
                            on:input=move |ev| state.start_signal().set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"End date"}</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                            prop:value=move || state.end_signal().get()
                            on:input=move |ev| state.end_signal().set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Reason"}</label>
                    <textarea
                        class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                        rows="3"
                        placeholder="Why do you need this leave?"
                        prop:value=move || state.reason_signal().get()
                        on:input=move |ev| state.reason_signal().set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="inline-flex items-center px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                </button>
            </form>
        </div>
    }
}
