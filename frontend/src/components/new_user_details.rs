use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::web::router::{Link, use_navigate};
use charger_club::AppRoute;
use charger_club::shared::{DetailField, DetailSection, FieldKind, UserDetailsUpdates};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 单个表单字段
///
/// 值写回 `updates[section][field.name]`。
fn detail_input(
    section: DetailSection,
    field: DetailField,
    updates: RwSignal<UserDetailsUpdates>,
) -> impl IntoView {
    let id = format!("{}-{}", section.title().to_lowercase().replace(' ', "-"), field.name);
    let value = move || {
        updates.with(|u| {
            u.get(&section)
                .and_then(|f| f.get(field.name))
                .cloned()
                .unwrap_or_default()
        })
    };
    let set_value = move |v: String| {
        updates.update(|u| {
            u.entry(section).or_default().insert(field.name.to_string(), v);
        })
    };

    let input = match field.kind {
        FieldKind::Select(options) => view! {
            <select
                id=id.clone()
                class="select select-bordered"
                required=field.required
                on:change=move |ev| set_value(event_target_value(&ev))
            >
                <option value="" selected=move || value().is_empty()>"Select..."</option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt selected=move || value() == *opt>{*opt}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Tel => "tel",
                FieldKind::Number => "number",
                _ => "text",
            };
            view! {
                <input
                    id=id.clone()
                    type=input_type
                    step=(kind == FieldKind::Number).then_some("0.01")
                    class="input input-bordered"
                    required=field.required
                    on:input=move |ev| set_value(event_target_value(&ev))
                    prop:value=value
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">
                    {field.label}
                    {field.required.then_some(" *")}
                </span>
            </label>
            {input}
        </div>
    }
}

/// 首次登录后的资料补全页
#[component]
pub fn NewUserDetailsPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let updates = RwSignal::new(UserDetailsUpdates::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let sections = move || {
        auth.state
            .with(|s| s.user().map(|u| u.user_type.detail_sections()))
            .unwrap_or_default()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let service = auth.service();
        let navigate = navigate.clone();
        let updates = updates.get();
        spawn_local(async move {
            match service.store_details(updates).await {
                Ok(next) => navigate(next),
                Err(e) => {
                    log::warn!("storing user details failed: {}", e);
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-2xl mx-auto">
                <Show
                    when=move || !sections().is_empty()
                    fallback=|| view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body items-center text-center">
                                <p>"Please sign in to complete your profile."</p>
                                <Link to=AppRoute::SignIn class="btn btn-primary">"Sign In"</Link>
                            </div>
                        </div>
                    }
                >
                    <form class="card bg-base-100 shadow-xl" on:submit=on_submit.clone()>
                        <div class="card-body gap-6">
                            <div>
                                <h1 class="card-title text-2xl">"Complete Your Profile"</h1>
                                <p class="text-base-content/70 text-sm">
                                    "Tell us a bit more so we can match you with the right chargers."
                                </p>
                            </div>
                            <ErrorAlert message=error_msg />

                            {move || {
                                sections()
                                    .into_iter()
                                    .map(|section| view! {
                                        <fieldset class="space-y-2">
                                            <legend class="font-semibold text-lg">{section.title()}</legend>
                                            {section
                                                .fields()
                                                .iter()
                                                .map(|field| detail_input(section, *field, updates))
                                                .collect_view()}
                                        </fieldset>
                                    })
                                    .collect_view()
                            }}

                            <div class="card-actions justify-end">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                    } else {
                                        "Save Details".into_any()
                                    }}
                                </button>
                            </div>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}
