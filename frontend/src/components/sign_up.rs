use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::web::router::{Link, use_navigate};
use charger_club::{AppRoute, SignUpForm};
use charger_club::shared::UserType;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let form = RwSignal::new(SignUpForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let service = auth.service();
        let navigate = navigate.clone();
        let form = form.get();
        spawn_local(async move {
            match service.sign_up(&form).await {
                Ok(next) => {
                    auth.pending_email.set(Some(form.email.trim().to_string()));
                    navigate(next);
                }
                Err(e) => {
                    log::warn!("sign up failed: {}", e);
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let on_user_type = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match value.parse::<UserType>() {
            Ok(user_type) => form.update(|f| f.user_type = user_type),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Create an Account"</h1>
                    <p class="text-base-content/70">"Join the SocialCharger community"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.email.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.username.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.password.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm-password">
                                <span class="label-text">"Confirm Password"</span>
                            </label>
                            <input
                                id="confirm-password"
                                type="password"
                                on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.confirm_password.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="user-type">
                                <span class="label-text">"I want to"</span>
                            </label>
                            <select id="user-type" class="select select-bordered" on:change=on_user_type>
                                {UserType::ALL
                                    .into_iter()
                                    .map(|t| {
                                        view! {
                                            <option
                                                value=t.as_str()
                                                selected=move || form.with(|f| f.user_type == t)
                                            >
                                                {t.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Sign Up".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Already a member? "
                            <Link to=AppRoute::SignIn class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
