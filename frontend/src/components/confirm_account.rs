use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::components::icons::MailCheck;
use crate::web::router::use_navigate;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 账户确认页
///
/// 邮箱来自注册流程；直接打开本页时可以手动填写。
#[component]
pub fn ConfirmAccountPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(auth.pending_email.get_untracked().unwrap_or_default());
    let (code, set_code) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);
        set_notice.set(None);

        let service = auth.service();
        let navigate = navigate.clone();
        let (email, code) = (email.get(), code.get());
        spawn_local(async move {
            match service.confirm_account(email.trim(), code.trim()).await {
                Ok(next) => {
                    auth.pending_email.set(Some(email.trim().to_string()));
                    navigate(next);
                }
                Err(e) => {
                    log::warn!("account confirmation failed: {}", e);
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let on_resend = move |_| {
        set_error_msg.set(None);
        set_notice.set(None);

        let service = auth.service();
        let email = email.get();
        spawn_local(async move {
            match service.resend_code(email.trim()).await {
                Ok(()) => {
                    let sent_to = format!("A new code has been sent to {}", email.trim());
                    set_notice.set(Some(sent_to));
                }
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4 flex flex-col items-center gap-2">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <MailCheck attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-3xl font-bold">"Confirm Your Account"</h1>
                    <p class="text-base-content/70">"Enter the code we emailed you"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />
                        <Show when=move || notice.with(Option::is_some)>
                            <div role="status" class="alert alert-success text-sm py-2">
                                <span>{move || notice.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="code">
                                <span class="label-text">"Confirmation Code"</span>
                            </label>
                            <input
                                id="code"
                                type="text"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                on:input=move |ev| set_code.set(event_target_value(&ev))
                                prop:value=code
                                class="input input-bordered tracking-widest"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Confirming..." }.into_any()
                                } else {
                                    "Confirm".into_any()
                                }}
                            </button>
                        </div>
                        <button type="button" class="btn btn-ghost btn-sm" on:click=on_resend>
                            "Resend code"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
