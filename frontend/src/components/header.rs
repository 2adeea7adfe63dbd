use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, User, Zap};
use crate::web::router::{Link, use_navigate};
use charger_club::AppRoute;
use leptos::prelude::*;

/// 顶部导航栏
///
/// 未登录时显示登录/注册入口，登录后显示用户菜单。
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let is_authenticated = auth.is_authenticated();

    let display_name = move || {
        auth.state
            .with(|s| s.user().map(|u| u.display_name().to_string()))
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        let target = logout(&auth);
        navigate(target);
    };

    view! {
        <div class="navbar bg-base-100 shadow-md">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">
                    <Zap attr:class="h-6 w-6 text-primary" />
                    "SocialCharger Club"
                </Link>
                <Link to=AppRoute::ChargingMap class="btn btn-ghost btn-sm">
                    "Charging Map"
                </Link>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || is_authenticated.get()
                    fallback=|| view! {
                        <Link to=AppRoute::SignIn class="btn btn-ghost btn-sm">"Sign In"</Link>
                        <Link to=AppRoute::SignUp class="btn btn-primary btn-sm">"Sign Up"</Link>
                    }
                >
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                            <User attr:class="h-5 w-5" />
                            <span>{display_name}</span>
                        </div>
                        <ul tabindex="0" class="menu dropdown-content bg-base-100 rounded-box z-10 w-52 p-2 shadow">
                            <li>
                                <Link to=AppRoute::MyAccount>"Manage My Account"</Link>
                            </li>
                            <li>
                                <button on:click=on_sign_out.clone() class="text-error">
                                    <LogOut attr:class="h-4 w-4" />
                                    "Sign Out"
                                </button>
                            </li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
