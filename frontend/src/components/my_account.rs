use crate::auth::use_auth;
use crate::components::icons::{MapPin, User, Zap};
use crate::web::router::Link;
use charger_club::AppRoute;
use charger_club::shared::UserProfile;
use leptos::prelude::*;

fn profile_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <tr>
            <th class="w-40 text-base-content/70">{label}</th>
            <td>{value}</td>
        </tr>
    }
}

fn consumer_section() -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title gap-2">
                    <MapPin attr:class="h-5 w-5 text-primary" />
                    "Charging"
                </h2>
                <p class="text-base-content/70 text-sm">
                    "Find a charging point shared by club members near you."
                </p>
                <div class="card-actions justify-end">
                    <Link to=AppRoute::ChargingMap class="btn btn-primary btn-sm">"Open Charging Map"</Link>
                </div>
            </div>
        </div>
    }
}

fn producer_section() -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title gap-2">
                    <Zap attr:class="h-5 w-5 text-secondary" />
                    "My Charging Point"
                </h2>
                <p class="text-base-content/70 text-sm">
                    "Keep your station details up to date so drivers can find you."
                </p>
                <div class="card-actions justify-end">
                    <Link to=AppRoute::NewUserDetails class="btn btn-outline btn-sm">"Update Details"</Link>
                </div>
            </div>
        </div>
    }
}

fn account_view(user: UserProfile) -> impl IntoView {
    let user_type = user.user_type;

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-2xl gap-2">
                    <User attr:class="h-6 w-6" />
                    {user.display_name().to_string()}
                    <span class="badge badge-primary">{user_type.label()}</span>
                </h1>
                <table class="table">
                    <tbody>
                        {profile_row("Email", user.email.clone())}
                        {profile_row("Username", user.name.clone())}
                        {profile_row("Account type", user_type.label().to_string())}
                    </tbody>
                </table>
            </div>
        </div>
        {user_type.consumes().then(consumer_section)}
        {user_type.produces().then(producer_section)}
    }
}

/// 账户页（受保护路由）
#[component]
pub fn MyAccountPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                {move || auth.state.with(|s| s.user().cloned()).map(account_view)}
            </div>
        </div>
    }
}
