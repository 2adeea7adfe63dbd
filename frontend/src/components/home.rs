use crate::auth::use_auth;
use crate::components::icons::{MapPin, Zap};
use crate::web::router::Link;
use charger_club::AppRoute;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let is_authenticated = use_auth().is_authenticated();

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-lg flex flex-col items-center gap-4">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <Zap attr:class="h-10 w-10" />
                    </div>
                    <h1 class="text-5xl font-bold">"SocialCharger Club"</h1>
                    <p class="text-base-content/70">
                        "Share home chargers with your neighbours. Find a charging point nearby, or offer yours to the community."
                    </p>
                    <div class="flex gap-2">
                        <Link to=AppRoute::ChargingMap class="btn btn-primary gap-2">
                            <MapPin attr:class="h-4 w-4" />
                            "Find a Charger"
                        </Link>
                        <Show
                            when=move || is_authenticated.get()
                            fallback=|| view! {
                                <Link to=AppRoute::SignUp class="btn btn-outline">"Join the Club"</Link>
                            }
                        >
                            <Link to=AppRoute::MyAccount class="btn btn-outline">"My Account"</Link>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
