//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;
use portal::{Navigation, Route, RouteTable};

use crate::components::toast_stack::ToastStack;
use crate::pages::{login::LoginPage, signup::SignupPage, user::UserPage};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::session::BrowserSession;

/// Root application component.
///
/// Provides config, route table, auth, and toast contexts, then renders the
/// page chosen by [`PageOutlet`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = crate::config::load();
    let routes = RouteTable::new(config.routes.clone());
    let auth = RwSignal::new(AuthState::restore());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(routes);
    provide_context(auth);
    provide_context(toasts);

    view! {
        <Title text="Portal"/>

        <Router>
            <main class="portal">
                <PageOutlet/>
            </main>
            <ToastStack toasts=toasts/>
        </Router>
    }
}

/// Resolves the current path through the portal route table.
///
/// The protected page is gated on every navigation; unknown paths redirect
/// in one hop (login when signed out, the protected page when signed in).
#[component]
fn PageOutlet() -> impl IntoView {
    let routes = expect_context::<RouteTable>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    move || {
        // Login and logout change the gate's answer without changing the path.
        auth.track();
        let path = location.pathname.get();
        match routes.resolve(&path, &BrowserSession) {
            Navigation::Render(Route::Login) => view! { <LoginPage/> }.into_any(),
            Navigation::Render(Route::Signup) => view! { <SignupPage/> }.into_any(),
            Navigation::Render(Route::User) => view! { <UserPage/> }.into_any(),
            Navigation::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
        }
    }
}
