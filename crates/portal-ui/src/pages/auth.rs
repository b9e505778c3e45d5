use leptos::prelude::*;
use portal_types::{AuthFlow, AuthMode};

use crate::pages::login::LoginForm;
use crate::pages::signup::SignUpForm;

/// Shows the form for the current mode. Toggling replaces the form state,
/// so whatever was typed into the other one is gone.
#[component]
pub fn AuthPage(mode: RwSignal<AuthMode>) -> impl IntoView {
    let flow = RwSignal::new(AuthFlow::new(mode.get_untracked()));
    // Keystrokes update `flow`; only a mode change remounts the form.
    let current = Memo::new(move |_| flow.with(|f| f.mode()));

    let onToggle = Callback::new(move |_: ()| {
        flow.update(AuthFlow::toggle);
        mode.set(flow.with_untracked(|f| f.mode()));
    });

    move || match current.get() {
        AuthMode::Login => view! { <LoginForm flow on_toggle=onToggle /> }.into_any(),
        AuthMode::SignUp => view! { <SignUpForm flow on_toggle=onToggle /> }.into_any(),
    }
}
