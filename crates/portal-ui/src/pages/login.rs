use leptos::logging::{log, warn};
use leptos::prelude::*;
use portal_types::{AuthFlow, AuthMode, AuthResult};

use crate::components::field_input::CredentialFields;
use crate::components::mode_buttons::ModeButtons;

#[server]
async fn login_user(email: String, password: String) -> Result<AuthResult, ServerFnError> {
    use portal_client::AuthClient;

    let client = use_context::<AuthClient>()
        .ok_or_else(|| ServerFnError::new("auth client unavailable"))?;

    // The client logs the remote detail; the browser only learns it failed.
    client
        .login(&email, &password)
        .await
        .map_err(|_| ServerFnError::new("login rejected"))
}

#[component]
pub fn LoginForm(flow: RwSignal<AuthFlow>, on_toggle: Callback<()>) -> impl IntoView {
    let loginAction = ServerAction::<LoginUser>::new();
    let pending = loginAction.pending();
    let loginValue = loginAction.value();

    Effect::new(move |_| {
        if pending.get() {
            flow.update(|f| {
                f.form_mut().begin_submit();
            });
        }
    });

    Effect::new(move |_| {
        let Some(outcome) = loginValue.get() else {
            return;
        };
        match &outcome {
            Ok(data) => log!("Login successful, data: {data}"),
            Err(e) => warn!("login failed: {e}"),
        }
        flow.update(|f| f.form_mut().finish(&outcome));
    });

    view! {
        <div class="container">
            <h2 class="header">{AuthMode::Login.title()}</h2>
            <ActionForm action=loginAction>
                <div class="form">
                    <CredentialFields flow />
                    <a href="/forgot-password" class="link">
                        "Lost password? "
                        <span class="link-highlight">"Click here!"</span>
                    </a>
                    {move || {
                        flow.with(|f| f.form().error())
                            .map(|error| view! { <p class="form-error">{error}</p> })
                    }}
                    <ModeButtons mode=AuthMode::Login on_toggle submitting=pending />
                </div>
            </ActionForm>
        </div>
    }
}
