use leptos::logging::{log, warn};
use leptos::prelude::*;
use portal_types::{AuthFlow, AuthMode, AuthResult};

use crate::components::field_input::CredentialFields;
use crate::components::mode_buttons::ModeButtons;

#[server]
async fn signup_user(
    name: String,
    email: String,
    password: String,
) -> Result<AuthResult, ServerFnError> {
    use portal_client::AuthClient;

    let client = use_context::<AuthClient>()
        .ok_or_else(|| ServerFnError::new("auth client unavailable"))?;

    client
        .signup(&name, &email, &password)
        .await
        .map_err(|_| ServerFnError::new("signup rejected"))
}

#[component]
pub fn SignUpForm(flow: RwSignal<AuthFlow>, on_toggle: Callback<()>) -> impl IntoView {
    let signupAction = ServerAction::<SignupUser>::new();
    let pending = signupAction.pending();
    let signupValue = signupAction.value();

    Effect::new(move |_| {
        if pending.get() {
            flow.update(|f| {
                f.form_mut().begin_submit();
            });
        }
    });

    Effect::new(move |_| {
        let Some(outcome) = signupValue.get() else {
            return;
        };
        match &outcome {
            Ok(data) => log!("Signup successful, data: {data}"),
            Err(e) => warn!("signup failed: {e}"),
        }
        flow.update(|f| f.form_mut().finish(&outcome));
    });

    view! {
        <div class="container">
            <h2 class="header">{AuthMode::SignUp.title()}</h2>
            <ActionForm action=signupAction>
                <div class="form">
                    <CredentialFields flow />
                    {move || {
                        flow.with(|f| f.form().error())
                            .map(|error| view! { <p class="form-error">{error}</p> })
                    }}
                    <ModeButtons mode=AuthMode::SignUp on_toggle submitting=pending />
                </div>
            </ActionForm>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn signup_form_posts_named_fields_to_server_function() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let flow = RwSignal::new(AuthFlow::new(AuthMode::SignUp));
            let onToggle = Callback::new(|_: ()| {});
            view! { <SignUpForm flow on_toggle=onToggle /> }.to_html()
        });

        assert!(html.to_lowercase().contains(r#"method="post""#));
        assert!(html.contains(r#"action="/api/signup_user"#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"name="password""#));
    }
}
