use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;
use portal_types::ForgotPasswordForm;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let form = RwSignal::new(ForgotPasswordForm::default());

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            log!("Forgot password for: {}", f.email);
            f.submit();
        });
    };

    view! {
        <div class="container">
            <h2 class="header">"Forgot Password"</h2>
            <form class="form" on:submit=onSubmit>
                <div class="input-container">
                    <span class="icon">"\u{2709}"</span>
                    <input
                        type="email"
                        placeholder="Email id"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                </div>
                <button type="submit" class="button login-button">
                    "Reset Password"
                </button>
            </form>
            {move || {
                form.with(|f| f.message())
                    .map(|message| view! { <p class="form-success">{message}</p> })
            }}
            <a href="/" class="link back-link">
                <span class="link-highlight">"Go Back"</span>
            </a>
        </div>
    }
}
