use leptos::prelude::*;
use portal_types::AuthMode;

const BUTTON_ORDER: [AuthMode; 2] = [AuthMode::SignUp, AuthMode::Login];

/// Sign Up / Login pair. The button for `mode` submits the form and is
/// disabled while a submission is pending; the other one toggles.
#[component]
pub fn ModeButtons(
    mode: AuthMode,
    on_toggle: Callback<()>,
    #[prop(into)] submitting: Signal<bool>,
) -> impl IntoView {
    let buttons = BUTTON_ORDER
        .into_iter()
        .map(|button| {
            if button == mode {
                view! {
                    <button
                        type="submit"
                        class=button.button_classes(mode)
                        disabled=move || submitting.get()
                    >
                        {button.title()}
                    </button>
                }
                    .into_any()
            } else {
                view! {
                    <button
                        type="button"
                        class=button.button_classes(mode)
                        on:click=move |_| on_toggle.run(())
                    >
                        {button.title()}
                    </button>
                }
                    .into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="button-container">{buttons}</div> }
}
