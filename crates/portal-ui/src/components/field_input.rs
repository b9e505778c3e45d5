use leptos::prelude::*;
use portal_types::{AuthFlow, Field};

fn field_icon(field: Field) -> &'static str {
    match field {
        Field::Name => "\u{1F464}",
        Field::Email => "\u{2709}",
        Field::Password => "\u{1F512}",
    }
}

/// One icon-prefixed input bound to a field of the active form.
#[component]
pub fn FieldInput(flow: RwSignal<AuthFlow>, field: Field) -> impl IntoView {
    view! {
        <div class="input-container">
            <span class="icon">{field_icon(field)}</span>
            <input
                type=field.input_type()
                name=field.input_name()
                placeholder=field.placeholder()
                prop:value=move || flow.with(|f| f.form().field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    flow.update(|f| f.form_mut().set_field(field, value));
                }
            />
        </div>
    }
}

/// The inputs the active form shows for its mode.
#[component]
pub fn CredentialFields(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let fields = flow.with_untracked(|f| f.mode().fields());

    fields
        .iter()
        .map(|field| view! { <FieldInput flow field=*field /> })
        .collect_view()
}
