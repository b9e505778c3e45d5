use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use portal_types::AuthMode;

use crate::pages::auth::AuthPage;
use crate::pages::forgot_password::ForgotPasswordPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Owned here so the choice survives a trip to /forgot-password and back.
    let mode = RwSignal::new(AuthMode::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-web.css" />
        <Title text="Portal" />
        <Router>
            <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                <Route path=StaticSegment("") view=move || view! { <AuthPage mode /> } />
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage />
            </Routes>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos_router::location::RequestUrl;

    fn render_at(path: &str) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(path));
            view! { <App /> }.to_html()
        })
    }

    #[test]
    fn root_shows_sign_up_form_first() {
        let html = render_at("/");
        assert!(html.contains("Sign Up"));
        assert!(html.contains(r#"placeholder="Name""#));
        assert!(html.contains(r#"action="/api/signup_user"#));
        assert!(!html.contains("Forgot Password"));
    }

    #[test]
    fn forgot_password_path_shows_reset_form() {
        let html = render_at("/forgot-password");
        assert!(html.contains("Forgot Password"));
        assert!(html.contains("Reset Password"));
        assert!(!html.contains(r#"placeholder="Name""#));
    }

    #[test]
    fn unknown_path_shows_fallback() {
        let html = render_at("/nowhere");
        assert!(html.contains("Page not found."));
    }
}
