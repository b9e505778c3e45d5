use crate::auth::{LoginRequest, SignupRequest};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed. Please try again.";
pub const RESET_CONFIRMATION_MESSAGE: &str =
    "If this email is registered, you will receive instructions to reset your password.";

/// Which credential form is shown at `/`. Sign-up comes first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    #[default]
    SignUp,
}

impl AuthMode {
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::SignUp => "Sign Up",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            AuthMode::Login => "login-button",
            AuthMode::SignUp => "sign-up-button",
        }
    }

    /// CSS classes for this mode's button while `current` is shown.
    pub fn button_classes(self, current: AuthMode) -> String {
        let active = if self == current { " active" } else { "" };
        format!("button {}{active}", self.button_class())
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            AuthMode::Login => LOGIN_FAILED_MESSAGE,
            AuthMode::SignUp => SIGNUP_FAILED_MESSAGE,
        }
    }

    /// Fields rendered by the form for this mode, top to bottom.
    pub fn fields(self) -> &'static [Field] {
        match self {
            AuthMode::Login => &[Field::Email, Field::Password],
            AuthMode::SignUp => &[Field::Name, Field::Email, Field::Password],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Form-data key; matches the server function argument.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email id",
            Field::Password => "Password",
        }
    }
}

/// A request ready to be sent, built from the form at submit time.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Login(LoginRequest),
    SignUp(SignupRequest),
}

/// Keystroke-bound state of a login or sign-up form.
///
/// Values are sent exactly as typed; rejecting bad input is left to the
/// remote service. At most one submission is in flight at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct CredentialForm {
    mode: AuthMode,
    name: String,
    email: String,
    password: String,
    error: Option<&'static str>,
    submitting: bool,
}

impl CredentialForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            error: None,
            submitting: false,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Starts a submission. Returns `None` if one is already in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;

        let submission = match self.mode {
            AuthMode::Login => Submission::Login(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            AuthMode::SignUp => Submission::SignUp(SignupRequest {
                name: self.name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            }),
        };
        Some(submission)
    }

    /// Records the outcome of the in-flight submission. Failure detail is
    /// replaced by the form's fixed message.
    pub fn finish<T, E>(&mut self, outcome: &Result<T, E>) {
        self.submitting = false;
        self.error = match outcome {
            Ok(_) => None,
            Err(_) => Some(self.mode.failure_message()),
        };
    }
}

/// The credential form currently shown at `/` together with its mode.
/// Switching modes replaces the form, dropping anything typed into it.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthFlow {
    form: CredentialForm,
}

impl AuthFlow {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            form: CredentialForm::new(mode),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.form.mode()
    }

    pub fn form(&self) -> &CredentialForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CredentialForm {
        &mut self.form
    }

    pub fn toggle(&mut self) {
        self.form = CredentialForm::new(self.mode().toggled());
    }
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new(AuthMode::default())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
    message: Option<&'static str>,
}

impl ForgotPasswordForm {
    /// No request is made; the confirmation is shown whatever was entered.
    pub fn submit(&mut self) {
        self.message = Some(RESET_CONFIRMATION_MESSAGE);
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }
}
