//! Customer sign-up route handlers.
//!
//! The page is server-rendered: each POST rebuilds the sign-up component,
//! replays the posted fields into it as user input, and submits. A valid
//! submission waits for the registration task so the navigation it asks for
//! can become the redirect.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::components::SignUpComponent;
use crate::error::{AppError, Result};
use crate::forms::{Control, Field, SignUpForm};
use crate::middleware::current_customer;
use crate::navigation::RedirectNavigator;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Sign-up form data.
///
/// Missing fields are treated as empty. `birthDate` is never read from the
/// post; it is always derived from the date parts.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignUpFormData {
    pub email: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub gender: String,
    pub day: String,
    pub month: String,
    pub year: String,
}

impl SignUpFormData {
    /// Feed every posted field into `form` as user input, in field order.
    pub fn apply(self, form: &mut SignUpForm) {
        form.input(Field::Email, self.email);
        form.input(Field::Password, self.password);
        form.input(Field::Name, self.name);
        form.input(Field::Address, self.address);
        form.input(Field::Mobile, self.mobile);
        form.input(Field::Gender, self.gender);
        form.input(Field::Day, self.day);
        form.input(Field::Month, self.month);
        form.input(Field::Year, self.year);
    }
}

// =============================================================================
// Templates
// =============================================================================

/// A text input's value and the messages shown under it.
#[derive(Debug, Clone, Default)]
pub struct FieldView {
    pub value: String,
    pub errors: Vec<String>,
}

impl FieldView {
    fn from_control(control: &Control) -> Self {
        Self {
            value: control.value().to_owned(),
            errors: messages(control),
        }
    }
}

/// One `<option>` of a select.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: &str, label: &str, current: &str) -> Self {
        Self {
            value: value.to_owned(),
            label: label.to_owned(),
            selected: value == current,
        }
    }
}

const GENDERS: [(&str, &str); 2] = [("female", "Female"), ("male", "Male")];

/// Sign-up page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/sign_up.html")]
pub struct SignUpTemplate {
    pub email: FieldView,
    pub password: FieldView,
    pub name: FieldView,
    pub address: FieldView,
    pub mobile: FieldView,
    pub gender: FieldView,
    pub birth_date_errors: Vec<String>,
    pub days: Vec<SelectOption>,
    pub months: Vec<SelectOption>,
    pub years: Vec<SelectOption>,
    pub genders: Vec<SelectOption>,
}

impl SignUpTemplate {
    /// Render the component's current state.
    #[must_use]
    pub fn from_component(component: &SignUpComponent) -> Self {
        let form = component.form();
        let current = |field: Field| form.control(field).value();

        // Passwords are never echoed back into the page.
        let password = FieldView {
            value: String::new(),
            errors: messages(form.control(Field::Password)),
        };

        let birth_date = form.control(Field::BirthDate);
        let birth_date_errors = if birth_date.touched() && !birth_date.is_valid() {
            vec!["Choose a valid date of birth".to_string()]
        } else {
            Vec::new()
        };

        Self {
            email: FieldView::from_control(form.control(Field::Email)),
            password,
            name: FieldView::from_control(form.control(Field::Name)),
            address: FieldView::from_control(form.control(Field::Address)),
            mobile: FieldView::from_control(form.control(Field::Mobile)),
            gender: FieldView::from_control(form.control(Field::Gender)),
            birth_date_errors,
            days: component
                .days()
                .iter()
                .map(|day| SelectOption::new(day, day, current(Field::Day)))
                .collect(),
            months: component
                .months()
                .iter()
                .map(|month| SelectOption::new(&month.value, month.label, current(Field::Month)))
                .collect(),
            years: component
                .years()
                .iter()
                .map(|year| SelectOption::new(year, year, current(Field::Year)))
                .collect(),
            genders: GENDERS
                .iter()
                .map(|(value, label)| SelectOption::new(value, label, current(Field::Gender)))
                .collect(),
        }
    }
}

/// Validation messages for a control the user has touched.
fn messages(control: &Control) -> Vec<String> {
    if !control.touched() {
        return Vec::new();
    }
    control.errors().iter().map(|e| e.message()).collect()
}

// =============================================================================
// Sign-up Routes
// =============================================================================

fn component(state: &AppState, session: Session, navigator: &RedirectNavigator) -> SignUpComponent {
    SignUpComponent::new(
        state.dates(),
        state.config().sign_up.years_back,
        state.sign_up_services(Arc::new(navigator.clone())),
        session,
    )
}

/// Display the sign-up page.
pub async fn sign_up_page(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let component = component(&state, session, &RedirectNavigator::new());
    SignUpTemplate::from_component(&component)
}

/// Handle sign-up form submission.
///
/// An invalid form is shown again with its messages. A valid one is
/// submitted; if registration succeeds the response redirects (303) to the
/// route the component navigated to, otherwise the reset page is shown.
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    Form(data): Form<SignUpFormData>,
) -> Result<Response> {
    let navigator = RedirectNavigator::new();
    let mut component = component(&state, session, &navigator);
    data.apply(component.form_mut());

    let Some(task) = component.submit() else {
        return Ok(SignUpTemplate::from_component(&component).into_response());
    };

    task.await
        .map_err(|e| AppError::Internal(format!("sign-up task failed: {e}")))?;

    Ok(match navigator.take() {
        Some(path) => Redirect::to(&path).into_response(),
        None => SignUpTemplate::from_component(&component).into_response(),
    })
}

/// The customer signed up in this session, as JSON.
///
/// Answers `204 No Content` when nobody has signed up yet.
pub async fn current(session: Session) -> Result<Response> {
    Ok(match current_customer(&session).await? {
        Some(customer) => Json(customer).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
