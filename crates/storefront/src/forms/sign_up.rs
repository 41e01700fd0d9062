//! The sign-up form: ten controls, value-change listeners, aggregate validity.

use std::collections::BTreeMap;

use shopfront_core::{DateParts, NewCustomer};

use super::{Control, Rule, composer};
use crate::services::DateService;

/// Calendar-validity predicate used by the birth-date composer.
pub type CalendarCheck = fn(u32, u32, i32) -> bool;

/// Callback run after a field's value changes.
pub type Listener = fn(&mut SignUpForm);

const REQUIRED: &[Rule] = &[Rule::Required];
const EMAIL: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD: &[Rule] = &[Rule::Required, Rule::MinLength(SignUpForm::MIN_PASSWORD_LENGTH)];

/// A sign-up form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
    Name,
    Address,
    Mobile,
    BirthDate,
    Gender,
    Day,
    Month,
    Year,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Email,
        Self::Password,
        Self::Name,
        Self::Address,
        Self::Mobile,
        Self::BirthDate,
        Self::Gender,
        Self::Day,
        Self::Month,
        Self::Year,
    ];

    /// The fields that only exist to build the birth date.
    pub const DATE_PARTS: [Self; 3] = [Self::Day, Self::Month, Self::Year];

    /// Key used in form posts and value snapshots.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Name => "name",
            Self::Address => "address",
            Self::Mobile => "mobile",
            Self::BirthDate => "birthDate",
            Self::Gender => "gender",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Validation rules for this field.
    #[must_use]
    pub const fn rules(self) -> &'static [Rule] {
        match self {
            Self::Email => EMAIL,
            Self::Password => PASSWORD,
            _ => REQUIRED,
        }
    }
}

/// The sign-up form model.
///
/// Changing a value through [`SignUpForm::set_value`] runs every listener
/// subscribed to that field, in subscription order. A new form already has
/// the birth-date composer subscribed to day, month and year.
pub struct SignUpForm {
    email: Control,
    password: Control,
    name: Control,
    address: Control,
    mobile: Control,
    birth_date: Control,
    gender: Control,
    day: Control,
    month: Control,
    year: Control,
    listeners: Vec<(Field, Listener)>,
    calendar: CalendarCheck,
}

impl SignUpForm {
    /// Minimum password length, in characters.
    pub const MIN_PASSWORD_LENGTH: usize = 8;

    /// Create an empty form checking dates with the [`DateService`] calendar.
    #[must_use]
    pub fn new() -> Self {
        Self::with_calendar(DateService::new().calendar())
    }

    /// Create an empty form with a custom calendar check.
    #[must_use]
    pub fn with_calendar(calendar: CalendarCheck) -> Self {
        let mut form = Self {
            email: Control::new(Field::Email.rules()),
            password: Control::new(Field::Password.rules()),
            name: Control::new(Field::Name.rules()),
            address: Control::new(Field::Address.rules()),
            mobile: Control::new(Field::Mobile.rules()),
            birth_date: Control::new(Field::BirthDate.rules()),
            gender: Control::new(Field::Gender.rules()),
            day: Control::new(Field::Day.rules()),
            month: Control::new(Field::Month.rules()),
            year: Control::new(Field::Year.rules()),
            listeners: Vec::new(),
            calendar,
        };

        for field in Field::DATE_PARTS {
            form.subscribe(field, composer::compose_birth_date);
        }

        form
    }

    #[must_use]
    pub const fn control(&self, field: Field) -> &Control {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Mobile => &self.mobile,
            Field::BirthDate => &self.birth_date,
            Field::Gender => &self.gender,
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
        }
    }

    pub const fn control_mut(&mut self, field: Field) -> &mut Control {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Mobile => &mut self.mobile,
            Field::BirthDate => &mut self.birth_date,
            Field::Gender => &mut self.gender,
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        }
    }

    #[must_use]
    pub const fn calendar(&self) -> CalendarCheck {
        self.calendar
    }

    /// Run `listener` after every value change on `field`.
    pub fn subscribe(&mut self, field: Field, listener: Listener) {
        self.listeners.push((field, listener));
    }

    /// Set a field's value and notify its listeners.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.control_mut(field).set_value(value);
        self.emit(field);
    }

    /// Apply a value as if the user had typed it: set, mark touched, notify.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        let control = self.control_mut(field);
        control.set_value(value);
        control.mark_as_touched();
        self.emit(field);
    }

    fn emit(&mut self, field: Field) {
        // Copy out first: listeners need `&mut self`.
        let listeners: Vec<Listener> = self
            .listeners
            .iter()
            .filter(|(subscribed, _)| *subscribed == field)
            .map(|(_, listener)| *listener)
            .collect();

        for listener in listeners {
            listener(self);
        }
    }

    /// Aggregate validity: every control is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.control(*field).is_valid())
    }

    /// The current day/month/year selections.
    #[must_use]
    pub fn date_parts(&self) -> DateParts {
        DateParts::new(self.day.value(), self.month.value(), self.year.value())
    }

    /// Snapshot of every field's value, keyed by [`Field::key`].
    #[must_use]
    pub fn value(&self) -> BTreeMap<&'static str, String> {
        Field::ALL
            .iter()
            .map(|field| (field.key(), self.control(*field).value().to_owned()))
            .collect()
    }

    /// The registration payload: the snapshot without the date parts.
    #[must_use]
    pub fn payload(&self) -> NewCustomer {
        NewCustomer {
            email: self.email.value().to_owned(),
            password: self.password.value().to_owned(),
            name: self.name.value().to_owned(),
            address: self.address.value().to_owned(),
            mobile: self.mobile.value().to_owned(),
            birth_date: self.birth_date.value().to_owned(),
            gender: self.gender.value().to_owned(),
        }
    }

    /// Empty every control and clear touched flags.
    ///
    /// Each control emits a change like a user edit would, so the composer
    /// runs for the date parts and leaves the birth date touched.
    pub fn reset(&mut self) {
        for field in Field::ALL {
            self.control_mut(field).reset();
            self.emit(field);
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpForm")
            .field("email", &self.email.value())
            .field("password", &"[REDACTED]")
            .field("birth_date", &self.birth_date.value())
            .field("date_parts", &self.date_parts())
            .field("valid", &self.is_valid())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignUpForm {
        let mut form = SignUpForm::new();
        form.set_value(Field::Email, "ada@example.com");
        form.set_value(Field::Password, "correct horse");
        form.set_value(Field::Name, "Ada");
        form.set_value(Field::Address, "1 Analytical Way");
        form.set_value(Field::Mobile, "0100000000");
        form.set_value(Field::Gender, "female");
        form.set_value(Field::Day, "15");
        form.set_value(Field::Month, "6");
        form.set_value(Field::Year, "1990");
        form
    }

    #[test]
    fn test_new_form_is_empty_and_invalid() {
        let form = SignUpForm::new();
        assert!(!form.is_valid());
        assert!(form.value().values().all(String::is_empty));
        assert!(Field::ALL.iter().all(|f| !form.control(*f).touched()));
    }

    #[test]
    fn test_filled_form_is_valid() {
        let form = filled();
        assert_eq!(form.control(Field::BirthDate).value(), "15/6/1990");
        assert!(form.is_valid());
    }

    #[test]
    fn test_any_empty_field_invalidates_form() {
        for field in Field::ALL {
            let mut form = filled();
            form.set_value(field, "");
            assert!(!form.is_valid(), "form valid with {} empty", field.key());
        }
    }

    #[test]
    fn test_short_password_invalidates_form() {
        let mut form = filled();
        form.set_value(Field::Password, "1234567");
        assert!(!form.is_valid());
    }

    #[test]
    fn test_bad_email_invalidates_form() {
        let mut form = filled();
        form.set_value(Field::Email, "ada@");
        assert!(!form.is_valid());
    }

    #[test]
    fn test_value_snapshot_has_every_field() {
        let value = filled().value();
        assert_eq!(value.len(), 10);
        assert_eq!(value.get("day").map(String::as_str), Some("15"));
        assert_eq!(value.get("birthDate").map(String::as_str), Some("15/6/1990"));
    }

    #[test]
    fn test_payload_drops_date_parts() {
        let payload = filled().payload();
        let json = serde_json::to_value(&payload).unwrap_or_default();
        let object = json.as_object().cloned().unwrap_or_default();

        assert_eq!(object.len(), 7);
        for field in Field::DATE_PARTS {
            assert!(!object.contains_key(field.key()));
        }
        assert_eq!(payload.birth_date, "15/6/1990");
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        fn first(form: &mut SignUpForm) {
            form.control_mut(Field::Name).set_value("first");
        }
        fn second(form: &mut SignUpForm) {
            let seen = form.control(Field::Name).value().to_owned();
            form.control_mut(Field::Address).set_value(format!("after {seen}"));
        }

        let mut form = SignUpForm::new();
        form.subscribe(Field::Gender, first);
        form.subscribe(Field::Gender, second);
        form.set_value(Field::Gender, "other");

        assert_eq!(form.control(Field::Address).value(), "after first");
    }

    #[test]
    fn test_input_marks_touched() {
        let mut form = SignUpForm::new();
        form.input(Field::Name, "Ada");
        assert!(form.control(Field::Name).touched());
        assert!(!form.control(Field::Email).touched());
    }

    #[test]
    fn test_reset_empties_everything_and_touches_birth_date() {
        let mut form = filled();
        form.input(Field::Email, "ada@example.com");
        form.reset();

        assert!(form.value().values().all(String::is_empty));
        assert!(!form.control(Field::Email).touched());
        // The date parts re-ran the composer on the way down.
        assert!(form.control(Field::BirthDate).touched());
    }

    #[test]
    fn test_debug_redacts_password() {
        let output = format!("{:?}", filled());
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("correct horse"));
    }
}
