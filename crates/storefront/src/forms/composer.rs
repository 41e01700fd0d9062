//! Keeps the birth date in step with the day/month/year selections.

use super::{Field, SignUpForm};

/// Recompute the birth date from the current date parts.
///
/// Subscribed to day, month and year, so it runs on every change to any of
/// them. A complete, calendar-valid triple yields `D/M/YYYY` built from the
/// raw selections; anything else (including partial input) clears the birth
/// date. Either way the birth date is marked touched so its validation
/// message can show before the user reaches it.
pub fn compose_birth_date(form: &mut SignUpForm) {
    let composed = form
        .date_parts()
        .compose_with(form.calendar())
        .unwrap_or_default();

    let birth_date = form.control_mut(Field::BirthDate);
    birth_date.set_value(composed);
    birth_date.mark_as_touched();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_date(day: &str, month: &str, year: &str) -> SignUpForm {
        let mut form = SignUpForm::new();
        form.set_value(Field::Day, day);
        form.set_value(Field::Month, month);
        form.set_value(Field::Year, year);
        form
    }

    #[test]
    fn test_valid_date_sets_birth_date() {
        let form = with_date("15", "6", "1990");
        let birth_date = form.control(Field::BirthDate);
        assert_eq!(birth_date.value(), "15/6/1990");
        assert!(birth_date.touched());
        assert!(birth_date.is_valid());
    }

    #[test]
    fn test_invalid_date_clears_birth_date() {
        let form = with_date("31", "2", "2021");
        let birth_date = form.control(Field::BirthDate);
        assert_eq!(birth_date.value(), "");
        assert!(birth_date.touched());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_partial_input_clears_stale_value() {
        let mut form = with_date("15", "6", "1990");
        assert_eq!(form.control(Field::BirthDate).value(), "15/6/1990");

        form.set_value(Field::Year, "");
        assert_eq!(form.control(Field::BirthDate).value(), "");
        assert!(form.control(Field::BirthDate).touched());
    }

    #[test]
    fn test_each_part_change_recomputes() {
        let mut form = SignUpForm::new();

        form.set_value(Field::Day, "29");
        assert_eq!(form.control(Field::BirthDate).value(), "");
        assert!(form.control(Field::BirthDate).touched());

        form.set_value(Field::Month, "2");
        form.set_value(Field::Year, "2024");
        assert_eq!(form.control(Field::BirthDate).value(), "29/2/2024");

        form.set_value(Field::Year, "2023");
        assert_eq!(form.control(Field::BirthDate).value(), "");

        form.set_value(Field::Day, "28");
        assert_eq!(form.control(Field::BirthDate).value(), "28/2/2023");
    }

    #[test]
    fn test_uses_the_forms_calendar_check() {
        fn accept_everything(_: u32, _: u32, _: i32) -> bool {
            true
        }

        let mut form = SignUpForm::with_calendar(accept_everything);
        form.set_value(Field::Day, "31");
        form.set_value(Field::Month, "2");
        form.set_value(Field::Year, "2021");
        assert_eq!(form.control(Field::BirthDate).value(), "31/2/2021");
    }

    #[test]
    fn test_other_fields_do_not_touch_birth_date() {
        let mut form = SignUpForm::new();
        form.set_value(Field::Name, "Ada");
        assert!(!form.control(Field::BirthDate).touched());
    }
}
