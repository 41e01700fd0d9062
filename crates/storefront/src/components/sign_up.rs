//! Customer sign-up component.
//!
//! Owns the sign-up form and the birth-date option lists, and turns a valid
//! submission into a registration call followed (on success) by session
//! bookkeeping, an optional pending-order attachment, and navigation to the
//! product listing.
//!
//! # Ordering
//!
//! [`SignUpComponent::submit`] spawns the registration and then resets the
//! form straight away, before the backend has answered. Everything that
//! happens after registration works from the payload and response captured
//! by the spawned task, never from the (by then empty) form.

use std::sync::Arc;

use shopfront_core::{Customer, NewCustomer};
use tokio::task::JoinHandle;
use tower_sessions::Session;

use crate::forms::{Field, SignUpForm};
use crate::middleware::{clear_pending_order, pending_order, set_current_customer};
use crate::navigation::{Navigator, PRODUCTS_ROUTE};
use crate::services::{CustomersService, DateService, MonthOption, OrdersService};

/// The collaborators a sign-up needs.
#[derive(Clone)]
pub struct SignUpServices {
    pub customers: Arc<dyn CustomersService>,
    pub orders: Arc<dyn OrdersService>,
    pub navigator: Arc<dyn Navigator>,
}

/// The sign-up form plus everything needed to submit it.
pub struct SignUpComponent {
    form: SignUpForm,
    days: Vec<String>,
    months: Vec<MonthOption>,
    years: Vec<String>,
    services: SignUpServices,
    session: Session,
}

impl SignUpComponent {
    /// Build an empty form and fill the date options.
    #[must_use]
    pub fn new(
        dates: &DateService,
        years_back: u32,
        services: SignUpServices,
        session: Session,
    ) -> Self {
        Self {
            form: SignUpForm::with_calendar(dates.calendar()),
            days: dates.days(),
            months: dates.months(),
            years: dates.years(years_back),
            services,
            session,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &SignUpForm {
        &self.form
    }

    pub const fn form_mut(&mut self) -> &mut SignUpForm {
        &mut self.form
    }

    #[must_use]
    pub fn days(&self) -> &[String] {
        &self.days
    }

    #[must_use]
    pub fn months(&self) -> &[MonthOption] {
        &self.months
    }

    #[must_use]
    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// Submit the form.
    ///
    /// An invalid form is a silent no-op and returns `None`. Otherwise the
    /// registration is spawned, the form is reset, and the handle of the
    /// in-flight task is returned. Dropping the handle does not cancel it.
    pub fn submit(&mut self) -> Option<JoinHandle<()>> {
        if !self.form.is_valid() {
            tracing::debug!("Sign-up submitted with an invalid form");
            return None;
        }

        let payload = self.form.payload();
        let task = tokio::spawn(register(
            payload,
            self.services.clone(),
            self.session.clone(),
        ));

        self.form.reset();
        self.form.control_mut(Field::BirthDate).mark_as_untouched();

        Some(task)
    }
}

/// Register the customer and follow up on success.
///
/// A failed registration is logged and otherwise dropped: nothing is stored,
/// no order is placed, and no navigation happens.
async fn register(payload: NewCustomer, services: SignUpServices, session: Session) {
    let customer = match services.customers.sign_up(&payload).await {
        Ok(customer) => customer,
        Err(e) => {
            tracing::warn!(error = %e, "Customer sign-up failed");
            return;
        }
    };

    if let Err(e) = set_current_customer(&session, &customer).await {
        tracing::error!(error = %e, customer_id = %customer.id, "Failed to store customer in session");
    }

    attach_pending_order(&customer, &services, &session).await;

    services.navigator.navigate(PRODUCTS_ROUTE);
}

/// Place the session's pending order, if there is one, for `customer`.
async fn attach_pending_order(customer: &Customer, services: &SignUpServices, session: &Session) {
    let order = match pending_order(session).await {
        Ok(Some(order)) => order,
        Ok(None) => return,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read pending order from session");
            return;
        }
    };

    match services.orders.post_order(&customer.id, &order).await {
        Ok(()) => {
            if let Err(e) = clear_pending_order(session).await {
                tracing::error!(error = %e, "Failed to clear pending order from session");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, customer_id = %customer.id, "Failed to attach pending order");
        }
    }
}
