use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use log::{debug, error, info};
use thiserror::Error;

use crate::config;
use crate::contact::validation::{validate, ContactFields, FormField};

pub const SUCCESS_MESSAGE: &str = "Your inquiry has been sent.\n\
    Thank you for getting in touch.\n\
    A member of our team will reply within three business days.";

pub const FAILURE_MESSAGE: &str = "Sending failed.\n\
    Please check your internet connection and try again.\n\
    If the problem continues, please contact us by phone.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("network error")]
    Network,
}

/// Delivers a validated inquiry.
pub trait ContactSubmitter {
    fn submit(&self, fields: ContactFields) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Stand-in transport: waits, then fails about one time in ten.
pub struct SimulatedSubmitter {
    delay_ms: u32,
    failure_rate: f64,
    roll: Rc<dyn Fn() -> f64>,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(config::SUBMIT_DELAY_MS, config::SUBMIT_FAILURE_RATE, web_sys::js_sys::Math::random)
    }
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32, failure_rate: f64, roll: impl Fn() -> f64 + 'static) -> Self {
        Self {
            delay_ms,
            failure_rate,
            roll: Rc::new(roll),
        }
    }

    /// A roll in `[0, 1)` above the failure rate succeeds.
    pub fn outcome(&self, roll: f64) -> Result<(), SubmitError> {
        if roll > self.failure_rate {
            Ok(())
        } else {
            Err(SubmitError::Network)
        }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, fields: ContactFields) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        if let Ok(payload) = serde_json::to_string(&fields) {
            debug!("Simulating contact submission: {}", payload);
        }
        let delay_ms = self.delay_ms;
        let result = self.outcome((self.roll)());
        async move {
            TimeoutFuture::new(delay_ms).await;
            result
        }
        .boxed_local()
    }
}

/// The page-side effects of submitting the form.
pub trait FormSurface {
    /// Blocking user notification.
    fn notify(&self, message: &str);
    fn focus(&self, field: FormField);
    /// Disables the submit button and shows the sending label, or restores it.
    fn set_sending(&self, sending: bool);
    fn reset(&self);
    fn scroll_to_top(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(FormField),
    Sent,
    Failed,
}

pub async fn submit_contact<S, T>(surface: &S, submitter: &T, fields: ContactFields) -> SubmitOutcome
where
    S: FormSurface + ?Sized,
    T: ContactSubmitter + ?Sized,
{
    if let Err(invalid) = validate(&fields) {
        surface.notify(&invalid.to_string());
        surface.focus(invalid.field());
        return SubmitOutcome::Invalid(invalid.field());
    }

    surface.set_sending(true);
    let outcome = match submitter.submit(fields).await {
        Ok(()) => {
            info!("Contact form sent");
            surface.notify(SUCCESS_MESSAGE);
            surface.reset();
            surface.scroll_to_top();
            SubmitOutcome::Sent
        }
        Err(e) => {
            error!("Form submission error: {}", e);
            surface.notify(FAILURE_MESSAGE);
            SubmitOutcome::Failed
        }
    };
    surface.set_sending(false);
    outcome
}
