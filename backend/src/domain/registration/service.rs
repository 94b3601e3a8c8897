//! Registration use-case: validate, then hand the account to the directory.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use super::{FormErrors, RegistrationForm, RegistrationReceipt, RegistrationSubmission, validate_form};
use crate::domain::ports::{UserDirectory, UserDirectoryError};

/// Result of a registration attempt that reached the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The form failed validation; nothing was sent upstream.
    Rejected(FormErrors),
    /// The directory stored the new account.
    Accepted(RegistrationReceipt),
}

/// Registration flow backed by a [`UserDirectory`].
#[derive(Clone)]
pub struct RegistrationService {
    directory: Arc<dyn UserDirectory>,
    clock: Arc<dyn Clock>,
}

impl RegistrationService {
    pub fn new(directory: Arc<dyn UserDirectory>, clock: Arc<dyn Clock>) -> Self {
        Self { directory, clock }
    }

    /// Validate `form` against the clock's current date without submitting.
    pub fn check(&self, form: &RegistrationForm) -> FormErrors {
        validate_form(form, self.clock.utc().date_naive())
    }

    /// Validate `form` and, when it passes, submit it to the directory.
    ///
    /// # Errors
    ///
    /// Returns the directory error when submission fails. Validation
    /// failures are not errors; they come back as
    /// [`RegistrationOutcome::Rejected`].
    pub async fn submit(
        &self,
        form: &RegistrationForm,
    ) -> Result<RegistrationOutcome, UserDirectoryError> {
        let errors = self.check(form);
        if !errors.is_empty() {
            debug!(
                invalid_fields = errors.len(),
                first_invalid = ?errors.first_invalid_field(),
                "registration rejected by validation"
            );
            return Ok(RegistrationOutcome::Rejected(errors));
        }

        let submission = RegistrationSubmission::from_form(form, self.clock.utc());
        let receipt = self.directory.register(&submission).await?;
        info!(user_id = %receipt.user_id, "registration accepted");
        Ok(RegistrationOutcome::Accepted(receipt))
    }
}
