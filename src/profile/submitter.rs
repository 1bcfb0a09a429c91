use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::session::User;

use super::form::ProfileFormData;
use super::messages::{Locale, Messages};
use super::payload::UpdatePayload;
use super::rules::{self, ValidationErrors};

/// Remote "update profile" operation.
#[allow(async_fn_in_trait)]
pub trait ProfileUpdater {
    async fn update_profile(&self, payload: &UpdatePayload) -> AppResult<User>;
}

/// Holder of the signed-in user. Replacement is wholesale.
pub trait Session {
    fn current_user(&self) -> AppResult<Option<User>>;
    fn replace_user(&self, user: User) -> AppResult<()>;
}

pub trait Navigator {
    fn go_back(&self);
}

pub trait Notifier {
    fn show_message(&self, title: &str, body: &str);
}

impl<T: ProfileUpdater + ?Sized> ProfileUpdater for &T {
    async fn update_profile(&self, payload: &UpdatePayload) -> AppResult<User> {
        (**self).update_profile(payload).await
    }
}

impl<T: Session + ?Sized> Session for &T {
    fn current_user(&self) -> AppResult<Option<User>> {
        (**self).current_user()
    }

    fn replace_user(&self, user: User) -> AppResult<()> {
        (**self).replace_user(user)
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn go_back(&self) {
        (**self).go_back();
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn show_message(&self, title: &str, body: &str) {
        (**self).show_message(title, body);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server accepted the payload and the session now holds this user.
    Updated(User),
    /// The form failed validation; nothing was sent.
    Rejected(ValidationErrors),
    /// The update call failed; the session is untouched.
    Failed,
    /// Another submission is still outstanding.
    Busy,
}

pub struct ProfileSubmitter<U, S, G, N> {
    updater: U,
    session: S,
    navigator: G,
    notifier: N,
    messages: &'static Messages,
    in_flight: AtomicBool,
}

impl<U, S, G, N> ProfileSubmitter<U, S, G, N>
where
    U: ProfileUpdater,
    S: Session,
    G: Navigator,
    N: Notifier,
{
    pub fn new(updater: U, session: S, navigator: G, notifier: N, locale: Locale) -> Self {
        Self {
            updater,
            session,
            navigator,
            notifier,
            messages: locale.messages(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// A form holding the session user's name and email, or an empty form
    /// when nobody is signed in.
    pub fn prefilled_form(&self) -> AppResult<ProfileFormData> {
        Ok(self
            .session
            .current_user()?
            .map(|user| ProfileFormData::prefilled(&user))
            .unwrap_or_default())
    }

    pub async fn submit(&self, form: &ProfileFormData) -> AppResult<SubmitOutcome> {
        let Some(_guard) = self.begin() else {
            debug!("profile submission ignored, another one is outstanding");
            return Ok(SubmitOutcome::Busy);
        };

        let valid = match rules::validate(form, self.messages) {
            Ok(valid) => valid,
            Err(errors) => {
                debug!(fields = errors.len(), "profile form rejected");
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        let payload = UpdatePayload::from_valid(&valid);
        debug!(
            changes_password = payload.changes_password(),
            "sending profile update"
        );

        let user = match self.updater.update_profile(&payload).await {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "profile update failed");
                self.notifier
                    .show_message(self.messages.failed_title, self.messages.failed_body);
                return Ok(SubmitOutcome::Failed);
            }
        };

        self.session.replace_user(user.clone())?;
        info!(user = %user.id, "profile updated");

        self.notifier
            .show_message(self.messages.updated_title, self.messages.updated_body);
        self.navigator.go_back();

        Ok(SubmitOutcome::Updated(user))
    }

    /// Explicit back action, independent of any submission.
    pub fn go_back(&self) {
        self.navigator.go_back();
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
