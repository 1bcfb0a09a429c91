pub mod form;
pub mod messages;
pub mod payload;
pub mod rules;
pub mod submitter;

pub use form::ProfileFormData;
pub use messages::{Locale, Messages};
pub use payload::UpdatePayload;
pub use rules::{Field, ValidProfile, ValidationErrors, validate};
pub use submitter::{
    Navigator, Notifier, ProfileSubmitter, ProfileUpdater, Session, SubmitOutcome,
};
