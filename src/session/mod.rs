//! User profile persistence and the transient hub state.

mod hub;
mod profile;
mod state;

pub use hub::Hub;
pub use profile::{
    IS_PAID_KEY, LANGUAGE_KEY, Profile, REGISTERED_AT_KEY, TRIAL_HOURS, TrialStatus, USER_KEY,
};
pub use state::{DiscoveryTicket, HubState};
