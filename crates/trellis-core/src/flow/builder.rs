//! Builder pattern implementation for creating authoring flows.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::{AuthoringFlow, FlowEvent};
use crate::api::ApiClient;
use crate::error::{Result, TrellisError};
use crate::models::Person;

/// How long a successful submission lingers before the flow resets, so a
/// watching user sees the confirmation.
const DEFAULT_SUCCESS_LINGER: Duration = Duration::from_millis(1500);

/// Builder for creating [`AuthoringFlow`] instances.
///
/// The acting manager and an API client are required; the success linger
/// has a default suited to interactive hosts and can be shortened to
/// [`Duration::ZERO`] where nobody is watching.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use trellis_core::api::MockApiClient;
/// use trellis_core::flow::FlowBuilder;
/// use trellis_core::models::{Person, Role};
///
/// # fn example() -> Result<(), trellis_core::TrellisError> {
/// let owner = Person {
///     id: "7".to_string(),
///     name: "Dana Mercer".to_string(),
///     email: "dana@example.com".to_string(),
///     role: Role::Manager,
///     department: "Engineering".to_string(),
/// };
/// let (flow, events) = FlowBuilder::new()
///     .with_owner(owner)
///     .with_api(Arc::new(MockApiClient::new()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct FlowBuilder {
    owner: Option<Person>,
    api: Option<Arc<dyn ApiClient>>,
    success_linger: Duration,
}

impl FlowBuilder {
    /// Creates a new flow builder.
    pub fn new() -> Self {
        Self {
            owner: None,
            api: None,
            success_linger: DEFAULT_SUCCESS_LINGER,
        }
    }

    /// Sets the acting manager the flow authors plans for.
    ///
    /// Hosts typically obtain this from
    /// [`ApiClient::resolve_current_user`].
    pub fn with_owner(mut self, owner: Person) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Sets the API client used for the assignee fetch and the submission.
    pub fn with_api(mut self, api: Arc<dyn ApiClient>) -> Self {
        self.api = Some(api);
        self
    }

    /// Overrides the post-success pause.
    pub fn with_success_linger(mut self, linger: Duration) -> Self {
        self.success_linger = linger;
        self
    }

    /// Builds the flow together with the receiving end of its event
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError::InvalidInput` when the owner or the API
    /// client was not provided.
    pub fn build(self) -> Result<(AuthoringFlow, mpsc::UnboundedReceiver<FlowEvent>)> {
        let owner = self.owner.ok_or_else(|| {
            TrellisError::invalid_input("owner")
                .with_reason("An authoring flow needs the acting manager")
        })?;
        let api = self.api.ok_or_else(|| {
            TrellisError::invalid_input("api").with_reason("An authoring flow needs an API client")
        })?;

        let (events, receiver) = mpsc::unbounded_channel();
        let flow = AuthoringFlow::new(owner, api, events, self.success_linger);
        Ok((flow, receiver))
    }
}

impl Default for FlowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
