//! The assignee fetch and the composite submission.

use super::{AuthoringFlow, FlowEvent, Notice, SubmitOutcome};
use crate::error::Result;
use crate::models::CreatePlanPayload;
use crate::validate;

impl AuthoringFlow {
    /// Fetches the people the owner may assign a plan to.
    ///
    /// A failed fetch is recorded as an inline error (readable via
    /// [`assignee_error`](Self::assignee_error)) and surfaced as an error
    /// notice. The flow itself stays open either way; the user can keep
    /// editing and the host may call `open` again to retry.
    pub async fn open(&mut self) {
        match self.api.list_eligible_assignees(&self.owner.id).await {
            Ok(people) => {
                self.assignees = people;
                self.assignee_error = None;
            }
            Err(error) => {
                let message = format!("Could not load assignees: {error}");
                self.assignee_error = Some(message.clone());
                self.notify(Notice::Error(message));
            }
        }
    }

    /// Validates the draft and submits it as one composite create call.
    ///
    /// The whole draft travels together: the plan fields and every
    /// milestone go out in a single request, so a plan can never exist
    /// half-created on the backend.
    ///
    /// 1. The full rule set runs first. Any violation emits one error
    ///    notice each and returns [`SubmitOutcome::Blocked`] without
    ///    touching the network.
    /// 2. While the call is in flight the flow is busy; mutation and
    ///    navigation are refused.
    /// 3. On success a success notice is emitted, the flow lingers briefly
    ///    so a watching user sees it, then resets to its initial empty
    ///    state and emits [`FlowEvent::Closed`].
    /// 4. On failure a generic error notice is emitted and the draft is
    ///    left intact so the user may fix things and retry.
    ///
    /// # Errors
    ///
    /// Returns the underlying API or network error when the create call
    /// fails. The notice has already been emitted at that point; callers
    /// use the error for their exit status, not for user output.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let violations = validate::validate_complete(&self.draft);
        if !violations.is_empty() {
            for violation in &violations {
                self.notify(Notice::Error(violation.message.clone()));
            }
            return Ok(SubmitOutcome::Blocked(violations));
        }

        let payload = CreatePlanPayload::from_draft(&self.draft, &self.owner.id)?;
        self.busy = true;

        match self.api.create_plan(&payload).await {
            Ok(plan) => {
                self.notify(Notice::Success("Development plan created".to_string()));
                tokio::time::sleep(self.success_linger).await;
                self.reset();
                let _ = self.events.send(FlowEvent::Closed);
                Ok(SubmitOutcome::Created(plan))
            }
            Err(error) => {
                self.notify(Notice::Error(
                    "Could not create the plan. Please try again.".to_string(),
                ));
                self.busy = false;
                Err(error)
            }
        }
    }
}
