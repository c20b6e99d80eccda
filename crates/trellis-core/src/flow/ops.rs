//! Synchronous field mutation and navigation for the authoring flow.
//!
//! Every operation here is refused while a submission is in flight, so the
//! draft a user confirmed is exactly the draft that gets sent.

use jiff::civil::Date;

use super::{AuthoringFlow, AuthoringStep, FlowEvent, Notice};

impl AuthoringFlow {
    /// Sets the assignee of the draft.
    pub fn set_assignee(&mut self, id: impl Into<String>) {
        if self.busy {
            return;
        }
        self.draft.assignee_id = id.into();
    }

    /// Sets the plan title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        if self.busy {
            return;
        }
        self.draft.title = title.into();
    }

    /// Sets the plan description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        if self.busy {
            return;
        }
        self.draft.description = description.into();
    }

    /// Sets the start of the plan period.
    pub fn set_start_date(&mut self, date: Date) {
        if self.busy {
            return;
        }
        self.draft.start_date = Some(date);
    }

    /// Sets the end of the plan period.
    pub fn set_end_date(&mut self, date: Date) {
        if self.busy {
            return;
        }
        self.draft.end_date = Some(date);
    }

    /// Sets the title of the milestone input buffer.
    pub fn set_milestone_title(&mut self, title: impl Into<String>) {
        if self.busy {
            return;
        }
        self.input.title = title.into();
    }

    /// Sets the description of the milestone input buffer.
    pub fn set_milestone_description(&mut self, description: impl Into<String>) {
        if self.busy {
            return;
        }
        self.input.description = description.into();
    }

    /// Sets the due date of the milestone input buffer.
    pub fn set_milestone_due_date(&mut self, date: Date) {
        if self.busy {
            return;
        }
        self.input.due_date = Some(date);
    }

    /// Moves from [`BasicInfo`](AuthoringStep::BasicInfo) to
    /// [`Milestones`](AuthoringStep::Milestones).
    ///
    /// The gate is presence-only: assignee, title, description, and both
    /// dates must be filled in, but the content rules are left to
    /// submission so a user is not nagged about lengths while still
    /// typing. On refusal an error notice is emitted and the step does
    /// not change.
    pub fn advance(&mut self) -> bool {
        if self.busy {
            return false;
        }
        if !self.draft.basic_info_complete() {
            self.notify(Notice::Error(
                "Fill in assignee, title, description, start date, and end date first".to_string(),
            ));
            return false;
        }
        self.step = AuthoringStep::Milestones;
        true
    }

    /// Moves back to [`BasicInfo`](AuthoringStep::BasicInfo). Always
    /// allowed; nothing is lost.
    pub fn back(&mut self) {
        if self.busy {
            return;
        }
        self.step = AuthoringStep::BasicInfo;
    }

    /// Appends the milestone input buffer to the draft.
    ///
    /// Requires the [`Milestones`](AuthoringStep::Milestones) step and a
    /// buffer whose title, description, and due date are all present. On
    /// success the new milestone starts out pending and the buffer is
    /// cleared for the next entry; on refusal an error notice is emitted
    /// and the buffer is left untouched.
    pub fn add_milestone(&mut self) -> bool {
        if self.busy || self.step != AuthoringStep::Milestones {
            return false;
        }
        match self.input.take_draft() {
            Some(milestone) => {
                self.draft.milestones.push(milestone);
                true
            }
            None => {
                self.notify(Notice::Error(
                    "Fill in the milestone title, description, and due date first".to_string(),
                ));
                false
            }
        }
    }

    /// Removes the milestone at `index` from the draft, keeping the order
    /// of the rest. Out-of-bounds indexes are refused.
    pub fn remove_milestone(&mut self, index: usize) -> bool {
        if self.busy || index >= self.draft.milestones.len() {
            return false;
        }
        self.draft.milestones.remove(index);
        true
    }

    /// Abandons the draft from any step.
    ///
    /// Clears the draft, the input buffer, inline errors, and the loading
    /// state, then emits [`FlowEvent::Closed`].
    pub fn cancel(&mut self) {
        self.reset();
        let _ = self.events.send(FlowEvent::Closed);
    }
}
