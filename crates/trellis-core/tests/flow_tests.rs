use std::sync::Arc;
use std::time::Duration;

use jiff::civil::date;
use tokio::sync::mpsc;
use trellis_core::{
    AuthoringFlow, AuthoringStep, FlowBuilder, FlowEvent, MilestoneStatus, MockApiClient, Notice,
    Person, PlanStatus, Role, SubmitOutcome,
};

/// Helper function to create the acting manager
fn manager() -> Person {
    Person {
        id: "7".to_string(),
        name: "Dana Mercer".to_string(),
        email: "dana@example.com".to_string(),
        role: Role::Manager,
        department: "Engineering".to_string(),
    }
}

/// Helper function to create an eligible assignee
fn contributor(id: &str, name: &str) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        role: Role::Contributor,
        department: "Engineering".to_string(),
    }
}

/// Helper function to build a flow with a zero linger so tests never sleep
fn build_flow(
    api: Arc<MockApiClient>,
) -> (AuthoringFlow, mpsc::UnboundedReceiver<FlowEvent>) {
    FlowBuilder::new()
        .with_owner(manager())
        .with_api(api)
        .with_success_linger(Duration::ZERO)
        .build()
        .expect("Failed to build flow")
}

fn fill_basic_info(flow: &mut AuthoringFlow) {
    flow.set_assignee("42");
    flow.set_title("Leadership Growth");
    flow.set_description("Build leadership skills over two quarters");
    flow.set_start_date(date(2025, 1, 1));
    flow.set_end_date(date(2025, 7, 1));
}

fn drain(events: &mut mpsc::UnboundedReceiver<FlowEvent>) -> Vec<FlowEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}

#[tokio::test]
async fn test_complete_authoring_workflow() {
    let api = Arc::new(
        MockApiClient::new().with_assignees(vec![
            contributor("42", "Riley Chen"),
            contributor("43", "Sam Ortiz"),
        ]),
    );
    let (mut flow, mut events) = build_flow(Arc::clone(&api));

    // Opening the flow loads the eligible assignees
    flow.open().await;
    assert_eq!(flow.assignees().len(), 2);
    assert!(flow.assignee_error().is_none());

    // Fill in the basic info and move on to milestones
    fill_basic_info(&mut flow);
    assert!(flow.advance());
    assert_eq!(flow.step(), AuthoringStep::Milestones);

    // Add two milestones through the input buffer
    flow.set_milestone_title("Finish course");
    flow.set_milestone_description("Complete the management course");
    flow.set_milestone_due_date(date(2025, 2, 1));
    assert!(flow.add_milestone());

    flow.set_milestone_title("Mentor a junior");
    flow.set_milestone_description("Run weekly mentoring sessions");
    flow.set_milestone_due_date(date(2025, 5, 1));
    assert!(flow.add_milestone());

    assert_eq!(flow.draft().milestones.len(), 2);

    // Submit the draft
    let outcome = flow.submit().await.expect("Submission should succeed");
    let SubmitOutcome::Created(plan) = outcome else {
        panic!("Expected a created plan, got {outcome:?}");
    };

    // Exactly one composite request carried the plan and both milestones
    assert_eq!(api.create_calls(), 1);
    let payload = &api.recorded_creates()[0];
    assert_eq!(payload.title, "Leadership Growth");
    assert_eq!(payload.owner_id, "7");
    assert_eq!(payload.assignee_id, "42");
    assert_eq!(payload.status, PlanStatus::Active);
    assert_eq!(payload.start_date, date(2025, 1, 1));
    assert_eq!(payload.end_date, date(2025, 7, 1));
    assert_eq!(payload.milestones.len(), 2);
    assert_eq!(payload.milestones[0].title, "Finish course");
    assert_eq!(payload.milestones[1].title, "Mentor a junior");
    assert!(payload
        .milestones
        .iter()
        .all(|m| m.status == MilestoneStatus::Pending));

    // The returned plan carries server-assigned ids
    assert_eq!(plan.id, "plan-1");
    assert_eq!(plan.milestones.len(), 2);
    assert_eq!(plan.milestones[0].id, "plan-1-m1");

    // The flow announced the success and closed itself
    assert_eq!(
        drain(&mut events),
        vec![
            FlowEvent::Notice(Notice::Success("Development plan created".to_string())),
            FlowEvent::Closed,
        ]
    );

    // The flow is back in its initial empty state, assignees kept
    assert_eq!(flow.step(), AuthoringStep::BasicInfo);
    assert!(flow.draft().title.is_empty());
    assert!(flow.draft().milestones.is_empty());
    assert!(!flow.is_busy());
    assert_eq!(flow.assignees().len(), 2);
}

#[tokio::test]
async fn test_short_period_blocks_submission_without_network() {
    let api = Arc::new(MockApiClient::new());
    let (mut flow, mut events) = build_flow(Arc::clone(&api));

    // A two-week period is below the one-calendar-month minimum
    fill_basic_info(&mut flow);
    flow.set_end_date(date(2025, 1, 15));
    assert!(flow.advance());

    flow.set_milestone_title("Finish course");
    flow.set_milestone_description("Complete the management course");
    flow.set_milestone_due_date(date(2025, 1, 10));
    assert!(flow.add_milestone());

    let outcome = flow.submit().await.expect("Blocked submission is not an error");
    let SubmitOutcome::Blocked(violations) = outcome else {
        panic!("Expected a blocked submission, got {outcome:?}");
    };

    assert!(
        violations
            .iter()
            .any(|v| v.message.contains("at least one calendar month")),
        "Expected a duration violation, got {violations:?}"
    );
    assert_eq!(api.create_calls(), 0);

    // Each violation surfaced as one error notice
    let emitted = drain(&mut events);
    assert_eq!(emitted.len(), violations.len());
    assert!(emitted
        .iter()
        .all(|e| matches!(e, FlowEvent::Notice(Notice::Error(_)))));

    // The draft survived for fixing
    assert_eq!(flow.draft().title, "Leadership Growth");
    assert!(!flow.is_busy());
}

#[tokio::test]
async fn test_out_of_range_due_date_blocks_submission() {
    let api = Arc::new(MockApiClient::new());
    let (mut flow, _events) = build_flow(Arc::clone(&api));

    fill_basic_info(&mut flow);
    assert!(flow.advance());

    // Due date after the plan period ends
    flow.set_milestone_title("Finish course");
    flow.set_milestone_description("Complete the management course");
    flow.set_milestone_due_date(date(2025, 8, 1));
    assert!(flow.add_milestone());

    let outcome = flow.submit().await.expect("Blocked submission is not an error");
    let SubmitOutcome::Blocked(violations) = outcome else {
        panic!("Expected a blocked submission, got {outcome:?}");
    };

    assert!(
        violations
            .iter()
            .any(|v| v.message.contains("within the plan period")),
        "Expected a date-range violation, got {violations:?}"
    );
    assert_eq!(api.create_calls(), 0);
}

#[tokio::test]
async fn test_empty_milestone_list_blocks_submission() {
    let api = Arc::new(MockApiClient::new());
    let (mut flow, _events) = build_flow(Arc::clone(&api));

    fill_basic_info(&mut flow);
    assert!(flow.advance());

    // No milestones were added
    let outcome = flow.submit().await.expect("Blocked submission is not an error");
    let SubmitOutcome::Blocked(violations) = outcome else {
        panic!("Expected a blocked submission, got {outcome:?}");
    };

    assert!(
        violations
            .iter()
            .any(|v| v.message.contains("at least one milestone")),
        "Expected a milestone-list violation, got {violations:?}"
    );
    assert_eq!(api.create_calls(), 0);
}

#[tokio::test]
async fn test_failed_submission_keeps_the_draft() {
    let api = Arc::new(MockApiClient::new().with_create_failure("Scripted create failure"));
    let (mut flow, mut events) = build_flow(Arc::clone(&api));

    fill_basic_info(&mut flow);
    assert!(flow.advance());
    flow.set_milestone_title("Finish course");
    flow.set_milestone_description("Complete the management course");
    flow.set_milestone_due_date(date(2025, 2, 1));
    assert!(flow.add_milestone());

    let result = flow.submit().await;
    assert!(result.is_err(), "The scripted failure should surface");
    assert_eq!(api.create_calls(), 1);

    // The draft is intact so the user can retry
    assert_eq!(flow.draft().title, "Leadership Growth");
    assert_eq!(flow.draft().milestones.len(), 1);
    assert_eq!(flow.step(), AuthoringStep::Milestones);
    assert!(!flow.is_busy());

    assert_eq!(
        drain(&mut events),
        vec![FlowEvent::Notice(Notice::Error(
            "Could not create the plan. Please try again.".to_string()
        ))]
    );
}

#[tokio::test]
async fn test_assignee_fetch_failure_leaves_the_flow_usable() {
    let api = Arc::new(MockApiClient::new().with_assignee_failure("directory offline"));
    let (mut flow, mut events) = build_flow(Arc::clone(&api));

    flow.open().await;

    // The failure is recorded inline and surfaced as a notice
    let inline = flow.assignee_error().expect("Expected an inline error");
    assert!(inline.contains("directory offline"));
    assert!(flow.assignees().is_empty());

    let emitted = drain(&mut events);
    assert_eq!(emitted.len(), 1);
    assert!(matches!(&emitted[0], FlowEvent::Notice(Notice::Error(m)) if m.contains("directory offline")));

    // The flow itself stays open for editing
    fill_basic_info(&mut flow);
    assert!(flow.advance());
}

#[tokio::test]
async fn test_flow_authors_a_second_plan_after_success() {
    let api = Arc::new(
        MockApiClient::new().with_assignees(vec![contributor("42", "Riley Chen")]),
    );
    let (mut flow, mut events) = build_flow(Arc::clone(&api));
    flow.open().await;

    // First plan
    fill_basic_info(&mut flow);
    assert!(flow.advance());
    flow.set_milestone_title("Finish course");
    flow.set_milestone_description("Complete the management course");
    flow.set_milestone_due_date(date(2025, 2, 1));
    assert!(flow.add_milestone());
    flow.submit().await.expect("First submission should succeed");
    drain(&mut events);

    // The reset flow authors a second plan without reopening
    assert_eq!(flow.assignees().len(), 1);
    flow.set_assignee("42");
    flow.set_title("Public Speaking");
    flow.set_description("Present at three internal events");
    flow.set_start_date(date(2025, 3, 1));
    flow.set_end_date(date(2025, 9, 1));
    assert!(flow.advance());
    flow.set_milestone_title("First talk");
    flow.set_milestone_description("Deliver the kickoff presentation");
    flow.set_milestone_due_date(date(2025, 4, 15));
    assert!(flow.add_milestone());

    let outcome = flow.submit().await.expect("Second submission should succeed");
    let SubmitOutcome::Created(plan) = outcome else {
        panic!("Expected a created plan, got {outcome:?}");
    };

    assert_eq!(api.create_calls(), 2);
    assert_eq!(plan.id, "plan-2");
    assert_eq!(api.recorded_creates()[1].title, "Public Speaking");
}
