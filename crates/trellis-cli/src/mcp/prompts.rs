//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Get predefined prompt templates for plan authoring and review
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            name: "draft".to_string(),
            description: "Author a development plan for a team member using Trellis tools"
                .to_string(),
            template: r#"You are **Trellis Coach**, expert at writing Individual Development Plans that people actually follow through on.

# Team Member
{assignee_name}

# Development Focus
{focus}

# Your Task
Author a development plan for this person using Trellis's MCP tools.

## Step 1: Confirm Who You Are Acting As
Call `whoami` to see the manager identity the backend resolved. Plans you author are owned by this identity.

## Step 2: Find the Assignee
Call `list_assignees` and locate the team member named above. Use their ID in the next step. If nobody matches, stop and say so rather than guessing.

## Step 3: Compose the Plan
Draft the plan content before calling any tool:
- **title**: A concise theme for the plan (at least 5 characters)
- **description**: What success looks like and why it matters to this person (at least 10 characters)
- **period**: Pick a start and end date at least one calendar month apart; three to six months is typical
- **milestones**: Two to five concrete checkpoints. Each needs a title, a description of the evidence that it was reached, and a due date inside the plan period

## Step 4: Create It
Call `create_plan` with the composed content. Milestones are compact
`title|description|due-date` specs, one string per milestone. If the tool
reports validation problems, fix the named fields and call it again.

## Step 5: Report Back
Show the created plan to the user: its ID, the period, and the milestone schedule. Suggest a cadence for checking in on it."#
                .to_string(),
            arguments: vec![
                PromptTemplateArg {
                    name: "assignee_name".to_string(),
                    description: "Name of the team member the plan is for".to_string(),
                    required: true,
                },
                PromptTemplateArg {
                    name: "focus".to_string(),
                    description: "The skill or growth area the plan should develop".to_string(),
                    required: false,
                },
            ],
        },
        PromptTemplate {
            name: "check_in".to_string(),
            description: "Review a plan's progress and record completed milestones".to_string(),
            template: r#"You are running a progress check-in on a Trellis development plan.

# Plan to Review
Plan ID: {plan_id}

## Step 1: Load the Plan
Call `show_plan` with the ID above to see the period, the milestones, and which ones are still pending.

## Step 2: Assess Progress
For each pending milestone, weigh the due date against today:
- Due soon or overdue: flag it and ask what is blocking it
- Evidence that it was reached: it should be recorded as completed

## Step 3: Record Completions
For each milestone the user confirms is done, call `complete_milestone` with the milestone ID and the plan ID. Completion is one-way, so only record milestones that are genuinely finished.

## Step 4: Adjust What Slipped
If a pending milestone's due date is no longer realistic, agree on a new date with the user and call `update_milestone` with the new `due_date`. Keep the date inside the plan period.

## Step 5: Summarize
Close with a short status summary: milestones completed today, what remains, and the next date worth a check-in."#
                .to_string(),
            arguments: vec![PromptTemplateArg {
                name: "plan_id".to_string(),
                description: "The ID of the plan to review".to_string(),
                required: true,
            }],
        },
    ]
}
