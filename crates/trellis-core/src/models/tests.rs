#[cfg(test)]
mod model_tests {
    use jiff::civil::date;
    use jiff::Timestamp;

    use crate::models::{
        CreatePlanPayload, Milestone, MilestoneDraft, MilestoneInput, MilestoneStatus,
        MilestoneUpdate, Person, Plan, PlanDraft, PlanFilter, PlanStatus, PlanSummary, Role,
    };

    fn create_test_milestone(id: &str, status: MilestoneStatus) -> Milestone {
        Milestone {
            id: id.to_string(),
            plan_id: "plan-1".to_string(),
            title: "Finish course".to_string(),
            description: "Complete the management course".to_string(),
            due_date: date(2025, 2, 1),
            status,
            created_at: Timestamp::from_second(1735689600).unwrap(), // 2025-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1735776000).unwrap(), // 2025-01-02 00:00:00 UTC
        }
    }

    fn create_test_plan() -> Plan {
        Plan {
            id: "plan-1".to_string(),
            title: "Leadership Growth".to_string(),
            description: "Build leadership skills over two quarters".to_string(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 7, 1),
            owner_id: "7".to_string(),
            assignee_id: "42".to_string(),
            status: PlanStatus::Active,
            milestones: vec![
                create_test_milestone("m-1", MilestoneStatus::Completed),
                create_test_milestone("m-2", MilestoneStatus::Pending),
                create_test_milestone("m-3", MilestoneStatus::Pending),
            ],
            created_at: Timestamp::from_second(1735689600).unwrap(),
            updated_at: Timestamp::from_second(1735776000).unwrap(),
        }
    }

    fn create_filled_draft() -> PlanDraft {
        PlanDraft {
            assignee_id: "42".to_string(),
            title: "Leadership Growth".to_string(),
            description: "Build leadership skills over two quarters".to_string(),
            start_date: Some(date(2025, 1, 1)),
            end_date: Some(date(2025, 7, 1)),
            milestones: vec![MilestoneDraft::new(
                "Finish course",
                "Complete the management course",
                date(2025, 2, 1),
            )],
        }
    }

    #[test]
    fn test_milestone_status_with_icon() {
        assert_eq!(MilestoneStatus::Completed.with_icon(), "✓ Completed");
        assert_eq!(MilestoneStatus::Pending.with_icon(), "○ Pending");
    }

    #[test]
    fn test_milestone_status_from_str() {
        assert_eq!(
            "pending".parse::<MilestoneStatus>(),
            Ok(MilestoneStatus::Pending)
        );
        assert_eq!(
            "Completed".parse::<MilestoneStatus>(),
            Ok(MilestoneStatus::Completed)
        );
        assert_eq!(
            "complete".parse::<MilestoneStatus>(),
            Ok(MilestoneStatus::Completed)
        );
        assert!("done".parse::<MilestoneStatus>().is_err());
    }

    #[test]
    fn test_milestone_status_default_is_pending() {
        assert_eq!(MilestoneStatus::default(), MilestoneStatus::Pending);
    }

    #[test]
    fn test_plan_status_from_str() {
        assert_eq!("active".parse::<PlanStatus>(), Ok(PlanStatus::Active));
        assert_eq!("COMPLETED".parse::<PlanStatus>(), Ok(PlanStatus::Completed));
        assert!("archived".parse::<PlanStatus>().is_err());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("contributor".parse::<Role>(), Ok(Role::Contributor));
        assert_eq!("Manager".parse::<Role>(), Ok(Role::Manager));
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert!("intern".parse::<Role>().is_err());
    }

    #[test]
    fn test_person_serde_round_trip() {
        let person = Person {
            id: "42".to_string(),
            name: "Ana Souza".to_string(),
            email: "ana.souza@example.com".to_string(),
            role: Role::Contributor,
            department: "Engineering".to_string(),
        };

        let json = serde_json::to_string(&person).unwrap();
        assert!(json.contains("\"role\":\"contributor\""));

        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back, person);
    }

    #[test]
    fn test_plan_deserializes_without_milestones() {
        // List endpoints omit the milestone list entirely
        let json = r#"{
            "id": "plan-9",
            "title": "Quarterly Objectives",
            "description": "Grow into the tech lead role",
            "start_date": "2025-01-01",
            "end_date": "2025-04-01",
            "owner_id": "7",
            "assignee_id": "42",
            "status": "active",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;

        let plan: Plan = serde_json::from_str(json).unwrap();
        assert!(plan.milestones.is_empty());
        assert_eq!(plan.start_date, date(2025, 1, 1));
    }

    #[test]
    fn test_plan_milestone_lookup() {
        let plan = create_test_plan();
        assert!(plan.milestone("m-2").is_some());
        assert!(plan.milestone("m-9").is_none());
    }

    #[test]
    fn test_draft_basic_info_complete() {
        let draft = create_filled_draft();
        assert!(draft.basic_info_complete());
    }

    #[test]
    fn test_draft_basic_info_incomplete_when_blank() {
        let mut draft = create_filled_draft();
        draft.title = "   ".to_string();
        assert!(!draft.basic_info_complete());

        let mut draft = create_filled_draft();
        draft.end_date = None;
        assert!(!draft.basic_info_complete());

        assert!(!PlanDraft::default().basic_info_complete());
    }

    #[test]
    fn test_draft_reset_clears_everything() {
        let mut draft = create_filled_draft();
        draft.reset();
        assert_eq!(draft, PlanDraft::default());
        assert!(draft.assignee_id.is_empty());
        assert!(draft.milestones.is_empty());
    }

    #[test]
    fn test_milestone_input_take_draft() {
        let mut input = MilestoneInput {
            title: "Finish course".to_string(),
            description: "Complete the management course".to_string(),
            due_date: Some(date(2025, 2, 1)),
        };

        let milestone = input.take_draft().unwrap();
        assert_eq!(milestone.title, "Finish course");
        assert_eq!(milestone.status, MilestoneStatus::Pending);
        assert_eq!(milestone.due_date, Some(date(2025, 2, 1)));

        // Buffer is cleared after a successful take
        assert_eq!(input, MilestoneInput::default());
    }

    #[test]
    fn test_milestone_input_take_draft_incomplete_leaves_buffer() {
        let mut input = MilestoneInput {
            title: "Finish course".to_string(),
            description: String::new(),
            due_date: Some(date(2025, 2, 1)),
        };

        assert!(input.take_draft().is_none());
        assert_eq!(input.title, "Finish course");
        assert_eq!(input.due_date, Some(date(2025, 2, 1)));
    }

    #[test]
    fn test_plan_summary_from_plan_trait() {
        let plan = create_test_plan();
        let summary = PlanSummary::from(&plan);

        assert_eq!(summary.id, plan.id);
        assert_eq!(summary.title, plan.title);
        assert_eq!(summary.assignee_id, plan.assignee_id);
        assert_eq!(summary.status, plan.status);
        assert_eq!(summary.start_date, plan.start_date);
        assert_eq!(summary.end_date, plan.end_date);

        // The test plan has 3 milestones, one of them completed
        assert_eq!(summary.total_milestones, 3);
        assert_eq!(summary.completed_milestones, 1);
    }

    #[test]
    fn test_plan_summary_from_plan_trait_empty_milestones() {
        let mut plan = create_test_plan();
        plan.milestones.clear();
        let summary = PlanSummary::from(&plan);

        assert_eq!(summary.total_milestones, 0);
        assert_eq!(summary.completed_milestones, 0);
    }

    #[test]
    fn test_create_plan_payload_from_draft() {
        let draft = create_filled_draft();
        let payload = CreatePlanPayload::from_draft(&draft, "7").unwrap();

        assert_eq!(payload.title, "Leadership Growth");
        assert_eq!(payload.owner_id, "7");
        assert_eq!(payload.assignee_id, "42");
        assert_eq!(payload.status, PlanStatus::Active);
        assert_eq!(payload.milestones.len(), 1);
        assert_eq!(payload.milestones[0].title, "Finish course");
        assert_eq!(payload.milestones[0].status, MilestoneStatus::Pending);
    }

    #[test]
    fn test_create_plan_payload_from_draft_missing_dates() {
        let mut draft = create_filled_draft();
        draft.start_date = None;

        let result = CreatePlanPayload::from_draft(&draft, "7");
        match result.unwrap_err() {
            crate::TrellisError::InvalidInput { field, .. } => {
                assert_eq!(field, "start_date");
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_plan_payload_embeds_milestone_dates() {
        let mut draft = create_filled_draft();
        draft.milestones[0].due_date = None;

        let result = CreatePlanPayload::from_draft(&draft, "7");
        assert!(result.is_err());
    }

    #[test]
    fn test_milestone_update_is_empty() {
        assert!(MilestoneUpdate::default().is_empty());

        let update = MilestoneUpdate {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_milestone_update_serializes_only_set_fields() {
        let update = MilestoneUpdate {
            status: Some(MilestoneStatus::Completed),
            ..Default::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, "{\"status\":\"completed\"}");
    }

    #[test]
    fn test_plan_filter_for_owner() {
        let filter = PlanFilter::for_owner("7");
        assert_eq!(filter.owner, Some("7".to_string()));
        assert_eq!(filter.assignee, None);
        assert_eq!(filter.status, None);
    }

    #[test]
    fn test_plan_filter_from_list_plans() {
        use crate::params::ListPlans;

        let params = ListPlans {
            assignee: Some("42".to_string()),
            status: Some("active".to_string()),
            mine: false,
        };
        let filter = PlanFilter::try_from(&params).unwrap();

        assert_eq!(filter.assignee, Some("42".to_string()));
        assert_eq!(filter.status, Some(PlanStatus::Active));
        assert_eq!(filter.owner, None);
    }

    #[test]
    fn test_plan_filter_from_list_plans_bad_status() {
        use crate::params::ListPlans;

        let params = ListPlans {
            assignee: None,
            status: Some("archived".to_string()),
            mine: false,
        };

        assert!(PlanFilter::try_from(&params).is_err());
    }

    #[test]
    fn test_milestone_update_try_from_params() {
        use crate::params::UpdateMilestone;

        let params = UpdateMilestone {
            id: "m-1".to_string(),
            plan_id: "plan-1".to_string(),
            title: Some("Updated title".to_string()),
            description: None,
            due_date: Some("2025-03-15".to_string()),
            status: Some("completed".to_string()),
        };

        let update = MilestoneUpdate::try_from(params).unwrap();
        assert_eq!(update.title, Some("Updated title".to_string()));
        assert_eq!(update.due_date, Some(date(2025, 3, 15)));
        assert_eq!(update.status, Some(MilestoneStatus::Completed));
    }

    #[test]
    fn test_milestone_update_try_from_bad_date() {
        use crate::params::UpdateMilestone;

        let params = UpdateMilestone {
            id: "m-1".to_string(),
            plan_id: "plan-1".to_string(),
            title: None,
            description: None,
            due_date: Some("15/03/2025".to_string()),
            status: None,
        };

        match MilestoneUpdate::try_from(params).unwrap_err() {
            crate::TrellisError::InvalidInput { field, .. } => {
                assert_eq!(field, "due_date");
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }
}
