use crate::infra::{parse_availability, to_pretty_json};
use clap::Args;
use std::sync::Arc;
use talent_center::error::AppError;
use talent_center::workflows::hiring::{
    BudgetRangeOption, BudgetSubmission, CompanyAnswers, CompanyField, CompletionView, FlowStep,
    HiringFlowError, HiringFlowService, InMemoryStateStorage, PreferencesSubmission, RoleDraft,
    StepOutcome, WorkingHours,
};
use talent_center::workflows::talent::{AvailabilityFilter, CandidateFilter, DashboardView};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Company name used for the first step
    #[arg(long, default_value = "Acme Robotics")]
    pub(crate) company: String,
    /// Role to request; must exist in the catalog
    #[arg(long, default_value = "Backend Engineer")]
    pub(crate) role: String,
    /// Dashboard filter: only candidates ready (or not) to relocate
    #[arg(long)]
    pub(crate) ready_to_shift: Option<bool>,
    /// Dashboard filter: `all`, `Immediate`, `15 days` or `30 days`
    #[arg(long, value_parser = parse_availability, default_value = "all")]
    pub(crate) availability: AvailabilityFilter,
    /// Print the final flow state as JSON
    #[arg(long)]
    pub(crate) show_state: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        company,
        role,
        ready_to_shift,
        availability,
        show_state,
    } = args;

    let service = HiringFlowService::open(Arc::new(InMemoryStateStorage::default()));
    println!("Hiring request demo (in-memory, nothing is written to disk)");

    let answers = CompanyAnswers {
        company_name: company,
        location: "Bengaluru, India".to_string(),
        contact_person: "Asha Menon".to_string(),
        email: "asha@acme-robotics.test".to_string(),
    };
    print_step(FlowStep::Company);
    for field in CompanyField::ordered() {
        println!("  {} {}", field.question(), answers.answer(field));
    }
    report(service.submit_company(answers)?);

    print_step(FlowStep::Role);
    let catalog = service.catalog();
    let mut draft = RoleDraft::default();
    draft.select_category(catalog.category_of(&role));
    draft
        .select_role(&role, catalog)
        .map_err(HiringFlowError::from)?;
    draft.select_all_skills(catalog);
    draft.add_custom_skill("On-call rotations");
    draft.headcount = "2".to_string();
    println!(
        "  {} ({}), skills: {}",
        role,
        draft
            .category()
            .map(|category| category.label())
            .unwrap_or("uncategorised"),
        draft.skills().labels().join(", ")
    );
    report(service.submit_role(draft.into_submission())?);

    print_step(FlowStep::Preferences);
    let preferences = PreferencesSubmission {
        working_hours: WorkingHours::Uk,
        ..PreferencesSubmission::default()
    };
    println!(
        "  {} hours, {} interviews, joining {}",
        preferences.working_hours.label(),
        preferences.interview_mode.label(),
        preferences.effective_timeline()
    );
    report(service.submit_preferences(preferences)?);

    print_step(FlowStep::Budget);
    let budget = BudgetSubmission {
        budget_range_option: Some(BudgetRangeOption::TenToTwentyFiveLakh),
        notes: "Prefer candidates with fintech exposure".to_string(),
        ..BudgetSubmission::default()
    };
    report(service.submit_budget(budget)?);

    let code = match service.completion()? {
        CompletionView::Ready {
            access_code,
            email_note,
        } => {
            println!("\nYour access code: {access_code}");
            println!("  {email_note}");
            access_code
        }
        CompletionView::Redirect { redirect_to } => {
            println!("\nNo access code yet; continue at {}", redirect_to.path());
            return Ok(());
        }
    };

    println!("\nAccess gate");
    for attempt in ["GCC-AAAAA".to_string(), format!(" {} ", code.to_lowercase())] {
        let decision = service.verify_access(&attempt)?;
        println!(
            "  '{}': {}",
            attempt.trim(),
            decision.message().unwrap_or("(ignored)")
        );
    }

    let filter = CandidateFilter {
        ready_to_shift,
        availability,
    };
    if let Some(first) = service
        .dashboard(filter)?
        .candidates
        .first()
        .map(|card| card.candidate.id)
    {
        service.toggle_shortlist(first)?;
    }
    print_dashboard(&service.dashboard(filter)?);

    if show_state {
        println!("\nFinal flow state:\n{}", to_pretty_json(&service.snapshot()?.state));
    }

    Ok(())
}

fn print_step(step: FlowStep) {
    if let Some(progress) = step.progress() {
        println!(
            "\nStep {} of {}: {}",
            progress.number, progress.total, progress.label
        );
    }
}

fn report(outcome: StepOutcome) {
    let saved = if outcome.persistence.is_persisted() {
        "saved"
    } else {
        "kept in memory only"
    };
    println!("  -> {saved}, next: {}", outcome.next.label());
}

fn print_dashboard(view: &DashboardView) {
    println!(
        "\nTalent dashboard for {} ({} of {} candidates shown)",
        view.role_label,
        view.candidates.len(),
        view.total_for_role
    );
    if let Some(empty) = &view.empty_state {
        println!("  {}", empty.title);
        println!("  {}", empty.guidance);
        return;
    }
    for card in &view.candidates {
        let candidate = &card.candidate;
        println!(
            "  {:<22} {:>2} yrs  {:>6}/mo  {:<9} {}{}",
            candidate.name,
            candidate.experience,
            card.monthly_cost_label,
            candidate.availability.label(),
            if candidate.ready_to_relocate {
                "ready to relocate"
            } else {
                "remote only"
            },
            if card.shortlisted { "  [shortlisted]" } else { "" },
        );
        println!("      {}", candidate.skills.join(", "));
    }
}
