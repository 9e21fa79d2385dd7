use crate::demo::{run_demo, DemoArgs};
use crate::infra::{cli_flow_service, parse_availability, to_pretty_json};
use crate::server;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use talent_center::error::AppError;
use talent_center::workflows::hiring::RoleCategory;
use talent_center::workflows::talent::{
    filter_candidates, AvailabilityFilter, CandidateFilter, TalentCatalog,
};

#[derive(Parser, Debug)]
#[command(
    name = "Talent Center",
    about = "Run the hiring request service or inspect the flow from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect or reset the persisted hiring flow
    Flow {
        #[command(subcommand)]
        command: FlowCommand,
    },
    /// Check a dashboard access code against the persisted flow
    Access {
        #[command(subcommand)]
        command: AccessCommand,
    },
    /// Browse the role, skill, and candidate catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Walk the full hiring flow in memory and print each step
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum FlowCommand {
    /// Print the stored answers and where the flow resumes
    Show(StateDirArgs),
    /// Clear every stored answer
    Reset(StateDirArgs),
}

#[derive(Subcommand, Debug)]
enum AccessCommand {
    /// Verify a code; whitespace and case are ignored
    Verify {
        code: String,
        #[command(flatten)]
        state: StateDirArgs,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List roles for a category
    Roles {
        #[arg(long, value_enum, default_value_t = CategoryArg::Tech)]
        category: CategoryArg,
    },
    /// List suggested skills for a role
    Skills {
        #[arg(long)]
        role: String,
    },
    /// List candidates for a role with optional quick filters
    Candidates {
        #[arg(long)]
        role: String,
        /// Keep only candidates that are (or are not) ready to relocate
        #[arg(long)]
        ready_to_shift: Option<bool>,
        /// `all`, `Immediate`, `15 days` or `30 days`
        #[arg(long, value_parser = parse_availability, default_value = "all")]
        availability: AvailabilityFilter,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Tech,
    NonTech,
}

impl From<CategoryArg> for RoleCategory {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Tech => RoleCategory::Tech,
            CategoryArg::NonTech => RoleCategory::NonTech,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the directory the hiring flow is persisted in
    #[arg(long)]
    pub(crate) state_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct StateDirArgs {
    /// Directory holding the persisted flow (defaults to APP_STATE_DIR)
    #[arg(long)]
    state_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Flow { command } => run_flow(command),
        Command::Access {
            command: AccessCommand::Verify { code, state },
        } => {
            let service = cli_flow_service(state.state_dir.as_deref())?;
            let decision = service.verify_access(&code)?;
            match decision.message() {
                Some(message) => println!("{message}"),
                None => println!("Enter the access code shown on your completion screen."),
            }
            Ok(())
        }
        Command::Catalog { command } => {
            run_catalog(command);
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}

fn run_flow(command: FlowCommand) -> Result<(), AppError> {
    match command {
        FlowCommand::Show(args) => {
            let service = cli_flow_service(args.state_dir.as_deref())?;
            let snapshot = service.snapshot()?;
            match snapshot.progress.as_ref() {
                Some(progress) => println!(
                    "Resume at {} (Step {} of {})",
                    progress.label, progress.number, progress.total
                ),
                None => println!("Flow complete"),
            }
            println!("{}", to_pretty_json(&snapshot.state));
        }
        FlowCommand::Reset(args) => {
            let service = cli_flow_service(args.state_dir.as_deref())?;
            let outcome = service.reset()?;
            if outcome.is_persisted() {
                println!("Hiring flow cleared");
            } else {
                println!("Hiring flow cleared in memory only: {}", to_pretty_json(&outcome));
            }
        }
    }
    Ok(())
}

fn run_catalog(command: CatalogCommand) {
    let catalog = TalentCatalog::standard();
    match command {
        CatalogCommand::Roles { category } => {
            let category = RoleCategory::from(category);
            println!("{} roles ({})", category.label(), category.description());
            for role in catalog.roles_for(category) {
                println!("  {role}");
            }
        }
        CatalogCommand::Skills { role } => {
            let skills = catalog.skills_for(&role);
            if skills.is_empty() {
                println!("No suggested skills for '{role}'");
            } else {
                println!("{role}: {}", skills.join(", "));
            }
        }
        CatalogCommand::Candidates {
            role,
            ready_to_shift,
            availability,
        } => {
            let filter = CandidateFilter {
                ready_to_shift,
                availability,
            };
            let for_role = catalog.candidates_for(&role);
            let matches = filter_candidates(for_role.iter().copied(), &filter);
            println!(
                "{} of {} candidates for {role}",
                matches.len(),
                for_role.len()
            );
            for candidate in matches {
                println!(
                    "  #{:<3} {:<22} {:>2} yrs  {:>6}/mo  {:<9} relocate: {}",
                    candidate.id,
                    candidate.name,
                    candidate.experience,
                    candidate.monthly_cost_label(),
                    candidate.availability.label(),
                    if candidate.ready_to_relocate { "yes" } else { "no" },
                );
            }
        }
    }
}
