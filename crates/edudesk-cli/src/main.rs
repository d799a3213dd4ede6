use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use edudesk_access::{AccessControl, CrudOperation, ResourceType, Role};
use edudesk_cli::{logging::init_console_logging, reports};
use edudesk_config::AccessConfig;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "edudesk-cli")]
#[command(about = "Edudesk CLI - Inspect and validate dashboard access control", long_about = None)]
struct Cli {
    /// Permission policy file to use instead of ACCESS_POLICY_FILE
    #[arg(long, global = true)]
    policy: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a role may perform an operation on a resource
    Check {
        /// Role, e.g. faculty
        role: Role,
        /// Resource, e.g. lesson_plans
        resource: ResourceType,
        /// One of create, read, update, delete
        operation: CrudOperation,
    },
    /// List the resources a role has permissions on
    Resources {
        role: Role,
    },
    /// Check whether a role may open a dashboard path
    Route {
        role: Role,
        /// Dashboard path, e.g. /academics/students
        path: String,
    },
    /// Print the permission matrix
    Matrix {
        /// Only show this role's column
        #[arg(short = 'r', long)]
        role: Option<Role>,
    },
    /// Print the route map
    Routes,
    /// Validate the policy and fail if any given path is unmapped
    Validate {
        /// Paths that must resolve to a resource (default: every dashboard menu path)
        paths: Vec<String>,
    },
}

fn main() -> ExitCode {
    dotenv().ok();
    init_console_logging();

    let cli = Cli::parse();

    let mut config = AccessConfig::from_env();
    if let Some(policy) = cli.policy {
        config.policy_file = Some(policy);
    }

    let access = match AccessControl::from_config(&config) {
        Ok(access) => access,
        Err(e) => {
            eprintln!("❌ Invalid access configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Check {
            role,
            resource,
            operation,
        } => {
            let (allowed, line) = reports::check(&access, role, resource, operation);
            println!("{}", line);
            exit_for(allowed)
        }
        Commands::Resources { role } => {
            print!("{}", reports::resources(&access, role));
            ExitCode::SUCCESS
        }
        Commands::Route { role, path } => {
            let (allowed, line) = reports::route(&access, role, &path);
            println!("{}", line);
            exit_for(allowed)
        }
        Commands::Matrix { role } => {
            print!("{}", reports::matrix(&access, role));
            ExitCode::SUCCESS
        }
        Commands::Routes => {
            print!("{}", reports::routes(&access));
            ExitCode::SUCCESS
        }
        Commands::Validate { paths } => handle_validate(&access, &config, &paths),
    }
}

fn exit_for(allowed: bool) -> ExitCode {
    if allowed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

fn handle_validate(access: &AccessControl, config: &AccessConfig, paths: &[String]) -> ExitCode {
    match reports::validate(access, paths) {
        Ok(checked) => {
            let source = config
                .policy_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in policy".to_string());
            println!("✅ {} is valid", source);
            println!("   Routes: {}", access.routes().len());
            println!("   Paths checked: {}", checked);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
