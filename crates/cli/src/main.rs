mod serve;
mod telemetry;

use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use roster_core::{Employee, EmployeeDraft};
use roster_service::{
    EmployeeService, EmployeeUpstream, HttpUpstream, InMemoryUpstream, UpstreamConfig,
};
use serde::Serialize;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Roster employee REST façade.
#[derive(Parser)]
#[command(name = "roster", version, about = "Roster employee REST façade")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Base URL of the upstream employee collection [env: ROSTER_UPSTREAM_URL]
    #[arg(long, global = true)]
    upstream_url: Option<String>,

    /// Upstream request timeout in seconds [env: ROSTER_UPSTREAM_TIMEOUT_SECS]
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8111")]
        port: u16,
        /// Keep employees in process instead of calling the upstream API
        #[arg(long)]
        in_memory: bool,
    },

    #[command(flatten)]
    Query(QueryCommand),
}

/// One-shot commands answered from the upstream API.
#[derive(Subcommand)]
enum QueryCommand {
    /// List every employee
    List,

    /// List employees whose name contains a substring (case-insensitive)
    Search {
        /// Name fragment to look for
        query: String,
    },

    /// Show one employee
    Get {
        /// Employee id
        id: String,
    },

    /// Print the highest salary (0 when there are no employees)
    HighestSalary,

    /// Print the names of the ten highest earners
    TopEarners,

    /// Create an employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: Option<u64>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        email: String,
    },

    /// Delete an employee
    Delete {
        /// Employee id
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.quiet);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Serve { port, in_memory } => {
            let upstream: Arc<dyn EmployeeUpstream> = if in_memory {
                tracing::info!("using in-memory employee store");
                Arc::new(InMemoryUpstream::new())
            } else {
                let config = upstream_config(&cli.upstream_url, cli.timeout_secs);
                tracing::info!(upstream = %config.collection_url(), "using upstream employee API");
                Arc::new(HttpUpstream::new(config))
            };
            let service = EmployeeService::new(upstream);
            if let Err(e) = rt.block_on(serve::start_server(port, service)) {
                eprintln!("Server error: {}", e);
                process::exit(1);
            }
        }
        Commands::Query(command) => {
            let config = upstream_config(&cli.upstream_url, cli.timeout_secs);
            let service = EmployeeService::new(Arc::new(HttpUpstream::new(config)));
            let ok = rt.block_on(run_query(command, &service, cli.output));
            if !ok {
                process::exit(1);
            }
        }
    }
}

/// Resolve upstream settings, exiting with status 1 when they are invalid.
fn upstream_config(upstream_url: &Option<String>, timeout_secs: Option<u64>) -> UpstreamConfig {
    match UpstreamConfig::resolve(upstream_url.clone(), timeout_secs) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// Run a one-shot command against the service. Returns `false` when the
/// command should exit non-zero.
async fn run_query(
    command: QueryCommand,
    service: &EmployeeService,
    output: OutputFormat,
) -> bool {
    match command {
        QueryCommand::List => {
            print_employees(&service.list_all().await, output);
            true
        }
        QueryCommand::Search { query } => {
            print_employees(&service.search_by_name(&query).await, output);
            true
        }
        QueryCommand::Get { id } => match service.get_by_id(&id).await {
            Some(employee) => {
                print_employees(std::slice::from_ref(&employee), output);
                true
            }
            None => {
                eprintln!("employee '{}' not found", id);
                false
            }
        },
        QueryCommand::HighestSalary => {
            let salary = service.highest_salary().await;
            match output {
                OutputFormat::Text => println!("{}", salary),
                OutputFormat::Json => print_json(&salary),
            }
            true
        }
        QueryCommand::TopEarners => {
            let names = service.top_ten_earner_names().await;
            match output {
                OutputFormat::Text => {
                    for (rank, name) in names.iter().enumerate() {
                        println!("{:>2}. {}", rank + 1, name);
                    }
                }
                OutputFormat::Json => print_json(&names),
            }
            true
        }
        QueryCommand::Create {
            name,
            salary,
            age,
            title,
            email,
        } => {
            let draft = EmployeeDraft {
                name,
                salary,
                age,
                title,
                email,
            };
            match service.create(&draft).await {
                Some(employee) => {
                    print_employees(std::slice::from_ref(&employee), output);
                    true
                }
                None => {
                    eprintln!("employee creation failed");
                    false
                }
            }
        }
        QueryCommand::Delete { id } => {
            let outcome = service.delete_by_id(&id).await;
            match output {
                OutputFormat::Text => println!("{}", outcome),
                OutputFormat::Json => print_json(&outcome.message()),
            }
            outcome.is_deleted()
        }
    }
}

fn print_employees(employees: &[Employee], output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            for e in employees {
                let salary = e.salary.map(|s| s.to_string()).unwrap_or_else(|| "-".into());
                println!("{}\t{}\t{}\t{}\t{}", e.id, e.name, salary, e.title, e.email);
            }
        }
        OutputFormat::Json => print_json(&employees),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: failed to serialize output: {}", e);
            process::exit(1);
        }
    }
}
