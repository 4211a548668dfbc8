use clap::{Parser, Subcommand};

/// Command-line interface definition for HealthSurvey
/// Daily employee health surveys stored in SQLite
#[derive(Parser)]
#[command(
    name = "healthsurvey",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily employee health surveys (three yes/no questions and a temperature) in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Do not ask for confirmation before deleting
    #[arg(global = true, long = "yes", short = 'y')]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Inspect the database file
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage surveys
    Survey {
        #[command(subcommand)]
        action: SurveyAction,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add a new employee
    Add { name: String },

    /// List all employees
    List {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Rename an employee, given its id or its current name
    Rename {
        employee: String,
        new_name: String,
    },

    /// Delete an employee and all of their surveys
    Del { employee: String },
}

#[derive(Subcommand)]
pub enum SurveyAction {
    /// Record a survey for an employee
    Add {
        #[command(flatten)]
        answers: SurveyArgs,
    },

    /// Change the answers of an existing survey
    Edit {
        #[command(flatten)]
        answers: SurveyArgs,
    },

    /// Delete a survey
    Del {
        #[arg(long = "employee", short = 'e', help = "Employee id or name")]
        employee: String,

        #[arg(long = "date", short = 'd', help = "Survey date (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// List the surveys of an employee
    List {
        #[arg(long = "employee", short = 'e', help = "Employee id or name")]
        employee: String,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
}

#[derive(clap::Args)]
pub struct SurveyArgs {
    #[arg(long = "employee", short = 'e', help = "Employee id or name")]
    pub employee: String,

    #[arg(long = "date", short = 'd', help = "Survey date (YYYY-MM-DD), default today")]
    pub date: Option<String>,

    #[arg(long = "q1", help = "Answer to question 1 (yes/no)")]
    pub q1: String,

    #[arg(long = "q2", help = "Answer to question 2 (yes/no)")]
    pub q2: String,

    #[arg(long = "q3", help = "Answer to question 3 (yes/no)")]
    pub q3: String,

    #[arg(long = "temp", short = 't', help = "Temperature in degrees Celsius")]
    pub temperature: f64,
}
