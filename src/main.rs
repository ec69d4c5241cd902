use anyhow::Result;
use clap::{Parser, Subcommand};

use registrar::audit::AuditLogger;
use registrar::cli::{
    handle_course_command, handle_grade_command, handle_student_command, run_login,
};
use registrar::config::{paths::RegistrarPaths, settings::Settings};
use registrar::storage::Storage;

#[derive(Parser)]
#[command(
    name = "registrar",
    version,
    about = "Terminal-based student record management",
    long_about = "registrar-cli manages student academic records from the command \
                  line: enrollment, grading, search, sorting, and an interactive \
                  login session with undo for administrators."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as administrator or student (interactive session)
    Login,

    /// Student record management commands
    #[command(subcommand)]
    Student(registrar::cli::StudentCommands),

    /// Grading commands
    #[command(subcommand)]
    Grade(registrar::cli::GradeCommands),

    /// Course catalog commands
    #[command(subcommand)]
    Course(registrar::cli::CourseCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RegistrarPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Login) => {
            run_login(&storage, &settings)?;
        }
        Some(Commands::Student(cmd)) => {
            handle_student_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Grade(cmd)) => {
            handle_grade_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Course(cmd)) => {
            handle_course_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                let detail = entry.diff_summary.or(entry.entity_name).unwrap_or_default();
                println!(
                    "{}  {:<6}  {}  {}  {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.operation.to_string(),
                    entry.entity_type,
                    entry.entity_id,
                    detail
                );
            }
        }
        Some(Commands::Init) => {
            println!("Initializing registrar-cli at: {}", paths.data_dir().display());
            registrar::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  - Add catalog courses to {}", paths.courses_file().display());
            println!("  - Run 'registrar student add <id> ...' to add records");
            println!("  - Run 'registrar login' for the interactive session");
        }
        Some(Commands::Config) => {
            println!("registrar-cli Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Students file:    {}", paths.students_file().display());
            println!("Courses file:     {}", paths.courses_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Admin ID:        {}", settings.admin.id);
            println!("  Setup completed: {}", settings.setup_completed);
        }
        None => {
            println!("registrar-cli - Terminal-based student record management");
            println!();
            println!("Run 'registrar --help' for usage information.");
            println!("Run 'registrar login' to start an interactive session.");
        }
    }

    Ok(())
}
