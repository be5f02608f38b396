use anyhow::Context;
use clap::{Parser, Subcommand};
use proffy_api::{ClassesClient, ClientConfig, tracing::init_tracing};
use proffy_core::FilterCriteria;
use proffy_store::{FAVORITES_KEY, FavoritesReader, FavoritesStorage, SqliteStore};
use proffy_views::{
    Alert, FavoritesViewModel, FocusEvents, Notifier, Screen, SubmitOutcome,
    TeacherRow, TeacherSearchViewModel, favorites, teacher_list,
};

#[derive(Parser)]
#[command(name = "proffy")]
#[command(about = "Browse Proffy teachers and your favorites", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search available teachers
    Search {
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        week_day: String,
        #[arg(long, default_value = "")]
        time: String,
    },
    /// List favorite teachers
    Favorites,
}

/// Prints alerts to stderr
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, alert: &Alert) {
        eprintln!("{}: {}", alert.title, alert.body);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env().context("invalid PROFFY_* configuration")?;
    init_tracing(&config.env);

    let pool = proffy_store::create_pool(&config.database_url, 5).await?;
    proffy_store::migrate(&pool).await?;
    let storage = FavoritesStorage::new(SqliteStore::new(pool));
    tracing::debug!(database_url = %config.database_url, "Local storage ready");

    match cli.command {
        Command::Search {
            subject,
            week_day,
            time,
        } => {
            let client = ClassesClient::from_config(&config)?;
            let vm = TeacherSearchViewModel::new(storage, client, ConsoleNotifier);

            // The screen gains focus once, then the filter form is submitted
            let events = FocusEvents::new();
            let subscription = events.subscribe();
            events.emit(Screen::TeacherList);
            drop(events);
            vm.follow_focus(subscription).await;

            vm.set_criteria(FilterCriteria::new(subject, week_day, time));
            vm.toggle_filter_visibility();
            if let SubmitOutcome::Applied { .. } = vm.submit_filters().await {
                print_rows(teacher_list::TITLE, &vm.rows());
            }
        }
        Command::Favorites => {
            let teachers = storage.read(FAVORITES_KEY).await.unwrap_or_default();
            let vm = FavoritesViewModel::new(teachers);
            print_rows(favorites::TITLE, &vm.rows());
        }
    }

    Ok(())
}

fn print_rows(title: &str, rows: &[TeacherRow]) {
    println!("{title}");
    if rows.is_empty() {
        println!("  (nenhum proffy encontrado)");
        return;
    }
    for row in rows {
        let marker = if row.is_favorite { '★' } else { ' ' };
        let teacher = &row.teacher;
        println!(
            "{marker} #{:<5} {:<24} {:<16} R$ {:.2}",
            teacher.id, teacher.name, teacher.subject, teacher.cost
        );
    }
}
