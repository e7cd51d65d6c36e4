use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Streak and score summary
    Summary,
    /// Most recent completion records
    History {
        /// Number of records to show
        #[arg(long, default_value_t = 7)]
        limit: usize,
    },
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::open_session()?;

    match action {
        ProgressAction::Summary => {
            let summary = session.progress()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        ProgressAction::History { limit } => {
            let mut records = session.all_completions()?;
            records.sort_by(|a, b| b.date.cmp(&a.date));
            records.truncate(limit);

            if records.is_empty() {
                println!("no completions recorded yet");
            }
            for record in records {
                println!("{}  {} item(s) done", record.date, record.completed_count());
            }
        }
    }
    Ok(())
}
