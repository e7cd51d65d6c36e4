use clap::Subcommand;

use felino_core::Session;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show today's plan, creating it if needed
    Today,
    /// Mark an activity done for today
    Check {
        /// Activity id from today's plan
        activity_id: String,
    },
    /// Clear an activity's done mark for today
    Uncheck {
        /// Activity id from today's plan
        activity_id: String,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session()?;

    match action {
        PlanAction::Today => {
            let plan = session.todays_plan()?;
            let completion = session.todays_completion()?;

            println!("plan for {}", plan.date);
            for item in &plan.items {
                let mark = if completion.items.get(&item.id).copied().unwrap_or(false) {
                    'x'
                } else {
                    ' '
                };
                println!(
                    "[{mark}] {:<12} {:<24} {} ({} min, level {})",
                    item.category.label(),
                    item.id,
                    item.title,
                    item.duration_min,
                    item.intensity
                );
            }

            let summary = session.progress()?;
            println!();
            println!(
                "streak: {} day(s) · this week: {} item(s)",
                summary.streak_days, summary.weekly_score
            );
        }
        PlanAction::Check { activity_id } => {
            let record = toggle(&session, &activity_id, true)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        PlanAction::Uncheck { activity_id } => {
            let record = toggle(&session, &activity_id, false)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }
    Ok(())
}

fn toggle(
    session: &Session,
    activity_id: &str,
    done: bool,
) -> Result<felino_core::CompletionRecord, Box<dyn std::error::Error>> {
    if session.catalogue().find(activity_id).is_none() {
        return Err(format!("unknown activity: {activity_id}").into());
    }
    Ok(session.toggle_completion(activity_id, done)?)
}
