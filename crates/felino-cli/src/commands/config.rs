use clap::Subcommand;

use felino_core::{AgeGroup, EnergyLevel, Preferences, UNLIMITED_MINUTES};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current preferences
    Show,
    /// Update preferences
    Set {
        /// Minutes available per day, 1-15 (15 means no limit)
        #[arg(long)]
        minutes: Option<u32>,
        /// Cat energy level: calm, moderate, active
        #[arg(long)]
        energy: Option<EnergyLevel>,
        /// Cat age group: kitten, adult, senior
        #[arg(long)]
        age: Option<AgeGroup>,
    },
    /// Reset preferences to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::open_session()?;

    match action {
        ConfigAction::Show => {
            let preferences = session.preferences()?;
            println!("{}", serde_json::to_string_pretty(&preferences)?);
        }
        ConfigAction::Set {
            minutes,
            energy,
            age,
        } => {
            let mut preferences = session.preferences()?;
            if let Some(minutes) = minutes {
                if minutes == 0 || minutes > UNLIMITED_MINUTES {
                    return Err(format!(
                        "minutes must be between 1 and {UNLIMITED_MINUTES} (15 means no limit)"
                    )
                    .into());
                }
                preferences.available_minutes = minutes;
            }
            if let Some(energy) = energy {
                preferences.energy = energy;
            }
            if let Some(age) = age {
                preferences.age_group = age;
            }
            session.save_preferences(&preferences)?;
            println!("preferences saved; the plan of the day updates from tomorrow");
        }
        ConfigAction::Reset => {
            session.save_preferences(&Preferences::default())?;
            println!("preferences reset to defaults");
        }
    }
    Ok(())
}
