use clap::Subcommand;

use felino_core::Category;

#[derive(Subcommand)]
pub enum LibraryAction {
    /// List catalogue activities
    List {
        /// Only this category (play, enrichment, care)
        #[arg(long)]
        category: Option<Category>,
    },
    /// Show one activity in full
    Show {
        /// Activity id
        activity_id: String,
    },
}

pub fn run(action: LibraryAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalogue = super::load_catalogue()?;

    match action {
        LibraryAction::List { category } => {
            for activity in catalogue.iter() {
                if category.is_some_and(|c| activity.category != c) {
                    continue;
                }
                println!(
                    "{:<12} {:<24} {} ({} min, level {})",
                    activity.category.label(),
                    activity.id,
                    activity.title,
                    activity.duration_min,
                    activity.intensity
                );
            }
        }
        LibraryAction::Show { activity_id } => {
            let activity = catalogue
                .find(&activity_id)
                .ok_or_else(|| format!("unknown activity: {activity_id}"))?;

            println!("{}: {}", activity.title, activity.short_description);
            println!(
                "category: {} · duration: {} min · level: {}",
                activity.category.label(),
                activity.duration_min,
                activity.intensity
            );
            print_section("steps", &activity.steps);
            print_section("tips", &activity.tips);
            print_section("success signs", &activity.success_signs);
            print_section("warnings", &activity.warnings);
        }
    }
    Ok(())
}

fn print_section(title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!();
    println!("{title}:");
    for line in lines {
        println!("  - {line}");
    }
}
