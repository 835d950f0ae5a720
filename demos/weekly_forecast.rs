use shoresquad::{ShoreSquad, ShoreSquadError};

#[tokio::main]
async fn main() -> Result<(), ShoreSquadError> {
    let squad = ShoreSquad::builder().build()?;
    let report = squad.refresh_today().await;

    println!("Source: {}", report.origin);
    println!("Right now: {}", report.current);
    for day in &report.days {
        println!(
            "{:<9} {} {} {:<28} {}{}",
            day.day_name,
            day.date,
            day.icon,
            day.observation.condition,
            day.score,
            if day.synthetic { " (estimated)" } else { "" }
        );
    }
    if let Some(best) = report.best_day() {
        println!("Best day for a cleanup: {} ({})", best.day_name, best.score);
    }

    Ok(())
}
