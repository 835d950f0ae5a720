use chrono::Local;
use shoresquad::{LatLon, ShoreSquad, ShoreSquadError};

#[tokio::main]
async fn main() -> Result<(), ShoreSquadError> {
    let pasir_ris = LatLon(1.3817, 103.9536);
    let squad = ShoreSquad::builder().location(pasir_ris).build()?;

    for (site, distance_km) in squad.nearby_sites().max_distance_km(15.0).call() {
        println!("{} ({:.1} km)", site.name, distance_km);
        for event in squad.events_at(&site.id) {
            println!(
                "  #{} {} on {} at {}, {} attending",
                event.id,
                event.title,
                event.date,
                event.time.format("%H:%M"),
                event.attendees
            );
        }
    }

    let today = Local::now().date_naive();
    let upcoming = squad.upcoming_events(today);
    println!("{} upcoming event(s)", upcoming.len());

    Ok(())
}
