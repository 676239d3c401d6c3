use chrono::{Duration, Utc};
use tempair::{ModifiedJulianDate, Pair};

fn main() {
    let now = Utc::now();
    let window = Pair::new(now, now + Duration::hours(2));

    let zoomed = window.expand(0.5);
    let capped = window.clamp_max(Duration::minutes(20).num_milliseconds() as f64);
    let tomorrow = window.centred_on(now + Duration::days(1));

    println!("window:   {:?}", window);
    println!("zoomed:   {:?} ({} ms)", zoomed, zoomed.extent());
    println!("capped:   {:?}", capped);
    println!("tomorrow: {:?}", tomorrow);

    if let Some(mjd) = window.convert::<ModifiedJulianDate>() {
        println!("as MJD:   {:?} ({} days)", mjd, mjd.extent());
    }
}
