//! Print today's sunrise, solar noon and sunset for a location.
//!
//! Run with `RUST_LOG=trace` to see the solar noon search.

use chrono::{DateTime, Datelike, FixedOffset, Local};
use clap::Parser;
use noaa_sunrise::{JulianDate, SunriseResult, noaa, time::julian_day_of};

#[derive(Parser)]
#[command(name = "suntimes")]
#[command(about = "Sunrise, solar noon and sunset times from the NOAA algorithm")]
struct Cli {
    /// Latitude, degrees North
    #[arg(long, default_value_t = 42.4, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude, degrees East
    #[arg(long, default_value_t = -71.1, allow_negative_numbers = true)]
    lon: f64,
    /// Instant to calculate for, RFC 3339 (defaults to now, local time)
    #[arg(long)]
    date: Option<DateTime<FixedOffset>>,
}

fn print_event(label: &str, event: noaa_sunrise::Result<DateTime<FixedOffset>>) {
    match event {
        Ok(time) => println!("{label:<12}{time}"),
        Err(err) => println!("{label:<12}{err}"),
    }
}

fn main() -> Result<(), noaa_sunrise::Error> {
    env_logger::init();
    let cli = Cli::parse();

    let now = cli.date.unwrap_or_else(|| Local::now().fixed_offset());
    log::debug!("calculating for {now} at lat {} lon {}", cli.lat, cli.lon);

    // one at a time
    println!("{}-{}-{}", now.year(), now.month(), now.day());
    println!("jd {:.6}", julian_day_of(&now));
    if let Some(weekday) = JulianDate::from_datetime(&now).day_of_week_name() {
        println!("{weekday}");
    }
    print_event("sunrise:", noaa::sunrise(now, cli.lat, cli.lon));
    print_event("solar noon:", noaa::solar_noon(now, cli.lon));
    print_event("sunset:", noaa::sunset(now, cli.lat, cli.lon));

    println!();

    // rise, noon and set in one shot
    match noaa::sun_events_for_day(now, cli.lat, cli.lon)? {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            println!("sunrise:    {sunrise}");
            println!("solar noon: {transit}");
            println!("sunset:     {sunset}");
        }
        SunriseResult::AllDay { transit } => {
            println!("solar noon: {transit}");
            println!("sun stays above the horizon");
        }
        SunriseResult::AllNight { transit } => {
            println!("solar noon: {transit}");
            println!("sun stays below the horizon");
        }
    }
    Ok(())
}
