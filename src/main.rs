use std::{env, fs};

use chrono::{Datelike, Local};
use endurance_coach::{sample, AiCoach, CoachConfig, PlanRequest};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = CoachConfig::from_env()?;
  let request = match env::args().nth(1) {
    Some(path) => {
      tracing::info!(%path, "Reading plan request");
      let raw = fs::read_to_string(&path)?;
      serde_json::from_str::<PlanRequest>(&raw)?
    }
    None => {
      let weekday = Local::now().weekday();
      sample::sample_request(weekday.num_days_from_monday(), &weekday_name(weekday))
    }
  };

  let coach = AiCoach::with_config(config);
  let plan = coach.generate_daily_plan(
    &request.user_profile,
    &request.macrocycle_context,
    &request.microcycle_day,
  );

  println!("=== Load / Risk Analysis ===");
  println!("{}", serde_json::to_string_pretty(&plan.load_risk)?);
  println!();
  println!("=== Daily Plan ===");
  println!("{}", plan.to_json());

  Ok(())
}

fn weekday_name(weekday: chrono::Weekday) -> String {
  match weekday {
    chrono::Weekday::Mon => "Monday",
    chrono::Weekday::Tue => "Tuesday",
    chrono::Weekday::Wed => "Wednesday",
    chrono::Weekday::Thu => "Thursday",
    chrono::Weekday::Fri => "Friday",
    chrono::Weekday::Sat => "Saturday",
    chrono::Weekday::Sun => "Sunday",
  }
  .to_string()
}
