//! Vitals - desktop health & fitness calculator
//!
//! A small GUI application for body metrics with unit-aware height entry.
//!
//! # Features
//!
//! - Height entry as one combined field or split feet + secondary unit
//! - Imperial/metric switching that preserves the physical height
//! - BMI with WHO category, BMR (Mifflin-St Jeor), daily calorie target
//! - Meal-plan split regenerated on every input change
//! - Inline, non-fatal validation on every keystroke
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! vitals
//!
//! # CLI commands
//! vitals bmi --height 175 --weight 70                  # Metric BMI
//! vitals bmi --height 69 --weight 154 --units imperial # Imperial BMI
//! vitals bmr --height 175 --weight 70 --age 30 --sex male
//! vitals convert 70 --units imperial                   # 5 ft 10 in
//! ```

mod app;
mod core;
mod validators;

use clap::{Parser, Subcommand};
use crate::core::height::{self, UnitSystem};
use crate::core::metrics::{
    self, ActivityLevel, BmiCategory, BodyMetrics, CM_PER_INCH, KG_PER_POUND, Sex,
};
use iced::Size;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "vitals")]
#[command(about = "Vitals - health & fitness calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute body mass index
    Bmi {
        /// Height (cm, or inches with --units imperial)
        #[arg(long)]
        height: String,
        /// Weight (kg, or pounds with --units imperial)
        #[arg(long)]
        weight: String,
        /// Unit system (metric or imperial)
        #[arg(long, default_value = "metric")]
        units: String,
    },
    /// Compute basal metabolic rate and a daily meal plan
    Bmr {
        /// Height (cm, or inches with --units imperial)
        #[arg(long)]
        height: String,
        /// Weight (kg, or pounds with --units imperial)
        #[arg(long)]
        weight: String,
        /// Age in years
        #[arg(long)]
        age: String,
        /// Sex (male or female)
        #[arg(long)]
        sex: String,
        /// Unit system (metric or imperial)
        #[arg(long, default_value = "metric")]
        units: String,
        /// Activity level (sedentary, light, moderate, active, very-active)
        #[arg(long, default_value = "moderate")]
        activity: String,
    },
    /// Convert a canonical height to its dual feet + secondary form
    Convert {
        /// Canonical height (cm, or inches with --units imperial)
        value: String,
        /// Unit system (metric or imperial)
        #[arg(long, default_value = "metric")]
        units: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Some(command) = cli.command {
        match handle_cli(command) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        launch_gui()
    }
}

fn parse_units(units: &str) -> Result<UnitSystem, String> {
    units
        .parse::<UnitSystem>()
        .map_err(|_| "Invalid units. Use 'metric' or 'imperial'.".to_string())
}

/// Converts validated CLI inputs to the metric values the formulas expect.
fn to_metric(height: f64, weight: f64, units: UnitSystem) -> (f64, f64) {
    match units {
        UnitSystem::Metric => (height, weight),
        UnitSystem::Imperial => (height * CM_PER_INCH, weight * KG_PER_POUND),
    }
}

fn handle_cli(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Bmi {
            height,
            weight,
            units,
        } => {
            let units = parse_units(&units)?;
            let height = validators::validate_height(&height)?;
            let weight = validators::validate_weight(&weight)?;
            let (height_cm, weight_kg) = to_metric(height, weight, units);

            let bmi = metrics::bmi(weight_kg, height_cm)
                .ok_or("Height and weight must be positive")?;
            println!("BMI: {:.1} ({})", bmi, BmiCategory::from_bmi(bmi));
        }
        Commands::Bmr {
            height,
            weight,
            age,
            sex,
            units,
            activity,
        } => {
            let units = parse_units(&units)?;
            let height = validators::validate_height(&height)?;
            let weight = validators::validate_weight(&weight)?;
            let age = validators::validate_age(&age)?;
            let sex = sex
                .parse::<Sex>()
                .map_err(|_| "Invalid sex. Use 'male' or 'female'.")?;
            let activity = activity.parse::<ActivityLevel>().map_err(|_| {
                "Invalid activity. Use sedentary, light, moderate, active, or very-active."
            })?;

            let (height_cm, weight_kg) = to_metric(height, weight, units);
            let metrics = BodyMetrics::compute(sex, activity, weight_kg, height_cm, age)
                .ok_or("Height and weight must be positive")?;

            println!("BMR:          {:.0} kcal/day", metrics.bmr);
            println!(
                "Daily target: {:.0} kcal/day ({})",
                metrics.daily_calories, activity
            );
            println!("Meal plan:");
            println!("  Breakfast   {} kcal", metrics.meal_plan.breakfast);
            println!("  Lunch       {} kcal", metrics.meal_plan.lunch);
            println!("  Dinner      {} kcal", metrics.meal_plan.dinner);
            println!("  Snacks      {} kcal", metrics.meal_plan.snacks);
        }
        Commands::Convert { value, units } => {
            let units = parse_units(&units)?;
            validators::validate_height(&value)?;
            let dual = height::to_dual(&value, units);
            println!(
                "{} ft {} {}",
                height::format_height(dual.feet),
                height::format_height(dual.secondary),
                units.unit_label()
            );
        }
    }
    Ok(())
}

fn launch_gui() -> ExitCode {
    let result = iced::application(app::State::new, app::State::update, app::State::view)
        .window(iced::window::Settings {
            size: Size::new(560.0, 720.0),
            ..Default::default()
        })
        .title("Vitals")
        .theme(|_state: &app::State| iced::Theme::Dark)
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
