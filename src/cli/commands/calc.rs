use crate::cli::commands::list::{load_history, print_history};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calc::{CalcLogic, SaveOutcome, Submission};
use crate::core::estimator::{breakdown, reduction_tips};
use crate::core::session::Session;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::usage::{UsageField, UsageInput};
use crate::ui::messages::{detail, error, header, success};
use crate::utils::colors::{GREY, RESET, YELLOW};
use crate::utils::formatting::{format_kg, pad_left, pad_right};

/// Build the usage input from the raw flag values.
///
/// Text that is not a number is kept and later counts as "not provided";
/// a negative number is refused.
pub fn usage_from_args(
    electricity: &Option<String>,
    fuel: &Option<String>,
    travel: &Option<String>,
    waste: &Option<String>,
) -> AppResult<UsageInput> {
    let usage = UsageInput::new(
        UsageField::from_raw(electricity.clone()),
        UsageField::from_raw(fuel.clone()),
        UsageField::from_raw(travel.clone()),
        UsageField::from_raw(waste.clone()),
    );

    if let Some((category, raw)) = usage.negative_fields().first() {
        return Err(AppError::InvalidUsage {
            field: category.key(),
            value: raw.to_string(),
        });
    }

    Ok(usage)
}

fn print_result(sub: &Submission, show_tips: bool) {
    header("Your Result");
    println!(
        "   {YELLOW}{} kg CO₂{RESET} {GREY}emissions per month{RESET}\n",
        format_kg(sub.total_kg())
    );

    for share in &sub.breakdown.shares {
        println!(
            "   {} {} × {:.1} = {} kg",
            pad_right(share.category.label(), 12),
            pad_left(
                &format!("{} {}", format_kg(share.usage), share.category.unit()),
                12
            ),
            share.category.factor(),
            pad_left(&format_kg(share.carbon_kg), 9),
        );
    }

    let tips = reduction_tips(sub.total_kg());
    if show_tips && !tips.is_empty() {
        println!("\n   Tips to reduce:");
        for tip in tips {
            println!("   • {tip}");
        }
    }
    println!();
}

pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Calc {
        electricity,
        fuel,
        travel,
        waste,
        no_save,
    } = cmd
    {
        let usage = usage_from_args(electricity, fuel, travel, waste)?;

        //
        // Result only: no session or store needed
        //
        if *no_save {
            let sub = Submission {
                breakdown: breakdown(&usage),
                saved: SaveOutcome::Skipped,
            };
            print_result(&sub, cfg.show_tips);
            return Ok(());
        }

        let session = session.ok_or(AppError::NoSession)?;
        let mut pool = DbPool::open(&cfg.database_path())?;

        let sub = CalcLogic::submit(&mut pool, Some(session), &usage);
        print_result(&sub, cfg.show_tips);

        match &sub.saved {
            SaveOutcome::Saved(record) => {
                success("Calculation saved! Your carbon footprint has been recorded.");
                ttlog_quiet(
                    &pool.conn,
                    "calc",
                    session.user_id(),
                    &format!(
                        "Saved {} kg CO₂ ({})",
                        format_kg(record.total_carbon_kg),
                        record.id
                    ),
                );
            }
            SaveOutcome::Failed(e) => {
                error(e);
                if let Some(d) = e.detail() {
                    detail(d);
                }
            }
            SaveOutcome::Skipped => {}
        }

        //
        // Refresh the history view
        //
        let history = load_history(&pool, session);
        print_history(&history, cfg);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_flags_are_not_errors() {
        let usage = usage_from_args(&Some("abc".into()), &None, &Some("12".into()), &None).unwrap();
        assert_eq!(usage.electricity_kwh.value_for_estimate(), 0.0);
        assert_eq!(usage.travel_km.value_for_storage(), Some(12.0));
    }

    #[test]
    fn negative_flags_are_rejected() {
        let err = usage_from_args(&None, &Some("-2".into()), &None, &None).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidUsage { field: "fuel", ref value } if value == "-2"
        ));
    }
}
