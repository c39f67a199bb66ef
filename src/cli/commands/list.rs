use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::{HISTORY_LIMIT, HistoryManager, HistoryState};
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{detail, header, warning};
use crate::utils::colors::{GREY, RESET, color_for_optional_figure, color_for_total};
use crate::utils::date::local_date;
use crate::utils::formatting::{format_figure, format_kg};
use crate::utils::table::{Column, Table};

/// Load the owner's history, warning (not failing) when the store errors.
pub(crate) fn load_history(pool: &DbPool, session: &Session) -> HistoryManager {
    let mut history = HistoryManager::new(session.user_id());
    if let Err(e) = history.load(pool) {
        report_load_failure(&e);
    }
    history
}

pub(crate) fn report_load_failure(e: &AppError) {
    warning(e);
    if let Some(d) = e.detail() {
        detail(d);
    }
}

fn figure_cell(value: Option<f64>, unit: &str) -> String {
    format!(
        "{}{}{}",
        color_for_optional_figure(value),
        format_figure(value, unit),
        RESET
    )
}

/// Print the history card: newest first, totals with two decimals.
pub fn print_history(history: &HistoryManager, cfg: &Config) {
    header("Recent Calculations");
    println!("{GREY}Your last {HISTORY_LIMIT} carbon footprint calculations{RESET}\n");

    match history.state() {
        HistoryState::Loading => println!("Loading..."),
        HistoryState::Empty => println!("No calculations yet"),
        HistoryState::Loaded => {
            let mut table = Table::new(vec![
                Column::left("#"),
                Column::left("Date"),
                Column::right("kg CO₂"),
                Column::right("Electricity"),
                Column::right("Fuel"),
                Column::right("Travel"),
                Column::right("Waste"),
                Column::left("Id"),
            ]);

            for (i, r) in history.records().iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    local_date(&r.created_at),
                    format!(
                        "{}{}{}",
                        color_for_total(r.total_carbon_kg),
                        format_kg(r.total_carbon_kg),
                        RESET
                    ),
                    figure_cell(r.electricity_kwh, "kWh"),
                    figure_cell(r.fuel_liters, "L"),
                    figure_cell(r.travel_km, "km"),
                    figure_cell(r.waste_kg, "kg"),
                    r.id.to_string(),
                ]);
            }

            print!("{}", table.render(&cfg.separator_char));
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::List = cmd {
        let session = session.ok_or(AppError::NoSession)?;
        let pool = DbPool::open(&cfg.database_path())?;

        let history = load_history(&pool, session);
        print_history(&history, cfg);
    }
    Ok(())
}
