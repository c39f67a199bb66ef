use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::format_kg;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let (count, users): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COUNT(DISTINCT user_id) FROM calculations",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Total calculations:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );
    println!("{}• Users:{} {}", CYAN, RESET, users);

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(created_at, 1, 10) FROM calculations ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(created_at, 1, 10) FROM calculations ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) AVERAGE FOOTPRINT
    //
    let avg: Option<f64> = pool
        .conn
        .query_row("SELECT AVG(total_carbon_kg) FROM calculations", [], |row| {
            row.get(0)
        })?;
    if let Some(a) = avg {
        println!("{}• Average footprint:{} {} kg CO₂", CYAN, RESET, format_kg(a));
    }

    println!();
    Ok(())
}
