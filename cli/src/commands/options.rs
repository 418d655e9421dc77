use anyhow::Result;

use accessmap::{days, hours, weeks, HourRange, Resolved, ScoreTable, SelectionState};

use crate::cli::{Cli, OptionsArgs};

pub fn run(_cli: &Cli, args: &OptionsArgs) -> Result<()> {
    let table = ScoreTable::read_csv(&args.scores)?;

    let Some(week_raw) = &args.week else {
        for week in weeks(&table) { println!("{week}") }
        return Ok(());
    };

    let week = SelectionState::resolve_week(&table, week_raw)?;

    let Some(day_raw) = &args.day else {
        for day in days(&table, &week) { println!("{day}") }
        return Ok(());
    };

    match SelectionState::resolve(&table, week_raw, day_raw, None)? {
        Resolved::NoHours { .. } => eprintln!("warning: No data available for this day."),
        Resolved::Ready(selection) => {
            let observed = hours(&table, &selection.week, &selection.day);
            if let Some(range) = HourRange::spanning(&observed) {
                println!("range {range}");
            }
            let observed = observed.iter().map(i64::to_string).collect::<Vec<_>>().join(" ");
            println!("observed {observed}");
        }
    }
    Ok(())
}
