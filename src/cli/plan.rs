use crate::{
    cli::{CurrentArgs, PlanArgs},
    prelude::*,
    reporter::{Reporter, Reporters, ScheduleReporter},
    tables::{build_intervals_table, build_reporters_table, build_schedule_table},
};

#[instrument(skip_all)]
pub fn plan(args: &PlanArgs) -> Result {
    let now = args.forecast.now();
    let mut reporters = Reporters::new(ScheduleReporter::new(args.engine.try_new_engine()?));
    let forecast = args.forecast.source.load();
    reporters.compute(forecast.as_deref());

    if args.json {
        println!("{:#}", reporters.to_json(now));
        return Ok(());
    }

    let schedule = reporters.schedule.schedule();
    if !schedule.is_empty() {
        println!("{}", build_intervals_table(&schedule.intervals));
        println!("{}", build_schedule_table(schedule, now));
    }
    println!("{}", build_reporters_table(&reporters, now));
    Ok(())
}

#[instrument(skip_all)]
pub fn current(args: &CurrentArgs) -> Result {
    let now = args.forecast.now();
    let mut reporter = ScheduleReporter::new(args.engine.try_new_engine()?);
    reporter.compute(args.forecast.source.load().as_deref());
    let action = reporter.schedule().current_action(now);
    info!(%now, status = %reporter.status(), %action, "gotcha");
    println!("{}", action.as_str());
    Ok(())
}
