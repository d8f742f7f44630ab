use anyhow::Context;
use calendar_dates::{parse_date, today};
use calendar_list::prelude::*;
use calendar_list_testing::CalendarRobot;

const VIEWPORT_SIZE: f32 = 360.0;

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let current = match std::env::args().nth(1) {
        Some(arg) => parse_date(&arg).with_context(|| format!("invalid start date {arg:?}"))?,
        None => today(),
    };

    println!("=== Calendar List Demo ===");
    println!("Horizontal list of 25 months around {current}, one month per page.");
    println!();

    let spec = CalendarListSpec::new()
        .past_scroll_range(12)
        .future_scroll_range(12)
        .horizontal(true)
        .paging_enabled(true)
        .calendar_width(VIEWPORT_SIZE)
        .static_header(true)
        .title_text("Calendar");
    let mut robot = CalendarRobot::new(
        spec,
        CalendarProps::new().current(current).selected([current]),
        VIEWPORT_SIZE,
    )
    .context("cannot build calendar list")?;

    robot.mount();
    report(&robot, "mounted");

    robot.drag_by(VIEWPORT_SIZE);
    report(&robot, "swiped forward one page");

    robot.drag_by(VIEWPORT_SIZE * 0.5);
    report(&robot, "half-way between two pages");

    robot.list_mut().press_header_arrow(HeaderArrow::Left);
    robot.settle();
    report(&robot, "pressed the left header arrow");

    let next = CalendarMonth::new(current).add_months(6).date();
    robot.set_props(CalendarProps::new().current(next).selected([next]));
    robot.settle();
    report(&robot, "parent moved `current` six months ahead");

    robot.list_mut().scroll_to_month(None);
    robot.settle();
    report(&robot, "scrolled back to the anchor month");

    println!();
    println!("Month changes announced:");
    for date in robot.log().month_change_strings() {
        println!("  {date}");
    }
    println!(
        "{} scroll commands sent, {} re-renders requested",
        robot.scroll_command_count(),
        robot.render_count()
    );
    Ok(())
}

fn report(robot: &CalendarRobot, step: &str) {
    let list = robot.list();
    let header = list
        .static_header()
        .map(|header| header.month.label())
        .unwrap_or_default();
    let materialized = list.rows().iter().filter(|row| row.is_materialized()).count();
    println!(
        "{step:<40} offset={:>7.1} visible={:?} header={header} materialized={materialized}",
        robot.position(),
        robot.visible_indices(),
    );
    log::debug!("Current month after '{step}': {}", list.current_month());
}
