//! Availability engine: date bookability and slot generation

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::{enums::Weekday, BlockedDate, WeeklyRule};

/// Find the weekly rule covering a date's weekday
fn rule_for(date: NaiveDate, rules: &[WeeklyRule]) -> Option<&WeeklyRule> {
    let day = Weekday::of(date) as i16;
    rules.iter().find(|r| r.day_of_week == day)
}

/// A rule with inverted times is rejected at write time; if one slips through
/// anyway the day is treated as closed rather than crashing.
fn is_well_formed(rule: &WeeklyRule) -> bool {
    rule.open_time < rule.close_time
}

/// Whether a date can be booked at all.
///
/// Past dates are never bookable, a blocked date overrides the weekly rule,
/// and a weekday without a rule fails closed.
pub fn is_date_bookable(
    date: NaiveDate,
    today: NaiveDate,
    rules: &[WeeklyRule],
    blocked: &[BlockedDate],
) -> bool {
    if date < today {
        return false;
    }
    if blocked.iter().any(|b| b.blocked_date == date) {
        return false;
    }
    match rule_for(date, rules) {
        Some(rule) => rule.is_available && is_well_formed(rule),
        None => false,
    }
}

/// Bookable slot starts for a date, in ascending order.
///
/// Slots step from `open_time` by `granularity_minutes` and include every
/// start up to and including `close_time` itself (a customer may book the
/// closing-time slot; this mirrors how providers advertise their hours).
/// Returns empty when the date is not bookable or the granularity is zero.
pub fn bookable_slots(
    date: NaiveDate,
    today: NaiveDate,
    rules: &[WeeklyRule],
    blocked: &[BlockedDate],
    granularity_minutes: u32,
) -> Vec<NaiveTime> {
    if granularity_minutes == 0 || !is_date_bookable(date, today, rules, blocked) {
        return Vec::new();
    }
    let rule = match rule_for(date, rules) {
        Some(r) => r,
        None => return Vec::new(),
    };

    let step = Duration::minutes(i64::from(granularity_minutes));
    let mut slots = Vec::new();
    let mut current = rule.open_time;
    while current <= rule.close_time {
        slots.push(current);
        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            // stepping past midnight; the day is over
            break;
        }
        current = next;
    }
    slots
}
