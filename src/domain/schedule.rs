use crate::domain::plant::Plant;
use chrono::{DateTime, Duration, Utc};

const SECONDS_PER_DAY: i64 = 86_400;
const WARNING_WINDOW_DAYS: i64 = 2;

/// Derived watering state of a plant at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NeverWatered,
    /// Watered at least once, but no frequency is known.
    NoSchedule,
    NeedsWatering,
    /// Due within the warning window; holds whole days remaining.
    Warning(i64),
    Ok(i64),
}

/// Computes the status from the last watering and the recommended frequency.
///
/// `now` must be read fresh by the caller at compute time; due-ness changes
/// with real time and must never come from a cached clock.
pub fn status(plant: &Plant, now: DateTime<Utc>) -> Status {
    let Some(last_watered) = plant.last_watered else {
        return Status::NeverWatered;
    };
    let Some(frequency_days) = plant.frequency_days() else {
        return Status::NoSchedule;
    };

    let next_due = last_watered + Duration::days(i64::from(frequency_days));
    let days_remaining = ceil_days(next_due - now);

    if days_remaining <= 0 {
        Status::NeedsWatering
    } else if days_remaining <= WARNING_WINDOW_DAYS {
        Status::Warning(days_remaining)
    } else {
        Status::Ok(days_remaining)
    }
}

// Fractional remainders round up: due in 30 hours means 2 days remaining.
fn ceil_days(remaining: Duration) -> i64 {
    let seconds = remaining.num_seconds();
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plant::WateringInfo;
    use chrono::TimeZone;

    fn plant_watered_at(ts: DateTime<Utc>, frequency_days: u32) -> Plant {
        let mut plant = Plant::new("Monstera Deliciosa").with_watering(WateringInfo {
            frequency_days,
            description: String::new(),
        });
        plant.water(ts);
        plant
    }

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    #[test]
    fn unwatered_plant_is_never_watered() {
        let plant = Plant::new("Snake Plant");
        assert_eq!(status(&plant, Utc::now()), Status::NeverWatered);
    }

    #[test]
    fn watered_without_frequency_has_no_schedule() {
        let mut plant = Plant::new("Snake Plant");
        plant.water(Utc::now());
        assert_eq!(status(&plant, Utc::now()), Status::NoSchedule);
    }

    #[test]
    fn due_exactly_on_day_seven() {
        // Watered day 0, frequency 7, evaluated day 7 at the same time of
        // day: zero days remaining, needs watering.
        let plant = plant_watered_at(at(2026, 8, 1, 9), 7);
        assert_eq!(status(&plant, at(2026, 8, 8, 9)), Status::NeedsWatering);
    }

    #[test]
    fn overdue_is_needs_watering() {
        let plant = plant_watered_at(at(2026, 8, 1, 9), 7);
        assert_eq!(status(&plant, at(2026, 8, 20, 9)), Status::NeedsWatering);
    }

    #[test]
    fn two_days_out_is_a_warning() {
        // Same plant evaluated on day 5: exactly 2 whole days remaining.
        let plant = plant_watered_at(at(2026, 8, 1, 9), 7);
        assert_eq!(status(&plant, at(2026, 8, 6, 9)), Status::Warning(2));
    }

    #[test]
    fn thirty_hours_rounds_up_to_two_days() {
        let plant = plant_watered_at(at(2026, 8, 1, 0), 7);
        // Due 2026-08-08 00:00; now is 30 hours earlier.
        let now = at(2026, 8, 6, 18);
        assert_eq!(status(&plant, now), Status::Warning(2));
    }

    #[test]
    fn one_day_out_is_a_warning() {
        let plant = plant_watered_at(at(2026, 8, 1, 9), 7);
        assert_eq!(status(&plant, at(2026, 8, 7, 9)), Status::Warning(1));
    }

    #[test]
    fn far_out_reports_exact_count() {
        let plant = plant_watered_at(at(2026, 8, 1, 9), 14);
        assert_eq!(status(&plant, at(2026, 8, 4, 9)), Status::Ok(11));
    }

    #[test]
    fn partial_day_rounds_up_outside_the_window() {
        let plant = plant_watered_at(at(2026, 8, 1, 12), 7);
        // 6 days and 21 hours remaining reports as 7.
        assert_eq!(status(&plant, at(2026, 8, 1, 15)), Status::Ok(7));
    }
}
