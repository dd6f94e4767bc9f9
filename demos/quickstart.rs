use chrono::{NaiveDate, TimeZone};
use chrono_tz::America::New_York;
use workhours::{BusinessDays, BusinessHours, Config};

fn main() {
    let schedule = Config::default()
        .with_holiday(NaiveDate::from_ymd_opt(2010, 7, 5).unwrap())
        .build()
        .expect("valid schedule");

    let friday = New_York.with_ymd_and_hms(2010, 7, 2, 16, 50, 0).unwrap();
    let one_hour = BusinessHours::new(1);
    let two_days = BusinessDays::new(2);

    println!("schedule: {schedule}");
    println!("start: {friday}");
    println!("{one_hour} later: {}", one_hour.after(&friday, &schedule));
    println!("{two_days} later: {}", two_days.after(&friday, &schedule));
    println!("rolled back: {}", schedule.roll_backward(&friday));
}
