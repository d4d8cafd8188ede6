//! Menu bar clock snapshot and en-US formatting (`Fri, Oct 16` / `3:07 PM`).

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Local wall-clock fields captured at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// 1-based month.
    pub month: u32,
    pub day: u32,
    /// 0 = Sunday.
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                month: date.get_month() + 1,
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                month: 1,
                day: 1,
                weekday: 4,
                hour: 0,
                minute: 0,
            }
        }
    }
}

/// `h:mm AM`, with midnight and noon shown as 12.
pub fn format_menu_time(snapshot: ClockSnapshot) -> String {
    let hour = match snapshot.hour % 12 {
        0 => 12,
        hour => hour,
    };
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{hour}:{:02} {suffix}", snapshot.minute)
}

/// `Fri, Oct 16`.
pub fn format_menu_date(snapshot: ClockSnapshot) -> String {
    let weekday = WEEKDAYS
        .get(snapshot.weekday as usize)
        .copied()
        .unwrap_or_default();
    let month = MONTHS
        .get(snapshot.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or_default();
    format!("{weekday}, {month} {}", snapshot.day)
}
