use crate::base_types::Time;

/// Knobs of the scheduling simulation. Text instances always run with the
/// defaults; JSON instances may override them via their "parameters"
/// section.
pub struct Config {
    pub scheduling: ConfigScheduling,
}

pub struct ConfigScheduling {
    /// how far a vehicle is pushed into the future when no remaining
    /// package fits it, so that other vehicles get a turn
    pub redispatch_delay: Time,
    /// maximal number of consecutive fruitless dispatch attempts before the
    /// scheduler reports SchedulerStalled instead of looping; generous, as
    /// a vehicle may legitimately redispatch many times while it waits for
    /// a larger vehicle to return
    pub stall_limit: u32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            scheduling: ConfigScheduling {
                redispatch_delay: Time::from_hours(0.1),
                stall_limit: 100_000,
            },
        }
    }
}
