//! Pure transition rules.
//!
//! Each rule maps a state to the next state. A refused operation returns the
//! same speed and gear with a rejection status; an accepted one changes
//! exactly one of them by one.
//!
//! Callers must pass a state whose gear lies in `1..=table.top_gear()`.

use crate::core::{GearRange, GearTable, Operation, Status, TransmissionState};

fn range(table: &GearTable, gear: usize) -> &GearRange {
    &table.ranges()[gear - 1]
}

/// Dispatch `operation` to its rule.
pub(crate) fn apply(
    table: &GearTable,
    state: &TransmissionState,
    operation: Operation,
) -> TransmissionState {
    match operation {
        Operation::IncreaseSpeed => increase_speed(table, state),
        Operation::DecreaseSpeed => decrease_speed(table, state),
        Operation::IncreaseGear => increase_gear(table, state),
        Operation::DecreaseGear => decrease_gear(table, state),
    }
}

pub(crate) fn increase_speed(table: &GearTable, state: &TransmissionState) -> TransmissionState {
    if state.speed >= table.max_speed() {
        return state.with_status(Status::MaximumSpeed);
    }
    if state.speed >= range(table, state.gear).upper {
        return state.with_status(Status::IncreaseGearFirst);
    }
    after_speed_change(
        table,
        TransmissionState {
            speed: state.speed + 1,
            ..*state
        },
    )
}

pub(crate) fn decrease_speed(table: &GearTable, state: &TransmissionState) -> TransmissionState {
    if state.speed == 0 {
        return state.with_status(Status::MinimumSpeed);
    }
    if state.speed <= range(table, state.gear).lower {
        return state.with_status(Status::DecreaseGearFirst);
    }
    after_speed_change(
        table,
        TransmissionState {
            speed: state.speed - 1,
            ..*state
        },
    )
}

pub(crate) fn increase_gear(table: &GearTable, state: &TransmissionState) -> TransmissionState {
    if state.gear >= table.top_gear() {
        return state.with_status(Status::MaximumGear);
    }
    if state.speed < range(table, state.gear + 1).lower {
        return state.with_status(Status::IncreaseSpeedFirst);
    }
    TransmissionState {
        gear: state.gear + 1,
        status: Status::Ok,
        ..*state
    }
}

pub(crate) fn decrease_gear(table: &GearTable, state: &TransmissionState) -> TransmissionState {
    if state.gear <= 1 {
        return state.with_status(Status::MinimumGear);
    }
    if state.speed > range(table, state.gear - 1).upper {
        return state.with_status(Status::DecreaseSpeedFirst);
    }
    TransmissionState {
        gear: state.gear - 1,
        status: Status::Ok,
        ..*state
    }
}

/// Advise on shifting once speed has moved. Upshift advice wins.
fn after_speed_change(table: &GearTable, state: TransmissionState) -> TransmissionState {
    let status = if state.gear < table.top_gear()
        && state.speed >= range(table, state.gear + 1).lower
    {
        Status::MayIncreaseGear
    } else if state.gear > 1 && state.speed <= range(table, state.gear - 1).upper {
        Status::MayDecreaseGear
    } else {
        Status::Ok
    };
    state.with_status(status)
}
