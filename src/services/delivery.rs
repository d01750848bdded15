use crate::services::locations::LocationTable;

/// Kitchen time added to every order before it leaves.
pub const PREPARATION_MINUTES: i32 = 10;

/// Estimated minutes until an order of `item_count` items reaches `location`.
///
/// Unknown locations use the table's default transit time.
pub fn estimate_delivery_minutes(locations: &LocationTable, location: &str, item_count: usize) -> i32 {
    locations.transit_minutes(location) + PREPARATION_MINUTES + item_count_surcharge(item_count)
}

fn item_count_surcharge(item_count: usize) -> i32 {
    match item_count {
        3..=4 => 5,
        5..=9 => 10,
        _ => 0,
    }
}
