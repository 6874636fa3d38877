use super::Time;

#[test]
fn travel_time_test() {
    let time = Time::travel(30.0, 70.0);
    assert_eq!(time.rounded_to_hundredths(), Time::from_hours(0.43));
}

#[test]
fn round_trip_doubles_the_travel_time_test() {
    let time = Time::travel(100.0, 70.0);
    assert_eq!(time.round_trip(), Time::from_hours(200.0 / 70.0));
}

#[test]
fn ordering_is_total_test() {
    let mut times = vec![
        Time::from_hours(2.86),
        Time::ZERO,
        Time::from_hours(0.1),
        Time::from_hours(2.71),
    ];
    times.sort();
    assert_eq!(
        times,
        vec![
            Time::ZERO,
            Time::from_hours(0.1),
            Time::from_hours(2.71),
            Time::from_hours(2.86),
        ]
    );
}

#[test]
fn addition_test() {
    assert_eq!(
        Time::from_hours(2.5) + Time::from_hours(0.25),
        Time::from_hours(2.75)
    );
}

#[test]
fn display_uses_two_decimal_places_test() {
    assert_eq!(Time::travel(125.0, 70.0).rounded_to_hundredths().to_string(), "1.79");
    assert_eq!(Time::ZERO.to_string(), "0.00");
}
