use crate::entity::{Customer, PriceList, RateTier, Rental, RentalStatus, Vehicle};
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

pub const BANK_ACCOUNT_NUMBER: &str = "CZ12 3456 7890 1234 5678 9012";

/// sample fleet shown on a fresh install, a small czech van rental
pub fn vehicles(now: DateTime<Utc>) -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: String::from("v1"),
            created_at: now,
            brand: String::from("Ford Transit"),
            model: String::from("L3H2"),
            year: 2022,
            license_plate: String::from("5B2 1234"),
            vin: String::from("WF0XXXTTGXGA12345"),
            in_maintenance: false,
            pricing: PriceList::from_iter([
                (RateTier::FourHours, 700),
                (RateTier::SixHours, 900),
                (RateTier::TwelveHours, 1100),
                (RateTier::TwentyFourHours, 1300),
                (RateTier::Daily, 1300),
            ]),
            service_records: vec![],
        },
        Vehicle {
            id: String::from("v2"),
            created_at: now,
            brand: String::from("Mercedes-Benz Sprinter"),
            model: String::from("316 CDI"),
            year: 2021,
            license_plate: String::from("3E9 5678"),
            vin: String::from("WDB9066351N123456"),
            in_maintenance: false,
            pricing: PriceList::from_iter([
                (RateTier::FourHours, 800),
                (RateTier::SixHours, 1000),
                (RateTier::TwelveHours, 1300),
                (RateTier::TwentyFourHours, 1500),
                (RateTier::Daily, 1500),
            ]),
            service_records: vec![],
        },
        Vehicle {
            id: String::from("v3"),
            created_at: now,
            brand: String::from("Renault Master"),
            model: String::from("L2H2"),
            year: 2023,
            license_plate: String::from("1AD 9012"),
            vin: String::from("VF1MA0H0G12345678"),
            in_maintenance: false,
            pricing: PriceList::from_iter([
                (RateTier::FourHours, 750),
                (RateTier::SixHours, 950),
                (RateTier::TwelveHours, 1200),
                (RateTier::TwentyFourHours, 1400),
                (RateTier::Daily, 1400),
            ]),
            service_records: vec![],
        },
    ]
}

pub fn customers(now: DateTime<Utc>) -> Vec<Customer> {
    vec![
        Customer {
            id: String::from("c1"),
            created_at: now,
            first_name: String::from("Jan"),
            last_name: String::from("Novák"),
            email: String::from("jan.novak@example.com"),
            phone: String::from("+420 123 456 789"),
            id_card_number: String::from("123456789"),
            drivers_license_number: String::from("C98765432"),
            drivers_license_image_path: None,
        },
        Customer {
            id: String::from("c2"),
            created_at: now,
            first_name: String::from("Petra"),
            last_name: String::from("Svobodová"),
            email: String::from("petra.svobodova@example.com"),
            phone: String::from("+420 987 654 321"),
            id_card_number: String::from("987654321"),
            drivers_license_number: String::from("D12345678"),
            drivers_license_image_path: None,
        },
    ]
}

/// sample rentals positioned relative to `now` so the dashboard has one
/// active, one completed and one upcoming entry on a fresh install
pub fn rentals(now: DateTime<Utc>) -> Vec<Rental> {
    vec![
        Rental {
            id: String::from("r1"),
            vehicle_id: String::from("v3"),
            customer_id: String::from("c1"),
            starts_at: day_at(now, -2, 10),
            ends_at: day_at(now, 1, 18),
            total_price: 3 * 1400,
            status: RentalStatus::Active,
            digital_consent_at: None,
            created_at: day_at(now, -2, 10),
        },
        Rental {
            id: String::from("r2"),
            vehicle_id: String::from("v1"),
            customer_id: String::from("c2"),
            starts_at: day_at(now, -10, 9),
            ends_at: day_at(now, -7, 12),
            total_price: 3 * 1300,
            status: RentalStatus::Completed,
            digital_consent_at: None,
            created_at: day_at(now, -10, 9),
        },
        Rental {
            id: String::from("r3"),
            vehicle_id: String::from("v2"),
            customer_id: String::from("c1"),
            starts_at: day_at(now, 5, 14),
            ends_at: day_at(now, 8, 14),
            total_price: 3 * 1500,
            status: RentalStatus::Upcoming,
            digital_consent_at: None,
            created_at: now,
        },
    ]
}

/// whole hour on a day relative to the day of `now`
fn day_at(now: DateTime<Utc>, days_from_today: i64, hour: i64) -> DateTime<Utc> {
    let midnight = Utc.from_utc_datetime(&now.date_naive().and_time(NaiveTime::MIN));

    midnight + Duration::days(days_from_today) + Duration::hours(hour)
}
