//! Deterministic demo data. The fixtures cover every category, several
//! locations, and every booking status so dashboards and tests have something
//! to show.

use chrono::{NaiveDate, Utc};

use crate::domain::{
    Booking, BookingStatus, Identity, Provider, Role, ServiceCategory,
};

pub const LOCATIONS: [&str; 10] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Hyderabad",
    "Pune",
    "Kolkata",
    "Jaipur",
    "Noida",
    "Surat",
];

pub const TIME_SLOTS: [&str; 9] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
    "05:00 PM", "06:00 PM",
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The three demo accounts, with their passwords.
pub fn demo_identities() -> Vec<(Identity, String)> {
    vec![
        (
            Identity {
                id: "USR0001".to_string(),
                email: "customer@demo.com".to_string(),
                name: "Demo Customer".to_string(),
                role: Role::Customer,
                phone: Some("+91 9876543210".to_string()),
                location: Some("Mumbai".to_string()),
                is_approved: true,
                is_blocked: false,
            },
            "demo123".to_string(),
        ),
        (
            Identity {
                id: "PRV0001".to_string(),
                email: "provider@demo.com".to_string(),
                name: "Demo Provider".to_string(),
                role: Role::Provider,
                phone: Some("+91 9876543211".to_string()),
                location: Some("Delhi".to_string()),
                is_approved: true,
                is_blocked: false,
            },
            "demo123".to_string(),
        ),
        (
            Identity {
                id: "ADM0001".to_string(),
                email: "admin@localx.com".to_string(),
                name: "Admin User".to_string(),
                role: Role::Admin,
                phone: None,
                location: None,
                is_approved: true,
                is_blocked: false,
            },
            "admin123".to_string(),
        ),
    ]
}

struct ProviderSpec {
    name: &'static str,
    category: ServiceCategory,
    location: &'static str,
    rating: f32,
    reviews: u32,
    experience: u32,
    skill_count: usize,
    price_range: &'static str,
    available: bool,
    verified: bool,
    completed_jobs: u32,
    response_time: &'static str,
}

/// Two providers per category; one unverified (pending approval) and one
/// currently unavailable, so every admin and search path has data.
pub fn demo_providers() -> Vec<Provider> {
    use ServiceCategory::*;
    let specs = [
        ProviderSpec {
            name: "Rahul Sharma",
            category: Electrician,
            location: "Mumbai",
            rating: 4.8,
            reviews: 320,
            experience: 12,
            skill_count: 3,
            price_range: "₹200 - ₹2000",
            available: true,
            verified: true,
            completed_jobs: 480,
            response_time: "15 mins",
        },
        ProviderSpec {
            name: "Amit Verma",
            category: Electrician,
            location: "Delhi",
            rating: 4.3,
            reviews: 150,
            experience: 6,
            skill_count: 2,
            price_range: "₹200 - ₹2000",
            available: true,
            verified: true,
            completed_jobs: 210,
            response_time: "25 mins",
        },
        ProviderSpec {
            name: "Sunita Patel",
            category: Plumber,
            location: "Mumbai",
            rating: 4.6,
            reviews: 210,
            experience: 9,
            skill_count: 3,
            price_range: "₹150 - ₹1500",
            available: true,
            verified: true,
            completed_jobs: 330,
            response_time: "20 mins",
        },
        ProviderSpec {
            name: "Vikram Singh",
            category: Plumber,
            location: "Pune",
            rating: 4.1,
            reviews: 95,
            experience: 4,
            skill_count: 2,
            price_range: "₹150 - ₹1500",
            available: false,
            verified: true,
            completed_jobs: 120,
            response_time: "35 mins",
        },
        ProviderSpec {
            name: "Rajesh Kumar",
            category: Mechanic,
            location: "Bangalore",
            rating: 4.7,
            reviews: 275,
            experience: 14,
            skill_count: 3,
            price_range: "₹300 - ₹5000",
            available: true,
            verified: true,
            completed_jobs: 510,
            response_time: "30 mins",
        },
        ProviderSpec {
            name: "Deepak Joshi",
            category: Mechanic,
            location: "Chennai",
            rating: 4.0,
            reviews: 80,
            experience: 3,
            skill_count: 2,
            price_range: "₹300 - ₹5000",
            available: true,
            verified: false,
            completed_jobs: 90,
            response_time: "40 mins",
        },
        ProviderSpec {
            name: "Neha Gupta",
            category: Technician,
            location: "Hyderabad",
            rating: 4.9,
            reviews: 410,
            experience: 11,
            skill_count: 4,
            price_range: "₹200 - ₹3000",
            available: true,
            verified: true,
            completed_jobs: 620,
            response_time: "12 mins",
        },
        ProviderSpec {
            name: "Suresh Nair",
            category: Technician,
            location: "Mumbai",
            rating: 4.4,
            reviews: 185,
            experience: 7,
            skill_count: 3,
            price_range: "₹200 - ₹3000",
            available: true,
            verified: true,
            completed_jobs: 260,
            response_time: "18 mins",
        },
        ProviderSpec {
            name: "Priya Mehta",
            category: Barber,
            location: "Jaipur",
            rating: 4.5,
            reviews: 230,
            experience: 8,
            skill_count: 3,
            price_range: "₹100 - ₹2000",
            available: true,
            verified: true,
            completed_jobs: 400,
            response_time: "10 mins",
        },
        ProviderSpec {
            name: "Anil Das",
            category: Barber,
            location: "Kolkata",
            rating: 3.9,
            reviews: 60,
            experience: 2,
            skill_count: 2,
            price_range: "₹100 - ₹2000",
            available: true,
            verified: false,
            completed_jobs: 70,
            response_time: "22 mins",
        },
        ProviderSpec {
            name: "Kavita Rao",
            category: Freelancer,
            location: "Bangalore",
            rating: 4.8,
            reviews: 340,
            experience: 10,
            skill_count: 3,
            price_range: "₹500 - ₹10000",
            available: true,
            verified: true,
            completed_jobs: 290,
            response_time: "45 mins",
        },
        ProviderSpec {
            name: "Manoj Iyer",
            category: Freelancer,
            location: "Delhi",
            rating: 4.2,
            reviews: 130,
            experience: 5,
            skill_count: 2,
            price_range: "₹500 - ₹10000",
            available: true,
            verified: true,
            completed_jobs: 150,
            response_time: "50 mins",
        },
    ];

    specs
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            let id = format!("PRV{:04}", index + 1);
            let skills: Vec<String> = spec
                .category
                .skills()
                .iter()
                .take(spec.skill_count)
                .map(|s| s.to_string())
                .collect();
            Provider {
                bio: format!(
                    "Experienced {} with {} years of expertise. Committed to quality service and customer satisfaction.",
                    spec.category.display_name().to_lowercase(),
                    spec.experience
                ),
                avatar: format!(
                    "https://api.dicebear.com/7.x/avataaars/svg?seed={}{}",
                    spec.name.replace(' ', ""),
                    index + 1
                ),
                id,
                name: spec.name.to_string(),
                category: spec.category,
                location: spec.location.to_string(),
                rating: spec.rating,
                reviews: spec.reviews,
                experience: spec.experience,
                skills,
                price_range: spec.price_range.to_string(),
                available: spec.available,
                verified: spec.verified,
                completed_jobs: spec.completed_jobs,
                response_time: spec.response_time.to_string(),
            }
        })
        .collect()
}

/// Sample bookings for the demo customer and demo provider, one per status
/// plus a rated completed one.
pub fn demo_bookings() -> Vec<Booking> {
    let base = [
        (
            "PRV0001",
            "Rahul Sharma",
            ServiceCategory::Electrician,
            "Wiring Installation",
            date(2026, 9, 2),
            "10:00 AM",
            BookingStatus::Pending,
            800,
            None,
        ),
        (
            "PRV0003",
            "Sunita Patel",
            ServiceCategory::Plumber,
            "Leak Repair",
            date(2026, 9, 5),
            "02:00 PM",
            BookingStatus::Accepted,
            650,
            None,
        ),
        (
            "PRV0007",
            "Neha Gupta",
            ServiceCategory::Technician,
            "AC Repair",
            date(2026, 8, 12),
            "11:00 AM",
            BookingStatus::Completed,
            1500,
            Some(5),
        ),
        (
            "PRV0009",
            "Priya Mehta",
            ServiceCategory::Barber,
            "Haircut",
            date(2026, 8, 3),
            "05:00 PM",
            BookingStatus::Cancelled,
            400,
            None,
        ),
        (
            "PRV0005",
            "Rajesh Kumar",
            ServiceCategory::Mechanic,
            "Brake Service",
            date(2026, 8, 20),
            "09:00 AM",
            BookingStatus::Rejected,
            2200,
            None,
        ),
        (
            "PRV0001",
            "Rahul Sharma",
            ServiceCategory::Electrician,
            "Ceiling Fan Installation",
            date(2026, 9, 9),
            "04:00 PM",
            BookingStatus::Pending,
            500,
            None,
        ),
    ];

    base.into_iter()
        .enumerate()
        .map(
            |(index, (provider_id, provider_name, category, service, date, slot, status, amount, rating))| {
                Booking {
                    id: format!("BKG{:05}", index + 1),
                    customer_id: "USR0001".to_string(),
                    customer_name: "Demo Customer".to_string(),
                    provider_id: provider_id.to_string(),
                    provider_name: provider_name.to_string(),
                    service: service.to_string(),
                    category,
                    date,
                    time_slot: slot.to_string(),
                    status,
                    amount,
                    address: format!("{}, Street {}, Mumbai", 10 + index, index + 1),
                    notes: "Please bring necessary tools.".to_string(),
                    rating,
                    created_at: Utc::now(),
                }
            },
        )
        .collect()
}
