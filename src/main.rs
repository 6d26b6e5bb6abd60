mod app_system;
mod clients;
mod domain;
mod error;
mod messages;
mod query;
mod seed;
mod services;
mod session;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

use chrono::NaiveDate;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, Marketplace, MarketplaceConfig};
use crate::domain::{BookingDraft, ServiceCategory};
use crate::query::ProviderQuery;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting LOCAL X marketplace demo");

    let system = Marketplace::new(MarketplaceConfig::default());

    // Log in the demo customer.
    let span = tracing::info_span!("customer_login");
    let customer = async {
        info!("Logging in demo customer");
        system
            .identity_client
            .login("customer@demo.com".to_string(), "demo123".to_string())
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(user_id = %customer.id, "Customer logged in");

    // Search the catalog for electricians in Mumbai.
    let providers = system
        .catalog_client
        .search(ProviderQuery {
            category: Some(ServiceCategory::Electrician),
            location: Some("Mumbai".to_string()),
            ..Default::default()
        })
        .await
        .map_err(|e| e.to_string())?;

    info!(count = providers.len(), "Providers matched the search");

    // Book the top result and walk the booking through its lifecycle.
    if let Some(provider) = providers.first() {
        let span = tracing::info_span!("booking_flow");
        let flow = async {
            let booking_id = system
                .booking_client
                .create_booking(BookingDraft {
                    customer_id: customer.id.clone(),
                    customer_name: customer.name.clone(),
                    provider_id: provider.id.clone(),
                    service: provider
                        .skills
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "General Service".to_string()),
                    date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap_or_default(),
                    time_slot: seed::TIME_SLOTS[0].to_string(),
                    amount: 800,
                    address: "12, Street 4, Mumbai".to_string(),
                    notes: "Please bring necessary tools.".to_string(),
                })
                .await
                .map_err(|e| e.to_string())?;
            info!(booking_id = %booking_id, "Booking created");

            system
                .booking_client
                .accept(booking_id.clone())
                .await
                .map_err(|e| e.to_string())?;
            system
                .booking_client
                .complete(booking_id.clone())
                .await
                .map_err(|e| e.to_string())?;
            let rated = system
                .booking_client
                .rate(booking_id, 5)
                .await
                .map_err(|e| e.to_string())?;
            info!(rating = ?rated.rating, "Booking completed and rated");
            Ok::<(), String>(())
        }
        .instrument(span)
        .await;

        if let Err(e) = flow {
            error!(error = %e, "Booking flow failed");
        }
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
