#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::app_system::{Marketplace, MarketplaceConfig};
    use crate::domain::{BookingDraft, BookingStatus, RegisterData, Role, ServiceCategory};
    use crate::error::AuthError;
    use crate::query::{BookingQuery, BookingScope, ProviderQuery};

    fn system() -> Marketplace {
        Marketplace::new(MarketplaceConfig::ephemeral())
    }

    #[tokio::test]
    async fn demo_customer_login_and_failed_retry() {
        let system = system();
        let auth = &system.identity_client;

        let identity = auth
            .login("customer@demo.com".to_string(), "demo123".to_string())
            .await
            .unwrap();
        assert_eq!(identity.role, Role::Customer);

        let err = auth
            .login("customer@demo.com".to_string(), "wrong".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        // The failed attempt leaves the previous session in place.
        assert_eq!(auth.current().await.unwrap(), Some(identity));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn provider_registration_requires_approval_before_login_matters() {
        let system = system();
        let auth = &system.identity_client;

        let provider = auth
            .register(RegisterData {
                email: "new.provider@demo.com".to_string(),
                password: "pw".to_string(),
                name: "Ashok Pillai".to_string(),
                role: Role::Provider,
                phone: None,
                location: Some("Chennai".to_string()),
            })
            .await
            .unwrap();
        assert!(!provider.is_approved);
        assert_eq!(auth.current().await.unwrap(), None);

        // The provider can still authenticate; approval is a separate gate.
        let logged_in = auth
            .login("new.provider@demo.com".to_string(), "pw".to_string())
            .await
            .unwrap();
        assert!(!logged_in.is_approved);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_registration_against_seeded_account_fails() {
        let system = system();
        let err = system
            .identity_client
            .register(RegisterData {
                email: "customer@demo.com".to_string(),
                password: "pw".to_string(),
                name: "Someone Else".to_string(),
                role: Role::Customer,
                phone: None,
                location: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::DuplicateEmail);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn catalog_search_respects_filters_and_availability() {
        let system = system();
        let catalog = &system.catalog_client;

        let electricians = catalog
            .search(ProviderQuery {
                category: Some(ServiceCategory::Electrician),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(!electricians.is_empty());
        assert!(electricians
            .iter()
            .all(|p| p.category == ServiceCategory::Electrician && p.available));

        let mumbai_electricians = catalog
            .search(ProviderQuery {
                category: Some(ServiceCategory::Electrician),
                location: Some("Mumbai".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(mumbai_electricians.len() <= electricians.len());
        assert!(mumbai_electricians.iter().all(|p| p.location == "Mumbai"));

        // Rating sort is descending.
        let all = catalog.search(ProviderQuery::default()).await.unwrap();
        for pair in all.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn booking_flow_from_search_to_rating() {
        let system = system();

        system
            .identity_client
            .login("customer@demo.com".to_string(), "demo123".to_string())
            .await
            .unwrap();

        let id = system
            .booking_client
            .create_booking(BookingDraft {
                customer_id: "USR0001".to_string(),
                customer_name: "Demo Customer".to_string(),
                provider_id: "PRV0001".to_string(),
                service: "Wiring Installation".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
                time_slot: "09:00 AM".to_string(),
                amount: 900,
                address: "44, Street 2, Mumbai".to_string(),
                notes: String::new(),
            })
            .await
            .unwrap();

        let bookings = &system.booking_client;
        let accepted = bookings.accept(id.clone()).await.unwrap();
        assert_eq!(accepted.status, BookingStatus::Accepted);
        let completed = bookings.complete(id.clone()).await.unwrap();
        assert_eq!(completed.status, BookingStatus::Completed);
        let rated = bookings.rate(id.clone(), 4).await.unwrap();
        assert_eq!(rated.rating, Some(4));

        // Cancelling a completed booking is rejected.
        let err = bookings.cancel(id).await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::BookingError::IllegalTransition {
                from: BookingStatus::Completed,
                to: BookingStatus::Cancelled,
            }
        ));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn dashboards_see_only_their_own_bookings() {
        let system = system();
        let bookings = &system.booking_client;

        let customer_view = bookings
            .list_bookings(
                BookingScope::Customer("USR0001".to_string()),
                BookingQuery::default(),
            )
            .await
            .unwrap();
        assert!(!customer_view.is_empty());
        assert!(customer_view.iter().all(|b| b.customer_id == "USR0001"));

        let provider_view = bookings
            .list_bookings(
                BookingScope::Provider("PRV0001".to_string()),
                BookingQuery::default(),
            )
            .await
            .unwrap();
        assert!(provider_view.iter().all(|b| b.provider_id == "PRV0001"));

        let admin_view = bookings
            .list_bookings(BookingScope::All, BookingQuery::default())
            .await
            .unwrap();
        assert!(admin_view.len() >= customer_view.len());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn admin_moderation_approves_and_blocks() {
        let system = system();

        // Approve one pending provider.
        let pending = system.catalog_client.pending_providers().await.unwrap();
        assert!(!pending.is_empty());
        let first = pending[0].id.clone();
        system
            .catalog_client
            .approve_provider(first.clone())
            .await
            .unwrap();
        let approved = system
            .catalog_client
            .get_provider(first)
            .await
            .unwrap()
            .unwrap();
        assert!(approved.verified);

        // Block the demo customer; their active session is untouched.
        system
            .identity_client
            .login("customer@demo.com".to_string(), "demo123".to_string())
            .await
            .unwrap();
        let blocked = system
            .identity_client
            .block_user("USR0001".to_string())
            .await
            .unwrap();
        assert!(blocked.is_blocked);
        assert!(system.identity_client.current().await.unwrap().is_some());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn provider_stats_cover_seeded_statuses() {
        let system = system();
        let stats = system
            .booking_client
            .stats(BookingScope::Customer("USR0001".to_string()))
            .await
            .unwrap();
        assert!(stats.total >= 6);
        assert!(stats.pending >= 2);
        assert!(stats.completed >= 1);
        assert!(stats.revenue >= 1500);
        system.shutdown().await.unwrap();
    }
}
