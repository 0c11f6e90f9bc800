//! View Flow Tests
//!
//! Login, load, create and refresh flows driven through the resource
//! contract against a scripted transport.

#[cfg(test)]
mod tests {
    use crate::client::endpoints;
    use crate::transport::{Method, MockTransport};
    use crate::{
        submit_and_refresh, ApiClient, ApiError, FilamentTypeDraft, FilamentTypes, LoadEpoch, Loadable,
        MemoryTokenStore, NewPurchase, ProductDraft, Purchases, Resource, Session, Submitted, TokenStore,
        Warehouse,
    };
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup(token: Option<&str>) -> (ApiClient, MockTransport, MemoryTokenStore, Rc<Cell<u32>>) {
        let transport = MockTransport::new();
        let store = token.map(MemoryTokenStore::with_token).unwrap_or_default();
        let logouts = Rc::new(Cell::new(0));
        let counter = logouts.clone();
        let session = Session::restore(store.clone()).with_listener(move |t| {
            if t.is_none() {
                counter.set(counter.get() + 1);
            }
        });
        let client = ApiClient::new("http://localhost:3001", transport.clone(), session);
        (client, transport, store, logouts)
    }

    fn categories() -> serde_json::Value {
        json!([{ "id": 1, "name": "filament" }, { "id": 2, "name": "Tools" }])
    }

    #[tokio::test]
    async fn test_login_then_first_load() {
        let (client, transport, store, _) = setup(None);
        transport
            .reply(Method::Post, endpoints::LOGIN, 200, json!({ "token": "fresh" }))
            .reply(Method::Get, endpoints::FILAMENT_TYPES, 200, json!([]));

        assert!(!client.session().is_authenticated());
        client.login("hunter2").await.unwrap();
        assert_eq!(store.load().as_deref(), Some("fresh"));

        let data = FilamentTypes::fetch(&client).await.unwrap();
        assert!(data.is_empty());
        assert_eq!(transport.requests()[1].bearer.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_unauthorized_fetch_logs_out_filament_types() {
        let (client, transport, store, logouts) = setup(Some("expired"));
        transport.reply(Method::Get, endpoints::FILAMENT_TYPES, 401, json!({ "error": "jwt expired" }));

        let result = FilamentTypes::fetch(&client).await;

        assert_eq!(result, Err(ApiError::SessionExpired(401)));
        assert_eq!(store.load(), None);
        assert_eq!(logouts.get(), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_fetch_logs_out_purchases() {
        let (client, transport, store, logouts) = setup(Some("expired"));
        transport
            .reply(Method::Get, endpoints::FILAMENT_TYPES, 200, json!([]))
            .reply(Method::Get, endpoints::PURCHASES, 401, json!({}));

        assert_eq!(Purchases::fetch(&client).await, Err(ApiError::SessionExpired(401)));
        assert_eq!(store.load(), None);
        assert_eq!(logouts.get(), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_fetch_logs_out_warehouse() {
        let (client, transport, store, logouts) = setup(Some("expired"));
        transport
            .reply(Method::Get, endpoints::PRODUCT_CATEGORIES, 200, categories())
            .reply(Method::Get, endpoints::PRODUCTS, 401, json!({}));

        assert_eq!(Warehouse::fetch(&client).await, Err(ApiError::SessionExpired(401)));
        assert_eq!(store.load(), None);
        assert_eq!(logouts.get(), 1);
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_joint_load_fails_as_a_whole() {
        let (client, transport, store, _) = setup(Some("tok"));
        transport
            .reply(Method::Get, endpoints::PRODUCT_CATEGORIES, 200, categories())
            .reply(Method::Get, endpoints::PRODUCTS, 500, json!({}));

        let state = Loadable::from_result(Warehouse::fetch(&client).await);

        assert_eq!(state, Loadable::Failed("Something went wrong while loading data.".into()));
        assert_eq!(store.load().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_create_refreshes_exactly_once() {
        let (client, transport, _, _) = setup(Some("tok"));
        let spool = json!({ "id": 11, "manufacturer": "Polymaker", "material": "ASA", "color": "Grey" });
        transport
            .reply(Method::Post, endpoints::FILAMENT_TYPES, 201, spool.clone())
            .reply(Method::Get, endpoints::FILAMENT_TYPES, 200, json!([spool]));

        let draft = FilamentTypeDraft {
            manufacturer: "Polymaker".into(),
            material: "ASA".into(),
            color: "Grey".into(),
        };
        let created = Cell::new(false);
        let outcome = submit_and_refresh::<FilamentTypes>(&client, &draft.build().unwrap(), || created.set(true)).await;
        let Submitted::Refreshed(Ok(refreshed)) = &outcome else {
            panic!("expected a refreshed list, got {outcome:?}");
        };

        assert_eq!(transport.count(Method::Post, endpoints::FILAMENT_TYPES), 1);
        assert_eq!(transport.count(Method::Get, endpoints::FILAMENT_TYPES), 1);
        assert_eq!(refreshed.len(), 1);
        assert_eq!(refreshed[0].label(), "Polymaker ASA - Grey");
        assert!(created.get());
        assert_eq!(transport.pending(), 0);
    }

    #[tokio::test]
    async fn test_failed_create_skips_refresh() {
        let (client, transport, _, _) = setup(Some("tok"));
        transport
            .reply(Method::Get, endpoints::PRODUCT_CATEGORIES, 200, categories())
            .reply(Method::Get, endpoints::PRODUCTS, 200, json!([]))
            .reply(Method::Post, endpoints::PRODUCTS, 422, json!({ "error": "Unit is not supported" }));

        let stock = Warehouse::fetch(&client).await.unwrap();
        let mut draft = ProductDraft::default();
        draft.ensure_category(&stock.categories);
        draft.category_id = Some(2);
        draft.name = "Scraper".into();
        draft.unit = "lightyear".into();

        let created = Cell::new(false);
        let outcome =
            submit_and_refresh::<Warehouse>(&client, &draft.build(&stock.categories).unwrap(), || created.set(true))
                .await;

        let Submitted::Rejected(err) = &outcome else {
            panic!("expected a rejected create, got {outcome:?}");
        };
        assert_eq!(err.user_message(), "Unit is not supported");
        assert!(!created.get());
        assert_eq!(transport.count(Method::Get, endpoints::PRODUCTS), 1);
    }

    fn spool() -> serde_json::Value {
        json!({ "id": 3, "manufacturer": "Prusament", "material": "PETG", "color": "Orange" })
    }

    fn petg() -> crate::NewFilamentType {
        FilamentTypeDraft {
            manufacturer: "Prusament".into(),
            material: "PETG".into(),
            color: "Orange".into(),
        }
        .build()
        .unwrap()
    }

    #[tokio::test]
    async fn test_rejected_create_during_first_load_keeps_load_current() {
        let (client, transport, _, _) = setup(Some("tok"));
        transport
            .reply(Method::Post, endpoints::FILAMENT_TYPES, 400, json!({ "error": "dup" }))
            .reply(Method::Get, endpoints::FILAMENT_TYPES, 200, json!([spool()]));
        let epoch = LoadEpoch::new();
        let mut state = Loadable::Loading;

        // The mount load is still in flight when the form is submitted.
        let first_load = epoch.begin();
        let outcome = submit_and_refresh::<FilamentTypes>(&client, &petg(), || {
            epoch.begin();
        })
        .await;
        assert!(matches!(outcome, Submitted::Rejected(ApiError::Rejected { status: 400, .. })));

        let loaded = FilamentTypes::fetch(&client).await;
        if epoch.is_current(first_load) {
            state = Loadable::from_result(loaded);
        }

        assert_eq!(state.ready().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_successful_create_supersedes_first_load() {
        let (client, transport, _, _) = setup(Some("tok"));
        transport
            .reply(Method::Post, endpoints::FILAMENT_TYPES, 201, spool())
            .reply(Method::Get, endpoints::FILAMENT_TYPES, 200, json!([spool()]));
        let epoch = LoadEpoch::new();
        let mut states = Vec::new();

        let first_load = epoch.begin();
        let mut refresh = None;
        let outcome = submit_and_refresh::<FilamentTypes>(&client, &petg(), || {
            refresh = Some(epoch.begin());
            states.push(Loadable::Loading);
        })
        .await;
        let Submitted::Refreshed(result) = outcome else {
            panic!("expected a refresh after a successful create");
        };
        let refresh = refresh.expect("refresh ticket taken after the create");
        if epoch.is_current(refresh) {
            states.push(Loadable::from_result(result));
        }

        assert!(!epoch.is_current(first_load));
        assert_eq!(states.len(), 2);
        assert!(states[0].is_loading());
        assert_eq!(states[1].ready().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_failed_refresh_after_create_is_reported() {
        let (client, transport, _, _) = setup(Some("tok"));
        transport
            .reply(Method::Post, endpoints::FILAMENT_TYPES, 201, spool())
            .reply(Method::Get, endpoints::FILAMENT_TYPES, 500, json!({}));

        let outcome = submit_and_refresh::<FilamentTypes>(&client, &petg(), || {}).await;

        assert_eq!(outcome, Submitted::Refreshed(Err(ApiError::Status(500))));
    }

    #[tokio::test]
    async fn test_unauthorized_create_logs_out() {
        let (client, transport, store, logouts) = setup(Some("expired"));
        transport.reply(Method::Post, endpoints::PURCHASES, 401, json!({ "error": "jwt expired" }));
        let payload = NewPurchase {
            filament_type_id: 5,
            price: 50.0,
            initial_weight: 1000.0,
            currency: crate::Currency::Eur,
            exchange_rate: 4.3,
        };

        let outcome = submit_and_refresh::<Purchases>(&client, &payload, || {}).await;

        assert_eq!(outcome, Submitted::Rejected(ApiError::SessionExpired(401)));
        assert_eq!(store.load(), None);
        assert_eq!(logouts.get(), 1);
        assert_eq!(transport.count(Method::Get, endpoints::PURCHASES), 0);
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let (client, transport, _, _) = setup(Some("tok"));
        let products = json!([{ "id": 1, "categoryId": 2, "name": "Glue", "unit": "ml", "category": { "id": 2, "name": "Tools" } }]);
        for _ in 0..2 {
            transport
                .reply(Method::Get, endpoints::PRODUCT_CATEGORIES, 200, categories())
                .reply(Method::Get, endpoints::PRODUCTS, 200, products.clone());
        }

        let first = Warehouse::fetch(&client).await.unwrap();
        let second = Warehouse::fetch(&client).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.products[0].category_name(&first.categories), "Tools");
    }

    #[tokio::test]
    async fn test_purchase_book_joins_both_collections() {
        let (client, transport, _, _) = setup(Some("tok"));
        transport
            .reply(
                Method::Get,
                endpoints::FILAMENT_TYPES,
                200,
                json!([{ "id": 5, "manufacturer": "eSun", "material": "PLA+", "color": "Cold White" }]),
            )
            .reply(
                Method::Get,
                endpoints::PURCHASES,
                200,
                json!([{
                    "id": 1, "filamentTypeId": 5, "price": "50.00", "currency": "EUR",
                    "exchangeRate": "4.82", "initialWeight": 100, "currentWeight": 80,
                    "purchaseDate": "2024-01-15", "costPerGramInPLN": 0.6025
                }]),
            );

        let book = Purchases::fetch(&client).await.unwrap();
        let row = crate::PurchaseRow::from(&book.purchases[0]);

        assert_eq!(book.filament_types.len(), 1);
        assert_eq!((row.weight.as_str(), row.price.as_str(), row.cost_per_gram.as_str()), ("80g / 100g", "50.00 EUR", "0.6025 PLN"));
    }
}
