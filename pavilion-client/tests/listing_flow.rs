// pavilion-client/tests/listing_flow.rs
// Listing behavior against an in-memory inventory API

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use pavilion_client::api::stocks::StockApi;
use pavilion_client::{
    FetchTicket, InventoryClient, OneshotHttpClient, StockListing, ViewState,
};
use shared::models::{
    StockEntry, StockMovement, StockStatus, StockVariantDetail, StockVariantItem, MovementType,
    Warehouse, WarehouseStock,
};
use shared::response::{ApiResponse, Paginated};
use shared::query::{SortBy, StockVariantQuery};

const SEARCH_WINDOW: Duration = Duration::from_millis(500);

// ========== Mock inventory API ==========

#[derive(Clone)]
struct MockState {
    items: Arc<Mutex<Vec<StockVariantItem>>>,
    list_hits: Arc<AtomicUsize>,
    fail_listing: Arc<AtomicBool>,
}

impl MockState {
    fn seeded() -> Self {
        Self {
            items: Arc::new(Mutex::new(vec![
                variant("pv-1", "JRS-M", "Club Jersey", "M", 5, StockStatus::InStock),
                variant("pv-2", "BALL-5", "Match Ball", "Size 5", 0, StockStatus::OutOfStock),
                variant("pv-3", "SHRT-L", "Training Shorts", "L", 2, StockStatus::LowStock),
            ])),
            list_hits: Arc::new(AtomicUsize::new(0)),
            fail_listing: Arc::new(AtomicBool::new(false)),
        }
    }
}

fn variant(
    id: &str,
    sku: &str,
    product: &str,
    name: &str,
    quantity: i64,
    status: StockStatus,
) -> StockVariantItem {
    StockVariantItem {
        product_variant_id: id.to_string(),
        sku: sku.to_string(),
        product_name: product.to_string(),
        variant_name: name.to_string(),
        category_name: Some("Apparel".to_string()),
        total_quantity: quantity,
        total_reserved: 0,
        total_available: Some(quantity),
        warehouse_count: 1,
        last_movement: None,
        status,
        image_url: None,
        cost: None,
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    page: Option<u32>,
    limit: Option<u32>,
    search: Option<String>,
    #[allow(dead_code)]
    warehouse_id: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

async fn list_variants(
    State(state): State<MockState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Paginated<StockVariantItem>>, (StatusCode, String)> {
    state.list_hits.fetch_add(1, Ordering::SeqCst);
    if state.fail_listing.load(Ordering::SeqCst) {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "database unavailable".to_string(),
        ));
    }

    let mut items: Vec<StockVariantItem> = state.items.lock().unwrap().clone();

    if let Some(search) = &params.search {
        let needle = search.to_lowercase();
        items.retain(|i| {
            i.product_name.to_lowercase().contains(&needle)
                || i.sku.to_lowercase().contains(&needle)
                || i.variant_name.to_lowercase().contains(&needle)
        });
    }

    match params.sort_by.as_deref() {
        Some("sku") => items.sort_by(|a, b| a.sku.cmp(&b.sku)),
        Some("totalQuantity") => items.sort_by_key(|i| i.total_quantity),
        _ => items.sort_by(|a, b| a.product_name.cmp(&b.product_name)),
    }
    if params.sort_order.as_deref() == Some("desc") {
        items.reverse();
    }

    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).max(1);
    let total = items.len() as u64;
    let data = items
        .into_iter()
        .skip(((page - 1) * limit) as usize)
        .take(limit as usize)
        .collect();

    Ok(Json(Paginated::new(data, total, page, limit)))
}

async fn variant_detail(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> Result<Json<StockVariantDetail>, (StatusCode, String)> {
    let items = state.items.lock().unwrap();
    let item = items
        .iter()
        .find(|i| i.product_variant_id == id)
        .cloned()
        .ok_or((StatusCode::NOT_FOUND, "variant not found".to_string()))?;

    Ok(Json(StockVariantDetail {
        item,
        warehouses: vec![WarehouseStock {
            warehouse_id: "wh-1".to_string(),
            warehouse_name: "Main Warehouse".to_string(),
            quantity: 5,
            reserved: 0,
            min_stock: 3,
        }],
        recent_movements: vec![],
    }))
}

async fn stock_entry(
    State(state): State<MockState>,
    Json(payload): Json<StockEntry>,
) -> Json<ApiResponse<StockMovement>> {
    let mut items = state.items.lock().unwrap();
    if let Some(item) = items
        .iter_mut()
        .find(|i| i.product_variant_id == payload.product_variant_id)
    {
        item.total_quantity += payload.quantity;
        item.total_available = item.total_available.map(|a| a + payload.quantity);
        if item.total_quantity > 0 && item.status == StockStatus::OutOfStock {
            item.status = StockStatus::InStock;
        }
    }

    Json(ApiResponse::ok(StockMovement {
        id: "mv-1".to_string(),
        product_variant_id: payload.product_variant_id,
        warehouse_id: payload.warehouse_id,
        movement_type: MovementType::Entry,
        quantity: payload.quantity,
        performed_by: Some(payload.performed_by),
        note: payload.note,
        created_at: Utc::now(),
    }))
}

async fn list_warehouses() -> Json<ApiResponse<Vec<Warehouse>>> {
    Json(ApiResponse::ok(vec![
        Warehouse {
            id: "wh-1".to_string(),
            name: "Main Warehouse".to_string(),
            code: "MAIN".to_string(),
            address: None,
            is_active: true,
        },
        Warehouse {
            id: "wh-2".to_string(),
            name: "Club Shop".to_string(),
            code: "SHOP".to_string(),
            address: None,
            is_active: true,
        },
    ]))
}

fn mock_api(state: MockState) -> Router {
    Router::new()
        .route("/inventory/stocks/variants", get(list_variants))
        .route("/inventory/stocks/variant/{id}/detail", get(variant_detail))
        .route("/inventory/stocks/operations/entry", post(stock_entry))
        .route("/inventory/warehouses", get(list_warehouses))
        .with_state(state)
}

fn client(state: MockState) -> InventoryClient<OneshotHttpClient> {
    InventoryClient::new(OneshotHttpClient::new(mock_api(state)))
}

async fn run_fetch(
    listing: &mut StockListing,
    stocks: &StockApi<OneshotHttpClient>,
    ticket: FetchTicket,
) -> bool {
    let result = stocks
        .list_variants(&ticket.query)
        .await
        .map_err(|e| e.to_string());
    listing.commit(ticket.seq, result)
}

// ========== Tests ==========

#[tokio::test]
async fn test_default_listing_end_to_end() {
    let state = MockState::seeded();
    let stocks = client(state).stocks();

    let mut listing = StockListing::new();
    let ticket = listing.begin_fetch();
    assert!(listing.is_loading());
    assert!(run_fetch(&mut listing, &stocks, ticket).await);

    match listing.state() {
        ViewState::Loaded(page) => {
            // Sorted by product name ascending: Club Jersey, Match Ball, Training Shorts
            assert_eq!(page.data.len(), 3);
            assert_eq!(page.data[0].product_name, "Club Jersey");
            assert_eq!(page.data[0].status.label(), "In Stock");
            assert_eq!(page.data[1].status.label(), "Out of Stock");
            assert_eq!(page.data[2].status.label(), "Low Stock");
            assert_eq!(page.meta.page, 1);
            assert_eq!(page.meta.total, 3);
        }
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_commits_one_request_with_reset_page() {
    let state = MockState::seeded();
    let hits = state.list_hits.clone();
    let stocks = client(state).stocks();

    let mut listing = StockListing::new();
    let ticket = listing.begin_fetch();
    run_fetch(&mut listing, &stocks, ticket).await;
    listing.set_page(1);

    let baseline = hits.load(Ordering::SeqCst);
    let start = Instant::now();

    // Typing never issues requests
    listing.type_search("j", start);
    listing.type_search("je", start + Duration::from_millis(200));
    listing.type_search("jersey", start + Duration::from_millis(400));
    assert!(listing.tick(start + Duration::from_millis(600)).is_none());
    assert_eq!(hits.load(Ordering::SeqCst), baseline);

    // One request after the window, carrying the committed value
    let ticket = listing
        .tick(start + Duration::from_millis(400) + SEARCH_WINDOW)
        .unwrap();
    assert_eq!(ticket.query.search.as_deref(), Some("jersey"));
    assert_eq!(ticket.query.page, 1);
    assert!(run_fetch(&mut listing, &stocks, ticket).await);
    assert_eq!(hits.load(Ordering::SeqCst), baseline + 1);

    match listing.state() {
        ViewState::Loaded(page) => {
            assert_eq!(page.data.len(), 1);
            assert_eq!(page.data[0].sku, "JRS-M");
        }
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_result_renders_empty_state() {
    let state = MockState::seeded();
    let stocks = client(state).stocks();

    let mut listing = StockListing::new();
    let start = Instant::now();
    listing.type_search("curling broom", start);
    let ticket = listing.tick(start + SEARCH_WINDOW).unwrap();
    assert!(run_fetch(&mut listing, &stocks, ticket).await);

    assert!(matches!(listing.state(), ViewState::Empty));
    assert!(!listing.is_loading());
}

#[tokio::test]
async fn test_server_error_renders_error_state() {
    let state = MockState::seeded();
    state.fail_listing.store(true, Ordering::SeqCst);
    let stocks = client(state).stocks();

    let mut listing = StockListing::new();
    let ticket = listing.begin_fetch();
    assert!(run_fetch(&mut listing, &stocks, ticket).await);

    match listing.state() {
        ViewState::Error(message) => assert!(message.contains("database unavailable")),
        other => panic!("expected Error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rapid_page_changes_commit_only_latest() {
    let state = MockState::seeded();
    // One item per page so pages are distinguishable
    let stocks = client(state).stocks();

    let mut listing = StockListing::new();
    let ticket = listing.set_limit(1).unwrap();
    let page1 = stocks.list_variants(&ticket.query).await.unwrap();
    listing.commit(ticket.seq, Ok(page1));

    // Two rapid page changes; responses settle out of order
    let t2 = listing.set_page(2).unwrap();
    let t3 = listing.set_page(3).unwrap();

    let page2 = stocks.list_variants(&t2.query).await.unwrap();
    let page3 = stocks.list_variants(&t3.query).await.unwrap();

    assert!(listing.commit(t3.seq, Ok(page3)));
    assert!(!listing.commit(t2.seq, Ok(page2)));

    match listing.state() {
        ViewState::Loaded(page) => assert_eq!(page.meta.page, 3),
        other => panic!("expected Loaded page 3, got {:?}", other),
    }
}

#[tokio::test]
async fn test_identical_tuples_reuse_cache() {
    let state = MockState::seeded();
    let hits = state.list_hits.clone();
    let stocks = client(state).stocks();

    let query = StockVariantQuery::default();
    stocks.list_variants(&query).await.unwrap();
    stocks.list_variants(&query).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // A different tuple fetches again
    let other = StockVariantQuery::default().paginate(2, 10);
    stocks.list_variants(&other).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_stock_entry_invalidates_listing_cache() {
    let state = MockState::seeded();
    let hits = state.list_hits.clone();
    let stocks = client(state).stocks();

    let query = StockVariantQuery::default();
    let before = stocks.list_variants(&query).await.unwrap();
    let ball = before
        .data
        .iter()
        .find(|i| i.sku == "BALL-5")
        .expect("seeded ball");
    assert_eq!(ball.status, StockStatus::OutOfStock);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    stocks
        .entry(&StockEntry {
            product_variant_id: "pv-2".to_string(),
            warehouse_id: "wh-1".to_string(),
            quantity: 12,
            performed_by: "user-1".to_string(),
            note: Some("restock".to_string()),
        })
        .await
        .unwrap();

    // Cache was invalidated: the same tuple refetches and sees the
    // post-mutation quantities
    let after = stocks.list_variants(&query).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    let ball = after.data.iter().find(|i| i.sku == "BALL-5").unwrap();
    assert_eq!(ball.total_quantity, 12);
    assert_eq!(ball.status, StockStatus::InStock);
}

#[tokio::test]
async fn test_cached_page_shown_while_revalidating() {
    let state = MockState::seeded();
    let stocks = client(state).stocks();

    let mut listing = StockListing::new();
    let ticket = listing.begin_fetch();
    run_fetch(&mut listing, &stocks, ticket).await;

    // Navigate away and back; the first page is served from cache
    let ticket = listing.set_page(2).unwrap();
    run_fetch(&mut listing, &stocks, ticket).await;

    let ticket = listing.set_page(1).unwrap();
    let cached = stocks.peek_page(&ticket.query).expect("page 1 cached");
    listing.show_cached(cached);
    assert!(!listing.is_loading());
    match listing.state() {
        ViewState::Loaded(page) => assert_eq!(page.meta.page, 1),
        other => panic!("expected cached page 1, got {:?}", other),
    }

    // The revalidation still settles normally
    assert!(run_fetch(&mut listing, &stocks, ticket).await);
}

#[tokio::test]
async fn test_server_sorting_round_trip() {
    let state = MockState::seeded();
    let stocks = client(state).stocks();

    let mut listing = StockListing::new();
    let ticket = listing.sort_by(SortBy::TotalQuantity);
    run_fetch(&mut listing, &stocks, ticket).await;
    match listing.state() {
        ViewState::Loaded(page) => {
            let quantities: Vec<i64> = page.data.iter().map(|i| i.total_quantity).collect();
            assert_eq!(quantities, vec![0, 2, 5]);
        }
        other => panic!("expected Loaded, got {:?}", other),
    }

    // Same column toggles to descending
    let ticket = listing.sort_by(SortBy::TotalQuantity);
    run_fetch(&mut listing, &stocks, ticket).await;
    match listing.state() {
        ViewState::Loaded(page) => {
            let quantities: Vec<i64> = page.data.iter().map(|i| i.total_quantity).collect();
            assert_eq!(quantities, vec![5, 2, 0]);
        }
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_variant_detail_and_warehouse_list() {
    let state = MockState::seeded();
    let api = client(state);

    let detail = api.stocks().variant_detail("pv-1").await.unwrap();
    assert_eq!(detail.item.sku, "JRS-M");
    assert_eq!(detail.warehouses.len(), 1);
    assert_eq!(detail.warehouses[0].warehouse_name, "Main Warehouse");

    let warehouses = api.warehouses().list().await.unwrap();
    assert_eq!(warehouses.len(), 2);
    assert_eq!(warehouses[0].code, "MAIN");

    let missing = api.stocks().variant_detail("pv-404").await;
    assert!(missing.is_err());
}
