//! Application state and event handling
//!
//! Fetches run as spawned tasks and report back over an mpsc channel;
//! results always go through `StockListing::commit`, which drops
//! anything superseded by a newer parameter change.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use pavilion_client::api::STOCK_VARIANTS_SCOPE;
use pavilion_client::{FetchTicket, HttpClient, InventoryClient, StockListing};
use shared::models::{StockVariantDetail, StockVariantItem, Warehouse};
use shared::response::Paginated;

use crate::ui;

/// Results arriving from spawned fetch tasks
pub enum AppEvent {
    StockPage {
        seq: u64,
        result: Result<Paginated<StockVariantItem>, String>,
    },
    Warehouses(Result<Vec<Warehouse>, String>),
    Detail {
        variant_id: String,
        result: Result<Box<StockVariantDetail>, String>,
    },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Per-variant detail overlay state
pub enum DetailView {
    Loading { variant_id: String },
    Ready(Box<StockVariantDetail>),
    Failed(String),
}

pub struct App<C: HttpClient> {
    client: InventoryClient<C>,
    pub listing: StockListing,
    pub warehouses: Vec<Warehouse>,
    /// Index into `warehouses`; `None` means all warehouses
    pub warehouse_filter: Option<usize>,
    pub input: Input,
    pub input_mode: InputMode,
    pub detail: Option<DetailView>,
    pub logger_state: TuiWidgetState,
    events_tx: mpsc::Sender<AppEvent>,
    events_rx: mpsc::Receiver<AppEvent>,
    should_quit: bool,
}

impl<C: HttpClient> App<C> {
    pub fn new(client: InventoryClient<C>) -> Self {
        let (events_tx, events_rx) = mpsc::channel(32);
        Self {
            client,
            listing: StockListing::new(),
            warehouses: Vec::new(),
            warehouse_filter: None,
            input: Input::default(),
            input_mode: InputMode::default(),
            detail: None,
            logger_state: TuiWidgetState::new(),
            events_tx,
            events_rx,
            should_quit: false,
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        // The warehouse dropdown and the listing fetch independently
        self.spawn_warehouse_fetch();
        let ticket = self.listing.begin_fetch();
        self.dispatch(ticket);

        loop {
            terminal.draw(|f| ui::draw(f, self))?;
            if self.should_quit {
                return Ok(());
            }

            let timeout = Duration::from_millis(100);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                        self.handle_key(key);
                    }
                }
            }

            // Debounced search settles on the tick
            if let Some(ticket) = self.listing.tick(Instant::now()) {
                self.dispatch(ticket);
            }

            while let Ok(event) = self.events_rx.try_recv() {
                self.handle_event(event);
            }
        }
    }

    // ========== Key handling ==========

    fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Search => match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                }
                _ => {
                    self.input.handle_event(&Event::Key(key));
                    self.listing.type_search(self.input.value(), Instant::now());
                }
            },
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => {
                    if self.detail.is_some() {
                        self.detail = None;
                    } else {
                        self.should_quit = true;
                    }
                }
                KeyCode::Esc => {
                    self.detail = None;
                }
                KeyCode::Char('/') => {
                    self.input_mode = InputMode::Search;
                }
                KeyCode::Char('n') | KeyCode::Right => {
                    if let Some(ticket) = self.listing.next_page() {
                        self.dispatch(ticket);
                    }
                }
                KeyCode::Char('p') | KeyCode::Left => {
                    if let Some(ticket) = self.listing.prev_page() {
                        self.dispatch(ticket);
                    }
                }
                KeyCode::Char('s') => {
                    let ticket = self.listing.cycle_sort();
                    self.dispatch(ticket);
                }
                KeyCode::Char('o') => {
                    let column = self.listing.query().sort_by;
                    let ticket = self.listing.sort_by(column);
                    self.dispatch(ticket);
                }
                KeyCode::Char('w') => {
                    self.cycle_warehouse_filter();
                }
                KeyCode::Char('r') => {
                    // Bypass the cache for an explicit refresh
                    self.client.cache().invalidate_scope(STOCK_VARIANTS_SCOPE);
                    let ticket = self.listing.begin_fetch();
                    self.dispatch(ticket);
                }
                KeyCode::Down => self.listing.select_next(),
                KeyCode::Up => self.listing.select_prev(),
                KeyCode::Enter => self.open_detail(),
                KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
                KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
                _ => {}
            },
        }
    }

    fn cycle_warehouse_filter(&mut self) {
        if self.warehouses.is_empty() {
            tracing::warn!("No warehouses loaded yet");
            return;
        }
        self.warehouse_filter = match self.warehouse_filter {
            None => Some(0),
            Some(index) if index + 1 < self.warehouses.len() => Some(index + 1),
            Some(_) => None,
        };
        let id = self
            .warehouse_filter
            .map(|index| self.warehouses[index].id.clone());
        if let Some(ticket) = self.listing.set_warehouse(id) {
            self.dispatch(ticket);
        }
    }

    /// Name of the active warehouse filter, for the header
    pub fn warehouse_filter_name(&self) -> &str {
        self.warehouse_filter
            .and_then(|index| self.warehouses.get(index))
            .map(|w| w.name.as_str())
            .unwrap_or("All")
    }

    // ========== Async work ==========

    /// Spawn a listing fetch for the ticket
    ///
    /// A cached page for the new parameters is shown immediately while
    /// the refetch settles.
    fn dispatch(&mut self, ticket: FetchTicket) {
        let stocks = self.client.stocks();
        if let Some(cached) = stocks.peek_page(&ticket.query) {
            self.listing.show_cached(cached);
        }

        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = stocks
                .list_variants(&ticket.query)
                .await
                .map_err(|e| e.to_string());
            let _ = tx
                .send(AppEvent::StockPage {
                    seq: ticket.seq,
                    result,
                })
                .await;
        });
    }

    fn spawn_warehouse_fetch(&self) {
        let warehouses = self.client.warehouses();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = warehouses.list().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Warehouses(result)).await;
        });
    }

    fn open_detail(&mut self) {
        let Some(item) = self.listing.selected_item() else {
            return;
        };
        let variant_id = item.product_variant_id.clone();
        self.detail = Some(DetailView::Loading {
            variant_id: variant_id.clone(),
        });

        let stocks = self.client.stocks();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = stocks
                .variant_detail(&variant_id)
                .await
                .map(Box::new)
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Detail { variant_id, result }).await;
        });
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::StockPage { seq, result } => {
                if !self.listing.commit(seq, result) {
                    tracing::debug!(seq, "superseded listing response ignored");
                }
            }
            AppEvent::Warehouses(Ok(list)) => {
                tracing::info!("Loaded {} warehouses", list.len());
                self.warehouses = list;
            }
            AppEvent::Warehouses(Err(message)) => {
                tracing::warn!("Failed to load warehouses: {}", message);
            }
            AppEvent::Detail { variant_id, result } => {
                // Ignore unless the overlay still waits for this variant
                let waiting = matches!(
                    &self.detail,
                    Some(DetailView::Loading { variant_id: id }) if *id == variant_id
                );
                if waiting {
                    self.detail = Some(match result {
                        Ok(detail) => DetailView::Ready(detail),
                        Err(message) => DetailView::Failed(message),
                    });
                }
            }
        }
    }
}
