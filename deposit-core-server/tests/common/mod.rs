#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use deposit_core_api::service::user_directory::UserDirectory;
use deposit_core_db::models::deposit_account::{
    DepositAccountDetailsModel, DepositAccountModel, NewDepositAccountModel,
};
use deposit_core_db::models::rate_type::{NewRateTypeModel, RateTypeModel};
use deposit_core_db::repository::{
    Create, Delete, FindAll, FindById, FindByOwnerId, MarkWithdrawn, Update,
};
use deposit_core_server::service::{DepositAccountService, RateTypeService};
use deposit_core_server::{router, AppState, FixedClock};
use http_body_util::BodyExt;
use sqlx::Postgres;
use tower::ServiceExt;

type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub const KNOWN_USER: i64 = 42;
pub const OTHER_USER: i64 = 43;

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[derive(Default)]
struct Tables {
    rate_types: BTreeMap<i64, RateTypeModel>,
    accounts: BTreeMap<i64, DepositAccountModel>,
    next_rate_type_id: i64,
    next_account_id: i64,
}

/// Both tables behind one lock, so the cascade and the join behave like the database.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every subsequent repository call fail like a lost connection.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn account_count(&self) -> usize {
        self.tables.lock().unwrap().accounts.len()
    }

    pub fn account(&self, id: i64) -> Option<DepositAccountModel> {
        self.tables.lock().unwrap().accounts.get(&id).cloned()
    }

    fn check(&self) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("connection reset by peer".into());
        }
        Ok(())
    }

    fn details(tables: &Tables, account: &DepositAccountModel) -> DepositAccountDetailsModel {
        DepositAccountDetailsModel {
            account: account.clone(),
            rate_type: tables.rate_types[&account.rate_type_id].clone(),
        }
    }

    fn newest_first(tables: &Tables, filter: impl Fn(&DepositAccountModel) -> bool) -> Vec<DepositAccountDetailsModel> {
        let mut accounts: Vec<&DepositAccountModel> =
            tables.accounts.values().filter(|a| filter(a)).collect();
        accounts.sort_by(|a, b| (b.opened_at, b.id).cmp(&(a.opened_at, a.id)));
        accounts
            .into_iter()
            .map(|a| Self::details(tables, a))
            .collect()
    }
}

pub struct InMemoryRateTypeRepository(pub Arc<InMemoryStore>);

pub struct InMemoryDepositAccountRepository(pub Arc<InMemoryStore>);

#[async_trait]
impl FindById<Postgres, RateTypeModel> for InMemoryRateTypeRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<RateTypeModel>> {
        self.0.check()?;
        Ok(self.0.tables.lock().unwrap().rate_types.get(&id).cloned())
    }
}

#[async_trait]
impl FindAll<Postgres, RateTypeModel> for InMemoryRateTypeRepository {
    async fn find_all(&self) -> RepoResult<Vec<RateTypeModel>> {
        self.0.check()?;
        Ok(self.0.tables.lock().unwrap().rate_types.values().cloned().collect())
    }
}

#[async_trait]
impl Create<Postgres, NewRateTypeModel, RateTypeModel> for InMemoryRateTypeRepository {
    async fn create(&self, item: NewRateTypeModel) -> RepoResult<RateTypeModel> {
        self.0.check()?;
        let mut tables = self.0.tables.lock().unwrap();
        tables.next_rate_type_id += 1;
        let saved = RateTypeModel::from_new(tables.next_rate_type_id, item);
        tables.rate_types.insert(saved.id, saved.clone());
        Ok(saved)
    }
}

#[async_trait]
impl Update<Postgres, RateTypeModel> for InMemoryRateTypeRepository {
    async fn update(&self, item: RateTypeModel) -> RepoResult<Option<RateTypeModel>> {
        self.0.check()?;
        let mut tables = self.0.tables.lock().unwrap();
        match tables.rate_types.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Delete<Postgres> for InMemoryRateTypeRepository {
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        self.0.check()?;
        let mut tables = self.0.tables.lock().unwrap();
        if tables.rate_types.remove(&id).is_none() {
            return Ok(false);
        }
        tables.accounts.retain(|_, account| account.rate_type_id != id);
        Ok(true)
    }
}

#[async_trait]
impl FindById<Postgres, DepositAccountDetailsModel> for InMemoryDepositAccountRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<DepositAccountDetailsModel>> {
        self.0.check()?;
        let tables = self.0.tables.lock().unwrap();
        Ok(tables
            .accounts
            .get(&id)
            .map(|account| InMemoryStore::details(&tables, account)))
    }
}

#[async_trait]
impl FindAll<Postgres, DepositAccountDetailsModel> for InMemoryDepositAccountRepository {
    async fn find_all(&self) -> RepoResult<Vec<DepositAccountDetailsModel>> {
        self.0.check()?;
        let tables = self.0.tables.lock().unwrap();
        Ok(InMemoryStore::newest_first(&tables, |_| true))
    }
}

#[async_trait]
impl FindByOwnerId<Postgres, DepositAccountDetailsModel> for InMemoryDepositAccountRepository {
    async fn find_by_owner_id(&self, owner_id: i64) -> RepoResult<Vec<DepositAccountDetailsModel>> {
        self.0.check()?;
        let tables = self.0.tables.lock().unwrap();
        Ok(InMemoryStore::newest_first(&tables, |a| a.owner_id == owner_id))
    }
}

#[async_trait]
impl Create<Postgres, NewDepositAccountModel, DepositAccountModel> for InMemoryDepositAccountRepository {
    async fn create(&self, item: NewDepositAccountModel) -> RepoResult<DepositAccountModel> {
        self.0.check()?;
        let mut tables = self.0.tables.lock().unwrap();
        if !tables.rate_types.contains_key(&item.rate_type_id) {
            return Err("foreign key violation on rate_type_id".into());
        }
        tables.next_account_id += 1;
        let saved = DepositAccountModel::from_new(tables.next_account_id, item);
        tables.accounts.insert(saved.id, saved.clone());
        Ok(saved)
    }
}

#[async_trait]
impl MarkWithdrawn<Postgres, DepositAccountModel> for InMemoryDepositAccountRepository {
    async fn mark_withdrawn(&self, id: i64, withdrawn_at: NaiveDateTime) -> RepoResult<Option<DepositAccountModel>> {
        self.0.check()?;
        let mut tables = self.0.tables.lock().unwrap();
        match tables.accounts.get_mut(&id) {
            Some(account) if !account.withdrawn => {
                account.mark_withdrawn(withdrawn_at);
                Ok(Some(account.clone()))
            }
            _ => Ok(None),
        }
    }
}

/// Directory that knows a fixed set of users.
pub struct StubUserDirectory {
    known: HashSet<i64>,
}

impl StubUserDirectory {
    pub fn knowing(users: &[i64]) -> Self {
        Self {
            known: users.iter().copied().collect(),
        }
    }
}

#[async_trait]
impl UserDirectory for StubUserDirectory {
    async fn exists(&self, user_id: i64) -> bool {
        self.known.contains(&user_id)
    }

    async fn fetch(&self, user_id: i64) -> Option<serde_json::Value> {
        self.known
            .contains(&user_id)
            .then(|| serde_json::json!({ "id": user_id }))
    }
}

pub struct TestServices {
    pub store: Arc<InMemoryStore>,
    pub rate_types: RateTypeService,
    pub deposit_accounts: DepositAccountService,
}

pub fn services() -> TestServices {
    let store = InMemoryStore::new();
    let rate_type_repository = Arc::new(InMemoryRateTypeRepository(store.clone()));
    TestServices {
        rate_types: RateTypeService::new(rate_type_repository.clone()),
        deposit_accounts: DepositAccountService::new(
            Arc::new(InMemoryDepositAccountRepository(store.clone())),
            rate_type_repository,
            Arc::new(StubUserDirectory::knowing(&[KNOWN_USER, OTHER_USER])),
        ),
        store,
    }
}

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub router: Router,
}

/// Router over in-memory storage whose clock reads `now`.
pub fn app(now: NaiveDateTime) -> TestApp {
    app_with_directory(now, Arc::new(StubUserDirectory::knowing(&[KNOWN_USER, OTHER_USER])))
}

pub fn app_with_directory(now: NaiveDateTime, users: Arc<dyn UserDirectory>) -> TestApp {
    let store = InMemoryStore::new();
    let state = AppState::new(
        Arc::new(InMemoryRateTypeRepository(store.clone())),
        Arc::new(InMemoryDepositAccountRepository(store.clone())),
        users,
        Arc::new(FixedClock(now)),
    );
    TestApp {
        store,
        router: router(state),
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send_json("POST", uri, body.to_string()).await
    }

    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send_json("PUT", uri, body.to_string()).await
    }

    pub async fn send_json(&self, method: &str, uri: &str, raw: impl Into<String>) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.into()))
            .unwrap();
        self.send(request).await
    }

    /// Creates the "1Y Term" rate type at 5% and returns its id.
    pub async fn create_one_year_term(&self) -> i64 {
        let response = self
            .post_json(
                "/type-comptes-depots",
                serde_json::json!({ "nom": "1Y Term", "tauxInteret": 0.05 }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"].as_i64().unwrap()
    }
}

pub fn as_f64(value: &serde_json::Value) -> f64 {
    value.as_f64().unwrap()
}

pub fn assert_money(value: &serde_json::Value, expected: f64) {
    assert!(
        (as_f64(value) - expected).abs() < 1e-9,
        "expected {expected}, got {value}"
    );
}
