//! 세션별 "현재 결과" 슬롯
//!
//! 세션마다 살아 있는 결과는 최대 하나입니다. 새 생성 요청이 시작되면
//! 이전 결과는 먼저 폐기됩니다. 세션끼리는 서로 영향을 주지 않습니다.
//! 결과가 없는 세션은 남기지 않고, 오래 쓰이지 않은 세션은 정리합니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderValue},
};
use uuid::Uuid;

use super::dto::Article;
use crate::error::AppError;

/// 세션 식별 헤더
pub const SESSION_HEADER: &str = "x-session-id";

/// 마지막 사용 후 세션을 보관하는 시간 (1시간)
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

const MAX_SESSION_ID_LEN: usize = 128;

#[derive(Debug)]
struct Session {
    current: Option<Article>,
    in_flight: bool,
    last_seen: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            current: None,
            in_flight: false,
            last_seen: Instant::now(),
        }
    }
}

/// 세션 저장소
///
/// 락은 원격 호출 동안 잡지 않습니다.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            idle_ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 새 생성 시작
    ///
    /// 이전 결과를 폐기하고 진행 중 표시를 합니다.
    /// 같은 세션에 이미 진행 중인 생성이 있으면 `Conflict`.
    pub fn begin(&self, session_id: &str) -> Result<InFlight, AppError> {
        let mut sessions = self.lock();
        self.evict_idle(&mut sessions);

        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(Session::new);

        if session.in_flight {
            return Err(AppError::Conflict(
                "A generation is already in progress for this session".to_string(),
            ));
        }

        session.current = None;
        session.in_flight = true;
        session.last_seen = Instant::now();

        Ok(InFlight {
            store: self.clone(),
            session_id: session_id.to_string(),
        })
    }

    /// 현재 결과 조회
    pub fn current(&self, session_id: &str) -> Option<Article> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(session_id)?;
        session.last_seen = Instant::now();
        session.current.clone()
    }

    /// 현재 결과 폐기. 폐기할 결과가 있었으면 true
    pub fn clear(&self, session_id: &str) -> bool {
        let mut sessions = self.lock();
        match sessions.get_mut(session_id) {
            Some(session) => {
                let had_result = session.current.take().is_some();
                if !session.in_flight {
                    sessions.remove(session_id);
                }
                had_result
            }
            None => false,
        }
    }

    pub fn is_in_flight(&self, session_id: &str) -> bool {
        self.lock()
            .get(session_id)
            .map(|session| session.in_flight)
            .unwrap_or(false)
    }

    /// 보관 중인 세션 수
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 진행 중이 아니고 `idle_ttl` 동안 쓰이지 않은 세션 제거
    fn evict_idle(&self, sessions: &mut HashMap<String, Session>) {
        let before = sessions.len();
        sessions.retain(|_, session| {
            session.in_flight || session.last_seen.elapsed() < self.idle_ttl
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "Idle sessions evicted");
        }
    }
}

/// 진행 중인 생성 한 건
///
/// 성공 시 `complete`로 결과를 저장합니다. 실패하거나 중간에 버려지면
/// drop 시점에 결과 없는 세션이 제거됩니다.
#[derive(Debug)]
pub struct InFlight {
    store: SessionStore,
    session_id: String,
}

impl InFlight {
    pub fn complete(self, article: Article) {
        {
            let mut sessions = self.store.lock();
            if let Some(session) = sessions.get_mut(&self.session_id) {
                session.current = Some(article);
                session.last_seen = Instant::now();
            }
        }
        // drop에서 진행 중 표시 해제
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut sessions = self.store.lock();
        let keep = match sessions.get_mut(&self.session_id) {
            Some(session) => {
                session.in_flight = false;
                session.current.is_some()
            }
            None => return,
        };
        if !keep {
            sessions.remove(&self.session_id);
        }
    }
}

fn header_session_id(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= MAX_SESSION_ID_LEN)
        .map(String::from)
}

/// 요청 헤더의 세션 id
///
/// 헤더가 없거나 형식이 맞지 않으면 새 id를 발급합니다.
/// 조회/폐기처럼 세션을 만들지 않는 요청에 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn issue() -> Self {
        SessionId(Uuid::new_v4().to_string())
    }

    pub fn header_value(&self) -> HeaderValue {
        HeaderValue::from_str(&self.0).unwrap_or_else(|_| HeaderValue::from_static("invalid"))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for SessionId {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(header_session_id(parts).map(SessionId).unwrap_or_else(SessionId::issue))
    }
}

/// 클라이언트가 보낸 세션 id (필수)
///
/// 생성 요청은 세션 슬롯과 요청 한도의 키가 되므로 서버가 대신 발급하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredSessionId(pub SessionId);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequiredSessionId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_session_id(parts)
            .map(|id| RequiredSessionId(SessionId(id)))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "{} header is required (1 to {} characters)",
                    SESSION_HEADER, MAX_SESSION_ID_LEN
                ))
            })
    }
}
