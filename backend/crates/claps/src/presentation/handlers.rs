//! HTTP Handlers

use crate::application::config::ClapConfig;
use crate::application::{AddClapsInput, AddClapsUseCase, ReadClapsUseCase};
use crate::domain::repository::ScoreRepository;
use crate::domain::value_objects::{RequestUrl, ResourceKey, VisitorId};
use crate::error::ClapResult;
use crate::presentation::dto::{AddClapsRequest, AddClapsResponse, ClapsQuery, ClapsResponse};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, OriginalUri, Query, State};
use axum::http::{HeaderMap, Uri, header};
use platform::client::{extract_client_ip, extract_forwarded_proto};
use std::net::SocketAddr;
use std::sync::Arc;

/// Shared state for clap handlers
#[derive(Clone)]
pub struct ClapAppState<R>
where
    R: ScoreRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ClapConfig>,
}

/// GET /api/claps
pub async fn get_claps<R>(
    State(state): State<ClapAppState<R>>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ClapResult<Json<ClapsResponse>>
where
    R: ScoreRepository + Clone + Send + Sync + 'static,
{
    let trust_proxy = state.config.trust_proxy_headers;
    let query = ClapsQuery::from_pairs(pairs);
    let key = resolve_key(&query, &headers, &uri, trust_proxy);
    let visitor = visitor_id(&headers, addr, trust_proxy);

    let use_case = ReadClapsUseCase::new(state.repo.clone());
    let stats = use_case.execute(&key, &visitor).await?;

    Ok(Json(stats.into()))
}

/// PATCH /api/claps (POST is routed here too)
pub async fn add_claps<R>(
    State(state): State<ClapAppState<R>>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> ClapResult<Json<AddClapsResponse>>
where
    R: ScoreRepository + Clone + Send + Sync + 'static,
{
    let trust_proxy = state.config.trust_proxy_headers;
    let query = ClapsQuery::from_pairs(pairs);
    let key = resolve_key(&query, &headers, &uri, trust_proxy);
    let visitor = visitor_id(&headers, addr, trust_proxy);
    let requested = AddClapsRequest::from_body(&body).requested();

    let use_case = AddClapsUseCase::new(state.repo.clone(), state.config.clone());

    let input = AddClapsInput {
        key,
        visitor,
        requested,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AddClapsResponse::new(output.stats, output.max_claps)))
}

fn resolve_key(
    query: &ClapsQuery,
    headers: &HeaderMap,
    uri: &Uri,
    trust_proxy: bool,
) -> ResourceKey {
    ResourceKey::resolve(
        query.key.as_deref(),
        &request_url(headers, uri, trust_proxy),
    )
}

/// Origin and path of the request as the client addressed it
pub(crate) fn request_url(headers: &HeaderMap, uri: &Uri, trust_proxy: bool) -> RequestUrl {
    let forwarded = if trust_proxy {
        extract_forwarded_proto(headers)
    } else {
        None
    };
    let scheme = forwarded.or(uri.scheme_str()).unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");

    RequestUrl::new(format!("{scheme}://{host}"), uri.path())
}

/// Hashed identity of the peer address (port excluded)
pub(crate) fn visitor_id(headers: &HeaderMap, addr: SocketAddr, trust_proxy: bool) -> VisitorId {
    let ip = if trust_proxy {
        extract_client_ip(headers, Some(addr.ip())).unwrap_or(addr.ip())
    } else {
        addr.ip()
    };

    VisitorId::from_address(&ip.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_request_url_from_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("blog.example:8080"));
        let uri: Uri = "/api/claps?key=x".parse().unwrap();

        let url = request_url(&headers, &uri, false);
        assert_eq!(url, RequestUrl::new("http://blog.example:8080", "/api/claps"));
    }

    #[test]
    fn test_request_url_forwarded_proto_needs_trust() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("x.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        let uri: Uri = "/p".parse().unwrap();

        assert_eq!(request_url(&headers, &uri, false).origin, "http://x.com");
        assert_eq!(request_url(&headers, &uri, true).origin, "https://x.com");
    }

    #[test]
    fn test_request_url_without_host() {
        let headers = HeaderMap::new();
        let uri: Uri = "/p".parse().unwrap();
        assert_eq!(request_url(&headers, &uri, false).origin, "http://localhost");
    }

    #[test]
    fn test_visitor_id_ignores_port() {
        let headers = HeaderMap::new();
        let a = visitor_id(&headers, "127.0.0.1:5000".parse().unwrap(), false);
        let b = visitor_id(&headers, "127.0.0.1:6000".parse().unwrap(), false);
        assert_eq!(a, b);
        assert_eq!(a, VisitorId::from_address("127.0.0.1"));
    }

    #[test]
    fn test_visitor_id_forwarded_for_needs_trust() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7"));
        let peer: SocketAddr = "10.0.0.1:1234".parse().unwrap();

        assert_eq!(
            visitor_id(&headers, peer, false),
            VisitorId::from_address("10.0.0.1")
        );
        assert_eq!(
            visitor_id(&headers, peer, true),
            VisitorId::from_address("203.0.113.7")
        );
    }
}
