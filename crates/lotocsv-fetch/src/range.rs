//! Sequential range fetching with skip-on-exhaustion.

use lotocsv_types::{FlatRecord, GameRange, LotocsvError};
use serde_json::Value;

use crate::{DownloadClient, flatten, url};

/// Outcome of a range fetch: collected records plus skipped game numbers.
#[derive(Debug, Clone, Default)]
pub struct RangeReport {
    /// Flattened records, ascending by game number.
    pub records: Vec<FlatRecord>,
    /// Game numbers that exhausted their attempt budget.
    pub skipped: Vec<u32>,
}

impl RangeReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Returns true if no game in the range was skipped.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Fetches and flattens the result of a single drawing.
///
/// # Errors
///
/// Returns [`LotocsvError::Http`] when the attempt budget is exhausted
/// (callers may skip the game and continue). Malformed JSON, a
/// non-container body, and a missing or mismatched `numero` field are
/// structural errors and surface as their own variants.
pub async fn fetch_game(client: &DownloadClient, game: u32) -> Result<FlatRecord, LotocsvError> {
    let url = url::result_url(&client.config().base_url, game);
    let body = client
        .fetch(&url)
        .await
        .map_err(|e| LotocsvError::Http(e.to_string()))?;

    let value: Value = serde_json::from_slice(&body)?;
    let record = flatten(&value).map_err(|e| LotocsvError::Flatten(e.to_string()))?;

    match record.game_number() {
        Some(found) if found == u64::from(game) => Ok(record),
        Some(found) => Err(LotocsvError::GameNumberMismatch {
            requested: game,
            found,
        }),
        None => Err(LotocsvError::MissingGameNumber { game }),
    }
}

/// Fetches and flattens the latest published drawing.
///
/// # Errors
///
/// Returns an error if the request, JSON parse, or flattening fails.
pub async fn fetch_latest(client: &DownloadClient) -> Result<FlatRecord, LotocsvError> {
    let url = url::latest_url(&client.config().base_url);
    let body = client
        .fetch(&url)
        .await
        .map_err(|e| LotocsvError::Http(e.to_string()))?;

    let value: Value = serde_json::from_slice(&body)?;
    flatten(&value).map_err(|e| LotocsvError::Flatten(e.to_string()))
}

/// Extracts the game number of the latest published drawing.
///
/// Used to validate the upper bound of a requested range.
///
/// # Errors
///
/// Returns an error if the latest result cannot be fetched or carries
/// no usable `numero` field.
pub async fn fetch_latest_game_number(client: &DownloadClient) -> Result<u32, LotocsvError> {
    let record = fetch_latest(client).await?;
    let numero = record.game_number().ok_or(LotocsvError::NoLatestNumber)?;
    u32::try_from(numero).map_err(|_| LotocsvError::NoLatestNumber)
}

/// Fetches all drawings in `range`, one request at a time, ascending.
///
/// Games whose attempt budget is exhausted are recorded in
/// [`RangeReport::skipped`] and never abort the run, so the report
/// holds at most one record per requested game number.
///
/// # Errors
///
/// Returns an error on structural failures (malformed JSON, a
/// non-container body, or a missing/mismatched `numero`).
pub async fn fetch_range(
    client: &DownloadClient,
    range: GameRange,
) -> Result<RangeReport, LotocsvError> {
    fetch_range_with(client, range, |_, _| {}).await
}

/// Fetches all drawings in `range` like [`fetch_range`], invoking
/// `on_game` after each game is settled: with `None` once its record
/// is collected, or with the error that exhausted its attempt budget.
///
/// This is the hook consumers use to drive progress reporting without
/// re-implementing the skip-and-collect loop.
///
/// # Errors
///
/// Returns an error on structural failures (malformed JSON, a
/// non-container body, or a missing/mismatched `numero`).
pub async fn fetch_range_with<F>(
    client: &DownloadClient,
    range: GameRange,
    mut on_game: F,
) -> Result<RangeReport, LotocsvError>
where
    F: FnMut(u32, Option<&LotocsvError>),
{
    let mut report = RangeReport::new();

    for game in range.games() {
        match fetch_game(client, game).await {
            Ok(record) => {
                report.records.push(record);
                on_game(game, None);
            }
            Err(err @ LotocsvError::Http(_)) => {
                on_game(game, Some(&err));
                report.skipped.push(game);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> DownloadClient {
        DownloadClient::new(ClientConfig {
            base_url: server.uri(),
            max_attempts: 2,
            base_delay_ms: 1,
            max_delay_ms: 2,
            ..ClientConfig::default()
        })
        .unwrap()
    }

    fn mount_game(server: &MockServer, game: u32, body: Value) -> impl Future<Output = ()> {
        Mock::given(method("GET"))
            .and(path(format!("/{game}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
    }

    #[tokio::test]
    async fn test_fetch_game_flattens_result() {
        let server = MockServer::start().await;
        mount_game(
            &server,
            100,
            json!({
                "numero": 100,
                "listaRateioPremio": [{"faixa": 1, "numeroDeGanhadores": 0}]
            }),
        )
        .await;

        let client = test_client(&server);
        let record = fetch_game(&client, 100).await.unwrap();

        assert_eq!(record.game_number(), Some(100));
        assert_eq!(record.get("listaRateioPremio.0.faixa"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn test_fetch_game_rejects_mismatched_numero() {
        let server = MockServer::start().await;
        mount_game(&server, 5, json!({"numero": 999})).await;

        let client = test_client(&server);
        let err = fetch_game(&client, 5).await.unwrap_err();
        assert!(matches!(
            err,
            LotocsvError::GameNumberMismatch {
                requested: 5,
                found: 999
            }
        ));
    }

    #[tokio::test]
    async fn test_fetch_game_rejects_missing_numero() {
        let server = MockServer::start().await;
        mount_game(&server, 5, json!({"acumulado": false})).await;

        let client = test_client(&server);
        let err = fetch_game(&client, 5).await.unwrap_err();
        assert!(matches!(err, LotocsvError::MissingGameNumber { game: 5 }));
    }

    #[tokio::test]
    async fn test_fetch_game_rejects_scalar_body() {
        let server = MockServer::start().await;
        mount_game(&server, 5, json!(42)).await;

        let client = test_client(&server);
        let err = fetch_game(&client, 5).await.unwrap_err();
        assert!(matches!(err, LotocsvError::Flatten(_)));
    }

    #[tokio::test]
    async fn test_fetch_latest_game_number() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"numero": 3000, "acumulado": true})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert_eq!(fetch_latest_game_number(&client).await.unwrap(), 3000);
    }

    #[tokio::test]
    async fn test_fetch_range_skips_exhausted_games() {
        let server = MockServer::start().await;
        mount_game(&server, 10, json!({"numero": 10})).await;
        Mock::given(method("GET"))
            .and(path("/11"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        mount_game(&server, 12, json!({"numero": 12})).await;

        let client = test_client(&server);
        let range = GameRange::new(10, 12).unwrap();
        let report = fetch_range(&client, range).await.unwrap();

        let numbers: Vec<_> = report
            .records
            .iter()
            .filter_map(FlatRecord::game_number)
            .collect();
        assert_eq!(numbers, vec![10, 12]);
        assert_eq!(report.skipped, vec![11]);
        assert!(!report.is_complete());
    }

    #[tokio::test]
    async fn test_fetch_range_with_reports_each_game() {
        let server = MockServer::start().await;
        mount_game(&server, 10, json!({"numero": 10})).await;
        Mock::given(method("GET"))
            .and(path("/11"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        mount_game(&server, 12, json!({"numero": 12})).await;

        let client = test_client(&server);
        let range = GameRange::new(10, 12).unwrap();
        let mut outcomes = Vec::new();
        let report = fetch_range_with(&client, range, |game, skipped| {
            outcomes.push((game, skipped.is_none()));
        })
        .await
        .unwrap();

        // One callback per game, in ascending order, skip flagged.
        assert_eq!(outcomes, vec![(10, true), (11, false), (12, true)]);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped, vec![11]);
    }

    #[tokio::test]
    async fn test_fetch_range_single_game() {
        let server = MockServer::start().await;
        mount_game(&server, 5, json!({"numero": 5})).await;

        let client = test_client(&server);
        let report = fetch_range(&client, GameRange::single(5)).await.unwrap();

        assert_eq!(report.records.len(), 1);
        assert!(report.is_complete());
    }

    #[tokio::test]
    async fn test_fetch_range_all_skipped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/5"))
            .respond_with(ResponseTemplate::new(404))
            .expect(2) // the full attempt budget
            .mount(&server)
            .await;

        let client = test_client(&server);
        let report = fetch_range(&client, GameRange::single(5)).await.unwrap();

        assert!(report.records.is_empty());
        assert_eq!(report.skipped, vec![5]);
    }
}
