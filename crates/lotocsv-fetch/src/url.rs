//! Caixa lottery API URL construction.

/// Base URL for the Lotofácil results service.
pub const BASE_URL: &str = "https://servicebus2.caixa.gov.br/portaldeloterias/api/lotofacil";

/// Builds the URL for a specific drawing's result.
///
/// # Example
///
/// ```
/// use lotocsv_fetch::url::{BASE_URL, result_url};
///
/// let url = result_url(BASE_URL, 2500);
/// assert_eq!(
///     url,
///     "https://servicebus2.caixa.gov.br/portaldeloterias/api/lotofacil/2500"
/// );
/// ```
#[must_use]
pub fn result_url(base: &str, game: u32) -> String {
    format!("{}/{}", base.trim_end_matches('/'), game)
}

/// Builds the URL for the latest published drawing.
///
/// The service returns the current result when no game number is appended.
#[must_use]
pub fn latest_url(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_url() {
        assert_eq!(
            result_url(BASE_URL, 1),
            "https://servicebus2.caixa.gov.br/portaldeloterias/api/lotofacil/1"
        );
    }

    #[test]
    fn test_latest_url() {
        assert_eq!(
            latest_url(BASE_URL),
            "https://servicebus2.caixa.gov.br/portaldeloterias/api/lotofacil/"
        );
    }

    #[test]
    fn test_trailing_slash_base() {
        assert_eq!(result_url("http://localhost:8080/", 42), "http://localhost:8080/42");
        assert_eq!(latest_url("http://localhost:8080/"), "http://localhost:8080/");
    }
}
