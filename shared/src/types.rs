use lambda_http::{Request, RequestExt};
use std::fmt;

// ========== QUERY ==========
/// Raw query parameters the proxy understands. Everything else is ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProxyQuery {
    pub rover: Option<String>,
    pub sol: Option<String>,
    pub latest: Option<String>,
    pub image_url: Option<String>,
}

impl ProxyQuery {
    /// Pull the proxy parameters out of the invocation's query string
    pub fn from_request(event: &Request) -> Self {
        let params = event.query_string_parameters_ref();
        let get = |name: &str| {
            params
                .and_then(|params| params.first(name))
                .map(|value| value.to_string())
        };

        Self {
            rover: get("rover"),
            sol: get("sol"),
            latest: get("latest"),
            image_url: get("image_url"),
        }
    }

    /// Decide which upstream this request goes to.
    ///
    /// A non-empty `image_url` always wins. Otherwise `latest=true` beats `sol`,
    /// and with neither the rover's manifest is requested. Rover and sol are
    /// passed through untouched; the upstream API decides what is valid.
    pub fn resolve(self) -> ProxyRequest {
        if let Some(url) = self.image_url.filter(|url| !url.is_empty()) {
            return ProxyRequest::ImageRelay { url };
        }

        let rover = self.rover.unwrap_or_default();

        let route = if self.latest.as_deref() == Some("true") {
            ApiRoute::LatestPhotos { rover }
        } else {
            match self.sol.filter(|sol| !sol.is_empty()) {
                Some(sol) => ApiRoute::PhotosBySol { rover, sol },
                None => ApiRoute::Manifest { rover },
            }
        };
        ProxyRequest::Api(route)
    }
}

// ========== REQUEST ==========
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyRequest {
    ImageRelay { url: String },
    Api(ApiRoute),
}

/// Rover photo API endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRoute {
    LatestPhotos { rover: String },
    PhotosBySol { rover: String, sol: String },
    Manifest { rover: String },
}

impl fmt::Display for ProxyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyRequest::ImageRelay { url } => write!(f, "image relay ({})", url),
            ProxyRequest::Api(route) => write!(f, "{}", route),
        }
    }
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiRoute::LatestPhotos { rover } => write!(f, "latest photos for '{}'", rover),
            ApiRoute::PhotosBySol { rover, sol } => {
                write!(f, "photos for '{}' on sol {}", rover, sol)
            }
            ApiRoute::Manifest { rover } => write!(f, "manifest for '{}'", rover),
        }
    }
}

// ========== UPSTREAM ==========
/// Fully buffered upstream reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Reason phrase as sent by the server, when it differs from the canonical one
    pub reason: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The server's reason phrase, else the canonical one, else the bare code
    pub fn status_text(&self) -> String {
        if let Some(reason) = self.reason.as_deref().filter(|reason| !reason.is_empty()) {
            return reason.to_string();
        }

        lambda_http::http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| self.status.to_string())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query(pairs: &[(&str, &str)]) -> ProxyQuery {
        let mut query = ProxyQuery::default();
        for (name, value) in pairs {
            let value = Some(value.to_string());
            match *name {
                "rover" => query.rover = value,
                "sol" => query.sol = value,
                "latest" => query.latest = value,
                "image_url" => query.image_url = value,
                _ => {}
            }
        }
        query
    }

    fn api(route: ApiRoute) -> ProxyRequest {
        ProxyRequest::Api(route)
    }

    #[test]
    fn test_from_request_reads_query_string() {
        let mut params: HashMap<String, String> = HashMap::new();
        params.insert("rover".into(), "curiosity".into());
        params.insert("sol".into(), "1000".into());
        params.insert("camera".into(), "FHAZ".into());

        let event = Request::default().with_query_string_parameters(params);

        assert_eq!(
            ProxyQuery::from_request(&event),
            ProxyQuery {
                rover: Some("curiosity".to_string()),
                sol: Some("1000".to_string()),
                latest: None,
                image_url: None,
            }
        );
        assert_eq!(ProxyQuery::from_request(&Request::default()), ProxyQuery::default());
    }

    #[test]
    fn test_image_url_takes_priority() {
        let request = query(&[
            ("image_url", "https://mars.nasa.gov/a.jpg"),
            ("rover", "curiosity"),
            ("latest", "true"),
        ])
        .resolve();

        assert_eq!(
            request,
            ProxyRequest::ImageRelay {
                url: "https://mars.nasa.gov/a.jpg".to_string()
            }
        );
    }

    #[test]
    fn test_empty_image_url_falls_through_to_api() {
        let request = query(&[("image_url", ""), ("rover", "spirit")]).resolve();
        assert_eq!(
            request,
            api(ApiRoute::Manifest {
                rover: "spirit".to_string()
            })
        );
    }

    #[test]
    fn test_latest_beats_sol() {
        let request = query(&[("rover", "curiosity"), ("latest", "true"), ("sol", "1000")]).resolve();
        assert_eq!(
            request,
            api(ApiRoute::LatestPhotos {
                rover: "curiosity".to_string()
            })
        );
    }

    #[test]
    fn test_latest_must_be_exactly_true() {
        let request = query(&[("rover", "curiosity"), ("latest", "TRUE"), ("sol", "12")]).resolve();
        assert_eq!(
            request,
            api(ApiRoute::PhotosBySol {
                rover: "curiosity".to_string(),
                sol: "12".to_string()
            })
        );
    }

    #[test]
    fn test_unvalidated_values_pass_through() {
        let request = query(&[("rover", "not-a-rover"), ("sol", "abc")]).resolve();
        assert_eq!(
            request,
            api(ApiRoute::PhotosBySol {
                rover: "not-a-rover".to_string(),
                sol: "abc".to_string()
            })
        );

        // Missing rover becomes an empty path segment
        assert_eq!(
            ProxyQuery::default().resolve(),
            api(ApiRoute::Manifest {
                rover: String::new()
            })
        );
    }

    #[test]
    fn test_status_text() {
        let not_found = UpstreamResponse {
            status: 404,
            reason: None,
            content_type: None,
            body: Vec::new(),
        };
        assert_eq!(not_found.status_text(), "Not Found");
        assert!(!not_found.is_success());

        let odd = UpstreamResponse {
            status: 599,
            reason: None,
            content_type: None,
            body: Vec::new(),
        };
        assert_eq!(odd.status_text(), "599");
    }

    #[test]
    fn test_status_text_prefers_server_reason() {
        let gone = UpstreamResponse {
            status: 404,
            reason: Some("Image Retired".to_string()),
            content_type: None,
            body: Vec::new(),
        };
        assert_eq!(gone.status_text(), "Image Retired");

        let blank = UpstreamResponse {
            reason: Some(String::new()),
            ..gone
        };
        assert_eq!(blank.status_text(), "Not Found");
    }
}
