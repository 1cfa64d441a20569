//! Stand-in for the external maps service. A coordinate resolves to the
//! nearest entry of a fixed landmark table, so the same coordinate always
//! yields the same address.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

/// Address payload, shaped the way the inventory service's client expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Deserialize)]
struct MapsQuery {
    lat: f64,
    lon: f64,
}

struct Landmark {
    lat: f64,
    lon: f64,
    address: &'static str,
    city: &'static str,
    state: &'static str,
    zip: &'static str,
}

const LANDMARKS: &[Landmark] = &[
    Landmark {
        lat: 38.8339,
        lon: -104.8214,
        address: "1050 Garden of the Gods Rd",
        city: "Colorado Springs",
        state: "CO",
        zip: "80907",
    },
    Landmark {
        lat: 39.7392,
        lon: -104.9903,
        address: "1701 Bryant St",
        city: "Denver",
        state: "CO",
        zip: "80204",
    },
    Landmark {
        lat: 35.0844,
        lon: -106.6504,
        address: "400 Marquette Ave NW",
        city: "Albuquerque",
        state: "NM",
        zip: "87102",
    },
    Landmark {
        lat: 39.0997,
        lon: -94.5786,
        address: "414 E 12th St",
        city: "Kansas City",
        state: "MO",
        zip: "64106",
    },
    Landmark {
        lat: 32.7767,
        lon: -96.797,
        address: "1500 Marilla St",
        city: "Dallas",
        state: "TX",
        zip: "75201",
    },
    Landmark {
        lat: 33.4484,
        lon: -112.074,
        address: "200 W Washington St",
        city: "Phoenix",
        state: "AZ",
        zip: "85003",
    },
    Landmark {
        lat: 41.8781,
        lon: -87.6298,
        address: "121 N LaSalle St",
        city: "Chicago",
        state: "IL",
        zip: "60602",
    },
    Landmark {
        lat: 47.6062,
        lon: -122.3321,
        address: "600 4th Ave",
        city: "Seattle",
        state: "WA",
        zip: "98104",
    },
];

fn squared_distance(lat: f64, lon: f64, landmark: &Landmark) -> f64 {
    let dlat = lat - landmark.lat;
    let dlon = lon - landmark.lon;
    dlat * dlat + dlon * dlon
}

/// Nearest landmark by squared coordinate distance.
pub fn resolve(lat: f64, lon: f64) -> Address {
    let mut best = &LANDMARKS[0];
    let mut best_distance = squared_distance(lat, lon, best);
    for landmark in &LANDMARKS[1..] {
        let distance = squared_distance(lat, lon, landmark);
        if distance < best_distance {
            best = landmark;
            best_distance = distance;
        }
    }

    Address {
        address: best.address.to_string(),
        city: best.city.to_string(),
        state: best.state.to_string(),
        zip: best.zip.to_string(),
    }
}

pub fn router() -> Router {
    Router::new().route("/maps", get(maps_handler))
}

async fn maps_handler(Query(query): Query<MapsQuery>) -> Json<Address> {
    Json(resolve(query.lat, query.lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn coordinate_resolves_to_the_nearest_landmark() {
        let address = resolve(38.0, -104.0);
        assert_eq!(address.city, "Colorado Springs");
        assert_eq!(address.state, "CO");

        let address = resolve(39.7, -105.0);
        assert_eq!(address.city, "Denver");
    }

    #[test]
    fn resolution_is_stable() {
        assert_eq!(resolve(38.0, -104.0), resolve(38.0, -104.0));
    }

    #[tokio::test]
    async fn serves_the_resolved_address() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/maps?lat=38.0&lon=-104.0")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        let address: Address = serde_json::from_slice(&body).expect("address payload");
        assert_eq!(address.city, "Colorado Springs");
    }

    #[tokio::test]
    async fn rejects_requests_without_a_coordinate() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/maps?lat=38.0")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
