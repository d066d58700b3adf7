use backoffice::repos::districts::{self, NewDistrict};
use backoffice::repos::{cities, states};
use sea_orm::ConnectionTrait;

/// Ids of the fixture seeded by [`seed_geography`].
///
/// ```text
/// North (state)
/// └── Metro (city)
///     ├── Central        top-level, has a nested district
///     │   └── Old Town   nested under Central
///     └── Harbor         top-level, leaf
/// South (state)
/// └── Port (city)
///     └── Dunes          top-level, leaf
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Geography {
    pub north_id: i32,
    pub metro_id: i32,
    pub port_id: i32,
    pub central_id: i32,
    pub old_town_id: i32,
    pub harbor_id: i32,
    pub dunes_id: i32,
}

pub async fn seed_geography<C: ConnectionTrait>(conn: &C) -> Geography {
    let north = states::create(conn, "North").await.expect("seed state");
    let south = states::create(conn, "South").await.expect("seed state");
    let metro = cities::create(conn, north.id, "Metro").await.expect("seed city");
    let port = cities::create(conn, south.id, "Port").await.expect("seed city");

    let central = district(conn, metro.id, None, "Central").await;
    let harbor = district(conn, metro.id, None, "Harbor").await;
    let old_town = district(conn, metro.id, Some(central), "Old Town").await;
    let dunes = district(conn, port.id, None, "Dunes").await;

    Geography {
        north_id: north.id,
        metro_id: metro.id,
        port_id: port.id,
        central_id: central,
        old_town_id: old_town,
        harbor_id: harbor,
        dunes_id: dunes,
    }
}

async fn district<C: ConnectionTrait>(
    conn: &C,
    city_id: i32,
    parent_id: Option<i32>,
    name: &str,
) -> i32 {
    districts::create(
        conn,
        NewDistrict {
            city_id,
            parent_id,
            name: name.to_string(),
        },
    )
    .await
    .expect("seed district")
    .id
}
