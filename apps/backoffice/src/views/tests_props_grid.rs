//! Property tests for the district grid renderer (pure, no DB).
//!
//! Properties tested:
//! - One card per row, in row order
//! - Show link present iff `has_district`
//! - City and state names appear in the card of their district

use proptest::prelude::*;

use crate::repos::districts::DistrictRow;
use crate::routes::links::AdminLinks;
use crate::views::render_district_grid;

const CARD_MARKER: &str = "grid-item";

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}"
}

fn district_row() -> impl Strategy<Value = DistrictRow> {
    (1..100_000i32, name(), name(), name(), any::<bool>()).prop_map(
        |(id, name, city_name, state_name, has_district)| DistrictRow {
            id,
            name,
            city_name,
            state_name,
            has_district,
        },
    )
}

/// Splits rendered output into per-card chunks.
fn cards(html: &str) -> Vec<&str> {
    html.split(CARD_MARKER).skip(1).collect()
}

proptest! {
    #[test]
    fn prop_one_card_per_row(rows in prop::collection::vec(district_row(), 0..20)) {
        let html = render_district_grid(&rows, &AdminLinks::default());
        prop_assert_eq!(html.matches(CARD_MARKER).count(), rows.len());
    }

    #[test]
    fn prop_cards_keep_input_order(rows in prop::collection::vec(district_row(), 1..20)) {
        let html = render_district_grid(&rows, &AdminLinks::default());
        let rendered = cards(&html);
        prop_assert_eq!(rendered.len(), rows.len());

        for (card, row) in rendered.iter().zip(&rows) {
            let id_cell = format!("<div>{}#</div>", row.id);
            prop_assert!(card.contains(&id_cell));
        }
    }

    #[test]
    fn prop_show_link_iff_has_district(row in district_row()) {
        let links = AdminLinks::default();
        let html = render_district_grid(std::slice::from_ref(&row), &links);

        let show = format!(r#"href="{}""#, links.district_show(row.id));
        prop_assert_eq!(html.contains(&show), row.has_district);

        let expected_controls = if row.has_district { 3 } else { 2 };
        prop_assert_eq!(html.matches("<a ").count(), expected_controls);
    }

    #[test]
    fn prop_relation_names_rendered(row in district_row()) {
        let html = render_district_grid(std::slice::from_ref(&row), &AdminLinks::default());
        let city_cell = format!("<div>{}</div>", row.city_name);
        let state_cell = format!("<div>{}</div>", row.state_name);
        prop_assert!(html.contains(&city_cell));
        prop_assert!(html.contains(&state_cell));
    }
}
