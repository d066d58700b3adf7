//! Card grid for district listings.

use crate::repos::districts::DistrictRow;
use crate::routes::links::AdminLinks;
use crate::views::escape::escape_html;

/// Shown on every card; districts carry no image of their own.
pub const PLACEHOLDER_IMAGE: &str = "/admin_dashboard/images/No_image.jpg.png";

const LABEL_ID: &str = "شناسه";
const LABEL_DISTRICT_NAME: &str = "نام منطقه";
const LABEL_CITY_NAME: &str = "نام شهر";
const LABEL_STATE_NAME: &str = "نام استان";
const LABEL_ACTIONS: &str = "عملیات";

/// One `grid-item` card per row, in row order. No rows, no output.
pub fn render_district_grid(rows: &[DistrictRow], links: &AdminLinks) -> String {
    let mut html = String::new();
    for row in rows {
        render_item(&mut html, row, links);
    }
    html
}

fn render_item(html: &mut String, row: &DistrictRow, links: &AdminLinks) {
    html.push_str(r#"<div class="col-lg-3 col-md-4 col-sm-6 col-xs-12 grid-item roles">"#);
    html.push_str(r#"<div class="item-container">"#);

    html.push_str(&format!(
        r#"<div class="col-lg-3 col-md-3 col-sm-3 col-xs-3 col"><div class="img-container"><img class="img-responsive" src="{PLACEHOLDER_IMAGE}"></div></div>"#
    ));

    field(
        html,
        "col-lg-4 col-md-3 col-sm-3 col-xs-3 col",
        LABEL_ID,
        &format!("{}#", row.id),
    );
    field(
        html,
        "col-lg-5 col-md-3 col-sm-4 col-xs-6 col",
        LABEL_DISTRICT_NAME,
        &row.name,
    );
    field(
        html,
        "col-lg-4 col-md-6 col-sm-6 col-xs-6 col",
        LABEL_CITY_NAME,
        &row.city_name,
    );
    field(
        html,
        "col-lg-4 col-md-6 col-sm-6 col-xs-6 col",
        LABEL_STATE_NAME,
        &row.state_name,
    );

    html.push_str(r#"<div class="col-lg-12 col-md-12 col-sm-12 col-xs-12 col col-action">"#);
    html.push_str(&format!(r#"<div class="label">{LABEL_ACTIONS}</div>"#));
    html.push_str(r#"<div class="actions-container"><div class="col-lg-5 col-md-12 col-xs-12">"#);
    render_actions(html, row, links);
    html.push_str("</div></div></div>");

    html.push_str("</div></div>");
}

fn field(html: &mut String, class: &str, label: &str, value: &str) {
    html.push_str(&format!(
        r#"<div class="{class}"><div class="label">{label}</div><div>{}</div></div>"#,
        escape_html(value)
    ));
}

// The edit control points at the city edit route keyed by the district id.
fn render_actions(html: &mut String, row: &DistrictRow, links: &AdminLinks) {
    html.push_str(&format!(
        r#"<a class="btn btn-sm btn-primary" href="{}"><i class="fa fa-pencil"></i></a>"#,
        escape_html(&links.city_edit(row.id))
    ));
    html.push_str(&format!(
        r#"<a class="btn btn-sm btn-danger virt-form" data-action="{}" data-method="DELETE" confirm><i class="fa fa-trash"></i></a>"#,
        escape_html(&links.district_destroy(row.id))
    ));
    if row.has_district {
        html.push_str(&format!(
            r#"<a class="btn btn-sm btn-success" href="{}"><i class="fa fa-eye"></i></a>"#,
            escape_html(&links.district_show(row.id))
        ));
    }
}
