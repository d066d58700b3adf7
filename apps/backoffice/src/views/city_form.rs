use crate::repos::cities::CityWithState;
use crate::routes::links::AdminLinks;
use crate::views::escape::escape_html;

/// Edit form for a city name, posting to `admin.city.update`.
pub fn render_city_edit_form(city: &CityWithState, links: &AdminLinks) -> String {
    format!(
        r#"<form method="POST" action="{action}" class="city-edit">
<div class="label">نام استان</div><div>{state}</div>
<label for="name">نام شهر</label>
<input type="text" id="name" name="name" value="{name}" maxlength="255" required>
<button type="submit" class="btn btn-primary">ذخیره</button>
<a class="btn btn-default" href="{back}">بازگشت</a>
</form>"#,
        action = escape_html(&links.city_update(city.city.id)),
        state = escape_html(&city.state_name),
        name = escape_html(&city.city.name),
        back = escape_html(&links.district_index()),
    )
}
