//! Admin page shell.

use crate::views::escape::escape_html;

/// Intercepts clicks on controls that declare `data-method` and `confirm`,
/// asks for confirmation, then sends the request and reloads on success.
const CONFIRM_SCRIPT: &str = r#"<script>
document.addEventListener('click', function (event) {
  var control = event.target.closest('[data-method][confirm]');
  if (!control) { return; }
  event.preventDefault();
  if (!window.confirm('آیا مطمئن هستید؟')) { return; }
  fetch(control.getAttribute('data-action'), { method: control.getAttribute('data-method') })
    .then(function (response) {
      if (response.ok) { window.location.reload(); }
      else { window.alert('خطا: ' + response.status); }
    });
});
</script>"#;

/// Wraps `body` (already-rendered HTML) in the admin layout.
pub fn render_page(title: &str, body: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="fa" dir="rtl">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<div class="row grid">{body}</div>
{CONFIRM_SCRIPT}
</body>
</html>
"#
    )
}
