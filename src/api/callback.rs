use axum::response::Html;

/// The redirect target of the implicit grant. The token arrives in the URL
/// fragment, which the browser keeps to itself, so this page relays the raw
/// fragment to the collect endpoint as a query string.
const RELAY_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <p>Completing login...</p>
    <script>
      const fragment = window.location.hash.substring(1);
      fetch("/collect?" + fragment)
        .then((res) => res.text())
        .then((body) => { document.body.innerHTML = body; })
        .catch(() => {
          document.body.innerHTML = "<h4>Could not reach the local server.</h4>";
        });
    </script>
  </body>
</html>
"#;

pub async fn callback() -> Html<&'static str> {
    Html(RELAY_PAGE)
}
