//! Landing page and SVG asset rendering.
//!
//! Plain string templates. Every configured value is HTML-escaped before it
//! is interpolated; colours are validated as hex at config load.

use std::fmt::Write;

use chrono::SecondsFormat;

use crate::config::SiteConfig;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn brand_initial(brand: &str) -> String {
    brand
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "L".to_string())
}

/// Square favicon: the brand initial on the primary colour.
pub fn favicon_svg(site: &SiteConfig) -> String {
    let theme = &site.theme;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="14" fill="{primary}"/><circle cx="50" cy="14" r="6" fill="{accent}"/><text x="32" y="44" font-family="system-ui,sans-serif" font-size="34" font-weight="700" text-anchor="middle" fill="{text}">{initial}</text></svg>"##,
        primary = theme.primary,
        accent = theme.accent,
        text = theme.text,
        initial = escape_html(&brand_initial(&site.brand)),
    )
}

/// Wordmark logo: favicon mark followed by the brand name.
pub fn logo_svg(site: &SiteConfig) -> String {
    let theme = &site.theme;
    let width = 80 + site.brand.chars().count() * 22;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} 64" height="64" width="{width}"><rect width="64" height="64" rx="14" fill="{primary}"/><circle cx="50" cy="14" r="6" fill="{accent}"/><text x="32" y="44" font-family="system-ui,sans-serif" font-size="34" font-weight="700" text-anchor="middle" fill="{text}">{initial}</text><text x="78" y="44" font-family="system-ui,sans-serif" font-size="36" font-weight="700" fill="{text}">{brand}</text></svg>"##,
        primary = theme.primary,
        accent = theme.accent,
        text = theme.text,
        initial = escape_html(&brand_initial(&site.brand)),
        brand = escape_html(&site.brand),
    )
}

fn contact_links(site: &SiteConfig) -> String {
    let mut links = String::new();
    if let Some(email) = &site.contact_email {
        let email = escape_html(email);
        let _ = write!(links, r#"<a href="mailto:{email}">{email}</a>"#);
    }
    if let Some(url) = &site.twitter_url {
        let _ = write!(links, r#"<a href="{}" rel="noopener">Twitter</a>"#, escape_html(url));
    }
    if let Some(url) = &site.github_url {
        let _ = write!(links, r#"<a href="{}" rel="noopener">GitHub</a>"#, escape_html(url));
    }
    links
}

/// The coming-soon page with the signup form and optional countdown.
pub fn landing_html(site: &SiteConfig) -> String {
    let theme = &site.theme;
    let brand = escape_html(&site.brand);
    let tagline = escape_html(&site.tagline);
    let countdown = site
        .launch_at
        .map(|at| {
            format!(
                r#"<p class="countdown" data-launch="{}" aria-live="polite"></p>"#,
                at.to_rfc3339_opts(SecondsFormat::Secs, true)
            )
        })
        .unwrap_or_default();

    format!(
        r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{brand} - coming soon</title>
<meta name="description" content="{tagline}">
<link rel="icon" href="/favicon.svg" type="image/svg+xml">
<style>
:root {{ --primary: {primary}; --accent: {accent}; --bg: {background}; --text: {text}; }}
* {{ box-sizing: border-box; }}
body {{ margin: 0; min-height: 100vh; display: grid; place-items: center; background: var(--bg); color: var(--text); font-family: system-ui, -apple-system, sans-serif; }}
main {{ max-width: 34rem; padding: 2rem; text-align: center; }}
h1 {{ font-size: clamp(2rem, 6vw, 3.25rem); margin: 1rem 0 .5rem; }}
.tagline {{ opacity: .8; font-size: 1.15rem; }}
.countdown {{ color: var(--accent); font-variant-numeric: tabular-nums; font-size: 1.25rem; }}
form {{ display: flex; gap: .5rem; margin-top: 2rem; }}
input {{ flex: 1; padding: .8rem 1rem; border-radius: .6rem; border: 1px solid #ffffff33; background: #ffffff10; color: inherit; font-size: 1rem; }}
button {{ padding: .8rem 1.2rem; border: 0; border-radius: .6rem; background: var(--primary); color: var(--text); font-weight: 600; cursor: pointer; }}
.status {{ min-height: 1.5rem; margin-top: 1rem; }}
footer a {{ color: var(--accent); margin: 0 .5rem; }}
</style>
</head>
<body>
<main>
<img src="/logo.svg" alt="{brand}" height="48">
<h1>Coming soon</h1>
<p class="tagline">{tagline}</p>
{countdown}
<form id="signup" method="post" action="/api/signup">
<input type="email" name="email" placeholder="you@example.com" required autocomplete="email">
<button type="submit">Notify me</button>
</form>
<p class="status" id="status" role="status"></p>
<footer>{links}</footer>
</main>
<script>
(function () {{
  var form = document.getElementById("signup");
  var status = document.getElementById("status");
  var messages = {{
    invalid_email: "That email doesn't look right.",
    rate_limited: "Too many attempts. Please try again later.",
    already_signed_up: "You're already on the list.",
    server_error: "Something went wrong. Please try again."
  }};
  form.addEventListener("submit", function (event) {{
    event.preventDefault();
    var email = form.elements.email.value;
    fetch("/api/signup", {{
      method: "POST",
      headers: {{ "content-type": "application/json" }},
      body: JSON.stringify({{ email: email }})
    }}).then(function (res) {{ return res.json(); }}).then(function (body) {{
      if (body.ok) {{
        status.textContent = messages[body.message] || "Thanks! We'll be in touch.";
        form.reset();
      }} else {{
        status.textContent = messages[body.error] || messages.server_error;
      }}
    }}).catch(function () {{ status.textContent = messages.server_error; }});
  }});
  var countdown = document.querySelector(".countdown");
  if (countdown) {{
    var target = Date.parse(countdown.dataset.launch);
    var tick = function () {{
      var left = Math.max(0, target - Date.now());
      var d = Math.floor(left / 86400000), h = Math.floor(left / 3600000) % 24;
      var m = Math.floor(left / 60000) % 60, s = Math.floor(left / 1000) % 60;
      countdown.textContent = left > 0 ? d + "d " + h + "h " + m + "m " + s + "s" : "We're live!";
    }};
    tick();
    setInterval(tick, 1000);
  }}
}})();
</script>
</body>
</html>
"##,
        primary = theme.primary,
        accent = theme.accent,
        background = theme.background,
        text = theme.text,
        links = contact_links(site),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_svgs_use_theme_and_brand() {
        let site = SiteConfig {
            brand: "orbit".to_string(),
            ..Default::default()
        };

        let favicon = favicon_svg(&site);
        assert!(favicon.starts_with("<svg"));
        assert!(favicon.contains(r##"fill="#6d28d9""##));
        assert!(favicon.contains(">O</text>"));

        let logo = logo_svg(&site);
        assert!(logo.contains(">orbit</text>"));
        assert!(logo.contains(r##"fill="#f59e0b""##));
    }

    #[test]
    fn test_landing_escapes_configured_text() {
        let site = SiteConfig {
            brand: "<script>alert(1)</script>".to_string(),
            contact_email: Some("hi@example.com".to_string()),
            ..Default::default()
        };

        let html = landing_html(&site);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"href="mailto:hi@example.com""#));
        assert!(!html.contains("data-launch"));
    }

    #[test]
    fn test_landing_countdown() {
        let site = SiteConfig {
            launch_at: Some(Utc.with_ymd_and_hms(2026, 12, 1, 8, 0, 0).unwrap()),
            ..Default::default()
        };

        assert!(landing_html(&site).contains(r#"data-launch="2026-12-01T08:00:00Z""#));
    }
}
