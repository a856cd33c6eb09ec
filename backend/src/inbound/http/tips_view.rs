//! HTML rendering for the tips page and its contributors panel.
//!
//! The panel has three mutually exclusive states. Only the success state
//! contains the contributor grid; the tip list is rendered independently of
//! the panel state.

use crate::domain::{Contributor, Tip};

/// Element id of the contributors panel; the inline loader replaces it.
pub const PANEL_ID: &str = "contributors-panel";
/// Path of the fragment endpoint the loader requests.
pub const PANEL_SOURCE: &str = "/tips/contributors";
/// Text shown while the contributor request is in flight.
pub const LOADING_MESSAGE: &str = "Loading contributors...";
/// Text shown for any contributor failure.
pub const FAILED_MESSAGE: &str = "Failed to load contributors";

/// Render state of the contributors panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributorsPanel<'a> {
    Loading,
    Failed,
    Loaded(&'a [Contributor]),
}

impl ContributorsPanel<'_> {
    /// Value of the panel's `data-state` attribute.
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Failed => "error",
            Self::Loaded(_) => "success",
        }
    }
}

/// Render the complete tips document.
pub fn render_page(tips: &[Tip], panel: ContributorsPanel<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>BBQ Tips</title>\n",
        "<meta name=\"description\" content=\"Essential barbecue cooking tips\">\n",
        "</head>\n",
        "<body>\n",
        "<main>\n",
        "<h1>BBQ Tips</h1>\n",
        "<section class=\"tips\">\n",
    ));
    for tip in tips {
        html.push_str(&render_tip(tip));
    }
    html.push_str("</section>\n<section class=\"contributors\">\n<h2>BBQ Tips Contributors</h2>\n");
    html.push_str(&render_panel(panel));
    html.push_str("\n</section>\n</main>\n");
    if matches!(panel, ContributorsPanel::Loading) {
        html.push_str(&loader_script());
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Render the contributors panel on its own, as served to the loader.
pub fn render_panel(panel: ContributorsPanel<'_>) -> String {
    let state = panel.state_name();
    match panel {
        ContributorsPanel::Loading => format!(
            "<div id=\"{PANEL_ID}\" data-state=\"{state}\" data-source=\"{PANEL_SOURCE}\"><p>{LOADING_MESSAGE}</p></div>"
        ),
        ContributorsPanel::Failed => format!(
            "<div id=\"{PANEL_ID}\" data-state=\"{state}\"><p role=\"alert\">{FAILED_MESSAGE}</p></div>"
        ),
        ContributorsPanel::Loaded(contributors) => {
            let cards: String = contributors.iter().map(render_contributor).collect();
            format!(
                "<div id=\"{PANEL_ID}\" data-state=\"{state}\"><ul class=\"contributor-grid\">{cards}</ul></div>"
            )
        }
    }
}

fn render_tip(tip: &Tip) -> String {
    format!(
        "<article class=\"tip\"><span class=\"tip-icon\" aria-hidden=\"true\">{icon}</span><h2>{title}</h2><p>{description}</p></article>\n",
        icon = escape_html(tip.icon),
        title = escape_html(tip.title),
        description = escape_html(tip.description),
    )
}

fn render_contributor(contributor: &Contributor) -> String {
    let initial = contributor
        .name()
        .initial()
        .map(String::from)
        .unwrap_or_default();
    format!(
        "<li class=\"contributor\" data-id=\"{id}\"><span class=\"avatar\" aria-hidden=\"true\">{initial}</span><p class=\"contributor-name\">{name}</p><p class=\"contributor-email\">{email}</p></li>",
        id = contributor.id(),
        initial = escape_html(&initial),
        name = escape_html(contributor.name().as_ref()),
        email = escape_html(contributor.email().as_ref()),
    )
}

// Issues the single panel request; any failure, including a non-2xx
// fragment response, switches the panel to the error state.
fn loader_script() -> String {
    format!(
        r#"<script>
(function () {{
  var panel = document.getElementById("{PANEL_ID}");
  if (!panel) {{ return; }}
  fetch(panel.getAttribute("data-source"))
    .then(function (response) {{
      if (!response.ok) {{ throw new Error("status " + response.status); }}
      return response.text();
    }})
    .then(function (html) {{ panel.outerHTML = html; }})
    .catch(function () {{
      panel.setAttribute("data-state", "error");
      panel.innerHTML = '<p role="alert">{FAILED_MESSAGE}</p>';
    }});
}})();
</script>
"#
    )
}

/// Escape text for inclusion in HTML element content or quoted attributes.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
