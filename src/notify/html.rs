use indoc::formatdoc;

use crate::github::Issue;

const NO_DESCRIPTION: &str = "No description provided.";

const STYLE: &str = "
body { font-family: Arial, sans-serif; margin: 20px; }
h2 { color: #333; }
.info { margin: 10px 0; }
.label { font-weight: bold; }
.body {
    background-color: #f5f5f5;
    padding: 15px;
    border-left: 4px solid #0969da;
    margin: 20px 0;
}
.link {
    display: inline-block;
    margin: 20px 0;
    padding: 10px 20px;
    background-color: #0969da;
    color: white;
    text-decoration: none;
    border-radius: 5px;
}
";

/// Render the notification body for `issue` as a standalone HTML document.
///
/// Labels and assignees rows are left out entirely when empty.
pub fn render_issue_html(issue: &Issue) -> String {
    let labels = issue.label_names().join(", ");
    let assignees = issue.assignee_logins().join(", ");
    let body = issue
        .body
        .as_deref()
        .filter(|b| !b.is_empty())
        .unwrap_or(NO_DESCRIPTION);

    formatdoc! {r#"
        <html>
        <head>
        <meta charset="utf-8">
        <style>{STYLE}</style>
        </head>
        <body>
        <h2>Issue #{number}: {title}</h2>
        {status}{labels}{assignees}{created}{updated}<div class="body">
        <h3>Description:</h3>
        <pre>{body}</pre>
        </div>
        <a href="{url}" class="link">View Issue on GitHub</a>
        </body>
        </html>
        "#,
        number = issue.number,
        title = escape_html(&issue.title),
        status = info_row("Status", &issue.state.to_string()),
        labels = optional_info_row("Labels", &labels),
        assignees = optional_info_row("Assignees", &assignees),
        created = info_row("Created", &issue.created_at),
        updated = info_row("Updated", &issue.updated_at),
        body = escape_html(body),
        url = escape_html(&issue.url),
    }
}

fn info_row(name: &str, value: &str) -> String {
    format!(
        "<div class=\"info\"><span class=\"label\">{name}:</span> {}</div>\n",
        escape_html(value)
    )
}

fn optional_info_row(name: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        info_row(name, value)
    }
}

/// Escape text so it displays verbatim inside HTML content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
