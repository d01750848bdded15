//! Server-rendered pages. Every dynamic value goes through [`escape_html`].

use crate::models::common::MenuItem;
use crate::services::locations::Location;
use std::fmt::Write;

const PAGE_TITLE: &str = "Campus Food Delivery";

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{PAGE_TITLE}</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

pub fn render_login(error: Option<&str>) -> String {
    let mut body = format!("<h1>{PAGE_TITLE}</h1>\n<h2>Login</h2>\n");
    if let Some(error) = error {
        let _ = writeln!(body, "<p class=\"error\">{}</p>", escape_html(error));
    }
    body.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <label>Email <input type=\"email\" name=\"email\" required></label>\n\
         <label>Campus ID <input type=\"text\" name=\"campus_id\" required></label>\n\
         <button type=\"submit\">Login</button>\n\
         </form>\n",
    );
    layout(&body)
}

pub fn render_menu(username: &str, items: &[MenuItem], static_url_prefix: &str) -> String {
    let mut body = format!(
        "<h1>{PAGE_TITLE}</h1>\n<p>Welcome, {}</p>\n<a href=\"/logout\">Logout</a>\n",
        escape_html(username)
    );

    let mut current_category: Option<&str> = None;
    for item in items {
        if current_category != Some(item.category.as_str()) {
            if current_category.is_some() {
                body.push_str("</ul>\n");
            }
            let _ = writeln!(body, "<h3>{}</h3>\n<ul>", escape_html(&item.category));
            current_category = Some(item.category.as_str());
        }
        let _ = writeln!(
            body,
            "<li data-item-id=\"{}\" data-price=\"{:.2}\">{} - ${:.2}</li>",
            item.id,
            item.price,
            escape_html(&item.name),
            item.price
        );
    }
    if current_category.is_some() {
        body.push_str("</ul>\n");
    } else {
        body.push_str("<p>The menu is empty.</p>\n");
    }

    body.push_str("<label>Deliver to <select name=\"location\">\n");
    for location in Location::ALL {
        let name = escape_html(location.human_readable());
        let _ = writeln!(body, "<option value=\"{name}\">{name}</option>");
    }
    body.push_str("</select></label>\n");
    let _ = writeln!(
        body,
        "<img id=\"location-image\" alt=\"Delivery location\" src=\"{}/{}\">",
        escape_html(static_url_prefix.trim_end_matches('/')),
        crate::services::locations::DEFAULT_IMAGE
    );

    layout(&body)
}
