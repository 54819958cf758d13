use crate::domain::Person;
use crate::features::flash::Flash;
use axum::response::Html;
use std::fmt::Write;

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps `body` in the shared page chrome, printing `flash` above it.
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let notice = match flash {
        Some(flash) => format!(
            r#"<div class="flash flash-{}">{}</div>"#,
            flash.kind,
            escape_html(&flash.message)
        ),
        None => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<nav><a href="/">Home</a> | <a href="/persons">Persons</a> | <a href="/persons/add">Add person</a></nav>
{notice}
{body}
</body>
</html>
"#,
        title = escape_html(title),
    ))
}

pub fn persons_page(persons: &[Person], flash: Option<&Flash>) -> Html<String> {
    let mut body = String::from("<h1>Persons</h1>\n");

    if persons.is_empty() {
        body.push_str(r#"<p>No persons yet. <a href="/persons/add">Add one</a>.</p>"#);
        return layout("Persons", flash, &body);
    }

    body.push_str("<table>\n<tr><th>ID</th><th>Name</th><th>Age</th><th></th></tr>\n");
    for person in persons {
        // writing into a String never fails
        let _ = write!(
            body,
            r#"<tr><td>{id}</td><td>{name}</td><td>{age}</td><td><a href="/persons/edit/{id}">Edit</a> <form class="inline" method="post" action="/persons/delete/{id}"><button type="submit">Delete</button></form></td></tr>
"#,
            id = person.id,
            name = escape_html(&person.name),
            age = person.age,
        );
    }
    body.push_str("</table>\n");

    layout("Persons", flash, &body)
}

fn person_form(action: &str, name: &str, age: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>Age <input type="number" name="age" value="{age}" required></label>
<button type="submit">{submit}</button>
</form>
<p><a href="/persons">Back to list</a></p>
"#,
        action = action,
        name = escape_html(name),
        age = escape_html(age),
        submit = submit,
    )
}

pub fn add_person_page(flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        "<h1>Add person</h1>\n{}",
        person_form("/persons/add", "", "", "Add")
    );
    layout("Add person", flash, &body)
}

pub fn edit_person_page(person: &Person, flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        "<h1>Edit person</h1>\n{}",
        person_form(
            &format!("/persons/edit/{}", person.id),
            &person.name,
            &person.age.to_string(),
            "Save",
        )
    );
    layout("Edit person", flash, &body)
}
