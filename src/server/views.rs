//! HTML pages.
//!
//! Pages are small enough to build with `format!`. Every value that came from
//! a user or the database goes through [`escape_html`].

use crate::domain::{ContactId, Field, FieldErrors};
use crate::models::{Contact, ContactForm, Flash};
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}th,td{text-align:left;padding:.4rem;border-bottom:1px solid #ddd}\
.flash{padding:.5rem;margin:.3rem 0;border-radius:4px}.success{background:#e6f4ea}.error{background:#fce8e6}\
.field-error{color:#b3261e;font-size:.85rem}form.inline{display:inline}label{display:block;margin-top:.5rem}";

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut flash_html = String::new();
    for flash in flashes {
        let _ = write!(
            flash_html,
            "<div class=\"flash {}\">{}</div>",
            flash.kind.as_str(),
            escape_html(&flash.message)
        );
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n{flash_html}\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn input(
    field: Field,
    input_type: &str,
    value: &str,
    required: bool,
    errors: &FieldErrors,
) -> String {
    let mut html = format!(
        "<label for=\"{name}\">{label}</label>\
         <input type=\"{input_type}\" id=\"{name}\" name=\"{name}\" value=\"{value}\"{required}>",
        name = field.as_str(),
        label = field.label(),
        value = escape_html(value),
        required = if required { " required" } else { "" },
    );
    if let Some(message) = errors.get(field) {
        let _ = write!(
            html,
            "<div class=\"field-error\">{}</div>",
            escape_html(message)
        );
    }
    html
}

fn contact_fields(form: &ContactForm, errors: &FieldErrors) -> String {
    [
        input(Field::Name, "text", &form.name, true, errors),
        input(Field::Email, "email", &form.email, true, errors),
        input(Field::Phone, "tel", &form.phone, false, errors),
    ]
    .concat()
}

fn contact_row(contact: &Contact) -> String {
    format!(
        "<tr><td>{name}</td><td>{email}</td><td>{phone}</td><td>\
         <a href=\"/{id}/edit/\">Edit</a> \
         <form class=\"inline\" method=\"post\" action=\"/{id}/delete/\">\
         <button type=\"submit\">Delete</button></form></td></tr>",
        id = contact.id,
        name = escape_html(&contact.name),
        email = escape_html(&contact.email),
        phone = escape_html(contact.phone.as_deref().unwrap_or("")),
    )
}

/// The contact list with the create form underneath.
///
/// `form` holds the values to pre-fill; after a rejected submission these are
/// the user's unsaved input.
pub fn list_page(
    contacts: &[Contact],
    form: &ContactForm,
    errors: &FieldErrors,
    flashes: &[Flash],
) -> String {
    let table = if contacts.is_empty() {
        "<p>No contacts yet.</p>".to_string()
    } else {
        let rows: String = contacts.iter().map(contact_row).collect();
        format!(
            "<table><thead><tr><th>Name</th><th>Email</th><th>Phone</th><th></th></tr></thead>\
             <tbody>{rows}</tbody></table>"
        )
    };

    let body = format!(
        "{table}\n<h2>Add contact</h2>\n<form method=\"post\" action=\"/\">{fields}\
         <p><button type=\"submit\">Add</button></p></form>",
        fields = contact_fields(form, errors),
    );
    layout("Contacts", flashes, &body)
}

/// Edit form for one contact.
pub fn edit_page(
    id: ContactId,
    form: &ContactForm,
    errors: &FieldErrors,
    flashes: &[Flash],
) -> String {
    let body = format!(
        "<form method=\"post\" action=\"/{id}/edit/\">{fields}\
         <p><button type=\"submit\">Save</button> <a href=\"/\">Cancel</a></p></form>",
        fields = contact_fields(form, errors),
    );
    layout("Edit contact", flashes, &body)
}
