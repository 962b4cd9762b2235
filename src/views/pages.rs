//! Page renderers, one per route or outcome

use super::{escape, layout, list, table};
use crate::{
    error::Rejection,
    models::{
        AcceptedPaper, AvailableBook, BorrowedBook, PublishedBook, ReaderInfo, Supplier,
        SupplierReading,
    },
};

/// A form posting to `action`; `fields` are (input name, label, is password)
fn form(action: &str, legend: &str, fields: &[(&str, &str, bool)]) -> String {
    let mut html = format!(
        "<form method=\"post\" action=\"{}\">\n<fieldset>\n<legend>{}</legend>\n",
        escape(action),
        escape(legend)
    );
    for (name, label, secret) in fields {
        let kind = if *secret { "password" } else { "text" };
        html.push_str(&format!(
            "<label>{} <input type=\"{}\" name=\"{}\"></label>\n",
            escape(label),
            kind,
            escape(name)
        ));
    }
    html.push_str("<input type=\"submit\" value=\"Submit\">\n</fieldset>\n</form>\n");
    html
}

pub fn index(names: &[String]) -> String {
    let mut body = list(names);
    body.push_str(
        "\n<p><a href=\"/books\">All readings</a> | <a href=\"/suppliers\">Suppliers</a> | <a href=\"/another\">About</a></p>\n",
    );
    body.push_str(&form("/searchbysupplier", "Readings by supplier", &[("name1", "Supplier name", false)]));
    body.push_str(&form("/searchallpapers", "Find a paper", &[("name2", "Paper title", false)]));
    body.push_str(&form("/searchallbooks", "Find a book", &[("name3", "Book name", false)]));
    body.push_str(&form(
        "/editlibrarians",
        "Change a librarian password",
        &[
            ("name4", "Admin login", false),
            ("name5", "Admin password", true),
            ("name6", "Librarian uni", false),
            ("name7", "New password", true),
        ],
    ));
    body.push_str(&form(
        "/borrowbooks",
        "Borrow a reading",
        &[
            ("name8", "Librarian uni", false),
            ("name9", "Librarian password", true),
            ("name10", "Reader uni", false),
            ("name11", "Reading id", false),
        ],
    ));
    body.push_str(&form(
        "/returnreadings",
        "Return a reading",
        &[
            ("name12", "Librarian uni", false),
            ("name13", "Librarian password", true),
            ("name14", "Reader uni", false),
            ("name15", "Reading id", false),
        ],
    ));
    body.push_str(&form(
        "/checkmyinfo",
        "Check my info",
        &[("name16", "Uni", false), ("name17", "Password", true)],
    ));
    layout("Library", &body)
}

pub fn another() -> String {
    layout(
        "About",
        "<p>This site lets librarians lend and take back readings, and lets readers check what they have borrowed.</p>",
    )
}

pub fn books(borrowed: &[BorrowedBook], available: &[AvailableBook]) -> String {
    let mut body = String::from("<h2>Borrowed</h2>\n");
    body.push_str(&table(&["Id", "Author", "Reader", "Since"], borrowed, |b| {
        vec![b.id.clone(), b.author.clone(), b.reader.clone(), b.borrowed_on.to_string()]
    }));
    body.push_str("\n<h2>Available</h2>\n");
    body.push_str(&table(&["Id", "Author", "Status"], available, |b| {
        vec![b.id.clone(), b.author.clone(), "available".to_string()]
    }));
    layout("Readings", &body)
}

pub fn suppliers(suppliers: &[Supplier]) -> String {
    let body = table(&["Name", "Address"], suppliers, |s| vec![s.name.clone(), s.addr.clone()]);
    layout("Suppliers", &body)
}

pub fn supplier_search(rows: &[SupplierReading]) -> String {
    let body = table(&["Id", "Author", "Supplier"], rows, |r| {
        vec![r.id.clone(), r.author.clone(), r.supplier.clone()]
    });
    layout("Readings by supplier", &body)
}

pub fn book_search(rows: &[PublishedBook]) -> String {
    let body = table(&["Id", "Name", "Publisher"], rows, |r| {
        vec![r.id.clone(), r.title.clone(), r.publisher.clone()]
    });
    layout("Books", &body)
}

pub fn paper_search(rows: &[AcceptedPaper]) -> String {
    let body = table(&["Id", "Title", "Conference", "Address"], rows, |r| {
        vec![r.id.clone(), r.title.clone(), r.conference.clone(), r.conference_addr.clone()]
    });
    layout("Papers", &body)
}

pub fn my_info(info: &ReaderInfo) -> String {
    let profile = &info.profile;
    let mut body = table(&["Uni", "Name", "Department"], std::slice::from_ref(profile), |p| {
        vec![p.uni.clone(), p.name.clone(), p.dept.clone()]
    });
    body.push_str("\n<h2>Borrowed readings</h2>\n");
    if info.borrowed.is_empty() {
        body.push_str("<p>Nothing borrowed.</p>");
    } else {
        body.push_str(&list(&info.borrowed));
    }
    layout("My info", &body)
}

pub fn rejection(rejection: Rejection) -> String {
    layout(rejection.title(), &format!("<p>{}</p>", escape(rejection.message())))
}

pub fn unauthorized() -> String {
    layout("Unauthorized", "<p>You are not allowed to access this page.</p>")
}

pub fn server_error() -> String {
    layout("Internal Server Error", "<p>The request could not be completed.</p>")
}
