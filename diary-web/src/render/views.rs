//! HTML pages.
//!
//! Every piece of user text goes through [`escape`] before it is written.
//! Writing into a `String` only fails when a `Display` argument fails, which
//! is how a bad `date_format` surfaces as a template error instead of a panic.
use super::{Notice, escape};
use diary_core::Entry;
use std::fmt::{self, Display, Write};

const TITLE: &str = "My diary";

fn page_head(out: &mut String, title: &str) -> fmt::Result {
    write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
"#,
        title = escape(title)
    )
}

fn page_tail(out: &mut String) -> fmt::Result {
    out.write_str("</main>\n</body>\n</html>\n")
}

fn edit_href(entry: &Entry) -> String {
    format!(
        "/edit?date={}&content={}",
        urlencoding::encode(&entry.date),
        urlencoding::encode(&entry.content)
    )
}

/// The list of entries, newest first, with the add form on top.
///
/// `today` pre-fills the date field of the add form.
pub fn index_page(
    entries: &[Entry],
    notice: Option<Notice>,
    today: impl Display,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    page_head(&mut out, TITLE)?;
    writeln!(out, "<h1>{}</h1>", TITLE)?;

    if let Some(notice) = notice {
        writeln!(
            out,
            r#"<p class="notice notice-{}">{}</p>"#,
            notice.as_ref(),
            notice.message()
        )?;
    }

    let mut today_str = String::new();
    write!(today_str, "{today}")?;
    write!(
        out,
        r#"<form class="add" method="post" action="/add">
<input type="text" name="date" value="{date}" placeholder="Date" required>
<textarea name="content" rows="4" placeholder="What happened today?" required></textarea>
<button type="submit">Add</button>
</form>
"#,
        date = escape(&today_str)
    )?;

    if entries.is_empty() {
        out.write_str("<p class=\"empty\">No entries yet.</p>\n")?;
    } else {
        out.write_str("<ul class=\"entries\">\n")?;
        for entry in entries {
            let date = escape(&entry.date);
            let content = escape(&entry.content);
            write!(
                out,
                r#"<li class="entry">
<div class="date">{date}</div>
<div class="content">{content}</div>
<div class="actions">
<a href="{href}">Edit</a>
<form method="post" action="/delete">
<input type="hidden" name="date" value="{date}">
<input type="hidden" name="content" value="{content}">
<button type="submit">Delete</button>
</form>
</div>
</li>
"#,
                href = escape(&edit_href(entry)),
            )?;
        }
        out.write_str("</ul>\n")?;
    }

    page_tail(&mut out)?;
    Ok(out)
}

/// The edit form, pre-filled with `entry` exactly as given.
pub fn edit_page(entry: &Entry) -> Result<String, fmt::Error> {
    let mut out = String::new();
    page_head(&mut out, "Edit entry")?;
    let date = escape(&entry.date);
    let content = escape(&entry.content);
    write!(
        out,
        r#"<h1>Edit entry</h1>
<form class="edit" method="post" action="/edit">
<input type="hidden" name="originalDate" value="{date}">
<input type="hidden" name="originalContent" value="{content}">
<input type="text" name="date" value="{date}" required>
<textarea name="content" rows="6" required>
{content}</textarea>
<button type="submit">Save</button>
<a href="/">Cancel</a>
</form>
"#
    )?;
    page_tail(&mut out)?;
    Ok(out)
}
