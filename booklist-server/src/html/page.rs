//! HTML generation for the BookList page

use super::Notice;
use booklist_core::{BookCard, SessionView};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};

type XmlResult = Result<(), quick_xml::Error>;

const STYLE: &str = "
body { font-family: sans-serif; margin: 0; background: #f7f4ef; color: #2b2b2b; }
.App { max-width: 1100px; margin: 0 auto; padding: 1rem; }
header { text-align: center; }
.notice { padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
.notice-info { background: #e3f4e1; }
.notice-error { background: #fbe2e2; }
.search-form, .add-book-form { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
.books-container { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.book-card { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }
.book-card img { max-width: 100%; height: 150px; object-fit: contain; }
.status-button.read { background: #4caf50; color: #fff; }
.status-button.want-to-read { background: #ffb74d; }
";

/// Render the whole page for `view`
///
/// `query` refills the search box; `notice` adds a banner above the content.
pub fn render_page(
    view: &SessionView,
    query: &str,
    notice: Option<&Notice>,
) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    start(&mut writer, "html", &[("lang", "en")])?;

    start(&mut writer, "head", &[])?;
    empty(&mut writer, "meta", &[("charset", "utf-8")])?;
    text_element(&mut writer, "title", &[], "My BookList")?;
    start(&mut writer, "style", &[])?;
    writer.write_event(Event::Text(BytesText::from_escaped(STYLE)))?;
    end(&mut writer, "style")?;
    end(&mut writer, "head")?;

    start(&mut writer, "body", &[])?;
    start(&mut writer, "div", &[("class", "App")])?;

    start(&mut writer, "header", &[])?;
    text_element(&mut writer, "h1", &[], "📖 My BookList 📖")?;
    text_element(&mut writer, "p", &[], "Welcome to my reading collection!")?;
    end(&mut writer, "header")?;

    if let Some(notice) = notice {
        text_element(
            &mut writer,
            "div",
            &[("class", notice.css_class()), ("role", "alert")],
            &notice.text,
        )?;
    }

    start(&mut writer, "main", &[])?;
    write_search_section(&mut writer, view, query)?;
    write_my_books_section(&mut writer, view)?;
    write_add_book_section(&mut writer, view)?;
    end(&mut writer, "main")?;

    end(&mut writer, "div")?;
    end(&mut writer, "body")?;
    end(&mut writer, "html")?;

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result).unwrap_or_default())
}

fn write_search_section<W: Write>(
    writer: &mut Writer<W>,
    view: &SessionView,
    query: &str,
) -> XmlResult {
    start(writer, "section", &[])?;
    text_element(writer, "h2", &[], "Books from API")?;

    start(
        writer,
        "form",
        &[("method", "post"), ("action", "/search"), ("class", "search-form")],
    )?;
    empty(
        writer,
        "input",
        &[
            ("type", "text"),
            ("name", "query"),
            ("placeholder", "Search for books..."),
            ("value", query),
            ("class", "search-input"),
        ],
    )?;
    let mut button = vec![("type", "submit"), ("class", "search-button")];
    if view.busy {
        button.push(("disabled", "disabled"));
    }
    text_element(writer, "button", &button, view.search_label())?;
    end(writer, "form")?;

    start(writer, "div", &[("class", "books-container")])?;
    for card in &view.results {
        write_card(writer, card, true)?;
    }
    end(writer, "div")?;

    end(writer, "section")
}

fn write_my_books_section<W: Write>(writer: &mut Writer<W>, view: &SessionView) -> XmlResult {
    start(writer, "section", &[])?;
    text_element(writer, "h2", &[], "My Books")?;
    start(writer, "div", &[("class", "books-container")])?;
    for card in &view.my_books {
        write_card(writer, card, false)?;
    }
    end(writer, "div")?;
    end(writer, "section")
}

fn write_add_book_section<W: Write>(writer: &mut Writer<W>, view: &SessionView) -> XmlResult {
    let draft = &view.draft;

    start(writer, "section", &[])?;
    text_element(writer, "h2", &[], "Add New Book")?;
    start(
        writer,
        "form",
        &[
            ("method", "post"),
            ("action", "/my-books/new"),
            ("class", "add-book-form"),
        ],
    )?;

    for (name, placeholder, value) in [
        ("title", "Book Title", draft.title.as_str()),
        ("author", "Author Name", draft.author.as_str()),
        ("year", "Year (optional)", draft.year.as_str()),
    ] {
        empty(
            writer,
            "input",
            &[
                ("type", "text"),
                ("name", name),
                ("placeholder", placeholder),
                ("class", "form-input"),
                ("value", value),
            ],
        )?;
    }
    text_element(
        writer,
        "textarea",
        &[
            ("name", "description"),
            ("placeholder", "Description (optional)"),
            ("class", "form-input"),
            ("rows", "3"),
        ],
        &draft.description,
    )?;
    text_element(
        writer,
        "button",
        &[("type", "submit"), ("class", "form-button")],
        "Add Book",
    )?;

    end(writer, "form")?;
    end(writer, "section")
}

/// Write one book card; search results also get the add-to-list action
fn write_card<W: Write>(writer: &mut Writer<W>, card: &BookCard, with_add: bool) -> XmlResult {
    start(writer, "div", &[("class", "book-card")])?;
    empty(
        writer,
        "img",
        &[("src", card.cover_image.as_str()), ("alt", card.title.as_str())],
    )?;
    text_element(writer, "h3", &[], &card.title)?;
    labeled_paragraph(writer, &[], "Author:", &card.author)?;
    labeled_paragraph(writer, &[], "Year:", &card.year)?;
    labeled_paragraph(
        writer,
        &[("class", "description")],
        "Description:",
        &card.description,
    )?;

    let toggle_action = format!("/status/{}/toggle", urlencoding::encode(&card.id));
    let status_class = format!("status-button {}", card.status_class);
    start(
        writer,
        "form",
        &[("method", "post"), ("action", toggle_action.as_str())],
    )?;
    text_element(
        writer,
        "button",
        &[("type", "submit"), ("class", status_class.as_str())],
        card.status_label,
    )?;
    end(writer, "form")?;

    if with_add {
        start(writer, "form", &[("method", "post"), ("action", "/my-books")])?;
        empty(
            writer,
            "input",
            &[("type", "hidden"), ("name", "id"), ("value", card.id.as_str())],
        )?;
        text_element(
            writer,
            "button",
            &[("type", "submit"), ("class", "add-to-list-button")],
            "➕ Add to My List",
        )?;
        end(writer, "form")?;
    }

    end(writer, "div")
}

/// `<p><strong>{label}</strong> {value}</p>`
fn labeled_paragraph<W: Write>(
    writer: &mut Writer<W>,
    attrs: &[(&str, &str)],
    label: &str,
    value: &str,
) -> XmlResult {
    start(writer, "p", attrs)?;
    text_element(writer, "strong", &[], label)?;
    writer.write_event(Event::Text(BytesText::new(&format!(" {}", value))))?;
    end(writer, "p")
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> XmlResult {
    let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

fn empty<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> XmlResult {
    let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> XmlResult {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write an element holding escaped text
fn text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    content: &str,
) -> XmlResult {
    start(writer, name, attrs)?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    end(writer, name)
}
