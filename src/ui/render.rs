//! Server-side HTML for the transaction table.

use crate::models::transaction::TransactionResponse;
use crate::ui::highlight::{escape_html, highlight_html};
use crate::ui::view::{TableView, MONTHS};

const STYLE: &str = r#"
body { font-family: sans-serif; background: #edf6f6; margin: 2rem; }
.Table-box { max-width: 1100px; margin: 0 auto; }
.filter-elements { display: flex; justify-content: space-between; margin-bottom: 1rem; }
table { width: 100%; border-collapse: collapse; background: #f8df8c; }
th, td { border: 1px solid #333; padding: 6px; text-align: left; }
.highlight { background: yellow; font-weight: bold; }
.custom-pagination { display: flex; justify-content: space-between; align-items: center; margin-top: 1rem; }
.custom-pagination a.disabled { pointer-events: none; color: #999; }
.stat-box { display: flex; gap: 1rem; }
.stat-item { background: #f8df8c; padding: 1rem; border-radius: 8px; }
"#;

/// Link to the same page with the current filters, `page` 0-based.
fn page_href(view: &TableView, page: u64) -> String {
    format!(
        "/?search={}&month={}&page={}",
        urlencoding::encode(view.search_text()),
        urlencoding::encode(view.month()),
        page.saturating_add(1)
    )
}

fn render_row(row: &TransactionResponse, search: &str) -> String {
    format!(
        r#"<tr>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td><img src="{}" alt="{}" style="width: 50px"></td>
            <td>{}</td>
        </tr>"#,
        row.id,
        highlight_html(&row.title, search),
        highlight_html(&row.price.to_string(), search),
        highlight_html(&row.description, search),
        escape_html(&row.category),
        if row.sold { "Yes" } else { "No" },
        escape_html(&row.image),
        escape_html(&row.title),
        row.date_of_sale.to_rfc3339(),
    )
}

fn render_filters(view: &TableView) -> String {
    let options: String = MONTHS
        .iter()
        .map(|month| {
            let selected = if month.eq_ignore_ascii_case(view.month()) { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, month, selected)
        })
        .collect();

    format!(
        r#"<form class="filter-elements" method="get" action="/">
            <input type="text" class="search-button" name="search" value="{}"
                placeholder="Search by Title, Description, or Price">
            <select class="month-dropdown" name="month" onchange="this.form.submit()">{}</select>
        </form>"#,
        escape_html(view.search_text()),
        options
    )
}

fn render_pagination(view: &TableView) -> String {
    let pagination = view.pagination();
    let link = |enabled: bool, page: u64, label: &str, class: &str| {
        if enabled {
            format!(r#"<a class="{}" href="{}">{}</a>"#, class, escape_html(&page_href(view, page)), label)
        } else {
            format!(r#"<a class="{} disabled">{}</a>"#, class, label)
        }
    };

    format!(
        r#"<div class="custom-pagination">
            <div class="left-page"><span>{}</span></div>
            <div class="middle-buttons">{} {}</div>
            <div class="right-info"><span>{}</span></div>
        </div>"#,
        pagination.page_label(),
        link(
            pagination.has_previous(),
            view.page().saturating_sub(1),
            "← Previous",
            "prev-button"
        ),
        link(pagination.has_next(), view.page().saturating_add(1), "Next →", "next-button"),
        pagination.items_label(),
    )
}

fn render_statistics(view: &TableView) -> String {
    let body = if view.is_loading_statistics() {
        "<p>Loading statistics...</p>".to_string()
    } else {
        let stats = view.statistics();
        format!(
            r#"<div class="stat-box">
                <div class="stat-item"><h3>Total Sale</h3><p>${}</p></div>
                <div class="stat-item"><h3>Total Sold Items</h3><p>{}</p></div>
                <div class="stat-item"><h3>Total Not Sold Items</h3><p>{}</p></div>
            </div>"#,
            stats.total_sale_amount, stats.total_sold_items, stats.total_not_sold_items
        )
    };

    format!(
        r#"<div class="statistics-container"><h2>Statistics - {}</h2>{}</div>"#,
        escape_html(view.month()),
        body
    )
}

pub fn render_table_page(view: &TableView) -> String {
    let rows: String = view
        .rows()
        .iter()
        .map(|row| render_row(row, view.search_text()))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Transaction Dashboard</title>
    <style>{}</style>
</head>
<body>
<div class="Table-box">
    <h2>Transaction List</h2>
    {}
    <table>
        <thead>
            <tr>
                <th>ID</th><th>Title</th><th>Price</th><th>Description</th>
                <th>Category</th><th>Sold</th><th>Image</th><th>Date of Sale</th>
            </tr>
        </thead>
        <tbody>{}</tbody>
    </table>
    {}
    {}
</div>
</body>
</html>"#,
        STYLE,
        render_filters(view),
        rows,
        render_pagination(view),
        render_statistics(view),
    )
}
