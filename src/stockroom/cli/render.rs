use colored::Colorize;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::model::Item;
use stockroom::view::Page;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 15;
const SUPPLIER_WIDTH: usize = 12;
const QTY_WIDTH: usize = 8;
const RULE_WIDTH: usize = 70;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

pub fn render_items(items: &[Item]) -> String {
    let mut out = header();
    for item in items {
        out.push_str(&row(item));
        out.push('\n');
    }
    out
}

pub fn render_page(page: &Page) -> String {
    if page.total == 0 {
        return "Inventory is empty.\n".to_string();
    }
    let mut out = render_items(&page.items);
    out.push_str(&format!(
        "\nPage {} / {}  ({} item(s))\n",
        page.number, page.pages, page.total
    ));
    out
}

pub fn render_item(item: &Item) -> String {
    format!(
        "{}\nName:     {}\nCategory: {}\nSupplier: {}\nQuantity: {}\nPrice:    {:.2}\n",
        format!("Item {}", item.id).bold(),
        item.name,
        item.category,
        item.supplier,
        item.quantity,
        item.price
    )
}

pub fn render_config(values: &[(String, String)]) -> String {
    values
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn header() -> String {
    let mut out = String::new();
    out.push_str(&pad("ID", ID_WIDTH));
    out.push_str(&pad("Name", NAME_WIDTH));
    out.push_str(&pad("Category", CATEGORY_WIDTH));
    out.push_str(&pad("Supplier", SUPPLIER_WIDTH));
    out.push_str(&pad("Qty", QTY_WIDTH));
    out.push_str("Price\n");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out
}

fn row(item: &Item) -> String {
    let mut out = String::new();
    out.push_str(&pad(&item.id.to_string(), ID_WIDTH));
    out.push_str(&cell(&item.name, NAME_WIDTH));
    out.push_str(&cell(&item.category, CATEGORY_WIDTH));
    out.push_str(&cell(&item.supplier, SUPPLIER_WIDTH));
    out.push_str(&pad(&item.quantity.to_string(), QTY_WIDTH));
    out.push_str(&format!("{:.2}", item.price));
    out
}

/// Single-line, truncated to leave one column of space, then padded.
fn cell(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    pad(&truncate_to_width(&flat, width.saturating_sub(1)), width)
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
