use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hexdemo_model::{HexColor, HexItem};
use hexdemo_store::{ArrayOp, HexStore, ListOp, Outcome, Slot};

use crate::parse::HELP;
use crate::session::{Reply, Session};

/// Both stores followed by the panel inputs and status line.
pub fn render_session(session: &Session) -> String {
    let array = session.array();
    let list = session.list();
    let mut out = String::new();
    out.push_str(&format!(
        "Array (count {} / capacity {})\n",
        array.count(),
        array.capacity()
    ));
    out.push_str(&store_table(array, Some(array.count())).to_string());
    out.push('\n');
    out.push_str(&format!("List (count {})\n", list.count()));
    if list.entries().is_empty() {
        out.push_str("(empty)\n");
    } else {
        out.push_str(&store_table(list, None).to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "spinner: {}  selected: {}\n",
        session.spinner(),
        slot_text(session.selected())
    ));
    if let Some(error) = session.last_error() {
        out.push_str(&format!("error: {error}\n"));
    }
    out
}

/// One-line description of a reply; `None` when the reply is a full render.
pub fn reply_text(reply: &Reply) -> Option<String> {
    match reply {
        Reply::Ran { panel, op, outcome } => Some(match outcome {
            Outcome::Done | Outcome::Displaced(None) => format!("{} {op}: ok", panel.as_str()),
            Outcome::Displaced(slot) => {
                format!("{} {op}: ok, displaced {}", panel.as_str(), slot_text(*slot))
            }
            other => format!("{} {op} returned {other}", panel.as_str()),
        }),
        Reply::Selected(slot) => Some(format!("selected: {}", slot_text(*slot))),
        Reply::Spinner(value) => Some(format!("spinner: {value}")),
        Reply::Help => Some(HELP.to_string()),
        Reply::Show | Reply::Ops | Reply::Quit => None,
    }
}

pub fn slot_text(slot: Slot) -> String {
    match slot {
        Some(item) => describe_item(&item),
        None => "∅".to_string(),
    }
}

fn describe_item(item: &HexItem) -> String {
    let color = item.color();
    match color.name() {
        Some(name) => format!("{} ({name})", item.letter()),
        None => format!("{} ({color})", item.letter()),
    }
}

/// Table of slots; rows at or past `counted` are marked as outside the count.
fn store_table(store: &dyn HexStore, counted: Option<usize>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Index"), header_cell("Letter"), header_cell("Color")];
    if counted.is_some() {
        header.push(header_cell("Counted"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for (index, slot) in store.entries().iter().enumerate() {
        let mut row = vec![Cell::new(index)];
        match slot {
            Some(item) => {
                row.push(letter_cell(item));
                row.push(Cell::new(item.color()).fg(tint(item.color())));
            }
            None => {
                row.push(dim_cell("∅"));
                row.push(dim_cell("-"));
            }
        }
        if let Some(count) = counted {
            row.push(if index < count {
                Cell::new("✓").fg(Color::Green)
            } else {
                dim_cell("-")
            });
        }
        table.add_row(row);
    }
    table
}

/// Operation reference for both stores.
pub fn ops_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Store"),
        header_cell("Operation"),
        header_cell("Uses N"),
        header_cell("Description"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(110);
    align_column(&mut table, 2, CellAlignment::Center);
    for op in ArrayOp::ALL {
        table.add_row(vec![
            store_cell("array"),
            Cell::new(op.name()),
            flag_cell(op.uses_index()),
            Cell::new(op.description()),
        ]);
    }
    for op in ListOp::ALL {
        table.add_row(vec![
            store_cell("list"),
            Cell::new(op.name()),
            flag_cell(op.uses_index()),
            Cell::new(op.description()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn tint(color: HexColor) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn letter_cell(item: &HexItem) -> Cell {
    Cell::new(item.letter())
        .fg(tint(item.color()))
        .add_attribute(Attribute::Bold)
}

fn store_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
