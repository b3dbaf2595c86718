use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Inventory;
use crate::view::{paginate, sort_items, SortField};

pub fn run(
    store: &Inventory,
    sort: SortField,
    page_size: usize,
    page: usize,
) -> Result<CmdResult> {
    let mut items = store.list_all();
    sort_items(&mut items, sort);
    Ok(CmdResult::default().with_page(paginate(items, page_size, page)))
}
