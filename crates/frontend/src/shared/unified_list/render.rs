//! Leptos views of the table body and the pagination bar.
//!
//! No handlers here: clicks are picked up by the delegated listeners in
//! `bindings.rs` through the `data-id` / `data-page` attributes.

use leptos::prelude::*;

use super::pager::{PagerControl, PagerModel};
use super::table::{CellKind, TableCell, TableModel, TableRow};

pub const DETAIL_LINK_CLASS: &str = "detail-link";

pub fn table_body_view(table: TableModel) -> AnyView {
    match table {
        TableModel::Empty { colspan, message } => view! {
            <tr>
                <td colspan=colspan.to_string() class="no-data">{message}</td>
            </tr>
        }
        .into_any(),
        TableModel::Rows(rows) => rows.into_iter().map(row_view).collect_view().into_any(),
    }
}

fn row_view(row: TableRow) -> impl IntoView {
    let TableRow { id, cells } = row;
    let cells = cells
        .into_iter()
        .map(|cell| cell_view(&id, cell))
        .collect_view();

    view! {
        <tr>
            <td>
                <input type="checkbox" class="table__checkbox" value=id />
            </td>
            {cells}
        </tr>
    }
}

fn cell_view(id: &str, cell: TableCell) -> AnyView {
    match cell.kind {
        CellKind::Text => view! { <td>{cell.text}</td> }.into_any(),
        CellKind::DetailLink => {
            let id = id.to_string();
            view! {
                <td>
                    <a href="#" class=DETAIL_LINK_CLASS data-id=id>{cell.text}</a>
                </td>
            }
            .into_any()
        }
    }
}

/// `<< < 1 2 3 4 5 > >>`, disabled controls carry no `data-page`
pub fn pager_view(pager: Option<PagerModel>) -> AnyView {
    let Some(pager) = pager else {
        return view! { <></> }.into_any();
    };

    pager
        .controls
        .into_iter()
        .map(|control| {
            let disabled = control.disabled();
            let target = page_attr(&control);
            view! {
                <button
                    type="button"
                    class="pagination-btn"
                    class:active=control.active
                    disabled=disabled
                    data-page=target
                >
                    {control.label}
                </button>
            }
        })
        .collect_view()
        .into_any()
}

/// `data-page` value of a pager control; absent on disabled controls
fn page_attr(control: &PagerControl) -> Option<String> {
    control.target.map(|page| page.to_string())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::shared::unified_list::config::ColumnSpec;
    use contracts::shared::unified_list::Record;
    use serde_json::json;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn container(tag: &str) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let el = document.create_element(tag).unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el.dyn_into::<HtmlElement>().unwrap()
    }

    fn all(parent: &Element, selector: &str) -> Vec<Element> {
        let nodes = parent.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .collect()
    }

    fn columns() -> Vec<ColumnSpec> {
        serde_json::from_value(json!([
            {"key": "title", "isDetailLink": true},
            {"key": "owner"}
        ]))
        .unwrap()
    }

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[wasm_bindgen_test]
    fn empty_table_renders_placeholder_row() {
        let tbody = container("tbody");
        let model = TableModel::build(&[], &columns(), "No data");
        let _handle = leptos::mount::mount_to(tbody.clone(), move || table_body_view(model));

        let rows = all(&tbody, "tr");
        assert_eq!(rows.len(), 1);
        let cell = tbody.query_selector("td.no-data").unwrap().unwrap();
        assert_eq!(cell.get_attribute("colspan").as_deref(), Some("3"));
        assert_eq!(cell.text_content().as_deref(), Some("No data"));
        assert!(all(&tbody, "input").is_empty());
    }

    #[wasm_bindgen_test]
    fn each_row_has_one_checkbox_with_its_id() {
        let tbody = container("tbody");
        let records = vec![
            record(json!({"id": 1, "title": "A", "owner": "kim"})),
            record(json!({"id": 2, "title": "B", "owner": "lee"})),
        ];
        let model = TableModel::build(&records, &columns(), "No data");
        let _handle = leptos::mount::mount_to(tbody.clone(), move || table_body_view(model));

        let rows = all(&tbody, "tr");
        assert_eq!(rows.len(), 2);
        for (row, id) in rows.iter().zip(["1", "2"]) {
            let boxes = all(row, "input.table__checkbox");
            assert_eq!(boxes.len(), 1);
            assert_eq!(boxes[0].get_attribute("value").as_deref(), Some(id));

            let link = row.query_selector("a.detail-link").unwrap().unwrap();
            assert_eq!(link.get_attribute("data-id").as_deref(), Some(id));
            assert_eq!(all(row, "td").len(), 3);
        }
    }

    #[wasm_bindgen_test]
    fn disabled_pager_buttons_have_no_page() {
        let nav = container("div");
        let model = PagerModel::build(0, 3);
        let _handle = leptos::mount::mount_to(nav.clone(), move || pager_view(model));

        let buttons = all(&nav, "button.pagination-btn");
        assert_eq!(buttons.len(), 7);
        for button in &buttons {
            assert_eq!(
                button.has_attribute("disabled"),
                !button.has_attribute("data-page"),
            );
        }
        let active = all(&nav, "button.pagination-btn.active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].get_attribute("data-page").as_deref(), Some("0"));
        assert!(buttons[0].has_attribute("disabled"));
        assert!(buttons[1].has_attribute("disabled"));
    }
}
