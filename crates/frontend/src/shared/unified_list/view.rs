use super::error::ListError;
use super::pager::PagerModel;
use super::table::TableModel;

/// Everything the list controller needs from the page.
///
/// The browser implementation is [`super::dom_view::DomListView`]; the controller
/// itself never touches the DOM.
pub trait ListView {
    /// Replace the table body
    fn render_rows(&self, table: TableModel);

    /// Replace the pagination controls; `None` clears them
    fn render_pager(&self, pager: Option<PagerModel>);

    fn show_modal(&self, selector: &str);

    fn hide_modal(&self, selector: &str);

    /// Current value of an input, `None` when the element is missing
    fn input_value(&self, selector: &str) -> Option<String>;

    fn set_input_value(&self, selector: &str, value: &str);

    /// Values of the checked row checkboxes, in table order
    fn checked_row_values(&self) -> Vec<String>;

    /// Checked state of every row checkbox, in table order
    fn row_check_states(&self) -> Vec<bool>;

    fn set_row_checks(&self, checked: bool);

    fn set_header_check(&self, checked: bool);

    fn alert(&self, message: &str);

    /// `false` when the user declines
    fn confirm(&self, message: &str) -> bool;

    fn redirect(&self, path: &str);

    /// Hand a downloaded file to the user
    fn save_file(&self, bytes: &[u8], filename: &str) -> Result<(), ListError>;
}
