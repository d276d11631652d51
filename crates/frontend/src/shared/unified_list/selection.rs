//! Header checkbox <-> row checkboxes

/// Header shows checked only when there are rows and every one is checked
pub fn header_checked(row_states: &[bool]) -> bool {
    !row_states.is_empty() && row_states.iter().all(|checked| *checked)
}

/// Row checkbox values -> ids for the delete request. Non-numeric values are skipped.
pub fn parse_ids(values: &[String]) -> Vec<i64> {
    values
        .iter()
        .filter_map(|v| match v.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                log::warn!("skipping non-numeric row id {:?}", v);
                None
            }
        })
        .collect()
}
