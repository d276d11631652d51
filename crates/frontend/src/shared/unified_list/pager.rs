//! Windowed pagination: `<< < 1 2 3 4 5 > >>`

/// Numbered controls shown at once
pub const PAGE_WINDOW: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerControlKind {
    First,
    Previous,
    Page,
    Next,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerControl {
    pub kind: PagerControlKind,
    pub label: String,
    /// Page to load on click; `None` for disabled controls
    pub target: Option<u32>,
    pub active: bool,
}

impl PagerControl {
    fn nav(kind: PagerControlKind, label: &str, target: u32, disabled: bool) -> Self {
        Self {
            kind,
            label: label.to_string(),
            target: (!disabled).then_some(target),
            active: false,
        }
    }

    pub fn disabled(&self) -> bool {
        self.target.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerModel {
    pub page: u32,
    pub total_pages: u32,
    pub controls: Vec<PagerControl>,
}

impl PagerModel {
    /// `None` when there is nothing to page through.
    ///
    /// A page past the end is shown as the last page.
    pub fn build(page: u32, total_pages: u32) -> Option<Self> {
        if total_pages == 0 {
            return None;
        }

        let last = total_pages - 1;
        let page = page.min(last);
        let at_start = page == 0;
        let at_end = page == last;

        let start = (page / PAGE_WINDOW) * PAGE_WINDOW;
        let end = start.saturating_add(PAGE_WINDOW).min(total_pages);

        let mut controls = Vec::with_capacity(PAGE_WINDOW as usize + 4);
        controls.push(PagerControl::nav(PagerControlKind::First, "<<", 0, at_start));
        controls.push(PagerControl::nav(
            PagerControlKind::Previous,
            "<",
            page.saturating_sub(1),
            at_start,
        ));
        controls.extend((start..end).map(|i| PagerControl {
            kind: PagerControlKind::Page,
            label: (i + 1).to_string(),
            target: Some(i),
            active: i == page,
        }));
        controls.push(PagerControl::nav(
            PagerControlKind::Next,
            ">",
            page.saturating_add(1),
            at_end,
        ));
        controls.push(PagerControl::nav(PagerControlKind::Last, ">>", last, at_end));

        Some(Self {
            page,
            total_pages,
            controls,
        })
    }

    pub fn numbered(&self) -> impl Iterator<Item = &PagerControl> {
        self.controls
            .iter()
            .filter(|c| c.kind == PagerControlKind::Page)
    }

    pub fn control(&self, kind: PagerControlKind) -> Option<&PagerControl> {
        self.controls.iter().find(|c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(model: &PagerModel) -> Vec<String> {
        model.numbered().map(|c| c.label.clone()).collect()
    }

    #[test]
    fn test_empty_total() {
        assert!(PagerModel::build(0, 0).is_none());
    }

    #[test]
    fn test_first_page_of_three() {
        let model = PagerModel::build(0, 3).unwrap();
        assert_eq!(labels(&model), vec!["1", "2", "3"]);
        assert!(model.numbered().next().unwrap().active);
        assert!(model.control(PagerControlKind::First).unwrap().disabled());
        assert!(model.control(PagerControlKind::Previous).unwrap().disabled());
        assert_eq!(model.control(PagerControlKind::Next).unwrap().target, Some(1));
        assert_eq!(model.control(PagerControlKind::Last).unwrap().target, Some(2));
    }

    #[test]
    fn test_window_of_five() {
        let model = PagerModel::build(7, 12).unwrap();
        assert_eq!(labels(&model), vec!["6", "7", "8", "9", "10"]);
        assert_eq!(model.control(PagerControlKind::Previous).unwrap().target, Some(6));
        assert_eq!(model.control(PagerControlKind::First).unwrap().target, Some(0));

        // last window is cut at total_pages
        let model = PagerModel::build(10, 12).unwrap();
        assert_eq!(labels(&model), vec!["11", "12"]);
    }

    #[test]
    fn test_last_page_disables_forward() {
        let model = PagerModel::build(2, 3).unwrap();
        assert!(model.control(PagerControlKind::Next).unwrap().disabled());
        assert!(model.control(PagerControlKind::Last).unwrap().disabled());
        assert!(!model.control(PagerControlKind::First).unwrap().disabled());
    }

    #[test]
    fn test_single_page() {
        let model = PagerModel::build(0, 1).unwrap();
        assert_eq!(labels(&model), vec!["1"]);
        assert!(model.controls.iter().filter(|c| c.kind != PagerControlKind::Page).all(|c| c.disabled()));
    }

    #[test]
    fn test_page_past_end_shows_last_page() {
        let model = PagerModel::build(7, 3).unwrap();
        assert_eq!(model.page, 2);
        let active: Vec<_> = model.numbered().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].target, Some(2));
        assert!(model.control(PagerControlKind::Next).unwrap().disabled());
        assert_eq!(model.control(PagerControlKind::Previous).unwrap().target, Some(1));
    }

    #[test]
    fn test_huge_page_numbers() {
        let model = PagerModel::build(u32::MAX, u32::MAX).unwrap();
        let last = u32::MAX - 1;
        assert_eq!(model.page, last);
        assert!(model.numbered().any(|c| c.active && c.target == Some(last)));
        assert!(model.control(PagerControlKind::Last).unwrap().disabled());

        let model = PagerModel::build(u32::MAX - 3, u32::MAX).unwrap();
        assert_eq!(model.control(PagerControlKind::Next).unwrap().target, Some(u32::MAX - 2));
    }

    #[test]
    fn test_every_page_has_one_active_control_in_window() {
        for total in 1..=23u32 {
            for page in 0..total {
                let model = PagerModel::build(page, total).unwrap();
                let numbered: Vec<_> = model.numbered().collect();
                assert!(!numbered.is_empty() && numbered.len() <= PAGE_WINDOW as usize);

                let active: Vec<_> = numbered.iter().filter(|c| c.active).collect();
                assert_eq!(active.len(), 1);
                assert_eq!(active[0].target, Some(page));

                let back_disabled = model.control(PagerControlKind::First).unwrap().disabled();
                assert_eq!(back_disabled, page == 0);
                assert_eq!(
                    model.control(PagerControlKind::Previous).unwrap().disabled(),
                    page == 0
                );
                let forward_disabled = model.control(PagerControlKind::Next).unwrap().disabled();
                assert_eq!(forward_disabled, page == total - 1);
                assert_eq!(
                    model.control(PagerControlKind::Last).unwrap().disabled(),
                    page == total - 1
                );
            }
        }
    }
}
