use crate::faq::search::RELATED_LIMIT;
use crate::faq::{Category, CategoryFilter, FaqId, FaqRecord, FaqSearchIndex, QueryDebouncer};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Search,
    Help,
}

/// Interactive browser state.
///
/// Keystrokes land in the debouncer's draft immediately; the result list
/// only refreshes when the draft commits (quiet period elapsed, or Enter).
pub struct App {
    index: FaqSearchIndex,
    debouncer: QueryDebouncer,
    /// Ids of the records matching the committed query and category.
    pub results: Vec<FaqId>,
    pub selected: usize,
    /// None = all categories; Some(i) indexes into the dataset's categories.
    category: Option<usize>,
    pub mode: Mode,
    pub status_message: String,
}

impl App {
    pub fn new(index: FaqSearchIndex) -> Self {
        let mut app = Self {
            status_message: format!("{} questions loaded", index.len()),
            index,
            debouncer: QueryDebouncer::default(),
            results: Vec::new(),
            selected: 0,
            category: None,
            mode: Mode::Search,
        };
        app.refresh();
        app
    }

    pub fn index(&self) -> &FaqSearchIndex {
        &self.index
    }

    /// The query as typed so far (shown in the input box).
    pub fn query_draft(&self) -> &str {
        self.debouncer.draft()
    }

    /// The query currently driving the result list.
    pub fn committed_query(&self) -> &str {
        self.debouncer.committed()
    }

    /// Whether keystrokes are waiting for the quiet period.
    pub fn search_pending(&self) -> bool {
        self.debouncer.has_pending()
    }

    pub fn push_char(&mut self, c: char) {
        let mut draft = self.debouncer.draft().to_string();
        draft.push(c);
        self.debouncer.set_draft(&draft);
    }

    pub fn pop_char(&mut self) {
        let mut draft = self.debouncer.draft().to_string();
        draft.pop();
        self.debouncer.set_draft(&draft);
    }

    pub fn clear_query(&mut self) {
        self.debouncer.set_draft("");
        self.debouncer.flush();
        self.refresh();
    }

    /// Commit the draft immediately (Enter).
    pub fn commit_now(&mut self) {
        self.debouncer.flush();
        self.refresh();
    }

    /// Poll the debouncer; refreshes the result list when a draft commits.
    /// Call once per event-loop iteration.
    pub fn tick(&mut self) {
        if self.debouncer.poll_commit().is_some() {
            self.refresh();
        }
    }

    /// The active category filter.
    pub fn category_filter(&self) -> CategoryFilter {
        match self.category.and_then(|i| self.index.categories().get(i)) {
            Some(cat) => CategoryFilter::One(*cat),
            None => CategoryFilter::All,
        }
    }

    /// Name of the active category for display ("all" for the wildcard).
    pub fn category_name(&self) -> &'static str {
        match self.category.and_then(|i| self.index.categories().get(i)) {
            Some(cat) => cat.name(),
            None => "all",
        }
    }

    /// Categories in dataset order (for the tab row).
    pub fn categories(&self) -> &[Category] {
        self.index.categories()
    }

    /// Cycle all -> first category -> ... -> last category -> all.
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None if self.index.categories().is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.index.categories().len() => Some(i + 1),
            Some(_) => None,
        };
        self.refresh();
    }

    fn refresh(&mut self) {
        let filter = self.category_filter();
        self.results = self
            .index
            .filter(self.debouncer.committed(), &filter)
            .into_iter()
            .map(|r| r.id)
            .collect();

        if self.selected >= self.results.len() {
            self.selected = self.results.len().saturating_sub(1);
        }

        self.status_message = format!(
            "{} of {} questions ({})",
            self.results.len(),
            self.index.len(),
            self.category_name()
        );
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() && self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.results.len().saturating_sub(1);
    }

    pub fn selected_record(&self) -> Option<&FaqRecord> {
        self.results
            .get(self.selected)
            .and_then(|&id| self.index.get(id))
    }

    /// Related questions for the answer pane.
    pub fn related_to_selected(&self) -> Vec<&FaqRecord> {
        match self.selected_record() {
            Some(record) => self.index.related(record.id, RELATED_LIMIT),
            None => Vec::new(),
        }
    }

    pub fn show_help(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn hide_help(&mut self) {
        self.mode = Mode::Search;
    }
}
