//! The executable test plan: categories own pages, pages own scripts.
//!
//! A plan is assembled bottom-up by the gatherer and never mutated once a
//! [`Category`] has been returned. Categories can only be built through
//! [`Category::assemble`], which prunes empty directories, hoists the index
//! page, and orders children and pages by weight.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Title used when neither frontmatter nor an index page supplies one.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Default script timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Weight an index page is given once its own weight moved to the category.
pub const INDEX_PAGE_WEIGHT: i64 = 1;

/// One executable shell test taken from a `:::code` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    /// Shell text, possibly spanning several lines.
    pub command: String,
    /// Seconds to pause after invocation before assertions.
    pub wait: u64,
    /// Maximum seconds the command may run.
    pub timeout: u64,
    /// Named setup/teardown routine to invoke around the command.
    pub hook: Option<String>,
    /// Maximum seconds the hook may run.
    pub hook_timeout: u64,
    /// A non-zero exit is the success condition.
    pub expect_error: bool,
    /// Source line of the directive's opening fence.
    pub line_number: usize,
}

impl Script {
    /// A script with default timings for `command` found at `line_number`.
    #[must_use]
    pub fn new(command: impl Into<String>, line_number: usize) -> Self {
        Self {
            command: command.into(),
            wait: 0,
            timeout: DEFAULT_TIMEOUT_SECS,
            hook: None,
            hook_timeout: 0,
            expect_error: false,
            line_number,
        }
    }
}

/// One Markdown document contributing tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub title: String,
    pub weight: i64,
    pub file: PathBuf,
    pub is_index: bool,
    pub scripts: Vec<Script>,
}

/// A directory-level grouping of pages and sub-categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    title: String,
    weight: i64,
    children: Vec<Category>,
    pages: Vec<Page>,
    run: bool,
    path: PathBuf,
}

/// Anything ordered by an integer weight.
pub trait Weighted {
    fn weight(&self) -> i64;
}

impl Weighted for Page {
    fn weight(&self) -> i64 {
        self.weight
    }
}

impl Weighted for Category {
    fn weight(&self) -> i64 {
        self.weight
    }
}

/// Sort ascending by weight. Equal weights keep their input order.
#[must_use]
pub fn sort_by_weight<T: Weighted>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(Weighted::weight);
    items
}

impl Category {
    /// Build the category for `path` from its fully collected contents.
    ///
    /// Returns `None` when there are neither children nor pages, so empty
    /// subtrees never reach their parent. When one of the pages is the
    /// directory index, its title and weight become the category's and the
    /// page itself is re-weighted to [`INDEX_PAGE_WEIGHT`].
    #[must_use]
    pub fn assemble(
        path: impl Into<PathBuf>,
        run: bool,
        children: Vec<Self>,
        mut pages: Vec<Page>,
    ) -> Option<Self> {
        if children.is_empty() && pages.is_empty() {
            return None;
        }

        let mut title = UNKNOWN_TITLE.to_string();
        let mut weight = 0;
        if let Some(index) = pages.iter_mut().find(|page| page.is_index) {
            title.clone_from(&index.title);
            weight = index.weight;
            index.weight = INDEX_PAGE_WEIGHT;
        }

        Some(Self {
            title,
            weight,
            children: sort_by_weight(children),
            pages: sort_by_weight(pages),
            run,
            path: path.into(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn weight(&self) -> i64 {
        self.weight
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// False when the directory carries a `.notest` sentinel.
    #[must_use]
    pub const fn run(&self) -> bool {
        self.run
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total scripts in this category and every descendant.
    #[must_use]
    pub fn script_count(&self) -> usize {
        self.pages.iter().map(|page| page.scripts.len()).sum::<usize>()
            + self.children.iter().map(Self::script_count).sum::<usize>()
    }

    /// Pages in execution order: own pages first, then each child in turn.
    ///
    /// Each page is paired with the category that owns it.
    #[must_use]
    pub fn walk_pages(&self) -> Vec<(&Self, &Page)> {
        let mut out = Vec::new();
        self.collect_pages(&mut out);
        out
    }

    fn collect_pages<'a>(&'a self, out: &mut Vec<(&'a Self, &'a Page)>) {
        out.extend(self.pages.iter().map(|page| (self, page)));
        for child in &self.children {
            child.collect_pages(out);
        }
    }
}
