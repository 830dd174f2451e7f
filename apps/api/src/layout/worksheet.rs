//! Worksheet layout plan — the finished page/region/cell structure handed to the
//! rendering and export collaborator.
//!
//! Pipeline: paginate → number each problem globally → place cells into regions
//! (one grid region on the standard template, three stacked regions on the
//! triple-column template) → attach answers and division work where requested.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;
use crate::generation::arithmetic::{Operator, Problem};
use crate::generation::long_division::{long_division, LongDivision};
use crate::generation::practice::WorksheetMode;
use crate::layout::pagination::{paginate, split_into_three_groups, split_round_robin};
use crate::layout::paper::{PageSize, PaperDimensions, PaperTemplate};

// ────────────────────────────────────────────────────────────────────────────
// Options
// ────────────────────────────────────────────────────────────────────────────

/// How vertical division problems are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionMode {
    /// Full long-division procedure.
    #[default]
    Long,
    /// Quotient (and remainder) only.
    Simple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Problems per page. Defaults to 60 for oral sheets, 24 for vertical ones.
    pub per_page: Option<usize>,
    /// Grid columns inside a region. Defaults to 4 for oral sheets, 2 for vertical ones.
    pub columns: Option<usize>,
    pub page_size: PageSize,
    pub template: PaperTemplate,
    /// Triple-column only: balanced contiguous regions instead of round-robin.
    pub equal_height: bool,
    pub show_numbers: bool,
    pub column_separators: bool,
    pub show_answers: bool,
    pub division_mode: DivisionMode,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            per_page: None,
            columns: None,
            page_size: PageSize::default(),
            template: PaperTemplate::default(),
            equal_height: true,
            show_numbers: true,
            column_separators: true,
            show_answers: false,
            division_mode: DivisionMode::default(),
        }
    }
}

impl LayoutOptions {
    pub fn per_page_for(&self, mode: WorksheetMode) -> usize {
        self.per_page.unwrap_or(match mode {
            WorksheetMode::Oral => 60,
            WorksheetMode::Vertical => 24,
        })
    }

    pub fn columns_for(&self, mode: WorksheetMode) -> usize {
        self.columns.unwrap_or(match mode {
            WorksheetMode::Oral => 4,
            WorksheetMode::Vertical => 2,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorksheetLayout {
    pub page_size: PageSize,
    pub dimensions: PaperDimensions,
    pub template: PaperTemplate,
    pub columns: usize,
    pub per_page: usize,
    pub pages: Vec<PageLayout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    /// 1-based page number.
    pub index: usize,
    /// One region on the standard template, three on the triple-column template.
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Worksheet-wide problem number, present when numbering is on.
    pub number: Option<usize>,
    pub problem: Problem,
    pub answer: Option<i128>,
    /// Draw a separator on the right edge of this cell.
    pub column_separator: bool,
    pub division: Option<DivisionWork>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DivisionWork {
    Long(LongDivision),
    Simple { quotient: u64, remainder: u64 },
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Lays out `problems` for printing.
///
/// Global numbers run `(page - 1) × per_page + position + 1`, where `position` is the
/// problem's place in page order. Round-robin regions therefore show numbers that
/// step by three down each region.
pub fn build_layout(
    problems: &[Problem],
    mode: WorksheetMode,
    options: &LayoutOptions,
) -> Result<WorksheetLayout, ConfigError> {
    let per_page = options.per_page_for(mode);
    let columns = options.columns_for(mode);
    if columns == 0 {
        return Err(ConfigError::ZeroColumns);
    }

    let pages: Vec<PageLayout> = paginate(problems, per_page)?
        .into_iter()
        .map(|page| {
            let numbered: Vec<(usize, Problem)> = page
                .items
                .into_iter()
                .enumerate()
                .map(|(position, problem)| ((page.index - 1) * per_page + position + 1, problem))
                .collect();

            let groups: Vec<Vec<(usize, Problem)>> = match options.template {
                PaperTemplate::Standard => vec![numbered],
                PaperTemplate::TripleColumn if options.equal_height => {
                    split_into_three_groups(&numbered)
                        .iter()
                        .map(|group| group.to_vec())
                        .collect()
                }
                PaperTemplate::TripleColumn => split_round_robin(&numbered).into(),
            };

            PageLayout {
                index: page.index,
                regions: groups
                    .into_iter()
                    .map(|group| place_region(group, columns, mode, options))
                    .collect(),
            }
        })
        .collect();

    debug!(
        "Laid out {} problems on {} {:?} pages ({:?})",
        problems.len(),
        pages.len(),
        options.page_size,
        options.template
    );

    Ok(WorksheetLayout {
        page_size: options.page_size,
        dimensions: options.page_size.dimensions(),
        template: options.template,
        columns,
        per_page,
        pages,
    })
}

fn place_region(
    group: Vec<(usize, Problem)>,
    columns: usize,
    mode: WorksheetMode,
    options: &LayoutOptions,
) -> Region {
    let cells = group
        .into_iter()
        .enumerate()
        .map(|(i, (number, problem))| Cell {
            number: options.show_numbers.then_some(number),
            problem,
            answer: options.show_answers.then_some(problem.ans()),
            column_separator: options.column_separators && i % columns != columns - 1,
            division: division_work(&problem, mode, options),
        })
        .collect();
    Region { cells }
}

/// Only vertical division gets written work. The long procedure is the worked
/// layout itself and is always attached; the simple form is just the answer.
fn division_work(
    problem: &Problem,
    mode: WorksheetMode,
    options: &LayoutOptions,
) -> Option<DivisionWork> {
    if mode != WorksheetMode::Vertical || problem.op() != Operator::Div {
        return None;
    }
    let trace = long_division(u64::from(problem.a()), u64::from(problem.b()));
    match options.division_mode {
        DivisionMode::Long => Some(DivisionWork::Long(trace)),
        DivisionMode::Simple if options.show_answers => Some(DivisionWork::Simple {
            quotient: trace.quotient,
            remainder: trace.remainder,
        }),
        DivisionMode::Simple => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
