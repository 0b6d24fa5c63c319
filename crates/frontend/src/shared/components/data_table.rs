//! Remote-paginated data table
//!
//! The table owns its paging and search state; the page owns the data. On
//! every state change the table emits `FetchParams` through `on_fetch` and
//! the page writes the response back into the `rows`/`total_*` signals.

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::{debounce, SearchInput};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Trailing-edge delay between the last keystroke and the search fetch.
pub const SEARCH_DEBOUNCE_MS: i32 = 500;

/// One request to the page's data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub page_index: usize,
    pub page_size: usize,
    pub query: String,
}

/// What the table should do after its reactive state changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDecision {
    /// The query changed while not on the first page. Jump to page 0 first;
    /// the state change re-enters the resolver, which then fetches exactly
    /// once for the new query.
    ResetPage,
    Fetch(FetchParams),
}

/// Decide between resetting the page and fetching.
///
/// A changed query must always show page 0 of the new result set, and a
/// query change plus page reset must produce a single request, not two.
pub fn resolve_fetch(
    prev_query: &str,
    query: &str,
    page_index: usize,
    page_size: usize,
) -> FetchDecision {
    if query != prev_query && page_index != 0 {
        return FetchDecision::ResetPage;
    }
    FetchDecision::Fetch(FetchParams {
        page_index,
        page_size,
        query: query.to_string(),
    })
}

/// Column definition: a header and a cell renderer.
#[derive(Clone)]
pub struct Column<Row> {
    pub header: &'static str,
    pub cell: Arc<dyn Fn(&Row) -> AnyView + Send + Sync>,
}

impl<Row> Column<Row> {
    pub fn new(
        header: &'static str,
        cell: impl Fn(&Row) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            header,
            cell: Arc::new(cell),
        }
    }
}

#[component]
pub fn DataTable<Row: Clone + Send + Sync + 'static>(
    columns: Vec<Column<Row>>,

    /// Current page of rows, written by the owner after each fetch
    #[prop(into)]
    rows: Signal<Vec<Row>>,

    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_elements: Signal<usize>,
    #[prop(into)] is_loading: Signal<bool>,

    /// Called whenever the table needs data
    on_fetch: Callback<FetchParams>,

    /// Owners notify this after a mutation; the table refetches with its
    /// current page, size and query
    #[prop(optional, into)]
    reload: Option<Trigger>,

    #[prop(optional, into)] search_placeholder: String,

    #[prop(optional, into)] on_row_click: Option<Callback<Row>>,

    /// When set, page/page-size/query survive reloads via localStorage
    #[prop(optional, into)]
    state_key: Option<&'static str>,
) -> impl IntoView {
    let column_count = columns.len();
    let columns = StoredValue::new(columns);

    let initial = state_key
        .map(crate::shared::list_utils::load_list_state)
        .unwrap_or_default();

    let page_index = RwSignal::new(initial.page);
    let page_size = RwSignal::new(initial.page_size);

    // raw input vs committed query: the fetch effect only sees the latter
    let input = RwSignal::new(initial.query.clone());
    let query = RwSignal::new(initial.query.clone());
    // seeded with the restored query so the mount fetch keeps the saved page
    let prev_query = StoredValue::new(initial.query);
    let debounce_slot = StoredValue::new(None::<i32>);

    let input_first_run = StoredValue::new(true);
    Effect::new(move |_| {
        let text = input.get();
        if input_first_run.get_value() {
            input_first_run.set_value(false);
            return;
        }
        debounce(debounce_slot, SEARCH_DEBOUNCE_MS, move || {
            query.set(text.clone());
        });
    });

    // The single source of requests. Runs on mount and on every change to
    // query, page index or page size.
    Effect::new(move |_| {
        if let Some(reload) = reload {
            reload.track();
        }
        let q = query.get();
        let index = page_index.get();
        let size = page_size.get();
        match resolve_fetch(&prev_query.get_value(), &q, index, size) {
            FetchDecision::ResetPage => {
                page_index.set(0);
            }
            FetchDecision::Fetch(params) => {
                prev_query.set_value(q);
                if let Some(key) = state_key {
                    crate::shared::list_utils::save_list_state(
                        key,
                        &crate::shared::list_utils::ListState {
                            page: params.page_index,
                            page_size: params.page_size,
                            query: params.query.clone(),
                        },
                    );
                }
                on_fetch.run(params);
            }
        }
    });

    let body = move || {
        if is_loading.get() {
            return (0..5)
                .map(|_| {
                    view! {
                        <tr>
                            <td colspan=column_count style="padding: 10px 12px;">
                                <div style="height: 14px; background: #eee; border-radius: 4px; animation: pulse 1.2s ease-in-out infinite;"></div>
                            </td>
                        </tr>
                    }
                    .into_any()
                })
                .collect_view()
                .into_any();
        }

        let current = rows.get();
        if current.is_empty() {
            return view! {
                <tr>
                    <td colspan=column_count style="padding: 24px; text-align: center; color: #888;">
                        "No results."
                    </td>
                </tr>
            }
            .into_any();
        }

        current
            .into_iter()
            .map(|row| {
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| {
                            let rendered = (col.cell)(&row);
                            view! {
                                <TableCell>
                                    <TableCellLayout>{rendered}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view()
                });
                let row_class = if on_row_click.is_some() {
                    "data-table__row data-table__row--clickable"
                } else {
                    "data-table__row"
                };
                view! {
                    <TableRow
                        class=row_class
                        on:click=move |_| {
                            if let Some(cb) = on_row_click {
                                cb.run(row.clone());
                            }
                        }
                    >
                        {cells}
                    </TableRow>
                }
                .into_any()
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="data-table">
            <div class="data-table__toolbar" style="margin-bottom: 10px;">
                <SearchInput
                    value=Signal::derive(move || input.get())
                    on_change=Callback::new(move |v| input.set(v))
                    placeholder=search_placeholder
                />
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        {columns.with_value(|cols| {
                            cols.iter()
                                .map(|col| {
                                    // owned copy: component children outlive the &Column
                                    let header = col.header;
                                    view! {
                                        <TableHeaderCell>{header}</TableHeaderCell>
                                    }
                                })
                                .collect_view()
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
            <PaginationControls
                current_page=page_index
                total_pages=total_pages
                total_count=total_elements
                page_size=page_size
                on_page_change=Callback::new(move |page| page_index.set(page))
                on_page_size_change=Callback::new(move |size| {
                    page_size.set(size);
                    page_index.set(0);
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_query_fetches_current_page() {
        let decision = resolve_fetch("", "", 2, 10);
        assert_eq!(
            decision,
            FetchDecision::Fetch(FetchParams {
                page_index: 2,
                page_size: 10,
                query: String::new(),
            })
        );
    }

    #[test]
    fn changed_query_off_first_page_resets_before_fetching() {
        assert_eq!(resolve_fetch("", "dell", 3, 10), FetchDecision::ResetPage);
        // after the reset the resolver runs again and fetches page 0 once
        assert_eq!(
            resolve_fetch("", "dell", 0, 10),
            FetchDecision::Fetch(FetchParams {
                page_index: 0,
                page_size: 10,
                query: "dell".to_string(),
            })
        );
    }

    #[test]
    fn changed_query_on_first_page_fetches_directly() {
        assert_eq!(
            resolve_fetch("dell", "hp", 0, 20),
            FetchDecision::Fetch(FetchParams {
                page_index: 0,
                page_size: 20,
                query: "hp".to_string(),
            })
        );
    }

    #[test]
    fn refetch_after_mutation_keeps_page_size_and_query() {
        // a reload notification re-enters the resolver with unchanged state,
        // so the request must carry the table's current params
        assert_eq!(
            resolve_fetch("dell", "dell", 3, 50),
            FetchDecision::Fetch(FetchParams {
                page_index: 3,
                page_size: 50,
                query: "dell".to_string(),
            })
        );
    }

    #[test]
    fn clearing_the_query_behaves_like_any_other_change() {
        assert_eq!(resolve_fetch("hp", "", 4, 10), FetchDecision::ResetPage);
        assert_eq!(
            resolve_fetch("hp", "", 0, 10),
            FetchDecision::Fetch(FetchParams {
                page_index: 0,
                page_size: 10,
                query: String::new(),
            })
        );
    }
}
