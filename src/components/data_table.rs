//! Responsive Data Table
//!
//! One column specification drives two layouts: a header+rows table for
//! wide viewports and a card list for narrow ones (visibility is swapped
//! in CSS). Both render the same bounded slice of the collection, keyed by
//! a stable extractor, so unrelated state changes do not reprocess rows.

use std::sync::Arc;

use leptos::prelude::*;

/// Rows rendered per table; the rest of the collection is truncated
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// First `page_size` items of the collection
pub fn page_slice<T>(items: &[T], page_size: usize) -> &[T] {
    &items[..items.len().min(page_size)]
}

pub type RenderFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// One column: stable key, localized header, cell renderer
pub struct TableColumn<T> {
    pub key: &'static str,
    pub header: Signal<String>,
    render: RenderFn<T>,
}

impl<T> TableColumn<T> {
    pub fn new(
        key: &'static str,
        header: Signal<String>,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            header,
            render: Arc::new(render),
        }
    }

    /// Plain text cell from a field extractor
    pub fn text(
        key: &'static str,
        header: Signal<String>,
        extract: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(key, header, move |item| extract(item).into_any())
    }
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            render: Arc::clone(&self.render),
        }
    }
}

/// Build the card renderer prop from a closure
pub fn card_renderer<T>(render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> RenderFn<T> {
    Arc::new(render)
}

#[component]
pub fn DataTable<T>(
    #[prop(into)] items: Signal<Vec<T>>,
    columns: Vec<TableColumn<T>>,
    render_card: RenderFn<T>,
    key: fn(&T) -> i64,
    #[prop(default = DEFAULT_PAGE_SIZE)] page_size: usize,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    // Shared slice; both layouts and the row counter read it
    let rows = Memo::new(move |_| page_slice(&items.get(), page_size).to_vec());
    let total = Memo::new(move |_| items.get().len());

    let header_columns = columns.clone();
    let body_columns = columns;

    view! {
        // Narrow viewport: one card per item
        <div class="mobile-cards">
            <For
                each=move || rows.get()
                key=move |item| key(item)
                children=move |item| {
                    let card = render_card(&item);
                    view! { <div class="mobile-card">{card}</div> }
                }
            />
        </div>

        // Wide viewport: header + rows
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        {header_columns
                            .iter()
                            .map(|column| {
                                let header = column.header;
                                view! { <th>{move || header.get()}</th> }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=move |item| key(item)
                        children=move |item| {
                            let cells = body_columns
                                .iter()
                                .map(|column| {
                                    let cell = (column.render)(&item);
                                    view! { <td>{cell}</td> }
                                })
                                .collect_view();
                            view! { <tr>{cells}</tr> }
                        }
                    />
                </tbody>
            </table>
        </div>

        <p class="row-count">{move || format!("{} / {}", rows.get().len(), total.get())}</p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_slice_caps_at_page_size() {
        let items: Vec<i32> = (0..120).collect();
        let sliced = page_slice(&items, DEFAULT_PAGE_SIZE);
        assert_eq!(sliced.len(), 50);
        assert_eq!(sliced[0], 0);
        assert_eq!(sliced[49], 49);
    }

    #[test]
    fn test_page_slice_short_collection_is_untouched() {
        let items = vec![1, 2, 3];
        assert_eq!(page_slice(&items, DEFAULT_PAGE_SIZE), &[1, 2, 3]);
    }

    #[test]
    fn test_page_slice_empty() {
        let items: Vec<i32> = Vec::new();
        assert!(page_slice(&items, DEFAULT_PAGE_SIZE).is_empty());
    }
}
