use dioxus::prelude::*;

/// Pages shown in full before the list is collapsed with ellipses.
const MAX_INLINE_PAGES: u32 = 7;

/// One slot of the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page buttons for `current` of `count` pages: first, last, and the
/// neighbours of `current`, with gaps collapsed to an ellipsis.
pub fn page_items(current: u32, count: u32) -> Vec<PageItem> {
    if count <= MAX_INLINE_PAGES {
        return (1..=count).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, count);
    let (start, end) = if current <= 4 {
        (2, 5)
    } else if current >= count - 3 {
        (count - 4, count - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < count - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(count));
    items
}

#[component]
pub fn Pagination(page: u32, page_count: u32, on_change: EventHandler<u32>) -> Element {
    if page_count == 0 {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "pagination-item",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "‹"
            }
            for (i, item) in page_items(page, page_count).into_iter().enumerate() {
                match item {
                    PageItem::Page(n) => rsx! {
                        button {
                            key: "page-{n}",
                            class: if n == page { "pagination-item active" } else { "pagination-item" },
                            onclick: move |_| {
                                if n != page {
                                    on_change.call(n);
                                }
                            },
                            "{n}"
                        }
                    },
                    PageItem::Ellipsis => rsx! {
                        span { key: "gap-{i}", class: "pagination-gap", "…" }
                    },
                }
            }
            button {
                class: "pagination-item",
                disabled: page >= page_count,
                onclick: move |_| on_change.call(page + 1),
                "›"
            }
        }
    }
}
