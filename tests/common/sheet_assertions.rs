/// Asserts the number of pages in a display list.
#[macro_export]
macro_rules! assert_page_count {
    ($surface:expr, $expected:expr) => {
        assert_eq!(
            $surface.page_count(),
            $expected,
            "expected {} page(s), got {}",
            $expected,
            $surface.page_count()
        );
    };
}

/// Asserts that a page shows `text`, including text inside embedded blocks.
#[macro_export]
macro_rules! assert_page_contains_text {
    ($surface:expr, $page:expr, $text:expr) => {
        assert!(
            $surface.page_contains_text($page, $text),
            "page {} does not contain {:?}; it has {:?}",
            $page,
            $text,
            $surface.page_texts($page)
        );
    };
}

#[macro_export]
macro_rules! assert_page_lacks_text {
    ($surface:expr, $page:expr, $text:expr) => {
        assert!(
            !$surface.page_contains_text($page, $text),
            "page {} unexpectedly contains {:?}",
            $page,
            $text
        );
    };
}
