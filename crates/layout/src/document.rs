use crate::LayoutError;
use crate::block::Block;
use crate::cache::BlockCache;
use crate::config::LayoutConfig;
use crate::page::Page;
use crate::table::TableBlock;
use std::ops::Range;
use taxsheet_traits::Surface;
use taxsheet_types::{Font, Rect, TextAlign, VerticalAlign};

/// The fixed blocks of one kind of page.
#[derive(Debug, Default)]
pub struct PageTemplate {
    pub top: Vec<Block>,
    pub bottom: Vec<Block>,
}

impl PageTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top(mut self, block: Block) -> Self {
        self.top.push(block);
        self
    }

    pub fn with_bottom(mut self, block: Block) -> Self {
        self.bottom.push(block);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub index: usize,
    /// Table rows printed on this page.
    pub rows: Range<usize>,
}

/// What a document render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub pages: Vec<PageSummary>,
    pub total_rows: usize,
}

impl RenderSummary {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// True when the page ranges cover `0..total_rows` back to back, so every
    /// row was printed exactly once.
    pub fn rows_printed_once(&self) -> bool {
        let mut next = 0;
        for page in &self.pages {
            if page.rows.start != next {
                return false;
            }
            next = page.rows.end;
        }
        next == self.total_rows
    }
}

/// A complete document: first-page blocks, the blocks repeated on every
/// following page, and the table that flows across all of them.
#[derive(Debug)]
pub struct DocumentLayout {
    config: LayoutConfig,
    first_page: PageTemplate,
    continuation: PageTemplate,
    table: TableBlock,
}

impl DocumentLayout {
    pub fn new(
        config: LayoutConfig,
        first_page: PageTemplate,
        continuation: PageTemplate,
        table: TableBlock,
    ) -> Self {
        Self {
            config,
            first_page,
            continuation,
            table,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn table(&self) -> &TableBlock {
        &self.table
    }

    /// Renders pages until every table row is printed. At least one page is
    /// always produced, even for an empty table.
    pub fn render(&mut self, surface: &mut dyn Surface) -> Result<RenderSummary, LayoutError> {
        let total = self.table.row_count();
        let mut cache = BlockCache::new();
        let mut pages = Vec::new();
        let mut cursor = 0;

        loop {
            let index = pages.len();
            let template = if index == 0 {
                &mut self.first_page
            } else {
                &mut self.continuation
            };

            let mut page = Page::new(&self.config);
            for block in template.top.iter_mut() {
                page.add_top(block);
            }
            for block in template.bottom.iter_mut() {
                page.add_bottom(block);
            }
            let footer = page.inner_area();
            let free = page.render(surface, &mut cache)?;

            let end = if free.has_positive_size() {
                self.table.render_page(surface, free, cursor, index > 0)?
            } else if cursor < total {
                return Err(LayoutError::PaginationNoProgress {
                    row: cursor,
                    available: free.height,
                });
            } else {
                cursor
            };
            if end == cursor && cursor < total {
                return Err(LayoutError::PaginationNoProgress {
                    row: cursor,
                    available: free.height,
                });
            }

            self.draw_page_number(surface, footer, index)?;
            log::debug!(
                "Page {}: rows {}..{}, table area {:.2}pt",
                index + 1,
                cursor,
                end,
                free.height
            );
            pages.push(PageSummary {
                index,
                rows: cursor..end,
            });

            cursor = end;
            if cursor >= total {
                break;
            }
        }

        log::info!(
            "Rendered {} page(s), {} table row(s), {} cached block(s)",
            pages.len(),
            total,
            cache.len()
        );
        Ok(RenderSummary {
            pages,
            total_rows: total,
        })
    }

    fn draw_page_number(
        &self,
        surface: &mut dyn Surface,
        inner: Rect,
        index: usize,
    ) -> Result<(), LayoutError> {
        let Some(label) = &self.config.page_number_label else {
            return Ok(());
        };
        let margin = self.config.page_margins.bottom;
        if margin <= 0.0 {
            return Ok(());
        }
        surface.draw_text(
            &format!("{} {}", label, index + 1),
            Rect::new(inner.x, inner.bottom(), inner.width, margin),
            Font::Regular,
            self.config.page_number_font_size,
            TextAlign::Right,
            VerticalAlign::Middle,
        )?;
        Ok(())
    }
}
