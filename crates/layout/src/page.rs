use crate::LayoutError;
use crate::block::Block;
use crate::cache::BlockCache;
use crate::config::LayoutConfig;
use crate::util::{EPSILON, ensure_within};
use taxsheet_traits::Surface;
use taxsheet_types::{Insets, Rect, Size};

/// One physical page: a stack of blocks pinned to the top of the inner area
/// and another pinned to its bottom.
///
/// Top blocks run downward in insertion order. Bottom blocks run upward in
/// reverse insertion order, so the last one added sits at the very bottom.
#[derive(Debug)]
pub struct Page<'a> {
    size: Size,
    margins: Insets,
    top: Vec<&'a mut Block>,
    bottom: Vec<&'a mut Block>,
}

impl<'a> Page<'a> {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            size: config.page_size,
            margins: config.page_margins,
            top: Vec::new(),
            bottom: Vec::new(),
        }
    }

    pub fn add_top(&mut self, block: &'a mut Block) {
        self.top.push(block);
    }

    pub fn add_bottom(&mut self, block: &'a mut Block) {
        self.bottom.push(block);
    }

    /// The page inside its margins.
    pub fn inner_area(&self) -> Rect {
        Rect::from_size(self.size).pad(self.margins)
    }

    /// Opens the page, embeds every block and returns the free area left
    /// between the two stacks.
    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        cache: &mut BlockCache,
    ) -> Result<Rect, LayoutError> {
        let inner = self.inner_area();
        surface.begin_page(self.size)?;

        let mut top = inner.y;
        for block in self.top.iter_mut() {
            let rendered = block.render(surface, cache)?;
            let rect = Rect::new(inner.x, top, rendered.size.width, rendered.size.height);
            ensure_within(rect, inner, &format!("block '{}'", block.id()))?;
            surface.embed_object(rendered.handle, rect)?;
            top = rect.bottom();
        }

        let mut bottom = inner.bottom();
        for block in self.bottom.iter_mut().rev() {
            let rendered = block.render(surface, cache)?;
            let rect = Rect::new(
                inner.x,
                bottom - rendered.size.height,
                rendered.size.width,
                rendered.size.height,
            );
            ensure_within(rect, inner, &format!("block '{}'", block.id()))?;
            surface.embed_object(rendered.handle, rect)?;
            bottom = rect.y;
        }

        if top > bottom + EPSILON {
            return Err(LayoutError::InvalidGeometry(format!(
                "top blocks end at {:.2} but bottom blocks start at {:.2}",
                top, bottom
            )));
        }
        Ok(Rect::new(inner.x, top, inner.width, (bottom - top).max(0.0)))
    }
}
