use crate::types::{DrawCommand, ObjectContent, PageContent};
use std::collections::BTreeMap;
use taxsheet_traits::{ObjectHandle, Surface, SurfaceError, TextMeasure};
use taxsheet_types::{Font, Point, Rect, Size, TextAlign, VerticalAlign};

/// An in-memory [`Surface`] that records every call.
///
/// Pages and reusable objects are kept as plain command lists so a caller can
/// inspect the result, replay it into a real writer, or compare two renders.
#[derive(Debug)]
pub struct DisplayList<M> {
    metrics: M,
    pages: Vec<PageContent>,
    objects: BTreeMap<ObjectHandle, ObjectContent>,
    recording: Option<ObjectHandle>,
    next_object: u32,
}

impl<M: TextMeasure> DisplayList<M> {
    pub fn new(metrics: M) -> Self {
        Self {
            metrics,
            pages: Vec::new(),
            objects: BTreeMap::new(),
            recording: None,
            next_object: 1,
        }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&ObjectContent> {
        self.objects.get(&handle)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Every text string visible on `page_index`, following embedded objects.
    pub fn page_texts(&self, page_index: usize) -> Vec<&str> {
        let mut out = Vec::new();
        if let Some(page) = self.pages.get(page_index) {
            self.collect_texts(&page.commands, &mut out);
        }
        out
    }

    /// True if any text on the page contains `needle`.
    pub fn page_contains_text(&self, page_index: usize, needle: &str) -> bool {
        self.page_texts(page_index)
            .iter()
            .any(|text| text.contains(needle))
    }

    fn collect_texts<'a>(&'a self, commands: &'a [DrawCommand], out: &mut Vec<&'a str>) {
        for command in commands {
            match command {
                DrawCommand::Text { text, .. } => out.push(text),
                DrawCommand::Embed { handle, .. } => {
                    if let Some(object) = self.objects.get(handle) {
                        self.collect_texts(&object.commands, out);
                    }
                }
                _ => {}
            }
        }
    }

    fn target(&mut self) -> Result<&mut Vec<DrawCommand>, SurfaceError> {
        if let Some(handle) = self.recording {
            return self
                .objects
                .get_mut(&handle)
                .map(|object| &mut object.commands)
                .ok_or(SurfaceError::UnknownObject(handle.0));
        }
        self.pages
            .last_mut()
            .map(|page| &mut page.commands)
            .ok_or(SurfaceError::NoOpenPage)
    }

    fn push(&mut self, command: DrawCommand) -> Result<(), SurfaceError> {
        self.target()?.push(command);
        Ok(())
    }
}

impl<M: TextMeasure> TextMeasure for DisplayList<M> {
    fn text_width(&self, text: &str, font: Font, size: f32) -> f32 {
        self.metrics.text_width(text, font, size)
    }

    fn line_height(&self, font: Font, size: f32) -> f32 {
        self.metrics.line_height(font, size)
    }
}

impl<M: TextMeasure> Surface for DisplayList<M> {
    fn as_measure(&self) -> &dyn TextMeasure {
        self
    }

    fn begin_page(&mut self, size: Size) -> Result<(), SurfaceError> {
        if let Some(handle) = self.recording {
            return Err(SurfaceError::ObjectNotFinished(handle.0));
        }
        log::debug!(
            "Display list: page {} ({:.2} x {:.2})",
            self.pages.len() + 1,
            size.width,
            size.height
        );
        self.pages.push(PageContent {
            size,
            commands: Vec::new(),
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        rect: Rect,
        font: Font,
        size: f32,
        align: TextAlign,
        valign: VerticalAlign,
    ) -> Result<(), SurfaceError> {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            rect,
            font,
            size,
            align,
            valign,
        })
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32) -> Result<(), SurfaceError> {
        self.push(DrawCommand::StrokeRect { rect, line_width })
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.push(DrawCommand::FillRect { rect })
    }

    fn draw_dashed_line(
        &mut self,
        from: Point,
        to: Point,
        pattern: &[f32],
        line_width: f32,
    ) -> Result<(), SurfaceError> {
        self.push(DrawCommand::DashedLine {
            from,
            to,
            pattern: pattern.to_vec(),
            line_width,
        })
    }

    fn create_object(&mut self, size: Size) -> Result<ObjectHandle, SurfaceError> {
        if let Some(handle) = self.recording {
            return Err(SurfaceError::ObjectNotFinished(handle.0));
        }
        let handle = ObjectHandle(self.next_object);
        self.next_object += 1;
        self.objects.insert(
            handle,
            ObjectContent {
                size,
                commands: Vec::new(),
                finished: false,
            },
        );
        self.recording = Some(handle);
        Ok(handle)
    }

    fn finish_object(&mut self, handle: ObjectHandle) -> Result<(), SurfaceError> {
        match self.recording {
            Some(current) if current == handle => {
                if let Some(object) = self.objects.get_mut(&handle) {
                    object.finished = true;
                }
                self.recording = None;
                Ok(())
            }
            Some(current) => Err(SurfaceError::ObjectMismatch {
                expected: handle.0,
                found: current.0,
            }),
            None => Err(SurfaceError::UnknownObject(handle.0)),
        }
    }

    fn embed_object(&mut self, handle: ObjectHandle, rect: Rect) -> Result<(), SurfaceError> {
        match self.objects.get(&handle) {
            None => return Err(SurfaceError::UnknownObject(handle.0)),
            Some(object) if !object.finished => {
                return Err(SurfaceError::ObjectNotFinished(handle.0));
            }
            Some(_) => {}
        }
        self.push(DrawCommand::Embed { handle, rect })
    }
}
